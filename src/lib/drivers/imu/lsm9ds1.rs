// LSM9DS1 IMU driver (I2C)
// Datasheet: https://www.st.com/resource/en/datasheet/lsm9ds1.pdf
// Default configuration matches the SparkFun LSM9DS1 Arduino library

pub use crate::drivers::imu::lsm9ds1_constants::*;

use crate::acquisition::sensor::{Axes, Channel, NineAxisSensor};
use embedded_hal::blocking::i2c::{Write, WriteRead};
use log::debug;

// Error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    I2cError,
    WrongID,
    MagWrongID,
}

#[derive(Default)]
struct AGMData {
    accel: Axes<i16>,
    gyro: Axes<i16>,
    mag: Axes<i16>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub accel_fss: AccelFullScaleSel,
    pub accel_odr: AccelOdrSel,
    pub gyro_fss: GyroFullScaleSel,
    pub gyro_odr: GyroOdrSel,
    pub mag_fss: MagFullScaleSel,
    pub mag_odr: MagOdrSel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            accel_fss: AccelFullScaleSel::Gpm2,
            accel_odr: AccelOdrSel::Hz952,
            gyro_fss: GyroFullScaleSel::Dps245,
            gyro_odr: GyroOdrSel::Hz952,
            mag_fss: MagFullScaleSel::Gauss4,
            mag_odr: MagOdrSel::Hz80,
        }
    }
}

pub struct LSM9DS1<I2C> {
    i2c: I2C,
    xg_addr: u8,
    mag_addr: u8,
    settings: Settings,
    raw_agm: AGMData,
}

impl<I2C, E> LSM9DS1<I2C>
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
{
    // accel/gyro at 0x6B, mag at 0x1E (breakout board jumpers untouched)
    pub fn new(i2c: I2C, settings: Settings) -> Self {
        Self::with_addresses(i2c, settings, DEFAULT_XG_I2C_ADDR, DEFAULT_MAG_I2C_ADDR)
    }

    pub fn with_addresses(i2c: I2C, settings: Settings, xg_addr: u8, mag_addr: u8) -> Self {
        Self {
            i2c,
            xg_addr,
            mag_addr,
            settings,
            raw_agm: AGMData::default(),
        }
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    pub fn init(&mut self) -> Result<(), ErrorCode> {
        self.check_id()?;
        self.config_gyro()?;
        self.config_accel()?;
        self.config_mag()?;
        debug!("lsm9ds1 configured: {:?}", self.settings);
        Ok(())
    }

    pub fn gyro_available(&mut self) -> Result<bool, ErrorCode> {
        let status = self.read_byte(self.xg_addr, RegAddrXG::StatusReg as u8)?;
        Ok((status & StatusRegBits::GyroDataAvailable as u8) != 0)
    }

    pub fn accel_available(&mut self) -> Result<bool, ErrorCode> {
        let status = self.read_byte(self.xg_addr, RegAddrXG::StatusReg as u8)?;
        Ok((status & StatusRegBits::AccelDataAvailable as u8) != 0)
    }

    pub fn mag_available(&mut self) -> Result<bool, ErrorCode> {
        let status = self.read_byte(self.mag_addr, RegAddrMag::StatusRegM as u8)?;
        Ok((status & StatusRegMBits::ZYXDataAvailable as u8) != 0)
    }

    pub fn read_gyro(&mut self) -> Result<(), ErrorCode> {
        self.raw_agm.gyro = self.read_axes(self.xg_addr, RegAddrXG::OutXLG as u8)?;
        Ok(())
    }

    pub fn read_accel(&mut self) -> Result<(), ErrorCode> {
        self.raw_agm.accel = self.read_axes(self.xg_addr, RegAddrXG::OutXLXL as u8)?;
        Ok(())
    }

    pub fn read_mag(&mut self) -> Result<(), ErrorCode> {
        self.raw_agm.mag =
            self.read_axes(self.mag_addr, RegAddrMag::OutXLM as u8 | MAG_AUTO_INCREMENT)?;
        Ok(())
    }

    pub fn raw_gyro(&self) -> Axes<i16> {
        self.raw_agm.gyro
    }

    pub fn raw_accel(&self) -> Axes<i16> {
        self.raw_agm.accel
    }

    pub fn raw_mag(&self) -> Axes<i16> {
        self.raw_agm.mag
    }

    // angular rate in degrees per second
    pub fn calc_gyro(&self, raw: i16) -> f32 {
        match self.settings.gyro_fss {
            GyroFullScaleSel::Dps245 => (raw as f32) * GYRO_SENSITIVITY_DPS245,
            GyroFullScaleSel::Dps500 => (raw as f32) * GYRO_SENSITIVITY_DPS500,
            GyroFullScaleSel::Dps2000 => (raw as f32) * GYRO_SENSITIVITY_DPS2000,
        }
    }

    // linear acceleration in g
    pub fn calc_accel(&self, raw: i16) -> f32 {
        match self.settings.accel_fss {
            AccelFullScaleSel::Gpm2 => (raw as f32) * ACCEL_SENSITIVITY_GPM2,
            AccelFullScaleSel::Gpm4 => (raw as f32) * ACCEL_SENSITIVITY_GPM4,
            AccelFullScaleSel::Gpm8 => (raw as f32) * ACCEL_SENSITIVITY_GPM8,
            AccelFullScaleSel::Gpm16 => (raw as f32) * ACCEL_SENSITIVITY_GPM16,
        }
    }

    // magnetic field in gauss
    pub fn calc_mag(&self, raw: i16) -> f32 {
        match self.settings.mag_fss {
            MagFullScaleSel::Gauss4 => (raw as f32) * MAG_SENSITIVITY_GAUSS4,
            MagFullScaleSel::Gauss8 => (raw as f32) * MAG_SENSITIVITY_GAUSS8,
            MagFullScaleSel::Gauss12 => (raw as f32) * MAG_SENSITIVITY_GAUSS12,
            MagFullScaleSel::Gauss16 => (raw as f32) * MAG_SENSITIVITY_GAUSS16,
        }
    }

    fn check_id(&mut self) -> Result<(), ErrorCode> {
        let xg_whoami = self.read_byte(self.xg_addr, RegAddrXG::WhoAmI as u8)?;
        if xg_whoami != XG_WHO_AM_I {
            return Err(ErrorCode::WrongID);
        }
        let mag_whoami = self.read_byte(self.mag_addr, RegAddrMag::WhoAmI as u8)?;
        if mag_whoami != MAG_WHO_AM_I {
            return Err(ErrorCode::MagWrongID);
        }
        Ok(())
    }

    fn config_gyro(&mut self) -> Result<(), ErrorCode> {
        // CTRL_REG1_G:
        // Bits:     |  7:5   |   4:3   |  2  |  1:0 |
        // Function: | ODR_G  |  FS_G   |  -  |  BW_G |
        let ctrl1 = ((self.settings.gyro_odr as u8) << 5) | ((self.settings.gyro_fss as u8) << 3);
        self.write_byte(self.xg_addr, RegAddrXG::CtrlReg1G as u8, ctrl1)?;
        self.write_byte(self.xg_addr, RegAddrXG::CtrlReg2G as u8, 0x00)?;
        self.write_byte(self.xg_addr, RegAddrXG::CtrlReg3G as u8, 0x00)?; // no low power, no HPF
        self.write_byte(self.xg_addr, RegAddrXG::CtrlReg4 as u8, CTRL_REG4_GYRO_XYZ_EN)?;
        Ok(())
    }

    fn config_accel(&mut self) -> Result<(), ErrorCode> {
        self.write_byte(self.xg_addr, RegAddrXG::CtrlReg5XL as u8, CTRL_REG5_XL_ACCEL_XYZ_EN)?;

        // CTRL_REG6_XL:
        // Bits:     |  7:5    |  4:3   |     2     |   1:0   |
        // Function: | ODR_XL  | FS_XL  | BW_SCAL   |  BW_XL  |
        let ctrl6 =
            ((self.settings.accel_odr as u8) << 5) | ((self.settings.accel_fss as u8) << 3);
        self.write_byte(self.xg_addr, RegAddrXG::CtrlReg6XL as u8, ctrl6)?;
        self.write_byte(self.xg_addr, RegAddrXG::CtrlReg7XL as u8, 0x00)?; // no HR mode
        Ok(())
    }

    fn config_mag(&mut self) -> Result<(), ErrorCode> {
        let ctrl1 = CTRL_REG1_M_XY_ULTRA_HIGH | ((self.settings.mag_odr as u8) << 2);
        self.write_byte(self.mag_addr, RegAddrMag::CtrlReg1M as u8, ctrl1)?;
        self.write_byte(
            self.mag_addr,
            RegAddrMag::CtrlReg2M as u8,
            (self.settings.mag_fss as u8) << 5,
        )?;
        self.write_byte(self.mag_addr, RegAddrMag::CtrlReg3M as u8, CTRL_REG3_M_CONTINUOUS)?;
        self.write_byte(self.mag_addr, RegAddrMag::CtrlReg4M as u8, CTRL_REG4_M_Z_ULTRA_HIGH)?;
        self.write_byte(self.mag_addr, RegAddrMag::CtrlReg5M as u8, 0x00)?; // continuous update
        Ok(())
    }

    // three little-endian i16s starting at `reg`
    fn read_axes(&mut self, addr: u8, reg: u8) -> Result<Axes<i16>, ErrorCode> {
        let mut buf = [0u8; AXES_NUM_BYTES];
        self.read_bytes(addr, reg, &mut buf)?;
        Ok(Axes::new(
            i16::from_le_bytes([buf[0], buf[1]]),
            i16::from_le_bytes([buf[2], buf[3]]),
            i16::from_le_bytes([buf[4], buf[5]]),
        ))
    }

    fn write_byte(&mut self, addr: u8, reg: u8, data: u8) -> Result<(), ErrorCode> {
        match self.i2c.write(addr, &[reg, data]) {
            Ok(_) => Ok(()),
            Err(_) => Err(ErrorCode::I2cError),
        }
    }

    fn read_byte(&mut self, addr: u8, reg: u8) -> Result<u8, ErrorCode> {
        let mut data = [0u8];
        self.read_bytes(addr, reg, &mut data)?;
        Ok(data[0])
    }

    fn read_bytes(&mut self, addr: u8, reg: u8, data: &mut [u8]) -> Result<(), ErrorCode> {
        match self.i2c.write_read(addr, &[reg], data) {
            Ok(_) => Ok(()),
            Err(_) => Err(ErrorCode::I2cError),
        }
    }
}

impl<I2C, E> NineAxisSensor for LSM9DS1<I2C>
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
{
    type Error = ErrorCode;

    fn begin(&mut self) -> Result<(), ErrorCode> {
        self.init()
    }

    fn available(&mut self, channel: Channel) -> Result<bool, ErrorCode> {
        match channel {
            Channel::Gyro => self.gyro_available(),
            Channel::Accel => self.accel_available(),
            Channel::Mag => self.mag_available(),
        }
    }

    fn read(&mut self, channel: Channel) -> Result<(), ErrorCode> {
        match channel {
            Channel::Gyro => self.read_gyro(),
            Channel::Accel => self.read_accel(),
            Channel::Mag => self.read_mag(),
        }
    }

    fn raw(&self, channel: Channel) -> Axes<i16> {
        match channel {
            Channel::Gyro => self.raw_gyro(),
            Channel::Accel => self.raw_accel(),
            Channel::Mag => self.raw_mag(),
        }
    }

    fn calc(&self, channel: Channel, raw: i16) -> f32 {
        match channel {
            Channel::Gyro => self.calc_gyro(raw),
            Channel::Accel => self.calc_accel(raw),
            Channel::Mag => self.calc_mag(raw),
        }
    }
}
