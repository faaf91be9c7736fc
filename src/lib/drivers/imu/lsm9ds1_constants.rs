// LSM9DS1 Registers and Configs

// Accelerometer/gyroscope registers
#[repr(u8)]
pub enum RegAddrXG {
    WhoAmI = 0x0F,
    CtrlReg1G = 0x10,
    CtrlReg2G = 0x11,
    CtrlReg3G = 0x12,
    OutXLG = 0x18,
    CtrlReg4 = 0x1E,
    CtrlReg5XL = 0x1F,
    CtrlReg6XL = 0x20,
    CtrlReg7XL = 0x21,
    StatusReg = 0x27,
    OutXLXL = 0x28,
}

// Magnetometer registers
#[repr(u8)]
pub enum RegAddrMag {
    WhoAmI = 0x0F,
    CtrlReg1M = 0x20,
    CtrlReg2M = 0x21,
    CtrlReg3M = 0x22,
    CtrlReg4M = 0x23,
    CtrlReg5M = 0x24,
    StatusRegM = 0x27,
    OutXLM = 0x28,
}

// STATUS_REG (XG):
// Bits:     |    7     |   6   |  5   |   4   |      3      |  2  |  1  |  0   |
// Function: | reserved | IG_XL | IG_G | INACT | BOOT_STATUS | TDA | GDA | XLDA |
#[repr(u8)]
pub enum StatusRegBits {
    AccelDataAvailable = 0x01 << 0,
    GyroDataAvailable = 0x01 << 1,
}

// STATUS_REG_M:
// Bits:     |   7   |  6  |  5  |  4  |   3   |  2  |  1  |  0  |
// Function: | ZYXOR | ZOR | YOR | XOR | ZYXDA | ZDA | YDA | XDA |
#[repr(u8)]
pub enum StatusRegMBits {
    ZYXDataAvailable = 0x01 << 3,
}

// CTRL_REG4: enable gyro output on all three axes
pub const CTRL_REG4_GYRO_XYZ_EN: u8 = 0x38;
// CTRL_REG5_XL: enable accel output on all three axes
pub const CTRL_REG5_XL_ACCEL_XYZ_EN: u8 = 0x38;
// CTRL_REG1_M OM bits, ultra-high performance on X and Y
pub const CTRL_REG1_M_XY_ULTRA_HIGH: u8 = 0x03 << 5;
// CTRL_REG4_M OMZ bits, ultra-high performance on Z
pub const CTRL_REG4_M_Z_ULTRA_HIGH: u8 = 0x03 << 2;
// CTRL_REG3_M MD bits, continuous conversion
pub const CTRL_REG3_M_CONTINUOUS: u8 = 0x00;

// The mag only auto-increments its register address when the MSB is set
pub const MAG_AUTO_INCREMENT: u8 = 0x80;

// Gyro full scale range in degrees per second
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GyroFullScaleSel {
    Dps245 = 0x00,
    Dps500 = 0x01,
    Dps2000 = 0x03,
}

// Gyro output data rate, shared by the accel when both run
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GyroOdrSel {
    PowerDown = 0x00,
    Hz14_9 = 0x01,
    Hz59_5 = 0x02,
    Hz119 = 0x03,
    Hz238 = 0x04,
    Hz476 = 0x05,
    Hz952 = 0x06,
}

// Accel full scale range in g
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AccelFullScaleSel {
    Gpm2 = 0x00,
    Gpm16 = 0x01,
    Gpm4 = 0x02,
    Gpm8 = 0x03,
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AccelOdrSel {
    PowerDown = 0x00,
    Hz10 = 0x01,
    Hz50 = 0x02,
    Hz119 = 0x03,
    Hz238 = 0x04,
    Hz476 = 0x05,
    Hz952 = 0x06,
}

// Mag full scale range in gauss
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MagFullScaleSel {
    Gauss4 = 0x00,
    Gauss8 = 0x01,
    Gauss12 = 0x02,
    Gauss16 = 0x03,
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MagOdrSel {
    Hz0_625 = 0x00,
    Hz1_25 = 0x01,
    Hz2_5 = 0x02,
    Hz5 = 0x03,
    Hz10 = 0x04,
    Hz20 = 0x05,
    Hz40 = 0x06,
    Hz80 = 0x07,
}

pub const DEFAULT_XG_I2C_ADDR: u8 = 0x6B;
pub const DEFAULT_MAG_I2C_ADDR: u8 = 0x1E;
pub const XG_WHO_AM_I: u8 = 0x68;
pub const MAG_WHO_AM_I: u8 = 0x3D;
pub const AXES_NUM_BYTES: usize = 6;

// Sensitivity per LSB
pub const ACCEL_SENSITIVITY_GPM2: f32 = 0.000061;
pub const ACCEL_SENSITIVITY_GPM4: f32 = 0.000122;
pub const ACCEL_SENSITIVITY_GPM8: f32 = 0.000244;
pub const ACCEL_SENSITIVITY_GPM16: f32 = 0.000732;

pub const GYRO_SENSITIVITY_DPS245: f32 = 0.00875;
pub const GYRO_SENSITIVITY_DPS500: f32 = 0.0175;
pub const GYRO_SENSITIVITY_DPS2000: f32 = 0.07;

pub const MAG_SENSITIVITY_GAUSS4: f32 = 0.00014;
pub const MAG_SENSITIVITY_GAUSS8: f32 = 0.00029;
pub const MAG_SENSITIVITY_GAUSS12: f32 = 0.00043;
pub const MAG_SENSITIVITY_GAUSS16: f32 = 0.00058;
