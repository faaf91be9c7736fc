use attitude::drivers::imu::lsm9ds1::{
    AccelFullScaleSel, AccelOdrSel, GyroFullScaleSel, GyroOdrSel, MagFullScaleSel, MagOdrSel,
    Settings,
};
use attitude::monitor::config::MonitorConfig;
use log::LevelFilter;

pub const SYSCLK_HZ: u32 = 48_000_000;
pub const SERIAL_BAUD: u32 = 115_200;
pub const I2C_FREQ_KHZ: u32 = 100;
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

pub const IMU_SETTINGS: Settings = Settings {
    accel_fss: AccelFullScaleSel::Gpm2,
    accel_odr: AccelOdrSel::Hz952,
    gyro_fss: GyroFullScaleSel::Dps245,
    gyro_odr: GyroOdrSel::Hz952,
    mag_fss: MagFullScaleSel::Gauss4,
    mag_odr: MagOdrSel::Hz80,
};

// 250 ms cadence, Boulder declination, mirrored mag x/y.
// For another site, override `declination_deg` with struct update syntax.
pub const MONITOR_CONFIG: MonitorConfig = MonitorConfig::DEFAULT;
