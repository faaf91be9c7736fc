use crate::orientation::axis_map::MagAxisMap;

pub const DEFAULT_PRINT_INTERVAL_MS: u64 = 250;

// Earth's field varies by location, look yours up at
// http://www.ngdc.noaa.gov/geomag-web/#declination
pub const DEFAULT_DECLINATION_DEG: f32 = -8.58; // Boulder, CO

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    // physical units, two decimals
    Calculated,
    // raw ADC counts
    Raw,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonitorConfig {
    pub print_interval_ms: u64,
    pub declination_deg: f32,
    pub display: DisplayMode,
    pub mag_axis_map: MagAxisMap,
}

impl MonitorConfig {
    // LSM9DS1 breakout, calculated units, reporting at 4 Hz
    pub const DEFAULT: Self = Self {
        print_interval_ms: DEFAULT_PRINT_INTERVAL_MS,
        declination_deg: DEFAULT_DECLINATION_DEG,
        display: DisplayMode::Calculated,
        mag_axis_map: MagAxisMap::MirroredXY,
    };
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
