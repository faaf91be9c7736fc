#![cfg_attr(not(test), no_std)]

// LSM9DS1 attitude monitor: sample acquisition, orientation estimation and
// periodic text reporting. Hardware independent, the firmware binary supplies
// the bus, the clock and the serial sink.

pub mod acquisition {
    pub mod clock;
    pub mod gate;
    pub mod sensor;
}

pub mod orientation {
    pub mod axis_map;
    pub mod estimator;
}

pub mod monitor {
    pub mod attitude_monitor;
    pub mod config;
    pub mod report;
}

pub mod drivers {
    pub mod imu {
        pub mod lsm9ds1;
        pub mod lsm9ds1_constants;
    }
}
