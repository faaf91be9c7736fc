// Instantaneous pitch, roll and heading from one accel + mag sample.
// Pitch/roll after Freescale AN3461, heading after Honeywell AN203.

use crate::acquisition::sensor::Axes;
use core::f32::consts::PI;
use libm::{atan2f, sqrtf};

const RAD_TO_DEG: f32 = 180.0 / PI;
const DEG_TO_RAD: f32 = PI / 180.0;

// All angles in degrees, heading in [-180, 180] after declination
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Attitude {
    pub pitch: f32,
    pub roll: f32,
    pub heading: f32,
}

// Estimate orientation from a single sample pair, no temporal filtering.
//
// `accel` may be in any unit, only the direction of gravity matters. `mag`
// must already be expressed in the accelerometer's axis frame (see
// `MagAxisMap`); only its x and y components are used.
//
// When `mag.y` is exactly zero the heading snaps to 180 deg (`mag.x < 0`) or
// 0 deg without tilt compensation. The wrap correction is strict, so a heading
// landing exactly on -180 deg (e.g. `mag.x == -0.0`, `mag.y < 0`) stays there
// instead of folding to 180. Both are known approximations kept for parity
// with the reference sketch.
pub fn estimate_orientation(accel: Axes<f32>, mag: Axes<f32>, declination_deg: f32) -> Attitude {
    let roll = atan2f(accel.y, accel.z);
    let pitch = atan2f(-accel.x, sqrtf(accel.y * accel.y + accel.z * accel.z));

    let mut heading = if mag.y == 0.0 {
        if mag.x < 0.0 {
            PI
        } else {
            0.0
        }
    } else {
        atan2f(mag.x, mag.y)
    };

    heading -= declination_deg * DEG_TO_RAD;

    // single correction, valid while |declination| <= 180
    if heading > PI {
        heading -= 2.0 * PI;
    } else if heading < -PI {
        heading += 2.0 * PI;
    }

    Attitude {
        pitch: pitch * RAD_TO_DEG,
        roll: roll * RAD_TO_DEG,
        heading: heading * RAD_TO_DEG,
    }
}
