// Text report written to the serial sink once per print interval.
// Lines end in "\r\n" for serial terminals.

use crate::acquisition::sensor::{Channel, NineAxisSensor};
use crate::monitor::config::DisplayMode;
use crate::orientation::estimator::Attitude;
use core::fmt::{self, Write};

fn label(channel: Channel) -> (&'static str, &'static str) {
    match channel {
        Channel::Gyro => ("G", "deg/s"),
        Channel::Accel => ("A", "g"),
        Channel::Mag => ("M", "gauss"),
    }
}

// "G: gx, gy, gz deg/s" in physical units, or the raw counts
pub fn write_channel<W: Write, S: NineAxisSensor>(
    out: &mut W,
    sensor: &S,
    channel: Channel,
    mode: DisplayMode,
) -> fmt::Result {
    let (name, unit) = label(channel);
    match mode {
        DisplayMode::Calculated => {
            let v = sensor.calculated(channel);
            writeln!(out, "{}: {:.2}, {:.2}, {:.2} {}\r", name, v.x, v.y, v.z, unit)
        }
        DisplayMode::Raw => {
            let r = sensor.raw(channel);
            writeln!(out, "{}: {}, {}, {}\r", name, r.x, r.y, r.z)
        }
    }
}

pub fn write_attitude<W: Write>(out: &mut W, attitude: &Attitude) -> fmt::Result {
    writeln!(
        out,
        "Pitch, Roll: {:.2}, {:.2}, {:.2}\r",
        attitude.pitch, attitude.roll, attitude.heading
    )
}

// one full block: G, A, M, attitude and a blank separator line
pub fn write_report<W: Write, S: NineAxisSensor>(
    out: &mut W,
    sensor: &S,
    attitude: &Attitude,
    mode: DisplayMode,
) -> fmt::Result {
    for channel in Channel::ALL {
        write_channel(out, sensor, channel, mode)?;
    }
    write_attitude(out, attitude)?;
    writeln!(out, "\r")
}

pub fn write_init_failure<W: Write>(out: &mut W) -> fmt::Result {
    writeln!(out, "Failed to communicate with LSM9DS1.\r")?;
    writeln!(out, "Double-check wiring.\r")?;
    writeln!(
        out,
        "Default settings will work for an out of the box LSM9DS1 Breakout, \
         but may need to be modified if the board jumpers are.\r"
    )
}
