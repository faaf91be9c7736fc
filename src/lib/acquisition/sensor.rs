use core::fmt::Debug;

// The three independently sampled measurement channels of a 9-axis IMU.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Gyro,
    Accel,
    Mag,
}

impl Channel {
    // Polling order used by the acquisition gate
    pub const ALL: [Channel; 3] = [Channel::Gyro, Channel::Accel, Channel::Mag];
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Axes<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Axes<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Axes<U> {
        Axes {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }
}

// Sensor capability consumed by the monitor.
//
// Each `Channel` is its own resource group: availability, read and
// conversion never touch another channel's state, so a test double can script
// each channel independently.
pub trait NineAxisSensor {
    type Error: Debug;

    // establish communication and configure the device
    fn begin(&mut self) -> Result<(), Self::Error>;

    // true when the device holds a sample for `channel` that has not been read
    fn available(&mut self, channel: Channel) -> Result<bool, Self::Error>;

    // overwrite the stored raw triple for `channel`, the device clears its
    // availability flag as a side effect
    fn read(&mut self, channel: Channel) -> Result<(), Self::Error>;

    // last raw ADC counts read for `channel`
    fn raw(&self, channel: Channel) -> Axes<i16>;

    // raw counts to g (accel), deg/s (gyro) or gauss (mag)
    fn calc(&self, channel: Channel, raw: i16) -> f32;

    fn calculated(&self, channel: Channel) -> Axes<f32> {
        self.raw(channel).map(|raw| self.calc(channel, raw))
    }
}
