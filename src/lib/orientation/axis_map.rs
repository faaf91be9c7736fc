use crate::acquisition::sensor::Axes;

// How magnetometer axes line up with the accelerometer on the sensor package.
//
// The estimator assumes both triples share one frame. The remap is applied at
// the call boundary so the math stays device-agnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MagAxisMap {
    // mag and accel axes already coincide
    Aligned,
    // mag x/y are mirrored relative to accel (LSM9DS1): passes (-my, -mx, mz)
    MirroredXY,
}

impl MagAxisMap {
    pub fn apply(self, mag: Axes<f32>) -> Axes<f32> {
        match self {
            MagAxisMap::Aligned => mag,
            MagAxisMap::MirroredXY => Axes::new(-mag.y, -mag.x, mag.z),
        }
    }
}
