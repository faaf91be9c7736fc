use crate::acquisition::sensor::{Channel, NineAxisSensor};
use log::warn;

// Pull every channel that has fresh data, leave the others untouched.
// Runs every loop iteration, independent of the report cadence.
// A bus fault counts as "nothing new" for this pass.
pub fn update_samples<S: NineAxisSensor>(sensor: &mut S) {
    for channel in Channel::ALL {
        match sensor.available(channel) {
            Ok(true) => {
                if let Err(e) = sensor.read(channel) {
                    warn!("{:?} read failed: {:?}", channel, e);
                }
            }
            Ok(false) => {}
            Err(e) => warn!("{:?} status check failed: {:?}", channel, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acquisition::sensor::Axes;
    use crate::mock::sensor::FakeSensor;

    #[test]
    fn unavailable_channel_keeps_previous_sample() {
        let mut sensor = FakeSensor::new();
        sensor.push_sample(Channel::Accel, Axes::new(10, 20, 30));
        update_samples(&mut sensor);
        assert_eq!(sensor.raw(Channel::Accel), Axes::new(10, 20, 30));

        update_samples(&mut sensor);
        update_samples(&mut sensor);

        assert_eq!(sensor.raw(Channel::Accel), Axes::new(10, 20, 30));
        assert_eq!(sensor.reads(Channel::Accel), 1);
        assert_eq!(sensor.reads(Channel::Gyro), 0);
        assert_eq!(sensor.reads(Channel::Mag), 0);
    }

    #[test]
    fn available_channel_read_exactly_once() {
        let mut sensor = FakeSensor::new();
        sensor.push_sample(Channel::Gyro, Axes::new(1, 2, 3));
        assert!(sensor.available(Channel::Gyro).unwrap());

        update_samples(&mut sensor);

        assert_eq!(sensor.reads(Channel::Gyro), 1);
        assert!(!sensor.available(Channel::Gyro).unwrap());
        assert_eq!(sensor.raw(Channel::Gyro), Axes::new(1, 2, 3));
    }

    #[test]
    fn channels_gated_independently() {
        let mut sensor = FakeSensor::new();
        sensor.push_sample(Channel::Mag, Axes::new(-5, 6, -7));
        sensor.push_sample(Channel::Accel, Axes::new(0, 0, 100));
        sensor.push_sample(Channel::Accel, Axes::new(0, 0, 200));

        update_samples(&mut sensor);
        assert_eq!(sensor.raw(Channel::Accel), Axes::new(0, 0, 100));
        assert_eq!(sensor.raw(Channel::Mag), Axes::new(-5, 6, -7));
        assert_eq!(sensor.pending(Channel::Accel), 1);

        update_samples(&mut sensor);
        assert_eq!(sensor.raw(Channel::Accel), Axes::new(0, 0, 200));
        assert_eq!(sensor.reads(Channel::Accel), 2);
        assert_eq!(sensor.reads(Channel::Mag), 1);
        assert_eq!(sensor.reads(Channel::Gyro), 0);
    }

    #[test]
    fn status_fault_skips_channel_only() {
        let mut sensor = FakeSensor::new();
        sensor.push_sample(Channel::Gyro, Axes::new(1, 1, 1));
        sensor.push_sample(Channel::Accel, Axes::new(2, 2, 2));
        sensor.fail_available(Channel::Gyro, true);

        update_samples(&mut sensor);

        assert_eq!(sensor.reads(Channel::Gyro), 0);
        assert_eq!(sensor.raw(Channel::Gyro), Axes::default());
        assert_eq!(sensor.raw(Channel::Accel), Axes::new(2, 2, 2));

        sensor.fail_available(Channel::Gyro, false);
        update_samples(&mut sensor);
        assert_eq!(sensor.raw(Channel::Gyro), Axes::new(1, 1, 1));
    }

    #[test]
    fn failed_read_leaves_sample_pending() {
        let mut sensor = FakeSensor::new();
        sensor.push_sample(Channel::Mag, Axes::new(3, 4, 5));
        sensor.fail_read(Channel::Mag, true);

        update_samples(&mut sensor);
        assert_eq!(sensor.raw(Channel::Mag), Axes::default());
        assert_eq!(sensor.pending(Channel::Mag), 1);

        sensor.fail_read(Channel::Mag, false);
        update_samples(&mut sensor);
        assert_eq!(sensor.raw(Channel::Mag), Axes::new(3, 4, 5));
        assert_eq!(sensor.reads(Channel::Mag), 1);
    }
}
