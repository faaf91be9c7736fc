use crate::acquisition::clock::Clock;
use crate::acquisition::gate;
use crate::acquisition::sensor::{Channel, NineAxisSensor};
use crate::monitor::config::MonitorConfig;
use crate::monitor::report;
use crate::orientation::estimator::{estimate_orientation, Attitude};
use core::fmt::{self, Write};
use log::{error, info};

// Sensor initialization failed. Terminal: no monitor exists to make further
// progress, the caller picks the halt policy.
#[derive(Debug, PartialEq, Eq)]
pub struct Fatal<E> {
    pub cause: E,
}

// What a single `poll` did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cycle {
    Acquired,
    Reported,
}

// Control loop owner: acquisition every pass, estimate + report on cadence.
pub struct AttitudeMonitor<S, C> {
    sensor: S,
    clock: C,
    config: MonitorConfig,
    last_print_ms: u64,
}

impl<S: NineAxisSensor, C: Clock> AttitudeMonitor<S, C> {
    // Brings the sensor up. On failure the diagnostic goes to `out` and the
    // sensor error comes back as `Fatal`. The clock is not read here.
    pub fn start<W: Write>(
        mut sensor: S,
        clock: C,
        config: MonitorConfig,
        out: &mut W,
    ) -> Result<Self, Fatal<S::Error>> {
        if let Err(cause) = sensor.begin() {
            error!("sensor initialization failed: {:?}", cause);
            // the sink may be as broken as the sensor, nothing left to report to
            let _ = report::write_init_failure(out);
            return Err(Fatal { cause });
        }
        info!(
            "sensor up, reporting every {} ms, declination {} deg",
            config.print_interval_ms, config.declination_deg
        );
        Ok(Self {
            sensor,
            clock,
            config,
            last_print_ms: 0,
        })
    }

    // One control loop iteration.
    //
    // Fresh samples are pulled on every call. The report goes out only once
    // more than `print_interval_ms` has passed since the previous one, and it
    // is built from whatever the gate just left in the sensor.
    pub fn poll<W: Write>(&mut self, out: &mut W) -> Result<Cycle, fmt::Error> {
        gate::update_samples(&mut self.sensor);

        let due = self
            .last_print_ms
            .saturating_add(self.config.print_interval_ms);
        if due >= self.clock.now_ms() {
            return Ok(Cycle::Acquired);
        }

        let attitude = self.attitude();
        report::write_report(out, &self.sensor, &attitude, self.config.display)?;
        self.last_print_ms = self.clock.now_ms();
        Ok(Cycle::Reported)
    }

    // Estimate from the current accel and mag samples; gyro is not used
    pub fn attitude(&self) -> Attitude {
        let accel = self.sensor.calculated(Channel::Accel);
        let mag = self
            .config
            .mag_axis_map
            .apply(self.sensor.calculated(Channel::Mag));
        estimate_orientation(accel, mag, self.config.declination_deg)
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    pub fn last_print_ms(&self) -> u64 {
        self.last_print_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acquisition::sensor::Axes;
    use crate::mock::clock::ManualClock;
    use crate::mock::sensor::{FakeError, FakeSensor};
    use crate::monitor::config::DisplayMode;
    use crate::orientation::axis_map::MagAxisMap;

    fn config() -> MonitorConfig {
        MonitorConfig {
            declination_deg: 0.0,
            display: DisplayMode::Raw,
            mag_axis_map: MagAxisMap::Aligned,
            ..MonitorConfig::default()
        }
    }

    fn monitor(config: MonitorConfig) -> (AttitudeMonitor<FakeSensor, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let mut out = String::new();
        let monitor = AttitudeMonitor::start(FakeSensor::new(), clock.clone(), config, &mut out)
            .unwrap();
        assert!(out.is_empty());
        (monitor, clock)
    }

    #[test]
    fn failed_begin_is_fatal_with_diagnostic() {
        let mut out = String::new();
        let res = AttitudeMonitor::start(
            FakeSensor::unreachable(FakeError::NoDevice),
            ManualClock::new(),
            config(),
            &mut out,
        );

        match res {
            Err(fatal) => assert_eq!(fatal.cause, FakeError::NoDevice),
            Ok(_) => panic!("expected fatal"),
        }
        assert!(out.starts_with("Failed to communicate with LSM9DS1."));
    }

    #[test]
    fn start_calls_begin_once() {
        let (monitor, _) = monitor(config());
        assert_eq!(monitor.sensor().begin_calls(), 1);
        assert_eq!(monitor.last_print_ms(), 0);
    }

    #[test]
    fn start_leaves_clock_untouched() {
        let clock = ManualClock::new();
        clock.set(10_000);
        let mut out = String::new();
        let mut monitor =
            AttitudeMonitor::start(FakeSensor::new(), clock.clone(), config(), &mut out).unwrap();
        assert_eq!(clock.reads(), 0);
        assert_eq!(monitor.last_print_ms(), 0);

        // cadence counts from zero, so the first pass after boot already reports
        assert_eq!(monitor.poll(&mut out).unwrap(), Cycle::Reported);
        assert_eq!(monitor.last_print_ms(), 10_000);
    }

    #[test]
    fn reports_only_after_interval_elapsed() {
        let (mut monitor, clock) = monitor(config());
        let mut out = String::new();

        clock.set(100);
        assert_eq!(monitor.poll(&mut out).unwrap(), Cycle::Acquired);
        clock.set(250);
        assert_eq!(monitor.poll(&mut out).unwrap(), Cycle::Acquired);
        assert!(out.is_empty());

        clock.set(251);
        assert_eq!(monitor.poll(&mut out).unwrap(), Cycle::Reported);
        assert_eq!(monitor.last_print_ms(), 251);
        assert!(out.contains("Pitch, Roll: "));

        out.clear();
        clock.set(501);
        assert_eq!(monitor.poll(&mut out).unwrap(), Cycle::Acquired);
        clock.set(502);
        assert_eq!(monitor.poll(&mut out).unwrap(), Cycle::Reported);
        assert_eq!(out.matches("Pitch, Roll: ").count(), 1);
    }

    #[test]
    fn acquires_every_poll_regardless_of_cadence() {
        let (mut monitor, clock) = monitor(config());
        let mut out = String::new();

        for i in 0..5 {
            monitor
                .sensor_mut()
                .push_sample(Channel::Accel, Axes::new(i, 0, 100));
            clock.advance(10);
            assert_eq!(monitor.poll(&mut out).unwrap(), Cycle::Acquired);
        }
        assert_eq!(monitor.sensor().reads(Channel::Accel), 5);
        assert_eq!(monitor.sensor().raw(Channel::Accel), Axes::new(4, 0, 100));
    }

    #[test]
    fn report_uses_freshest_sample() {
        let (mut monitor, clock) = monitor(config());
        let mut out = String::new();

        monitor
            .sensor_mut()
            .push_sample(Channel::Accel, Axes::new(0, 0, 100));
        clock.set(10);
        monitor.poll(&mut out).unwrap();

        // lands in the same pass that reports
        monitor
            .sensor_mut()
            .push_sample(Channel::Accel, Axes::new(0, 100, 0));
        clock.set(300);
        assert_eq!(monitor.poll(&mut out).unwrap(), Cycle::Reported);

        assert!(out.contains("A: 0, 100, 0\r\n"));
        assert!((monitor.attitude().roll - 90.0).abs() < 1e-3);
        assert!(out.contains(", 90.00, "));
    }

    #[test]
    fn level_facing_north_end_to_end() {
        let (mut monitor, clock) = monitor(config());
        let sensor = monitor.sensor_mut();
        sensor.push_sample(Channel::Accel, Axes::new(0, 0, 16384));
        sensor.push_sample(Channel::Mag, Axes::new(0, 7000, 0));
        sensor.push_sample(Channel::Gyro, Axes::new(5, 5, 5));

        let mut out = String::new();
        clock.set(1000);
        monitor.poll(&mut out).unwrap();

        let att = monitor.attitude();
        assert!(att.pitch.abs() < 1e-3);
        assert!(att.roll.abs() < 1e-3);
        assert!(att.heading.abs() < 1e-3);
        assert!(out.contains("G: 5, 5, 5\r\n"));
    }

    #[test]
    fn mirrored_mag_axes_remapped_before_estimation() {
        let (mut monitor, _) = monitor(MonitorConfig {
            mag_axis_map: MagAxisMap::MirroredXY,
            ..config()
        });
        let sensor = monitor.sensor_mut();
        sensor.push_sample(Channel::Accel, Axes::new(0, 0, 1));
        // device frame (0, -1): accel frame (1, 0) -> heading snaps to 0
        sensor.push_sample(Channel::Mag, Axes::new(0, -1, 0));
        gate::update_samples(sensor);
        assert!(monitor.attitude().heading.abs() < 1e-3);

        // device frame (-1, -1): accel frame (1, 1) -> 45
        monitor
            .sensor_mut()
            .push_sample(Channel::Mag, Axes::new(-1, -1, 0));
        gate::update_samples(monitor.sensor_mut());
        assert!((monitor.attitude().heading - 45.0).abs() < 1e-3);
    }

    #[test]
    fn declination_from_config_applied() {
        let (mut monitor, _) = monitor(MonitorConfig {
            declination_deg: 45.0,
            ..config()
        });
        let sensor = monitor.sensor_mut();
        sensor.push_sample(Channel::Accel, Axes::new(0, 0, 1));
        sensor.push_sample(Channel::Mag, Axes::new(1, 1, 0));
        gate::update_samples(sensor);
        assert!(monitor.attitude().heading.abs() < 1e-3);
    }

    #[test]
    fn calculated_mode_prints_units() {
        let (mut monitor, clock) = monitor(MonitorConfig {
            display: DisplayMode::Calculated,
            ..config()
        });
        monitor.sensor_mut().set_scale(Channel::Gyro, 0.5);
        monitor
            .sensor_mut()
            .push_sample(Channel::Gyro, Axes::new(2, 4, 6));

        let mut out = String::new();
        clock.set(251);
        monitor.poll(&mut out).unwrap();
        assert!(out.starts_with("G: 1.00, 2.00, 3.00 deg/s\r\n"));
        assert!(out.contains("M: 0.00, 0.00, 0.00 gauss\r\n"));
    }
}
