// Scripted sensor double
//
// Every channel keeps its own queue of pending samples. A channel reports
// available while its queue is non-empty and a read pops exactly one sample,
// which is how the device clears its data-ready flag.

use crate::acquisition::sensor::{Axes, Channel, NineAxisSensor};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeError {
    NoDevice,
    Bus,
}

#[derive(Debug)]
struct FakeChannel {
    pending: VecDeque<Axes<i16>>,
    raw: Axes<i16>,
    scale: f32,
    reads: usize,
    fault_available: bool,
    fault_read: bool,
}

impl Default for FakeChannel {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
            raw: Axes::default(),
            scale: 1.0,
            reads: 0,
            fault_available: false,
            fault_read: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct FakeSensor {
    channels: [FakeChannel; 3],
    begin_error: Option<FakeError>,
    begin_calls: usize,
}

impl FakeSensor {
    pub fn new() -> Self {
        Self::default()
    }

    // Sensor whose `begin` fails with `error`
    pub fn unreachable(error: FakeError) -> Self {
        Self {
            begin_error: Some(error),
            ..Self::default()
        }
    }

    // Queue a fresh sample, raising the channel's availability flag
    pub fn push_sample(&mut self, channel: Channel, sample: Axes<i16>) {
        self.channel_mut(channel).pending.push_back(sample);
    }

    pub fn set_scale(&mut self, channel: Channel, scale: f32) {
        self.channel_mut(channel).scale = scale;
    }

    pub fn fail_available(&mut self, channel: Channel, fail: bool) {
        self.channel_mut(channel).fault_available = fail;
    }

    pub fn fail_read(&mut self, channel: Channel, fail: bool) {
        self.channel_mut(channel).fault_read = fail;
    }

    // Number of successful reads issued on `channel`
    pub fn reads(&self, channel: Channel) -> usize {
        self.channel(channel).reads
    }

    pub fn pending(&self, channel: Channel) -> usize {
        self.channel(channel).pending.len()
    }

    pub fn begin_calls(&self) -> usize {
        self.begin_calls
    }

    fn channel(&self, channel: Channel) -> &FakeChannel {
        &self.channels[channel as usize]
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut FakeChannel {
        &mut self.channels[channel as usize]
    }
}

impl NineAxisSensor for FakeSensor {
    type Error = FakeError;

    fn begin(&mut self) -> Result<(), FakeError> {
        self.begin_calls += 1;
        match self.begin_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn available(&mut self, channel: Channel) -> Result<bool, FakeError> {
        let ch = self.channel(channel);
        if ch.fault_available {
            return Err(FakeError::Bus);
        }
        Ok(!ch.pending.is_empty())
    }

    fn read(&mut self, channel: Channel) -> Result<(), FakeError> {
        let ch = self.channel_mut(channel);
        if ch.fault_read {
            return Err(FakeError::Bus);
        }
        if let Some(sample) = ch.pending.pop_front() {
            ch.raw = sample;
        }
        ch.reads += 1;
        Ok(())
    }

    fn raw(&self, channel: Channel) -> Axes<i16> {
        self.channel(channel).raw
    }

    fn calc(&self, channel: Channel, raw: i16) -> f32 {
        raw as f32 * self.channel(channel).scale
    }
}
