// Monotonic time source driving the report cadence
pub trait Clock {
    // milliseconds since start, never decreasing
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}
