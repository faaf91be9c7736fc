use crate::app::monotonics;
use attitude::acquisition::clock::Clock;

// SysTick monotonic runs at 1 kHz, so one tick is one millisecond
pub struct MonoClock;

impl Clock for MonoClock {
    fn now_ms(&self) -> u64 {
        monotonics::now().ticks()
    }
}
