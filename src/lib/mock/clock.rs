// Manually driven clock
//
// Clones share the same time cell, so a test keeps a handle after moving the
// clock into the monitor.

use crate::acquisition::clock::Clock;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Rc<Cell<u64>>,
    reads: Rc<Cell<usize>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, now_ms: u64) {
        self.now_ms.set(now_ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }

    // Number of `now_ms` calls across all handles
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.reads.set(self.reads.get() + 1);
        self.now_ms.get()
    }
}
