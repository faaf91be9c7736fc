// USART2 TX shared by the report sink, the logger and the panic handler

use crate::config::sys_config;
use core::cell::RefCell;
use core::fmt::{self, Write};
use cortex_m::interrupt::{self, Mutex};
use log::{Log, Metadata, Record};
use stm32f4xx_hal::{pac::USART2, serial::Tx};

static SERIAL: Mutex<RefCell<Option<Tx<USART2>>>> = Mutex::new(RefCell::new(None));
static LOGGER: SerialLogger = SerialLogger;

pub fn init(tx: Tx<USART2>) {
    interrupt::free(|cs| SERIAL.borrow(cs).replace(Some(tx)));
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(sys_config::LOG_LEVEL);
    }
}

// Handle to the shared port, writes are dropped until `init` ran
#[derive(Clone, Copy, Default)]
pub struct SerialSink;

impl Write for SerialSink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        interrupt::free(|cs| match SERIAL.borrow(cs).try_borrow_mut() {
            Ok(mut tx) => match tx.as_mut() {
                Some(tx) => tx.write_str(s),
                None => Ok(()),
            },
            // re-entered from the panic handler mid-write
            Err(_) => Err(fmt::Error),
        })
    }
}

struct SerialLogger;

impl Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(SerialSink, "[{}] {}\r", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}
