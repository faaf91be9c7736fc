#![no_main]
#![no_std]

mod clock;
mod config;
mod serial;

#[rtic::app(device = stm32f4xx_hal::pac, peripherals = true, dispatchers = [SPI1])]
mod app {
    use crate::clock::MonoClock;
    use crate::config::sys_config;
    use crate::serial::{self, SerialSink};
    use attitude::drivers::imu::lsm9ds1;
    use attitude::monitor::attitude_monitor::AttitudeMonitor;
    use core::fmt::Write;
    use cortex_m::asm;
    use panic_write::PanicHandler;
    use stm32f4xx_hal::{
        gpio::{PB8, PB9},
        i2c::{I2c, Mode as i2cMode},
        pac::I2C1,
        prelude::*,
        serial::{Config, Serial},
    };
    use systick_monotonic::Systick;

    type Imu = lsm9ds1::LSM9DS1<I2c<I2C1, (PB8, PB9)>>;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        panic_handler: core::pin::Pin<PanicHandler<SerialSink>>,
        monitor: Option<AttitudeMonitor<Imu, MonoClock>>,
    }

    #[monotonic(binds = SysTick, default = true)]
    type MonoTimer = Systick<1000>;

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        // configure clocks
        let rcc = ctx.device.RCC.constrain();
        let mono = Systick::new(ctx.core.SYST, sys_config::SYSCLK_HZ);
        let clocks = rcc.cfgr.sysclk(sys_config::SYSCLK_HZ.Hz()).freeze();

        let gpioa = ctx.device.GPIOA.split();
        let gpiob = ctx.device.GPIOB.split();

        // set up uart tx, shared by reports, logs and panics
        let tx_pin = gpioa.pa2.into_alternate();
        let tx = Serial::tx(
            ctx.device.USART2,
            tx_pin,
            Config::default()
                .baudrate(sys_config::SERIAL_BAUD.bps())
                .wordlength_8()
                .parity_none(),
            &clocks,
        )
        .unwrap();
        serial::init(tx);
        let panic_handler = PanicHandler::new(SerialSink);

        // configure I2C
        let i2c = I2c::new(
            ctx.device.I2C1,
            (gpiob.pb8, gpiob.pb9),
            i2cMode::Standard {
                frequency: sys_config::I2C_FREQ_KHZ.kHz(),
            },
            &clocks,
        );

        // set up IMU sensor
        let imu = lsm9ds1::LSM9DS1::new(i2c, sys_config::IMU_SETTINGS);
        let monitor = match AttitudeMonitor::start(
            imu,
            MonoClock,
            sys_config::MONITOR_CONFIG,
            &mut SerialSink,
        ) {
            Ok(monitor) => {
                writeln!(SerialSink, "imu initialized\r").ok();
                Some(monitor)
            }
            Err(fatal) => {
                writeln!(SerialSink, "imu fatal: {:?}, halting\r", fatal.cause).ok();
                None
            }
        };

        (
            Shared {},
            Local {
                panic_handler,
                monitor,
            },
            init::Monotonics(mono),
        )
    }

    #[idle(local = [monitor, panic_handler])]
    fn idle(ctx: idle::Context) -> ! {
        let mut sink = SerialSink;
        loop {
            match ctx.local.monitor {
                Some(monitor) => {
                    // a failed report is retried on the next pass
                    let _ = monitor.poll(&mut sink);
                }
                // sensor never came up, no further progress
                None => asm::nop(),
            }
        }
    }
}
