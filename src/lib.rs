#![cfg_attr(not(test), no_std)]
#![doc = "HAL for the Cortex-M4 subsystem of the Silicon Labs SiWx91x"]

mod macros;

pub mod pac;
pub mod time;

pub mod clocks;
pub mod delay;
pub mod power;
pub mod status;

pub mod flash;
pub mod gpio;
pub mod i2s;
pub mod pwm;
pub mod ssi;

pub(crate) mod internal;

mod chip;

pub use chip::{peripherals, Peripherals};
pub use embassy_hal_internal::{into_ref, Peripheral, PeripheralRef};

use crate::clocks::ClockTree;

/// HAL configuration
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub clocks: clocks::Config,
}

/// Brings up the clock tree, enables the GPIO clocks and takes the peripheral singletons.
///
/// The returned [`ClockTree`] is the only handle on the clock registers. Drivers borrow it in
/// their constructors to gate their clocks and read frequencies.
pub fn init(config: Config) -> Result<(Peripherals, ClockTree), clocks::Error> {
    let mut clocks = ClockTree::new(config.clocks);
    clocks.init(&config.clocks)?;

    gpio::init(&mut clocks);

    Ok((Peripherals::take(), clocks))
}
