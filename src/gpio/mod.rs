//! General Purpose Input/Output
//!
//! High power pins `GPIO_6` to `GPIO_57` live in the M4 EGPIO block, `ULP_GPIO_0` to
//! `ULP_GPIO_11` in the ULP EGPIO block. Every pin is routed to a pad that is shared with the
//! network processor; [`Flex::new`] hands the pad to the M4 and enables its receiver.
use core::convert::Infallible;

use embassy_hal_internal::{impl_peripheral, into_ref, Peripheral, PeripheralRef};

use crate::clocks::{ClockTree, GateMode, PeripheralClock};
use crate::pac::gpio::regs::{NwpMcuhpGpioCtrl2, PortReg};
use crate::{pac, peripherals};

/// Highest HP pin with a pad configuration register
pub const MAX_PIN: u8 = 57;
/// Highest pad number accepted by [`Pads::enable_pad_selection`]
pub const MAX_PAD: u8 = 34;
pub const MAX_ULP_PIN: u8 = 11;
pub const MAX_MODE: u8 = 7;

const PORT_PINS: u8 = 16;
const ULP: u8 = 0x80;

const NO_PAD: u8 = 0;
/// Pad shared by GPIO_31 to GPIO_34, owned by the network processor
const SHARED_PAD: u8 = 9;
/// Pads 0 to 21 select through PAD_SELECTION, 22 to 33 through PAD_SELECTION_1
const PAD_SELECT_SPLIT: u8 = 22;
const HOST_PAD_MIN: u8 = 25;
const HOST_PAD_MAX: u8 = 30;

/// Pad of every HP pin, `NO_PAD` where the pin has none.
///
/// Pins 64 to 75 are the ULP pins seen from the HP instance.
#[rustfmt::skip]
pub const PAD_TABLE: [u8; 76] = [
    0, 0, 0, 0, 0, 0, 1, 2,
    3, 4, 5, 6, 7, 0, 0, 8,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 25, 26, 27, 28, 29, 30, 9,
    9, 9, 9, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 10, 11,
    12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 0, 0, 0, 0, 0, 0,
    22, 23, 24, 25, 26, 27, 28, 29,
    30, 31, 32, 33,
];

/// Pad of every ULP pin
pub const ULP_PAD_TABLE: [u8; 12] = [22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    InvalidPin,
    InvalidPad,
    InvalidMode,
    InvalidStrength,
    InvalidDisableState,
}

impl From<Error> for crate::status::Status {
    fn from(_err: Error) -> Self {
        crate::status::Status::InvalidParameter
    }
}

/// Enables the EGPIO clocks.
pub fn init(clocks: &mut ClockTree) {
    clocks.peripheral_clk_enable(PeripheralClock::Egpio, GateMode::Static);
}

/// Register blocks a pin touches.
#[derive(Copy, Clone)]
pub(crate) struct Regs {
    pub egpio: pac::gpio::Egpio,
    pub ulp_egpio: pac::gpio::Egpio,
    pub pad_config: pac::gpio::PadConfig,
    pub pad_select: pac::gpio::PadSelect,
    pub ulp_pad: pac::gpio::UlpPad,
    pub misc: pac::misc::Misc,
}

impl Regs {
    pub(crate) const fn hw() -> Self {
        Self {
            egpio: pac::EGPIO,
            ulp_egpio: pac::ULP_EGPIO,
            pad_config: pac::PAD_CONFIG,
            pad_select: pac::PAD_SELECT,
            ulp_pad: pac::ULP_PAD,
            misc: pac::MISC,
        }
    }
}

// - MARK: Pads

/// Pad level configuration by pin or pad number.
#[derive(Copy, Clone)]
pub struct Pads {
    regs: Regs,
}

impl Default for Pads {
    fn default() -> Self {
        Self::new()
    }
}

impl Pads {
    pub fn new() -> Self {
        Self { regs: Regs::hw() }
    }

    fn check_pin(gpio: u8) -> Result<(), Error> {
        if gpio > MAX_PIN {
            Err(Error::InvalidPin)
        } else {
            Ok(())
        }
    }

    pub fn enable_pad_receiver(&self, gpio: u8) -> Result<(), Error> {
        Self::check_pin(gpio)?;
        self.set_receiver(gpio, true);
        Ok(())
    }

    pub fn disable_pad_receiver(&self, gpio: u8) -> Result<(), Error> {
        Self::check_pin(gpio)?;
        self.set_receiver(gpio, false);
        Ok(())
    }

    /// Gives the M4 control of `pad`.
    pub fn enable_pad_selection(&self, pad: u8) -> Result<(), Error> {
        if pad > MAX_PAD {
            return Err(Error::InvalidPad);
        }
        if pad < PAD_SELECT_SPLIT {
            self.regs.pad_select.pad_selection().modify(|w| w.0 |= 1 << pad);
        } else {
            self.regs
                .pad_select
                .pad_selection_1()
                .modify(|w| w.0 |= 1 << (pad - PAD_SELECT_SPLIT));
        }
        Ok(())
    }

    /// Gives the M4 control of a host interface pad, GPIO_25 to GPIO_30.
    pub fn enable_host_pad(&self, gpio: u8) -> Result<(), Error> {
        if !(HOST_PAD_MIN..=HOST_PAD_MAX).contains(&gpio) {
            return Err(Error::InvalidPin);
        }
        let mut ctrl = NwpMcuhpGpioCtrl2(0);
        ctrl.set_pad_selection_enable(true);
        self.regs.pad_select.nwp_mcuhp_gpio_ctrl2().write_value(ctrl);
        self.regs.misc.misc_ctrl1().modify(|w| {
            let mode = w.host_pads_gpio_mode() | 1 << (gpio - HOST_PAD_MIN);
            w.set_host_pads_gpio_mode(mode);
        });
        Ok(())
    }

    pub fn set_drive_strength(&self, gpio: u8, strength: DriveStrength) -> Result<(), Error> {
        Self::check_pin(gpio)?;
        self.regs
            .pad_config
            .pad_config_reg(gpio as usize)
            .modify(|w| w.set_padconfig_e1_e2(strength as u8));
        Ok(())
    }

    pub fn set_disable_state(&self, gpio: u8, state: DisableState) -> Result<(), Error> {
        Self::check_pin(gpio)?;
        self.regs
            .pad_config
            .pad_config_reg(gpio as usize)
            .modify(|w| w.set_padconfig_p1_p2(state as u8));
        Ok(())
    }

    pub fn enable_ulp_pad_receiver(&self, pin: u8) -> Result<(), Error> {
        if pin > MAX_ULP_PIN {
            return Err(Error::InvalidPin);
        }
        self.regs.ulp_pad.ulp_pad_config_reg().modify(|w| w.0 |= 1 << pin);
        Ok(())
    }

    fn set_receiver(&self, gpio: u8, enable: bool) {
        self.regs
            .pad_config
            .pad_config_reg(gpio as usize)
            .modify(|w| w.set_padconfig_ren(enable));
    }

    /// Routes `pin` to the M4: pad ownership and receiver.
    fn claim(&self, pin: u8) -> Result<(), Error> {
        if pin & ULP != 0 {
            let n = pin & !ULP;
            let pad = *ULP_PAD_TABLE.get(n as usize).ok_or(Error::InvalidPin)?;
            self.enable_pad_selection(pad)?;
            return self.enable_ulp_pad_receiver(n);
        }

        let pad = *PAD_TABLE.get(pin as usize).ok_or(Error::InvalidPin)?;
        if pad != NO_PAD && pad != SHARED_PAD {
            if (HOST_PAD_MIN..=HOST_PAD_MAX).contains(&pin) {
                self.enable_host_pad(pin)?;
            } else {
                self.enable_pad_selection(pad)?;
            }
        }
        self.enable_pad_receiver(pin)
    }
}

/// Pad output drive strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveStrength {
    _2mA = 0,
    #[default]
    _4mA = 1,
    _8mA = 2,
    _12mA = 3,
}

impl TryFrom<u8> for DriveStrength {
    type Error = Error;

    fn try_from(val: u8) -> Result<Self, Error> {
        Ok(match val {
            0 => Self::_2mA,
            1 => Self::_4mA,
            2 => Self::_8mA,
            3 => Self::_12mA,
            _ => return Err(Error::InvalidStrength),
        })
    }
}

/// Pad state while the output driver is off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisableState {
    #[default]
    HiZ = 0,
    PullUp = 1,
    PullDown = 2,
    Repeater = 3,
}

impl TryFrom<u8> for DisableState {
    type Error = Error;

    fn try_from(val: u8) -> Result<Self, Error> {
        Ok(match val {
            0 => Self::HiZ,
            1 => Self::PullUp,
            2 => Self::PullDown,
            3 => Self::Repeater,
            _ => return Err(Error::InvalidDisableState),
        })
    }
}

// - MARK: Flex

/// GPIO flexible pin.
pub struct Flex<'d> {
    pub(crate) pin: PeripheralRef<'d, AnyPin>,
    regs: Regs,
}

impl<'d> Flex<'d> {
    /// Wrap the pin in a `Flex`, as an input in GPIO mode.
    #[inline]
    pub fn new(pin: impl Peripheral<P = impl Pin> + 'd) -> Self {
        Self::with_regs(pin, Regs::hw())
    }

    pub(crate) fn with_regs(pin: impl Peripheral<P = impl Pin> + 'd, regs: Regs) -> Self {
        into_ref!(pin);
        let mut this = Self {
            pin: pin.map_into(),
            regs,
        };
        // the pin types only cover routable pins
        let _ = Pads { regs }.claim(this.pin.pin_port());
        critical_section::with(|_| {
            this.set_low();
            this.pin_config().gpio_config_reg().modify(|w| {
                w.set_mode(0);
                w.set_direction(true);
            });
        });
        this
    }

    fn egpio(&self) -> pac::gpio::Egpio {
        if self.pin.is_ulp() {
            self.regs.ulp_egpio
        } else {
            self.regs.egpio
        }
    }

    fn pin_config(&self) -> pac::gpio::PinConfig {
        self.egpio().pin_config(self.pin._pin() as usize)
    }

    fn port(&self) -> pac::gpio::Port {
        self.egpio().port(self.pin._port() as usize)
    }

    fn mask(&self) -> PortReg {
        PortReg(1 << self.pin._bit())
    }

    /// Put the pin into input mode.
    #[inline]
    pub fn set_as_input(&mut self, pull: Pull) {
        critical_section::with(|_| {
            self.pin_config().gpio_config_reg().modify(|w| w.set_direction(true));
            self.set_pull(pull);
        });
    }

    /// Put the pin into output mode.
    ///
    /// The pin level will be whatever was set before (or low by default).
    #[inline]
    pub fn set_as_output(&mut self) {
        self.pin_config().gpio_config_reg().modify(|w| w.set_direction(false));
    }

    /// Selects the pin function. Mode 0 is GPIO.
    pub fn set_mode(&mut self, mode: u8) -> Result<(), Error> {
        if mode > MAX_MODE {
            return Err(Error::InvalidMode);
        }
        self.pin_config().gpio_config_reg().modify(|w| w.set_mode(mode));
        Ok(())
    }

    pub fn mode(&self) -> u8 {
        self.pin_config().gpio_config_reg().read().mode()
    }

    /// ULP pads have no drive or pull configuration here and ignore these settings.
    pub fn set_drive_strength(&mut self, strength: DriveStrength) {
        if !self.pin.is_ulp() {
            self.regs
                .pad_config
                .pad_config_reg(self.pin._pin() as usize)
                .modify(|w| w.set_padconfig_e1_e2(strength as u8));
        }
    }

    pub fn set_disable_state(&mut self, state: DisableState) {
        if !self.pin.is_ulp() {
            self.regs
                .pad_config
                .pad_config_reg(self.pin._pin() as usize)
                .modify(|w| w.set_padconfig_p1_p2(state as u8));
        }
    }

    #[inline]
    pub fn set_pull(&mut self, pull: Pull) {
        self.set_disable_state(match pull {
            Pull::None => DisableState::HiZ,
            Pull::Up => DisableState::PullUp,
            Pull::Down => DisableState::PullDown,
        });
    }

    /// Get whether the pin input level is high.
    #[inline]
    pub fn is_high(&self) -> bool {
        self.pin_config().bit_load_reg().read().bit_load()
    }

    /// Get whether the pin input level is low.
    #[inline]
    pub fn is_low(&self) -> bool {
        !self.is_high()
    }

    /// Get the current pin input level.
    #[inline]
    pub fn get_level(&self) -> Level {
        self.is_high().into()
    }

    /// Get whether the output level is set to high.
    #[inline]
    pub fn is_set_high(&self) -> bool {
        self.port().port_load_reg().read().0 & self.mask().0 != 0
    }

    /// Get whether the output level is set to low.
    #[inline]
    pub fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }

    /// Get the current output level.
    #[inline]
    pub fn get_output_level(&self) -> Level {
        self.is_set_high().into()
    }

    /// Set the output as high.
    #[inline]
    pub fn set_high(&mut self) {
        self.port().port_set_reg().write_value(self.mask());
    }

    /// Set the output as low.
    #[inline]
    pub fn set_low(&mut self) {
        self.port().port_clear_reg().write_value(self.mask());
    }

    /// Set the output level.
    #[inline]
    pub fn set_level(&mut self, level: Level) {
        match level {
            Level::Low => self.set_low(),
            Level::High => self.set_high(),
        }
    }

    /// Toggle the output level.
    #[inline]
    pub fn toggle(&mut self) {
        self.port().port_toggle_reg().write_value(self.mask());
    }
}

impl<'d> Drop for Flex<'d> {
    #[inline]
    fn drop(&mut self) {
        // back to a GPIO input
        self.pin_config().gpio_config_reg().write(|w| w.set_direction(true));
    }
}

/// Digital input or output level.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Low
    Low,
    /// High
    High,
}

impl From<bool> for Level {
    fn from(val: bool) -> Self {
        match val {
            true => Self::High,
            false => Self::Low,
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> bool {
        match level {
            Level::Low => false,
            Level::High => true,
        }
    }
}

/// Pull setting for an input.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// No pull
    None,
    /// Pull up
    Up,
    /// Pull down
    Down,
}

/// GPIO input driver.
pub struct Input<'d> {
    pub(crate) pin: Flex<'d>,
}

impl<'d> Input<'d> {
    /// Create GPIO input driver for a [Pin] with the provided [Pull] configuration.
    #[inline]
    pub fn new(pin: impl Peripheral<P = impl Pin> + 'd, pull: Pull) -> Self {
        let mut pin = Flex::new(pin);
        pin.set_as_input(pull);
        Self { pin }
    }

    /// Get whether the pin input level is high.
    #[inline]
    pub fn is_high(&self) -> bool {
        self.pin.is_high()
    }

    /// Get whether the pin input level is low.
    #[inline]
    pub fn is_low(&self) -> bool {
        self.pin.is_low()
    }

    /// Get the current pin input level.
    #[inline]
    pub fn get_level(&self) -> Level {
        self.pin.get_level()
    }
}

/// GPIO output driver.
///
/// Note that pins will **return to input** when `Output` is dropped.
/// If pins should retain their state indefinitely, either keep ownership of the
/// `Output`, or pass it to [`core::mem::forget`].
pub struct Output<'d> {
    pub(crate) pin: Flex<'d>,
}

impl<'d> Output<'d> {
    /// Create GPIO output driver for a [Pin] with the provided [Level] and [DriveStrength].
    #[inline]
    pub fn new(pin: impl Peripheral<P = impl Pin> + 'd, initial_output: Level, strength: DriveStrength) -> Self {
        let mut pin = Flex::new(pin);
        pin.set_level(initial_output);
        pin.set_drive_strength(strength);
        pin.set_as_output();
        Self { pin }
    }

    /// Set the output as high.
    #[inline]
    pub fn set_high(&mut self) {
        self.pin.set_high();
    }

    /// Set the output as low.
    #[inline]
    pub fn set_low(&mut self) {
        self.pin.set_low();
    }

    /// Set the output level.
    #[inline]
    pub fn set_level(&mut self, level: Level) {
        self.pin.set_level(level)
    }

    /// Is the output pin set as high?
    #[inline]
    pub fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }

    /// Is the output pin set as low?
    #[inline]
    pub fn is_set_low(&self) -> bool {
        self.pin.is_set_low()
    }

    /// What level output is set to
    #[inline]
    pub fn get_output_level(&self) -> Level {
        self.pin.get_output_level()
    }

    /// Toggle pin output
    #[inline]
    pub fn toggle(&mut self) {
        self.pin.toggle();
    }
}

// - MARK: Pin traits

pub(crate) trait SealedPin: Sized {
    /// HP pin number, or the ULP pin number with the `ULP` flag set.
    fn pin_port(&self) -> u8;

    #[inline]
    fn is_ulp(&self) -> bool {
        self.pin_port() & ULP != 0
    }

    /// Index into the pin configuration array of the owning EGPIO block
    #[inline]
    fn _pin(&self) -> u8 {
        self.pin_port() & !ULP
    }

    #[inline]
    fn _port(&self) -> u8 {
        self._pin() / PORT_PINS
    }

    #[inline]
    fn _bit(&self) -> u8 {
        self._pin() % PORT_PINS
    }
}

#[allow(private_bounds)]
pub trait Pin: Peripheral<P = Self> + Into<AnyPin> + SealedPin + Sized + 'static {
    /// Pin number within its EGPIO block.
    #[inline]
    fn pin(&self) -> u8 {
        self._pin()
    }

    #[inline]
    fn is_ulp_pin(&self) -> bool {
        self.is_ulp()
    }

    #[inline]
    fn degrade(self) -> AnyPin {
        AnyPin {
            pin_port: self.pin_port(),
        }
    }
}

/// Type erased pin.
pub struct AnyPin {
    pin_port: u8,
}
impl_peripheral!(AnyPin);
impl SealedPin for AnyPin {
    fn pin_port(&self) -> u8 {
        self.pin_port
    }
}
impl Pin for AnyPin {}

macro_rules! impl_pins {
    ($($name:ident => $pin_port:expr),* $(,)?) => {
        $(
            impl SealedPin for peripherals::$name {
                #[inline]
                fn pin_port(&self) -> u8 {
                    $pin_port
                }
            }
            impl Pin for peripherals::$name {}
            impl From<peripherals::$name> for AnyPin {
                fn from(x: peripherals::$name) -> Self {
                    x.degrade()
                }
            }
        )*
    };
}

impl_pins!(
    GPIO_6 => 6, GPIO_7 => 7, GPIO_8 => 8, GPIO_9 => 9, GPIO_10 => 10, GPIO_11 => 11,
    GPIO_12 => 12, GPIO_13 => 13, GPIO_14 => 14, GPIO_15 => 15, GPIO_16 => 16, GPIO_17 => 17,
    GPIO_18 => 18, GPIO_19 => 19, GPIO_20 => 20, GPIO_21 => 21, GPIO_22 => 22, GPIO_23 => 23,
    GPIO_24 => 24, GPIO_25 => 25, GPIO_26 => 26, GPIO_27 => 27, GPIO_28 => 28, GPIO_29 => 29,
    GPIO_30 => 30, GPIO_31 => 31, GPIO_32 => 32, GPIO_33 => 33, GPIO_34 => 34, GPIO_35 => 35,
    GPIO_36 => 36, GPIO_37 => 37, GPIO_38 => 38, GPIO_39 => 39, GPIO_40 => 40, GPIO_41 => 41,
    GPIO_42 => 42, GPIO_43 => 43, GPIO_44 => 44, GPIO_45 => 45, GPIO_46 => 46, GPIO_47 => 47,
    GPIO_48 => 48, GPIO_49 => 49, GPIO_50 => 50, GPIO_51 => 51, GPIO_52 => 52, GPIO_53 => 53,
    GPIO_54 => 54, GPIO_55 => 55, GPIO_56 => 56, GPIO_57 => 57,
    ULP_GPIO_0 => ULP | 0, ULP_GPIO_1 => ULP | 1, ULP_GPIO_2 => ULP | 2, ULP_GPIO_3 => ULP | 3,
    ULP_GPIO_4 => ULP | 4, ULP_GPIO_5 => ULP | 5, ULP_GPIO_6 => ULP | 6, ULP_GPIO_7 => ULP | 7,
    ULP_GPIO_8 => ULP | 8, ULP_GPIO_9 => ULP | 9, ULP_GPIO_10 => ULP | 10, ULP_GPIO_11 => ULP | 11,
);

// ====================
// Implement embedded-hal traits

impl<'d> embedded_hal::digital::ErrorType for Input<'d> {
    type Error = Infallible;
}

impl<'d> embedded_hal::digital::InputPin for Input<'d> {
    #[inline]
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok((*self).is_high())
    }

    #[inline]
    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok((*self).is_low())
    }
}

impl<'d> embedded_hal::digital::ErrorType for Output<'d> {
    type Error = Infallible;
}

impl<'d> embedded_hal::digital::OutputPin for Output<'d> {
    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_high();
        Ok(())
    }

    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_low();
        Ok(())
    }
}

impl<'d> embedded_hal::digital::StatefulOutputPin for Output<'d> {
    #[inline]
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok((*self).is_set_high())
    }

    #[inline]
    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok((*self).is_set_low())
    }
}

impl<'d> embedded_hal::digital::ErrorType for Flex<'d> {
    type Error = Infallible;
}

impl<'d> embedded_hal::digital::InputPin for Flex<'d> {
    #[inline]
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok((*self).is_high())
    }

    #[inline]
    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok((*self).is_low())
    }
}

impl<'d> embedded_hal::digital::OutputPin for Flex<'d> {
    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_high();
        Ok(())
    }

    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_low();
        Ok(())
    }
}

impl<'d> embedded_hal::digital::StatefulOutputPin for Flex<'d> {
    #[inline]
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok((*self).is_set_high())
    }

    #[inline]
    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok((*self).is_set_low())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pac::gpio::regs::BitLoadReg;
    use crate::pac::mock;

    fn regs() -> Regs {
        Regs {
            egpio: mock::egpio(),
            ulp_egpio: mock::egpio(),
            pad_config: mock::pad_config(),
            pad_select: mock::pad_select(),
            ulp_pad: mock::ulp_pad(),
            misc: mock::misc(),
        }
    }

    #[test]
    fn pad_table_matches_routing() {
        assert_eq!(PAD_TABLE[6], 1);
        assert_eq!(PAD_TABLE[15], 8);
        assert_eq!(PAD_TABLE[25..=30], [25, 26, 27, 28, 29, 30]);
        assert!(PAD_TABLE[31..=34].iter().all(|&p| p == SHARED_PAD));
        assert_eq!(PAD_TABLE[57], 21);
        assert_eq!(PAD_TABLE[64..], ULP_PAD_TABLE);
        assert!(PAD_TABLE.iter().all(|&p| p <= MAX_PAD));
    }

    #[test]
    fn pad_operations_validate_numbers() {
        let pads = Pads { regs: regs() };
        assert_eq!(pads.enable_pad_receiver(58), Err(Error::InvalidPin));
        assert_eq!(pads.set_drive_strength(58, DriveStrength::_8mA), Err(Error::InvalidPin));
        assert_eq!(pads.set_disable_state(64, DisableState::PullUp), Err(Error::InvalidPin));
        assert_eq!(pads.enable_pad_selection(35), Err(Error::InvalidPad));
        assert_eq!(pads.enable_host_pad(24), Err(Error::InvalidPin));
        assert_eq!(pads.enable_host_pad(31), Err(Error::InvalidPin));
        assert_eq!(pads.enable_ulp_pad_receiver(12), Err(Error::InvalidPin));
        assert_eq!(DriveStrength::try_from(4), Err(Error::InvalidStrength));
        assert_eq!(DisableState::try_from(4), Err(Error::InvalidDisableState));
        assert_eq!(DriveStrength::try_from(3), Ok(DriveStrength::_12mA));
    }

    #[test]
    fn pad_selection_splits_at_22() {
        let r = regs();
        let pads = Pads { regs: r };
        pads.enable_pad_selection(21).unwrap();
        pads.enable_pad_selection(22).unwrap();
        pads.enable_pad_selection(33).unwrap();
        assert_eq!(r.pad_select.pad_selection().read().0, 1 << 21);
        assert_eq!(r.pad_select.pad_selection_1().read().0, (1 << 0) | (1 << 11));
    }

    #[test]
    fn host_pad_hands_over_to_m4() {
        let r = regs();
        let pads = Pads { regs: r };
        pads.enable_host_pad(25).unwrap();
        pads.enable_host_pad(30).unwrap();
        assert!(r.pad_select.nwp_mcuhp_gpio_ctrl2().read().pad_selection_enable());
        assert_eq!(r.misc.misc_ctrl1().read().0, (1 << 13) | (1 << 18));
    }

    #[test]
    fn pad_config_fields() {
        let r = regs();
        let pads = Pads { regs: r };
        pads.enable_pad_receiver(10).unwrap();
        pads.set_drive_strength(10, DriveStrength::_12mA).unwrap();
        pads.set_disable_state(10, DisableState::PullDown).unwrap();
        let cfg = r.pad_config.pad_config_reg(10).read();
        assert!(cfg.padconfig_ren());
        assert_eq!(cfg.padconfig_e1_e2(), 3);
        assert_eq!(cfg.padconfig_p1_p2(), 2);
        pads.disable_pad_receiver(10).unwrap();
        assert!(!r.pad_config.pad_config_reg(10).read().padconfig_ren());
    }

    #[test]
    fn flex_claims_pad_and_drives_port() {
        let r = regs();
        let mut pin = Flex::with_regs(unsafe { peripherals::GPIO_46::steal() }, r);
        assert_eq!(r.pad_select.pad_selection().read().0, 1 << 10);
        assert!(r.pad_config.pad_config_reg(46).read().padconfig_ren());
        assert!(r.egpio.pin_config(46).gpio_config_reg().read().direction());

        pin.set_as_output();
        assert!(!r.egpio.pin_config(46).gpio_config_reg().read().direction());
        pin.set_high();
        // pin 46 is bit 14 of port 2
        assert_eq!(mock::peek(r.egpio.port(2).port_set_reg()).0, 1 << 14);
        pin.toggle();
        assert_eq!(mock::peek(r.egpio.port(2).port_toggle_reg()).0, 1 << 14);
        pin.set_low();
        assert_eq!(mock::peek(r.egpio.port(2).port_clear_reg()).0, 1 << 14);

        assert_eq!(pin.set_mode(8), Err(Error::InvalidMode));
        pin.set_mode(6).unwrap();
        assert_eq!(pin.mode(), 6);

        mock::poke(r.egpio.pin_config(46).bit_load_reg(), BitLoadReg(1));
        assert_eq!(pin.get_level(), Level::High);

        pin.set_pull(Pull::Up);
        assert_eq!(r.pad_config.pad_config_reg(46).read().padconfig_p1_p2(), 1);
    }

    #[test]
    fn host_and_shared_pads() {
        let r = regs();
        let _host = Flex::with_regs(unsafe { peripherals::GPIO_27::steal() }, r);
        assert_eq!(r.misc.misc_ctrl1().read().host_pads_gpio_mode(), 1 << 2);
        assert_eq!(r.pad_select.pad_selection().read().0, 0);

        let _shared = Flex::with_regs(unsafe { peripherals::GPIO_31::steal() }, r);
        assert_eq!(r.pad_select.pad_selection().read().0, 0);
        assert!(r.pad_config.pad_config_reg(31).read().padconfig_ren());
    }

    #[test]
    fn ulp_pin_uses_ulp_block() {
        let r = regs();
        let mut pin = Flex::with_regs(unsafe { peripherals::ULP_GPIO_3::steal() }, r);
        assert_eq!(r.pad_select.pad_selection_1().read().0, 1 << 3);
        assert_eq!(r.ulp_pad.ulp_pad_config_reg().read().0, 1 << 3);
        pin.set_drive_strength(DriveStrength::_12mA);
        assert_eq!(r.pad_config.pad_config_reg(3).read().0, 0);
        pin.set_high();
        assert_eq!(mock::peek(r.ulp_egpio.port(0).port_set_reg()).0, 1 << 3);
    }

    #[test]
    fn drop_returns_to_input() {
        let r = regs();
        {
            let mut pin = Flex::with_regs(unsafe { peripherals::GPIO_10::steal() }, r);
            pin.set_mode(2).unwrap();
            pin.set_as_output();
        }
        let cfg = r.egpio.pin_config(10).gpio_config_reg().read();
        assert!(cfg.direction());
        assert_eq!(cfg.mode(), 0);
    }
}
