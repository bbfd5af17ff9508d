//! MCPWM, the four channel motor control PWM
//!
//! Every channel has its own 16 bit time base, a duty cycle compare and a pair of outputs,
//! `L` and `H`. In complementary mode the pair is driven in antiphase with optional dead time
//! insertion. Interrupt events are the bits of the status register, 0 to 9.

use core::marker::PhantomData;

use embassy_hal_internal::{into_ref, Peripheral};

use crate::clocks::{ClockTree, GateMode, PeripheralClock};
use crate::gpio::Flex;
use crate::internal::{BitIter, Callback};
use crate::pac::common::{Reg, W};
use crate::pac::mcpwm::regs::{ChannelBits, DeadtimeCtrl, FltOverrideCtrl, Intr, OverrideBits, SvtCtrl};
use crate::pac::mcpwm::Mcpwm;
use crate::pac::Interrupt;
use crate::time::Hertz;

pub const CHANNELS: usize = 4;
pub const OUTPUTS: usize = 8;
/// Period, duty cycle and counter initial value are 16 bits
pub const MAX_COUNT_VALUE: u32 = 0xffff;
pub const MAX_DEAD_TIME: u8 = 32;
pub const MAX_DEAD_TIME_PRESCALE: u8 = 3;
pub const MAX_POSTSCALE: u8 = 15;

const EVENT_MASK: u16 = 0x3ff;
const FLT_A_ENABLE: u32 = 1 << 4;
const FLT_B_ENABLE: u32 = 1 << 8;
const OP_OVERRIDE_SYNC: u32 = 1 << 0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Ch0,
    Ch1,
    Ch2,
    Ch3,
}

impl Channel {
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Channel {
    type Error = Error;

    fn try_from(val: u8) -> Result<Self, Error> {
        Ok(match val {
            0 => Self::Ch0,
            1 => Self::Ch1,
            2 => Self::Ch2,
            3 => Self::Ch3,
            _ => return Err(Error::InvalidParameter),
        })
    }
}

/// One of the eight output lines, `L0..L3` then `H0..H3`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Output {
    L0,
    L1,
    L2,
    L3,
    H0,
    H1,
    H2,
    H3,
}

impl Output {
    const fn bit(self) -> u32 {
        1 << self as u32
    }

    pub const fn low(ch: Channel) -> Self {
        match ch {
            Channel::Ch0 => Self::L0,
            Channel::Ch1 => Self::L1,
            Channel::Ch2 => Self::L2,
            Channel::Ch3 => Self::L3,
        }
    }

    pub const fn high(ch: Channel) -> Self {
        match ch {
            Channel::Ch0 => Self::H0,
            Channel::Ch1 => Self::H1,
            Channel::Ch2 => Self::H2,
            Channel::Ch3 => Self::H3,
        }
    }
}

impl TryFrom<u8> for Output {
    type Error = Error;

    fn try_from(val: u8) -> Result<Self, Error> {
        Ok(match val {
            0 => Self::L0,
            1 => Self::L1,
            2 => Self::L2,
            3 => Self::L3,
            4 => Self::H0,
            5 => Self::H1,
            6 => Self::H2,
            7 => Self::H3,
            _ => return Err(Error::InvalidParameter),
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputMode {
    #[default]
    Independent,
    Complementary,
}

/// Time base counting mode. Raw value 3 is reserved.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BaseTimerMode {
    #[default]
    FreeRun = 0,
    SingleEvent = 1,
    DownCount = 2,
    UpDown = 4,
    UpDownDoubleUpdate = 5,
}

impl TryFrom<u8> for BaseTimerMode {
    type Error = Error;

    fn try_from(val: u8) -> Result<Self, Error> {
        Ok(match val {
            0 => Self::FreeRun,
            1 => Self::SingleEvent,
            2 => Self::DownCount,
            4 => Self::UpDown,
            5 => Self::UpDownDoubleUpdate,
            _ => return Err(Error::InvalidParameter),
        })
    }
}

/// Which time base drives the channels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BaseTimer {
    #[default]
    PerChannel,
    Channel0Only,
}

/// Time base input clock prescaler
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Prescale {
    #[default]
    Div1,
    Div2,
    Div4,
    Div8,
    Div16,
    Div32,
    Div64,
}

impl TryFrom<u8> for Prescale {
    type Error = Error;

    fn try_from(val: u8) -> Result<Self, Error> {
        Ok(match val {
            0 => Self::Div1,
            1 => Self::Div2,
            2 => Self::Div4,
            3 => Self::Div8,
            4 => Self::Div16,
            5 => Self::Div32,
            6 => Self::Div64,
            _ => return Err(Error::InvalidParameter),
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeadTimeCounter {
    A,
    B,
}

impl TryFrom<u8> for DeadTimeCounter {
    type Error = Error;

    fn try_from(val: u8) -> Result<Self, Error> {
        match val {
            0 => Ok(Self::A),
            1 => Ok(Self::B),
            _ => Err(Error::InvalidParameter),
        }
    }
}

/// Dead time of one counter. Only the fields of the selected counter are applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeadTimeConfig {
    pub counter: DeadTimeCounter,
    /// Dead time clock is the input clock times `1 << prescale`, 0 to 3
    pub prescale_a: u8,
    pub prescale_b: u8,
    /// Up to 32 dead time clocks
    pub dead_time_a: u8,
    pub dead_time_b: u8,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    A,
    B,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CounterDirection {
    Up,
    Down,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpecialEventDirection {
    CountingUp,
    CountingDown,
}

/// Interrupt events. The discriminant is the status bit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Event {
    /// Period match on channel 0, before the postscaler
    RiseTimePeriodMatchCh0 = 0,
    /// Period match on channel 0, after the postscaler
    TimePeriodMatchCh0 = 1,
    FaultA = 2,
    FaultB = 3,
    RiseTimePeriodMatchCh1 = 4,
    TimePeriodMatchCh1 = 5,
    RiseTimePeriodMatchCh2 = 6,
    TimePeriodMatchCh2 = 7,
    RiseTimePeriodMatchCh3 = 8,
    TimePeriodMatchCh3 = 9,
}

impl Event {
    const ALL: [Event; 10] = [
        Event::RiseTimePeriodMatchCh0,
        Event::TimePeriodMatchCh0,
        Event::FaultA,
        Event::FaultB,
        Event::RiseTimePeriodMatchCh1,
        Event::TimePeriodMatchCh1,
        Event::RiseTimePeriodMatchCh2,
        Event::TimePeriodMatchCh2,
        Event::RiseTimePeriodMatchCh3,
        Event::TimePeriodMatchCh3,
    ];

    pub fn from_bit(bit: u32) -> Option<Self> {
        Self::ALL.get(bit as usize).copied()
    }

    /// Status and mask register bit of this event, for [`Pwm::register_callback`].
    pub const fn mask(self) -> u16 {
        1 << self as u16
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    InvalidParameter,
    /// A callback is already registered
    Busy,
}

impl From<Error> for crate::status::Status {
    fn from(err: Error) -> Self {
        use crate::status::Status;
        match err {
            Error::InvalidParameter => Status::InvalidParameter,
            Error::Busy => Status::Busy,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub channel: Channel,
    /// Output frequency, the period is the core clock divided by it
    pub frequency: Hertz,
    /// Percent of the period, 0 to 100
    pub duty_cycle: u8,
    pub output_mode: OutputMode,
    pub polarity_low: bool,
    pub polarity_high: bool,
    pub counter_initial_value: u32,
    pub base_timer_mode: BaseTimerMode,
    pub base_timer: BaseTimer,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel: Channel::Ch0,
            frequency: Hertz::khz(25),
            duty_cycle: 50,
            output_mode: OutputMode::Independent,
            polarity_low: true,
            polarity_high: true,
            counter_initial_value: 0,
            base_timer_mode: BaseTimerMode::FreeRun,
            base_timer: BaseTimer::PerChannel,
        }
    }
}

pub(crate) struct Info {
    pub(crate) regs: Mcpwm,
    pub(crate) interrupt: Option<Interrupt>,
}

pub(crate) struct State {
    callback: Callback<Event>,
}

impl State {
    pub(crate) const fn new() -> Self {
        Self {
            callback: Callback::new(),
        }
    }
}

peri_trait!();

peri_trait_impl!(
    MCPWM,
    Info {
        regs: crate::pac::MCPWM,
        interrupt: Some(Interrupt::MCPWM),
    }
);

/// MCPWM driver.
pub struct Pwm<'d> {
    info: &'static Info,
    state: &'static State,
    core: Hertz,
    pins: [Option<Flex<'d>>; OUTPUTS],
    _phantom: PhantomData<&'d ()>,
}

impl<'d> Pwm<'d> {
    /// Gates the PWM clock on. The time bases count the M4 core clock.
    pub fn new<T: Instance>(peri: impl Peripheral<P = T> + 'd, clocks: &mut ClockTree) -> Self {
        into_ref!(peri);
        Self::new_inner(T::info(), T::state(), clocks)
    }

    pub(crate) fn new_inner(info: &'static Info, state: &'static State, clocks: &mut ClockTree) -> Self {
        clocks.peripheral_clk_enable(PeripheralClock::Pwm, GateMode::Static);
        Self {
            info,
            state,
            core: clocks.clocks().soc_clock,
            pins: Default::default(),
            _phantom: PhantomData,
        }
    }

    /// Routes `output` to `pin` through pin mode `mux`. The pin is held until the driver drops.
    pub fn set_output_pin(&mut self, output: Output, mut pin: Flex<'d>, mux: u8) -> Result<(), Error> {
        pin.set_mode(mux).map_err(|_| Error::InvalidParameter)?;
        pin.set_as_output();
        self.pins[output as usize] = Some(pin);
        Ok(())
    }

    /// Stops the time bases and gates the PWM clock off.
    pub fn deinit(self, clocks: &mut ClockTree) {
        drop(self);
        clocks.peripheral_clk_disable(PeripheralClock::Pwm);
    }

    /// Programs polarity, period, output mode, duty cycle and base timer of one channel.
    pub fn set_configuration(&mut self, config: &Config) -> Result<(), Error> {
        if config.frequency.0 == 0 || config.duty_cycle > 100 {
            return Err(Error::InvalidParameter);
        }
        let ch = config.channel;
        let rate = self.core.0 / config.frequency.0;

        self.set_polarity(config.polarity_low, config.polarity_high);
        self.set_time_period(ch, rate, config.counter_initial_value)?;
        self.set_output_mode(ch, config.output_mode);
        let period = self.time_period(ch) as u32;
        let ticks = period * config.duty_cycle as u32 / 100;
        self.set_duty_cycle(ch, ticks)?;
        self.set_base_timer_mode(ch, config.base_timer_mode);
        self.select_base_timer(config.base_timer);
        debug!("pwm: ch{} period {} duty {}", ch.index(), period, ticks);
        Ok(())
    }

    /// Output polarity of all `L` and all `H` lines, `true` is active high.
    pub fn set_polarity(&mut self, low: bool, high: bool) {
        let r = self.info.regs;
        let mut l = FltOverrideCtrl(0);
        l.set_op_polarity_l(true);
        let mut h = FltOverrideCtrl(0);
        h.set_op_polarity_h(true);
        for (bits, set) in [(l, low), (h, high)] {
            if set {
                r.pwm_flt_override_ctrl_set().write_value(bits);
            } else {
                r.pwm_flt_override_ctrl_reset().write_value(bits);
            }
        }
    }

    pub fn set_output_mode(&mut self, ch: Channel, mode: OutputMode) {
        let r = self.info.regs;
        let mut bits = FltOverrideCtrl(0);
        bits.set_complementary_mode(1 << ch.index());
        match mode {
            OutputMode::Complementary => r.pwm_flt_override_ctrl_set().write_value(bits),
            OutputMode::Independent => r.pwm_flt_override_ctrl_reset().write_value(bits),
        }
    }

    pub fn start(&mut self, ch: Channel) {
        self.info.regs.ch(ch.index()).pwm_time_prd_ctrl_reg().modify(|w| {
            w.set_time_base_counter_reset(false);
            w.set_time_base_en(true);
        });
    }

    pub fn stop(&mut self, ch: Channel) {
        let ctrl = self.info.regs.ch(ch.index()).pwm_time_prd_ctrl_reg();
        ctrl.modify(|w| w.set_time_base_counter_reset(true));
        ctrl.modify(|w| w.set_time_base_en(false));
    }

    /// Period and counter start value, both up to [`MAX_COUNT_VALUE`].
    pub fn set_time_period(&mut self, ch: Channel, period: u32, initial_value: u32) -> Result<(), Error> {
        if period > MAX_COUNT_VALUE || initial_value > MAX_COUNT_VALUE {
            return Err(Error::InvalidParameter);
        }
        let tb = self.info.regs.ch(ch.index());
        tb.pwm_time_prd_cntr_wr_reg().write(|w| w.set_value(initial_value as u16));
        tb.pwm_time_prd_wr_reg().write(|w| w.set_value(period as u16));
        Ok(())
    }

    pub fn time_period(&self, ch: Channel) -> u16 {
        self.info.regs.ch(ch.index()).pwm_time_prd_wr_reg().read().value()
    }

    /// Compare value in time base ticks, up to [`MAX_COUNT_VALUE`].
    pub fn set_duty_cycle(&mut self, ch: Channel, ticks: u32) -> Result<(), Error> {
        if ticks > MAX_COUNT_VALUE {
            return Err(Error::InvalidParameter);
        }
        self.info
            .regs
            .pwm_dutycycle_reg_wr_value(ch.index())
            .write(|w| w.set_value(ticks as u16));
        Ok(())
    }

    pub fn duty_cycle(&self, ch: Channel) -> u16 {
        self.info.regs.pwm_dutycycle_reg_wr_value(ch.index()).read().value()
    }

    /// Whether a new duty cycle applies at once instead of at the period boundary.
    pub fn set_duty_cycle_immediate_update(&mut self, ch: Channel, immediate: bool) {
        self.write_set_reset(
            ChannelBits(1 << ch.index()),
            immediate,
            |r| r.pwm_duty_ctrl_set(),
            |r| r.pwm_duty_ctrl_reset(),
        );
    }

    /// Freezes the duty cycle register of `ch`.
    pub fn set_duty_cycle_update_disabled(&mut self, ch: Channel, disabled: bool) {
        self.write_set_reset(
            ChannelBits(1 << (4 + ch.index())),
            disabled,
            |r| r.pwm_duty_ctrl_set(),
            |r| r.pwm_duty_ctrl_reset(),
        );
    }

    pub fn set_base_timer_mode(&mut self, ch: Channel, mode: BaseTimerMode) {
        self.info
            .regs
            .ch(ch.index())
            .pwm_time_prd_parm_reg()
            .modify(|w| w.set_tmr_operating_mode(mode as u8));
    }

    pub fn select_base_timer(&mut self, timer: BaseTimer) {
        self.info
            .regs
            .pwm_time_prd_common_reg()
            .modify(|w| w.set_use_0th_timer_only(timer == BaseTimer::Channel0Only));
    }

    /// Output postscale `1:(post + 1)`, `post` below 16.
    pub fn set_period_control(&mut self, ch: Channel, postscale: u8, prescale: Prescale) -> Result<(), Error> {
        if postscale > MAX_POSTSCALE {
            return Err(Error::InvalidParameter);
        }
        self.info.regs.ch(ch.index()).pwm_time_prd_parm_reg().modify(|w| {
            w.set_tmr_output_postscale(postscale);
            w.set_tmr_input_prescale(prescale as u8);
        });
        Ok(())
    }

    /// Programs the prescaler and dead time of the selected counter.
    pub fn configure_dead_time(&mut self, ch: Channel, config: &DeadTimeConfig) -> Result<(), Error> {
        if config.dead_time_a > MAX_DEAD_TIME
            || config.dead_time_b > MAX_DEAD_TIME
            || config.prescale_a > MAX_DEAD_TIME_PRESCALE
            || config.prescale_b > MAX_DEAD_TIME_PRESCALE
        {
            return Err(Error::InvalidParameter);
        }
        let r = self.info.regs;
        let shift = 2 * ch.index();
        let dt = r.deadtime(ch.index());
        match config.counter {
            DeadTimeCounter::A => {
                r.pwm_deadtime_prescale_select_a()
                    .modify(|w| w.0 = (w.0 & !(0b11 << shift)) | ((config.prescale_a as u32) << shift));
                dt.pwm_deadtime_a().write(|w| w.set_deadtime(config.dead_time_a));
            }
            DeadTimeCounter::B => {
                r.pwm_deadtime_prescale_select_b()
                    .modify(|w| w.0 = (w.0 & !(0b11 << shift)) | ((config.prescale_b as u32) << shift));
                dt.pwm_deadtime_b().write(|w| w.set_deadtime(config.dead_time_b));
            }
        }
        Ok(())
    }

    pub fn enable_dead_time(&mut self, ch: Channel, enable: bool) {
        let mut bits = DeadtimeCtrl(0);
        bits.set_dead_time_enable(1 << ch.index());
        self.write_set_reset(
            bits,
            enable,
            |r| r.pwm_deadtime_ctrl_set(),
            |r| r.pwm_deadtime_ctrl_reset(),
        );
    }

    /// Inserts dead time on the active and on the inactive edge of `ch`.
    pub fn select_dead_time(&mut self, ch: Channel, active: bool, inactive: bool) {
        let r = self.info.regs;
        let mut a = DeadtimeCtrl(0);
        a.set_deadtime_select_active(1 << ch.index());
        let mut i = DeadtimeCtrl(0);
        i.set_deadtime_select_inactive(1 << ch.index());
        for (bits, set) in [(a, active), (i, inactive)] {
            if set {
                r.pwm_deadtime_ctrl_set().write_value(bits);
            } else {
                r.pwm_deadtime_ctrl_reset().write_value(bits);
            }
        }
    }

    /// Soft resets the channel.
    pub fn reset_channel(&mut self, ch: Channel) {
        self.info
            .regs
            .ch(ch.index())
            .pwm_time_prd_ctrl_reg()
            .modify(|w| w.set_pwm_sft_rst(true));
    }

    /// Holds the time base counter in reset until the next [`start`](Self::start).
    pub fn reset_counter(&mut self, ch: Channel) {
        self.info
            .regs
            .ch(ch.index())
            .pwm_time_prd_ctrl_reg()
            .modify(|w| w.set_time_base_counter_reset(true));
    }

    pub fn read_counter(&self, ch: Channel) -> u16 {
        self.info.regs.ch(ch.index()).pwm_time_prd_cntr_value().read().value()
    }

    pub fn counter_direction(&self, ch: Channel) -> CounterDirection {
        if self.info.regs.ch(ch.index()).pwm_time_prd_sts_reg().read().time_base_dir_sts() {
            CounterDirection::Down
        } else {
            CounterDirection::Up
        }
    }

    /// Takes manual control of `output`. The driven level comes from [`set_override_value`](Self::set_override_value).
    pub fn set_output_override(&mut self, output: Output, enable: bool) {
        self.write_set_reset(
            OverrideBits(output.bit()),
            enable,
            |r| r.pwm_op_override_enable_set(),
            |r| r.pwm_op_override_enable_reset(),
        );
    }

    pub fn set_override_value(&mut self, output: Output, high: bool) {
        self.write_set_reset(
            OverrideBits(output.bit()),
            high,
            |r| r.pwm_op_override_value_set(),
            |r| r.pwm_op_override_value_reset(),
        );
    }

    /// Applies overrides at the period boundary instead of at once.
    pub fn set_override_sync(&mut self, sync: bool) {
        self.write_set_reset(
            ChannelBits(OP_OVERRIDE_SYNC),
            sync,
            |r| r.pwm_op_override_ctrl_set(),
            |r| r.pwm_op_override_ctrl_reset(),
        );
    }

    /// Level `output` takes while `fault` is asserted.
    pub fn set_fault_value(&mut self, fault: Fault, output: Output, active: bool) {
        let r = self.info.regs;
        let reg = match fault {
            Fault::A => r.pwm_flt_a_override_value(),
            Fault::B => r.pwm_flt_b_override_value(),
        };
        reg.modify(|w| {
            if active {
                w.0 |= output.bit();
            } else {
                w.0 &= !output.bit();
            }
        });
    }

    /// Enables a fault input. In cycle by cycle mode the outputs recover at the next period.
    pub fn enable_fault(&mut self, fault: Fault, enable: bool, cycle_by_cycle: bool) {
        let r = self.info.regs;
        let mut mode = FltOverrideCtrl(0);
        let en = match fault {
            Fault::A => {
                mode.set_flt_a_mode(true);
                FltOverrideCtrl(FLT_A_ENABLE)
            }
            Fault::B => {
                mode.set_flt_b_mode(true);
                FltOverrideCtrl(FLT_B_ENABLE)
            }
        };
        if cycle_by_cycle {
            r.pwm_flt_override_ctrl_set().write_value(mode);
        } else {
            r.pwm_flt_override_ctrl_reset().write_value(mode);
        }
        if enable {
            r.pwm_flt_override_ctrl_set().write_value(en);
        } else {
            r.pwm_flt_override_ctrl_reset().write_value(en);
        }
    }

    /// Special event trigger on `compare` of the channel 0 time base, every `postscale + 1` matches.
    pub fn configure_special_event(
        &mut self,
        direction: SpecialEventDirection,
        postscale: u8,
        compare: u16,
    ) -> Result<(), Error> {
        if postscale > MAX_POSTSCALE {
            return Err(Error::InvalidParameter);
        }
        let r = self.info.regs;
        let mut dir = SvtCtrl(0);
        dir.set_svt_direction(true);
        match direction {
            SpecialEventDirection::CountingDown => r.pwm_svt_ctrl_set().write_value(dir),
            SpecialEventDirection::CountingUp => r.pwm_svt_ctrl_reset().write_value(dir),
        }
        r.pwm_svt_parm().write(|w| w.set_svt_postscaler(postscale));
        r.pwm_svt_compare().write(|w| w.set_value(compare));
        Ok(())
    }

    pub fn enable_special_event(&mut self, enable: bool) {
        let r = self.info.regs;
        let mut en = SvtCtrl(0);
        en.set_svt_trig_en(true);
        if enable {
            r.pwm_svt_ctrl_set().write_value(en);
        } else {
            r.pwm_svt_ctrl_reset().write_value(en);
        }
    }

    pub fn enable_external_trigger(&mut self, enable: bool) {
        self.info
            .regs
            .pwm_time_prd_common_reg()
            .modify(|w| w.set_use_ext_timer_trig(enable));
    }

    /// Registers the event callback and unmasks `events`, a mask of [`Event::mask`] bits.
    pub fn register_callback(&mut self, callback: fn(Event), events: u16) -> Result<(), Error> {
        if events & !EVENT_MASK != 0 {
            return Err(Error::InvalidParameter);
        }
        self.state.callback.register(callback).map_err(|_| Error::Busy)?;
        if let Some(irq) = self.info.interrupt {
            crate::internal::enable_irq(irq);
        }
        self.info.regs.pwm_intr_unmask().write_value(Intr(events as u32));
        Ok(())
    }

    /// Masks `events` and drops the callback.
    pub fn unregister_callback(&mut self, events: u16) {
        self.info.regs.pwm_intr_mask().write_value(Intr((events & EVENT_MASK) as u32));
        self.state.callback.unregister();
    }

    pub fn interrupt_status(&self) -> u16 {
        self.info.regs.pwm_intr_sts().read().0 as u16 & EVENT_MASK
    }

    pub fn clear_interrupt(&mut self, events: u16) {
        self.info
            .regs
            .pwm_intr_ack()
            .write_value(Intr((events & EVENT_MASK) as u32));
    }

    /// Duty cycle handle of one channel for embedded-hal.
    pub fn channel(&mut self, ch: Channel) -> PwmChannel<'_, 'd> {
        PwmChannel { pwm: self, ch }
    }

    fn write_set_reset<T: Copy>(
        &self,
        bits: T,
        set: bool,
        set_reg: impl FnOnce(Mcpwm) -> Reg<T, W>,
        reset_reg: impl FnOnce(Mcpwm) -> Reg<T, W>,
    ) {
        let r = self.info.regs;
        if set {
            set_reg(r).write_value(bits);
        } else {
            reset_reg(r).write_value(bits);
        }
    }
}

impl<'d> Drop for Pwm<'d> {
    fn drop(&mut self) {
        let r = self.info.regs;
        r.pwm_intr_mask().write_value(Intr(EVENT_MASK as u32));
        if let Some(irq) = self.info.interrupt {
            crate::internal::disable_irq(irq);
        }
        self.state.callback.unregister();
        for ch in 0..CHANNELS {
            r.ch(ch).pwm_time_prd_ctrl_reg().modify(|w| w.set_time_base_en(false));
        }
    }
}

/// Interrupt handler. Acks every pending status bit and passes it on as an [`Event`].
pub fn on_interrupt<T: Instance>() {
    handle_interrupt(T::info(), T::state());
}

fn handle_interrupt(info: &Info, state: &State) {
    let r = info.regs;
    let pending = r.pwm_intr_sts().read().0 & EVENT_MASK as u32;
    for bit in BitIter(pending) {
        r.pwm_intr_ack().write_value(Intr(1 << bit));
        if let Some(event) = Event::from_bit(bit) {
            state.callback.call(event);
        }
    }
}

#[cfg(feature = "rt")]
#[no_mangle]
unsafe extern "C" fn IRQ048_Handler() {
    on_interrupt::<crate::peripherals::MCPWM>();
}

/// One channel of a [`Pwm`].
pub struct PwmChannel<'a, 'd> {
    pwm: &'a mut Pwm<'d>,
    ch: Channel,
}

impl<'a, 'd> PwmChannel<'a, 'd> {
    pub fn start(&mut self) {
        self.pwm.start(self.ch);
    }

    pub fn stop(&mut self) {
        self.pwm.stop(self.ch);
    }
}

// ====================
// Implement embedded-hal traits

impl embedded_hal::pwm::Error for Error {
    fn kind(&self) -> embedded_hal::pwm::ErrorKind {
        embedded_hal::pwm::ErrorKind::Other
    }
}

impl<'a, 'd> embedded_hal::pwm::ErrorType for PwmChannel<'a, 'd> {
    type Error = Error;
}

impl<'a, 'd> embedded_hal::pwm::SetDutyCycle for PwmChannel<'a, 'd> {
    fn max_duty_cycle(&self) -> u16 {
        self.pwm.time_period(self.ch)
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.pwm.set_duty_cycle(self.ch, duty as u32)
    }
}

#[cfg(test)]
mod tests {
    use core::sync::atomic::{AtomicU32, Ordering};

    use embedded_hal::pwm::SetDutyCycle;

    use super::*;
    use crate::clocks::tests::{all_ready, tree};
    use crate::pac::mcpwm::regs::TimePrdCtrl;
    use crate::pac::mock;

    fn info() -> &'static Info {
        Box::leak(Box::new(Info {
            regs: mock::mcpwm(),
            interrupt: None,
        }))
    }

    fn state() -> &'static State {
        Box::leak(Box::new(State::new()))
    }

    fn pwm(info: &'static Info, state: &'static State) -> Pwm<'static> {
        let mut clocks = tree();
        all_ready(&clocks);
        // core left at its 32 MHz reset value
        Pwm::new_inner(info, state, &mut clocks)
    }

    #[test]
    fn enum_ranges() {
        assert_eq!(Channel::try_from(4), Err(Error::InvalidParameter));
        assert_eq!(Channel::try_from(3), Ok(Channel::Ch3));
        assert_eq!(Output::try_from(8), Err(Error::InvalidParameter));
        assert_eq!(Output::try_from(5), Ok(Output::H1));
        assert_eq!(BaseTimerMode::try_from(3), Err(Error::InvalidParameter));
        assert_eq!(BaseTimerMode::try_from(6), Err(Error::InvalidParameter));
        assert_eq!(BaseTimerMode::try_from(5), Ok(BaseTimerMode::UpDownDoubleUpdate));
        assert_eq!(Prescale::try_from(7), Err(Error::InvalidParameter));
        assert_eq!(DeadTimeCounter::try_from(2), Err(Error::InvalidParameter));
        assert_eq!(Event::from_bit(9), Some(Event::TimePeriodMatchCh3));
        assert_eq!(Event::from_bit(10), None);
        assert_eq!(Output::high(Channel::Ch2), Output::H2);
    }

    #[test]
    fn configuration_derives_period_from_core_clock() {
        let info = info();
        let mut pwm = pwm(info, state());
        let config = Config {
            channel: Channel::Ch1,
            frequency: Hertz::khz(1),
            duty_cycle: 25,
            output_mode: OutputMode::Complementary,
            base_timer_mode: BaseTimerMode::UpDown,
            ..Config::default()
        };
        pwm.set_configuration(&config).unwrap();
        assert_eq!(pwm.time_period(Channel::Ch1), 32_000);
        assert_eq!(pwm.duty_cycle(Channel::Ch1), 8_000);
        let parm = info.regs.ch(1).pwm_time_prd_parm_reg().read();
        assert_eq!(parm.tmr_operating_mode(), 4);
        // complementary bit of channel 1 was the last set
        let ctrl = mock::peek(info.regs.pwm_flt_override_ctrl_set());
        assert_eq!(ctrl.complementary_mode(), 0b0010);
    }

    #[test]
    fn sixteen_bit_limits() {
        let mut pwm = pwm(info(), state());
        assert_eq!(
            pwm.set_time_period(Channel::Ch0, 65_536, 0),
            Err(Error::InvalidParameter)
        );
        assert_eq!(
            pwm.set_time_period(Channel::Ch0, 100, 65_536),
            Err(Error::InvalidParameter)
        );
        assert_eq!(pwm.set_duty_cycle(Channel::Ch0, 65_536), Err(Error::InvalidParameter));
        pwm.set_time_period(Channel::Ch0, 65_535, 7).unwrap();
        assert_eq!(pwm.time_period(Channel::Ch0), 65_535);

        // 32 MHz / 100 Hz overflows the period register
        let slow = Config {
            frequency: Hertz(100),
            ..Config::default()
        };
        assert_eq!(pwm.set_configuration(&slow), Err(Error::InvalidParameter));
        let zero = Config {
            frequency: Hertz(0),
            ..Config::default()
        };
        assert_eq!(pwm.set_configuration(&zero), Err(Error::InvalidParameter));
    }

    #[test]
    fn start_and_stop_drive_time_base() {
        let info = info();
        let mut pwm = pwm(info, state());
        let ctrl = info.regs.ch(2).pwm_time_prd_ctrl_reg();
        mock::poke(ctrl, TimePrdCtrl(1));
        pwm.start(Channel::Ch2);
        let v = ctrl.read();
        assert!(v.time_base_en());
        assert!(!v.time_base_counter_reset());
        pwm.stop(Channel::Ch2);
        let v = ctrl.read();
        assert!(!v.time_base_en());
        assert!(v.time_base_counter_reset());
    }

    #[test]
    fn dead_time_fields_per_channel() {
        let info = info();
        let mut pwm = pwm(info, state());
        let bad = DeadTimeConfig {
            counter: DeadTimeCounter::A,
            prescale_a: 0,
            prescale_b: 0,
            dead_time_a: 33,
            dead_time_b: 0,
        };
        assert_eq!(pwm.configure_dead_time(Channel::Ch0, &bad), Err(Error::InvalidParameter));
        let bad_prescale = DeadTimeConfig {
            prescale_b: 4,
            dead_time_a: 0,
            ..bad
        };
        assert_eq!(
            pwm.configure_dead_time(Channel::Ch0, &bad_prescale),
            Err(Error::InvalidParameter)
        );

        let a = DeadTimeConfig {
            counter: DeadTimeCounter::A,
            prescale_a: 2,
            prescale_b: 0,
            dead_time_a: 32,
            dead_time_b: 0,
        };
        pwm.configure_dead_time(Channel::Ch1, &a).unwrap();
        pwm.configure_dead_time(Channel::Ch3, &DeadTimeConfig { prescale_a: 3, ..a })
            .unwrap();
        assert_eq!(info.regs.pwm_deadtime_prescale_select_a().read().0, (2 << 2) | (3 << 6));
        assert_eq!(info.regs.deadtime(1).pwm_deadtime_a().read().deadtime(), 32);
        assert_eq!(info.regs.deadtime(1).pwm_deadtime_b().read().deadtime(), 0);

        let b = DeadTimeConfig {
            counter: DeadTimeCounter::B,
            prescale_b: 1,
            dead_time_b: 5,
            ..a
        };
        pwm.configure_dead_time(Channel::Ch2, &b).unwrap();
        assert_eq!(info.regs.pwm_deadtime_prescale_select_b().read().0, 1 << 4);
        assert_eq!(info.regs.deadtime(2).pwm_deadtime_b().read().deadtime(), 5);

        pwm.enable_dead_time(Channel::Ch2, true);
        assert_eq!(mock::peek(info.regs.pwm_deadtime_ctrl_set()).dead_time_enable(), 0b0100);
    }

    #[test]
    fn polarity_and_output_mode_bits() {
        let info = info();
        let mut pwm = pwm(info, state());
        pwm.set_polarity(false, true);
        let set = mock::peek(info.regs.pwm_flt_override_ctrl_set());
        assert!(set.op_polarity_h());
        let reset = mock::peek(info.regs.pwm_flt_override_ctrl_reset());
        assert!(reset.op_polarity_l());

        pwm.set_output_mode(Channel::Ch3, OutputMode::Independent);
        let reset = mock::peek(info.regs.pwm_flt_override_ctrl_reset());
        assert_eq!(reset.0, 1 << 15);
    }

    #[test]
    fn overrides_and_fault_values() {
        let info = info();
        let mut pwm = pwm(info, state());
        pwm.set_output_override(Output::H0, true);
        assert_eq!(mock::peek(info.regs.pwm_op_override_enable_set()).0, 1 << 4);
        pwm.set_override_value(Output::L2, false);
        assert_eq!(mock::peek(info.regs.pwm_op_override_value_reset()).0, 1 << 2);

        pwm.set_fault_value(Fault::B, Output::H3, true);
        pwm.set_fault_value(Fault::B, Output::L0, true);
        pwm.set_fault_value(Fault::B, Output::H3, false);
        assert_eq!(info.regs.pwm_flt_b_override_value().read().0, 1);
        assert_eq!(info.regs.pwm_flt_a_override_value().read().0, 0);

        assert_eq!(pwm.set_period_control(Channel::Ch0, 16, Prescale::Div1), Err(Error::InvalidParameter));
        pwm.set_period_control(Channel::Ch3, 15, Prescale::Div64).unwrap();
        let parm = info.regs.ch(3).pwm_time_prd_parm_reg().read();
        assert_eq!(parm.tmr_output_postscale(), 15);
        assert_eq!(parm.tmr_input_prescale(), 6);
    }

    static EVENTS: AtomicU32 = AtomicU32::new(0);

    fn record(event: Event) {
        EVENTS.fetch_or(1 << event as u32, Ordering::Relaxed);
    }

    fn other(_: Event) {}

    #[test]
    fn interrupt_passes_each_status_bit() {
        let info = info();
        let state = state();
        let mut pwm = pwm(info, state);
        assert_eq!(pwm.register_callback(record, 0x400), Err(Error::InvalidParameter));
        pwm.register_callback(record, Event::FaultA.mask() | Event::TimePeriodMatchCh3.mask())
            .unwrap();
        assert_eq!(pwm.register_callback(other, 0), Err(Error::Busy));
        assert_eq!(mock::peek(info.regs.pwm_intr_unmask()).0, (1 << 2) | (1 << 9));

        mock::poke(info.regs.pwm_intr_sts(), Intr((1 << 2) | (1 << 9) | (1 << 12)));
        handle_interrupt(info, state);
        assert_eq!(EVENTS.load(Ordering::Relaxed), (1 << 2) | (1 << 9));
        // the last ack written
        assert_eq!(mock::peek(info.regs.pwm_intr_ack()).0, 1 << 9);

        pwm.unregister_callback(Event::FaultA.mask());
        assert_eq!(mock::peek(info.regs.pwm_intr_mask()).0, 1 << 2);
        assert!(pwm.register_callback(other, 0).is_ok());
    }

    #[test]
    fn channel_handle_sets_duty() {
        let info = info();
        let mut pwm = pwm(info, state());
        pwm.set_time_period(Channel::Ch0, 1000, 0).unwrap();
        let mut ch = pwm.channel(Channel::Ch0);
        assert_eq!(ch.max_duty_cycle(), 1000);
        ch.set_duty_cycle_percent(40).unwrap();
        ch.start();
        assert_eq!(pwm.duty_cycle(Channel::Ch0), 400);
        assert!(info.regs.ch(0).pwm_time_prd_ctrl_reg().read().time_base_en());
    }
}
