//! I2S, the stereo audio serial interface
//!
//! I2S0 has two stereo channels and can run as master from the I2S PLL. The ULP instance has
//! one channel and is slave only here. Transfers are blocking over the channel FIFOs: each
//! frame is a left sample followed by a right sample.

use core::marker::PhantomData;
use core::sync::atomic::{AtomicBool, Ordering};

use embassy_hal_internal::{into_ref, Peripheral};

use crate::clocks::{self, ClockTree, I2sClockSource, PeripheralClock, Pll, XTAL_FREQ};
use crate::internal::{Callback, SealedWord};
use crate::pac::i2s::regs::{Ccr, Data, Enable, Isr, Wlen};
use crate::pac::i2s::{Channel, I2s as Regs};
use crate::pac::Interrupt;
use crate::status::Status;
use crate::time::Hertz;

pub use crate::internal::Word;

pub const SAMPLE_RATES: [u32; 11] = [
    8_000, 11_025, 16_000, 22_050, 24_000, 32_000, 44_100, 48_000, 88_200, 96_000, 192_000,
];

/// FIFO trigger level, in frames
const FIFO_LEVEL: u8 = 8;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    InvalidParameter,
    Busy,
    Timeout,
    /// Not available on this instance
    Unsupported,
    /// Synchronous operation needs an external bit clock
    Synchronization,
    Clock(clocks::Error),
}

impl From<clocks::Error> for Error {
    fn from(err: clocks::Error) -> Self {
        Self::Clock(err)
    }
}

impl From<Error> for Status {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidParameter => Status::InvalidParameter,
            Error::Busy => Status::Busy,
            Error::Timeout => Status::Timeout,
            Error::Unsupported => Status::NotSupported,
            Error::Synchronization => Status::InvalidConfiguration,
            Error::Clock(err) => err.into(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Drives SCLK and WS
    #[default]
    Master,
    Slave,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Synchronization {
    #[default]
    Asynchronous,
    /// Transmitter and receiver share the external bit clock
    Synchronous,
}

/// Width of the words handed to [`I2s::blocking_write`] and [`I2s::blocking_read`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataSize {
    Bits8,
    Bits16,
    Bits32,
}

impl DataSize {
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bits8 => 8,
            Self::Bits16 => 16,
            Self::Bits32 => 32,
        }
    }
}

/// Sample resolution on the wire.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    Bits16,
    Bits24,
    Bits32,
}

impl Resolution {
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bits16 => 16,
            Self::Bits24 => 24,
            Self::Bits32 => 32,
        }
    }

    /// Word length field of the channel TCR and RCR.
    const fn wlen(self) -> u8 {
        match self {
            Self::Bits16 => 2,
            Self::Bits24 => 4,
            Self::Bits32 => 5,
        }
    }

    /// SCLK gating and word select size of the CCR.
    fn ccr(self) -> Ccr {
        let mut ccr = Ccr(0);
        match self {
            Self::Bits16 => {
                ccr.set_sclkg(2);
                ccr.set_wss(0);
            }
            Self::Bits24 => {
                ccr.set_sclkg(4);
                ccr.set_wss(1);
            }
            Self::Bits32 => {
                ccr.set_sclkg(0);
                ccr.set_wss(2);
            }
        }
        ccr
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    #[default]
    Transmit,
    Receive,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    SendComplete,
    ReceiveComplete,
    /// The transmit FIFO ran dry with no transfer in progress
    TxUnderflow,
    RxOverflow,
    /// A write hit a full transmit FIFO
    FrameError,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub mode: Mode,
    pub synchronization: Synchronization,
    pub data_size: DataSize,
    pub resolution: Resolution,
    /// Frames per second, one of [`SAMPLE_RATES`]
    pub sample_rate: u32,
    pub direction: Direction,
    /// Stereo channel of the instance
    pub channel: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Master,
            synchronization: Synchronization::Asynchronous,
            data_size: DataSize::Bits16,
            resolution: Resolution::Bits16,
            sample_rate: 48_000,
            direction: Direction::Transmit,
            channel: 0,
        }
    }
}

impl Config {
    fn validate(&self, info: &Info) -> Result<(), Error> {
        if !SAMPLE_RATES.contains(&self.sample_rate) || self.channel >= info.channels {
            return Err(Error::InvalidParameter);
        }
        match (self.resolution, self.data_size) {
            (Resolution::Bits16, DataSize::Bits32) => return Err(Error::InvalidParameter),
            (Resolution::Bits24 | Resolution::Bits32, DataSize::Bits8 | DataSize::Bits16) => {
                return Err(Error::InvalidParameter)
            }
            _ => {}
        }
        if self.mode == Mode::Master {
            if info.ulp {
                return Err(Error::Unsupported);
            }
            if self.synchronization == Synchronization::Synchronous {
                return Err(Error::Synchronization);
            }
        }
        Ok(())
    }

    /// SCLK rate in master mode, two samples per frame. Only meaningful once `validate` passed.
    pub(crate) const fn bit_clock(&self) -> Hertz {
        Hertz(self.resolution.bits() * 2 * self.sample_rate)
    }
}

/// Snapshot of the driver and FIFO state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransferStatus {
    pub tx_busy: bool,
    pub rx_busy: bool,
    pub rx_overflow: bool,
    pub tx_overflow: bool,
}

pub(crate) struct Info {
    pub(crate) regs: Regs,
    pub(crate) interrupt: Option<Interrupt>,
    pub(crate) channels: u8,
    /// Clocked from the ULP subsystem
    pub(crate) ulp: bool,
}

pub(crate) struct State {
    callback: Callback<Event>,
    tx_busy: AtomicBool,
    rx_busy: AtomicBool,
}

impl State {
    pub(crate) const fn new() -> Self {
        Self {
            callback: Callback::new(),
            tx_busy: AtomicBool::new(false),
            rx_busy: AtomicBool::new(false),
        }
    }
}

peri_trait!();

peri_trait_impl!(
    I2S0,
    Info {
        regs: crate::pac::I2S0,
        interrupt: Some(Interrupt::I2S0),
        channels: 2,
        ulp: false,
    }
);

peri_trait_impl!(
    ULP_I2S,
    Info {
        regs: crate::pac::ULP_I2S,
        interrupt: None,
        channels: 1,
        ulp: true,
    }
);

/// All interrupt sources masked
fn mask_all() -> Isr {
    let mut imr = Isr(0);
    imr.set_rxda(true);
    imr.set_rxfo(true);
    imr.set_txfe(true);
    imr.set_txfo(true);
    imr
}

/// Blocking I2S driver.
pub struct I2s<'d> {
    info: &'static Info,
    state: &'static State,
    config: Config,
    poll_limit: u32,
    _phantom: PhantomData<&'d ()>,
}

impl<'d> I2s<'d> {
    pub fn new_blocking<T: Instance>(
        peri: impl Peripheral<P = T> + 'd,
        clocks: &mut ClockTree,
        config: Config,
    ) -> Result<Self, Error> {
        into_ref!(peri);
        Self::new_inner(T::info(), T::state(), clocks, config)
    }

    pub(crate) fn new_inner(
        info: &'static Info,
        state: &'static State,
        clocks: &mut ClockTree,
        config: Config,
    ) -> Result<Self, Error> {
        config.validate(info)?;
        for n in 0..info.channels as usize {
            info.regs.chx(n).imr().write_value(mask_all());
        }
        let mut this = Self {
            info,
            state,
            config,
            poll_limit: clocks.poll_limit(),
            _phantom: PhantomData,
        };
        this.set_config(clocks, &config)?;
        Ok(this)
    }

    /// Applies `config`: clock source, CCR, word length and FIFO levels of the selected channel.
    ///
    /// In master mode the I2S PLL is programmed to the bit clock and selected as source.
    pub fn set_config(&mut self, clocks: &mut ClockTree, config: &Config) -> Result<(), Error> {
        config.validate(self.info)?;
        if self.state.tx_busy.load(Ordering::Acquire) || self.state.rx_busy.load(Ordering::Acquire) {
            return Err(Error::Busy);
        }
        self.config = *config;
        let r = self.info.regs;
        let ch = self.ch();

        match config.direction {
            Direction::Transmit => self.flush_tx(),
            Direction::Receive => self.flush_rx(),
        }

        match config.mode {
            Mode::Master => {
                let bit_clock = config.bit_clock();
                debug!("i2s master, sclk {} Hz", bit_clock.0);
                clocks.set_pll_freq(Pll::I2s, bit_clock, XTAL_FREQ)?;
                clocks.i2s_clk_config(I2sClockSource::I2sPll, 0)?;
            }
            Mode::Slave if !self.info.ulp => clocks.i2s_slave_mode(),
            Mode::Slave => {}
        }

        r.ccr().write_value(config.resolution.ccr());
        let wlen = {
            let mut w = Wlen(0);
            w.set_wlen(config.resolution.wlen());
            w
        };
        ch.tcr().write_value(wlen);
        ch.rcr().write_value(wlen);

        r.ier().write_value(Enable(1));
        match config.direction {
            Direction::Transmit => ch.tfcr().modify(|w| w.set_fifo_level(w.fifo_level() | FIFO_LEVEL)),
            Direction::Receive => ch.rfcr().modify(|w| w.set_fifo_level(w.fifo_level() | FIFO_LEVEL)),
        }
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn ch(&self) -> Channel {
        self.info.regs.chx(self.config.channel as usize)
    }

    /// Stops the interface. The I2S clock of I2S0 is gated off.
    pub fn deinit(self, clocks: &mut ClockTree) {
        let ulp = self.info.ulp;
        drop(self);
        if !ulp {
            clocks.peripheral_clk_disable(PeripheralClock::I2sm);
        }
    }

    // - MARK: channel control

    /// Enables or disables the transmitter of the selected channel.
    pub fn enable_transmit(&mut self, on: bool) {
        let r = self.info.regs;
        if on {
            r.ier().write_value(Enable(1));
            r.iter().write_value(Enable(1));
        }
        self.ch().ter().write_value(Enable(on as u32));
    }

    /// Enables or disables the receiver of the selected channel.
    pub fn enable_receive(&mut self, on: bool) {
        let r = self.info.regs;
        if on {
            r.ier().write_value(Enable(1));
            r.irer().write_value(Enable(1));
        }
        self.ch().rer().write_value(Enable(on as u32));
    }

    /// Disables the transmitter and drops the transmit FIFO contents.
    pub fn flush_tx(&mut self) {
        let ch = self.ch();
        ch.ter().write_value(Enable(0));
        ch.tff().write_value(Enable(1));
    }

    /// Disables the receiver and drops the receive FIFO contents.
    pub fn flush_rx(&mut self) {
        let ch = self.ch();
        ch.rer().write_value(Enable(0));
        ch.rff().write_value(Enable(1));
    }

    /// Drops the FIFO contents of every channel.
    pub fn flush_all(&mut self) {
        let r = self.info.regs;
        r.txffr().write_value(Enable(1));
        r.rxffr().write_value(Enable(1));
    }

    fn clock_enable(&self, on: bool) {
        if self.config.mode == Mode::Master {
            self.info.regs.cer().write_value(Enable(on as u32));
        }
    }

    pub fn status(&self) -> TransferStatus {
        let isr = self.ch().isr().read();
        TransferStatus {
            tx_busy: self.state.tx_busy.load(Ordering::Acquire),
            rx_busy: self.state.rx_busy.load(Ordering::Acquire),
            rx_overflow: isr.rxfo(),
            tx_overflow: isr.txfo(),
        }
    }

    // - MARK: callback

    /// Registers the event callback and unmasks the FIFO overrun interrupts.
    pub fn register_callback(&mut self, callback: fn(Event)) -> Result<(), Error> {
        self.state.callback.register(callback).map_err(|_| Error::Busy)?;
        let mut imr = mask_all();
        imr.set_rxfo(false);
        imr.set_txfo(false);
        self.ch().imr().write_value(imr);
        if let Some(irq) = self.info.interrupt {
            crate::internal::enable_irq(irq);
        }
        Ok(())
    }

    pub fn unregister_callback(&mut self) {
        self.ch().imr().write_value(mask_all());
        self.state.callback.unregister();
    }

    // - MARK: transfers

    fn check_word<W: Word>(&self, len: usize) -> Result<(), Error> {
        if W::BITS != self.config.data_size.bits() || len % 2 != 0 {
            return Err(Error::InvalidParameter);
        }
        Ok(())
    }

    fn wait(&self, mut done: impl FnMut(Isr) -> bool) -> Result<(), Error> {
        let ch = self.ch();
        for _ in 0..self.poll_limit {
            if done(ch.isr().read()) {
                return Ok(());
            }
        }
        Err(Error::Timeout)
    }

    /// Sends `data` as interleaved left/right samples. The length must be even.
    pub fn blocking_write<W: Word>(&mut self, data: &[W]) -> Result<(), Error> {
        self.check_word::<W>(data.len())?;
        if self.state.tx_busy.swap(true, Ordering::AcqRel) {
            return Err(Error::Busy);
        }
        let res = self.write_frames(data);
        self.clock_enable(false);
        self.state.tx_busy.store(false, Ordering::Release);
        res?;

        if self.config.mode == Mode::Slave {
            // the external master keeps clocking, report the FIFO running dry
            self.ch().imr().modify(|w| w.set_txfe(false));
        }
        self.state.callback.call(Event::SendComplete);
        Ok(())
    }

    fn write_frames<W: Word>(&mut self, data: &[W]) -> Result<(), Error> {
        let ch = self.ch();
        ch.imr().modify(|w| w.set_txfe(true));
        self.enable_transmit(true);
        self.clock_enable(true);
        for frame in data.chunks_exact(2) {
            self.wait(|isr| isr.txfe())?;
            ch.lrbr_lthr().write_value(Data(frame[0].to_u32()));
            ch.rrbr_rthr().write_value(Data(frame[1].to_u32()));
        }
        if self.config.mode == Mode::Master {
            // two silent frames push the last samples out before the clock stops
            for _ in 0..2 {
                ch.lrbr_lthr().write_value(Data(0));
                ch.rrbr_rthr().write_value(Data(0));
            }
        }
        self.wait(|isr| isr.txfe())
    }

    /// Fills `data` with interleaved left/right samples. The length must be even.
    pub fn blocking_read<W: Word>(&mut self, data: &mut [W]) -> Result<(), Error> {
        self.check_word::<W>(data.len())?;
        if self.state.rx_busy.swap(true, Ordering::AcqRel) {
            return Err(Error::Busy);
        }
        let res = self.read_frames(data);
        self.clock_enable(false);
        self.state.rx_busy.store(false, Ordering::Release);
        res?;
        self.state.callback.call(Event::ReceiveComplete);
        Ok(())
    }

    fn read_frames<W: Word>(&mut self, data: &mut [W]) -> Result<(), Error> {
        let ch = self.ch();
        self.enable_receive(true);
        self.clock_enable(true);
        for frame in data.chunks_exact_mut(2) {
            self.wait(|isr| isr.rxda())?;
            frame[0] = W::from_u32(ch.lrbr_lthr().read().0);
            frame[1] = W::from_u32(ch.rrbr_rthr().read().0);
        }
        Ok(())
    }

    /// Stops the transmitter and flushes its FIFO.
    pub fn abort_transmit(&mut self) {
        self.ch().imr().modify(|w| w.set_txfe(true));
        self.flush_tx();
        self.clock_enable(false);
    }

    /// Stops the receiver and flushes its FIFO.
    pub fn abort_receive(&mut self) {
        self.flush_rx();
        self.clock_enable(false);
    }
}

impl<'d> Drop for I2s<'d> {
    fn drop(&mut self) {
        let r = self.info.regs;
        for n in 0..self.info.channels as usize {
            r.chx(n).imr().write_value(mask_all());
        }
        if let Some(irq) = self.info.interrupt {
            crate::internal::disable_irq(irq);
        }
        self.state.callback.unregister();
        r.cer().write_value(Enable(0));
        r.ier().write_value(Enable(0));
    }
}

/// Interrupt handler. Reports FIFO overruns, and a drained transmit FIFO while idle.
pub fn on_interrupt<T: Instance>() {
    handle_interrupt(T::info(), T::state());
}

fn handle_interrupt(info: &Info, state: &State) {
    for n in 0..info.channels as usize {
        let ch = info.regs.chx(n);
        let imr = ch.imr().read();
        let isr = ch.isr().read();
        if isr.rxfo() && !imr.rxfo() {
            // reading ROR clears the overrun
            let _ = ch.ror().read();
            state.callback.call(Event::RxOverflow);
        }
        if isr.txfo() && !imr.txfo() {
            let _ = ch.tor().read();
            state.callback.call(Event::FrameError);
        }
        if isr.txfe() && !imr.txfe() && !state.tx_busy.load(Ordering::Acquire) {
            ch.imr().modify(|w| w.set_txfe(true));
            state.callback.call(Event::TxUnderflow);
        }
    }
}

#[cfg(feature = "rt")]
#[no_mangle]
unsafe extern "C" fn IRQ064_Handler() {
    on_interrupt::<crate::peripherals::I2S0>();
}

#[cfg(test)]
mod tests {
    use core::sync::atomic::AtomicU32;

    use super::*;
    use crate::clocks::tests::{all_ready, tree};
    use crate::pac::mock;

    fn info(channels: u8, ulp: bool) -> &'static Info {
        Box::leak(Box::new(Info {
            regs: mock::i2s(),
            interrupt: None,
            channels,
            ulp,
        }))
    }

    fn state() -> &'static State {
        Box::leak(Box::new(State::new()))
    }

    fn slave_config() -> Config {
        Config {
            mode: Mode::Slave,
            ..Config::default()
        }
    }

    #[test]
    fn rejects_bad_combinations() {
        let i = info(2, false);
        let bad = [
            Config {
                resolution: Resolution::Bits16,
                data_size: DataSize::Bits32,
                ..Config::default()
            },
            Config {
                resolution: Resolution::Bits24,
                data_size: DataSize::Bits16,
                ..Config::default()
            },
            Config {
                resolution: Resolution::Bits32,
                data_size: DataSize::Bits8,
                ..Config::default()
            },
            Config {
                sample_rate: 12_000,
                ..Config::default()
            },
            Config {
                channel: 2,
                ..Config::default()
            },
        ];
        for config in bad {
            assert_eq!(config.validate(i), Err(Error::InvalidParameter));
        }
        let sync_master = Config {
            synchronization: Synchronization::Synchronous,
            ..Config::default()
        };
        assert_eq!(sync_master.validate(i), Err(Error::Synchronization));
        let sync_slave = Config {
            synchronization: Synchronization::Synchronous,
            ..slave_config()
        };
        assert_eq!(sync_slave.validate(i), Ok(()));
        let wide = Config {
            resolution: Resolution::Bits24,
            data_size: DataSize::Bits32,
            ..Config::default()
        };
        assert_eq!(wide.validate(i), Ok(()));
    }

    #[test]
    fn ulp_instance_is_slave_only() {
        let i = info(1, true);
        assert_eq!(Config::default().validate(i), Err(Error::Unsupported));
        assert_eq!(slave_config().validate(i), Ok(()));
        let ch1 = Config {
            channel: 1,
            ..slave_config()
        };
        assert_eq!(ch1.validate(i), Err(Error::InvalidParameter));
    }

    #[test]
    fn master_programs_i2s_pll_and_format() {
        let mut clocks = tree();
        all_ready(&clocks);
        let i = info(2, false);
        let config = Config {
            resolution: Resolution::Bits24,
            data_size: DataSize::Bits32,
            sample_rate: 48_000,
            channel: 1,
            ..Config::default()
        };
        let _i2s = I2s::new_inner(i, state(), &mut clocks, config).unwrap();

        assert_eq!(clocks.clocks().i2s_pll_clock, Hertz(2_304_000));
        assert!(clocks.regs.misc.misc_ctrl1().read().i2s_master_mode());
        let ccr = i.regs.ccr().read();
        assert_eq!((ccr.sclkg(), ccr.wss()), (4, 1));
        assert_eq!(i.regs.chx(1).tcr().read().wlen(), 4);
        assert_eq!(i.regs.chx(1).tfcr().read().fifo_level(), FIFO_LEVEL);
        assert_eq!(i.regs.chx(0).tcr().read().wlen(), 0);
        assert!(i.regs.ier().read().en());
    }

    #[test]
    fn out_of_table_rate_never_reaches_the_pll() {
        let mut clocks = tree();
        all_ready(&clocks);
        let i = info(2, false);
        assert_eq!(Config::default().bit_clock(), Hertz(1_536_000));
        for sample_rate in [0, 12_345, u32::MAX] {
            let config = Config {
                resolution: Resolution::Bits32,
                data_size: DataSize::Bits32,
                sample_rate,
                ..Config::default()
            };
            let res = I2s::new_inner(i, state(), &mut clocks, config);
            assert_eq!(res.err(), Some(Error::InvalidParameter));
        }
        assert_eq!(clocks.clocks().i2s_pll_clock, Hertz(0));
    }

    #[test]
    fn slave_leaves_master_mode() {
        let mut clocks = tree();
        clocks.regs.misc.misc_ctrl1().modify(|w| w.set_i2s_master_mode(true));
        let i = info(2, false);
        let config = Config {
            direction: Direction::Receive,
            ..slave_config()
        };
        let _i2s = I2s::new_inner(i, state(), &mut clocks, config).unwrap();
        assert!(!clocks.regs.misc.misc_ctrl1().read().i2s_master_mode());
        let ccr = i.regs.ccr().read();
        assert_eq!((ccr.sclkg(), ccr.wss()), (2, 0));
        assert_eq!(i.regs.chx(0).rfcr().read().fifo_level(), FIFO_LEVEL);
    }

    #[test]
    fn frames_go_through_the_fifo() {
        let mut clocks = tree();
        let i = info(2, false);
        let mut i2s = I2s::new_inner(i, state(), &mut clocks, slave_config()).unwrap();
        let ch = i.regs.chx(0);

        assert_eq!(i2s.blocking_write(&[1u16, 2, 3]), Err(Error::InvalidParameter));
        assert_eq!(i2s.blocking_write(&[1u32, 2]), Err(Error::InvalidParameter));

        let mut ready = Isr(0);
        ready.set_txfe(true);
        ready.set_rxda(true);
        mock::poke(ch.isr(), ready);
        i2s.blocking_write(&[0x11u16, 0x22, 0x33, 0x44]).unwrap();
        assert_eq!(ch.lrbr_lthr().read().0, 0x33);
        assert_eq!(ch.rrbr_rthr().read().0, 0x44);
        assert!(ch.ter().read().en());
        assert!(i.regs.iter().read().en());
        // slave mode stops no clock of its own
        assert!(!i.regs.cer().read().en());

        let mut buf = [0u16; 4];
        i2s.blocking_read(&mut buf).unwrap();
        assert_eq!(buf, [0x33, 0x44, 0x33, 0x44]);
        assert!(ch.rer().read().en());
        assert!(!i2s.status().tx_busy);
    }

    #[test]
    fn stuck_fifo_times_out() {
        let mut clocks = tree();
        let s = state();
        let mut i2s = I2s::new_inner(info(2, false), s, &mut clocks, slave_config()).unwrap();
        assert_eq!(i2s.blocking_write(&[1u16, 2]), Err(Error::Timeout));
        let mut buf = [0u16; 2];
        assert_eq!(i2s.blocking_read(&mut buf), Err(Error::Timeout));
        assert!(!s.tx_busy.load(Ordering::Relaxed));
        assert!(!s.rx_busy.load(Ordering::Relaxed));
    }

    #[test]
    fn flush_disables_channel() {
        let mut clocks = tree();
        let i = info(2, false);
        let mut i2s = I2s::new_inner(i, state(), &mut clocks, slave_config()).unwrap();
        let ch = i.regs.chx(0);
        i2s.enable_transmit(true);
        i2s.enable_receive(true);
        i2s.flush_tx();
        assert!(!ch.ter().read().en());
        assert!(mock::peek(ch.tff()).en());
        i2s.flush_rx();
        assert!(!ch.rer().read().en());
        assert!(mock::peek(ch.rff()).en());
    }

    static EVENTS: AtomicU32 = AtomicU32::new(0);

    fn on_event(event: Event) {
        EVENTS.fetch_or(1 << event as u32, Ordering::Relaxed);
    }

    fn other(_: Event) {}

    #[test]
    fn callback_and_interrupt_events() {
        let mut clocks = tree();
        let i = info(2, false);
        let s = state();
        let mut i2s = I2s::new_inner(i, s, &mut clocks, slave_config()).unwrap();
        let ch = i.regs.chx(0);

        i2s.register_callback(on_event).unwrap();
        assert_eq!(i2s.register_callback(other), Err(Error::Busy));
        let imr = ch.imr().read();
        assert!(!imr.rxfo() && !imr.txfo());
        assert!(imr.rxda() && imr.txfe());

        let mut ready = Isr(0);
        ready.set_txfe(true);
        mock::poke(ch.isr(), ready);
        i2s.blocking_write(&[5u16, 6]).unwrap();
        assert!(!ch.imr().read().txfe());

        let mut pending = ready;
        pending.set_rxfo(true);
        pending.set_txfo(true);
        mock::poke(ch.isr(), pending);
        handle_interrupt(i, s);

        let seen = EVENTS.load(Ordering::Relaxed);
        for event in [Event::SendComplete, Event::TxUnderflow, Event::RxOverflow, Event::FrameError] {
            assert_ne!(seen & (1 << event as u32), 0, "{:?}", event);
        }
        // underflow is reported once
        assert!(ch.imr().read().txfe());

        i2s.unregister_callback();
        i2s.register_callback(other).unwrap();
    }
}
