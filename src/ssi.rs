//! SSI, Synchronous Serial Interface
//!
//! Three controllers: the HP master (`SSI_MASTER`), the HP slave (`SSI_SLAVE`) and the ULP
//! master (`ULP_SSI`). Transfers are blocking and full duplex over the FIFO. A callback can
//! be registered per instance and is called with [`Event`]s from the blocking paths and the
//! interrupt handler.

use core::marker::PhantomData;

use embassy_hal_internal::{into_ref, Peripheral};

use crate::clocks::pll::{INTF_PLL, SOC_PLL};
use crate::clocks::{self, ClockTree, GateMode, M4SocClockSource, PeripheralClock, SsiClockSource};
use crate::gpio::Output;
use crate::internal::{Callback, SealedWord};
use crate::pac::ssi::regs::{Ctrlr0, Dr, Ftlr, Isr, Ser, Ssienr};
use crate::pac::Interrupt;
use crate::time::Hertz;

pub const MAX_BAUDRATE: Hertz = Hertz(40_000_000);
pub const MIN_BIT_WIDTH: u8 = 4;
pub const MAX_BIT_WIDTH: u8 = 32;
/// Exclusive bound of the slave frame width
pub const MAX_SLAVE_BIT_WIDTH: u8 = 16;
pub const MAX_SLAVE_SELECT: u8 = 3;

const FRF_MOTOROLA: u8 = 0;
const FRF_TI_SSP: u8 = 1;
const FRF_MICROWIRE: u8 = 2;
const TMOD_TX_RX: u8 = 0;

/// Clock polarity and phase, or one of the two non SPI frame formats.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockMode {
    #[default]
    Cpol0Cpha0,
    Cpol0Cpha1,
    Cpol1Cpha0,
    Cpol1Cpha1,
    TiSsi,
    Microwire,
}

impl TryFrom<u8> for ClockMode {
    type Error = Error;

    fn try_from(val: u8) -> Result<Self, Error> {
        Ok(match val {
            0 => Self::Cpol0Cpha0,
            1 => Self::Cpol0Cpha1,
            2 => Self::Cpol1Cpha0,
            3 => Self::Cpol1Cpha1,
            4 => Self::TiSsi,
            5 => Self::Microwire,
            _ => return Err(Error::InvalidParameter),
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceMode {
    #[default]
    Master,
    Slave,
    UlpMaster,
}

/// Slave select handling on a master
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MasterSsm {
    Unused,
    /// Driven as a GPIO by the driver, needs a CS pin
    Software,
    /// Driven by the controller
    #[default]
    HardwareOutput,
}

/// Slave select handling on a slave
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlaveSsm {
    #[default]
    Hardware,
    Software,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Frame width in bits, 4 to 32. Below 16 on the slave.
    pub bit_width: u8,
    pub device_mode: DeviceMode,
    pub clock_mode: ClockMode,
    pub master_ssm: MasterSsm,
    pub slave_ssm: SlaveSsm,
    pub baud_rate: Hertz,
    /// Slave select line driven by a master, 0 to 3
    pub slave_select: u8,
    /// SSI master kernel clock, ignored by the other instances
    pub clock_source: SsiClockSource,
    pub clock_div: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bit_width: 8,
            device_mode: DeviceMode::Master,
            clock_mode: ClockMode::Cpol0Cpha0,
            master_ssm: MasterSsm::HardwareOutput,
            slave_ssm: SlaveSsm::Hardware,
            baud_rate: Hertz::mhz(10),
            slave_select: 0,
            clock_source: SsiClockSource::SocPll,
            clock_div: 1,
        }
    }
}

/// PLL setup for [`configure_clock`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    pub intf_pll_clock: Hertz,
    pub intf_pll_reference_clock: Hertz,
    pub soc_pll_reference_clock: Hertz,
    /// M4 SoC clock divider while running from the interface PLL
    pub division_factor: u8,
    pub soc_pll_mm_count_value: u8,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            intf_pll_clock: Hertz::mhz(180),
            intf_pll_reference_clock: clocks::XTAL_FREQ,
            soc_pll_reference_clock: clocks::XTAL_FREQ,
            division_factor: 1,
            soc_pll_mm_count_value: 0xa4,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    TransferComplete,
    /// Overrun, or a transfer the driver had no buffer for
    DataLost,
    ModeFault,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    InvalidParameter,
    /// Device mode not available on this instance
    Unsupported,
    SlaveSelectMode,
    DataBits,
    /// A callback is already registered
    Busy,
    Timeout,
    Clock(clocks::Error),
}

impl From<clocks::Error> for Error {
    fn from(err: clocks::Error) -> Self {
        Error::Clock(err)
    }
}

impl From<Error> for crate::status::Status {
    fn from(err: Error) -> Self {
        use crate::status::{DriverError, Status};
        match err {
            Error::InvalidParameter => Status::InvalidParameter,
            Error::Unsupported => DriverError::Unsupported.into(),
            Error::SlaveSelectMode => DriverError::SpiSsMode.into(),
            Error::DataBits => DriverError::SpiDataBits.into(),
            Error::Busy => Status::Busy,
            Error::Timeout => Status::Timeout,
            Error::Clock(e) => e.into(),
        }
    }
}

/// Programs the interface PLL, moves the core onto it and sets the SoC PLL to twice
/// `baud_rate`, the SSI master kernel clock.
pub fn configure_clock(clocks: &mut ClockTree, config: &ClockConfig, baud_rate: Hertz) -> Result<(), Error> {
    if baud_rate.0 == 0 || baud_rate > MAX_BAUDRATE {
        return Err(Error::InvalidParameter);
    }
    let soc_pll_clock = baud_rate * 2;
    let in_range = |f: Hertz, min: Hertz, max: Hertz| f >= min && f <= max;
    if !in_range(config.intf_pll_clock, INTF_PLL.min, INTF_PLL.max)
        || !in_range(config.intf_pll_reference_clock, INTF_PLL.min, INTF_PLL.max)
        || !in_range(soc_pll_clock, SOC_PLL.min, SOC_PLL.max)
        || !in_range(config.soc_pll_reference_clock, SOC_PLL.min, SOC_PLL.max)
        || config.division_factor >= clocks::SOC_MAX_CLK_DIVISION_FACTOR
    {
        return Err(Error::InvalidParameter);
    }

    clocks.set_intf_pll_freq(config.intf_pll_clock, config.intf_pll_reference_clock)?;
    clocks.m4_soc_clk_config(M4SocClockSource::IntfPll, config.division_factor)?;
    clocks.pll_lock_config(true, true, config.soc_pll_mm_count_value);
    clocks.set_soc_pll_freq(soc_pll_clock, config.soc_pll_reference_clock)?;
    debug!("ssi: soc pll at {} Hz", soc_pll_clock.0);
    Ok(())
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Kind {
    Master,
    Slave,
    UlpMaster,
}

impl Kind {
    /// The master controllers carry the 32 bit frame size field.
    fn wide_frames(self) -> bool {
        self != Kind::Slave
    }
}

pub(crate) struct Info {
    pub(crate) regs: crate::pac::ssi::Ssi,
    pub(crate) interrupt: Option<Interrupt>,
    pub(crate) kind: Kind,
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
    SSI_MASTER,
    Info {
        regs: crate::pac::SSI_MASTER,
        interrupt: Some(Interrupt::SSI_MASTER),
        kind: Kind::Master,
    }
);
peri_trait_impl!(
    SSI_SLAVE,
    Info {
        regs: crate::pac::SSI_SLAVE,
        interrupt: Some(Interrupt::SSI_SLAVE),
        kind: Kind::Slave,
    }
);
peri_trait_impl!(
    ULP_SSI,
    Info {
        regs: crate::pac::ULP_SSI,
        interrupt: None,
        kind: Kind::UlpMaster,
    }
);

pub use crate::internal::Word;

/// Blocking SSI driver.
pub struct Ssi<'d> {
    info: &'static Info,
    state: &'static State,
    cs: Option<Output<'d>>,
    config: Config,
    kernel: Hertz,
    poll_limit: u32,
    _phantom: PhantomData<&'d ()>,
}

impl<'d> Ssi<'d> {
    /// Creates the driver. Master instances in [`MasterSsm::Software`] mode take `cs`.
    pub fn new_blocking<T: Instance>(
        peri: impl Peripheral<P = T> + 'd,
        clocks: &mut ClockTree,
        cs: Option<Output<'d>>,
        config: Config,
    ) -> Result<Self, Error> {
        into_ref!(peri);
        Self::new_inner(T::info(), T::state(), clocks, cs, config)
    }

    pub(crate) fn new_inner(
        info: &'static Info,
        state: &'static State,
        clocks: &mut ClockTree,
        cs: Option<Output<'d>>,
        config: Config,
    ) -> Result<Self, Error> {
        validate(info.kind, &config)?;
        if config.master_ssm == MasterSsm::Software && cs.is_none() && info.kind != Kind::Slave {
            return Err(Error::SlaveSelectMode);
        }

        let kernel = match info.kind {
            Kind::Master => {
                clocks.ssi_mst_clk_config(GateMode::Static, config.clock_source, config.clock_div)?;
                master_kernel_clock(clocks, config.clock_source, config.clock_div)
            }
            Kind::Slave => {
                clocks.peripheral_clk_enable(PeripheralClock::SsiSlave, GateMode::Static);
                clocks.clocks().soc_clock
            }
            Kind::UlpMaster => clocks.clocks().ulp_ref_clock,
        };

        let mut this = Self {
            info,
            state,
            cs,
            config,
            kernel,
            poll_limit: clocks.poll_limit(),
            _phantom: PhantomData,
        };
        this.reconfigure();
        if let Some(irq) = info.interrupt {
            crate::internal::enable_irq(irq);
        }
        Ok(this)
    }

    fn reconfigure(&mut self) {
        let r = self.info.regs;
        let config = &self.config;
        r.ssienr().write_value(Ssienr(0));

        let mut ctrl = Ctrlr0(0);
        let (frf, cpol, cpha) = match config.clock_mode {
            ClockMode::Cpol0Cpha0 => (FRF_MOTOROLA, false, false),
            ClockMode::Cpol0Cpha1 => (FRF_MOTOROLA, false, true),
            ClockMode::Cpol1Cpha0 => (FRF_MOTOROLA, true, false),
            ClockMode::Cpol1Cpha1 => (FRF_MOTOROLA, true, true),
            ClockMode::TiSsi => (FRF_TI_SSP, false, false),
            ClockMode::Microwire => (FRF_MICROWIRE, false, false),
        };
        ctrl.set_frf(frf);
        ctrl.set_scpol(cpol);
        ctrl.set_scph(cpha);
        ctrl.set_tmod(TMOD_TX_RX);
        if self.info.kind.wide_frames() {
            ctrl.set_dfs_32(config.bit_width - 1);
        } else {
            ctrl.set_dfs(config.bit_width - 1);
        }
        r.ctrlr0().write_value(ctrl);

        if self.info.kind != Kind::Slave {
            r.baudr().write(|w| w.set_sckdv(sck_divider(self.kernel, config.baud_rate)));
        }
        r.txftlr().write_value(Ftlr(0));
        r.rxftlr().write_value(Ftlr(0));
        // overrun and mode fault only, data moves by polling
        let mut mask = Isr(0);
        mask.set_txoi(true);
        mask.set_rxoi(true);
        mask.set_msti(self.info.kind != Kind::Slave);
        r.imr().write_value(mask);
        r.ser().write_value(Ser(0));
        if let Some(cs) = self.cs.as_mut() {
            cs.set_high();
        }
        r.ssienr().write_value(Ssienr(1));
    }

    /// Applies a new configuration. The kernel clock is left as it is.
    pub fn set_configuration(&mut self, config: Config) -> Result<(), Error> {
        validate(self.info.kind, &config)?;
        if config.master_ssm == MasterSsm::Software && self.cs.is_none() && self.info.kind != Kind::Slave {
            return Err(Error::SlaveSelectMode);
        }
        self.config = config;
        self.reconfigure();
        Ok(())
    }

    /// Changes the frame width, 4 to 16 bits.
    pub fn set_frame_length(&mut self, bits: u8) -> Result<(), Error> {
        if !(MIN_BIT_WIDTH..=MAX_SLAVE_BIT_WIDTH).contains(&bits) {
            return Err(Error::DataBits);
        }
        let r = self.info.regs;
        r.ssienr().write_value(Ssienr(0));
        r.ctrlr0().modify(|w| {
            if self.info.kind.wide_frames() {
                w.set_dfs_32(bits - 1);
            } else {
                w.set_dfs(bits - 1);
            }
        });
        r.ssienr().write_value(Ssienr(1));
        self.config.bit_width = bits;
        Ok(())
    }

    /// Even divider between the kernel clock and the bus clock.
    pub fn clock_division_factor(&self) -> u16 {
        self.info.regs.baudr().read().sckdv()
    }

    /// Frame width in bits.
    pub fn frame_length(&self) -> u8 {
        let ctrl = self.info.regs.ctrlr0().read();
        if self.info.kind.wide_frames() {
            ctrl.dfs_32() + 1
        } else {
            ctrl.dfs() + 1
        }
    }

    pub fn tx_fifo_level(&self) -> u8 {
        self.info.regs.txflr().read().level()
    }

    pub fn rx_fifo_level(&self) -> u8 {
        self.info.regs.rxflr().read().level()
    }

    pub fn is_busy(&self) -> bool {
        self.info.regs.sr().read().busy()
    }

    // - MARK: callback

    pub fn register_callback(&mut self, callback: fn(Event)) -> Result<(), Error> {
        self.state.callback.register(callback).map_err(|_| Error::Busy)
    }

    pub fn unregister_callback(&mut self) {
        self.state.callback.unregister();
    }

    // - MARK: transfers

    fn select(&mut self) {
        if self.info.kind == Kind::Slave {
            return;
        }
        match self.config.master_ssm {
            MasterSsm::HardwareOutput => {
                let line = self.config.slave_select;
                self.info.regs.ser().modify(|w| w.set_ser(w.ser() | 1 << line));
            }
            MasterSsm::Software => {
                if let Some(cs) = self.cs.as_mut() {
                    cs.set_low();
                }
            }
            MasterSsm::Unused => {}
        }
    }

    fn deselect(&mut self) {
        if self.info.kind == Kind::Slave {
            return;
        }
        match self.config.master_ssm {
            MasterSsm::HardwareOutput => {
                let line = self.config.slave_select;
                self.info.regs.ser().modify(|w| w.set_ser(w.ser() & !(1 << line)));
            }
            MasterSsm::Software => {
                if let Some(cs) = self.cs.as_mut() {
                    cs.set_high();
                }
            }
            MasterSsm::Unused => {}
        }
    }

    /// Frames wider than `W` would lose their high bits on read.
    fn check_word<W: Word>(&self) -> Result<(), Error> {
        if W::BITS < self.config.bit_width as u32 {
            return Err(Error::InvalidParameter);
        }
        Ok(())
    }

    fn wait(&self, mut done: impl FnMut(crate::pac::ssi::regs::Sr) -> bool) -> Result<(), Error> {
        for _ in 0..self.poll_limit {
            if done(self.info.regs.sr().read()) {
                return Ok(());
            }
        }
        Err(Error::Timeout)
    }

    /// Clocks `max(read.len(), write.len())` frames, sending zeros past the end of `write`
    /// and dropping frames past the end of `read`.
    fn blocking_transfer_inner<W: Word>(&mut self, read: &mut [W], write: &[W]) -> Result<(), Error> {
        let len = read.len().max(write.len());
        if len == 0 {
            return Err(Error::InvalidParameter);
        }
        self.check_word::<W>()?;
        let r = self.info.regs;
        self.select();
        let res = (|| {
            for i in 0..len {
                let out = write.get(i).copied().unwrap_or_default();
                self.wait(|sr| sr.tfnf())?;
                r.dr().write_value(Dr(out.to_u32()));
                self.wait(|sr| sr.rfne())?;
                let val = W::from_u32(r.dr().read().0);
                if let Some(slot) = read.get_mut(i) {
                    *slot = val;
                }
            }
            self.wait(|sr| sr.tfe() && !sr.busy())
        })();
        match res {
            Ok(()) => {
                on_transfer_complete(self);
                Ok(())
            }
            Err(e) => {
                self.deselect();
                Err(e)
            }
        }
    }

    pub fn blocking_write<W: Word>(&mut self, data: &[W]) -> Result<(), Error> {
        self.blocking_transfer_inner::<W>(&mut [], data)
    }

    pub fn blocking_read<W: Word>(&mut self, data: &mut [W]) -> Result<(), Error> {
        self.blocking_transfer_inner::<W>(data, &[])
    }

    /// Full duplex transfer, `read` and `write` must have the same length.
    pub fn blocking_transfer<W: Word>(&mut self, read: &mut [W], write: &[W]) -> Result<(), Error> {
        if read.len() != write.len() {
            return Err(Error::InvalidParameter);
        }
        self.blocking_transfer_inner(read, write)
    }

    pub fn blocking_transfer_in_place<W: Word>(&mut self, data: &mut [W]) -> Result<(), Error> {
        if data.is_empty() {
            return Err(Error::InvalidParameter);
        }
        self.check_word::<W>()?;
        let r = self.info.regs;
        self.select();
        let res = (|| {
            for word in data.iter_mut() {
                self.wait(|sr| sr.tfnf())?;
                r.dr().write_value(Dr(word.to_u32()));
                self.wait(|sr| sr.rfne())?;
                *word = W::from_u32(r.dr().read().0);
            }
            self.wait(|sr| sr.tfe() && !sr.busy())
        })();
        match res {
            Ok(()) => {
                on_transfer_complete(self);
                Ok(())
            }
            Err(e) => {
                self.deselect();
                Err(e)
            }
        }
    }
}

impl<'d> Drop for Ssi<'d> {
    fn drop(&mut self) {
        if let Some(irq) = self.info.interrupt {
            crate::internal::disable_irq(irq);
        }
        self.info.regs.ssienr().write_value(Ssienr(0));
    }
}

/// Transfer completion releases the slave select before the callback runs.
fn on_transfer_complete(ssi: &mut Ssi<'_>) {
    ssi.deselect();
    ssi.state.callback.call(Event::TransferComplete);
}

fn validate(kind: Kind, config: &Config) -> Result<(), Error> {
    if config.baud_rate > MAX_BAUDRATE || config.baud_rate.0 == 0 {
        return Err(Error::InvalidParameter);
    }
    if !(MIN_BIT_WIDTH..=MAX_BIT_WIDTH).contains(&config.bit_width) {
        return Err(Error::InvalidParameter);
    }
    if config.device_mode == DeviceMode::Slave && config.bit_width >= MAX_SLAVE_BIT_WIDTH {
        return Err(Error::InvalidParameter);
    }
    if config.slave_select > MAX_SLAVE_SELECT {
        return Err(Error::InvalidParameter);
    }
    let mode_fits = matches!(
        (kind, config.device_mode),
        (Kind::Master, DeviceMode::Master) | (Kind::Slave, DeviceMode::Slave) | (Kind::UlpMaster, DeviceMode::UlpMaster)
    );
    if !mode_fits {
        return Err(Error::Unsupported);
    }
    if kind == Kind::Slave && config.slave_ssm == SlaveSsm::Software {
        return Err(Error::SlaveSelectMode);
    }
    Ok(())
}

fn master_kernel_clock(clocks: &ClockTree, source: SsiClockSource, div: u8) -> Hertz {
    let c = clocks.clocks();
    let freq = match source {
        SsiClockSource::UlpRef => c.ulp_ref_clock,
        SsiClockSource::SocPll => c.soc_pll_clock,
        SsiClockSource::ModemPll1 | SsiClockSource::ModemPll2 => c.modem_pll_clock,
        SsiClockSource::IntfPll => c.intf_pll_clock,
        SsiClockSource::M4SocForOthers => c.soc_clock,
    };
    if div > 1 {
        freq / div as u32
    } else {
        freq
    }
}

/// SCKDV is even and at least 2.
fn sck_divider(kernel: Hertz, baud: Hertz) -> u16 {
    let div = (kernel.0 / baud.0).clamp(2, 0xfffe);
    (div + (div & 1)) as u16
}

/// Handles the interrupt of `T`: overruns report [`Event::DataLost`], a lost slave select
/// [`Event::ModeFault`].
pub fn on_interrupt<T: Instance>() {
    handle_interrupt(T::info(), T::state());
}

fn handle_interrupt(info: &Info, state: &State) {
    let r = info.regs;
    let isr = r.isr().read();
    let _ = r.icr().read();
    if isr.txoi() || isr.rxoi() {
        state.callback.call(Event::DataLost);
    }
    if isr.msti() {
        state.callback.call(Event::ModeFault);
    }
}

#[cfg(feature = "rt")]
#[no_mangle]
unsafe extern "C" fn IRQ047_Handler() {
    on_interrupt::<crate::peripherals::SSI_MASTER>();
}

#[cfg(feature = "rt")]
#[no_mangle]
unsafe extern "C" fn IRQ044_Handler() {
    on_interrupt::<crate::peripherals::SSI_SLAVE>();
}

impl<'d> Ssi<'d> {
    /// Queues one frame when the transmit FIFO has room. Slave select is left as it is.
    pub fn nb_write<W: Word>(&mut self, word: W) -> nb::Result<(), Error> {
        self.check_word::<W>()?;
        let r = self.info.regs;
        if r.sr().read().tfnf() {
            r.dr().write_value(Dr(word.to_u32()));
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }

    /// Pops one received frame.
    pub fn nb_read<W: Word>(&mut self) -> nb::Result<W, Error> {
        self.check_word::<W>()?;
        let r = self.info.regs;
        if r.sr().read().rfne() {
            Ok(W::from_u32(r.dr().read().0))
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}

// ====================
// Implement embedded-hal traits

impl embedded_hal::spi::Error for Error {
    fn kind(&self) -> embedded_hal::spi::ErrorKind {
        match *self {
            Error::Timeout => embedded_hal::spi::ErrorKind::Overrun,
            _ => embedded_hal::spi::ErrorKind::Other,
        }
    }
}

impl<'d> embedded_hal::spi::ErrorType for Ssi<'d> {
    type Error = Error;
}

impl<'d, W: Word> embedded_hal::spi::SpiBus<W> for Ssi<'d> {
    fn read(&mut self, words: &mut [W]) -> Result<(), Self::Error> {
        if words.is_empty() {
            return Ok(());
        }
        self.blocking_read(words)
    }

    fn write(&mut self, words: &[W]) -> Result<(), Self::Error> {
        if words.is_empty() {
            return Ok(());
        }
        self.blocking_write(words)
    }

    fn transfer(&mut self, read: &mut [W], write: &[W]) -> Result<(), Self::Error> {
        if read.is_empty() && write.is_empty() {
            return Ok(());
        }
        self.blocking_transfer_inner(read, write)
    }

    fn transfer_in_place(&mut self, words: &mut [W]) -> Result<(), Self::Error> {
        if words.is_empty() {
            return Ok(());
        }
        self.blocking_transfer_in_place(words)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.wait(|sr| sr.tfe() && !sr.busy())
    }
}

impl<'d, W: Word> embedded_hal_nb::spi::FullDuplex<W> for Ssi<'d> {
    fn read(&mut self) -> nb::Result<W, Self::Error> {
        self.nb_read()
    }

    fn write(&mut self, word: W) -> nb::Result<(), Self::Error> {
        self.nb_write(word)
    }
}

#[cfg(test)]
mod tests {
    use core::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::clocks::tests::{all_ready, tree};
    use crate::pac::mock;
    use crate::pac::ssi::regs::Sr;

    fn info(kind: Kind) -> &'static Info {
        Box::leak(Box::new(Info {
            regs: mock::ssi(),
            interrupt: None,
            kind,
        }))
    }

    fn state() -> &'static State {
        Box::leak(Box::new(State::new()))
    }

    fn ready_sr(info: &Info) {
        // tfnf, tfe, rfne
        mock::poke(info.regs.sr(), Sr(0b1110));
    }

    #[test]
    fn config_validation() {
        let ok = Config::default();
        assert_eq!(validate(Kind::Master, &ok), Ok(()));
        let too_fast = Config {
            baud_rate: Hertz(40_000_001),
            ..ok
        };
        assert_eq!(validate(Kind::Master, &too_fast), Err(Error::InvalidParameter));
        for bits in [3, 33] {
            let c = Config { bit_width: bits, ..ok };
            assert_eq!(validate(Kind::Master, &c), Err(Error::InvalidParameter));
        }
        let wide_slave = Config {
            bit_width: 16,
            device_mode: DeviceMode::Slave,
            ..ok
        };
        assert_eq!(validate(Kind::Slave, &wide_slave), Err(Error::InvalidParameter));
        let slave = Config {
            bit_width: 15,
            device_mode: DeviceMode::Slave,
            ..ok
        };
        assert_eq!(validate(Kind::Slave, &slave), Ok(()));
        assert_eq!(validate(Kind::Master, &slave), Err(Error::Unsupported));
        let sw_slave = Config {
            slave_ssm: SlaveSsm::Software,
            ..slave
        };
        assert_eq!(validate(Kind::Slave, &sw_slave), Err(Error::SlaveSelectMode));
        assert_eq!(ClockMode::try_from(6), Err(Error::InvalidParameter));
        assert_eq!(ClockMode::try_from(5), Ok(ClockMode::Microwire));
    }

    #[test]
    fn sck_divider_is_even() {
        assert_eq!(sck_divider(Hertz::mhz(80), Hertz::mhz(40)), 2);
        assert_eq!(sck_divider(Hertz::mhz(80), Hertz::mhz(80)), 2);
        assert_eq!(sck_divider(Hertz::mhz(180), Hertz::mhz(20)), 10);
        assert_eq!(sck_divider(Hertz::mhz(180), Hertz::mhz(40)), 4);
    }

    #[test]
    fn master_setup_programs_controller() {
        let mut clocks = tree();
        all_ready(&clocks);
        let info = info(Kind::Master);
        let config = Config {
            bit_width: 12,
            clock_mode: ClockMode::Cpol1Cpha1,
            baud_rate: Hertz::mhz(18),
            ..Config::default()
        };
        let ssi = Ssi::new_inner(info, state(), &mut clocks, None, config).unwrap();
        let ctrl = info.regs.ctrlr0().read();
        assert!(ctrl.scpol() && ctrl.scph());
        assert_eq!(ctrl.frf(), FRF_MOTOROLA);
        assert_eq!(ssi.frame_length(), 12);
        // soc pll at 180 MHz
        assert_eq!(ssi.clock_division_factor(), 10);
        assert!(info.regs.ssienr().read().ssi_en());
    }

    #[test]
    fn frame_formats_and_slave_width_field() {
        let mut clocks = tree();
        all_ready(&clocks);
        let info_m = info(Kind::Master);
        let ti = Config {
            clock_mode: ClockMode::TiSsi,
            ..Config::default()
        };
        let _m = Ssi::new_inner(info_m, state(), &mut clocks, None, ti).unwrap();
        assert_eq!(info_m.regs.ctrlr0().read().frf(), FRF_TI_SSP);

        let info_s = info(Kind::Slave);
        let slave = Config {
            device_mode: DeviceMode::Slave,
            bit_width: 8,
            clock_mode: ClockMode::Microwire,
            ..Config::default()
        };
        let s = Ssi::new_inner(info_s, state(), &mut clocks, None, slave).unwrap();
        let ctrl = info_s.regs.ctrlr0().read();
        assert_eq!(ctrl.frf(), FRF_MICROWIRE);
        assert_eq!(ctrl.dfs(), 7);
        assert_eq!(ctrl.dfs_32(), 0);
        assert_eq!(s.frame_length(), 8);
    }

    #[test]
    fn software_select_needs_pin() {
        let mut clocks = tree();
        all_ready(&clocks);
        let config = Config {
            master_ssm: MasterSsm::Software,
            ..Config::default()
        };
        let res = Ssi::new_inner(info(Kind::Master), state(), &mut clocks, None, config);
        assert_eq!(res.err(), Some(Error::SlaveSelectMode));
    }

    #[test]
    fn transfer_loops_back_through_mock_fifo() {
        let mut clocks = tree();
        all_ready(&clocks);
        let info = info(Kind::Master);
        let mut ssi = Ssi::new_inner(info, state(), &mut clocks, None, Config::default()).unwrap();
        ready_sr(info);

        let mut buf = [0u8; 3];
        ssi.blocking_transfer(&mut buf, &[1, 2, 3]).unwrap();
        // the mock data register reads back the last write
        assert_eq!(buf, [1, 2, 3]);
        // select released on completion
        assert_eq!(info.regs.ser().read().ser(), 0);

        let mut words = [0xabcu16, 0x123];
        ssi.blocking_transfer_in_place(&mut words).unwrap();
        assert_eq!(words, [0xabc, 0x123]);

        assert_eq!(ssi.blocking_write::<u8>(&[]), Err(Error::InvalidParameter));
        assert_eq!(ssi.blocking_transfer(&mut [0u8; 2], &[1]), Err(Error::InvalidParameter));
    }

    #[test]
    fn words_narrower_than_the_frame_are_rejected() {
        let mut clocks = tree();
        all_ready(&clocks);
        let info = info(Kind::Master);
        let config = Config {
            bit_width: 16,
            ..Config::default()
        };
        let mut ssi = Ssi::new_inner(info, state(), &mut clocks, None, config).unwrap();
        ready_sr(info);

        let mut buf = [0u8; 2];
        assert_eq!(ssi.blocking_read(&mut buf), Err(Error::InvalidParameter));
        assert_eq!(ssi.blocking_write(&[1u8]), Err(Error::InvalidParameter));
        assert_eq!(ssi.nb_read::<u8>(), Err(nb::Error::Other(Error::InvalidParameter)));
        // nothing was clocked out
        assert_eq!(info.regs.ser().read().ser(), 0);

        assert_eq!(ssi.blocking_transfer_in_place(&mut buf), Err(Error::InvalidParameter));

        let mut words = [0x1234u16, 0xbeef];
        ssi.blocking_transfer_in_place(&mut words).unwrap();
        assert_eq!(words, [0x1234, 0xbeef]);
    }

    #[test]
    fn stalled_fifo_times_out_and_releases_select() {
        let mut clocks = tree();
        all_ready(&clocks);
        let info = info(Kind::Master);
        let mut ssi = Ssi::new_inner(info, state(), &mut clocks, None, Config::default()).unwrap();
        assert_eq!(ssi.blocking_write(&[0x55u8]), Err(Error::Timeout));
        assert_eq!(info.regs.ser().read().ser(), 0);
    }

    #[test]
    fn one_callback_per_instance() {
        static COMPLETE: AtomicU32 = AtomicU32::new(0);
        fn on_event(event: Event) {
            if event == Event::TransferComplete {
                COMPLETE.fetch_add(1, Ordering::Relaxed);
            }
        }
        fn other(_: Event) {}

        let mut clocks = tree();
        all_ready(&clocks);
        let info = info(Kind::Master);
        let mut ssi = Ssi::new_inner(info, state(), &mut clocks, None, Config::default()).unwrap();
        ssi.register_callback(on_event).unwrap();
        assert_eq!(ssi.register_callback(other), Err(Error::Busy));

        ready_sr(info);
        ssi.blocking_write(&[1u8, 2]).unwrap();
        assert_eq!(COMPLETE.load(Ordering::Relaxed), 1);

        ssi.unregister_callback();
        ssi.register_callback(other).unwrap();
    }

    #[test]
    fn interrupt_reports_overrun_and_mode_fault() {
        static EVENTS: AtomicU32 = AtomicU32::new(0);
        fn on_event(event: Event) {
            let bit = match event {
                Event::TransferComplete => 1,
                Event::DataLost => 2,
                Event::ModeFault => 4,
            };
            EVENTS.fetch_or(bit, Ordering::Relaxed);
        }

        let info = info(Kind::Master);
        let state = state();
        state.callback.register(on_event).unwrap();
        let mut isr = Isr(0);
        isr.set_rxoi(true);
        isr.set_msti(true);
        mock::poke(info.regs.isr(), isr);
        handle_interrupt(info, state);
        assert_eq!(EVENTS.load(Ordering::Relaxed), 6);
    }

    #[test]
    fn full_duplex_would_block_on_fifo_state() {
        use embedded_hal_nb::spi::FullDuplex;

        let mut clocks = tree();
        all_ready(&clocks);
        let info = info(Kind::Master);
        let mut ssi = Ssi::new_inner(info, state(), &mut clocks, None, Config::default()).unwrap();
        mock::poke(info.regs.sr(), Sr(0));
        assert_eq!(FullDuplex::<u8>::write(&mut ssi, 0x5a), Err(nb::Error::WouldBlock));
        assert_eq!(FullDuplex::<u8>::read(&mut ssi), Err(nb::Error::WouldBlock));

        ready_sr(info);
        FullDuplex::<u8>::write(&mut ssi, 0x5a).unwrap();
        assert_eq!(FullDuplex::<u8>::read(&mut ssi), Ok(0x5a));
    }

    #[test]
    fn clock_setup_rejects_out_of_range() {
        let mut clocks = tree();
        all_ready(&clocks);
        let bad_div = ClockConfig {
            division_factor: 63,
            ..ClockConfig::default()
        };
        assert_eq!(
            configure_clock(&mut clocks, &bad_div, Hertz::mhz(10)),
            Err(Error::InvalidParameter)
        );
        let default = ClockConfig::default();
        for baud in [Hertz(0), Hertz::mhz(41), Hertz(3_000_000_000), Hertz(u32::MAX)] {
            assert_eq!(configure_clock(&mut clocks, &default, baud), Err(Error::InvalidParameter));
        }
        let bad_ref = ClockConfig {
            intf_pll_reference_clock: Hertz(0),
            ..ClockConfig::default()
        };
        assert_eq!(
            configure_clock(&mut clocks, &bad_ref, Hertz::mhz(10)),
            Err(Error::InvalidParameter)
        );
    }
}
