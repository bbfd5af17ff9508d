//! Clock tree of the M4 subsystem.
//!
//! [`ClockTree`] owns the clock registers together with a [`Clocks`] record of what every
//! domain currently runs at. All configuration goes through it, so there is no hidden global
//! clock state. Hardware flags (PLL lock, mux switched) are polled at most
//! [`Config::poll_limit`] times before giving up with [`Error::Timeout`].

pub mod divider;
pub mod gate;
pub mod pll;

pub use divider::*;
pub use gate::{GateMode, PeripheralClock};
pub use pll::{I2sPllFactors, PllFactors};

use crate::pac;
use crate::pac::pll::regs::Ctrl9;
use crate::power::Power;
use crate::time::Hertz;

/// Highest PLL frequency the clock manager operations accept.
pub const MAX_PLL_FREQUENCY: Hertz = Hertz(180_000_000);
/// At and above this frequency the bus and cache registering of PS4 is required.
pub const PS4_REGISTERING_LIMIT: Hertz = Hertz(120_000_000);
/// SoC PLL frequency selected by [`ClockTree::init`]
pub const SOC_PLL_FREQ: Hertz = Hertz(180_000_000);
/// Interface PLL frequency selected by [`ClockTree::init`]
pub const INTF_PLL_FREQ: Hertz = Hertz(160_000_000);
pub const XTAL_FREQ: Hertz = Hertz(40_000_000);

/// Rail switch point, in MHz
const RAIL_THRESHOLD_MHZ: u32 = 90;
const SOC_PLL_MM_COUNT_LIMIT: u8 = 0xa4;
const PLL_REG9_DEFAULT: u16 = 0xd900;

/// Exclusive upper bound of the M4 SoC clock divider
pub const SOC_MAX_CLK_DIVISION_FACTOR: u8 = 63;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    InvalidParameters,
    /// The source clock is not running, its PLL has no lock
    ClockNotEnabled,
    /// The PLL could not reach the requested frequency and was left at a fallback
    InvalidInputFrequency,
    /// A hardware flag did not come up within the poll limit
    Timeout,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pll {
    Soc,
    Intf,
    I2s,
    /// Owned by the network processor, only its lock state can be queried
    Modem,
}

/// M4 SoC clock source, values as written to the mux.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum M4SocClockSource {
    UlpRef = 0,
    SocPll = 2,
    ModemPll1 = 3,
    IntfPll = 4,
    Sleep = 5,
}

/// M4 subsystem reference clock source.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum M4ssRefClockSource {
    UlpMhzRcBypass = 1,
    UlpMhzRc = 2,
    Ext40Mhz = 3,
    MemsRef = 4,
    UlpRingOsc20Mhz = 5,
    UlpDoubler = 6,
}

/// Frequencies of the clock domains as last configured.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clocks {
    pub soc_pll_clock: Hertz,
    pub intf_pll_clock: Hertz,
    pub i2s_pll_clock: Hertz,
    pub modem_pll_clock: Hertz,
    /// M4 core clock
    pub soc_clock: Hertz,
    pub rf_ref_clock: Hertz,
    pub byp_rc_ref_clock: Hertz,
    pub rc_mhz_clock: Hertz,
    pub ro_20mhz_clock: Hertz,
    pub doubler_clock: Hertz,
    pub mems_ref_clock: Hertz,
    pub m4ss_ref_clk: Hertz,
    pub ulp_ref_clock: Hertz,
    pub xtal_clock: Hertz,
}

impl Default for Clocks {
    fn default() -> Self {
        Self {
            soc_pll_clock: SOC_PLL_FREQ,
            intf_pll_clock: INTF_PLL_FREQ,
            i2s_pll_clock: Hertz(0),
            modem_pll_clock: Hertz(0),
            soc_clock: Hertz::mhz(32),
            rf_ref_clock: XTAL_FREQ,
            byp_rc_ref_clock: Hertz::mhz(32),
            rc_mhz_clock: Hertz::mhz(32),
            ro_20mhz_clock: Hertz::mhz(20),
            doubler_clock: Hertz::mhz(32),
            mems_ref_clock: XTAL_FREQ,
            m4ss_ref_clk: XTAL_FREQ,
            ulp_ref_clock: XTAL_FREQ,
            xtal_clock: XTAL_FREQ,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Crystal, also used as the PLL reference
    pub xtal: Hertz,
    /// Core clock, sourced from the SoC PLL
    pub soc_pll: Hertz,
    /// Peripheral PLL. `None` leaves it off and the QSPI clock untouched.
    pub intf_pll: Option<Hertz>,
    /// Upper bound on iterations of every hardware poll
    pub poll_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            xtal: XTAL_FREQ,
            soc_pll: SOC_PLL_FREQ,
            intf_pll: Some(INTF_PLL_FREQ),
            poll_limit: 1_000_000,
        }
    }
}

/// Register blocks the clock tree touches.
#[derive(Copy, Clone)]
pub(crate) struct Regs {
    pub m4clk: pac::m4clk::M4clk,
    pub pll: pac::pll::Pll,
    pub npss: pac::npss::Npss,
    pub misc: pac::misc::Misc,
    pub icache: pac::misc::Icache,
}

impl Regs {
    pub(crate) const fn hw() -> Self {
        Self {
            m4clk: pac::M4CLK,
            pll: pac::PLL,
            npss: pac::NPSS,
            misc: pac::MISC,
            icache: pac::ICACHE,
        }
    }
}

pub struct ClockTree {
    pub(crate) regs: Regs,
    clocks: Clocks,
    poll_limit: u32,
}

impl ClockTree {
    /// Takes the clock registers without touching the hardware. Call [`ClockTree::init`] to
    /// bring up the default tree.
    pub fn new(config: Config) -> Self {
        Self::with_regs(Regs::hw(), config)
    }

    pub(crate) fn with_regs(regs: Regs, config: Config) -> Self {
        Self {
            regs,
            clocks: Clocks {
                xtal_clock: config.xtal,
                ..Clocks::default()
            },
            poll_limit: config.poll_limit,
        }
    }

    /// Brings up the default clock tree: crystal reference, core on the SoC PLL and the
    /// interface PLL feeding QSPI.
    pub fn init(&mut self, config: &Config) -> Result<(), Error> {
        self.m4ss_ref_clk_config(M4ssRefClockSource::Ext40Mhz)?;
        self.m4_set_core_clk(M4SocClockSource::SocPll, config.soc_pll)?;

        if let Some(intf) = config.intf_pll {
            self.set_pll_freq(Pll::Intf, intf, config.xtal)?;
            self.qspi_clk_config(QspiClockSource::IntfPll, false, false, 1)?;
        }

        info!(
            "clocks: core {} Hz, intf pll {} Hz",
            self.clocks.soc_clock.0, self.clocks.intf_pll_clock.0
        );
        Ok(())
    }

    pub fn clocks(&self) -> &Clocks {
        &self.clocks
    }

    /// Iteration bound shared by every hardware poll, drivers included.
    pub fn poll_limit(&self) -> u32 {
        self.poll_limit
    }

    pub fn power(&self) -> Power {
        Power::new(self.regs.npss, self.regs.misc, self.regs.icache)
    }

    /// Polls `done` until it returns true, at most `poll_limit` times.
    pub(crate) fn wait_for(&self, what: &'static str, mut done: impl FnMut() -> bool) -> Result<(), Error> {
        for _ in 0..self.poll_limit {
            if done() {
                return Ok(());
            }
        }
        error!("clocks: timeout waiting for {}", what);
        Err(Error::Timeout)
    }

    /// Checks the lock bit of `pll`.
    pub fn check_present(&self, pll: Pll) -> Result<(), Error> {
        let stat = self.regs.m4clk.pll_stat_reg().read();
        let locked = match pll {
            Pll::Soc => stat.socpll_lock(),
            Pll::Intf => stat.intfpll_lock(),
            Pll::I2s => stat.i2spll_lock(),
            Pll::Modem => stat.modempll_lock(),
        };
        if locked {
            Ok(())
        } else {
            Err(Error::ClockNotEnabled)
        }
    }

    // - MARK: PLL frequency with rail sequencing

    /// Sets the SoC PLL and moves the SoC rails to match the new frequency.
    pub fn set_soc_pll_freq(&mut self, freq: Hertz, reference: Hertz) -> Result<(), Error> {
        self.clocks.soc_pll_clock = freq;
        self.set_pll_freq_with_rails(Pll::Soc, freq, reference)
    }

    /// Sets the interface PLL and moves the SoC rails to match the new frequency.
    pub fn set_intf_pll_freq(&mut self, freq: Hertz, reference: Hertz) -> Result<(), Error> {
        self.clocks.intf_pll_clock = freq;
        self.set_pll_freq_with_rails(Pll::Intf, freq, reference)
    }

    fn set_pll_freq_with_rails(&mut self, pll: Pll, freq: Hertz, reference: Hertz) -> Result<(), Error> {
        let desc = pll.descriptor()?;
        self.pll_turn_on(pll)?;
        if reference == XTAL_FREQ {
            self.pll_ref_clk_config(0);
        }
        (desc.block)(self.regs.pll).ctrl9().write_value(Ctrl9(PLL_REG9_DEFAULT));

        self.pll_set_freq(pll, freq, reference)?;

        let power = self.power();
        let mhz = freq.to_mhz();
        if mhz < RAIL_THRESHOLD_MHZ {
            trace!("clocks: {} MHz, lowering soc rails", mhz);
            power.ps4_to_ps3();
            power.dcdc_lower();
        }
        if mhz > RAIL_THRESHOLD_MHZ && !power.soc_ldo_is_high() {
            trace!("clocks: {} MHz, raising soc rails", mhz);
            power.dcdc_higher();
            power.ps3_to_ps4();
        }
        Ok(())
    }

    // - MARK: Clock manager

    /// Programs `pll` to `freq`, enabling the PS4 registering for fast clocks.
    pub fn set_pll_freq(&mut self, pll: Pll, freq: Hertz, reference: Hertz) -> Result<(), Error> {
        if freq > MAX_PLL_FREQUENCY {
            return Err(Error::InvalidParameters);
        }
        if freq >= PS4_REGISTERING_LIMIT {
            self.power().ps4_set_registers();
        }
        match pll {
            Pll::Soc => {
                self.pll_lock_config(true, true, SOC_PLL_MM_COUNT_LIMIT);
                self.set_soc_pll_freq(freq, reference)
            }
            Pll::Intf => self.set_intf_pll_freq(freq, reference),
            Pll::I2s => {
                self.clocks.i2s_pll_clock = freq;
                self.i2s_pll_set_freq(freq, reference)
            }
            Pll::Modem => Err(Error::InvalidParameters),
        }
    }

    /// Last frequency programmed into `pll`.
    pub fn get_pll_freq(&self, pll: Pll) -> Result<Hertz, Error> {
        match pll {
            Pll::Soc => Ok(self.clocks.soc_pll_clock),
            Pll::Intf => Ok(self.clocks.intf_pll_clock),
            Pll::I2s => Ok(self.clocks.i2s_pll_clock),
            Pll::Modem => Err(Error::InvalidParameters),
        }
    }

    pub fn control_pll(&mut self, pll: Pll, enable: bool) -> Result<(), Error> {
        if pll == Pll::Modem {
            return Err(Error::InvalidParameters);
        }
        if enable {
            self.pll_turn_on(pll)
        } else {
            self.pll_turn_off(pll)
        }
    }

    /// Moves the core to `source`, programming the backing PLL to `freq` first.
    ///
    /// The core runs from the ULP reference while the PLL is reprogrammed.
    pub fn m4_set_core_clk(&mut self, source: M4SocClockSource, freq: Hertz) -> Result<(), Error> {
        if freq > MAX_PLL_FREQUENCY {
            return Err(Error::InvalidParameters);
        }
        if freq < PS4_REGISTERING_LIMIT {
            self.power().ps4_clear_registers();
        }
        self.m4_soc_clk_config(M4SocClockSource::UlpRef, 0)?;

        let xtal = self.clocks.xtal_clock;
        match source {
            M4SocClockSource::UlpRef => return Ok(()),
            M4SocClockSource::IntfPll => self.set_pll_freq(Pll::Intf, freq, xtal)?,
            M4SocClockSource::SocPll => self.set_pll_freq(Pll::Soc, freq, xtal)?,
            M4SocClockSource::ModemPll1 | M4SocClockSource::Sleep => {}
        }
        self.m4_soc_clk_config(source, 0)
    }

    /// Current core clock source and frequency.
    pub fn m4_core_clk(&self) -> (u8, Hertz) {
        let sel = self.regs.m4clk.clk_config_reg5().read().m4_soc_clk_sel();
        (sel, self.clocks.soc_clock)
    }

    /// Switches the core clock mux and sets its divider.
    ///
    /// Parts limited to 110 MHz halve `div`. A zero divider passes the source through.
    pub fn m4_soc_clk_config(&mut self, source: M4SocClockSource, div: u8) -> Result<(), Error> {
        if div >= SOC_MAX_CLK_DIVISION_FACTOR {
            return Err(Error::InvalidParameters);
        }
        let div = if self.regs.npss.chip_config_mcu_read().read().limit_m4_freq_110mhz() {
            div / 2
        } else {
            div
        };

        let freq = match source {
            M4SocClockSource::UlpRef => self.clocks.m4ss_ref_clk,
            M4SocClockSource::SocPll => {
                self.check_present(Pll::Soc)?;
                self.clocks.soc_pll_clock
            }
            M4SocClockSource::ModemPll1 => {
                self.check_present(Pll::Modem)?;
                self.clocks.modem_pll_clock
            }
            M4SocClockSource::IntfPll => {
                self.check_present(Pll::Intf)?;
                self.clocks.intf_pll_clock
            }
            // the ULP core clock gate lives in the ULP domain, not driven here
            M4SocClockSource::Sleep => return Err(Error::ClockNotEnabled),
        };

        let m4clk = self.regs.m4clk;
        m4clk.clk_config_reg5().modify(|w| w.set_m4_soc_clk_sel(source as u8));
        self.wait_for("m4 soc switch", || m4clk.pll_stat_reg().read().m4_soc_clk_switched())?;
        m4clk.clk_config_reg5().modify(|w| w.set_m4_soc_clk_div_fac(div & 0x3f));

        self.clocks.soc_clock = if div != 0 { freq / div as u32 } else { freq };
        debug!("clocks: core {} Hz", self.clocks.soc_clock.0);
        Ok(())
    }

    /// Selects the M4 subsystem reference clock.
    pub fn m4ss_ref_clk_config(&mut self, source: M4ssRefClockSource) -> Result<(), Error> {
        self.regs
            .npss
            .mcu_fsm_ref_clk_reg()
            .modify(|w| w.set_m4ss_ref_clk_sel(source as u8));
        self.clocks.m4ss_ref_clk = match source {
            M4ssRefClockSource::UlpMhzRcBypass => self.clocks.byp_rc_ref_clock,
            M4ssRefClockSource::UlpMhzRc => self.clocks.rc_mhz_clock,
            M4ssRefClockSource::Ext40Mhz => self.clocks.rf_ref_clock,
            M4ssRefClockSource::MemsRef => self.clocks.mems_ref_clock,
            M4ssRefClockSource::UlpRingOsc20Mhz => self.clocks.ro_20mhz_clock,
            M4ssRefClockSource::UlpDoubler => self.clocks.doubler_clock,
        };
        let stat = self.regs.m4clk.pll_stat_reg();
        self.wait_for("ulp ref switch", || stat.read().ulp_ref_clk_switched())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::pac::m4clk::regs::PllStatReg;
    use crate::pac::mock;
    use crate::pac::npss::regs::{ChipConfigMcuRead, McuPmuLdoCtrl};

    pub(crate) fn tree() -> ClockTree {
        let regs = Regs {
            m4clk: mock::m4clk(),
            pll: mock::pll(),
            npss: mock::npss(),
            misc: mock::misc(),
            icache: mock::icache(),
        };
        ClockTree::with_regs(
            regs,
            Config {
                poll_limit: 16,
                ..Config::default()
            },
        )
    }

    /// Every lock and switched flag up.
    pub(crate) fn all_ready(t: &ClockTree) {
        mock::poke(t.regs.m4clk.pll_stat_reg(), PllStatReg(0x000f_ffff));
    }

    #[test]
    fn check_present_follows_lock_bits() {
        let t = tree();
        let stat = t.regs.m4clk.pll_stat_reg();
        let cases = [
            (Pll::I2s, 1 << 0),
            (Pll::Modem, 1 << 1),
            (Pll::Intf, 1 << 3),
            (Pll::Soc, 1 << 4),
        ];
        for (pll, bit) in cases {
            mock::poke(stat, PllStatReg(0));
            assert_eq!(t.check_present(pll), Err(Error::ClockNotEnabled));
            mock::poke(stat, PllStatReg(bit));
            assert_eq!(t.check_present(pll), Ok(()));
            mock::poke(stat, PllStatReg(!bit));
            assert_eq!(t.check_present(pll), Err(Error::ClockNotEnabled));
        }
    }

    #[test]
    fn wait_for_is_bounded() {
        let t = tree();
        let mut polls = 0;
        assert_eq!(
            t.wait_for("never", || {
                polls += 1;
                false
            }),
            Err(Error::Timeout)
        );
        assert_eq!(polls, 16);

        let mut polls = 0;
        assert_eq!(
            t.wait_for("third", || {
                polls += 1;
                polls == 3
            }),
            Ok(())
        );
    }

    #[test]
    fn soc_clk_config_checks_source_and_divides() {
        let mut t = tree();
        assert_eq!(t.m4_soc_clk_config(M4SocClockSource::UlpRef, 63), Err(Error::InvalidParameters));
        assert_eq!(t.m4_soc_clk_config(M4SocClockSource::SocPll, 0), Err(Error::ClockNotEnabled));
        assert_eq!(t.m4_soc_clk_config(M4SocClockSource::Sleep, 0), Err(Error::ClockNotEnabled));
        // switched flag never rises
        mock::poke(t.regs.m4clk.pll_stat_reg(), PllStatReg(1 << 4));
        assert_eq!(t.m4_soc_clk_config(M4SocClockSource::SocPll, 0), Err(Error::Timeout));

        all_ready(&t);
        t.m4_soc_clk_config(M4SocClockSource::SocPll, 2).unwrap();
        let reg5 = t.regs.m4clk.clk_config_reg5().read();
        assert_eq!((reg5.m4_soc_clk_sel(), reg5.m4_soc_clk_div_fac()), (2, 2));
        assert_eq!(t.clocks().soc_clock, Hertz::mhz(90));
        assert_eq!(t.m4_core_clk(), (2, Hertz::mhz(90)));

        // 110 MHz parts halve the divider
        mock::poke(t.regs.npss.chip_config_mcu_read(), ChipConfigMcuRead(1 << 21));
        t.m4_soc_clk_config(M4SocClockSource::IntfPll, 5).unwrap();
        let reg5 = t.regs.m4clk.clk_config_reg5().read();
        assert_eq!((reg5.m4_soc_clk_sel(), reg5.m4_soc_clk_div_fac()), (4, 2));
        assert_eq!(t.clocks().soc_clock, Hertz::mhz(80));
    }

    #[test]
    fn ref_clk_config_records_source() {
        let mut t = tree();
        assert_eq!(t.m4ss_ref_clk_config(M4ssRefClockSource::UlpRingOsc20Mhz), Err(Error::Timeout));
        all_ready(&t);
        t.m4ss_ref_clk_config(M4ssRefClockSource::UlpRingOsc20Mhz).unwrap();
        assert_eq!(t.regs.npss.mcu_fsm_ref_clk_reg().read().m4ss_ref_clk_sel(), 5);
        assert_eq!(t.clocks().m4ss_ref_clk, Hertz::mhz(20));

        t.m4ss_ref_clk_config(M4ssRefClockSource::Ext40Mhz).unwrap();
        t.m4_soc_clk_config(M4SocClockSource::UlpRef, 4).unwrap();
        assert_eq!(t.clocks().soc_clock, Hertz::mhz(10));
    }

    #[test]
    fn rails_follow_pll_frequency() {
        let mut t = tree();
        all_ready(&t);
        let set = t.regs.npss.mcu_pmu_ldo_ctrl_set();
        let clear = t.regs.npss.mcu_pmu_ldo_ctrl_clear();

        // 80 MHz lowers the SoC LDO and then the DCDC through the clear register
        t.set_soc_pll_freq(Hertz::mhz(80), XTAL_FREQ).unwrap();
        assert_eq!(mock::peek(clear).0, 1 << 18);
        assert_eq!(mock::peek(set).0, 0);
        assert_eq!(t.regs.pll.soc().ctrl9().read().0, 0xd900);
        assert_eq!(t.clocks().soc_pll_clock, Hertz::mhz(80));

        // 100 MHz with the LDO reading low raises DCDC then LDO
        mock::poke(clear, McuPmuLdoCtrl(0));
        t.set_intf_pll_freq(Hertz::mhz(100), XTAL_FREQ).unwrap();
        assert_eq!(mock::peek(set).0, 1 << 17);
        assert_eq!(t.clocks().intf_pll_clock, Hertz::mhz(100));

        // LDO already high: nothing written
        mock::poke(set, McuPmuLdoCtrl(0));
        mock::poke(clear, McuPmuLdoCtrl(1 << 17));
        t.set_intf_pll_freq(Hertz::mhz(100), XTAL_FREQ).unwrap();
        assert_eq!(mock::peek(set).0, 0);

        // exactly 90 MHz leaves the rails alone
        mock::poke(clear, McuPmuLdoCtrl(0));
        t.set_intf_pll_freq(Hertz::mhz(90), XTAL_FREQ).unwrap();
        assert_eq!(mock::peek(set).0, 0);
        assert_eq!(mock::peek(clear).0, 0);
    }

    #[test]
    fn manager_limits_and_registering() {
        let mut t = tree();
        all_ready(&t);
        assert_eq!(
            t.set_pll_freq(Pll::Soc, Hertz(180_000_001), XTAL_FREQ),
            Err(Error::InvalidParameters)
        );
        assert_eq!(t.set_pll_freq(Pll::Modem, Hertz::mhz(100), XTAL_FREQ), Err(Error::InvalidParameters));

        t.set_pll_freq(Pll::Soc, Hertz::mhz(180), XTAL_FREQ).unwrap();
        assert!(t.regs.icache.addr_translate_1().read().registering());
        assert!(t.regs.misc.sram_redundancy_ctrl().read().ahb2ahb_registering());
        assert!(t.regs.misc.misc_ctrl1().read().register_rom());
        // the frequency wrapper rewrites the lock detector after the lock config
        let reg9 = t.regs.pll.soc().ctrl9().read();
        assert_eq!(reg9.0, 0xd900);
        assert!(reg9.manual_lock() && reg9.bypass_lock());
        assert_eq!(t.get_pll_freq(Pll::Soc), Ok(Hertz::mhz(180)));

        t.m4_set_core_clk(M4SocClockSource::IntfPll, Hertz::mhz(100)).unwrap();
        assert!(!t.regs.icache.addr_translate_1().read().registering());
        assert!(!t.regs.misc.misc_ctrl1().read().register_rom());
        assert_eq!(t.clocks().soc_clock, Hertz::mhz(100));
        assert_eq!(t.get_pll_freq(Pll::Intf), Ok(Hertz::mhz(100)));
    }

    #[test]
    fn core_clock_on_ulp_ref_skips_plls() {
        let mut t = tree();
        all_ready(&t);
        t.m4_set_core_clk(M4SocClockSource::UlpRef, Hertz::mhz(150)).unwrap();
        assert_eq!(t.regs.pll.soc().ctrl1().read().0, 0);
        assert_eq!(t.clocks().soc_clock, XTAL_FREQ);
        assert_eq!(
            t.m4_set_core_clk(M4SocClockSource::SocPll, Hertz::mhz(181)),
            Err(Error::InvalidParameters)
        );
    }

    #[test]
    fn control_pll_rejects_modem() {
        let mut t = tree();
        t.control_pll(Pll::Intf, true).unwrap();
        assert_eq!(t.regs.pll.intf().ctrl1().read().0, 0x31c9 & !0x30);
        t.control_pll(Pll::Intf, false).unwrap();
        assert_eq!(t.regs.pll.intf().ctrl1().read().0, 0x31c9 | 0x30);
        assert_eq!(t.control_pll(Pll::Modem, true), Err(Error::InvalidParameters));
    }

    #[test]
    fn init_brings_up_default_tree() {
        let mut t = tree();
        all_ready(&t);
        t.init(&Config::default()).unwrap();
        assert_eq!(t.clocks().soc_clock, SOC_PLL_FREQ);
        assert_eq!(t.clocks().intf_pll_clock, INTF_PLL_FREQ);
        assert_eq!(t.regs.m4clk.clk_config_reg5().read().m4_soc_clk_sel(), 2);
        assert_eq!(t.regs.npss.mcu_fsm_ref_clk_reg().read().m4ss_ref_clk_sel(), 3);
        let reg1 = t.regs.m4clk.clk_config_reg1().read();
        assert_eq!((reg1.qspi_clk_sel(), reg1.qspi_clk_div_fac()), (1, 1));
    }
}
