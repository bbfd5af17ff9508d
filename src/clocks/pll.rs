//! SoC, interface and I2S PLL programming.
//!
//! The SoC and interface PLLs are the same 500 MHz macro behind different register windows,
//! so one routine drives both from a [`PllDescriptor`]. The I2S PLL is a fractional-N
//! macro with its own derivation.

use super::{ClockTree, Error, Pll};
use crate::pac::m4clk::regs::PllStatReg;
use crate::pac::npss::regs::M4BbffStorage1;
use crate::pac::pll::regs::{Ctrl1, Ctrl11, Ctrl2, Ctrl3, I2sCtrl2, MacroReg3};
use crate::pac::pll::{Pll as PllBlock, Pll500};
use crate::time::Hertz;

/// Reset value of CTRL_REG1 on the 500 MHz macros
const PLL_500_REG1: u16 = 0x31c9;
const I2S_PLL_REG1: u16 = 0x1244;
const I2S_PLL_REG2: u16 = 0x5850;
const I2S_PLL_REG3: u16 = 0xba60;

const DCO_FIX_SEL_MASK: u16 = 0x0003;
const PLL_BYPASS: u16 = 1 << 2;
const PLL_CLK_ENABLE: u16 = 1 << 3;
const PLL_PD: u16 = 1 << 4;
const PLL_RST: u16 = 1 << 5;
const PLL_M_MASK: u16 = 0xffc0;
const FCW_F_MASK: u16 = 0xfffc;
const I2S_N_DIV_MASK: u16 = 0x00fe;
const I2S_P_DIV_MASK: u16 = 0xff00;

/// Written to CTRL_REG11 to hold the PLL in reset
const PLL_RESET: u16 = 0x01ff;
/// Written to CTRL_REG11 to release the PLL and start locking
const PLL_RELEASE: u16 = 0xffff;

const I2S_DCO_FREQ1: u32 = 73_728_000;
const I2S_DCO_FREQ2: u32 = 67_737_600;

/// Frequency a new-table part falls back to when the requested one cannot be reached.
pub const FALLBACK_FREQ: Hertz = Hertz(200_000_000);

/// Everything that differs between the SoC and interface PLLs.
pub(crate) struct PllDescriptor {
    pub name: &'static str,
    /// Control register window
    pub block: fn(PllBlock) -> Pll500,
    /// LDO program field in the shared macro register
    pub set_ldo: fn(&mut MacroReg3, u8),
    /// Factory threshold for the post lock readback
    pub tv_cal: fn(&M4BbffStorage1) -> u8,
    pub locked: fn(&PllStatReg) -> bool,
    pub min: Hertz,
    pub max: Hertz,
}

pub(crate) static SOC_PLL: PllDescriptor = PllDescriptor {
    name: "soc",
    block: PllBlock::soc,
    set_ldo: MacroReg3::set_soc_ldo_prog,
    tv_cal: M4BbffStorage1::soc_pll_tv_cal,
    locked: PllStatReg::socpll_lock,
    min: Hertz(1_000_000),
    max: Hertz(300_000_000),
};

pub(crate) static INTF_PLL: PllDescriptor = PllDescriptor {
    name: "intf",
    block: PllBlock::intf,
    set_ldo: MacroReg3::set_intf_ldo_prog,
    tv_cal: M4BbffStorage1::intf_pll_tv_cal,
    locked: PllStatReg::intfpll_lock,
    min: Hertz(1_000_000),
    max: Hertz(300_000_000),
};

impl Pll {
    pub(crate) fn descriptor(self) -> Result<&'static PllDescriptor, Error> {
        match self {
            Pll::Soc => Ok(&SOC_PLL),
            Pll::Intf => Ok(&INTF_PLL),
            _ => Err(Error::InvalidParameters),
        }
    }
}

/// Raw factors for [`ClockTree::pll_set_freq_div`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PllFactors {
    /// Enable the PLL output. When false only the output gate is closed.
    pub clk_en: bool,
    /// Post divider, output = DCO / (div + 1)
    pub div: u16,
    /// Reference divider minus one
    pub n: u16,
    /// Multiplier minus one
    pub m: u16,
    /// Fractional multiplier, 14 bits
    pub fcw_f: u16,
    pub dco_fix_sel: u16,
    pub ldo_prog: u16,
}

impl PllFactors {
    /// Known good 200 MHz setting for a 40 MHz reference.
    pub const FALLBACK_200MHZ: PllFactors = PllFactors {
        clk_en: true,
        div: 0,
        n: 39,
        m: 199,
        fcw_f: 0,
        dco_fix_sel: 1,
        ldo_prog: 1,
    };
}

/// Raw factors for [`ClockTree::i2s_pll_set_freq_div`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2sPllFactors {
    pub div1: u16,
    pub div2: u16,
    pub n: u16,
    pub m: u16,
    pub fcw_f: u16,
}

/// Post divider shift for the older PLL table.
pub(crate) fn old_table_shift(mhz: u32) -> u16 {
    match mhz {
        0..=1 => 7,
        2..=3 => 6,
        4..=7 => 5,
        8..=15 => 4,
        16..=31 => 3,
        32..=63 => 2,
        64..=126 => 1,
        _ => 0,
    }
}

/// Post divider shift for the newer PLL table.
pub(crate) fn new_table_shift(mhz: u32) -> u16 {
    match mhz {
        0..=1 => 7,
        2 => 6,
        3..=5 => 5,
        6..=11 => 4,
        12..=22 => 3,
        23..=45 => 2,
        46..=90 => 1,
        _ => 0,
    }
}

/// Derives the I2S PLL factors for `freq` from a crystal at `xtal`.
pub(crate) fn i2s_factors(freq: Hertz, xtal: Hertz) -> I2sPllFactors {
    let fref: u32 = match xtal.0 {
        9_600_000 | 19_200_000 | 38_400_000 => 960_000,
        _ => 1_000_000,
    };

    let g = I2S_DCO_FREQ1 as f32 / freq.0 as f32;
    let (p_div, fdco) = if g - (g as i32) as f32 == 0.0 {
        (g as u16, I2S_DCO_FREQ1)
    } else {
        ((I2S_DCO_FREQ2 / freq.0) as u16, I2S_DCO_FREQ2)
    };

    let n = (xtal.0 / fref) as u16;
    let fcw = (fdco as f32 / fref as f32) as f64;
    let m = fcw as u16;
    let mut fcw_f = ((fcw - m as f64) * (1u32 << 14) as f64) as u16;
    if fdco == I2S_DCO_FREQ1 {
        fcw_f += 1;
    }

    let (div2, div1) = match p_div {
        288..=u16::MAX => (4, (p_div >> 4) - 1),
        96..=144 => (3, (p_div >> 3) - 1),
        72 => (2, (p_div >> 2) - 1),
        36..=48 => (1, (p_div >> 1) - 1),
        _ => (0, p_div.wrapping_sub(1)),
    };

    I2sPllFactors {
        div1,
        div2,
        n,
        m,
        fcw_f,
    }
}

impl ClockTree {
    /// Parts limited to 110 MHz, and parts with the calibration flag, use the newer table.
    pub(crate) fn new_pll_table(&self) -> bool {
        self.regs.npss.chip_config_mcu_read().read().limit_m4_freq_110mhz()
            || self.regs.npss.m4_bbff_storage1().read().new_pll_table()
    }

    fn pll_block(&self, pll: Pll) -> Result<Pll500, Error> {
        match pll {
            Pll::Soc => Ok(self.regs.pll.soc()),
            Pll::Intf => Ok(self.regs.pll.intf()),
            Pll::I2s => Ok(self.regs.pll.i2s()),
            Pll::Modem => Err(Error::InvalidParameters),
        }
    }

    fn write_ldo(&self, desc: &PllDescriptor, ldo: u16) {
        let macro3 = self.regs.pll.macro_reg3();
        // the register reads back shifted right by one
        let mut val = MacroReg3(macro3.read().0 << 1);
        (desc.set_ldo)(&mut val, ldo as u8);
        macro3.write_value(val);
    }

    fn write_factors(&self, desc: &PllDescriptor, reg1: u16, div: u16, n: u16, m: u16) {
        let block = (desc.block)(self.regs.pll);
        block.ctrl2().write_value(Ctrl2((div << 9) | (n << 3)));
        let reg1 = (reg1 & !PLL_M_MASK) | (m << 6) | PLL_CLK_ENABLE;
        block.ctrl1().write_value(Ctrl1(reg1));
    }

    /// Releases the PLL from reset and waits for lock.
    fn pll_clk_set(&self, pll: Pll) -> Result<(), Error> {
        let block = self.pll_block(pll)?;
        block.ctrl11().write_value(Ctrl11(PLL_RELEASE));
        let stat = self.regs.m4clk.pll_stat_reg();
        match pll.descriptor() {
            Ok(desc) => self.wait_for(desc.name, || (desc.locked)(&stat.read())),
            Err(_) => self.wait_for("i2s", || stat.read().i2spll_lock()),
        }
    }

    /// Latches and returns the threshold value the PLL reached.
    fn pll_tv_read(&self, desc: &PllDescriptor) -> u16 {
        let block = (desc.block)(self.regs.pll);
        block.ctrl7().modify(|w| w.set_spi_inp_rd_en(true));
        block.ctrl7().modify(|w| w.set_spi_inp_rd_en(false));
        block.ctrl12().read().tv() as u16
    }

    fn pll_tv_cal(&self, desc: &PllDescriptor) -> u16 {
        (desc.tv_cal)(&self.regs.npss.m4_bbff_storage1().read()) as u16
    }

    /// Programs a 500 MHz PLL to `freq` from a `reference` input.
    ///
    /// Newer parts read back the reached threshold after lock. When it does not beat the
    /// factory calibration, and for any request of 201 MHz or more, the PLL is left at
    /// [`FALLBACK_FREQ`] and [`Error::InvalidInputFrequency`] is returned.
    pub fn pll_set_freq(&mut self, pll: Pll, freq: Hertz, reference: Hertz) -> Result<(), Error> {
        let desc = pll.descriptor()?;
        if freq < desc.min || freq > desc.max {
            return Err(Error::InvalidParameters);
        }
        let mhz = freq.to_mhz();
        let ref_mhz = reference.to_mhz() as u16;

        if self.new_pll_table() {
            if mhz >= 201 {
                warn!("{} pll: {} MHz out of range, programming 200 MHz", desc.name, mhz);
                self.pll_set_freq_div(pll, PllFactors::FALLBACK_200MHZ)?;
                return Err(Error::InvalidInputFrequency);
            }

            let shift = new_table_shift(mhz);
            let div = (1u16 << shift) - 1;
            let mul = (div + 1) * mhz as u16 - 1;
            debug!("{} pll: new table shift={} div={} m={}", desc.name, shift, div, mul);

            self.pll_reset(pll)?;
            self.write_ldo(desc, 1);
            let reg1 = (PLL_500_REG1 & !DCO_FIX_SEL_MASK) | 1;
            self.write_factors(desc, reg1, div, ref_mhz.wrapping_sub(1), mul);
            self.pll_clk_set(pll)?;

            let tv = self.pll_tv_read(desc);
            if tv <= self.pll_tv_cal(desc) {
                warn!("{} pll: threshold {} not reached, programming 200 MHz", desc.name, tv);
                self.pll_set_freq_div(pll, PllFactors::FALLBACK_200MHZ)?;
                return Err(Error::InvalidInputFrequency);
            }
            Ok(())
        } else {
            let shift = old_table_shift(mhz);
            let dco = (mhz as u16) << shift;
            let div = (1u16 << shift) - 1;
            debug!("{} pll: old table shift={} div={} dco={}", desc.name, shift, div, dco);

            self.pll_reset(pll)?;
            let block = (desc.block)(self.regs.pll);
            if mhz >= 201 {
                if mhz % 2 == 0 {
                    block.ctrl3().write_value(Ctrl3(0));
                } else {
                    block.ctrl3().write_value(Ctrl3(8192 << 2));
                }
            }

            let (dco_fix_sel, ldo, mul) = match dco {
                251..=u16::MAX => (2, 5, dco / 2 - 1),
                201..=250 => (0, 5, dco / 2 - 1),
                _ => {
                    block.ctrl3().write_value(Ctrl3(0));
                    (1, 4, dco - 1)
                }
            };
            self.write_ldo(desc, ldo);
            let reg1 = (PLL_500_REG1 & !DCO_FIX_SEL_MASK) | dco_fix_sel;
            self.write_factors(desc, reg1, div, ref_mhz.wrapping_sub(1), mul);
            self.pll_clk_set(pll)
        }
    }

    /// Programs a 500 MHz PLL from raw factors.
    ///
    /// On newer parts the DCO select and LDO level are fixed at 1 and an undivided output
    /// that misses the factory threshold is put back into reset.
    pub fn pll_set_freq_div(&mut self, pll: Pll, factors: PllFactors) -> Result<(), Error> {
        let desc = pll.descriptor()?;
        let new_table = self.new_pll_table();
        let block = (desc.block)(self.regs.pll);

        self.pll_reset(pll)?;
        if factors.clk_en {
            let (dco_fix_sel, ldo) = if new_table {
                (1, 1)
            } else {
                (factors.dco_fix_sel, factors.ldo_prog)
            };
            block.ctrl3().write_value(Ctrl3(factors.fcw_f << 2));
            self.write_ldo(desc, ldo);
            let reg1 = (PLL_500_REG1 & !DCO_FIX_SEL_MASK) | dco_fix_sel;
            self.write_factors(desc, reg1, factors.div, factors.n, factors.m);
        } else {
            block.ctrl1().write_value(Ctrl1(PLL_500_REG1 & !PLL_CLK_ENABLE));
        }
        self.pll_clk_set(pll)?;

        if new_table {
            let tv = self.pll_tv_read(desc);
            if tv <= self.pll_tv_cal(desc) && factors.div == 0 {
                warn!("{} pll: threshold {} not reached, holding in reset", desc.name, tv);
                self.pll_reset(pll)?;
                return Err(Error::InvalidInputFrequency);
            }
        }
        Ok(())
    }

    /// Programs the I2S PLL to `freq` from a crystal at `xtal`.
    pub fn i2s_pll_set_freq(&mut self, freq: Hertz, xtal: Hertz) -> Result<(), Error> {
        if freq.0 == 0 || xtal.0 == 0 {
            return Err(Error::InvalidParameters);
        }
        let factors = i2s_factors(freq, xtal);
        debug!(
            "i2s pll: n={} m={} fcw_f={} div1={} div2={}",
            factors.n, factors.m, factors.fcw_f, factors.div1, factors.div2
        );
        self.pll_reset(Pll::I2s)?;
        self.i2s_write_factors(factors);
        self.pll_clk_set(Pll::I2s)
    }

    /// Programs the I2S PLL from raw factors. A zero `div1` only restarts the PLL.
    pub fn i2s_pll_set_freq_div(&mut self, factors: I2sPllFactors) -> Result<(), Error> {
        self.pll_reset(Pll::I2s)?;
        if factors.div1 != 0 {
            self.i2s_write_factors(factors);
        }
        self.pll_clk_set(Pll::I2s)
    }

    fn i2s_write_factors(&self, f: I2sPllFactors) {
        let block = self.regs.pll.i2s();

        let mut reg2 = I2S_PLL_REG2 & !I2S_N_DIV_MASK;
        reg2 |= f.n << 1;
        reg2 &= !I2S_P_DIV_MASK;
        reg2 |= (f.div1 << 11) | (f.div2 << 8);

        let reg3 = (I2S_PLL_REG3 & !FCW_F_MASK) | (f.fcw_f << 2);

        let mut reg1 = (I2S_PLL_REG1 & !PLL_M_MASK) | (f.m << 6);
        reg1 &= !(PLL_PD | PLL_RST);
        reg1 |= PLL_BYPASS;

        block.ctrl1().write_value(Ctrl1(reg1));
        block.i2s_ctrl2().write_value(I2sCtrl2(reg2));
        block.ctrl3().write_value(Ctrl3(reg3));
    }

    /// Holds the PLL in reset.
    pub fn pll_reset(&mut self, pll: Pll) -> Result<(), Error> {
        self.pll_block(pll)?.ctrl11().write_value(Ctrl11(PLL_RESET));
        Ok(())
    }

    /// Powers the PLL up from its reset configuration.
    pub fn pll_turn_on(&mut self, pll: Pll) -> Result<(), Error> {
        let block = self.pll_block(pll)?;
        let reg1 = match pll {
            Pll::I2s => I2S_PLL_REG1,
            _ => PLL_500_REG1,
        };
        block.ctrl1().write_value(Ctrl1(reg1 & !(PLL_RST | PLL_PD)));
        Ok(())
    }

    /// Powers the PLL down and holds it in reset.
    pub fn pll_turn_off(&mut self, pll: Pll) -> Result<(), Error> {
        let block = self.pll_block(pll)?;
        match pll {
            Pll::I2s => block.ctrl1().modify(|w| w.0 |= I2S_PLL_REG1 | PLL_PD | PLL_RST),
            _ => block.ctrl1().write_value(Ctrl1(PLL_500_REG1 | PLL_PD | PLL_RST)),
        }
        Ok(())
    }

    /// Gates the PLL output.
    pub fn pll_enable(&mut self, pll: Pll, enable: bool) -> Result<(), Error> {
        self.pll_block(pll)?.ctrl1().modify(|w| w.set_clk_en(enable));
        Ok(())
    }

    pub fn pll_bypass(&mut self, pll: Pll, enable: bool) -> Result<(), Error> {
        self.pll_block(pll)?.ctrl1().modify(|w| w.set_bypass(enable));
        Ok(())
    }

    pub fn pll_power_down(&mut self, pll: Pll, enable: bool) -> Result<(), Error> {
        self.pll_block(pll)?.ctrl1().modify(|w| w.set_pd(enable));
        Ok(())
    }

    /// Lock indication from the PLL macro itself.
    pub fn pll_is_locked(&self, pll: Pll) -> Result<bool, Error> {
        Ok(self.pll_block(pll)?.ctrl13().read().lock_phase())
    }

    /// Configures the SoC PLL lock detector.
    pub fn pll_lock_config(&mut self, manual_lock: bool, bypass_manual_lock: bool, mm_count_limit: u8) {
        self.regs.pll.soc().ctrl9().modify(|w| {
            w.set_manual_lock(manual_lock);
            w.set_bypass_lock(bypass_manual_lock);
            w.set_mm_count(mm_count_limit);
        });
    }

    /// Selects the PLL reference input. 0 is the crystal.
    pub fn pll_ref_clk_config(&mut self, source: u8) {
        self.regs.pll.macro_reg2().modify(|w| w.set_ref_clk_sel(source));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clocks::tests::tree;
    use crate::pac::mock;
    use crate::pac::m4clk::regs::PllStatReg;
    use crate::pac::npss::regs::ChipConfigMcuRead;
    use crate::pac::pll::regs::Ctrl12;

    fn locked(t: &ClockTree) {
        mock::poke(t.regs.m4clk.pll_stat_reg(), PllStatReg(0b1_1001));
    }

    fn new_table(t: &ClockTree) {
        t.regs.npss.m4_bbff_storage1().modify(|w| w.set_new_pll_table(true));
    }

    #[test]
    fn old_table_ladder() {
        let cases = [(1, 7), (2, 6), (3, 6), (4, 5), (15, 4), (16, 3), (63, 2), (64, 1), (126, 1), (127, 0)];
        for (mhz, shift) in cases {
            assert_eq!(old_table_shift(mhz), shift, "{} MHz", mhz);
        }
    }

    #[test]
    fn new_table_ladder() {
        let cases = [(1, 7), (2, 6), (3, 5), (5, 5), (6, 4), (11, 4), (12, 3), (23, 2), (45, 2), (46, 1), (90, 1), (91, 0)];
        for (mhz, shift) in cases {
            assert_eq!(new_table_shift(mhz), shift, "{} MHz", mhz);
        }
    }

    #[test]
    fn soc_pll_100mhz_old_table() {
        let mut t = tree();
        locked(&t);
        let pll = t.regs.pll;

        assert_eq!(t.pll_set_freq(Pll::Soc, Hertz::mhz(100), Hertz::mhz(40)), Ok(()));

        assert_eq!(pll.soc().ctrl2().read().0, 0x0338);
        assert_eq!(pll.soc().ctrl2().read().p(), 1);
        assert_eq!(pll.soc().ctrl1().read().0, 0x31c9);
        assert_eq!(pll.soc().ctrl1().read().m(), 199);
        assert_eq!(pll.soc().ctrl3().read().0, 0);
        assert_eq!(pll.macro_reg3().read().soc_ldo_prog(), 4);
        assert_eq!(pll.soc().ctrl11().read().0, 0xffff);
    }

    #[test]
    fn out_of_range_touches_nothing() {
        let mut t = tree();
        let pll = t.regs.pll;
        for freq in [Hertz(999_999), Hertz(300_000_001)] {
            assert_eq!(t.pll_set_freq(Pll::Soc, freq, Hertz::mhz(40)), Err(Error::InvalidParameters));
        }
        assert_eq!(pll.soc().ctrl1().read().0, 0);
        assert_eq!(pll.soc().ctrl2().read().0, 0);
        assert_eq!(pll.soc().ctrl11().read().0, 0);
        assert_eq!(pll.macro_reg3().read().0, 0);
    }

    #[test]
    fn old_table_high_dco_bands() {
        let mut t = tree();
        locked(&t);
        let pll = t.regs.pll;

        // 150 MHz: shift 0, dco 150, below both bands
        t.pll_set_freq(Pll::Intf, Hertz::mhz(150), Hertz::mhz(40)).unwrap();
        assert_eq!(pll.intf().ctrl1().read().dco_fix_sel(), 1);
        assert_eq!(pll.intf().ctrl1().read().m(), 149);
        assert_eq!(pll.macro_reg3().read().intf_ldo_prog(), 4);

        // 220 MHz: dco 220, select 0, halved multiplier, even so FCW cleared
        pll.intf().ctrl3().write_value(Ctrl3(0x1234));
        t.pll_set_freq(Pll::Intf, Hertz::mhz(220), Hertz::mhz(40)).unwrap();
        assert_eq!(pll.intf().ctrl1().read().dco_fix_sel(), 0);
        assert_eq!(pll.intf().ctrl1().read().m(), 109);
        assert_eq!(pll.intf().ctrl3().read().0, 0);
        assert_eq!(pll.macro_reg3().read().intf_ldo_prog(), 5);

        // 255 MHz: select 2, odd so FCW set to half
        t.pll_set_freq(Pll::Intf, Hertz::mhz(255), Hertz::mhz(40)).unwrap();
        assert_eq!(pll.intf().ctrl1().read().dco_fix_sel(), 2);
        assert_eq!(pll.intf().ctrl1().read().m(), 126);
        assert_eq!(pll.intf().ctrl3().read().fcw_f(), 8192);
        assert_eq!(pll.intf().ctrl2().read().p(), 0);
    }

    #[test]
    fn new_table_above_200mhz_falls_back() {
        let mut t = tree();
        locked(&t);
        mock::poke(t.regs.npss.chip_config_mcu_read(), {
            let mut v = ChipConfigMcuRead(0);
            v.set_limit_m4_freq_110mhz(true);
            v
        });
        let pll = t.regs.pll;
        mock::poke(pll.soc().ctrl12(), Ctrl12(31 << 11));

        assert_eq!(
            t.pll_set_freq(Pll::Soc, Hertz::mhz(250), Hertz::mhz(40)),
            Err(Error::InvalidInputFrequency)
        );
        assert_eq!(pll.soc().ctrl2().read().0, 39 << 3);
        assert_eq!(pll.soc().ctrl1().read().m(), 199);
        assert_eq!(pll.soc().ctrl1().read().dco_fix_sel(), 1);
        assert_eq!(pll.macro_reg3().read().soc_ldo_prog(), 1);
    }

    #[test]
    fn new_table_threshold_check() {
        let mut t = tree();
        locked(&t);
        new_table(&t);
        let pll = t.regs.pll;
        t.regs.npss.m4_bbff_storage1().modify(|w| w.set_soc_pll_tv_cal(10));

        // reached threshold above calibration
        mock::poke(pll.soc().ctrl12(), Ctrl12(11 << 11));
        assert_eq!(t.pll_set_freq(Pll::Soc, Hertz::mhz(80), Hertz::mhz(40)), Ok(()));
        assert_eq!(pll.soc().ctrl1().read().m(), 159);
        assert_eq!(pll.soc().ctrl2().read().p(), 1);
        assert!(!pll.soc().ctrl7().read().spi_inp_rd_en());

        // threshold at calibration forces the fallback
        mock::poke(pll.soc().ctrl12(), Ctrl12(10 << 11));
        assert_eq!(
            t.pll_set_freq(Pll::Soc, Hertz::mhz(80), Hertz::mhz(40)),
            Err(Error::InvalidInputFrequency)
        );
        // the fallback itself misses the threshold with an undivided output
        assert_eq!(pll.soc().ctrl11().read().0, PLL_RESET);
    }

    #[test]
    fn set_freq_div_old_table_uses_given_fields() {
        let mut t = tree();
        locked(&t);
        let pll = t.regs.pll;
        let factors = PllFactors {
            clk_en: true,
            div: 3,
            n: 39,
            m: 99,
            fcw_f: 5,
            dco_fix_sel: 2,
            ldo_prog: 3,
        };
        t.pll_set_freq_div(Pll::Soc, factors).unwrap();
        assert_eq!(pll.soc().ctrl1().read().dco_fix_sel(), 2);
        assert_eq!(pll.soc().ctrl1().read().m(), 99);
        assert_eq!(pll.soc().ctrl2().read().0, (3 << 9) | (39 << 3));
        assert_eq!(pll.soc().ctrl3().read().fcw_f(), 5);
        assert_eq!(pll.macro_reg3().read().soc_ldo_prog(), 3);

        t.pll_set_freq_div(Pll::Soc, PllFactors { clk_en: false, ..factors }).unwrap();
        assert!(!pll.soc().ctrl1().read().clk_en());
    }

    #[test]
    fn lock_timeout() {
        let mut t = tree();
        assert_eq!(
            t.pll_set_freq(Pll::Soc, Hertz::mhz(100), Hertz::mhz(40)),
            Err(Error::Timeout)
        );
    }

    #[test]
    fn turn_on_and_off() {
        let mut t = tree();
        let pll = t.regs.pll;
        t.pll_turn_on(Pll::Soc).unwrap();
        assert_eq!(pll.soc().ctrl1().read().0, 0x31c9 & !0x30);
        t.pll_turn_off(Pll::Soc).unwrap();
        assert_eq!(pll.soc().ctrl1().read().0, 0x31c9 | 0x30);

        t.pll_turn_on(Pll::I2s).unwrap();
        assert_eq!(pll.i2s().ctrl1().read().0, 0x1244 & !0x30);
        t.pll_turn_off(Pll::I2s).unwrap();
        assert_eq!(pll.i2s().ctrl1().read().0, 0x1244 | 0x30);

        t.pll_bypass(Pll::Intf, true).unwrap();
        t.pll_enable(Pll::Intf, true).unwrap();
        assert_eq!(pll.intf().ctrl1().read().0, PLL_BYPASS | PLL_CLK_ENABLE);
        t.pll_power_down(Pll::Intf, true).unwrap();
        t.pll_enable(Pll::Intf, false).unwrap();
        assert_eq!(pll.intf().ctrl1().read().0, PLL_BYPASS | PLL_PD);

        assert_eq!(t.pll_turn_on(Pll::Modem), Err(Error::InvalidParameters));
    }

    #[test]
    fn lock_and_reference_config() {
        let mut t = tree();
        let pll = t.regs.pll;
        pll.soc().ctrl9().write_value(crate::pac::pll::regs::Ctrl9(0xffff));
        t.pll_lock_config(true, false, 0xa4);
        assert_eq!(pll.soc().ctrl9().read().0, 0x8000 | (0xa4 << 6) | 0x3f);

        pll.macro_reg2().write_value(crate::pac::pll::regs::MacroReg2(0xffff));
        t.pll_ref_clk_config(0);
        assert_eq!(pll.macro_reg2().read().0, 0x3fff);
    }

    #[test]
    fn i2s_factor_derivation() {
        // 12.288 MHz divides the first DCO evenly
        let f = i2s_factors(Hertz(12_288_000), Hertz::mhz(40));
        assert_eq!(f, I2sPllFactors { div1: 5, div2: 0, n: 40, m: 73, fcw_f: 11928 });

        // 11.2896 MHz needs the second DCO
        let f = i2s_factors(Hertz(11_289_600), Hertz::mhz(40));
        assert_eq!(f, I2sPllFactors { div1: 5, div2: 0, n: 40, m: 67, fcw_f: 12084 });

        // 2.048 MHz: p = 36, divided by two first
        let f = i2s_factors(Hertz(2_048_000), Hertz(38_400_000));
        assert_eq!((f.div2, f.div1, f.n), (1, 17, 40));
    }

    #[test]
    fn i2s_pll_registers() {
        let mut t = tree();
        locked(&t);
        mock::poke(t.regs.m4clk.pll_stat_reg(), PllStatReg(1));
        let pll = t.regs.pll;

        t.i2s_pll_set_freq(Hertz(12_288_000), Hertz::mhz(40)).unwrap();
        let reg1 = pll.i2s().ctrl1().read();
        assert_eq!(reg1.m(), 73);
        assert!(reg1.bypass());
        assert!(!reg1.pd() && !reg1.rst());
        let reg2 = pll.i2s().i2s_ctrl2().read();
        assert_eq!((reg2.n(), reg2.p_div1(), reg2.p_div2()), (40, 5, 0));
        assert_eq!(pll.i2s().ctrl3().read().fcw_f(), 11928);
        assert_eq!(pll.i2s().ctrl11().read().0, 0xffff);
    }
}
