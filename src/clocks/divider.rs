//! Source muxes and dividers of the peripheral clocks.
//!
//! Every `*_clk_config` gates the peripheral clock off, checks that the requested source is
//! running, switches the mux, waits for the switched flag, programs the divider and gates
//! the clock back on.

use super::gate::{Bank, GateMode, PeripheralClock, QSPI_M4_SOC_SYNC};
use super::{ClockTree, Error, Pll};

const M4_SOC_CLK_FOR_OTHER: u32 = 1 << 26;

pub const QSPI_MAX_CLK_DIVISION_FACTOR: u8 = 63;
pub const SSI_MAX_CLK_DIVISION_FACTOR: u8 = 15;
pub const USART_MAX_CLK_DIVISION_FACTOR: u8 = 15;
pub const CCI_MAX_CLK_DIVISION_FACTOR: u8 = 15;
pub const CT_MAX_CLK_DIVISION_FACTOR: u8 = 63;
pub const I2S_MAX_CLK_DIVISION_FACTOR: u8 = 63;
/// Exclusive
pub const MCU_CLKOUT_MAX_CLK_DIVISION_FACTOR: u8 = 63;
pub const CAN_MAX_CLK_DIVISION_FACTOR: u8 = 255;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QspiClockSource {
    UlpRef,
    ModemPll2,
    IntfPll,
    SocPll,
    /// Runs in sync with the M4 SoC clock, no mux change
    M4SocSync,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SsiClockSource {
    UlpRef,
    SocPll,
    ModemPll1,
    IntfPll,
    ModemPll2,
    M4SocForOthers,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UsartClockSource {
    UlpRef,
    SocPll,
    ModemPll2,
    IntfPll,
    M4SocForOthers,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Usart {
    Usart1,
    Usart2,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CtClockSource {
    UlpRef,
    IntfPll,
    SocPll,
    M4SocForOthers,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CciClockSource {
    M4SocForOthers,
    IntfPll,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2sClockSource {
    I2sPll,
    M4SocForOthers,
}

/// MCU_CLKOUT pin source, values as written to the mux.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum McuClkoutSource {
    UlpMhzRc = 0x1,
    RfRef = 0x2,
    MemsRef = 0x3,
    UlpRingOsc20Mhz = 0x4,
    UlpDoubler = 0x5,
    Ulp32khzRc = 0x7,
    Ulp32khzXtal = 0x8,
    Ulp32khzRo = 0x9,
    IntfPll = 0xa,
    ModemPll1 = 0xb,
    ModemPll2 = 0xc,
    SocPll = 0xd,
    I2sPll = 0xe,
    UsbPll = 0xf,
}

impl McuClkoutSource {
    /// PLL that must be locked before selecting this source.
    fn pll(self) -> Option<Pll> {
        match self {
            Self::MemsRef | Self::ModemPll1 | Self::ModemPll2 | Self::UsbPll => Some(Pll::Modem),
            Self::IntfPll => Some(Pll::Intf),
            Self::SocPll => Some(Pll::Soc),
            Self::I2sPll => Some(Pll::I2s),
            _ => None,
        }
    }
}

impl ClockTree {
    fn soc_clk_for_others(&mut self) {
        self.clk_enable_bits(Bank::Reg3, M4_SOC_CLK_FOR_OTHER);
    }

    // - MARK: QSPI

    /// Selects the QSPI clock. The clock is gated back on even when the source check fails.
    pub fn qspi_clk_config(
        &mut self,
        source: QspiClockSource,
        swallow: bool,
        odd_div: bool,
        div: u8,
    ) -> Result<(), Error> {
        if div > QSPI_MAX_CLK_DIVISION_FACTOR {
            return Err(Error::InvalidParameters);
        }
        self.peripheral_clk_disable(PeripheralClock::Qspi);
        let res = self.qspi_switch(source, swallow, odd_div, div);
        self.peripheral_clk_enable(PeripheralClock::Qspi, GateMode::Static);
        res
    }

    fn qspi_switch(&mut self, source: QspiClockSource, swallow: bool, odd_div: bool, div: u8) -> Result<(), Error> {
        let m4clk = self.regs.m4clk;
        let sel = match source {
            QspiClockSource::UlpRef => Some(0),
            QspiClockSource::IntfPll => {
                self.check_present(Pll::Intf)?;
                Some(1)
            }
            QspiClockSource::ModemPll2 => {
                self.check_present(Pll::Modem)?;
                Some(2)
            }
            QspiClockSource::SocPll => {
                self.check_present(Pll::Soc)?;
                Some(3)
            }
            QspiClockSource::M4SocSync => None,
        };
        match sel {
            Some(sel) => m4clk.clk_config_reg1().modify(|w| w.set_qspi_clk_sel(sel)),
            None => self.clk_enable_bits(Bank::Reg3, QSPI_M4_SOC_SYNC),
        }

        self.wait_for("qspi switch", || m4clk.pll_stat_reg().read().qspi_clk_switched())?;
        self.qspi_clk_div(swallow, odd_div, div);
        Ok(())
    }

    pub fn qspi_clk_div(&mut self, swallow: bool, odd_div: bool, div: u8) {
        let m4clk = self.regs.m4clk;
        m4clk.clk_config_reg1().modify(|w| {
            w.set_qspi_clk_div_fac(div & 0x3f);
            w.set_qspi_clk_swallow_sel(swallow);
        });
        m4clk.clk_config_reg2().modify(|w| w.set_qspi_odd_div_sel(odd_div));
    }

    // - MARK: SSI master

    pub fn ssi_mst_clk_config(&mut self, mode: GateMode, source: SsiClockSource, div: u8) -> Result<(), Error> {
        if div > SSI_MAX_CLK_DIVISION_FACTOR {
            return Err(Error::InvalidParameters);
        }
        self.peripheral_clk_disable(PeripheralClock::SsiMaster);
        let sel = match source {
            SsiClockSource::UlpRef => 0,
            SsiClockSource::SocPll => {
                self.check_present(Pll::Soc)?;
                1
            }
            SsiClockSource::ModemPll1 => {
                self.check_present(Pll::Modem)?;
                2
            }
            SsiClockSource::IntfPll => {
                self.check_present(Pll::Intf)?;
                3
            }
            SsiClockSource::ModemPll2 => {
                self.check_present(Pll::Modem)?;
                4
            }
            SsiClockSource::M4SocForOthers => {
                self.soc_clk_for_others();
                5
            }
        };
        let m4clk = self.regs.m4clk;
        m4clk.clk_config_reg1().modify(|w| w.set_ssi_mst_sclk_sel(sel));
        self.wait_for("ssi switch", || m4clk.pll_stat_reg().read().ssi_mst_sclk_switched())?;
        self.ssi_mst_clk_div(div);
        self.peripheral_clk_enable(PeripheralClock::SsiMaster, mode);
        Ok(())
    }

    pub fn ssi_mst_clk_div(&mut self, div: u8) {
        self.regs
            .m4clk
            .clk_config_reg1()
            .modify(|w| w.set_ssi_mst_sclk_div_fac(div & 0x0f));
    }

    // - MARK: USART

    /// `frac_div` enables the fractional divider, which the register encodes inverted.
    pub fn usart_clk_config(
        &mut self,
        mode: GateMode,
        frac_div: bool,
        usart: Usart,
        source: UsartClockSource,
        div: u8,
    ) -> Result<(), Error> {
        if div > USART_MAX_CLK_DIVISION_FACTOR {
            return Err(Error::InvalidParameters);
        }
        let periph = match usart {
            Usart::Usart1 => PeripheralClock::Usart1,
            Usart::Usart2 => PeripheralClock::Usart2,
        };
        self.peripheral_clk_disable(periph);

        let sel = match source {
            UsartClockSource::UlpRef => 0,
            UsartClockSource::SocPll => {
                self.check_present(Pll::Soc)?;
                1
            }
            UsartClockSource::ModemPll2 => {
                self.check_present(Pll::Modem)?;
                2
            }
            UsartClockSource::IntfPll => {
                self.check_present(Pll::Intf)?;
                3
            }
            UsartClockSource::M4SocForOthers => 4,
        };

        let m4clk = self.regs.m4clk;
        match usart {
            Usart::Usart1 => m4clk.clk_config_reg2().modify(|w| w.set_usart1_sclk_sel(sel)),
            Usart::Usart2 => m4clk.clk_config_reg2().modify(|w| w.set_usart2_sclk_sel(sel)),
        }
        if source == UsartClockSource::M4SocForOthers {
            self.soc_clk_for_others();
        }
        self.wait_for("usart switch", || {
            let stat = m4clk.pll_stat_reg().read();
            match usart {
                Usart::Usart1 => stat.usart1_sclk_switched(),
                Usart::Usart2 => stat.usart2_sclk_switched(),
            }
        })?;
        m4clk.clk_config_reg2().modify(|w| match usart {
            Usart::Usart1 => {
                w.set_usart1_sclk_div_fac(div & 0x0f);
                w.set_usart1_sclk_frac_sel(!frac_div);
            }
            Usart::Usart2 => {
                w.set_usart2_sclk_div_fac(div & 0x0f);
                w.set_usart2_sclk_frac_sel(!frac_div);
            }
        });
        self.peripheral_clk_enable(periph, mode);
        Ok(())
    }

    /// Divider only. Here the fractional select bit is written as given.
    pub fn usart_clk_div(&mut self, usart: Usart, frac_sel: bool, div: u8) {
        self.regs.m4clk.clk_config_reg2().modify(|w| match usart {
            Usart::Usart1 => {
                w.set_usart1_sclk_frac_sel(frac_sel);
                w.set_usart1_sclk_div_fac(div & 0x0f);
            }
            Usart::Usart2 => {
                w.set_usart2_sclk_frac_sel(frac_sel);
                w.set_usart2_sclk_div_fac(div & 0x0f);
            }
        });
    }

    // - MARK: CT, CCI, CAN

    pub fn ct_clk_config(&mut self, source: CtClockSource, div: u8, mode: GateMode) -> Result<(), Error> {
        if div > CT_MAX_CLK_DIVISION_FACTOR {
            return Err(Error::InvalidParameters);
        }
        self.peripheral_clk_disable(PeripheralClock::Ct);
        let sel = match source {
            CtClockSource::UlpRef => 0,
            CtClockSource::IntfPll => {
                self.check_present(Pll::Intf)?;
                1
            }
            CtClockSource::SocPll => {
                self.check_present(Pll::Soc)?;
                2
            }
            CtClockSource::M4SocForOthers => {
                self.soc_clk_for_others();
                3
            }
        };
        let m4clk = self.regs.m4clk;
        m4clk.clk_config_reg5().modify(|w| w.set_ct_clk_sel(sel));
        self.wait_for("ct switch", || m4clk.pll_stat_reg().read().ct_clk_switched())?;
        self.ct_clk_div(div);
        self.peripheral_clk_enable(PeripheralClock::Ct, mode);
        Ok(())
    }

    pub fn ct_clk_div(&mut self, div: u8) {
        self.regs.m4clk.clk_config_reg5().modify(|w| w.set_ct_clk_div_fac(div & 0x3f));
    }

    /// The CCI mux has no switched flag.
    pub fn cci_clk_config(&mut self, source: CciClockSource, div: u8, mode: GateMode) -> Result<(), Error> {
        if div > CCI_MAX_CLK_DIVISION_FACTOR {
            return Err(Error::InvalidParameters);
        }
        self.peripheral_clk_disable(PeripheralClock::Cci);
        let m4clk = self.regs.m4clk;
        match source {
            CciClockSource::M4SocForOthers => {
                self.soc_clk_for_others();
                m4clk.clk_config_reg4().modify(|w| w.set_cci_clk_sel(0));
            }
            CciClockSource::IntfPll => {
                self.check_present(Pll::Intf)?;
                m4clk.clk_config_reg4().modify(|w| w.set_cci_clk_sel(1));
            }
        }
        self.cci_clk_div(div);
        self.peripheral_clk_enable(PeripheralClock::Cci, mode);
        Ok(())
    }

    pub fn cci_clk_div(&mut self, div: u8) {
        self.regs.m4clk.clk_config_reg2().modify(|w| w.set_cci_clk_div_fac(div));
    }

    pub fn can_clk_config(&mut self, div: u8, mode: GateMode) {
        self.peripheral_clk_disable(PeripheralClock::Can);
        self.regs.m4clk.clk_config_reg3().modify(|w| w.set_can1_clk_div_fac(div));
        self.peripheral_clk_enable(PeripheralClock::Can, mode);
    }

    // - MARK: I2S, MCU_CLKOUT

    /// Selects the I2S master clock and puts the interface in master mode.
    pub fn i2s_clk_config(&mut self, source: I2sClockSource, div: u8) -> Result<(), Error> {
        if div > I2S_MAX_CLK_DIVISION_FACTOR {
            return Err(Error::InvalidParameters);
        }
        self.peripheral_clk_disable(PeripheralClock::I2sm);
        self.regs.misc.misc_ctrl1().modify(|w| w.set_i2s_master_mode(true));
        let m4clk = self.regs.m4clk;
        match source {
            I2sClockSource::I2sPll => {
                self.check_present(Pll::I2s)?;
                m4clk.clk_config_reg5().modify(|w| w.set_i2s_clk_sel(false));
            }
            I2sClockSource::M4SocForOthers => {
                self.soc_clk_for_others();
                m4clk.clk_config_reg5().modify(|w| w.set_i2s_clk_sel(true));
            }
        }
        self.wait_for("i2s switch", || m4clk.pll_stat_reg().read().i2s_clk_switched())?;
        self.i2s_clk_div(div);
        self.peripheral_clk_enable(PeripheralClock::I2sm, GateMode::Static);
        Ok(())
    }

    /// Takes the I2S bit clock from the external master and gates the interface on.
    pub fn i2s_slave_mode(&mut self) {
        self.regs.misc.misc_ctrl1().modify(|w| w.set_i2s_master_mode(false));
        self.peripheral_clk_enable(PeripheralClock::I2sm, GateMode::Static);
    }

    pub fn i2s_clk_div(&mut self, div: u8) {
        self.regs.m4clk.clk_config_reg5().modify(|w| w.set_i2s_clk_div_fac(div & 0x3f));
    }

    /// Routes `source` divided by `div` to the MCU_CLKOUT pin. The mux has no switched flag.
    pub fn mcu_clkout_config(&mut self, source: McuClkoutSource, div: u8) -> Result<(), Error> {
        if div >= MCU_CLKOUT_MAX_CLK_DIVISION_FACTOR {
            return Err(Error::InvalidParameters);
        }
        self.peripheral_clk_disable(PeripheralClock::McuClkout);
        let m4clk = self.regs.m4clk;
        m4clk.clk_config_reg3().modify(|w| w.set_mcu_clkout_div_fac(div & 0x3f));
        if let Some(pll) = source.pll() {
            self.check_present(pll)?;
        }
        m4clk.clk_config_reg3().modify(|w| w.set_mcu_clkout_sel(source as u8));
        self.peripheral_clk_enable(PeripheralClock::McuClkout, GateMode::Static);
        Ok(())
    }

    pub fn m4_soc_clk_div(&mut self, div: u8) {
        self.regs
            .m4clk
            .clk_config_reg5()
            .modify(|w| w.set_m4_soc_clk_div_fac(div & 0x3f));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clocks::tests::{all_ready, tree};
    use crate::pac::m4clk::regs::PllStatReg;
    use crate::pac::mock;

    #[test]
    fn qspi_mux_values() {
        let mut t = tree();
        all_ready(&t);
        let cases = [
            (QspiClockSource::UlpRef, 0),
            (QspiClockSource::IntfPll, 1),
            (QspiClockSource::ModemPll2, 2),
            (QspiClockSource::SocPll, 3),
        ];
        for (source, sel) in cases {
            t.qspi_clk_config(source, true, true, 7).unwrap();
            let reg1 = t.regs.m4clk.clk_config_reg1().read();
            assert_eq!(reg1.qspi_clk_sel(), sel, "{:?}", source);
            assert_eq!(reg1.qspi_clk_div_fac(), 7);
            assert!(reg1.qspi_clk_swallow_sel());
            assert!(t.regs.m4clk.clk_config_reg2().read().qspi_odd_div_sel());
        }

        t.regs.m4clk.clk_config_reg1().modify(|w| w.set_qspi_clk_sel(1));
        t.qspi_clk_config(QspiClockSource::M4SocSync, false, false, 0).unwrap();
        assert_eq!(t.regs.m4clk.clk_config_reg1().read().qspi_clk_sel(), 1);
        // last write to SET_REG3 is the one-hot enable from the re-gating
        assert_eq!(mock::peek(t.regs.m4clk.clk_enable_set_reg3()).0, 1 << 13);

        assert_eq!(
            t.qspi_clk_config(QspiClockSource::UlpRef, false, false, 64),
            Err(Error::InvalidParameters)
        );
    }

    #[test]
    fn qspi_regates_on_missing_source() {
        let mut t = tree();
        assert_eq!(
            t.qspi_clk_config(QspiClockSource::SocPll, false, false, 1),
            Err(Error::ClockNotEnabled)
        );
        assert_eq!(mock::peek(t.regs.m4clk.clk_enable_set_reg2()).0, (1 << 11) | (1 << 12));
    }

    #[test]
    fn ssi_divider_and_sources() {
        let mut t = tree();
        assert_eq!(
            t.ssi_mst_clk_config(GateMode::Static, SsiClockSource::UlpRef, 16),
            Err(Error::InvalidParameters)
        );
        assert_eq!(
            t.ssi_mst_clk_config(GateMode::Static, SsiClockSource::IntfPll, 1),
            Err(Error::ClockNotEnabled)
        );
        assert_eq!(
            t.ssi_mst_clk_config(GateMode::Static, SsiClockSource::UlpRef, 1),
            Err(Error::Timeout)
        );

        all_ready(&t);
        t.ssi_mst_clk_config(GateMode::Static, SsiClockSource::M4SocForOthers, 15)
            .unwrap();
        let reg1 = t.regs.m4clk.clk_config_reg1().read();
        assert_eq!((reg1.ssi_mst_sclk_sel(), reg1.ssi_mst_sclk_div_fac()), (5, 15));
        assert_eq!(mock::peek(t.regs.m4clk.clk_enable_set_reg2()).0, (1 << 24) | (1 << 23));
    }

    #[test]
    fn usart_frac_select_is_inverted() {
        let mut t = tree();
        all_ready(&t);
        t.usart_clk_config(GateMode::Static, true, Usart::Usart2, UsartClockSource::IntfPll, 9)
            .unwrap();
        let reg2 = t.regs.m4clk.clk_config_reg2().read();
        assert_eq!((reg2.usart2_sclk_sel(), reg2.usart2_sclk_div_fac()), (3, 9));
        assert!(!reg2.usart2_sclk_frac_sel());
        assert_eq!(reg2.usart1_sclk_sel(), 0);
        assert_eq!(mock::peek(t.regs.m4clk.clk_enable_set_reg1()).0, 0b1100);

        t.usart_clk_config(GateMode::Static, false, Usart::Usart1, UsartClockSource::UlpRef, 2)
            .unwrap();
        assert!(t.regs.m4clk.clk_config_reg2().read().usart1_sclk_frac_sel());

        // only the selected instance's switched flag counts
        mock::poke(t.regs.m4clk.pll_stat_reg(), PllStatReg(1 << 5));
        assert_eq!(
            t.usart_clk_config(GateMode::Static, false, Usart::Usart2, UsartClockSource::UlpRef, 2),
            Err(Error::Timeout)
        );
        t.usart_clk_config(GateMode::Static, false, Usart::Usart1, UsartClockSource::UlpRef, 2)
            .unwrap();
    }

    #[test]
    fn ct_cci_can_dividers() {
        let mut t = tree();
        all_ready(&t);
        assert_eq!(t.ct_clk_config(CtClockSource::SocPll, 64, GateMode::Static), Err(Error::InvalidParameters));
        t.ct_clk_config(CtClockSource::SocPll, 63, GateMode::Static).unwrap();
        let reg5 = t.regs.m4clk.clk_config_reg5().read();
        assert_eq!((reg5.ct_clk_sel(), reg5.ct_clk_div_fac()), (2, 63));

        assert_eq!(t.cci_clk_config(CciClockSource::IntfPll, 16, GateMode::Static), Err(Error::InvalidParameters));
        t.cci_clk_config(CciClockSource::IntfPll, 15, GateMode::Dynamic).unwrap();
        assert_eq!(t.regs.m4clk.clk_config_reg4().read().cci_clk_sel(), 1);
        assert_eq!(t.regs.m4clk.clk_config_reg2().read().cci_clk_div_fac(), 15);

        t.can_clk_config(255, GateMode::Static);
        assert_eq!(t.regs.m4clk.clk_config_reg3().read().can1_clk_div_fac(), 255);
        assert_eq!(mock::peek(t.regs.m4clk.clk_enable_set_reg2()).0, 1 << 2);
    }

    #[test]
    fn i2s_clock_sets_master_mode() {
        let mut t = tree();
        mock::poke(t.regs.m4clk.pll_stat_reg(), PllStatReg(1 << 14));
        assert_eq!(t.i2s_clk_config(I2sClockSource::I2sPll, 1), Err(Error::ClockNotEnabled));
        assert!(t.regs.misc.misc_ctrl1().read().i2s_master_mode());

        t.i2s_clk_config(I2sClockSource::M4SocForOthers, 4).unwrap();
        let reg5 = t.regs.m4clk.clk_config_reg5().read();
        assert!(reg5.i2s_clk_sel());
        assert_eq!(reg5.i2s_clk_div_fac(), 4);

        t.i2s_slave_mode();
        assert!(!t.regs.misc.misc_ctrl1().read().i2s_master_mode());
    }

    #[test]
    fn mcu_clkout_checks_pll_and_limit() {
        let mut t = tree();
        assert_eq!(t.mcu_clkout_config(McuClkoutSource::RfRef, 63), Err(Error::InvalidParameters));
        assert_eq!(t.mcu_clkout_config(McuClkoutSource::SocPll, 2), Err(Error::ClockNotEnabled));
        assert_eq!(t.mcu_clkout_config(McuClkoutSource::UsbPll, 2), Err(Error::ClockNotEnabled));

        t.mcu_clkout_config(McuClkoutSource::Ulp32khzXtal, 62).unwrap();
        let reg3 = t.regs.m4clk.clk_config_reg3().read();
        assert_eq!((reg3.mcu_clkout_sel(), reg3.mcu_clkout_div_fac()), (8, 62));
        assert!(reg3.mcu_clkout_enable());

        mock::poke(t.regs.m4clk.pll_stat_reg(), PllStatReg(1 << 0));
        t.mcu_clkout_config(McuClkoutSource::I2sPll, 1).unwrap();
        assert_eq!(t.regs.m4clk.clk_config_reg3().read().mcu_clkout_sel(), 0xe);
    }
}
