//! Peripheral clock gating.
//!
//! Each peripheral has one [`Gate`] entry listing the enable bits it needs. Enable bits are
//! written through the SET/CLEAR register pairs; the dynamic gate registers hold "dynamic
//! gating disabled" bits and are read-modify-written.

use static_assertions::const_assert_eq;

use super::ClockTree;
use crate::pac::m4clk::regs::{ClkEnable, DynClkGate};

/// How an enabled peripheral clock is gated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GateMode {
    /// Hardware gates the clock while the peripheral is idle
    Dynamic,
    /// Clock always runs
    Static,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeripheralClock {
    Usart1,
    Usart2,
    SsiMaster,
    SsiSlave,
    Ct,
    SdMem,
    Cci,
    Can,
    Qspi,
    Qspi2,
    Rpdma,
    Udma,
    Pwm,
    Gspi,
    Egpio,
    Ethernet,
    McuClkout,
    Hwrng,
    I2sm,
}

/// Static enable register bank
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bank {
    Reg1,
    Reg2,
    Reg3,
    /// Output enable in CLK_CONFIG_REG3, the mask is ignored
    McuClkout,
}

/// Dynamic gate disable register
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DynBank {
    Reg1,
    Reg2,
}

pub(crate) struct Gate {
    /// Set on every enable
    always: &'static [(Bank, u32)],
    /// Set for static gating, cleared for dynamic gating
    gated: Option<(Bank, u32)>,
    /// Dynamic gate disable bits belonging to `gated`
    dynamic: Option<(DynBank, u32)>,
    /// Cleared on disable
    disable: &'static [(Bank, u32)],
    /// Set on disable
    disable_dynamic: Option<(DynBank, u32)>,
}

const fn bit(n: u32) -> u32 {
    1 << n
}

const M4_SOC_CLK_FOR_OTHER: u32 = bit(26);

const USART1_SCLK: u32 = bit(1);
const USART1_PCLK: u32 = bit(0);
const USART2_SCLK: u32 = bit(3);
const USART2_PCLK: u32 = bit(2);
const SSI_MST_SCLK: u32 = bit(24);
const SSI_MST_PCLK: u32 = bit(23);
const SSI_SLV_SCLK: u32 = bit(10);
const SSI_SLV_PCLK: u32 = bit(9);
const CT_CLK: u32 = bit(9);
const CT_PCLK: u32 = bit(10);
const SD_MEM_INTF_CLK: u32 = bit(29);
const CCI_CLK: u32 = bit(26);
const CCI_HCLK: u32 = bit(25);
const CCI_PCLK: u32 = bit(24);
const CAN1_CLK: u32 = bit(3);
const CAN1_PCLK: u32 = bit(2);
const QSPI_CLK: u32 = bit(11);
const QSPI_HCLK: u32 = bit(12);
pub(crate) const QSPI_CLK_ONEHOT: u32 = bit(13);
pub(crate) const QSPI_M4_SOC_SYNC: u32 = bit(14);
const QSPI_2_CLK: u32 = bit(4);
const QSPI_2_HCLK: u32 = bit(5);
const QSPI_2_M4_SOC_SYNC: u32 = bit(6);
const QSPI_2_CLK_ONEHOT: u32 = bit(7);
const RPDMA_HCLK: u32 = bit(13);
const UDMA_HCLK: u32 = bit(6);
const MCPWM_PCLK: u32 = bit(18);
const GEN_SPI_MST1_HCLK: u32 = bit(0);
const EGPIO_CLK: u32 = bit(16);
const EGPIO_PCLK: u32 = bit(21);
const ETH_HCLK: u32 = bit(21);
const HWRNG_PCLK: u32 = bit(22);
const I2SM_INTF_SCLK: u32 = bit(14);
const I2SM_SCLK: u32 = bit(13);
const I2SM_PCLK: u32 = bit(15);

// DYN_CLK_GATE_DISABLE_REG
const USART1_SCLK_DYN: u32 = bit(9);
const USART1_PCLK_DYN: u32 = bit(10);
const USART2_SCLK_DYN: u32 = bit(11);
const USART2_PCLK_DYN: u32 = bit(12);
const SSI_SLV_SCLK_DYN: u32 = bit(15);
const SSI_SLV_PCLK_DYN: u32 = bit(16);
const SSI_MST_SCLK_DYN: u32 = bit(21);
const SSI_MST_PCLK_DYN: u32 = bit(28);
const CCI_PCLK_DYN: u32 = bit(30);
// DYN_CLK_GATE_DISABLE_REG2
const CT_PCLK_DYN: u32 = bit(3);
const CAN1_PCLK_DYN: u32 = bit(4);

const fn simple(always: &'static [(Bank, u32)], disable: &'static [(Bank, u32)]) -> Gate {
    Gate {
        always,
        gated: None,
        dynamic: None,
        disable,
        disable_dynamic: None,
    }
}

static GATES: [Gate; 19] = [
    // Usart1
    Gate {
        always: &[],
        gated: Some((Bank::Reg1, USART1_SCLK | USART1_PCLK)),
        dynamic: Some((DynBank::Reg1, USART1_SCLK_DYN | USART1_PCLK_DYN)),
        disable: &[(Bank::Reg1, USART1_SCLK | USART1_PCLK)],
        disable_dynamic: Some((DynBank::Reg1, USART1_SCLK_DYN | USART1_PCLK_DYN)),
    },
    // Usart2
    Gate {
        always: &[],
        gated: Some((Bank::Reg1, USART2_SCLK | USART2_PCLK)),
        dynamic: Some((DynBank::Reg1, USART2_SCLK_DYN | USART2_PCLK_DYN)),
        disable: &[(Bank::Reg1, USART2_SCLK | USART2_PCLK)],
        disable_dynamic: Some((DynBank::Reg1, USART2_SCLK_DYN | USART2_PCLK_DYN)),
    },
    // SsiMaster, the bus clock stays on when disabled
    Gate {
        always: &[(Bank::Reg3, M4_SOC_CLK_FOR_OTHER)],
        gated: Some((Bank::Reg2, SSI_MST_SCLK | SSI_MST_PCLK)),
        dynamic: Some((DynBank::Reg1, SSI_MST_SCLK_DYN | SSI_MST_PCLK_DYN)),
        disable: &[(Bank::Reg2, SSI_MST_SCLK)],
        disable_dynamic: Some((DynBank::Reg1, SSI_MST_SCLK_DYN)),
    },
    // SsiSlave
    Gate {
        always: &[(Bank::Reg3, M4_SOC_CLK_FOR_OTHER)],
        gated: Some((Bank::Reg2, SSI_SLV_SCLK | SSI_SLV_PCLK)),
        dynamic: Some((DynBank::Reg1, SSI_SLV_SCLK_DYN | SSI_SLV_PCLK_DYN)),
        disable: &[(Bank::Reg2, SSI_SLV_SCLK | SSI_SLV_PCLK)],
        disable_dynamic: Some((DynBank::Reg1, SSI_SLV_SCLK_DYN | SSI_SLV_PCLK_DYN)),
    },
    // Ct
    Gate {
        always: &[(Bank::Reg1, CT_CLK)],
        gated: Some((Bank::Reg1, CT_PCLK)),
        dynamic: Some((DynBank::Reg2, CT_PCLK_DYN)),
        disable: &[(Bank::Reg1, CT_CLK)],
        disable_dynamic: None,
    },
    // SdMem
    simple(&[(Bank::Reg1, SD_MEM_INTF_CLK)], &[(Bank::Reg1, SD_MEM_INTF_CLK)]),
    // Cci
    Gate {
        always: &[(Bank::Reg1, CCI_CLK | CCI_HCLK), (Bank::Reg3, M4_SOC_CLK_FOR_OTHER)],
        gated: Some((Bank::Reg1, CCI_PCLK)),
        dynamic: Some((DynBank::Reg1, CCI_PCLK_DYN)),
        disable: &[(Bank::Reg1, CCI_CLK), (Bank::Reg3, M4_SOC_CLK_FOR_OTHER)],
        disable_dynamic: None,
    },
    // Can
    Gate {
        always: &[(Bank::Reg2, CAN1_CLK), (Bank::Reg3, M4_SOC_CLK_FOR_OTHER)],
        gated: Some((Bank::Reg2, CAN1_PCLK)),
        dynamic: Some((DynBank::Reg2, CAN1_PCLK_DYN)),
        disable: &[(Bank::Reg2, CAN1_CLK)],
        disable_dynamic: None,
    },
    // Qspi
    simple(
        &[(Bank::Reg2, QSPI_CLK | QSPI_HCLK), (Bank::Reg3, QSPI_CLK_ONEHOT)],
        &[(Bank::Reg2, QSPI_CLK), (Bank::Reg3, QSPI_CLK_ONEHOT | QSPI_M4_SOC_SYNC)],
    ),
    // Qspi2
    simple(
        &[(Bank::Reg1, QSPI_2_CLK | QSPI_2_HCLK), (Bank::Reg1, QSPI_2_CLK_ONEHOT)],
        &[(Bank::Reg1, QSPI_2_CLK), (Bank::Reg1, QSPI_2_CLK_ONEHOT | QSPI_2_M4_SOC_SYNC)],
    ),
    // Rpdma
    simple(&[(Bank::Reg1, RPDMA_HCLK)], &[(Bank::Reg1, RPDMA_HCLK)]),
    // Udma
    simple(&[(Bank::Reg2, UDMA_HCLK)], &[(Bank::Reg2, UDMA_HCLK)]),
    // Pwm
    simple(&[(Bank::Reg2, MCPWM_PCLK)], &[(Bank::Reg2, MCPWM_PCLK)]),
    // Gspi
    simple(
        &[(Bank::Reg3, M4_SOC_CLK_FOR_OTHER), (Bank::Reg2, GEN_SPI_MST1_HCLK)],
        &[(Bank::Reg2, GEN_SPI_MST1_HCLK)],
    ),
    // Egpio
    simple(
        &[(Bank::Reg3, EGPIO_CLK), (Bank::Reg2, EGPIO_PCLK)],
        &[(Bank::Reg2, EGPIO_PCLK), (Bank::Reg3, EGPIO_CLK)],
    ),
    // Ethernet
    simple(
        &[(Bank::Reg3, M4_SOC_CLK_FOR_OTHER), (Bank::Reg1, ETH_HCLK)],
        &[(Bank::Reg1, ETH_HCLK)],
    ),
    // McuClkout
    simple(&[(Bank::McuClkout, 0)], &[(Bank::McuClkout, 0)]),
    // Hwrng
    simple(&[(Bank::Reg1, HWRNG_PCLK)], &[(Bank::Reg1, HWRNG_PCLK)]),
    // I2sm
    simple(
        &[(Bank::Reg2, I2SM_INTF_SCLK | I2SM_SCLK | I2SM_PCLK)],
        &[(Bank::Reg2, I2SM_INTF_SCLK | I2SM_SCLK)],
    ),
];

const_assert_eq!(PeripheralClock::I2sm as usize + 1, 19);

impl PeripheralClock {
    pub(crate) fn gate(self) -> &'static Gate {
        &GATES[self as usize]
    }
}

impl ClockTree {
    /// Writes `flags` to the SET register of `bank`.
    pub fn clk_enable_bits(&mut self, bank: Bank, flags: u32) {
        let m4clk = self.regs.m4clk;
        match bank {
            Bank::Reg1 => m4clk.clk_enable_set_reg1().write_value(ClkEnable(flags)),
            Bank::Reg2 => m4clk.clk_enable_set_reg2().write_value(ClkEnable(flags)),
            Bank::Reg3 => m4clk.clk_enable_set_reg3().write_value(ClkEnable(flags)),
            Bank::McuClkout => m4clk.clk_config_reg3().modify(|w| w.set_mcu_clkout_enable(true)),
        }
    }

    /// Writes `flags` to the CLEAR register of `bank`.
    pub fn clk_disable_bits(&mut self, bank: Bank, flags: u32) {
        let m4clk = self.regs.m4clk;
        match bank {
            Bank::Reg1 => m4clk.clk_enable_clear_reg1().write_value(ClkEnable(flags)),
            Bank::Reg2 => m4clk.clk_enable_clear_reg2().write_value(ClkEnable(flags)),
            Bank::Reg3 => m4clk.clk_enable_clear_reg3().write_value(ClkEnable(flags)),
            Bank::McuClkout => m4clk.clk_config_reg3().modify(|w| w.set_mcu_clkout_enable(false)),
        }
    }

    /// Lets hardware gate the clocks in `flags` while idle.
    pub fn dynamic_gating_on(&mut self, bank: DynBank, flags: u32) {
        self.dyn_reg(bank).modify(|w| w.0 &= !flags);
    }

    /// Keeps the clocks in `flags` running regardless of activity.
    pub fn dynamic_gating_off(&mut self, bank: DynBank, flags: u32) {
        self.dyn_reg(bank).modify(|w| w.0 |= flags);
    }

    fn dyn_reg(&self, bank: DynBank) -> crate::pac::common::Reg<DynClkGate, crate::pac::common::RW> {
        match bank {
            DynBank::Reg1 => self.regs.m4clk.dyn_clk_gate_disable_reg(),
            DynBank::Reg2 => self.regs.m4clk.dyn_clk_gate_disable_reg2(),
        }
    }

    /// Enables the clocks of `periph`. `mode` only matters for peripherals with gateable bus
    /// clocks.
    pub fn peripheral_clk_enable(&mut self, periph: PeripheralClock, mode: GateMode) {
        let gate = periph.gate();
        trace!("clocks: enable {:?} {:?}", periph, mode);
        for &(bank, flags) in gate.always {
            self.clk_enable_bits(bank, flags);
        }
        if let Some((bank, flags)) = gate.gated {
            match mode {
                GateMode::Static => self.clk_enable_bits(bank, flags),
                GateMode::Dynamic => {
                    self.clk_disable_bits(bank, flags);
                    if let Some((dyn_bank, dyn_flags)) = gate.dynamic {
                        self.dynamic_gating_on(dyn_bank, dyn_flags);
                    }
                }
            }
        }
    }

    pub fn peripheral_clk_disable(&mut self, periph: PeripheralClock) {
        let gate = periph.gate();
        trace!("clocks: disable {:?}", periph);
        for &(bank, flags) in gate.disable {
            self.clk_disable_bits(bank, flags);
        }
        if let Some((bank, flags)) = gate.disable_dynamic {
            self.dynamic_gating_off(bank, flags);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clocks::tests::tree;
    use crate::pac::mock;

    const ALL: [PeripheralClock; 19] = [
        PeripheralClock::Usart1,
        PeripheralClock::Usart2,
        PeripheralClock::SsiMaster,
        PeripheralClock::SsiSlave,
        PeripheralClock::Ct,
        PeripheralClock::SdMem,
        PeripheralClock::Cci,
        PeripheralClock::Can,
        PeripheralClock::Qspi,
        PeripheralClock::Qspi2,
        PeripheralClock::Rpdma,
        PeripheralClock::Udma,
        PeripheralClock::Pwm,
        PeripheralClock::Gspi,
        PeripheralClock::Egpio,
        PeripheralClock::Ethernet,
        PeripheralClock::McuClkout,
        PeripheralClock::Hwrng,
        PeripheralClock::I2sm,
    ];

    fn snapshot(t: &ClockTree) -> [u32; 9] {
        let m = t.regs.m4clk;
        [
            mock::peek(m.clk_enable_set_reg1()).0,
            mock::peek(m.clk_enable_clear_reg1()).0,
            mock::peek(m.clk_enable_set_reg2()).0,
            mock::peek(m.clk_enable_clear_reg2()).0,
            mock::peek(m.clk_enable_set_reg3()).0,
            mock::peek(m.clk_enable_clear_reg3()).0,
            mock::peek(m.dyn_clk_gate_disable_reg()).0,
            mock::peek(m.dyn_clk_gate_disable_reg2()).0,
            mock::peek(m.clk_config_reg3()).0,
        ]
    }

    #[test]
    fn enable_and_disable_are_idempotent() {
        for periph in ALL {
            for mode in [GateMode::Static, GateMode::Dynamic] {
                let mut t = tree();
                t.peripheral_clk_enable(periph, mode);
                let once = snapshot(&t);
                t.peripheral_clk_enable(periph, mode);
                assert_eq!(snapshot(&t), once, "{:?} {:?}", periph, mode);
            }

            let mut t = tree();
            t.peripheral_clk_disable(periph);
            let once = snapshot(&t);
            t.peripheral_clk_disable(periph);
            assert_eq!(snapshot(&t), once, "{:?}", periph);
        }
    }

    #[test]
    fn table_is_indexed_by_variant() {
        assert_eq!(PeripheralClock::Pwm.gate().always, &[(Bank::Reg2, 1 << 18)]);
        assert_eq!(PeripheralClock::I2sm.gate().disable, &[(Bank::Reg2, (1 << 14) | (1 << 13))]);
        for periph in ALL {
            let gate = periph.gate();
            assert!(!gate.always.is_empty() || gate.gated.is_some(), "{:?}", periph);
            assert!(!gate.disable.is_empty(), "{:?}", periph);
        }
    }

    #[test]
    fn pwm_touches_only_its_bit() {
        let mut t = tree();
        t.peripheral_clk_enable(PeripheralClock::Pwm, GateMode::Static);
        assert_eq!(snapshot(&t), [0, 0, 1 << 18, 0, 0, 0, 0, 0, 0]);
        t.peripheral_clk_disable(PeripheralClock::Pwm);
        assert_eq!(snapshot(&t), [0, 0, 1 << 18, 1 << 18, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn usart_static_and_dynamic() {
        let mut t = tree();
        t.regs.m4clk.dyn_clk_gate_disable_reg().write_value(DynClkGate(u32::MAX));

        t.peripheral_clk_enable(PeripheralClock::Usart1, GateMode::Static);
        assert_eq!(mock::peek(t.regs.m4clk.clk_enable_set_reg1()).0, 0b11);
        assert_eq!(t.regs.m4clk.dyn_clk_gate_disable_reg().read().0, u32::MAX);

        t.peripheral_clk_enable(PeripheralClock::Usart1, GateMode::Dynamic);
        assert_eq!(mock::peek(t.regs.m4clk.clk_enable_clear_reg1()).0, 0b11);
        assert_eq!(t.regs.m4clk.dyn_clk_gate_disable_reg().read().0, !((1 << 9) | (1 << 10)));

        t.peripheral_clk_disable(PeripheralClock::Usart1);
        assert_eq!(t.regs.m4clk.dyn_clk_gate_disable_reg().read().0, u32::MAX);
    }

    #[test]
    fn ssi_master_needs_soc_clock_for_others() {
        let mut t = tree();
        t.peripheral_clk_enable(PeripheralClock::SsiMaster, GateMode::Static);
        assert_eq!(mock::peek(t.regs.m4clk.clk_enable_set_reg3()).0, 1 << 26);
        assert_eq!(mock::peek(t.regs.m4clk.clk_enable_set_reg2()).0, (1 << 24) | (1 << 23));

        t.peripheral_clk_disable(PeripheralClock::SsiMaster);
        assert_eq!(mock::peek(t.regs.m4clk.clk_enable_clear_reg2()).0, 1 << 24);
        assert_eq!(t.regs.m4clk.dyn_clk_gate_disable_reg().read().0, 1 << 21);
    }

    #[test]
    fn ct_dynamic_uses_second_gate_register() {
        let mut t = tree();
        t.regs.m4clk.dyn_clk_gate_disable_reg2().write_value(DynClkGate(0xff));
        t.peripheral_clk_enable(PeripheralClock::Ct, GateMode::Dynamic);
        assert_eq!(mock::peek(t.regs.m4clk.clk_enable_set_reg1()).0, 1 << 9);
        assert_eq!(mock::peek(t.regs.m4clk.clk_enable_clear_reg1()).0, 1 << 10);
        assert_eq!(t.regs.m4clk.dyn_clk_gate_disable_reg2().read().0, 0xff & !(1 << 3));
    }

    #[test]
    fn mcu_clkout_uses_config_register() {
        let mut t = tree();
        t.peripheral_clk_enable(PeripheralClock::McuClkout, GateMode::Static);
        assert!(t.regs.m4clk.clk_config_reg3().read().mcu_clkout_enable());
        t.peripheral_clk_disable(PeripheralClock::McuClkout);
        assert!(!t.regs.m4clk.clk_config_reg3().read().mcu_clkout_enable());
    }
}
