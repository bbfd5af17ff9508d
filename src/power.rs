//! SoC supply levels and the PS4 bus registering.
//!
//! PS4 is the high performance power state: the SoC LDO at its high level and, above
//! 120 MHz, registering on the instruction cache and AHB bridge paths.

use crate::pac;
use crate::pac::npss::regs::McuPmuLdoCtrl;

#[derive(Copy, Clone)]
pub struct Power {
    npss: pac::npss::Npss,
    misc: pac::misc::Misc,
    icache: pac::misc::Icache,
}

impl Power {
    pub(crate) const fn new(npss: pac::npss::Npss, misc: pac::misc::Misc, icache: pac::misc::Icache) -> Self {
        Self { npss, misc, icache }
    }

    fn soc_ldo() -> McuPmuLdoCtrl {
        let mut v = McuPmuLdoCtrl(0);
        v.set_mcu_soc_ldo_lvl(true);
        v
    }

    fn dcdc() -> McuPmuLdoCtrl {
        let mut v = McuPmuLdoCtrl(0);
        v.set_mcu_dcdc_lvl(true);
        v
    }

    /// Drops the SoC LDO to its PS3 level.
    pub fn ps4_to_ps3(&self) {
        self.npss.mcu_pmu_ldo_ctrl_clear().write_value(Self::soc_ldo());
    }

    /// Raises the SoC LDO to its PS4 level.
    pub fn ps3_to_ps4(&self) {
        self.npss.mcu_pmu_ldo_ctrl_set().write_value(Self::soc_ldo());
    }

    pub fn dcdc_lower(&self) {
        self.npss.mcu_pmu_ldo_ctrl_clear().write_value(Self::dcdc());
    }

    pub fn dcdc_higher(&self) {
        self.npss.mcu_pmu_ldo_ctrl_set().write_value(Self::dcdc());
    }

    pub fn soc_ldo_is_high(&self) -> bool {
        self.npss.mcu_pmu_ldo_ctrl_clear().read().mcu_soc_ldo_lvl()
    }

    /// Enables the registering needed for clocks of 120 MHz and above.
    pub fn ps4_set_registers(&self) {
        self.icache.addr_translate_1().write(|w| w.set_registering(true));
        self.misc.sram_redundancy_ctrl().write(|w| w.set_ahb2ahb_registering(true));
        self.misc.misc_ctrl1().modify(|w| w.set_register_rom(true));
    }

    pub fn ps4_clear_registers(&self) {
        self.icache.addr_translate_1().modify(|w| w.set_registering(false));
        self.misc.sram_redundancy_ctrl().modify(|w| w.set_ahb2ahb_registering(false));
        self.misc.misc_ctrl1().modify(|w| w.set_register_rom(false));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pac::misc::regs::{AddrTranslate1, MiscCtrl1, SramRedundancyCtrl};
    use crate::pac::mock;

    fn power() -> Power {
        Power::new(mock::npss(), mock::misc(), mock::icache())
    }

    #[test]
    fn rail_writes_hit_set_and_clear() {
        let p = power();
        p.ps3_to_ps4();
        assert_eq!(mock::peek(p.npss.mcu_pmu_ldo_ctrl_set()).0, 1 << 17);
        p.dcdc_higher();
        assert_eq!(mock::peek(p.npss.mcu_pmu_ldo_ctrl_set()).0, 1 << 18);
        p.ps4_to_ps3();
        assert_eq!(mock::peek(p.npss.mcu_pmu_ldo_ctrl_clear()).0, 1 << 17);
        p.dcdc_lower();
        assert_eq!(mock::peek(p.npss.mcu_pmu_ldo_ctrl_clear()).0, 1 << 18);
    }

    #[test]
    fn ldo_level_reads_through_clear_register() {
        let p = power();
        mock::poke(p.npss.mcu_pmu_ldo_ctrl_clear(), McuPmuLdoCtrl(1 << 18));
        assert!(!p.soc_ldo_is_high());
        mock::poke(p.npss.mcu_pmu_ldo_ctrl_clear(), McuPmuLdoCtrl(1 << 17));
        assert!(p.soc_ldo_is_high());
    }

    #[test]
    fn ps4_registering_round_trip() {
        let p = power();
        p.icache.addr_translate_1().write_value(AddrTranslate1(0x0000_00ff));
        p.misc.sram_redundancy_ctrl().write_value(SramRedundancyCtrl(0x3));
        p.misc.misc_ctrl1().write_value(MiscCtrl1(0x1));

        p.ps4_set_registers();
        assert_eq!(p.icache.addr_translate_1().read().0, 1 << 21);
        assert_eq!(p.misc.sram_redundancy_ctrl().read().0, 1 << 4);
        assert_eq!(p.misc.misc_ctrl1().read().0, 0x11);

        p.ps4_clear_registers();
        assert_eq!(p.icache.addr_translate_1().read().0, 0);
        assert_eq!(p.misc.sram_redundancy_ctrl().read().0, 0);
        assert_eq!(p.misc.misc_ctrl1().read().0, 0x1);
    }
}
