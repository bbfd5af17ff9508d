//! NPSS power domain registers
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::identity_op)]
#![allow(clippy::unnecessary_cast)]
#![allow(clippy::erasing_op)]

use super::common;

#[doc = "Always-on power domain: sleep FSM, PMU and battery flip-flops"]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Npss {
    ptr: *mut u8,
}
unsafe impl Send for Npss {}
unsafe impl Sync for Npss {}
impl Npss {
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }
    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }
    #[doc = "M4 subsystem reference clock select"]
    #[inline(always)]
    pub const fn mcu_fsm_ref_clk_reg(self) -> common::Reg<regs::McuFsmRefClkReg, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x108usize) as _) }
    }
    #[doc = "Write ones to raise PMU rail levels"]
    #[inline(always)]
    pub const fn mcu_pmu_ldo_ctrl_set(self) -> common::Reg<regs::McuPmuLdoCtrl, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x468usize) as _) }
    }
    #[doc = "Write ones to lower PMU rail levels. Reads the current levels."]
    #[inline(always)]
    pub const fn mcu_pmu_ldo_ctrl_clear(self) -> common::Reg<regs::McuPmuLdoCtrl, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x46cusize) as _) }
    }
    #[doc = "Battery backed calibration storage"]
    #[inline(always)]
    pub const fn m4_bbff_storage1(self) -> common::Reg<regs::M4BbffStorage1, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x580usize) as _) }
    }
    #[doc = "Fused chip configuration"]
    #[inline(always)]
    pub const fn chip_config_mcu_read(self) -> common::Reg<regs::ChipConfigMcuRead, common::R> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x61cusize) as _) }
    }
}
pub mod regs {
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct McuFsmRefClkReg(pub u32);
    impl McuFsmRefClkReg {
        #[doc = "M4 subsystem reference clock source"]
        #[inline(always)]
        pub const fn m4ss_ref_clk_sel(&self) -> u8 {
            let val = (self.0 >> 0usize) & 0x7;
            val as u8
        }
        #[doc = "M4 subsystem reference clock source"]
        #[inline(always)]
        pub fn set_m4ss_ref_clk_sel(&mut self, val: u8) {
            self.0 = (self.0 & !(0x7 << 0usize)) | (((val as u32) & 0x7) << 0usize);
        }
    }
    impl Default for McuFsmRefClkReg {
        #[inline(always)]
        fn default() -> McuFsmRefClkReg {
            McuFsmRefClkReg(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct McuPmuLdoCtrl(pub u32);
    impl McuPmuLdoCtrl {
        #[doc = "SoC LDO at the high (PS4) level"]
        #[inline(always)]
        pub const fn mcu_soc_ldo_lvl(&self) -> bool {
            let val = (self.0 >> 17usize) & 0x1;
            val != 0
        }
        #[doc = "SoC LDO at the high (PS4) level"]
        #[inline(always)]
        pub fn set_mcu_soc_ldo_lvl(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 17usize)) | (((val as u32) & 0x1) << 17usize);
        }
        #[doc = "DCDC at the high level"]
        #[inline(always)]
        pub const fn mcu_dcdc_lvl(&self) -> bool {
            let val = (self.0 >> 18usize) & 0x1;
            val != 0
        }
        #[doc = "DCDC at the high level"]
        #[inline(always)]
        pub fn set_mcu_dcdc_lvl(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 18usize)) | (((val as u32) & 0x1) << 18usize);
        }
    }
    impl Default for McuPmuLdoCtrl {
        #[inline(always)]
        fn default() -> McuPmuLdoCtrl {
            McuPmuLdoCtrl(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct M4BbffStorage1(pub u32);
    impl M4BbffStorage1 {
        #[doc = "Factory threshold value for the SoC PLL"]
        #[inline(always)]
        pub const fn soc_pll_tv_cal(&self) -> u8 {
            let val = (self.0 >> 0usize) & 0x1f;
            val as u8
        }
        #[doc = "Factory threshold value for the SoC PLL"]
        #[inline(always)]
        pub fn set_soc_pll_tv_cal(&mut self, val: u8) {
            self.0 = (self.0 & !(0x1f << 0usize)) | (((val as u32) & 0x1f) << 0usize);
        }
        #[doc = "Factory threshold value for the interface PLL"]
        #[inline(always)]
        pub const fn intf_pll_tv_cal(&self) -> u8 {
            let val = (self.0 >> 5usize) & 0x1f;
            val as u8
        }
        #[doc = "Factory threshold value for the interface PLL"]
        #[inline(always)]
        pub fn set_intf_pll_tv_cal(&mut self, val: u8) {
            self.0 = (self.0 & !(0x1f << 5usize)) | (((val as u32) & 0x1f) << 5usize);
        }
        #[doc = "Use the newer PLL programming table"]
        #[inline(always)]
        pub const fn new_pll_table(&self) -> bool {
            let val = (self.0 >> 10usize) & 0x1;
            val != 0
        }
        #[doc = "Use the newer PLL programming table"]
        #[inline(always)]
        pub fn set_new_pll_table(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 10usize)) | (((val as u32) & 0x1) << 10usize);
        }
    }
    impl Default for M4BbffStorage1 {
        #[inline(always)]
        fn default() -> M4BbffStorage1 {
            M4BbffStorage1(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct ChipConfigMcuRead(pub u32);
    impl ChipConfigMcuRead {
        #[doc = "Part limited to 110 MHz M4 clock"]
        #[inline(always)]
        pub const fn limit_m4_freq_110mhz(&self) -> bool {
            let val = (self.0 >> 21usize) & 0x1;
            val != 0
        }
        #[doc = "Part limited to 110 MHz M4 clock"]
        #[inline(always)]
        pub fn set_limit_m4_freq_110mhz(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 21usize)) | (((val as u32) & 0x1) << 21usize);
        }
    }
    impl Default for ChipConfigMcuRead {
        #[inline(always)]
        fn default() -> ChipConfigMcuRead {
            ChipConfigMcuRead(0)
        }
    }
}
