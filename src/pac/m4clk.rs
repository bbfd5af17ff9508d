//! M4 subsystem clock controller
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::identity_op)]
#![allow(clippy::unnecessary_cast)]
#![allow(clippy::erasing_op)]

use super::common;

#[doc = "M4 subsystem clock controller"]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct M4clk {
    ptr: *mut u8,
}
unsafe impl Send for M4clk {}
unsafe impl Sync for M4clk {}
impl M4clk {
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }
    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }
    #[doc = "Write ones to enable clocks, group 2"]
    #[inline(always)]
    pub const fn clk_enable_set_reg2(self) -> common::Reg<regs::ClkEnable, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x0usize) as _) }
    }
    #[doc = "Write ones to disable clocks, group 2"]
    #[inline(always)]
    pub const fn clk_enable_clear_reg2(self) -> common::Reg<regs::ClkEnable, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x4usize) as _) }
    }
    #[doc = "Write ones to enable clocks, group 3"]
    #[inline(always)]
    pub const fn clk_enable_set_reg3(self) -> common::Reg<regs::ClkEnable, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x8usize) as _) }
    }
    #[doc = "Write ones to disable clocks, group 3"]
    #[inline(always)]
    pub const fn clk_enable_clear_reg3(self) -> common::Reg<regs::ClkEnable, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0xcusize) as _) }
    }
    #[doc = "QSPI, SSI master and PLL interface clock configuration"]
    #[inline(always)]
    pub const fn clk_config_reg1(self) -> common::Reg<regs::ClkConfigReg1, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x10usize) as _) }
    }
    #[doc = "USART and CCI clock configuration"]
    #[inline(always)]
    pub const fn clk_config_reg2(self) -> common::Reg<regs::ClkConfigReg2, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x14usize) as _) }
    }
    #[doc = "CAN and MCU clock out configuration"]
    #[inline(always)]
    pub const fn clk_config_reg3(self) -> common::Reg<regs::ClkConfigReg3, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x18usize) as _) }
    }
    #[doc = "Sleep and CCI clock select"]
    #[inline(always)]
    pub const fn clk_config_reg4(self) -> common::Reg<regs::ClkConfigReg4, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x1cusize) as _) }
    }
    #[doc = "M4 SoC, CT, I2S and USB clock configuration"]
    #[inline(always)]
    pub const fn clk_config_reg5(self) -> common::Reg<regs::ClkConfigReg5, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x20usize) as _) }
    }
    #[doc = "Dynamic clock gating disable, group 1"]
    #[inline(always)]
    pub const fn dyn_clk_gate_disable_reg(self) -> common::Reg<regs::DynClkGate, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x24usize) as _) }
    }
    #[doc = "QSPI2 and USB PHY clock configuration"]
    #[inline(always)]
    pub const fn clk_config_reg6(self) -> common::Reg<regs::ClkConfigReg6, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x2cusize) as _) }
    }
    #[doc = "PLL lock and clock switch status"]
    #[inline(always)]
    pub const fn pll_stat_reg(self) -> common::Reg<regs::PllStatReg, common::R> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x30usize) as _) }
    }
    #[doc = "Dynamic clock gating disable, group 2"]
    #[inline(always)]
    pub const fn dyn_clk_gate_disable_reg2(self) -> common::Reg<regs::DynClkGate, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x7cusize) as _) }
    }
    #[doc = "Write ones to enable clocks, group 1"]
    #[inline(always)]
    pub const fn clk_enable_set_reg1(self) -> common::Reg<regs::ClkEnable, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x80usize) as _) }
    }
    #[doc = "Write ones to disable clocks, group 1"]
    #[inline(always)]
    pub const fn clk_enable_clear_reg1(self) -> common::Reg<regs::ClkEnable, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x84usize) as _) }
    }
}
pub mod regs {
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct ClkEnable(pub u32);
    impl ClkEnable {
    }
    impl Default for ClkEnable {
        #[inline(always)]
        fn default() -> ClkEnable {
            ClkEnable(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct DynClkGate(pub u32);
    impl DynClkGate {
    }
    impl Default for DynClkGate {
        #[inline(always)]
        fn default() -> DynClkGate {
            DynClkGate(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct ClkConfigReg1(pub u32);
    impl ClkConfigReg1 {
        #[doc = "QSPI clock source"]
        #[inline(always)]
        pub const fn qspi_clk_sel(&self) -> u8 {
            let val = (self.0 >> 0usize) & 0x7;
            val as u8
        }
        #[doc = "QSPI clock source"]
        #[inline(always)]
        pub fn set_qspi_clk_sel(&mut self, val: u8) {
            self.0 = (self.0 & !(0x7 << 0usize)) | (((val as u32) & 0x7) << 0usize);
        }
        #[doc = "QSPI clock divider"]
        #[inline(always)]
        pub const fn qspi_clk_div_fac(&self) -> u8 {
            let val = (self.0 >> 3usize) & 0x3f;
            val as u8
        }
        #[doc = "QSPI clock divider"]
        #[inline(always)]
        pub fn set_qspi_clk_div_fac(&mut self, val: u8) {
            self.0 = (self.0 & !(0x3f << 3usize)) | (((val as u32) & 0x3f) << 3usize);
        }
        #[doc = "QSPI swallow divider enable"]
        #[inline(always)]
        pub const fn qspi_clk_swallow_sel(&self) -> bool {
            let val = (self.0 >> 9usize) & 0x1;
            val != 0
        }
        #[doc = "QSPI swallow divider enable"]
        #[inline(always)]
        pub fn set_qspi_clk_swallow_sel(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 9usize)) | (((val as u32) & 0x1) << 9usize);
        }
        #[doc = "SSI master clock source"]
        #[inline(always)]
        pub const fn ssi_mst_sclk_sel(&self) -> u8 {
            let val = (self.0 >> 11usize) & 0x7;
            val as u8
        }
        #[doc = "SSI master clock source"]
        #[inline(always)]
        pub fn set_ssi_mst_sclk_sel(&mut self, val: u8) {
            self.0 = (self.0 & !(0x7 << 11usize)) | (((val as u32) & 0x7) << 11usize);
        }
        #[doc = "SSI master clock divider"]
        #[inline(always)]
        pub const fn ssi_mst_sclk_div_fac(&self) -> u8 {
            let val = (self.0 >> 14usize) & 0xf;
            val as u8
        }
        #[doc = "SSI master clock divider"]
        #[inline(always)]
        pub fn set_ssi_mst_sclk_div_fac(&mut self, val: u8) {
            self.0 = (self.0 & !(0xf << 14usize)) | (((val as u32) & 0xf) << 14usize);
        }
        #[doc = "GSPI clock source"]
        #[inline(always)]
        pub const fn gen_spi_mst1_sclk_sel(&self) -> u8 {
            let val = (self.0 >> 18usize) & 0x7;
            val as u8
        }
        #[doc = "GSPI clock source"]
        #[inline(always)]
        pub fn set_gen_spi_mst1_sclk_sel(&mut self, val: u8) {
            self.0 = (self.0 & !(0x7 << 18usize)) | (((val as u32) & 0x7) << 18usize);
        }
        #[doc = "PLL interface clock source"]
        #[inline(always)]
        pub const fn pll_intf_clk_sel(&self) -> bool {
            let val = (self.0 >> 21usize) & 0x1;
            val != 0
        }
        #[doc = "PLL interface clock source"]
        #[inline(always)]
        pub fn set_pll_intf_clk_sel(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 21usize)) | (((val as u32) & 0x1) << 21usize);
        }
        #[doc = "PLL interface clock divider"]
        #[inline(always)]
        pub const fn pll_intf_clk_div_fac(&self) -> u8 {
            let val = (self.0 >> 22usize) & 0xf;
            val as u8
        }
        #[doc = "PLL interface clock divider"]
        #[inline(always)]
        pub fn set_pll_intf_clk_div_fac(&mut self, val: u8) {
            self.0 = (self.0 & !(0xf << 22usize)) | (((val as u32) & 0xf) << 22usize);
        }
        #[doc = "PLL interface swallow divider enable"]
        #[inline(always)]
        pub const fn pll_intf_clk_swallow_sel(&self) -> bool {
            let val = (self.0 >> 26usize) & 0x1;
            val != 0
        }
        #[doc = "PLL interface swallow divider enable"]
        #[inline(always)]
        pub fn set_pll_intf_clk_swallow_sel(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 26usize)) | (((val as u32) & 0x1) << 26usize);
        }
    }
    impl Default for ClkConfigReg1 {
        #[inline(always)]
        fn default() -> ClkConfigReg1 {
            ClkConfigReg1(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct ClkConfigReg2(pub u32);
    impl ClkConfigReg2 {
        #[doc = "USART1 clock source"]
        #[inline(always)]
        pub const fn usart1_sclk_sel(&self) -> u8 {
            let val = (self.0 >> 0usize) & 0x7;
            val as u8
        }
        #[doc = "USART1 clock source"]
        #[inline(always)]
        pub fn set_usart1_sclk_sel(&mut self, val: u8) {
            self.0 = (self.0 & !(0x7 << 0usize)) | (((val as u32) & 0x7) << 0usize);
        }
        #[doc = "USART2 clock source"]
        #[inline(always)]
        pub const fn usart2_sclk_sel(&self) -> u8 {
            let val = (self.0 >> 3usize) & 0x7;
            val as u8
        }
        #[doc = "USART2 clock source"]
        #[inline(always)]
        pub fn set_usart2_sclk_sel(&mut self, val: u8) {
            self.0 = (self.0 & !(0x7 << 3usize)) | (((val as u32) & 0x7) << 3usize);
        }
        #[doc = "USART1 clock divider"]
        #[inline(always)]
        pub const fn usart1_sclk_div_fac(&self) -> u8 {
            let val = (self.0 >> 6usize) & 0xf;
            val as u8
        }
        #[doc = "USART1 clock divider"]
        #[inline(always)]
        pub fn set_usart1_sclk_div_fac(&mut self, val: u8) {
            self.0 = (self.0 & !(0xf << 6usize)) | (((val as u32) & 0xf) << 6usize);
        }
        #[doc = "USART2 clock divider"]
        #[inline(always)]
        pub const fn usart2_sclk_div_fac(&self) -> u8 {
            let val = (self.0 >> 10usize) & 0xf;
            val as u8
        }
        #[doc = "USART2 clock divider"]
        #[inline(always)]
        pub fn set_usart2_sclk_div_fac(&mut self, val: u8) {
            self.0 = (self.0 & !(0xf << 10usize)) | (((val as u32) & 0xf) << 10usize);
        }
        #[doc = "USART1 fractional divider enable"]
        #[inline(always)]
        pub const fn usart1_sclk_frac_sel(&self) -> bool {
            let val = (self.0 >> 14usize) & 0x1;
            val != 0
        }
        #[doc = "USART1 fractional divider enable"]
        #[inline(always)]
        pub fn set_usart1_sclk_frac_sel(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 14usize)) | (((val as u32) & 0x1) << 14usize);
        }
        #[doc = "USART2 fractional divider enable"]
        #[inline(always)]
        pub const fn usart2_sclk_frac_sel(&self) -> bool {
            let val = (self.0 >> 15usize) & 0x1;
            val != 0
        }
        #[doc = "USART2 fractional divider enable"]
        #[inline(always)]
        pub fn set_usart2_sclk_frac_sel(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 15usize)) | (((val as u32) & 0x1) << 15usize);
        }
        #[doc = "CCI clock divider"]
        #[inline(always)]
        pub const fn cci_clk_div_fac(&self) -> u8 {
            let val = (self.0 >> 16usize) & 0xf;
            val as u8
        }
        #[doc = "CCI clock divider"]
        #[inline(always)]
        pub fn set_cci_clk_div_fac(&mut self, val: u8) {
            self.0 = (self.0 & !(0xf << 16usize)) | (((val as u32) & 0xf) << 16usize);
        }
        #[doc = "QSPI odd divider enable"]
        #[inline(always)]
        pub const fn qspi_odd_div_sel(&self) -> bool {
            let val = (self.0 >> 20usize) & 0x1;
            val != 0
        }
        #[doc = "QSPI odd divider enable"]
        #[inline(always)]
        pub fn set_qspi_odd_div_sel(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 20usize)) | (((val as u32) & 0x1) << 20usize);
        }
    }
    impl Default for ClkConfigReg2 {
        #[inline(always)]
        fn default() -> ClkConfigReg2 {
            ClkConfigReg2(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct ClkConfigReg3(pub u32);
    impl ClkConfigReg3 {
        #[doc = "CAN clock divider"]
        #[inline(always)]
        pub const fn can1_clk_div_fac(&self) -> u8 {
            let val = (self.0 >> 0usize) & 0xff;
            val as u8
        }
        #[doc = "CAN clock divider"]
        #[inline(always)]
        pub fn set_can1_clk_div_fac(&mut self, val: u8) {
            self.0 = (self.0 & !(0xff << 0usize)) | (((val as u32) & 0xff) << 0usize);
        }
        #[doc = "MCU clock out source"]
        #[inline(always)]
        pub const fn mcu_clkout_sel(&self) -> u8 {
            let val = (self.0 >> 8usize) & 0xf;
            val as u8
        }
        #[doc = "MCU clock out source"]
        #[inline(always)]
        pub fn set_mcu_clkout_sel(&mut self, val: u8) {
            self.0 = (self.0 & !(0xf << 8usize)) | (((val as u32) & 0xf) << 8usize);
        }
        #[doc = "MCU clock out divider"]
        #[inline(always)]
        pub const fn mcu_clkout_div_fac(&self) -> u8 {
            let val = (self.0 >> 12usize) & 0x3f;
            val as u8
        }
        #[doc = "MCU clock out divider"]
        #[inline(always)]
        pub fn set_mcu_clkout_div_fac(&mut self, val: u8) {
            self.0 = (self.0 & !(0x3f << 12usize)) | (((val as u32) & 0x3f) << 12usize);
        }
        #[doc = "MCU clock out enable"]
        #[inline(always)]
        pub const fn mcu_clkout_enable(&self) -> bool {
            let val = (self.0 >> 18usize) & 0x1;
            val != 0
        }
        #[doc = "MCU clock out enable"]
        #[inline(always)]
        pub fn set_mcu_clkout_enable(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 18usize)) | (((val as u32) & 0x1) << 18usize);
        }
    }
    impl Default for ClkConfigReg3 {
        #[inline(always)]
        fn default() -> ClkConfigReg3 {
            ClkConfigReg3(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct ClkConfigReg4(pub u32);
    impl ClkConfigReg4 {
        #[doc = "Sleep clock source"]
        #[inline(always)]
        pub const fn sleep_clk_sel(&self) -> u8 {
            let val = (self.0 >> 0usize) & 0x3;
            val as u8
        }
        #[doc = "Sleep clock source"]
        #[inline(always)]
        pub fn set_sleep_clk_sel(&mut self, val: u8) {
            self.0 = (self.0 & !(0x3 << 0usize)) | (((val as u32) & 0x3) << 0usize);
        }
        #[doc = "CCI clock source"]
        #[inline(always)]
        pub const fn cci_clk_sel(&self) -> u8 {
            let val = (self.0 >> 2usize) & 0x3;
            val as u8
        }
        #[doc = "CCI clock source"]
        #[inline(always)]
        pub fn set_cci_clk_sel(&mut self, val: u8) {
            self.0 = (self.0 & !(0x3 << 2usize)) | (((val as u32) & 0x3) << 2usize);
        }
    }
    impl Default for ClkConfigReg4 {
        #[inline(always)]
        fn default() -> ClkConfigReg4 {
            ClkConfigReg4(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct ClkConfigReg5(pub u32);
    impl ClkConfigReg5 {
        #[doc = "M4 SoC clock source"]
        #[inline(always)]
        pub const fn m4_soc_clk_sel(&self) -> u8 {
            let val = (self.0 >> 0usize) & 0xf;
            val as u8
        }
        #[doc = "M4 SoC clock source"]
        #[inline(always)]
        pub fn set_m4_soc_clk_sel(&mut self, val: u8) {
            self.0 = (self.0 & !(0xf << 0usize)) | (((val as u32) & 0xf) << 0usize);
        }
        #[doc = "M4 SoC clock divider"]
        #[inline(always)]
        pub const fn m4_soc_clk_div_fac(&self) -> u8 {
            let val = (self.0 >> 4usize) & 0x3f;
            val as u8
        }
        #[doc = "M4 SoC clock divider"]
        #[inline(always)]
        pub fn set_m4_soc_clk_div_fac(&mut self, val: u8) {
            self.0 = (self.0 & !(0x3f << 4usize)) | (((val as u32) & 0x3f) << 4usize);
        }
        #[doc = "Configurable timer clock source"]
        #[inline(always)]
        pub const fn ct_clk_sel(&self) -> u8 {
            let val = (self.0 >> 10usize) & 0x7;
            val as u8
        }
        #[doc = "Configurable timer clock source"]
        #[inline(always)]
        pub fn set_ct_clk_sel(&mut self, val: u8) {
            self.0 = (self.0 & !(0x7 << 10usize)) | (((val as u32) & 0x7) << 10usize);
        }
        #[doc = "Configurable timer clock divider"]
        #[inline(always)]
        pub const fn ct_clk_div_fac(&self) -> u8 {
            let val = (self.0 >> 13usize) & 0x3f;
            val as u8
        }
        #[doc = "Configurable timer clock divider"]
        #[inline(always)]
        pub fn set_ct_clk_div_fac(&mut self, val: u8) {
            self.0 = (self.0 & !(0x3f << 13usize)) | (((val as u32) & 0x3f) << 13usize);
        }
        #[doc = "I2S clock source, 0 is the I2S PLL"]
        #[inline(always)]
        pub const fn i2s_clk_sel(&self) -> bool {
            let val = (self.0 >> 19usize) & 0x1;
            val != 0
        }
        #[doc = "I2S clock source, 0 is the I2S PLL"]
        #[inline(always)]
        pub fn set_i2s_clk_sel(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 19usize)) | (((val as u32) & 0x1) << 19usize);
        }
        #[doc = "I2S clock divider"]
        #[inline(always)]
        pub const fn i2s_clk_div_fac(&self) -> u8 {
            let val = (self.0 >> 20usize) & 0x3f;
            val as u8
        }
        #[doc = "I2S clock divider"]
        #[inline(always)]
        pub fn set_i2s_clk_div_fac(&mut self, val: u8) {
            self.0 = (self.0 & !(0x3f << 20usize)) | (((val as u32) & 0x3f) << 20usize);
        }
        #[doc = "USB clock source"]
        #[inline(always)]
        pub const fn usb_clk_sel(&self) -> u8 {
            let val = (self.0 >> 26usize) & 0x3;
            val as u8
        }
        #[doc = "USB clock source"]
        #[inline(always)]
        pub fn set_usb_clk_sel(&mut self, val: u8) {
            self.0 = (self.0 & !(0x3 << 26usize)) | (((val as u32) & 0x3) << 26usize);
        }
    }
    impl Default for ClkConfigReg5 {
        #[inline(always)]
        fn default() -> ClkConfigReg5 {
            ClkConfigReg5(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct ClkConfigReg6(pub u32);
    impl ClkConfigReg6 {
        #[doc = "QSPI2 clock source"]
        #[inline(always)]
        pub const fn qspi_2_clk_sel(&self) -> u8 {
            let val = (self.0 >> 0usize) & 0x7;
            val as u8
        }
        #[doc = "QSPI2 clock source"]
        #[inline(always)]
        pub fn set_qspi_2_clk_sel(&mut self, val: u8) {
            self.0 = (self.0 & !(0x7 << 0usize)) | (((val as u32) & 0x7) << 0usize);
        }
        #[doc = "QSPI2 clock divider"]
        #[inline(always)]
        pub const fn qspi_2_clk_div_fac(&self) -> u8 {
            let val = (self.0 >> 3usize) & 0x3f;
            val as u8
        }
        #[doc = "QSPI2 clock divider"]
        #[inline(always)]
        pub fn set_qspi_2_clk_div_fac(&mut self, val: u8) {
            self.0 = (self.0 & !(0x3f << 3usize)) | (((val as u32) & 0x3f) << 3usize);
        }
        #[doc = "QSPI2 swallow divider enable"]
        #[inline(always)]
        pub const fn qspi_2_clk_swallow_sel(&self) -> bool {
            let val = (self.0 >> 9usize) & 0x1;
            val != 0
        }
        #[doc = "QSPI2 swallow divider enable"]
        #[inline(always)]
        pub fn set_qspi_2_clk_swallow_sel(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 9usize)) | (((val as u32) & 0x1) << 9usize);
        }
        #[doc = "QSPI2 odd divider enable"]
        #[inline(always)]
        pub const fn qspi_2_odd_div_sel(&self) -> bool {
            let val = (self.0 >> 10usize) & 0x1;
            val != 0
        }
        #[doc = "QSPI2 odd divider enable"]
        #[inline(always)]
        pub fn set_qspi_2_odd_div_sel(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 10usize)) | (((val as u32) & 0x1) << 10usize);
        }
        #[doc = "USB PHY clock divider"]
        #[inline(always)]
        pub const fn usb_phy_clk_div_fac(&self) -> u8 {
            let val = (self.0 >> 11usize) & 0x3;
            val as u8
        }
        #[doc = "USB PHY clock divider"]
        #[inline(always)]
        pub fn set_usb_phy_clk_div_fac(&mut self, val: u8) {
            self.0 = (self.0 & !(0x3 << 11usize)) | (((val as u32) & 0x3) << 11usize);
        }
    }
    impl Default for ClkConfigReg6 {
        #[inline(always)]
        fn default() -> ClkConfigReg6 {
            ClkConfigReg6(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct PllStatReg(pub u32);
    impl PllStatReg {
        #[doc = "I2S PLL locked"]
        #[inline(always)]
        pub const fn i2spll_lock(&self) -> bool {
            let val = (self.0 >> 0usize) & 0x1;
            val != 0
        }
        #[doc = "I2S PLL locked"]
        #[inline(always)]
        pub fn set_i2spll_lock(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 0usize)) | (((val as u32) & 0x1) << 0usize);
        }
        #[doc = "Modem PLL locked"]
        #[inline(always)]
        pub const fn modempll_lock(&self) -> bool {
            let val = (self.0 >> 1usize) & 0x1;
            val != 0
        }
        #[doc = "Modem PLL locked"]
        #[inline(always)]
        pub fn set_modempll_lock(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 1usize)) | (((val as u32) & 0x1) << 1usize);
        }
        #[doc = "Interface PLL locked"]
        #[inline(always)]
        pub const fn intfpll_lock(&self) -> bool {
            let val = (self.0 >> 3usize) & 0x1;
            val != 0
        }
        #[doc = "Interface PLL locked"]
        #[inline(always)]
        pub fn set_intfpll_lock(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 3usize)) | (((val as u32) & 0x1) << 3usize);
        }
        #[doc = "SoC PLL locked"]
        #[inline(always)]
        pub const fn socpll_lock(&self) -> bool {
            let val = (self.0 >> 4usize) & 0x1;
            val != 0
        }
        #[doc = "SoC PLL locked"]
        #[inline(always)]
        pub fn set_socpll_lock(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 4usize)) | (((val as u32) & 0x1) << 4usize);
        }
        #[inline(always)]
        pub const fn usart1_sclk_switched(&self) -> bool {
            let val = (self.0 >> 5usize) & 0x1;
            val != 0
        }
        #[inline(always)]
        pub fn set_usart1_sclk_switched(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 5usize)) | (((val as u32) & 0x1) << 5usize);
        }
        #[inline(always)]
        pub const fn usart2_sclk_switched(&self) -> bool {
            let val = (self.0 >> 6usize) & 0x1;
            val != 0
        }
        #[inline(always)]
        pub fn set_usart2_sclk_switched(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 6usize)) | (((val as u32) & 0x1) << 6usize);
        }
        #[inline(always)]
        pub const fn pll_intf_clk_switched(&self) -> bool {
            let val = (self.0 >> 7usize) & 0x1;
            val != 0
        }
        #[inline(always)]
        pub fn set_pll_intf_clk_switched(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 7usize)) | (((val as u32) & 0x1) << 7usize);
        }
        #[inline(always)]
        pub const fn sleep_clk_switched(&self) -> bool {
            let val = (self.0 >> 8usize) & 0x1;
            val != 0
        }
        #[inline(always)]
        pub fn set_sleep_clk_switched(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 8usize)) | (((val as u32) & 0x1) << 8usize);
        }
        #[inline(always)]
        pub const fn m4_soc_clk_switched(&self) -> bool {
            let val = (self.0 >> 9usize) & 0x1;
            val != 0
        }
        #[inline(always)]
        pub fn set_m4_soc_clk_switched(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 9usize)) | (((val as u32) & 0x1) << 9usize);
        }
        #[inline(always)]
        pub const fn qspi_clk_switched(&self) -> bool {
            let val = (self.0 >> 10usize) & 0x1;
            val != 0
        }
        #[inline(always)]
        pub fn set_qspi_clk_switched(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 10usize)) | (((val as u32) & 0x1) << 10usize);
        }
        #[inline(always)]
        pub const fn ssi_mst_sclk_switched(&self) -> bool {
            let val = (self.0 >> 11usize) & 0x1;
            val != 0
        }
        #[inline(always)]
        pub fn set_ssi_mst_sclk_switched(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 11usize)) | (((val as u32) & 0x1) << 11usize);
        }
        #[inline(always)]
        pub const fn ct_clk_switched(&self) -> bool {
            let val = (self.0 >> 12usize) & 0x1;
            val != 0
        }
        #[inline(always)]
        pub fn set_ct_clk_switched(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 12usize)) | (((val as u32) & 0x1) << 12usize);
        }
        #[inline(always)]
        pub const fn sd_mem_intf_clk_switched(&self) -> bool {
            let val = (self.0 >> 13usize) & 0x1;
            val != 0
        }
        #[inline(always)]
        pub fn set_sd_mem_intf_clk_switched(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 13usize)) | (((val as u32) & 0x1) << 13usize);
        }
        #[inline(always)]
        pub const fn i2s_clk_switched(&self) -> bool {
            let val = (self.0 >> 14usize) & 0x1;
            val != 0
        }
        #[inline(always)]
        pub fn set_i2s_clk_switched(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 14usize)) | (((val as u32) & 0x1) << 14usize);
        }
        #[inline(always)]
        pub const fn cci_clk_switched(&self) -> bool {
            let val = (self.0 >> 15usize) & 0x1;
            val != 0
        }
        #[inline(always)]
        pub fn set_cci_clk_switched(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 15usize)) | (((val as u32) & 0x1) << 15usize);
        }
        #[inline(always)]
        pub const fn mcu_clkout_switched(&self) -> bool {
            let val = (self.0 >> 16usize) & 0x1;
            val != 0
        }
        #[inline(always)]
        pub fn set_mcu_clkout_switched(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 16usize)) | (((val as u32) & 0x1) << 16usize);
        }
        #[inline(always)]
        pub const fn gen_spi_mst1_sclk_switched(&self) -> bool {
            let val = (self.0 >> 17usize) & 0x1;
            val != 0
        }
        #[inline(always)]
        pub fn set_gen_spi_mst1_sclk_switched(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 17usize)) | (((val as u32) & 0x1) << 17usize);
        }
        #[inline(always)]
        pub const fn qspi_2_clk_switched(&self) -> bool {
            let val = (self.0 >> 18usize) & 0x1;
            val != 0
        }
        #[inline(always)]
        pub fn set_qspi_2_clk_switched(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 18usize)) | (((val as u32) & 0x1) << 18usize);
        }
        #[doc = "M4 reference clock mux switched"]
        #[inline(always)]
        pub const fn ulp_ref_clk_switched(&self) -> bool {
            let val = (self.0 >> 19usize) & 0x1;
            val != 0
        }
        #[doc = "M4 reference clock mux switched"]
        #[inline(always)]
        pub fn set_ulp_ref_clk_switched(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 19usize)) | (((val as u32) & 0x1) << 19usize);
        }
    }
    impl Default for PllStatReg {
        #[inline(always)]
        fn default() -> PllStatReg {
            PllStatReg(0)
        }
    }
}
