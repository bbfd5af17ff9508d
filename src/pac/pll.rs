//! PLL SPI register window
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::identity_op)]
#![allow(clippy::unnecessary_cast)]
#![allow(clippy::erasing_op)]

use super::common;

#[doc = "PLL control window. 16 bit registers, one per 32 bit slot."]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Pll {
    ptr: *mut u8,
}
unsafe impl Send for Pll {}
unsafe impl Sync for Pll {}
impl Pll {
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }
    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }
    #[doc = "SOCPLLMACROREG2: shared reference clock select"]
    #[inline(always)]
    pub const fn macro_reg2(self) -> common::Reg<regs::MacroReg2, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x4usize) as _) }
    }
    #[doc = "SOCPLLMACROREG3: per PLL LDO programming. Reads back shifted right by one."]
    #[inline(always)]
    pub const fn macro_reg3(self) -> common::Reg<regs::MacroReg3, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x8usize) as _) }
    }
    #[doc = "SoC PLL control registers"]
    #[inline(always)]
    pub const fn soc(self) -> Pll500 {
        unsafe { Pll500::from_ptr(self.ptr.add(0x40usize) as _) }
    }
    #[doc = "Interface PLL control registers"]
    #[inline(always)]
    pub const fn intf(self) -> Pll500 {
        unsafe { Pll500::from_ptr(self.ptr.add(0x80usize) as _) }
    }
    #[doc = "I2S PLL control registers"]
    #[inline(always)]
    pub const fn i2s(self) -> Pll500 {
        unsafe { Pll500::from_ptr(self.ptr.add(0xc0usize) as _) }
    }
}
#[doc = "One PLL_500 instance"]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Pll500 {
    ptr: *mut u8,
}
unsafe impl Send for Pll500 {}
unsafe impl Sync for Pll500 {}
impl Pll500 {
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }
    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }
    #[doc = "Enables, DCO range and M factor"]
    #[inline(always)]
    pub const fn ctrl1(self) -> common::Reg<regs::Ctrl1, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x0usize) as _) }
    }
    #[doc = "N and P factors (SoC and interface PLL layout)"]
    #[inline(always)]
    pub const fn ctrl2(self) -> common::Reg<regs::Ctrl2, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x4usize) as _) }
    }
    #[doc = "N and split P factors (I2S PLL layout)"]
    #[inline(always)]
    pub const fn i2s_ctrl2(self) -> common::Reg<regs::I2sCtrl2, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x4usize) as _) }
    }
    #[doc = "Fractional control word"]
    #[inline(always)]
    pub const fn ctrl3(self) -> common::Reg<regs::Ctrl3, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x8usize) as _) }
    }
    #[doc = "Threshold value latch"]
    #[inline(always)]
    pub const fn ctrl7(self) -> common::Reg<regs::Ctrl7, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x18usize) as _) }
    }
    #[doc = "Lock detector configuration"]
    #[inline(always)]
    pub const fn ctrl9(self) -> common::Reg<regs::Ctrl9, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x20usize) as _) }
    }
    #[doc = "Reset and lock sequencing"]
    #[inline(always)]
    pub const fn ctrl11(self) -> common::Reg<regs::Ctrl11, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x28usize) as _) }
    }
    #[doc = "Threshold value readback"]
    #[inline(always)]
    pub const fn ctrl12(self) -> common::Reg<regs::Ctrl12, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x2cusize) as _) }
    }
    #[doc = "Lock flags"]
    #[inline(always)]
    pub const fn ctrl13(self) -> common::Reg<regs::Ctrl13, common::R> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x30usize) as _) }
    }
}
pub mod regs {
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct MacroReg2(pub u16);
    impl MacroReg2 {
        #[doc = "Reference clock select. 0 is XTAL."]
        #[inline(always)]
        pub const fn ref_clk_sel(&self) -> u8 {
            let val = (self.0 >> 14usize) & 0x3;
            val as u8
        }
        #[doc = "Reference clock select. 0 is XTAL."]
        #[inline(always)]
        pub fn set_ref_clk_sel(&mut self, val: u8) {
            self.0 = (self.0 & !(0x3 << 14usize)) | (((val as u16) & 0x3) << 14usize);
        }
    }
    impl Default for MacroReg2 {
        #[inline(always)]
        fn default() -> MacroReg2 {
            MacroReg2(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct MacroReg3(pub u16);
    impl MacroReg3 {
        #[doc = "I2S PLL LDO level"]
        #[inline(always)]
        pub const fn i2s_ldo_prog(&self) -> u8 {
            let val = (self.0 >> 7usize) & 0x7;
            val as u8
        }
        #[doc = "I2S PLL LDO level"]
        #[inline(always)]
        pub fn set_i2s_ldo_prog(&mut self, val: u8) {
            self.0 = (self.0 & !(0x7 << 7usize)) | (((val as u16) & 0x7) << 7usize);
        }
        #[doc = "Interface PLL LDO level"]
        #[inline(always)]
        pub const fn intf_ldo_prog(&self) -> u8 {
            let val = (self.0 >> 10usize) & 0x7;
            val as u8
        }
        #[doc = "Interface PLL LDO level"]
        #[inline(always)]
        pub fn set_intf_ldo_prog(&mut self, val: u8) {
            self.0 = (self.0 & !(0x7 << 10usize)) | (((val as u16) & 0x7) << 10usize);
        }
        #[doc = "SoC PLL LDO level"]
        #[inline(always)]
        pub const fn soc_ldo_prog(&self) -> u8 {
            let val = (self.0 >> 13usize) & 0x7;
            val as u8
        }
        #[doc = "SoC PLL LDO level"]
        #[inline(always)]
        pub fn set_soc_ldo_prog(&mut self, val: u8) {
            self.0 = (self.0 & !(0x7 << 13usize)) | (((val as u16) & 0x7) << 13usize);
        }
    }
    impl Default for MacroReg3 {
        #[inline(always)]
        fn default() -> MacroReg3 {
            MacroReg3(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Ctrl1(pub u16);
    impl Ctrl1 {
        #[doc = "DCO range select"]
        #[inline(always)]
        pub const fn dco_fix_sel(&self) -> u8 {
            let val = (self.0 >> 0usize) & 0x3;
            val as u8
        }
        #[doc = "DCO range select"]
        #[inline(always)]
        pub fn set_dco_fix_sel(&mut self, val: u8) {
            self.0 = (self.0 & !(0x3 << 0usize)) | (((val as u16) & 0x3) << 0usize);
        }
        #[doc = "Bypass the PLL"]
        #[inline(always)]
        pub const fn bypass(&self) -> bool {
            let val = (self.0 >> 2usize) & 0x1;
            val != 0
        }
        #[doc = "Bypass the PLL"]
        #[inline(always)]
        pub fn set_bypass(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 2usize)) | (((val as u16) & 0x1) << 2usize);
        }
        #[doc = "Output clock enable"]
        #[inline(always)]
        pub const fn clk_en(&self) -> bool {
            let val = (self.0 >> 3usize) & 0x1;
            val != 0
        }
        #[doc = "Output clock enable"]
        #[inline(always)]
        pub fn set_clk_en(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 3usize)) | (((val as u16) & 0x1) << 3usize);
        }
        #[doc = "Power down"]
        #[inline(always)]
        pub const fn pd(&self) -> bool {
            let val = (self.0 >> 4usize) & 0x1;
            val != 0
        }
        #[doc = "Power down"]
        #[inline(always)]
        pub fn set_pd(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 4usize)) | (((val as u16) & 0x1) << 4usize);
        }
        #[doc = "Reset"]
        #[inline(always)]
        pub const fn rst(&self) -> bool {
            let val = (self.0 >> 5usize) & 0x1;
            val != 0
        }
        #[doc = "Reset"]
        #[inline(always)]
        pub fn set_rst(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 5usize)) | (((val as u16) & 0x1) << 5usize);
        }
        #[doc = "Feedback multiplier"]
        #[inline(always)]
        pub const fn m(&self) -> u16 {
            let val = (self.0 >> 6usize) & 0x3ff;
            val as u16
        }
        #[doc = "Feedback multiplier"]
        #[inline(always)]
        pub fn set_m(&mut self, val: u16) {
            self.0 = (self.0 & !(0x3ff << 6usize)) | (((val as u16) & 0x3ff) << 6usize);
        }
    }
    impl Default for Ctrl1 {
        #[inline(always)]
        fn default() -> Ctrl1 {
            Ctrl1(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Ctrl2(pub u16);
    impl Ctrl2 {
        #[doc = "Reference divider"]
        #[inline(always)]
        pub const fn n(&self) -> u8 {
            let val = (self.0 >> 3usize) & 0x3f;
            val as u8
        }
        #[doc = "Reference divider"]
        #[inline(always)]
        pub fn set_n(&mut self, val: u8) {
            self.0 = (self.0 & !(0x3f << 3usize)) | (((val as u16) & 0x3f) << 3usize);
        }
        #[doc = "Post divider"]
        #[inline(always)]
        pub const fn p(&self) -> u8 {
            let val = (self.0 >> 9usize) & 0x7f;
            val as u8
        }
        #[doc = "Post divider"]
        #[inline(always)]
        pub fn set_p(&mut self, val: u8) {
            self.0 = (self.0 & !(0x7f << 9usize)) | (((val as u16) & 0x7f) << 9usize);
        }
    }
    impl Default for Ctrl2 {
        #[inline(always)]
        fn default() -> Ctrl2 {
            Ctrl2(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct I2sCtrl2(pub u16);
    impl I2sCtrl2 {
        #[doc = "Reference divider"]
        #[inline(always)]
        pub const fn n(&self) -> u8 {
            let val = (self.0 >> 1usize) & 0x7f;
            val as u8
        }
        #[doc = "Reference divider"]
        #[inline(always)]
        pub fn set_n(&mut self, val: u8) {
            self.0 = (self.0 & !(0x7f << 1usize)) | (((val as u16) & 0x7f) << 1usize);
        }
        #[doc = "Post divider, power of two stage"]
        #[inline(always)]
        pub const fn p_div2(&self) -> u8 {
            let val = (self.0 >> 8usize) & 0x7;
            val as u8
        }
        #[doc = "Post divider, power of two stage"]
        #[inline(always)]
        pub fn set_p_div2(&mut self, val: u8) {
            self.0 = (self.0 & !(0x7 << 8usize)) | (((val as u16) & 0x7) << 8usize);
        }
        #[doc = "Post divider, linear stage"]
        #[inline(always)]
        pub const fn p_div1(&self) -> u8 {
            let val = (self.0 >> 11usize) & 0x1f;
            val as u8
        }
        #[doc = "Post divider, linear stage"]
        #[inline(always)]
        pub fn set_p_div1(&mut self, val: u8) {
            self.0 = (self.0 & !(0x1f << 11usize)) | (((val as u16) & 0x1f) << 11usize);
        }
    }
    impl Default for I2sCtrl2 {
        #[inline(always)]
        fn default() -> I2sCtrl2 {
            I2sCtrl2(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Ctrl3(pub u16);
    impl Ctrl3 {
        #[doc = "Fractional part of the frequency control word"]
        #[inline(always)]
        pub const fn fcw_f(&self) -> u16 {
            let val = (self.0 >> 2usize) & 0x3fff;
            val as u16
        }
        #[doc = "Fractional part of the frequency control word"]
        #[inline(always)]
        pub fn set_fcw_f(&mut self, val: u16) {
            self.0 = (self.0 & !(0x3fff << 2usize)) | (((val as u16) & 0x3fff) << 2usize);
        }
    }
    impl Default for Ctrl3 {
        #[inline(always)]
        fn default() -> Ctrl3 {
            Ctrl3(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Ctrl7(pub u16);
    impl Ctrl7 {
        #[doc = "Pulse to latch the threshold value"]
        #[inline(always)]
        pub const fn spi_inp_rd_en(&self) -> bool {
            let val = (self.0 >> 4usize) & 0x1;
            val != 0
        }
        #[doc = "Pulse to latch the threshold value"]
        #[inline(always)]
        pub fn set_spi_inp_rd_en(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 4usize)) | (((val as u16) & 0x1) << 4usize);
        }
    }
    impl Default for Ctrl7 {
        #[inline(always)]
        fn default() -> Ctrl7 {
            Ctrl7(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Ctrl9(pub u16);
    impl Ctrl9 {
        #[doc = "Lock detector count limit"]
        #[inline(always)]
        pub const fn mm_count(&self) -> u8 {
            let val = (self.0 >> 6usize) & 0xff;
            val as u8
        }
        #[doc = "Lock detector count limit"]
        #[inline(always)]
        pub fn set_mm_count(&mut self, val: u8) {
            self.0 = (self.0 & !(0xff << 6usize)) | (((val as u16) & 0xff) << 6usize);
        }
        #[doc = "Bypass the manual lock"]
        #[inline(always)]
        pub const fn bypass_lock(&self) -> bool {
            let val = (self.0 >> 14usize) & 0x1;
            val != 0
        }
        #[doc = "Bypass the manual lock"]
        #[inline(always)]
        pub fn set_bypass_lock(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 14usize)) | (((val as u16) & 0x1) << 14usize);
        }
        #[doc = "Manual lock enable"]
        #[inline(always)]
        pub const fn manual_lock(&self) -> bool {
            let val = (self.0 >> 15usize) & 0x1;
            val != 0
        }
        #[doc = "Manual lock enable"]
        #[inline(always)]
        pub fn set_manual_lock(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 15usize)) | (((val as u16) & 0x1) << 15usize);
        }
    }
    impl Default for Ctrl9 {
        #[inline(always)]
        fn default() -> Ctrl9 {
            Ctrl9(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Ctrl11(pub u16);
    impl Ctrl11 {
    }
    impl Default for Ctrl11 {
        #[inline(always)]
        fn default() -> Ctrl11 {
            Ctrl11(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Ctrl12(pub u16);
    impl Ctrl12 {
        #[doc = "Threshold value"]
        #[inline(always)]
        pub const fn tv(&self) -> u8 {
            let val = (self.0 >> 11usize) & 0x1f;
            val as u8
        }
        #[doc = "Threshold value"]
        #[inline(always)]
        pub fn set_tv(&mut self, val: u8) {
            self.0 = (self.0 & !(0x1f << 11usize)) | (((val as u16) & 0x1f) << 11usize);
        }
    }
    impl Default for Ctrl12 {
        #[inline(always)]
        fn default() -> Ctrl12 {
            Ctrl12(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Ctrl13(pub u16);
    impl Ctrl13 {
        #[doc = "Phase lock flag"]
        #[inline(always)]
        pub const fn lock_phase(&self) -> bool {
            let val = (self.0 >> 14usize) & 0x1;
            val != 0
        }
        #[doc = "Phase lock flag"]
        #[inline(always)]
        pub fn set_lock_phase(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 14usize)) | (((val as u16) & 0x1) << 14usize);
        }
        #[doc = "Frequency lock flag"]
        #[inline(always)]
        pub const fn lock_freq(&self) -> bool {
            let val = (self.0 >> 15usize) & 0x1;
            val != 0
        }
        #[doc = "Frequency lock flag"]
        #[inline(always)]
        pub fn set_lock_freq(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 15usize)) | (((val as u16) & 0x1) << 15usize);
        }
    }
    impl Default for Ctrl13 {
        #[inline(always)]
        fn default() -> Ctrl13 {
            Ctrl13(0)
        }
    }
}
