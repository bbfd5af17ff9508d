//! Miscellaneous configuration and instruction cache control
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::identity_op)]
#![allow(clippy::unnecessary_cast)]
#![allow(clippy::erasing_op)]

use super::common;

#[doc = "MCU miscellaneous configuration"]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Misc {
    ptr: *mut u8,
}
unsafe impl Send for Misc {}
unsafe impl Sync for Misc {}
impl Misc {
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }
    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }
    #[doc = "AHB bridge control"]
    #[inline(always)]
    pub const fn sram_redundancy_ctrl(self) -> common::Reg<regs::SramRedundancyCtrl, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x18usize) as _) }
    }
    #[doc = "MCU generic control 1"]
    #[inline(always)]
    pub const fn misc_ctrl1(self) -> common::Reg<regs::MiscCtrl1, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x44usize) as _) }
    }
}
#[doc = "Instruction cache"]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Icache {
    ptr: *mut u8,
}
unsafe impl Send for Icache {}
unsafe impl Sync for Icache {}
impl Icache {
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }
    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }
    #[doc = "Address translation and registering control"]
    #[inline(always)]
    pub const fn addr_translate_1(self) -> common::Reg<regs::AddrTranslate1, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x24usize) as _) }
    }
}
pub mod regs {
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct SramRedundancyCtrl(pub u32);
    impl SramRedundancyCtrl {
        #[doc = "Register the M4 to NWP AHB bridge above 100 MHz"]
        #[inline(always)]
        pub const fn ahb2ahb_registering(&self) -> bool {
            let val = (self.0 >> 4usize) & 0x1;
            val != 0
        }
        #[doc = "Register the M4 to NWP AHB bridge above 100 MHz"]
        #[inline(always)]
        pub fn set_ahb2ahb_registering(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 4usize)) | (((val as u32) & 0x1) << 4usize);
        }
    }
    impl Default for SramRedundancyCtrl {
        #[inline(always)]
        fn default() -> SramRedundancyCtrl {
            SramRedundancyCtrl(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct MiscCtrl1(pub u32);
    impl MiscCtrl1 {
        #[doc = "Register ROM accesses above 120 MHz"]
        #[inline(always)]
        pub const fn register_rom(&self) -> bool {
            let val = (self.0 >> 4usize) & 0x1;
            val != 0
        }
        #[doc = "Register ROM accesses above 120 MHz"]
        #[inline(always)]
        pub fn set_register_rom(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 4usize)) | (((val as u32) & 0x1) << 4usize);
        }
        #[doc = "Hand host pads GPIO25 to GPIO30 to the M4"]
        #[inline(always)]
        pub const fn host_pads_gpio_mode(&self) -> u8 {
            let val = (self.0 >> 13usize) & 0x3f;
            val as u8
        }
        #[doc = "Hand host pads GPIO25 to GPIO30 to the M4"]
        #[inline(always)]
        pub fn set_host_pads_gpio_mode(&mut self, val: u8) {
            self.0 = (self.0 & !(0x3f << 13usize)) | (((val as u32) & 0x3f) << 13usize);
        }
        #[doc = "I2S and PCM master mode"]
        #[inline(always)]
        pub const fn i2s_master_mode(&self) -> bool {
            let val = (self.0 >> 23usize) & 0x1;
            val != 0
        }
        #[doc = "I2S and PCM master mode"]
        #[inline(always)]
        pub fn set_i2s_master_mode(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 23usize)) | (((val as u32) & 0x1) << 23usize);
        }
    }
    impl Default for MiscCtrl1 {
        #[inline(always)]
        fn default() -> MiscCtrl1 {
            MiscCtrl1(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct AddrTranslate1(pub u32);
    impl AddrTranslate1 {
        #[doc = "Register cache accesses above 120 MHz"]
        #[inline(always)]
        pub const fn registering(&self) -> bool {
            let val = (self.0 >> 21usize) & 0x1;
            val != 0
        }
        #[doc = "Register cache accesses above 120 MHz"]
        #[inline(always)]
        pub fn set_registering(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 21usize)) | (((val as u32) & 0x1) << 21usize);
        }
    }
    impl Default for AddrTranslate1 {
        #[inline(always)]
        fn default() -> AddrTranslate1 {
            AddrTranslate1(0)
        }
    }
}
