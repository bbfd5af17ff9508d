//! Cortex-M system timer
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::identity_op)]
#![allow(clippy::unnecessary_cast)]
#![allow(clippy::erasing_op)]

use super::common;

#[doc = "Cortex-M system timer"]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Systick {
    ptr: *mut u8,
}
unsafe impl Send for Systick {}
unsafe impl Sync for Systick {}
impl Systick {
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }
    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }
    #[doc = "Control and status"]
    #[inline(always)]
    pub const fn csr(self) -> common::Reg<regs::Csr, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x0usize) as _) }
    }
    #[doc = "Reload value"]
    #[inline(always)]
    pub const fn rvr(self) -> common::Reg<regs::Value24, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x4usize) as _) }
    }
    #[doc = "Current value"]
    #[inline(always)]
    pub const fn cvr(self) -> common::Reg<regs::Value24, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x8usize) as _) }
    }
}
pub mod regs {
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Csr(pub u32);
    impl Csr {
        #[inline(always)]
        pub const fn enable(&self) -> bool {
            let val = (self.0 >> 0usize) & 0x1;
            val != 0
        }
        #[inline(always)]
        pub fn set_enable(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 0usize)) | (((val as u32) & 0x1) << 0usize);
        }
        #[inline(always)]
        pub const fn tickint(&self) -> bool {
            let val = (self.0 >> 1usize) & 0x1;
            val != 0
        }
        #[inline(always)]
        pub fn set_tickint(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 1usize)) | (((val as u32) & 0x1) << 1usize);
        }
        #[doc = "Core clock when set"]
        #[inline(always)]
        pub const fn clksource(&self) -> bool {
            let val = (self.0 >> 2usize) & 0x1;
            val != 0
        }
        #[doc = "Core clock when set"]
        #[inline(always)]
        pub fn set_clksource(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 2usize)) | (((val as u32) & 0x1) << 2usize);
        }
        #[doc = "Counted to zero since last read"]
        #[inline(always)]
        pub const fn countflag(&self) -> bool {
            let val = (self.0 >> 16usize) & 0x1;
            val != 0
        }
        #[doc = "Counted to zero since last read"]
        #[inline(always)]
        pub fn set_countflag(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 16usize)) | (((val as u32) & 0x1) << 16usize);
        }
    }
    impl Default for Csr {
        #[inline(always)]
        fn default() -> Csr {
            Csr(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Value24(pub u32);
    impl Value24 {
        #[inline(always)]
        pub const fn value(&self) -> u32 {
            let val = (self.0 >> 0usize) & 0xffffff;
            val as u32
        }
        #[inline(always)]
        pub fn set_value(&mut self, val: u32) {
            self.0 = (self.0 & !(0xffffff << 0usize)) | (((val as u32) & 0xffffff) << 0usize);
        }
    }
    impl Default for Value24 {
        #[inline(always)]
        fn default() -> Value24 {
            Value24(0)
        }
    }
}
