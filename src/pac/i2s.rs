//! I2S and PCM controller
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::identity_op)]
#![allow(clippy::unnecessary_cast)]
#![allow(clippy::erasing_op)]

use super::common;

#[doc = "I2S and PCM controller"]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct I2s {
    ptr: *mut u8,
}
unsafe impl Send for I2s {}
unsafe impl Sync for I2s {}
impl I2s {
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }
    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }
    #[doc = "Global enable"]
    #[inline(always)]
    pub const fn ier(self) -> common::Reg<regs::Enable, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x0usize) as _) }
    }
    #[doc = "Receiver block enable"]
    #[inline(always)]
    pub const fn irer(self) -> common::Reg<regs::Enable, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x4usize) as _) }
    }
    #[doc = "Transmitter block enable"]
    #[inline(always)]
    pub const fn iter(self) -> common::Reg<regs::Enable, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x8usize) as _) }
    }
    #[doc = "Clock enable"]
    #[inline(always)]
    pub const fn cer(self) -> common::Reg<regs::Enable, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0xcusize) as _) }
    }
    #[doc = "Clock configuration"]
    #[inline(always)]
    pub const fn ccr(self) -> common::Reg<regs::Ccr, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x10usize) as _) }
    }
    #[doc = "Receiver block FIFO reset"]
    #[inline(always)]
    pub const fn rxffr(self) -> common::Reg<regs::Enable, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x14usize) as _) }
    }
    #[doc = "Transmitter block FIFO reset"]
    #[inline(always)]
    pub const fn txffr(self) -> common::Reg<regs::Enable, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x18usize) as _) }
    }
    #[doc = "Channel registers"]
    #[inline(always)]
    pub const fn chx(self, n: usize) -> Channel {
        assert!(n < 2usize);
        unsafe { Channel::from_ptr(self.ptr.add(0x20usize + n * 64usize) as _) }
    }
}
#[doc = "I2S channel"]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Channel {
    ptr: *mut u8,
}
unsafe impl Send for Channel {}
unsafe impl Sync for Channel {}
impl Channel {
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }
    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }
    #[doc = "Left receive buffer and left transmit holding"]
    #[inline(always)]
    pub const fn lrbr_lthr(self) -> common::Reg<regs::Data, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x0usize) as _) }
    }
    #[doc = "Right receive buffer and right transmit holding"]
    #[inline(always)]
    pub const fn rrbr_rthr(self) -> common::Reg<regs::Data, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x4usize) as _) }
    }
    #[doc = "Receive enable"]
    #[inline(always)]
    pub const fn rer(self) -> common::Reg<regs::Enable, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x8usize) as _) }
    }
    #[doc = "Transmit enable"]
    #[inline(always)]
    pub const fn ter(self) -> common::Reg<regs::Enable, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0xcusize) as _) }
    }
    #[doc = "Receive resolution"]
    #[inline(always)]
    pub const fn rcr(self) -> common::Reg<regs::Wlen, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x10usize) as _) }
    }
    #[doc = "Transmit resolution"]
    #[inline(always)]
    pub const fn tcr(self) -> common::Reg<regs::Wlen, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x14usize) as _) }
    }
    #[doc = "Interrupt status"]
    #[inline(always)]
    pub const fn isr(self) -> common::Reg<regs::Isr, common::R> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x18usize) as _) }
    }
    #[doc = "Interrupt mask"]
    #[inline(always)]
    pub const fn imr(self) -> common::Reg<regs::Isr, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x1cusize) as _) }
    }
    #[doc = "Receive overrun clear"]
    #[inline(always)]
    pub const fn ror(self) -> common::Reg<regs::Data, common::R> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x20usize) as _) }
    }
    #[doc = "Transmit overrun clear"]
    #[inline(always)]
    pub const fn tor(self) -> common::Reg<regs::Data, common::R> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x24usize) as _) }
    }
    #[doc = "Receive FIFO trigger level"]
    #[inline(always)]
    pub const fn rfcr(self) -> common::Reg<regs::Fcr, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x28usize) as _) }
    }
    #[doc = "Transmit FIFO trigger level"]
    #[inline(always)]
    pub const fn tfcr(self) -> common::Reg<regs::Fcr, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x2cusize) as _) }
    }
    #[doc = "Receive FIFO flush"]
    #[inline(always)]
    pub const fn rff(self) -> common::Reg<regs::Enable, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x30usize) as _) }
    }
    #[doc = "Transmit FIFO flush"]
    #[inline(always)]
    pub const fn tff(self) -> common::Reg<regs::Enable, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x34usize) as _) }
    }
}
pub mod regs {
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Enable(pub u32);
    impl Enable {
        #[inline(always)]
        pub const fn en(&self) -> bool {
            let val = (self.0 >> 0usize) & 0x1;
            val != 0
        }
        #[inline(always)]
        pub fn set_en(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 0usize)) | (((val as u32) & 0x1) << 0usize);
        }
    }
    impl Default for Enable {
        #[inline(always)]
        fn default() -> Enable {
            Enable(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Ccr(pub u32);
    impl Ccr {
        #[doc = "Clock gating in SCLK cycles"]
        #[inline(always)]
        pub const fn sclkg(&self) -> u8 {
            let val = (self.0 >> 0usize) & 0x7;
            val as u8
        }
        #[doc = "Clock gating in SCLK cycles"]
        #[inline(always)]
        pub fn set_sclkg(&mut self, val: u8) {
            self.0 = (self.0 & !(0x7 << 0usize)) | (((val as u32) & 0x7) << 0usize);
        }
        #[doc = "Word select length in SCLK cycles"]
        #[inline(always)]
        pub const fn wss(&self) -> u8 {
            let val = (self.0 >> 3usize) & 0x3;
            val as u8
        }
        #[doc = "Word select length in SCLK cycles"]
        #[inline(always)]
        pub fn set_wss(&mut self, val: u8) {
            self.0 = (self.0 & !(0x3 << 3usize)) | (((val as u32) & 0x3) << 3usize);
        }
    }
    impl Default for Ccr {
        #[inline(always)]
        fn default() -> Ccr {
            Ccr(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Data(pub u32);
    impl Data {
    }
    impl Default for Data {
        #[inline(always)]
        fn default() -> Data {
            Data(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Wlen(pub u32);
    impl Wlen {
        #[doc = "Data resolution"]
        #[inline(always)]
        pub const fn wlen(&self) -> u8 {
            let val = (self.0 >> 0usize) & 0x7;
            val as u8
        }
        #[doc = "Data resolution"]
        #[inline(always)]
        pub fn set_wlen(&mut self, val: u8) {
            self.0 = (self.0 & !(0x7 << 0usize)) | (((val as u32) & 0x7) << 0usize);
        }
    }
    impl Default for Wlen {
        #[inline(always)]
        fn default() -> Wlen {
            Wlen(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Isr(pub u32);
    impl Isr {
        #[doc = "Receive data available"]
        #[inline(always)]
        pub const fn rxda(&self) -> bool {
            let val = (self.0 >> 0usize) & 0x1;
            val != 0
        }
        #[doc = "Receive data available"]
        #[inline(always)]
        pub fn set_rxda(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 0usize)) | (((val as u32) & 0x1) << 0usize);
        }
        #[doc = "Receive FIFO overrun"]
        #[inline(always)]
        pub const fn rxfo(&self) -> bool {
            let val = (self.0 >> 1usize) & 0x1;
            val != 0
        }
        #[doc = "Receive FIFO overrun"]
        #[inline(always)]
        pub fn set_rxfo(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 1usize)) | (((val as u32) & 0x1) << 1usize);
        }
        #[doc = "Transmit FIFO empty"]
        #[inline(always)]
        pub const fn txfe(&self) -> bool {
            let val = (self.0 >> 4usize) & 0x1;
            val != 0
        }
        #[doc = "Transmit FIFO empty"]
        #[inline(always)]
        pub fn set_txfe(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 4usize)) | (((val as u32) & 0x1) << 4usize);
        }
        #[doc = "Transmit FIFO overrun"]
        #[inline(always)]
        pub const fn txfo(&self) -> bool {
            let val = (self.0 >> 5usize) & 0x1;
            val != 0
        }
        #[doc = "Transmit FIFO overrun"]
        #[inline(always)]
        pub fn set_txfo(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 5usize)) | (((val as u32) & 0x1) << 5usize);
        }
    }
    impl Default for Isr {
        #[inline(always)]
        fn default() -> Isr {
            Isr(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Fcr(pub u32);
    impl Fcr {
        #[inline(always)]
        pub const fn fifo_level(&self) -> u8 {
            let val = (self.0 >> 0usize) & 0xf;
            val as u8
        }
        #[inline(always)]
        pub fn set_fifo_level(&mut self, val: u8) {
            self.0 = (self.0 & !(0xf << 0usize)) | (((val as u32) & 0xf) << 0usize);
        }
    }
    impl Default for Fcr {
        #[inline(always)]
        fn default() -> Fcr {
            Fcr(0)
        }
    }
}
