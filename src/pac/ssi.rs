//! Synchronous serial interface
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::identity_op)]
#![allow(clippy::unnecessary_cast)]
#![allow(clippy::erasing_op)]

use super::common;

#[doc = "Synchronous serial interface"]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Ssi {
    ptr: *mut u8,
}
unsafe impl Send for Ssi {}
unsafe impl Sync for Ssi {}
impl Ssi {
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }
    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }
    #[doc = "Control 0"]
    #[inline(always)]
    pub const fn ctrlr0(self) -> common::Reg<regs::Ctrlr0, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x0usize) as _) }
    }
    #[doc = "Number of data frames for receive only transfers"]
    #[inline(always)]
    pub const fn ctrlr1(self) -> common::Reg<regs::Ctrlr1, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x4usize) as _) }
    }
    #[doc = "Enable"]
    #[inline(always)]
    pub const fn ssienr(self) -> common::Reg<regs::Ssienr, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x8usize) as _) }
    }
    #[doc = "Microwire control"]
    #[inline(always)]
    pub const fn mwcr(self) -> common::Reg<regs::Mwcr, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0xcusize) as _) }
    }
    #[doc = "Slave select"]
    #[inline(always)]
    pub const fn ser(self) -> common::Reg<regs::Ser, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x10usize) as _) }
    }
    #[doc = "Clock divider"]
    #[inline(always)]
    pub const fn baudr(self) -> common::Reg<regs::Baudr, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x14usize) as _) }
    }
    #[doc = "Transmit FIFO threshold"]
    #[inline(always)]
    pub const fn txftlr(self) -> common::Reg<regs::Ftlr, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x18usize) as _) }
    }
    #[doc = "Receive FIFO threshold"]
    #[inline(always)]
    pub const fn rxftlr(self) -> common::Reg<regs::Ftlr, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x1cusize) as _) }
    }
    #[doc = "Transmit FIFO level"]
    #[inline(always)]
    pub const fn txflr(self) -> common::Reg<regs::Ftlr, common::R> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x20usize) as _) }
    }
    #[doc = "Receive FIFO level"]
    #[inline(always)]
    pub const fn rxflr(self) -> common::Reg<regs::Ftlr, common::R> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x24usize) as _) }
    }
    #[doc = "Status"]
    #[inline(always)]
    pub const fn sr(self) -> common::Reg<regs::Sr, common::R> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x28usize) as _) }
    }
    #[doc = "Interrupt mask"]
    #[inline(always)]
    pub const fn imr(self) -> common::Reg<regs::Isr, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x2cusize) as _) }
    }
    #[doc = "Interrupt status"]
    #[inline(always)]
    pub const fn isr(self) -> common::Reg<regs::Isr, common::R> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x30usize) as _) }
    }
    #[doc = "Raw interrupt status"]
    #[inline(always)]
    pub const fn risr(self) -> common::Reg<regs::Isr, common::R> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x34usize) as _) }
    }
    #[doc = "Interrupt clear, read to clear all"]
    #[inline(always)]
    pub const fn icr(self) -> common::Reg<u32, common::R> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x48usize) as _) }
    }
    #[doc = "Data"]
    #[inline(always)]
    pub const fn dr(self) -> common::Reg<regs::Dr, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x60usize) as _) }
    }
}
pub mod regs {
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Ctrlr0(pub u32);
    impl Ctrlr0 {
        #[doc = "Data frame size minus one, up to 16 bits"]
        #[inline(always)]
        pub const fn dfs(&self) -> u8 {
            let val = (self.0 >> 0usize) & 0xf;
            val as u8
        }
        #[doc = "Data frame size minus one, up to 16 bits"]
        #[inline(always)]
        pub fn set_dfs(&mut self, val: u8) {
            self.0 = (self.0 & !(0xf << 0usize)) | (((val as u32) & 0xf) << 0usize);
        }
        #[doc = "Frame format"]
        #[inline(always)]
        pub const fn frf(&self) -> u8 {
            let val = (self.0 >> 4usize) & 0x3;
            val as u8
        }
        #[doc = "Frame format"]
        #[inline(always)]
        pub fn set_frf(&mut self, val: u8) {
            self.0 = (self.0 & !(0x3 << 4usize)) | (((val as u32) & 0x3) << 4usize);
        }
        #[doc = "Clock phase"]
        #[inline(always)]
        pub const fn scph(&self) -> bool {
            let val = (self.0 >> 6usize) & 0x1;
            val != 0
        }
        #[doc = "Clock phase"]
        #[inline(always)]
        pub fn set_scph(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 6usize)) | (((val as u32) & 0x1) << 6usize);
        }
        #[doc = "Clock polarity"]
        #[inline(always)]
        pub const fn scpol(&self) -> bool {
            let val = (self.0 >> 7usize) & 0x1;
            val != 0
        }
        #[doc = "Clock polarity"]
        #[inline(always)]
        pub fn set_scpol(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 7usize)) | (((val as u32) & 0x1) << 7usize);
        }
        #[doc = "Transfer mode"]
        #[inline(always)]
        pub const fn tmod(&self) -> u8 {
            let val = (self.0 >> 8usize) & 0x3;
            val as u8
        }
        #[doc = "Transfer mode"]
        #[inline(always)]
        pub fn set_tmod(&mut self, val: u8) {
            self.0 = (self.0 & !(0x3 << 8usize)) | (((val as u32) & 0x3) << 8usize);
        }
        #[doc = "Slave output disable"]
        #[inline(always)]
        pub const fn slv_oe(&self) -> bool {
            let val = (self.0 >> 10usize) & 0x1;
            val != 0
        }
        #[doc = "Slave output disable"]
        #[inline(always)]
        pub fn set_slv_oe(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 10usize)) | (((val as u32) & 0x1) << 10usize);
        }
        #[doc = "Loopback"]
        #[inline(always)]
        pub const fn srl(&self) -> bool {
            let val = (self.0 >> 11usize) & 0x1;
            val != 0
        }
        #[doc = "Loopback"]
        #[inline(always)]
        pub fn set_srl(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 11usize)) | (((val as u32) & 0x1) << 11usize);
        }
        #[doc = "Microwire control frame size"]
        #[inline(always)]
        pub const fn cfs(&self) -> u8 {
            let val = (self.0 >> 12usize) & 0xf;
            val as u8
        }
        #[doc = "Microwire control frame size"]
        #[inline(always)]
        pub fn set_cfs(&mut self, val: u8) {
            self.0 = (self.0 & !(0xf << 12usize)) | (((val as u32) & 0xf) << 12usize);
        }
        #[doc = "Data frame size minus one, up to 32 bits"]
        #[inline(always)]
        pub const fn dfs_32(&self) -> u8 {
            let val = (self.0 >> 16usize) & 0x1f;
            val as u8
        }
        #[doc = "Data frame size minus one, up to 32 bits"]
        #[inline(always)]
        pub fn set_dfs_32(&mut self, val: u8) {
            self.0 = (self.0 & !(0x1f << 16usize)) | (((val as u32) & 0x1f) << 16usize);
        }
    }
    impl Default for Ctrlr0 {
        #[inline(always)]
        fn default() -> Ctrlr0 {
            Ctrlr0(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Ctrlr1(pub u32);
    impl Ctrlr1 {
        #[inline(always)]
        pub const fn ndf(&self) -> u16 {
            let val = (self.0 >> 0usize) & 0xffff;
            val as u16
        }
        #[inline(always)]
        pub fn set_ndf(&mut self, val: u16) {
            self.0 = (self.0 & !(0xffff << 0usize)) | (((val as u32) & 0xffff) << 0usize);
        }
    }
    impl Default for Ctrlr1 {
        #[inline(always)]
        fn default() -> Ctrlr1 {
            Ctrlr1(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Ssienr(pub u32);
    impl Ssienr {
        #[inline(always)]
        pub const fn ssi_en(&self) -> bool {
            let val = (self.0 >> 0usize) & 0x1;
            val != 0
        }
        #[inline(always)]
        pub fn set_ssi_en(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 0usize)) | (((val as u32) & 0x1) << 0usize);
        }
    }
    impl Default for Ssienr {
        #[inline(always)]
        fn default() -> Ssienr {
            Ssienr(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Mwcr(pub u32);
    impl Mwcr {
        #[doc = "Sequential transfer"]
        #[inline(always)]
        pub const fn mwmod(&self) -> bool {
            let val = (self.0 >> 0usize) & 0x1;
            val != 0
        }
        #[doc = "Sequential transfer"]
        #[inline(always)]
        pub fn set_mwmod(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 0usize)) | (((val as u32) & 0x1) << 0usize);
        }
        #[doc = "Transmit control word"]
        #[inline(always)]
        pub const fn mdd(&self) -> bool {
            let val = (self.0 >> 1usize) & 0x1;
            val != 0
        }
        #[doc = "Transmit control word"]
        #[inline(always)]
        pub fn set_mdd(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 1usize)) | (((val as u32) & 0x1) << 1usize);
        }
        #[doc = "Handshaking"]
        #[inline(always)]
        pub const fn mhs(&self) -> bool {
            let val = (self.0 >> 2usize) & 0x1;
            val != 0
        }
        #[doc = "Handshaking"]
        #[inline(always)]
        pub fn set_mhs(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 2usize)) | (((val as u32) & 0x1) << 2usize);
        }
    }
    impl Default for Mwcr {
        #[inline(always)]
        fn default() -> Mwcr {
            Mwcr(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Ser(pub u32);
    impl Ser {
        #[doc = "One bit per slave select line"]
        #[inline(always)]
        pub const fn ser(&self) -> u8 {
            let val = (self.0 >> 0usize) & 0xf;
            val as u8
        }
        #[doc = "One bit per slave select line"]
        #[inline(always)]
        pub fn set_ser(&mut self, val: u8) {
            self.0 = (self.0 & !(0xf << 0usize)) | (((val as u32) & 0xf) << 0usize);
        }
    }
    impl Default for Ser {
        #[inline(always)]
        fn default() -> Ser {
            Ser(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Baudr(pub u32);
    impl Baudr {
        #[doc = "Even clock divider"]
        #[inline(always)]
        pub const fn sckdv(&self) -> u16 {
            let val = (self.0 >> 0usize) & 0xffff;
            val as u16
        }
        #[doc = "Even clock divider"]
        #[inline(always)]
        pub fn set_sckdv(&mut self, val: u16) {
            self.0 = (self.0 & !(0xffff << 0usize)) | (((val as u32) & 0xffff) << 0usize);
        }
    }
    impl Default for Baudr {
        #[inline(always)]
        fn default() -> Baudr {
            Baudr(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Ftlr(pub u32);
    impl Ftlr {
        #[inline(always)]
        pub const fn level(&self) -> u8 {
            let val = (self.0 >> 0usize) & 0xff;
            val as u8
        }
        #[inline(always)]
        pub fn set_level(&mut self, val: u8) {
            self.0 = (self.0 & !(0xff << 0usize)) | (((val as u32) & 0xff) << 0usize);
        }
    }
    impl Default for Ftlr {
        #[inline(always)]
        fn default() -> Ftlr {
            Ftlr(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Sr(pub u32);
    impl Sr {
        #[inline(always)]
        pub const fn busy(&self) -> bool {
            let val = (self.0 >> 0usize) & 0x1;
            val != 0
        }
        #[inline(always)]
        pub fn set_busy(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 0usize)) | (((val as u32) & 0x1) << 0usize);
        }
        #[doc = "Transmit FIFO not full"]
        #[inline(always)]
        pub const fn tfnf(&self) -> bool {
            let val = (self.0 >> 1usize) & 0x1;
            val != 0
        }
        #[doc = "Transmit FIFO not full"]
        #[inline(always)]
        pub fn set_tfnf(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 1usize)) | (((val as u32) & 0x1) << 1usize);
        }
        #[doc = "Transmit FIFO empty"]
        #[inline(always)]
        pub const fn tfe(&self) -> bool {
            let val = (self.0 >> 2usize) & 0x1;
            val != 0
        }
        #[doc = "Transmit FIFO empty"]
        #[inline(always)]
        pub fn set_tfe(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 2usize)) | (((val as u32) & 0x1) << 2usize);
        }
        #[doc = "Receive FIFO not empty"]
        #[inline(always)]
        pub const fn rfne(&self) -> bool {
            let val = (self.0 >> 3usize) & 0x1;
            val != 0
        }
        #[doc = "Receive FIFO not empty"]
        #[inline(always)]
        pub fn set_rfne(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 3usize)) | (((val as u32) & 0x1) << 3usize);
        }
        #[doc = "Receive FIFO full"]
        #[inline(always)]
        pub const fn rff(&self) -> bool {
            let val = (self.0 >> 4usize) & 0x1;
            val != 0
        }
        #[doc = "Receive FIFO full"]
        #[inline(always)]
        pub fn set_rff(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 4usize)) | (((val as u32) & 0x1) << 4usize);
        }
        #[doc = "Transmission error"]
        #[inline(always)]
        pub const fn txe(&self) -> bool {
            let val = (self.0 >> 5usize) & 0x1;
            val != 0
        }
        #[doc = "Transmission error"]
        #[inline(always)]
        pub fn set_txe(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 5usize)) | (((val as u32) & 0x1) << 5usize);
        }
        #[doc = "Data collision"]
        #[inline(always)]
        pub const fn dcol(&self) -> bool {
            let val = (self.0 >> 6usize) & 0x1;
            val != 0
        }
        #[doc = "Data collision"]
        #[inline(always)]
        pub fn set_dcol(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 6usize)) | (((val as u32) & 0x1) << 6usize);
        }
    }
    impl Default for Sr {
        #[inline(always)]
        fn default() -> Sr {
            Sr(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Isr(pub u32);
    impl Isr {
        #[doc = "Transmit FIFO empty"]
        #[inline(always)]
        pub const fn txei(&self) -> bool {
            let val = (self.0 >> 0usize) & 0x1;
            val != 0
        }
        #[doc = "Transmit FIFO empty"]
        #[inline(always)]
        pub fn set_txei(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 0usize)) | (((val as u32) & 0x1) << 0usize);
        }
        #[doc = "Transmit FIFO overflow"]
        #[inline(always)]
        pub const fn txoi(&self) -> bool {
            let val = (self.0 >> 1usize) & 0x1;
            val != 0
        }
        #[doc = "Transmit FIFO overflow"]
        #[inline(always)]
        pub fn set_txoi(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 1usize)) | (((val as u32) & 0x1) << 1usize);
        }
        #[doc = "Receive FIFO underflow"]
        #[inline(always)]
        pub const fn rxui(&self) -> bool {
            let val = (self.0 >> 2usize) & 0x1;
            val != 0
        }
        #[doc = "Receive FIFO underflow"]
        #[inline(always)]
        pub fn set_rxui(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 2usize)) | (((val as u32) & 0x1) << 2usize);
        }
        #[doc = "Receive FIFO overflow"]
        #[inline(always)]
        pub const fn rxoi(&self) -> bool {
            let val = (self.0 >> 3usize) & 0x1;
            val != 0
        }
        #[doc = "Receive FIFO overflow"]
        #[inline(always)]
        pub fn set_rxoi(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 3usize)) | (((val as u32) & 0x1) << 3usize);
        }
        #[doc = "Receive FIFO full"]
        #[inline(always)]
        pub const fn rxfi(&self) -> bool {
            let val = (self.0 >> 4usize) & 0x1;
            val != 0
        }
        #[doc = "Receive FIFO full"]
        #[inline(always)]
        pub fn set_rxfi(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 4usize)) | (((val as u32) & 0x1) << 4usize);
        }
        #[doc = "Multi master contention"]
        #[inline(always)]
        pub const fn msti(&self) -> bool {
            let val = (self.0 >> 5usize) & 0x1;
            val != 0
        }
        #[doc = "Multi master contention"]
        #[inline(always)]
        pub fn set_msti(&mut self, val: bool) {
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
    pub struct Dr(pub u32);
    impl Dr {
    }
    impl Default for Dr {
        #[inline(always)]
        fn default() -> Dr {
            Dr(0)
        }
    }
}
