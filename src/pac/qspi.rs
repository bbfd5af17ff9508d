//! Quad SPI flash controller
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::identity_op)]
#![allow(clippy::unnecessary_cast)]
#![allow(clippy::erasing_op)]

use super::common;

#[doc = "Quad SPI flash controller"]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Qspi {
    ptr: *mut u8,
}
unsafe impl Send for Qspi {}
unsafe impl Sync for Qspi {}
impl Qspi {
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }
    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }
    #[doc = "Clock configuration"]
    #[inline(always)]
    pub const fn qspi_clk_config(self) -> common::Reg<regs::Raw, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x0usize) as _) }
    }
    #[doc = "Bus mode"]
    #[inline(always)]
    pub const fn qspi_bus_mode(self) -> common::Reg<regs::BusMode, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x4usize) as _) }
    }
    #[doc = "Auto mode configuration 1"]
    #[inline(always)]
    pub const fn qspi_auto_ctrl_config_1(self) -> common::Reg<regs::Raw, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x8usize) as _) }
    }
    #[doc = "Auto mode configuration 2"]
    #[inline(always)]
    pub const fn qspi_auto_ctrl_config_2(self) -> common::Reg<regs::Raw, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0xcusize) as _) }
    }
    #[doc = "Manual mode configuration and triggers"]
    #[inline(always)]
    pub const fn qspi_manual_config(self) -> common::Reg<regs::ManualConfig, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x10usize) as _) }
    }
    #[doc = "Manual mode configuration 2"]
    #[inline(always)]
    pub const fn qspi_manual_config_2(self) -> common::Reg<regs::Raw, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x14usize) as _) }
    }
    #[doc = "FIFO thresholds"]
    #[inline(always)]
    pub const fn qspi_fifo_threshold(self) -> common::Reg<regs::Raw, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x1cusize) as _) }
    }
    #[doc = "Status"]
    #[inline(always)]
    pub const fn qspi_status(self) -> common::Reg<regs::Status, common::R> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x20usize) as _) }
    }
    #[doc = "Interrupt mask"]
    #[inline(always)]
    pub const fn qspi_intr_mask(self) -> common::Reg<regs::Raw, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x24usize) as _) }
    }
    #[doc = "Interrupt unmask"]
    #[inline(always)]
    pub const fn qspi_intr_unmask(self) -> common::Reg<regs::Raw, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x28usize) as _) }
    }
    #[doc = "Interrupt status"]
    #[inline(always)]
    pub const fn qspi_intr_sts(self) -> common::Reg<regs::Raw, common::R> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x2cusize) as _) }
    }
    #[doc = "Interrupt acknowledge"]
    #[inline(always)]
    pub const fn qspi_intr_ack(self) -> common::Reg<regs::Raw, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x30usize) as _) }
    }
    #[doc = "Manual mode data"]
    #[inline(always)]
    pub const fn qspi_manual_rd_wr_data(self) -> common::Reg<regs::Raw, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x40usize) as _) }
    }
    #[doc = "Manual mode write length"]
    #[inline(always)]
    pub const fn qspi_manual_write_data_2(self) -> common::Reg<regs::ManualWriteData2, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x80usize) as _) }
    }
}
pub mod regs {
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Raw(pub u32);
    impl Raw {
    }
    impl Default for Raw {
        #[inline(always)]
        fn default() -> Raw {
            Raw(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct BusMode(pub u32);
    impl BusMode {
        #[doc = "Memory mapped reads enabled"]
        #[inline(always)]
        pub const fn auto_mode(&self) -> bool {
            let val = (self.0 >> 6usize) & 0x1;
            val != 0
        }
        #[doc = "Memory mapped reads enabled"]
        #[inline(always)]
        pub fn set_auto_mode(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 6usize)) | (((val as u32) & 0x1) << 6usize);
        }
        #[doc = "Hardware controlled chip select"]
        #[inline(always)]
        pub const fn hw_ctrl_mode(&self) -> bool {
            let val = (self.0 >> 25usize) & 0x1;
            val != 0
        }
        #[doc = "Hardware controlled chip select"]
        #[inline(always)]
        pub fn set_hw_ctrl_mode(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 25usize)) | (((val as u32) & 0x1) << 25usize);
        }
    }
    impl Default for BusMode {
        #[inline(always)]
        fn default() -> BusMode {
            BusMode(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct ManualConfig(pub u32);
    impl ManualConfig {
        #[doc = "Chip select deasserted when set"]
        #[inline(always)]
        pub const fn csn_active(&self) -> bool {
            let val = (self.0 >> 0usize) & 0x1;
            val != 0
        }
        #[doc = "Chip select deasserted when set"]
        #[inline(always)]
        pub fn set_csn_active(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 0usize)) | (((val as u32) & 0x1) << 0usize);
        }
        #[doc = "Start a manual write"]
        #[inline(always)]
        pub const fn write_trigger(&self) -> bool {
            let val = (self.0 >> 1usize) & 0x1;
            val != 0
        }
        #[doc = "Start a manual write"]
        #[inline(always)]
        pub fn set_write_trigger(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 1usize)) | (((val as u32) & 0x1) << 1usize);
        }
        #[doc = "Start a manual read"]
        #[inline(always)]
        pub const fn read_trigger(&self) -> bool {
            let val = (self.0 >> 2usize) & 0x1;
            val != 0
        }
        #[doc = "Start a manual read"]
        #[inline(always)]
        pub fn set_read_trigger(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 2usize)) | (((val as u32) & 0x1) << 2usize);
        }
        #[doc = "Manual read count, low bits"]
        #[inline(always)]
        pub const fn manual_rd_cnt(&self) -> u16 {
            let val = (self.0 >> 3usize) & 0x3ff;
            val as u16
        }
        #[doc = "Manual read count, low bits"]
        #[inline(always)]
        pub fn set_manual_rd_cnt(&mut self, val: u16) {
            self.0 = (self.0 & !(0x3ff << 3usize)) | (((val as u32) & 0x3ff) << 3usize);
        }
        #[doc = "Chip select used in manual mode"]
        #[inline(always)]
        pub const fn manual_csn_select(&self) -> u8 {
            let val = (self.0 >> 13usize) & 0x3;
            val as u8
        }
        #[doc = "Chip select used in manual mode"]
        #[inline(always)]
        pub fn set_manual_csn_select(&mut self, val: u8) {
            self.0 = (self.0 & !(0x3 << 13usize)) | (((val as u32) & 0x3) << 13usize);
        }
        #[doc = "AHB transfer size"]
        #[inline(always)]
        pub const fn manual_size(&self) -> u8 {
            let val = (self.0 >> 19usize) & 0x3;
            val as u8
        }
        #[doc = "AHB transfer size"]
        #[inline(always)]
        pub fn set_manual_size(&mut self, val: u8) {
            self.0 = (self.0 & !(0x3 << 19usize)) | (((val as u32) & 0x3) << 19usize);
        }
        #[doc = "Take the write length from the write data 2 register"]
        #[inline(always)]
        pub const fn take_len_frm_reg(&self) -> bool {
            let val = (self.0 >> 21usize) & 0x1;
            val != 0
        }
        #[doc = "Take the write length from the write data 2 register"]
        #[inline(always)]
        pub fn set_take_len_frm_reg(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 21usize)) | (((val as u32) & 0x1) << 21usize);
        }
        #[doc = "Full duplex transfer"]
        #[inline(always)]
        pub const fn full_duplex_en(&self) -> bool {
            let val = (self.0 >> 22usize) & 0x1;
            val != 0
        }
        #[doc = "Full duplex transfer"]
        #[inline(always)]
        pub fn set_full_duplex_en(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 22usize)) | (((val as u32) & 0x1) << 22usize);
        }
        #[doc = "Manual read count, high bits"]
        #[inline(always)]
        pub const fn manual_rd_cnt_hi(&self) -> u8 {
            let val = (self.0 >> 27usize) & 0x1f;
            val as u8
        }
        #[doc = "Manual read count, high bits"]
        #[inline(always)]
        pub fn set_manual_rd_cnt_hi(&mut self, val: u8) {
            self.0 = (self.0 & !(0x1f << 27usize)) | (((val as u32) & 0x1f) << 27usize);
        }
    }
    impl Default for ManualConfig {
        #[inline(always)]
        fn default() -> ManualConfig {
            ManualConfig(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Status(pub u32);
    impl Status {
        #[doc = "Manual transfer in progress"]
        #[inline(always)]
        pub const fn qspi_busy(&self) -> bool {
            let val = (self.0 >> 0usize) & 0x1;
            val != 0
        }
        #[doc = "Manual transfer in progress"]
        #[inline(always)]
        pub fn set_qspi_busy(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 0usize)) | (((val as u32) & 0x1) << 0usize);
        }
        #[doc = "Read FIFO empty"]
        #[inline(always)]
        pub const fn fifo_empty_rfifo(&self) -> bool {
            let val = (self.0 >> 7usize) & 0x1;
            val != 0
        }
        #[doc = "Read FIFO empty"]
        #[inline(always)]
        pub fn set_fifo_empty_rfifo(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 7usize)) | (((val as u32) & 0x1) << 7usize);
        }
        #[doc = "Manual read count reached"]
        #[inline(always)]
        pub const fn manual_rd_cnt_done(&self) -> bool {
            let val = (self.0 >> 9usize) & 0x1;
            val != 0
        }
        #[doc = "Manual read count reached"]
        #[inline(always)]
        pub fn set_manual_rd_cnt_done(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 9usize)) | (((val as u32) & 0x1) << 9usize);
        }
    }
    impl Default for Status {
        #[inline(always)]
        fn default() -> Status {
            Status(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct ManualWriteData2(pub u32);
    impl ManualWriteData2 {
        #[doc = "Write length in bits"]
        #[inline(always)]
        pub const fn write_len(&self) -> u8 {
            let val = (self.0 >> 0usize) & 0x7f;
            val as u8
        }
        #[doc = "Write length in bits"]
        #[inline(always)]
        pub fn set_write_len(&mut self, val: u8) {
            self.0 = (self.0 & !(0x7f << 0usize)) | (((val as u32) & 0x7f) << 0usize);
        }
        #[doc = "Reuse the previous length"]
        #[inline(always)]
        pub const fn use_prev_length(&self) -> bool {
            let val = (self.0 >> 7usize) & 0x1;
            val != 0
        }
        #[doc = "Reuse the previous length"]
        #[inline(always)]
        pub fn set_use_prev_length(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 7usize)) | (((val as u32) & 0x1) << 7usize);
        }
    }
    impl Default for ManualWriteData2 {
        #[inline(always)]
        fn default() -> ManualWriteData2 {
            ManualWriteData2(0)
        }
    }
}
