//! GPIO, pad configuration and pad ownership
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::identity_op)]
#![allow(clippy::unnecessary_cast)]
#![allow(clippy::erasing_op)]

use super::common;

#[doc = "Enhanced GPIO controller"]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Egpio {
    ptr: *mut u8,
}
unsafe impl Send for Egpio {}
unsafe impl Sync for Egpio {}
impl Egpio {
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }
    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }
    #[doc = "Per pin configuration"]
    #[inline(always)]
    pub const fn pin_config(self, n: usize) -> PinConfig {
        assert!(n < 80usize);
        unsafe { PinConfig::from_ptr(self.ptr.add(0x0usize + n * 16usize) as _) }
    }
    #[doc = "Per port access"]
    #[inline(always)]
    pub const fn port(self, n: usize) -> Port {
        assert!(n < 6usize);
        unsafe { Port::from_ptr(self.ptr.add(0x800usize + n * 32usize) as _) }
    }
}
#[doc = "Per pin configuration and data"]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct PinConfig {
    ptr: *mut u8,
}
unsafe impl Send for PinConfig {}
unsafe impl Sync for PinConfig {}
impl PinConfig {
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }
    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }
    #[doc = "Direction and pin mux mode"]
    #[inline(always)]
    pub const fn gpio_config_reg(self) -> common::Reg<regs::GpioConfigReg, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x0usize) as _) }
    }
    #[doc = "Pin level"]
    #[inline(always)]
    pub const fn bit_load_reg(self) -> common::Reg<regs::BitLoadReg, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x4usize) as _) }
    }
    #[doc = "Pin level as a word"]
    #[inline(always)]
    pub const fn word_load_reg(self) -> common::Reg<regs::WordLoadReg, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x8usize) as _) }
    }
}
#[doc = "Sixteen pins accessed together"]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Port {
    ptr: *mut u8,
}
unsafe impl Send for Port {}
unsafe impl Sync for Port {}
impl Port {
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }
    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }
    #[doc = "Port value"]
    #[inline(always)]
    pub const fn port_load_reg(self) -> common::Reg<regs::PortReg, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x0usize) as _) }
    }
    #[doc = "Write ones to drive pins high"]
    #[inline(always)]
    pub const fn port_set_reg(self) -> common::Reg<regs::PortReg, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x4usize) as _) }
    }
    #[doc = "Write ones to drive pins low"]
    #[inline(always)]
    pub const fn port_clear_reg(self) -> common::Reg<regs::PortReg, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x8usize) as _) }
    }
    #[doc = "Masked port value"]
    #[inline(always)]
    pub const fn port_masked_load_reg(self) -> common::Reg<regs::PortReg, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0xcusize) as _) }
    }
    #[doc = "Write ones to toggle pins"]
    #[inline(always)]
    pub const fn port_toggle_reg(self) -> common::Reg<regs::PortReg, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x10usize) as _) }
    }
    #[doc = "Port pin levels"]
    #[inline(always)]
    pub const fn port_read_reg(self) -> common::Reg<regs::PortReg, common::R> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x14usize) as _) }
    }
}
#[doc = "High power pad configuration"]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct PadConfig {
    ptr: *mut u8,
}
unsafe impl Send for PadConfig {}
unsafe impl Sync for PadConfig {}
impl PadConfig {
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }
    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }
    #[doc = "Per pad electrical configuration"]
    #[inline(always)]
    pub const fn pad_config_reg(self, n: usize) -> common::Reg<regs::PadConfigReg, common::RW> {
        assert!(n < 64usize);
        unsafe { common::Reg::from_ptr(self.ptr.add(0x0usize + n * 4usize) as _) }
    }
}
#[doc = "Pad ownership between the M4 and the network processor"]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct PadSelect {
    ptr: *mut u8,
}
unsafe impl Send for PadSelect {}
unsafe impl Sync for PadSelect {}
impl PadSelect {
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }
    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }
    #[doc = "Network processor GPIO control"]
    #[inline(always)]
    pub const fn nwp_mcuhp_gpio_ctrl2(self) -> common::Reg<regs::NwpMcuhpGpioCtrl2, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x4usize) as _) }
    }
    #[doc = "Pads 0 to 21 owned by the M4"]
    #[inline(always)]
    pub const fn pad_selection(self) -> common::Reg<regs::PadSelection, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x610usize) as _) }
    }
    #[doc = "Pads 22 to 33 owned by the M4"]
    #[inline(always)]
    pub const fn pad_selection_1(self) -> common::Reg<regs::PadSelection, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x618usize) as _) }
    }
}
#[doc = "Ultra low power pad configuration"]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct UlpPad {
    ptr: *mut u8,
}
unsafe impl Send for UlpPad {}
unsafe impl Sync for UlpPad {}
impl UlpPad {
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }
    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }
    #[doc = "ULP pad receiver enable"]
    #[inline(always)]
    pub const fn ulp_pad_config_reg(self) -> common::Reg<regs::UlpPadConfigReg, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x8usize) as _) }
    }
}
pub mod regs {
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct GpioConfigReg(pub u32);
    impl GpioConfigReg {
        #[doc = "Input when set"]
        #[inline(always)]
        pub const fn direction(&self) -> bool {
            let val = (self.0 >> 0usize) & 0x1;
            val != 0
        }
        #[doc = "Input when set"]
        #[inline(always)]
        pub fn set_direction(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 0usize)) | (((val as u32) & 0x1) << 0usize);
        }
        #[doc = "Pin mux mode"]
        #[inline(always)]
        pub const fn mode(&self) -> u8 {
            let val = (self.0 >> 2usize) & 0xf;
            val as u8
        }
        #[doc = "Pin mux mode"]
        #[inline(always)]
        pub fn set_mode(&mut self, val: u8) {
            self.0 = (self.0 & !(0xf << 2usize)) | (((val as u32) & 0xf) << 2usize);
        }
    }
    impl Default for GpioConfigReg {
        #[inline(always)]
        fn default() -> GpioConfigReg {
            GpioConfigReg(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct BitLoadReg(pub u32);
    impl BitLoadReg {
        #[doc = "Pin level"]
        #[inline(always)]
        pub const fn bit_load(&self) -> bool {
            let val = (self.0 >> 0usize) & 0x1;
            val != 0
        }
        #[doc = "Pin level"]
        #[inline(always)]
        pub fn set_bit_load(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 0usize)) | (((val as u32) & 0x1) << 0usize);
        }
    }
    impl Default for BitLoadReg {
        #[inline(always)]
        fn default() -> BitLoadReg {
            BitLoadReg(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct WordLoadReg(pub u32);
    impl WordLoadReg {
        #[doc = "Pin level as a word"]
        #[inline(always)]
        pub const fn word_load(&self) -> u16 {
            let val = (self.0 >> 0usize) & 0xffff;
            val as u16
        }
        #[doc = "Pin level as a word"]
        #[inline(always)]
        pub fn set_word_load(&mut self, val: u16) {
            self.0 = (self.0 & !(0xffff << 0usize)) | (((val as u32) & 0xffff) << 0usize);
        }
    }
    impl Default for WordLoadReg {
        #[inline(always)]
        fn default() -> WordLoadReg {
            WordLoadReg(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct PortReg(pub u32);
    impl PortReg {
        #[doc = "One bit per pin"]
        #[inline(always)]
        pub const fn port(&self) -> u16 {
            let val = (self.0 >> 0usize) & 0xffff;
            val as u16
        }
        #[doc = "One bit per pin"]
        #[inline(always)]
        pub fn set_port(&mut self, val: u16) {
            self.0 = (self.0 & !(0xffff << 0usize)) | (((val as u32) & 0xffff) << 0usize);
        }
    }
    impl Default for PortReg {
        #[inline(always)]
        fn default() -> PortReg {
            PortReg(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct PadConfigReg(pub u32);
    impl PadConfigReg {
        #[doc = "Drive strength"]
        #[inline(always)]
        pub const fn padconfig_e1_e2(&self) -> u8 {
            let val = (self.0 >> 0usize) & 0x3;
            val as u8
        }
        #[doc = "Drive strength"]
        #[inline(always)]
        pub fn set_padconfig_e1_e2(&mut self, val: u8) {
            self.0 = (self.0 & !(0x3 << 0usize)) | (((val as u32) & 0x3) << 0usize);
        }
        #[doc = "Power on start"]
        #[inline(always)]
        pub const fn padconfig_pos(&self) -> bool {
            let val = (self.0 >> 2usize) & 0x1;
            val != 0
        }
        #[doc = "Power on start"]
        #[inline(always)]
        pub fn set_padconfig_pos(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 2usize)) | (((val as u32) & 0x1) << 2usize);
        }
        #[doc = "Schmitt trigger"]
        #[inline(always)]
        pub const fn padconfig_smt(&self) -> bool {
            let val = (self.0 >> 3usize) & 0x1;
            val != 0
        }
        #[doc = "Schmitt trigger"]
        #[inline(always)]
        pub fn set_padconfig_smt(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 3usize)) | (((val as u32) & 0x1) << 3usize);
        }
        #[doc = "Receiver enable"]
        #[inline(always)]
        pub const fn padconfig_ren(&self) -> bool {
            let val = (self.0 >> 4usize) & 0x1;
            val != 0
        }
        #[doc = "Receiver enable"]
        #[inline(always)]
        pub fn set_padconfig_ren(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 4usize)) | (((val as u32) & 0x1) << 4usize);
        }
        #[doc = "Slew rate"]
        #[inline(always)]
        pub const fn padconfig_sr(&self) -> bool {
            let val = (self.0 >> 5usize) & 0x1;
            val != 0
        }
        #[doc = "Slew rate"]
        #[inline(always)]
        pub fn set_padconfig_sr(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 5usize)) | (((val as u32) & 0x1) << 5usize);
        }
        #[doc = "Disable state: Hi-Z, pull up, pull down or repeater"]
        #[inline(always)]
        pub const fn padconfig_p1_p2(&self) -> u8 {
            let val = (self.0 >> 6usize) & 0x3;
            val as u8
        }
        #[doc = "Disable state: Hi-Z, pull up, pull down or repeater"]
        #[inline(always)]
        pub fn set_padconfig_p1_p2(&mut self, val: u8) {
            self.0 = (self.0 & !(0x3 << 6usize)) | (((val as u32) & 0x3) << 6usize);
        }
    }
    impl Default for PadConfigReg {
        #[inline(always)]
        fn default() -> PadConfigReg {
            PadConfigReg(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct NwpMcuhpGpioCtrl2(pub u32);
    impl NwpMcuhpGpioCtrl2 {
        #[doc = "Pad selection enabled for the M4"]
        #[inline(always)]
        pub const fn pad_selection_enable(&self) -> bool {
            let val = (self.0 >> 5usize) & 0x1;
            val != 0
        }
        #[doc = "Pad selection enabled for the M4"]
        #[inline(always)]
        pub fn set_pad_selection_enable(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 5usize)) | (((val as u32) & 0x1) << 5usize);
        }
    }
    impl Default for NwpMcuhpGpioCtrl2 {
        #[inline(always)]
        fn default() -> NwpMcuhpGpioCtrl2 {
            NwpMcuhpGpioCtrl2(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct PadSelection(pub u32);
    impl PadSelection {
    }
    impl Default for PadSelection {
        #[inline(always)]
        fn default() -> PadSelection {
            PadSelection(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct UlpPadConfigReg(pub u32);
    impl UlpPadConfigReg {
    }
    impl Default for UlpPadConfigReg {
        #[inline(always)]
        fn default() -> UlpPadConfigReg {
            UlpPadConfigReg(0)
        }
    }
}
