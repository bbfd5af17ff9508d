//! Motor control PWM
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::identity_op)]
#![allow(clippy::unnecessary_cast)]
#![allow(clippy::erasing_op)]

use super::common;

#[doc = "Motor control PWM"]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Mcpwm {
    ptr: *mut u8,
}
unsafe impl Send for Mcpwm {}
unsafe impl Sync for Mcpwm {}
impl Mcpwm {
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }
    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }
    #[doc = "Interrupt status"]
    #[inline(always)]
    pub const fn pwm_intr_sts(self) -> common::Reg<regs::Intr, common::R> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x0usize) as _) }
    }
    #[doc = "Write ones to unmask interrupts"]
    #[inline(always)]
    pub const fn pwm_intr_unmask(self) -> common::Reg<regs::Intr, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x4usize) as _) }
    }
    #[doc = "Write ones to mask interrupts"]
    #[inline(always)]
    pub const fn pwm_intr_mask(self) -> common::Reg<regs::Intr, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x8usize) as _) }
    }
    #[doc = "Write ones to acknowledge interrupts"]
    #[inline(always)]
    pub const fn pwm_intr_ack(self) -> common::Reg<regs::Intr, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0xcusize) as _) }
    }
    #[doc = "Time base per channel"]
    #[inline(always)]
    pub const fn ch(self, n: usize) -> TimeBase {
        assert!(n < 4usize);
        unsafe { TimeBase::from_ptr(self.ptr.add(0x38usize + n * 24usize) as _) }
    }
    #[doc = "Duty cycle control set"]
    #[inline(always)]
    pub const fn pwm_duty_ctrl_set(self) -> common::Reg<regs::ChannelBits, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0xa0usize) as _) }
    }
    #[doc = "Duty cycle control reset"]
    #[inline(always)]
    pub const fn pwm_duty_ctrl_reset(self) -> common::Reg<regs::ChannelBits, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0xa4usize) as _) }
    }
    #[doc = "Duty cycle per channel"]
    #[inline(always)]
    pub const fn pwm_dutycycle_reg_wr_value(self, n: usize) -> common::Reg<regs::Value16, common::RW> {
        assert!(n < 4usize);
        unsafe { common::Reg::from_ptr(self.ptr.add(0xa8usize + n * 4usize) as _) }
    }
    #[doc = "Dead time control set"]
    #[inline(always)]
    pub const fn pwm_deadtime_ctrl_set(self) -> common::Reg<regs::DeadtimeCtrl, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0xb8usize) as _) }
    }
    #[doc = "Dead time control reset"]
    #[inline(always)]
    pub const fn pwm_deadtime_ctrl_reset(self) -> common::Reg<regs::DeadtimeCtrl, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0xbcusize) as _) }
    }
    #[doc = "Dead time A prescale"]
    #[inline(always)]
    pub const fn pwm_deadtime_prescale_select_a(self) -> common::Reg<regs::Prescale, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0xc0usize) as _) }
    }
    #[doc = "Dead time B prescale"]
    #[inline(always)]
    pub const fn pwm_deadtime_prescale_select_b(self) -> common::Reg<regs::Prescale, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0xc4usize) as _) }
    }
    #[doc = "Dead time per channel"]
    #[inline(always)]
    pub const fn deadtime(self, n: usize) -> Deadtime {
        assert!(n < 4usize);
        unsafe { Deadtime::from_ptr(self.ptr.add(0xc8usize + n * 8usize) as _) }
    }
    #[doc = "Output override control set"]
    #[inline(always)]
    pub const fn pwm_op_override_ctrl_set(self) -> common::Reg<regs::ChannelBits, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0xe8usize) as _) }
    }
    #[doc = "Output override control reset"]
    #[inline(always)]
    pub const fn pwm_op_override_ctrl_reset(self) -> common::Reg<regs::ChannelBits, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0xecusize) as _) }
    }
    #[doc = "Output override enable set"]
    #[inline(always)]
    pub const fn pwm_op_override_enable_set(self) -> common::Reg<regs::OverrideBits, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0xf0usize) as _) }
    }
    #[doc = "Output override enable reset"]
    #[inline(always)]
    pub const fn pwm_op_override_enable_reset(self) -> common::Reg<regs::OverrideBits, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0xf4usize) as _) }
    }
    #[doc = "Output override value set"]
    #[inline(always)]
    pub const fn pwm_op_override_value_set(self) -> common::Reg<regs::OverrideBits, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0xf8usize) as _) }
    }
    #[doc = "Output override value reset"]
    #[inline(always)]
    pub const fn pwm_op_override_value_reset(self) -> common::Reg<regs::OverrideBits, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0xfcusize) as _) }
    }
    #[doc = "Fault override control set"]
    #[inline(always)]
    pub const fn pwm_flt_override_ctrl_set(self) -> common::Reg<regs::FltOverrideCtrl, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x100usize) as _) }
    }
    #[doc = "Fault override control reset"]
    #[inline(always)]
    pub const fn pwm_flt_override_ctrl_reset(self) -> common::Reg<regs::FltOverrideCtrl, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x104usize) as _) }
    }
    #[doc = "Fault A override value"]
    #[inline(always)]
    pub const fn pwm_flt_a_override_value(self) -> common::Reg<regs::OverrideBits, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x108usize) as _) }
    }
    #[doc = "Fault B override value"]
    #[inline(always)]
    pub const fn pwm_flt_b_override_value(self) -> common::Reg<regs::OverrideBits, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x10cusize) as _) }
    }
    #[doc = "Special event trigger control set"]
    #[inline(always)]
    pub const fn pwm_svt_ctrl_set(self) -> common::Reg<regs::SvtCtrl, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x110usize) as _) }
    }
    #[doc = "Special event trigger control reset"]
    #[inline(always)]
    pub const fn pwm_svt_ctrl_reset(self) -> common::Reg<regs::SvtCtrl, common::W> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x114usize) as _) }
    }
    #[doc = "Special event postscaler"]
    #[inline(always)]
    pub const fn pwm_svt_parm(self) -> common::Reg<regs::SvtParm, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x118usize) as _) }
    }
    #[doc = "Special event compare value"]
    #[inline(always)]
    pub const fn pwm_svt_compare(self) -> common::Reg<regs::Value16, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x11cusize) as _) }
    }
    #[doc = "Common time base selection"]
    #[inline(always)]
    pub const fn pwm_time_prd_common_reg(self) -> common::Reg<regs::TimePrdCommon, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x120usize) as _) }
    }
}
#[doc = "Channel time base"]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct TimeBase {
    ptr: *mut u8,
}
unsafe impl Send for TimeBase {}
unsafe impl Sync for TimeBase {}
impl TimeBase {
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }
    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }
    #[doc = "Time base period"]
    #[inline(always)]
    pub const fn pwm_time_prd_wr_reg(self) -> common::Reg<regs::Value16, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x0usize) as _) }
    }
    #[doc = "Time base counter initial value"]
    #[inline(always)]
    pub const fn pwm_time_prd_cntr_wr_reg(self) -> common::Reg<regs::Value16, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x4usize) as _) }
    }
    #[doc = "Time base parameters"]
    #[inline(always)]
    pub const fn pwm_time_prd_parm_reg(self) -> common::Reg<regs::TimePrdParm, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x8usize) as _) }
    }
    #[doc = "Time base control"]
    #[inline(always)]
    pub const fn pwm_time_prd_ctrl_reg(self) -> common::Reg<regs::TimePrdCtrl, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0xcusize) as _) }
    }
    #[doc = "Time base status"]
    #[inline(always)]
    pub const fn pwm_time_prd_sts_reg(self) -> common::Reg<regs::TimePrdSts, common::R> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x10usize) as _) }
    }
    #[doc = "Time base counter"]
    #[inline(always)]
    pub const fn pwm_time_prd_cntr_value(self) -> common::Reg<regs::Value16, common::R> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x14usize) as _) }
    }
}
#[doc = "Channel dead time"]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Deadtime {
    ptr: *mut u8,
}
unsafe impl Send for Deadtime {}
unsafe impl Sync for Deadtime {}
impl Deadtime {
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }
    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }
    #[doc = "Dead time A"]
    #[inline(always)]
    pub const fn pwm_deadtime_a(self) -> common::Reg<regs::DeadtimeValue, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x0usize) as _) }
    }
    #[doc = "Dead time B"]
    #[inline(always)]
    pub const fn pwm_deadtime_b(self) -> common::Reg<regs::DeadtimeValue, common::RW> {
        unsafe { common::Reg::from_ptr(self.ptr.add(0x4usize) as _) }
    }
}
pub mod regs {
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Intr(pub u32);
    impl Intr {
    }
    impl Default for Intr {
        #[inline(always)]
        fn default() -> Intr {
            Intr(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct ChannelBits(pub u32);
    impl ChannelBits {
    }
    impl Default for ChannelBits {
        #[inline(always)]
        fn default() -> ChannelBits {
            ChannelBits(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct OverrideBits(pub u32);
    impl OverrideBits {
    }
    impl Default for OverrideBits {
        #[inline(always)]
        fn default() -> OverrideBits {
            OverrideBits(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Value16(pub u32);
    impl Value16 {
        #[inline(always)]
        pub const fn value(&self) -> u16 {
            let val = (self.0 >> 0usize) & 0xffff;
            val as u16
        }
        #[inline(always)]
        pub fn set_value(&mut self, val: u16) {
            self.0 = (self.0 & !(0xffff << 0usize)) | (((val as u32) & 0xffff) << 0usize);
        }
    }
    impl Default for Value16 {
        #[inline(always)]
        fn default() -> Value16 {
            Value16(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct DeadtimeCtrl(pub u32);
    impl DeadtimeCtrl {
        #[doc = "Dead time active select, one bit per channel"]
        #[inline(always)]
        pub const fn deadtime_select_active(&self) -> u8 {
            let val = (self.0 >> 0usize) & 0xf;
            val as u8
        }
        #[doc = "Dead time active select, one bit per channel"]
        #[inline(always)]
        pub fn set_deadtime_select_active(&mut self, val: u8) {
            self.0 = (self.0 & !(0xf << 0usize)) | (((val as u32) & 0xf) << 0usize);
        }
        #[doc = "Dead time inactive select, one bit per channel"]
        #[inline(always)]
        pub const fn deadtime_select_inactive(&self) -> u8 {
            let val = (self.0 >> 4usize) & 0xf;
            val as u8
        }
        #[doc = "Dead time inactive select, one bit per channel"]
        #[inline(always)]
        pub fn set_deadtime_select_inactive(&mut self, val: u8) {
            self.0 = (self.0 & !(0xf << 4usize)) | (((val as u32) & 0xf) << 4usize);
        }
        #[doc = "Dead time enable, one bit per channel"]
        #[inline(always)]
        pub const fn dead_time_enable(&self) -> u8 {
            let val = (self.0 >> 8usize) & 0xf;
            val as u8
        }
        #[doc = "Dead time enable, one bit per channel"]
        #[inline(always)]
        pub fn set_dead_time_enable(&mut self, val: u8) {
            self.0 = (self.0 & !(0xf << 8usize)) | (((val as u32) & 0xf) << 8usize);
        }
    }
    impl Default for DeadtimeCtrl {
        #[inline(always)]
        fn default() -> DeadtimeCtrl {
            DeadtimeCtrl(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct Prescale(pub u32);
    impl Prescale {
    }
    impl Default for Prescale {
        #[inline(always)]
        fn default() -> Prescale {
            Prescale(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct DeadtimeValue(pub u32);
    impl DeadtimeValue {
        #[inline(always)]
        pub const fn deadtime(&self) -> u8 {
            let val = (self.0 >> 0usize) & 0x3f;
            val as u8
        }
        #[inline(always)]
        pub fn set_deadtime(&mut self, val: u8) {
            self.0 = (self.0 & !(0x3f << 0usize)) | (((val as u32) & 0x3f) << 0usize);
        }
    }
    impl Default for DeadtimeValue {
        #[inline(always)]
        fn default() -> DeadtimeValue {
            DeadtimeValue(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct FltOverrideCtrl(pub u32);
    impl FltOverrideCtrl {
        #[doc = "Fault A cycle by cycle mode"]
        #[inline(always)]
        pub const fn flt_a_mode(&self) -> bool {
            let val = (self.0 >> 0usize) & 0x1;
            val != 0
        }
        #[doc = "Fault A cycle by cycle mode"]
        #[inline(always)]
        pub fn set_flt_a_mode(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 0usize)) | (((val as u32) & 0x1) << 0usize);
        }
        #[doc = "Fault B cycle by cycle mode"]
        #[inline(always)]
        pub const fn flt_b_mode(&self) -> bool {
            let val = (self.0 >> 1usize) & 0x1;
            val != 0
        }
        #[doc = "Fault B cycle by cycle mode"]
        #[inline(always)]
        pub fn set_flt_b_mode(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 1usize)) | (((val as u32) & 0x1) << 1usize);
        }
        #[doc = "High side output polarity"]
        #[inline(always)]
        pub const fn op_polarity_h(&self) -> bool {
            let val = (self.0 >> 2usize) & 0x1;
            val != 0
        }
        #[doc = "High side output polarity"]
        #[inline(always)]
        pub fn set_op_polarity_h(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 2usize)) | (((val as u32) & 0x1) << 2usize);
        }
        #[doc = "Low side output polarity"]
        #[inline(always)]
        pub const fn op_polarity_l(&self) -> bool {
            let val = (self.0 >> 3usize) & 0x1;
            val != 0
        }
        #[doc = "Low side output polarity"]
        #[inline(always)]
        pub fn set_op_polarity_l(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 3usize)) | (((val as u32) & 0x1) << 3usize);
        }
        #[doc = "Complementary output mode, one bit per channel"]
        #[inline(always)]
        pub const fn complementary_mode(&self) -> u8 {
            let val = (self.0 >> 12usize) & 0xf;
            val as u8
        }
        #[doc = "Complementary output mode, one bit per channel"]
        #[inline(always)]
        pub fn set_complementary_mode(&mut self, val: u8) {
            self.0 = (self.0 & !(0xf << 12usize)) | (((val as u32) & 0xf) << 12usize);
        }
    }
    impl Default for FltOverrideCtrl {
        #[inline(always)]
        fn default() -> FltOverrideCtrl {
            FltOverrideCtrl(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct SvtCtrl(pub u32);
    impl SvtCtrl {
        #[doc = "Special event trigger enable"]
        #[inline(always)]
        pub const fn svt_trig_en(&self) -> bool {
            let val = (self.0 >> 0usize) & 0x1;
            val != 0
        }
        #[doc = "Special event trigger enable"]
        #[inline(always)]
        pub fn set_svt_trig_en(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 0usize)) | (((val as u32) & 0x1) << 0usize);
        }
        #[doc = "Trigger on the down count"]
        #[inline(always)]
        pub const fn svt_direction(&self) -> bool {
            let val = (self.0 >> 1usize) & 0x1;
            val != 0
        }
        #[doc = "Trigger on the down count"]
        #[inline(always)]
        pub fn set_svt_direction(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 1usize)) | (((val as u32) & 0x1) << 1usize);
        }
    }
    impl Default for SvtCtrl {
        #[inline(always)]
        fn default() -> SvtCtrl {
            SvtCtrl(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct SvtParm(pub u32);
    impl SvtParm {
        #[inline(always)]
        pub const fn svt_postscaler(&self) -> u8 {
            let val = (self.0 >> 0usize) & 0xf;
            val as u8
        }
        #[inline(always)]
        pub fn set_svt_postscaler(&mut self, val: u8) {
            self.0 = (self.0 & !(0xf << 0usize)) | (((val as u32) & 0xf) << 0usize);
        }
    }
    impl Default for SvtParm {
        #[inline(always)]
        fn default() -> SvtParm {
            SvtParm(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct TimePrdCommon(pub u32);
    impl TimePrdCommon {
        #[doc = "Drive all channels from the channel 0 time base"]
        #[inline(always)]
        pub const fn use_0th_timer_only(&self) -> bool {
            let val = (self.0 >> 0usize) & 0x1;
            val != 0
        }
        #[doc = "Drive all channels from the channel 0 time base"]
        #[inline(always)]
        pub fn set_use_0th_timer_only(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 0usize)) | (((val as u32) & 0x1) << 0usize);
        }
        #[doc = "Time base used for the special event"]
        #[inline(always)]
        pub const fn timer_select(&self) -> u8 {
            let val = (self.0 >> 1usize) & 0x3;
            val as u8
        }
        #[doc = "Time base used for the special event"]
        #[inline(always)]
        pub fn set_timer_select(&mut self, val: u8) {
            self.0 = (self.0 & !(0x3 << 1usize)) | (((val as u32) & 0x3) << 1usize);
        }
        #[doc = "Time base driven by the external trigger"]
        #[inline(always)]
        pub const fn use_ext_timer_trig(&self) -> bool {
            let val = (self.0 >> 3usize) & 0x1;
            val != 0
        }
        #[doc = "Time base driven by the external trigger"]
        #[inline(always)]
        pub fn set_use_ext_timer_trig(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 3usize)) | (((val as u32) & 0x1) << 3usize);
        }
    }
    impl Default for TimePrdCommon {
        #[inline(always)]
        fn default() -> TimePrdCommon {
            TimePrdCommon(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct TimePrdParm(pub u32);
    impl TimePrdParm {
        #[doc = "Base timer mode"]
        #[inline(always)]
        pub const fn tmr_operating_mode(&self) -> u8 {
            let val = (self.0 >> 0usize) & 0x7;
            val as u8
        }
        #[doc = "Base timer mode"]
        #[inline(always)]
        pub fn set_tmr_operating_mode(&mut self, val: u8) {
            self.0 = (self.0 & !(0x7 << 0usize)) | (((val as u32) & 0x7) << 0usize);
        }
        #[doc = "Output postscaler"]
        #[inline(always)]
        pub const fn tmr_output_postscale(&self) -> u8 {
            let val = (self.0 >> 4usize) & 0xf;
            val as u8
        }
        #[doc = "Output postscaler"]
        #[inline(always)]
        pub fn set_tmr_output_postscale(&mut self, val: u8) {
            self.0 = (self.0 & !(0xf << 4usize)) | (((val as u32) & 0xf) << 4usize);
        }
        #[doc = "Input prescaler"]
        #[inline(always)]
        pub const fn tmr_input_prescale(&self) -> u8 {
            let val = (self.0 >> 8usize) & 0x7;
            val as u8
        }
        #[doc = "Input prescaler"]
        #[inline(always)]
        pub fn set_tmr_input_prescale(&mut self, val: u8) {
            self.0 = (self.0 & !(0x7 << 8usize)) | (((val as u32) & 0x7) << 8usize);
        }
    }
    impl Default for TimePrdParm {
        #[inline(always)]
        fn default() -> TimePrdParm {
            TimePrdParm(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct TimePrdCtrl(pub u32);
    impl TimePrdCtrl {
        #[doc = "Reset the counter"]
        #[inline(always)]
        pub const fn time_base_counter_reset(&self) -> bool {
            let val = (self.0 >> 0usize) & 0x1;
            val != 0
        }
        #[doc = "Reset the counter"]
        #[inline(always)]
        pub fn set_time_base_counter_reset(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 0usize)) | (((val as u32) & 0x1) << 0usize);
        }
        #[doc = "Time base enable"]
        #[inline(always)]
        pub const fn time_base_en(&self) -> bool {
            let val = (self.0 >> 1usize) & 0x1;
            val != 0
        }
        #[doc = "Time base enable"]
        #[inline(always)]
        pub fn set_time_base_en(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 1usize)) | (((val as u32) & 0x1) << 1usize);
        }
        #[doc = "Counting down"]
        #[inline(always)]
        pub const fn time_base_dir(&self) -> bool {
            let val = (self.0 >> 2usize) & 0x1;
            val != 0
        }
        #[doc = "Counting down"]
        #[inline(always)]
        pub fn set_time_base_dir(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 2usize)) | (((val as u32) & 0x1) << 2usize);
        }
        #[doc = "Soft reset"]
        #[inline(always)]
        pub const fn pwm_sft_rst(&self) -> bool {
            let val = (self.0 >> 3usize) & 0x1;
            val != 0
        }
        #[doc = "Soft reset"]
        #[inline(always)]
        pub fn set_pwm_sft_rst(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 3usize)) | (((val as u32) & 0x1) << 3usize);
        }
    }
    impl Default for TimePrdCtrl {
        #[inline(always)]
        fn default() -> TimePrdCtrl {
            TimePrdCtrl(0)
        }
    }
    #[repr(transparent)]
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct TimePrdSts(pub u32);
    impl TimePrdSts {
        #[doc = "Counting down"]
        #[inline(always)]
        pub const fn time_base_dir_sts(&self) -> bool {
            let val = (self.0 >> 0usize) & 0x1;
            val != 0
        }
        #[doc = "Counting down"]
        #[inline(always)]
        pub fn set_time_base_dir_sts(&mut self, val: bool) {
            self.0 = (self.0 & !(0x1 << 0usize)) | (((val as u32) & 0x1) << 0usize);
        }
    }
    impl Default for TimePrdSts {
        #[inline(always)]
        fn default() -> TimePrdSts {
            TimePrdSts(0)
        }
    }
}
