//! Peripheral access layer for the SiWx91x M4 subsystem.
//!
//! Register blocks are `Copy` handles over a base pointer. The constants below point at the
//! silicon; tests build the same handles over RAM with [`mock`].

#![allow(unused)]

pub mod common;

pub mod gpio;
pub mod i2s;
pub mod m4clk;
pub mod mcpwm;
pub mod misc;
pub mod npss;
pub mod pll;
pub mod qspi;
pub mod ssi;
pub mod systick;

pub const M4CLK: m4clk::M4clk = unsafe { m4clk::M4clk::from_ptr(0x4600_0000usize as _) };
pub const MISC: misc::Misc = unsafe { misc::Misc::from_ptr(0x4600_8000usize as _) };
pub const ICACHE: misc::Icache = unsafe { misc::Icache::from_ptr(0x2028_0000usize as _) };
/// PLL registers seen through the SPI memory map window
pub const PLL: pll::Pll = unsafe { pll::Pll::from_ptr(0x4618_8000usize as _) };
/// NPSS: power management, MCU FSM and battery flip-flops
pub const NPSS: npss::Npss = unsafe { npss::Npss::from_ptr(0x2404_8000usize as _) };

pub const PAD_CONFIG: gpio::PadConfig = unsafe { gpio::PadConfig::from_ptr(0x4600_4000usize as _) };
pub const PAD_SELECT: gpio::PadSelect = unsafe { gpio::PadSelect::from_ptr(0x4130_0000usize as _) };
pub const ULP_PAD: gpio::UlpPad = unsafe { gpio::UlpPad::from_ptr(0x2404_a000usize as _) };
pub const EGPIO: gpio::Egpio = unsafe { gpio::Egpio::from_ptr(0x4613_0000usize as _) };
pub const ULP_EGPIO: gpio::Egpio = unsafe { gpio::Egpio::from_ptr(0x2404_c000usize as _) };

pub const MCPWM: mcpwm::Mcpwm = unsafe { mcpwm::Mcpwm::from_ptr(0x4707_0000usize as _) };

pub const SSI_MASTER: ssi::Ssi = unsafe { ssi::Ssi::from_ptr(0x4402_0000usize as _) };
pub const SSI_SLAVE: ssi::Ssi = unsafe { ssi::Ssi::from_ptr(0x4501_0000usize as _) };
pub const ULP_SSI: ssi::Ssi = unsafe { ssi::Ssi::from_ptr(0x2404_0000usize as _) };

pub const I2S0: i2s::I2s = unsafe { i2s::I2s::from_ptr(0x4705_0000usize as _) };
pub const ULP_I2S: i2s::I2s = unsafe { i2s::I2s::from_ptr(0x2404_0400usize as _) };

pub const QSPI: qspi::Qspi = unsafe { qspi::Qspi::from_ptr(0x1200_0000usize as _) };

pub const SYSTICK: systick::Systick = unsafe { systick::Systick::from_ptr(0xe000_e010usize as _) };

/// Interrupt numbers used by the drivers
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum Interrupt {
    SSI_SLAVE = 44,
    SSI_MASTER = 47,
    MCPWM = 48,
    I2S0 = 64,
}

#[cfg(target_arch = "arm")]
unsafe impl cortex_m::interrupt::InterruptNumber for Interrupt {
    #[inline(always)]
    fn number(self) -> u16 {
        self as u16
    }
}

/// RAM backed register blocks for host tests.
#[cfg(test)]
pub(crate) mod mock {
    use super::common::{Access, Reg};

    /// Allocates a zeroed, word aligned block of `bytes` and leaks it.
    pub fn block(bytes: usize) -> *mut () {
        let words = vec![0u32; bytes.div_ceil(4)].into_boxed_slice();
        Box::leak(words).as_mut_ptr() as *mut ()
    }

    /// Writes a register regardless of its access, to preset hardware owned bits.
    pub fn poke<T: Copy, A: Access>(reg: Reg<T, A>, val: T) {
        unsafe { reg.as_ptr().write_volatile(val) }
    }

    /// Reads a register regardless of its access.
    pub fn peek<T: Copy, A: Access>(reg: Reg<T, A>) -> T {
        unsafe { reg.as_ptr().read_volatile() }
    }

    pub fn m4clk() -> super::m4clk::M4clk {
        unsafe { super::m4clk::M4clk::from_ptr(block(0x100)) }
    }

    pub fn pll() -> super::pll::Pll {
        unsafe { super::pll::Pll::from_ptr(block(0x100)) }
    }

    pub fn npss() -> super::npss::Npss {
        unsafe { super::npss::Npss::from_ptr(block(0x700)) }
    }

    pub fn misc() -> super::misc::Misc {
        unsafe { super::misc::Misc::from_ptr(block(0x50)) }
    }

    pub fn icache() -> super::misc::Icache {
        unsafe { super::misc::Icache::from_ptr(block(0x30)) }
    }

    pub fn egpio() -> super::gpio::Egpio {
        unsafe { super::gpio::Egpio::from_ptr(block(0x900)) }
    }

    pub fn pad_config() -> super::gpio::PadConfig {
        unsafe { super::gpio::PadConfig::from_ptr(block(0x100)) }
    }

    pub fn pad_select() -> super::gpio::PadSelect {
        unsafe { super::gpio::PadSelect::from_ptr(block(0x620)) }
    }

    pub fn ulp_pad() -> super::gpio::UlpPad {
        unsafe { super::gpio::UlpPad::from_ptr(block(0x10)) }
    }

    pub fn ssi() -> super::ssi::Ssi {
        unsafe { super::ssi::Ssi::from_ptr(block(0x80)) }
    }

    pub fn mcpwm() -> super::mcpwm::Mcpwm {
        unsafe { super::mcpwm::Mcpwm::from_ptr(block(0x130)) }
    }

    pub fn i2s() -> super::i2s::I2s {
        unsafe { super::i2s::I2s::from_ptr(block(0xa0)) }
    }

    pub fn qspi() -> super::qspi::Qspi {
        unsafe { super::qspi::Qspi::from_ptr(block(0x100)) }
    }

    pub fn systick() -> super::systick::Systick {
        unsafe { super::systick::Systick::from_ptr(block(0x10)) }
    }
}
