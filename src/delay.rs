use embedded_hal::delay::DelayNs;

use crate::clocks::ClockTree;
use crate::pac;
use crate::pac::systick::regs::{Csr, Value24};
use crate::time::Hertz;

const RELOAD_MAX: u32 = 0x00ff_ffff;

/// Busy wait delay on the SysTick counter, clocked from the M4 core clock.
///
/// Takes the SysTick over: reload is set to its maximum and the interrupt is left disabled.
#[derive(Clone, Copy)]
pub struct Delay {
    regs: pac::systick::Systick,
    core: Hertz,
}

impl Delay {
    pub fn new(clocks: &ClockTree) -> Self {
        Self::with_regs(pac::SYSTICK, clocks.clocks().soc_clock)
    }

    pub(crate) fn with_regs(regs: pac::systick::Systick, core: Hertz) -> Self {
        regs.rvr().write_value(Value24(RELOAD_MAX));
        regs.cvr().write_value(Value24(0));
        let mut csr = Csr(0);
        csr.set_clksource(true);
        csr.set_enable(true);
        regs.csr().write_value(csr);
        Self { regs, core }
    }

    fn ticks(&self, amount: u32, per_second: u32) -> u64 {
        (self.core.0 as u64 * amount as u64).div_ceil(per_second as u64)
    }

    fn wait_ticks(&mut self, mut ticks: u64) {
        let mut last = self.regs.cvr().read().value();
        while ticks > 0 {
            let now = self.regs.cvr().read().value();
            // down counter, wraps at RELOAD_MAX
            let elapsed = last.wrapping_sub(now) & RELOAD_MAX;
            ticks = ticks.saturating_sub(elapsed as u64);
            last = now;
        }
    }
}

impl DelayNs for Delay {
    fn delay_ns(&mut self, ns: u32) {
        let ticks = self.ticks(ns, 1_000_000_000);
        self.wait_ticks(ticks);
    }

    fn delay_us(&mut self, us: u32) {
        let ticks = self.ticks(us, 1_000_000);
        self.wait_ticks(ticks);
    }

    fn delay_ms(&mut self, mut ms: u32) {
        while ms > 0 {
            self.delay_us(1_000);
            ms -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pac::mock;

    #[test]
    fn systick_runs_from_core_clock() {
        let regs = mock::systick();
        let _ = Delay::with_regs(regs, Hertz::mhz(180));
        let csr = regs.csr().read();
        assert!(csr.enable());
        assert!(csr.clksource());
        assert!(!csr.tickint());
        assert_eq!(regs.rvr().read().value(), RELOAD_MAX);
    }

    #[test]
    fn tick_math_rounds_up() {
        let delay = Delay::with_regs(mock::systick(), Hertz::mhz(180));
        assert_eq!(delay.ticks(1, 1_000_000), 180);
        assert_eq!(delay.ticks(1, 1_000_000_000), 1);
        assert_eq!(delay.ticks(1_000, 1_000_000), 180_000);
        let slow = Delay::with_regs(mock::systick(), Hertz::khz(32));
        assert_eq!(slow.ticks(10, 1_000_000), 1);
    }

    #[test]
    fn zero_delay_returns() {
        let mut delay = Delay::with_regs(mock::systick(), Hertz::mhz(32));
        delay.delay_ns(0);
        delay.delay_us(0);
    }
}
