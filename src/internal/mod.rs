use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::pac::Interrupt;

/// One registrant event callback, shared between thread mode and the interrupt handler.
pub(crate) struct Callback<E: 'static> {
    inner: Mutex<CriticalSectionRawMutex, Cell<Option<fn(E)>>>,
}

impl<E: 'static> Callback<E> {
    pub(crate) const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(None)),
        }
    }

    /// Fails when a callback is already registered.
    pub(crate) fn register(&self, callback: fn(E)) -> Result<(), ()> {
        self.inner.lock(|cell| {
            if cell.get().is_some() {
                return Err(());
            }
            cell.set(Some(callback));
            Ok(())
        })
    }

    pub(crate) fn unregister(&self) {
        self.inner.lock(|cell| cell.set(None));
    }

    pub(crate) fn is_registered(&self) -> bool {
        self.inner.lock(|cell| cell.get().is_some())
    }

    /// Calls the registered callback, if any, outside the lock.
    pub(crate) fn call(&self, event: E) {
        if let Some(callback) = self.inner.lock(|cell| cell.get()) {
            callback(event);
        }
    }
}

/// Unmasks `irq` in the NVIC.
pub(crate) fn enable_irq(irq: Interrupt) {
    #[cfg(target_arch = "arm")]
    unsafe {
        cortex_m::peripheral::NVIC::unpend(irq);
        cortex_m::peripheral::NVIC::unmask(irq);
    }
    #[cfg(not(target_arch = "arm"))]
    let _ = irq;
}

pub(crate) fn disable_irq(irq: Interrupt) {
    #[cfg(target_arch = "arm")]
    cortex_m::peripheral::NVIC::mask(irq);
    #[cfg(not(target_arch = "arm"))]
    let _ = irq;
}

/// Data word of a FIFO transfer, `u8`, `u16` or `u32`.
#[allow(private_bounds)]
pub trait Word: Copy + Default + SealedWord + 'static {}

pub(crate) trait SealedWord {
    const BITS: u32;
    fn to_u32(self) -> u32;
    fn from_u32(val: u32) -> Self;
}

macro_rules! impl_word {
    ($($ty:ty),*) => {
        $(
            impl SealedWord for $ty {
                const BITS: u32 = <$ty>::BITS;
                #[inline]
                fn to_u32(self) -> u32 {
                    self as u32
                }
                #[inline]
                fn from_u32(val: u32) -> Self {
                    val as $ty
                }
            }
            impl Word for $ty {}
        )*
    };
}

impl_word!(u8, u16, u32);

// used by the PWM interrupt handler
pub(crate) struct BitIter(pub u32);

impl Iterator for BitIter {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        match self.0.trailing_zeros() {
            32 => None,
            b => {
                self.0 &= !(1 << b);
                Some(b)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_has_one_registrant() {
        use core::sync::atomic::{AtomicU32, Ordering};
        static HITS: AtomicU32 = AtomicU32::new(0);
        fn on_event(v: u32) {
            HITS.fetch_add(v, Ordering::Relaxed);
        }
        fn other(_: u32) {}

        let cb: Callback<u32> = Callback::new();
        cb.call(1);
        assert!(cb.register(on_event).is_ok());
        assert!(cb.register(other).is_err());
        assert!(cb.is_registered());
        cb.call(5);
        cb.unregister();
        cb.call(7);
        assert_eq!(HITS.load(Ordering::Relaxed), 5);
        assert!(cb.register(other).is_ok());
    }

    #[test]
    fn bit_iter_yields_set_bits_low_to_high() {
        let bits: Vec<u32> = BitIter(0b1000_0010_0101).collect();
        assert_eq!(bits, [0, 2, 5, 11]);
        assert_eq!(BitIter(0).next(), None);
    }
}
