use core::hint::spin_loop;
use core::marker::PhantomData;

use crate::atomic::Uninterruptible;
use crate::field::RawField;
use crate::register::Register;

/// Bit `BIT` of register `R`.
///
/// `BIT` must be less than 8. Anything else is rejected at build time:
///
/// ```compile_fail
/// use m328p_mmio::Bit;
/// use m328p_mmio::registers::PORTB;
///
/// Bit::<PORTB, 8>::set();
/// ```
pub struct Bit<R, const BIT: u8> {
    _phantom: PhantomData<fn() -> R>,
}

impl<R: Register, const BIT: u8> Bit<R, BIT> {
    /// The bit's mask within the register.
    pub const MASK: u8 = {
        assert!(BIT < 8, "bit position out of range");
        1 << BIT
    };

    /// Loads the register and returns the bit.
    #[inline(always)]
    pub fn read() -> bool {
        R::read() & Self::MASK != 0
    }

    /// Loads the register and stores it back with only this bit changed.
    #[inline(always)]
    pub fn write(value: bool) {
        R::write(Self::with(R::read(), value));
    }

    #[inline(always)]
    pub fn set() {
        Self::write(true);
    }

    #[inline(always)]
    pub fn clear() {
        Self::write(false);
    }

    #[inline(always)]
    pub fn toggle() {
        R::write(R::read() ^ Self::MASK);
    }

    /// Clears a write-one-to-clear flag.
    ///
    /// Stores the bit's mask alone, without loading the register first. Zeros are ignored by
    /// flag registers such as `TIFR0`, so other pending flags survive. Using [`set`](Self::set)
    /// here would clear every pending flag in the register.
    #[inline(always)]
    pub fn clear_flag() {
        R::write(Self::MASK);
    }

    /// Busy-waits until the bit reads as set.
    #[inline(always)]
    pub fn wait_until_set() {
        while !Self::read() {
            spin_loop();
        }
    }

    /// Busy-waits until the bit reads as clear.
    #[inline(always)]
    pub fn wait_until_clear() {
        while Self::read() {
            spin_loop();
        }
    }

    #[inline(always)]
    pub fn modify(u: Uninterruptible, f: impl FnOnce(bool) -> bool) {
        R::modify(u, |value| Self::with(value, f(value & Self::MASK != 0)));
    }

    #[inline(always)]
    const fn with(register: u8, value: bool) -> u8 {
        if value {
            register | Self::MASK
        } else {
            register & !Self::MASK
        }
    }
}

impl<R: Register, const BIT: u8> RawField for Bit<R, BIT> {
    const WIDTH: u8 = 1;

    #[inline(always)]
    fn read_raw() -> u8 {
        Self::read() as u8
    }

    #[inline(always)]
    fn write_raw(value: u8) {
        Self::write(value & 1 != 0);
    }
}
