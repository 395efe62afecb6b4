use core::marker::PhantomData;

use bitint::UBitint;
use snafu::ensure;

use crate::atomic::Uninterruptible;
use crate::error::{Error, ValueOutOfRangeSnafu};
use crate::field::{low_mask, RawField};
use crate::register::Register;
use crate::value::FieldValue;

/// Bits `LOW..=HIGH` of register `R`, holding a `V`.
///
/// The range and the width of `V` are checked at build time. A range running past bit 7 does not
/// compile:
///
/// ```compile_fail
/// use m328p_mmio::BitGroup;
/// use m328p_mmio::prelude::*;
/// use m328p_mmio::registers::TCCR0B;
///
/// BitGroup::<TCCR0B, 6, 8, U3>::write(U3::new_masked(0));
/// ```
///
/// Neither does a value wider than the range:
///
/// ```compile_fail
/// use m328p_mmio::BitGroup;
/// use m328p_mmio::prelude::*;
/// use m328p_mmio::registers::TCCR0B;
///
/// BitGroup::<TCCR0B, 0, 1, U3>::write(U3::new_masked(0));
/// ```
pub struct BitGroup<R, const LOW: u8, const HIGH: u8, V> {
    _phantom: PhantomData<fn() -> (R, V)>,
}

impl<R: Register, const LOW: u8, const HIGH: u8, V: FieldValue> BitGroup<R, LOW, HIGH, V> {
    /// The range's mask within the register.
    pub const MASK: u8 = low_mask(<Self as RawField>::WIDTH) << LOW;

    /// Loads the register and returns the field.
    #[inline(always)]
    pub fn read() -> V {
        V::from_bits(V::Bits::new_masked(Self::read_raw()))
    }

    /// Loads the register and stores it back with only the range changed.
    ///
    /// This is a read-modify-write. Wrap it in an [`Atomic`](crate::Atomic) guard when an
    /// interrupt handler may write the same register.
    #[inline(always)]
    pub fn write(value: V) {
        Self::write_raw(Into::<u8>::into(value.to_bits()));
    }

    /// Writes `value` to the range if it fits, and fails without touching the register otherwise.
    pub fn try_write_raw(value: u8) -> Result<(), Error> {
        ensure!(
            value & !low_mask(<Self as RawField>::WIDTH) == 0,
            ValueOutOfRangeSnafu {
                value,
                width: <Self as RawField>::WIDTH,
            }
        );
        Self::write_raw(value);
        Ok(())
    }

    #[inline(always)]
    pub fn modify(u: Uninterruptible, f: impl FnOnce(V) -> V) {
        R::modify(u, |register| {
            let old = V::from_bits(V::Bits::new_masked(Self::extract(register)));
            Self::insert(register, Into::<u8>::into(f(old).to_bits()))
        });
    }

    #[inline(always)]
    const fn extract(register: u8) -> u8 {
        (register & Self::MASK) >> LOW
    }

    #[inline(always)]
    const fn insert(register: u8, value: u8) -> u8 {
        (register & !Self::MASK) | ((value << LOW) & Self::MASK)
    }
}

impl<R: Register, const LOW: u8, const HIGH: u8, V: FieldValue> RawField
    for BitGroup<R, LOW, HIGH, V>
{
    const WIDTH: u8 = {
        assert!(LOW <= HIGH, "bit range is reversed");
        assert!(HIGH < 8, "bit range runs past bit 7");
        let width = HIGH - LOW + 1;
        assert!(V::BITS <= width, "value type is wider than the bit range");
        width
    };

    #[inline(always)]
    fn read_raw() -> u8 {
        Self::extract(R::read())
    }

    #[inline(always)]
    fn write_raw(value: u8) {
        R::write(Self::insert(R::read(), value));
    }
}
