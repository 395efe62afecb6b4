use core::marker::PhantomData;

use bitint::UBitint;

use crate::atomic::Uninterruptible;
use crate::field::{low_mask, RawField};
use crate::value::FieldValue;

/// A field holding a `V` whose low bits are `Lo` and whose high bits are `Hi`.
///
/// The two halves usually live in different registers, as with Timer0's waveform generation mode,
/// where `WGM01:0` sits in `TCCR0A` and `WGM02` in `TCCR0B`. Writes always store `Lo` first and
/// then `Hi`. Reads load in the same order.
///
/// The halves together must fit in 8 bits and hold `V`:
///
/// ```compile_fail
/// use m328p_mmio::prelude::*;
/// use m328p_mmio::registers::{TCCR0A, TCCR0B};
///
/// type Wgm = Split<BitGroup<TCCR0A, 0, 1, U2>, Bit<TCCR0B, 3>, U4>;
///
/// Wgm::write(U4::new_masked(0));
/// ```
pub struct Split<Lo, Hi, V> {
    _phantom: PhantomData<fn() -> (Lo, Hi, V)>,
}

impl<Lo: RawField, Hi: RawField, V: FieldValue> Split<Lo, Hi, V> {
    const VALUE_MASK: u8 = low_mask(<Self as RawField>::WIDTH);

    #[inline(always)]
    pub fn read() -> V {
        V::from_bits(V::Bits::new_masked(Self::read_raw()))
    }

    /// Writes the low half and then the high half, each with its own read-modify-write.
    #[inline(always)]
    pub fn write(value: V) {
        Self::write_raw(Into::<u8>::into(value.to_bits()));
    }

    /// Reads, applies `f`, and writes the field back.
    ///
    /// The token keeps interrupt handlers from observing or racing the intermediate state where
    /// only the low half has been updated.
    #[inline(always)]
    pub fn modify(u: Uninterruptible, f: impl FnOnce(V) -> V) {
        let _ = u;
        Self::write(f(Self::read()));
    }
}

impl<Lo: RawField, Hi: RawField, V: FieldValue> RawField for Split<Lo, Hi, V> {
    const WIDTH: u8 = {
        let width = Lo::WIDTH + Hi::WIDTH;
        assert!(width <= 8, "split field is wider than 8 bits");
        assert!(V::BITS <= width, "value type is wider than the split field");
        width
    };

    #[inline(always)]
    fn read_raw() -> u8 {
        let low = Lo::read_raw();
        let high = Hi::read_raw();
        (low | (high << Lo::WIDTH)) & Self::VALUE_MASK
    }

    #[inline(always)]
    fn write_raw(value: u8) {
        let value = value & Self::VALUE_MASK;
        Lo::write_raw(value & low_mask(Lo::WIDTH));
        Hi::write_raw(value >> Lo::WIDTH);
    }
}
