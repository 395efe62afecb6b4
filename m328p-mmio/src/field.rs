/// Untyped access to a field of up to 8 bits.
///
/// Implemented by [`Bit`](crate::Bit), [`BitGroup`](crate::BitGroup), and [`Split`](crate::Split)
/// so that fields can be composed, e.g. as the halves of a split field.
pub trait RawField {
    /// Number of bits in the field.
    const WIDTH: u8;

    /// Reads the field, right-aligned.
    fn read_raw() -> u8;

    /// Writes the low [`WIDTH`](Self::WIDTH) bits of `value` to the field, leaving the other bits
    /// of the register unchanged. Excess high bits are discarded.
    fn write_raw(value: u8);
}

/// Returns a mask of the low `width` bits.
pub(crate) const fn low_mask(width: u8) -> u8 {
    if width >= 8 {
        0xff
    } else {
        (1u8 << width) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::low_mask;

    #[test]
    fn test_low_mask() {
        assert_eq!(low_mask(0), 0);
        assert_eq!(low_mask(1), 0b1);
        assert_eq!(low_mask(3), 0b111);
        assert_eq!(low_mask(7), 0x7f);
        assert_eq!(low_mask(8), 0xff);
    }
}
