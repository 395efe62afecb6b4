use bitint::prelude::*;
use seq_macro::seq;

/// A value that can be stored in a register field.
///
/// Every bit pattern of [`Bits`](Self::Bits) maps to a value, so reading a field never fails.
/// Field enums declared with [`field_enum!`](crate::field_enum) uphold this by listing every
/// pattern, reserved ones included.
pub trait FieldValue: Copy {
    /// The unsigned integer type holding the value's bit pattern. Its width is the value's width.
    type Bits: UBitint<Primitive = u8>;

    /// The value's width.
    const BITS: u8 = <Self::Bits as UBitint>::BITS as u8;

    fn from_bits(bits: Self::Bits) -> Self;

    fn to_bits(self) -> Self::Bits;
}

impl FieldValue for bool {
    type Bits = U1;

    #[inline(always)]
    fn from_bits(bits: U1) -> Self {
        bits.into()
    }

    #[inline(always)]
    fn to_bits(self) -> U1 {
        self.into()
    }
}

impl FieldValue for u8 {
    type Bits = U8;

    #[inline(always)]
    fn from_bits(bits: U8) -> Self {
        bits.to_primitive()
    }

    #[inline(always)]
    fn to_bits(self) -> U8 {
        U8::new_masked(self)
    }
}

seq!(N in 1..=8 {
    impl FieldValue for U~N {
        type Bits = Self;

        #[inline(always)]
        fn from_bits(bits: Self) -> Self {
            bits
        }

        #[inline(always)]
        fn to_bits(self) -> Self {
            self
        }
    }
});

/// Declares a fieldless enum usable as a [`FieldValue`].
///
/// The enum must name exactly one variant for every bit pattern of its width, with explicit
/// discriminants. Patterns the hardware reserves get a variant of their own. Anything else is
/// rejected at build time.
///
/// The enum also gets `const` conversions named after its width, e.g. `from_u3` and `as_u3`.
///
/// ```
/// use m328p_mmio::field_enum;
/// use m328p_mmio::prelude::*;
///
/// field_enum! {
///     pub enum Parity: U2 {
///         Disabled = 0b00,
///         Reserved = 0b01,
///         Even = 0b10,
///         Odd = 0b11,
///     }
/// }
///
/// assert_eq!(Parity::from_u2(U2::new_masked(0b10)), Parity::Even);
/// assert_eq!(Parity::Odd.as_u2(), U2::new_masked(0b11));
/// ```
///
/// Leaving out a pattern does not compile:
///
/// ```compile_fail
/// use m328p_mmio::field_enum;
///
/// field_enum! {
///     pub enum Parity: U2 {
///         Disabled = 0b00,
///         Even = 0b10,
///         Odd = 0b11,
///     }
/// }
/// ```
#[macro_export]
macro_rules! field_enum {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident: $bits:ident {
            $(
                $(#[$variant_attr:meta])*
                $variant:ident = $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$variant_attr])*
                $variant = $value,
            )+
        }

        const _: () = {
            const MASK: u8 = <$crate::__private::bitint::$bits
                as $crate::__private::UBitint>::MASK;
            const BITS: u32 = <$crate::__private::bitint::$bits
                as $crate::__private::UBitint>::BITS;
            $(
                assert!(
                    ($name::$variant as u8) & !MASK == 0,
                    concat!(
                        "discriminant of ",
                        stringify!($name),
                        "::",
                        stringify!($variant),
                        " does not fit in ",
                        stringify!($bits),
                    ),
                );
            )+
            // Discriminants are distinct and in range, so a full count covers every pattern.
            assert!(
                [$(stringify!($variant)),+].len() == 1 << BITS,
                concat!(
                    stringify!($name),
                    " must have one variant for every ",
                    stringify!($bits),
                    " bit pattern",
                ),
            );
        };

        $crate::__private::paste! {
            impl $name {
                #[inline(always)]
                pub const fn [<from_ $bits:lower>](
                    value: $crate::__private::bitint::$bits,
                ) -> Self {
                    // SAFETY: The enum is `repr(u8)` and has a variant for every value in range,
                    // which is checked above.
                    unsafe { ::core::mem::transmute::<u8, Self>(value.to_primitive()) }
                }

                #[inline(always)]
                pub const fn [<as_ $bits:lower>](self) -> $crate::__private::bitint::$bits {
                    $crate::__private::bitint::$bits::new_masked(self as u8)
                }
            }

            impl $crate::FieldValue for $name {
                type Bits = $crate::__private::bitint::$bits;

                #[inline(always)]
                fn from_bits(bits: Self::Bits) -> Self {
                    Self::[<from_ $bits:lower>](bits)
                }

                #[inline(always)]
                fn to_bits(self) -> Self::Bits {
                    self.[<as_ $bits:lower>]()
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use bitint::prelude::*;
    use quickcheck_macros::quickcheck;

    use super::FieldValue;

    field_enum! {
        enum Mode: U2 {
            Normal = 0b00,
            PhaseCorrect = 0b01,
            Ctc = 0b10,
            Fast = 0b11,
        }
    }

    #[test]
    fn test_bool() {
        assert!(!bool::from_bits(U1::new_masked(0)));
        assert!(bool::from_bits(U1::new_masked(1)));
        assert_eq!(true.to_bits(), U1::new_masked(1));
    }

    #[test]
    fn test_widths() {
        assert_eq!(<bool as FieldValue>::BITS, 1);
        assert_eq!(<u8 as FieldValue>::BITS, 8);
        assert_eq!(<U5 as FieldValue>::BITS, 5);
        assert_eq!(<Mode as FieldValue>::BITS, 2);
        assert_eq!(Into::<u8>::into(Mode::Ctc.to_bits()), 0b10);
    }

    #[test]
    fn test_enum_conversions() {
        assert_eq!(Mode::from_u2(U2::new_masked(0b10)), Mode::Ctc);
        assert_eq!(Mode::Fast.as_u2(), U2::new_masked(0b11));
        assert_eq!(Mode::PhaseCorrect.to_bits(), U2::new_masked(0b01));
        assert_eq!(Mode::from_bits(U2::new_masked(0)), Mode::Normal);
    }

    #[quickcheck]
    fn enum_bits_preserved(raw: u8) -> bool {
        let bits = U2::new_masked(raw);
        Mode::from_bits(bits).to_bits() == bits
    }

    #[quickcheck]
    fn u8_bits_preserved(value: u8) -> bool {
        u8::from_bits(value.to_bits()) == value
    }
}
