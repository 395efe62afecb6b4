//! The ATmega328P interrupt vector table and handler binding.
//!
//! The toolchain places the handler for vector `N` from the symbol `__vector_N`. Handlers declared
//! with [`interrupt_handler!`](crate::interrupt_handler) export that symbol on AVR targets.
//! Populating the table itself is up to the linker and the runtime.

use seq_macro::seq;
use snafu::OptionExt;

use crate::error::{Error, InvalidVectorSnafu};

/// An interrupt vector slot, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Vector {
    Reset = 0,
    Int0 = 1,
    Int1 = 2,
    PcInt0 = 3,
    PcInt1 = 4,
    PcInt2 = 5,
    Watchdog = 6,
    Timer2CompareA = 7,
    Timer2CompareB = 8,
    Timer2Overflow = 9,
    Timer1Capture = 10,
    Timer1CompareA = 11,
    Timer1CompareB = 12,
    Timer1Overflow = 13,
    Timer0CompareA = 14,
    Timer0CompareB = 15,
    Timer0Overflow = 16,
    SpiTransferComplete = 17,
    UsartRx = 18,
    UsartDataRegisterEmpty = 19,
    UsartTx = 20,
    Adc = 21,
    EepromReady = 22,
    AnalogComparator = 23,
    Twi = 24,
    SpmReady = 25,
}

seq!(N in 0..26 {
    const SYMBOLS: [&str; Vector::COUNT] = [#(concat!("__vector_", N),)*];
});

impl Vector {
    pub const COUNT: usize = 26;

    /// Every vector, indexed by its position in the table.
    pub const ALL: [Vector; Self::COUNT] = [
        Self::Reset,
        Self::Int0,
        Self::Int1,
        Self::PcInt0,
        Self::PcInt1,
        Self::PcInt2,
        Self::Watchdog,
        Self::Timer2CompareA,
        Self::Timer2CompareB,
        Self::Timer2Overflow,
        Self::Timer1Capture,
        Self::Timer1CompareA,
        Self::Timer1CompareB,
        Self::Timer1Overflow,
        Self::Timer0CompareA,
        Self::Timer0CompareB,
        Self::Timer0Overflow,
        Self::SpiTransferComplete,
        Self::UsartRx,
        Self::UsartDataRegisterEmpty,
        Self::UsartTx,
        Self::Adc,
        Self::EepromReady,
        Self::AnalogComparator,
        Self::Twi,
        Self::SpmReady,
    ];

    /// The vector's position in the table.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The symbol the toolchain expects the vector's handler under.
    pub const fn symbol(self) -> &'static str {
        SYMBOLS[self as usize]
    }
}

impl TryFrom<u8> for Vector {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self, Error> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .context(InvalidVectorSnafu { index })
    }
}

/// Declares an interrupt handler for a [`Vector`](crate::vector::Vector).
///
/// The handler is an ordinary function taking an [`Uninterruptible`](crate::Uninterruptible)
/// token, since the hardware clears the global interrupt flag on entry. It can be called directly,
/// which is how host tests exercise it. On AVR targets the macro also emits an
/// `extern "avr-interrupt"` function exported as the vector's `__vector_N` symbol, so the crate
/// using it needs `#![feature(abi_avr_interrupt)]`.
///
/// The macro also declares a constant naming the bound vector, e.g. `ON_OVERFLOW_VECTOR`.
///
/// ```
/// use m328p_mmio::interrupt_handler;
/// use m328p_mmio::vector::Vector;
///
/// interrupt_handler!(Timer0Overflow, fn on_overflow(_u) {
///     // ...
/// });
///
/// assert_eq!(ON_OVERFLOW_VECTOR, Vector::Timer0Overflow);
/// assert_eq!(ON_OVERFLOW_VECTOR.symbol(), "__vector_16");
/// ```
///
/// The reset vector is the program entry point and cannot be bound:
///
/// ```compile_fail
/// use m328p_mmio::interrupt_handler;
///
/// interrupt_handler!(Reset, fn on_reset(_u) {});
/// ```
#[macro_export]
macro_rules! interrupt_handler {
    (Int0, $($rest:tt)*) => { $crate::interrupt_handler!(@bind Int0 1 "__vector_1", $($rest)*); };
    (Int1, $($rest:tt)*) => { $crate::interrupt_handler!(@bind Int1 2 "__vector_2", $($rest)*); };
    (PcInt0, $($rest:tt)*) => { $crate::interrupt_handler!(@bind PcInt0 3 "__vector_3", $($rest)*); };
    (PcInt1, $($rest:tt)*) => { $crate::interrupt_handler!(@bind PcInt1 4 "__vector_4", $($rest)*); };
    (PcInt2, $($rest:tt)*) => { $crate::interrupt_handler!(@bind PcInt2 5 "__vector_5", $($rest)*); };
    (Watchdog, $($rest:tt)*) => {
        $crate::interrupt_handler!(@bind Watchdog 6 "__vector_6", $($rest)*);
    };
    (Timer2CompareA, $($rest:tt)*) => {
        $crate::interrupt_handler!(@bind Timer2CompareA 7 "__vector_7", $($rest)*);
    };
    (Timer2CompareB, $($rest:tt)*) => {
        $crate::interrupt_handler!(@bind Timer2CompareB 8 "__vector_8", $($rest)*);
    };
    (Timer2Overflow, $($rest:tt)*) => {
        $crate::interrupt_handler!(@bind Timer2Overflow 9 "__vector_9", $($rest)*);
    };
    (Timer1Capture, $($rest:tt)*) => {
        $crate::interrupt_handler!(@bind Timer1Capture 10 "__vector_10", $($rest)*);
    };
    (Timer1CompareA, $($rest:tt)*) => {
        $crate::interrupt_handler!(@bind Timer1CompareA 11 "__vector_11", $($rest)*);
    };
    (Timer1CompareB, $($rest:tt)*) => {
        $crate::interrupt_handler!(@bind Timer1CompareB 12 "__vector_12", $($rest)*);
    };
    (Timer1Overflow, $($rest:tt)*) => {
        $crate::interrupt_handler!(@bind Timer1Overflow 13 "__vector_13", $($rest)*);
    };
    (Timer0CompareA, $($rest:tt)*) => {
        $crate::interrupt_handler!(@bind Timer0CompareA 14 "__vector_14", $($rest)*);
    };
    (Timer0CompareB, $($rest:tt)*) => {
        $crate::interrupt_handler!(@bind Timer0CompareB 15 "__vector_15", $($rest)*);
    };
    (Timer0Overflow, $($rest:tt)*) => {
        $crate::interrupt_handler!(@bind Timer0Overflow 16 "__vector_16", $($rest)*);
    };
    (SpiTransferComplete, $($rest:tt)*) => {
        $crate::interrupt_handler!(@bind SpiTransferComplete 17 "__vector_17", $($rest)*);
    };
    (UsartRx, $($rest:tt)*) => {
        $crate::interrupt_handler!(@bind UsartRx 18 "__vector_18", $($rest)*);
    };
    (UsartDataRegisterEmpty, $($rest:tt)*) => {
        $crate::interrupt_handler!(@bind UsartDataRegisterEmpty 19 "__vector_19", $($rest)*);
    };
    (UsartTx, $($rest:tt)*) => {
        $crate::interrupt_handler!(@bind UsartTx 20 "__vector_20", $($rest)*);
    };
    (Adc, $($rest:tt)*) => { $crate::interrupt_handler!(@bind Adc 21 "__vector_21", $($rest)*); };
    (EepromReady, $($rest:tt)*) => {
        $crate::interrupt_handler!(@bind EepromReady 22 "__vector_22", $($rest)*);
    };
    (AnalogComparator, $($rest:tt)*) => {
        $crate::interrupt_handler!(@bind AnalogComparator 23 "__vector_23", $($rest)*);
    };
    (Twi, $($rest:tt)*) => { $crate::interrupt_handler!(@bind Twi 24 "__vector_24", $($rest)*); };
    (SpmReady, $($rest:tt)*) => {
        $crate::interrupt_handler!(@bind SpmReady 25 "__vector_25", $($rest)*);
    };

    (
        @bind $vector:ident $index:literal $symbol:literal,
        $(#[$attr:meta])*
        $vis:vis fn $name:ident($u:ident) $body:block
    ) => {
        $(#[$attr])*
        $vis fn $name($u: $crate::Uninterruptible) $body

        $crate::__private::paste! {
            $vis const [<$name:upper _VECTOR>]: $crate::vector::Vector =
                $crate::vector::Vector::$vector;

            const _: () = assert!(
                $crate::vector::Vector::$vector.index() == $index,
                concat!("vector table out of sync for ", stringify!($vector)),
            );

            #[cfg(target_arch = "avr")]
            #[doc(hidden)]
            #[export_name = $symbol]
            pub unsafe extern "avr-interrupt" fn [<__ $name _trampoline>]() {
                // SAFETY: The hardware cleared the global interrupt flag on entry, and it stays
                // clear until `reti`.
                $name(unsafe { $crate::Uninterruptible::new_unchecked() })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::Vector;
    use crate::error::Error;

    #[test]
    fn test_table_order() {
        for (index, vector) in Vector::ALL.iter().enumerate() {
            assert_eq!(usize::from(vector.index()), index);
        }
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Vector::Reset.symbol(), "__vector_0");
        assert_eq!(Vector::Int0.symbol(), "__vector_1");
        assert_eq!(Vector::Timer0Overflow.symbol(), "__vector_16");
        assert_eq!(Vector::UsartDataRegisterEmpty.symbol(), "__vector_19");
        assert_eq!(Vector::SpmReady.symbol(), "__vector_25");
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Vector::try_from(0), Ok(Vector::Reset));
        assert_eq!(Vector::try_from(18), Ok(Vector::UsartRx));
        assert_eq!(Vector::try_from(26), Err(Error::InvalidVector { index: 26 }));
        assert_eq!(Vector::try_from(255), Err(Error::InvalidVector { index: 255 }));
    }
}
