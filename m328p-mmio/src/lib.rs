//! Typed access to the 8-bit special function registers of the ATmega328P.
//!
//! Registers are types implementing [`Register`]. Fields inside them are types too:
//!
//! - [`Bit`] is a single flag.
//! - [`BitGroup`] is a contiguous range of bits holding a [`FieldValue`].
//! - [`Split`] is a logical field whose bits are spread over two other fields.
//!
//! Every accessor compiles down to the minimal volatile load and store sequence. Bit positions,
//! ranges, and value widths are checked at build time.
//!
//! Read-modify-write sequences are not atomic with respect to interrupt handlers. Wrap sequences
//! that share a register with a handler in an [`Atomic`] guard, or use the `modify` accessors,
//! which demand an [`Uninterruptible`] token.
//!
//! ```
//! use m328p_mmio::prelude::*;
//! use m328p_mmio::sim_register;
//!
//! sim_register!(CONTROL = 0b1011_0100);
//!
//! type Mode = BitGroup<CONTROL, 2, 3, U2>;
//!
//! Mode::write(U2::new_masked(0b11));
//! assert_eq!(CONTROL::sim().peek(), 0b1011_1100);
//! assert_eq!(Mode::read(), U2::new_masked(0b11));
//! ```

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod macros;

mod atomic;
mod bit;
mod bit_group;
mod error;
mod field;
mod register;
mod split;
mod value;

pub mod prelude;
pub mod registers;
#[cfg(not(target_arch = "avr"))]
pub mod sim;
pub mod vector;

pub use m328p_cpu::interrupts::InterruptControl;

pub use crate::atomic::{uninterruptible, Atomic, Uninterruptible};
#[cfg(target_arch = "avr")]
pub use crate::atomic::CpuAtomic;
pub use crate::bit::Bit;
pub use crate::bit_group::BitGroup;
pub use crate::error::Error;
pub use crate::field::RawField;
pub use crate::register::{Mmio, Register};
pub use crate::split::Split;
pub use crate::value::FieldValue;

// For macro access via `$crate`.
#[doc(hidden)]
pub mod __private {
    pub use bitint;
    pub use bitint::UBitint;
    pub use paste::paste;
}
