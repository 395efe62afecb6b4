//! Convenience re-exports.

#[doc(no_inline)]
pub use bitint::prelude::*;

#[doc(no_inline)]
pub use crate::{
    field_enum, interrupt_handler, uninterruptible, Atomic, Bit, BitGroup, FieldValue,
    InterruptControl, RawField, Register, Split, Uninterruptible,
};
