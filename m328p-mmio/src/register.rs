use core::ptr::{read_volatile, write_volatile};

use crate::atomic::Uninterruptible;

/// First data-space address of the I/O registers.
pub(crate) const IO_START: usize = 0x20;

/// Last data-space address of the extended I/O registers.
pub(crate) const IO_END: usize = 0xff;

/// An 8-bit register.
///
/// A register is process-wide hardware state, so it is modeled as a type rather than a value.
/// Implementations must perform exactly one access per call and must not cache, merge, or elide
/// accesses.
pub trait Register {
    /// Loads the register.
    fn read() -> u8;

    /// Stores the register.
    fn write(value: u8);

    /// Loads the register, applies `f`, and stores the result.
    ///
    /// The token proves that no interrupt handler can touch the register between the load and
    /// the store.
    #[inline(always)]
    fn modify(u: Uninterruptible, f: impl FnOnce(u8) -> u8) {
        let _ = u;
        Self::write(f(Self::read()));
    }
}

/// The memory-mapped register at data-space address `ADDR`.
///
/// `ADDR` must lie in the I/O or extended I/O space (`0x20..=0xff`). Any other address is
/// rejected at build time.
///
/// ```compile_fail
/// use m328p_mmio::{Mmio, Register};
///
/// // SRAM starts at 0x100.
/// Mmio::<0x100>::write(0);
/// ```
pub struct Mmio<const ADDR: usize> {
    _private: (),
}

impl<const ADDR: usize> Mmio<ADDR> {
    /// The register's data-space address.
    pub const ADDRESS: usize = {
        assert!(
            ADDR >= IO_START && ADDR <= IO_END,
            "register address outside of the I/O space",
        );
        ADDR
    };

    const PTR: *mut u8 = Self::ADDRESS as *mut u8;
}

impl<const ADDR: usize> Register for Mmio<ADDR> {
    #[inline(always)]
    fn read() -> u8 {
        // SAFETY: The address is a valid I/O register, checked when `PTR` is evaluated.
        unsafe { read_volatile(Self::PTR) }
    }

    #[inline(always)]
    fn write(value: u8) {
        // SAFETY: The address is a valid I/O register, checked when `PTR` is evaluated.
        unsafe { write_volatile(Self::PTR, value) }
    }
}
