#[cfg(target_arch = "avr")]
use core::arch::asm;

#[cfg(target_arch = "avr")]
use bitint::U8;
use mvbitfield::bitfield;

/// Address of `SREG` in the I/O space, as used by the `in` and `out` instructions.
pub const SREG_IO_ADDRESS: u8 = 0x3f;

/// Address of `SREG` in the data space.
pub const SREG_ADDRESS: usize = SREG_IO_ADDRESS as usize + 0x20;

bitfield! {
    /// A snapshot of the AVR status register.
    #[lsb_first]
    pub struct StatusRegister: 8 {
        // C: the last arithmetic or logic operation produced a carry.
        pub carry: 1 as bool,
        // Z: the last arithmetic or logic operation produced zero.
        pub zero_result: 1 as bool,
        // N: the last result was negative.
        pub negative: 1 as bool,
        // V: the last operation overflowed in two's complement.
        pub overflow: 1 as bool,
        // S: `N ^ V`.
        pub sign: 1 as bool,
        // H: the last operation produced a half carry.
        pub half_carry: 1 as bool,
        // T: the bit copy storage used by `bld` and `bst`.
        pub bit_copy: 1 as bool,
        // I: interrupts are globally enabled.
        pub global_interrupt_enable: 1 as bool,
    }
}

#[cfg(target_arch = "avr")]
#[inline(always)]
pub fn read_sreg() -> StatusRegister {
    let result: u8;
    unsafe {
        asm!(
            "in {r}, {sreg}",
            r = out(reg) result,
            sreg = const SREG_IO_ADDRESS,
            options(nomem, preserves_flags, nostack),
        );
    }
    StatusRegister::from(U8::from_primitive(result))
}
