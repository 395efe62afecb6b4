#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_arch = "avr", feature(asm_experimental_arch))]

pub mod interrupts;
pub mod registers;
#[cfg(not(target_arch = "avr"))]
pub mod sim;
