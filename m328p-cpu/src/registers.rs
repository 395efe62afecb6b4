pub mod sreg;

pub use sreg::StatusRegister;
