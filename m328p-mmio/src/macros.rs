/// Declares register aliases, each with an optional module of bit positions.
///
/// ```ignore
/// registers! {
///     /// Timer/Counter 0 Control Register B
///     TCCR0B = 0x45 { CS00 = 0, CS01 = 1, CS02 = 2, WGM02 = 3 };
///     TCNT0 = 0x46;
/// }
/// ```
///
/// expands to `pub type TCCR0B = Mmio<0x45>`, a module `tccr0b` with a `u8` constant per bit, and
/// `pub type TCNT0 = Mmio<0x46>`.
macro_rules! registers {
    ($(
        $(#[$attr:meta])*
        $name:ident = $address:literal $({
            $($bit:ident = $position:literal),+ $(,)?
        })?;
    )*) => {
        $(
            $(#[$attr])*
            pub type $name = $crate::register::Mmio<$address>;

            $(
                ::paste::paste! {
                    #[doc = concat!("Bit positions in [`", stringify!($name), "`].")]
                    pub mod [<$name:lower>] {
                        $(pub const $bit: u8 = $position;)+

                        const _: () = {
                            $(assert!($bit < 8, concat!(stringify!($bit), " is not a bit position"));)+
                        };
                    }
                }
            )?
        )*
    };
}
