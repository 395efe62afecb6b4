//! Simulated registers for exercising register access on the host.
//!
//! Each register declared with [`sim_register!`](crate::sim_register) is a distinct type backed by
//! its own static [`SimCell`], so tests running in parallel do not observe each other. Loads and
//! stores made through the [`Register`](crate::Register) trait are counted. Every store also draws
//! a number from a process-wide sequence, which orders stores across registers.

use core::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

use log::trace;

static STORE_SEQUENCE: AtomicUsize = AtomicUsize::new(0);

/// How a simulated register reacts to stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimKind {
    /// Stores replace the contents.
    Plain,
    /// Stores clear the bits written as one and leave the others alone, like the interrupt flag
    /// registers.
    WriteOneToClear,
}

/// The state behind one simulated register.
pub struct SimCell {
    name: &'static str,
    kind: SimKind,
    value: AtomicU8,
    loads: AtomicUsize,
    stores: AtomicUsize,
    last_store: AtomicUsize,
}

impl SimCell {
    pub const fn new(name: &'static str, reset: u8, kind: SimKind) -> Self {
        Self {
            name,
            kind,
            value: AtomicU8::new(reset),
            loads: AtomicUsize::new(0),
            stores: AtomicUsize::new(0),
            last_store: AtomicUsize::new(0),
        }
    }

    /// A counted load.
    pub fn load(&self) -> u8 {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.value.load(Ordering::SeqCst)
    }

    /// A counted store.
    pub fn store(&self, value: u8) {
        self.stores.fetch_add(1, Ordering::SeqCst);
        let sequence = STORE_SEQUENCE.fetch_add(1, Ordering::SeqCst) + 1;
        self.last_store.store(sequence, Ordering::SeqCst);
        let old = match self.kind {
            SimKind::Plain => self.value.swap(value, Ordering::SeqCst),
            SimKind::WriteOneToClear => self.value.fetch_and(!value, Ordering::SeqCst),
        };
        trace!(
            "{}: store {value:#010b} ({old:#010b} -> {:#010b}, #{sequence})",
            self.name,
            self.peek(),
        );
    }

    /// Returns the contents without counting a load.
    pub fn peek(&self) -> u8 {
        self.value.load(Ordering::SeqCst)
    }

    /// Replaces the contents without counting a store, as the hardware side would.
    pub fn poke(&self, value: u8) {
        trace!("{}: poke {value:#010b}", self.name);
        self.value.store(value, Ordering::SeqCst);
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn stores(&self) -> usize {
        self.stores.load(Ordering::SeqCst)
    }

    /// The sequence number of the most recent store, if any.
    pub fn last_store(&self) -> Option<usize> {
        match self.last_store.load(Ordering::SeqCst) {
            0 => None,
            sequence => Some(sequence),
        }
    }

    /// Zeroes the load and store counters. The contents are kept.
    pub fn reset_counts(&self) {
        self.loads.store(0, Ordering::SeqCst);
        self.stores.store(0, Ordering::SeqCst);
        self.last_store.store(0, Ordering::SeqCst);
    }
}

/// Declares a simulated register type implementing [`Register`](crate::Register).
///
/// The register starts out holding the given reset value, or zero. Pass `WriteOneToClear` after
/// a comma to model a flag register.
///
/// ```
/// use m328p_mmio::{sim_register, Bit};
///
/// sim_register!(FLAGS = 0b0000_0111, WriteOneToClear);
///
/// Bit::<FLAGS, 1>::clear_flag();
/// assert_eq!(FLAGS::sim().peek(), 0b0000_0101);
/// assert_eq!(FLAGS::sim().loads(), 0);
/// ```
#[macro_export]
macro_rules! sim_register {
    (@reset) => {
        0
    };
    (@reset $reset:expr) => {
        $reset
    };
    (@kind) => {
        $crate::sim::SimKind::Plain
    };
    (@kind $kind:ident) => {
        $crate::sim::SimKind::$kind
    };
    ($(#[$attr:meta])* $vis:vis $name:ident $(= $reset:expr)? $(, $kind:ident)?) => {
        $(#[$attr])*
        #[allow(non_camel_case_types)]
        $vis enum $name {}

        impl $name {
            pub fn sim() -> &'static $crate::sim::SimCell {
                static CELL: $crate::sim::SimCell = $crate::sim::SimCell::new(
                    stringify!($name),
                    $crate::sim_register!(@reset $($reset)?),
                    $crate::sim_register!(@kind $($kind)?),
                );
                &CELL
            }
        }

        impl $crate::Register for $name {
            fn read() -> u8 {
                Self::sim().load()
            }

            fn write(value: u8) {
                Self::sim().store(value)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::Register;

    sim_register!(PLAIN = 0x5a);
    sim_register!(FLAGS = 0b1111_0000, WriteOneToClear);
    sim_register!(FIRST);
    sim_register!(SECOND);

    #[test]
    fn test_counts() {
        assert_eq!(PLAIN::sim().peek(), 0x5a);
        assert_eq!(PLAIN::read(), 0x5a);
        PLAIN::write(0xa5);
        assert_eq!(PLAIN::sim().peek(), 0xa5);
        assert_eq!(PLAIN::sim().loads(), 1);
        assert_eq!(PLAIN::sim().stores(), 1);

        PLAIN::sim().poke(0);
        assert_eq!(PLAIN::sim().stores(), 1);
        PLAIN::sim().reset_counts();
        assert_eq!(PLAIN::sim().loads(), 0);
        assert_eq!(PLAIN::sim().last_store(), None);
    }

    #[test]
    fn test_write_one_to_clear() {
        FLAGS::write(0b0011_0000);
        assert_eq!(FLAGS::sim().peek(), 0b1100_0000);
        FLAGS::write(0);
        assert_eq!(FLAGS::sim().peek(), 0b1100_0000);
    }

    #[test]
    fn test_store_order() {
        assert_eq!(FIRST::sim().last_store(), None);
        FIRST::write(1);
        SECOND::write(2);
        assert!(FIRST::sim().last_store() < SECOND::sim().last_store());
    }
}
