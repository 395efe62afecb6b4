//! A simulated global interrupt flag for exercising interrupt-sensitive code on the host.
//!
//! Each controller declared with [`sim_interrupts!`](crate::sim_interrupts) owns its own static
//! [`SimFlag`], so tests running in parallel do not observe each other. A controller has at most
//! one bound handler, standing in for the interrupt source under test.
//!
//! Like the hardware after reset, a simulated flag starts out disabled.

use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use log::trace;

/// The state behind one simulated interrupt controller.
pub struct SimFlag {
    name: &'static str,
    handler: fn(),
    enabled: AtomicBool,
    pending: AtomicBool,
    saves: AtomicUsize,
    restores: AtomicUsize,
    dispatches: AtomicUsize,
}

impl SimFlag {
    pub const fn new(name: &'static str, handler: fn()) -> Self {
        Self {
            name,
            handler,
            enabled: AtomicBool::new(false),
            pending: AtomicBool::new(false),
            saves: AtomicUsize::new(0),
            restores: AtomicUsize::new(0),
            dispatches: AtomicUsize::new(0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Emulates `sei` or `cli` issued outside of any critical section. Does not count as a save or
    /// a restore. Enabling delivers a pending interrupt.
    pub fn set_enabled(&self, enabled: bool) {
        trace!("{}: set_enabled({enabled})", self.name);
        self.enabled.store(enabled, Ordering::SeqCst);
        if enabled {
            self.dispatch_pending();
        }
    }

    /// Saves and clears the flag, returning whether it was set.
    pub fn disable(&self) -> bool {
        self.saves.fetch_add(1, Ordering::SeqCst);
        let was_enabled = self.enabled.swap(false, Ordering::SeqCst);
        trace!("{}: disable (was_enabled: {was_enabled})", self.name);
        was_enabled
    }

    /// Sets the flag to exactly `enabled`. Enabling delivers a pending interrupt.
    pub fn restore(&self, enabled: bool) {
        self.restores.fetch_add(1, Ordering::SeqCst);
        trace!("{}: restore({enabled})", self.name);
        self.enabled.store(enabled, Ordering::SeqCst);
        if enabled {
            self.dispatch_pending();
        }
    }

    /// Signals the interrupt source. The handler runs immediately if interrupts are enabled and is
    /// held pending otherwise.
    pub fn raise(&self) {
        if self.is_enabled() {
            self.dispatch();
        } else {
            trace!("{}: raised while disabled, pending", self.name);
            self.pending.store(true, Ordering::SeqCst);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    /// Number of times the flag was saved by [`disable`](Self::disable).
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Number of times the flag was restored by [`restore`](Self::restore).
    pub fn restores(&self) -> usize {
        self.restores.load(Ordering::SeqCst)
    }

    /// Number of times the handler ran.
    pub fn dispatches(&self) -> usize {
        self.dispatches.load(Ordering::SeqCst)
    }

    fn dispatch_pending(&self) {
        if self.pending.swap(false, Ordering::SeqCst) {
            self.dispatch();
        }
    }

    // The hardware clears the flag on entry to a handler and `reti` sets it again.
    fn dispatch(&self) {
        trace!("{}: dispatching handler", self.name);
        self.enabled.store(false, Ordering::SeqCst);
        self.dispatches.fetch_add(1, Ordering::SeqCst);
        (self.handler)();
        self.enabled.store(true, Ordering::SeqCst);
        self.dispatch_pending();
    }
}

/// The handler bound to controllers declared without one.
pub fn no_handler() {}

/// Declares a simulated interrupt controller type implementing
/// [`InterruptControl`](crate::interrupts::InterruptControl).
///
/// ```
/// use m328p_cpu::interrupts::InterruptControl;
/// use m328p_cpu::sim_interrupts;
///
/// fn on_tick() {}
///
/// sim_interrupts!(Tick => on_tick);
///
/// Tick::sim().set_enabled(true);
/// Tick::with_disabled(|| Tick::sim().raise());
/// assert_eq!(Tick::sim().dispatches(), 1);
/// ```
#[macro_export]
macro_rules! sim_interrupts {
    (@handler) => {
        $crate::sim::no_handler
    };
    (@handler $handler:path) => {
        $handler
    };
    ($(#[$attr:meta])* $vis:vis $name:ident $(=> $handler:path)?) => {
        $(#[$attr])*
        $vis enum $name {}

        impl $name {
            pub fn sim() -> &'static $crate::sim::SimFlag {
                static FLAG: $crate::sim::SimFlag = $crate::sim::SimFlag::new(
                    stringify!($name),
                    $crate::sim_interrupts!(@handler $($handler)?),
                );
                &FLAG
            }
        }

        impl $crate::interrupts::InterruptControl for $name {
            fn is_enabled() -> bool {
                Self::sim().is_enabled()
            }

            fn disable() -> bool {
                Self::sim().disable()
            }

            unsafe fn restore(enabled: bool) {
                Self::sim().restore(enabled)
            }
        }
    };
}
