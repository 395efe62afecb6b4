use core::marker::PhantomData;

use m328p_cpu::interrupts::InterruptControl;

/// Evidence that the `I` flag in `SREG` is clear for as long as `'a` lives.
///
/// Nothing else runs on an ATmega328P while `I` is clear. The hardware clears it on entry to an
/// interrupt handler and `reti` sets it again on the way out, so a handler body holds the flag
/// just like code inside an [`Atomic`] guard does. Register read-modify-write sequences that take
/// a token therefore cannot be torn by a handler writing the same register.
///
/// Tokens come from [`Atomic::uninterruptible`], from [`uninterruptible`], and from the handler
/// bodies declared with [`interrupt_handler!`](crate::interrupt_handler).
#[derive(Clone, Copy)]
pub struct Uninterruptible<'a> {
    _flag_clear: PhantomData<&'a ()>,
}

impl<'a> Uninterruptible<'a> {
    /// # Safety
    ///
    /// The `I` flag must stay clear while `'a` is live. Nothing may execute `sei` in that time,
    /// including handlers that re-enable interrupts to allow nesting.
    pub unsafe fn new_unchecked() -> Self {
        Self {
            _flag_clear: PhantomData,
        }
    }
}

/// A critical section guard.
///
/// Creating an `Atomic` saves the global interrupt flag and disables interrupts. Dropping it
/// restores the flag to exactly the saved value, on every exit path. Inside an interrupt handler,
/// or inside another guard, interrupts are already disabled and stay disabled after the drop.
///
/// Nested guards save and restore independently.
///
/// ```
/// use m328p_mmio::Atomic;
/// use m328p_cpu::interrupts::InterruptControl;
/// use m328p_cpu::sim_interrupts;
///
/// sim_interrupts!(Irq);
/// Irq::sim().set_enabled(true);
///
/// {
///     let _atomic = Atomic::<Irq>::new();
///     assert!(!Irq::is_enabled());
/// }
/// assert!(Irq::is_enabled());
/// ```
#[must_use = "interrupts are restored as soon as the guard is dropped"]
pub struct Atomic<I: InterruptControl> {
    was_enabled: bool,
    // The guard must be dropped in the context that created it.
    _not_send: PhantomData<*const I>,
}

impl<I: InterruptControl> Atomic<I> {
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            was_enabled: I::disable(),
            _not_send: PhantomData,
        }
    }

    /// Returns whether interrupts were enabled when the guard was created.
    pub fn was_enabled(&self) -> bool {
        self.was_enabled
    }

    /// Returns a token that lives no longer than the guard.
    #[inline(always)]
    pub fn uninterruptible(&self) -> Uninterruptible<'_> {
        // SAFETY: Interrupts stay disabled until `self` is dropped.
        unsafe { Uninterruptible::new_unchecked() }
    }
}

impl<I: InterruptControl> Default for Atomic<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: InterruptControl> Drop for Atomic<I> {
    #[inline(always)]
    fn drop(&mut self) {
        // SAFETY: Any token handed out by this guard borrowed it and is dead by now.
        unsafe { I::restore(self.was_enabled) };
    }
}

/// The critical section guard for the CPU core.
#[cfg(target_arch = "avr")]
pub type CpuAtomic = Atomic<m328p_cpu::interrupts::Cpu>;

/// Runs a function uninterruptibly.
pub fn uninterruptible<I: InterruptControl, T>(f: impl FnOnce(Uninterruptible) -> T) -> T {
    let atomic = Atomic::<I>::new();
    f(atomic.uninterruptible())
}

#[cfg(test)]
mod tests {
    use m328p_cpu::interrupts::InterruptControl;
    use m328p_cpu::sim_interrupts;

    use super::{uninterruptible, Atomic};

    sim_interrupts!(Irq);

    #[test]
    fn test_uninterruptible_returns_value() {
        Irq::sim().set_enabled(true);
        let value = uninterruptible::<Irq, _>(|_u| {
            assert!(!Irq::is_enabled());
            7
        });
        assert_eq!(value, 7);
        assert!(Irq::is_enabled());
    }

    #[test]
    fn test_was_enabled() {
        sim_interrupts!(Local);
        Local::sim().set_enabled(true);
        let outer = Atomic::<Local>::new();
        let inner = Atomic::<Local>::new();
        assert!(outer.was_enabled());
        assert!(!inner.was_enabled());
        drop(inner);
        drop(outer);
        assert!(Local::is_enabled());
    }
}
