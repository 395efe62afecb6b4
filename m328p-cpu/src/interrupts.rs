#[cfg(target_arch = "avr")]
use core::arch::asm;
use core::marker::PhantomData;

#[cfg(target_arch = "avr")]
use crate::registers::sreg::read_sreg;

/// Control over the global interrupt enable flag.
///
/// Implemented by [`Cpu`] on AVR targets and by simulated controllers declared with
/// [`sim_interrupts!`](crate::sim_interrupts) on the host.
pub trait InterruptControl {
    /// Returns whether interrupts are currently enabled.
    fn is_enabled() -> bool;

    /// Disables interrupts and returns whether they were enabled.
    fn disable() -> bool;

    /// Sets the global interrupt flag to exactly `enabled`.
    ///
    /// # Safety
    ///
    /// Enabling interrupts while an `Uninterruptible` token is live breaks the token's guarantee.
    unsafe fn restore(enabled: bool);

    /// Invokes a function with interrupts disabled. The previous enabled state is restored when it
    /// returns or unwinds.
    #[inline(always)]
    fn with_disabled<T>(f: impl FnOnce() -> T) -> T {
        let _restore = RestoreOnDrop::<Self> {
            was_enabled: Self::disable(),
            _phantom: PhantomData,
        };
        f()
    }
}

struct RestoreOnDrop<I: InterruptControl + ?Sized> {
    was_enabled: bool,
    _phantom: PhantomData<*const I>,
}

impl<I: InterruptControl + ?Sized> Drop for RestoreOnDrop<I> {
    #[inline(always)]
    fn drop(&mut self) {
        // SAFETY: This restores the state observed on entry, and `f` is no longer running.
        unsafe { I::restore(self.was_enabled) };
    }
}

/// The interrupt controller of the CPU core.
#[cfg(target_arch = "avr")]
pub struct Cpu;

#[cfg(target_arch = "avr")]
impl InterruptControl for Cpu {
    #[inline(always)]
    fn is_enabled() -> bool {
        read_sreg().global_interrupt_enable()
    }

    #[inline(always)]
    fn disable() -> bool {
        disable_interrupts()
    }

    #[inline(always)]
    unsafe fn restore(enabled: bool) {
        if enabled {
            enable_interrupts();
        } else {
            disable_interrupts();
        }
    }
}

/// Disables interrupts and returns whether they were enabled.
#[cfg(target_arch = "avr")]
#[inline(always)]
pub fn disable_interrupts() -> bool {
    let old_sreg = read_sreg();
    // No `nomem`: `cli` must also act as a compiler barrier.
    unsafe { asm!("cli", options(nostack)) };
    old_sreg.global_interrupt_enable()
}

/// Enables interrupts.
///
/// # Safety
///
/// Must not be called while an `Uninterruptible` token is live.
#[cfg(target_arch = "avr")]
#[inline(always)]
pub unsafe fn enable_interrupts() {
    asm!("sei", options(nostack));
}
