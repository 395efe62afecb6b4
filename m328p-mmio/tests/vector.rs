use m328p_cpu::sim_interrupts;
use m328p_mmio::prelude::*;
use m328p_mmio::sim_register;
use m328p_mmio::vector::Vector;

sim_register!(TIFR = 0b0000_0001, WriteOneToClear);
sim_register!(TICKS);
sim_register!(UDR);

interrupt_handler!(Timer0Overflow, fn on_overflow(u) {
    TICKS::modify(u, |ticks| ticks.wrapping_add(1));
    Bit::<TIFR, 0>::clear_flag();
});

interrupt_handler!(
    UsartDataRegisterEmpty,
    /// Sends a single byte.
    pub fn on_data_register_empty(_u) {
        UDR::write(b'!');
    }
);

sim_interrupts!(Irq);

#[test]
fn test_handler_runs_on_host() {
    Irq::sim().set_enabled(true);
    uninterruptible::<Irq, _>(on_overflow);
    uninterruptible::<Irq, _>(on_overflow);

    assert_eq!(TICKS::sim().peek(), 2);
    assert_eq!(TIFR::sim().peek(), 0);
    assert!(Irq::is_enabled());
}

#[test]
fn test_bound_vectors() {
    assert_eq!(ON_OVERFLOW_VECTOR, Vector::Timer0Overflow);
    assert_eq!(ON_OVERFLOW_VECTOR.index(), 16);
    assert_eq!(ON_DATA_REGISTER_EMPTY_VECTOR.symbol(), "__vector_19");
}

#[test]
fn test_public_handler() {
    sim_interrupts!(Local);
    uninterruptible::<Local, _>(on_data_register_empty);
    assert_eq!(UDR::sim().peek(), b'!');
}
