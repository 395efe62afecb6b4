use m328p_cpu::sim_interrupts;
use m328p_mmio::prelude::*;
use m328p_mmio::sim::SimCell;
use m328p_mmio::{sim_register, Error};
use quickcheck_macros::quickcheck;
use seq_macro::seq;

field_enum! {
    pub enum ClockSelect: U3 {
        Stopped = 0b000,
        Div1 = 0b001,
        Div8 = 0b010,
        Div64 = 0b011,
        Div256 = 0b100,
        Div1024 = 0b101,
        ExternalFalling = 0b110,
        ExternalRising = 0b111,
    }
}

#[test]
fn test_write_middle_field() {
    sim_register!(CONTROL = 0b1011_0100);
    type Field = BitGroup<CONTROL, 2, 3, U2>;

    Field::write(U2::new_masked(0b11));
    assert_eq!(CONTROL::sim().peek(), 0b1011_1100);
    assert_eq!(Field::read(), U2::new_masked(0b11));
}

#[test]
fn test_write_is_one_load_one_store() {
    sim_register!(CONTROL = 0b1111_1111);
    type Field = BitGroup<CONTROL, 4, 6, U3>;

    Field::write(U3::new_masked(0b010));
    assert_eq!(CONTROL::sim().peek(), 0b1010_1111);
    assert_eq!(CONTROL::sim().loads(), 1);
    assert_eq!(CONTROL::sim().stores(), 1);
}

#[test]
fn test_write_raw_truncates() {
    sim_register!(CONTROL = 0b1000_0011);
    type Field = BitGroup<CONTROL, 2, 3, U2>;

    Field::write_raw(0b1111_0110);
    assert_eq!(CONTROL::sim().peek(), 0b1000_1011);
    assert_eq!(Field::read_raw(), 0b10);
}

#[test]
fn test_try_write_raw() {
    sim_register!(CONTROL = 0b0101_0101);
    type Field = BitGroup<CONTROL, 0, 2, U3>;

    assert_eq!(
        Field::try_write_raw(0b1000),
        Err(Error::ValueOutOfRange {
            value: 0b1000,
            width: 3
        }),
    );
    assert_eq!(CONTROL::sim().peek(), 0b0101_0101);
    assert_eq!(CONTROL::sim().stores(), 0);

    assert_eq!(Field::try_write_raw(0b011), Ok(()));
    assert_eq!(CONTROL::sim().peek(), 0b0101_0011);
}

#[test]
fn test_error_display() {
    let error = Error::ValueOutOfRange {
        value: 0x12,
        width: 3,
    };
    assert_eq!(error.to_string(), "value 0x12 does not fit in a 3-bit field");
}

#[test]
fn test_field_enum() {
    sim_register!(TCCR = 0b1100_0000);
    type Clock = BitGroup<TCCR, 0, 2, ClockSelect>;

    assert_eq!(Clock::read(), ClockSelect::Stopped);
    Clock::write(ClockSelect::Div64);
    assert_eq!(TCCR::sim().peek(), 0b1100_0011);
    assert_eq!(Clock::read(), ClockSelect::Div64);

    TCCR::sim().poke(0b0000_0111);
    assert_eq!(Clock::read(), ClockSelect::ExternalRising);
}

#[test]
fn test_bool_field() {
    sim_register!(CONTROL);
    type Enable = BitGroup<CONTROL, 6, 6, bool>;

    Enable::write(true);
    assert_eq!(CONTROL::sim().peek(), 0b0100_0000);
    assert!(Enable::read());
}

#[test]
fn test_narrow_value_in_wide_range() {
    sim_register!(CONTROL = 0b1111_1111);
    type Field = BitGroup<CONTROL, 2, 5, U2>;

    Field::write(U2::new_masked(0b01));
    // The range is cleared in full, the value fills its low end.
    assert_eq!(CONTROL::sim().peek(), 0b1100_0111);
}

#[test]
fn test_modify() {
    sim_register!(CONTROL = 0b0000_1000);
    sim_interrupts!(Irq);
    type Counter = BitGroup<CONTROL, 2, 4, U3>;

    Irq::sim().set_enabled(true);
    uninterruptible::<Irq, _>(|u| {
        Counter::modify(u, |value| U3::new_masked(value.to_primitive() + 1));
    });
    assert_eq!(Counter::read(), U3::new_masked(0b011));
    assert_eq!(CONTROL::sim().stores(), 1);
    assert!(Irq::is_enabled());
}

#[test]
fn test_full_width() {
    sim_register!(DATA);
    type Whole = BitGroup<DATA, 0, 7, u8>;

    Whole::write(0xa5);
    assert_eq!(DATA::sim().peek(), 0xa5);
    assert_eq!(Whole::read(), 0xa5);
    assert_eq!(Whole::MASK, 0xff);
}

sim_register!(PROPERTY);

#[quickcheck]
fn round_trip_preserves_other_bits(initial: u8, value: u8) -> bool {
    type Field = BitGroup<PROPERTY, 3, 5, U3>;
    let value = U3::new_masked(value);
    PROPERTY::sim().poke(initial);
    Field::write(value);
    Field::read() == value && PROPERTY::sim().peek() & !Field::MASK == initial & !Field::MASK
}

fn check_range<R: Register, const LOW: u8, const HIGH: u8>(cell: &SimCell) {
    let width = HIGH - LOW + 1;
    let value_mask = ((1u16 << width) - 1) as u8;
    let mask = value_mask << LOW;
    assert_eq!(BitGroup::<R, LOW, HIGH, U1>::MASK, mask);
    assert_eq!(<BitGroup<R, LOW, HIGH, U1> as RawField>::WIDTH, width);

    for initial in [0x00, 0xff, 0xa5, 0x5a] {
        for value in 0..=u8::MAX {
            cell.poke(initial);
            BitGroup::<R, LOW, HIGH, U1>::write_raw(value);
            assert_eq!(
                BitGroup::<R, LOW, HIGH, U1>::read_raw(),
                value & value_mask,
                "bits {}..={}, initial {:#x}, value {:#x}",
                LOW,
                HIGH,
                initial,
                value,
            );
            assert_eq!(cell.peek() & !mask, initial & !mask);
        }
    }
}

seq!(LOW in 0..8 {
    sim_register!(RANGE~LOW);

    #[test]
    fn test_ranges_from_bit~LOW() {
        seq!(HIGH in LOW..8 {
            check_range::<RANGE~LOW, LOW, HIGH>(RANGE~LOW::sim());
        });
    }
});
