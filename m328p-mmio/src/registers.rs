//! The ATmega328P special function registers, at their data-space addresses.
//!
//! Registers with named bits come with a lowercase module of bit positions, e.g.
//! [`tccr0b::CS01`]. Reserved bits have no constant.

registers! {
    /// Port B Input Pins
    PINB = 0x23 {
        PINB0 = 0, PINB1 = 1, PINB2 = 2, PINB3 = 3, PINB4 = 4, PINB5 = 5, PINB6 = 6, PINB7 = 7,
    };
    /// Port B Data Direction Register
    DDRB = 0x24 { DDB0 = 0, DDB1 = 1, DDB2 = 2, DDB3 = 3, DDB4 = 4, DDB5 = 5, DDB6 = 6, DDB7 = 7 };
    /// Port B Data Register
    PORTB = 0x25 {
        PORTB0 = 0, PORTB1 = 1, PORTB2 = 2, PORTB3 = 3,
        PORTB4 = 4, PORTB5 = 5, PORTB6 = 6, PORTB7 = 7,
    };
    /// Port C Input Pins
    PINC = 0x26 { PINC0 = 0, PINC1 = 1, PINC2 = 2, PINC3 = 3, PINC4 = 4, PINC5 = 5, PINC6 = 6 };
    /// Port C Data Direction Register
    DDRC = 0x27 { DDC0 = 0, DDC1 = 1, DDC2 = 2, DDC3 = 3, DDC4 = 4, DDC5 = 5, DDC6 = 6 };
    /// Port C Data Register
    PORTC = 0x28 {
        PORTC0 = 0, PORTC1 = 1, PORTC2 = 2, PORTC3 = 3, PORTC4 = 4, PORTC5 = 5, PORTC6 = 6,
    };
    /// Port D Input Pins
    PIND = 0x29 {
        PIND0 = 0, PIND1 = 1, PIND2 = 2, PIND3 = 3, PIND4 = 4, PIND5 = 5, PIND6 = 6, PIND7 = 7,
    };
    /// Port D Data Direction Register
    DDRD = 0x2a { DDD0 = 0, DDD1 = 1, DDD2 = 2, DDD3 = 3, DDD4 = 4, DDD5 = 5, DDD6 = 6, DDD7 = 7 };
    /// Port D Data Register
    PORTD = 0x2b {
        PORTD0 = 0, PORTD1 = 1, PORTD2 = 2, PORTD3 = 3,
        PORTD4 = 4, PORTD5 = 5, PORTD6 = 6, PORTD7 = 7,
    };

    /// Timer/Counter 0 Interrupt Flag Register
    TIFR0 = 0x35 { TOV0 = 0, OCF0A = 1, OCF0B = 2 };
    /// Timer/Counter 1 Interrupt Flag Register
    TIFR1 = 0x36 { TOV1 = 0, OCF1A = 1, OCF1B = 2, ICF1 = 5 };
    /// Timer/Counter 2 Interrupt Flag Register
    TIFR2 = 0x37 { TOV2 = 0, OCF2A = 1, OCF2B = 2 };
    /// Pin Change Interrupt Flag Register
    PCIFR = 0x3b { PCIF0 = 0, PCIF1 = 1, PCIF2 = 2 };
    /// External Interrupt Flag Register
    EIFR = 0x3c { INTF0 = 0, INTF1 = 1 };
    /// External Interrupt Mask Register
    EIMSK = 0x3d { INT0 = 0, INT1 = 1 };
    /// General Purpose I/O Register 0
    GPIOR0 = 0x3e;

    /// EEPROM Control Register
    EECR = 0x3f { EERE = 0, EEPE = 1, EEMPE = 2, EERIE = 3, EEPM0 = 4, EEPM1 = 5 };
    /// EEPROM Data Register
    EEDR = 0x40;
    /// EEPROM Address Register Low Byte
    EEARL = 0x41;
    /// EEPROM Address Register High Byte
    EEARH = 0x42;

    /// General Timer/Counter Control Register
    GTCCR = 0x43 { PSRSYNC = 0, PSRASY = 1, TSM = 7 };
    /// Timer/Counter 0 Control Register A
    TCCR0A = 0x44 { WGM00 = 0, WGM01 = 1, COM0B0 = 4, COM0B1 = 5, COM0A0 = 6, COM0A1 = 7 };
    /// Timer/Counter 0 Control Register B
    TCCR0B = 0x45 { CS00 = 0, CS01 = 1, CS02 = 2, WGM02 = 3, FOC0B = 6, FOC0A = 7 };
    /// Timer/Counter 0
    TCNT0 = 0x46;
    /// Timer/Counter 0 Output Compare Register A
    OCR0A = 0x47;
    /// Timer/Counter 0 Output Compare Register B
    OCR0B = 0x48;
    /// General Purpose I/O Register 1
    GPIOR1 = 0x4a;
    /// General Purpose I/O Register 2
    GPIOR2 = 0x4b;

    /// SPI Control Register
    SPCR = 0x4c {
        SPR0 = 0, SPR1 = 1, CPHA = 2, CPOL = 3, MSTR = 4, DORD = 5, SPE = 6, SPIE = 7,
    };
    /// SPI Status Register
    SPSR = 0x4d { SPI2X = 0, WCOL = 6, SPIF = 7 };
    /// SPI Data Register
    SPDR = 0x4e;

    /// Analog Comparator Control and Status Register
    ACSR = 0x50 {
        ACIS0 = 0, ACIS1 = 1, ACIC = 2, ACIE = 3, ACI = 4, ACO = 5, ACBG = 6, ACD = 7,
    };
    /// Sleep Mode Control Register
    SMCR = 0x53 { SE = 0, SM0 = 1, SM1 = 2, SM2 = 3 };
    /// MCU Status Register
    MCUSR = 0x54 { PORF = 0, EXTRF = 1, BORF = 2, WDRF = 3 };
    /// MCU Control Register
    MCUCR = 0x55 { IVCE = 0, IVSEL = 1, PUD = 4, BODSE = 5, BODS = 6 };
    /// Store Program Memory Control and Status Register
    SPMCSR = 0x57 {
        SPMEN = 0, PGERS = 1, PGWRT = 2, BLBSET = 3, RWWSRE = 4, SIGRD = 5, RWWSB = 6, SPMIE = 7,
    };
    /// Stack Pointer Low Byte
    SPL = 0x5d;
    /// Stack Pointer High Byte
    SPH = 0x5e;
    /// Status Register
    SREG = 0x5f { C = 0, Z = 1, N = 2, V = 3, S = 4, H = 5, T = 6, I = 7 };

    /// Watchdog Timer Control Register
    WDTCSR = 0x60 {
        WDP0 = 0, WDP1 = 1, WDP2 = 2, WDE = 3, WDCE = 4, WDP3 = 5, WDIE = 6, WDIF = 7,
    };
    /// Clock Prescale Register
    CLKPR = 0x61 { CLKPS0 = 0, CLKPS1 = 1, CLKPS2 = 2, CLKPS3 = 3, CLKPCE = 7 };
    /// Power Reduction Register
    PRR = 0x64 {
        PRADC = 0, PRUSART0 = 1, PRSPI = 2, PRTIM1 = 3, PRTIM0 = 5, PRTIM2 = 6, PRTWI = 7,
    };
    /// Oscillator Calibration Register
    OSCCAL = 0x66;

    /// Pin Change Interrupt Control Register
    PCICR = 0x68 { PCIE0 = 0, PCIE1 = 1, PCIE2 = 2 };
    /// External Interrupt Control Register A
    EICRA = 0x69 { ISC00 = 0, ISC01 = 1, ISC10 = 2, ISC11 = 3 };
    /// Pin Change Mask Register 0
    PCMSK0 = 0x6b {
        PCINT0 = 0, PCINT1 = 1, PCINT2 = 2, PCINT3 = 3,
        PCINT4 = 4, PCINT5 = 5, PCINT6 = 6, PCINT7 = 7,
    };
    /// Pin Change Mask Register 1
    PCMSK1 = 0x6c {
        PCINT8 = 0, PCINT9 = 1, PCINT10 = 2, PCINT11 = 3, PCINT12 = 4, PCINT13 = 5, PCINT14 = 6,
    };
    /// Pin Change Mask Register 2
    PCMSK2 = 0x6d {
        PCINT16 = 0, PCINT17 = 1, PCINT18 = 2, PCINT19 = 3,
        PCINT20 = 4, PCINT21 = 5, PCINT22 = 6, PCINT23 = 7,
    };
    /// Timer/Counter 0 Interrupt Mask Register
    TIMSK0 = 0x6e { TOIE0 = 0, OCIE0A = 1, OCIE0B = 2 };
    /// Timer/Counter 1 Interrupt Mask Register
    TIMSK1 = 0x6f { TOIE1 = 0, OCIE1A = 1, OCIE1B = 2, ICIE1 = 5 };
    /// Timer/Counter 2 Interrupt Mask Register
    TIMSK2 = 0x70 { TOIE2 = 0, OCIE2A = 1, OCIE2B = 2 };

    /// ADC Data Register Low Byte
    ADCL = 0x78;
    /// ADC Data Register High Byte
    ADCH = 0x79;
    /// ADC Control and Status Register A
    ADCSRA = 0x7a {
        ADPS0 = 0, ADPS1 = 1, ADPS2 = 2, ADIE = 3, ADIF = 4, ADATE = 5, ADSC = 6, ADEN = 7,
    };
    /// ADC Control and Status Register B
    ADCSRB = 0x7b { ADTS0 = 0, ADTS1 = 1, ADTS2 = 2, ACME = 6 };
    /// ADC Multiplexer Selection Register
    ADMUX = 0x7c { MUX0 = 0, MUX1 = 1, MUX2 = 2, MUX3 = 3, ADLAR = 5, REFS0 = 6, REFS1 = 7 };
    /// Digital Input Disable Register 0
    DIDR0 = 0x7e { ADC0D = 0, ADC1D = 1, ADC2D = 2, ADC3D = 3, ADC4D = 4, ADC5D = 5 };
    /// Digital Input Disable Register 1
    DIDR1 = 0x7f { AIN0D = 0, AIN1D = 1 };

    /// Timer/Counter 1 Control Register A
    TCCR1A = 0x80 { WGM10 = 0, WGM11 = 1, COM1B0 = 4, COM1B1 = 5, COM1A0 = 6, COM1A1 = 7 };
    /// Timer/Counter 1 Control Register B
    TCCR1B = 0x81 { CS10 = 0, CS11 = 1, CS12 = 2, WGM12 = 3, WGM13 = 4, ICES1 = 6, ICNC1 = 7 };
    /// Timer/Counter 1 Control Register C
    TCCR1C = 0x82 { FOC1B = 6, FOC1A = 7 };
    /// Timer/Counter 1 Low Byte
    TCNT1L = 0x84;
    /// Timer/Counter 1 High Byte
    TCNT1H = 0x85;
    /// Input Capture Register 1 Low Byte
    ICR1L = 0x86;
    /// Input Capture Register 1 High Byte
    ICR1H = 0x87;
    /// Output Compare Register 1 A Low Byte
    OCR1AL = 0x88;
    /// Output Compare Register 1 A High Byte
    OCR1AH = 0x89;
    /// Output Compare Register 1 B Low Byte
    OCR1BL = 0x8a;
    /// Output Compare Register 1 B High Byte
    OCR1BH = 0x8b;

    /// Timer/Counter 2 Control Register A
    TCCR2A = 0xb0 { WGM20 = 0, WGM21 = 1, COM2B0 = 4, COM2B1 = 5, COM2A0 = 6, COM2A1 = 7 };
    /// Timer/Counter 2 Control Register B
    TCCR2B = 0xb1 { CS20 = 0, CS21 = 1, CS22 = 2, WGM22 = 3, FOC2B = 6, FOC2A = 7 };
    /// Timer/Counter 2
    TCNT2 = 0xb2;
    /// Timer/Counter 2 Output Compare Register A
    OCR2A = 0xb3;
    /// Timer/Counter 2 Output Compare Register B
    OCR2B = 0xb4;
    /// Asynchronous Status Register
    ASSR = 0xb6 {
        TCR2BUB = 0, TCR2AUB = 1, OCR2BUB = 2, OCR2AUB = 3, TCN2UB = 4, AS2 = 5, EXCLK = 6,
    };

    /// TWI Bit Rate Register
    TWBR = 0xb8;
    /// TWI Status Register
    TWSR = 0xb9 { TWPS0 = 0, TWPS1 = 1, TWS3 = 3, TWS4 = 4, TWS5 = 5, TWS6 = 6, TWS7 = 7 };
    /// TWI (Slave) Address Register
    TWAR = 0xba {
        TWGCE = 0, TWA0 = 1, TWA1 = 2, TWA2 = 3, TWA3 = 4, TWA4 = 5, TWA5 = 6, TWA6 = 7,
    };
    /// TWI Data Register
    TWDR = 0xbb;
    /// TWI Control Register
    TWCR = 0xbc { TWIE = 0, TWEN = 2, TWWC = 3, TWSTO = 4, TWSTA = 5, TWEA = 6, TWINT = 7 };
    /// TWI (Slave) Address Mask Register
    TWAMR = 0xbd {
        TWAM0 = 1, TWAM1 = 2, TWAM2 = 3, TWAM3 = 4, TWAM4 = 5, TWAM5 = 6, TWAM6 = 7,
    };

    /// USART 0 Control and Status Register A
    UCSR0A = 0xc0 {
        MPCM0 = 0, U2X0 = 1, UPE0 = 2, DOR0 = 3, FE0 = 4, UDRE0 = 5, TXC0 = 6, RXC0 = 7,
    };
    /// USART 0 Control and Status Register B
    UCSR0B = 0xc1 {
        TXB80 = 0, RXB80 = 1, UCSZ02 = 2, TXEN0 = 3, RXEN0 = 4, UDRIE0 = 5, TXCIE0 = 6, RXCIE0 = 7,
    };
    /// USART 0 Control and Status Register C
    UCSR0C = 0xc2 {
        UCPOL0 = 0, UCSZ00 = 1, UCSZ01 = 2, USBS0 = 3,
        UPM00 = 4, UPM01 = 5, UMSEL00 = 6, UMSEL01 = 7,
    };
    /// USART 0 Baud Rate Register Low Byte
    UBRR0L = 0xc4;
    /// USART 0 Baud Rate Register High Byte
    UBRR0H = 0xc5;
    /// USART 0 I/O Data Register
    UDR0 = 0xc6;
}

#[cfg(test)]
mod tests {
    use bitint::U8;
    use m328p_cpu::registers::sreg::{StatusRegister, SREG_ADDRESS};

    use super::*;

    #[test]
    fn test_sreg_matches_cpu() {
        assert_eq!(SREG::ADDRESS, SREG_ADDRESS);

        let interrupts = StatusRegister::from(U8::from_primitive(1 << sreg::I));
        assert!(interrupts.global_interrupt_enable());
        assert!(!interrupts.carry());

        let carry = StatusRegister::from(U8::from_primitive(1 << sreg::C));
        assert!(carry.carry());
        assert!(!carry.global_interrupt_enable());
    }

    #[test]
    fn test_split_timer_mode_bits() {
        assert_eq!(TCCR0A::ADDRESS + 1, TCCR0B::ADDRESS);
        assert_eq!((tccr0a::WGM00, tccr0a::WGM01), (0, 1));
        assert_eq!(tccr0b::WGM02, 3);
    }

    #[test]
    fn test_extended_io() {
        assert_eq!(UCSR0A::ADDRESS, 0xc0);
        assert_eq!(ucsr0a::UDRE0, 5);
        assert_eq!(TIMSK0::ADDRESS, 0x6e);
        assert_eq!(timsk0::TOIE0, 0);
    }
}
