// Chip topology of the GPIO subsystem. Everything here is fixed by silicon.

// Highest pin number accepted per port
pub const PORTA_PIN_MAX: u8 = 57;
pub const PORTB_PIN_MAX: u8 = 15;
pub const PORTC_PIN_MAX: u8 = 15;
pub const PORTD_PIN_MAX: u8 = 9;
pub const ULP_PIN_MAX: u8 = 11;
pub const UULP_PIN_MAX: u8 = 4;

/// Pins per HP port view (B, C and D start at multiples of this).
pub const HP_PINS_PER_PORT: u8 = 16;
/// Number of HP pins backed by a pad table entry (0..=PORTA_PIN_MAX).
pub const HP_PIN_COUNT: usize = PORTA_PIN_MAX as usize + 1;
pub const ULP_PIN_COUNT: usize = ULP_PIN_MAX as usize + 1;
pub const UULP_PIN_COUNT: usize = UULP_PIN_MAX as usize + 1;

// Highest alternate-function mode per domain
pub const HP_MAX_MODE: u8 = 15;
pub const ULP_MAX_MODE: u8 = 10;
pub const UULP_MAX_MODE: u8 = 8;

// Host pads: pins shared with the host interface, selected through their own register
pub const HOST_PAD_MIN: u8 = 25;
pub const HOST_PAD_MAX: u8 = 30;

/// First HP pin number that addresses a ULP pin borrowed as SOC GPIO.
pub const ULP_AS_SOC_PIN_BASE: u8 = 64;
pub const ULP_AS_SOC_PIN_MAX: u8 = ULP_AS_SOC_PIN_BASE + ULP_PIN_MAX;

// Interrupt slots per domain
pub const PIN_INTR_COUNT: usize = 8;
pub const GROUP_INTR_COUNT: usize = 2;
pub const ULP_PIN_INTR_COUNT: usize = 8;
pub const ULP_GROUP_INTR_COUNT: usize = 2;
pub const UULP_INTR_COUNT: usize = UULP_PIN_COUNT;

/// Maximum number of pins that can take part in one group interrupt.
pub const GROUP_MAX_PINS: usize = 8;

/// Vectored interrupt line and the priority it is enabled at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrqLine {
    pub irq: u16,
    pub priority: u8,
}

/// HP pin interrupts 0..=7, one vector each.
pub const PIN_INTR_IRQ: [IrqLine; PIN_INTR_COUNT] = [
    IrqLine { irq: 52, priority: 7 },
    IrqLine { irq: 53, priority: 7 },
    IrqLine { irq: 54, priority: 7 },
    IrqLine { irq: 55, priority: 7 },
    IrqLine { irq: 56, priority: 7 },
    IrqLine { irq: 57, priority: 7 },
    IrqLine { irq: 58, priority: 7 },
    IrqLine { irq: 59, priority: 7 },
];

pub const GROUP_INTR_IRQ: [IrqLine; GROUP_INTR_COUNT] = [
    IrqLine { irq: 50, priority: 6 },
    IrqLine { irq: 51, priority: 6 },
];

// ULP pin interrupts are OR'ed into one vector, as are the UULP ones
pub const ULP_PIN_INTR_IRQ: IrqLine = IrqLine { irq: 18, priority: 5 };
pub const ULP_GROUP_INTR_IRQ: IrqLine = IrqLine { irq: 19, priority: 5 };
pub const UULP_INTR_IRQ: IrqLine = IrqLine { irq: 21, priority: 4 };
