use bitflags::bitflags;
use heapless::Vec;
use num_derive::FromPrimitive;

use crate::config::{GROUP_MAX_PINS, HP_MAX_MODE, HP_PINS_PER_PORT, ULP_MAX_MODE, UULP_MAX_MODE};
use crate::sdk::mcu::gpio::GpioDirection;

/// Power domain a pin belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Hp,
    Ulp,
    Uulp,
}

impl Domain {
    /// Highest alternate-function mode the domain's pin mux accepts.
    pub const fn max_mode(self) -> u8 {
        match self {
            Domain::Hp => HP_MAX_MODE,
            Domain::Ulp => ULP_MAX_MODE,
            Domain::Uulp => UULP_MAX_MODE,
        }
    }
}

/// GPIO port. A to D belong to the HP domain; ULP and UULP are single-port domains.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum Port {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    Ulp = 4,
    Uulp = 5,
}

impl Port {
    pub const fn domain(self) -> Domain {
        match self {
            Port::A | Port::B | Port::C | Port::D => Domain::Hp,
            Port::Ulp => Domain::Ulp,
            Port::Uulp => Domain::Uulp,
        }
    }
}

/// Logical pin address: a port and a pin number inside it.
///
/// Port A numbers its pins linearly across the whole HP block (0..=57), while
/// B, C and D restart at 0 every 16 pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortPin {
    pub port: Port,
    pub pin: u8,
}

impl PortPin {
    pub const fn new(port: Port, pin: u8) -> Self {
        PortPin { port, pin }
    }

    pub const fn domain(self) -> Domain {
        self.port.domain()
    }

    /// Pin number inside the domain's register block.
    ///
    /// For HP pins this is the linear EGPIO pin, `port * 16 + pin`.
    pub const fn linear(self) -> u8 {
        match self.port {
            Port::A | Port::B | Port::C | Port::D => {
                self.port as u8 * HP_PINS_PER_PORT + self.pin
            }
            Port::Ulp | Port::Uulp => self.pin,
        }
    }

    /// 16-bit port view index and bit of the pin, as used by port and interrupt registers.
    pub const fn port_view(self) -> (u8, u8) {
        let linear = self.linear();
        (linear / HP_PINS_PER_PORT, linear % HP_PINS_PER_PORT)
    }
}

/// Parameters of a single-call pin bring-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinConfig {
    pub port_pin: PortPin,
    pub direction: GpioDirection,
}

bitflags! {
    /// Pin interrupt trigger. Bit positions match the hardware trigger field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct InterruptFlags: u8 {
        const LEVEL_HIGH =  1 << 0;
        const LEVEL_LOW =   1 << 1;
        const RISE_EDGE =   1 << 2;
        const FALL_EDGE =   1 << 3;
    }
}

/// Pad output drive strength.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum DriveStrength {
    Ma2 = 0,
    Ma4 = 1,
    Ma8 = 2,
    Ma12 = 3,
}

/// State of the pad when its output driver is disabled.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum DisableState {
    HighZ = 0,
    PullUp = 1,
    PullDown = 2,
    Repeater = 3,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlewRate {
    Slow = 0,
    Fast = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupCombine {
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupTrigger {
    Level,
    Edge,
}

/// Level a pin must have to count as active in a group interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupPolarity {
    Low,
    High,
}

/// Group interrupt: one line fired by an AND/OR of several pin states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupInterruptConfig {
    pub pins: Vec<(PortPin, GroupPolarity), GROUP_MAX_PINS>,
    pub combine: GroupCombine,
    pub trigger: GroupTrigger,
}

impl GroupInterruptConfig {
    pub const fn new(combine: GroupCombine, trigger: GroupTrigger) -> Self {
        GroupInterruptConfig { pins: Vec::new(), combine, trigger }
    }

    /// Adds a pin to the group. Fails when the group is already full.
    pub fn add_pin(&mut self, port_pin: PortPin, polarity: GroupPolarity) -> Result<(), (PortPin, GroupPolarity)> {
        self.pins.push((port_pin, polarity))
    }
}
