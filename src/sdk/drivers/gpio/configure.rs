use num_traits::FromPrimitive;

use crate::config::{PORTD_PIN_MAX, ULP_AS_SOC_PIN_BASE, ULP_PIN_MAX};
use crate::sdk::drivers::gpio::error::GpioError;
use crate::sdk::drivers::gpio::pad_map::{hp_pad_selector, is_host_pad, ulp_pad_selector, PadSelection};
use crate::sdk::drivers::gpio::pin::{DisableState, Domain, DriveStrength, PinConfig, Port, PortPin, SlewRate};
use crate::sdk::drivers::gpio::validate::{is_soc_alias, validate_mode, validate_pin_access, validate_port_pin};
use crate::sdk::drivers::gpio::GpioDriver;
use crate::sdk::mcu::gpio::{
    egpio_clear_port, egpio_get_direction, egpio_get_pin_input, egpio_get_pin_mode,
    egpio_get_pin_output, egpio_get_port, egpio_set_direction, egpio_set_pin_mode,
    egpio_set_pin_value, egpio_set_port, egpio_toggle_pin, host_pad_selection_enable,
    npss_get_direction, npss_get_input, npss_get_mode, npss_get_output, npss_receiver_enable,
    npss_set_direction, npss_set_mode, npss_set_output, pad_config_get, pad_config_set,
    pad_selection_enable, ulp_pad_selection_enable, Egpio, GpioDirection,
};
use crate::sdk::mcu::register::FLD_PAD_CONFIG;
use crate::BIT_MASK_LEN;

/// Mode 0 of every pin mux is plain GPIO.
pub const GPIO_MODE: u8 = 0;

/// Register block a validated pin resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PinTarget {
    Egpio(Egpio, u8),
    Npss(u8),
}

impl<'r> GpioDriver<'r> {
    fn target(&self, port_pin: PortPin) -> Result<PinTarget, GpioError> {
        validate_pin_access(port_pin, self.soc_alias_mask)?;
        Ok(match port_pin.domain() {
            Domain::Hp => PinTarget::Egpio(Egpio::Hp, port_pin.linear()),
            Domain::Ulp => PinTarget::Egpio(Egpio::Ulp, port_pin.pin),
            Domain::Uulp => PinTarget::Npss(port_pin.pin),
        })
    }

    /// Pad configuration bank and index of a pin; `None` for UULP pins.
    ///
    /// An aliased ULP pin keeps its ULP pad even when addressed through port A.
    fn pad_target(&self, port_pin: PortPin) -> Result<Option<(Egpio, u8)>, GpioError> {
        validate_pin_access(port_pin, self.soc_alias_mask)?;
        if is_soc_alias(port_pin, self.soc_alias_mask) {
            return Ok(Some((Egpio::Ulp, port_pin.pin - ULP_AS_SOC_PIN_BASE)));
        }
        Ok(match port_pin.domain() {
            Domain::Hp => Some((Egpio::Hp, port_pin.linear())),
            Domain::Ulp => Some((Egpio::Ulp, port_pin.pin)),
            Domain::Uulp => None,
        })
    }

    /// Configures a pin as a plain GPIO in one call.
    ///
    /// # Algorithm
    ///
    /// 1. Validate the pin
    /// 2. Route the pad to the GPIO block: host-pad register for HP pins 25..=30,
    ///    pad-selection register for other HP or ULP pins that have a pad
    ///    (shared pads are skipped)
    /// 3. Enable the pad receiver
    /// 4. Select GPIO mode with the output latch low
    /// 5. Set the direction
    ///
    /// # Notes
    ///
    /// * Not transactional: a failing step returns its error and leaves the
    ///   previous steps applied
    /// * UULP pins have no pad selection; they get NPSS receiver, mux mode and direction
    pub fn set_configuration(&self, config: PinConfig) -> Result<(), GpioError> {
        let port_pin = config.port_pin;
        validate_port_pin(port_pin)?;

        match port_pin.domain() {
            Domain::Hp => {
                let pin = port_pin.linear();
                if is_host_pad(pin) {
                    host_pad_selection_enable(pin);
                } else if let PadSelection::Pad(pad) = hp_pad_selector(pin) {
                    pad_selection_enable(pad);
                }
            }
            Domain::Ulp => {
                if let PadSelection::Pad(pad) = ulp_pad_selector(port_pin.pin) {
                    ulp_pad_selection_enable(pad);
                }
            }
            Domain::Uulp => {}
        }

        self.enable_pad_receiver(port_pin)?;
        self.set_pin_mode(port_pin, GPIO_MODE, false)?;
        self.set_pin_direction(port_pin, config.direction)?;

        log::debug!("gpio: {:?} configured as {:?}", port_pin, config.direction);
        Ok(())
    }

    /// Selects the alternate function of a pin and loads its output latch.
    ///
    /// Modes above the domain maximum are rejected before any register write.
    pub fn set_pin_mode(&self, port_pin: PortPin, mode: u8, output: bool) -> Result<(), GpioError> {
        let target = self.target(port_pin)?;
        validate_mode(port_pin.domain(), mode)?;
        match target {
            PinTarget::Egpio(egpio, pin) => {
                egpio_set_pin_mode(egpio, pin, mode);
                egpio_set_pin_value(egpio, pin, output);
            }
            PinTarget::Npss(pin) => {
                npss_set_mode(pin, mode);
                npss_set_output(pin, output);
            }
        }
        Ok(())
    }

    pub fn get_pin_mode(&self, port_pin: PortPin) -> Result<u8, GpioError> {
        Ok(match self.target(port_pin)? {
            PinTarget::Egpio(egpio, pin) => egpio_get_pin_mode(egpio, pin),
            PinTarget::Npss(pin) => npss_get_mode(pin),
        })
    }

    pub fn set_pin_direction(&self, port_pin: PortPin, direction: GpioDirection) -> Result<(), GpioError> {
        match self.target(port_pin)? {
            PinTarget::Egpio(egpio, pin) => egpio_set_direction(egpio, pin, direction),
            PinTarget::Npss(pin) => npss_set_direction(pin, direction),
        }
        Ok(())
    }

    pub fn get_pin_direction(&self, port_pin: PortPin) -> Result<GpioDirection, GpioError> {
        Ok(match self.target(port_pin)? {
            PinTarget::Egpio(egpio, pin) => egpio_get_direction(egpio, pin),
            PinTarget::Npss(pin) => npss_get_direction(pin),
        })
    }

    fn write_pin(&self, port_pin: PortPin, value: bool) -> Result<(), GpioError> {
        match self.target(port_pin)? {
            PinTarget::Egpio(egpio, pin) => egpio_set_pin_value(egpio, pin, value),
            PinTarget::Npss(pin) => npss_set_output(pin, value),
        }
        Ok(())
    }

    /// Drives a pin high.
    pub fn set_pin(&self, port_pin: PortPin) -> Result<(), GpioError> {
        self.write_pin(port_pin, true)
    }

    /// Drives a pin low.
    pub fn clear_pin(&self, port_pin: PortPin) -> Result<(), GpioError> {
        self.write_pin(port_pin, false)
    }

    pub fn toggle_pin(&self, port_pin: PortPin) -> Result<(), GpioError> {
        match self.target(port_pin)? {
            PinTarget::Egpio(egpio, pin) => egpio_toggle_pin(egpio, pin),
            PinTarget::Npss(pin) => npss_set_output(pin, !npss_get_output(pin)),
        }
        Ok(())
    }

    /// Reads the level present on the pad.
    pub fn get_pin(&self, port_pin: PortPin) -> Result<bool, GpioError> {
        Ok(match self.target(port_pin)? {
            PinTarget::Egpio(egpio, pin) => egpio_get_pin_input(egpio, pin),
            PinTarget::Npss(pin) => npss_get_input(pin),
        })
    }

    /// Reads the level the pin is being driven to.
    pub fn get_pin_output(&self, port_pin: PortPin) -> Result<bool, GpioError> {
        Ok(match self.target(port_pin)? {
            PinTarget::Egpio(egpio, pin) => egpio_get_pin_output(egpio, pin),
            PinTarget::Npss(pin) => npss_get_output(pin),
        })
    }

    /// Sets every pin in `mask` of a port view.
    pub fn set_port(&self, port: Port, mask: u16) -> Result<(), GpioError> {
        let (egpio, view) = port_target(port, mask)?;
        egpio_set_port(egpio, view, mask);
        Ok(())
    }

    pub fn clear_port(&self, port: Port, mask: u16) -> Result<(), GpioError> {
        let (egpio, view) = port_target(port, mask)?;
        egpio_clear_port(egpio, view, mask);
        Ok(())
    }

    /// Reads the pad levels of a port view, limited to the pins the port has.
    pub fn get_port(&self, port: Port) -> Result<u16, GpioError> {
        let (egpio, view) = port_target(port, 0)?;
        Ok(egpio_get_port(egpio, view) & port_width_mask(port))
    }

    pub fn enable_pad_receiver(&self, port_pin: PortPin) -> Result<(), GpioError> {
        self.set_receiver(port_pin, true)
    }

    pub fn disable_pad_receiver(&self, port_pin: PortPin) -> Result<(), GpioError> {
        self.set_receiver(port_pin, false)
    }

    fn set_receiver(&self, port_pin: PortPin, enable: bool) -> Result<(), GpioError> {
        match self.pad_target(port_pin)? {
            Some((egpio, pin)) => pad_config_set(egpio, pin, FLD_PAD_CONFIG::RECEIVER_ENABLE, enable as u8),
            None => npss_receiver_enable(port_pin.pin, enable),
        }
        Ok(())
    }

    /// Writes a pad field that only HP and ULP pads have.
    fn set_pad_field(&self, port_pin: PortPin, field: FLD_PAD_CONFIG, value: u8) -> Result<(), GpioError> {
        match self.pad_target(port_pin)? {
            Some((egpio, pin)) => {
                pad_config_set(egpio, pin, field, value);
                Ok(())
            }
            None => {
                log::warn!("gpio: {:?} has no pad configuration", port_pin);
                Err(GpioError::InvalidParameter)
            }
        }
    }

    /// Reads a pad field that only HP and ULP pads have.
    fn get_pad_field(&self, port_pin: PortPin, field: FLD_PAD_CONFIG) -> Result<u8, GpioError> {
        match self.pad_target(port_pin)? {
            Some((egpio, pin)) => Ok(pad_config_get(egpio, pin, field)),
            None => {
                log::warn!("gpio: {:?} has no pad configuration", port_pin);
                Err(GpioError::InvalidParameter)
            }
        }
    }

    pub fn set_pad_drive_strength(&self, port_pin: PortPin, strength: DriveStrength) -> Result<(), GpioError> {
        self.set_pad_field(port_pin, FLD_PAD_CONFIG::DRIVE_STRENGTH, strength as u8)
    }

    /// Selects what the pad does while its output driver is off.
    pub fn set_pad_disable_state(&self, port_pin: PortPin, state: DisableState) -> Result<(), GpioError> {
        self.set_pad_field(port_pin, FLD_PAD_CONFIG::DISABLE_STATE, state as u8)
    }

    pub fn set_pad_slew_rate(&self, port_pin: PortPin, rate: SlewRate) -> Result<(), GpioError> {
        self.set_pad_field(port_pin, FLD_PAD_CONFIG::SLEW_RATE, rate as u8)
    }

    pub fn get_pad_drive_strength(&self, port_pin: PortPin) -> Result<DriveStrength, GpioError> {
        let raw = self.get_pad_field(port_pin, FLD_PAD_CONFIG::DRIVE_STRENGTH)?;
        DriveStrength::from_u8(raw).ok_or(GpioError::InvalidParameter)
    }

    pub fn get_pad_disable_state(&self, port_pin: PortPin) -> Result<DisableState, GpioError> {
        let raw = self.get_pad_field(port_pin, FLD_PAD_CONFIG::DISABLE_STATE)?;
        DisableState::from_u8(raw).ok_or(GpioError::InvalidParameter)
    }
}

/// Pins a port view actually has, as a bit mask.
fn port_width_mask(port: Port) -> u16 {
    match port {
        Port::A | Port::B | Port::C => 0xffff,
        Port::D => BIT_MASK_LEN!(PORTD_PIN_MAX as u16 + 1),
        Port::Ulp => BIT_MASK_LEN!(ULP_PIN_MAX as u16 + 1),
        Port::Uulp => 0,
    }
}

/// Resolves a port to its EGPIO instance and port view, checking `mask` against the port width.
///
/// # Notes
///
/// * Port A's view covers its first 16 pins; higher port-A pins are reached
///   through the B, C and D views
/// * UULP pins have no port view
fn port_target(port: Port, mask: u16) -> Result<(Egpio, u8), GpioError> {
    let target = match port {
        Port::A | Port::B | Port::C | Port::D => (Egpio::Hp, port as u8),
        Port::Ulp => (Egpio::Ulp, 0),
        Port::Uulp => {
            log::warn!("gpio: UULP has no port view");
            return Err(GpioError::InvalidParameter);
        }
    };
    if mask & !port_width_mask(port) != 0 {
        log::warn!("gpio: mask {:#06x} exceeds port {:?}", mask, port);
        return Err(GpioError::InvalidParameter);
    }
    Ok(target)
}
