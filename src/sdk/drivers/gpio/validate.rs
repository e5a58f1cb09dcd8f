use num_traits::FromPrimitive;

use crate::config::{
    PORTA_PIN_MAX, PORTB_PIN_MAX, PORTC_PIN_MAX, PORTD_PIN_MAX, ULP_AS_SOC_PIN_BASE,
    ULP_AS_SOC_PIN_MAX, ULP_PIN_MAX, UULP_PIN_MAX,
};
use crate::sdk::drivers::gpio::error::GpioError;
use crate::sdk::drivers::gpio::pin::{Domain, InterruptFlags, Port, PortPin};
use crate::BIT;

/// Highest pin number accepted on `port`.
pub const fn pin_max(port: Port) -> u8 {
    match port {
        Port::A => PORTA_PIN_MAX,
        Port::B => PORTB_PIN_MAX,
        Port::C => PORTC_PIN_MAX,
        Port::D => PORTD_PIN_MAX,
        Port::Ulp => ULP_PIN_MAX,
        Port::Uulp => UULP_PIN_MAX,
    }
}

/// Checks a pin against the bound of its port.
///
/// # Notes
///
/// * Pure check; callers run it before touching any register
pub fn validate_port_pin(port_pin: PortPin) -> Result<(), GpioError> {
    if port_pin.pin > pin_max(port_pin.port) {
        log::warn!("gpio: pin {} out of range for port {:?}", port_pin.pin, port_pin.port);
        return Err(GpioError::InvalidParameter);
    }
    Ok(())
}

/// Decodes and checks a raw (port, pin) pair.
///
/// A port value past the last enumerated port fails before the pin is looked at.
pub fn validate_raw(port: u8, pin: u8) -> Result<PortPin, GpioError> {
    let port = Port::from_u8(port).ok_or_else(|| {
        log::warn!("gpio: unknown port {}", port);
        GpioError::InvalidParameter
    })?;
    let port_pin = PortPin::new(port, pin);
    validate_port_pin(port_pin)?;
    Ok(port_pin)
}

/// Returns true when `port_pin` addresses a ULP pin that has been borrowed as SOC GPIO.
///
/// Such pins are reached through port A numbers `ULP_AS_SOC_PIN_BASE..=ULP_AS_SOC_PIN_MAX`,
/// and only while the matching bit of `soc_alias_mask` is set.
pub fn is_soc_alias(port_pin: PortPin, soc_alias_mask: u16) -> bool {
    port_pin.port == Port::A
        && (ULP_AS_SOC_PIN_BASE..=ULP_AS_SOC_PIN_MAX).contains(&port_pin.pin)
        && soc_alias_mask & BIT!(port_pin.pin - ULP_AS_SOC_PIN_BASE) != 0
}

/// Pin check used by the per-pin operations: the port bound, or an active SOC alias.
pub fn validate_pin_access(port_pin: PortPin, soc_alias_mask: u16) -> Result<(), GpioError> {
    if is_soc_alias(port_pin, soc_alias_mask) {
        return Ok(());
    }
    validate_port_pin(port_pin)
}

pub fn validate_mode(domain: Domain, mode: u8) -> Result<(), GpioError> {
    if mode > domain.max_mode() {
        log::warn!("gpio: mode {} above {:?} maximum {}", mode, domain, domain.max_mode());
        return Err(GpioError::InvalidParameter);
    }
    Ok(())
}

/// Checks that a trigger selects at least one condition and nothing outside the four trigger bits.
pub fn validate_flags(flags: InterruptFlags) -> Result<(), GpioError> {
    if flags.is_empty() || InterruptFlags::from_bits(flags.bits()).is_none() {
        log::warn!("gpio: invalid interrupt flags {:#x}", flags.bits());
        return Err(GpioError::InvalidParameter);
    }
    Ok(())
}
