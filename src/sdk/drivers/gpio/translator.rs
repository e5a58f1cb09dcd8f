use core::ops::RangeInclusive;

use crate::config::{ULP_AS_SOC_PIN_BASE, ULP_PIN_MAX};
use crate::sdk::drivers::gpio::configure::GPIO_MODE;
use crate::sdk::drivers::gpio::error::GpioError;
use crate::sdk::drivers::gpio::GpioDriver;
use crate::sdk::mcu::gpio::{egpio_set_pin_mode, Egpio};
use crate::BIT;

/// ULP pin mux mode that hands the pad to the SoC GPIO block.
pub const ULP_TO_SOC_MODE: u8 = 6;

/// One piece of the SoC-to-ULP pin map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocToUlpRange {
    /// HP pins covered
    pub pins: RangeInclusive<u8>,
    /// Added to the HP pin to get the ULP pin
    pub offset: i8,
    /// Mode written to the HP pin
    pub mode: u8,
}

/// HP pins that can be handed to the ULP domain. Fixed by the chip pin mux.
pub static SOC_TO_ULP_TABLE: [SocToUlpRange; 4] = [
    // Host pads
    SocToUlpRange { pins: 25..=30, offset: -21, mode: 9 },
    SocToUlpRange { pins: 31..=34, offset: -31, mode: 9 },
    SocToUlpRange { pins: 46..=49, offset: -38, mode: 11 },
    SocToUlpRange { pins: 50..=51, offset: -40, mode: 9 },
];

/// ULP pin and HP mode for an HP pin, if the pin can be routed to the ULP domain.
pub fn soc_to_ulp(hp_pin: u8) -> Option<(u8, u8)> {
    SOC_TO_ULP_TABLE
        .iter()
        .find(|range| range.pins.contains(&hp_pin))
        .map(|range| ((hp_pin as i16 + range.offset as i16) as u8, range.mode))
}

/// HP pin number a ULP pin answers to once borrowed as SOC GPIO.
pub fn ulp_to_soc(ulp_pin: u8) -> Option<u8> {
    if ulp_pin > ULP_PIN_MAX {
        return None;
    }
    Some(ulp_pin + ULP_AS_SOC_PIN_BASE)
}

impl<'r> GpioDriver<'r> {
    /// Lends a ULP pin to the SoC GPIO block.
    ///
    /// # Algorithm
    ///
    /// 1. Put the ULP pin in the ULP-to-SOC mode
    /// 2. Put the HP pin `ulp_pin + 64` in GPIO mode
    /// 3. Record the alias, so port A pin `ulp_pin + 64` becomes addressable
    ///
    /// Returns the HP pin number to use from now on.
    pub fn set_ulp_pin_as_soc(&mut self, ulp_pin: u8) -> Result<u8, GpioError> {
        let hp_pin = ulp_to_soc(ulp_pin).ok_or_else(|| {
            log::warn!("gpio: ULP pin {} cannot be used as SOC pin", ulp_pin);
            GpioError::InvalidParameter
        })?;

        egpio_set_pin_mode(Egpio::Ulp, ulp_pin, ULP_TO_SOC_MODE);
        egpio_set_pin_mode(Egpio::Hp, hp_pin, GPIO_MODE);
        self.soc_alias_mask |= BIT!(ulp_pin as u16);

        log::debug!("gpio: ULP pin {} aliased as SOC pin {}", ulp_pin, hp_pin);
        Ok(hp_pin)
    }

    /// Hands an HP pin over to the ULP domain.
    ///
    /// The HP pin gets the mode from [`SOC_TO_ULP_TABLE`] and the ULP pin it maps to
    /// is put in GPIO mode. That ULP pin stops being an SOC alias. Returns the ULP pin.
    pub fn set_soc_pin_as_ulp(&mut self, hp_pin: u8) -> Result<u8, GpioError> {
        let (ulp_pin, mode) = soc_to_ulp(hp_pin).ok_or_else(|| {
            log::warn!("gpio: SOC pin {} has no ULP route", hp_pin);
            GpioError::InvalidParameter
        })?;

        egpio_set_pin_mode(Egpio::Hp, hp_pin, mode);
        egpio_set_pin_mode(Egpio::Ulp, ulp_pin, GPIO_MODE);
        self.soc_alias_mask &= !BIT!(ulp_pin as u16);

        log::debug!("gpio: SOC pin {} routed to ULP pin {}", hp_pin, ulp_pin);
        Ok(ulp_pin)
    }

    pub fn is_ulp_pin_soc_aliased(&self, ulp_pin: u8) -> bool {
        ulp_pin <= ULP_PIN_MAX && self.soc_alias_mask & BIT!(ulp_pin as u16) != 0
    }
}
