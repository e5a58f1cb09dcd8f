use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};

use crate::sdk::drivers::gpio::error::GpioError;
use crate::sdk::drivers::gpio::pin::PortPin;
use crate::sdk::drivers::gpio::validate::validate_pin_access;
use crate::sdk::drivers::gpio::GpioDriver;

/// A single pin seen through the `embedded-hal` digital traits.
///
/// The handle does not configure the pin; run [`GpioDriver::set_configuration`] first.
pub struct GpioPin<'d, 'r> {
    driver: &'d GpioDriver<'r>,
    port_pin: PortPin,
}

impl<'d, 'r> GpioPin<'d, 'r> {
    pub fn port_pin(&self) -> PortPin {
        self.port_pin
    }
}

impl<'r> GpioDriver<'r> {
    /// Borrows a validated pin handle.
    pub fn pin(&self, port_pin: PortPin) -> Result<GpioPin<'_, 'r>, GpioError> {
        validate_pin_access(port_pin, self.soc_alias_mask)?;
        Ok(GpioPin { driver: self, port_pin })
    }
}

impl ErrorType for GpioPin<'_, '_> {
    type Error = GpioError;
}

impl InputPin for GpioPin<'_, '_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.driver.get_pin(self.port_pin)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.driver.get_pin(self.port_pin)?)
    }
}

impl OutputPin for GpioPin<'_, '_> {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.driver.set_pin(self.port_pin)
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.driver.clear_pin(self.port_pin)
    }
}

impl StatefulOutputPin for GpioPin<'_, '_> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        self.driver.get_pin_output(self.port_pin)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.driver.get_pin_output(self.port_pin)?)
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.driver.toggle_pin(self.port_pin)
    }
}
