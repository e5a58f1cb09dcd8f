//! Multi-domain GPIO driver.
//!
//! One [`GpioDriver`] fronts the HP, ULP and UULP (NPSS) GPIO blocks: pin
//! bring-up, mode and direction, pad electrical settings, interrupt
//! registration and the HP/ULP pin aliasing. Interrupt callbacks live in an
//! [`InterruptRegistry`] the driver borrows; the vector handlers in [`isr`]
//! read the process-wide [`isr::GPIO_INTERRUPTS`] instance.

pub mod configure;
pub mod error;
pub mod hal_pin;
pub mod interrupt;
pub mod irq;
pub mod isr;
pub mod pad_map;
pub mod pin;
pub mod translator;
pub mod validate;

pub use error::GpioError;
pub use hal_pin::GpioPin;
pub use interrupt::{Callback, InterruptCallback, InterruptRegistry, InterruptSlot};
pub use pin::{
    DisableState, Domain, DriveStrength, GroupCombine, GroupInterruptConfig, GroupPolarity,
    GroupTrigger, InterruptFlags, PinConfig, Port, PortPin, SlewRate,
};
pub use crate::sdk::mcu::gpio::GpioDirection;

use crate::sdk::mcu::gpio::{egpio_clock_disable, egpio_clock_enable, Egpio};
use crate::sdk::mcu::irq_i::nvic_clear_pending_irq;

/// GPIO driver state.
///
/// The registry is shared with interrupt context; everything else the driver
/// knows lives in hardware, apart from the set of ULP pins currently borrowed
/// as SOC pins.
pub struct GpioDriver<'r> {
    registry: &'r InterruptRegistry,
    /// Bit n set while ULP pin n is aliased as an SOC pin
    soc_alias_mask: u16,
}

impl<'r> GpioDriver<'r> {
    pub const fn new(registry: &'r InterruptRegistry) -> Self {
        GpioDriver { registry, soc_alias_mask: 0 }
    }

    pub fn registry(&self) -> &'r InterruptRegistry {
        self.registry
    }

    /// Brings the GPIO subsystem to a known state.
    ///
    /// # Algorithm
    ///
    /// 1. Enable the HP and ULP EGPIO clocks
    /// 2. Clear every pending pin, group and UULP interrupt, at the source and
    ///    in the interrupt controller
    /// 3. Empty every callback slot and forget all SOC aliases
    ///
    /// # Notes
    ///
    /// * Process-wide reset; must not race an interrupt in flight
    pub fn init(&mut self) {
        egpio_clock_enable(Egpio::Hp);
        egpio_clock_enable(Egpio::Ulp);

        InterruptSlot::all().for_each(|slot| {
            slot.clear_hw();
            nvic_clear_pending_irq(slot.irq_line().irq);
        });

        self.registry.clear();
        self.soc_alias_mask = 0;
        log::debug!("gpio: initialized");
    }

    /// Tears the GPIO subsystem down.
    ///
    /// Every source is masked while its block is still clocked, then all slots are
    /// emptied and both domain clocks gated off.
    pub fn deinit(&mut self) {
        InterruptSlot::all().for_each(InterruptSlot::mask_hw);
        self.registry.clear();
        self.soc_alias_mask = 0;

        egpio_clock_disable(Egpio::Hp);
        egpio_clock_disable(Egpio::Ulp);
        log::debug!("gpio: deinitialized");
    }
}
