use crate::sdk::drivers::gpio::error::GpioError;
use crate::sdk::drivers::gpio::interrupt::{Callback, InterruptSlot};
use crate::sdk::drivers::gpio::pin::{
    Domain, GroupCombine, GroupInterruptConfig, GroupPolarity, GroupTrigger, InterruptFlags, Port,
    PortPin,
};
use crate::sdk::drivers::gpio::validate::{validate_flags, validate_port_pin};
use crate::sdk::drivers::gpio::GpioDriver;
use crate::config::{HP_PIN_COUNT, ULP_PIN_COUNT};
use crate::sdk::mcu::gpio::{
    egpio_group_config, egpio_group_pin_deselect, egpio_group_pin_select, egpio_pin_intr_config,
    npss_intr_config, Egpio,
};
use crate::sdk::mcu::irq_i::{nvic_disable_irq, nvic_enable_irq, nvic_set_priority};

/// Enables the interrupt controller line of a slot at its fixed priority.
fn enable_irq_line(slot: InterruptSlot) {
    let line = slot.irq_line();
    nvic_set_priority(line.irq, line.priority);
    nvic_enable_irq(line.irq);
}

impl<'r> GpioDriver<'r> {
    /// Routes an HP pin to pin interrupt `line` and installs `callback` for it.
    ///
    /// # Algorithm
    ///
    /// 1. Validate the pin (HP ports only), the trigger flags and the line
    /// 2. Take the slot, failing with `Busy` if it already has a callback
    /// 3. Enable the line in the interrupt controller at its table priority
    /// 4. Program trigger and pin select, then unmask
    ///
    /// # Notes
    ///
    /// * Nothing is written to hardware when a check in step 1 or 2 fails
    pub fn configure_interrupt(
        &self,
        port_pin: PortPin,
        line: u8,
        flags: InterruptFlags,
        callback: Callback,
    ) -> Result<(), GpioError> {
        validate_port_pin(port_pin)?;
        if port_pin.domain() != Domain::Hp {
            log::warn!("gpio: {:?} is not an HP pin", port_pin);
            return Err(GpioError::InvalidParameter);
        }
        validate_flags(flags)?;

        let slot = InterruptSlot::Pin(line);
        self.registry.register(slot, callback)?;
        enable_irq_line(slot);

        let (port, pin) = port_pin.port_view();
        egpio_pin_intr_config(Egpio::Hp, line, port, pin, flags.bits());
        slot.unmask_hw();

        log::debug!("gpio: {:?} -> pin interrupt {} ({:?})", port_pin, line, flags);
        Ok(())
    }

    /// Routes a ULP pin to ULP pin interrupt `line`. All ULP lines share one vector.
    pub fn configure_ulp_interrupt(
        &self,
        pin: u8,
        line: u8,
        flags: InterruptFlags,
        callback: Callback,
    ) -> Result<(), GpioError> {
        validate_port_pin(PortPin::new(Port::Ulp, pin))?;
        validate_flags(flags)?;

        let slot = InterruptSlot::UlpPin(line);
        self.registry.register(slot, callback)?;
        enable_irq_line(slot);

        egpio_pin_intr_config(Egpio::Ulp, line, 0, pin, flags.bits());
        slot.unmask_hw();

        log::debug!("gpio: ULP pin {} -> ULP interrupt {} ({:?})", pin, line, flags);
        Ok(())
    }

    /// Arms the wakeup interrupt of a UULP pin. The slot is the pin itself.
    pub fn configure_uulp_interrupt(
        &self,
        pin: u8,
        flags: InterruptFlags,
        callback: Callback,
    ) -> Result<(), GpioError> {
        validate_port_pin(PortPin::new(Port::Uulp, pin))?;
        validate_flags(flags)?;

        let slot = InterruptSlot::Uulp(pin);
        self.registry.register(slot, callback)?;
        enable_irq_line(slot);

        npss_intr_config(pin, flags.bits());
        slot.unmask_hw();

        log::debug!("gpio: UULP pin {} interrupt ({:?})", pin, flags);
        Ok(())
    }

    /// Configures HP group interrupt `group` (0 or 1) from a set of HP pins.
    pub fn configure_group_interrupt(
        &self,
        group: u8,
        config: &GroupInterruptConfig,
        callback: Callback,
    ) -> Result<(), GpioError> {
        self.configure_group(Egpio::Hp, InterruptSlot::Group(group), Domain::Hp, config, callback)
    }

    /// Configures ULP group interrupt `group` (0 or 1) from a set of ULP pins.
    pub fn configure_ulp_group_interrupt(
        &self,
        group: u8,
        config: &GroupInterruptConfig,
        callback: Callback,
    ) -> Result<(), GpioError> {
        self.configure_group(Egpio::Ulp, InterruptSlot::UlpGroup(group), Domain::Ulp, config, callback)
    }

    /// Shared group setup.
    ///
    /// # Algorithm
    ///
    /// 1. Check the group index, that the pin list is not empty and that every
    ///    pin is valid and in `domain`
    /// 2. Take the slot and enable its controller line
    /// 3. Drop every pin of the domain from the group, so members of an
    ///    earlier configuration do not linger
    /// 4. Add each pin with its polarity, then program combination and trigger
    /// 5. Unmask
    fn configure_group(
        &self,
        egpio: Egpio,
        slot: InterruptSlot,
        domain: Domain,
        config: &GroupInterruptConfig,
        callback: Callback,
    ) -> Result<(), GpioError> {
        slot.validate()?;
        if config.pins.is_empty() {
            log::warn!("gpio: group interrupt {:?} has no pins", slot);
            return Err(GpioError::NullPointer);
        }
        for &(port_pin, _) in config.pins.iter() {
            validate_port_pin(port_pin)?;
            if port_pin.domain() != domain {
                log::warn!("gpio: {:?} cannot join a {:?} group", port_pin, domain);
                return Err(GpioError::InvalidParameter);
            }
        }

        self.registry.register(slot, callback)?;
        enable_irq_line(slot);

        let group = slot.index();
        let domain_pins = if egpio == Egpio::Hp { HP_PIN_COUNT } else { ULP_PIN_COUNT };
        for pin in 0..domain_pins as u8 {
            egpio_group_pin_deselect(egpio, group, pin);
        }
        for &(port_pin, polarity) in config.pins.iter() {
            egpio_group_pin_select(egpio, group, port_pin.linear(), polarity == GroupPolarity::High);
        }
        egpio_group_config(
            egpio,
            group,
            config.combine == GroupCombine::Or,
            config.trigger == GroupTrigger::Edge,
        );
        slot.unmask_hw();

        log::debug!("gpio: group interrupt {:?} with {} pins", slot, config.pins.len());
        Ok(())
    }

    /// Releases a slot: masks the source, disables a dedicated controller line and
    /// empties the slot. Succeeds whether or not a callback was installed.
    pub fn unregister_interrupt(&self, slot: InterruptSlot) -> Result<(), GpioError> {
        slot.validate()?;
        slot.mask_hw();
        if slot.owns_irq_line() {
            nvic_disable_irq(slot.irq_line().irq);
        }
        self.registry.unregister(slot)?;
        log::debug!("gpio: interrupt {:?} released", slot);
        Ok(())
    }

    pub fn mask_interrupt(&self, slot: InterruptSlot) -> Result<(), GpioError> {
        slot.validate()?;
        slot.mask_hw();
        Ok(())
    }

    pub fn unmask_interrupt(&self, slot: InterruptSlot) -> Result<(), GpioError> {
        slot.validate()?;
        slot.unmask_hw();
        Ok(())
    }

    /// Returns true while the slot's source has a pending interrupt.
    pub fn interrupt_status(&self, slot: InterruptSlot) -> Result<bool, GpioError> {
        slot.validate()?;
        Ok(slot.pending_hw())
    }

    pub fn clear_interrupt(&self, slot: InterruptSlot) -> Result<(), GpioError> {
        slot.validate()?;
        slot.clear_hw();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::{AtomicU32, AtomicU64, Ordering};

    use crate::sdk::drivers::gpio::interrupt::{InterruptCallback, InterruptRegistry};
    use crate::sdk::drivers::gpio::isr::dispatch_pin_interrupt;
    use crate::sdk::mcu::gpio::{
        egpio_group_mask, egpio_group_unmask, egpio_pin_intr_clear, egpio_pin_intr_mask,
        egpio_pin_intr_status, egpio_pin_intr_unmask, mock_egpio_group_config,
        mock_egpio_group_mask, mock_egpio_group_pin_deselect, mock_egpio_group_pin_select,
        mock_egpio_group_unmask, mock_egpio_pin_intr_clear, mock_egpio_pin_intr_config,
        mock_egpio_pin_intr_mask, mock_egpio_pin_intr_status, mock_egpio_pin_intr_unmask,
        mock_npss_intr_config, mock_npss_intr_status, mock_npss_intr_unmask, npss_intr_status,
        npss_intr_unmask,
    };
    use crate::sdk::mcu::irq_i::{
        mock_nvic_disable_irq, mock_nvic_enable_irq, mock_nvic_set_priority,
    };

    struct Counter(AtomicU32);

    impl InterruptCallback for Counter {
        fn on_interrupt(&self, _line: u8) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    static NOOP: fn(u8) = |_| {};

    /// Tests a full HP pin interrupt setup.
    ///
    /// # Algorithm
    ///
    /// 1. Route port B pin 4 (linear 20) to line 2 on both edges
    /// 2. Verify priority 7 and enable of IRQ 54
    /// 3. Verify the control word uses port view 1, pin 4, then the line is unmasked
    #[test]
    #[mry::lock(nvic_set_priority, nvic_enable_irq, egpio_pin_intr_config, egpio_pin_intr_unmask)]
    fn test_configure_interrupt() {
        mock_nvic_set_priority(mry::Any, mry::Any).returns(());
        mock_nvic_enable_irq(mry::Any).returns(());
        mock_egpio_pin_intr_config(mry::Any, mry::Any, mry::Any, mry::Any, mry::Any).returns(());
        mock_egpio_pin_intr_unmask(mry::Any, mry::Any).returns(());

        let registry = InterruptRegistry::new();
        let driver = GpioDriver::new(&registry);
        let flags = InterruptFlags::RISE_EDGE | InterruptFlags::FALL_EDGE;

        assert_eq!(driver.configure_interrupt(PortPin::new(Port::B, 4), 2, flags, &NOOP), Ok(()));

        assert!(registry.is_registered(InterruptSlot::Pin(2)));
        mock_nvic_set_priority(54u16, 7u8).assert_called(1);
        mock_nvic_enable_irq(54u16).assert_called(1);
        mock_egpio_pin_intr_config(Egpio::Hp, 2u8, 1u8, 4u8, 0x0cu8).assert_called(1);
        mock_egpio_pin_intr_unmask(Egpio::Hp, 2u8).assert_called(1);
    }

    /// Tests that rejected interrupt setups touch no hardware and take no slot.
    #[test]
    #[mry::lock(nvic_set_priority, nvic_enable_irq, egpio_pin_intr_config, egpio_pin_intr_unmask)]
    fn test_configure_interrupt_rejects_bad_parameters() {
        mock_nvic_set_priority(mry::Any, mry::Any).returns(());
        mock_nvic_enable_irq(mry::Any).returns(());
        mock_egpio_pin_intr_config(mry::Any, mry::Any, mry::Any, mry::Any, mry::Any).returns(());
        mock_egpio_pin_intr_unmask(mry::Any, mry::Any).returns(());

        let registry = InterruptRegistry::new();
        let driver = GpioDriver::new(&registry);
        let rise = InterruptFlags::RISE_EDGE;

        let invalid = Err(GpioError::InvalidParameter);
        assert_eq!(driver.configure_interrupt(PortPin::new(Port::B, 16), 0, rise, &NOOP), invalid);
        assert_eq!(driver.configure_interrupt(PortPin::new(Port::D, 10), 0, rise, &NOOP), invalid);
        assert_eq!(driver.configure_interrupt(PortPin::new(Port::Ulp, 1), 0, rise, &NOOP), invalid);
        assert_eq!(driver.configure_interrupt(PortPin::new(Port::A, 5), 8, rise, &NOOP), invalid);
        assert_eq!(
            driver.configure_interrupt(PortPin::new(Port::A, 5), 0, InterruptFlags::empty(), &NOOP),
            invalid
        );
        assert_eq!(
            driver.configure_interrupt(PortPin::new(Port::A, 5), 0, InterruptFlags::from_bits_retain(0x30), &NOOP),
            invalid
        );
        assert_eq!(driver.configure_ulp_interrupt(12, 0, rise, &NOOP), invalid);
        assert_eq!(driver.configure_uulp_interrupt(5, rise, &NOOP), invalid);

        assert!(registry.is_empty());
        mock_nvic_enable_irq(mry::Any).assert_called(0);
        mock_egpio_pin_intr_config(mry::Any, mry::Any, mry::Any, mry::Any, mry::Any).assert_called(0);
    }

    static FIRST: Counter = Counter(AtomicU32::new(0));
    static SECOND: Counter = Counter(AtomicU32::new(0));

    /// Tests that a second registration on a taken line is refused and the first stays active.
    ///
    /// # Algorithm
    ///
    /// 1. Register FIRST on line 5
    /// 2. Register SECOND on line 5 from another pin: Busy, no extra hardware writes
    /// 3. Dispatch line 5 and verify only FIRST ran
    #[test]
    #[mry::lock(
        nvic_set_priority, nvic_enable_irq, egpio_pin_intr_config, egpio_pin_intr_unmask,
        egpio_pin_intr_clear
    )]
    fn test_configure_interrupt_busy() {
        mock_nvic_set_priority(mry::Any, mry::Any).returns(());
        mock_nvic_enable_irq(mry::Any).returns(());
        mock_egpio_pin_intr_config(mry::Any, mry::Any, mry::Any, mry::Any, mry::Any).returns(());
        mock_egpio_pin_intr_unmask(mry::Any, mry::Any).returns(());
        mock_egpio_pin_intr_clear(mry::Any, mry::Any).returns(());

        let registry = InterruptRegistry::new();
        let driver = GpioDriver::new(&registry);
        let rise = InterruptFlags::RISE_EDGE;

        assert_eq!(driver.configure_interrupt(PortPin::new(Port::A, 6), 5, rise, &FIRST), Ok(()));
        assert_eq!(
            driver.configure_interrupt(PortPin::new(Port::A, 7), 5, rise, &SECOND),
            Err(GpioError::Busy)
        );
        mock_egpio_pin_intr_config(mry::Any, mry::Any, mry::Any, mry::Any, mry::Any).assert_called(1);

        dispatch_pin_interrupt(&registry, 5);

        assert_eq!(FIRST.0.load(Ordering::SeqCst), 1);
        assert_eq!(SECOND.0.load(Ordering::SeqCst), 0);
    }

    #[test]
    #[mry::lock(nvic_set_priority, nvic_enable_irq, npss_intr_config, npss_intr_unmask)]
    fn test_configure_uulp_interrupt() {
        mock_nvic_set_priority(mry::Any, mry::Any).returns(());
        mock_nvic_enable_irq(mry::Any).returns(());
        mock_npss_intr_config(mry::Any, mry::Any).returns(());
        mock_npss_intr_unmask(mry::Any).returns(());

        let registry = InterruptRegistry::new();
        let driver = GpioDriver::new(&registry);

        assert_eq!(driver.configure_uulp_interrupt(3, InterruptFlags::LEVEL_LOW, &NOOP), Ok(()));

        assert!(registry.is_registered(InterruptSlot::Uulp(3)));
        mock_nvic_set_priority(21u16, 4u8).assert_called(1);
        mock_nvic_enable_irq(21u16).assert_called(1);
        mock_npss_intr_config(3u8, 0x02u8).assert_called(1);
        mock_npss_intr_unmask(3u8).assert_called(1);
    }

    #[test]
    #[mry::lock(nvic_set_priority, nvic_enable_irq, egpio_pin_intr_config, egpio_pin_intr_unmask)]
    fn test_configure_ulp_interrupt() {
        mock_nvic_set_priority(mry::Any, mry::Any).returns(());
        mock_nvic_enable_irq(mry::Any).returns(());
        mock_egpio_pin_intr_config(mry::Any, mry::Any, mry::Any, mry::Any, mry::Any).returns(());
        mock_egpio_pin_intr_unmask(mry::Any, mry::Any).returns(());

        let registry = InterruptRegistry::new();
        let driver = GpioDriver::new(&registry);

        assert_eq!(driver.configure_ulp_interrupt(9, 1, InterruptFlags::FALL_EDGE, &NOOP), Ok(()));

        mock_nvic_enable_irq(18u16).assert_called(1);
        mock_egpio_pin_intr_config(Egpio::Ulp, 1u8, 0u8, 9u8, 0x08u8).assert_called(1);
        mock_egpio_pin_intr_unmask(Egpio::Ulp, 1u8).assert_called(1);
    }

    /// Tests HP group interrupt setup with two pins of opposite polarity.
    #[test]
    #[mry::lock(
        nvic_set_priority, nvic_enable_irq, egpio_group_pin_deselect, egpio_group_pin_select,
        egpio_group_config, egpio_group_unmask
    )]
    fn test_configure_group_interrupt() {
        mock_nvic_set_priority(mry::Any, mry::Any).returns(());
        mock_nvic_enable_irq(mry::Any).returns(());
        mock_egpio_group_pin_deselect(mry::Any, mry::Any, mry::Any).returns(());
        mock_egpio_group_pin_select(mry::Any, mry::Any, mry::Any, mry::Any).returns(());
        mock_egpio_group_config(mry::Any, mry::Any, mry::Any, mry::Any).returns(());
        mock_egpio_group_unmask(mry::Any, mry::Any).returns(());

        let registry = InterruptRegistry::new();
        let driver = GpioDriver::new(&registry);
        let mut config = GroupInterruptConfig::new(GroupCombine::Or, GroupTrigger::Level);
        config.add_pin(PortPin::new(Port::A, 8), GroupPolarity::High).unwrap();
        config.add_pin(PortPin::new(Port::C, 1), GroupPolarity::Low).unwrap();

        assert_eq!(driver.configure_group_interrupt(1, &config, &NOOP), Ok(()));

        mock_nvic_set_priority(51u16, 6u8).assert_called(1);
        mock_egpio_group_pin_select(Egpio::Hp, 1u8, 8u8, true).assert_called(1);
        mock_egpio_group_pin_select(Egpio::Hp, 1u8, 33u8, false).assert_called(1);
        mock_egpio_group_config(Egpio::Hp, 1u8, true, false).assert_called(1);
        mock_egpio_group_unmask(Egpio::Hp, 1u8).assert_called(1);
        mock_egpio_group_pin_deselect(Egpio::Hp, 1u8, mry::Any).assert_called(HP_PIN_COUNT);
    }

    /// Tests a ULP group interrupt on the shared ULP group vector.
    #[test]
    #[mry::lock(
        nvic_set_priority, nvic_enable_irq, egpio_group_pin_deselect, egpio_group_pin_select,
        egpio_group_config, egpio_group_unmask
    )]
    fn test_configure_ulp_group_interrupt() {
        mock_nvic_set_priority(mry::Any, mry::Any).returns(());
        mock_nvic_enable_irq(mry::Any).returns(());
        mock_egpio_group_pin_deselect(mry::Any, mry::Any, mry::Any).returns(());
        mock_egpio_group_pin_select(mry::Any, mry::Any, mry::Any, mry::Any).returns(());
        mock_egpio_group_config(mry::Any, mry::Any, mry::Any, mry::Any).returns(());
        mock_egpio_group_unmask(mry::Any, mry::Any).returns(());

        let registry = InterruptRegistry::new();
        let driver = GpioDriver::new(&registry);
        let mut config = GroupInterruptConfig::new(GroupCombine::And, GroupTrigger::Edge);
        config.add_pin(PortPin::new(Port::Ulp, 2), GroupPolarity::Low).unwrap();
        config.add_pin(PortPin::new(Port::Ulp, 11), GroupPolarity::High).unwrap();

        assert_eq!(driver.configure_ulp_group_interrupt(0, &config, &NOOP), Ok(()));

        assert!(registry.is_registered(InterruptSlot::UlpGroup(0)));
        mock_nvic_set_priority(19u16, 5u8).assert_called(1);
        mock_nvic_enable_irq(19u16).assert_called(1);
        mock_egpio_group_pin_deselect(Egpio::Ulp, 0u8, mry::Any).assert_called(ULP_PIN_COUNT);
        mock_egpio_group_pin_select(Egpio::Ulp, 0u8, 2u8, false).assert_called(1);
        mock_egpio_group_pin_select(Egpio::Ulp, 0u8, 11u8, true).assert_called(1);
        mock_egpio_group_config(Egpio::Ulp, 0u8, false, true).assert_called(1);
        mock_egpio_group_unmask(Egpio::Ulp, 0u8).assert_called(1);
    }

    /// Group 0 membership per HP pin, emulating the GROUP_INTR1_ENABLE bits.
    static GROUP0_MEMBERS: AtomicU64 = AtomicU64::new(0);

    fn group0_members() -> Vec<u8> {
        let members = GROUP0_MEMBERS.load(Ordering::SeqCst);
        (0..64u8).filter(|&pin| members & (1 << pin) != 0).collect()
    }

    /// Tests that a group reconfigured after release only holds its new pins.
    ///
    /// # Algorithm
    ///
    /// 1. Configure HP group 0 with pins 8 and 9
    /// 2. Release the group
    /// 3. Configure it again with pin 10 only
    /// 4. Verify the group's members are exactly pin 10
    #[test]
    #[mry::lock(
        nvic_set_priority, nvic_enable_irq, nvic_disable_irq, egpio_group_pin_deselect,
        egpio_group_pin_select, egpio_group_config, egpio_group_unmask, egpio_group_mask
    )]
    fn test_group_reconfigure_drops_old_pins() {
        mock_nvic_set_priority(mry::Any, mry::Any).returns(());
        mock_nvic_enable_irq(mry::Any).returns(());
        mock_nvic_disable_irq(mry::Any).returns(());
        mock_egpio_group_pin_deselect(Egpio::Hp, 0u8, mry::Any).returns_with(|_: Egpio, _: u8, pin: u8| {
            GROUP0_MEMBERS.fetch_and(!(1u64 << pin), Ordering::SeqCst);
        });
        mock_egpio_group_pin_select(Egpio::Hp, 0u8, mry::Any, mry::Any).returns_with(
            |_: Egpio, _: u8, pin: u8, _: bool| {
                GROUP0_MEMBERS.fetch_or(1u64 << pin, Ordering::SeqCst);
            },
        );
        mock_egpio_group_config(mry::Any, mry::Any, mry::Any, mry::Any).returns(());
        mock_egpio_group_unmask(mry::Any, mry::Any).returns(());
        mock_egpio_group_mask(mry::Any, mry::Any).returns(());

        let registry = InterruptRegistry::new();
        let driver = GpioDriver::new(&registry);

        let mut first = GroupInterruptConfig::new(GroupCombine::And, GroupTrigger::Level);
        first.add_pin(PortPin::new(Port::A, 8), GroupPolarity::High).unwrap();
        first.add_pin(PortPin::new(Port::A, 9), GroupPolarity::High).unwrap();
        assert_eq!(driver.configure_group_interrupt(0, &first, &NOOP), Ok(()));
        assert_eq!(group0_members(), [8, 9]);

        assert_eq!(driver.unregister_interrupt(InterruptSlot::Group(0)), Ok(()));

        let mut second = GroupInterruptConfig::new(GroupCombine::And, GroupTrigger::Level);
        second.add_pin(PortPin::new(Port::A, 10), GroupPolarity::High).unwrap();
        assert_eq!(driver.configure_group_interrupt(0, &second, &NOOP), Ok(()));

        assert_eq!(group0_members(), [10]);
        mock_egpio_group_mask(Egpio::Hp, 0u8).assert_called(1);
        mock_nvic_disable_irq(50u16).assert_called(1);
    }

    /// Tests group validation: empty list, wrong domain, bad group index.
    #[test]
    #[mry::lock(nvic_enable_irq, egpio_group_pin_select)]
    fn test_configure_group_interrupt_rejects() {
        mock_nvic_enable_irq(mry::Any).returns(());
        mock_egpio_group_pin_select(mry::Any, mry::Any, mry::Any, mry::Any).returns(());

        let registry = InterruptRegistry::new();
        let driver = GpioDriver::new(&registry);

        let empty = GroupInterruptConfig::new(GroupCombine::And, GroupTrigger::Edge);
        assert_eq!(driver.configure_group_interrupt(0, &empty, &NOOP), Err(GpioError::NullPointer));

        let mut mixed = GroupInterruptConfig::new(GroupCombine::And, GroupTrigger::Edge);
        mixed.add_pin(PortPin::new(Port::A, 8), GroupPolarity::High).unwrap();
        mixed.add_pin(PortPin::new(Port::Ulp, 2), GroupPolarity::High).unwrap();
        assert_eq!(driver.configure_group_interrupt(0, &mixed, &NOOP), Err(GpioError::InvalidParameter));
        assert_eq!(driver.configure_ulp_group_interrupt(0, &mixed, &NOOP), Err(GpioError::InvalidParameter));
        assert_eq!(driver.configure_group_interrupt(2, &mixed, &NOOP), Err(GpioError::InvalidParameter));

        assert!(registry.is_empty());
        mock_nvic_enable_irq(mry::Any).assert_called(0);
        mock_egpio_group_pin_select(mry::Any, mry::Any, mry::Any, mry::Any).assert_called(0);
    }

    /// Tests that unregistering masks the source, disables a dedicated vector and frees the slot.
    #[test]
    #[mry::lock(egpio_pin_intr_mask, nvic_disable_irq)]
    fn test_unregister_interrupt() {
        mock_egpio_pin_intr_mask(mry::Any, mry::Any).returns(());
        mock_nvic_disable_irq(mry::Any).returns(());

        let registry = InterruptRegistry::new();
        registry.register(InterruptSlot::Pin(4), &NOOP).unwrap();
        registry.register(InterruptSlot::UlpPin(4), &NOOP).unwrap();
        let driver = GpioDriver::new(&registry);

        assert_eq!(driver.unregister_interrupt(InterruptSlot::Pin(4)), Ok(()));
        assert_eq!(driver.unregister_interrupt(InterruptSlot::UlpPin(4)), Ok(()));
        assert_eq!(driver.unregister_interrupt(InterruptSlot::Pin(9)), Err(GpioError::InvalidParameter));

        assert!(registry.is_empty());
        mock_egpio_pin_intr_mask(Egpio::Hp, 4u8).assert_called(1);
        mock_egpio_pin_intr_mask(Egpio::Ulp, 4u8).assert_called(1);
        // The shared ULP vector stays enabled
        mock_nvic_disable_irq(56u16).assert_called(1);
        mock_nvic_disable_irq(mry::Any).assert_called(1);
    }

    #[test]
    #[mry::lock(egpio_pin_intr_status, npss_intr_status, egpio_pin_intr_unmask, npss_intr_unmask)]
    fn test_status_and_unmask() {
        mock_egpio_pin_intr_status(Egpio::Hp, 0u8).returns(true);
        mock_npss_intr_status().returns(1u32 << 4);
        mock_egpio_pin_intr_unmask(mry::Any, mry::Any).returns(());
        mock_npss_intr_unmask(mry::Any).returns(());

        let registry = InterruptRegistry::new();
        let driver = GpioDriver::new(&registry);

        assert_eq!(driver.interrupt_status(InterruptSlot::Pin(0)), Ok(true));
        assert_eq!(driver.interrupt_status(InterruptSlot::Uulp(4)), Ok(true));
        assert_eq!(driver.interrupt_status(InterruptSlot::Uulp(3)), Ok(false));
        assert_eq!(driver.unmask_interrupt(InterruptSlot::Uulp(1)), Ok(()));
        assert_eq!(driver.unmask_interrupt(InterruptSlot::Uulp(5)), Err(GpioError::InvalidParameter));

        mock_npss_intr_unmask(1u8).assert_called(1);
    }
}
