use core::cell::RefCell;

use critical_section::Mutex;

use crate::config::{
    IrqLine, GROUP_INTR_COUNT, GROUP_INTR_IRQ, PIN_INTR_COUNT, PIN_INTR_IRQ, ULP_GROUP_INTR_COUNT,
    ULP_GROUP_INTR_IRQ, ULP_PIN_INTR_COUNT, ULP_PIN_INTR_IRQ, UULP_INTR_COUNT, UULP_INTR_IRQ,
};
use crate::sdk::drivers::gpio::error::GpioError;
use crate::sdk::mcu::gpio::{
    egpio_group_clear, egpio_group_mask, egpio_group_status, egpio_group_unmask,
    egpio_pin_intr_clear, egpio_pin_intr_mask, egpio_pin_intr_status, egpio_pin_intr_unmask,
    npss_intr_clear, npss_intr_mask, npss_intr_status, npss_intr_unmask, Egpio,
};
use crate::BIT;

/// Receiver of a GPIO interrupt. Runs in interrupt context.
pub trait InterruptCallback: Sync {
    /// `line` is the pin line, group index or UULP pin that fired.
    fn on_interrupt(&self, line: u8);
}

impl<F: Fn(u8) + Sync> InterruptCallback for F {
    fn on_interrupt(&self, line: u8) {
        self(line)
    }
}

pub type Callback = &'static dyn InterruptCallback;

/// One hardware interrupt source that can own a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptSlot {
    /// HP pin interrupt line 0..=7
    Pin(u8),
    /// HP group interrupt 0..=1
    Group(u8),
    /// ULP pin interrupt line 0..=7
    UlpPin(u8),
    /// ULP group interrupt 0..=1
    UlpGroup(u8),
    /// UULP pin 0..=4
    Uulp(u8),
}

impl InterruptSlot {
    pub const fn index(self) -> u8 {
        match self {
            InterruptSlot::Pin(i)
            | InterruptSlot::Group(i)
            | InterruptSlot::UlpPin(i)
            | InterruptSlot::UlpGroup(i)
            | InterruptSlot::Uulp(i) => i,
        }
    }

    const fn count(self) -> usize {
        match self {
            InterruptSlot::Pin(_) => PIN_INTR_COUNT,
            InterruptSlot::Group(_) => GROUP_INTR_COUNT,
            InterruptSlot::UlpPin(_) => ULP_PIN_INTR_COUNT,
            InterruptSlot::UlpGroup(_) => ULP_GROUP_INTR_COUNT,
            InterruptSlot::Uulp(_) => UULP_INTR_COUNT,
        }
    }

    /// Every slot of every domain, HP first.
    pub fn all() -> impl Iterator<Item = InterruptSlot> {
        (0..PIN_INTR_COUNT as u8)
            .map(InterruptSlot::Pin)
            .chain((0..GROUP_INTR_COUNT as u8).map(InterruptSlot::Group))
            .chain((0..ULP_PIN_INTR_COUNT as u8).map(InterruptSlot::UlpPin))
            .chain((0..ULP_GROUP_INTR_COUNT as u8).map(InterruptSlot::UlpGroup))
            .chain((0..UULP_INTR_COUNT as u8).map(InterruptSlot::Uulp))
    }

    pub fn validate(self) -> Result<(), GpioError> {
        if self.index() as usize >= self.count() {
            log::warn!("gpio: interrupt slot {:?} out of range", self);
            return Err(GpioError::InvalidParameter);
        }
        Ok(())
    }

    /// Interrupt controller line serving this slot.
    ///
    /// HP pin and group slots each own a vector. ULP pin slots share one OR'ed
    /// vector, as do the UULP pins.
    pub fn irq_line(self) -> IrqLine {
        match self {
            InterruptSlot::Pin(line) => PIN_INTR_IRQ[line as usize % PIN_INTR_COUNT],
            InterruptSlot::Group(group) => GROUP_INTR_IRQ[group as usize % GROUP_INTR_COUNT],
            InterruptSlot::UlpPin(_) => ULP_PIN_INTR_IRQ,
            InterruptSlot::UlpGroup(_) => ULP_GROUP_INTR_IRQ,
            InterruptSlot::Uulp(_) => UULP_INTR_IRQ,
        }
    }

    /// True when no other slot is served by the same vector.
    pub fn owns_irq_line(self) -> bool {
        matches!(self, InterruptSlot::Pin(_) | InterruptSlot::Group(_))
    }

    pub(crate) fn mask_hw(self) {
        match self {
            InterruptSlot::Pin(line) => egpio_pin_intr_mask(Egpio::Hp, line),
            InterruptSlot::Group(group) => egpio_group_mask(Egpio::Hp, group),
            InterruptSlot::UlpPin(line) => egpio_pin_intr_mask(Egpio::Ulp, line),
            InterruptSlot::UlpGroup(group) => egpio_group_mask(Egpio::Ulp, group),
            InterruptSlot::Uulp(pin) => npss_intr_mask(pin),
        }
    }

    pub(crate) fn unmask_hw(self) {
        match self {
            InterruptSlot::Pin(line) => egpio_pin_intr_unmask(Egpio::Hp, line),
            InterruptSlot::Group(group) => egpio_group_unmask(Egpio::Hp, group),
            InterruptSlot::UlpPin(line) => egpio_pin_intr_unmask(Egpio::Ulp, line),
            InterruptSlot::UlpGroup(group) => egpio_group_unmask(Egpio::Ulp, group),
            InterruptSlot::Uulp(pin) => npss_intr_unmask(pin),
        }
    }

    pub(crate) fn pending_hw(self) -> bool {
        match self {
            InterruptSlot::Pin(line) => egpio_pin_intr_status(Egpio::Hp, line),
            InterruptSlot::Group(group) => egpio_group_status(Egpio::Hp, group),
            InterruptSlot::UlpPin(line) => egpio_pin_intr_status(Egpio::Ulp, line),
            InterruptSlot::UlpGroup(group) => egpio_group_status(Egpio::Ulp, group),
            InterruptSlot::Uulp(pin) => npss_intr_status() & BIT!(pin as u32) != 0,
        }
    }

    pub(crate) fn clear_hw(self) {
        match self {
            InterruptSlot::Pin(line) => egpio_pin_intr_clear(Egpio::Hp, line),
            InterruptSlot::Group(group) => egpio_group_clear(Egpio::Hp, group),
            InterruptSlot::UlpPin(line) => egpio_pin_intr_clear(Egpio::Ulp, line),
            InterruptSlot::UlpGroup(group) => egpio_group_clear(Egpio::Ulp, group),
            InterruptSlot::Uulp(pin) => npss_intr_clear(BIT!(pin as u32)),
        }
    }
}

struct Slots {
    pin: [Option<Callback>; PIN_INTR_COUNT],
    group: [Option<Callback>; GROUP_INTR_COUNT],
    ulp_pin: [Option<Callback>; ULP_PIN_INTR_COUNT],
    ulp_group: [Option<Callback>; ULP_GROUP_INTR_COUNT],
    uulp: [Option<Callback>; UULP_INTR_COUNT],
}

impl Slots {
    const EMPTY: Slots = Slots {
        pin: [None; PIN_INTR_COUNT],
        group: [None; GROUP_INTR_COUNT],
        ulp_pin: [None; ULP_PIN_INTR_COUNT],
        ulp_group: [None; ULP_GROUP_INTR_COUNT],
        uulp: [None; UULP_INTR_COUNT],
    };

    fn entry(&mut self, slot: InterruptSlot) -> Result<&mut Option<Callback>, GpioError> {
        let index = slot.index() as usize;
        let table: &mut [Option<Callback>] = match slot {
            InterruptSlot::Pin(_) => &mut self.pin,
            InterruptSlot::Group(_) => &mut self.group,
            InterruptSlot::UlpPin(_) => &mut self.ulp_pin,
            InterruptSlot::UlpGroup(_) => &mut self.ulp_group,
            InterruptSlot::Uulp(_) => &mut self.uulp,
        };
        table.get_mut(index).ok_or(GpioError::InvalidParameter)
    }

    fn is_empty(&self) -> bool {
        self.pin
            .iter()
            .chain(self.group.iter())
            .chain(self.ulp_pin.iter())
            .chain(self.ulp_group.iter())
            .chain(self.uulp.iter())
            .all(Option::is_none)
    }
}

/// Callback table for every GPIO interrupt source.
///
/// Each slot holds at most one callback. A slot must be released with
/// [`InterruptRegistry::unregister`] before it can be taken again.
pub struct InterruptRegistry {
    slots: Mutex<RefCell<Slots>>,
}

impl InterruptRegistry {
    pub const fn new() -> Self {
        InterruptRegistry { slots: Mutex::new(RefCell::new(Slots::EMPTY)) }
    }

    /// Stores `callback` in an empty slot.
    ///
    /// # Notes
    ///
    /// * An occupied slot is left untouched and `Busy` is returned
    pub fn register(&self, slot: InterruptSlot, callback: Callback) -> Result<(), GpioError> {
        slot.validate()?;
        critical_section::with(|cs| {
            let mut slots = self.slots.borrow_ref_mut(cs);
            let entry = slots.entry(slot)?;
            if entry.is_some() {
                log::warn!("gpio: interrupt slot {:?} busy", slot);
                return Err(GpioError::Busy);
            }
            *entry = Some(callback);
            Ok(())
        })
    }

    /// Empties a slot, whether or not it held a callback.
    pub fn unregister(&self, slot: InterruptSlot) -> Result<(), GpioError> {
        slot.validate()?;
        critical_section::with(|cs| {
            *self.slots.borrow_ref_mut(cs).entry(slot)? = None;
            Ok(())
        })
    }

    /// Returns a copy of the slot's callback. Out-of-range slots read as empty.
    pub fn get(&self, slot: InterruptSlot) -> Option<Callback> {
        critical_section::with(|cs| {
            self.slots
                .borrow_ref_mut(cs)
                .entry(slot)
                .ok()
                .and_then(|entry| *entry)
        })
    }

    pub fn is_registered(&self, slot: InterruptSlot) -> bool {
        self.get(slot).is_some()
    }

    /// True when no slot of any domain holds a callback.
    pub fn is_empty(&self) -> bool {
        critical_section::with(|cs| self.slots.borrow_ref(cs).is_empty())
    }

    pub fn clear(&self) {
        critical_section::with(|cs| {
            *self.slots.borrow_ref_mut(cs) = Slots::EMPTY;
        });
    }
}

impl Default for InterruptRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::{AtomicU32, Ordering};

    struct Recorder(AtomicU32);

    impl InterruptCallback for Recorder {
        fn on_interrupt(&self, line: u8) {
            self.0.store(line as u32 + 100, Ordering::SeqCst);
        }
    }

    static FIRST: Recorder = Recorder(AtomicU32::new(0));
    static SECOND: Recorder = Recorder(AtomicU32::new(0));

    /// Tests the single-owner rule of a slot.
    ///
    /// # Algorithm
    ///
    /// 1. Register FIRST on HP line 3
    /// 2. Registering SECOND on the same slot fails with Busy
    /// 3. The stored callback is still FIRST
    /// 4. After unregister, SECOND can take the slot
    #[test]
    fn test_register_busy_keeps_first() {
        let registry = InterruptRegistry::new();
        let slot = InterruptSlot::Pin(3);

        assert_eq!(registry.register(slot, &FIRST), Ok(()));
        assert_eq!(registry.register(slot, &SECOND), Err(GpioError::Busy));

        if let Some(callback) = registry.get(slot) {
            callback.on_interrupt(3);
        }
        assert_eq!(FIRST.0.load(Ordering::SeqCst), 103);
        assert_eq!(SECOND.0.load(Ordering::SeqCst), 0);

        assert_eq!(registry.unregister(slot), Ok(()));
        assert!(!registry.is_registered(slot));
        assert_eq!(registry.register(slot, &SECOND), Ok(()));
    }

    /// Tests that a plain function pointer works as a callback and that
    /// slots of different domains do not collide.
    #[test]
    fn test_slots_are_independent_per_domain() {
        static NOOP: fn(u8) = |_| {};
        let registry = InterruptRegistry::new();

        assert_eq!(registry.register(InterruptSlot::Pin(0), &NOOP), Ok(()));
        assert_eq!(registry.register(InterruptSlot::UlpPin(0), &NOOP), Ok(()));
        assert_eq!(registry.register(InterruptSlot::Uulp(0), &NOOP), Ok(()));
        assert_eq!(registry.register(InterruptSlot::Group(0), &NOOP), Ok(()));
        assert_eq!(registry.register(InterruptSlot::UlpGroup(0), &NOOP), Ok(()));
        assert!(registry.is_registered(InterruptSlot::Uulp(0)));
        assert!(!registry.is_registered(InterruptSlot::Uulp(1)));
    }

    #[test]
    fn test_out_of_range_slots_rejected() {
        let registry = InterruptRegistry::new();

        assert_eq!(registry.register(InterruptSlot::Pin(8), &FIRST), Err(GpioError::InvalidParameter));
        assert_eq!(registry.register(InterruptSlot::Group(2), &FIRST), Err(GpioError::InvalidParameter));
        assert_eq!(registry.register(InterruptSlot::Uulp(5), &FIRST), Err(GpioError::InvalidParameter));
        assert_eq!(registry.unregister(InterruptSlot::UlpGroup(2)), Err(GpioError::InvalidParameter));
        assert!(registry.get(InterruptSlot::UlpPin(8)).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_clear_empties_every_slot() {
        let registry = InterruptRegistry::new();
        registry.register(InterruptSlot::Pin(7), &FIRST).unwrap();
        registry.register(InterruptSlot::Uulp(4), &FIRST).unwrap();
        assert!(!registry.is_empty());

        registry.clear();

        assert!(registry.is_empty());
    }

    #[test]
    fn test_unregister_empty_slot_is_ok() {
        let registry = InterruptRegistry::new();
        assert_eq!(registry.unregister(InterruptSlot::UlpPin(2)), Ok(()));
    }

    #[test]
    fn test_all_slots_are_valid() {
        assert_eq!(InterruptSlot::all().count(), 8 + 2 + 8 + 2 + 5);
        assert!(InterruptSlot::all().all(|slot| slot.validate().is_ok()));
    }

    #[test]
    fn test_irq_line_table() {
        assert_eq!(InterruptSlot::Pin(0).irq_line(), IrqLine { irq: 52, priority: 7 });
        assert_eq!(InterruptSlot::Pin(7).irq_line().irq, 59);
        assert_eq!(InterruptSlot::Group(1).irq_line(), IrqLine { irq: 51, priority: 6 });
        assert_eq!(InterruptSlot::UlpPin(5).irq_line().irq, 18);
        assert_eq!(InterruptSlot::UlpGroup(1).irq_line().irq, 19);
        assert_eq!(InterruptSlot::Uulp(3).irq_line(), IrqLine { irq: 21, priority: 4 });
        assert!(InterruptSlot::Group(0).owns_irq_line());
        assert!(!InterruptSlot::Uulp(0).owns_irq_line());
    }
}
