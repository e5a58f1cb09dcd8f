use crate::config::{GROUP_INTR_COUNT, PIN_INTR_COUNT, ULP_GROUP_INTR_COUNT, ULP_PIN_INTR_COUNT, UULP_INTR_COUNT};
use crate::sdk::drivers::gpio::interrupt::{InterruptRegistry, InterruptSlot};
use crate::sdk::mcu::gpio::{npss_intr_clear, npss_intr_status};
use crate::BIT;

/// Callback table the vector handlers below dispatch into.
pub static GPIO_INTERRUPTS: InterruptRegistry = InterruptRegistry::new();

/// Invokes the slot's callback, if any. The registry lock is not held during the call.
fn invoke(registry: &InterruptRegistry, slot: InterruptSlot) {
    match registry.get(slot) {
        Some(callback) => callback.on_interrupt(slot.index()),
        None => log::trace!("gpio: {:?} fired with no handler", slot),
    }
}

/// Handles a dedicated HP pin interrupt line: clear, then call back with the line.
pub fn dispatch_pin_interrupt(registry: &InterruptRegistry, line: u8) {
    let slot = InterruptSlot::Pin(line);
    slot.clear_hw();
    log::trace!("gpio: pin interrupt {}", line);
    invoke(registry, slot);
}

pub fn dispatch_group_interrupt(registry: &InterruptRegistry, group: u8) {
    let slot = InterruptSlot::Group(group);
    slot.clear_hw();
    log::trace!("gpio: group interrupt {}", group);
    invoke(registry, slot);
}

/// Scans `count` OR'ed sources, clearing each pending one, and returns the last one seen.
fn scan_last_pending(count: usize, slot_of: fn(u8) -> InterruptSlot) -> Option<InterruptSlot> {
    let mut last = None;
    for index in 0..count as u8 {
        let slot = slot_of(index);
        if slot.pending_hw() {
            slot.clear_hw();
            last = Some(slot);
        }
    }
    last
}

/// Handles the OR'ed ULP pin interrupt vector.
///
/// # Algorithm
///
/// 1. Walk ULP lines 0..=7, clearing every pending one
/// 2. Invoke the callback of the last pending line, once
///
/// # Notes
///
/// * Lines pending together produce a single callback
pub fn dispatch_ulp_pin_interrupt(registry: &InterruptRegistry) {
    if let Some(slot) = scan_last_pending(ULP_PIN_INTR_COUNT, InterruptSlot::UlpPin) {
        log::trace!("gpio: ULP pin interrupt {}", slot.index());
        invoke(registry, slot);
    }
}

/// Handles the ULP group vector shared by both ULP groups, with the same last-wins rule.
pub fn dispatch_ulp_group_interrupt(registry: &InterruptRegistry) {
    if let Some(slot) = scan_last_pending(ULP_GROUP_INTR_COUNT, InterruptSlot::UlpGroup) {
        log::trace!("gpio: ULP group interrupt {}", slot.index());
        invoke(registry, slot);
    }
}

/// Handles the OR'ed UULP vector.
///
/// The NPSS status word is read once; each set pin bit is cleared and the
/// highest one gets the callback.
pub fn dispatch_uulp_interrupt(registry: &InterruptRegistry) {
    let status = npss_intr_status();
    let mut last = None;
    for pin in 0..UULP_INTR_COUNT as u8 {
        if status & BIT!(pin as u32) != 0 {
            npss_intr_clear(BIT!(pin as u32));
            last = Some(pin);
        }
    }
    if let Some(pin) = last {
        log::trace!("gpio: UULP interrupt {}", pin);
        invoke(registry, InterruptSlot::Uulp(pin));
    }
}

macro_rules! pin_irq_handler {
    ( $name:ident, $line:expr ) => {
        #[no_mangle]
        #[allow(non_snake_case)]
        pub extern "C" fn $name() {
            dispatch_pin_interrupt(&GPIO_INTERRUPTS, $line);
        }
    };
}

macro_rules! group_irq_handler {
    ( $name:ident, $group:expr ) => {
        #[no_mangle]
        #[allow(non_snake_case)]
        pub extern "C" fn $name() {
            dispatch_group_interrupt(&GPIO_INTERRUPTS, $group);
        }
    };
}

// Vector names follow the IRQ numbers in `config`
pin_irq_handler!(IRQ052_Handler, 0);
pin_irq_handler!(IRQ053_Handler, 1);
pin_irq_handler!(IRQ054_Handler, 2);
pin_irq_handler!(IRQ055_Handler, 3);
pin_irq_handler!(IRQ056_Handler, 4);
pin_irq_handler!(IRQ057_Handler, 5);
pin_irq_handler!(IRQ058_Handler, 6);
pin_irq_handler!(IRQ059_Handler, 7);

group_irq_handler!(IRQ050_Handler, 0);
group_irq_handler!(IRQ051_Handler, 1);

const _: () = assert!(PIN_INTR_COUNT == 8 && GROUP_INTR_COUNT == 2);

#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn IRQ018_Handler() {
    dispatch_ulp_pin_interrupt(&GPIO_INTERRUPTS);
}

#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn IRQ019_Handler() {
    dispatch_ulp_group_interrupt(&GPIO_INTERRUPTS);
}

#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn IRQ021_Handler() {
    dispatch_uulp_interrupt(&GPIO_INTERRUPTS);
}
