use crate::sdk::mcu::register::{
    write_reg_nvic_icer, write_reg_nvic_icpr, write_reg_nvic_ipr,
    write_reg_nvic_iser,
};
use crate::BIT;

/// Number of priority bits implemented by the core's interrupt controller.
pub const NVIC_PRIO_BITS: u8 = 6;

#[inline(always)]
fn irq_word(irq: u16) -> u32 {
    ((irq as u32) >> 5) << 2
}

#[inline(always)]
fn irq_bit(irq: u16) -> u32 {
    BIT!((irq as u32) & 0x1f)
}

/// Enables a vectored interrupt line.
///
/// The set-enable registers are write-one-to-set, so no read-modify-write is needed.
#[cfg_attr(test, mry::mry)]
pub fn nvic_enable_irq(irq: u16) {
    write_reg_nvic_iser(irq_bit(irq), irq_word(irq));
}

/// Disables a vectored interrupt line.
#[cfg_attr(test, mry::mry)]
pub fn nvic_disable_irq(irq: u16) {
    write_reg_nvic_icer(irq_bit(irq), irq_word(irq));
}

/// Drops a pending request for the line.
#[cfg_attr(test, mry::mry)]
pub fn nvic_clear_pending_irq(irq: u16) {
    write_reg_nvic_icpr(irq_bit(irq), irq_word(irq));
}

/// Sets the priority of a vectored interrupt line.
///
/// Only the upper `NVIC_PRIO_BITS` bits of the priority byte are implemented,
/// so the logical priority is shifted into place before the write.
#[cfg_attr(test, mry::mry)]
pub fn nvic_set_priority(irq: u16, priority: u8) {
    write_reg_nvic_ipr(priority << (8 - NVIC_PRIO_BITS), irq as u32);
}
