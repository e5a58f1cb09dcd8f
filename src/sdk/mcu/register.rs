#![allow(non_camel_case_types)]

use bitflags::bitflags;

use crate::{BIT, BIT_RNG};

/// Absolute register accessor pair: `read_<name>()` / `write_<name>(value)`.
#[macro_export]
macro_rules! regrw {
    ( $x:ident, $a:expr, $s:ty ) => {
        paste::paste! {
            #[cfg_attr(test, mry::mry)]
            pub fn [<read_ $x>]() -> $s {
                unsafe {
                    return core::ptr::read_volatile(($a) as *const $s)
                }
            }

            #[cfg_attr(test, mry::mry)]
            pub fn [<write_ $x>](value: $s) {
                unsafe {
                    core::ptr::write_volatile(($a) as *mut $s, value)
                }
            }
        }
    };
}

/// Indexed accessor pair, `i` is a byte offset from the register address.
#[macro_export]
macro_rules! regrw_idx {
    ( $x:ident, $a:expr, $s:ty ) => {
        paste::paste! {
            #[cfg_attr(test, mry::mry)]
            pub fn [<read_ $x>](i: u32) -> $s {
                unsafe {
                    return core::ptr::read_volatile((($a) + i) as *const $s)
                }
            }

            #[cfg_attr(test, mry::mry)]
            pub fn [<write_ $x>](value: $s, i: u32) {
                unsafe {
                    core::ptr::write_volatile((($a) + i) as *mut $s, value)
                }
            }
        }
    };
}

/// Accessor pair for a register that exists once per peripheral instance.
///
/// The HP and ULP EGPIO blocks share one layout, so the instance base address is
/// passed at runtime and `i` is the byte offset of the pin/port/line slot.
#[macro_export]
macro_rules! regrw_blk {
    ( $x:ident, $o:expr, $s:ty ) => {
        paste::paste! {
            #[cfg_attr(test, mry::mry)]
            pub fn [<read_ $x>](base: u32, i: u32) -> $s {
                unsafe {
                    return core::ptr::read_volatile((base + ($o) + i) as *const $s)
                }
            }

            #[cfg_attr(test, mry::mry)]
            pub fn [<write_ $x>](value: $s, base: u32, i: u32) {
                unsafe {
                    core::ptr::write_volatile((base + ($o) + i) as *mut $s, value)
                }
            }
        }
    };
}

/****************************************************
 EGPIO blocks (HP: M4 SoC GPIO, ULP: ULPSS GPIO)
 *****************************************************/
pub const EGPIO_BASE: u32 = 0x4613_0000;
pub const ULP_EGPIO_BASE: u32 = 0x2404_C000;

/// Stride between two `PIN_CONFIG` slots.
pub const EGPIO_PIN_STRIDE: u32 = 0x10;
/// Stride between two `PORT_CONFIG` slots.
pub const EGPIO_PORT_STRIDE: u32 = 0x10;
/// Stride between two pin interrupt slots.
pub const EGPIO_INTR_STRIDE: u32 = 0x04;
/// Stride between two group interrupt slots.
pub const EGPIO_GROUP_STRIDE: u32 = 0x10;

regrw_blk!(reg_egpio_pin_config, 0x000, u32);
regrw_blk!(reg_egpio_bit_load, 0x004, u32);
regrw_blk!(reg_egpio_toggle, 0x008, u32);

regrw_blk!(reg_egpio_port_set, 0x804, u32);
regrw_blk!(reg_egpio_port_clear, 0x808, u32);
regrw_blk!(reg_egpio_port_read, 0x80c, u32);

regrw_blk!(reg_egpio_intr_ctrl, 0x1000, u32);
regrw_blk!(reg_egpio_intr_status, 0x1080, u32);

regrw_blk!(reg_egpio_group_ctrl, 0x1400, u32);
regrw_blk!(reg_egpio_group_status, 0x1404, u32);

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FLD_EGPIO_PIN_CONFIG: u32 {
        /// 1 = input, 0 = output
        const DIRECTION =               BIT!(0);
        const PORTMASK =                BIT!(1);
        const MODE =                    BIT_RNG!(2, 5);
        const GROUP_INTR1_ENABLE =      BIT!(8);
        const GROUP_INTR1_POLARITY =    BIT!(9);
        const GROUP_INTR2_ENABLE =      BIT!(10);
        const GROUP_INTR2_POLARITY =    BIT!(11);
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FLD_EGPIO_BIT_LOAD: u32 {
        const VALUE =                   BIT!(0);
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FLD_EGPIO_INTR_CTRL: u32 {
        const LEVEL_HIGH_ENABLE =       BIT!(0);
        const LEVEL_LOW_ENABLE =        BIT!(1);
        const RISE_EDGE_ENABLE =        BIT!(2);
        const FALL_EDGE_ENABLE =        BIT!(3);
        const MASK =                    BIT!(4);
        const PIN_NUMBER =              BIT_RNG!(8, 11);
        const PORT_NUMBER =             BIT_RNG!(12, 13);
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FLD_EGPIO_INTR_STATUS: u32 {
        /// Write 1 to clear
        const INTERRUPT_STATUS =        BIT!(0);
        const RISE_EDGE_STATUS =        BIT!(1);
        const FALL_EDGE_STATUS =        BIT!(2);
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FLD_EGPIO_GROUP_CTRL: u32 {
        const MASK =                    BIT!(0);
        /// 1 = OR of the selected pins, 0 = AND
        const AND_OR =                  BIT!(1);
        const ENABLE_WAKEUP =           BIT!(2);
        /// 1 = edge, 0 = level
        const LEVEL_EDGE =              BIT!(3);
        const ENABLE_INTERRUPT =        BIT!(4);
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FLD_EGPIO_GROUP_STATUS: u32 {
        /// Write 1 to clear
        const INTERRUPT_STATUS =        BIT!(0);
        const WAKEUP =                  BIT!(3);
    }
}

/****************************************************
 pad configuration
 *****************************************************/
pub const PAD_CONFIG_BASE: u32 = 0x4600_4000;
pub const ULP_PAD_CONFIG_BASE: u32 = 0x2404_A000;

regrw!(reg_pad_selection, 0x4100_4610, u32);      // pads 0..=21
regrw!(reg_pad_selection_1, 0x4100_4618, u32);    // pads 22..=33
regrw!(reg_host_pad_gpio_mode, 0x4600_8044, u32);
regrw!(reg_ulp_pad_selection, 0x2404_A040, u32);

regrw_idx!(reg_pad_config, PAD_CONFIG_BASE, u32);       // i = pin * 4
regrw_idx!(reg_ulp_pad_config, ULP_PAD_CONFIG_BASE, u32); // i = ulp pin * 4

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FLD_PAD_CONFIG: u32 {
        /// E1/E2 drive strength select
        const DRIVE_STRENGTH =          BIT_RNG!(0, 1);
        const SLEW_RATE =               BIT!(2);
        const SCHMITT_TRIGGER =         BIT!(3);
        const RECEIVER_ENABLE =         BIT!(4);
        /// P1/P2 driver disable state
        const DISABLE_STATE =           BIT_RNG!(6, 7);
    }
}

/****************************************************
 NPSS (UULP) GPIO
 *****************************************************/
pub const NPSS_GPIO_BASE: u32 = 0x2404_8500;
pub const NPSS_INTR_BASE: u32 = 0x1208_0000;

regrw_idx!(reg_npss_gpio_ctrl, NPSS_GPIO_BASE, u32);   // i = pin * 4
regrw!(reg_npss_gpio_in, NPSS_GPIO_BASE + 0x80, u32);

regrw!(reg_npss_intr_mask_set, NPSS_INTR_BASE, u32);
regrw!(reg_npss_intr_mask_clr, NPSS_INTR_BASE + 0x04, u32);
regrw!(reg_npss_intr_clear, NPSS_INTR_BASE + 0x08, u32);
regrw!(reg_npss_intr_status, NPSS_INTR_BASE + 0x0c, u32);

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FLD_NPSS_GPIO_CTRL: u32 {
        const MODE =                    BIT_RNG!(0, 3);
        const RECEIVER_ENABLE =         BIT!(4);
        /// Output driver disable, set = input
        const OEN =                     BIT!(5);
        const OUT =                     BIT!(6);
        const INTR_LEVEL_HIGH =         BIT!(8);
        const INTR_LEVEL_LOW =          BIT!(9);
        const INTR_RISE_EDGE =          BIT!(10);
        const INTR_FALL_EDGE =          BIT!(11);
    }
}

/****************************************************
 GPIO clock gating
 *****************************************************/
regrw!(reg_m4clk_enable_set3, 0x4600_0018, u32);
regrw!(reg_m4clk_enable_clr3, 0x4600_001c, u32);
regrw!(reg_ulp_misc_soft_set, 0x2404_1418, u32);

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FLD_CLK_ENABLE3: u32 {
        const EGPIO_PCLK_ENABLE =       BIT!(19);
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FLD_ULP_MISC_SOFT: u32 {
        const EGPIO_PCLK_EN =           BIT!(5);
    }
}

/****************************************************
 NVIC
 *****************************************************/
regrw_idx!(reg_nvic_iser, 0xE000_E100, u32);   // i = (irq / 32) * 4
regrw_idx!(reg_nvic_icer, 0xE000_E180, u32);
regrw_idx!(reg_nvic_icpr, 0xE000_E280, u32);
regrw_idx!(reg_nvic_ipr, 0xE000_E400, u8);     // i = irq
