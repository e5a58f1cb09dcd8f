use crate::sdk::mcu::register::{
    read_reg_egpio_bit_load, read_reg_egpio_group_ctrl, read_reg_egpio_group_status,
    read_reg_egpio_intr_ctrl, read_reg_egpio_intr_status, read_reg_egpio_pin_config,
    read_reg_egpio_port_read, read_reg_host_pad_gpio_mode, read_reg_npss_gpio_ctrl,
    read_reg_npss_gpio_in, read_reg_npss_intr_status, read_reg_pad_config, read_reg_pad_selection,
    read_reg_pad_selection_1, read_reg_ulp_misc_soft_set, read_reg_ulp_pad_config,
    read_reg_ulp_pad_selection, write_reg_egpio_bit_load, write_reg_egpio_group_ctrl,
    write_reg_egpio_group_status, write_reg_egpio_intr_ctrl, write_reg_egpio_intr_status,
    write_reg_egpio_pin_config, write_reg_egpio_port_clear, write_reg_egpio_port_set,
    write_reg_egpio_toggle, write_reg_host_pad_gpio_mode, write_reg_m4clk_enable_clr3,
    write_reg_m4clk_enable_set3, write_reg_npss_gpio_ctrl, write_reg_npss_intr_clear,
    write_reg_npss_intr_mask_clr, write_reg_npss_intr_mask_set, write_reg_pad_config,
    write_reg_pad_selection, write_reg_pad_selection_1, write_reg_ulp_misc_soft_set,
    write_reg_ulp_pad_config, write_reg_ulp_pad_selection, EGPIO_BASE, EGPIO_GROUP_STRIDE,
    EGPIO_INTR_STRIDE, EGPIO_PIN_STRIDE, EGPIO_PORT_STRIDE, FLD_CLK_ENABLE3,
    FLD_EGPIO_BIT_LOAD, FLD_EGPIO_GROUP_CTRL, FLD_EGPIO_GROUP_STATUS, FLD_EGPIO_INTR_CTRL,
    FLD_EGPIO_INTR_STATUS, FLD_EGPIO_PIN_CONFIG, FLD_NPSS_GPIO_CTRL, FLD_PAD_CONFIG,
    FLD_ULP_MISC_SOFT, ULP_EGPIO_BASE,
};
use crate::config::{HOST_PAD_MIN, HP_PINS_PER_PORT};
use crate::{BIT, BM_CLR, BM_SET, GET_FLD, MASK_VAL, SET_FLD_V};

/// Pads 0..=21 live in the first pad-selection register, the rest in the second.
pub const PAD_SELECTION_SPLIT: u8 = 22;

/// Mask of the four trigger bits shared by pin, group and NPSS interrupt configuration.
pub const INTR_TRIGGER_MASK: u8 = 0x0f;

/// EGPIO instance. The HP and ULP domains use the same block layout at different bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Egpio {
    Hp,
    Ulp,
}

impl Egpio {
    pub const fn base(self) -> u32 {
        match self {
            Egpio::Hp => EGPIO_BASE,
            Egpio::Ulp => ULP_EGPIO_BASE,
        }
    }
}

/// GPIO pin direction.
///
/// The EGPIO direction bit reads 1 for input, matching the discriminants here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioDirection {
    Output = 0,
    Input = 1,
}

#[inline(always)]
fn pin_slot(pin: u8) -> u32 {
    pin as u32 * EGPIO_PIN_STRIDE
}

#[inline(always)]
fn port_slot(port: u8) -> u32 {
    port as u32 * EGPIO_PORT_STRIDE
}

#[inline(always)]
fn intr_slot(line: u8) -> u32 {
    line as u32 * EGPIO_INTR_STRIDE
}

#[inline(always)]
fn group_slot(group: u8) -> u32 {
    group as u32 * EGPIO_GROUP_STRIDE
}

/// Sets the alternate-function mode of an EGPIO pin.
///
/// # Parameters
///
/// * `egpio` - The EGPIO instance owning the pin
/// * `pin` - Linear pin number inside the instance
/// * `mode` - Mode value, truncated to the 4-bit MODE field
///
/// # Notes
///
/// * Range checking against the domain's maximum mode happens in the driver layer
#[cfg_attr(test, mry::mry)]
pub fn egpio_set_pin_mode(egpio: Egpio, pin: u8, mode: u8) {
    let mut val = read_reg_egpio_pin_config(egpio.base(), pin_slot(pin));
    SET_FLD_V!(val, FLD_EGPIO_PIN_CONFIG::MODE.bits(), mode);
    write_reg_egpio_pin_config(val, egpio.base(), pin_slot(pin));
}

#[cfg_attr(test, mry::mry)]
pub fn egpio_get_pin_mode(egpio: Egpio, pin: u8) -> u8 {
    let val = read_reg_egpio_pin_config(egpio.base(), pin_slot(pin));
    GET_FLD!(FLD_EGPIO_PIN_CONFIG::MODE.bits(), val) as u8
}

/// Sets the direction of an EGPIO pin.
#[cfg_attr(test, mry::mry)]
pub fn egpio_set_direction(egpio: Egpio, pin: u8, direction: GpioDirection) {
    let mut val = read_reg_egpio_pin_config(egpio.base(), pin_slot(pin));
    match direction {
        GpioDirection::Input => BM_SET!(val, FLD_EGPIO_PIN_CONFIG::DIRECTION.bits()),
        GpioDirection::Output => BM_CLR!(val, FLD_EGPIO_PIN_CONFIG::DIRECTION.bits()),
    }
    write_reg_egpio_pin_config(val, egpio.base(), pin_slot(pin));
}

#[cfg_attr(test, mry::mry)]
pub fn egpio_get_direction(egpio: Egpio, pin: u8) -> GpioDirection {
    let val = read_reg_egpio_pin_config(egpio.base(), pin_slot(pin));
    if val & FLD_EGPIO_PIN_CONFIG::DIRECTION.bits() != 0 {
        GpioDirection::Input
    } else {
        GpioDirection::Output
    }
}

/// Drives the output latch of a pin high or low.
///
/// The bit-load register holds a single bit per pin, so no read-modify-write is needed.
#[cfg_attr(test, mry::mry)]
pub fn egpio_set_pin_value(egpio: Egpio, pin: u8, value: bool) {
    let val = if value { FLD_EGPIO_BIT_LOAD::VALUE.bits() } else { 0 };
    write_reg_egpio_bit_load(val, egpio.base(), pin_slot(pin));
}

/// Returns the level the pin is driving (the output latch, not the pad).
#[cfg_attr(test, mry::mry)]
pub fn egpio_get_pin_output(egpio: Egpio, pin: u8) -> bool {
    read_reg_egpio_bit_load(egpio.base(), pin_slot(pin)) & FLD_EGPIO_BIT_LOAD::VALUE.bits() != 0
}

#[cfg_attr(test, mry::mry)]
pub fn egpio_toggle_pin(egpio: Egpio, pin: u8) {
    write_reg_egpio_toggle(1, egpio.base(), pin_slot(pin));
}

/// Reads the pad level of a pin through its 16-bit port view.
///
/// # Notes
///
/// * The receiver must be enabled for the value to be meaningful
#[cfg_attr(test, mry::mry)]
pub fn egpio_get_pin_input(egpio: Egpio, pin: u8) -> bool {
    let port = pin / HP_PINS_PER_PORT;
    let bit = (pin % HP_PINS_PER_PORT) as u32;
    read_reg_egpio_port_read(egpio.base(), port_slot(port)) & BIT!(bit) != 0
}

/// Sets every pin of `mask` in a 16-bit port view.
#[cfg_attr(test, mry::mry)]
pub fn egpio_set_port(egpio: Egpio, port: u8, mask: u16) {
    write_reg_egpio_port_set(mask as u32, egpio.base(), port_slot(port));
}

#[cfg_attr(test, mry::mry)]
pub fn egpio_clear_port(egpio: Egpio, port: u8, mask: u16) {
    write_reg_egpio_port_clear(mask as u32, egpio.base(), port_slot(port));
}

#[cfg_attr(test, mry::mry)]
pub fn egpio_get_port(egpio: Egpio, port: u8) -> u16 {
    (read_reg_egpio_port_read(egpio.base(), port_slot(port)) & 0xffff) as u16
}

/// Programs a pin interrupt line.
///
/// # Parameters
///
/// * `line` - Pin interrupt line (0..=7)
/// * `port` - Port number of the source pin
/// * `pin` - Pin number within the port
/// * `flags` - Trigger bits: level high, level low, rise edge, fall edge
///
/// # Notes
///
/// * The line is left masked; the caller unmasks it once a handler is in place
#[cfg_attr(test, mry::mry)]
pub fn egpio_pin_intr_config(egpio: Egpio, line: u8, port: u8, pin: u8, flags: u8) {
    let val = ((flags & INTR_TRIGGER_MASK) as u32)
        | FLD_EGPIO_INTR_CTRL::MASK.bits()
        | MASK_VAL!(
            FLD_EGPIO_INTR_CTRL::PIN_NUMBER.bits(), pin,
            FLD_EGPIO_INTR_CTRL::PORT_NUMBER.bits(), port
        );
    write_reg_egpio_intr_ctrl(val, egpio.base(), intr_slot(line));
}

#[cfg_attr(test, mry::mry)]
pub fn egpio_pin_intr_mask(egpio: Egpio, line: u8) {
    let mut val = read_reg_egpio_intr_ctrl(egpio.base(), intr_slot(line));
    BM_SET!(val, FLD_EGPIO_INTR_CTRL::MASK.bits());
    write_reg_egpio_intr_ctrl(val, egpio.base(), intr_slot(line));
}

#[cfg_attr(test, mry::mry)]
pub fn egpio_pin_intr_unmask(egpio: Egpio, line: u8) {
    let mut val = read_reg_egpio_intr_ctrl(egpio.base(), intr_slot(line));
    BM_CLR!(val, FLD_EGPIO_INTR_CTRL::MASK.bits());
    write_reg_egpio_intr_ctrl(val, egpio.base(), intr_slot(line));
}

#[cfg_attr(test, mry::mry)]
pub fn egpio_pin_intr_status(egpio: Egpio, line: u8) -> bool {
    read_reg_egpio_intr_status(egpio.base(), intr_slot(line))
        & FLD_EGPIO_INTR_STATUS::INTERRUPT_STATUS.bits()
        != 0
}

/// Clears the pending status of a pin interrupt line (write one to clear).
#[cfg_attr(test, mry::mry)]
pub fn egpio_pin_intr_clear(egpio: Egpio, line: u8) {
    write_reg_egpio_intr_status(
        (FLD_EGPIO_INTR_STATUS::INTERRUPT_STATUS
            | FLD_EGPIO_INTR_STATUS::RISE_EDGE_STATUS
            | FLD_EGPIO_INTR_STATUS::FALL_EDGE_STATUS)
            .bits(),
        egpio.base(),
        intr_slot(line),
    );
}

/// Adds a pin to group interrupt `group` (0 or 1) with the given polarity.
///
/// `polarity` true means the pin contributes when high.
#[cfg_attr(test, mry::mry)]
pub fn egpio_group_pin_select(egpio: Egpio, group: u8, pin: u8, polarity: bool) {
    let (enable, pol) = if group == 0 {
        (FLD_EGPIO_PIN_CONFIG::GROUP_INTR1_ENABLE, FLD_EGPIO_PIN_CONFIG::GROUP_INTR1_POLARITY)
    } else {
        (FLD_EGPIO_PIN_CONFIG::GROUP_INTR2_ENABLE, FLD_EGPIO_PIN_CONFIG::GROUP_INTR2_POLARITY)
    };
    let mut val = read_reg_egpio_pin_config(egpio.base(), pin_slot(pin));
    BM_SET!(val, enable.bits());
    if polarity {
        BM_SET!(val, pol.bits());
    } else {
        BM_CLR!(val, pol.bits());
    }
    write_reg_egpio_pin_config(val, egpio.base(), pin_slot(pin));
}

/// Removes a pin from group interrupt `group`. The polarity bit is left as is.
#[cfg_attr(test, mry::mry)]
pub fn egpio_group_pin_deselect(egpio: Egpio, group: u8, pin: u8) {
    let enable = if group == 0 {
        FLD_EGPIO_PIN_CONFIG::GROUP_INTR1_ENABLE
    } else {
        FLD_EGPIO_PIN_CONFIG::GROUP_INTR2_ENABLE
    };
    let mut val = read_reg_egpio_pin_config(egpio.base(), pin_slot(pin));
    BM_CLR!(val, enable.bits());
    write_reg_egpio_pin_config(val, egpio.base(), pin_slot(pin));
}

/// Programs the combination and trigger of a group interrupt, leaving it masked.
#[cfg_attr(test, mry::mry)]
pub fn egpio_group_config(egpio: Egpio, group: u8, or: bool, edge: bool) {
    let mut val = (FLD_EGPIO_GROUP_CTRL::ENABLE_INTERRUPT | FLD_EGPIO_GROUP_CTRL::MASK).bits();
    if or {
        BM_SET!(val, FLD_EGPIO_GROUP_CTRL::AND_OR.bits());
    }
    if edge {
        BM_SET!(val, FLD_EGPIO_GROUP_CTRL::LEVEL_EDGE.bits());
    }
    write_reg_egpio_group_ctrl(val, egpio.base(), group_slot(group));
}

#[cfg_attr(test, mry::mry)]
pub fn egpio_group_mask(egpio: Egpio, group: u8) {
    let mut val = read_reg_egpio_group_ctrl(egpio.base(), group_slot(group));
    BM_SET!(val, FLD_EGPIO_GROUP_CTRL::MASK.bits());
    write_reg_egpio_group_ctrl(val, egpio.base(), group_slot(group));
}

#[cfg_attr(test, mry::mry)]
pub fn egpio_group_unmask(egpio: Egpio, group: u8) {
    let mut val = read_reg_egpio_group_ctrl(egpio.base(), group_slot(group));
    BM_CLR!(val, FLD_EGPIO_GROUP_CTRL::MASK.bits());
    write_reg_egpio_group_ctrl(val, egpio.base(), group_slot(group));
}

#[cfg_attr(test, mry::mry)]
pub fn egpio_group_status(egpio: Egpio, group: u8) -> bool {
    read_reg_egpio_group_status(egpio.base(), group_slot(group))
        & FLD_EGPIO_GROUP_STATUS::INTERRUPT_STATUS.bits()
        != 0
}

#[cfg_attr(test, mry::mry)]
pub fn egpio_group_clear(egpio: Egpio, group: u8) {
    write_reg_egpio_group_status(
        FLD_EGPIO_GROUP_STATUS::INTERRUPT_STATUS.bits(),
        egpio.base(),
        group_slot(group),
    );
}

/// Gates the EGPIO peripheral clock of one domain on.
#[cfg_attr(test, mry::mry)]
pub fn egpio_clock_enable(egpio: Egpio) {
    match egpio {
        Egpio::Hp => write_reg_m4clk_enable_set3(FLD_CLK_ENABLE3::EGPIO_PCLK_ENABLE.bits()),
        Egpio::Ulp => {
            let mut val = read_reg_ulp_misc_soft_set();
            BM_SET!(val, FLD_ULP_MISC_SOFT::EGPIO_PCLK_EN.bits());
            write_reg_ulp_misc_soft_set(val);
        }
    }
}

#[cfg_attr(test, mry::mry)]
pub fn egpio_clock_disable(egpio: Egpio) {
    match egpio {
        Egpio::Hp => write_reg_m4clk_enable_clr3(FLD_CLK_ENABLE3::EGPIO_PCLK_ENABLE.bits()),
        Egpio::Ulp => {
            let mut val = read_reg_ulp_misc_soft_set();
            BM_CLR!(val, FLD_ULP_MISC_SOFT::EGPIO_PCLK_EN.bits());
            write_reg_ulp_misc_soft_set(val);
        }
    }
}

/// Routes a physical pad to the SoC GPIO block.
///
/// # Parameters
///
/// * `pad` - Pad selector from the HP pad table (1..=33)
///
/// # Notes
///
/// * Pads below `PAD_SELECTION_SPLIT` are in the first selection register,
///   the others in the second one, rebased to bit 0
/// * The shared pad must never reach this function; the driver filters it out
#[cfg_attr(test, mry::mry)]
pub fn pad_selection_enable(pad: u8) {
    if pad < PAD_SELECTION_SPLIT {
        let mut val = read_reg_pad_selection();
        BM_SET!(val, BIT!(pad as u32));
        write_reg_pad_selection(val);
    } else {
        let mut val = read_reg_pad_selection_1();
        BM_SET!(val, BIT!((pad - PAD_SELECTION_SPLIT) as u32));
        write_reg_pad_selection_1(val);
    }
}

/// Hands a host pad (pins 25..=30) over to the SoC GPIO block.
#[cfg_attr(test, mry::mry)]
pub fn host_pad_selection_enable(pin: u8) {
    let mut val = read_reg_host_pad_gpio_mode();
    BM_SET!(val, BIT!((pin - HOST_PAD_MIN) as u32));
    write_reg_host_pad_gpio_mode(val);
}

#[cfg_attr(test, mry::mry)]
pub fn ulp_pad_selection_enable(pad: u8) {
    let mut val = read_reg_ulp_pad_selection();
    BM_SET!(val, BIT!(pad as u32));
    write_reg_ulp_pad_selection(val);
}

fn read_pad_config(egpio: Egpio, pin: u8) -> u32 {
    match egpio {
        Egpio::Hp => read_reg_pad_config(pin as u32 * 4),
        Egpio::Ulp => read_reg_ulp_pad_config(pin as u32 * 4),
    }
}

fn write_pad_config(egpio: Egpio, pin: u8, val: u32) {
    match egpio {
        Egpio::Hp => write_reg_pad_config(val, pin as u32 * 4),
        Egpio::Ulp => write_reg_ulp_pad_config(val, pin as u32 * 4),
    }
}

/// Writes one field of a pin's pad configuration register.
///
/// # Parameters
///
/// * `egpio` - Selects the HP or the ULP pad configuration bank
/// * `pin` - Linear pin number inside the bank
/// * `field` - One of the `FLD_PAD_CONFIG` fields
/// * `value` - Field value, truncated to the field width
#[cfg_attr(test, mry::mry)]
pub fn pad_config_set(egpio: Egpio, pin: u8, field: FLD_PAD_CONFIG, value: u8) {
    let mut val = read_pad_config(egpio, pin);
    SET_FLD_V!(val, field.bits(), value);
    write_pad_config(egpio, pin, val);
}

#[cfg_attr(test, mry::mry)]
pub fn pad_config_get(egpio: Egpio, pin: u8, field: FLD_PAD_CONFIG) -> u8 {
    GET_FLD!(field.bits(), read_pad_config(egpio, pin)) as u8
}

/// Sets the NPSS pin mux mode of a UULP pin.
#[cfg_attr(test, mry::mry)]
pub fn npss_set_mode(pin: u8, mode: u8) {
    let mut val = read_reg_npss_gpio_ctrl(pin as u32 * 4);
    SET_FLD_V!(val, FLD_NPSS_GPIO_CTRL::MODE.bits(), mode);
    write_reg_npss_gpio_ctrl(val, pin as u32 * 4);
}

#[cfg_attr(test, mry::mry)]
pub fn npss_get_mode(pin: u8) -> u8 {
    GET_FLD!(FLD_NPSS_GPIO_CTRL::MODE.bits(), read_reg_npss_gpio_ctrl(pin as u32 * 4)) as u8
}

fn npss_ctrl_update(pin: u8, field: FLD_NPSS_GPIO_CTRL, set: bool) {
    let mut val = read_reg_npss_gpio_ctrl(pin as u32 * 4);
    if set {
        BM_SET!(val, field.bits());
    } else {
        BM_CLR!(val, field.bits());
    }
    write_reg_npss_gpio_ctrl(val, pin as u32 * 4);
}

#[cfg_attr(test, mry::mry)]
pub fn npss_receiver_enable(pin: u8, enable: bool) {
    npss_ctrl_update(pin, FLD_NPSS_GPIO_CTRL::RECEIVER_ENABLE, enable);
}

/// Sets the direction of a UULP pin. The NPSS block uses an output-disable bit.
#[cfg_attr(test, mry::mry)]
pub fn npss_set_direction(pin: u8, direction: GpioDirection) {
    npss_ctrl_update(pin, FLD_NPSS_GPIO_CTRL::OEN, direction == GpioDirection::Input);
}

#[cfg_attr(test, mry::mry)]
pub fn npss_get_direction(pin: u8) -> GpioDirection {
    if read_reg_npss_gpio_ctrl(pin as u32 * 4) & FLD_NPSS_GPIO_CTRL::OEN.bits() != 0 {
        GpioDirection::Input
    } else {
        GpioDirection::Output
    }
}

#[cfg_attr(test, mry::mry)]
pub fn npss_set_output(pin: u8, value: bool) {
    npss_ctrl_update(pin, FLD_NPSS_GPIO_CTRL::OUT, value);
}

#[cfg_attr(test, mry::mry)]
pub fn npss_get_output(pin: u8) -> bool {
    read_reg_npss_gpio_ctrl(pin as u32 * 4) & FLD_NPSS_GPIO_CTRL::OUT.bits() != 0
}

#[cfg_attr(test, mry::mry)]
pub fn npss_get_input(pin: u8) -> bool {
    read_reg_npss_gpio_in() & BIT!(pin as u32) != 0
}

/// Programs the trigger of a UULP pin interrupt.
///
/// The trigger bits use the same order as the EGPIO interrupt control register,
/// shifted up to the NPSS interrupt field.
#[cfg_attr(test, mry::mry)]
pub fn npss_intr_config(pin: u8, flags: u8) {
    let trigger = FLD_NPSS_GPIO_CTRL::INTR_LEVEL_HIGH
        | FLD_NPSS_GPIO_CTRL::INTR_LEVEL_LOW
        | FLD_NPSS_GPIO_CTRL::INTR_RISE_EDGE
        | FLD_NPSS_GPIO_CTRL::INTR_FALL_EDGE;
    let mut val = read_reg_npss_gpio_ctrl(pin as u32 * 4);
    SET_FLD_V!(val, trigger.bits(), flags & INTR_TRIGGER_MASK);
    write_reg_npss_gpio_ctrl(val, pin as u32 * 4);
}

#[cfg_attr(test, mry::mry)]
pub fn npss_intr_mask(pin: u8) {
    write_reg_npss_intr_mask_set(BIT!(pin as u32));
}

#[cfg_attr(test, mry::mry)]
pub fn npss_intr_unmask(pin: u8) {
    write_reg_npss_intr_mask_clr(BIT!(pin as u32));
}

/// Returns the raw NPSS interrupt status word, one bit per UULP pin.
#[cfg_attr(test, mry::mry)]
pub fn npss_intr_status() -> u32 {
    read_reg_npss_intr_status()
}

#[cfg_attr(test, mry::mry)]
pub fn npss_intr_clear(mask: u32) {
    write_reg_npss_intr_clear(mask);
}
