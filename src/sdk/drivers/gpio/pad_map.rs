use crate::config::{HOST_PAD_MAX, HOST_PAD_MIN, HP_PIN_COUNT, ULP_PIN_COUNT};

/// Table value for pins that have no pad selection of their own.
pub const PAD_SELECT_NONE: u8 = 0;
/// Table value for the pad shared with the network processor. Never programmed.
pub const PAD_SELECT_SHARED: u8 = 9;

/// Pad selector per linear HP pin.
///
/// Host pads (25..=30) read 0 here; they are handed over through the host-pad register.
pub const HP_PAD_TABLE: [u8; HP_PIN_COUNT] = [
    0, 0, 0, 0, 0, 0, 1, 2, 3, 4, 5, 6, 7, 0, 0, 8,     // 0..=15
    9, 10, 11, 12, 13, 14, 15, 16, 17, 0, 0, 0, 0, 0,   // 16..=29
    0, 18, 19, 20, 21, 0, 0, 0, 0, 0, 0, 0, 0, 0,       // 30..=43
    0, 0, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,   // 44..=56
    33,                                                 // 57
];

/// Pad selector per ULP pin.
pub const ULP_PAD_TABLE: [u8; ULP_PIN_COUNT] = [1, 2, 3, 0, 4, 5, 6, 7, 8, 9, 10, 11];

/// Result of a pad table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadSelection {
    NoPad,
    Pad(u8),
    /// Pad shared with other on-chip functions, must be left as is
    Shared,
}

fn classify(value: u8) -> PadSelection {
    match value {
        PAD_SELECT_NONE => PadSelection::NoPad,
        PAD_SELECT_SHARED => PadSelection::Shared,
        pad => PadSelection::Pad(pad),
    }
}

/// Looks up the pad selector of a linear HP pin. Pins past the table have no pad.
pub fn hp_pad_selector(pin: u8) -> PadSelection {
    HP_PAD_TABLE
        .get(pin as usize)
        .map_or(PadSelection::NoPad, |&value| classify(value))
}

/// Looks up the pad selector of a ULP pin. The ULP table has no shared entry.
pub fn ulp_pad_selector(pin: u8) -> PadSelection {
    match ULP_PAD_TABLE.get(pin as usize) {
        Some(&PAD_SELECT_NONE) | None => PadSelection::NoPad,
        Some(&pad) => PadSelection::Pad(pad),
    }
}

pub fn is_host_pad(pin: u8) -> bool {
    (HOST_PAD_MIN..=HOST_PAD_MAX).contains(&pin)
}
