//! Multi-domain GPIO driver for Si91x parts.
//!
//! The chip spreads its pins over three power domains. HP pins sit on the SoC EGPIO
//! block, ULP pins on the ULP EGPIO block, and UULP pins on the NPSS block that stays
//! alive in deep sleep. [`sdk::drivers::gpio::GpioDriver`] hides those differences
//! behind one port/pin API.
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod sdk;
