pub mod common;
pub mod drivers;
pub mod mcu;
