pub mod gpio;
pub mod irq_i;
pub mod register;
