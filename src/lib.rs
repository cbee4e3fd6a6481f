//! SW35xx Rust Driver
//!
//! Driver for the SW35xx family (SW3516 / SW3518) of USB PD and fast-charge controllers.
//! It decodes the status and ADC registers into millivolts / milliamps and encodes protocol
//! enables and per-group current ceilings behind the chip's write-unlock sequence.
//! no-std, optional async (`async` feature) and defmt support (`defmt` feature).

#![no_std]

pub mod data_types;
pub mod driver;
pub mod error;
pub mod registers;

pub use data_types::{
    AdcChannel, Config, CurrentGroup, FastChargeProtocol, MaxCurrents, PdCommand, PdVersion, PowerClass,
    QuickChargeSettings, Reading,
};
pub use driver::Sw35xx;
pub use error::Error;
pub use registers::{DEFAULT_I2C_ADDRESS, QuickChargeConfig};
