//! MAX77801 Rust Driver
//!
//! `no_std` driver for the Maxim MAX77801 buck-boost regulator over `embedded-hal` 1.0 I2C:
//! single-register access, typed CONFIG1/CONFIG2 bitfields, the DVS VOUT trim slots and
//! device-ID/status decoding. Enable the `defmt` feature for register-level tracing.

#![no_std]

pub mod bus;
pub mod data_types;
pub mod driver;
pub mod error;
pub mod registers;

pub use bus::Bus;
pub use driver::Max77801;
pub use error::{Error, InvalidSelector};
pub use registers::{DEFAULT_I2C_ADDRESS, Register};
