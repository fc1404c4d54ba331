//! This crate provides a platform agnostic Rust driver for the SPI register interface of the
//! Texas Instruments CC1100/CC1101/CC2500 family of transceivers, using the [`embedded-hal`]
//! traits.
//!
//! The driver implements the register access protocol of the chip: single and burst register
//! reads and writes, status register reads, command strobes and the manual power-on reset
//! sequence. Every operation is a single chip-select bounded transaction.
//!
//! [`embedded-hal`]: https://github.com/rust-embedded/embedded-hal
//!
//! # Usage
//!
//! ```toml
//! [dependencies]
//! cc1100 = "0.1"
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use cc1100::{Cc1100, Config, Register, StatusRegister};
//!
//! // `spi` is an `embedded_hal::spi::SpiBus` configured with `cc1100::SPI_MODE`,
//! // `ncs` the chip select pin and `delay` an `embedded_hal::delay::DelayNs`.
//! let mut radio = Cc1100::new(spi, ncs, delay, Config::default())?;
//! radio.powerup_reset()?;
//!
//! radio.write_reg(Register::CHANNR, 0x05)?;
//! let part = radio.status(StatusRegister::PARTNUM)?;
//! ```
//!
//! # Feature-flags
//!
//! - **defmt:** logs every transaction at trace level, logs short reads as warnings and
//!   provides `defmt::Format` implementations for all public types.
#![warn(
    missing_docs,
    missing_copy_implementations,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![no_std]
#[cfg(test)]
#[macro_use]
extern crate std;
extern crate embedded_hal as hal;
use hal::spi;

mod cc1100;
pub mod config;
mod error;
pub mod register;
mod select;
pub mod status;
pub mod transport;

pub use crate::cc1100::{cycles_to_ms, Cc1100};
pub use crate::config::{Config, ResetTiming, ShortReadPolicy};
pub use crate::error::TransferError;
pub use crate::register::{Register, StatusRegister, Strobe};
pub use crate::select::ChipSelect;
pub use crate::transport::{SpiTransport, Transport};

/// SPI mode. Use this when initializing the SPI instance.
pub const SPI_MODE: spi::Mode = spi::MODE_0;
/// SPI clock the driver timings were written against.
pub const SPI_FREQUENCY_HZ: u32 = 1_000_000;
/// Size in bytes of each of the chip's FIFOs, the longest useful burst.
pub const MAX_BURST_LEN: usize = 64;
