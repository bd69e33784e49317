//! HIH8000 Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the Honeywell HIH8000
//! series humidity and temperature sensors, built on top of the
//! [`embedded-hal`] traits.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Low-level trigger/fetch primitives plus a one-call `measure` convenience
//! - Designed for `no_std` environments
//! - Optional logging support via `defmt`
//!
//! # Measurement protocol
//! The sensor uses a two-phase protocol: an empty write transaction triggers
//! a conversion, and a 4-byte read fetches the result once the conversion is
//! done (about 36.65 ms later). The driver leaves the timing between the two
//! phases to the caller; [`Hih8000::measure`] bundles trigger, wait and fetch
//! for callers that can block.
//!
//! Changing the sensor's programmed address or its alarm settings requires
//! command mode and is out of scope for this driver.
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`I2c`] for bus access
//! - [`DelayNs`] for the conversion wait in [`Hih8000::measure`]
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` for logging support
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`I2c`]: embedded_hal::i2c::I2c
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod hih8000;

pub use error::{Error, NoAcknowledgeSource};
pub use hih8000::{DEFAULT_ADDRESS, Hih8000, MEASUREMENT_DELAY_US, Reading, Status};
