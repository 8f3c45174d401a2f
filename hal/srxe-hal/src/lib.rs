//! SRXE Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the SMART Response XE
//! drivers are written against. A board support crate (AVR registers) or a
//! host-side model (`srxe-sim`) implements them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application firmware                   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  srxe-drivers (display, keyboard, flash)│
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  srxe-hal (this crate - traits)         │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  AVR board    │       │   srxe-sim    │
//! │  registers    │       │ (host models) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::Gpio`] - Pin mode/read/write addressed by [`gpio::PinId`]
//! - [`spi::SpiBus`] - Raw SPI byte-block transfer
//! - [`shared::Shared`] - One bus or port bank used by several drivers

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod shared;
pub mod spi;

// Re-export key types at crate root for convenience
pub use gpio::{Gpio, PinError, PinId, PinMode, Port};
pub use shared::Shared;
pub use spi::{EhSpi, SpiBus};
