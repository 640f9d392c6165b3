#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

//! The _dhcpv6-status_ library decides whether a DHCPv6 reply rejects the
//! Identity Association a client is negotiating.
//!
//! It only reads. Every function works on a borrowed option area, keeps no
//! state between calls, never allocates, and never indexes outside the slice
//! it was given, however the length fields inside it are forged. That makes
//! it usable on bare metal and directly on untrusted input.
//!
//! # Layers
//!
//! ## The wire layer
//! The `wire` module provides the bounds-checked scanners over DHCPv6 option
//! records ([wire::find_option], [wire::find_ia_option]), the locator for the
//! options nested in an IA_NA or IA_TA ([wire::extract_inner]) and read-only
//! views of the message header and of the Status Code option.
//!
//! ## The status layer
//! The `status` module combines them: [status::evaluate_status] looks for a
//! failing Status Code option first among the message options, then among
//! the options of the IA selected by an [wire::IaDescriptor].
//!
//! ```rust
//! use dhcpv6_status::status::{evaluate_status, Error};
//! use dhcpv6_status::wire::{Dhcpv6StatusCode, IaDescriptor, IaType};
//!
//! let options = [
//!     0x00, 0x04, 0x00, 0x0a, // IA_TA, len 10
//!     0x00, 0x00, 0x00, 0x2a, // iaid 42
//!     0x00, 0x0d, 0x00, 0x02, 0x00, 0x02, // status code: no-addrs-avail
//! ];
//! let descriptor = IaDescriptor::new(IaType::Ta, 42);
//! assert_eq!(
//!     evaluate_status(&options, &descriptor),
//!     Err(Error::Status { code: Dhcpv6StatusCode::NoAddrsAvail, offset: 8 })
//! );
//! ```
//!
//! # Feature flags
//!
//! * `std`: link the standard library and implement `std::error::Error`.
//!   Without it the crate is `no_std`. Enabled by default.
//! * `log`: emit diagnostics through the `log` crate. Enabled by default.
//! * `defmt`: emit diagnostics through `defmt` and derive `defmt::Format` on
//!   public types. Mutually exclusive with `log`.
//! * `verbose`: also trace every malformed option record met while scanning.

#[cfg(all(feature = "log", feature = "defmt"))]
compile_error!("You must enable at most one of the following features: defmt, log");

#[macro_use]
mod macros;

pub mod status;
pub mod wire;
