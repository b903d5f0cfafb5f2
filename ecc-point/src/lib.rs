#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Usage
//!
//! ```
//! use ecc_point::{EccPoint, num_bigint::BigInt};
//!
//! let g = EccPoint::generator("secp256r1")?;
//! let two_g = g.scalar_multiply(&BigInt::from(2))?;
//! assert_eq!(two_g, g.double()?);
//! assert_eq!(g.curve_name(), "NIST P-256");
//! # Ok::<(), ecc_point::Error>(())
//! ```

mod curve;
mod edwards;
mod encoding;
mod error;
mod montgomery;
mod nist;
mod point;
mod registry;
mod xpoint;

pub use crate::{
    curve::{Curve, CurveFamily, CurveId},
    error::{Error, Result},
    point::EccPoint,
    registry::{Curves, curves, lookup},
    xpoint::EccXPoint,
};
pub use num_bigint;
