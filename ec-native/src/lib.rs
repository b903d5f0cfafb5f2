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

mod edwards;
mod error;
mod field;
mod montgomery;

pub mod curve25519;
pub mod curve448;
pub mod ed25519;
pub mod ed448;
pub mod weierstrass;

pub use crate::error::{Error, Result};

use crate::{edwards::EdwardsPoint, montgomery::MontgomeryPoint, weierstrass::NistCurve};
use std::sync::Arc;

/// Owned handle to a point on one of the supported curves.
///
/// Dropping the handle releases it. A handle can only be operated on through
/// the capability table of the family that created it; any other table
/// reports [`Error::EC_CURVE`].
#[derive(Debug)]
pub struct EcPoint(pub(crate) Repr);

#[derive(Clone, Debug)]
pub(crate) enum Repr {
    P192(p192::ProjectivePoint),
    P224(p224::ProjectivePoint),
    P256(p256::ProjectivePoint),
    P384(p384::ProjectivePoint),
    P521(p521::ProjectivePoint),
    Edwards(EdwardsPoint),
    Montgomery(MontgomeryPoint),
}

/// Owned handle to the precomputed state shared by all points of one curve.
#[derive(Debug)]
pub struct EcContext(pub(crate) Context);

#[derive(Debug)]
pub(crate) enum Context {
    Weierstrass(NistCurve),
    Edwards(Arc<edwards::EdwardsCurve>),
    Montgomery(Arc<montgomery::MontgomeryCurve>),
}

/// Operations shared by every point representation.
pub trait PointLib: Send + Sync {
    /// Allocate an independent copy of `point`.
    fn clone_point(&self, point: &EcPoint) -> Result<EcPoint>;

    /// Compare two points.
    ///
    /// Returns [`Error::EC_CURVE`] if they do not belong to the same curve.
    fn cmp(&self, a: &EcPoint, b: &EcPoint) -> Result<bool>;

    /// Multiply `point` in place by the big-endian scalar `k`.
    ///
    /// `seed` randomizes the internal representation and never affects the
    /// result.
    fn scalar(&self, point: &mut EcPoint, k: &[u8], seed: u64) -> Result<()>;
}

/// Operations on points with both affine coordinates available.
pub trait AffineLib: PointLib {
    /// Create a point from big-endian `x` and `y`, each exactly `len` bytes.
    fn new_point(&self, x: &[u8], y: &[u8], len: usize, ctx: Option<&EcContext>)
    -> Result<EcPoint>;

    /// Write the affine coordinates of `point` into `x` and `y`.
    fn get_xy(&self, point: &EcPoint, x: &mut [u8], y: &mut [u8]) -> Result<()>;

    /// Double `point` in place.
    fn double(&self, point: &mut EcPoint) -> Result<()>;

    /// Add `b` to `a` in place.
    fn add(&self, a: &mut EcPoint, b: &EcPoint) -> Result<()>;

    /// Negate `point` in place.
    fn neg(&self, point: &mut EcPoint) -> Result<()>;
}

/// Operations on x-only points.
pub trait XLib: PointLib {
    /// Create a point from a big-endian `x` of exactly `len` bytes, or the
    /// point at infinity when `x` is `None`.
    fn new_point(&self, x: Option<&[u8]>, len: usize, ctx: Option<&EcContext>) -> Result<EcPoint>;

    /// Write the affine X coordinate of `point` into `x`.
    ///
    /// Returns [`Error::EC_PAI`] for the point at infinity.
    fn get_x(&self, point: &EcPoint, x: &mut [u8]) -> Result<()>;
}
