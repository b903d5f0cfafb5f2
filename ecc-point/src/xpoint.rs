//! x-only points on Montgomery curves.

use crate::{
    Curve, Error, Result,
    encoding::{scalar_bytes, to_fixed_bytes},
    registry,
};
use core::fmt;
use ec_native::{EcPoint, XLib};
use num_bigint::{BigInt, BigUint};
use rand_core::{CryptoRngCore, OsRng};

/// A point on Curve25519 or Curve448, known only by its u coordinate.
///
/// The point at infinity has no coordinate at all; it is created with
/// [`EccXPoint::new`] and `None`, or with [`EccXPoint::point_at_infinity`].
pub struct EccXPoint {
    curve: &'static Curve,
    lib: &'static dyn XLib,
    point: EcPoint,
}

impl EccXPoint {
    /// Create the point with coordinate `x` (or the point at infinity) on the
    /// curve named `curve`.
    ///
    /// `x` may be non-canonical, as long as it fits in the curve's byte width.
    /// No public-key check is performed; see [`EccXPoint::new_validated`].
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownCurve`] if no curve has that name
    /// - [`Error::UnsupportedOperation`] for Weierstrass and Edwards curves
    /// - [`Error::InvalidCoordinateLength`] if `x` is too wide
    pub fn new(x: Option<&BigUint>, curve: &str) -> Result<Self> {
        Self::on_curve(x, registry::lookup(curve)?)
    }

    /// Create a point on an already resolved curve.
    pub fn on_curve(x: Option<&BigUint>, curve: &'static Curve) -> Result<Self> {
        let (lib, point) = Self::native(x, curve)?;
        Ok(Self::from_native(curve, lib, point))
    }

    /// Native handle for `x` on `curve`, which need not be registered.
    pub(crate) fn native(x: Option<&BigUint>, curve: &Curve) -> Result<(&'static dyn XLib, EcPoint)> {
        let lib = curve.x_lib()?;
        let len = curve.byte_length();
        let xb = x.map(|x| to_fixed_bytes(x, len)).transpose()?;

        let point = lib
            .new_point(xb.as_deref(), len, curve.context())
            .map_err(|err| match err {
                ec_native::Error::EC_POINT => Error::PointNotOnCurve,
                err => Error::native(err),
            })?;

        Ok((lib, point))
    }

    pub(crate) fn from_native(curve: &'static Curve, lib: &'static dyn XLib, point: EcPoint) -> Self {
        Self { curve, lib, point }
    }

    /// Create the point with coordinate `x` and run the curve's public-key
    /// check on it, as done when importing a peer's key.
    ///
    /// Returns [`Error::InvalidPublicKey`] for known weak coordinates.
    pub fn new_validated(x: &BigUint, curve: &str) -> Result<Self> {
        let point = Self::new(Some(x), curve)?;
        point.validate()?;
        Ok(point)
    }

    /// A fresh copy of the base point of the curve named `curve`.
    pub fn generator(curve: &str) -> Result<Self> {
        registry::lookup(curve)?
            .x_generator()
            .ok_or(Error::UnsupportedOperation("EccXPoint"))?
            .try_clone()
    }

    /// The curve this point belongs to.
    pub fn curve(&self) -> &'static Curve {
        self.curve
    }

    /// Canonical name of the curve.
    pub fn curve_name(&self) -> &'static str {
        self.curve.name()
    }

    /// Run the curve's public-key check on this point.
    pub fn validate(&self) -> Result<()> {
        self.curve.validate(self)
    }

    /// Independent copy of this point.
    pub fn try_clone(&self) -> Result<Self> {
        let point = self.lib.clone_point(&self.point).map_err(Error::native)?;
        Ok(Self {
            curve: self.curve,
            lib: self.lib,
            point,
        })
    }

    /// Replace this point with a copy of `other`.
    pub fn set(&mut self, other: &Self) -> Result<()> {
        *self = other.try_clone()?;
        Ok(())
    }

    /// The u coordinate.
    ///
    /// Returns [`Error::NoCoordinateForInfinity`] for the point at infinity.
    pub fn x(&self) -> Result<BigUint> {
        let mut x = vec![0u8; self.curve.byte_length()];
        self.lib
            .get_x(&self.point, &mut x)
            .map_err(|err| match err {
                ec_native::Error::EC_PAI => Error::NoCoordinateForInfinity,
                err => Error::native(err),
            })?;
        Ok(BigUint::from_bytes_be(&x))
    }

    /// Is this the neutral element of the group?
    pub fn is_point_at_infinity(&self) -> Result<bool> {
        match self.x() {
            Ok(_) => Ok(false),
            Err(Error::NoCoordinateForInfinity) => Ok(true),
            Err(err) => Err(err),
        }
    }

    /// The neutral element of this point's curve.
    pub fn point_at_infinity(&self) -> Result<Self> {
        Self::on_curve(None, self.curve)
    }

    /// `self = scalar·self`, with side-channel randomization seeded from the
    /// operating system.
    pub fn scalar_multiply_in_place(&mut self, scalar: &BigInt) -> Result<&mut Self> {
        self.scalar_multiply_in_place_with_rng(scalar, &mut OsRng)
    }

    /// `self = scalar·self`, with side-channel randomization seeded from
    /// `rng`.
    ///
    /// Returns [`Error::InvalidScalar`] if `scalar` is negative.
    pub fn scalar_multiply_in_place_with_rng(
        &mut self,
        scalar: &BigInt,
        rng: &mut impl CryptoRngCore,
    ) -> Result<&mut Self> {
        let k = scalar_bytes(scalar)?;
        self.lib
            .scalar(&mut self.point, &k, rng.next_u64())
            .map_err(Error::native)?;
        Ok(self)
    }

    /// `scalar·self`.
    pub fn scalar_multiply(&self, scalar: &BigInt) -> Result<Self> {
        self.scalar_multiply_with_rng(scalar, &mut OsRng)
    }

    /// `scalar·self`, with side-channel randomization seeded from `rng`.
    pub fn scalar_multiply_with_rng(
        &self,
        scalar: &BigInt,
        rng: &mut impl CryptoRngCore,
    ) -> Result<Self> {
        let mut np = self.try_clone()?;
        np.scalar_multiply_in_place_with_rng(scalar, rng)?;
        Ok(np)
    }

    /// Size of an encoded coordinate in bytes.
    pub fn size_in_bytes(&self) -> usize {
        self.curve.byte_length()
    }

    /// Size of the field modulus in bits.
    pub fn size_in_bits(&self) -> usize {
        self.curve.modulus_bits()
    }
}

impl PartialEq for EccXPoint {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.lib.cmp(&self.point, &other.point), Ok(true))
    }
}

impl fmt::Debug for EccXPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EccXPoint")
            .field("curve", &self.curve.name())
            .field("x", &self.x().ok())
            .finish()
    }
}
