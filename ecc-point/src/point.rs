//! Points with affine `(x, y)` coordinates on Weierstrass and Edwards curves.

use crate::{
    Curve, Error, Result,
    encoding::{scalar_bytes, to_fixed_bytes},
    registry,
};
use core::fmt;
use ec_native::{AffineLib, EcPoint};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use rand_core::{CryptoRngCore, OsRng};

/// A point on a short Weierstrass or twisted Edwards curve.
///
/// The point exclusively owns its native handle. Copies are explicit, through
/// [`EccPoint::try_clone`], and the handle is released when the point is
/// dropped.
///
/// The point at infinity is `(0, 0)` on Weierstrass curves and `(0, 1)` on
/// Edwards curves.
pub struct EccPoint {
    curve: &'static Curve,
    lib: &'static dyn AffineLib,
    point: EcPoint,
}

impl EccPoint {
    /// Create the point `(x, y)` on the curve named `curve`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownCurve`] if no curve has that name
    /// - [`Error::UnsupportedOperation`] for Curve25519 and Curve448
    /// - [`Error::InvalidCoordinateLength`] if a coordinate is too wide
    /// - [`Error::PointNotOnCurve`] if `(x, y)` is not on the curve
    pub fn new(x: &BigUint, y: &BigUint, curve: &str) -> Result<Self> {
        Self::on_curve(x, y, registry::lookup(curve)?)
    }

    /// Create the point `(x, y)` on NIST P-256.
    pub fn new_p256(x: &BigUint, y: &BigUint) -> Result<Self> {
        Self::new(x, y, "p256")
    }

    /// Create the point `(x, y)` on an already resolved curve.
    pub fn on_curve(x: &BigUint, y: &BigUint, curve: &'static Curve) -> Result<Self> {
        let (lib, point) = Self::native(x, y, curve)?;
        Ok(Self::from_native(curve, lib, point))
    }

    /// Native handle for `(x, y)` on `curve`, which need not be registered.
    pub(crate) fn native(
        x: &BigUint,
        y: &BigUint,
        curve: &Curve,
    ) -> Result<(&'static dyn AffineLib, EcPoint)> {
        let lib = curve.affine_lib()?;
        let len = curve.byte_length();
        let xb = to_fixed_bytes(x, len)?;
        let yb = to_fixed_bytes(y, len)?;

        let point = lib
            .new_point(&xb, &yb, len, curve.context())
            .map_err(|err| match err {
                ec_native::Error::EC_POINT => Error::PointNotOnCurve,
                err => Error::native(err),
            })?;

        Ok((lib, point))
    }

    pub(crate) fn from_native(
        curve: &'static Curve,
        lib: &'static dyn AffineLib,
        point: EcPoint,
    ) -> Self {
        Self { curve, lib, point }
    }

    /// A fresh copy of the base point of the curve named `curve`.
    pub fn generator(curve: &str) -> Result<Self> {
        registry::lookup(curve)?
            .generator()
            .ok_or(Error::UnsupportedOperation("EccPoint"))?
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

    /// Independent copy of this point.
    pub fn try_clone(&self) -> Result<Self> {
        let point = self.lib.clone_point(&self.point).map_err(Error::native)?;
        Ok(Self {
            curve: self.curve,
            lib: self.lib,
            point,
        })
    }

    /// Replace this point with a copy of `other`, which may be on another
    /// curve.
    pub fn set(&mut self, other: &Self) -> Result<()> {
        *self = other.try_clone()?;
        Ok(())
    }

    /// Affine coordinates.
    pub fn xy(&self) -> Result<(BigUint, BigUint)> {
        let len = self.curve.byte_length();
        let mut x = vec![0u8; len];
        let mut y = vec![0u8; len];
        self.lib
            .get_xy(&self.point, &mut x, &mut y)
            .map_err(Error::native)?;
        Ok((BigUint::from_bytes_be(&x), BigUint::from_bytes_be(&y)))
    }

    /// Affine X coordinate.
    pub fn x(&self) -> Result<BigUint> {
        Ok(self.xy()?.0)
    }

    /// Affine Y coordinate.
    pub fn y(&self) -> Result<BigUint> {
        Ok(self.xy()?.1)
    }

    /// Is this the neutral element of the group?
    pub fn is_point_at_infinity(&self) -> Result<bool> {
        let (x, y) = self.xy()?;
        Ok(if self.curve.is_edwards() {
            x.is_zero()
        } else {
            x.is_zero() && y.is_zero()
        })
    }

    /// The neutral element of this point's curve.
    pub fn point_at_infinity(&self) -> Result<Self> {
        let y = if self.curve.is_edwards() {
            BigUint::one()
        } else {
            BigUint::zero()
        };
        Self::on_curve(&BigUint::zero(), &y, self.curve)
    }

    /// `-self`.
    pub fn negate(&self) -> Result<Self> {
        let mut np = self.try_clone()?;
        np.lib.neg(&mut np.point).map_err(Error::native)?;
        Ok(np)
    }

    /// `self = 2·self`.
    pub fn double_in_place(&mut self) -> Result<&mut Self> {
        self.lib.double(&mut self.point).map_err(Error::native)?;
        Ok(self)
    }

    /// `2·self`.
    pub fn double(&self) -> Result<Self> {
        let mut np = self.try_clone()?;
        np.double_in_place()?;
        Ok(np)
    }

    /// `self = self + other`.
    ///
    /// Returns [`Error::IncompatibleCurve`] if `other` is on another curve.
    pub fn add_in_place(&mut self, other: &Self) -> Result<&mut Self> {
        self.lib
            .add(&mut self.point, &other.point)
            .map_err(|err| match err {
                ec_native::Error::EC_CURVE => Error::IncompatibleCurve,
                err => Error::native(err),
            })?;
        Ok(self)
    }

    /// `self + other`.
    pub fn add(&self, other: &Self) -> Result<Self> {
        let mut np = self.try_clone()?;
        np.add_in_place(other)?;
        Ok(np)
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

impl PartialEq for EccPoint {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.lib.cmp(&self.point, &other.point), Ok(true))
    }
}

impl fmt::Debug for EccPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("EccPoint");
        s.field("curve", &self.curve.name());
        if let Ok((x, y)) = self.xy() {
            s.field("x", &x).field("y", &y);
        }
        s.finish()
    }
}
