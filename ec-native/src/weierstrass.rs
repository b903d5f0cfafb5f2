//! Short Weierstrass curves over the NIST primes.
//!
//! Arithmetic is delegated to the `p192`, `p224`, `p256`, `p384` and `p521`
//! crates, whose projective formulas are complete and constant-time. A
//! context is selected by matching the supplied domain parameters against
//! the ones compiled into those crates.

use crate::{AffineLib, Context, EcContext, EcPoint, Error, PointLib, Repr, Result};
use elliptic_curve::{
    Group,
    ff::{Field, PrimeField},
    sec1::{FromEncodedPoint, ToEncodedPoint},
};
use num_bigint::BigUint;
use primeorder::PrimeCurveParams;

/// Capability table for the NIST curves.
pub static LIB: &dyn AffineLib = &WeierstrassLib;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum NistCurve {
    P192,
    P224,
    P256,
    P384,
    P521,
}

impl NistCurve {
    fn from_len(len: usize) -> Option<Self> {
        match len {
            24 => Some(Self::P192),
            28 => Some(Self::P224),
            32 => Some(Self::P256),
            48 => Some(Self::P384),
            66 => Some(Self::P521),
            _ => None,
        }
    }

    fn len(self) -> usize {
        match self {
            Self::P192 => 24,
            Self::P224 => 28,
            Self::P256 => 32,
            Self::P384 => 48,
            Self::P521 => 66,
        }
    }
}

/// Create a context for the curve `y² = x³ - 3x + b` over `GF(modulus)` with
/// a subgroup of the given `order`.
///
/// All three values are big-endian and exactly `len` bytes long. The blinding
/// seed is accepted for interface compatibility; the backends never need it.
pub fn new_context(
    modulus: &[u8],
    b: &[u8],
    order: &[u8],
    len: usize,
    _seed: u64,
) -> Result<EcContext> {
    if len == 0 {
        return Err(Error::NOT_ENOUGH_DATA);
    }

    if modulus.len() != len || b.len() != len || order.len() != len {
        return Err(Error::VALUE);
    }

    let curve = NistCurve::from_len(len).ok_or(Error::MODULUS)?;
    let params = match curve {
        NistCurve::P192 => p192::domain(),
        NistCurve::P224 => p224::domain(),
        NistCurve::P256 => p256::domain(),
        NistCurve::P384 => p384::domain(),
        NistCurve::P521 => p521::domain(),
    };

    if BigUint::from_bytes_be(modulus) != params.modulus {
        return Err(Error::MODULUS);
    }

    if BigUint::from_bytes_be(b) != params.b || BigUint::from_bytes_be(order) != params.order {
        return Err(Error::EC_CURVE);
    }

    Ok(EcContext(Context::Weierstrass(curve)))
}

/// Domain parameters compiled into a backend.
struct Domain {
    modulus: BigUint,
    b: BigUint,
    order: BigUint,
}

/// `(-1) + 1`, computed on the big-endian encoding of `-1`.
fn plus_one(minus_one: &[u8]) -> BigUint {
    BigUint::from_bytes_be(minus_one) + 1u32
}

fn context_curve(ctx: Option<&EcContext>) -> Result<NistCurve> {
    match ctx {
        Some(EcContext(Context::Weierstrass(curve))) => Ok(*curve),
        Some(_) => Err(Error::EC_CURVE),
        None => Err(Error::NULL),
    }
}

/// Split an uncompressed SEC1 encoding into `x` and `y`.
fn write_xy(encoded: &[u8], x: &mut [u8], y: &mut [u8]) -> Result<()> {
    match encoded.split_first() {
        Some((0x04, xy)) if xy.len() == x.len() + y.len() => {
            let (ex, ey) = xy.split_at(x.len());
            x.copy_from_slice(ex);
            y.copy_from_slice(ey);
            Ok(())
        }
        _ => Err(Error::VALUE),
    }
}

macro_rules! impl_nist_backend {
    ($krate:ident, $curve:ident, $variant:ident) => {
        mod $krate {
            use super::*;
            use ::$krate::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar, $curve};

            pub(super) fn domain() -> Domain {
                let field_one = <<$curve as PrimeCurveParams>::FieldElement as Field>::ONE;
                Domain {
                    modulus: plus_one(&(-field_one).to_repr()),
                    b: BigUint::from_bytes_be(&<$curve as PrimeCurveParams>::EQUATION_B.to_repr()),
                    order: plus_one(&(-Scalar::ONE).to_repr()),
                }
            }

            /// `(0, 0)` decodes to the identity.
            pub(super) fn new_point(x: &[u8], y: &[u8]) -> Result<Repr> {
                if x.iter().chain(y).all(|&b| b == 0) {
                    return Ok(Repr::$variant(ProjectivePoint::IDENTITY));
                }

                let (mut fx, mut fy) = (FieldBytes::default(), FieldBytes::default());
                fx.copy_from_slice(x);
                fy.copy_from_slice(y);
                let encoded = EncodedPoint::from_affine_coordinates(&fx, &fy, false);

                Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
                    .map(|affine| Repr::$variant(affine.into()))
                    .ok_or(Error::EC_POINT)
            }

            pub(super) fn get_xy(point: &ProjectivePoint, x: &mut [u8], y: &mut [u8]) -> Result<()> {
                if bool::from(point.is_identity()) {
                    x.fill(0);
                    y.fill(0);
                    return Ok(());
                }

                write_xy(point.to_affine().to_encoded_point(false).as_bytes(), x, y)
            }

            pub(super) fn scalar(point: &mut ProjectivePoint, k: &[u8]) {
                let radix = Scalar::from(256u64);
                let k = k
                    .iter()
                    .fold(Scalar::ZERO, |acc, &byte| acc * radix + Scalar::from(u64::from(byte)));
                *point *= k;
            }
        }
    };
}

impl_nist_backend!(p192, NistP192, P192);
impl_nist_backend!(p224, NistP224, P224);
impl_nist_backend!(p256, NistP256, P256);
impl_nist_backend!(p384, NistP384, P384);
impl_nist_backend!(p521, NistP521, P521);

/// Apply `$body` to the projective point inside `$repr`, optionally binding
/// the backend module to `$m`.
macro_rules! with_point {
    ($repr:expr, |$p:ident| $body:expr) => {
        match $repr {
            Repr::P192($p) => $body,
            Repr::P224($p) => $body,
            Repr::P256($p) => $body,
            Repr::P384($p) => $body,
            Repr::P521($p) => $body,
            _ => Err(Error::EC_CURVE),
        }
    };
    ($repr:expr, |$m:ident, $p:ident| $body:expr) => {
        match $repr {
            Repr::P192($p) => {
                use self::p192 as $m;
                $body
            }
            Repr::P224($p) => {
                use self::p224 as $m;
                $body
            }
            Repr::P256($p) => {
                use self::p256 as $m;
                $body
            }
            Repr::P384($p) => {
                use self::p384 as $m;
                $body
            }
            Repr::P521($p) => {
                use self::p521 as $m;
                $body
            }
            _ => Err(Error::EC_CURVE),
        }
    };
}

/// Apply `$body` to two projective points on the same curve.
macro_rules! with_pair {
    ($a:expr, $b:expr, |$pa:ident, $pb:ident| $body:expr) => {
        match ($a, $b) {
            (Repr::P192($pa), Repr::P192($pb)) => $body,
            (Repr::P224($pa), Repr::P224($pb)) => $body,
            (Repr::P256($pa), Repr::P256($pb)) => $body,
            (Repr::P384($pa), Repr::P384($pb)) => $body,
            (Repr::P521($pa), Repr::P521($pb)) => $body,
            _ => Err(Error::EC_CURVE),
        }
    };
}

struct WeierstrassLib;

impl PointLib for WeierstrassLib {
    fn clone_point(&self, point: &EcPoint) -> Result<EcPoint> {
        with_point!(&point.0, |_p| Ok(EcPoint(point.0.clone())))
    }

    fn cmp(&self, a: &EcPoint, b: &EcPoint) -> Result<bool> {
        with_pair!(&a.0, &b.0, |pa, pb| Ok(pa == pb))
    }

    fn scalar(&self, point: &mut EcPoint, k: &[u8], _seed: u64) -> Result<()> {
        if k.is_empty() {
            return Err(Error::NOT_ENOUGH_DATA);
        }

        with_point!(&mut point.0, |m, p| {
            m::scalar(p, k);
            Ok(())
        })
    }
}

impl AffineLib for WeierstrassLib {
    fn new_point(
        &self,
        x: &[u8],
        y: &[u8],
        len: usize,
        ctx: Option<&EcContext>,
    ) -> Result<EcPoint> {
        let curve = context_curve(ctx)?;

        if len == 0 {
            return Err(Error::NOT_ENOUGH_DATA);
        }

        if len != curve.len() || x.len() != len || y.len() != len {
            return Err(Error::VALUE);
        }

        let repr = match curve {
            NistCurve::P192 => p192::new_point(x, y),
            NistCurve::P224 => p224::new_point(x, y),
            NistCurve::P256 => p256::new_point(x, y),
            NistCurve::P384 => p384::new_point(x, y),
            NistCurve::P521 => p521::new_point(x, y),
        }?;

        Ok(EcPoint(repr))
    }

    fn get_xy(&self, point: &EcPoint, x: &mut [u8], y: &mut [u8]) -> Result<()> {
        with_point!(&point.0, |m, p| m::get_xy(p, x, y))
    }

    fn double(&self, point: &mut EcPoint) -> Result<()> {
        with_point!(&mut point.0, |p| {
            *p = p.double();
            Ok(())
        })
    }

    fn add(&self, a: &mut EcPoint, b: &EcPoint) -> Result<()> {
        with_pair!(&mut a.0, &b.0, |pa, pb| {
            *pa += pb;
            Ok(())
        })
    }

    fn neg(&self, point: &mut EcPoint) -> Result<()> {
        with_point!(&mut point.0, |p| {
            *p = -*p;
            Ok(())
        })
    }
}
