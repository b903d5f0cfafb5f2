//! Curve parameter records.

use crate::{EccPoint, EccXPoint, Error, Result};
use core::fmt;
use ec_native::{AffineLib, EcContext, XLib};
use num_bigint::BigUint;
use once_cell::sync::OnceCell;

/// Supported curves.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CurveId {
    /// NIST P-192
    P192,
    /// NIST P-224
    P224,
    /// NIST P-256
    P256,
    /// NIST P-384
    P384,
    /// NIST P-521
    P521,
    /// Ed25519
    Ed25519,
    /// Ed448
    Ed448,
    /// Curve25519
    Curve25519,
    /// Curve448
    Curve448,
}

impl CurveId {
    /// Every supported curve, in registration order.
    pub const ALL: [Self; 9] = [
        Self::P192,
        Self::P224,
        Self::P256,
        Self::P384,
        Self::P521,
        Self::Ed25519,
        Self::Ed448,
        Self::Curve25519,
        Self::Curve448,
    ];

    /// Geometry of the curve.
    pub const fn family(self) -> CurveFamily {
        match self {
            Self::P192 | Self::P224 | Self::P256 | Self::P384 | Self::P521 => {
                CurveFamily::Weierstrass
            }
            Self::Ed25519 | Self::Ed448 => CurveFamily::Edwards,
            Self::Curve25519 | Self::Curve448 => CurveFamily::Montgomery,
        }
    }

    /// Names accepted by the registry for this curve. Matching is exact.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::P192 => &["p192", "NIST P-192", "P-192", "prime192v1", "secp192r1", "nistp192"],
            Self::P224 => &["p224", "NIST P-224", "P-224", "prime224v1", "secp224r1", "nistp224"],
            Self::P256 => &["p256", "NIST P-256", "P-256", "prime256v1", "secp256r1", "nistp256"],
            Self::P384 => &["p384", "NIST P-384", "P-384", "prime384v1", "secp384r1", "nistp384"],
            Self::P521 => &["p521", "NIST P-521", "P-521", "prime521v1", "secp521r1", "nistp521"],
            Self::Ed25519 => &["ed25519", "Ed25519"],
            Self::Ed448 => &["ed448", "Ed448"],
            Self::Curve25519 => &["curve25519", "Curve25519", "X25519"],
            Self::Curve448 => &["curve448", "Curve448", "X448"],
        }
    }

    /// Resolve an alias.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.aliases().contains(&name))
    }
}

/// Curve geometry.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CurveFamily {
    /// `y² = x³ + a·x + b`
    Weierstrass,
    /// `a·x² + y² = 1 + d·x²·y²`
    Edwards,
    /// `v² = u³ + A·u² + u`, used through the u coordinate only
    Montgomery,
}

/// Native operation table of a curve.
#[derive(Clone, Copy)]
pub(crate) enum Ops {
    Affine(&'static dyn AffineLib),
    X(&'static dyn XLib),
}

/// Public-key check attached to a curve.
pub(crate) type Validator = fn(&EccXPoint) -> Result<()>;

pub(crate) enum Generator {
    Affine(EccPoint),
    X(EccXPoint),
}

/// Domain parameters and native state of one curve.
///
/// Records are created once per process by the [`Curves`](crate::Curves)
/// registry and live for the rest of it, so they are always handed out as
/// `&'static Curve`.
pub struct Curve {
    pub(crate) id: CurveId,
    pub(crate) family: CurveFamily,
    pub(crate) modulus: BigUint,
    pub(crate) b: Option<BigUint>,
    pub(crate) order: BigUint,
    pub(crate) gx: BigUint,
    pub(crate) gy: Option<BigUint>,
    pub(crate) modulus_bits: usize,
    pub(crate) oid: &'static str,
    pub(crate) name: &'static str,
    pub(crate) openssh: Option<&'static str>,
    pub(crate) context: Option<EcContext>,
    pub(crate) ops: Ops,
    pub(crate) validator: Option<Validator>,
    pub(crate) generator: OnceCell<Generator>,
}

impl Curve {
    /// Curve identifier.
    pub fn id(&self) -> CurveId {
        self.id
    }

    /// Curve geometry.
    pub fn family(&self) -> CurveFamily {
        self.family
    }

    /// Is this a short Weierstrass curve?
    pub fn is_weierstrass(&self) -> bool {
        self.family == CurveFamily::Weierstrass
    }

    /// Is this a twisted Edwards curve?
    pub fn is_edwards(&self) -> bool {
        self.family == CurveFamily::Edwards
    }

    /// Is this a Montgomery curve?
    pub fn is_montgomery(&self) -> bool {
        self.family == CurveFamily::Montgomery
    }

    /// Field prime `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Constant `b` of the curve equation, for Weierstrass curves only.
    pub fn b(&self) -> Option<&BigUint> {
        self.b.as_ref()
    }

    /// Order of the subgroup generated by the base point.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Affine X coordinate of the base point.
    pub fn gx(&self) -> &BigUint {
        &self.gx
    }

    /// Affine Y coordinate of the base point; absent on Montgomery curves.
    pub fn gy(&self) -> Option<&BigUint> {
        self.gy.as_ref()
    }

    /// Base point, for Weierstrass and Edwards curves.
    pub fn generator(&self) -> Option<&EccPoint> {
        match self.generator.get() {
            Some(Generator::Affine(g)) => Some(g),
            _ => None,
        }
    }

    /// Base point, for Montgomery curves.
    pub fn x_generator(&self) -> Option<&EccXPoint> {
        match self.generator.get() {
            Some(Generator::X(g)) => Some(g),
            _ => None,
        }
    }

    /// Size of the modulus in bits.
    pub fn modulus_bits(&self) -> usize {
        self.modulus_bits
    }

    /// Size of an encoded coordinate in bytes.
    pub fn byte_length(&self) -> usize {
        self.modulus_bits.div_ceil(8)
    }

    /// Dotted ASN.1 object identifier.
    pub fn oid(&self) -> &'static str {
        self.oid
    }

    /// Canonical name, e.g. `NIST P-256`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Key type name used by OpenSSH, if it supports the curve.
    pub fn openssh(&self) -> Option<&'static str> {
        self.openssh
    }

    /// Run the curve's public-key check on `point`.
    ///
    /// Curves without a check accept every point.
    pub fn validate(&self, point: &EccXPoint) -> Result<()> {
        match self.validator {
            Some(validator) => validator(point),
            None => Ok(()),
        }
    }

    pub(crate) fn context(&self) -> Option<&EcContext> {
        self.context.as_ref()
    }

    pub(crate) fn affine_lib(&self) -> Result<&'static dyn AffineLib> {
        match self.ops {
            Ops::Affine(lib) => Ok(lib),
            Ops::X(_) => Err(Error::UnsupportedOperation("EccPoint")),
        }
    }

    pub(crate) fn x_lib(&self) -> Result<&'static dyn XLib> {
        match self.ops {
            Ops::X(lib) => Ok(lib),
            Ops::Affine(_) => Err(Error::UnsupportedOperation("EccXPoint")),
        }
    }
}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("name", &self.name)
            .field("oid", &self.oid)
            .field("family", &self.family)
            .field("modulus_bits", &self.modulus_bits)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Curve {}
