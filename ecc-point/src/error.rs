//! Error types

use core::fmt::{self, Display};

/// Result type with the `ecc-point` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Curve and point errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The name is not an alias of any supported curve.
    UnknownCurve(String),

    /// The native context for a curve could not be created.
    CurveInit {
        /// Canonical curve name.
        curve: &'static str,
        /// Native status code.
        code: u32,
    },

    /// The operation does not apply to the curve family.
    UnsupportedOperation(&'static str),

    /// A coordinate does not fit in the curve's byte width.
    InvalidCoordinateLength,

    /// The coordinates do not satisfy the curve equation.
    PointNotOnCurve,

    /// A native point operation failed.
    NativePoint {
        /// Native status code.
        code: u32,
    },

    /// The points belong to different curves.
    IncompatibleCurve,

    /// Scalars must not be negative.
    InvalidScalar,

    /// The point at infinity of a Montgomery curve has no X coordinate.
    NoCoordinateForInfinity,

    /// The X coordinate is a known weak value for the curve.
    InvalidPublicKey(&'static str),
}

impl Error {
    /// Translate a failed native point operation.
    pub(crate) fn native(err: ec_native::Error) -> Self {
        Self::NativePoint { code: err.code() }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCurve(name) => write!(f, "unsupported curve '{name}'"),
            Self::CurveInit { curve, code } => {
                write!(f, "error {code} when initializing {curve} context")
            }
            Self::UnsupportedOperation(what) => write!(f, "{what} is not supported on this curve"),
            Self::InvalidCoordinateLength => f.write_str("incorrect coordinate length"),
            Self::PointNotOnCurve => f.write_str("the EC point does not belong to the curve"),
            Self::NativePoint { code } => write!(f, "error {code} in native point operation"),
            Self::IncompatibleCurve => f.write_str("EC points are not on the same curve"),
            Self::InvalidScalar => f.write_str("scalar must be non-negative"),
            Self::NoCoordinateForInfinity => f.write_str("no X coordinate for the point at infinity"),
            Self::InvalidPublicKey(curve) => write!(f, "invalid {curve} public key"),
        }
    }
}

impl std::error::Error for Error {}
