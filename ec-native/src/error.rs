//! Error type

use core::fmt::{self, Display};

/// Result type with the native [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Numeric status code reported by a failed native operation.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Error(u32);

impl Error {
    /// A required context was not supplied.
    pub const NULL: Self = Self(1);

    /// An input buffer was empty.
    pub const NOT_ENOUGH_DATA: Self = Self(3);

    /// An input had the wrong length or the capability is not available.
    pub const VALUE: Self = Self(14);

    /// The coordinates do not satisfy the curve equation.
    pub const EC_POINT: Self = Self(15);

    /// Two handles belong to different curves.
    pub const EC_CURVE: Self = Self(16);

    /// The modulus does not match any supported curve.
    pub const MODULUS: Self = Self(17);

    /// The point at infinity has no X coordinate.
    pub const EC_PAI: Self = Self(19);

    /// Numeric value of this code.
    pub const fn code(self) -> u32 {
        self.0
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match *self {
            Self::NULL => "missing context",
            Self::NOT_ENOUGH_DATA => "not enough data",
            Self::VALUE => "invalid value",
            Self::EC_POINT => "point not on curve",
            Self::EC_CURVE => "incompatible curves",
            Self::MODULUS => "unsupported modulus",
            Self::EC_PAI => "point at infinity",
            _ => "native error",
        };
        write!(f, "{} (code {})", msg, self.0)
    }
}

impl std::error::Error for Error {}
