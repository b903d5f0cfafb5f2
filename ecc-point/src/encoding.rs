//! Conversions between integers and the native byte buffers.

use crate::{Error, Result};
use num_bigint::{BigInt, BigUint};

/// Big-endian encoding of `value` left-padded to exactly `len` bytes.
pub(crate) fn to_fixed_bytes(value: &BigUint, len: usize) -> Result<Vec<u8>> {
    let bytes = value.to_bytes_be();
    let pad = len
        .checked_sub(bytes.len())
        .ok_or(Error::InvalidCoordinateLength)?;
    let mut out = vec![0u8; pad];
    out.extend_from_slice(&bytes);
    Ok(out)
}

/// Minimal big-endian encoding of a non-negative scalar; zero is `[0]`.
pub(crate) fn scalar_bytes(scalar: &BigInt) -> Result<Vec<u8>> {
    scalar
        .to_biguint()
        .map(|k| k.to_bytes_be())
        .ok_or(Error::InvalidScalar)
}
