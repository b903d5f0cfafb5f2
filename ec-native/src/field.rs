//! Constant-time arithmetic modulo an odd prime below `2⁵¹²`.
//!
//! Elements are `crypto-bigint` residues in Montgomery form. Every operation,
//! inversion included, runs in time independent of the operand values.

use crate::{Error, Result};
use core::iter;
use elliptic_curve::{
    bigint::{
        Encoding, U512,
        modular::runtime_mod::{DynResidue, DynResidueParams},
    },
    subtle::{Choice, ConstantTimeEq},
};

const LIMBS: usize = U512::LIMBS;
const WIDTH: usize = U512::BYTES;

/// Field element.
pub(crate) type Fe = DynResidue<LIMBS>;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Field {
    params: DynResidueParams<LIMBS>,
    p: U512,
    p_minus_2: U512,
    len: usize,
}

impl Field {
    /// `p` is big-endian; its length is the width of an encoded element.
    pub(crate) fn new(p: &[u8]) -> Self {
        let p_wide = widen(p);
        Self {
            params: DynResidueParams::new(&p_wide),
            p: p_wide,
            p_minus_2: p_wide.wrapping_sub(&U512::from_u8(2)),
            len: p.len(),
        }
    }

    /// Width in bytes of an encoded element.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn zero(&self) -> Fe {
        Fe::zero(self.params)
    }

    pub(crate) fn one(&self) -> Fe {
        Fe::one(self.params)
    }

    pub(crate) fn from_u64(&self, n: u64) -> Fe {
        Fe::new(&U512::from_u64(n), self.params)
    }

    /// Reduce a big-endian integer of at most 64 bytes.
    pub(crate) fn from_be_bytes(&self, bytes: &[u8]) -> Fe {
        Fe::new(&widen(bytes), self.params)
    }

    /// Decode a big-endian integer of exactly [`Field::len`] bytes, reducing
    /// it modulo `p`.
    pub(crate) fn decode(&self, bytes: &[u8]) -> Result<Fe> {
        if bytes.len() != self.len {
            return Err(Error::VALUE);
        }
        Ok(self.from_be_bytes(bytes))
    }

    /// Is the big-endian integer `bytes` below `p`?
    pub(crate) fn is_canonical(&self, bytes: &[u8]) -> bool {
        bytes.len() <= self.len && widen(bytes) < self.p
    }

    /// Encode `a` as big-endian into `out`, which must be [`Field::len`]
    /// bytes.
    pub(crate) fn encode(&self, a: &Fe, out: &mut [u8]) -> Result<()> {
        if out.len() != self.len {
            return Err(Error::VALUE);
        }
        let bytes = a.retrieve().to_be_bytes();
        out.copy_from_slice(&bytes[WIDTH - self.len..]);
        Ok(())
    }

    pub(crate) fn neg(&self, a: Fe) -> Fe {
        self.zero() - a
    }

    /// `a^(p-2)`; zero maps to zero.
    pub(crate) fn invert(&self, a: Fe) -> Fe {
        a.pow(&self.p_minus_2)
    }

    pub(crate) fn equals(&self, a: &Fe, b: &Fe) -> Choice {
        a.retrieve().ct_eq(&b.retrieve())
    }

    pub(crate) fn is_zero(&self, a: &Fe) -> Choice {
        a.retrieve().ct_eq(&U512::ZERO)
    }

    /// Nonzero blinding factor derived from `seed`.
    pub(crate) fn blinding(&self, seed: u64) -> Fe {
        self.from_u64(seed.max(1))
    }
}

fn widen(bytes: &[u8]) -> U512 {
    let mut buf = [0u8; WIDTH];
    buf[WIDTH - bytes.len()..].copy_from_slice(bytes);
    U512::from_be_slice(&buf)
}

/// Number of ladder steps for the big-endian scalar `k` over a field of
/// `len`-byte elements. It depends only on the two lengths.
pub(crate) fn ladder_bits(k: &[u8], len: usize) -> usize {
    8 * k.len().max(len)
}

/// Feed the bits of `k`, most significant first, to `step`, zero-extended to
/// [`ladder_bits`] bits.
pub(crate) fn for_each_bit(k: &[u8], len: usize, mut step: impl FnMut(Choice)) {
    let pad = ladder_bits(k, len) / 8 - k.len();
    for byte in iter::repeat_n(0u8, pad).chain(k.iter().copied()) {
        for shift in (0..8).rev() {
            step(Choice::from((byte >> shift) & 1));
        }
    }
}
