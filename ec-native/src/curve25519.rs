//! Curve25519: `v² = u³ + 486662·u² + u` over `GF(2²⁵⁵ - 19)`.

use crate::{
    EcContext, Result, XLib,
    field::Field,
    montgomery::{MontgomeryCurve, MontgomeryLib},
};
use hex_literal::hex;
use once_cell::sync::Lazy;
use std::sync::Arc;

const MODULUS: [u8; 32] = hex!("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed");

const NAME: &str = "Curve25519";

static CURVE: Lazy<Arc<MontgomeryCurve>> =
    Lazy::new(|| Arc::new(MontgomeryCurve::new(NAME, Field::new(&MODULUS), 121665)));

fn resolve(_ctx: Option<&EcContext>) -> Result<Arc<MontgomeryCurve>> {
    Ok(Arc::clone(&CURVE))
}

/// Capability table for Curve25519. The context argument is ignored.
pub static LIB: &dyn XLib = &MontgomeryLib::new(NAME, resolve);
