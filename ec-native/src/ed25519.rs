//! Ed25519: `-x² + y² = 1 + d·x²·y²` over `GF(2²⁵⁵ - 19)`.
//!
//! The curve needs no context; every point shares one set of constants.

use crate::{
    AffineLib, EcContext, Result,
    edwards::{EdwardsCurve, EdwardsLib},
    field::Field,
};
use hex_literal::hex;
use once_cell::sync::Lazy;
use std::sync::Arc;

const MODULUS: [u8; 32] = hex!("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed");

/// `-121665/121666 mod p`
const EDWARDS_D: [u8; 32] = hex!("52036cee2b6ffe738cc740797779e89800700a4d4141d8ab75eb4dca135978a3");

static CURVE: Lazy<Arc<EdwardsCurve>> = Lazy::new(|| {
    let field = Field::new(&MODULUS);
    let a = field.neg(field.one());
    let d = field.from_be_bytes(&EDWARDS_D);
    Arc::new(EdwardsCurve::new(NAME, field, a, d))
});

const NAME: &str = "Ed25519";

fn resolve(_ctx: Option<&EcContext>) -> Result<Arc<EdwardsCurve>> {
    Ok(Arc::clone(&CURVE))
}

/// Capability table for Ed25519. The context argument is ignored.
pub static LIB: &dyn AffineLib = &EdwardsLib::new(NAME, resolve);
