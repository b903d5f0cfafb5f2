//! Curve448: `v² = u³ + 156326·u² + u` over `GF(2⁴⁴⁸ - 2²²⁴ - 1)`.

use crate::{
    Context, EcContext, Result, XLib,
    field::Field,
    montgomery::{self, MontgomeryCurve, MontgomeryLib},
};
use hex_literal::hex;
use std::sync::Arc;

const MODULUS: [u8; 56] = hex!(
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffe"
    "ffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
);

const NAME: &str = "Curve448";

/// Create the context every Curve448 point is bound to.
pub fn new_context() -> Result<EcContext> {
    let curve = MontgomeryCurve::new(NAME, Field::new(&MODULUS), 39081);
    Ok(EcContext(Context::Montgomery(Arc::new(curve))))
}

fn resolve(ctx: Option<&EcContext>) -> Result<Arc<MontgomeryCurve>> {
    montgomery::curve_from_context(ctx, NAME)
}

/// Capability table for Curve448. New points require a context from
/// [`new_context`].
pub static LIB: &dyn XLib = &MontgomeryLib::new(NAME, resolve);
