//! Ed448-Goldilocks: `x² + y² = 1 + d·x²·y²` over `GF(2⁴⁴⁸ - 2²²⁴ - 1)`
//! with `d = -39081`.

use crate::{
    AffineLib, Context, EcContext, Result,
    edwards::{self, EdwardsCurve, EdwardsLib},
    field::Field,
};
use hex_literal::hex;
use std::sync::Arc;

const MODULUS: [u8; 56] = hex!(
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffe"
    "ffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
);

const NAME: &str = "Ed448";

/// Create the context every Ed448 point is bound to.
pub fn new_context() -> Result<EcContext> {
    let field = Field::new(&MODULUS);
    let a = field.one();
    let d = field.neg(field.from_u64(39081));
    let curve = EdwardsCurve::new(NAME, field, a, d);
    Ok(EcContext(Context::Edwards(Arc::new(curve))))
}

fn resolve(ctx: Option<&EcContext>) -> Result<Arc<EdwardsCurve>> {
    edwards::curve_from_context(ctx, NAME)
}

/// Capability table for Ed448. New points require a context from
/// [`new_context`].
pub static LIB: &dyn AffineLib = &EdwardsLib::new(NAME, resolve);

#[cfg(test)]
mod tests {
    use super::{LIB, new_context};
    use crate::{Error, ed25519};
    use hex_literal::hex;

    const GX: [u8; 56] = hex!(
        "4f1970c66bed0ded221d15a622bf36da9e146570470f1767ea6de324"
        "a3d3a46412ae1af72ab66511433b80e18b00938e2626a82bc70cc05e"
    );
    const GY: [u8; 56] = hex!(
        "693f46716eb6bc248876203756c9c7624bea73736ca3984087789c1e"
        "05a0c2d73ad3ff1ce67c39c4fdbd132c4ed7c8ad9808795bf230fa14"
    );

    #[test]
    fn requires_context() {
        assert_eq!(LIB.new_point(&GX, &GY, 56, None).unwrap_err(), Error::NULL);
    }

    #[test]
    fn double_generator() {
        let ctx = new_context().unwrap();
        let mut g = LIB.new_point(&GX, &GY, 56, Some(&ctx)).unwrap();
        LIB.double(&mut g).unwrap();
        let (mut x, mut y) = ([0u8; 56], [0u8; 56]);
        LIB.get_xy(&g, &mut x, &mut y).unwrap();
        assert_eq!(
            x,
            hex!(
                "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa9"
                "55555555555555555555555555555555555555555555555555555555"
            )
        );
        assert_eq!(
            y,
            hex!(
                "ae05e9634ad7048db359d6205086c2b0036ed7a035884dd7b7e36d72"
                "8ad8c4b80d6565833a2a3098bbbcb2bed1cda06bdaeafbcdea9386ed"
            )
        );
    }

    #[test]
    fn rejects_foreign_points() {
        let ctx = new_context().unwrap();
        let mut g = LIB.new_point(&GX, &GY, 56, Some(&ctx)).unwrap();
        let other = ed25519::LIB
            .new_point(
                &hex!("216936d3cd6e53fec0a4e231fdd6dc5c692cc7609525a7b2c9562d608f25d51a"),
                &hex!("6666666666666666666666666666666666666666666666666666666666666658"),
                32,
                None,
            )
            .unwrap();
        assert_eq!(LIB.add(&mut g, &other).unwrap_err(), Error::EC_CURVE);
        assert_eq!(LIB.cmp(&g, &other).unwrap_err(), Error::EC_CURVE);
    }
}
