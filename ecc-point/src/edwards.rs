//! Edwards curves (RFC 8032).

use crate::{Curve, CurveId, Error, Result, curve::Ops};
use hex_literal::hex;
use num_bigint::BigUint;
use once_cell::sync::OnceCell;

const ED25519_P: [u8; 32] = hex!("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed");
const ED25519_ORDER: [u8; 32] =
    hex!("1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed");
const ED25519_GX: [u8; 32] = hex!("216936d3cd6e53fec0a4e231fdd6dc5c692cc7609525a7b2c9562d608f25d51a");
const ED25519_GY: [u8; 32] = hex!("6666666666666666666666666666666666666666666666666666666666666658");

const ED448_P: [u8; 56] = hex!(
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffe"
    "ffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
);
const ED448_ORDER: [u8; 56] = hex!(
    "3fffffffffffffffffffffffffffffffffffffffffffffffffffffff"
    "7cca23e9c44edb49aed63690216cc2728dc58f552378c292ab5844f3"
);
const ED448_GX: [u8; 56] = hex!(
    "4f1970c66bed0ded221d15a622bf36da9e146570470f1767ea6de324"
    "a3d3a46412ae1af72ab66511433b80e18b00938e2626a82bc70cc05e"
);
const ED448_GY: [u8; 56] = hex!(
    "693f46716eb6bc248876203756c9c7624bea73736ca3984087789c1e"
    "05a0c2d73ad3ff1ce67c39c4fdbd132c4ed7c8ad9808795bf230fa14"
);

/// Build the record of an Edwards curve.
pub(crate) fn curve(id: CurveId) -> Result<Curve> {
    match id {
        CurveId::Ed25519 => Ok(Curve {
            id,
            family: id.family(),
            modulus: BigUint::from_bytes_be(&ED25519_P),
            b: None,
            order: BigUint::from_bytes_be(&ED25519_ORDER),
            gx: BigUint::from_bytes_be(&ED25519_GX),
            gy: Some(BigUint::from_bytes_be(&ED25519_GY)),
            modulus_bits: 255,
            oid: "1.3.101.112",
            name: "Ed25519",
            openssh: Some("ssh-ed25519"),
            context: None,
            ops: Ops::Affine(ec_native::ed25519::LIB),
            validator: None,
            generator: OnceCell::new(),
        }),
        CurveId::Ed448 => {
            let context = ec_native::ed448::new_context().map_err(|err| {
                tracing::warn!(curve = "Ed448", code = err.code(), "cannot create curve context");
                Error::CurveInit {
                    curve: "Ed448",
                    code: err.code(),
                }
            })?;

            Ok(Curve {
                id,
                family: id.family(),
                modulus: BigUint::from_bytes_be(&ED448_P),
                b: None,
                order: BigUint::from_bytes_be(&ED448_ORDER),
                gx: BigUint::from_bytes_be(&ED448_GX),
                gy: Some(BigUint::from_bytes_be(&ED448_GY)),
                modulus_bits: 448,
                oid: "1.3.101.113",
                name: "Ed448",
                openssh: None,
                context: Some(context),
                ops: Ops::Affine(ec_native::ed448::LIB),
                validator: None,
                generator: OnceCell::new(),
            })
        }
        _ => Err(Error::UnsupportedOperation("Edwards curve")),
    }
}
