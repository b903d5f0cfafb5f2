//! Montgomery curves (RFC 7748) and their public-key checks.

use crate::{Curve, CurveId, EccXPoint, Error, Result, curve::Ops};
use hex_literal::hex;
use num_bigint::BigUint;
use once_cell::sync::{Lazy, OnceCell};

const CURVE25519_P: [u8; 32] =
    hex!("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed");
const CURVE25519_ORDER: [u8; 32] =
    hex!("1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed");

/// u coordinates of the two points of order 8 on Curve25519.
const CURVE25519_X1: [u8; 32] =
    hex!("00b8495f16056286fdb1329ceb8d09da6ac49ff1fae35616aeb8413b7c7aebe0");
const CURVE25519_X2: [u8; 32] =
    hex!("57119fd0dd4e22d8868e1c58c45c44045bef839c55b1d0b1248c50a3bc959c5f");

const CURVE448_P: [u8; 56] = hex!(
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffe"
    "ffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
);
const CURVE448_ORDER: [u8; 56] = hex!(
    "3fffffffffffffffffffffffffffffffffffffffffffffffffffffff"
    "7cca23e9c44edb49aed63690216cc2728dc58f552378c292ab5844f3"
);

/// Low-order and boundary encodings rejected as Curve25519 public keys
/// (<https://cr.yp.to/ecdh.html#validate>).
static CURVE25519_WEAK: Lazy<Vec<BigUint>> = Lazy::new(|| {
    let p = BigUint::from_bytes_be(&CURVE25519_P);
    let x1 = BigUint::from_bytes_be(&CURVE25519_X1);
    let x2 = BigUint::from_bytes_be(&CURVE25519_X2);
    let p2 = &p * 2u32;
    vec![
        BigUint::from(0u32),
        BigUint::from(1u32),
        x1.clone(),
        x2.clone(),
        &p - 1u32,
        p.clone(),
        &p + 1u32,
        &p + x1,
        &p + x2,
        &p2 - 1u32,
        p2.clone(),
        p2 + 1u32,
    ]
});

static CURVE448_WEAK: Lazy<Vec<BigUint>> = Lazy::new(|| {
    let p = BigUint::from_bytes_be(&CURVE448_P);
    vec![
        BigUint::from(0u32),
        BigUint::from(1u32),
        &p - 1u32,
        p.clone(),
        p + 1u32,
    ]
});

fn check(point: &EccXPoint, weak: &[BigUint], curve: &'static str) -> Result<()> {
    match point.x() {
        Ok(x) if !weak.contains(&x) => Ok(()),
        _ => Err(Error::InvalidPublicKey(curve)),
    }
}

fn validate_x25519(point: &EccXPoint) -> Result<()> {
    check(point, &CURVE25519_WEAK, "Curve25519")
}

fn validate_x448(point: &EccXPoint) -> Result<()> {
    check(point, &CURVE448_WEAK, "Curve448")
}

/// Build the record of a Montgomery curve.
pub(crate) fn curve(id: CurveId) -> Result<Curve> {
    match id {
        CurveId::Curve25519 => Ok(Curve {
            id,
            family: id.family(),
            modulus: BigUint::from_bytes_be(&CURVE25519_P),
            b: None,
            order: BigUint::from_bytes_be(&CURVE25519_ORDER),
            gx: BigUint::from(9u32),
            gy: None,
            modulus_bits: 255,
            oid: "1.3.101.110",
            name: "Curve25519",
            openssh: None,
            context: None,
            ops: Ops::X(ec_native::curve25519::LIB),
            validator: Some(validate_x25519),
            generator: OnceCell::new(),
        }),
        CurveId::Curve448 => {
            let context = ec_native::curve448::new_context().map_err(|err| {
                tracing::warn!(curve = "Curve448", code = err.code(), "cannot create curve context");
                Error::CurveInit {
                    curve: "Curve448",
                    code: err.code(),
                }
            })?;

            Ok(Curve {
                id,
                family: id.family(),
                modulus: BigUint::from_bytes_be(&CURVE448_P),
                b: None,
                order: BigUint::from_bytes_be(&CURVE448_ORDER),
                gx: BigUint::from(5u32),
                gy: None,
                modulus_bits: 448,
                oid: "1.3.101.111",
                name: "Curve448",
                openssh: None,
                context: Some(context),
                ops: Ops::X(ec_native::curve448::LIB),
                validator: Some(validate_x448),
                generator: OnceCell::new(),
            })
        }
        _ => Err(Error::UnsupportedOperation("Montgomery curve")),
    }
}
