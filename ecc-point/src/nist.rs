//! NIST prime curves (FIPS 186-4, SEC 2).

use crate::{
    Curve, CurveId, Error, Result,
    curve::Ops,
};
use hex_literal::hex;
use num_bigint::BigUint;
use once_cell::sync::OnceCell;
use rand_core::CryptoRngCore;

struct Domain {
    bits: usize,
    p: &'static [u8],
    b: &'static [u8],
    n: &'static [u8],
    gx: &'static [u8],
    gy: &'static [u8],
    oid: &'static str,
    name: &'static str,
    openssh: &'static str,
}

const P192: Domain = Domain {
    bits: 192,
    p: &hex!("fffffffffffffffffffffffffffffffeffffffffffffffff"),
    b: &hex!("64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1"),
    n: &hex!("ffffffffffffffffffffffff99def836146bc9b1b4d22831"),
    gx: &hex!("188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012"),
    gy: &hex!("07192b95ffc8da78631011ed6b24cdd573f977a11e794811"),
    oid: "1.2.840.10045.3.1.1",
    name: "NIST P-192",
    openssh: "ecdsa-sha2-nistp192",
};

const P224: Domain = Domain {
    bits: 224,
    p: &hex!("ffffffffffffffffffffffffffffffff000000000000000000000001"),
    b: &hex!("b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4"),
    n: &hex!("ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d"),
    gx: &hex!("b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21"),
    gy: &hex!("bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34"),
    oid: "1.3.132.0.33",
    name: "NIST P-224",
    openssh: "ecdsa-sha2-nistp224",
};

const P256: Domain = Domain {
    bits: 256,
    p: &hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
    b: &hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
    n: &hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
    gx: &hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
    gy: &hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
    oid: "1.2.840.10045.3.1.7",
    name: "NIST P-256",
    openssh: "ecdsa-sha2-nistp256",
};

const P384: Domain = Domain {
    bits: 384,
    p: &hex!(
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe"
        "ffffffff0000000000000000ffffffff"
    ),
    b: &hex!(
        "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875a"
        "c656398d8a2ed19d2a85c8edd3ec2aef"
    ),
    n: &hex!(
        "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf"
        "581a0db248b0a77aecec196accc52973"
    ),
    gx: &hex!(
        "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a38"
        "5502f25dbf55296c3a545e3872760ab7"
    ),
    gy: &hex!(
        "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c0"
        "0a60b1ce1d7e819d7a431d7c90ea0e5f"
    ),
    oid: "1.3.132.0.34",
    name: "NIST P-384",
    openssh: "ecdsa-sha2-nistp384",
};

const P521: Domain = Domain {
    bits: 521,
    p: &hex!(
        "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        "ffff"
    ),
    b: &hex!(
        "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef1"
        "09e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b50"
        "3f00"
    ),
    n: &hex!(
        "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        "fffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e9138"
        "6409"
    ),
    gx: &hex!(
        "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d"
        "3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5"
        "bd66"
    ),
    gy: &hex!(
        "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e"
        "662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd1"
        "6650"
    ),
    oid: "1.3.132.0.35",
    name: "NIST P-521",
    openssh: "ecdsa-sha2-nistp521",
};

fn domain(id: CurveId) -> Option<&'static Domain> {
    match id {
        CurveId::P192 => Some(&P192),
        CurveId::P224 => Some(&P224),
        CurveId::P256 => Some(&P256),
        CurveId::P384 => Some(&P384),
        CurveId::P521 => Some(&P521),
        _ => None,
    }
}

/// Build the record of a NIST curve, creating its native context.
pub(crate) fn curve(id: CurveId, rng: &mut impl CryptoRngCore) -> Result<Curve> {
    let d = domain(id).ok_or(Error::UnsupportedOperation("Weierstrass context"))?;
    let len = d.bits.div_ceil(8);

    let context = ec_native::weierstrass::new_context(d.p, d.b, d.n, len, rng.next_u64())
        .map_err(|err| {
            tracing::warn!(curve = d.name, code = err.code(), "cannot create curve context");
            Error::CurveInit {
                curve: d.name,
                code: err.code(),
            }
        })?;

    Ok(Curve {
        id,
        family: id.family(),
        modulus: BigUint::from_bytes_be(d.p),
        b: Some(BigUint::from_bytes_be(d.b)),
        order: BigUint::from_bytes_be(d.n),
        gx: BigUint::from_bytes_be(d.gx),
        gy: Some(BigUint::from_bytes_be(d.gy)),
        modulus_bits: d.bits,
        oid: d.oid,
        name: d.name,
        openssh: Some(d.openssh),
        context: Some(context),
        ops: Ops::Affine(ec_native::weierstrass::LIB),
        validator: None,
        generator: OnceCell::new(),
    })
}
