//! `EccXPoint` tests.

use ecc_point::{EccXPoint, Error, lookup};
use hex_literal::hex;
use num_bigint::{BigInt, BigUint};
use proptest::{prelude::any, prop_compose, proptest};
use rand_core::OsRng;

fn int(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// RFC 7748 section 6.1, with the clamped scalars written big-endian.
#[test]
fn x25519_vectors() {
    let alice = BigInt::from(int(&hex!(
        "6a2cb91da5fb77b12a99c0eb872f4cdf4566b25172c1163c7da518730a6d0770"
    )));

    let public = EccXPoint::generator("X25519")
        .unwrap()
        .scalar_multiply_with_rng(&alice, &mut OsRng)
        .unwrap();
    assert_eq!(
        public.x().unwrap(),
        int(&hex!("6a4e9baa8ea9a4ebf41a38260d3abf0d5af73eb4dc7d8b7454a7308909f02085"))
    );

    let bob = EccXPoint::new_validated(
        &int(&hex!("4f2b886f147efcad4d67785bc843833f3735e4ecc2615bd3b4c17d7b7ddb9ede")),
        "curve25519",
    )
    .unwrap();
    assert_eq!(
        bob.scalar_multiply(&alice).unwrap().x().unwrap(),
        int(&hex!("4217161e3c9bf076339ed147c9217ee0250f3580f43b8e72e12dcea45b9d5d4a"))
    );
}

/// RFC 7748 section 6.2, Alice's key pair.
#[test]
fn x448_vector() {
    let alice = BigInt::from(int(&hex!(
        "eb7298a5c0d8c29a1dab27f1a6826300917389449741a974f5bac9d9"
        "8dc298d46555bce8bae89eeed400584bb046cf75579f51d125498f98"
    )));

    let mut public = EccXPoint::generator("X448").unwrap();
    public.scalar_multiply_in_place(&alice).unwrap();
    assert_eq!(
        public.x().unwrap(),
        int(&hex!(
            "a01fc432e5807f17530d1288da125b0cd453d941726436c8bbd9c522"
            "2c3da7fa639ce03db8d23b274a0721a1aed5227de6e3b731ccf7089b"
        ))
    );
    assert!(public.validate().is_ok());
}

#[test]
fn weak_points_are_rejected() {
    for name in ["curve25519", "curve448"] {
        let p = lookup(name).unwrap().modulus().clone();
        for x in [BigUint::from(0u32), BigUint::from(1u32), &p - 1u32] {
            assert_eq!(
                EccXPoint::new_validated(&x, name).unwrap_err(),
                Error::InvalidPublicKey(lookup(name).unwrap().name()),
                "{name} {x}"
            );
            // Plain construction never runs the check.
            assert!(EccXPoint::new(Some(&x), name).is_ok());
        }
    }

    assert!(EccXPoint::new_validated(&BigUint::from(9u32), "X25519").is_ok());
    assert!(EccXPoint::new_validated(&BigUint::from(5u32), "X448").is_ok());
}

#[test]
fn curve25519_low_order_points() {
    let curve = lookup("curve25519").unwrap();
    let x1 = "325606250916557431795983626356110631294008115727848805560023387167927233504"
        .parse::<BigUint>()
        .unwrap();
    let x2 = "39382357235489614581723060781553021112529911719440698176882885853963445705823"
        .parse::<BigUint>()
        .unwrap();
    let p = curve.modulus();

    for x in [x1.clone(), x2.clone(), p + &x1, p + &x2, p * 2u32 + 1u32] {
        let point = EccXPoint::new(Some(&x), "curve25519").unwrap();
        assert_eq!(curve.validate(&point).unwrap_err(), Error::InvalidPublicKey("Curve25519"));
    }

    // Points of order 8 vanish under the cofactor.
    let point = EccXPoint::new(Some(&x1), "curve25519").unwrap();
    assert!(point.scalar_multiply(&BigInt::from(8)).unwrap().is_point_at_infinity().unwrap());
}

#[test]
fn point_at_infinity() {
    let inf = EccXPoint::new(None, "curve448").unwrap();
    assert!(inf.is_point_at_infinity().unwrap());
    assert_eq!(inf.x().unwrap_err(), Error::NoCoordinateForInfinity);
    assert_eq!(inf.validate().unwrap_err(), Error::InvalidPublicKey("Curve448"));
    assert_eq!(inf, EccXPoint::generator("curve448").unwrap().point_at_infinity().unwrap());

    let g = EccXPoint::generator("curve25519").unwrap();
    assert!(!g.is_point_at_infinity().unwrap());
    assert!(g.scalar_multiply(&BigInt::from(0)).unwrap().is_point_at_infinity().unwrap());
}

#[test]
fn non_canonical_x() {
    let p = lookup("curve25519").unwrap().modulus();
    let point = EccXPoint::new(Some(&(p + 9u32)), "curve25519").unwrap();
    assert_eq!(point, EccXPoint::generator("curve25519").unwrap());

    let wide = BigUint::from(1u32) << 256;
    assert_eq!(
        EccXPoint::new(Some(&wide), "curve25519").unwrap_err(),
        Error::InvalidCoordinateLength
    );
}

#[test]
fn negative_scalar() {
    let g = EccXPoint::generator("curve448").unwrap();
    assert_eq!(g.scalar_multiply(&BigInt::from(-9)).unwrap_err(), Error::InvalidScalar);
}

#[test]
fn set_and_clone() {
    let g = EccXPoint::generator("curve25519").unwrap();
    let mut p = g.scalar_multiply(&BigInt::from(3)).unwrap();
    assert_ne!(p, g);
    p.set(&g).unwrap();
    assert_eq!(p, g);

    let other = EccXPoint::generator("curve448").unwrap();
    p.set(&other).unwrap();
    assert_eq!(p.curve_name(), "Curve448");
    assert_eq!(p.size_in_bytes(), 56);
    assert_eq!(p.size_in_bits(), 448);
    assert_ne!(p, g);
}

prop_compose! {
    fn scalar()(bytes in any::<[u8; 32]>()) -> BigInt {
        BigInt::from(BigUint::from_bytes_be(&bytes))
    }
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(16))]

    #[test]
    fn x25519_shared_secret_agrees(a in scalar(), b in scalar()) {
        let g = EccXPoint::generator("X25519").unwrap();
        let ab = g.scalar_multiply(&a).unwrap().scalar_multiply(&b).unwrap();
        let ba = g.scalar_multiply(&b).unwrap().scalar_multiply(&a).unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn x25519_clone_is_independent(k in scalar()) {
        let p = EccXPoint::generator("X25519").unwrap().scalar_multiply(&k).unwrap();
        let mut q = p.try_clone().unwrap();
        assert_eq!(p, q);
        q.scalar_multiply_in_place(&BigInt::from(2)).unwrap();
        assert_eq!(p, p.scalar_multiply(&BigInt::from(1)).unwrap());
    }
}
