//! `EccPoint` tests.

use ecc_point::{CurveId, EccPoint, EccXPoint, Error, lookup};
use hex_literal::hex;
use num_bigint::{BigInt, BigUint};
use proptest::{prelude::any, prop_compose, proptest};

const AFFINE_CURVES: [&str; 7] = ["p192", "p224", "p256", "p384", "p521", "ed25519", "ed448"];

fn int(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

#[test]
fn coordinates_round_trip() {
    for name in AFFINE_CURVES {
        let curve = lookup(name).unwrap();
        let gy = curve.gy().unwrap();
        let point = EccPoint::new(curve.gx(), gy, name).unwrap();
        assert_eq!(point.xy().unwrap(), (curve.gx().clone(), gy.clone()));
        assert_eq!(point, EccPoint::generator(name).unwrap());
        assert_eq!(point.size_in_bytes(), curve.byte_length());
        assert_eq!(point.size_in_bits(), curve.modulus_bits());
        assert_eq!(point.curve_name(), curve.name());
    }
}

/// SEC 2 test vector for 2G on P-256.
#[test]
fn p256_double_generator() {
    let g = EccPoint::generator("secp256r1").unwrap();
    let expected = EccPoint::new_p256(
        &int(&hex!("7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978")),
        &int(&hex!("07775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1")),
    )
    .unwrap();

    assert_eq!(g.double().unwrap(), expected);
    assert_eq!(g.add(&g).unwrap(), expected);
    assert_eq!(g.scalar_multiply(&BigInt::from(2)).unwrap(), expected);
}

#[test]
fn edwards_double_generator() {
    let g = EccPoint::generator("Ed25519").unwrap();
    let (x, y) = g.double().unwrap().xy().unwrap();
    assert_eq!(x, int(&hex!("36ab384c9f5a046c3d043b7d1833e7ac080d8e4515d7a45f83c5a14e2843ce0e")));
    assert_eq!(y, int(&hex!("2260cdf3092329c21da25ee8c9a21f5697390f51643851560e5f46ae6af8a3c9")));

    let g = EccPoint::generator("Ed448").unwrap();
    let two_g = g.scalar_multiply(&BigInt::from(2)).unwrap();
    assert_eq!(
        two_g.y().unwrap(),
        int(&hex!(
            "ae05e9634ad7048db359d6205086c2b0036ed7a035884dd7b7e36d72"
            "8ad8c4b80d6565833a2a3098bbbcb2bed1cda06bdaeafbcdea9386ed"
        ))
    );
}

#[test]
fn group_order_annihilates_generator() {
    for id in CurveId::ALL {
        let curve = lookup(id.aliases()[0]).unwrap();
        let order = BigInt::from(curve.order().clone());
        if curve.is_montgomery() {
            let g = curve.x_generator().unwrap();
            assert!(g.scalar_multiply(&order).unwrap().is_point_at_infinity().unwrap());
        } else {
            let g = curve.generator().unwrap();
            let p = g.scalar_multiply(&order).unwrap();
            assert!(p.is_point_at_infinity().unwrap(), "{}", curve.name());
            assert_eq!(p, g.point_at_infinity().unwrap());
        }
    }
}

#[test]
fn point_at_infinity() {
    let inf = EccPoint::generator("p384").unwrap().point_at_infinity().unwrap();
    assert_eq!(inf.xy().unwrap(), (BigUint::from(0u32), BigUint::from(0u32)));
    assert!(inf.is_point_at_infinity().unwrap());

    let inf = EccPoint::new(&BigUint::from(0u32), &BigUint::from(1u32), "ed25519").unwrap();
    assert!(inf.is_point_at_infinity().unwrap());
    assert!(!EccPoint::generator("ed25519").unwrap().is_point_at_infinity().unwrap());
}

#[test]
fn negation() {
    for name in AFFINE_CURVES {
        let g = EccPoint::generator(name).unwrap();
        let neg = g.negate().unwrap();
        assert_ne!(neg, g);
        assert!(g.add(&neg).unwrap().is_point_at_infinity().unwrap(), "{name}");
        assert_eq!(neg.negate().unwrap(), g);
    }
}

#[test]
fn incompatible_curves() {
    let mut a = EccPoint::generator("p256").unwrap();
    let b = EccPoint::generator("p384").unwrap();
    let c = EccPoint::generator("ed25519").unwrap();

    assert_eq!(a.add(&b).unwrap_err(), Error::IncompatibleCurve);
    assert_eq!(a.add_in_place(&c).unwrap_err(), Error::IncompatibleCurve);
    assert_eq!(c.add(&a).unwrap_err(), Error::IncompatibleCurve);
    assert_ne!(a, b);
    assert_eq!(a, EccPoint::generator("prime256v1").unwrap());
}

#[test]
fn negative_scalar() {
    let mut g = EccPoint::generator("p224").unwrap();
    assert_eq!(g.scalar_multiply(&BigInt::from(-1)).unwrap_err(), Error::InvalidScalar);
    assert_eq!(
        g.scalar_multiply_in_place(&BigInt::from(-5)).unwrap_err(),
        Error::InvalidScalar
    );
    assert_eq!(g, EccPoint::generator("p224").unwrap());
}

#[test]
fn wrong_family() {
    let one = BigUint::from(1u32);
    assert_eq!(
        EccPoint::new(&one, &one, "X25519").unwrap_err(),
        Error::UnsupportedOperation("EccPoint")
    );
    assert_eq!(
        EccXPoint::new(Some(&one), "p256").unwrap_err(),
        Error::UnsupportedOperation("EccXPoint")
    );
    assert!(matches!(
        EccPoint::generator("curve448"),
        Err(Error::UnsupportedOperation(_))
    ));
}

#[test]
fn bad_coordinates() {
    let curve = lookup("p192").unwrap();
    let wide = BigUint::from(1u32) << 192;
    assert_eq!(
        EccPoint::new(&wide, curve.gy().unwrap(), "p192").unwrap_err(),
        Error::InvalidCoordinateLength
    );

    let y = curve.gy().unwrap() + 1u32;
    assert_eq!(
        EccPoint::new(curve.gx(), &y, "p192").unwrap_err(),
        Error::PointNotOnCurve
    );

    let y = lookup("ed25519").unwrap().gy().unwrap() + 1u32;
    assert_eq!(
        EccPoint::new(lookup("ed25519").unwrap().gx(), &y, "ed25519").unwrap_err(),
        Error::PointNotOnCurve
    );
}

#[test]
fn set_and_clone() {
    let g = EccPoint::generator("p521").unwrap();
    let mut p = g.try_clone().unwrap();
    p.double_in_place().unwrap();
    assert_ne!(p, g);
    assert_eq!(g, EccPoint::generator("p521").unwrap());

    p.set(&g).unwrap();
    assert_eq!(p, g);

    let ed = EccPoint::generator("ed448").unwrap();
    p.set(&ed).unwrap();
    assert_eq!(p.curve_name(), "Ed448");
    assert_eq!(p, ed);
}

#[test]
fn in_place_operations_chain() {
    let g = EccPoint::generator("p256").unwrap();
    let mut p = g.try_clone().unwrap();
    p.double_in_place()
        .unwrap()
        .add_in_place(&g)
        .unwrap()
        .scalar_multiply_in_place(&BigInt::from(5))
        .unwrap();
    assert_eq!(p, g.scalar_multiply(&BigInt::from(15)).unwrap());
}

prop_compose! {
    fn scalar()(bytes in any::<[u8; 32]>()) -> BigInt {
        BigInt::from(BigUint::from_bytes_be(&bytes))
    }
}

proptest! {
    #[test]
    fn p256_scalar_distributes(a in scalar(), b in scalar()) {
        let g = EccPoint::generator("p256").unwrap();
        let lhs = g.scalar_multiply(&(&a + &b)).unwrap();
        let rhs = g.scalar_multiply(&a).unwrap().add(&g.scalar_multiply(&b).unwrap()).unwrap();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn p256_identities(k in scalar()) {
        let p = EccPoint::generator("p256").unwrap().scalar_multiply(&k).unwrap();

        assert_eq!(p.scalar_multiply(&BigInt::from(1)).unwrap(), p);
        assert!(p.scalar_multiply(&BigInt::from(0)).unwrap().is_point_at_infinity().unwrap());
        assert_eq!(p.add(&p.point_at_infinity().unwrap()).unwrap(), p);
        assert_eq!(p.negate().unwrap().negate().unwrap(), p);
    }

    #[test]
    fn p256_clone_is_independent(k in scalar()) {
        let p = EccPoint::generator("p256").unwrap().scalar_multiply(&k).unwrap();
        let before = p.xy().unwrap();
        let mut q = p.try_clone().unwrap();
        q.double_in_place().unwrap();
        assert_eq!(p.xy().unwrap(), before);
    }
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(16))]

    #[test]
    fn ed25519_scalar_distributes(a in scalar(), b in scalar()) {
        let g = EccPoint::generator("ed25519").unwrap();
        let lhs = g.scalar_multiply(&(&a + &b)).unwrap();
        let rhs = g.scalar_multiply(&a).unwrap().add(&g.scalar_multiply(&b).unwrap()).unwrap();
        assert_eq!(lhs, rhs);
        assert_eq!(lhs.add(&lhs.point_at_infinity().unwrap()).unwrap(), lhs);
    }
}
