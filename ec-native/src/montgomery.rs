//! x-only arithmetic on Montgomery curves `v² = u³ + A·u² + u`.
//!
//! Points are kept in projective form `(X : Z)` with `u = X/Z`; `Z = 0` is
//! the point at infinity. Only scalar multiplication is available, through
//! the Montgomery ladder of RFC 7748, run over a fixed number of bits with
//! conditional swaps.

use crate::{
    Context, EcContext, EcPoint, Error, PointLib, Repr, Result, XLib,
    field::{Fe, Field, for_each_bit},
};
use elliptic_curve::subtle::{Choice, ConditionallySelectable};
use std::sync::Arc;

/// Curve constants shared by every point on one Montgomery curve.
#[derive(Debug)]
pub(crate) struct MontgomeryCurve {
    pub(crate) name: &'static str,
    field: Field,
    /// `(A - 2) / 4`
    a24: Fe,
}

impl MontgomeryCurve {
    pub(crate) fn new(name: &'static str, field: Field, a24: u64) -> Self {
        Self {
            name,
            field,
            a24: field.from_u64(a24),
        }
    }

    fn infinity(&self) -> Proj {
        Proj {
            x: self.field.one(),
            z: self.field.zero(),
        }
    }

    /// `x2 = 2·x2`, `x3 = x2 + x3`, where `u` is the affine difference of the two.
    fn ladder_step(&self, x2: &mut Proj, x3: &mut Proj, u: Fe) {
        let a = x2.x + x2.z;
        let aa = a * a;
        let b = x2.x - x2.z;
        let bb = b * b;
        let e = aa - bb;
        let c = x3.x + x3.z;
        let d = x3.x - x3.z;
        let da = d * a;
        let cb = c * b;

        let sum = da + cb;
        let diff = da - cb;
        x3.x = sum * sum;
        x3.z = u * diff * diff;
        x2.x = aa * bb;
        x2.z = e * (aa + self.a24 * e);
    }
}

#[derive(Clone, Copy, Debug)]
struct Proj {
    x: Fe,
    z: Fe,
}

impl ConditionallySelectable for Proj {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: Fe::conditional_select(&a.x, &b.x, choice),
            z: Fe::conditional_select(&a.z, &b.z, choice),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct MontgomeryPoint {
    curve: Arc<MontgomeryCurve>,
    p: Proj,
}

impl MontgomeryPoint {
    fn is_infinity(&self) -> Choice {
        self.curve.field.is_zero(&self.p.z)
    }

    fn equals(&self, other: &Self) -> bool {
        let f = &self.curve.field;
        let (inf_a, inf_b) = (self.is_infinity(), other.is_infinity());
        let same = f.equals(&(self.p.x * other.p.z), &(other.p.x * self.p.z));
        ((inf_a & inf_b) | (!inf_a & !inf_b & same)).into()
    }

    fn to_affine(&self) -> Option<Fe> {
        if bool::from(self.is_infinity()) {
            return None;
        }

        let f = &self.curve.field;
        Some(self.p.x * f.invert(self.p.z))
    }

    /// `[k]P` for the big-endian scalar `k`. The starting multiple is
    /// rescaled by a factor derived from `seed`.
    fn mul(&self, k: &[u8], seed: u64) -> Self {
        let curve = &self.curve;
        let f = &curve.field;

        let at_infinity = self.is_infinity();
        let u = self.p.x * f.invert(self.p.z);
        // (0, 0) has order two and the ladder degenerates on it.
        let order_two = f.is_zero(&u) & !at_infinity;

        let lambda = f.blinding(seed);
        let mut x2 = curve.infinity();
        let mut x3 = Proj {
            x: u * lambda,
            z: lambda,
        };
        let mut swap = Choice::from(0);

        for_each_bit(k, f.len(), |bit| {
            Proj::conditional_swap(&mut x2, &mut x3, swap ^ bit);
            swap = bit;
            curve.ladder_step(&mut x2, &mut x3, u);
        });
        Proj::conditional_swap(&mut x2, &mut x3, swap);

        let odd = Choice::from(k.last().map_or(0, |b| b & 1));
        let two_torsion = Proj::conditional_select(
            &curve.infinity(),
            &Proj {
                x: f.zero(),
                z: f.one(),
            },
            odd,
        );
        let out = Proj::conditional_select(&x2, &two_torsion, order_two);
        let out = Proj::conditional_select(&out, &self.p, at_infinity);

        Self {
            curve: Arc::clone(curve),
            p: out,
        }
    }
}

/// How a capability table finds the curve for a new point.
pub(crate) type Resolve = fn(Option<&EcContext>) -> Result<Arc<MontgomeryCurve>>;

/// Look up the Montgomery curve named `name` in a context.
pub(crate) fn curve_from_context(
    ctx: Option<&EcContext>,
    name: &str,
) -> Result<Arc<MontgomeryCurve>> {
    match ctx {
        Some(EcContext(Context::Montgomery(curve))) if curve.name == name => Ok(Arc::clone(curve)),
        Some(_) => Err(Error::EC_CURVE),
        None => Err(Error::NULL),
    }
}

/// Capability table for one Montgomery curve.
pub(crate) struct MontgomeryLib {
    name: &'static str,
    resolve: Resolve,
}

impl MontgomeryLib {
    pub(crate) const fn new(name: &'static str, resolve: Resolve) -> Self {
        Self { name, resolve }
    }

    fn point<'a>(&self, point: &'a EcPoint) -> Result<&'a MontgomeryPoint> {
        match &point.0 {
            Repr::Montgomery(p) if p.curve.name == self.name => Ok(p),
            _ => Err(Error::EC_CURVE),
        }
    }
}

impl PointLib for MontgomeryLib {
    fn clone_point(&self, point: &EcPoint) -> Result<EcPoint> {
        let p = self.point(point)?;
        Ok(EcPoint(Repr::Montgomery(p.clone())))
    }

    fn cmp(&self, a: &EcPoint, b: &EcPoint) -> Result<bool> {
        let (a, b) = (self.point(a)?, self.point(b)?);
        Ok(a.equals(b))
    }

    fn scalar(&self, point: &mut EcPoint, k: &[u8], seed: u64) -> Result<()> {
        if k.is_empty() {
            return Err(Error::NOT_ENOUGH_DATA);
        }

        let result = self.point(point)?.mul(k, seed);
        point.0 = Repr::Montgomery(result);
        Ok(())
    }
}

impl XLib for MontgomeryLib {
    fn new_point(&self, x: Option<&[u8]>, len: usize, ctx: Option<&EcContext>) -> Result<EcPoint> {
        let curve = (self.resolve)(ctx)?;

        if len == 0 {
            return Err(Error::NOT_ENOUGH_DATA);
        }

        if len != curve.field.len() {
            return Err(Error::VALUE);
        }

        let p = match x {
            None => curve.infinity(),
            Some(x) => Proj {
                x: curve.field.decode(x)?,
                z: curve.field.one(),
            },
        };

        Ok(EcPoint(Repr::Montgomery(MontgomeryPoint { curve, p })))
    }

    fn get_x(&self, point: &EcPoint, x: &mut [u8]) -> Result<()> {
        let p = self.point(point)?;
        let u = p.to_affine().ok_or(Error::EC_PAI)?;
        p.curve.field.encode(&u, x)
    }
}
