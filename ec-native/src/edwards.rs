//! Twisted Edwards curves `a·x² + y² = 1 + d·x²·y²` in extended coordinates.
//!
//! A point `(X : Y : Z : T)` represents the affine point `(X/Z, Y/Z)` with
//! `T = X·Y/Z`. The unified addition law is complete when `a` is a square and
//! `d` is not, which holds for both Ed25519 and Ed448, so doubling reuses it.
//! Scalar multiplication is a Montgomery ladder of fixed length with
//! conditional swaps.

use crate::{
    AffineLib, Context, EcContext, EcPoint, Error, PointLib, Repr, Result,
    field::{Fe, Field, for_each_bit},
};
use elliptic_curve::subtle::{Choice, ConditionallySelectable};
use std::sync::Arc;

/// Curve constants shared by every point on one Edwards curve.
#[derive(Debug)]
pub(crate) struct EdwardsCurve {
    pub(crate) name: &'static str,
    field: Field,
    a: Fe,
    d: Fe,
}

impl EdwardsCurve {
    pub(crate) fn new(name: &'static str, field: Field, a: Fe, d: Fe) -> Self {
        Self { name, field, a, d }
    }

    fn contains(&self, x: Fe, y: Fe) -> bool {
        let f = &self.field;
        let xx = x * x;
        let yy = y * y;
        let lhs = self.a * xx + yy;
        let rhs = f.one() + self.d * xx * yy;
        f.equals(&lhs, &rhs).into()
    }

    fn identity(&self) -> Coords {
        Coords {
            x: self.field.zero(),
            y: self.field.one(),
            z: self.field.one(),
            t: self.field.zero(),
        }
    }

    fn add(&self, p: &Coords, q: &Coords) -> Coords {
        let axx = self.a * p.x * q.x;
        let dtt = self.d * p.t * q.t;
        let zz = p.z * q.z;
        let yy = p.y * q.y;
        let xy = p.x * q.y + p.y * q.x;

        let zz_minus = zz - dtt;
        let zz_plus = zz + dtt;
        let yy_minus = yy - axx;

        Coords {
            x: xy * zz_minus,
            y: yy_minus * zz_plus,
            z: zz_minus * zz_plus,
            t: yy_minus * xy,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Coords {
    x: Fe,
    y: Fe,
    z: Fe,
    t: Fe,
}

impl ConditionallySelectable for Coords {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: Fe::conditional_select(&a.x, &b.x, choice),
            y: Fe::conditional_select(&a.y, &b.y, choice),
            z: Fe::conditional_select(&a.z, &b.z, choice),
            t: Fe::conditional_select(&a.t, &b.t, choice),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct EdwardsPoint {
    curve: Arc<EdwardsCurve>,
    coords: Coords,
}

impl EdwardsPoint {
    fn from_affine(curve: Arc<EdwardsCurve>, x: Fe, y: Fe) -> Self {
        let coords = Coords {
            x,
            y,
            z: curve.field.one(),
            t: x * y,
        };
        Self { curve, coords }
    }

    fn with(&self, coords: Coords) -> Self {
        Self {
            curve: Arc::clone(&self.curve),
            coords,
        }
    }

    fn add(&self, other: &Self) -> Self {
        self.with(self.curve.add(&self.coords, &other.coords))
    }

    fn double(&self) -> Self {
        self.add(self)
    }

    fn neg(&self) -> Self {
        let f = &self.curve.field;
        self.with(Coords {
            x: f.neg(self.coords.x),
            t: f.neg(self.coords.t),
            ..self.coords
        })
    }

    /// Montgomery ladder over a number of bits of `k` that depends only on
    /// its length. The starting multiple is rescaled by a factor derived from
    /// `seed`, which leaves the point unchanged.
    fn mul(&self, k: &[u8], seed: u64) -> Self {
        let curve = &self.curve;
        let lambda = curve.field.blinding(seed);
        let p = &self.coords;

        let mut r0 = curve.identity();
        let mut r1 = Coords {
            x: p.x * lambda,
            y: p.y * lambda,
            z: p.z * lambda,
            t: p.t * lambda,
        };

        for_each_bit(k, curve.field.len(), |bit| {
            Coords::conditional_swap(&mut r0, &mut r1, bit);
            r1 = curve.add(&r0, &r1);
            r0 = curve.add(&r0, &r0);
            Coords::conditional_swap(&mut r0, &mut r1, bit);
        });

        self.with(r0)
    }

    fn to_affine(&self) -> (Fe, Fe) {
        let z_inv = self.curve.field.invert(self.coords.z);
        (self.coords.x * z_inv, self.coords.y * z_inv)
    }

    fn equals(&self, other: &Self) -> bool {
        let f = &self.curve.field;
        let (p, q) = (&self.coords, &other.coords);
        (f.equals(&(p.x * q.z), &(q.x * p.z)) & f.equals(&(p.y * q.z), &(q.y * p.z))).into()
    }
}

/// How a capability table finds the curve for a new point.
pub(crate) type Resolve = fn(Option<&EcContext>) -> Result<Arc<EdwardsCurve>>;

/// Look up the Edwards curve named `name` in a context.
pub(crate) fn curve_from_context(ctx: Option<&EcContext>, name: &str) -> Result<Arc<EdwardsCurve>> {
    match ctx {
        Some(EcContext(Context::Edwards(curve))) if curve.name == name => Ok(Arc::clone(curve)),
        Some(_) => Err(Error::EC_CURVE),
        None => Err(Error::NULL),
    }
}

/// Capability table for one Edwards curve.
pub(crate) struct EdwardsLib {
    name: &'static str,
    resolve: Resolve,
}

impl EdwardsLib {
    pub(crate) const fn new(name: &'static str, resolve: Resolve) -> Self {
        Self { name, resolve }
    }

    fn point<'a>(&self, point: &'a EcPoint) -> Result<&'a EdwardsPoint> {
        match &point.0 {
            Repr::Edwards(p) if p.curve.name == self.name => Ok(p),
            _ => Err(Error::EC_CURVE),
        }
    }

    fn point_mut<'a>(&self, point: &'a mut EcPoint) -> Result<&'a mut EdwardsPoint> {
        match &mut point.0 {
            Repr::Edwards(p) if p.curve.name == self.name => Ok(p),
            _ => Err(Error::EC_CURVE),
        }
    }
}

impl PointLib for EdwardsLib {
    fn clone_point(&self, point: &EcPoint) -> Result<EcPoint> {
        let p = self.point(point)?;
        Ok(EcPoint(Repr::Edwards(p.clone())))
    }

    fn cmp(&self, a: &EcPoint, b: &EcPoint) -> Result<bool> {
        let (a, b) = (self.point(a)?, self.point(b)?);
        Ok(a.equals(b))
    }

    fn scalar(&self, point: &mut EcPoint, k: &[u8], seed: u64) -> Result<()> {
        if k.is_empty() {
            return Err(Error::NOT_ENOUGH_DATA);
        }

        let p = self.point_mut(point)?;
        *p = p.mul(k, seed);
        Ok(())
    }
}

impl AffineLib for EdwardsLib {
    fn new_point(
        &self,
        x: &[u8],
        y: &[u8],
        len: usize,
        ctx: Option<&EcContext>,
    ) -> Result<EcPoint> {
        let curve = (self.resolve)(ctx)?;

        if len == 0 {
            return Err(Error::NOT_ENOUGH_DATA);
        }

        if len != curve.field.len() {
            return Err(Error::VALUE);
        }

        if x.len() != len || y.len() != len {
            return Err(Error::VALUE);
        }

        if !curve.field.is_canonical(x) || !curve.field.is_canonical(y) {
            return Err(Error::VALUE);
        }

        let x = curve.field.decode(x)?;
        let y = curve.field.decode(y)?;

        if !curve.contains(x, y) {
            return Err(Error::EC_POINT);
        }

        Ok(EcPoint(Repr::Edwards(EdwardsPoint::from_affine(curve, x, y))))
    }

    fn get_xy(&self, point: &EcPoint, x: &mut [u8], y: &mut [u8]) -> Result<()> {
        let p = self.point(point)?;
        let (ax, ay) = p.to_affine();
        p.curve.field.encode(&ax, x)?;
        p.curve.field.encode(&ay, y)
    }

    fn double(&self, point: &mut EcPoint) -> Result<()> {
        let p = self.point_mut(point)?;
        *p = p.double();
        Ok(())
    }

    fn add(&self, a: &mut EcPoint, b: &EcPoint) -> Result<()> {
        let b = self.point(b)?;
        let a = self.point_mut(a)?;
        *a = a.add(b);
        Ok(())
    }

    fn neg(&self, point: &mut EcPoint) -> Result<()> {
        let p = self.point_mut(point)?;
        *p = p.neg();
        Ok(())
    }
}
