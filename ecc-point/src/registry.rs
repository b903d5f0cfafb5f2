//! Process-wide curve registry.

use crate::{
    Curve, CurveFamily, CurveId, EccPoint, EccXPoint, Error, Result,
    curve::Generator,
    edwards, montgomery, nist,
};
use ec_native::{AffineLib, EcPoint, XLib};
use once_cell::sync::Lazy;
use rand_core::OsRng;
use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

static CURVES: Lazy<Curves> = Lazy::new(Curves::new);

/// Registry mapping every curve alias to its [`Curve`] record.
///
/// Records are built on first use, at most once per process, and shared by
/// all of their aliases.
pub struct Curves {
    map: Mutex<HashMap<&'static str, &'static Curve>>,
}

impl Curves {
    fn new() -> Self {
        Self {
            map: Mutex::new(HashMap::new()),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static Self {
        &CURVES
    }

    /// Resolve `name` to its curve record, building the record on first use.
    pub fn lookup(&self, name: &str) -> Result<&'static Curve> {
        // Records are inserted only once fully built, so a poisoned map is
        // still consistent.
        let mut map = self.map.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(&curve) = map.get(name) {
            return Ok(curve);
        }

        let id = CurveId::from_name(name).ok_or_else(|| Error::UnknownCurve(name.to_owned()))?;
        let curve = build(id)?;

        for &alias in id.aliases() {
            map.insert(alias, curve);
        }

        Ok(curve)
    }

    /// Every alias with its curve record, building all records.
    pub fn all(&self) -> Result<Vec<(&'static str, &'static Curve)>> {
        let mut all = Vec::new();
        for id in CurveId::ALL {
            for &alias in id.aliases() {
                all.push((alias, self.lookup(alias)?));
            }
        }
        Ok(all)
    }

    /// Is `name` an alias of a supported curve?
    pub fn contains(&self, name: &str) -> bool {
        CurveId::from_name(name).is_some()
    }

    /// Every accepted alias.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        CurveId::ALL
            .into_iter()
            .flat_map(|id| id.aliases().iter().copied())
    }
}

/// Resolve `name` in the process-wide registry.
pub fn lookup(name: &str) -> Result<&'static Curve> {
    Curves::global().lookup(name)
}

/// Every alias with its curve record, from the process-wide registry.
pub fn curves() -> Result<Vec<(&'static str, &'static Curve)>> {
    Curves::global().all()
}

/// Build the record for `id` with its generator.
fn build(id: CurveId) -> Result<&'static Curve> {
    let record = match id.family() {
        CurveFamily::Weierstrass => nist::curve(id, &mut OsRng)?,
        CurveFamily::Edwards => edwards::curve(id)?,
        CurveFamily::Montgomery => montgomery::curve(id)?,
    };

    finish(record)
}

/// Native generator of a record that is not registered yet.
enum Pending {
    Affine(&'static dyn AffineLib, EcPoint),
    X(&'static dyn XLib, EcPoint),
}

/// Create the generator of `record`, then keep the record for the rest of
/// the process. Nothing is leaked if the generator is rejected.
fn finish(record: Curve) -> Result<&'static Curve> {
    let pending = match &record.gy {
        Some(gy) => {
            let (lib, point) = EccPoint::native(&record.gx, gy, &record)?;
            Pending::Affine(lib, point)
        }
        None => {
            let (lib, point) = EccXPoint::native(Some(&record.gx), &record)?;
            Pending::X(lib, point)
        }
    };

    let curve: &'static Curve = Box::leak(Box::new(record));

    let generator = match pending {
        Pending::Affine(lib, point) => Generator::Affine(EccPoint::from_native(curve, lib, point)),
        Pending::X(lib, point) => Generator::X(EccXPoint::from_native(curve, lib, point)),
    };

    // The record is fresh, so the cell is still empty.
    let _ = curve.generator.set(generator);

    tracing::debug!(
        curve = curve.name(),
        family = ?curve.family(),
        context = curve.context().is_some(),
        "initialized curve"
    );

    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::finish;
    use crate::{CurveId, Error, nist};
    use rand_core::OsRng;

    #[test]
    fn rejected_generator() {
        let mut record = nist::curve(CurveId::P256, &mut OsRng).unwrap();
        record.gy = record.gy.map(|gy| gy + 1u32);
        assert!(matches!(finish(record), Err(Error::PointNotOnCurve)));
    }

    #[test]
    fn accepted_generator() {
        let record = nist::curve(CurveId::P224, &mut OsRng).unwrap();
        let curve = finish(record).unwrap();
        assert_eq!(curve.generator().unwrap().xy().unwrap().0, *curve.gx());
    }
}
