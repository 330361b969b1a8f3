//! Static algorithm registry: maps opaque ids to descriptors.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::tables;
use super::{Algorithm, BlockShape};
use crate::error::Error;

static REGISTRY: Lazy<BTreeMap<&'static str, Algorithm>> = Lazy::new(|| {
    let mut map = BTreeMap::new();
    let mut put = |a: Algorithm| {
        map.insert(a.name(), a);
    };

    let (u, v, w) = tables::classical(2, 2, 2);
    put(Algorithm::exact(
        "classical222",
        BlockShape { m: 2, k: 2, n: 2 },
        u,
        v,
        w,
    ));
    put(Algorithm::exact(
        "strassen",
        BlockShape { m: 2, k: 2, n: 2 },
        tables::strassen::U.to_vec(),
        tables::strassen::V.to_vec(),
        tables::strassen::W.to_vec(),
    ));
    put(Algorithm::exact(
        "fast322",
        BlockShape { m: 3, k: 2, n: 2 },
        tables::fast322::U.to_vec(),
        tables::fast322::V.to_vec(),
        tables::fast322::W.to_vec(),
    ));
    put(Algorithm::exact(
        "fast333",
        BlockShape { m: 3, k: 3, n: 3 },
        tables::fast333::U.to_vec(),
        tables::fast333::V.to_vec(),
        tables::fast333::W.to_vec(),
    ));
    put(Algorithm::exact(
        "fast243",
        BlockShape { m: 2, k: 4, n: 3 },
        tables::fast243::U.to_vec(),
        tables::fast243::V.to_vec(),
        tables::fast243::W.to_vec(),
    ));
    put(Algorithm::approximate(
        "bini322",
        BlockShape { m: 3, k: 2, n: 2 },
        tables::bini322::U.to_vec(),
        tables::bini322::V.to_vec(),
        tables::bini322::W.to_vec(),
    ));
    map
});

/// Look an algorithm up by id.
pub fn lookup(name: &str) -> Result<&'static Algorithm, Error> {
    REGISTRY
        .get(name)
        .ok_or_else(|| Error::UnknownAlgorithm(name.to_string()))
}

/// Registered algorithm ids, sorted.
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.keys().copied()
}

/// All registered descriptors.
pub fn all() -> impl Iterator<Item = &'static Algorithm> {
    REGISTRY.values()
}
