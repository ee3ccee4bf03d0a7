#[cfg(feature = "std-hash")]
pub mod map {
    pub type BuildHasher = std::collections::hash_map::RandomState;
}

#[cfg(not(feature = "std-hash"))]
pub mod map {
    pub type BuildHasher = rustc_hash::FxBuildHasher;
}

/// Insertion-ordered map keyed by static identifiers.
pub type OrderedMap<V> = indexmap::IndexMap<&'static str, V, map::BuildHasher>;
