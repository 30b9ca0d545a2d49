//! The public map alias.

use crate::MapKey;

/// A `hashbrown::HashMap` whose hash-state parameter defaults to the
/// [`MapKey`] selection for the key type.
///
/// Everything else is the underlying container, unchanged: operation
/// set, complexity, and the absence of iteration-order guarantees.
/// `S` given explicitly is used verbatim; `S` omitted requires
/// `K: MapKey`. `Default` and `FromIterator` apply whenever
/// `S: Default`, which holds for both selected states.
pub type HashMap<K, V, S = <K as MapKey>::Build> = hashbrown::HashMap<K, V, S>;
