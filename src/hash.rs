//! EnumHash: the adapter hash state for enumeration keys.

use core::hash::BuildHasher;

use hashbrown::hash_map::DefaultHashBuilder;

use crate::EnumRepr;

/// Hash state for enumeration keys.
///
/// Does no mixing of its own: hasher construction is delegated to the
/// inner state `S`, and [`hash_enum`](EnumHash::hash_enum) hashes a
/// value by casting it to its underlying representation and hashing
/// that with `S`. Since `enum_key!`-registered enums hash by writing
/// exactly their representation, a map built over this state and a
/// direct `hash_enum` call agree bit-for-bit when they share `S`.
#[derive(Clone, Default)]
pub struct EnumHash<S = DefaultHashBuilder> {
    state: S,
}

impl<S: BuildHasher> EnumHash<S> {
    /// Wrap a caller-provided inner state.
    ///
    /// Default states are randomly seeded per instance, so anything
    /// that compares hashes across states (tests, mostly) should
    /// build one state and clone it.
    pub fn with_state(state: S) -> Self {
        Self { state }
    }

    /// Hash one enumeration value via its underlying representation.
    #[inline]
    pub fn hash_enum<E: EnumRepr>(&self, value: E) -> u64 {
        self.state.hash_one(value.repr())
    }
}

impl<S: BuildHasher> BuildHasher for EnumHash<S> {
    type Hasher = S::Hasher;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        self.state.build_hasher()
    }
}
