//! MapKey: compile-time selection of a hash state per key type.

use core::hash::{BuildHasher, Hash};

use hashbrown::hash_map::DefaultHashBuilder;

/// Names the hash state the [`HashMap`](crate::HashMap) alias defaults
/// to for a given key type.
///
/// Implemented here for the integral primitives, `bool`, `char`,
/// `String`, and `&str` (all select the default state), and by
/// `enum_key!` for registered enums (which select
/// [`EnumHash`](crate::EnumHash)). Any other hashable key type opts in
/// with a one-line impl naming `DefaultHashBuilder`.
///
/// The selection has no runtime representation; an explicit hash-state
/// parameter on the alias bypasses it entirely.
pub trait MapKey: Eq + Hash {
    /// The hash state to build the map with when none is supplied.
    type Build: BuildHasher + Default;
}

macro_rules! default_hash_keys {
    ($($t:ty),+ $(,)?) => {
        $(
            impl MapKey for $t {
                type Build = DefaultHashBuilder;
            }
        )+
    };
}

default_hash_keys!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, String,
);

impl<'a> MapKey for &'a str {
    type Build = DefaultHashBuilder;
}
