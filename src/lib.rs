//! enum-hashmap: a hashed map whose default hash state is chosen per
//! key type, so enumeration keys hash through their underlying
//! integral representation.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: let `HashMap` take enumeration keys without every call site
//!   spelling out a hash state, and without the enum carrying a
//!   structural `Hash` of its own.
//! - Layers:
//!   - EnumRepr: per-enum association with its underlying integral
//!     type `Repr`, plus the (injective, infallible) value conversion.
//!   - EnumHash<S>: the adapter hash state; delegates hasher
//!     construction to an inner default state and exposes `hash_enum`,
//!     which hashes one enum value by hashing its representation.
//!   - MapKey: the compile-time selector; each key type names the hash
//!     state the alias should default to. Integral and string-like
//!     primitives select the default state, registered enums select
//!     EnumHash, any other type opts in with a one-line impl.
//!   - HashMap<K, V, S>: the public alias over `hashbrown::HashMap`
//!     with `S` defaulting to `<K as MapKey>::Build`.
//!
//! Constraints
//! - Everything here is resolved during compilation: no runtime
//!   branch, no object, no state of our own. Selection is total over
//!   registered key types and deterministic (trait resolution is).
//! - Registered enums must be fieldless and `Copy`; the `as` cast to
//!   `Repr` is injective over declared variants, so hash-equality
//!   consistency is inherited from the representation's hash.
//! - An explicit `S` on the alias is used verbatim; the selector only
//!   fills the default.
//!
//! Why route every registered enum through EnumHash?
//! - Enums that could just derive `Hash` hash identically either way:
//!   the generated `Hash` writes exactly the representation and
//!   EnumHash mixes with the same default state. One rule for all
//!   enums is simpler than distinguishing the ones that strictly need
//!   the adapter.
//!
//! Notes and non-goals
//! - No hashing algorithm of our own; mixing is always the default
//!   state's (`hashbrown`'s `DefaultHashBuilder`).
//! - No map logic beyond `hashbrown::HashMap`; the alias inherits its
//!   operation set, complexity, and (absence of) ordering guarantees.
//! - No thread-safety guarantees beyond the underlying container's.
//! - Public surface is `HashMap`, `MapKey`, `EnumHash`, `EnumRepr`,
//!   and the `enum_key!` registration macro.

mod hash;
mod map;
mod repr;
mod select;

// Public surface
pub use hash::EnumHash;
pub use map::HashMap;
pub use repr::EnumRepr;
pub use select::MapKey;
