//! EnumRepr: the underlying-type relation for enumeration keys, and
//! the `enum_key!` registration macro.

use core::hash::Hash;

/// Relates a fieldless enumeration to its underlying integral type.
///
/// `repr` is the `as` cast: it cannot fail and is injective over the
/// enum's declared variants, which is what lets the hash of the
/// representation stand in for a hash of the enum itself.
///
/// Implemented by `enum_key!`; rarely implemented by hand.
pub trait EnumRepr: Copy {
    /// The integral type the enum's values are stored as.
    type Repr: Copy + Eq + Hash;

    /// Convert a value to its underlying representation.
    fn repr(self) -> Self::Repr;
}

/// Register one or more fieldless enumerations as map keys.
///
/// For each `Enum as Int` pair this generates:
/// - an [`EnumRepr`] impl with `Repr = Int` (the `as` cast);
/// - a `Hash` impl that hashes a value exactly as its representation
///   hashes, so equal values hash equal by construction;
/// - a [`MapKey`](crate::MapKey) impl selecting [`EnumHash`](crate::EnumHash),
///   which makes the [`HashMap`](crate::HashMap) alias work with the
///   enum as a key without an explicit hash state.
///
/// The enum must be `Copy` and must not derive `Hash` itself. `Int`
/// does not have to match a `#[repr(..)]` attribute, but using the
/// declared representation keeps the cast a plain reinterpretation.
#[macro_export]
macro_rules! enum_key {
    ($($name:ty as $repr:ty),+ $(,)?) => {
        $(
            impl $crate::EnumRepr for $name {
                type Repr = $repr;

                #[inline]
                fn repr(self) -> $repr {
                    self as $repr
                }
            }

            impl ::core::hash::Hash for $name {
                #[inline]
                fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                    ::core::hash::Hash::hash(&$crate::EnumRepr::repr(*self), state);
                }
            }

            impl $crate::MapKey for $name {
                type Build = $crate::EnumHash;
            }
        )+
    };
}
