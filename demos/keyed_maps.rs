//! Demonstrates the map alias with three key kinds: an unsigned
//! integral key, a legacy-style enum with explicit discriminants, and
//! a plain enum. The enums carry no derived `Hash`; registration via
//! `enum_key!` is what makes them usable as keys.

use core::fmt::{Debug, Display};
use core::hash::{BuildHasher, Hash};

use enum_hashmap::{enum_key, HashMap};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Shade {
    First,
    Second,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LegacyStatus {
    FirstOld = 10,
    SecondOld,
}

enum_key!(Shade as u8, LegacyStatus as i32);

fn print_lookup<K, V, S>(map: &HashMap<K, V, S>, key: K)
where
    K: Debug + Eq + Hash,
    V: Display,
    S: BuildHasher,
{
    match map.get(&key) {
        Some(v) => println!("value of {:?}: {}", key, v),
        None => println!("value of {:?}: <absent>", key),
    }
}

fn main() {
    let by_number: HashMap<usize, String> = [(1, "one".to_string()), (2, "two".to_string())]
        .into_iter()
        .collect();
    print_lookup(&by_number, 1);
    print_lookup(&by_number, 2);

    let by_legacy: HashMap<LegacyStatus, String> = [
        (LegacyStatus::FirstOld, "the first old".to_string()),
        (LegacyStatus::SecondOld, "the second old".to_string()),
    ]
    .into_iter()
    .collect();
    print_lookup(&by_legacy, LegacyStatus::FirstOld);
    print_lookup(&by_legacy, LegacyStatus::SecondOld);

    let by_shade: HashMap<Shade, String> = [
        (Shade::First, "the first shade".to_string()),
        (Shade::Second, "the second shade".to_string()),
    ]
    .into_iter()
    .collect();
    print_lookup(&by_shade, Shade::First);
    print_lookup(&by_shade, Shade::Second);
}
