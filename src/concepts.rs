//! Container concepts as trait bounds.
//!
//! `AssociativeContainer` names what a set or map must offer. `AddElement`
//! picks the insertion path by container kind: sequences push to the back,
//! associative containers insert by key. Which path applies is decided at
//! compile time; nothing is checked at run time.
//!
//! Run with: cargo run --bin associative_container

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Display;
use std::hash::Hash;

use itertools::Itertools;

pub const SEQUENCE_PATH: &str = "Adding to Container";
pub const ASSOCIATIVE_PATH: &str = "Adding to Associative Container";

pub trait AssociativeContainer {
    type Key;
    type Value;

    /// `false` when the key was already present.
    fn insert_value(&mut self, value: Self::Value) -> bool;
    fn find_key(&self, key: &Self::Key) -> bool;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Ord> AssociativeContainer for BTreeSet<T> {
    type Key = T;
    type Value = T;

    fn insert_value(&mut self, value: T) -> bool {
        self.insert(value)
    }

    fn find_key(&self, key: &T) -> bool {
        self.contains(key)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}

impl<T: Hash + Eq> AssociativeContainer for HashSet<T> {
    type Key = T;
    type Value = T;

    fn insert_value(&mut self, value: T) -> bool {
        self.insert(value)
    }

    fn find_key(&self, key: &T) -> bool {
        self.contains(key)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl<K: Ord, V> AssociativeContainer for BTreeMap<K, V> {
    type Key = K;
    type Value = (K, V);

    fn insert_value(&mut self, (key, value): (K, V)) -> bool {
        self.insert(key, value).is_none()
    }

    fn find_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

impl<K: Hash + Eq, V> AssociativeContainer for HashMap<K, V> {
    type Key = K;
    type Value = (K, V);

    fn insert_value(&mut self, (key, value): (K, V)) -> bool {
        self.insert(key, value).is_none()
    }

    fn find_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

const _: fn() = || {
    fn associative<C: AssociativeContainer>() {}

    associative::<BTreeSet<i32>>();
    associative::<HashSet<String>>();
    associative::<BTreeMap<String, f64>>();
    associative::<HashMap<u64, Vec<u8>>>();
};

/// Add one element, reporting which insertion path was used.
pub trait AddElement<V> {
    fn add_element(&mut self, value: V) -> &'static str;
}

impl<T> AddElement<T> for Vec<T> {
    fn add_element(&mut self, value: T) -> &'static str {
        self.push(value);
        SEQUENCE_PATH
    }
}

impl<T> AddElement<T> for VecDeque<T> {
    fn add_element(&mut self, value: T) -> &'static str {
        self.push_back(value);
        SEQUENCE_PATH
    }
}

fn insert_associative<C: AssociativeContainer>(container: &mut C, value: C::Value) -> &'static str {
    if !container.insert_value(value) {
        tracing::debug!("key already present, container unchanged");
    }
    ASSOCIATIVE_PATH
}

impl<T: Ord> AddElement<T> for BTreeSet<T> {
    fn add_element(&mut self, value: T) -> &'static str {
        insert_associative(self, value)
    }
}

impl<T: Hash + Eq> AddElement<T> for HashSet<T> {
    fn add_element(&mut self, value: T) -> &'static str {
        insert_associative(self, value)
    }
}

impl<K: Ord, V> AddElement<(K, V)> for BTreeMap<K, V> {
    fn add_element(&mut self, value: (K, V)) -> &'static str {
        insert_associative(self, value)
    }
}

impl<K: Hash + Eq, V> AddElement<(K, V)> for HashMap<K, V> {
    fn add_element(&mut self, value: (K, V)) -> &'static str {
        insert_associative(self, value)
    }
}

/// Render as `( e1 e2 ... )` in iteration order.
pub fn render<'a, C, T>(container: &'a C) -> String
where
    &'a C: IntoIterator<Item = &'a T>,
    T: Display + 'a,
{
    format!("({} )", container.into_iter().map(|e| format!(" {}", e)).join(""))
}
