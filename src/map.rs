//! A CBOR map that preserves wire/insertion order.
//!
//! Unlike a canonical-CBOR map, keys are neither sorted on encode nor
//! validated for ordering or uniqueness on decode: this crate's map reads
//! and writes pairs in exactly the order given.

use crate::value::Cbor;

#[derive(Debug, Clone, Default)]
pub struct Map(Vec<(Cbor, Cbor)>);

impl Map {
    pub fn new() -> Self {
        Map(Vec::new())
    }

    pub fn insert(&mut self, key: impl Into<Cbor>, value: impl Into<Cbor>) {
        self.0.push((key.into(), value.into()));
    }

    pub fn get(&self, key: &Cbor) -> Option<&Cbor> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Cbor, Cbor)> {
        self.0.iter()
    }

    pub(crate) fn from_pairs(pairs: Vec<(Cbor, Cbor)>) -> Self {
        Map(pairs)
    }
}

impl PartialEq for Map {
    // Compared positionally, not by key lookup: this map allows duplicate
    // keys (it neither sorts nor deduplicates), so two maps are equal when
    // they hold the same pairs in the same wire order.
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl FromIterator<(Cbor, Cbor)> for Map {
    fn from_iter<T: IntoIterator<Item = (Cbor, Cbor)>>(iter: T) -> Self {
        Map(iter.into_iter().collect())
    }
}

impl IntoIterator for Map {
    type Item = (Cbor, Cbor);
    type IntoIter = std::vec::IntoIter<(Cbor, Cbor)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = &'a (Cbor, Cbor);
    type IntoIter = std::slice::Iter<'a, (Cbor, Cbor)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_get_round_trips() {
        let mut map = Map::new();
        map.insert("a", 1i64);
        map.insert("b", Cbor::array([2i64, 3]));

        assert_eq!(map.get(&Cbor::from("a")), Some(&Cbor::from(1i64)));
        assert_eq!(map.get(&Cbor::from("b")), Some(&Cbor::array([2i64, 3])));
        assert_eq!(map.get(&Cbor::from("missing")), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn get_returns_first_match_on_duplicate_keys() {
        let mut map = Map::new();
        map.insert(Cbor::Null, Cbor::from(1i64));
        map.insert(Cbor::Null, Cbor::from(2i64));

        assert_eq!(map.get(&Cbor::Null), Some(&Cbor::from(1i64)));
    }
}
