//! String-to-identifier index with separate chaining.
//!
//! [`StringIndex`] is the sole authority that turns node names into dense
//! [`NodeId`] values. It is a small hash table tailored to that one job:
//!
//! - Keys are hashed with 64-bit FNV-1a over their UTF-8 bytes
//! - The bucket count is always a power of two, so a bucket is selected with a
//!   mask instead of a modulo
//! - Each bucket is an append-ordered vector of slots (separate chaining)
//! - Once the load factor exceeds [`MAX_LOAD_FACTOR`] after an insert, the
//!   bucket count doubles and every entry is redistributed
//!
//! Identifiers are assigned in first-insertion order starting at zero and
//! never change afterwards. The index only grows: there is no removal.
//!
//! # Examples
//!
//! ```rust
//! use citygraph::graph::StringIndex;
//!
//! let mut index = StringIndex::new(4);
//! let harbor = index.get_or_create("Harbor");
//! let market = index.get_or_create("Market");
//!
//! assert_eq!(index.get_or_create("Harbor"), harbor);
//! assert_eq!(index.lookup("Market"), Some(market));
//! assert_eq!(index.lookup("Mill"), None);
//! assert!(index.require("Mill").is_err());
//! ```

use tracing::trace;

use crate::{graph::NodeId, Error, Result};

/// Load factor above which the bucket array doubles.
pub const MAX_LOAD_FACTOR: f64 = 0.7;

/// Bucket count used by [`StringIndex::default`].
pub const DEFAULT_INDEX_CAPACITY: usize = 16;

const FNV_OFFSET: u64 = 14_695_981_039_346_656_037;
const FNV_PRIME: u64 = 1_099_511_628_211;

/// Computes the 64-bit FNV-1a hash of `bytes`.
///
/// # Examples
///
/// ```rust
/// use citygraph::graph::fnv1a64;
///
/// assert_eq!(fnv1a64(b""), 0xcbf2_9ce4_8422_2325);
/// assert_eq!(fnv1a64(b"a"), 0xaf63_dc4c_8601_ec8c);
/// ```
#[must_use]
pub fn fnv1a64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Returns the smallest power of two that is `>= n`, never less than 2.
#[must_use]
pub fn next_pow2(n: usize) -> usize {
    n.max(2).next_power_of_two()
}

/// One chained entry. The full hash is kept so a rehash never touches the key bytes.
#[derive(Debug, Clone)]
struct Slot {
    hash: u64,
    key: Box<str>,
    id: NodeId,
}

/// Chained hash index mapping node names to dense identifiers.
///
/// See the [module documentation](self) for the hashing and resize policy.
///
/// # Thread Safety
///
/// `StringIndex` is [`Send`] and [`Sync`]. Lookups take `&self`; inserts (and the
/// rehash they may trigger) take `&mut self`, so a resize can never interleave
/// with a concurrent read.
#[derive(Debug, Clone)]
pub struct StringIndex {
    buckets: Vec<Vec<Slot>>,
    len: usize,
}

impl Default for StringIndex {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_CAPACITY)
    }
}

impl StringIndex {
    /// Creates an empty index with at least `capacity` buckets.
    ///
    /// The bucket count is rounded up to the next power of two (minimum 2).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        StringIndex {
            buckets: vec![Vec::new(); next_pow2(capacity)],
            len: 0,
        }
    }

    /// Returns the identifier for `key`, assigning the next free one if the key is new.
    ///
    /// Calling this twice with the same key returns the same identifier and does
    /// not grow the index. A new key may trigger a rehash before this returns.
    pub fn get_or_create(&mut self, key: &str) -> NodeId {
        let hash = fnv1a64(key.as_bytes());
        let bucket = self.bucket_for(hash);

        if let Some(slot) = self.buckets[bucket]
            .iter()
            .find(|slot| slot.hash == hash && &*slot.key == key)
        {
            return slot.id;
        }

        let id = NodeId::new(self.len);
        self.buckets[bucket].push(Slot {
            hash,
            key: key.into(),
            id,
        });
        self.len += 1;

        while self.exceeds_load_factor() {
            self.grow();
        }

        id
    }

    /// Looks up `key` without modifying the index.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<NodeId> {
        let hash = fnv1a64(key.as_bytes());
        self.buckets[self.bucket_for(hash)]
            .iter()
            .find(|slot| slot.hash == hash && &*slot.key == key)
            .map(|slot| slot.id)
    }

    /// Looks up `key`, failing if it has never been inserted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the key is absent.
    pub fn require(&self, key: &str) -> Result<NodeId> {
        self.lookup(key)
            .ok_or_else(|| Error::NotFound(key.to_string()))
    }

    /// Returns `true` if `key` has been inserted.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Returns the number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no key has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of buckets (always a power of two).
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `entries / bucket_count`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Returns the length of the longest chain.
    #[must_use]
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Iterates over all `(key, id)` pairs in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.buckets
            .iter()
            .flatten()
            .map(|slot| (&*slot.key, slot.id))
    }

    fn bucket_for(&self, hash: u64) -> usize {
        // Truncation on 32-bit targets is fine: only the low bits survive the mask.
        #[allow(clippy::cast_possible_truncation)]
        let hash = hash as usize;
        hash & (self.buckets.len() - 1)
    }

    fn exceeds_load_factor(&self) -> bool {
        // len / buckets > 0.7, kept in integer arithmetic
        self.len * 10 > self.buckets.len() * 7
    }

    fn grow(&mut self) {
        let new_count = self.buckets.len() * 2;
        let mut buckets: Vec<Vec<Slot>> = vec![Vec::new(); new_count];

        for slot in self.buckets.drain(..).flatten() {
            #[allow(clippy::cast_possible_truncation)]
            let bucket = (slot.hash as usize) & (new_count - 1);
            buckets[bucket].push(slot);
        }

        trace!(entries = self.len, buckets = new_count, "string index rehashed");
        self.buckets = buckets;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a64_reference_vectors() {
        assert_eq!(fnv1a64(b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a64(b"a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(fnv1a64(b"foobar"), 0x8594_4171_f739_67e8);
    }

    #[test]
    fn test_next_pow2() {
        assert_eq!(next_pow2(0), 2);
        assert_eq!(next_pow2(1), 2);
        assert_eq!(next_pow2(2), 2);
        assert_eq!(next_pow2(3), 4);
        assert_eq!(next_pow2(16), 16);
        assert_eq!(next_pow2(17), 32);
    }

    #[test]
    fn test_new_rounds_capacity() {
        assert_eq!(StringIndex::new(0).bucket_count(), 2);
        assert_eq!(StringIndex::new(10).bucket_count(), 16);
        assert_eq!(StringIndex::default().bucket_count(), DEFAULT_INDEX_CAPACITY);
    }

    #[test]
    fn test_ids_are_dense_in_insertion_order() {
        let mut index = StringIndex::new(2);
        let ids: Vec<NodeId> = ["Harbor", "Market", "Mill", "Quarry"]
            .iter()
            .map(|name| index.get_or_create(name))
            .collect();

        assert_eq!(
            ids,
            vec![NodeId::new(0), NodeId::new(1), NodeId::new(2), NodeId::new(3)]
        );
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn test_get_or_create_is_idempotent() {
        let mut index = StringIndex::new(4);
        let first = index.get_or_create("X");
        let second = index.get_or_create("X");

        assert_eq!(first, second);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_lookup_does_not_insert() {
        let index = StringIndex::new(4);
        assert_eq!(index.lookup("ghost"), None);
        assert!(index.is_empty());
    }

    #[test]
    fn test_require_reports_missing_key() {
        let mut index = StringIndex::new(4);
        index.get_or_create("present");

        assert_eq!(index.require("present").unwrap(), NodeId::new(0));
        match index.require("absent") {
            Err(Error::NotFound(key)) => assert_eq!(key, "absent"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_load_factor_holds_after_every_insert() {
        let mut index = StringIndex::new(2);
        for i in 0..1_000 {
            index.get_or_create(&format!("node-{i}"));
            assert!(
                index.load_factor() <= MAX_LOAD_FACTOR,
                "load factor {} exceeded after {} inserts",
                index.load_factor(),
                i + 1
            );
            assert!(index.bucket_count().is_power_of_two());
        }
    }

    #[test]
    fn test_resize_doubles_bucket_count() {
        let mut index = StringIndex::new(4);
        // 2 / 4 = 0.5, 3 / 4 = 0.75 -> grows to 8
        index.get_or_create("a");
        index.get_or_create("b");
        assert_eq!(index.bucket_count(), 4);

        index.get_or_create("c");
        assert_eq!(index.bucket_count(), 8);
    }

    #[test]
    fn test_ids_survive_rehash() {
        let mut index = StringIndex::new(2);
        let names: Vec<String> = (0..200).map(|i| format!("street-{i}")).collect();
        for name in &names {
            index.get_or_create(name);
        }

        for (i, name) in names.iter().enumerate() {
            assert_eq!(index.lookup(name), Some(NodeId::new(i)));
        }
    }

    #[test]
    fn test_lookup_never_resizes() {
        let mut index = StringIndex::new(8);
        index.get_or_create("one");
        let buckets = index.bucket_count();

        for i in 0..100 {
            let _ = index.lookup(&format!("miss-{i}"));
        }
        assert_eq!(index.bucket_count(), buckets);
    }

    #[test]
    fn test_iter_yields_every_entry() {
        let mut index = StringIndex::new(2);
        for name in ["a", "b", "c", "d", "e"] {
            index.get_or_create(name);
        }

        let mut pairs: Vec<(String, NodeId)> =
            index.iter().map(|(k, id)| (k.to_string(), id)).collect();
        pairs.sort_by_key(|(_, id)| *id);

        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_unicode_and_empty_keys() {
        let mut index = StringIndex::new(4);
        let empty = index.get_or_create("");
        let umlaut = index.get_or_create("Müllerstraße");

        assert_ne!(empty, umlaut);
        assert_eq!(index.lookup(""), Some(empty));
        assert_eq!(index.lookup("Müllerstraße"), Some(umlaut));
        assert_eq!(index.lookup("Mullerstrasse"), None);
    }

    #[test]
    fn test_colliding_keys_share_a_bucket() {
        let mut index = StringIndex::new(4);
        assert_eq!(index.bucket_count(), 4);

        // Five keys over four buckets, so two of them land in the same bucket
        let keys: Vec<String> = (0..5).map(|i| format!("stop-{i}")).collect();
        let bucket = |key: &str| fnv1a64(key.as_bytes()) & 3;
        let (first, second) = keys
            .iter()
            .enumerate()
            .find_map(|(i, a)| {
                keys[i + 1..]
                    .iter()
                    .find(|b| bucket(b.as_str()) == bucket(a.as_str()))
                    .map(|b| (a.as_str(), b.as_str()))
            })
            .unwrap();

        let first_id = index.get_or_create(first);
        let second_id = index.get_or_create(second);

        // 2 / 4 stays under the load limit, no rehash has split them
        assert_eq!(index.bucket_count(), 4);
        assert!(index.longest_chain() >= 2);
        assert_ne!(first_id, second_id);
        assert_eq!(index.lookup(first), Some(first_id));
        assert_eq!(index.lookup(second), Some(second_id));
    }
}
