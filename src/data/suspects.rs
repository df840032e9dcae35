//! Suspect index
//!
//! Fixed-size hash table mapping clue text to suspect names. Collisions are
//! chained in singly linked lists with the newest entry at the head. The
//! table is a multimap: a clue may point at several suspects, and the very
//! same (clue, suspect) pair may be recorded more than once.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of buckets. The table never grows.
pub const TABLE_SIZE: usize = 20;

/// Bucket for a clue: the sum of its bytes, modulo [`TABLE_SIZE`].
pub fn hash(key: &str) -> usize {
    key.bytes()
        .fold(0usize, |sum, b| sum.wrapping_add(b as usize))
        % TABLE_SIZE
}

#[derive(Debug)]
struct Entry {
    clue: String,
    suspect: String,
    next: Option<Box<Entry>>,
}

/// How many index entries point at one suspect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub suspect: String,
    pub count: usize,
}

/// Clue → suspect multimap with chained buckets
#[derive(Debug)]
pub struct SuspectIndex {
    buckets: [Option<Box<Entry>>; TABLE_SIZE],
    len: usize,
}

impl SuspectIndex {
    pub fn new() -> Self {
        Self {
            buckets: std::array::from_fn(|_| None),
            len: 0,
        }
    }

    /// Record that `clue` points at `suspect`. Always adds a new entry.
    pub fn insert(&mut self, clue: &str, suspect: &str) {
        let bucket = hash(clue);
        let slot = &mut self.buckets[bucket];
        let next = slot.take();
        *slot = Some(Box::new(Entry {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
            next,
        }));
        self.len += 1;
        tracing::trace!(bucket, clue, suspect, "indexed association");
    }

    /// Suspects recorded under exactly this clue, newest first
    pub fn lookup_all<'a>(&'a self, clue: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        Chain::new(&self.buckets[hash(clue)])
            .filter(move |entry| entry.clue == clue)
            .map(|entry| entry.suspect.as_str())
    }

    /// Every (clue, suspect) pair, bucket by bucket, newest first within a bucket
    pub fn enumerate_all(&self) -> impl Iterator<Item = (&str, &str)> {
        self.buckets
            .iter()
            .flat_map(Chain::new)
            .map(|entry| (entry.clue.as_str(), entry.suspect.as_str()))
    }

    /// Count entries per suspect, in the order suspects first show up in
    /// [`enumerate_all`](Self::enumerate_all). Recomputed on every call.
    pub fn citation_counts(&self) -> Vec<Citation> {
        let mut tally: Vec<Citation> = Vec::new();
        let mut position: HashMap<&str, usize> = HashMap::new();

        for (_, suspect) in self.enumerate_all() {
            match position.get(suspect) {
                Some(&i) => tally[i].count += 1,
                None => {
                    position.insert(suspect, tally.len());
                    tally.push(Citation {
                        suspect: suspect.to_string(),
                        count: 1,
                    });
                }
            }
        }

        tally
    }

    /// The suspect cited by the most entries.
    ///
    /// Ties go to whoever appears first in enumeration order. `None` when
    /// nothing has been recorded.
    pub fn most_cited_suspect(&self) -> Option<Citation> {
        self.citation_counts()
            .into_iter()
            .fold(None, |best, candidate| match best {
                Some(best) if best.count >= candidate.count => Some(best),
                _ => Some(candidate),
            })
    }

    /// Length of one bucket's chain
    pub fn bucket_len(&self, bucket: usize) -> usize {
        self.buckets
            .get(bucket)
            .map_or(0, |head| Chain::new(head).count())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for SuspectIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SuspectIndex {
    fn drop(&mut self) {
        for bucket in self.buckets.iter_mut() {
            let mut link = bucket.take();
            while let Some(mut entry) = link {
                link = entry.next.take();
            }
        }
    }
}

/// Walks one bucket's chain
struct Chain<'a> {
    next: Option<&'a Entry>,
}

impl<'a> Chain<'a> {
    fn new(head: &'a Option<Box<Entry>>) -> Self {
        Self {
            next: head.as_deref(),
        }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<&'a Entry> {
        let entry = self.next?;
        self.next = entry.next.as_deref();
        Some(entry)
    }
}
