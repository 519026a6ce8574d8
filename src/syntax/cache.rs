// LRU cache for parsed syntax trees, keyed by buffer identity

use log::trace;
use lru::LruCache;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

/// Number of buffers whose trees are kept around by default.
pub const TREE_CACHE_CAPACITY: usize = 10;

/// Opaque, stable identity of a host buffer.
///
/// Must not be derived from the buffer's content; two live buffers must
/// never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(pub u64);

impl From<u64> for BufferId {
    fn from(id: u64) -> Self {
        BufferId(id)
    }
}

/// Cheap hash of the full buffer text. Equal fingerprints are taken to mean
/// "unchanged"; a collision between different texts is accepted.
pub fn fingerprint(content: &str) -> u64 {
    let mut hasher = FxHasher::default();
    content.hash(&mut hasher);
    hasher.finish()
}

#[derive(Debug)]
struct CacheEntry<T> {
    language: String,
    fingerprint: u64,
    tree: T,
}

const DEFAULT_CAPACITY: NonZeroUsize =
    NonZeroUsize::new(TREE_CACHE_CAPACITY).expect("capacity must be > 0");

/// Bounded, recency-ordered store of parse trees.
///
/// Both successful reads and writes bump recency; once full, storing a new
/// buffer evicts the least recently used one.
///
/// Not synchronised: a single thread drives it.
#[derive(Debug)]
pub struct TreeCache<T> {
    cache: LruCache<BufferId, CacheEntry<T>>,
}

impl<T> TreeCache<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a cache holding at most `capacity` trees
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Look up the tree cached for `buffer_id`.
    ///
    /// Returns the tree only if it was parsed from the same language and
    /// content; that entry becomes most recently used. Any other entry for
    /// the buffer is stale and is dropped, forcing a full reparse.
    ///
    /// # Arguments
    ///
    /// * `buffer_id` - Host buffer identity
    /// * `language` - Normalized language name the tree must have been parsed as
    /// * `content` - Current buffer text
    pub fn get(&mut self, buffer_id: BufferId, language: &str, content: &str) -> Option<&T> {
        let fresh = {
            let entry = self.cache.peek(&buffer_id)?;
            entry.language == language && entry.fingerprint == fingerprint(content)
        };

        if fresh {
            trace!("Tree cache hit for {:?}", buffer_id);
            self.cache.get(&buffer_id).map(|entry| &entry.tree)
        } else {
            trace!("Tree cache entry for {:?} is stale, dropping it", buffer_id);
            self.cache.pop(&buffer_id);
            None
        }
    }

    /// Store `tree` as the most recently used entry for `buffer_id`,
    /// replacing any previous one and evicting the least recently used
    /// entry if the cache would grow past capacity.
    ///
    /// # Returns
    ///
    /// A borrow of the stored tree, so callers can walk it without a second
    /// lookup.
    pub fn put(&mut self, buffer_id: BufferId, language: &str, content: &str, tree: T) -> &T {
        self.cache.pop(&buffer_id);
        if self.cache.len() >= self.cache.cap().get() {
            if let Some((evicted, _)) = self.cache.pop_lru() {
                trace!("Tree cache evicted {:?}", evicted);
            }
        }

        let entry = CacheEntry {
            language: language.to_string(),
            fingerprint: fingerprint(content),
            tree,
        };
        &self.cache.get_or_insert(buffer_id, || entry).tree
    }

    /// Drop the entry for `buffer_id`, e.g. when the host closes the buffer.
    pub fn remove(&mut self, buffer_id: BufferId) -> Option<T> {
        self.cache.pop(&buffer_id).map(|entry| entry.tree)
    }

    pub fn contains(&self, buffer_id: BufferId) -> bool {
        self.cache.contains(&buffer_id)
    }

    /// Cached buffer ids, most recently used first.
    pub fn buffer_ids(&self) -> Vec<BufferId> {
        self.cache.iter().map(|(id, _)| *id).collect()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }
}

impl<T> Default for TreeCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
