//! Identifier handling and placeholder lists.
//!
//! Identifiers are never parameterizable in SQL, so they are rendered inline
//! wrapped in backticks. [`normalize`] only strips one leading and one trailing
//! backtick; internal backticks are passed through untouched and callers must
//! not feed untrusted identifiers into the builders.
//!
//! # Example
//! ```
//! use mysql_simple::ident;
//!
//! assert_eq!(ident::normalize("`user`"), "user");
//! assert_eq!(ident::quote("user"), "`user`");
//! assert_eq!(&*ident::questions(3), "?, ?, ?");
//! ```

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

/// Default number of distinct placeholder counts kept by [`questions`].
pub const DEFAULT_PLACEHOLDER_CACHE_CAPACITY: usize = 64;

static PLACEHOLDERS: LazyLock<PlaceholderCache> =
    LazyLock::new(|| PlaceholderCache::new(DEFAULT_PLACEHOLDER_CACHE_CAPACITY));

/// Strip a single leading and a single trailing backtick.
pub fn normalize(name: &str) -> &str {
    let name = name.strip_prefix('`').unwrap_or(name);
    name.strip_suffix('`').unwrap_or(name)
}

/// Normalize and wrap an identifier in backticks.
pub fn quote(name: &str) -> String {
    format!("`{}`", normalize(name))
}

/// Quote each identifier and join them with `", "`.
pub fn quote_list<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|n| quote(n.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `n` comma-separated `?` placeholders (`questions(0)` is empty).
///
/// Results are memoized in a bounded table; the same `n` always yields the
/// same string.
pub fn questions(n: usize) -> Arc<str> {
    PLACEHOLDERS.get(n)
}

fn render_questions(n: usize) -> Arc<str> {
    let mut s = String::with_capacity(n.saturating_mul(3));
    for i in 0..n {
        if i > 0 {
            s.push_str(", ");
        }
        s.push('?');
    }
    Arc::from(s)
}

/// Bounded LRU table of placeholder lists keyed by count.
#[derive(Debug)]
pub struct PlaceholderCache {
    inner: Mutex<PlaceholderCacheInner>,
}

#[derive(Debug)]
struct PlaceholderCacheInner {
    capacity: usize,
    map: HashMap<usize, Arc<str>>,
    order: VecDeque<usize>,
}

impl PlaceholderCache {
    /// Create a cache that keeps at most `capacity` entries.
    ///
    /// A zero capacity disables caching; lists are rendered on every call.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(PlaceholderCacheInner {
                capacity,
                map: HashMap::with_capacity(capacity),
                order: VecDeque::with_capacity(capacity),
            }),
        }
    }

    /// Get (or render and remember) the placeholder list for `n`.
    pub fn get(&self, n: usize) -> Arc<str> {
        // The cache only holds rendered strings, so a poisoned lock is still usable.
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(hit) = inner.map.get(&n).cloned() {
            inner.touch(n);
            return hit;
        }

        let rendered = render_questions(n);
        if inner.capacity > 0 {
            inner.map.insert(n, Arc::clone(&rendered));
            inner.order.push_back(n);
            inner.evict_if_needed();
        }
        rendered
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .map
            .len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PlaceholderCacheInner {
    fn touch(&mut self, n: usize) {
        if let Some(pos) = self.order.iter().position(|k| *k == n) {
            if let Some(k) = self.order.remove(pos) {
                self.order.push_back(k);
            }
        }
    }

    fn evict_if_needed(&mut self) {
        while self.map.len() > self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.map.remove(&oldest);
        }
    }
}
