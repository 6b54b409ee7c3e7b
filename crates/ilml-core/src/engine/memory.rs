use parking_lot::Mutex;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use tracing::trace;

type KeyFn<A, K> = Box<dyn Fn(&A) -> K + Send + Sync>;
type ComputeFn<A, V> = Box<dyn Fn(&A) -> V + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

/// A pure function paired with a result table that lives as long as the wrapper.
///
/// Each distinct key is computed at most once, even under concurrent calls:
/// callers racing on the same key block until the first computation finishes.
/// Entries are never evicted.
pub struct Memoized<A: ?Sized, K, V> {
    name: &'static str,
    key: KeyFn<A, K>,
    compute: ComputeFn<A, V>,
    table: Mutex<HashMap<K, Arc<OnceLock<V>>>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl<A: ?Sized, K, V> Memoized<A, K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(
        name: &'static str,
        key: impl Fn(&A) -> K + Send + Sync + 'static,
        compute: impl Fn(&A) -> V + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            key: Box::new(key),
            compute: Box::new(compute),
            table: Mutex::new(HashMap::new()),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the cached value for `arg`, computing it on first use.
    ///
    /// The key function runs before the table lock is taken; only the table
    /// lookup itself is serialized.
    pub fn call(&self, arg: &A) -> V {
        let key = (self.key)(arg);
        let cell = Arc::clone(self.table.lock().entry(key).or_default());

        let mut computed = false;
        let value = cell
            .get_or_init(|| {
                computed = true;
                (self.compute)(arg)
            })
            .clone();

        if computed {
            self.misses.fetch_add(1, Ordering::Relaxed);
            trace!(cache = self.name, "Cache miss.");
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(cache = self.name, "Cache hit.");
        }
        value
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.table.lock().len(),
        }
    }
}

/// Wraps `f` so that results are cached by the argument value itself.
pub fn cache<A, V>(
    name: &'static str,
    f: impl Fn(&A) -> V + Send + Sync + 'static,
) -> Memoized<A, A, V>
where
    A: Clone + Eq + Hash + 'static,
    V: Clone,
{
    Memoized::new(name, A::clone, f)
}
