// Bounded LRU cache for memoized pricing lookups
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use tracing::trace;

#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_entries: 128 }
    }
}

#[derive(Debug, Default)]
struct CacheCounters {
    hits: AtomicUsize,
    misses: AtomicUsize,
    evictions: AtomicUsize,
}

// Read-only diagnostics snapshot. Serializes to exactly the shape the
// diagnostics endpoint returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStatsReport {
    pub hits: usize,
    pub misses: usize,
    pub hit_ratio: f64,
    pub currsize: usize,
    pub maxsize: usize,
}

#[derive(Debug)]
struct Entry<V> {
    value: V,
    last_used: u64,
}

pub struct LruCache<K, V> {
    entries: Mutex<HashMap<K, Entry<V>>>,
    clock: AtomicU64,
    counters: CacheCounters,
    max_entries: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock: AtomicU64::new(0),
            counters: CacheCounters::default(),
            max_entries: config.max_entries,
        }
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::SeqCst) + 1
    }

    // A hit refreshes the entry's recency so it survives the next eviction
    pub fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.entries.lock();
        match entries.get_mut(key) {
            Some(entry) => {
                entry.last_used = self.tick();
                self.counters.hits.fetch_add(1, Ordering::SeqCst);
                Some(entry.value.clone())
            }
            None => {
                self.counters.misses.fetch_add(1, Ordering::SeqCst);
                None
            }
        }
    }

    pub fn insert(&self, key: K, value: V) {
        // A zero-capacity cache stores nothing
        if self.max_entries == 0 {
            return;
        }

        let mut entries = self.entries.lock();
        if !entries.contains_key(&key) && entries.len() >= self.max_entries {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                entries.remove(&oldest);
                self.counters.evictions.fetch_add(1, Ordering::SeqCst);
                trace!("cache full, evicted least recently used entry");
            }
        }

        let last_used = self.tick();
        entries.insert(key, Entry { value, last_used });
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    // Drops entries, keeps counters; diagnostics stay cumulative
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn evictions(&self) -> usize {
        self.counters.evictions.load(Ordering::SeqCst)
    }

    pub fn stats(&self) -> CacheStatsReport {
        let hits = self.counters.hits.load(Ordering::SeqCst);
        let misses = self.counters.misses.load(Ordering::SeqCst);
        let lookups = hits + misses;
        let hit_ratio = if lookups == 0 {
            0.0
        } else {
            hits as f64 / lookups as f64
        };

        CacheStatsReport {
            hits,
            misses,
            hit_ratio,
            currsize: self.entries.lock().len(),
            maxsize: self.max_entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn small_cache(max_entries: usize) -> LruCache<String, i64> {
        LruCache::new(CacheConfig { max_entries })
    }

    #[test]
    fn fresh_cache_reports_zero_ratio() {
        let cache = small_cache(4);
        let stats = cache.stats();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.hit_ratio, 0.0);
        assert_eq!(stats.currsize, 0);
        assert_eq!(stats.maxsize, 4);
    }

    #[test]
    fn second_lookup_is_a_hit_with_the_same_value() {
        let cache = small_cache(4);

        assert_eq!(cache.get(&"k".to_string()), None);
        cache.insert("k".to_string(), 400);
        assert_eq!(cache.get(&"k".to_string()), Some(400));
        assert_eq!(cache.get(&"k".to_string()), Some(400));

        let stats = cache.stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert!((stats.hit_ratio - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.currsize, 1);
    }

    #[test]
    fn eviction_removes_the_least_recently_used_key() {
        let cache = small_cache(2);
        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);

        // Touch "a" so "b" becomes the LRU entry
        assert_eq!(cache.get(&"a".to_string()), Some(1));

        cache.insert("c".to_string(), 3);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.evictions(), 1);
        assert_eq!(cache.get(&"a".to_string()), Some(1));
        assert_eq!(cache.get(&"b".to_string()), None);
        assert_eq!(cache.get(&"c".to_string()), Some(3));
    }

    #[test]
    fn reinserting_an_existing_key_does_not_evict() {
        let cache = small_cache(2);
        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);
        cache.insert("b".to_string(), 20);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.evictions(), 0);
        assert_eq!(cache.get(&"b".to_string()), Some(20));
    }

    #[test]
    fn zero_capacity_cache_stores_nothing() {
        let cache = small_cache(0);
        cache.insert("a".to_string(), 1);
        assert!(cache.is_empty());
        assert_eq!(cache.get(&"a".to_string()), None);
    }

    #[test]
    fn clear_keeps_cumulative_counters() {
        let cache = small_cache(4);
        cache.insert("a".to_string(), 1);
        assert_eq!(cache.get(&"a".to_string()), Some(1));
        cache.clear();

        assert!(cache.is_empty());
        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.currsize, 0);
    }

    #[test]
    fn concurrent_access_keeps_counters_and_size_consistent() {
        let cache = Arc::new(small_cache(32));
        let threads = 8;
        let operations = 500;

        let mut handles = Vec::new();
        for t in 0..threads {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for i in 0..operations {
                    let key = format!("key_{}", (t * 7 + i) % 64);
                    if i % 3 == 0 {
                        cache.insert(key, i as i64);
                    } else {
                        let _ = cache.get(&key);
                    }
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let stats = cache.stats();
        // Every get was counted exactly once as a hit or a miss
        let gets_per_thread = (0..operations).filter(|i| i % 3 != 0).count();
        assert_eq!(stats.hits + stats.misses, threads * gets_per_thread);
        assert!(stats.currsize <= 32, "size bound violated: {}", stats.currsize);
        assert!(stats.hit_ratio >= 0.0 && stats.hit_ratio <= 1.0);
    }
}
