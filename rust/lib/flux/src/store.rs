use std::any::Any;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use tracing::trace;

use crate::pattern;
use crate::value::{StateValue, SubscriptionId};

/// Callback type for state change notifications.
pub type ChangeHandler = Arc<dyn Fn(&str, &StateValue) + Send + Sync>;

/// Per-path state store with pattern-matched change notifications.
///
/// Values are kept in a `BTreeMap` so `scan` and `snapshot` come back
/// ordered by path.
pub struct StateStore {
    values: RwLock<BTreeMap<String, StateValue>>,
    subscribers: RwLock<Vec<Subscriber>>,
    next_id: AtomicU64,
}

struct Subscriber {
    id: SubscriptionId,
    pattern: String,
    handler: ChangeHandler,
}

impl StateStore {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(BTreeMap::new()),
            subscribers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Set a typed value at the given path and notify matching subscribers.
    pub fn set<T: Any + Send + Sync>(&self, path: &str, value: T) {
        self.set_value(path, StateValue::new(value));
    }

    /// Set a pre-built value and notify matching subscribers.
    ///
    /// Handlers run on the calling thread after the write lock is released,
    /// so a handler may read the store.
    pub fn set_value(&self, path: &str, value: StateValue) {
        {
            let mut values = self.values.write().unwrap();
            values.insert(path.to_string(), value.clone());
        }
        trace!(path, "state set");
        self.notify(path, &value);
    }

    /// Replace the value at `path` with `f(current)` under one write lock.
    ///
    /// `f` returns `None` to leave the value as it is. Two racing callers
    /// never both see the same current value. Subscribers are notified
    /// only when a value was written; returns whether one was.
    pub fn update<T, F>(&self, path: &str, f: F) -> bool
    where
        T: Any + Clone + Send + Sync,
        F: FnOnce(Option<T>) -> Option<T>,
    {
        let value = {
            let mut values = self.values.write().unwrap();
            let current = values.get(path).and_then(|v| v.cloned::<T>());
            match f(current) {
                Some(next) => {
                    let value = StateValue::new(next);
                    values.insert(path.to_string(), value.clone());
                    value
                }
                None => return false,
            }
        };
        trace!(path, "state updated");
        self.notify(path, &value);
        true
    }

    fn notify(&self, path: &str, value: &StateValue) {
        let handlers: Vec<ChangeHandler> = {
            let subscribers = self.subscribers.read().unwrap();
            subscribers
                .iter()
                .filter(|s| pattern::matches(&s.pattern, path))
                .map(|s| Arc::clone(&s.handler))
                .collect()
        };
        for handler in handlers {
            handler(path, value);
        }
    }

    /// Current value at `path` (Arc clone).
    pub fn get(&self, path: &str) -> Option<StateValue> {
        let values = self.values.read().unwrap();
        values.get(path).cloned()
    }

    /// Current value at `path`, downcast and cloned.
    ///
    /// Returns `None` when nothing is stored or the stored type differs.
    pub fn get_as<T: Any + Clone>(&self, path: &str) -> Option<T> {
        self.get(path).and_then(|v| v.cloned::<T>())
    }

    /// Remove the value at `path`. Does NOT notify subscribers.
    pub fn remove(&self, path: &str) -> Option<StateValue> {
        let mut values = self.values.write().unwrap();
        values.remove(path)
    }

    /// All entries strictly under `{prefix}/`, ordered by path.
    pub fn scan(&self, prefix: &str) -> Vec<(String, StateValue)> {
        let values = self.values.read().unwrap();
        let scan_prefix = format!("{}/", prefix);
        values
            .range(scan_prefix.clone()..)
            .take_while(|(k, _)| k.starts_with(&scan_prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn contains(&self, path: &str) -> bool {
        let values = self.values.read().unwrap();
        values.contains_key(path)
    }

    pub fn len(&self) -> usize {
        let values = self.values.read().unwrap();
        values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subscribe to changes on paths matching `pattern`.
    pub fn subscribe<F>(&self, pattern: &str, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &StateValue) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut subscribers = self.subscribers.write().unwrap();
        subscribers.push(Subscriber {
            id,
            pattern: pattern.to_string(),
            handler: Arc::new(handler),
        });
        id
    }

    /// Drop a subscription. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut subscribers = self.subscribers.write().unwrap();
        subscribers.retain(|s| s.id != id);
    }

    /// All paths and values, ordered by path.
    pub fn snapshot(&self) -> Vec<(String, StateValue)> {
        let values = self.values.read().unwrap();
        values.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}
