use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use crate::router::Router;
use crate::store::StateStore;
use crate::value::{StateValue, SubscriptionId};

/// Flux — the state engine a platform talks to.
///
/// ```ignore
/// let flux = Flux::new();
/// flux.on_request::<AddNewBrewReq, _, _>("brew/add", |_, store| async move {
///     store.set("app/route", "/brew/new".to_string());
/// });
/// flux.emit("brew/add", AddNewBrewReq).await;
/// let route = flux.get_as::<String>("app/route");
/// ```
pub struct Flux {
    store: Arc<StateStore>,
    router: Router,
}

impl Flux {
    /// Create a new Flux instance with empty state and no handlers.
    pub fn new() -> Self {
        Self {
            store: Arc::new(StateStore::new()),
            router: Router::new(),
        }
    }

    // ====================================================================
    // State — read
    // ====================================================================

    pub fn get(&self, path: &str) -> Option<StateValue> {
        self.store.get(path)
    }

    /// Read and clone a typed value; `None` if absent or of another type.
    pub fn get_as<T: Any + Clone>(&self, path: &str) -> Option<T> {
        self.store.get_as(path)
    }

    pub fn scan(&self, prefix: &str) -> Vec<(String, StateValue)> {
        self.store.scan(prefix)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.store.contains(path)
    }

    pub fn snapshot(&self) -> Vec<(String, StateValue)> {
        self.store.snapshot()
    }

    // ====================================================================
    // Requests
    // ====================================================================

    /// Emit a request and wait until every matching handler has finished.
    pub async fn emit<T: Any + Send + Sync>(&self, path: &str, payload: T) {
        self.router
            .dispatch(path, Arc::new(payload), Arc::clone(&self.store))
            .await;
    }

    /// Register a handler receiving the type-erased payload.
    pub fn on<F, Fut>(&self, pattern: &str, handler: F)
    where
        F: Fn(String, Arc<dyn Any + Send + Sync>, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.router.on(pattern, handler);
    }

    /// Register a handler receiving the payload downcast to `T`.
    pub fn on_request<T, F, Fut>(&self, pattern: &str, handler: F)
    where
        T: Any + Send + Sync,
        F: Fn(Arc<T>, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.router.on_request(pattern, handler);
    }

    pub fn has_handler(&self, path: &str) -> bool {
        self.router.matches(path)
    }

    // ====================================================================
    // Subscriptions
    // ====================================================================

    /// Subscribe to state changes; the handler runs on the thread that sets.
    pub fn subscribe<F>(&self, pattern: &str, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &StateValue) + Send + Sync + 'static,
    {
        self.store.subscribe(pattern, handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.store.unsubscribe(id);
    }

    /// Direct store access, for handlers and tests.
    pub fn store(&self) -> &Arc<StateStore> {
        &self.store
    }
}

impl Default for Flux {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    #[test]
    fn new_flux_is_empty() {
        let flux = Flux::new();
        assert!(flux.snapshot().is_empty());
        assert!(flux.get("app/route").is_none());
    }

    #[tokio::test]
    async fn emit_without_handler_is_silent() {
        let flux = Flux::new();
        flux.emit("nothing/here", ()).await;
        assert!(flux.snapshot().is_empty());
    }

    #[tokio::test]
    async fn handler_reads_and_updates_state() {
        let flux = Flux::new();
        flux.store().set("counter", 0u32);
        flux.on("increment", |_, _, store: Arc<StateStore>| async move {
            let current = store.get_as::<u32>("counter").unwrap_or(0);
            store.set("counter", current + 1);
        });

        flux.emit("increment", ()).await;
        flux.emit("increment", ()).await;
        assert_eq!(flux.get_as::<u32>("counter"), Some(2));
    }

    #[tokio::test]
    async fn subscribers_see_handler_writes() {
        let flux = Flux::new();
        let timeline = Arc::new(Mutex::new(Vec::<String>::new()));
        let tl = timeline.clone();
        flux.subscribe("#", move |path, _| {
            tl.lock().unwrap().push(path.to_string());
        });

        flux.on("app/initialize", |_, _, store: Arc<StateStore>| async move {
            store.set("brew/flow", 0u32);
            store.set("app/route", "/feed".to_string());
        });
        flux.emit("app/initialize", ()).await;

        assert_eq!(
            *timeline.lock().unwrap(),
            vec!["brew/flow".to_string(), "app/route".to_string()]
        );
    }

    #[tokio::test]
    async fn emit_awaits_async_handler_work() {
        let flux = Flux::new();
        let done = Arc::new(AtomicU64::new(0));
        let d = done.clone();
        flux.on("slow", move |_, _, _| {
            let d = d.clone();
            async move {
                tokio::task::yield_now().await;
                d.fetch_add(1, Ordering::Relaxed);
            }
        });

        flux.emit("slow", ()).await;
        assert_eq!(done.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn unsubscribe_through_facade() {
        let flux = Flux::new();
        let count = Arc::new(AtomicU64::new(0));
        let c = count.clone();
        let id = flux.subscribe("x", move |_, _| {
            c.fetch_add(1, Ordering::Relaxed);
        });
        flux.store().set("x", 1u32);
        flux.unsubscribe(id);
        flux.store().set("x", 2u32);
        assert_eq!(count.load(Ordering::Relaxed), 1);
    }

    fn _assert_flux_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<Flux>();
        assert_sync::<Flux>();
    }
}
