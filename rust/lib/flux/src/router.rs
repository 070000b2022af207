use std::any::Any;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use crate::pattern;
use crate::store::StateStore;

/// A boxed, `Send`-able future returned by request handlers.
pub type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Type-erased handler stored in the router.
///
/// Takes owned values so the returned future can be `'static`:
/// the request path, the payload, and the state store.
type ErasedHandler =
    Arc<dyn Fn(String, Arc<dyn Any + Send + Sync>, Arc<StateStore>) -> BoxFuture + Send + Sync>;

/// Request router — maps path patterns to async handlers.
///
/// Several handlers may match one path; they run sequentially in
/// registration order.
pub struct Router {
    handlers: RwLock<Vec<(String, ErasedHandler)>>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(Vec::new()),
        }
    }

    /// Register an async handler for a path pattern (`+` and `#` allowed).
    pub fn on<F, Fut>(&self, pattern: &str, handler: F)
    where
        F: Fn(String, Arc<dyn Any + Send + Sync>, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        if !pattern::is_valid(pattern) {
            warn!(pattern, "registering handler for malformed pattern");
        }
        let handler: ErasedHandler = Arc::new(
            move |path: String,
                  payload: Arc<dyn Any + Send + Sync>,
                  store: Arc<StateStore>|
                  -> BoxFuture { Box::pin(handler(path, payload, store)) },
        );
        self.handlers
            .write()
            .unwrap()
            .push((pattern.to_string(), handler));
    }

    /// Register a handler that receives the payload already downcast to `T`.
    ///
    /// A payload of any other type is logged and dropped without calling
    /// the handler.
    pub fn on_request<T, F, Fut>(&self, pattern: &str, handler: F)
    where
        T: Any + Send + Sync,
        F: Fn(Arc<T>, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let expected = std::any::type_name::<T>();
        self.on(pattern, move |path, payload, store| {
            let call = payload.downcast::<T>().map(|req| handler(req, store));
            async move {
                match call {
                    Ok(fut) => fut.await,
                    Err(_) => warn!(%path, expected, "request payload has unexpected type"),
                }
            }
        });
    }

    /// Dispatch a request to every matching handler, one after another.
    ///
    /// No matching handler is a no-op.
    pub async fn dispatch(
        &self,
        path: &str,
        payload: Arc<dyn Any + Send + Sync>,
        store: Arc<StateStore>,
    ) {
        let matched: Vec<ErasedHandler> = {
            let handlers = self.handlers.read().unwrap();
            handlers
                .iter()
                .filter(|(p, _)| pattern::matches(p, path))
                .map(|(_, h)| Arc::clone(h))
                .collect()
        };
        if matched.is_empty() {
            debug!(path, "no handler for request");
            return;
        }
        for handler in matched {
            handler(path.to_string(), Arc::clone(&payload), Arc::clone(&store)).await;
        }
    }

    /// Check if any handler would match the given path.
    pub fn matches(&self, path: &str) -> bool {
        let handlers = self.handlers.read().unwrap();
        handlers.iter().any(|(p, _)| pattern::matches(p, path))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
