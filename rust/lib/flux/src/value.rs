use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// A type-erased, reference-counted state value.
///
/// Clone is an atomic increment, never a data copy, so renderers can hold
/// on to a snapshot of `feed/brews` without copying the list.
#[derive(Clone)]
pub struct StateValue {
    inner: Arc<dyn Any + Send + Sync>,
}

impl StateValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }

    /// Try to downcast to a concrete type reference.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Downcast and clone out the concrete value.
    pub fn cloned<T: Any + Clone>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    pub fn type_id(&self) -> TypeId {
        (*self.inner).type_id()
    }
}

impl fmt::Debug for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateValue")
            .field("type_id", &self.type_id())
            .finish()
    }
}

/// Handle returned by `StateStore::subscribe()`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
