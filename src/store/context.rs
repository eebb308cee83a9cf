use leptos::*;

use super::Store;
use crate::errors::StoreError;

/// Reactive handle to the app-wide [`Store`], shared through Leptos context.
/// Reads track the signal; mutations notify every view reading it.
#[derive(Clone, Copy)]
pub struct StoreHandle(RwSignal<Store>);

impl StoreHandle {
    pub fn with<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        self.0.with(f)
    }

    /// Run a store operation. `None` only when the owning scope is gone.
    pub fn mutate<R>(&self, f: impl FnOnce(&mut Store) -> R) -> Option<R> {
        self.0.try_update(f)
    }

    /// Run a fallible store operation, flattening the disposed-scope case
    /// into `NotSignedIn`.
    pub fn dispatch<R>(
        &self,
        f: impl FnOnce(&mut Store) -> Result<R, StoreError>,
    ) -> Result<R, StoreError> {
        self.0.try_update(f).unwrap_or(Err(StoreError::NotSignedIn))
    }
}

/// Place `store` in the context of the current component tree.
pub fn provide_store(store: Store) -> StoreHandle {
    let handle = StoreHandle(create_rw_signal(store));
    provide_context(handle);
    handle
}

pub fn use_store() -> StoreHandle {
    expect_context::<StoreHandle>()
}
