//! Store context: exposes the injectable [`Store`] to components.
//!
//! A revision signal is bumped by a store subscription so that components
//! reading the store re-render after each dispatch.

use dioxus::prelude::*;

use crate::menu::{Action, SiteState};
use crate::store::{Dispatch, Store};

#[derive(Clone, PartialEq)]
pub struct StoreContext {
    store: Store,
    revision: Signal<u64>,
}

impl StoreContext {
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Current state; subscribes the calling component to updates
    pub fn state(&self) -> SiteState {
        let _ = (self.revision)();
        self.store.get_state()
    }

    pub fn menu_open(&self) -> bool {
        self.state().layout.menu_open
    }
}

impl Dispatch for StoreContext {
    fn dispatch(&self, action: Action) -> Action {
        self.store.dispatch(action)
    }
}

/// Initialize the store provider - call once at app root
pub fn use_store_provider(initial: SiteState) -> StoreContext {
    let revision = use_signal(|| 0u64);

    let store = use_hook(move || {
        let store = Store::new(initial);
        store.subscribe(move |_| {
            let mut revision = revision;
            *revision.write() += 1;
        });
        store
    });

    use_context_provider(|| StoreContext { store, revision })
}

/// Get the store context - use in any component below the provider
pub fn use_store() -> StoreContext {
    use_context::<StoreContext>()
}
