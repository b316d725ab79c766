//! Single-threaded state container for transient UI state.
//!
//! The store is passed around explicitly (through Dioxus context in the UI)
//! rather than living in a global. Reducers stay pure; `dispatch` applies one
//! action at a time and notifies subscribers once the new state is in place.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::menu::{site_reducer, Action, SiteState};

pub type Reducer = fn(SiteState, &Action) -> SiteState;

type Listener = Rc<dyn Fn(&SiteState)>;

/// Anything that accepts actions: the store itself, its UI context, or a
/// recording double in tests.
pub trait Dispatch {
    /// Apply an action; returns the action that was dispatched.
    fn dispatch(&self, action: Action) -> Action;
}

/// Handle returned by [`Store::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

struct Inner {
    state: SiteState,
    reducer: Reducer,
    listeners: Vec<(Subscription, Listener)>,
    next_id: u64,
}

#[derive(Clone)]
pub struct Store {
    inner: Rc<RefCell<Inner>>,
}

impl Store {
    pub fn new(initial: SiteState) -> Self {
        Self::with_reducer(initial, site_reducer)
    }

    pub fn with_reducer(initial: SiteState, reducer: Reducer) -> Self {
        let store = Self {
            inner: Rc::new(RefCell::new(Inner {
                state: initial,
                reducer,
                listeners: Vec::new(),
                next_id: 0,
            })),
        };
        store.dispatch(Action::Init);
        store
    }

    pub fn get_state(&self) -> SiteState {
        self.inner.borrow().state
    }

    pub fn menu_open(&self) -> bool {
        self.get_state().layout.menu_open
    }

    /// Register a listener called after every dispatch.
    pub fn subscribe(&self, listener: impl Fn(&SiteState) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = Subscription(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Returns false if the subscription was already removed.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(id, _)| *id != subscription);
        inner.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl Dispatch for Store {
    fn dispatch(&self, action: Action) -> Action {
        tracing::debug!(?action, "dispatch");

        // Listeners run after the borrow is released so they may read the
        // store or dispatch again.
        let (state, listeners) = {
            let mut inner = self.inner.borrow_mut();
            let next = (inner.reducer)(inner.state, &action);
            inner.state = next;
            let listeners: Vec<Listener> =
                inner.listeners.iter().map(|(_, l)| l.clone()).collect();
            (next, listeners)
        };

        for listener in listeners {
            listener(&state);
        }

        action
    }
}

impl PartialEq for Store {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Store")
            .field("state", &inner.state)
            .field("subscribers", &inner.listeners.len())
            .finish()
    }
}
