//! Store context for the wallet connection state.

use leptos::prelude::*;
use lib_ethereum::{reduce, MetaAction, MetaState};

/// Shared `{state, dispatch}` pair provided to the component tree.
///
/// Local storage because the state holds `Rc` handles.
#[derive(Clone, Copy)]
pub struct MetaStateContext {
    pub state: RwSignal<MetaState, LocalStorage>,
}

impl MetaStateContext {
    pub fn new() -> Self {
        MetaStateContext {
            state: RwSignal::new_local(MetaState::default()),
        }
    }

    pub fn dispatch(&self, action: MetaAction) {
        log::debug!("dispatching {}", action.kind());
        self.state.update(|state| reduce(state, action));
    }

    /// Snapshot of the current state.
    pub fn get(&self) -> MetaState {
        self.state.get()
    }
}

impl Default for MetaStateContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_meta_state() -> MetaStateContext {
    let context = MetaStateContext::new();
    provide_context(context);
    context
}

pub fn use_meta_state() -> MetaStateContext {
    expect_context::<MetaStateContext>()
}
