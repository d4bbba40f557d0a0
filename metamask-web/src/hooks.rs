//! `use_metamask` hook: ties the injected provider, the store context and the
//! component lifetime together.

use std::rc::Rc;

use leptos::prelude::on_cleanup;
use lib_ethereum::{ChainInfo, ClientSettings, Dispatch, Error, MetaState, MetamaskAdapter};

use crate::services::ethereum::{injected_provider, BrowserProvider, Web3Client};
use crate::state::metamask::{use_meta_state, MetaStateContext};

/// Handle returned by [`use_metamask`].
#[derive(Clone)]
pub struct UseMetamask {
    adapter: Rc<MetamaskAdapter<BrowserProvider>>,
    context: MetaStateContext,
}

/// Build the wallet adapter for the calling component.
///
/// Must run under a provided [`MetaStateContext`] (see
/// [`crate::state::metamask::provide_meta_state`]). Component cleanup only
/// blocks future `connect` calls; provider listeners registered by an earlier
/// connect stay live.
pub fn use_metamask() -> UseMetamask {
    let context = use_meta_state();
    let dispatch: Dispatch = Rc::new(move |action| context.dispatch(action));
    let adapter = Rc::new(MetamaskAdapter::new(injected_provider(), dispatch));

    // `on_cleanup` demands `Send + Sync`; the app is single-threaded CSR, so a
    // `SendWrapper` around the `Rc` satisfies the bound without real sharing.
    let lifetime = leptos::__reexports::send_wrapper::SendWrapper::new(Rc::clone(&adapter));
    on_cleanup(move || lifetime.unmount());

    UseMetamask { adapter, context }
}

impl UseMetamask {
    /// Snapshot of the store state.
    pub fn state(&self) -> MetaState {
        self.context.get()
    }

    /// True when a provider object was present at hook initialization.
    pub fn is_available(&self) -> bool {
        self.adapter.is_available()
    }

    /// Connect with the default [`Web3Client`] factory.
    pub async fn connect(&self, settings: ClientSettings) -> Result<(), Error> {
        self.adapter
            .connect(
                Some(|provider: &BrowserProvider, settings: Option<&ClientSettings>| {
                    Web3Client::new(provider.clone(), settings)
                }),
                settings,
            )
            .await
    }

    pub async fn get_accounts(&self, request_permission: bool) -> Result<Option<Vec<String>>, Error> {
        self.adapter.get_accounts(request_permission).await
    }

    pub async fn get_chain_id(&self) -> Result<Option<ChainInfo>, Error> {
        self.adapter.get_chain_id().await
    }
}
