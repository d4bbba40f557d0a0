//! Wallet connection adapter.
//!
//! Translates provider events and three RPC calls into store dispatches. One
//! adapter instance per consuming component; the provider reference is
//! captured once at construction.

use std::any::Any;
use std::cell::Cell;
use std::rc::Rc;

use serde_json::Value;

use crate::chains::ChainInfo;
use crate::error::Error;
use crate::provider::{methods, EthereumProvider, ProviderEvent};
use crate::state::{Dispatch, MetaAction, Web3Handle};

/// Client-library construction settings, forwarded verbatim to the factory.
pub type ClientSettings = serde_json::Map<String, Value>;

/// Connection adapter over an injected provider.
pub struct MetamaskAdapter<P> {
    provider: Option<P>,
    dispatch: Dispatch,
    mounted: Cell<bool>,
    connect_called: Cell<bool>,
}

impl<P: EthereumProvider> MetamaskAdapter<P> {
    pub fn new(provider: Option<P>, dispatch: Dispatch) -> Self {
        MetamaskAdapter {
            provider,
            dispatch,
            mounted: Cell::new(true),
            connect_called: Cell::new(false),
        }
    }

    /// Whether a provider object was present when the adapter was built.
    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    /// Mark the owning component as gone.
    ///
    /// Checked once at `connect` entry; a connect already past that check
    /// still runs to completion and dispatches.
    pub fn unmount(&self) {
        self.mounted.set(false);
    }

    /// Connect to the wallet: prompt for accounts, read the chain, dispatch a
    /// single combined initial-connect action and register the provider event
    /// listeners.
    ///
    /// `web3_interface` is invoked with `(provider, Some(&settings))` when
    /// `settings` carries at least one key, and `(provider, None)` otherwise.
    ///
    /// Re-connecting registers a second pair of listeners; registration is
    /// not deduplicated.
    pub async fn connect<F, C>(
        &self,
        web3_interface: Option<F>,
        settings: ClientSettings,
    ) -> Result<(), Error>
    where
        F: FnOnce(&P, Option<&ClientSettings>) -> C,
        C: Any,
    {
        let provider = self.provider.as_ref().ok_or(Error::MetamaskUnavailable)?;
        let web3_interface = web3_interface.ok_or(Error::Web3InterfaceRequired)?;
        if !self.mounted.get() {
            return Err(Error::NotMounted);
        }
        if self.connect_called.get() {
            return Err(Error::ConnectAlreadyCalled);
        }
        self.connect_called.set(true);

        let settings_arg = (!settings.is_empty()).then_some(&settings);
        let web3: Web3Handle = Rc::new(web3_interface(provider, settings_arg));

        // If either fetch fails the guard stays set and this adapter can
        // never connect again. Known issue, see DESIGN.md open questions.
        let account = self.fetch_accounts(provider, true).await?;
        let chain = self.fetch_chain(provider).await?;

        (self.dispatch)(MetaAction::SetInitialConnect {
            web3,
            account,
            chain,
        });

        self.subscribe_events(provider);

        self.connect_called.set(false);
        Ok(())
    }

    /// Current account list. `request_permission` switches the call to
    /// `eth_requestAccounts`, prompting the user when the site is not yet
    /// authorized.
    ///
    /// Returns `Ok(None)` without failing when no provider is injected.
    pub async fn get_accounts(
        &self,
        request_permission: bool,
    ) -> Result<Option<Vec<String>>, Error> {
        let Some(provider) = self.provider.as_ref() else {
            log::warn!("Metamask is not available.");
            return Ok(None);
        };
        self.fetch_accounts(provider, request_permission)
            .await
            .map(Some)
    }

    /// Current network descriptor, or `Ok(None)` when no provider is
    /// injected.
    pub async fn get_chain_id(&self) -> Result<Option<ChainInfo>, Error> {
        let Some(provider) = self.provider.as_ref() else {
            log::warn!("Metamask is not available.");
            return Ok(None);
        };
        self.fetch_chain(provider).await.map(Some)
    }

    async fn fetch_accounts(
        &self,
        provider: &P,
        request_permission: bool,
    ) -> Result<Vec<String>, Error> {
        let method = if request_permission {
            methods::ETH_REQUEST_ACCOUNTS
        } else {
            methods::ETH_ACCOUNTS
        };
        let result = provider.request(method, Vec::new()).await?;
        serde_json::from_value(result).map_err(|e| Error::Provider(e.to_string()))
    }

    async fn fetch_chain(&self, provider: &P) -> Result<ChainInfo, Error> {
        let result = provider.request(methods::ETH_CHAIN_ID, Vec::new()).await?;
        let raw = result
            .as_str()
            .ok_or_else(|| Error::InvalidChainId(result.to_string()))?;
        ChainInfo::from_hex_id(raw)
    }

    fn subscribe_events(&self, provider: &P) {
        let dispatch = Rc::clone(&self.dispatch);
        provider.on(
            ProviderEvent::AccountsChanged,
            Box::new(move |payload| {
                let accounts = account_list(payload);
                if accounts.is_empty() {
                    dispatch(MetaAction::SetConnected(false));
                }
                dispatch(MetaAction::SetAccount(accounts));
            }),
        );

        let dispatch = Rc::clone(&self.dispatch);
        provider.on(
            ProviderEvent::ChainChanged,
            Box::new(move |payload| match chain_from_payload(&payload) {
                Ok(chain) => dispatch(MetaAction::SetChain(chain)),
                Err(err) => log::warn!("ignoring chainChanged event: {err}"),
            }),
        );
    }
}

fn account_list(payload: Value) -> Vec<String> {
    serde_json::from_value(payload).unwrap_or_default()
}

fn chain_from_payload(payload: &Value) -> Result<ChainInfo, Error> {
    let raw = payload
        .as_str()
        .ok_or_else(|| Error::InvalidChainId(payload.to_string()))?;
    ChainInfo::from_hex_id(raw)
}
