//! The injected wallet provider as an explicit capability.
//!
//! Browser frontends wrap the `window.ethereum` object behind this trait;
//! tests substitute their own implementation, which also makes the
//! provider-present/absent branches of the adapter directly testable.

use std::future::Future;

use serde_json::Value;

use crate::error::Error;

/// JSON-RPC methods the adapter issues.
pub mod methods {
    pub const ETH_REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
    pub const ETH_ACCOUNTS: &str = "eth_accounts";
    pub const ETH_CHAIN_ID: &str = "eth_chainId";
}

/// Provider event channels the adapter subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProviderEvent {
    /// Fired with the new account list (JSON array of address strings).
    AccountsChanged,
    /// Fired with the new chain id (hex string, e.g. `"0x1"`).
    ChainChanged,
}

impl ProviderEvent {
    /// Wire name passed to `provider.on(...)`.
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderEvent::AccountsChanged => "accountsChanged",
            ProviderEvent::ChainChanged => "chainChanged",
        }
    }
}

/// Callback invoked with the raw event payload.
pub type EventCallback = Box<dyn FnMut(Value)>;

/// An injected Ethereum wallet provider (EIP-1193 shape).
pub trait EthereumProvider {
    /// Issue a JSON-RPC request through the provider.
    fn request(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<Value, Error>>;

    /// Register a persistent event listener. Listeners stay registered for
    /// the lifetime of the page; there is no unsubscribe.
    fn on(&self, event: ProviderEvent, callback: EventCallback);
}
