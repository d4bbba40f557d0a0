//! Adapter error type.

use thiserror::Error;

/// Errors surfaced by the connection adapter and the provider seam.
#[derive(Debug, Error)]
pub enum Error {
    /// No injected wallet provider was present when the adapter was built.
    #[error("Metamask is not available.")]
    MetamaskUnavailable,

    /// `connect` was called without a client-library factory.
    #[error("Web3 Provider is required.")]
    Web3InterfaceRequired,

    /// The owning component has been torn down.
    #[error("Component is not mounted.")]
    NotMounted,

    /// Another `connect` call is still in flight on this adapter.
    #[error("Connect method already called.")]
    ConnectAlreadyCalled,

    /// Provider rejection, flattened to its string form. Structured JSON-RPC
    /// fields (error codes) are not preserved.
    #[error("{0}")]
    Provider(String),

    /// The provider handed back a chain id that is not a hex quantity.
    #[error("invalid chain id payload: {0}")]
    InvalidChainId(String),
}
