//! # lib-ethereum
//!
//! Connection adapter for injected Ethereum wallet providers (MetaMask and
//! compatible extensions).
//!
//! The adapter translates provider events and three RPC calls
//! (`eth_requestAccounts`, `eth_accounts`, `eth_chainId`) into store
//! dispatches. The provider is an explicit capability ([`EthereumProvider`]),
//! so browser frontends wrap the injected object while tests substitute their
//! own implementation.

pub mod adapter;
pub mod chains;
pub mod error;
pub mod provider;
pub mod state;

pub use adapter::{ClientSettings, MetamaskAdapter};
pub use chains::{chain_name, ChainInfo};
pub use error::Error;
pub use provider::{EthereumProvider, EventCallback, ProviderEvent};
pub use state::{reduce, Dispatch, MetaAction, MetaState, Web3Handle};
