//! Store state, the action taxonomy dispatched by the adapter, and a default
//! reducer for stores that do not bring their own.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::chains::ChainInfo;

/// Opaque client-library instance; the adapter never inspects its shape.
pub type Web3Handle = Rc<dyn Any>;

/// Connection state owned by the surrounding store.
#[derive(Clone, Default)]
pub struct MetaState {
    /// Client instance built on initial connect.
    pub web3: Option<Web3Handle>,
    /// Current account list; empty when the wallet is locked or disconnected.
    pub account: Vec<String>,
    /// Current network descriptor.
    pub chain: Option<ChainInfo>,
    pub is_connected: bool,
}

impl fmt::Debug for MetaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetaState")
            .field("web3", &self.web3.as_ref().map(|_| "<client>"))
            .field("account", &self.account)
            .field("chain", &self.chain)
            .field("is_connected", &self.is_connected)
            .finish()
    }
}

/// Actions emitted toward the store.
///
/// The wire tags (see [`MetaAction::kind`]) are a published contract with
/// existing stores and are kept byte-for-byte, including the
/// `SET_INITALCONNECT` spelling.
pub enum MetaAction {
    /// Combined result of a successful `connect`.
    SetInitialConnect {
        web3: Web3Handle,
        account: Vec<String>,
        chain: ChainInfo,
    },
    SetConnected(bool),
    SetAccount(Vec<String>),
    SetChain(ChainInfo),
}

impl MetaAction {
    /// Wire tag of this action.
    pub fn kind(&self) -> &'static str {
        match self {
            MetaAction::SetInitialConnect { .. } => "SET_INITALCONNECT",
            MetaAction::SetConnected(_) => "SET_CONNECTED",
            MetaAction::SetAccount(_) => "SET_ACCOUNT",
            MetaAction::SetChain(_) => "SET_CHAIN",
        }
    }
}

impl fmt::Debug for MetaAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaAction::SetInitialConnect { account, chain, .. } => f
                .debug_struct("SetInitialConnect")
                .field("account", account)
                .field("chain", chain)
                .finish_non_exhaustive(),
            MetaAction::SetConnected(connected) => {
                f.debug_tuple("SetConnected").field(connected).finish()
            }
            MetaAction::SetAccount(account) => f.debug_tuple("SetAccount").field(account).finish(),
            MetaAction::SetChain(chain) => f.debug_tuple("SetChain").field(chain).finish(),
        }
    }
}

/// Dispatch half of the `{state, dispatch}` pair the adapter is handed.
pub type Dispatch = Rc<dyn Fn(MetaAction)>;

/// Apply an action to the state.
pub fn reduce(state: &mut MetaState, action: MetaAction) {
    match action {
        MetaAction::SetInitialConnect {
            web3,
            account,
            chain,
        } => {
            state.web3 = Some(web3);
            state.account = account;
            state.chain = Some(chain);
            state.is_connected = true;
        }
        MetaAction::SetConnected(connected) => state.is_connected = connected,
        MetaAction::SetAccount(account) => state.account = account,
        MetaAction::SetChain(chain) => state.chain = Some(chain),
    }
}
