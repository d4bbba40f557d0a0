//! Application shell: availability banner, connect button, state readout.

use leptos::prelude::*;
use lib_ethereum::ClientSettings;

use crate::hooks::use_metamask;
use crate::state::metamask::{provide_meta_state, use_meta_state};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_state();
    view! { <ConnectPanel/> }
}

#[component]
fn ConnectPanel() -> impl IntoView {
    let context = use_meta_state();
    let metamask = use_metamask();
    let available = metamask.is_available();
    let metamask = StoredValue::new_local(metamask);
    let (error, set_error) = signal(None::<String>);

    let on_connect = move |_| {
        let metamask = metamask.get_value();
        leptos::task::spawn_local(async move {
            match metamask.connect(ClientSettings::new()).await {
                Ok(()) => set_error.set(None),
                Err(err) => {
                    log::warn!("wallet connect failed: {err}");
                    set_error.set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <div class="card">
            <h1>"MetaMask Connect"</h1>
            {move || {
                let state = context.get();
                if state.is_connected {
                    let account = state.account.first().cloned().unwrap_or_default();
                    let network = state
                        .chain
                        .map(|chain| format!("{} (chain {})", chain.name, chain.id))
                        .unwrap_or_else(|| "unknown network".to_owned());
                    view! {
                        <div>
                            <p>"Account: " {account}</p>
                            <p>"Network: " {network}</p>
                        </div>
                    }
                    .into_any()
                } else if available {
                    view! { <button on:click=on_connect>"Connect wallet"</button> }.into_any()
                } else {
                    view! { <p>"No wallet extension detected."</p> }.into_any()
                }
            }}
            {move || error.get().map(|message| view! { <p class="error">{message}</p> })}
        </div>
    }
}
