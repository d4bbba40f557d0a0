//! Browser binding for the injected EIP-1193 provider.
//!
//! Wraps the `window.ethereum` object through the Reflect API so the rest of
//! the crate only sees the [`EthereumProvider`] capability.

use js_sys::{Function, Promise, Reflect};
use lib_ethereum::{ClientSettings, Error, EthereumProvider, EventCallback, ProviderEvent};
use serde_json::{json, Value};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Handle to the provider object injected by the wallet extension.
#[derive(Clone)]
pub struct BrowserProvider {
    raw: JsValue,
}

/// Look up `window.ethereum`, if a wallet extension injected one.
pub fn injected_provider() -> Option<BrowserProvider> {
    let window = web_sys::window()?;
    let raw = Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
    if raw.is_null() || raw.is_undefined() {
        return None;
    }
    Some(BrowserProvider { raw })
}

impl BrowserProvider {
    fn function(&self, name: &str) -> Result<Function, Error> {
        Reflect::get(&self.raw, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
            .ok_or_else(|| Error::Provider(format!("provider has no `{name}` function")))
    }
}

impl EthereumProvider for BrowserProvider {
    async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value, Error> {
        let request = self.function("request")?;
        let args = serde_wasm_bindgen::to_value(&json!({
            "method": method,
            "params": params,
        }))
        .map_err(|e| Error::Provider(e.to_string()))?;

        let promise: Promise = request
            .call1(&self.raw, &args)
            .map_err(|e| Error::Provider(format!("{e:?}")))?
            .dyn_into()
            .map_err(|_| Error::Provider("provider request did not return a Promise".to_owned()))?;

        // Rejections are flattened to their string form; JSON-RPC error codes
        // are not preserved.
        let result = JsFuture::from(promise)
            .await
            .map_err(|e| Error::Provider(format!("{e:?}")))?;
        serde_wasm_bindgen::from_value(result).map_err(|e| Error::Provider(e.to_string()))
    }

    fn on(&self, event: ProviderEvent, mut callback: EventCallback) {
        let on = match self.function("on") {
            Ok(function) => function,
            Err(_) => {
                log::warn!(
                    "provider has no `on` function; {} events dropped",
                    event.as_str()
                );
                return;
            }
        };

        let closure = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            let payload = serde_wasm_bindgen::from_value(value).unwrap_or(Value::Null);
            callback(payload);
        });
        if let Err(err) = on.call2(
            &self.raw,
            &JsValue::from_str(event.as_str()),
            closure.as_ref().unchecked_ref(),
        ) {
            log::warn!("failed to register {} listener: {err:?}", event.as_str());
        }
        // The listener stays registered for the rest of the page session.
        closure.forget();
    }
}

/// Minimal opaque client built over the provider, standing in for a full
/// client library.
pub struct Web3Client {
    provider: BrowserProvider,
    settings: Option<ClientSettings>,
}

impl Web3Client {
    pub fn new(provider: BrowserProvider, settings: Option<&ClientSettings>) -> Self {
        Web3Client {
            provider,
            settings: settings.cloned(),
        }
    }

    pub fn provider(&self) -> &BrowserProvider {
        &self.provider
    }

    pub fn settings(&self) -> Option<&ClientSettings> {
        self.settings.as_ref()
    }
}
