//! Endpoint configuration for the hosted backend. Values come from build-time
//! environment variables and can be overridden at runtime through
//! `window.CLICCASH_CONFIG` so a static deployment can be re-pointed without a
//! rebuild. The anon key is public; never put secrets here.

const DEFAULT_API_URL: &str = "http://localhost:54321";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub anon_key: String,
}

impl AppConfig {
    pub fn load() -> Self {
        let mut config = Self {
            api_url: option_env!("CLICCASH_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
            anon_key: option_env!("CLICCASH_ANON_KEY").unwrap_or("").to_string(),
        };

        if let Some(runtime) = runtime_config() {
            config.apply(runtime);
        }

        config.api_url = config.api_url.trim_end_matches('/').to_string();
        if config.anon_key.is_empty() {
            tracing::warn!("CLICCASH_ANON_KEY is not set; backend requests will be rejected");
        }
        config
    }

    fn apply(&mut self, runtime: RuntimeConfig) {
        if let Some(value) = runtime.api_url {
            self.api_url = value;
        }
        if let Some(value) = runtime.anon_key {
            self.anon_key = value;
        }
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.api_url, path)
    }

    pub fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1/{}", self.api_url, path)
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_url: Option<String>,
    anon_key: Option<String>,
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("CLICCASH_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_url: read_runtime_value(&object, "api_url"),
        anon_key: read_runtime_value(&object, "anon_key"),
    })
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_values_override_build_values() {
        let mut config = AppConfig {
            api_url: DEFAULT_API_URL.to_string(),
            anon_key: String::new(),
        };
        config.apply(RuntimeConfig {
            api_url: Some("https://fleet.example.com".to_string()),
            anon_key: None,
        });

        assert_eq!(config.api_url, "https://fleet.example.com");
        assert_eq!(config.anon_key, "");
        assert_eq!(
            config.rest_url("customers"),
            "https://fleet.example.com/rest/v1/customers"
        );
        assert_eq!(config.auth_url("user"), "https://fleet.example.com/auth/v1/user");
    }
}
