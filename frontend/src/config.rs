use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

const ENV_GLOBAL: &str = "__HIRELENS_ENV";
const CONFIG_GLOBAL: &str = "__HIRELENS_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub analysis_api_base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub analysis_api_base_url: String,
}

impl RuntimeConfig {
    /// Fills gaps: a missing analysis base reuses the API base, a missing API
    /// base uses the local default.
    pub fn resolve(&self) -> ResolvedConfig {
        let api_base_url = self
            .api_base_url
            .as_deref()
            .and_then(normalize_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let analysis_api_base_url = self
            .analysis_api_base_url
            .as_deref()
            .and_then(normalize_base_url)
            .unwrap_or_else(|| api_base_url.clone());
        ResolvedConfig {
            api_base_url,
            analysis_api_base_url,
        }
    }

    fn is_empty(&self) -> bool {
        self.api_base_url.is_none() && self.analysis_api_base_url.is_none()
    }

    fn or(self, other: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(other.api_base_url),
            analysis_api_base_url: self.analysis_api_base_url.or(other.analysis_api_base_url),
        }
    }
}

pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

static RESOLVED: OnceLock<ResolvedConfig> = OnceLock::new();

fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .filter(|v| !v.is_undefined() && !v.is_null())
        .find_map(|v| v.as_string())
}

fn snapshot_from_globals() -> RuntimeConfig {
    // env.js: window.__HIRELENS_ENV = { API_BASE_URL: "...", ANALYSIS_API_BASE_URL: "..." }
    let from_env = RuntimeConfig {
        api_base_url: read_global_key(ENV_GLOBAL, &["API_BASE_URL", "api_base_url"]),
        analysis_api_base_url: read_global_key(
            ENV_GLOBAL,
            &["ANALYSIS_API_BASE_URL", "analysis_api_base_url"],
        ),
    };
    let from_config = RuntimeConfig {
        api_base_url: read_global_key(CONFIG_GLOBAL, &["api_base_url", "API_BASE_URL"]),
        analysis_api_base_url: read_global_key(
            CONFIG_GLOBAL,
            &["analysis_api_base_url", "ANALYSIS_API_BASE_URL"],
        ),
    };
    from_env.or(from_config)
}

fn write_window_config(cfg: &ResolvedConfig) {
    let w = match web_sys::window() {
        Some(win) => win,
        None => return,
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(&cfg.api_base_url),
    );
    let _ = js_sys::Reflect::set(
        &obj,
        &"analysis_api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(&cfg.analysis_api_base_url),
    );
    let _ = js_sys::Reflect::set(&w, &CONFIG_GLOBAL.into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get(config_json_url()?).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

fn config_json_url() -> Option<String> {
    // reqwest needs an absolute URL, so anchor config.json at the page origin.
    let origin = web_sys::window()?.location().origin().ok()?;
    Some(format!("{}/config.json", origin))
}

async fn resolved() -> ResolvedConfig {
    if let Some(cached) = RESOLVED.get() {
        return cached.clone();
    }
    let mut cfg = snapshot_from_globals();
    if cfg.is_empty() {
        if let Some(fetched) = fetch_runtime_config().await {
            cfg = fetched;
        }
    }
    let resolved = cfg.resolve();
    write_window_config(&resolved);
    log::debug!(
        "runtime config resolved: api={} analysis={}",
        resolved.api_base_url,
        resolved.analysis_api_base_url
    );
    RESOLVED.get_or_init(|| resolved).clone()
}

pub async fn await_api_base_url() -> String {
    resolved().await.api_base_url
}

pub async fn await_analysis_base_url() -> String {
    resolved().await.analysis_api_base_url
}

pub async fn init() {
    let _ = resolved().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_trims_whitespace_and_trailing_slashes() {
        assert_eq!(
            normalize_base_url("  https://api.example.com//  ").as_deref(),
            Some("https://api.example.com")
        );
        assert_eq!(normalize_base_url("   "), None);
        assert_eq!(normalize_base_url("/"), None);
    }

    #[test]
    fn resolve_defaults_when_nothing_configured() {
        let resolved = RuntimeConfig::default().resolve();
        assert_eq!(resolved.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(resolved.analysis_api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn analysis_base_falls_back_to_api_base() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{ "api_base_url": "https://api.example.com/" }"#).unwrap();
        let resolved = cfg.resolve();
        assert_eq!(resolved.api_base_url, "https://api.example.com");
        assert_eq!(resolved.analysis_api_base_url, "https://api.example.com");
    }

    #[test]
    fn explicit_analysis_base_is_kept() {
        let cfg = RuntimeConfig {
            api_base_url: Some("https://api.example.com".into()),
            analysis_api_base_url: Some("https://ml.example.com".into()),
        };
        assert_eq!(cfg.resolve().analysis_api_base_url, "https://ml.example.com");
    }

    #[test]
    fn earlier_source_wins_per_key() {
        let env = RuntimeConfig {
            api_base_url: Some("https://env.example.com".into()),
            analysis_api_base_url: None,
        };
        let window = RuntimeConfig {
            api_base_url: Some("https://window.example.com".into()),
            analysis_api_base_url: Some("https://ml.example.com".into()),
        };
        let merged = env.or(window);
        assert_eq!(merged.api_base_url.as_deref(), Some("https://env.example.com"));
        assert_eq!(
            merged.analysis_api_base_url.as_deref(),
            Some("https://ml.example.com")
        );
    }
}
