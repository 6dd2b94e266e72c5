use serde::Deserialize;
use serde_json::Value;

const CONFIG_KEY: &str = "notes-sidebar-config";

/// Host-tunable sidebar settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Header text shown in both panels
    pub title: String,
    /// Overlay enter/leave duration in milliseconds
    pub transition_ms: u32,
    /// Body given to freshly created notes
    pub placeholder_body: String,
    pub empty_list_label: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            title: "Notes".to_string(),
            transition_ms: 300,
            placeholder_body: "# Type your markdown note's title here".to_string(),
            empty_list_label: "No notes yet".to_string(),
        }
    }
}

pub fn parse_sidebar_config(raw: &Value) -> Result<SidebarConfig, String> {
    if !raw.is_object() {
        return Err("sidebar config must be a JSON object".to_string());
    }
    let mut config: SidebarConfig =
        serde_json::from_value(raw.clone()).map_err(|e| format!("invalid sidebar config: {e}"))?;
    config.transition_ms = config.transition_ms.max(1);
    Ok(config)
}

/// Read the config cached in local storage, falling back to defaults.
pub fn load_sidebar_config() -> SidebarConfig {
    let Some(raw) = get_cached_config() else {
        return SidebarConfig::default();
    };

    match serde_json::from_str::<Value>(&raw)
        .map_err(|e| format!("config is not JSON: {e}"))
        .and_then(|value| parse_sidebar_config(&value))
    {
        Ok(config) => config,
        Err(e) => {
            dioxus_logger::tracing::warn!("Ignoring cached sidebar config, using defaults: {}", e);
            SidebarConfig::default()
        }
    }
}

fn get_cached_config() -> Option<String> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_KEY).ok().flatten())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_yields_defaults() {
        let config = parse_sidebar_config(&json!({})).expect("should parse");
        assert_eq!(config, SidebarConfig::default());
        assert_eq!(config.transition_ms, 300);
        assert_eq!(config.title, "Notes");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = parse_sidebar_config(&json!({ "title": "Journal", "transition_ms": 150 }))
            .expect("should parse");
        assert_eq!(config.title, "Journal");
        assert_eq!(config.transition_ms, 150);
        assert_eq!(config.empty_list_label, "No notes yet");
    }

    #[test]
    fn zero_transition_is_clamped() {
        let config = parse_sidebar_config(&json!({ "transition_ms": 0 })).unwrap();
        assert_eq!(config.transition_ms, 1);
    }

    #[test]
    fn wrong_types_error() {
        let err = parse_sidebar_config(&json!({ "transition_ms": "slow" })).expect_err("must fail");
        assert!(err.contains("invalid sidebar config"));

        let err = parse_sidebar_config(&json!([1, 2])).expect_err("must fail");
        assert!(err.contains("JSON object"));
    }
}
