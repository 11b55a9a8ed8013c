//! Library-wide class-name namespace configuration.
//!
//! Every component derives its default `prefix_cls` from the [`UiConfig`] found in the
//! reactive context, so an application can re-namespace the whole class contract once at the
//! root instead of passing `prefix_cls` to each widget.

use leptos::*;
use serde::{Deserialize, Serialize};

/// Namespace used when no [`UiConfig`] is provided.
pub const DEFAULT_NAMESPACE: &str = "zw";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Class-name configuration shared by all components.
pub struct UiConfig {
    /// Leading segment of every component class, for example `zw` in `zw-tag`.
    pub namespace: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl UiConfig {
    /// Creates a config with a custom namespace. A blank namespace falls back to the default.
    pub fn new(namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let namespace = namespace.trim();
        if namespace.is_empty() {
            logging::warn!("blank ui namespace ignored, using `{DEFAULT_NAMESPACE}`");
            return Self::default();
        }
        Self {
            namespace: namespace.to_string(),
        }
    }

    /// Base class for `component`, for example `zw-input`.
    pub fn prefix_cls(&self, component: &str) -> String {
        format!("{}-{component}", self.namespace)
    }
}

/// Installs `config` for every component rendered below the current owner.
///
/// Use this at the application root; [`ConfigProvider`] scopes a namespace to a subtree.
pub fn provide_ui_config(config: UiConfig) {
    provide_context(config);
}

/// Reads the nearest [`UiConfig`], falling back to [`UiConfig::default`].
pub fn use_ui_config() -> UiConfig {
    use_context::<UiConfig>().unwrap_or_default()
}

/// Resolves a component's base class: the explicit prop wins over the configured namespace.
pub(crate) fn resolve_prefix_cls(explicit: Option<String>, component: &str) -> String {
    prefix_cls_with(&use_ui_config(), explicit, component)
}

fn prefix_cls_with(config: &UiConfig, explicit: Option<String>, component: &str) -> String {
    match explicit {
        Some(prefix_cls) if !prefix_cls.is_empty() => prefix_cls,
        _ => config.prefix_cls(component),
    }
}

#[component]
/// Provides a [`UiConfig`] to descendant components.
pub fn ConfigProvider(
    /// Class namespace, for example `zw`.
    #[prop(into)]
    namespace: String,
    children: Children,
) -> impl IntoView {
    view! { <Provider value=UiConfig::new(namespace)>{children()}</Provider> }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_namespace_prefixes_components() {
        let config = UiConfig::default();
        assert_eq!(config.prefix_cls("input"), "zw-input");
        assert_eq!(config.prefix_cls("col"), "zw-col");
    }

    #[test]
    fn custom_namespace_is_trimmed() {
        assert_eq!(UiConfig::new("  acme ").prefix_cls("tag"), "acme-tag");
    }

    #[test]
    fn blank_namespace_falls_back_to_default() {
        assert_eq!(UiConfig::new("   "), UiConfig::default());
    }

    #[test]
    fn explicit_prefix_wins_over_namespace() {
        let config = UiConfig::new("acme");

        assert_eq!(prefix_cls_with(&config, Some("my-tag".into()), "tag"), "my-tag");
        assert_eq!(prefix_cls_with(&config, None, "tag"), "acme-tag");
        assert_eq!(prefix_cls_with(&config, Some(String::new()), "tag"), "acme-tag");
    }
}
