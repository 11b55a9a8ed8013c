//! Glyph icon rendered from the icon-font class contract.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::class_names::ClassNames;
use crate::config::resolve_prefix_cls;
use crate::tokens::{Theme, Token};

/// Glyph drawn by closable tags.
pub const ICON_WRONG: &str = "wrong";
/// Glyph drawn by clearable inputs.
pub const ICON_WRONG_ROUND_FILL: &str = "wrong-round-fill";
/// Glyph drawn by loading buttons.
pub const ICON_LOADING: &str = "loading";

pub(crate) fn icon_class_names(
    prefix_cls: &str,
    kind: &str,
    theme: Option<Theme>,
    class: Option<&str>,
) -> String {
    ClassNames::new()
        .push(prefix_cls)
        .push_if(format!("{prefix_cls}-{kind}"), !kind.is_empty())
        .push_if(
            format!("{prefix_cls}--{}", theme.map(Theme::token).unwrap_or_default()),
            theme.is_some(),
        )
        .extend_raw(class)
        .build()
}

#[component]
/// Icon-font glyph. Stylesheets map `{prefix_cls}-{kind}` to a glyph.
pub fn Icon(
    /// Glyph name, for example `wrong`.
    #[prop(into)]
    kind: String,
    #[prop(optional, into)] prefix_cls: Option<String>,
    #[prop(optional)] theme: Option<Theme>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let prefix_cls = resolve_prefix_cls(prefix_cls, "icon");
    let class = icon_class_names(&prefix_cls, &kind, theme, class.as_deref());

    view! {
        <i
            class=class
            style=style
            role=role
            title=title
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        ></i>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn glyph_and_theme_modifiers_precede_user_class() {
        assert_eq!(
            icon_class_names(
                "zw-icon",
                ICON_WRONG_ROUND_FILL,
                Some(Theme::Default),
                Some("zw-input__clear-icon"),
            ),
            "zw-icon zw-icon-wrong-round-fill zw-icon--default zw-input__clear-icon"
        );
    }

    #[test]
    fn theme_is_optional() {
        assert_eq!(
            icon_class_names("zw-icon", ICON_WRONG, None, None),
            "zw-icon zw-icon-wrong"
        );
    }
}
