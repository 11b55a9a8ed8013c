use super::*;

const CLOSE_ICON_STYLE: &str = "margin-left: 8px; cursor: pointer;";

pub(crate) fn tag_class_names(
    prefix_cls: &str,
    theme: Option<&str>,
    size: Option<TagSize>,
    shape: Option<Shape>,
    class: Option<&str>,
) -> String {
    let theme = theme.unwrap_or_default();
    ClassNames::new()
        .push(prefix_cls)
        .extend_raw(class)
        .push_if(format!("{prefix_cls}--{theme}"), !theme.is_empty())
        .push_if(
            format!("{prefix_cls}--{}", size.map(TagSize::token).unwrap_or_default()),
            size.is_some(),
        )
        .push_if(
            format!("{prefix_cls}--{}", shape.map(Shape::token).unwrap_or_default()),
            shape.is_some(),
        )
        .build()
}

#[component]
/// Compact label with optional close affordance.
pub fn Tag(
    #[prop(optional, into)] prefix_cls: Option<String>,
    /// Free-form color theme rendered as `{prefix_cls}--{theme}`.
    #[prop(optional, into)]
    theme: Option<String>,
    #[prop(optional)] size: Option<TagSize>,
    #[prop(optional)] shape: Option<Shape>,
    #[prop(optional)] closable: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    /// Invoked by the close icon. The click still bubbles to `on_click`.
    #[prop(optional)]
    on_close: Option<Callback<MouseEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let prefix_cls = resolve_prefix_cls(prefix_cls, "tag");
    let class = tag_class_names(&prefix_cls, theme.as_deref(), size, shape, class.as_deref());

    let close_icon = closable.then(|| {
        view! {
            <Icon
                kind=ICON_WRONG
                style=CLOSE_ICON_STYLE
                on_click=Callback::new(move |ev| {
                    if let Some(on_close) = on_close.as_ref() {
                        on_close.call(ev);
                    }
                })
            />
        }
    });

    view! {
        <div
            class=class
            style=style
            title=title
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children.map(|children| children())}
            {close_icon}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bare_tag_renders_prefix_only() {
        assert_eq!(tag_class_names("zw-tag", None, None, None, None), "zw-tag");
        assert_eq!(tag_class_names("zw-tag", Some(""), None, None, None), "zw-tag");
    }

    #[test]
    fn modifiers_follow_user_class() {
        assert_eq!(
            tag_class_names(
                "zw-tag",
                Some("success"),
                Some(TagSize::XSmall),
                Some(Shape::Round),
                Some("pill"),
            ),
            "zw-tag pill zw-tag--success zw-tag--xsmall zw-tag--round"
        );
    }

    #[test]
    fn custom_prefix_drives_modifiers() {
        assert_eq!(
            tag_class_names("acme-label", None, Some(TagSize::Large), None, None),
            "acme-label acme-label--large"
        );
    }
}
