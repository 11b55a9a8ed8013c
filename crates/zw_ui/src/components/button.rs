use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Static appearance props of a [`Button`].
pub(crate) struct ButtonAppearance {
    pub theme: Theme,
    pub size: ButtonSize,
    pub shape: ButtonShape,
    pub block: bool,
    pub ghost: bool,
}

pub(crate) fn button_class_names(
    prefix_cls: &str,
    class: Option<&str>,
    appearance: ButtonAppearance,
    loading: bool,
    disabled: bool,
) -> String {
    ClassNames::new()
        .push(prefix_cls)
        .extend_raw(class)
        .push(format!("{prefix_cls}--{}", appearance.theme.token()))
        .push(format!("{prefix_cls}--{}", appearance.size.token()))
        .push(format!("{prefix_cls}--{}", appearance.shape.token()))
        .push_if(format!("{prefix_cls}--block"), appearance.block)
        .push_if(format!("{prefix_cls}--ghost"), appearance.ghost)
        .push_if(format!("{prefix_cls}--loading"), loading)
        .push_if(format!("{prefix_cls}--disabled"), disabled)
        .build()
}

/// Busy or disabled buttons swallow clicks.
pub(crate) fn accepts_click(loading: bool, disabled: bool) -> bool {
    !loading && !disabled
}

#[component]
/// Action button with theme, size, and shape modifiers.
pub fn Button(
    #[prop(optional, into)] prefix_cls: Option<String>,
    #[prop(default = Theme::Default)] theme: Theme,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(default = ButtonShape::Radius)] shape: ButtonShape,
    #[prop(optional)] block: bool,
    #[prop(optional)] ghost: bool,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] html_type: Option<&'static str>,
    /// Leading glyph, replaced by a spinner while loading.
    #[prop(optional, into)]
    icon: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let prefix_cls = resolve_prefix_cls(prefix_cls, "button");
    let appearance = ButtonAppearance {
        theme,
        size,
        shape,
        block,
        ghost,
    };
    let loading = Signal::derive(move || loading.get());
    let disabled = Signal::derive(move || disabled.get());

    let leading_icon = move || {
        if loading.get() {
            Some(view! { <Icon kind=ICON_LOADING /> }.into_view())
        } else {
            icon.clone().map(|kind| view! { <Icon kind /> }.into_view())
        }
    };

    view! {
        <button
            type=html_type.unwrap_or("button")
            class=move || {
                button_class_names(
                    &prefix_cls,
                    class.as_deref(),
                    appearance,
                    loading.get(),
                    disabled.get(),
                )
            }
            style=style
            title=title
            disabled=move || disabled.get()
            aria-busy=move || loading.get().then_some("true")
            on:click=move |ev| {
                if !accepts_click(loading.get_untracked(), disabled.get_untracked()) {
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {leading_icon}
            {children.map(|children| view! { <span>{children()}</span> })}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_button_carries_theme_size_and_shape() {
        assert_eq!(
            button_class_names("zw-button", None, ButtonAppearance::default(), false, false),
            "zw-button zw-button--default zw-button--md zw-button--radius"
        );
    }

    #[test]
    fn state_modifiers_follow_appearance() {
        let appearance = ButtonAppearance {
            theme: Theme::Danger,
            size: ButtonSize::Xs,
            shape: ButtonShape::Circle,
            block: true,
            ghost: true,
        };
        assert_eq!(
            button_class_names("zw-button", Some("cta"), appearance, true, true),
            "zw-button cta zw-button--danger zw-button--xs zw-button--circle zw-button--block zw-button--ghost zw-button--loading zw-button--disabled"
        );
    }

    #[test]
    fn loading_or_disabled_blocks_clicks() {
        assert!(accepts_click(false, false));
        assert!(!accepts_click(true, false));
        assert!(!accepts_click(false, true));
    }
}
