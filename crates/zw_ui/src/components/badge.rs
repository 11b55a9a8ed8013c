use super::*;

/// Text shown in the badge bubble; counts past `overflow_count` collapse to `{overflow}+`.
pub fn badge_content(count: u32, overflow_count: u32) -> String {
    if count > overflow_count {
        format!("{overflow_count}+")
    } else {
        count.to_string()
    }
}

pub(crate) fn show_badge_sup(count: Option<u32>, dot: bool, show_zero: bool) -> bool {
    match count {
        _ if dot => true,
        Some(0) => show_zero,
        Some(_) => true,
        None => false,
    }
}

pub(crate) fn badge_class_names(
    prefix_cls: &str,
    class: Option<&str>,
    standalone: bool,
) -> String {
    ClassNames::new()
        .push(prefix_cls)
        .extend_raw(class)
        .push_if(format!("{prefix_cls}--standalone"), standalone)
        .build()
}

pub(crate) fn badge_sup_class_names(prefix_cls: &str, dot: bool) -> String {
    ClassNames::new()
        .push(format!("{prefix_cls}__sup"))
        .push_if(format!("{prefix_cls}__sup--dot"), dot)
        .build()
}

#[component]
/// Count or dot indicator anchored to its children.
pub fn Badge(
    #[prop(optional, into)] prefix_cls: Option<String>,
    #[prop(optional, into)] count: Option<MaybeSignal<u32>>,
    #[prop(default = 99)] overflow_count: u32,
    #[prop(optional)] dot: bool,
    #[prop(optional)] show_zero: bool,
    #[prop(optional, into)] text: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let prefix_cls = resolve_prefix_cls(prefix_cls, "badge");
    let class = badge_class_names(&prefix_cls, class.as_deref(), children.is_none());
    let sup_class = badge_sup_class_names(&prefix_cls, dot);
    let text_class = format!("{prefix_cls}__text");

    let sup = move || {
        let count = count.as_ref().map(|count| count.get());
        show_badge_sup(count, dot, show_zero).then(|| {
            let content = (!dot).then(|| badge_content(count.unwrap_or_default(), overflow_count));
            view! { <sup class=sup_class.clone()>{content}</sup> }
        })
    };

    view! {
        <span class=class style=style>
            {children.map(|children| children())}
            {sup}
            {text.map(|text| view! { <span class=text_class>{text}</span> })}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn counts_overflow_past_limit() {
        assert_eq!(badge_content(5, 99), "5");
        assert_eq!(badge_content(99, 99), "99");
        assert_eq!(badge_content(100, 99), "99+");
        assert_eq!(badge_content(12, 9), "9+");
    }

    #[test]
    fn zero_count_hides_unless_requested() {
        assert!(!show_badge_sup(Some(0), false, false));
        assert!(show_badge_sup(Some(0), false, true));
        assert!(show_badge_sup(Some(3), false, false));
        assert!(!show_badge_sup(None, false, true));
    }

    #[test]
    fn dot_always_shows() {
        assert!(show_badge_sup(None, true, false));
        assert!(show_badge_sup(Some(0), true, false));
    }

    #[test]
    fn plain_and_reactive_counts_are_accepted() {
        let runtime = leptos::create_runtime();
        let _ = BadgeProps::builder().count(5u32).build();
        let clicks = create_rw_signal(0u32);
        let _ = BadgeProps::builder().count(clicks).show_zero(true).build();
        let _ = BadgeProps::builder().dot(true).build();
        runtime.dispose();
    }

    #[test]
    fn standalone_and_dot_modifiers() {
        assert_eq!(
            badge_class_names("zw-badge", None, true),
            "zw-badge zw-badge--standalone"
        );
        assert_eq!(badge_class_names("zw-badge", Some("nav"), false), "zw-badge nav");
        assert_eq!(
            badge_sup_class_names("zw-badge", true),
            "zw-badge__sup zw-badge__sup--dot"
        );
    }
}
