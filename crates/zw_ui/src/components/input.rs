use super::*;

/// Width reserved for the clear icon inside the suffix slot (glyph plus gap).
const CLEAR_ICON_WIDTH: f64 = 14.0 + 2.0;

/// Normalizes a possibly absent value for the DOM `value` property.
pub fn fix_controlled_value(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn has_value(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.is_empty())
}

/// The clear icon shows only for enabled, clearable inputs holding a non-empty value.
pub(crate) fn show_clear_icon(clearable: bool, disabled: bool, value: Option<&str>) -> bool {
    clearable && !disabled && has_value(value)
}

/// Text the input shows: the `value` prop when controlled, otherwise the internal state.
pub(crate) fn input_display(
    value: Option<MaybeSignal<String>>,
    inner: RwSignal<Option<String>>,
) -> Signal<Option<String>> {
    Signal::derive(move || match value.as_ref() {
        Some(value) => Some(value.get()),
        None => inner.get(),
    })
}

/// Empties the internal state. A controlled display keeps mirroring its prop.
pub(crate) fn reset_value(inner: RwSignal<Option<String>>) {
    inner.set(Some(String::new()));
}

/// DOM text to write back when a controlled owner did not adopt the typed edit.
pub(crate) fn rejected_edit_restore(
    controlled: bool,
    dom_value: &str,
    displayed: Option<&str>,
) -> Option<String> {
    let expected = fix_controlled_value(displayed);
    (controlled && expected != dom_value).then_some(expected)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Markup variant selected from the static props.
pub(crate) enum InputLayout {
    /// Addons rendered before/after the frame.
    Addon,
    /// Prefix/suffix content, clear icon, or underline inside the frame.
    Affix,
    /// Plain text instead of an input.
    ReadOnly,
    /// Bare framed input.
    Base,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Which view slots were supplied.
pub(crate) struct InputSlots {
    pub prefix: bool,
    pub suffix: bool,
    pub addon_before: bool,
    pub addon_after: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Static appearance props.
pub(crate) struct InputAppearance {
    pub size: InputSize,
    pub shape: Shape,
    pub bordered: Bordered,
    pub clearable: bool,
    pub read_only: bool,
}

pub(crate) fn input_layout(slots: InputSlots, appearance: InputAppearance) -> InputLayout {
    if slots.addon_before || slots.addon_after {
        InputLayout::Addon
    } else if slots.prefix
        || slots.suffix
        || appearance.clearable
        || appearance.bordered == Bordered::Underline
    {
        InputLayout::Affix
    } else if appearance.read_only {
        InputLayout::ReadOnly
    } else {
        InputLayout::Base
    }
}

pub(crate) fn input_class_names(
    prefix_cls: &str,
    class: Option<&str>,
    appearance: InputAppearance,
    disabled: bool,
) -> String {
    ClassNames::new()
        .push(prefix_cls)
        .extend_raw(class)
        .push(format!("{prefix_cls}--{}", appearance.size.token()))
        .push(format!("{prefix_cls}--{}", appearance.shape.token()))
        .push_if(format!("{prefix_cls}--disabled"), disabled)
        .push_if(format!("{prefix_cls}--readOnly"), appearance.read_only)
        .push_if(
            format!("{prefix_cls}--underline"),
            appearance.bordered == Bordered::Underline,
        )
        .push_if(
            format!("{prefix_cls}--bordered"),
            appearance.bordered == Bordered::Bordered,
        )
        .push_if(
            format!("{prefix_cls}--nobordered"),
            appearance.bordered == Bordered::None,
        )
        .build()
}

pub(crate) fn affix_class_names(
    prefix_cls: &str,
    class: Option<&str>,
    appearance: InputAppearance,
    clearable_suffix: bool,
    focused: bool,
) -> String {
    ClassNames::new()
        .extend_raw(class)
        .push(prefix_cls)
        .push(format!("{prefix_cls}--{}", appearance.size.token()))
        .push_if(
            format!("{prefix_cls}--underline"),
            appearance.bordered == Bordered::Underline,
        )
        .push_if(format!("{prefix_cls}--clearable"), clearable_suffix)
        .push_if(format!("{prefix_cls}--focused"), focused)
        .build()
}

pub(crate) fn addon_class_names(
    prefix_cls: &str,
    appearance: InputAppearance,
    slots: InputSlots,
) -> String {
    ClassNames::new()
        .push(prefix_cls)
        .push(format!("{prefix_cls}--{}", appearance.size.token()))
        .push(format!("{prefix_cls}--{}", appearance.shape.token()))
        .push_if(format!("{prefix_cls}--prepend"), slots.addon_before)
        .push_if(format!("{prefix_cls}--append"), slots.addon_after)
        .build()
}

pub(crate) fn read_only_class_names(prefix_cls: &str, size: InputSize) -> String {
    format!("{prefix_cls}--readOnly {prefix_cls}--{}", size.token())
}

/// Inner padding that keeps typed text clear of measured prefix/suffix content.
///
/// Underlined inputs keep their stylesheet padding.
pub(crate) fn affix_padding(
    appearance: InputAppearance,
    prefix_width: Option<f64>,
    suffix_width: Option<f64>,
) -> Option<String> {
    if appearance.bordered == Bordered::Underline {
        return None;
    }

    let half_height = appearance.size.height() / 2.0;
    let mut decls = StyleDecls::new();
    if let Some(width) = prefix_width {
        decls = decls.push_px("padding-left", width + half_height);
    }
    if let Some(width) = suffix_width {
        let clear = if appearance.clearable {
            CLEAR_ICON_WIDTH
        } else {
            0.0
        };
        decls = decls.push_px("padding-right", width + half_height + clear);
    }
    decls.build()
}

fn dispatch_input_event(input: &web_sys::HtmlInputElement) -> Result<bool, JsValue> {
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict("input", &init)?;
    input.dispatch_event(&event)
}

#[component]
/// Text input with controlled/uncontrolled value, clear button, affixes, and addons.
///
/// Passing `value` makes the input controlled: the displayed text always mirrors it and
/// `on_change` is expected to write edits back. Without `value` the input keeps its own
/// state seeded from `default_value`.
pub fn Input(
    #[prop(optional, into)] prefix_cls: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(default = InputSize::Md)] size: InputSize,
    #[prop(default = Shape::Radius)] shape: Shape,
    #[prop(default = Bordered::Bordered, into)] bordered: Bordered,
    #[prop(optional)] clearable: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] read_only: bool,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] max_length: Option<u32>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] prefix: Option<ViewFn>,
    #[prop(optional, into)] suffix: Option<ViewFn>,
    #[prop(optional, into)] addon_before: Option<ViewFn>,
    #[prop(optional, into)] addon_after: Option<ViewFn>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    let prefix_cls = resolve_prefix_cls(prefix_cls, "input");
    let appearance = InputAppearance {
        size,
        shape,
        bordered,
        clearable,
        read_only,
    };
    let slots = InputSlots {
        prefix: prefix.is_some(),
        suffix: suffix.is_some(),
        addon_before: addon_before.is_some(),
        addon_after: addon_after.is_some(),
    };
    let layout = input_layout(slots, appearance);

    let controlled = value.is_some();
    let inner_value = create_rw_signal(default_value);
    let display = input_display(value, inner_value);
    let disabled = Signal::derive(move || disabled.get());
    let focused = create_rw_signal(false);
    let affix_style = create_rw_signal::<Option<String>>(None);

    let handle_reset = Callback::new(move |_: MouseEvent| {
        reset_value(inner_value);
        let Some(input) = node_ref.get_untracked() else {
            logging::debug_warn!("input clear clicked before the input mounted");
            return;
        };

        // Listeners observe an empty target value; the DOM then reverts to the displayed value
        // so a controlled owner that ignores the change keeps its text.
        input.set_value("");
        if let Err(err) = dispatch_input_event(&input) {
            logging::warn!("input clear event dispatch failed: {err:?}");
        }
        input.set_value(&fix_controlled_value(display.get_untracked().as_deref()));
        if let Err(err) = input.focus() {
            logging::debug_warn!("input focus after clear failed: {err:?}");
        }
    });

    let inner_class = format!("{prefix_cls}__inner");
    let render_input = move || {
        view! {
            <input
                node_ref=node_ref
                class=inner_class
                type=input_type.unwrap_or("text")
                id=id
                name=name
                placeholder=placeholder
                maxlength=max_length.map(|max_length| max_length.to_string())
                aria-label=aria_label
                readonly=read_only
                disabled=move || disabled.get()
                style=move || affix_style.get()
                prop:value=move || fix_controlled_value(display.get().as_deref())
                on:input=move |ev| {
                    let target = event_target::<web_sys::HtmlInputElement>(&ev);
                    let typed = target.value();
                    inner_value.set(Some(typed.clone()));
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(ev);
                    }
                    let displayed = display.get_untracked();
                    if let Some(restore) =
                        rejected_edit_restore(controlled, &typed, displayed.as_deref())
                    {
                        target.set_value(&restore);
                    }
                }
                on:focus=move |ev| {
                    if let Some(on_focus) = on_focus.as_ref() {
                        on_focus.call(ev);
                    }
                    focused.set(true);
                }
                on:blur=move |ev| {
                    if let Some(on_blur) = on_blur.as_ref() {
                        on_blur.call(ev);
                    }
                    focused.set(false);
                }
                on:keydown=move |ev| {
                    if let Some(on_keydown) = on_keydown.as_ref() {
                        on_keydown.call(ev);
                    }
                }
            />
        }
    };

    match layout {
        InputLayout::Addon => {
            let class = addon_class_names(&prefix_cls, appearance, slots);
            let prepend_class = format!("{prefix_cls}__prepend");
            let append_class = format!("{prefix_cls}__append");
            view! {
                <div class=class style=style>
                    {addon_before.map(|addon| view! { <span class=prepend_class>{addon.run()}</span> })}
                    {render_input()}
                    {addon_after.map(|addon| view! { <span class=append_class>{addon.run()}</span> })}
                </div>
            }
            .into_view()
        }
        InputLayout::Affix => {
            let prefix_ref = create_node_ref::<html::Span>();
            let suffix_ref = create_node_ref::<html::Span>();
            let has_suffix_slot = slots.suffix || clearable;
            install_affix_measurement(
                appearance,
                slots.prefix,
                has_suffix_slot,
                prefix_ref,
                suffix_ref,
                affix_style,
            );

            let root_class = {
                let prefix_cls = prefix_cls.clone();
                move || {
                    affix_class_names(
                        &prefix_cls,
                        class.as_deref(),
                        appearance,
                        slots.suffix && clearable && has_value(display.get().as_deref()),
                        focused.get(),
                    )
                }
            };
            let clear_class = format!("{prefix_cls}__clear-icon");
            let clear_icon = move || {
                show_clear_icon(clearable, disabled.get(), display.get().as_deref()).then(|| {
                    view! {
                        <Icon
                            kind=ICON_WRONG_ROUND_FILL
                            theme=Theme::Default
                            class=clear_class.clone()
                            role="button"
                            on_click=handle_reset
                        />
                    }
                })
            };
            let prefix_node = prefix.map(|prefix| {
                view! {
                    <span class=format!("{prefix_cls}__prefix") node_ref=prefix_ref>
                        {prefix.run()}
                    </span>
                }
            });
            let suffix_node = has_suffix_slot.then(|| {
                view! {
                    <span class=format!("{prefix_cls}__suffix") node_ref=suffix_ref>
                        {clear_icon}
                        {suffix.map(|suffix| suffix.run())}
                    </span>
                }
            });
            let underline_node = (bordered == Bordered::Underline && !read_only).then(|| {
                view! {
                    <div>
                        <div class=format!("{prefix_cls}__line")></div>
                        <div class=format!("{prefix_cls}__focus-line")></div>
                    </div>
                }
            });

            view! {
                <div class=root_class style=style>
                    {prefix_node}
                    {render_input()}
                    {suffix_node}
                    {underline_node}
                </div>
            }
            .into_view()
        }
        InputLayout::ReadOnly => view! {
            <div class=read_only_class_names(&prefix_cls, size)>
                {move || fix_controlled_value(display.get().as_deref())}
            </div>
        }
        .into_view(),
        InputLayout::Base => view! {
            <div
                class=move || {
                    input_class_names(&prefix_cls, class.as_deref(), appearance, disabled.get())
                }
                style=style
            >
                {render_input()}
            </div>
        }
        .into_view(),
    }
}

/// Measures the mounted affix spans once and stores the resulting inner padding.
fn install_affix_measurement(
    appearance: InputAppearance,
    has_prefix: bool,
    has_suffix: bool,
    prefix_ref: NodeRef<html::Span>,
    suffix_ref: NodeRef<html::Span>,
    affix_style: RwSignal<Option<String>>,
) {
    create_effect(move |measured: Option<bool>| {
        if measured == Some(true) {
            return true;
        }

        let prefix_node = prefix_ref.get();
        let suffix_node = suffix_ref.get();
        if (has_prefix && prefix_node.is_none()) || (has_suffix && suffix_node.is_none()) {
            return false;
        }

        request_animation_frame(move || {
            let prefix_width = prefix_node.map(|node| f64::from(node.offset_width()));
            let suffix_width = suffix_node.map(|node| f64::from(node.offset_width()));
            affix_style.set(affix_padding(appearance, prefix_width, suffix_width));
        });
        true
    });
}
