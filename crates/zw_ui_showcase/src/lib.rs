//! Component gallery for visual review of the `zw_ui` class contract.
//!
//! Every widget is mounted with representative prop combinations so stylesheet changes can be
//! checked against real markup. The gallery keeps its interactive state in one serializable
//! snapshot that is echoed back as JSON for debugging.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use serde::{Deserialize, Serialize};
use zw_ui::prelude::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ShowcaseState {
    search: String,
    tags: Vec<String>,
    tag_size: TagSize,
    clicks: u32,
    loading: bool,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            search: "controlled text".to_string(),
            tags: vec!["rust".to_string(), "leptos".to_string(), "wasm".to_string()],
            tag_size: TagSize::Middle,
            clicks: 0,
            loading: false,
        }
    }
}

fn snapshot_json(state: &ShowcaseState) -> String {
    match serde_json::to_string_pretty(state) {
        Ok(json) => json,
        Err(err) => {
            logging::warn!("showcase snapshot serialize failed: {err}");
            String::new()
        }
    }
}

#[component]
/// Gallery page mounting every component.
pub fn ShowcaseApp() -> impl IntoView {
    provide_ui_config(UiConfig::default());

    let state = create_rw_signal(ShowcaseState::default());
    let search = Signal::derive(move || state.get().search);
    let clicks = Signal::derive(move || state.get().clicks);
    let loading = Signal::derive(move || state.get().loading);

    view! {
        <main class="showcase">
            <section>
                <h2>"Grid"</h2>
                <Row gutter=(16, 8) justify=RowJustify::SpaceBetween align=RowAlign::Middle>
                    <Col span=6>"span 6"</Col>
                    <Col span=6 offset=2>"span 6, offset 2"</Col>
                    <Col flex=2>"flex 2"</Col>
                    <Col flex="120px">"flex 120px"</Col>
                    <Col flex="auto" order=-1>"flex auto, first"</Col>
                </Row>
            </section>

            <section>
                <h2>"Input"</h2>
                <Input placeholder="Uncontrolled" default_value="seeded" />
                <Input
                    value=search
                    clearable=true
                    placeholder="Controlled, clearable"
                    on_change=Callback::new(move |ev| {
                        let next = event_target_value(&ev);
                        state.update(|value| value.search = next);
                    })
                />
                <Input
                    size=InputSize::Lg
                    prefix=|| view! { <Icon kind="search" /> }
                    suffix=|| "kg"
                    clearable=true
                    default_value="12"
                />
                <Input bordered=Bordered::Underline placeholder="Underline" />
                <Input addon_before=|| "https://" addon_after=|| ".com" shape=Shape::Round />
                <Input read_only=true value="Read only text" />
                <Input disabled=true bordered=false default_value="Disabled, no border" />
            </section>

            <section>
                <h2>"Tag"</h2>
                <For
                    each=move || state.get().tags
                    key=|tag| tag.clone()
                    children=move |tag| {
                        let label = tag.clone();
                        view! {
                            <Tag
                                theme="primary"
                                size=state.get_untracked().tag_size
                                shape=Shape::Round
                                closable=true
                                title=label.clone()
                                on_close=Callback::new(move |_| {
                                    state.update(|value| value.tags.retain(|existing| *existing != tag));
                                })
                            >
                                {label}
                            </Tag>
                        }
                    }
                />
                <Tag size=TagSize::XSmall shape=Shape::Rect>"static"</Tag>
            </section>

            <section>
                <h2>"Button and Badge"</h2>
                <Badge count=clicks show_zero=true>
                    <Button
                        theme=Theme::Primary
                        icon="plus"
                        loading=loading
                        on_click=Callback::new(move |_| {
                            state.update(|value| value.clicks += 1);
                        })
                    >
                        "Increment"
                    </Button>
                </Badge>
                <Button
                    ghost=true
                    on_click=Callback::new(move |_| {
                        state.update(|value| value.loading = !value.loading);
                    })
                >
                    "Toggle loading"
                </Button>
                <Button shape=ButtonShape::Circle size=ButtonSize::Sm icon="close" />
                <Badge dot=true text="online" />
            </section>

            <section>
                <h2>"Namespaced"</h2>
                <ConfigProvider namespace="acme">
                    <Tag>"acme-tag"</Tag>
                    <Input placeholder="acme-input" />
                </ConfigProvider>
            </section>

            <pre class="showcase__state">{move || snapshot_json(&state.get())}</pre>
        </main>
    }
}

/// Mounts the gallery into the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| view! { <ShowcaseApp /> })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn snapshot_serializes_tokens_as_stylesheet_names() {
        let json = snapshot_json(&ShowcaseState::default());
        assert!(json.contains("\"tag_size\": \"middle\""));

        let restored: ShowcaseState = serde_json::from_str(&json).expect("restore snapshot");
        assert_eq!(restored, ShowcaseState::default());
    }
}
