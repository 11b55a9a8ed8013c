//! Presentational Leptos component library.
//!
//! Components render markup and CSS class names from declarative props and keep only small
//! pieces of local interaction state (focus, controlled/uncontrolled value, clear button).
//! Every class is derived from a `prefix_cls` such as `zw-input`, following one contract:
//! `{prefix_cls}--{modifier}` for variants, `{prefix_cls}__{element}` for sub-elements, and
//! `{prefix_cls}-{prop}-{n}` for numeric grid placement. Stylesheets are owned by the consumer.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod class_names;
mod components;
mod config;
mod error;
mod icon;
mod tokens;

pub use components::{
    badge_content, fix_controlled_value, parse_flex, use_gutter, Badge, Button, Col, ColFlex,
    Gutter, GutterContext, Input, Row, RowAlign, RowJustify, Tag,
};
pub use config::{provide_ui_config, use_ui_config, ConfigProvider, UiConfig, DEFAULT_NAMESPACE};
pub use error::PropError;
pub use icon::{Icon, ICON_LOADING, ICON_WRONG, ICON_WRONG_ROUND_FILL};
pub use tokens::{
    parse_token, Bordered, ButtonShape, ButtonSize, InputSize, Shape, TagSize, Theme, Token,
};

/// Convenience imports for applications consuming the component set.
pub mod prelude {
    pub use crate::{
        provide_ui_config, Badge, Bordered, Button, ButtonShape, ButtonSize, Col, ColFlex,
        ConfigProvider, Gutter, Icon, Input, InputSize, Row, RowAlign, RowJustify, Shape, Tag,
        TagSize, Theme, UiConfig,
    };
}
