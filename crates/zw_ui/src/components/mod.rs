//! Component implementations.
//!
//! Each component keeps the decisions that shape its markup (class lists, inline styles, layout
//! selection) in plain functions beside the `#[component]` so they are testable without a DOM.

use std::str::FromStr;

use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::class_names::{ClassNames, StyleDecls};
use crate::config::resolve_prefix_cls;
use crate::icon::{Icon, ICON_LOADING, ICON_WRONG, ICON_WRONG_ROUND_FILL};
use crate::tokens::{
    parse_token, Bordered, ButtonShape, ButtonSize, InputSize, Shape, TagSize, Theme, Token,
};
use crate::PropError;

mod badge;
mod button;
mod grid;
mod input;
mod tag;

pub use badge::{badge_content, Badge};
pub use button::Button;
pub use grid::{
    parse_flex, use_gutter, Col, ColFlex, Gutter, GutterContext, Row, RowAlign, RowJustify,
};
pub use input::{fix_controlled_value, Input};
pub use tag::Tag;
