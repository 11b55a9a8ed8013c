//! Variant tokens shared by component props.
//!
//! Each token renders into a `{prefix_cls}--{token}` modifier class. The string forms are the
//! stylesheet contract, so they also drive `FromStr` and serde.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PropError;

/// Enumerations that render as a class-name modifier.
pub trait Token: Copy + Sized + 'static {
    /// Prop name used in parse errors.
    const PROP: &'static str;
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Stylesheet token for the variant.
    fn token(self) -> &'static str;
}

/// Parses `raw` into a token by exact, case-sensitive match.
///
/// # Errors
///
/// Returns [`PropError::UnknownToken`] when `raw` names no variant.
pub fn parse_token<T: Token>(raw: &str) -> Result<T, PropError> {
    T::ALL
        .iter()
        .copied()
        .find(|candidate| candidate.token() == raw)
        .ok_or_else(|| PropError::UnknownToken {
            prop: T::PROP,
            value: raw.to_string(),
            expected: T::ALL
                .iter()
                .map(|candidate| candidate.token())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

macro_rules! impl_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromStr for $ty {
                type Err = PropError;

                fn from_str(raw: &str) -> Result<Self, Self::Err> {
                    parse_token(raw)
                }
            }
        )*
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Control height for inputs.
pub enum InputSize {
    /// 40px control.
    Lg,
    /// 32px control.
    Md,
    /// 24px control.
    Sm,
}

impl Default for InputSize {
    fn default() -> Self {
        Self::Md
    }
}

impl InputSize {
    /// Rendered control height in pixels.
    pub fn height(self) -> f64 {
        match self {
            Self::Lg => 40.0,
            Self::Md => 32.0,
            Self::Sm => 24.0,
        }
    }
}

impl Token for InputSize {
    const PROP: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Lg, Self::Md, Self::Sm];

    fn token(self) -> &'static str {
        match self {
            Self::Lg => "lg",
            Self::Md => "md",
            Self::Sm => "sm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Corner treatment shared by inputs and tags.
pub enum Shape {
    /// Square corners.
    Rect,
    /// Small corner radius.
    Radius,
    /// Fully rounded ends.
    Round,
}

impl Default for Shape {
    fn default() -> Self {
        Self::Radius
    }
}

impl Token for Shape {
    const PROP: &'static str = "shape";
    const ALL: &'static [Self] = &[Self::Rect, Self::Radius, Self::Round];

    fn token(self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::Radius => "radius",
            Self::Round => "round",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Input frame style.
pub enum Bordered {
    /// Full border.
    Bordered,
    /// No border.
    None,
    /// Bottom line with an animated focus line.
    Underline,
}

impl Default for Bordered {
    fn default() -> Self {
        Self::Bordered
    }
}

impl From<bool> for Bordered {
    fn from(bordered: bool) -> Self {
        if bordered {
            Self::Bordered
        } else {
            Self::None
        }
    }
}

impl Token for Bordered {
    const PROP: &'static str = "bordered";
    const ALL: &'static [Self] = &[Self::Bordered, Self::None, Self::Underline];

    fn token(self) -> &'static str {
        match self {
            Self::Bordered => "bordered",
            Self::None => "none",
            Self::Underline => "underline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Tag sizes.
pub enum TagSize {
    /// Large tag.
    Large,
    /// Medium tag.
    Middle,
    /// Small tag.
    Small,
    /// Extra small tag.
    XSmall,
}

impl Token for TagSize {
    const PROP: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Large, Self::Middle, Self::Small, Self::XSmall];

    fn token(self) -> &'static str {
        match self {
            Self::Large => "large",
            Self::Middle => "middle",
            Self::Small => "small",
            Self::XSmall => "xsmall",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Semantic color themes for buttons and icons.
pub enum Theme {
    /// Neutral theme.
    Default,
    /// Brand emphasis.
    Primary,
    /// Success state.
    Success,
    /// Warning state.
    Warning,
    /// Destructive state.
    Danger,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Default
    }
}

impl Token for Theme {
    const PROP: &'static str = "theme";
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Primary,
        Self::Success,
        Self::Warning,
        Self::Danger,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Button sizes.
pub enum ButtonSize {
    /// Large button.
    Lg,
    /// Default button.
    Md,
    /// Dense button.
    Sm,
    /// Extra dense button.
    Xs,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl Token for ButtonSize {
    const PROP: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Lg, Self::Md, Self::Sm, Self::Xs];

    fn token(self) -> &'static str {
        match self {
            Self::Lg => "lg",
            Self::Md => "md",
            Self::Sm => "sm",
            Self::Xs => "xs",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Button outline shapes.
pub enum ButtonShape {
    /// Square corners.
    Rect,
    /// Small corner radius.
    Radius,
    /// Pill shape.
    Round,
    /// Circular icon button.
    Circle,
}

impl Default for ButtonShape {
    fn default() -> Self {
        Self::Radius
    }
}

impl Token for ButtonShape {
    const PROP: &'static str = "shape";
    const ALL: &'static [Self] = &[Self::Rect, Self::Radius, Self::Round, Self::Circle];

    fn token(self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::Radius => "radius",
            Self::Round => "round",
            Self::Circle => "circle",
        }
    }
}

impl_from_str!(InputSize, Shape, Bordered, TagSize, Theme, ButtonSize, ButtonShape);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_stylesheet_tokens() {
        assert_eq!("lg".parse::<InputSize>(), Ok(InputSize::Lg));
        assert_eq!("xsmall".parse::<TagSize>(), Ok(TagSize::XSmall));
        assert_eq!("underline".parse::<Bordered>(), Ok(Bordered::Underline));
        assert_eq!("circle".parse::<ButtonShape>(), Ok(ButtonShape::Circle));
    }

    #[test]
    fn rejects_unknown_tokens_with_expected_list() {
        let err = "huge".parse::<TagSize>().unwrap_err();
        assert_eq!(
            err,
            PropError::UnknownToken {
                prop: "size",
                value: "huge".to_string(),
                expected: "large, middle, small, xsmall".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "unknown size token `huge` (expected one of: large, middle, small, xsmall)"
        );
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("Radius".parse::<Shape>().is_err());
    }

    #[test]
    fn serde_uses_the_same_tokens() {
        assert_eq!(serde_json::to_string(&TagSize::XSmall).unwrap(), "\"xsmall\"");
        assert_eq!(
            serde_json::from_str::<Bordered>("\"none\"").unwrap(),
            Bordered::None
        );
        for theme in Theme::ALL {
            let json = serde_json::to_string(theme).unwrap();
            assert_eq!(json, format!("\"{}\"", theme.token()));
        }
    }

    #[test]
    fn bool_bordered_maps_to_frame_styles() {
        assert_eq!(Bordered::from(true), Bordered::Bordered);
        assert_eq!(Bordered::from(false), Bordered::None);
    }

    #[test]
    fn input_heights_follow_size() {
        assert_eq!(InputSize::Lg.height(), 40.0);
        assert_eq!(InputSize::default().height(), 32.0);
        assert_eq!(InputSize::Sm.height(), 24.0);
    }
}
