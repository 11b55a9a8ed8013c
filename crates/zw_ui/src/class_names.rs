//! Conditional class-list and inline-style composition shared by every component.
//!
//! Components describe their root markup as an ordered list of class tokens and style
//! declarations. Consumer-supplied `class`/`style` text is merged in at the position the
//! component chooses, so variant hooks stay stable for stylesheets.

use std::fmt::Write as _;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered list of CSS class tokens.
pub struct ClassNames {
    tokens: Vec<String>,
}

impl ClassNames {
    /// Creates an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `token` unless it is empty.
    pub fn push(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        if !token.is_empty() {
            self.tokens.push(token);
        }
        self
    }

    /// Appends `token` only when `condition` holds.
    pub fn push_if(self, token: impl Into<String>, condition: bool) -> Self {
        if condition {
            self.push(token)
        } else {
            self
        }
    }

    /// Appends every whitespace-separated token of a consumer `class` attribute.
    pub fn extend_raw(mut self, raw: Option<&str>) -> Self {
        if let Some(raw) = raw {
            self.tokens
                .extend(raw.split_whitespace().map(ToString::to_string));
        }
        self
    }

    /// Returns `true` when no token has been added.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Renders the space separated attribute value.
    pub fn build(&self) -> String {
        self.tokens.join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Ordered list of inline style declarations.
pub struct StyleDecls {
    decls: Vec<(&'static str, String)>,
    raw: Option<String>,
}

impl StyleDecls {
    /// Creates an empty declaration list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `property: value`.
    pub fn push(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.decls.push((property, value.into()));
        self
    }

    /// Appends `property: {value}px`.
    pub fn push_px(self, property: &'static str, value: f64) -> Self {
        self.push(property, px(value))
    }

    /// Appends consumer style text. It is rendered after every typed declaration.
    pub fn extend_raw(mut self, raw: Option<&str>) -> Self {
        let raw = raw.map(str::trim).filter(|raw| !raw.is_empty());
        if let Some(raw) = raw {
            let raw = raw.trim_end_matches(';');
            match self.raw.as_mut() {
                Some(existing) => {
                    existing.push_str("; ");
                    existing.push_str(raw);
                }
                None => self.raw = Some(raw.to_string()),
            }
        }
        self
    }

    /// Returns `true` when no declaration has been added.
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty() && self.raw.is_none()
    }

    /// Renders the attribute value, or `None` so no `style` attribute is emitted.
    pub fn build(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let mut out = String::new();
        for (property, value) in &self.decls {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "{property}: {value};");
        }
        if let Some(raw) = self.raw.as_deref() {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "{raw};");
        }
        Some(out)
    }
}

/// Formats a pixel length the way the browser serializes it (`8px`, `7.5px`, `-4px`).
pub fn px(value: f64) -> String {
    format!("{value}px")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn conditional_tokens_keep_insertion_order() {
        let classes = ClassNames::new()
            .push("zw-tag")
            .extend_raw(Some("  custom   extra "))
            .push_if("zw-tag--large", true)
            .push_if("zw-tag--round", false)
            .push("");

        assert_eq!(classes.build(), "zw-tag custom extra zw-tag--large");
    }

    #[test]
    fn empty_class_list_renders_empty_string() {
        let classes = ClassNames::new().extend_raw(None).push_if("x", false);
        assert!(classes.is_empty());
        assert_eq!(classes.build(), "");
    }

    #[test]
    fn pixel_values_drop_trailing_zero_fraction() {
        assert_eq!(px(8.0), "8px");
        assert_eq!(px(7.5), "7.5px");
        assert_eq!(px(-12.0), "-12px");
    }

    #[test]
    fn consumer_style_is_rendered_last() {
        let style = StyleDecls::new()
            .push_px("padding-left", 8.0)
            .extend_raw(Some("color: red;"))
            .push("flex", "1 1 auto");

        assert_eq!(
            style.build().as_deref(),
            Some("padding-left: 8px; flex: 1 1 auto; color: red;")
        );
    }

    #[test]
    fn empty_style_emits_no_attribute() {
        assert_eq!(StyleDecls::new().extend_raw(Some("   ")).build(), None);
    }
}
