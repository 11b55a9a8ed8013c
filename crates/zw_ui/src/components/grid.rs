use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
/// Spacing between grid columns, in pixels.
pub struct Gutter {
    /// Space between columns in a row.
    pub horizontal: f64,
    /// Space between wrapped lines.
    pub vertical: f64,
}

impl Gutter {
    /// Builds a gutter, clamping negative or non-finite lengths to zero.
    pub fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal: sanitize_gutter(horizontal, "horizontal"),
            vertical: sanitize_gutter(vertical, "vertical"),
        }
    }

    /// Half gutters `(x, y)` applied on each side of a column.
    pub fn half(self) -> (f64, f64) {
        (self.horizontal / 2.0, self.vertical / 2.0)
    }
}

fn sanitize_gutter(value: f64, axis: &str) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        logging::warn!("invalid {axis} gutter {value}, using 0");
        0.0
    }
}

impl From<f64> for Gutter {
    fn from(horizontal: f64) -> Self {
        Self::new(horizontal, 0.0)
    }
}

impl From<i32> for Gutter {
    fn from(horizontal: i32) -> Self {
        Self::new(f64::from(horizontal), 0.0)
    }
}

impl From<(f64, f64)> for Gutter {
    fn from((horizontal, vertical): (f64, f64)) -> Self {
        Self::new(horizontal, vertical)
    }
}

impl From<(i32, i32)> for Gutter {
    fn from((horizontal, vertical): (i32, i32)) -> Self {
        Self::new(f64::from(horizontal), f64::from(vertical))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
/// Context value a [`Row`] hands to its columns.
pub struct GutterContext(pub Gutter);

/// Gutter of the nearest enclosing [`Row`], or zero outside any row.
pub fn use_gutter() -> Gutter {
    use_context::<GutterContext>()
        .map(|GutterContext(gutter)| gutter)
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Main-axis distribution of columns in a row.
pub enum RowJustify {
    /// Pack to the start.
    Start,
    /// Center columns.
    Center,
    /// Pack to the end.
    End,
    /// Even space between columns.
    SpaceBetween,
    /// Even space around columns.
    SpaceAround,
}

impl Token for RowJustify {
    const PROP: &'static str = "justify";
    const ALL: &'static [Self] = &[
        Self::Start,
        Self::Center,
        Self::End,
        Self::SpaceBetween,
        Self::SpaceAround,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
            Self::SpaceBetween => "space-between",
            Self::SpaceAround => "space-around",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Cross-axis alignment of columns in a row.
pub enum RowAlign {
    /// Align to the top.
    Top,
    /// Vertically center.
    Middle,
    /// Align to the bottom.
    Bottom,
}

impl Token for RowAlign {
    const PROP: &'static str = "align";
    const ALL: &'static [Self] = &[Self::Top, Self::Middle, Self::Bottom];

    fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

impl FromStr for RowJustify {
    type Err = PropError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_token(raw)
    }
}

impl FromStr for RowAlign {
    type Err = PropError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_token(raw)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Value of a column's `flex` prop.
pub enum ColFlex {
    /// Grow and shrink factor, rendered as `n n auto`.
    Grow(f64),
    /// CSS length basis (`0 0 120px`) or a raw flex shorthand passed through.
    Raw(String),
}

impl ColFlex {
    fn is_set(&self) -> bool {
        match self {
            Self::Grow(factor) => *factor != 0.0 && !factor.is_nan(),
            Self::Raw(raw) => !raw.is_empty(),
        }
    }
}

impl From<f64> for ColFlex {
    fn from(factor: f64) -> Self {
        Self::Grow(factor)
    }
}

impl From<i32> for ColFlex {
    fn from(factor: i32) -> Self {
        Self::Grow(f64::from(factor))
    }
}

impl From<&str> for ColFlex {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for ColFlex {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

const FLEX_BASIS_UNITS: [&str; 4] = ["px", "rem", "em", "%"];

/// Expands a column `flex` prop into the CSS `flex` shorthand.
pub fn parse_flex(flex: &ColFlex) -> String {
    match flex {
        ColFlex::Grow(factor) => format!("{factor} {factor} auto"),
        ColFlex::Raw(raw) if is_flex_basis(raw) => format!("0 0 {raw}"),
        ColFlex::Raw(raw) => raw.clone(),
    }
}

// Matches `^\d+(\.\d+)?(px|em|rem|%)$`.
fn is_flex_basis(raw: &str) -> bool {
    FLEX_BASIS_UNITS
        .iter()
        .any(|unit| raw.strip_suffix(unit).is_some_and(is_unsigned_decimal))
}

fn is_unsigned_decimal(number: &str) -> bool {
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    match number.split_once('.') {
        Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
        None => all_digits(number),
    }
}

pub(crate) fn row_class_names(
    prefix_cls: &str,
    justify: Option<RowJustify>,
    align: Option<RowAlign>,
    no_wrap: bool,
    class: Option<&str>,
) -> String {
    let mut classes = ClassNames::new().push(prefix_cls);
    if let Some(justify) = justify {
        classes = classes.push(format!("{prefix_cls}-justify-{}", justify.token()));
    }
    if let Some(align) = align {
        classes = classes.push(format!("{prefix_cls}-align-{}", align.token()));
    }
    classes
        .push_if(format!("{prefix_cls}-no-wrap"), no_wrap)
        .extend_raw(class)
        .build()
}

pub(crate) fn row_style(gutter: Gutter, style: Option<&str>) -> Option<String> {
    let (x, y) = gutter.half();
    let mut decls = StyleDecls::new();
    if x > 0.0 {
        decls = decls.push_px("margin-left", -x).push_px("margin-right", -x);
    }
    if y > 0.0 {
        decls = decls.push_px("margin-top", -y).push_px("margin-bottom", -y);
    }
    decls.extend_raw(style).build()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Numeric placement props of a column.
pub(crate) struct ColPlacement {
    pub span: Option<u32>,
    pub offset: Option<u32>,
    pub push: Option<u32>,
    pub pull: Option<u32>,
    pub order: Option<i32>,
}

pub(crate) fn col_class_names(
    prefix_cls: &str,
    placement: ColPlacement,
    class: Option<&str>,
) -> String {
    let numbered = |name: &str, value: Option<String>| {
        value.map(|value| format!("{prefix_cls}-{name}-{value}"))
    };

    [
        numbered("span", placement.span.map(|v| v.to_string())),
        numbered("offset", placement.offset.map(|v| v.to_string())),
        numbered("push", placement.push.map(|v| v.to_string())),
        numbered("pull", placement.pull.map(|v| v.to_string())),
        numbered("order", placement.order.map(|v| v.to_string())),
    ]
    .into_iter()
    .flatten()
    .fold(
        ClassNames::new().push(prefix_cls).extend_raw(class),
        |classes, token| classes.push(token),
    )
    .build()
}

pub(crate) fn col_style(
    gutter: Gutter,
    flex: Option<&ColFlex>,
    style: Option<&str>,
) -> Option<String> {
    let (x, y) = gutter.half();
    let mut decls = StyleDecls::new();
    if x > 0.0 {
        decls = decls.push_px("padding-left", x).push_px("padding-right", x);
    }
    if y > 0.0 {
        decls = decls.push_px("padding-top", y).push_px("padding-bottom", y);
    }
    if let Some(flex) = flex.filter(|flex| flex.is_set()) {
        decls = decls.push("flex", parse_flex(flex));
    }
    decls.extend_raw(style).build()
}

#[component]
/// Flex row that spaces its [`Col`] children by `gutter`.
pub fn Row(
    #[prop(optional, into)] prefix_cls: Option<String>,
    #[prop(optional, into)] gutter: Gutter,
    #[prop(optional)] justify: Option<RowJustify>,
    #[prop(optional)] align: Option<RowAlign>,
    #[prop(optional)] no_wrap: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    children: Children,
) -> impl IntoView {
    let prefix_cls = resolve_prefix_cls(prefix_cls, "row");
    let class = row_class_names(&prefix_cls, justify, align, no_wrap, class.as_deref());
    let style = row_style(gutter, style.as_deref());

    view! {
        <div class=class style=style>
            <Provider value=GutterContext(gutter)>{children()}</Provider>
        </div>
    }
}

#[component]
/// Grid column. Reads the gutter of the enclosing [`Row`].
pub fn Col(
    #[prop(optional, into)] prefix_cls: Option<String>,
    #[prop(optional)] span: Option<u32>,
    #[prop(optional)] offset: Option<u32>,
    #[prop(optional)] push: Option<u32>,
    #[prop(optional)] pull: Option<u32>,
    #[prop(optional)] order: Option<i32>,
    #[prop(optional, into)] flex: Option<ColFlex>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let prefix_cls = resolve_prefix_cls(prefix_cls, "col");
    let placement = ColPlacement {
        span,
        offset,
        push,
        pull,
        order,
    };
    let class = col_class_names(&prefix_cls, placement, class.as_deref());
    let style = col_style(use_gutter(), flex.as_ref(), style.as_deref());

    view! {
        <div class=class style=style>
            {children.map(|children| children())}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn numeric_flex_grows_and_shrinks() {
        assert_eq!(parse_flex(&ColFlex::from(2)), "2 2 auto");
        assert_eq!(parse_flex(&ColFlex::from(1.5)), "1.5 1.5 auto");
    }

    #[test]
    fn length_flex_becomes_fixed_basis() {
        assert_eq!(parse_flex(&"100px".into()), "0 0 100px");
        assert_eq!(parse_flex(&"12.5%".into()), "0 0 12.5%");
        assert_eq!(parse_flex(&"3rem".into()), "0 0 3rem");
        assert_eq!(parse_flex(&"2em".into()), "0 0 2em");
    }

    #[test]
    fn other_flex_strings_pass_through() {
        assert_eq!(parse_flex(&"auto".into()), "auto");
        assert_eq!(parse_flex(&"none".into()), "none");
        assert_eq!(parse_flex(&"1 1 200px".into()), "1 1 200px");
        assert_eq!(parse_flex(&".5px".into()), ".5px");
        assert_eq!(parse_flex(&"5.px".into()), "5.px");
        assert_eq!(parse_flex(&"-5px".into()), "-5px");
        assert_eq!(parse_flex(&"10vw".into()), "10vw");
    }

    #[test]
    fn col_classes_include_every_supplied_placement() {
        let placement = ColPlacement {
            span: Some(6),
            offset: Some(0),
            push: None,
            pull: Some(2),
            order: Some(-1),
        };

        assert_eq!(
            col_class_names("zw-col", placement, Some("my-col")),
            "zw-col my-col zw-col-span-6 zw-col-offset-0 zw-col-pull-2 zw-col-order--1"
        );
    }

    #[test]
    fn bare_col_has_only_prefix() {
        assert_eq!(col_class_names("zw-col", ColPlacement::default(), None), "zw-col");
    }

    #[test]
    fn col_padding_is_half_the_gutter() {
        assert_eq!(
            col_style(Gutter::from((16, 24)), None, None).as_deref(),
            Some(
                "padding-left: 8px; padding-right: 8px; padding-top: 12px; padding-bottom: 12px;"
            )
        );
        assert_eq!(
            col_style(Gutter::from(15), None, None).as_deref(),
            Some("padding-left: 7.5px; padding-right: 7.5px;")
        );
    }

    #[test]
    fn col_without_gutter_or_flex_has_no_style() {
        assert_eq!(col_style(Gutter::default(), None, None), None);
        assert_eq!(col_style(Gutter::default(), Some(&ColFlex::from(0)), None), None);
        assert_eq!(col_style(Gutter::default(), Some(&"".into()), None), None);
    }

    #[test]
    fn col_user_style_follows_computed_style() {
        assert_eq!(
            col_style(Gutter::default(), Some(&"auto".into()), Some("flex: none")).as_deref(),
            Some("flex: auto; flex: none;")
        );
    }

    #[test]
    fn row_pulls_columns_out_by_half_gutter() {
        assert_eq!(
            row_style(Gutter::from((20, 10)), Some("background: red")).as_deref(),
            Some(
                "margin-left: -10px; margin-right: -10px; margin-top: -5px; margin-bottom: -5px; background: red;"
            )
        );
        assert_eq!(row_style(Gutter::default(), None), None);
    }

    #[test]
    fn row_classes_carry_layout_modifiers() {
        assert_eq!(
            row_class_names(
                "zw-row",
                Some(RowJustify::SpaceBetween),
                Some(RowAlign::Middle),
                true,
                Some("toolbar"),
            ),
            "zw-row zw-row-justify-space-between zw-row-align-middle zw-row-no-wrap toolbar"
        );
        assert_eq!(row_class_names("zw-row", None, None, false, None), "zw-row");
    }

    #[test]
    fn negative_gutters_are_clamped() {
        let gutter = Gutter::new(-8.0, f64::NAN);
        assert_eq!(gutter, Gutter::default());
    }

    #[test]
    fn justify_tokens_parse() {
        assert_eq!("space-around".parse::<RowJustify>(), Ok(RowJustify::SpaceAround));
        assert!("stretch".parse::<RowAlign>().is_err());
    }
}
