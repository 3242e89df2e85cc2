//! Class vocabulary of Tailwind CSS v4.
//!
//! Pure data. Groups sharing a first class-name part (`text-lg`, `text-left`,
//! `text-red-500`) are tried in the order they are added here, so the order
//! inside each section is significant.

use indexmap::IndexMap;

use crate::config::{ClassDefinition, ClassGroup, ConflictMap, MergeConfig};
use crate::validator;
use crate::validators::*;

const ANY: Validator = validator!(is_any);
const ANY_NON_ARBITRARY: Validator = validator!(is_any_non_arbitrary);
const FRACTION: Validator = validator!(is_fraction);
const NUMBER: Validator = validator!(is_number);
const INTEGER: Validator = validator!(is_integer);
const PERCENT: Validator = validator!(is_percent);
const TSHIRT_SIZE: Validator = validator!(is_tshirt_size);
const ARBITRARY_VALUE: Validator = validator!(is_arbitrary_value);
const ARBITRARY_VARIABLE: Validator = validator!(is_arbitrary_variable);
const ARBITRARY_SIZE: Validator = validator!(is_arbitrary_size);
const ARBITRARY_LENGTH: Validator = validator!(is_arbitrary_length);
const ARBITRARY_NUMBER: Validator = validator!(is_arbitrary_number);
const ARBITRARY_POSITION: Validator = validator!(is_arbitrary_position);
const ARBITRARY_IMAGE: Validator = validator!(is_arbitrary_image);
const ARBITRARY_SHADOW: Validator = validator!(is_arbitrary_shadow);
const ARBITRARY_VARIABLE_LENGTH: Validator = validator!(is_arbitrary_variable_length);
const ARBITRARY_VARIABLE_FAMILY_NAME: Validator = validator!(is_arbitrary_variable_family_name);
const ARBITRARY_VARIABLE_POSITION: Validator = validator!(is_arbitrary_variable_position);
const ARBITRARY_VARIABLE_SIZE: Validator = validator!(is_arbitrary_variable_size);
const ARBITRARY_VARIABLE_IMAGE: Validator = validator!(is_arbitrary_variable_image);
const ARBITRARY_VARIABLE_SHADOW: Validator = validator!(is_arbitrary_variable_shadow);

macro_rules! defs {
    ($($item:expr),* $(,)?) => {
        vec![$(ClassDefinition::from($item)),*]
    };
}

fn theme(scale: &str) -> ClassDefinition {
    ClassDefinition::theme(scale)
}

fn obj(key: &str, group: ClassGroup) -> ClassDefinition {
    ClassDefinition::object([(key, group)])
}

/// A group whose classes all start with `key`
fn keyed(key: &str, group: ClassGroup) -> ClassGroup {
    vec![obj(key, group)]
}

fn add(groups: &mut IndexMap<String, ClassGroup>, class_group_id: &str, group: ClassGroup) {
    groups.insert(class_group_id.to_string(), group);
}

fn arbitrary() -> ClassGroup {
    defs![ARBITRARY_VARIABLE, ARBITRARY_VALUE]
}

fn scale_break() -> ClassGroup {
    defs!["auto", "avoid", "all", "avoid-page", "page", "left", "right", "column"]
}

fn scale_position() -> ClassGroup {
    defs![
        "center", "top", "bottom", "left", "right", "top-left", "left-top", "top-right", "right-top",
        "bottom-right", "right-bottom", "bottom-left", "left-bottom",
    ]
}

fn scale_position_with_arbitrary() -> ClassGroup {
    [scale_position(), arbitrary()].concat()
}

fn scale_overflow() -> ClassGroup {
    defs!["auto", "hidden", "clip", "visible", "scroll"]
}

fn scale_overscroll() -> ClassGroup {
    defs!["auto", "contain", "none"]
}

fn scale_unambiguous_spacing() -> ClassGroup {
    defs![ARBITRARY_VARIABLE, ARBITRARY_VALUE, theme("spacing")]
}

fn scale_inset() -> ClassGroup {
    [defs![FRACTION, "full", "auto"], scale_unambiguous_spacing()].concat()
}

fn scale_grid_template_cols_rows() -> ClassGroup {
    defs![INTEGER, "none", "subgrid", ARBITRARY_VARIABLE, ARBITRARY_VALUE]
}

fn scale_grid_col_row_start_and_end() -> ClassGroup {
    defs![
        "auto",
        obj("span", defs!["full", INTEGER, ARBITRARY_VARIABLE, ARBITRARY_VALUE]),
        INTEGER,
        ARBITRARY_VARIABLE,
        ARBITRARY_VALUE,
    ]
}

fn scale_grid_col_row_start_or_end() -> ClassGroup {
    defs![INTEGER, "auto", ARBITRARY_VARIABLE, ARBITRARY_VALUE]
}

fn scale_grid_auto_cols_rows() -> ClassGroup {
    defs!["auto", "min", "max", "fr", ARBITRARY_VARIABLE, ARBITRARY_VALUE]
}

fn scale_align_primary_axis() -> ClassGroup {
    defs![
        "start", "end", "center", "between", "around", "evenly", "stretch", "baseline", "center-safe",
        "end-safe",
    ]
}

fn scale_align_secondary_axis() -> ClassGroup {
    defs!["start", "end", "center", "stretch", "center-safe", "end-safe"]
}

fn scale_margin() -> ClassGroup {
    [defs!["auto"], scale_unambiguous_spacing()].concat()
}

fn scale_sizing() -> ClassGroup {
    [
        defs![FRACTION, "auto", "full", "dvw", "dvh", "lvw", "lvh", "svw", "svh", "min", "max", "fit"],
        scale_unambiguous_spacing(),
    ]
    .concat()
}

fn scale_color() -> ClassGroup {
    defs![theme("color"), ARBITRARY_VARIABLE, ARBITRARY_VALUE]
}

fn scale_bg_position() -> ClassGroup {
    [
        scale_position(),
        defs![
            ARBITRARY_VARIABLE_POSITION,
            ARBITRARY_POSITION,
            obj("position", arbitrary()),
        ],
    ]
    .concat()
}

fn scale_bg_repeat() -> ClassGroup {
    defs!["no-repeat", obj("repeat", defs!["", "x", "y", "space", "round"])]
}

fn scale_bg_size() -> ClassGroup {
    defs![
        "auto",
        "cover",
        "contain",
        ARBITRARY_VARIABLE_SIZE,
        ARBITRARY_SIZE,
        obj("size", arbitrary()),
    ]
}

fn scale_gradient_stop_position() -> ClassGroup {
    defs![PERCENT, ARBITRARY_VARIABLE_LENGTH, ARBITRARY_LENGTH]
}

fn scale_radius() -> ClassGroup {
    defs!["", "none", "full", theme("radius"), ARBITRARY_VARIABLE, ARBITRARY_VALUE]
}

fn scale_border_width() -> ClassGroup {
    defs!["", NUMBER, ARBITRARY_VARIABLE_LENGTH, ARBITRARY_LENGTH]
}

fn scale_line_style() -> ClassGroup {
    defs!["solid", "dashed", "dotted", "double"]
}

fn scale_blend_mode() -> ClassGroup {
    defs![
        "normal", "multiply", "screen", "overlay", "darken", "lighten", "color-dodge", "color-burn",
        "hard-light", "soft-light", "difference", "exclusion", "hue", "saturation", "color", "luminosity",
    ]
}

fn scale_mask_image_position() -> ClassGroup {
    defs![NUMBER, PERCENT, ARBITRARY_VARIABLE_POSITION, ARBITRARY_POSITION]
}

fn scale_blur() -> ClassGroup {
    defs!["", "none", theme("blur"), ARBITRARY_VARIABLE, ARBITRARY_VALUE]
}

fn scale_rotate() -> ClassGroup {
    defs!["none", NUMBER, ARBITRARY_VARIABLE, ARBITRARY_VALUE]
}

fn scale_scale() -> ClassGroup {
    defs!["none", NUMBER, ARBITRARY_VARIABLE, ARBITRARY_VALUE]
}

fn scale_skew() -> ClassGroup {
    defs![NUMBER, ARBITRARY_VARIABLE, ARBITRARY_VALUE]
}

fn scale_translate() -> ClassGroup {
    [defs![FRACTION, "full"], scale_unambiguous_spacing()].concat()
}

/// Number, arbitrary variable or arbitrary value, the most common filter scale
fn scale_number_or_arbitrary() -> ClassGroup {
    [defs![NUMBER], arbitrary()].concat()
}

/// Same as [`scale_number_or_arbitrary`] but the bare utility is valid too
fn scale_optional_number() -> ClassGroup {
    [defs!["", NUMBER], arbitrary()].concat()
}

/// The default configuration: Tailwind CSS v4 utilities, cache of 500 results.
pub fn get_default_config() -> MergeConfig {
    MergeConfig {
        theme: default_theme(),
        class_groups: default_class_groups(),
        conflicting_class_groups: default_conflicting_class_groups(),
        conflicting_class_group_modifiers: conflicts(&[("font-size", &["leading"])]),
        order_sensitive_modifiers: [
            "*", "**", "after", "backdrop", "before", "details-content", "file", "first-letter",
            "first-line", "marker", "placeholder", "selection",
        ]
        .iter()
        .map(|modifier| modifier.to_string())
        .collect(),
        ..MergeConfig::default()
    }
}

fn default_theme() -> IndexMap<String, ClassGroup> {
    let mut theme = IndexMap::new();
    add(&mut theme, "animate", defs!["spin", "ping", "pulse", "bounce"]);
    add(&mut theme, "aspect", defs!["video"]);
    add(&mut theme, "blur", defs![TSHIRT_SIZE]);
    add(&mut theme, "breakpoint", defs![TSHIRT_SIZE]);
    add(&mut theme, "color", defs![ANY]);
    add(&mut theme, "container", defs![TSHIRT_SIZE]);
    add(&mut theme, "drop-shadow", defs![TSHIRT_SIZE]);
    add(&mut theme, "ease", defs!["in", "out", "in-out"]);
    add(&mut theme, "font", defs![ANY_NON_ARBITRARY]);
    add(
        &mut theme,
        "font-weight",
        defs!["thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black"],
    );
    add(&mut theme, "inset-shadow", defs![TSHIRT_SIZE]);
    add(&mut theme, "leading", defs!["none", "tight", "snug", "normal", "relaxed", "loose"]);
    add(
        &mut theme,
        "perspective",
        defs!["dramatic", "near", "normal", "midrange", "distant", "none"],
    );
    add(&mut theme, "radius", defs![TSHIRT_SIZE]);
    add(&mut theme, "shadow", defs![TSHIRT_SIZE]);
    add(&mut theme, "spacing", defs!["px", NUMBER]);
    add(&mut theme, "text", defs![TSHIRT_SIZE]);
    add(&mut theme, "text-shadow", defs![TSHIRT_SIZE]);
    add(&mut theme, "tracking", defs!["tighter", "tight", "normal", "wide", "wider", "widest"]);
    theme
}

fn default_class_groups() -> IndexMap<String, ClassGroup> {
    let mut groups = IndexMap::new();
    layout(&mut groups);
    flexbox_and_grid(&mut groups);
    spacing(&mut groups);
    sizing(&mut groups);
    typography(&mut groups);
    backgrounds(&mut groups);
    borders(&mut groups);
    effects(&mut groups);
    masks(&mut groups);
    filters(&mut groups);
    tables(&mut groups);
    transitions_and_animation(&mut groups);
    transforms(&mut groups);
    interactivity(&mut groups);
    svg(&mut groups);
    accessibility(&mut groups);
    groups
}

fn layout(g: &mut IndexMap<String, ClassGroup>) {
    add(
        g,
        "aspect",
        keyed(
            "aspect",
            defs!["auto", "square", FRACTION, ARBITRARY_VALUE, ARBITRARY_VARIABLE, theme("aspect")],
        ),
    );
    add(g, "container", defs!["container"]);
    add(
        g,
        "columns",
        keyed("columns", defs![NUMBER, ARBITRARY_VALUE, ARBITRARY_VARIABLE, "auto", theme("container")]),
    );
    add(g, "break-after", keyed("break-after", scale_break()));
    add(g, "break-before", keyed("break-before", scale_break()));
    add(
        g,
        "break-inside",
        keyed("break-inside", defs!["auto", "avoid", "avoid-page", "avoid-column"]),
    );
    add(g, "box-decoration", keyed("box-decoration", defs!["slice", "clone"]));
    add(g, "box", keyed("box", defs!["border", "content"]));
    add(
        g,
        "display",
        defs![
            "block", "inline-block", "inline", "flex", "inline-flex", "table", "inline-table",
            "table-caption", "table-cell", "table-column", "table-column-group", "table-footer-group",
            "table-header-group", "table-row-group", "table-row", "flow-root", "grid", "inline-grid",
            "contents", "list-item", "hidden",
        ],
    );
    add(g, "sr", defs!["sr-only", "not-sr-only"]);
    add(g, "float", keyed("float", defs!["right", "left", "none", "start", "end"]));
    add(g, "clear", keyed("clear", defs!["left", "right", "both", "none", "start", "end"]));
    add(g, "isolation", defs!["isolate", "isolation-auto"]);
    add(
        g,
        "object-fit",
        keyed("object", defs!["contain", "cover", "fill", "none", "scale-down"]),
    );
    add(g, "object-position", keyed("object", scale_position_with_arbitrary()));
    add(g, "overflow", keyed("overflow", scale_overflow()));
    add(g, "overflow-x", keyed("overflow-x", scale_overflow()));
    add(g, "overflow-y", keyed("overflow-y", scale_overflow()));
    add(g, "overscroll", keyed("overscroll", scale_overscroll()));
    add(g, "overscroll-x", keyed("overscroll-x", scale_overscroll()));
    add(g, "overscroll-y", keyed("overscroll-y", scale_overscroll()));
    add(g, "position", defs!["static", "fixed", "absolute", "relative", "sticky"]);
    for side in ["inset", "inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"] {
        add(g, side, keyed(side, scale_inset()));
    }
    add(g, "visibility", defs!["visible", "invisible", "collapse"]);
    add(g, "z", keyed("z", defs![INTEGER, "auto", ARBITRARY_VARIABLE, ARBITRARY_VALUE]));
}

fn flexbox_and_grid(g: &mut IndexMap<String, ClassGroup>) {
    add(
        g,
        "basis",
        keyed(
            "basis",
            [defs![FRACTION, "full", "auto", theme("container")], scale_unambiguous_spacing()].concat(),
        ),
    );
    add(g, "flex-direction", keyed("flex", defs!["row", "row-reverse", "col", "col-reverse"]));
    add(g, "flex-wrap", keyed("flex", defs!["nowrap", "wrap", "wrap-reverse"]));
    add(
        g,
        "flex",
        keyed("flex", defs![NUMBER, FRACTION, "auto", "initial", "none", ARBITRARY_VALUE]),
    );
    add(g, "grow", keyed("grow", scale_optional_number()));
    add(g, "shrink", keyed("shrink", scale_optional_number()));
    add(
        g,
        "order",
        keyed("order", defs![INTEGER, "first", "last", "none", ARBITRARY_VARIABLE, ARBITRARY_VALUE]),
    );
    add(g, "grid-cols", keyed("grid-cols", scale_grid_template_cols_rows()));
    add(g, "col-start-end", keyed("col", scale_grid_col_row_start_and_end()));
    add(g, "col-start", keyed("col-start", scale_grid_col_row_start_or_end()));
    add(g, "col-end", keyed("col-end", scale_grid_col_row_start_or_end()));
    add(g, "grid-rows", keyed("grid-rows", scale_grid_template_cols_rows()));
    add(g, "row-start-end", keyed("row", scale_grid_col_row_start_and_end()));
    add(g, "row-start", keyed("row-start", scale_grid_col_row_start_or_end()));
    add(g, "row-end", keyed("row-end", scale_grid_col_row_start_or_end()));
    add(
        g,
        "grid-flow",
        keyed("grid-flow", defs!["row", "col", "dense", "row-dense", "col-dense"]),
    );
    add(g, "auto-cols", keyed("auto-cols", scale_grid_auto_cols_rows()));
    add(g, "auto-rows", keyed("auto-rows", scale_grid_auto_cols_rows()));
    add(g, "gap", keyed("gap", scale_unambiguous_spacing()));
    add(g, "gap-x", keyed("gap-x", scale_unambiguous_spacing()));
    add(g, "gap-y", keyed("gap-y", scale_unambiguous_spacing()));
    add(
        g,
        "justify-content",
        keyed("justify", [scale_align_primary_axis(), defs!["normal"]].concat()),
    );
    add(
        g,
        "justify-items",
        keyed("justify-items", [scale_align_secondary_axis(), defs!["normal"]].concat()),
    );
    add(
        g,
        "justify-self",
        keyed("justify-self", [defs!["auto"], scale_align_secondary_axis()].concat()),
    );
    add(
        g,
        "align-content",
        keyed("content", [defs!["normal"], scale_align_primary_axis()].concat()),
    );
    add(
        g,
        "align-items",
        keyed(
            "items",
            [scale_align_secondary_axis(), defs![obj("baseline", defs!["", "last"])]].concat(),
        ),
    );
    add(
        g,
        "align-self",
        keyed(
            "self",
            [defs!["auto"], scale_align_secondary_axis(), defs![obj("baseline", defs!["", "last"])]]
                .concat(),
        ),
    );
    add(g, "place-content", keyed("place-content", scale_align_primary_axis()));
    add(
        g,
        "place-items",
        keyed("place-items", [scale_align_secondary_axis(), defs!["baseline"]].concat()),
    );
    add(
        g,
        "place-self",
        keyed("place-self", [defs!["auto"], scale_align_secondary_axis()].concat()),
    );
}

fn spacing(g: &mut IndexMap<String, ClassGroup>) {
    for side in ["p", "px", "py", "ps", "pe", "pt", "pr", "pb", "pl"] {
        add(g, side, keyed(side, scale_unambiguous_spacing()));
    }
    for side in ["m", "mx", "my", "ms", "me", "mt", "mr", "mb", "ml"] {
        add(g, side, keyed(side, scale_margin()));
    }
    add(g, "space-x", keyed("space-x", scale_unambiguous_spacing()));
    add(g, "space-x-reverse", defs!["space-x-reverse"]);
    add(g, "space-y", keyed("space-y", scale_unambiguous_spacing()));
    add(g, "space-y-reverse", defs!["space-y-reverse"]);
}

fn sizing(g: &mut IndexMap<String, ClassGroup>) {
    add(g, "size", keyed("size", scale_sizing()));
    add(g, "w", keyed("w", [defs![theme("container"), "screen"], scale_sizing()].concat()));
    add(
        g,
        "min-w",
        keyed("min-w", [defs![theme("container"), "screen", "none"], scale_sizing()].concat()),
    );
    add(
        g,
        "max-w",
        keyed(
            "max-w",
            [
                defs![
                    theme("container"),
                    "screen",
                    "none",
                    "prose",
                    obj("screen", defs![theme("breakpoint")]),
                ],
                scale_sizing(),
            ]
            .concat(),
        ),
    );
    add(g, "h", keyed("h", [defs!["screen", "lh"], scale_sizing()].concat()));
    add(g, "min-h", keyed("min-h", [defs!["screen", "lh", "none"], scale_sizing()].concat()));
    add(g, "max-h", keyed("max-h", [defs!["screen", "lh"], scale_sizing()].concat()));
}

fn typography(g: &mut IndexMap<String, ClassGroup>) {
    add(
        g,
        "font-size",
        keyed("text", defs!["base", theme("text"), ARBITRARY_VARIABLE_LENGTH, ARBITRARY_LENGTH]),
    );
    add(g, "font-smoothing", defs!["antialiased", "subpixel-antialiased"]);
    add(g, "font-style", defs!["italic", "not-italic"]);
    add(
        g,
        "font-weight",
        keyed("font", defs![theme("font-weight"), ARBITRARY_VARIABLE, ARBITRARY_NUMBER]),
    );
    add(
        g,
        "font-stretch",
        keyed(
            "font-stretch",
            defs![
                "ultra-condensed",
                "extra-condensed",
                "condensed",
                "semi-condensed",
                "normal",
                "semi-expanded",
                "expanded",
                "extra-expanded",
                "ultra-expanded",
                PERCENT,
                ARBITRARY_VALUE,
            ],
        ),
    );
    add(
        g,
        "font-family",
        keyed("font", defs![ARBITRARY_VARIABLE_FAMILY_NAME, ARBITRARY_VALUE, theme("font")]),
    );
    add(g, "fvn-normal", defs!["normal-nums"]);
    add(g, "fvn-ordinal", defs!["ordinal"]);
    add(g, "fvn-slashed-zero", defs!["slashed-zero"]);
    add(g, "fvn-figure", defs!["lining-nums", "oldstyle-nums"]);
    add(g, "fvn-spacing", defs!["proportional-nums", "tabular-nums"]);
    add(g, "fvn-fraction", defs!["diagonal-fractions", "stacked-fractions"]);
    add(g, "tracking", keyed("tracking", [defs![theme("tracking")], arbitrary()].concat()));
    add(
        g,
        "line-clamp",
        keyed("line-clamp", defs![NUMBER, "none", ARBITRARY_VARIABLE, ARBITRARY_NUMBER]),
    );
    add(
        g,
        "leading",
        keyed("leading", [defs![theme("leading")], scale_unambiguous_spacing()].concat()),
    );
    add(g, "list-image", keyed("list-image", [defs!["none"], arbitrary()].concat()));
    add(g, "list-style-position", keyed("list", defs!["inside", "outside"]));
    add(
        g,
        "list-style-type",
        keyed("list", [defs!["disc", "decimal", "none"], arbitrary()].concat()),
    );
    add(
        g,
        "text-alignment",
        keyed("text", defs!["left", "center", "right", "justify", "start", "end"]),
    );
    add(g, "placeholder-color", keyed("placeholder", scale_color()));
    add(g, "text-color", keyed("text", scale_color()));
    add(g, "text-decoration", defs!["underline", "overline", "line-through", "no-underline"]);
    add(
        g,
        "text-decoration-style",
        keyed("decoration", [scale_line_style(), defs!["wavy"]].concat()),
    );
    add(
        g,
        "text-decoration-thickness",
        keyed(
            "decoration",
            defs![NUMBER, "from-font", "auto", ARBITRARY_VARIABLE, ARBITRARY_LENGTH],
        ),
    );
    add(g, "text-decoration-color", keyed("decoration", scale_color()));
    add(
        g,
        "underline-offset",
        keyed("underline-offset", defs![NUMBER, "auto", ARBITRARY_VARIABLE, ARBITRARY_VALUE]),
    );
    add(g, "text-transform", defs!["uppercase", "lowercase", "capitalize", "normal-case"]);
    add(g, "text-overflow", defs!["truncate", "text-ellipsis", "text-clip"]);
    add(g, "text-wrap", keyed("text", defs!["wrap", "nowrap", "balance", "pretty"]));
    add(g, "indent", keyed("indent", scale_unambiguous_spacing()));
    add(
        g,
        "vertical-align",
        keyed(
            "align",
            [
                defs!["baseline", "top", "middle", "bottom", "text-top", "text-bottom", "sub", "super"],
                arbitrary(),
            ]
            .concat(),
        ),
    );
    add(
        g,
        "whitespace",
        keyed("whitespace", defs!["normal", "nowrap", "pre", "pre-line", "pre-wrap", "break-spaces"]),
    );
    add(g, "break", keyed("break", defs!["normal", "words", "all", "keep"]));
    add(g, "wrap", keyed("wrap", defs!["break-word", "anywhere", "normal"]));
    add(g, "hyphens", keyed("hyphens", defs!["none", "manual", "auto"]));
    add(g, "content", keyed("content", [defs!["none"], arbitrary()].concat()));
}

fn backgrounds(g: &mut IndexMap<String, ClassGroup>) {
    add(g, "bg-attachment", keyed("bg", defs!["fixed", "local", "scroll"]));
    add(g, "bg-clip", keyed("bg-clip", defs!["border", "padding", "content", "text"]));
    add(g, "bg-origin", keyed("bg-origin", defs!["border", "padding", "content"]));
    add(g, "bg-position", keyed("bg", scale_bg_position()));
    add(g, "bg-repeat", keyed("bg", scale_bg_repeat()));
    add(g, "bg-size", keyed("bg", scale_bg_size()));
    add(
        g,
        "bg-image",
        keyed(
            "bg",
            defs![
                "none",
                ClassDefinition::object([
                    (
                        "linear",
                        [
                            defs![
                                obj("to", defs!["t", "tr", "r", "br", "b", "bl", "l", "tl"]),
                                INTEGER,
                            ],
                            arbitrary(),
                        ]
                        .concat(),
                    ),
                    ("radial", [defs![""], arbitrary()].concat()),
                    ("conic", [defs![INTEGER], arbitrary()].concat()),
                ]),
                ARBITRARY_VARIABLE_IMAGE,
                ARBITRARY_IMAGE,
            ],
        ),
    );
    add(g, "bg-color", keyed("bg", scale_color()));
    add(g, "gradient-from-pos", keyed("from", scale_gradient_stop_position()));
    add(g, "gradient-via-pos", keyed("via", scale_gradient_stop_position()));
    add(g, "gradient-to-pos", keyed("to", scale_gradient_stop_position()));
    add(g, "gradient-from", keyed("from", scale_color()));
    add(g, "gradient-via", keyed("via", scale_color()));
    add(g, "gradient-to", keyed("to", scale_color()));
}

const ROUNDED_SIDES: [&str; 15] = [
    "rounded", "rounded-s", "rounded-e", "rounded-t", "rounded-r", "rounded-b", "rounded-l",
    "rounded-ss", "rounded-se", "rounded-ee", "rounded-es", "rounded-tl", "rounded-tr", "rounded-br",
    "rounded-bl",
];

/// Border side suffixes, `""` being all sides
const BORDER_SIDES: [&str; 9] = ["", "x", "y", "s", "e", "t", "r", "b", "l"];

fn border_group_id(base: &str, side: &str) -> String {
    if side.is_empty() {
        base.to_string()
    } else {
        format!("{}-{}", base, side)
    }
}

fn borders(g: &mut IndexMap<String, ClassGroup>) {
    for side in ROUNDED_SIDES {
        add(g, side, keyed(side, scale_radius()));
    }
    for side in BORDER_SIDES {
        add(
            g,
            &border_group_id("border-w", side),
            keyed(&border_group_id("border", side), scale_border_width()),
        );
    }
    add(g, "divide-x", keyed("divide-x", scale_border_width()));
    add(g, "divide-x-reverse", defs!["divide-x-reverse"]);
    add(g, "divide-y", keyed("divide-y", scale_border_width()));
    add(g, "divide-y-reverse", defs!["divide-y-reverse"]);
    add(g, "border-style", keyed("border", [scale_line_style(), defs!["hidden", "none"]].concat()));
    add(g, "divide-style", keyed("divide", [scale_line_style(), defs!["hidden", "none"]].concat()));
    for side in BORDER_SIDES {
        add(
            g,
            &border_group_id("border-color", side),
            keyed(&border_group_id("border", side), scale_color()),
        );
    }
    add(g, "divide-color", keyed("divide", scale_color()));
    add(g, "outline-style", keyed("outline", [scale_line_style(), defs!["none", "hidden"]].concat()));
    add(g, "outline-offset", keyed("outline-offset", scale_number_or_arbitrary()));
    add(
        g,
        "outline-w",
        keyed("outline", defs!["", NUMBER, ARBITRARY_VARIABLE_LENGTH, ARBITRARY_LENGTH]),
    );
    add(g, "outline-color", keyed("outline", scale_color()));
}

fn effects(g: &mut IndexMap<String, ClassGroup>) {
    add(
        g,
        "shadow",
        keyed(
            "shadow",
            defs!["", "none", theme("shadow"), ARBITRARY_VARIABLE_SHADOW, ARBITRARY_SHADOW],
        ),
    );
    add(g, "shadow-color", keyed("shadow", scale_color()));
    add(
        g,
        "inset-shadow",
        keyed(
            "inset-shadow",
            defs!["none", theme("inset-shadow"), ARBITRARY_VARIABLE_SHADOW, ARBITRARY_SHADOW],
        ),
    );
    add(g, "inset-shadow-color", keyed("inset-shadow", scale_color()));
    add(g, "ring-w", keyed("ring", scale_border_width()));
    add(g, "ring-w-inset", defs!["ring-inset"]);
    add(g, "ring-color", keyed("ring", scale_color()));
    add(g, "ring-offset-w", keyed("ring-offset", defs![NUMBER, ARBITRARY_LENGTH]));
    add(g, "ring-offset-color", keyed("ring-offset", scale_color()));
    add(g, "inset-ring-w", keyed("inset-ring", scale_border_width()));
    add(g, "inset-ring-color", keyed("inset-ring", scale_color()));
    add(
        g,
        "text-shadow",
        keyed(
            "text-shadow",
            defs!["none", theme("text-shadow"), ARBITRARY_VARIABLE_SHADOW, ARBITRARY_SHADOW],
        ),
    );
    add(g, "text-shadow-color", keyed("text-shadow", scale_color()));
    add(g, "opacity", keyed("opacity", scale_number_or_arbitrary()));
    add(
        g,
        "mix-blend",
        keyed("mix-blend", [scale_blend_mode(), defs!["plus-darker", "plus-lighter"]].concat()),
    );
    add(g, "bg-blend", keyed("bg-blend", scale_blend_mode()));
}

fn masks(g: &mut IndexMap<String, ClassGroup>) {
    add(
        g,
        "mask-clip",
        defs![
            obj("mask-clip", defs!["border", "padding", "content", "fill", "stroke", "view"]),
            "mask-no-clip",
        ],
    );
    add(g, "mask-composite", keyed("mask", defs!["add", "subtract", "intersect", "exclude"]));

    add(g, "mask-image-linear-pos", keyed("mask-linear", defs![NUMBER]));
    for edge in ["linear", "t", "r", "b", "l", "x", "y", "radial", "conic"] {
        if edge == "radial" {
            add(g, "mask-image-radial", keyed("mask-radial", [defs![""], arbitrary()].concat()));
        }
        if edge == "conic" {
            add(g, "mask-image-conic-pos", keyed("mask-conic", defs![NUMBER]));
        }
        for stop in ["from", "to"] {
            add(
                g,
                &format!("mask-image-{}-{}-pos", edge, stop),
                keyed(&format!("mask-{}-{}", edge, stop), scale_mask_image_position()),
            );
        }
        for stop in ["from", "to"] {
            add(
                g,
                &format!("mask-image-{}-{}-color", edge, stop),
                keyed(&format!("mask-{}-{}", edge, stop), scale_color()),
            );
        }
        if edge == "radial" {
            add(g, "mask-image-radial-shape", keyed("mask-radial", defs!["circle", "ellipse"]));
            add(
                g,
                "mask-image-radial-size",
                keyed(
                    "mask-radial",
                    defs![ClassDefinition::object([
                        ("closest", defs!["side", "corner"]),
                        ("farthest", defs!["side", "corner"]),
                    ])],
                ),
            );
            add(g, "mask-image-radial-pos", keyed("mask-radial-at", scale_position()));
        }
    }

    add(g, "mask-mode", keyed("mask", defs!["alpha", "luminance", "match"]));
    add(
        g,
        "mask-origin",
        keyed("mask-origin", defs!["border", "padding", "content", "fill", "stroke", "view"]),
    );
    add(g, "mask-position", keyed("mask", scale_bg_position()));
    add(g, "mask-repeat", keyed("mask", scale_bg_repeat()));
    add(g, "mask-size", keyed("mask", scale_bg_size()));
    add(g, "mask-type", keyed("mask-type", defs!["alpha", "luminance"]));
    add(g, "mask-image", keyed("mask", [defs!["none"], arbitrary()].concat()));
}

fn filters(g: &mut IndexMap<String, ClassGroup>) {
    add(g, "filter", keyed("filter", [defs!["", "none"], arbitrary()].concat()));
    add(g, "blur", keyed("blur", scale_blur()));
    add(g, "brightness", keyed("brightness", scale_number_or_arbitrary()));
    add(g, "contrast", keyed("contrast", scale_number_or_arbitrary()));
    add(
        g,
        "drop-shadow",
        keyed(
            "drop-shadow",
            defs!["", "none", theme("drop-shadow"), ARBITRARY_VARIABLE_SHADOW, ARBITRARY_SHADOW],
        ),
    );
    add(g, "drop-shadow-color", keyed("drop-shadow", scale_color()));
    add(g, "grayscale", keyed("grayscale", scale_optional_number()));
    add(g, "hue-rotate", keyed("hue-rotate", scale_number_or_arbitrary()));
    add(g, "invert", keyed("invert", scale_optional_number()));
    add(g, "saturate", keyed("saturate", scale_number_or_arbitrary()));
    add(g, "sepia", keyed("sepia", scale_optional_number()));
    add(
        g,
        "backdrop-filter",
        keyed("backdrop-filter", [defs!["", "none"], arbitrary()].concat()),
    );
    add(g, "backdrop-blur", keyed("backdrop-blur", scale_blur()));
    add(g, "backdrop-brightness", keyed("backdrop-brightness", scale_number_or_arbitrary()));
    add(g, "backdrop-contrast", keyed("backdrop-contrast", scale_number_or_arbitrary()));
    add(g, "backdrop-grayscale", keyed("backdrop-grayscale", scale_optional_number()));
    add(g, "backdrop-hue-rotate", keyed("backdrop-hue-rotate", scale_number_or_arbitrary()));
    add(g, "backdrop-invert", keyed("backdrop-invert", scale_optional_number()));
    add(g, "backdrop-opacity", keyed("backdrop-opacity", scale_number_or_arbitrary()));
    add(g, "backdrop-saturate", keyed("backdrop-saturate", scale_number_or_arbitrary()));
    add(g, "backdrop-sepia", keyed("backdrop-sepia", scale_optional_number()));
}

fn tables(g: &mut IndexMap<String, ClassGroup>) {
    add(g, "border-collapse", keyed("border", defs!["collapse", "separate"]));
    add(g, "border-spacing", keyed("border-spacing", scale_unambiguous_spacing()));
    add(g, "border-spacing-x", keyed("border-spacing-x", scale_unambiguous_spacing()));
    add(g, "border-spacing-y", keyed("border-spacing-y", scale_unambiguous_spacing()));
    add(g, "table-layout", keyed("table", defs!["auto", "fixed"]));
    add(g, "caption", keyed("caption", defs!["top", "bottom"]));
}

fn transitions_and_animation(g: &mut IndexMap<String, ClassGroup>) {
    add(
        g,
        "transition",
        keyed(
            "transition",
            [defs!["", "all", "colors", "opacity", "shadow", "transform", "none"], arbitrary()].concat(),
        ),
    );
    add(g, "transition-behavior", keyed("transition", defs!["normal", "discrete"]));
    add(
        g,
        "duration",
        keyed("duration", [defs![NUMBER, "initial"], arbitrary()].concat()),
    );
    add(
        g,
        "ease",
        keyed("ease", [defs!["linear", "initial", theme("ease")], arbitrary()].concat()),
    );
    add(g, "delay", keyed("delay", scale_number_or_arbitrary()));
    add(
        g,
        "animate",
        keyed("animate", [defs!["none", theme("animate")], arbitrary()].concat()),
    );
}

fn transforms(g: &mut IndexMap<String, ClassGroup>) {
    add(g, "backface", keyed("backface", defs!["hidden", "visible"]));
    add(
        g,
        "perspective",
        keyed("perspective", [defs![theme("perspective")], arbitrary()].concat()),
    );
    add(g, "perspective-origin", keyed("perspective-origin", scale_position_with_arbitrary()));
    for axis in ["rotate", "rotate-x", "rotate-y", "rotate-z"] {
        add(g, axis, keyed(axis, scale_rotate()));
    }
    for axis in ["scale", "scale-x", "scale-y", "scale-z"] {
        add(g, axis, keyed(axis, scale_scale()));
    }
    add(g, "scale-3d", defs!["scale-3d"]);
    for axis in ["skew", "skew-x", "skew-y"] {
        add(g, axis, keyed(axis, scale_skew()));
    }
    add(
        g,
        "transform",
        keyed("transform", [arbitrary(), defs!["", "none", "gpu", "cpu"]].concat()),
    );
    add(g, "transform-origin", keyed("origin", scale_position_with_arbitrary()));
    add(g, "transform-style", keyed("transform", defs!["3d", "flat"]));
    for axis in ["translate", "translate-x", "translate-y", "translate-z"] {
        add(g, axis, keyed(axis, scale_translate()));
    }
    add(g, "translate-none", defs!["translate-none"]);
}

fn interactivity(g: &mut IndexMap<String, ClassGroup>) {
    add(g, "accent", keyed("accent", scale_color()));
    add(g, "appearance", keyed("appearance", defs!["none", "auto"]));
    add(g, "caret-color", keyed("caret", scale_color()));
    add(
        g,
        "color-scheme",
        keyed("scheme", defs!["normal", "dark", "light", "light-dark", "only-dark", "only-light"]),
    );
    add(
        g,
        "cursor",
        keyed(
            "cursor",
            [
                defs![
                    "auto", "default", "pointer", "wait", "text", "move", "help", "not-allowed", "none",
                    "context-menu", "progress", "cell", "crosshair", "vertical-text", "alias", "copy",
                    "no-drop", "grab", "grabbing", "all-scroll", "col-resize", "row-resize", "n-resize",
                    "e-resize", "s-resize", "w-resize", "ne-resize", "nw-resize", "se-resize", "sw-resize",
                    "ew-resize", "ns-resize", "nesw-resize", "nwse-resize", "zoom-in", "zoom-out",
                ],
                arbitrary(),
            ]
            .concat(),
        ),
    );
    add(g, "field-sizing", keyed("field-sizing", defs!["fixed", "content"]));
    add(g, "pointer-events", keyed("pointer-events", defs!["auto", "none"]));
    add(g, "resize", keyed("resize", defs!["none", "", "y", "x"]));
    add(g, "scroll-behavior", keyed("scroll", defs!["auto", "smooth"]));
    for side in ["m", "mx", "my", "ms", "me", "mt", "mr", "mb", "ml"] {
        let id = format!("scroll-{}", side);
        add(g, &id, keyed(&id, scale_unambiguous_spacing()));
    }
    for side in ["p", "px", "py", "ps", "pe", "pt", "pr", "pb", "pl"] {
        let id = format!("scroll-{}", side);
        add(g, &id, keyed(&id, scale_unambiguous_spacing()));
    }
    add(g, "snap-align", keyed("snap", defs!["start", "end", "center", "align-none"]));
    add(g, "snap-stop", keyed("snap", defs!["normal", "always"]));
    add(g, "snap-type", keyed("snap", defs!["none", "x", "y", "both"]));
    add(g, "snap-strictness", keyed("snap", defs!["mandatory", "proximity"]));
    add(g, "touch", keyed("touch", defs!["auto", "none", "manipulation"]));
    add(g, "touch-x", keyed("touch-pan", defs!["x", "left", "right"]));
    add(g, "touch-y", keyed("touch-pan", defs!["y", "up", "down"]));
    add(g, "touch-pz", defs!["touch-pinch-zoom"]);
    add(g, "select", keyed("select", defs!["none", "text", "all", "auto"]));
    add(
        g,
        "will-change",
        keyed("will-change", [defs!["auto", "scroll", "contents", "transform"], arbitrary()].concat()),
    );
}

fn svg(g: &mut IndexMap<String, ClassGroup>) {
    add(g, "fill", keyed("fill", [defs!["none"], scale_color()].concat()));
    add(
        g,
        "stroke-w",
        keyed(
            "stroke",
            defs![NUMBER, ARBITRARY_VARIABLE_LENGTH, ARBITRARY_LENGTH, ARBITRARY_NUMBER],
        ),
    );
    add(g, "stroke", keyed("stroke", [defs!["none"], scale_color()].concat()));
}

fn accessibility(g: &mut IndexMap<String, ClassGroup>) {
    add(g, "forced-color-adjust", keyed("forced-color-adjust", defs!["auto", "none"]));
}

fn conflicts(entries: &[(&str, &[&str])]) -> ConflictMap {
    entries
        .iter()
        .map(|(group, targets)| {
            (group.to_string(), targets.iter().map(|target| target.to_string()).collect())
        })
        .collect()
}

fn default_conflicting_class_groups() -> ConflictMap {
    conflicts(&[
        ("overflow", &["overflow-x", "overflow-y"]),
        ("overscroll", &["overscroll-x", "overscroll-y"]),
        ("inset", &["inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"]),
        ("inset-x", &["right", "left"]),
        ("inset-y", &["top", "bottom"]),
        ("flex", &["basis", "grow", "shrink"]),
        ("gap", &["gap-x", "gap-y"]),
        ("p", &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"]),
        ("px", &["pr", "pl"]),
        ("py", &["pt", "pb"]),
        ("m", &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"]),
        ("mx", &["mr", "ml"]),
        ("my", &["mt", "mb"]),
        ("size", &["w", "h"]),
        (
            "fvn-normal",
            &["fvn-ordinal", "fvn-slashed-zero", "fvn-figure", "fvn-spacing", "fvn-fraction"],
        ),
        ("fvn-ordinal", &["fvn-normal"]),
        ("fvn-slashed-zero", &["fvn-normal"]),
        ("fvn-figure", &["fvn-normal"]),
        ("fvn-spacing", &["fvn-normal"]),
        ("fvn-fraction", &["fvn-normal"]),
        ("line-clamp", &["display", "overflow"]),
        (
            "rounded",
            &[
                "rounded-s", "rounded-e", "rounded-t", "rounded-r", "rounded-b", "rounded-l",
                "rounded-ss", "rounded-se", "rounded-ee", "rounded-es", "rounded-tl", "rounded-tr",
                "rounded-br", "rounded-bl",
            ],
        ),
        ("rounded-s", &["rounded-ss", "rounded-es"]),
        ("rounded-e", &["rounded-se", "rounded-ee"]),
        ("rounded-t", &["rounded-tl", "rounded-tr"]),
        ("rounded-r", &["rounded-tr", "rounded-br"]),
        ("rounded-b", &["rounded-br", "rounded-bl"]),
        ("rounded-l", &["rounded-tl", "rounded-bl"]),
        ("border-spacing", &["border-spacing-x", "border-spacing-y"]),
        (
            "border-w",
            &[
                "border-w-x", "border-w-y", "border-w-s", "border-w-e", "border-w-t", "border-w-r",
                "border-w-b", "border-w-l",
            ],
        ),
        ("border-w-x", &["border-w-r", "border-w-l"]),
        ("border-w-y", &["border-w-t", "border-w-b"]),
        (
            "border-color",
            &[
                "border-color-x", "border-color-y", "border-color-s", "border-color-e",
                "border-color-t", "border-color-r", "border-color-b", "border-color-l",
            ],
        ),
        ("border-color-x", &["border-color-r", "border-color-l"]),
        ("border-color-y", &["border-color-t", "border-color-b"]),
        ("translate", &["translate-x", "translate-y", "translate-none"]),
        ("translate-none", &["translate", "translate-x", "translate-y", "translate-z"]),
        (
            "scroll-m",
            &[
                "scroll-mx", "scroll-my", "scroll-ms", "scroll-me", "scroll-mt", "scroll-mr",
                "scroll-mb", "scroll-ml",
            ],
        ),
        ("scroll-mx", &["scroll-mr", "scroll-ml"]),
        ("scroll-my", &["scroll-mt", "scroll-mb"]),
        (
            "scroll-p",
            &[
                "scroll-px", "scroll-py", "scroll-ps", "scroll-pe", "scroll-pt", "scroll-pr",
                "scroll-pb", "scroll-pl",
            ],
        ),
        ("scroll-px", &["scroll-pr", "scroll-pl"]),
        ("scroll-py", &["scroll-pt", "scroll-pb"]),
        ("touch", &["touch-x", "touch-y", "touch-pz"]),
        ("touch-x", &["touch"]),
        ("touch-y", &["touch"]),
        ("touch-pz", &["touch"]),
    ])
}
