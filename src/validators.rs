//! Value predicates used at the leaves of the class map.
//!
//! Every predicate receives the unconsumed tail of a class name (for `p-[13px]`
//! that is `[13px]`) and answers whether the tail belongs to the group the
//! predicate was registered for.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// Patterns are fixed at compile time, a failure here is a programming error.
static ARBITRARY_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\[(?:(\w[\w-]*):)?(.+)\]$")
        .unwrap_or_else(|e| panic!("BUG: invalid arbitrary value pattern: {}", e))
});

static ARBITRARY_VARIABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\((?:(\w[\w-]*):)?(.+)\)$")
        .unwrap_or_else(|e| panic!("BUG: invalid arbitrary variable pattern: {}", e))
});

static FRACTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+/\d+$").unwrap_or_else(|e| panic!("BUG: invalid fraction pattern: {}", e))
});

static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$")
        .unwrap_or_else(|e| panic!("BUG: invalid number pattern: {}", e))
});

static TSHIRT_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+(\.\d+)?)?(xs|sm|md|lg|xl)$")
        .unwrap_or_else(|e| panic!("BUG: invalid t-shirt size pattern: {}", e))
});

static LENGTH_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\d+(%|px|r?em|[sdl]?v([hwib]|min|max)|pt|pc|in|cm|mm|cap|ch|ex|r?lh|cq(w|h|i|b|min|max))|\b(calc|min|max|clamp)\(.+\)|^0$",
    )
    .unwrap_or_else(|e| panic!("BUG: invalid length unit pattern: {}", e))
});

static COLOR_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(rgba?|hsla?|hwb|(ok)?(lab|lch)|color-mix)\(.+\)$")
        .unwrap_or_else(|e| panic!("BUG: invalid color function pattern: {}", e))
});

// Shadows start with the x and y offsets, optionally preceded by `inset`.
static SHADOW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(inset_)?-?((\d+)?\.?(\d+)[a-z]+|0)_-?((\d+)?\.?(\d+)[a-z]+|0)")
        .unwrap_or_else(|e| panic!("BUG: invalid shadow pattern: {}", e))
});

static IMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(url|image|image-set|cross-fade|element|(repeating-)?(linear|radial|conic)-gradient)\(.+\)$",
    )
    .unwrap_or_else(|e| panic!("BUG: invalid image pattern: {}", e))
});

/// A named predicate over the tail of a class name.
///
/// The name is what configuration files refer to, so two validators are equal
/// when their names are equal.
#[derive(Clone, Copy)]
pub struct Validator {
    name: &'static str,
    predicate: fn(&str) -> bool,
}

impl Validator {
    pub const fn new(name: &'static str, predicate: fn(&str) -> bool) -> Self {
        Self { name, predicate }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn test(&self, value: &str) -> bool {
        (self.predicate)(value)
    }

    /// Look up one of the built-in validators by name
    pub fn from_name(name: &str) -> Option<Self> {
        BUILTIN.iter().copied().find(|validator| validator.name == name)
    }

    /// All built-in validators, in a stable order
    pub fn builtin() -> &'static [Validator] {
        BUILTIN
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Validator").field(&self.name).finish()
    }
}

impl PartialEq for Validator {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Validator {}

impl Serialize for Validator {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

impl<'de> Deserialize<'de> for Validator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Validator::from_name(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown validator '{}'", name)))
    }
}

/// Builds a [`Validator`] named after the predicate function.
#[macro_export]
macro_rules! validator {
    ($predicate:ident) => {
        $crate::validators::Validator::new(stringify!($predicate), $predicate)
    };
}

static BUILTIN: &[Validator] = &[
    Validator::new("is_any", is_any),
    Validator::new("is_any_non_arbitrary", is_any_non_arbitrary),
    Validator::new("is_never", is_never),
    Validator::new("is_fraction", is_fraction),
    Validator::new("is_number", is_number),
    Validator::new("is_integer", is_integer),
    Validator::new("is_percent", is_percent),
    Validator::new("is_tshirt_size", is_tshirt_size),
    Validator::new("is_length_only", is_length_only),
    Validator::new("is_shadow", is_shadow),
    Validator::new("is_image", is_image),
    Validator::new("is_arbitrary_value", is_arbitrary_value),
    Validator::new("is_arbitrary_variable", is_arbitrary_variable),
    Validator::new("is_arbitrary_size", is_arbitrary_size),
    Validator::new("is_arbitrary_length", is_arbitrary_length),
    Validator::new("is_arbitrary_number", is_arbitrary_number),
    Validator::new("is_arbitrary_position", is_arbitrary_position),
    Validator::new("is_arbitrary_image", is_arbitrary_image),
    Validator::new("is_arbitrary_shadow", is_arbitrary_shadow),
    Validator::new("is_arbitrary_variable_length", is_arbitrary_variable_length),
    Validator::new("is_arbitrary_variable_family_name", is_arbitrary_variable_family_name),
    Validator::new("is_arbitrary_variable_position", is_arbitrary_variable_position),
    Validator::new("is_arbitrary_variable_size", is_arbitrary_variable_size),
    Validator::new("is_arbitrary_variable_image", is_arbitrary_variable_image),
    Validator::new("is_arbitrary_variable_shadow", is_arbitrary_variable_shadow),
];

pub fn is_any(_value: &str) -> bool {
    true
}

pub fn is_never(_value: &str) -> bool {
    false
}

/// Anything that is neither `[...]` nor `(...)`
pub fn is_any_non_arbitrary(value: &str) -> bool {
    !is_arbitrary_value(value) && !is_arbitrary_variable(value)
}

pub fn is_fraction(value: &str) -> bool {
    FRACTION.is_match(value)
}

pub fn is_number(value: &str) -> bool {
    NUMBER.is_match(value)
}

/// Numbers without a fractional part, `10.0` included
pub fn is_integer(value: &str) -> bool {
    is_number(value)
        && value
            .parse::<f64>()
            .map(|number| number.is_finite() && number.fract() == 0.0)
            .unwrap_or(false)
}

pub fn is_percent(value: &str) -> bool {
    value
        .strip_suffix('%')
        .map(is_number)
        .unwrap_or(false)
}

pub fn is_tshirt_size(value: &str) -> bool {
    TSHIRT_UNIT.is_match(value)
}

/// A length that is not hidden inside a color function.
///
/// `hsl(0 0% 0%)` contains percentages but is a color.
pub fn is_length_only(value: &str) -> bool {
    LENGTH_UNIT.is_match(value) && !COLOR_FUNCTION.is_match(value)
}

pub fn is_shadow(value: &str) -> bool {
    SHADOW.is_match(value)
}

pub fn is_image(value: &str) -> bool {
    IMAGE.is_match(value)
}

pub fn is_arbitrary_value(value: &str) -> bool {
    ARBITRARY_VALUE.is_match(value)
}

pub fn is_arbitrary_variable(value: &str) -> bool {
    ARBITRARY_VARIABLE.is_match(value)
}

pub fn is_arbitrary_size(value: &str) -> bool {
    arbitrary_value_matches(value, is_label_size, is_never)
}

pub fn is_arbitrary_length(value: &str) -> bool {
    arbitrary_value_matches(value, is_label_length, is_length_only)
}

pub fn is_arbitrary_number(value: &str) -> bool {
    arbitrary_value_matches(value, is_label_number, is_number)
}

pub fn is_arbitrary_position(value: &str) -> bool {
    arbitrary_value_matches(value, is_label_position, is_never)
}

pub fn is_arbitrary_image(value: &str) -> bool {
    arbitrary_value_matches(value, is_label_image, is_image)
}

pub fn is_arbitrary_shadow(value: &str) -> bool {
    arbitrary_value_matches(value, is_label_shadow, is_shadow)
}

pub fn is_arbitrary_variable_length(value: &str) -> bool {
    arbitrary_variable_matches(value, is_label_length, false)
}

pub fn is_arbitrary_variable_family_name(value: &str) -> bool {
    arbitrary_variable_matches(value, is_label_family_name, false)
}

pub fn is_arbitrary_variable_position(value: &str) -> bool {
    arbitrary_variable_matches(value, is_label_position, false)
}

pub fn is_arbitrary_variable_size(value: &str) -> bool {
    arbitrary_variable_matches(value, is_label_size, false)
}

pub fn is_arbitrary_variable_image(value: &str) -> bool {
    arbitrary_variable_matches(value, is_label_image, false)
}

/// Unlabelled variables count as shadows, `shadow-(--my-shadow)` is the common form
pub fn is_arbitrary_variable_shadow(value: &str) -> bool {
    arbitrary_variable_matches(value, is_label_shadow, true)
}

/// `[label:value]` is decided by the label alone, `[value]` by the value.
fn arbitrary_value_matches(
    value: &str,
    test_label: fn(&str) -> bool,
    test_value: fn(&str) -> bool,
) -> bool {
    match ARBITRARY_VALUE.captures(value) {
        Some(captures) => match captures.get(1) {
            Some(label) => test_label(label.as_str()),
            None => captures
                .get(2)
                .map(|inner| test_value(inner.as_str()))
                .unwrap_or(false),
        },
        None => false,
    }
}

fn arbitrary_variable_matches(
    value: &str,
    test_label: fn(&str) -> bool,
    match_without_label: bool,
) -> bool {
    match ARBITRARY_VARIABLE.captures(value) {
        Some(captures) => match captures.get(1) {
            Some(label) => test_label(label.as_str()),
            None => match_without_label,
        },
        None => false,
    }
}

fn is_label_position(label: &str) -> bool {
    label == "position"
}

fn is_label_image(label: &str) -> bool {
    matches!(label, "image" | "url")
}

fn is_label_size(label: &str) -> bool {
    matches!(label, "length" | "size" | "percentage")
}

fn is_label_length(label: &str) -> bool {
    label == "length"
}

fn is_label_number(label: &str) -> bool {
    label == "number"
}

fn is_label_family_name(label: &str) -> bool {
    label == "family-name"
}

fn is_label_shadow(label: &str) -> bool {
    label == "shadow"
}
