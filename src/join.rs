//! Joining conditional class lists, and the shared default merger.

use once_cell::sync::Lazy;
use std::borrow::Cow;

use crate::merger::TailwindMerge;

static DEFAULT_MERGER: Lazy<TailwindMerge> = Lazy::new(TailwindMerge::default);

/// Anything that can contribute classes to a class list.
///
/// Empty strings and `None` contribute nothing. Sequences and tuples
/// contribute each of their items in order, so conditional classes can be
/// written as `cond.then_some("class")`.
pub trait ClassValue {
    /// Appends this value to `classes`, separated from earlier content by one
    /// space.
    fn append_to(&self, classes: &mut String);
}

fn push_class(classes: &mut String, value: &str) {
    if value.is_empty() {
        return;
    }
    if !classes.is_empty() {
        classes.push(' ');
    }
    classes.push_str(value);
}

impl ClassValue for str {
    fn append_to(&self, classes: &mut String) {
        push_class(classes, self);
    }
}

impl ClassValue for String {
    fn append_to(&self, classes: &mut String) {
        push_class(classes, self);
    }
}

impl ClassValue for Cow<'_, str> {
    fn append_to(&self, classes: &mut String) {
        push_class(classes, self);
    }
}

impl<T: ClassValue + ?Sized> ClassValue for &T {
    fn append_to(&self, classes: &mut String) {
        (**self).append_to(classes);
    }
}

impl<T: ClassValue> ClassValue for Option<T> {
    fn append_to(&self, classes: &mut String) {
        if let Some(value) = self {
            value.append_to(classes);
        }
    }
}

impl<T: ClassValue> ClassValue for [T] {
    fn append_to(&self, classes: &mut String) {
        for value in self {
            value.append_to(classes);
        }
    }
}

impl<T: ClassValue, const N: usize> ClassValue for [T; N] {
    fn append_to(&self, classes: &mut String) {
        self.as_slice().append_to(classes);
    }
}

impl<T: ClassValue> ClassValue for Vec<T> {
    fn append_to(&self, classes: &mut String) {
        self.as_slice().append_to(classes);
    }
}

macro_rules! impl_class_value_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: ClassValue),+> ClassValue for ($($name,)+) {
            #[allow(non_snake_case)]
            fn append_to(&self, classes: &mut String) {
                let ($($name,)+) = self;
                $($name.append_to(classes);)+
            }
        }
    };
}

impl_class_value_for_tuple!(A);
impl_class_value_for_tuple!(A, B);
impl_class_value_for_tuple!(A, B, C);
impl_class_value_for_tuple!(A, B, C, D);
impl_class_value_for_tuple!(A, B, C, D, E);
impl_class_value_for_tuple!(A, B, C, D, E, F);
impl_class_value_for_tuple!(A, B, C, D, E, F, G);
impl_class_value_for_tuple!(A, B, C, D, E, F, G, H);

/// Joins class values with single spaces without resolving conflicts.
pub fn tw_join<V: ClassValue + ?Sized>(value: &V) -> String {
    let mut classes = String::new();
    value.append_to(&mut classes);
    classes
}

/// The process-wide merger for the default configuration, built on first use
pub fn default_merger() -> &'static TailwindMerge {
    &DEFAULT_MERGER
}

/// Merges `classes` with the default merger.
pub fn tw_merge(classes: &str) -> String {
    DEFAULT_MERGER.merge(classes)
}

/// Joins any number of [`ClassValue`]s with single spaces.
///
/// ```
/// let active = true;
/// let classes = tw_merge::tw_join!("p-2", active.then_some("bg-blue-500"), None::<&str>, ["m-1", ""]);
/// assert_eq!(classes, "p-2 bg-blue-500 m-1");
/// ```
#[macro_export]
macro_rules! tw_join {
    ($($value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut classes = ::std::string::String::new();
        $($crate::ClassValue::append_to(&$value, &mut classes);)*
        classes
    }};
}

/// Joins its arguments like [`tw_join!`] and merges them with the default merger.
///
/// ```
/// assert_eq!(tw_merge::tw_merge!("px-2 py-1", Some("p-3")), "p-3");
/// ```
#[macro_export]
macro_rules! tw_merge {
    ($($value:expr),* $(,)?) => {
        $crate::tw_merge(&$crate::tw_join!($($value),*))
    };
}
