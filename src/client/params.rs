//! The parameter map handed to the dispatcher for a single request.
//!
//! Names that match a placeholder in the route template are substituted into the path; all other
//! names end up in the query string. A value that was not provided is [`ParamValue::Absent`] and
//! is dropped entirely rather than being serialized as an empty or `null` token.

use std::borrow::Cow;

/// How a list value is written into the query string.
///
/// GitHub documents its list-valued query parameters (`labels`, `ids`, ...) as comma separated,
/// which is why that is the default, but some endpoints expect repeated keys instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListStyle {
    /// `labels=bug,ui`
    Comma,
    /// `label=bug&label=ui`
    Repeated,
    /// `label[]=bug&label[]=ui`, with the brackets sent unescaped
    Brackets,
}

impl Default for ListStyle {
    fn default() -> Self {
        ListStyle::Comma
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    /// Not provided by the caller
    Absent,
    Scalar(String),
    List { items: Vec<String>, style: ListStyle },
}

impl ParamValue {
    pub fn list<I, T>(values: I, style: ListStyle) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToParam,
    {
        let mut items = Vec::new();
        for value in values {
            match value.to_param() {
                ParamValue::Absent => {}
                ParamValue::Scalar(item) => items.push(item),
                ParamValue::List { items: nested, .. } => items.extend(nested),
            }
        }

        ParamValue::List { items, style }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ParamValue::Absent)
    }

    /// The unescaped text substituted for a route placeholder. `None` when there is nothing that
    /// could fill a path segment.
    pub(crate) fn as_path_value(&self) -> Option<Cow<'_, str>> {
        match self {
            ParamValue::Absent => None,
            ParamValue::Scalar(value) if value.is_empty() => None,
            ParamValue::Scalar(value) => Some(Cow::Borrowed(value)),
            ParamValue::List { items, .. } if items.is_empty() => None,
            ParamValue::List { items, .. } => Some(Cow::Owned(items.join(","))),
        }
    }

    pub(crate) fn push_query_pairs(&self, name: &str, pairs: &mut Vec<(String, String)>) {
        match self {
            ParamValue::Absent => {}
            ParamValue::Scalar(value) => pairs.push((name.to_owned(), value.clone())),
            ParamValue::List { items, .. } if items.is_empty() => {}
            ParamValue::List {
                items,
                style: ListStyle::Comma,
            } => pairs.push((name.to_owned(), items.join(","))),
            ParamValue::List {
                items,
                style: ListStyle::Repeated,
            } => pairs.extend(items.iter().map(|item| (name.to_owned(), item.clone()))),
            ParamValue::List {
                items,
                style: ListStyle::Brackets,
            } => {
                let key = format!("{}[]", name);
                pairs.extend(items.iter().map(|item| (key.clone(), item.clone())))
            }
        }
    }
}

/// Conversion of a typed argument into a [`ParamValue`].
pub trait ToParam {
    fn to_param(&self) -> ParamValue;
}

/// Implements [`ToParam`] for types whose `Display` output is their wire format.
macro_rules! display_to_param {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::client::ToParam for $ty {
                fn to_param(&self) -> $crate::client::ParamValue {
                    $crate::client::ParamValue::Scalar(self.to_string())
                }
            }
        )*
    };
}

pub(crate) use display_to_param;

display_to_param!(str, String, bool, u8, u16, u32, u64, usize, i32, i64);

impl ToParam for ParamValue {
    fn to_param(&self) -> ParamValue {
        self.clone()
    }
}

impl<T: ToParam + ?Sized> ToParam for &T {
    fn to_param(&self) -> ParamValue {
        (**self).to_param()
    }
}

impl<T: ToParam> ToParam for Option<T> {
    fn to_param(&self) -> ParamValue {
        match self {
            Some(value) => value.to_param(),
            None => ParamValue::Absent,
        }
    }
}

impl<T: ToParam> ToParam for [T] {
    fn to_param(&self) -> ParamValue {
        ParamValue::list(self, ListStyle::default())
    }
}

impl<T: ToParam> ToParam for Vec<T> {
    fn to_param(&self) -> ParamValue {
        self.as_slice().to_param()
    }
}

/// Implemented by option structs that contribute several parameters at once.
pub trait ExtendParams {
    fn extend_params(&self, params: &mut Params);
}

impl<T: ExtendParams> ExtendParams for Option<T> {
    fn extend_params(&self, params: &mut Params) {
        if let Some(options) = self {
            options.extend_params(params);
        }
    }
}

/// An ordered map of parameter names to values.
///
/// Setting a name that is already present replaces its value but keeps its original position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(Cow<'static, str>, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: ToParam,
    {
        self.set(name, value);
        self
    }

    pub fn with_list<K, I, T>(mut self, name: K, values: I, style: ListStyle) -> Self
    where
        K: Into<Cow<'static, str>>,
        I: IntoIterator<Item = T>,
        T: ToParam,
    {
        self.set(name, ParamValue::list(values, style));
        self
    }

    pub fn extend_from<E: ExtendParams + ?Sized>(mut self, source: &E) -> Self {
        source.extend_params(&mut self);
        self
    }

    pub fn set<K, V>(&mut self, name: K, value: V) -> &mut Self
    where
        K: Into<Cow<'static, str>>,
        V: ToParam,
    {
        let name = name.into();
        let value = value.to_param();

        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }

        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries
            .iter()
            .map(|(key, value)| (&**key, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::{ListStyle, ParamValue, Params};

    fn query_pairs(params: &Params) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (name, value) in params.iter() {
            value.push_query_pairs(name, &mut pairs);
        }
        pairs
    }

    #[test]
    fn absent_is_distinct_from_falsy_values() {
        let params = Params::new()
            .with("page", None::<u32>)
            .with("per_page", Some(0u32))
            .with("draft", false)
            .with("q", "");

        assert_eq!(params.get("page"), Some(&ParamValue::Absent));
        assert_eq!(
            query_pairs(&params),
            vec![
                ("per_page".to_owned(), "0".to_owned()),
                ("draft".to_owned(), "false".to_owned()),
                ("q".to_owned(), "".to_owned()),
            ]
        );
    }

    #[test]
    fn set_replaces_in_place() {
        let params = Params::new()
            .with("a", 1u32)
            .with("b", 2u32)
            .with("a", 3u32);

        assert_eq!(params.len(), 2);
        let names: Vec<_> = params.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(params.get("a"), Some(&ParamValue::Scalar("3".to_owned())));
    }

    #[test]
    fn list_styles() {
        let labels = vec!["bug", "ui"];
        let params = Params::new()
            .with("labels", &labels)
            .with_list("label", &labels, ListStyle::Repeated)
            .with_list("ids", vec![1u64, 2], ListStyle::Brackets)
            .with("empty", Vec::<String>::new());

        assert_eq!(
            query_pairs(&params),
            vec![
                ("labels".to_owned(), "bug,ui".to_owned()),
                ("label".to_owned(), "bug".to_owned()),
                ("label".to_owned(), "ui".to_owned()),
                ("ids[]".to_owned(), "1".to_owned()),
                ("ids[]".to_owned(), "2".to_owned()),
            ]
        );
    }

    #[test]
    fn absent_items_are_dropped_from_lists() {
        let value = ParamValue::list(vec![Some("a"), None, Some("b")], ListStyle::Comma);
        assert_eq!(
            value,
            ParamValue::List {
                items: vec!["a".to_owned(), "b".to_owned()],
                style: ListStyle::Comma
            }
        );
    }

    #[test]
    fn path_values() {
        assert_eq!(ParamValue::Absent.as_path_value(), None);
        assert_eq!(ParamValue::Scalar(String::new()).as_path_value(), None);
        assert_eq!(
            ParamValue::list(vec!["a", "b"], ListStyle::Repeated)
                .as_path_value()
                .as_deref(),
            Some("a,b")
        );
    }
}
