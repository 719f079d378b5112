//! Generic tree model for JSON-like documents.
//!
//! A document is a tree of [`Token`]s. Every token is one of four kinds:
//!
//! - [`Object`]: ordered members, each a [`Property`]
//! - [`Array`]: ordered, unnamed elements
//! - [`Property`]: a single `(name, value)` binding
//! - [`Scalar`]: a leaf (`null`, boolean, number or string)
//!
//! Object members keep their insertion order and may repeat a name; nothing in
//! this module deduplicates them.

use std::fmt;

#[cfg(feature = "json")]
mod json;
mod scalar;

pub use scalar::{Number, Scalar};

// =============================================================================
// TokenKind - Discriminant of a token
// =============================================================================

/// The kind of a [`Token`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Object,
    Array,
    Property,
    Scalar,
}

impl TokenKind {
    /// Lowercase name of the kind, as used in trace events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::Property => "property",
            Self::Scalar => "scalar",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Token - A node in the document tree
// =============================================================================

/// A node in a JSON-like document tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Object(Object),
    Array(Array),
    Property(Property),
    Scalar(Scalar),
}

impl Token {
    /// Shorthand for `Token::Scalar(Scalar::Null)`.
    pub const NULL: Token = Token::Scalar(Scalar::Null);

    /// Returns the kind of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Object(_) => TokenKind::Object,
            Self::Array(_) => TokenKind::Array,
            Self::Property(_) => TokenKind::Property,
            Self::Scalar(_) => TokenKind::Scalar,
        }
    }

    /// Returns `true` for leaf tokens.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_property(&self) -> Option<&Property> {
        match self {
            Self::Property(property) => Some(property),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Returns the string payload if this token is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    /// Looks up the first member named `name` when this token is an object.
    pub fn get(&self, name: &str) -> Option<&Token> {
        self.as_object().and_then(|object| object.get(name))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object(object) => fmt::Display::fmt(object, f),
            Self::Array(array) => fmt::Display::fmt(array, f),
            Self::Property(property) => fmt::Display::fmt(property, f),
            Self::Scalar(scalar) => fmt::Display::fmt(scalar, f),
        }
    }
}

impl From<Object> for Token {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl From<Array> for Token {
    fn from(value: Array) -> Self {
        Self::Array(value)
    }
}

impl From<Property> for Token {
    fn from(value: Property) -> Self {
        Self::Property(value)
    }
}

impl From<Scalar> for Token {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

// =============================================================================
// Property - A named binding
// =============================================================================

/// A `(name, value)` binding.
///
/// Properties normally live inside an [`Object`], but a standalone property is
/// also a valid token.
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    name: String,
    value: Box<Token>,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<Token>) -> Self {
        Self {
            name: name.into(),
            value: Box::new(value.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Token {
        &self.value
    }

    /// Splits the property into its name and value.
    pub fn into_parts(self) -> (String, Token) {
        (self.name, *self.value)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        scalar::write_json_string(f, &self.name)?;
        write!(f, ":{}", self.value)
    }
}

// =============================================================================
// Object - Ordered members
// =============================================================================

/// An ordered collection of [`Property`] members.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object {
    members: Vec<Property>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
        }
    }

    /// Appends a member and returns the object, for chained construction.
    #[must_use]
    pub fn with_member(mut self, name: impl Into<String>, value: impl Into<Token>) -> Self {
        self.push(Property::new(name, value));
        self
    }

    /// Appends a member at the end. Existing members with the same name are kept.
    pub fn push(&mut self, member: Property) {
        self.members.push(member);
    }

    /// Returns the value of the first member named `name`.
    pub fn get(&self, name: &str) -> Option<&Token> {
        self.members
            .iter()
            .find(|member| member.name == name)
            .map(Property::value)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.members.iter()
    }

    /// Member names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(Property::name)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, member) in self.members.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            fmt::Display::fmt(member, f)?;
        }
        f.write_str("}")
    }
}

impl FromIterator<Property> for Object {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl IntoIterator for Object {
    type Item = Property;
    type IntoIter = std::vec::IntoIter<Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

// =============================================================================
// Array - Ordered elements
// =============================================================================

/// An ordered sequence of tokens.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Array {
    items: Vec<Token>,
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, item: impl Into<Token>) {
        self.items.push(item.into());
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.items.iter()
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str("]")
    }
}

impl<T> FromIterator<T> for Array
where
    T: Into<Token>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Array {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_keeps_insertion_order_and_duplicates() {
        let object = Object::new()
            .with_member("b", 1)
            .with_member("a", 2)
            .with_member("b", 3);

        let names: Vec<&str> = object.names().collect();
        assert_eq!(names, ["b", "a", "b"]);
        assert_eq!(object.get("b"), Some(&Token::from(1)));
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Token::from(Object::new()).kind(), TokenKind::Object);
        assert_eq!(Token::from(Array::new()).kind(), TokenKind::Array);
        assert_eq!(Token::from(Property::new("a", 1)).kind(), TokenKind::Property);
        assert_eq!(Token::NULL.kind(), TokenKind::Scalar);
        assert!(Token::from("x").is_scalar());
    }

    #[test]
    fn display_prints_compact_json() {
        let token = Token::from(
            Object::new()
                .with_member("name", "Sam \"the\" man")
                .with_member("tags", ["a", "b"].into_iter().collect::<Array>())
                .with_member("age", 80)
                .with_member("ok", true)
                .with_member("none", Scalar::Null),
        );

        assert_eq!(
            token.to_string(),
            r#"{"name":"Sam \"the\" man","tags":["a","b"],"age":80,"ok":true,"none":null}"#
        );
    }

    #[test]
    fn property_display_includes_name() {
        let property = Property::new("password", "x");
        assert_eq!(property.to_string(), r#""password":"x""#);
    }
}
