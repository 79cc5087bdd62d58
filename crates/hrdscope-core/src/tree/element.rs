use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::TreeError;
use super::value::{format_bool, parse_bool, parse_unsigned};

/// Named node with string-valued attributes, kept in name order.
///
/// # Examples
/// ```
/// use hrdscope_core::tree::Element;
///
/// let mut element = Element::new("example");
/// element.set_bool_attribute("enabled", true);
/// element.set_optional_int_attribute("count", Some(3u32));
/// element.set_optional_int_attribute::<u32>("absent", None);
/// assert_eq!(element.to_string(), r#"<example count="3" enabled="true"/>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Element name.
    pub name: String,
    /// Attribute values in textual form.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    pub fn set_bool_attribute(&mut self, name: &str, value: bool) {
        self.set_attribute(name, format_bool(value));
    }

    pub fn set_int_attribute<T: fmt::Display>(&mut self, name: &str, value: T) {
        self.set_attribute(name, value.to_string());
    }

    /// Set the attribute when `value` holds something; leave it out otherwise.
    pub fn set_optional_int_attribute<T: fmt::Display>(&mut self, name: &str, value: Option<T>) {
        if let Some(value) = value {
            self.set_int_attribute(name, value);
        }
    }

    pub fn expect_name(&self, expected: &str) -> Result<(), TreeError> {
        if self.name != expected {
            return Err(TreeError::UnexpectedElement {
                expected: expected.to_string(),
                actual: self.name.clone(),
            });
        }
        Ok(())
    }

    /// Read a boolean attribute.
    ///
    /// When the attribute is absent, `required` decides between a
    /// `MissingAttribute` error and returning `default`.
    pub fn get_bool_attribute(
        &self,
        name: &str,
        required: bool,
        default: bool,
    ) -> Result<bool, TreeError> {
        let Some(text) = self.attribute(name) else {
            if required {
                return Err(self.missing(name));
            }
            return Ok(default);
        };
        parse_bool(text).ok_or_else(|| self.malformed(name, text, "a boolean".to_string()))
    }

    /// Read an optional unsigned integer attribute that must fit `T`.
    pub fn get_optional_int_attribute<T>(&self, name: &str) -> Result<Option<T>, TreeError>
    where
        T: TryFrom<u64>,
    {
        let Some(text) = self.attribute(name) else {
            return Ok(None);
        };
        parse_unsigned(text)
            .and_then(|value| T::try_from(value).ok())
            .map(Some)
            .ok_or_else(|| {
                self.malformed(
                    name,
                    text,
                    format!("an unsigned integer in {} range", std::any::type_name::<T>()),
                )
            })
    }

    fn missing(&self, attribute: &str) -> TreeError {
        TreeError::MissingAttribute {
            element: self.name.clone(),
            attribute: attribute.to_string(),
        }
    }

    fn malformed(&self, attribute: &str, value: &str, expected: String) -> TreeError {
        TreeError::MalformedValue {
            element: self.name.clone(),
            attribute: attribute.to_string(),
            value: value.to_string(),
            expected,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, escape_attribute(value))?;
        }
        write!(f, "/>")
    }
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
