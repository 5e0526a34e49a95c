//! Fixed-width padded text field

use super::{char_len, Field, FieldMeta};
use crate::{Error, Result};
use std::str::FromStr;

/// Side the text sits on inside a fixed-width cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    /// Text first, padding after.
    #[default]
    Left,
    /// Padding first, text after (numbers).
    Right,
}

impl FromStr for Justify {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(Error::InvalidField(format!(
                "justify must be 'left' or 'right', got '{other}'"
            ))),
        }
    }
}

/// Text padded or cut to exactly `length` characters.
///
/// Short text is padded on the side opposite the justification; long text is
/// cut on that same side, so a right-justified number keeps its low digits.
///
/// With [`FixedChar::value`] the field becomes static: every write is ignored
/// and the padded constant is stored instead.
#[derive(Debug)]
pub struct FixedChar {
    meta: FieldMeta,
    length: usize,
    pad: char,
    justify: Justify,
    value: Option<String>,
}

impl FixedChar {
    /// Create a left-justified, space-padded field of `length` characters.
    ///
    /// A zero `length` yields a field that always stores the empty string;
    /// use [`FixedChar::try_new`] when the width comes from outside the program.
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            meta: FieldMeta::new(),
            length,
            pad: ' ',
            justify: Justify::Left,
            value: None,
        }
    }

    /// Create a field of `length` characters, rejecting a zero width.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] when `length` is 0.
    pub fn try_new(length: usize) -> Result<Self> {
        if length == 0 {
            return Err(Error::InvalidField(
                "field_length must be greater than 0".to_owned(),
            ));
        }
        Ok(Self::new(length))
    }

    /// Set the padding character.
    #[must_use]
    pub const fn pad_with(mut self, pad: char) -> Self {
        self.pad = pad;
        self
    }

    /// Set justification.
    #[must_use]
    pub const fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    /// Make the field static, always holding `value`.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Seed fresh records with `value` (stored verbatim).
    ///
    /// Ignored on static fields, which always start at their constant.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.meta.set_default(value.into());
        self
    }

    /// Cell width in characters.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Whether writes are ignored.
    #[must_use]
    pub const fn is_static(&self) -> bool {
        self.value.is_some()
    }

    fn pad(&self, text: &str) -> String {
        let width = char_len(text);
        if width > self.length {
            return match self.justify {
                Justify::Left => text.chars().take(self.length).collect(),
                Justify::Right => text.chars().skip(width - self.length).collect(),
            };
        }
        let fill = self.pad.to_string().repeat(self.length - width);
        match self.justify {
            Justify::Left => format!("{text}{fill}"),
            Justify::Right => format!("{fill}{text}"),
        }
    }
}

impl Field for FixedChar {
    fn to_record(&self, raw: &str) -> String {
        self.pad(self.value.as_deref().unwrap_or(raw))
    }

    fn default_value(&self) -> String {
        if self.is_static() {
            return self.to_record("");
        }
        self.meta
            .default_override()
            .map_or_else(|| self.to_record(""), str::to_owned)
    }

    fn validate(&self, value: &str) -> Result<()> {
        let len = char_len(value);
        if len != self.length {
            return Err(Error::Validation {
                field: self.meta.display_name(),
                reason: format!("length {len} does not match field_length {}", self.length),
            });
        }
        Ok(())
    }

    fn meta(&self) -> &FieldMeta {
        &self.meta
    }
}
