//! JSON writer
//!
//! `serde_json`'s own serializer cannot express the escape flags or the
//! configurable nesting depth the JSON cast accepts, so the cast walks the
//! value tree itself and writes RFC 8259 text directly. Output is always
//! parseable by a standard JSON parser.
//!
//! Nested objects encode through the same three-tier strategy as the
//! top-level dispatch in the JSON cast.

use std::fmt::{self, Write as _};

use crate::cast::json::JsonOptions;
use crate::collections::{Array, Key};
use crate::core::object::ObjectValue;
use crate::core::value::Value;

/// Why the encoder stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EncodeError {
    /// Nesting deeper than the configured maximum
    DepthExceeded,
    /// A NaN or infinite float inside the value tree
    NonFinite,
    /// A variant JSON cannot represent at all
    UnsupportedType(&'static str),
    /// A nested object's structured export was not a collection
    ExportNotCollection { class: String },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthExceeded => write!(f, "Maximum stack depth exceeded"),
            Self::NonFinite => write!(f, "Inf and NaN cannot be JSON encoded"),
            Self::UnsupportedType(name) => write!(f, "type {name} is not supported"),
            Self::ExportNotCollection { class } => write!(
                f,
                "structured export of {class} did not return a collection"
            ),
        }
    }
}

/// Object encoding strategy, in priority order. The names appear in
/// failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ObjectStrategy {
    Native,
    Export,
    Fields,
}

impl ObjectStrategy {
    pub(crate) const fn name(self) -> &'static str {
        match self {
            Self::Native => "native JSON serialization",
            Self::Export => "structured export",
            Self::Fields => "public fields",
        }
    }
}

/// Resolve the value an object encodes as.
///
/// Native JSON serialization wins over structured export, which wins over
/// public field reflection. Unlike the collection cast, a non-collection
/// export is a hard failure here.
pub(crate) fn resolve_object(
    object: &dyn ObjectValue,
) -> Result<(ObjectStrategy, Value), EncodeError> {
    if let Some(json) = object.json_value() {
        return Ok((ObjectStrategy::Native, json));
    }

    if let Some(exported) = object.export() {
        return match exported {
            Value::Array(_) => Ok((ObjectStrategy::Export, exported)),
            _ => Err(EncodeError::ExportNotCollection {
                class: object.class_name().to_string(),
            }),
        };
    }

    let fields: Array = object
        .fields()
        .into_iter()
        .map(|(name, value)| (Key::Name(name), value))
        .collect();
    Ok((ObjectStrategy::Fields, Value::Array(fields)))
}

/// Encode a value as JSON text under the given options.
pub(crate) fn encode(value: &Value, options: &JsonOptions) -> Result<String, EncodeError> {
    let mut writer = JsonWriter {
        out: String::new(),
        options,
    };
    writer.write_value(value, options.max_depth, 0)?;
    Ok(writer.out)
}

struct JsonWriter<'a> {
    out: String,
    options: &'a JsonOptions,
}

impl JsonWriter<'_> {
    fn write_value(
        &mut self,
        value: &Value,
        depth_left: usize,
        indent: usize,
    ) -> Result<(), EncodeError> {
        match value {
            Value::Null => {
                self.out.push_str("null");
                Ok(())
            }
            Value::Boolean(b) => {
                self.out.push_str(if *b { "true" } else { "false" });
                Ok(())
            }
            Value::Integer(i) => {
                let _ = write!(self.out, "{i}");
                Ok(())
            }
            Value::Float(f) => match serde_json::Number::from_f64(*f) {
                Some(number) => {
                    let _ = write!(self.out, "{number}");
                    Ok(())
                }
                None => Err(EncodeError::NonFinite),
            },
            Value::Text(t) => {
                self.write_string(t);
                Ok(())
            }
            Value::Array(array) => self.write_array(array, depth_left, indent),
            Value::Object(object) => {
                let (_, payload) = resolve_object(object.as_ref())?;
                self.write_value(&payload, depth_left, indent)
            }
            Value::Resource(_) => Err(EncodeError::UnsupportedType("resource")),
        }
    }

    /// List-shaped arrays write as JSON arrays, everything else as objects
    /// with stringified keys. Entering either consumes one depth level.
    fn write_array(
        &mut self,
        array: &Array,
        depth_left: usize,
        indent: usize,
    ) -> Result<(), EncodeError> {
        if depth_left == 0 {
            return Err(EncodeError::DepthExceeded);
        }

        let as_list = array.is_list();
        self.out.push(if as_list { '[' } else { '{' });
        for (position, (key, value)) in array.iter().enumerate() {
            if position > 0 {
                self.out.push(',');
            }
            self.newline_indent(indent + 1);
            if !as_list {
                self.write_string(&key.to_string());
                self.out.push(':');
                if self.options.pretty {
                    self.out.push(' ');
                }
            }
            self.write_value(value, depth_left - 1, indent + 1)?;
        }
        if !array.is_empty() {
            self.newline_indent(indent);
        }
        self.out.push(if as_list { ']' } else { '}' });
        Ok(())
    }

    fn write_string(&mut self, text: &str) {
        self.out.push('"');
        for c in text.chars() {
            match c {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\u{0008}' => self.out.push_str("\\b"),
                '\u{000C}' => self.out.push_str("\\f"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                '/' if self.options.escape_slashes => self.out.push_str("\\/"),
                c if (c as u32) < 0x20 => {
                    let _ = write!(self.out, "\\u{:04x}", c as u32);
                }
                c if c.is_ascii() || !self.options.escape_unicode => self.out.push(c),
                c => {
                    let mut units = [0u16; 2];
                    for unit in c.encode_utf16(&mut units).iter() {
                        let _ = write!(self.out, "\\u{unit:04x}");
                    }
                }
            }
        }
        self.out.push('"');
    }

    fn newline_indent(&mut self, indent: usize) {
        if self.options.pretty {
            self.out.push('\n');
            for _ in 0..indent {
                self.out.push_str("    ");
            }
        }
    }
}
