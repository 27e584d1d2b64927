use std::io::Write;
use indexmap::IndexMap;
use crate::compiler::evaluator::Value;
use crate::util;

#[cfg(test)]
mod tests;

/// Writes an evaluated [`Value`] as a TOML document.
///
/// Tables below the root are always written inline, so the document never
/// contains `[section]` headers. A root that is not a table is written as a
/// single `value = ...` line.
pub struct TomlWriter;

const ROOT_KEY: &str = "value";

impl TomlWriter {
    pub fn new() -> TomlWriter {
        TomlWriter
    }

    pub fn write_document(&self, root: &Value, out: &mut impl Write) -> Result<(), std::io::Error> {
        match root {
            Value::Table(fields) => {
                for (name, field) in fields {
                    self.write_key(name, out)?;
                    write!(out, " = ")?;
                    self.write_element(field, out)?;
                    writeln!(out)?;
                }

                Ok(())
            },
            _ => {
                self.write_key(ROOT_KEY, out)?;
                write!(out, " = ")?;
                self.write_element(root, out)?;
                writeln!(out)
            },
        }
    }

    pub fn write_element(&self, element: &Value, out: &mut impl Write) -> Result<(), std::io::Error> {
        match element {
            Value::Integer(value) => write!(out, "{}", value),
            Value::Array(elements) => self.write_array(elements, out),
            Value::Table(fields) => self.write_inline_table(fields, out),
        }
    }

    fn write_inline_table(&self, fields: &IndexMap<String, Value>, out: &mut impl Write) -> Result<(), std::io::Error> {
        write!(out, "{{ ")?;

        for (i, (name, field)) in fields.iter().enumerate() {
            if i > 0 {
                write!(out, ", ")?;
            }

            self.write_key(name, out)?;
            write!(out, " = ")?;
            self.write_element(field, out)?;
        }

        write!(out, " }}")
    }

    fn write_array(&self, elements: &[Value], out: &mut impl Write) -> Result<(), std::io::Error> {
        write!(out, "[")?;

        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                write!(out, ", ")?;
            }

            self.write_element(element, out)?;
        }

        write!(out, "]")
    }

    fn write_key(&self, key: &str, out: &mut impl Write) -> Result<(), std::io::Error> {
        if util::is_bare_key(key) {
            write!(out, "{}", key)
        } else {
            // Identifiers never contain quotes or backslashes
            write!(out, "\"{}\"", key)
        }
    }
}

impl Default for TomlWriter {
    fn default() -> Self {
        Self::new()
    }
}
