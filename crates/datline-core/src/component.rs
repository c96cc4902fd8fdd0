// Datline - structured condition line grammars
//
// Copyright (c) 2025 Datline contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The component contract and its leaf implementations.
//!
//! A component consumes one typed token (or a run of tokens) from a line
//! cursor, converts it, validates it, and inserts it into the parameter
//! container. The component set is closed: every kind is a variant of
//! [`Component`], and each operation dispatches through one exhaustive
//! `match`. Components are immutable grammar descriptors, constructed once
//! and shared read-only across every line that matches the same grammar.
//!
//! Absence policy: an optional component whose field is absent (label not
//! found, or no token left) writes its declared default and leaves the cursor
//! anchor untouched; a mandatory component in the same situation fails with
//! `RequiredFieldMissing`.

use crate::container::ParamContainer;
use crate::cursor::LineCursor;
use crate::error::{DatError, DatResult};
use crate::length::Length;
use crate::limits::Limits;
use crate::number;
use crate::switch::{Selection, Switch};

/// Input-file literal written for `true` booleans in rendered defaults.
pub(crate) const BOOL_TRUE: &str = "Yes";
/// Input-file literal written for `false` booleans in rendered defaults.
pub(crate) const BOOL_FALSE: &str = "No";

/// Decode one of the accepted boolean literal sets.
fn bool_from_literal(token: &str) -> Option<bool> {
    match token {
        "Yes" | "YES" | "yes" | "True" | "TRUE" | "true" => Some(true),
        "No" | "NO" | "no" | "False" | "FALSE" | "false" => Some(false),
        _ => None,
    }
}

/// One row of the "read the docs" table: rendered token, optionality,
/// description.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocRow {
    /// The token or placeholder as it appears in an input line.
    pub token: String,
    /// Whether the field may be omitted.
    pub optional: bool,
    /// Human-readable description (often empty for value components).
    pub description: String,
}

/// A literal label token, consumed and discarded; only moves the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator {
    label: String,
    description: String,
    optional: bool,
}

impl Separator {
    fn read(&self, section: &str, cursor: &mut LineCursor) -> DatResult<()> {
        if !cursor.consume_label(&self.label) {
            if self.optional {
                cursor.seek_to_end();
            } else {
                return Err(DatError::required_field_missing(&self.label, section));
            }
        }
        Ok(())
    }
}

/// One token stored as a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrField {
    name: String,
    default: String,
    optional: bool,
}

impl StrField {
    fn read(
        &self,
        section: &str,
        cursor: &mut LineCursor,
        container: &mut ParamContainer,
    ) -> DatResult<()> {
        match cursor.read_token() {
            Some(token) => container.insert(self.name.as_str(), token),
            None if self.optional => {
                container.insert(self.name.as_str(), self.default.as_str())
            }
            None => Err(DatError::missing_value(&self.name, section, 1)),
        }
    }
}

/// One token converted to an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntField {
    name: String,
    default: i64,
    optional: bool,
}

impl IntField {
    fn read(
        &self,
        section: &str,
        cursor: &mut LineCursor,
        container: &mut ParamContainer,
    ) -> DatResult<()> {
        match cursor.read_token() {
            Some(token) => {
                let value = number::int_from_token(&token, &self.name, section, 1, self.optional)?;
                container.insert(self.name.as_str(), value)
            }
            None if self.optional => container.insert(self.name.as_str(), self.default),
            None => Err(DatError::missing_value(&self.name, section, 1)),
        }
    }
}

/// One token converted to a floating-point value.
///
/// An absent optional value keeps the default and does not move the anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct RealField {
    name: String,
    default: f64,
    optional: bool,
}

impl RealField {
    fn read(
        &self,
        section: &str,
        cursor: &mut LineCursor,
        container: &mut ParamContainer,
    ) -> DatResult<()> {
        match cursor.read_token() {
            Some(token) => {
                let value = number::real_from_token(&token, &self.name, section, 1, self.optional)?;
                container.insert(self.name.as_str(), value)
            }
            None if self.optional => container.insert(self.name.as_str(), self.default),
            None => Err(DatError::missing_value(&self.name, section, 1)),
        }
    }
}

/// One token converted to a boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolField {
    name: String,
    default: bool,
    optional: bool,
}

impl BoolField {
    fn read(
        &self,
        section: &str,
        cursor: &mut LineCursor,
        container: &mut ParamContainer,
    ) -> DatResult<()> {
        match cursor.read_token() {
            Some(token) => match bool_from_literal(&token) {
                Some(value) => container.insert(self.name.as_str(), value),
                None => Err(DatError::invalid_boolean(&token, &self.name, section)),
            },
            None if self.optional => container.insert(self.name.as_str(), self.default),
            None => Err(DatError::missing_value(&self.name, section, 1)),
        }
    }
}

/// A fixed- or dynamically-sized run of integer tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntVectorField {
    name: String,
    length: Length,
    default: i64,
    optional: bool,
}

impl IntVectorField {
    fn read(
        &self,
        section: &str,
        cursor: &mut LineCursor,
        container: &mut ParamContainer,
        limits: &Limits,
    ) -> DatResult<()> {
        let length = self.length.resolve(&self.name, section, container)?;
        check_vector_length(&self.name, section, length, limits)?;
        let mut values = vec![self.default; length];
        for slot in values.iter_mut() {
            match cursor.read_token() {
                Some(token) => {
                    *slot =
                        number::int_from_token(&token, &self.name, section, length, self.optional)?;
                }
                // an optional vector may stop early; unread slots keep the default
                None if self.optional => break,
                None => return Err(DatError::missing_value(&self.name, section, length)),
            }
        }
        container.insert(self.name.as_str(), values)
    }
}

/// A fixed- or dynamically-sized run of floating-point tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct RealVectorField {
    name: String,
    length: Length,
    default: f64,
    optional: bool,
}

impl RealVectorField {
    fn read(
        &self,
        section: &str,
        cursor: &mut LineCursor,
        container: &mut ParamContainer,
        limits: &Limits,
    ) -> DatResult<()> {
        let length = self.length.resolve(&self.name, section, container)?;
        check_vector_length(&self.name, section, length, limits)?;
        let mut values = vec![self.default; length];
        for slot in values.iter_mut() {
            match cursor.read_token() {
                Some(token) => {
                    *slot = number::real_from_token(
                        &token,
                        &self.name,
                        section,
                        length,
                        self.optional,
                    )?;
                }
                None if self.optional => break,
                None => return Err(DatError::missing_value(&self.name, section, length)),
            }
        }
        container.insert(self.name.as_str(), values)
    }
}

fn check_vector_length(
    name: &str,
    section: &str,
    length: usize,
    limits: &Limits,
) -> DatResult<()> {
    if length > limits.max_vector_length {
        return Err(DatError::limit_exceeded(format!(
            "vector '{}' in section '{}' resolves to length {}, which exceeds the maximum {}",
            name, section, length, limits.max_vector_length
        )));
    }
    Ok(())
}

/// A single typed parser/writer for one field of one input line.
///
/// The variant set is closed; each operation dispatches exhaustively so a new
/// kind cannot be added without extending every operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    /// A literal label, consumed and discarded.
    Separator(Separator),
    /// One token stored as a string.
    Str(StrField),
    /// One token converted to an integer.
    Int(IntField),
    /// One token converted to a floating-point value.
    Real(RealField),
    /// One token converted to a boolean.
    Bool(BoolField),
    /// A run of integer tokens.
    IntVector(IntVectorField),
    /// A run of floating-point tokens.
    RealVector(RealVectorField),
    /// One of a finite set of literals, searched anywhere in the line.
    Selection(Selection),
    /// A discriminator-driven composite of further component sequences.
    Switch(Switch),
}

impl Component {
    /// A separator consuming the literal `label`.
    pub fn separator(
        label: impl Into<String>,
        description: impl Into<String>,
        optional: bool,
    ) -> Self {
        Self::Separator(Separator {
            label: label.into(),
            description: description.into(),
            optional,
        })
    }

    /// A string field.
    pub fn string(name: impl Into<String>, default: impl Into<String>, optional: bool) -> Self {
        Self::Str(StrField {
            name: name.into(),
            default: default.into(),
            optional,
        })
    }

    /// An integer field.
    pub fn int(name: impl Into<String>, default: i64, optional: bool) -> Self {
        Self::Int(IntField {
            name: name.into(),
            default,
            optional,
        })
    }

    /// A floating-point field.
    pub fn real(name: impl Into<String>, default: f64, optional: bool) -> Self {
        Self::Real(RealField {
            name: name.into(),
            default,
            optional,
        })
    }

    /// A boolean field.
    pub fn boolean(name: impl Into<String>, default: bool, optional: bool) -> Self {
        Self::Bool(BoolField {
            name: name.into(),
            default,
            optional,
        })
    }

    /// An integer vector field of the given length definition.
    pub fn int_vector(
        name: impl Into<String>,
        length: impl Into<Length>,
        default: i64,
        optional: bool,
    ) -> Self {
        Self::IntVector(IntVectorField {
            name: name.into(),
            length: length.into(),
            default,
            optional,
        })
    }

    /// A floating-point vector field of the given length definition.
    pub fn real_vector(
        name: impl Into<String>,
        length: impl Into<Length>,
        default: f64,
        optional: bool,
    ) -> Self {
        Self::RealVector(RealVectorField {
            name: name.into(),
            length: length.into(),
            default,
            optional,
        })
    }

    /// A selection mapping input-file literals to string outputs.
    ///
    /// Validated eagerly: `literals` and `outputs` must have equal
    /// cardinality, `literals` must be duplicate-free, and `default_literal`
    /// must appear among them.
    pub fn selection(
        name: impl Into<String>,
        default_literal: &str,
        literals: &[&str],
        outputs: &[&str],
    ) -> DatResult<Self> {
        Ok(Self::Selection(Selection::strings(
            name,
            default_literal,
            literals,
            outputs,
        )?))
    }

    /// A selection mapping input-file literals to integer outputs.
    pub fn int_selection(
        name: impl Into<String>,
        default_literal: &str,
        literals: &[&str],
        outputs: &[i64],
    ) -> DatResult<Self> {
        Ok(Self::Selection(Selection::ints(
            name,
            default_literal,
            literals,
            outputs,
        )?))
    }

    /// A switch dispatching on an integer-keyed discriminator.
    ///
    /// Each choice is `(key, input-file literal, component sequence)`.
    /// Validated eagerly: keys must be unique, the literal table must be
    /// consistent, and `default_key` must be registered.
    pub fn switch(
        name: impl Into<String>,
        default_key: i64,
        choices: Vec<(i64, &str, Vec<Component>)>,
    ) -> DatResult<Self> {
        Ok(Self::Switch(Switch::new(name, default_key, choices)?))
    }

    /// The component's name: the container key, or the literal text for a
    /// separator.
    pub fn name(&self) -> &str {
        match self {
            Self::Separator(c) => &c.label,
            Self::Str(c) => &c.name,
            Self::Int(c) => &c.name,
            Self::Real(c) => &c.name,
            Self::Bool(c) => &c.name,
            Self::IntVector(c) => &c.name,
            Self::RealVector(c) => &c.name,
            Self::Selection(c) => c.name(),
            Self::Switch(c) => c.name(),
        }
    }

    /// Whether the field may be omitted from the line.
    pub fn is_optional(&self) -> bool {
        match self {
            Self::Separator(c) => c.optional,
            Self::Str(c) => c.optional,
            Self::Int(c) => c.optional,
            Self::Real(c) => c.optional,
            Self::Bool(c) => c.optional,
            Self::IntVector(c) => c.optional,
            Self::RealVector(c) => c.optional,
            // a selection falls back to its default instead of failing,
            // a switch always decodes its discriminator
            Self::Selection(_) | Self::Switch(_) => false,
        }
    }

    /// Consume this component's token(s) from the cursor and write the
    /// decoded value into the container.
    pub fn read(
        &self,
        section: &str,
        cursor: &mut LineCursor,
        container: &mut ParamContainer,
        limits: &Limits,
    ) -> DatResult<()> {
        match self {
            Self::Separator(c) => c.read(section, cursor),
            Self::Str(c) => c.read(section, cursor, container),
            Self::Int(c) => c.read(section, cursor, container),
            Self::Real(c) => c.read(section, cursor, container),
            Self::Bool(c) => c.read(section, cursor, container),
            Self::IntVector(c) => c.read(section, cursor, container, limits),
            Self::RealVector(c) => c.read(section, cursor, container, limits),
            Self::Selection(c) => c.read(cursor, container),
            Self::Switch(c) => c.read(section, cursor, container, limits),
        }
    }

    /// Append this component's default/placeholder text to a rendered
    /// default line.
    pub fn default_line(&self, out: &mut String) {
        match self {
            Self::Separator(c) => out.push_str(&c.label),
            Self::Str(c) => out.push_str(&c.default),
            Self::Int(c) => out.push_str(&c.default.to_string()),
            Self::Real(c) => out.push_str(&c.default.to_string()),
            Self::Bool(c) => out.push_str(if c.default { BOOL_TRUE } else { BOOL_FALSE }),
            Self::IntVector(c) => {
                push_repeated(out, &c.default.to_string(), c.length.default_length())
            }
            Self::RealVector(c) => {
                push_repeated(out, &c.default.to_string(), c.length.default_length())
            }
            Self::Selection(c) => out.push_str(c.default_literal()),
            Self::Switch(c) => c.default_line(out),
        }
    }

    /// The single token or placeholder this component contributes to a
    /// rendered documentation line.
    pub fn doc_token(&self) -> String {
        match self {
            Self::Separator(c) => c.label.clone(),
            Self::Str(c) => format!("<{}>", c.name),
            Self::Int(c) => c.default.to_string(),
            Self::Real(c) => c.default.to_string(),
            Self::Bool(c) => (if c.default { BOOL_TRUE } else { BOOL_FALSE }).to_string(),
            Self::IntVector(c) => format!("<int vec:{}>", c.name),
            Self::RealVector(c) => format!("<real vec:{}>", c.name),
            Self::Selection(c) => c.doc_token(),
            Self::Switch(c) => c.doc_token(),
        }
    }

    /// Documentation table rows for this component.
    ///
    /// Leaves contribute one row; a switch contributes one row per registered
    /// choice so generated docs cover every branch.
    pub fn doc_rows(&self) -> Vec<DocRow> {
        match self {
            Self::Separator(c) => vec![DocRow {
                token: c.label.clone(),
                optional: c.optional,
                description: c.description.clone(),
            }],
            Self::Switch(c) => c
                .doc_lines()
                .into_iter()
                .map(|line| DocRow {
                    token: line,
                    optional: false,
                    description: String::new(),
                })
                .collect(),
            _ => vec![DocRow {
                token: self.doc_token(),
                optional: self.is_optional(),
                description: String::new(),
            }],
        }
    }
}

fn push_repeated(out: &mut String, text: &str, count: usize) {
    for i in 0..count {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(text);
    }
}
