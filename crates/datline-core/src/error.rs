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

//! Error types for condition line parsing.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred while building a grammar or parsing a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatErrorKind {
    /// A mandatory field (or its label) is absent from the line.
    RequiredFieldMissing,
    /// A token has no numeric prefix at all.
    MalformedNumber,
    /// Characters remain after the numeric prefix of a token.
    TrailingGarbage,
    /// A token is not one of the accepted boolean literals.
    InvalidBooleanLiteral,
    /// The same parameter name was written twice in one line-parse pass.
    DuplicateKey,
    /// A programming error: an unreachable state given construction-time checks.
    InternalInconsistency,
    /// A grammar was defined inconsistently (bad default, mismatched tables).
    InvalidGrammarDefinition,
    /// A resource limit was exceeded.
    LimitExceeded,
}

impl fmt::Display for DatErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequiredFieldMissing => write!(f, "RequiredFieldMissing"),
            Self::MalformedNumber => write!(f, "MalformedNumber"),
            Self::TrailingGarbage => write!(f, "TrailingGarbage"),
            Self::InvalidBooleanLiteral => write!(f, "InvalidBooleanLiteral"),
            Self::DuplicateKey => write!(f, "DuplicateKey"),
            Self::InternalInconsistency => write!(f, "InternalInconsistency"),
            Self::InvalidGrammarDefinition => write!(f, "InvalidGrammarDefinition"),
            Self::LimitExceeded => write!(f, "LimitExceeded"),
        }
    }
}

/// An error raised while building a grammar or parsing a condition line.
///
/// Every per-field error is fatal to the current line's parse and propagates
/// immediately; the caller decides whether to abort the whole file or skip the
/// line. Callers should match on [`kind`](DatError::kind) rather than on the
/// message text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct DatError {
    /// The kind of error.
    pub kind: DatErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// The field (component name or separator label) the error refers to.
    pub field: Option<String>,
    /// The section the offending line belongs to.
    pub section: Option<String>,
    /// Additional context (e.g., "while parsing defaults").
    pub context: Option<String>,
}

impl DatError {
    /// Create a new error.
    pub fn new(kind: DatErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field: None,
            section: None,
            context: None,
        }
    }

    /// Record the field the error refers to.
    pub fn in_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Record the section the offending line belongs to.
    pub fn in_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// A mandatory labeled field is absent from the line.
    pub fn required_field_missing(field: &str, section: &str) -> Self {
        Self::new(
            DatErrorKind::RequiredFieldMissing,
            format!(
                "required parameter '{}' in section '{}' not specified in input file",
                field, section
            ),
        )
        .in_field(field)
        .in_section(section)
    }

    /// A mandatory field supplied no value at all (empty token).
    pub fn missing_value(field: &str, section: &str, expected_values: usize) -> Self {
        Self::new(
            DatErrorKind::RequiredFieldMissing,
            format!(
                "no value for parameter '{}' in section '{}' specified; '{}' expects {} input value(s)",
                field, section, field, expected_values
            ),
        )
        .in_field(field)
        .in_section(section)
    }

    /// A token cannot be parsed as a number at all.
    pub fn malformed_number(value: &str, field: &str, section: &str) -> Self {
        Self::new(
            DatErrorKind::MalformedNumber,
            format!(
                "failed to read value '{}' of parameter '{}' in section '{}'",
                value, field, section
            ),
        )
        .in_field(field)
        .in_section(section)
    }

    /// Characters remain after the numeric prefix of a token.
    pub fn trailing_garbage(value: &str, rest: &str, field: &str, section: &str) -> Self {
        Self::new(
            DatErrorKind::TrailingGarbage,
            format!(
                "value '{}' of parameter '{}' in section '{}' leaves unread characters '{}'; the number format is not supported",
                value, field, section, rest
            ),
        )
        .in_field(field)
        .in_section(section)
    }

    /// A token is not an accepted boolean literal.
    pub fn invalid_boolean(value: &str, field: &str, section: &str) -> Self {
        Self::new(
            DatErrorKind::InvalidBooleanLiteral,
            format!(
                "value '{}' of parameter '{}' in section '{}' is not a boolean literal",
                value, field, section
            ),
        )
        .in_field(field)
        .in_section(section)
    }

    /// A parameter name was written twice within one line-parse pass.
    pub fn duplicate_key(name: &str) -> Self {
        Self::new(
            DatErrorKind::DuplicateKey,
            format!("parameter '{}' was already written in this pass", name),
        )
        .in_field(name)
    }

    /// A programming error that construction-time validation should preclude.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(DatErrorKind::InternalInconsistency, message)
    }

    /// A grammar definition is inconsistent.
    pub fn invalid_grammar(message: impl Into<String>) -> Self {
        Self::new(DatErrorKind::InvalidGrammarDefinition, message)
    }

    /// A resource limit was exceeded.
    pub fn limit_exceeded(message: impl Into<String>) -> Self {
        Self::new(DatErrorKind::LimitExceeded, message)
    }
}

/// Result type for datline operations.
pub type DatResult<T> = Result<T, DatError>;
