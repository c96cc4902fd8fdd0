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

//! Ordered component sequences describing the grammar of one line.
//!
//! A [`LineGrammar`] is built once, at definition time, and reused for every
//! line of the matching section. Most catalogue grammars are labeled-field
//! chains, so the `named_*` builders add the common "separator carrying the
//! field label, followed by the value component of the same name" pair in one
//! call:
//!
//! ```
//! use datline_core::{Length, LineGrammar};
//!
//! let grammar = LineGrammar::new()
//!     .named_int("NUMSCAL", 0, false)
//!     .named_int_vector("STOICHIOMETRIES", Length::from_field("NUMSCAL"), 0, false)
//!     .named_real("K_R", 0.0, false);
//!
//! let params = grammar
//!     .parse("SURFACE KINETICS", "NUMSCAL 2 STOICHIOMETRIES -1 1 K_R 1.5")
//!     .unwrap();
//! assert_eq!(params.get_int_vec("STOICHIOMETRIES"), Some(&[-1, 1][..]));
//! ```

use crate::component::{Component, DocRow};
use crate::container::ParamContainer;
use crate::cursor::LineCursor;
use crate::error::{DatError, DatResult};
use crate::length::Length;
use crate::limits::Limits;

/// The grammar of one input-file line: an ordered component sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineGrammar {
    components: Vec<Component>,
}

impl LineGrammar {
    /// Create an empty grammar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component.
    pub fn push(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Append a component, fluently.
    pub fn with(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    /// The ordered component sequence.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Append a labeled separator.
    pub fn separator(self, label: &str, description: &str, optional: bool) -> Self {
        self.with(Component::separator(label, description, optional))
    }

    /// Append a labeled integer field (`NAME <int>`).
    pub fn named_int(self, name: &str, default: i64, optional: bool) -> Self {
        self.with(Component::separator(name, "", optional))
            .with(Component::int(name, default, optional))
    }

    /// Append a labeled floating-point field (`NAME <real>`).
    pub fn named_real(self, name: &str, default: f64, optional: bool) -> Self {
        self.with(Component::separator(name, "", optional))
            .with(Component::real(name, default, optional))
    }

    /// Append a labeled boolean field (`NAME Yes|No`).
    pub fn named_bool(self, name: &str, default: bool, optional: bool) -> Self {
        self.with(Component::separator(name, "", optional))
            .with(Component::boolean(name, default, optional))
    }

    /// Append a labeled string field (`NAME <string>`).
    pub fn named_string(self, name: &str, default: &str, optional: bool) -> Self {
        self.with(Component::separator(name, "", optional))
            .with(Component::string(name, default, optional))
    }

    /// Append a labeled integer vector field (`NAME <int>...`).
    pub fn named_int_vector(
        self,
        name: &str,
        length: impl Into<Length>,
        default: i64,
        optional: bool,
    ) -> Self {
        self.with(Component::separator(name, "", optional))
            .with(Component::int_vector(name, length, default, optional))
    }

    /// Append a labeled floating-point vector field (`NAME <real>...`).
    pub fn named_real_vector(
        self,
        name: &str,
        length: impl Into<Length>,
        default: f64,
        optional: bool,
    ) -> Self {
        self.with(Component::separator(name, "", optional))
            .with(Component::real_vector(name, length, default, optional))
    }

    /// Append a labeled selection field (`NAME <literal>`), mapping input
    /// literals to string outputs.
    pub fn named_selection(
        self,
        name: &str,
        default_literal: &str,
        literals: &[&str],
        outputs: &[&str],
    ) -> DatResult<Self> {
        Ok(self
            .with(Component::separator(name, "", false))
            .with(Component::selection(name, default_literal, literals, outputs)?))
    }

    /// Parse one line into a fresh container, under default limits.
    pub fn parse(&self, section: &str, line: &str) -> DatResult<ParamContainer> {
        self.parse_with_limits(section, line, &Limits::default())
    }

    /// Parse one line into a fresh container.
    pub fn parse_with_limits(
        &self,
        section: &str,
        line: &str,
        limits: &Limits,
    ) -> DatResult<ParamContainer> {
        if line.len() > limits.max_line_length {
            return Err(DatError::limit_exceeded(format!(
                "line in section '{}' is {} bytes long, which exceeds the maximum {}",
                section,
                line.len(),
                limits.max_line_length
            )));
        }
        let mut cursor = LineCursor::new(line);
        let mut container = ParamContainer::new();
        self.parse_into(section, &mut cursor, &mut container, limits)?;
        Ok(container)
    }

    /// Drive every component, in order, against a caller-owned cursor and
    /// container.
    pub fn parse_into(
        &self,
        section: &str,
        cursor: &mut LineCursor,
        container: &mut ParamContainer,
        limits: &Limits,
    ) -> DatResult<()> {
        for component in &self.components {
            component.read(section, cursor, container, limits)?;
        }
        Ok(())
    }

    /// Render the default line: every component's default text, in order,
    /// space-separated. Reparsing it through the same grammar reproduces the
    /// declared defaults.
    pub fn default_line(&self) -> String {
        let mut out = String::new();
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            component.default_line(&mut out);
        }
        out
    }

    /// Documentation table rows for every component, with one row per
    /// registered choice for switches.
    pub fn doc_rows(&self) -> Vec<DocRow> {
        self.components
            .iter()
            .flat_map(Component::doc_rows)
            .collect()
    }

    /// An aligned, human-readable description block, one line per doc row.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for row in self.doc_rows() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!(
                "    {:<15}{:<15}{}",
                row.token,
                if row.optional { "(optional)" } else { "" },
                row.description
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatErrorKind;

    // ==================== Parse tests ====================

    #[test]
    fn test_named_fields_parse_in_order() {
        let grammar = LineGrammar::new()
            .named_int("ConditionID", 0, false)
            .named_real("thickness", 0.0, false);
        let params = grammar
            .parse("SSI MANIFOLD", "ConditionID 4 thickness 1e-4")
            .unwrap();
        assert_eq!(params.get_int("ConditionID"), Some(4));
        assert_eq!(params.get_real("thickness"), Some(1e-4));
    }

    #[test]
    fn test_labeled_fields_parse_out_of_order() {
        // labels are searched, not consumed positionally
        let grammar = LineGrammar::new()
            .named_int("A", 0, false)
            .named_int("B", 0, false);
        let params = grammar.parse("SEC", "B 2 A 1").unwrap();
        assert_eq!(params.get_int("A"), Some(1));
        assert_eq!(params.get_int("B"), Some(2));
    }

    #[test]
    fn test_optional_field_omitted_yields_default_and_exhausted_cursor() {
        let grammar = LineGrammar::new().named_int("FUNCT", -1, true);
        let mut cursor = LineCursor::new("");
        let mut container = ParamContainer::new();
        grammar
            .parse_into("SEC", &mut cursor, &mut container, &Limits::default())
            .unwrap();
        assert_eq!(container.get_int("FUNCT"), Some(-1));
        assert!(cursor.at_end());
    }

    #[test]
    fn test_mandatory_field_omitted_fails() {
        let grammar = LineGrammar::new().named_int("FUNCT", -1, false);
        let err = grammar.parse("SEC", "").unwrap_err();
        assert_eq!(err.kind, DatErrorKind::RequiredFieldMissing);
    }

    #[test]
    fn test_dynamic_vector_length_from_earlier_field() {
        let grammar = LineGrammar::new()
            .named_int("NUMSCAL", 0, false)
            .named_int_vector("STOICHIOMETRIES", Length::from_field("NUMSCAL"), 0, false);
        let params = grammar
            .parse("SURFACE KINETICS", "NUMSCAL 3 STOICHIOMETRIES -1 0 1")
            .unwrap();
        assert_eq!(params.get_int_vec("STOICHIOMETRIES"), Some(&[-1, 0, 1][..]));
    }

    #[test]
    fn test_duplicate_component_name_fails_at_parse() {
        let grammar = LineGrammar::new()
            .named_int("VAL", 0, false)
            .named_int("VAL", 0, false);
        let err = grammar.parse("SEC", "VAL 1 VAL 2").unwrap_err();
        assert_eq!(err.kind, DatErrorKind::DuplicateKey);
    }

    #[test]
    fn test_line_length_limit() {
        let grammar = LineGrammar::new().named_int("A", 0, true);
        let limits = Limits {
            max_line_length: 8,
            ..Limits::default()
        };
        let err = grammar
            .parse_with_limits("SEC", "A 1 too long", &limits)
            .unwrap_err();
        assert_eq!(err.kind, DatErrorKind::LimitExceeded);
    }

    // ==================== Rendering tests ====================

    #[test]
    fn test_default_line_concatenates_components() {
        let grammar = LineGrammar::new()
            .named_int("NUMDOF", 6, false)
            .named_bool("SLIP", false, false);
        assert_eq!(grammar.default_line(), "NUMDOF 6 SLIP No");
    }

    #[test]
    fn test_default_line_reparses_to_declared_defaults() {
        let grammar = LineGrammar::new()
            .named_int("NUMDOF", 6, false)
            .named_real("VAL", 0.5, true)
            .named_bool("SLIP", false, false)
            .named_string("KIND", "none", false)
            .named_int_vector("ONOFF", 3usize, 1, false);
        let params = grammar.parse("SEC", &grammar.default_line()).unwrap();
        assert_eq!(params.get_int("NUMDOF"), Some(6));
        assert_eq!(params.get_real("VAL"), Some(0.5));
        assert_eq!(params.get_bool("SLIP"), Some(false));
        assert_eq!(params.get_str("KIND"), Some("none"));
        assert_eq!(params.get_int_vec("ONOFF"), Some(&[1, 1, 1][..]));
    }

    #[test]
    fn test_default_line_with_selection_reparses() {
        let grammar = LineGrammar::new()
            .named_selection(
                "FIELD",
                "ScaTra",
                &["ScaTra", "Structure"],
                &["scatra", "structure"],
            )
            .unwrap()
            .named_int("FUNCT", 0, false);
        let params = grammar.parse("SEC", &grammar.default_line()).unwrap();
        assert_eq!(params.get_str("FIELD"), Some("scatra"));
        assert_eq!(params.get_int("FUNCT"), Some(0));
    }

    #[test]
    fn test_doc_rows_flatten_switch_choices() {
        let grammar = LineGrammar::new()
            .separator("KINETIC_MODEL", "kinetic model of the interface", false)
            .with(
                Component::switch(
                    "KINETIC_MODEL",
                    1,
                    vec![
                        (1, "NoFlux", vec![]),
                        (2, "ConstantResistance", vec![Component::real("R", 0.0, false)]),
                    ],
                )
                .unwrap(),
            );
        let rows = grammar.doc_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].token, "KINETIC_MODEL");
        assert_eq!(rows[1].token, "NoFlux");
        assert_eq!(rows[2].token, "ConstantResistance 0");
    }

    #[test]
    fn test_describe_marks_optional_rows() {
        let grammar = LineGrammar::new().separator("E-", "number of electrons", true);
        let described = grammar.describe();
        assert!(described.contains("E-"));
        assert!(described.contains("(optional)"));
        assert!(described.contains("number of electrons"));
    }
}
