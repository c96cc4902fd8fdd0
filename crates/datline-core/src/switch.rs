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

//! Literal selections and discriminator-driven switches.
//!
//! A [`Selection`] maps a finite set of input-file literals to output values
//! (strings or integers). It searches the whole remaining line rather than
//! reading at the anchor, so its position within the line does not matter;
//! when none of its literals is present, the declared default's mapped output
//! is used and the cursor is left untouched.
//!
//! A [`Switch`] owns an integer-valued selection as its discriminator plus a
//! table of component sequences keyed by the selection's outputs. Reading a
//! switch decodes the discriminator, then drives the chosen sequence against
//! the same cursor and container. Both are validated eagerly when the grammar
//! is built, never at first use.

use crate::component::Component;
use crate::container::ParamContainer;
use crate::cursor::LineCursor;
use crate::error::{DatError, DatResult};
use crate::limits::Limits;
use std::collections::BTreeMap;

/// The output side of a selection's literal-to-value bijection.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SelectionOutputs {
    Strings(Vec<String>),
    Ints(Vec<i64>),
}

impl SelectionOutputs {
    fn len(&self) -> usize {
        match self {
            Self::Strings(v) => v.len(),
            Self::Ints(v) => v.len(),
        }
    }
}

/// A component decoding one of a finite set of literal tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    name: String,
    default_index: usize,
    literals: Vec<String>,
    outputs: SelectionOutputs,
}

impl Selection {
    /// A selection mapping literals to string outputs.
    pub fn strings(
        name: impl Into<String>,
        default_literal: &str,
        literals: &[&str],
        outputs: &[&str],
    ) -> DatResult<Self> {
        let name = name.into();
        let outputs = SelectionOutputs::Strings(outputs.iter().map(|s| s.to_string()).collect());
        Self::build(name, default_literal, literals, outputs)
    }

    /// A selection mapping literals to integer outputs.
    pub fn ints(
        name: impl Into<String>,
        default_literal: &str,
        literals: &[&str],
        outputs: &[i64],
    ) -> DatResult<Self> {
        let name = name.into();
        let outputs = SelectionOutputs::Ints(outputs.to_vec());
        Self::build(name, default_literal, literals, outputs)
    }

    fn build(
        name: String,
        default_literal: &str,
        literals: &[&str],
        outputs: SelectionOutputs,
    ) -> DatResult<Self> {
        if literals.is_empty() {
            return Err(DatError::invalid_grammar(format!(
                "selection '{}' declares no input file literals",
                name
            )));
        }
        if literals.len() != outputs.len() {
            return Err(DatError::invalid_grammar(format!(
                "selection '{}': {} input file literals but {} output values",
                name,
                literals.len(),
                outputs.len()
            )));
        }
        for (i, literal) in literals.iter().enumerate() {
            if literals[..i].contains(literal) {
                return Err(DatError::invalid_grammar(format!(
                    "selection '{}' declares literal '{}' twice",
                    name, literal
                )));
            }
        }
        let default_index = literals
            .iter()
            .position(|l| *l == default_literal)
            .ok_or_else(|| {
                DatError::invalid_grammar(format!(
                    "selection '{}': invalid default value '{}'",
                    name, default_literal
                ))
            })?;
        Ok(Self {
            name,
            default_index,
            literals: literals.iter().map(|s| s.to_string()).collect(),
            outputs,
        })
    }

    /// The component/container name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared input-file literals.
    pub fn options(&self) -> &[String] {
        &self.literals
    }

    /// The default literal as written in an input file.
    pub(crate) fn default_literal(&self) -> &str {
        &self.literals[self.default_index]
    }

    pub(crate) fn doc_token(&self) -> String {
        format!("<{}>", self.name)
    }

    /// Search the line for any declared literal (first match over the
    /// declared order wins), consume it, and write the mapped output. With no
    /// literal present, the default's mapped output is written and the cursor
    /// stays untouched.
    pub(crate) fn read(
        &self,
        cursor: &mut LineCursor,
        container: &mut ParamContainer,
    ) -> DatResult<()> {
        let mut index = self.default_index;
        for (i, literal) in self.literals.iter().enumerate() {
            if cursor.consume_label(literal) {
                index = i;
                break;
            }
        }
        match &self.outputs {
            SelectionOutputs::Strings(values) => {
                container.insert(self.name.as_str(), values[index].as_str())
            }
            SelectionOutputs::Ints(values) => container.insert(self.name.as_str(), values[index]),
        }
    }
}

/// One registered choice of a switch: its input-file literal and the
/// component sequence it selects.
#[derive(Debug, Clone, PartialEq)]
struct SwitchChoice {
    literal: String,
    components: Vec<Component>,
}

/// A composite component dispatching on a discriminator decoded first.
#[derive(Debug, Clone, PartialEq)]
pub struct Switch {
    name: String,
    default_key: i64,
    selection: Selection,
    choices: BTreeMap<i64, SwitchChoice>,
}

impl Switch {
    /// Build a switch from `(key, literal, component sequence)` choices.
    pub fn new(
        name: impl Into<String>,
        default_key: i64,
        choices: Vec<(i64, &str, Vec<Component>)>,
    ) -> DatResult<Self> {
        let name = name.into();
        let mut table = BTreeMap::new();
        for (key, literal, components) in choices {
            let previous = table.insert(
                key,
                SwitchChoice {
                    literal: literal.to_string(),
                    components,
                },
            );
            if previous.is_some() {
                return Err(DatError::invalid_grammar(format!(
                    "switch '{}' registers key {} twice",
                    name, key
                )));
            }
        }
        let default_literal = table
            .get(&default_key)
            .map(|choice| choice.literal.clone())
            .ok_or_else(|| {
                DatError::invalid_grammar(format!(
                    "switch '{}': default key {} has no registered choice",
                    name, default_key
                ))
            })?;
        let literals: Vec<String> = table.values().map(|c| c.literal.clone()).collect();
        let literal_refs: Vec<&str> = literals.iter().map(String::as_str).collect();
        let keys: Vec<i64> = table.keys().copied().collect();
        let selection = Selection::ints(name.clone(), &default_literal, &literal_refs, &keys)?;
        Ok(Self {
            name,
            default_key,
            selection,
            choices: table,
        })
    }

    /// The component/container name of the discriminator.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Decode the discriminator, then read the chosen sequence in order.
    pub(crate) fn read(
        &self,
        section: &str,
        cursor: &mut LineCursor,
        container: &mut ParamContainer,
        limits: &Limits,
    ) -> DatResult<()> {
        self.selection.read(cursor, container)?;
        let key = container.get_int(&self.name).ok_or_else(|| {
            DatError::internal(format!(
                "switch '{}': discriminator was not decoded to an integer",
                self.name
            ))
        })?;
        // unreachable given construction-time validation
        let choice = self.choices.get(&key).ok_or_else(|| {
            DatError::internal(format!(
                "switch '{}': no component sequence registered for decoded key {}",
                self.name, key
            ))
        })?;
        for component in &choice.components {
            component.read(section, cursor, container, limits)?;
        }
        Ok(())
    }

    /// Append the default choice's literal and its sequence's defaults.
    pub(crate) fn default_line(&self, out: &mut String) {
        out.push_str(self.selection.default_literal());
        if let Some(choice) = self.choices.get(&self.default_key) {
            for component in &choice.components {
                out.push(' ');
                component.default_line(out);
            }
        }
    }

    pub(crate) fn doc_token(&self) -> String {
        format!("{} [further parameters]", self.selection.doc_token())
    }

    /// One rendered documentation line per registered choice, covering every
    /// branch rather than just the default one.
    pub(crate) fn doc_lines(&self) -> Vec<String> {
        self.choices
            .values()
            .map(|choice| {
                let mut line = choice.literal.clone();
                for component in &choice.components {
                    line.push(' ');
                    line.push_str(&component.doc_token());
                }
                line
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatErrorKind;

    fn read_component(
        component: &Component,
        line: &str,
    ) -> DatResult<(ParamContainer, LineCursor)> {
        let mut cursor = LineCursor::new(line);
        let mut container = ParamContainer::new();
        component.read("SEC", &mut cursor, &mut container, &Limits::default())?;
        Ok((container, cursor))
    }

    // ==================== Selection construction tests ====================

    #[test]
    fn test_selection_invalid_default_rejected() {
        let err = Selection::strings("SIDE", "Nowhere", &["Slave", "Master"], &["s", "m"])
            .unwrap_err();
        assert_eq!(err.kind, DatErrorKind::InvalidGrammarDefinition);
        assert!(err.message.contains("Nowhere"));
    }

    #[test]
    fn test_selection_cardinality_mismatch_rejected() {
        let err = Selection::strings("SIDE", "Slave", &["Slave", "Master"], &["s"]).unwrap_err();
        assert_eq!(err.kind, DatErrorKind::InvalidGrammarDefinition);
    }

    #[test]
    fn test_selection_duplicate_literal_rejected() {
        let err =
            Selection::ints("SIDE", "Slave", &["Slave", "Slave"], &[1, 2]).unwrap_err();
        assert_eq!(err.kind, DatErrorKind::InvalidGrammarDefinition);
        assert!(err.message.contains("twice"));
    }

    #[test]
    fn test_selection_empty_literals_rejected() {
        let err = Selection::ints("SIDE", "x", &[], &[]).unwrap_err();
        assert_eq!(err.kind, DatErrorKind::InvalidGrammarDefinition);
    }

    // ==================== Selection read tests ====================

    #[test]
    fn test_selection_decodes_string_output() {
        let component = Component::selection(
            "INTERFACE_SIDE",
            "Undefined",
            &["Undefined", "Slave", "Master"],
            &["undefined", "slave", "master"],
        )
        .unwrap();
        let (container, _) = read_component(&component, "Slave").unwrap();
        assert_eq!(container.get_str("INTERFACE_SIDE"), Some("slave"));
    }

    #[test]
    fn test_selection_is_position_independent() {
        let component =
            Component::int_selection("MODEL", "linear", &["linear", "cubic"], &[0, 1]).unwrap();
        let (container, cursor) = read_component(&component, "PREFIX 1 cubic SUFFIX").unwrap();
        assert_eq!(container.get_int("MODEL"), Some(1));
        // the literal is removed, the rest of the line survives; the anchor
        // sits where the literal stood
        let mut cursor = cursor;
        assert_eq!(cursor.read_token().as_deref(), Some("SUFFIX"));
        assert!(!cursor.has_label("cubic"));
        assert!(cursor.has_label("PREFIX"));
    }

    #[test]
    fn test_selection_absent_uses_default_and_keeps_cursor() {
        let component =
            Component::int_selection("MODEL", "linear", &["linear", "cubic"], &[0, 1]).unwrap();
        let mut cursor = LineCursor::new("42");
        let mut container = ParamContainer::new();
        component
            .read("SEC", &mut cursor, &mut container, &Limits::default())
            .unwrap();
        assert_eq!(container.get_int("MODEL"), Some(0));
        assert_eq!(cursor.read_token().as_deref(), Some("42"));
    }

    #[test]
    fn test_selection_first_match_wins_over_declared_order() {
        let component =
            Component::int_selection("MODEL", "a", &["a", "b"], &[1, 2]).unwrap();
        // both literals present; the declared order decides
        let (container, _) = read_component(&component, "b a").unwrap();
        assert_eq!(container.get_int("MODEL"), Some(1));
    }

    // ==================== Switch construction tests ====================

    #[test]
    fn test_switch_default_key_must_be_registered() {
        let err = Component::switch("KINETIC_MODEL", 3, vec![(1, "A", vec![])]).unwrap_err();
        assert_eq!(err.kind, DatErrorKind::InvalidGrammarDefinition);
    }

    #[test]
    fn test_switch_duplicate_key_rejected() {
        let err = Component::switch(
            "KINETIC_MODEL",
            1,
            vec![(1, "A", vec![]), (1, "B", vec![])],
        )
        .unwrap_err();
        assert_eq!(err.kind, DatErrorKind::InvalidGrammarDefinition);
    }

    #[test]
    fn test_switch_duplicate_literal_rejected() {
        let err = Component::switch(
            "KINETIC_MODEL",
            1,
            vec![(1, "A", vec![]), (2, "A", vec![])],
        )
        .unwrap_err();
        assert_eq!(err.kind, DatErrorKind::InvalidGrammarDefinition);
    }

    // ==================== Switch read tests ====================

    #[test]
    fn test_switch_round_trip() {
        let component = Component::switch(
            "MODEL",
            1,
            vec![
                (1, "A", vec![Component::int("X", 0, false)]),
                (2, "B", vec![]),
            ],
        )
        .unwrap();

        let (container, _) = read_component(&component, "A 7").unwrap();
        assert_eq!(container.get_int("MODEL"), Some(1));
        assert_eq!(container.get_int("X"), Some(7));

        let (container, _) = read_component(&component, "B").unwrap();
        assert_eq!(container.get_int("MODEL"), Some(2));
        assert_eq!(container.get("X"), None);
    }

    #[test]
    fn test_switch_absent_discriminator_runs_default_sequence() {
        let component = Component::switch(
            "MODEL",
            2,
            vec![
                (1, "A", vec![]),
                (2, "B", vec![Component::int("Y", -1, true)]),
            ],
        )
        .unwrap();
        let (container, _) = read_component(&component, "").unwrap();
        assert_eq!(container.get_int("MODEL"), Some(2));
        assert_eq!(container.get_int("Y"), Some(-1));
    }

    #[test]
    fn test_switch_nested_sequence_shares_cursor() {
        let component = Component::switch(
            "KINETIC_MODEL",
            1,
            vec![(
                1,
                "ConstantResistance",
                vec![
                    Component::separator("RESISTANCE", "", false),
                    Component::real("RESISTANCE", 0.0, false),
                ],
            )],
        )
        .unwrap();
        let (container, _) =
            read_component(&component, "ConstantResistance RESISTANCE 2.5").unwrap();
        assert_eq!(container.get_int("KINETIC_MODEL"), Some(1));
        assert_eq!(container.get_real("RESISTANCE"), Some(2.5));
    }

    // ==================== Rendering tests ====================

    #[test]
    fn test_switch_default_line_covers_default_choice() {
        let component = Component::switch(
            "MODEL",
            1,
            vec![
                (1, "A", vec![Component::int("X", 7, false)]),
                (2, "B", vec![]),
            ],
        )
        .unwrap();
        let mut out = String::new();
        component.default_line(&mut out);
        assert_eq!(out, "A 7");
    }

    #[test]
    fn test_switch_doc_rows_cover_every_choice() {
        let component = Component::switch(
            "MODEL",
            1,
            vec![
                (1, "A", vec![Component::int("X", 7, false)]),
                (2, "B", vec![Component::real_vector("V", 2usize, 0.0, false)]),
            ],
        )
        .unwrap();
        let rows = component.doc_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].token, "A 7");
        assert_eq!(rows[1].token, "B <real vec:V>");
    }

    #[test]
    fn test_selection_options_accessor() {
        let selection =
            Selection::ints("MODEL", "a", &["a", "b"], &[1, 2]).unwrap();
        assert_eq!(selection.options(), &["a".to_string(), "b".to_string()]);
        assert_eq!(selection.name(), "MODEL");
        assert_eq!(selection.default_literal(), "a");
    }

    // ==================== Default-line idempotence ====================

    #[test]
    fn test_switch_default_line_reparses_to_defaults() {
        let component = Component::switch(
            "MODEL",
            1,
            vec![
                (1, "A", vec![Component::int("X", 7, false)]),
                (2, "B", vec![]),
            ],
        )
        .unwrap();
        let mut line = String::new();
        component.default_line(&mut line);
        let (container, _) = read_component(&component, &line).unwrap();
        assert_eq!(container.get_int("MODEL"), Some(1));
        assert_eq!(container.get_int("X"), Some(7));
    }
}
