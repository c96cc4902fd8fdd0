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

//! The typed name-to-value sink a line parse writes into.

use crate::error::{DatError, DatResult};
use crate::value::Value;
use std::collections::BTreeMap;

/// Accumulates the typed fields of one parsed condition line.
///
/// The container is append-only within a single line-parse pass: a name may
/// be written at most once, and a second write fails with
/// [`DuplicateKey`](crate::DatErrorKind::DuplicateKey). Values are retrievable
/// by name, either untyped via [`get`](ParamContainer::get) or through the
/// typed accessors. Dynamic vector lengths are resolved through
/// [`get_int`](ParamContainer::get_int), so a length-determining field must be
/// read before the vector that depends on it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamContainer {
    entries: BTreeMap<String, Value>,
}

impl ParamContainer {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value under `name`.
    ///
    /// Fails with `DuplicateKey` if `name` was already written in this pass.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> DatResult<()> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(DatError::duplicate_key(&name));
        }
        self.entries.insert(name, value.into());
        Ok(())
    }

    /// Get a value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Returns true if `name` was written.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Get an integer value by name.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.entries.get(name).and_then(Value::as_int)
    }

    /// Get a floating-point value by name (integers coerce).
    pub fn get_real(&self, name: &str) -> Option<f64> {
        self.entries.get(name).and_then(Value::as_real)
    }

    /// Get a boolean value by name.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.entries.get(name).and_then(Value::as_bool)
    }

    /// Get a string value by name.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.entries.get(name).and_then(Value::as_str)
    }

    /// Get an integer vector by name.
    pub fn get_int_vec(&self, name: &str) -> Option<&[i64]> {
        self.entries.get(name).and_then(Value::as_int_vec)
    }

    /// Get a floating-point vector by name.
    pub fn get_real_vec(&self, name: &str) -> Option<&[f64]> {
        self.entries.get(name).and_then(Value::as_real_vec)
    }

    /// Number of entries written so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was written yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
