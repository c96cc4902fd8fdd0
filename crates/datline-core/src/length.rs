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

//! Vector length definitions: fixed, or resolved from an earlier field.

use crate::container::ParamContainer;
use crate::error::{DatError, DatResult};

/// How many tokens a vector component consumes.
///
/// `FromField` lengths are resolved against the parameter container at read
/// time, so the referenced field must be read earlier on the same line:
/// components must be ordered with the length-determining field first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Length {
    /// A fixed token count, known at grammar-definition time.
    Fixed(usize),
    /// The value of a previously parsed integer field of the given name.
    FromField(String),
}

impl Length {
    /// Length definition reading its count from the named field.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self::FromField(name.into())
    }

    /// Resolve the token count for `vector_name` against the container.
    pub fn resolve(
        &self,
        vector_name: &str,
        section: &str,
        container: &ParamContainer,
    ) -> DatResult<usize> {
        match self {
            Self::Fixed(n) => Ok(*n),
            Self::FromField(field) => {
                let value = container.get(field).ok_or_else(|| {
                    DatError::internal(format!(
                        "length of vector '{}' depends on '{}', which has not been read yet; \
                         components must be ordered so '{}' comes first",
                        vector_name, field, field
                    ))
                })?;
                let count = value.as_int().ok_or_else(|| {
                    DatError::internal(format!(
                        "length field '{}' for vector '{}' is not an integer",
                        field, vector_name
                    ))
                })?;
                usize::try_from(count)
                    .map_err(|_| DatError::malformed_number(&count.to_string(), field, section))
            }
        }
    }

    /// The count used for default-line and documentation rendering, where no
    /// container exists to resolve a dynamic length against.
    pub fn default_length(&self) -> usize {
        match self {
            Self::Fixed(n) => *n,
            Self::FromField(_) => 1,
        }
    }
}

impl From<usize> for Length {
    fn from(n: usize) -> Self {
        Self::Fixed(n)
    }
}
