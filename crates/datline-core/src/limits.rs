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

//! Resource limits for condition line parsing.

/// Configurable limits for parser resources.
///
/// Vector lengths can be resolved from previously parsed input values, so an
/// input file controls how much a vector component allocates; these limits
/// bound the resources one line may consume.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum line length in bytes (default: 1MB).
    pub max_line_length: usize,
    /// Maximum resolved vector length (default: 65536).
    pub max_vector_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_line_length: 1024 * 1024, // 1MB
            max_vector_length: 65_536,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_line_length: usize::MAX,
            max_vector_length: usize::MAX,
        }
    }
}
