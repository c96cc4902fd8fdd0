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

//! Property-based tests for condition line parsing.
//!
//! These tests use proptest to validate invariants across a wide range of
//! inputs, catching edge cases that example-based tests might miss.
//!
//! # Test Modules
//!
//! - `numbers`: greedy-prefix conversion boundaries and error kinds
//! - `roundtrip`: default-line rendering reparses to the declared defaults

pub mod numbers;
pub mod roundtrip;
