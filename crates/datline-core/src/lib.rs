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

//! Core component library and parameter container for datline.
//!
//! This crate decodes one line of a legacy structured input file at a time.
//! A line's grammar is an ordered sequence of [`Component`]s; each component
//! consumes one typed token (or a fixed/dynamic-length run of tokens) from a
//! [`LineCursor`], converts and validates it, and inserts it into a
//! [`ParamContainer`]. A [`Component::switch`] first decodes a discriminator
//! and then drives one of several pre-registered sub-sequences against the
//! same cursor, which is the only level of nesting the format has.
//!
//! The surrounding input-file reader (sectioning, line splitting) and the
//! downstream configuration system owning the decoded values are external
//! collaborators: this crate receives one raw line plus a section name for
//! diagnostics, and hands back a populated container or an error naming the
//! field, section, and violated constraint.
//!
//! Grammars are immutable once built and shared read-only across parses;
//! every in-flight parse owns its own cursor and container.

mod component;
mod container;
mod cursor;
mod error;
mod grammar;
mod length;
mod limits;
pub mod number;
mod switch;
mod value;

pub use component::{Component, DocRow};
pub use container::ParamContainer;
pub use cursor::LineCursor;
pub use error::{DatError, DatErrorKind, DatResult};
pub use grammar::LineGrammar;
pub use length::Length;
pub use limits::Limits;
pub use switch::{Selection, Switch};
pub use value::Value;
