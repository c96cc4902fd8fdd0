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

//! Value types stored in a parameter container.

/// A typed value decoded from one field of a condition line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Real(f64),
    /// Boolean value.
    Bool(bool),
    /// String value.
    Str(String),
    /// Ordered integer vector.
    IntVec(Vec<i64>),
    /// Ordered floating-point vector.
    RealVec(Vec<f64>),
}

impl Value {
    /// Try to get the value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a floating-point number.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(n) => Some(*n),
            Self::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Try to get the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as an integer vector.
    pub fn as_int_vec(&self) -> Option<&[i64]> {
        match self {
            Self::IntVec(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get the value as a floating-point vector.
    pub fn as_real_vec(&self) -> Option<&[f64]> {
        match self {
            Self::RealVec(v) => Some(v),
            _ => None,
        }
    }

    /// Returns true if this is a vector value.
    pub fn is_vector(&self) -> bool {
        matches!(self, Self::IntVec(_) | Self::RealVec(_))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Real(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Str(s) => write!(f, "{}", s),
            Self::IntVec(v) => {
                let mut first = true;
                for n in v {
                    if !first {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", n)?;
                    first = false;
                }
                Ok(())
            }
            Self::RealVec(v) => {
                let mut first = true;
                for n in v {
                    if !first {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", n)?;
                    first = false;
                }
                Ok(())
            }
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Real(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<Vec<i64>> for Value {
    fn from(v: Vec<i64>) -> Self {
        Self::IntVec(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Self::RealVec(v)
    }
}
