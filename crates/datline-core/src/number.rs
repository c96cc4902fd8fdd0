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

//! Token-to-number conversion with greedy-prefix semantics.
//!
//! A token converts by consuming the longest numeric prefix; the offset of
//! the first unconsumed character is then checked against the token length.
//! The input format permits no units or suffixes, so any remainder is
//! [`TrailingGarbage`](crate::DatErrorKind::TrailingGarbage). A token with no
//! numeric prefix at all is [`MalformedNumber`](crate::DatErrorKind::MalformedNumber),
//! except that an empty token on a mandatory field reports
//! [`RequiredFieldMissing`](crate::DatErrorKind::RequiredFieldMissing).

use crate::error::{DatError, DatResult};

/// Why a numeric prefix could not be produced.
enum ScanError {
    /// Not a single digit where the number should start.
    NoDigits,
    /// The digit run does not fit the target type.
    OutOfRange,
}

/// Longest integer prefix of `s`: the value and the bytes consumed.
fn scan_int(s: &str) -> Result<(i64, usize), ScanError> {
    let bytes = s.as_bytes();
    let mut i = 0;
    let negative = match bytes.first() {
        Some(b'+') => {
            i = 1;
            false
        }
        Some(b'-') => {
            i = 1;
            true
        }
        _ => false,
    };
    let digits_start = i;
    // accumulate negated so i64::MIN survives
    let mut value: i64 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        let digit = (bytes[i] - b'0') as i64;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_sub(digit))
            .ok_or(ScanError::OutOfRange)?;
        i += 1;
    }
    if i == digits_start {
        return Err(ScanError::NoDigits);
    }
    let value = if negative {
        value
    } else {
        value.checked_neg().ok_or(ScanError::OutOfRange)?
    };
    Ok((value, i))
}

/// Longest floating-point prefix of `s`: the value and the bytes consumed.
///
/// Accepts `[+-]?` digits with an optional decimal point and an optional
/// exponent; the exponent marker is only consumed when at least one exponent
/// digit follows it ("1e" converts to 1 with "e" unread). The special
/// literals inf/infinity/nan are accepted case-insensitively.
fn scan_real(s: &str) -> Result<(f64, usize), ScanError> {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i = 1;
    }
    for special in [&b"infinity"[..], &b"inf"[..], &b"nan"[..]] {
        let rest = &bytes[i.min(bytes.len())..];
        if rest.len() >= special.len() && rest[..special.len()].eq_ignore_ascii_case(special) {
            let end = i + special.len();
            return s[..end]
                .parse::<f64>()
                .map(|v| (v, end))
                .map_err(|_| ScanError::NoDigits);
        }
    }
    let mut digits = 0usize;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return Err(ScanError::NoDigits);
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exponent_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exponent_start {
            i = j;
        }
    }
    s[..i]
        .parse::<f64>()
        .map(|v| (v, i))
        .map_err(|_| ScanError::NoDigits)
}

fn check_scan<T>(
    scanned: Result<(T, usize), ScanError>,
    token: &str,
    field: &str,
    section: &str,
    expected_values: usize,
    optional: bool,
) -> DatResult<T> {
    match scanned {
        Err(_) => {
            if !optional && token.is_empty() {
                Err(DatError::missing_value(field, section, expected_values))
            } else {
                Err(DatError::malformed_number(token, field, section))
            }
        }
        Ok((value, consumed)) => {
            if consumed != token.len() {
                Err(DatError::trailing_garbage(
                    token,
                    &token[consumed..],
                    field,
                    section,
                ))
            } else {
                Ok(value)
            }
        }
    }
}

/// Convert a token to an integer, validating that it was fully consumed.
///
/// `expected_values` is the number of values the enclosing field reads (1 for
/// scalars, the resolved length for vectors) and only feeds diagnostics.
pub fn int_from_token(
    token: &str,
    field: &str,
    section: &str,
    expected_values: usize,
    optional: bool,
) -> DatResult<i64> {
    check_scan(
        scan_int(token),
        token,
        field,
        section,
        expected_values,
        optional,
    )
}

/// Convert a token to a floating-point value, validating full consumption.
pub fn real_from_token(
    token: &str,
    field: &str,
    section: &str,
    expected_values: usize,
    optional: bool,
) -> DatResult<f64> {
    check_scan(
        scan_real(token),
        token,
        field,
        section,
        expected_values,
        optional,
    )
}
