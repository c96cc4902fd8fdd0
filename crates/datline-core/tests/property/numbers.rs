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

//! Property-based tests for the numeric conversion helper.

use datline_core::number::{int_from_token, real_from_token};
use datline_core::DatErrorKind;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: every i64 roundtrips through its decimal rendering.
    #[test]
    fn prop_int_roundtrips(n in any::<i64>()) {
        let token = n.to_string();
        let parsed = int_from_token(&token, "X", "S", 1, false);
        prop_assert_eq!(parsed.unwrap(), n);
    }

    /// Property: every finite f64 roundtrips through its shortest rendering.
    #[test]
    fn prop_real_roundtrips(f in -1.0e12_f64..1.0e12_f64) {
        let token = f.to_string();
        let parsed = real_from_token(&token, "X", "S", 1, false);
        prop_assert_eq!(parsed.unwrap(), f);
    }

    /// Property: a valid integer with an alphabetic suffix is trailing
    /// garbage, never a silent partial read.
    #[test]
    fn prop_int_suffix_is_trailing_garbage(
        n in any::<i64>(),
        suffix in "[a-zA-Z_]{1,6}",
    ) {
        let token = format!("{}{}", n, suffix);
        let err = int_from_token(&token, "X", "S", 1, false).unwrap_err();
        prop_assert_eq!(err.kind, DatErrorKind::TrailingGarbage);
    }

    /// Property: a token with no leading digit at all is malformed for
    /// integer fields.
    #[test]
    fn prop_alpha_token_is_malformed(token in "[a-zA-Z_]{1,12}") {
        let err = int_from_token(&token, "X", "S", 1, false).unwrap_err();
        prop_assert_eq!(err.kind, DatErrorKind::MalformedNumber);
    }

    /// Property: integers are valid reals.
    #[test]
    fn prop_int_token_reads_as_real(n in -1_000_000_i64..1_000_000_i64) {
        let token = n.to_string();
        let parsed = real_from_token(&token, "X", "S", 1, false);
        prop_assert_eq!(parsed.unwrap(), n as f64);
    }

    /// Property: a real-valued token on an integer field never succeeds;
    /// the fractional part is reported as trailing garbage.
    #[test]
    fn prop_fractional_token_rejected_for_int(
        n in -1000_i64..1000_i64,
        frac in 1_u32..1000_u32,
    ) {
        let token = format!("{}.{}", n, frac);
        let err = int_from_token(&token, "X", "S", 1, false).unwrap_err();
        prop_assert_eq!(err.kind, DatErrorKind::TrailingGarbage);
    }
}
