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

//! Property-based tests for default-line idempotence: rendering a grammar's
//! default line and reparsing it through the same grammar must reproduce the
//! declared default of every field.

use datline_core::LineGrammar;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: default lines of labeled scalar grammars reparse to the
    /// declared defaults, whatever those defaults are.
    #[test]
    fn prop_default_line_idempotent_scalars(
        int_default in -1_000_000_i64..1_000_000_i64,
        real_default in -1.0e6_f64..1.0e6_f64,
        bool_default in any::<bool>(),
        str_default in "[A-Za-z][A-Za-z0-9]{0,8}",
        real_optional in any::<bool>(),
    ) {
        let grammar = LineGrammar::new()
            .named_int("IDIM", int_default, false)
            .named_real("TIMESTEP", real_default, real_optional)
            .named_bool("ADAPTIVE", bool_default, false)
            .named_string("SCHEME", &str_default, false);

        let rendered = grammar.default_line();
        let params = grammar.parse("ROUNDTRIP", &rendered).unwrap();

        prop_assert_eq!(params.get_int("IDIM"), Some(int_default));
        prop_assert_eq!(params.get_real("TIMESTEP"), Some(real_default));
        prop_assert_eq!(params.get_bool("ADAPTIVE"), Some(bool_default));
        prop_assert_eq!(params.get_str("SCHEME"), Some(str_default.as_str()));
    }

    /// Property: fixed-length vector defaults render and reparse exactly.
    #[test]
    fn prop_default_line_idempotent_vectors(
        length in 0_usize..6,
        int_default in -100_i64..100_i64,
        real_default in -100.0_f64..100.0_f64,
    ) {
        let grammar = LineGrammar::new()
            .named_int_vector("ONOFF", length, int_default, false)
            .named_real_vector("VAL", length, real_default, false);

        let rendered = grammar.default_line();
        let params = grammar.parse("ROUNDTRIP", &rendered).unwrap();

        let expected_int = vec![int_default; length];
        let expected_real = vec![real_default; length];
        prop_assert_eq!(
            params.get_int_vec("ONOFF").unwrap(),
            expected_int.as_slice()
        );
        prop_assert_eq!(
            params.get_real_vec("VAL").unwrap(),
            expected_real.as_slice()
        );
    }

    /// Property: omitting an optional labeled field always yields its
    /// declared default, whatever the rest of the line holds.
    #[test]
    fn prop_omitted_optional_field_defaults(
        present_value in -1000_i64..1000_i64,
        omitted_default in -1000_i64..1000_i64,
    ) {
        let grammar = LineGrammar::new()
            .named_int("PRESENT", 0, false)
            .named_int("OMITTED", omitted_default, true);

        let line = format!("PRESENT {}", present_value);
        let params = grammar.parse("ROUNDTRIP", &line).unwrap();

        prop_assert_eq!(params.get_int("PRESENT"), Some(present_value));
        prop_assert_eq!(params.get_int("OMITTED"), Some(omitted_default));
    }
}
