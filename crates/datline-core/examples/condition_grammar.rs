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

//! Example demonstrating a condition line grammar with a kinetic model
//! switch, the documentation surfaces it renders, and a round-trip through
//! its own default line.

use datline_core::{Component, Length, LineGrammar};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("datline condition grammar example\n");

    // A surface kinetics condition: two labeled ids, then a kinetic model
    // switch selecting the parameters that follow.
    let grammar = LineGrammar::new()
        .named_int("ConditionID", 0, false)
        .separator("KINETIC_MODEL", "kinetic model of the interface", false)
        .with(Component::switch(
            "KINETIC_MODEL",
            0,
            vec![
                (0, "NoInterfaceFlux", vec![]),
                (
                    1,
                    "Butler-VolmerReduced",
                    vec![
                        Component::separator("NUMSCAL", "", false),
                        Component::int("NUMSCAL", 0, false),
                        Component::separator("STOICHIOMETRIES", "", false),
                        Component::int_vector(
                            "STOICHIOMETRIES",
                            Length::from_field("NUMSCAL"),
                            0,
                            false,
                        ),
                        Component::separator("K_R", "", false),
                        Component::real("K_R", 0.0, false),
                    ],
                ),
            ],
        )?);

    // Example 1: parse a Butler-Volmer line with a dynamically sized vector
    println!("1. Parsing a Butler-Volmer line:");
    let line = "ConditionID 4 KINETIC_MODEL Butler-VolmerReduced \
                NUMSCAL 2 STOICHIOMETRIES -1 1 K_R 1.036e-4";
    let params = grammar.parse("SSI MANIFOLD KINETICS", line)?;
    println!("   ConditionID:     {:?}", params.get_int("ConditionID"));
    println!("   KINETIC_MODEL:   {:?}", params.get_int("KINETIC_MODEL"));
    println!("   STOICHIOMETRIES: {:?}", params.get_int_vec("STOICHIOMETRIES"));
    println!("   K_R:             {:?}\n", params.get_real("K_R"));

    // Example 2: the rendered default line reparses to the defaults
    println!("2. Default line:");
    let rendered = grammar.default_line();
    println!("   {}", rendered);
    let defaults = grammar.parse("SSI MANIFOLD KINETICS", &rendered)?;
    println!("   reparsed KINETIC_MODEL: {:?}\n", defaults.get_int("KINETIC_MODEL"));

    // Example 3: documentation rows cover every switch choice
    println!("3. Documentation rows:");
    for row in grammar.doc_rows() {
        println!(
            "   {:<50}{}",
            row.token,
            if row.optional { "(optional)" } else { "" }
        );
    }

    Ok(())
}
