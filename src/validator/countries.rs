// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::types::CountryRule;

/// (code, prefix, pattern, min length, max length, name, description)
type SeedRow = (&'static str, &'static str, &'static str, usize, usize, &'static str, &'static str);

/// Built-in mobile ranges. The order is the registration order and with it
/// the detection priority: countries sharing a prefix are listed with the
/// larger numbering plan first (`ru` before `kz`, `us` before `ca`).
#[rustfmt::skip]
const BUILT_IN_COUNTRIES: &[SeedRow] = &[
    // Central Asia
    ("kg", "+996", r"^\+996[0-9]{9}$", 9, 9, "Kyrgyzstan", "Kyrgyzstan mobile numbers"),
    ("ru", "+7", r"^\+7[9][0-9]{9}$", 10, 10, "Russia", "Russia mobile numbers (9xx)"),
    ("kz", "+7", r"^\+7[67][0-9]{9}$", 10, 10, "Kazakhstan", "Kazakhstan mobile numbers (6xx, 7xx)"),
    ("uz", "+998", r"^\+998[0-9]{9}$", 9, 9, "Uzbekistan", "Uzbekistan mobile numbers"),
    ("tj", "+992", r"^\+992[0-9]{9}$", 9, 9, "Tajikistan", "Tajikistan mobile numbers"),
    ("tm", "+993", r"^\+993[0-9]{8}$", 8, 8, "Turkmenistan", "Turkmenistan mobile numbers"),
    // CIS
    ("ua", "+380", r"^\+380[0-9]{9}$", 9, 9, "Ukraine", "Ukraine mobile numbers"),
    ("by", "+375", r"^\+375[0-9]{9}$", 9, 9, "Belarus", "Belarus mobile numbers"),
    ("am", "+374", r"^\+374[0-9]{8}$", 8, 8, "Armenia", "Armenia mobile numbers"),
    ("az", "+994", r"^\+994[0-9]{9}$", 9, 9, "Azerbaijan", "Azerbaijan mobile numbers"),
    ("ge", "+995", r"^\+995[0-9]{9}$", 9, 9, "Georgia", "Georgia mobile numbers"),
    ("md", "+373", r"^\+373[0-9]{8}$", 8, 8, "Moldova", "Moldova mobile numbers"),
    // Western Europe
    ("de", "+49", r"^\+49[1][5-7][0-9]{8,9}$", 10, 12, "Germany", "Germany mobile numbers"),
    ("fr", "+33", r"^\+33[6-7][0-9]{8}$", 9, 10, "France", "France mobile numbers"),
    ("uk", "+44", r"^\+44[7][0-9]{9}$", 10, 11, "United Kingdom", "UK mobile numbers"),
    ("it", "+39", r"^\+39[3][0-9]{8,9}$", 9, 11, "Italy", "Italy mobile numbers"),
    ("es", "+34", r"^\+34[6-7][0-9]{8}$", 9, 9, "Spain", "Spain mobile numbers"),
    ("nl", "+31", r"^\+31[6][0-9]{8}$", 9, 9, "Netherlands", "Netherlands mobile numbers"),
    // North America
    ("us", "+1", r"^\+1[2-9][0-9]{9}$", 10, 10, "United States", "US mobile numbers"),
    ("ca", "+1", r"^\+1[2-9][0-9]{9}$", 10, 10, "Canada", "Canada mobile numbers"),
    // Asia
    ("tr", "+90", r"^\+90[5][0-9]{9}$", 10, 10, "Turkey", "Turkey mobile numbers"),
    ("cn", "+86", r"^\+86[1][3-9][0-9]{9}$", 11, 11, "China", "China mobile numbers"),
    ("in", "+91", r"^\+91[6-9][0-9]{9}$", 10, 10, "India", "India mobile numbers"),
    ("jp", "+81", r"^\+81[7-9]0[0-9]{8,9}$", 10, 11, "Japan", "Japan mobile numbers"),
    ("kr", "+82", r"^\+82[1][0-9]{8,9}$", 9, 10, "South Korea", "South Korea mobile numbers"),
    // Middle East
    ("ae", "+971", r"^\+971[5][0-9]{8}$", 9, 9, "United Arab Emirates", "UAE mobile numbers"),
    ("sa", "+966", r"^\+966[5][0-9]{8}$", 9, 9, "Saudi Arabia", "Saudi Arabia mobile numbers"),
    ("il", "+972", r"^\+972[5][0-9]{8}$", 9, 9, "Israel", "Israel mobile numbers"),
    // Africa
    ("za", "+27", r"^\+27[6-8][0-9]{8}$", 9, 9, "South Africa", "South Africa mobile numbers"),
    ("eg", "+20", r"^\+20[1][0-9]{9}$", 10, 10, "Egypt", "Egypt mobile numbers"),
    // Oceania
    ("au", "+61", r"^\+61[4][0-9]{8}$", 9, 9, "Australia", "Australia mobile numbers"),
    ("nz", "+64", r"^\+64[2][0-9]{7,9}$", 8, 10, "New Zealand", "New Zealand mobile numbers"),
    // Latin America
    ("br", "+55", r"^\+55[1-9][1-9][9][0-9]{8}$", 11, 11, "Brazil", "Brazil mobile numbers"),
    ("ar", "+54", r"^\+54[9][1-9][0-9]{8}$", 10, 10, "Argentina", "Argentina mobile numbers"),
    ("mx", "+52", r"^\+52[1][0-9]{10}$", 11, 11, "Mexico", "Mexico mobile numbers"),
];

pub(super) fn built_in_countries() -> impl Iterator<Item = CountryRule> {
    BUILT_IN_COUNTRIES.iter().map(
        |&(code, prefix, pattern, min_length, max_length, country_name, description)| {
            CountryRule::new(code, prefix, pattern, min_length, max_length)
                .with_country_name(country_name)
                .with_description(description)
        },
    )
}
