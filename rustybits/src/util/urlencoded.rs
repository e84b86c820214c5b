// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

/// Decode `key=value` pairs one at a time. A pair that fails to decode is
/// skipped instead of failing the whole input.
pub fn decode_pairs(input: &[u8]) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for segment in input.split(|byte| *byte == b'&') {
        if segment.is_empty() {
            continue;
        }
        match serde_urlencoded::from_bytes::<Vec<(String, String)>>(segment) {
            Ok(decoded) => pairs.extend(decoded),
            Err(err) => log::debug!("Skipping undecodable urlencoded pair: {}", err),
        }
    }
    pairs
}

/// First value for `key`, if any.
pub fn first_value(input: &[u8], key: &str) -> Option<String> {
    decode_pairs(input)
        .into_iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value)
}
