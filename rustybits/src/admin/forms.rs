// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::store::PostDraft;
use crate::util::urlencoded::{decode_pairs, first_value};

/// Parse a urlencoded post create/update body.
///
/// `tags` may repeat, and each value may itself be a comma separated list.
/// The `published` checkbox counts as set for `on`, `true` or `1`. Pairs that
/// fail to decode are skipped so the rest of the submission survives.
pub fn parse_post_form(body: &[u8]) -> PostDraft {
    let mut draft = PostDraft::default();
    for (key, value) in decode_pairs(body) {
        match key.as_str() {
            "title" => draft.title = value.trim().to_string(),
            "content" => draft.content = value,
            "excerpt" => draft.excerpt = value.trim().to_string(),
            "published" => draft.published = checkbox_value(&value),
            "tags" | "tags[]" => draft.tags.extend(split_tags(&value)),
            _ => {}
        }
    }
    draft
}

/// Optional explicit target state sent with a publish toggle.
pub fn parse_published_flag(body: &[u8]) -> Option<bool> {
    first_value(body, "published").map(|value| checkbox_value(&value))
}

fn checkbox_value(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "on" | "true" | "1"
    )
}

fn split_tags(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
