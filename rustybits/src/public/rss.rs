// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::error;
use crate::app_state::AppState;
use crate::content::pagination::RSS_ITEM_COUNT;
use crate::store::{Post, PostFilter, PostOrder};
use actix_web::{HttpResponse, Result, web};
use chrono::{DateTime, Utc};
use std::fmt::Write;

pub async fn rss_feed(state: web::Data<AppState>) -> Result<HttpResponse> {
    let posts = match state
        .store
        .find_posts(
            &PostFilter::published(),
            PostOrder::Newest,
            RSS_ITEM_COUNT as i64,
            0,
        )
        .await
    {
        Ok(posts) => posts,
        Err(err) => {
            log::error!("Failed to load posts for RSS feed: {}", err);
            return error::internal_error(&state);
        }
    };

    let channel = Channel {
        title: &state.app_name,
        description: &state.description,
        base_url: &state.base_url,
    };

    Ok(HttpResponse::Ok()
        .content_type("application/rss+xml; charset=utf-8")
        .body(render_feed(&channel, &posts, Utc::now())))
}

struct Channel<'a> {
    title: &'a str,
    description: &'a str,
    base_url: &'a str,
}

fn render_feed(channel: &Channel<'_>, posts: &[Post], built_at: DateTime<Utc>) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<rss version=\"2.0\">\n");
    xml.push_str("  <channel>\n");
    let _ = writeln!(xml, "    <title>{}</title>", escape_xml(channel.title));
    let _ = writeln!(xml, "    <link>{}</link>", escape_xml(channel.base_url));
    let _ = writeln!(
        xml,
        "    <description>{}</description>",
        escape_xml(channel.description)
    );
    let _ = writeln!(
        xml,
        "    <lastBuildDate>{}</lastBuildDate>",
        built_at.to_rfc2822()
    );

    for post in posts {
        let link = format!("{}/posts/{}", channel.base_url, post.slug);
        xml.push_str("    <item>\n");
        let _ = writeln!(xml, "      <title>{}</title>", escape_xml(&post.title));
        let _ = writeln!(xml, "      <link>{}</link>", escape_xml(&link));
        let _ = writeln!(
            xml,
            "      <guid isPermaLink=\"true\">{}</guid>",
            escape_xml(&link)
        );
        let _ = writeln!(
            xml,
            "      <description>{}</description>",
            escape_xml(&post.excerpt)
        );
        let _ = writeln!(
            xml,
            "      <pubDate>{}</pubDate>",
            post.created_at.to_rfc2822()
        );
        for tag in &post.tags {
            let _ = writeln!(xml, "      <category>{}</category>", escape_xml(&tag.name));
        }
        xml.push_str("    </item>\n");
    }

    xml.push_str("  </channel>\n");
    xml.push_str("</rss>\n");
    xml
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
