// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::util::urlencoded::first_value;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::Serialize;
use std::future::{Ready, ready};

pub const HOME_PAGE_SIZE: u32 = 5;
pub const PUBLIC_PAGE_SIZE: u32 = 10;
pub const API_PAGE_SIZE: u32 = 10;
pub const ADMIN_PAGE_SIZE: u32 = 20;
pub const DASHBOARD_RECENT_POSTS: u32 = 5;
pub const RSS_ITEM_COUNT: u32 = 20;

/// `?page=N` query parameter shared by every paginated listing.
///
/// Extraction never fails: repeated or undecodable values fall back the same
/// way a missing one does.
#[derive(Debug, Default)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn from_query(query: &str) -> Self {
        Self {
            page: first_value(query.as_bytes(), "page"),
        }
    }

    pub fn page(&self) -> u32 {
        parse_page(self.page.as_deref())
    }
}

impl FromRequest for PageQuery {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self::from_query(req.query_string())))
    }
}

/// Parse a 1-based page number. Missing, non-numeric or zero input means page 1.
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
    pub next_page: Option<u32>,
    pub prev_page: Option<u32>,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total_pages = total.div_ceil(per_page as u64) as u32;
        let has_next = page < total_pages;
        let has_prev = page > 1;
        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next,
            has_prev,
            next_page: has_next.then_some(page + 1),
            prev_page: has_prev.then_some(page - 1),
        }
    }

    /// Zero-based row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.per_page as i64
    }

    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }
}
