// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::{HttpRequest, HttpResponse, Result, web};

const STYLE_CSS: &str = include_str!("builtin_assets/style.css");

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/favicon.ico", web::get().to(serve_favicon));
    cfg.route("/builtin/{filename:.*}", web::get().to(serve_builtin_file));
}

async fn serve_favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

async fn serve_builtin_file(req: HttpRequest) -> Result<HttpResponse> {
    let filename = match req.match_info().get("filename") {
        Some(f) => f,
        None => {
            log::error!("Missing 'filename' parameter in builtin file handler");
            return Ok(HttpResponse::InternalServerError().body("Internal Server Error"));
        }
    };

    match filename {
        "style.css" => Ok(HttpResponse::Ok()
            .content_type("text/css; charset=utf-8")
            .body(STYLE_CSS)),
        _ => Ok(HttpResponse::NotFound().finish()),
    }
}
