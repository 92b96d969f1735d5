//! Rendering cookie collections as text.
//!
//! Three formats are supported:
//! - display lines (`name=value; Domain=...`), for humans and logs
//! - JSON, one object per line inside an array
//! - Netscape cookie file, readable by curl, wget and [`parse`](crate::cookies::parser::parse)

use crate::cookies::collection::CookieCollection;
use crate::cookies::config::OutputFormat;
use crate::cookies::error::Result;
use crate::cookies::parser::HTTP_ONLY_PREFIX;
use crate::cookies::record::CookieRecord;
use std::fmt::Write;

const NETSCAPE_HEADER: &str = "# Netscape HTTP Cookie File\n# https://curl.se/docs/http-cookies.html\n\n";

/// Render `cookies` in the given format.
pub fn render(cookies: &CookieCollection, format: OutputFormat) -> String {
    match format {
        OutputFormat::Lines => render_lines(cookies),
        OutputFormat::Json => render_json(cookies),
        OutputFormat::Netscape => render_netscape(cookies),
    }
}

/// One display line per cookie, each terminated by `\n`.
pub fn render_lines(cookies: &CookieCollection) -> String {
    let mut out = String::new();
    for cookie in cookies {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", cookie);
    }
    out
}

/// JSON array with one cookie object per line and a trailing newline.
///
/// A cookie that cannot be encoded is rendered as an `error: ...` line in
/// place of its object; the other cookies are still rendered.
pub fn render_json(cookies: &CookieCollection) -> String {
    let mut out = String::from("[\n");
    let last = cookies.len().saturating_sub(1);
    for (i, cookie) in cookies.iter().enumerate() {
        out.push_str(&cookie_json(cookie));
        out.push_str(if i == last { "\n" } else { ",\n" });
    }
    out.push_str("]\n");
    out
}

fn cookie_json(cookie: &CookieRecord) -> String {
    match serde_json::to_string(cookie) {
        Ok(json) => json,
        Err(e) => {
            tracing::debug!(name = %cookie.name, domain = %cookie.domain, error = %e, "failed to encode cookie");
            format!("error: {}", e)
        }
    }
}

/// Netscape cookie file with a comment header.
///
/// HTTP-only cookies whose column 2 is `FALSE` are written with the
/// `#HttpOnly_` domain prefix.
pub fn render_netscape(cookies: &CookieCollection) -> String {
    let mut out = String::from(NETSCAPE_HEADER);
    for cookie in cookies {
        let prefix = if cookie.http_only && !cookie.include_subdomains {
            HTTP_ONLY_PREFIX
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "{}{}\t{}\t{}\t{}\t{}\t{}\t{}",
            prefix,
            cookie.domain,
            flag(cookie.include_subdomains),
            cookie.path,
            flag(cookie.secure),
            cookie.expires_unix(),
            cookie.name,
            cookie.value
        );
    }
    out
}

fn flag(value: bool) -> &'static str {
    if value {
        "TRUE"
    } else {
        "FALSE"
    }
}

/// Decode the JSON format produced by [`render_json`].
///
/// `httpOnly` carries column 2, so it also sets `include_subdomains`.
pub fn parse_json(content: &str) -> Result<CookieCollection> {
    let cookies: Vec<CookieRecord> = serde_json::from_str(content)?;
    Ok(cookies
        .into_iter()
        .map(|mut c| {
            c.include_subdomains = c.http_only;
            c
        })
        .collect())
}
