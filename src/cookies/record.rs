use serde::{Deserialize, Serialize};
use std::fmt;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

const DISPLAY_EXPIRES: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second] +0000 UTC");

/// A single cookie as stored in a Netscape cookie file.
///
/// Serializes to the structured JSON shape
/// `{"domain", "expires", "httpOnly", "name", "path", "secure", "value"}`.
///
/// Column 2 of a Netscape line sets both `include_subdomains` and
/// `http_only`, so `httpOnly` carries it in JSON.
/// [`parse_json`](crate::cookies::serializer::parse_json) restores
/// `include_subdomains` from `httpOnly`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieRecord {
    pub domain: String,
    #[serde(with = "time::serde::rfc3339")]
    pub expires: OffsetDateTime,
    #[serde(default)]
    pub http_only: bool,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub secure: bool,
    #[serde(default)]
    pub value: String,
    #[serde(skip)]
    pub include_subdomains: bool,
}

impl CookieRecord {
    pub fn new(
        domain: impl Into<String>,
        path: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
        expires: OffsetDateTime,
    ) -> Self {
        Self {
            domain: domain.into(),
            expires,
            http_only: false,
            name: name.into(),
            path: path.into(),
            secure: false,
            value: value.into(),
            include_subdomains: false,
        }
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_include_subdomains(mut self, include_subdomains: bool) -> Self {
        self.include_subdomains = include_subdomains;
        self
    }

    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    /// A cookie whose expiry equals `now` is already expired.
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.expires <= now
    }

    /// Expiry as Unix epoch seconds, as written in the file.
    pub fn expires_unix(&self) -> i64 {
        self.expires.unix_timestamp()
    }
}

/// Display rendering: `name=value; Domain=..; Path=..; Expires=..; Secure=..; HttpOnly=..`.
///
/// This is not the Netscape line format and cannot be parsed back.
impl fmt::Display for CookieRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}; Domain={}; Path={}; Expires=",
            self.name, self.value, self.domain, self.path
        )?;
        match self.expires.to_offset(UtcOffset::UTC).format(DISPLAY_EXPIRES) {
            Ok(expires) => f.write_str(&expires)?,
            Err(_) => write!(f, "{}", self.expires)?,
        }
        write!(f, "; Secure={}; HttpOnly={}", self.secure, self.http_only)
    }
}
