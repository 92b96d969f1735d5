//! Ordered cookie collection and scope/expiry queries.

use crate::cookies::record::CookieRecord;
use std::ops::Index;
use std::slice;
use time::OffsetDateTime;

/// Cookies in file order. Duplicates are kept as they appear in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieCollection {
    cookies: Vec<CookieRecord>,
}

impl CookieCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CookieRecord> {
        self.cookies.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, CookieRecord> {
        self.cookies.iter()
    }

    pub fn as_slice(&self) -> &[CookieRecord] {
        &self.cookies
    }

    pub fn into_vec(self) -> Vec<CookieRecord> {
        self.cookies
    }

    pub(crate) fn push(&mut self, cookie: CookieRecord) {
        self.cookies.push(cookie);
    }

    /// Cookies whose domain equals `domain` exactly and whose path is a prefix of `path`.
    ///
    /// No subdomain matching is performed.
    pub fn filter_by_scope(&self, domain: &str, path: &str) -> CookieCollection {
        self.iter()
            .filter(|c| c.domain == domain && path.starts_with(c.path.as_str()))
            .cloned()
            .collect()
    }

    /// Cookies expiring strictly after `now`.
    pub fn filter_valid(&self, now: OffsetDateTime) -> CookieCollection {
        self.iter().filter(|c| !c.is_expired(now)).cloned().collect()
    }

    /// [`filter_valid`](Self::filter_valid) against the current wall clock.
    pub fn filter_valid_now(&self) -> CookieCollection {
        self.filter_valid(OffsetDateTime::now_utc())
    }
}

impl From<Vec<CookieRecord>> for CookieCollection {
    fn from(cookies: Vec<CookieRecord>) -> Self {
        Self { cookies }
    }
}

impl FromIterator<CookieRecord> for CookieCollection {
    fn from_iter<I: IntoIterator<Item = CookieRecord>>(iter: I) -> Self {
        Self {
            cookies: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CookieCollection {
    type Item = CookieRecord;
    type IntoIter = std::vec::IntoIter<CookieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cookies.into_iter()
    }
}

impl<'a> IntoIterator for &'a CookieCollection {
    type Item = &'a CookieRecord;
    type IntoIter = slice::Iter<'a, CookieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cookies.iter()
    }
}

impl Index<usize> for CookieCollection {
    type Output = CookieRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cookies[index]
    }
}
