//! Netscape cookie file parser.
//!
//! Each non-comment line has seven tab-separated fields:
//! `domain \t include_subdomains \t path \t secure \t expiry \t name \t value`
//!
//! Empty lines and lines starting with `#` are skipped. In lenient mode,
//! malformed lines (including lines that are not valid UTF-8) are dropped;
//! in strict mode the first one aborts the parse. Read errors abort the
//! parse in both modes.
//!
//! Column 2 sets both `include_subdomains` and `http_only`. With
//! [`CookieFileConfig::http_only_prefix`] enabled, a `#HttpOnly_` domain
//! prefix also marks the cookie HTTP-only.

use crate::cookies::collection::CookieCollection;
use crate::cookies::config::CookieFileConfig;
use crate::cookies::error::{CookieFileError, Result};
use crate::cookies::record::CookieRecord;
use std::io::BufRead;
use time::OffsetDateTime;

/// Prefix curl writes in front of the domain of HTTP-only cookies.
pub const HTTP_ONLY_PREFIX: &str = "#HttpOnly_";

const FIELD_COUNT: usize = 7;

/// Parse a Netscape cookie file.
pub fn parse<R: BufRead>(reader: R, lenient: bool) -> Result<CookieCollection> {
    parse_with(reader, &CookieFileConfig::new().lenient(lenient))
}

/// Parse a Netscape cookie file held in memory.
pub fn parse_str(content: &str, lenient: bool) -> Result<CookieCollection> {
    parse(content.as_bytes(), lenient)
}

/// Parse a Netscape cookie file using the given config.
pub fn parse_with<R: BufRead>(
    mut reader: R,
    config: &CookieFileConfig,
) -> Result<CookieCollection> {
    let mut cookies = CookieCollection::new();
    let mut skipped = 0usize;
    let mut buf = Vec::new();
    let mut line_number = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        let raw = trim_line_ending(&buf);
        let parsed = match std::str::from_utf8(raw) {
            Ok(line) => parse_line(line, line_number, config.http_only_prefix),
            Err(_) => Err(CookieFileError::malformed_line(
                line_number,
                String::from_utf8_lossy(raw),
            )),
        };

        match parsed {
            Ok(Some(cookie)) => cookies.push(cookie),
            Ok(None) => {}
            Err(e) if config.lenient => {
                tracing::debug!(line_number, error = %e, "skipping malformed cookie line");
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    tracing::debug!(count = cookies.len(), skipped, "parsed cookie file");
    Ok(cookies)
}

/// Strip `\n` and a preceding `\r`.
fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

/// Parse a single line. `Ok(None)` means the line is blank or a comment.
fn parse_line(
    raw: &str,
    line_number: usize,
    http_only_prefix: bool,
) -> Result<Option<CookieRecord>> {
    let (line, prefixed) = match raw.strip_prefix(HTTP_ONLY_PREFIX) {
        Some(rest) if http_only_prefix => (rest, true),
        _ => (raw, false),
    };

    if line.is_empty() || (!prefixed && line.starts_with('#')) {
        return Ok(None);
    }

    let parts: Vec<&str> = line.split('\t').collect();
    if parts.len() < FIELD_COUNT {
        return Err(CookieFileError::malformed_line(line_number, raw));
    }

    let expires = parse_expires(parts[4], line_number)?;
    let include_subdomains = parts[1] == "TRUE";

    Ok(Some(CookieRecord {
        domain: parts[0].to_string(),
        expires,
        http_only: include_subdomains || prefixed,
        name: parts[5].to_string(),
        path: parts[2].to_string(),
        secure: parts[3] == "TRUE",
        value: parts[6].to_string(),
        include_subdomains,
    }))
}

fn parse_expires(field: &str, line_number: usize) -> Result<OffsetDateTime> {
    let secs: i64 = field
        .parse()
        .map_err(|e| CookieFileError::malformed_expiry(line_number, field, e))?;
    OffsetDateTime::from_unix_timestamp(secs)
        .map_err(|e| CookieFileError::malformed_expiry(line_number, field, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = ".example.com\tTRUE\t/\tTRUE\t1735689600\tsession\tabc123";

    #[test]
    fn test_parse_field_mapping() {
        let jar = parse_str(GOOD, false).unwrap();
        assert_eq!(jar.len(), 1);

        let c = &jar[0];
        assert_eq!(c.domain, ".example.com");
        assert!(c.include_subdomains);
        assert_eq!(c.path, "/");
        assert!(c.secure);
        assert_eq!(c.expires_unix(), 1_735_689_600);
        assert_eq!(c.name, "session");
        assert_eq!(c.value, "abc123");
        assert!(c.http_only);
    }

    #[test]
    fn test_column_two_false_is_not_http_only() {
        let jar = parse_str("a.com\tFALSE\t/\tFALSE\t0\tn\tv", false).unwrap();
        assert!(!jar[0].include_subdomains);
        assert!(!jar[0].http_only);
    }

    #[test]
    fn test_flags_are_case_sensitive() {
        let jar = parse_str("a.com\ttrue\t/\tTrue\t0\tn\tv", false).unwrap();
        assert!(!jar[0].include_subdomains);
        assert!(!jar[0].secure);
    }

    #[test]
    fn test_each_line_uses_its_own_expiry() {
        let content = "a.com\tFALSE\t/\tFALSE\t100\tx\t1\nb.com\tFALSE\t/\tFALSE\t-100\ty\t2\n";
        let jar = parse_str(content, false).unwrap();
        assert_eq!(jar[0].expires_unix(), 100);
        assert_eq!(jar[1].expires_unix(), -100);
    }

    #[test]
    fn test_empty_value_and_extra_fields() {
        let jar = parse_str("a.com\tFALSE\t/\tFALSE\t0\tname\t\textra", false).unwrap();
        assert_eq!(jar[0].name, "name");
        assert_eq!(jar[0].value, "");
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = format!("# header\r\n{GOOD}\r\n\r\n");
        let jar = parse_str(&content, false).unwrap();
        assert_eq!(jar.len(), 1);
        assert_eq!(jar[0].value, "abc123");
    }

    #[test]
    fn test_strict_short_line_reports_line() {
        let err = parse_str("# c\na\tb\tc", false).unwrap_err();
        match err {
            CookieFileError::MalformedLine { line_number, line } => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "a\tb\tc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_strict_bad_expiry() {
        let err = parse_str("a.com\tFALSE\t/\tFALSE\tnever\tn\tv", false).unwrap_err();
        assert!(matches!(
            err,
            CookieFileError::MalformedExpiry { line_number: 1, ref value, .. } if value == "never"
        ));
    }

    #[test]
    fn test_out_of_range_expiry_is_malformed() {
        let line = format!("a.com\tFALSE\t/\tFALSE\t{}\tn\tv", i64::MAX);
        let err = parse_str(&line, false).unwrap_err();
        assert!(matches!(err, CookieFileError::MalformedExpiry { .. }));
        assert!(parse_str(&line, true).unwrap().is_empty());
    }

    #[test]
    fn test_lenient_skips_bad_expiry() {
        let content = format!("a.com\tFALSE\t/\tFALSE\t12x\tn\tv\n{GOOD}\n");
        let jar = parse_str(&content, true).unwrap();
        assert_eq!(jar.len(), 1);
        assert_eq!(jar[0].name, "session");
    }

    #[test]
    fn test_http_only_prefix_is_comment_by_default() {
        let content = format!("#HttpOnly_{GOOD}");
        assert!(parse_str(&content, false).unwrap().is_empty());
    }

    #[test]
    fn test_http_only_prefix_when_enabled() {
        let content = "#HttpOnly_a.com\tFALSE\t/\tFALSE\t0\tsid\tv\n# plain comment\n";
        let config = CookieFileConfig::new().http_only_prefix(true);
        let jar = parse_with(content.as_bytes(), &config).unwrap();

        assert_eq!(jar.len(), 1);
        assert!(jar[0].http_only);
        assert!(!jar[0].include_subdomains);
        assert_eq!(jar[0].domain, "a.com");
    }

    #[test]
    fn test_http_only_prefix_short_line_reports_raw_line() {
        let config = CookieFileConfig::new().http_only_prefix(true);
        let err = parse_with("#HttpOnly_a.com\tTRUE".as_bytes(), &config).unwrap_err();
        match err {
            CookieFileError::MalformedLine { line_number, line } => {
                assert_eq!(line_number, 1);
                assert_eq!(line, "#HttpOnly_a.com\tTRUE");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_far_future_expiry_is_accepted() {
        let jar = parse_str("a.com\tFALSE\t/\tFALSE\t300000000000\tn\tv", false).unwrap();
        assert_eq!(jar[0].expires_unix(), 300_000_000_000);
        assert!(jar[0].expires.year() > 9999);
    }

    #[test]
    fn test_invalid_utf8_line_skipped_when_lenient() {
        let bytes: &[u8] = b"a.com\tFALSE\t/\tFALSE\t0\tgood\tv\nb.com\tFALSE\t/\tFALSE\t0\tn\t\xff\xfe\n";
        let jar = parse(bytes, true).unwrap();
        assert_eq!(jar.len(), 1);
        assert_eq!(jar[0].name, "good");
    }

    #[test]
    fn test_invalid_utf8_line_is_malformed_when_strict() {
        let bytes: &[u8] = b"# ok\nb.com\tFALSE\t/\tFALSE\t0\tn\t\xff\n";
        let err = parse(bytes, false).unwrap_err();
        assert!(matches!(err, CookieFileError::MalformedLine { line_number: 2, .. }));
    }

    #[test]
    fn test_read_error_propagates_when_lenient() {
        struct FailingReader;

        impl std::io::Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stream broke"))
            }
        }

        let err = parse(std::io::BufReader::new(FailingReader), true).unwrap_err();
        assert!(err.is_io());
    }
}
