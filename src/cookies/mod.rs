//! Netscape cookie file reading, querying and writing.
//!
//! This module provides:
//!
//! - **Parsing**: Netscape `cookies.txt` lines into [`CookieRecord`]s, strict or lenient
//! - **Querying**: scope (domain/path) and expiry filters on a [`CookieCollection`]
//! - **Rendering**: display lines, JSON, or Netscape format
//! - **Persistence**: read/write against any stream or a file on disk
//!
//! # Architecture
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`record`] | Single cookie representation |
//! | [`collection`] | Ordered cookie list and filters |
//! | [`parser`] | Netscape line parsing |
//! | [`serializer`] | Text and JSON rendering |
//! | [`persistence`] | Stream and file I/O |
//! | [`config`] | Parse/write options |
//! | [`error`] | Error type |
//!
//! # Lenient and strict parsing
//!
//! ```rust
//! use cookiefile::cookies::parser::parse_str;
//!
//! let content = "example.com\tFALSE\t/\tFALSE\t2000000000\tsid\t42\nbroken line\n";
//!
//! assert!(parse_str(content, false).is_err());
//! assert_eq!(parse_str(content, true).unwrap().len(), 1);
//! ```
//!
//! # Filtering and rendering
//!
//! ```rust
//! use cookiefile::cookies::{parser::parse_str, serializer::render_json};
//! use time::OffsetDateTime;
//!
//! let jar = parse_str("example.com\tFALSE\t/api\tTRUE\t2000000000\tsid\t42\n", false)?;
//! let now = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
//!
//! let scoped = jar.filter_by_scope("example.com", "/api/v1").filter_valid(now);
//! assert_eq!(scoped.len(), 1);
//! print!("{}", render_json(&scoped));
//! # Ok::<(), cookiefile::CookieFileError>(())
//! ```

pub mod collection;
pub mod config;
pub mod error;
pub mod parser;
pub mod persistence;
pub mod record;
pub mod serializer;

pub use collection::CookieCollection;
pub use config::{CookieFileConfig, OutputFormat};
pub use error::{CookieFileError, Result};
pub use parser::{parse, parse_str, parse_with};
pub use persistence::{
    load_cookies, read_from_file, read_from_file_with, read_from_stream, read_from_stream_with,
    save_cookies, write_to_file, write_to_file_with, write_to_stream, write_to_stream_with,
};
pub use record::CookieRecord;
pub use serializer::{parse_json, render, render_json, render_lines, render_netscape};
