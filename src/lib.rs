//! # cookiefile
//!
//! Reader and writer for Netscape cookie files (`cookies.txt`), the
//! tab-separated format used by curl, wget and browser export tools.
//!
//! ## Features
//!
//! - **Strict and lenient parsing**: fail on the first malformed line, or skip it
//! - **Scope and expiry filters**: exact domain plus path prefix, strict expiry comparison
//! - **Rendering**: display lines, JSON array, or Netscape format
//! - **Persistence**: streams and files, with `#HttpOnly_` prefix support
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cookiefile::{load_cookies, render_json};
//!
//! let cookies = load_cookies("cookies.txt", true)?;
//! let valid = cookies.filter_valid_now();
//! print!("{}", render_json(&valid.filter_by_scope("example.com", "/")));
//! # Ok::<(), cookiefile::CookieFileError>(())
//! ```
//!
//! ## Modules
//!
//! - [`cookies`] - Cookie records, parsing, filtering, rendering and persistence

pub mod cookies;

pub use cookies::{
    load_cookies, parse, parse_json, parse_str, parse_with, read_from_file, read_from_file_with,
    read_from_stream, read_from_stream_with, render, render_json, render_lines, render_netscape,
    save_cookies, write_to_file, write_to_file_with, write_to_stream, write_to_stream_with,
    CookieCollection, CookieFileConfig, CookieFileError, CookieRecord, OutputFormat, Result,
};
