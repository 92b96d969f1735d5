//! Cookie persistence - read and write cookie files on streams and on disk.
//!
//! Readers buffer the whole input before parsing. File handles live only
//! for the duration of the call and are closed on every return path.

use crate::cookies::collection::CookieCollection;
use crate::cookies::config::CookieFileConfig;
use crate::cookies::error::Result;
use crate::cookies::parser;
use crate::cookies::serializer;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Read a whole stream and parse it as a Netscape cookie file.
pub fn read_from_stream<R: Read>(reader: R, lenient: bool) -> Result<CookieCollection> {
    read_from_stream_with(reader, &CookieFileConfig::new().lenient(lenient))
}

pub fn read_from_stream_with<R: Read>(
    mut reader: R,
    config: &CookieFileConfig,
) -> Result<CookieCollection> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    parser::parse_with(buf.as_slice(), config)
}

/// Read and parse a cookie file from disk.
pub fn read_from_file<P: AsRef<Path>>(path: P, lenient: bool) -> Result<CookieCollection> {
    read_from_file_with(path, &CookieFileConfig::new().lenient(lenient))
}

pub fn read_from_file_with<P: AsRef<Path>>(
    path: P,
    config: &CookieFileConfig,
) -> Result<CookieCollection> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), lenient = config.lenient, "reading cookie file");
    let file = File::open(path)?;
    read_from_stream_with(file, config)
}

/// Load cookies from a Netscape cookie file.
///
/// # Example
/// ```no_run
/// let cookies = cookiefile::load_cookies("cookies.txt", true)?;
/// println!("Loaded {} cookies", cookies.len());
/// # Ok::<(), cookiefile::CookieFileError>(())
/// ```
pub fn load_cookies<P: AsRef<Path>>(path: P, lenient: bool) -> Result<CookieCollection> {
    read_from_file(path, lenient)
}

/// Write the display-line rendering of `cookies` to `writer`.
pub fn write_to_stream<W: Write>(cookies: &CookieCollection, writer: W) -> Result<()> {
    write_to_stream_with(cookies, writer, &CookieFileConfig::new())
}

/// Write `cookies` to `writer` in the config's output format.
pub fn write_to_stream_with<W: Write>(
    cookies: &CookieCollection,
    mut writer: W,
    config: &CookieFileConfig,
) -> Result<()> {
    let rendered = serializer::render(cookies, config.output_format);
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Create or truncate `path` and write the display-line rendering to it.
pub fn write_to_file<P: AsRef<Path>>(cookies: &CookieCollection, path: P) -> Result<()> {
    write_to_file_with(cookies, path, &CookieFileConfig::new())
}

pub fn write_to_file_with<P: AsRef<Path>>(
    cookies: &CookieCollection,
    path: P,
    config: &CookieFileConfig,
) -> Result<()> {
    let path = path.as_ref();
    tracing::debug!(
        path = %path.display(),
        count = cookies.len(),
        format = ?config.output_format,
        "writing cookie file"
    );
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    write_to_stream_with(cookies, BufWriter::new(file), config)
}

/// Save cookies to `path` in the config's output format.
///
/// # Example
/// ```no_run
/// use cookiefile::{CookieFileConfig, OutputFormat};
///
/// let cookies = cookiefile::load_cookies("cookies.txt", true)?;
/// let config = CookieFileConfig::new().output_format(OutputFormat::Json);
/// cookiefile::save_cookies(&cookies, "cookies.json", &config)?;
/// # Ok::<(), cookiefile::CookieFileError>(())
/// ```
pub fn save_cookies<P: AsRef<Path>>(
    cookies: &CookieCollection,
    path: P,
    config: &CookieFileConfig,
) -> Result<()> {
    write_to_file_with(cookies, path, config)
}

impl CookieCollection {
    /// Replace the contents with the cookies read from `reader`.
    ///
    /// On error the current contents are left unchanged.
    pub fn read<R: Read>(&mut self, reader: R, lenient: bool) -> Result<()> {
        *self = read_from_stream(reader, lenient)?;
        Ok(())
    }

    /// Replace the contents with the cookies read from the file at `path`.
    pub fn read_file<P: AsRef<Path>>(&mut self, path: P, lenient: bool) -> Result<()> {
        *self = read_from_file(path, lenient)?;
        Ok(())
    }

    /// Write the display-line rendering to `writer`.
    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        write_to_stream(self, writer)
    }

    /// Create or truncate `path` and write the display-line rendering to it.
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_to_file(self, path)
    }
}
