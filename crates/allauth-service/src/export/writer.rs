//! Rendering and delivery of the export document.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use tokio::io::AsyncWriteExt;

use allauth_core::error::{AppError, ErrorKind};
use allauth_core::result::AppResult;

/// Where the export document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportDestination {
    /// Standard output.
    Stdout,
    /// A file, replaced if it exists.
    File(PathBuf),
}

impl ExportDestination {
    /// Parses a destination argument; `-` selects standard output.
    pub fn parse(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Writes the rendered document.
    ///
    /// Files are written to a sibling temporary file first and renamed over
    /// the destination, so readers never observe a half-written export.
    pub async fn write(&self, document: &[u8]) -> AppResult<()> {
        match self {
            Self::Stdout => {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(document).await?;
                stdout.flush().await?;
                Ok(())
            }
            Self::File(path) => write_atomically(path, document).await,
        }
    }
}

impl fmt::Display for ExportDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => write!(f, "-"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Pretty printer whose output is pure ASCII.
///
/// Characters outside printable ASCII are written as `\uXXXX` escapes,
/// as UTF-16 surrogate pairs above the Basic Multilingual Plane.
struct AsciiFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl Formatter for AsciiFormatter<'_> {
    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }
}

/// Renders records as a JSON array with 2-space indentation and `": "`
/// separators, keys in insertion order, without a trailing newline.
/// Non-ASCII text is escaped.
pub fn render_json(records: &[Value]) -> AppResult<Vec<u8>> {
    let mut out = Vec::new();
    let formatter = AsciiFormatter {
        inner: PrettyFormatter::with_indent(b"  "),
    };
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    records.serialize(&mut serializer)?;
    Ok(out)
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "export".to_string());
    path.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}

async fn write_atomically(path: &Path, document: &[u8]) -> AppResult<()> {
    let tmp = temp_path(path);

    tokio::fs::write(&tmp, document).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Storage,
            format!("Failed to write '{}': {e}", path.display()),
            e,
        )
    })?;

    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(AppError::with_source(
            ErrorKind::Storage,
            format!("Failed to replace '{}': {e}", path.display()),
            e,
        ));
    }

    Ok(())
}
