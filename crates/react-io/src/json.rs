//! JSON loading and pretty-printed output

use crate::reader::{IoError, IoResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Indentation used for all JSON output
const INDENT: &[u8] = b"    ";

/// Load a JSON array of records from a file
pub fn load_json_array<T: DeserializeOwned>(path: impl AsRef<Path>) -> IoResult<Vec<T>> {
    let path = path.as_ref();
    let display = path.display().to_string();
    if !path.exists() {
        return Err(IoError::FileNotFound(display));
    }

    let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| IoError::Json {
        path: display,
        message: e.to_string(),
    })
}

/// Serialize a value as JSON with four-space indentation
pub fn to_pretty_string<T: Serialize + ?Sized>(value: &T) -> IoResult<String> {
    let mut buf = Vec::new();
    write_pretty(&mut buf, value)?;
    String::from_utf8(buf).map_err(|e| IoError::Io(e.to_string()))
}

/// Write a value as pretty JSON to a file, creating parent directories
pub fn write_json_pretty<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> IoResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| IoError::Io(e.to_string()))?;
    }

    let file = File::create(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
    let mut writer = BufWriter::new(file);
    write_pretty(&mut writer, value)?;
    writer.flush().map_err(|e| IoError::Io(e.to_string()))
}

fn write_pretty<W: Write, T: Serialize + ?Sized>(writer: W, value: &T) -> IoResult<()> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| IoError::Io(format!("JSON serialization failed: {}", e)))
}
