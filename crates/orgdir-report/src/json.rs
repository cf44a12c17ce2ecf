//! Pretty-printed JSON dumps.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;

const INDENT: &[u8] = b"    ";

/// Serialise `value` with four-space indentation. Non-ASCII text is written
/// as UTF-8, not escaped.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
  let mut buf = Vec::new();
  let mut ser =
    Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
  value.serialize(&mut ser)?;
  // serde_json only ever emits valid UTF-8.
  Ok(String::from_utf8_lossy(&buf).into_owned())
}
