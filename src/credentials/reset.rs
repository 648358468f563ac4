use super::types::ResetConfig;
use crate::utils::{atomic_write, generate_password_hash};
use anyhow::{Context, Result as AnyhowResult};
use log::info;
use serde::Serialize;
use serde_json::Value;
use std::fs;

/// Resets the admin password hash inside the credentials document.
///
/// This function reads the JSON document, derives a fresh salted
/// PBKDF2-SHA256 hash for the configured password, replaces
/// `admin_credentials.password_hash`, and rewrites the whole document in
/// place. Every other field is passed through untouched, with key order
/// preserved. The rewrite goes through a temporary sibling file and an
/// atomic rename, so a failure at any step leaves the original document
/// exactly as it was.
///
/// # Arguments
///
/// * `config` - The document path, new password, and iteration count.
///
/// # Returns
///
/// * `Ok(String)` - The new hash string now stored in the document.
/// * `Err(anyhow::Error)` - The document could not be read, was not valid
///   JSON, has no `admin_credentials` object, or could not be rewritten.
pub fn reset_password(config: &ResetConfig) -> AnyhowResult<String> {
    let raw = fs::read_to_string(&config.data_file)
        .context(format!("Failed to read {}", config.data_file.display()))?;
    let mut document: Value =
        serde_json::from_str(&raw).context("Failed to parse credentials document as JSON")?;

    let new_hash = generate_password_hash(&config.password, config.iterations);
    set_password_hash(&mut document, &new_hash)?;

    let serialized =
        to_pretty_string(&document).context("Failed to serialize credentials document")?;
    atomic_write(&config.data_file, serialized.as_bytes())
        .context(format!("Failed to replace {}", config.data_file.display()))?;

    info!("Updated password hash in {}", config.data_file.display());
    Ok(new_hash)
}

/// Replaces the `password_hash` field of the `admin_credentials` object.
///
/// The field is created if absent, but a document without an
/// `admin_credentials` object is rejected rather than patched up.
fn set_password_hash(document: &mut Value, new_hash: &str) -> AnyhowResult<()> {
    let credentials = document
        .get_mut("admin_credentials")
        .context("Document has no admin_credentials field")?
        .as_object_mut()
        .context("admin_credentials is not a JSON object")?;
    credentials.insert(
        "password_hash".to_string(),
        Value::String(new_hash.to_string()),
    );
    Ok(())
}

/// Serializes the document with 4-space indentation and a trailing newline.
///
/// serde_json writes strings as unescaped UTF-8, so non-ASCII content in the
/// document survives the round trip as-is.
fn to_pretty_string(document: &Value) -> AnyhowResult<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document
        .serialize(&mut serializer)
        .context("JSON serialization failed")?;
    buffer.push(b'\n');
    String::from_utf8(buffer).context("Serialized JSON was not valid UTF-8")
}
