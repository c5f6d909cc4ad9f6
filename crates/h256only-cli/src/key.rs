//! Key and input loading
use anyhow::{Context, Result, bail};
use h256only::{KEY_LENGTH, Key};
use std::io::Read;
use std::path::Path;

/// Read a key file, or stdin for '-'
pub fn load_key(path: &str) -> Result<Key> {
    let data = if path == "-" {
        read_stdin().context("Couldn't read key from stdin")?
    } else {
        std::fs::read(Path::new(path)).with_context(|| format!("Couldn't read key file {path}"))?
    };
    parse_key(&data)
}

/// Build a key from key file content
///
/// One trailing newline is ignored. What is left must be the raw key or its
/// hex encoding.
pub fn parse_key(data: &[u8]) -> Result<Key> {
    if data.is_empty() {
        bail!("no data");
    }

    let data = data.strip_suffix(b"\n").unwrap_or(data);
    match data.len() {
        KEY_LENGTH => Ok(Key::from_bytes(data)?),
        len if len == KEY_LENGTH * 2 => {
            let encoded = std::str::from_utf8(data).context("hex key is not valid UTF-8")?;
            Ok(Key::from_hex(encoded)?)
        }
        _ => bail!(
            "invalid key file, should have length {} or {}",
            KEY_LENGTH,
            KEY_LENGTH * 2
        ),
    }
}

/// The positional argument itself, or stdin for '-'
pub fn read_input(arg: &str) -> Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }

    let data = read_stdin().context("Couldn't read input from stdin")?;
    String::from_utf8(data).context("input is not valid UTF-8")
}

fn read_stdin() -> std::io::Result<Vec<u8>> {
    let mut data = Vec::new();
    std::io::stdin().read_to_end(&mut data)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TEST_KEY_HEX: &str = "6368616e676520746869732070617373776f726420746f206120736563726574";

    fn key_file(content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    fn signed_with(key: &Key) -> String {
        h256only::Token::new().signed_string(key).unwrap()
    }

    #[test]
    fn test_raw_key_file() {
        let file = key_file(b"change this password to a secret");
        let key = load_key(file.path().to_str().unwrap()).unwrap();
        assert_eq!(signed_with(&key), signed_with(&Key::from_hex(TEST_KEY_HEX).unwrap()));
    }

    #[test]
    fn test_raw_key_file_with_newline() {
        let file = key_file(b"change this password to a secret\n");
        assert!(load_key(file.path().to_str().unwrap()).is_ok());
    }

    #[test]
    fn test_hex_key_file() {
        let file = key_file(format!("{TEST_KEY_HEX}\n").as_bytes());
        let key = load_key(file.path().to_str().unwrap()).unwrap();
        assert_eq!(signed_with(&key), signed_with(&Key::from_hex(TEST_KEY_HEX).unwrap()));
    }

    #[test]
    fn test_invalid_key_files() {
        assert!(parse_key(b"").is_err());
        assert!(parse_key(b"too short\n").is_err());
        assert!(parse_key(&[b'z'; 64]).is_err());
        assert!(parse_key(&[0u8; 32]).is_err());
        // Only one newline is stripped
        assert!(parse_key(b"change this password to a secret\n\n").is_err());
    }

    #[test]
    fn test_missing_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.key");
        let err = load_key(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Couldn't read key file"));
    }

    #[test]
    fn test_read_input_passthrough() {
        assert_eq!(read_input(r#"{"foo":"bar"}"#).unwrap(), r#"{"foo":"bar"}"#);
    }
}
