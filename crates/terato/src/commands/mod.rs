//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod check;
pub mod checks;
pub mod info;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

/// Read all of `reader`, failing once more than `max_bytes` have been read.
pub fn read_input_stream<R: Read>(reader: R, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let limit = max_bytes.map_or(u64::MAX, |max| {
        u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1)
    });
    let mut bytes = Vec::new();
    reader
        .take(limit)
        .read_to_end(&mut bytes)
        .context("failed to read standard input")?;
    if let Some(max) = max_bytes
        && bytes.len() > max
    {
        anyhow::bail!("input too large: standard input exceeds {max} bytes");
    }
    String::from_utf8(bytes).context("standard input is not valid UTF-8")
}

/// Read the input named on the command line: a file, or stdin for `-`/none.
pub fn read_input(path: Option<&Utf8Path>, max_bytes: Option<usize>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_str() != "-" => read_input_file(path, max_bytes),
        _ => read_input_stream(std::io::stdin().lock(), max_bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn file_over_limit_is_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("capitulo.txt")).unwrap();
        std::fs::write(&path, "una frase corta").unwrap();

        assert!(read_input_file(&path, None).is_ok());
        let err = read_input_file(&path, Some(4)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn missing_file_names_path() {
        let err = read_input_file(Utf8Path::new("no/existe.txt"), None).unwrap_err();
        assert!(err.to_string().contains("no/existe.txt"));
    }

    #[test]
    fn stream_limit() {
        assert_eq!(read_input_stream("hola".as_bytes(), Some(4)).unwrap(), "hola");
        assert!(read_input_stream("hola!".as_bytes(), Some(4)).is_err());
        assert_eq!(read_input_stream("hola!".as_bytes(), None).unwrap(), "hola!");
    }
}
