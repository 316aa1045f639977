use std::io::Read;

use anyhow::Context;

/// Read a schema or document argument: a file path, or `-` for standard input.
pub fn read_text(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read standard input")?;
        return Ok(text);
    }
    std::fs::read_to_string(source).with_context(|| format!("failed to read {source}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        std::fs::write(&path, r#"{"type": "object"}"#).unwrap();
        assert_eq!(read_text(path.to_str().unwrap()).unwrap(), r#"{"type": "object"}"#);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_text("/nonexistent/josch/schema.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/josch/schema.json"));
    }
}
