use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a line-per-URL list file, dropping empty lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read URL list from {:?}", path))?;
    Ok(content
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect())
}

/// Write a list file, one entry per line with a trailing newline.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content).with_context(|| format!("Failed to write URL list to {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn round_trips_a_url_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("candidates.txt");
        let lines = vec![
            "https://a.com/x".to_string(),
            "http://a.com/y".to_string(),
        ];

        write_lines(&path, &lines).unwrap();
        assert_eq!(read_lines(&path).unwrap(), lines);
    }

    #[test]
    fn skips_empty_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("candidates.txt");
        fs::write(&path, "a.com/x\n\na.com/y\n\n").unwrap();

        assert_eq!(
            read_lines(&path).unwrap(),
            vec!["a.com/x".to_string(), "a.com/y".to_string()]
        );
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = read_lines(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("absent.txt"));
    }
}
