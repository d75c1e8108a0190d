//! Output filename generation.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Known media extensions, matched at the end of the URL and optionally
/// followed by a query (`?...`) or a size suffix (`:orig`).
const EXTENSION_PATTERN: &str = r"\.(mp4|jpg)(\?[^?]*|:[^:]*|$)$";

fn extension_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EXTENSION_PATTERN).expect("extension pattern is valid"))
}

/// Infer the file extension (without dot) from a source URL.
pub fn infer_extension(url: &str) -> Option<&str> {
    extension_regex()
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Build the output filename for a media key downloaded from `url`.
///
/// Unknown extensions leave the filename bare.
pub fn output_filename(media_key: &str, url: &str) -> Result<String> {
    let stem = sanitize_filename(media_key)?;
    Ok(match infer_extension(url) {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem,
    })
}

/// Validate and sanitize a filename by removing or replacing invalid characters.
///
/// Returns an error if the filename contains path traversal patterns.
pub fn sanitize_filename(name: &str) -> Result<String> {
    // Reject path traversal attempts
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    // Media keys never carry separators
    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    // Reject null bytes
    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    // Replace characters the agent's filesystem may refuse
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    // Reject empty or whitespace-only names
    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

/// Sanitize a path component (folder name) with less strict validation.
///
/// Separators are replaced rather than rejected; traversal is still rejected.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    // Reject path traversal attempts
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    // Reject null bytes
    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed: '{}'",
            name
        )));
    }

    // Separators become underscores here
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    // Handles like "@" sanitize to nothing
    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Path component cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_extension() {
        assert_eq!(
            infer_extension("https://video.twimg.com/vid/720x1280/a.mp4?tag=1"),
            Some("mp4")
        );
        assert_eq!(infer_extension("https://pbs.twimg.com/media/a.jpg"), Some("jpg"));
        assert_eq!(
            infer_extension("https://pbs.twimg.com/media/a.jpg:orig"),
            Some("jpg")
        );
        assert_eq!(
            infer_extension("https://video.twimg.com/a.mp4?tag=12:orig"),
            Some("mp4")
        );
        assert_eq!(infer_extension("https://pbs.twimg.com/media/a.webp"), None);
        assert_eq!(infer_extension("https://pbs.twimg.com/media/a.png:orig"), None);
        assert_eq!(infer_extension("https://video.twimg.com/pl.m3u8?tag=1"), None);
    }

    #[test]
    fn test_output_filename() {
        assert_eq!(
            output_filename("7_1", "https://video.twimg.com/a.mp4?tag=1").unwrap(),
            "7_1.mp4"
        );
        assert_eq!(
            output_filename("3_1", "https://pbs.twimg.com/media/a.jpg").unwrap(),
            "3_1.jpg"
        );
        assert_eq!(
            output_filename("3_2", "https://pbs.twimg.com/media/a.webp").unwrap(),
            "3_2"
        );
        assert!(output_filename("../3_1", "https://pbs.twimg.com/media/a.jpg").is_err());
    }

    #[test]
    fn test_sanitize_filename_valid() {
        assert_eq!(sanitize_filename("normal.txt").unwrap(), "normal.txt");
        assert_eq!(sanitize_filename("file:name.txt").unwrap(), "file_name.txt");
    }

    #[test]
    fn test_sanitize_filename_rejects() {
        assert!(sanitize_filename("../etc/passwd").is_err());
        assert!(sanitize_filename("path/to/file.txt").is_err());
        assert!(sanitize_filename("file\0name.txt").is_err());
        assert!(sanitize_filename("   ").is_err());
    }

    #[test]
    fn test_sanitize_path_component() {
        assert_eq!(sanitize_path_component("alice").unwrap(), "alice");
        assert_eq!(
            sanitize_path_component("path/to/name").unwrap(),
            "path_to_name"
        );
        assert!(sanitize_path_component("../evil").is_err());
        assert!(sanitize_path_component("").is_err());
    }
}
