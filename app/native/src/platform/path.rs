//! Path utilities for shell-like path expansion.
//!
//! Paths from the CLI and the configuration file may start with `~`.

use std::path::PathBuf;

/// Expands shell-like paths (tilde) to absolute paths.
///
/// The path can be:
/// - Absolute (starts with `/`): returned as-is
/// - Home-relative (starts with `~`): expanded to the user's home directory
/// - Relative: returned as-is, so it resolves against the working directory
///
/// # Examples
///
/// ```
/// use quotewall_lib::platform::path::expand;
///
/// let absolute = expand("/usr/share/fonts");
/// assert_eq!(absolute.to_string_lossy(), "/usr/share/fonts");
///
/// let relative = expand("quotes.json");
/// assert_eq!(relative.to_string_lossy(), "quotes.json");
/// ```
#[must_use]
pub fn expand(path: &str) -> PathBuf {
    let path = path.trim();

    if path.is_empty() {
        return PathBuf::new();
    }

    let expanded = shellexpand::tilde(path);
    PathBuf::from(expanded.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_empty() {
        assert_eq!(expand(""), PathBuf::new());
        assert_eq!(expand("   "), PathBuf::new());
    }

    #[test]
    fn test_expand_absolute_path() {
        let result = expand("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf");
        assert_eq!(result, PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"));
    }

    #[test]
    fn test_expand_relative_path() {
        assert_eq!(expand("wallpaper.png"), PathBuf::from("wallpaper.png"));
    }

    #[test]
    fn test_expand_tilde_path() {
        let result = expand("~/quotes.json");
        assert!(!result.to_string_lossy().starts_with('~'));
        assert!(result.to_string_lossy().ends_with("quotes.json"));
    }

    #[test]
    fn test_expand_trims_whitespace() {
        assert_eq!(expand("  out.png  "), PathBuf::from("out.png"));
    }
}
