//! Text rendering of crate listings.

use std::fmt;

use crate::registry::CrateEntry;

/// Render entries as a bracketed list, one `(id, downloads, repository)`
/// tuple per line. Null counts and missing repositories print as `None`.
pub fn render(entries: &[CrateEntry]) -> String {
    Listing(entries).to_string()
}

struct Listing<'a>(&'a [CrateEntry]);

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",\n ")?;
            }
            write!(f, "({:?}, ", entry.id)?;
            match entry.recent_downloads {
                Some(count) => write!(f, "{}, ", count)?,
                None => f.write_str("None, ")?,
            }
            match &entry.repository {
                Some(repo) => write!(f, "{:?})", repo)?,
                None => f.write_str("None)")?,
            }
        }
        f.write_str("]\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, recent_downloads: Option<u64>, repository: Option<&str>) -> CrateEntry {
        CrateEntry {
            id: id.to_string(),
            recent_downloads,
            repository: repository.map(str::to_string),
        }
    }

    #[test]
    fn test_render_single() {
        let entries = vec![entry("serde", Some(1000), Some("https://github.com/serde-rs/serde"))];
        assert_eq!(
            render(&entries),
            "[(\"serde\", 1000, \"https://github.com/serde-rs/serde\")]\n"
        );
    }

    #[test]
    fn test_render_multiple_with_missing_repository() {
        let entries = vec![
            entry("syn", Some(3000), Some("https://github.com/dtolnay/syn")),
            entry("libc", Some(2000), None),
        ];
        assert_eq!(
            render(&entries),
            "[(\"syn\", 3000, \"https://github.com/dtolnay/syn\"),\n (\"libc\", 2000, None)]\n"
        );
    }

    #[test]
    fn test_render_null_download_count() {
        let entries = vec![entry("x", None, None)];
        assert_eq!(render(&entries), "[(\"x\", None, None)]\n");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "[]\n");
    }

    #[test]
    fn test_render_escapes_quotes() {
        let entries = vec![entry("odd\"name", Some(1), None)];
        assert_eq!(render(&entries), "[(\"odd\\\"name\", 1, None)]\n");
    }

    #[test]
    fn test_render_is_deterministic() {
        let entries = vec![entry("a", Some(2), None), entry("b", Some(1), Some("https://b"))];
        assert_eq!(render(&entries), render(&entries.clone()));
    }
}
