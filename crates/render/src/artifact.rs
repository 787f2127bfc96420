//! Loading of pre-rendered HTML artifacts.
//!
//! A missing artifact is a value ([`Fragment::Absent`]), never an error: the
//! chapter that wanted it renders a warning and the pass continues.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Why an artifact could not be embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingReason {
    NotFound,
    /// Present but not readable (permissions, is a directory, ...).
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactMissing {
    pub file_name: String,
    pub reason: MissingReason,
}

impl ArtifactMissing {
    /// Text shown inline where the artifact would have been.
    #[must_use]
    pub fn message(&self) -> String {
        match &self.reason {
            MissingReason::NotFound => format!(
                "{} not found. Please place the file in the same directory.",
                self.file_name
            ),
            MissingReason::Unreadable(err) => format!(
                "{} could not be read ({err}). Please check the file in the same directory.",
                self.file_name
            ),
        }
    }
}

impl fmt::Display for ArtifactMissing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Result of looking up an artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Present { file_name: String, html: String },
    Absent(ArtifactMissing),
}

impl Fragment {
    #[must_use]
    pub const fn missing(&self) -> Option<&ArtifactMissing> {
        match self {
            Self::Present { .. } => None,
            Self::Absent(missing) => Some(missing),
        }
    }
}

/// Reads `dir/file_name` in full. Invalid UTF-8 is replaced, not rejected;
/// the content is otherwise left untouched.
#[must_use]
pub fn load_artifact(dir: &Path, file_name: &str) -> Fragment {
    let path = dir.join(file_name);
    match fs::read(&path) {
        Ok(bytes) => {
            let html = String::from_utf8_lossy(&bytes).into_owned();
            tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded artifact");
            Fragment::Present { file_name: file_name.to_owned(), html }
        },
        Err(err) => {
            let reason = if err.kind() == io::ErrorKind::NotFound {
                MissingReason::NotFound
            } else {
                MissingReason::Unreadable(err.to_string())
            };
            Fragment::Absent(ArtifactMissing { file_name: file_name.to_owned(), reason })
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn present_artifact_is_verbatim() {
        let dir = TempDir::new().unwrap();
        let body = "<div id=\"plot\">\u{1f30d}</div>\n<script>plot()</script>";
        fs::write(dir.path().join("geo.html"), body).unwrap();

        match load_artifact(dir.path(), "geo.html") {
            Fragment::Present { file_name, html } => {
                assert_eq!(file_name, "geo.html");
                assert_eq!(html, body);
            },
            Fragment::Absent(m) => panic!("unexpected missing artifact: {m}"),
        }
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bad.html"), b"ok \xff end").unwrap();

        let Fragment::Present { html, .. } = load_artifact(dir.path(), "bad.html") else {
            panic!("expected present artifact");
        };
        assert_eq!(html, "ok \u{fffd} end");
    }

    #[test]
    fn missing_artifact_names_the_file() {
        let dir = TempDir::new().unwrap();
        let fragment = load_artifact(dir.path(), "nobel_prize_geo.html");

        let missing = fragment.missing().unwrap();
        assert_eq!(missing.reason, MissingReason::NotFound);
        assert_eq!(
            missing.message(),
            "nobel_prize_geo.html not found. Please place the file in the same directory."
        );
    }

    #[test]
    fn directory_in_place_of_file_is_unreadable() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("anim.html")).unwrap();

        let fragment = load_artifact(dir.path(), "anim.html");
        let missing = fragment.missing().unwrap();
        assert!(matches!(missing.reason, MissingReason::Unreadable(_)));
        assert!(missing.message().starts_with("anim.html could not be read"));
    }
}
