//! Audit log — an append-only, human-readable trail of every generation.
//!
//! One directory per generation kind, one file per model name. Entries are
//! never mutated or deleted, and nothing in this crate reads them back.
//! Concurrent appends to the same file may interleave lines; callers that
//! care must serialize externally.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::errors::GenerationError;

const DIVIDER: &str = "----------------------------------------";

/// Which audit directory an entry lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    Text,
    Code,
}

impl GenerationKind {
    pub fn dir_name(self) -> &'static str {
        match self {
            GenerationKind::Text => "generated_text",
            GenerationKind::Code => "generated_code",
        }
    }
}

/// Append-only audit sink rooted at a configurable directory.
#[derive(Debug, Clone)]
pub struct AuditLog {
    root: PathBuf,
}

impl AuditLog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the log file an entry of `kind` for `model` would go to.
    pub fn file_path(&self, kind: GenerationKind, model: &str) -> PathBuf {
        self.root.join(kind.dir_name()).join(format!("{model}.log"))
    }

    /// Appends a timestamped {prompt, output} block for `model`, creating
    /// the kind directory if absent. Write failures propagate to the
    /// caller: the audit trail is a success condition, not best-effort.
    pub async fn append(
        &self,
        kind: GenerationKind,
        model: &str,
        prompt: &str,
        output: &str,
    ) -> Result<(), GenerationError> {
        let dir = self.root.join(kind.dir_name());
        tokio::fs::create_dir_all(&dir).await?;

        let path = dir.join(format!("{model}.log"));
        let entry = format!(
            "{DIVIDER}\n[{timestamp}]\nPROMPT:\n{prompt}\n\nOUTPUT:\n{output}\n",
            timestamp = Utc::now().to_rfc3339(),
        );

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        file.write_all(entry.as_bytes()).await?;

        debug!(path = %path.display(), "Appended audit entry");
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_append_creates_directory_and_file() {
        let tmp = tempfile::tempdir().unwrap();
        let audit = AuditLog::new(tmp.path());

        audit
            .append(GenerationKind::Text, "test-model", "a prompt", "an output")
            .await
            .unwrap();

        let path = audit.file_path(GenerationKind::Text, "test-model");
        assert!(path.starts_with(tmp.path().join("generated_text")));
        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(contents.contains("a prompt"));
        assert!(contents.contains("an output"));
        assert!(contents.contains(DIVIDER));
    }

    #[tokio::test]
    async fn test_append_twice_keeps_both_entries() {
        let tmp = tempfile::tempdir().unwrap();
        let audit = AuditLog::new(tmp.path());

        audit
            .append(GenerationKind::Code, "m", "p1", "o1")
            .await
            .unwrap();
        audit
            .append(GenerationKind::Code, "m", "p2", "o2")
            .await
            .unwrap();

        let contents =
            tokio::fs::read_to_string(audit.file_path(GenerationKind::Code, "m"))
                .await
                .unwrap();
        assert!(contents.contains("o1"));
        assert!(contents.contains("o2"));
        assert_eq!(contents.matches(DIVIDER).count(), 2);
    }

    #[tokio::test]
    async fn test_kinds_use_separate_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let audit = AuditLog::new(tmp.path());

        audit
            .append(GenerationKind::Text, "m", "p", "o")
            .await
            .unwrap();
        audit
            .append(GenerationKind::Code, "m", "p", "o")
            .await
            .unwrap();

        assert!(audit.file_path(GenerationKind::Text, "m").exists());
        assert!(audit.file_path(GenerationKind::Code, "m").exists());
    }
}
