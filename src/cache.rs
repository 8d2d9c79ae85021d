use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Post, Result, CACHE_FILE, EDITIONS_DIR};

/// On-disk shape of `posts.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedResult {
    pub posts: Vec<Post>,
}

/// An edition counts as done only if its cache parses and holds at least one post.
/// Anything else, corrupt files included, gets fetched again and overwritten.
pub fn is_complete(content: &str) -> bool {
    serde_json::from_str::<CachedResult>(content).is_ok_and(|cached| !cached.posts.is_empty())
}

/// Per-edition result files under `<root>/news/editions`.
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            dir: root.as_ref().join(EDITIONS_DIR),
        }
    }

    pub fn path_for(&self, edition: u64) -> PathBuf {
        self.dir.join(edition.to_string()).join(CACHE_FILE)
    }

    pub async fn is_done(&self, edition: u64) -> bool {
        match tokio::fs::read_to_string(self.path_for(edition)).await {
            Ok(content) => is_complete(&content),
            Err(_) => false,
        }
    }

    /// Writes the posts as pretty JSON, replacing whatever was there.
    pub async fn write(&self, edition: u64, posts: &[Post]) -> Result<PathBuf> {
        let path = self.path_for(edition);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let cached = CachedResult {
            posts: posts.to_vec(),
        };
        tokio::fs::write(&path, serde_json::to_string_pretty(&cached)?).await?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completeness() {
        assert!(is_complete(r#"{"posts":[{"pid":1,"uid":2}]}"#));
        assert!(!is_complete(r#"{"posts":[]}"#));
        assert!(!is_complete(r#"{"other":[1]}"#));
        assert!(!is_complete(r#"{"posts":{}}"#));
        assert!(!is_complete("{\"posts\":[{\"pid\":1"));
        assert!(!is_complete(""));
    }

    #[test]
    fn path_layout() {
        let store = CacheStore::new("base");
        assert_eq!(
            store.path_for(14),
            Path::new("base/news/editions/14/posts.json")
        );
    }
}
