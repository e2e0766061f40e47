use crate::error::Result;
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// Lists tags from a local repository through `git2`
pub struct Git2TagSource {
    repo: Git2Repo,
}

impl Git2TagSource {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2TagSource { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2TagSource { repo }
    }
}

impl super::TagSource for Git2TagSource {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }
}

/// Opens the repository only when tags are first requested, so an explicit
/// tag name works outside a repository.
#[derive(Debug, Clone)]
pub struct LazyGit2TagSource {
    path: PathBuf,
}

impl LazyGit2TagSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LazyGit2TagSource { path: path.into() }
    }
}

impl super::TagSource for LazyGit2TagSource {
    fn list_tags(&self) -> Result<Vec<String>> {
        super::TagSource::list_tags(&Git2TagSource::open(&self.path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::TagSource;

    fn commit_and_tag(repo: &Git2Repo, tags: &[&str]) {
        let sig = git2::Signature::now("Test", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let oid = repo
            .commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
            .unwrap();
        let object = repo.find_object(oid, None).unwrap();
        for tag in tags {
            repo.tag_lightweight(tag, &object, false).unwrap();
        }
    }

    #[test]
    fn test_list_tags() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        commit_and_tag(&repo, &["v1.0.0", "v1.1.0-beta.0"]);

        let source = Git2TagSource::from_git2(repo);
        let mut tags = source.list_tags().unwrap();
        tags.sort();
        assert_eq!(tags, vec!["v1.0.0", "v1.1.0-beta.0"]);
    }

    #[test]
    fn test_list_tags_empty_repository() {
        let dir = tempfile::tempdir().unwrap();
        Git2Repo::init(dir.path()).unwrap();

        let source = Git2TagSource::open(dir.path()).unwrap();
        assert!(source.list_tags().unwrap().is_empty());
    }

    #[test]
    fn test_lazy_source_lists_tags() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        commit_and_tag(&repo, &["v3"]);

        let source = LazyGit2TagSource::new(dir.path());
        assert_eq!(source.list_tags().unwrap(), vec!["v3"]);
    }

    #[test]
    fn test_lazy_source_fails_only_when_listing() {
        let dir = tempfile::tempdir().unwrap();
        let source = LazyGit2TagSource::new(dir.path().join("missing"));
        assert!(matches!(
            source.list_tags(),
            Err(crate::error::ReleaseError::Git(_))
        ));
    }
}
