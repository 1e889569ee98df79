use super::identifier::strip_version;

const GITHUB_HOST_PREFIX: &str = "github.com/";

/// Owner/repository pair of a module hosted on GitHub.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GitHubRepository {
    owner: String,
    repo: String,
}

impl GitHubRepository {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Derives the repository from a module identifier of the form
    /// `github.com/<owner>/<repo>[/subpath][@version]`.
    ///
    /// Returns `None` for modules hosted elsewhere or with an incomplete path.
    pub fn from_module_path(identifier: &str) -> Option<Self> {
        let path = strip_version(identifier).strip_prefix(GITHUB_HOST_PREFIX)?;

        let mut segments = path.split('/');
        let owner = segments.next().filter(|s| !s.is_empty())?;
        let repo = segments.next().filter(|s| !s.is_empty())?;

        Some(Self::new(owner, repo))
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl std::fmt::Display for GitHubRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
