//! Lookup of the user's configured name and email, used as defaults for the author
//! and organization fields.

use log::debug;
use std::path::PathBuf;

/// Source of the user's identity.
///
/// Implementations must never fail: an unavailable source yields empty strings.
pub trait IdentityProvider {
    fn name(&self) -> String;
    fn email(&self) -> String;
}

/// Reads `user.name` and `user.email` from git configuration.
///
/// Inside a repository its local `.git/config` takes precedence over the global,
/// XDG and system files, as with `git config --get`.
#[derive(Debug, Default)]
pub struct GitIdentity {
    /// Directory to look for a repository from; the environment (`GIT_DIR`, the
    /// current directory) when unset.
    workdir: Option<PathBuf>,
}

impl GitIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    fn config(&self) -> Result<git2::Config, git2::Error> {
        let repo = match &self.workdir {
            Some(dir) => git2::Repository::discover(dir),
            None => git2::Repository::open_from_env(),
        };
        match repo {
            Ok(repo) => repo.config(),
            Err(e) => {
                debug!("No git repository found, using default config: {}", e.message());
                git2::Config::open_default()
            }
        }
    }

    fn get(&self, key: &str) -> String {
        match self.config().and_then(|config| config.get_string(key)) {
            Ok(value) => value,
            Err(e) => {
                debug!("git config '{}' unavailable: {}", key, e.message());
                String::new()
            }
        }
    }
}

impl IdentityProvider for GitIdentity {
    fn name(&self) -> String {
        self.get("user.name")
    }

    fn email(&self) -> String {
        self.get("user.email")
    }
}

/// Fixed identity, for tests and for callers that already know who the author is.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    pub name: String,
    pub email: String,
}

impl StaticIdentity {
    pub fn new<N: Into<String>, E: Into<String>>(name: N, email: E) -> Self {
        Self { name: name.into(), email: email.into() }
    }
}

impl IdentityProvider for StaticIdentity {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn email(&self) -> String {
        self.email.clone()
    }
}
