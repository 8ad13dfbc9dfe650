//! Common project metadata and per-kind derived fields.
//!
//! The enricher extends a resolved [`ParameterSet`] with the fields every template
//! may rely on: year, author, organization and the validated RIOT base directory.
//! It then derives the fields templates cannot compute themselves, such as the
//! documentation underline or the Makefile dependency lines.

use crate::constants::{RIOTBASE_MARKER_BANNER, RIOTBASE_MARKER_FILE};
use crate::error::{Error, Result};
use crate::identity::IdentityProvider;
use crate::params::ParameterSet;
use crate::schema::ArtifactKind;
use chrono::Datelike;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub fn current_year() -> i64 {
    i64::from(chrono::Local::now().year())
}

/// Expands a leading `~` to the home directory.
pub fn expand_user<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

fn first_line(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let mut line = String::new();
    BufReader::new(file).read_line(&mut line).ok()?;
    Some(line.trim_end_matches(['\n', '\r']).to_string())
}

/// Checks that `path` is the base directory of a RIOT source tree.
///
/// An empty path means the current directory.
///
/// # Returns
/// * `Result<PathBuf>` - The expanded, absolute base directory
///
/// # Errors
/// * `Error::InvalidProjectRoot` if the marker file is missing or its first line
///   is not the expected banner
pub fn check_riotbase<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let given = path.as_ref();
    let invalid = || Error::InvalidProjectRoot { path: given.display().to_string() };

    let expanded = if given.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        expand_user(given)
    };
    let riotbase = std::path::absolute(&expanded).map_err(|_| invalid())?;

    let marker = riotbase.join(RIOTBASE_MARKER_FILE);
    if !marker.is_file() {
        debug!("{} not found", marker.display());
        return Err(invalid());
    }
    match first_line(&marker) {
        Some(line) if line == RIOTBASE_MARKER_BANNER => Ok(riotbase),
        other => {
            debug!("Unexpected first line in {}: {:?}", marker.display(), other);
            Err(invalid())
        }
    }
}

/// Builds one `<prefix> += <item>` line per item.
fn directives(prefix: &str, items: &[String]) -> String {
    items.iter().map(|item| format!("{prefix} += {item}\n")).collect()
}

/// Builds the Makefile dependency block from the `modules`, `packages` and
/// `features` lists, in that order.
pub fn build_includes(params: &ParameterSet) -> String {
    let mut includes = directives("USEMODULE", params.get_list("modules"));
    includes.push_str(&directives("USEPKG", params.get_list("packages")));
    includes.push_str(&directives("FEATURES_REQUIRED", params.get_list("features")));
    includes
}

/// Derives the per-kind fields from the resolved parameters.
///
/// Spaces in `name` become underscores; `name_underline` and `name_upper` follow
/// the normalized name.
pub fn normalize(kind: ArtifactKind, params: &mut ParameterSet) {
    let name = params.get_str("name").replace(' ', "_");
    params.insert("name_underline", "=".repeat(name.chars().count()));
    params.insert("name_upper", name.to_uppercase().replace('-', "_"));
    params.insert("name", name);

    match kind {
        ArtifactKind::Application | ArtifactKind::Pkg | ArtifactKind::Test => {
            let includes = build_includes(params);
            params.insert("includes", includes);
        }
        ArtifactKind::Board => {
            let provided = directives("FEATURES_PROVIDED", params.get_list("features"));
            params.insert("features_provided", provided);
        }
        ArtifactKind::Driver => {
            let bus = params.get_str("bus").trim().to_string();
            let includes = if bus.is_empty() {
                String::new()
            } else {
                format!("FEATURES_REQUIRED += periph_{bus}\n")
            };
            params.insert("includes", includes);
        }
    }
}

/// Fills the common project metadata.
pub struct CommonEnricher<'a> {
    identity: &'a dyn IdentityProvider,
    year: i64,
}

impl<'a> CommonEnricher<'a> {
    pub fn new(identity: &'a dyn IdentityProvider) -> Self {
        Self { identity, year: current_year() }
    }

    /// Uses `year` instead of the current calendar year.
    pub fn with_year(mut self, year: i64) -> Self {
        self.year = year;
        self
    }

    /// Extends `params` with the common fields and the fields derived for `kind`.
    ///
    /// Present values are never replaced, so enriching twice is a no-op.
    ///
    /// # Errors
    /// * `Error::InvalidProjectRoot` if `riotbase` is not a RIOT base directory
    pub fn enrich(&self, kind: ArtifactKind, mut params: ParameterSet) -> Result<ParameterSet> {
        params.insert_default("year", self.year);
        if !params.contains("author_name") || !params.contains("organization") {
            let name = self.identity.name();
            params.insert_default("author_name", name.clone());
            params.insert_default("organization", name);
        }
        if !params.contains("author_email") {
            params.insert_default("author_email", self.identity.email());
        }
        params.insert_default("riotbase", "");

        let riotbase = check_riotbase(params.get_str("riotbase"))?;
        debug!("Using RIOT base directory {}", riotbase.display());
        params.insert("riotbase", riotbase.display().to_string());

        normalize(kind, &mut params);
        Ok(params)
    }
}
