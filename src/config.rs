//! Configuration file handling for riotgen.
//! Parses the INI-style config files accepted by every generator's `--config` option
//! and merges the `common` section under the artifact-specific one.

use crate::constants::COMMON_SECTION;
use crate::error::{Error, Result};
use crate::params::RawParams;
use indexmap::IndexMap;
use log::debug;
use regex::Regex;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::LazyLock;

static SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(?P<name>[^\]]+)\]$").expect("valid section regex"));

static OPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<key>[^=:\s][^=:]*?)\s*[=:]\s*(?P<value>.*)$").expect("valid option regex")
});

/// Sections of a parsed config file, in file order.
#[derive(Debug, Default)]
pub struct ConfigDocument {
    sections: IndexMap<String, RawParams>,
}

impl ConfigDocument {
    /// Parses `content` as section/key-value text.
    ///
    /// # Arguments
    /// * `content` - Raw file content
    /// * `origin` - Name of the file, used in error messages
    ///
    /// # Errors
    /// * `Error::ConfigFormatError` naming the first offending line
    pub fn parse(content: &str, origin: &str) -> Result<Self> {
        let format_error = |line: usize, message: &str| Error::ConfigFormatError {
            path: origin.to_string(),
            line,
            message: message.to_string(),
        };

        let mut sections: IndexMap<String, RawParams> = IndexMap::new();
        let mut current_section: Option<String> = None;
        let mut current_key: Option<String> = None;

        for (idx, raw_line) in content.lines().enumerate() {
            let lineno = idx + 1;
            let line = raw_line.trim();

            if line.is_empty() {
                current_key = None;
                continue;
            }
            if line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            // Indented lines extend the previous value.
            if raw_line.starts_with(char::is_whitespace) {
                if let (Some(section), Some(key)) = (&current_section, &current_key) {
                    if let Some(value) =
                        sections.get_mut(section).and_then(|entries| entries.get_mut(key))
                    {
                        if !value.is_empty() {
                            value.push('\n');
                        }
                        value.push_str(line);
                        continue;
                    }
                }
            }

            if let Some(caps) = SECTION_RE.captures(line) {
                let name = caps["name"].trim().to_string();
                if sections.contains_key(&name) {
                    return Err(format_error(lineno, &format!("section '{name}' already exists")));
                }
                sections.insert(name.clone(), RawParams::new());
                current_section = Some(name);
                current_key = None;
                continue;
            }

            if let Some(caps) = OPTION_RE.captures(line) {
                let Some(section) = &current_section else {
                    return Err(format_error(lineno, "entry found before any section header"));
                };
                let key = caps["key"].trim().to_lowercase();
                let value = caps["value"].trim().to_string();
                let entries = sections.entry(section.clone()).or_default();
                if entries.contains_key(&key) {
                    return Err(format_error(
                        lineno,
                        &format!("option '{key}' already exists in section '{section}'"),
                    ));
                }
                entries.insert(key.clone(), value);
                current_key = Some(key);
                continue;
            }

            return Err(format_error(lineno, &format!("expected 'key = value', got '{line}'")));
        }

        Ok(Self { sections })
    }

    pub fn section(&self, name: &str) -> Option<&RawParams> {
        self.sections.get(name)
    }

    /// Returns the `common` entries overlaid with the entries of `section`.
    ///
    /// # Errors
    /// * `Error::ConfigSectionMissing` if either section is absent
    pub fn merged(&self, section: &str) -> Result<RawParams> {
        let common = self.section(COMMON_SECTION).ok_or_else(|| Error::ConfigSectionMissing {
            section: COMMON_SECTION.to_string(),
        })?;
        let specific = self
            .section(section)
            .ok_or_else(|| Error::ConfigSectionMissing { section: section.to_string() })?;

        let mut params = common.clone();
        for (key, value) in specific {
            params.insert(key.clone(), value.clone());
        }
        Ok(params)
    }
}

/// Parses config text and returns the merged parameters of `section`.
pub fn parse_config(content: &str, origin: &str, section: &str) -> Result<RawParams> {
    ConfigDocument::parse(content, origin)?.merged(section)
}

/// Reads a config file and returns the merged parameters of `section`.
///
/// # Arguments
/// * `path` - Path to the INI-style configuration file
/// * `section` - Artifact section to overlay on `[common]`
///
/// # Errors
/// * `Error::ConfigFormatError` if the file is missing, not UTF-8 text or malformed
/// * `Error::ConfigSectionMissing` if `[common]` or `[section]` is absent
pub fn read_config<P: AsRef<Path>>(path: P, section: &str) -> Result<RawParams> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::ConfigFormatError {
            path: path.display().to_string(),
            line: 0,
            message: "not a readable file".to_string(),
        });
    }

    debug!("Reading section '{}' from {}", section, path.display());
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::InvalidData => Error::ConfigFormatError {
            path: path.display().to_string(),
            line: 0,
            message: "not valid UTF-8".to_string(),
        },
        _ => Error::IoError(e),
    })?;
    parse_config(&content, &path.display().to_string(), section)
}
