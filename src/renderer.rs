//! Template rendering and output writing for riotgen.
//! Every target of an invocation is rendered in memory first, so a failing template
//! never leaves partial output behind.

use crate::error::{Error, Result};
use crate::params::ParameterSet;
use crate::prompt::Prompter;
use crate::schema::{ArtifactKind, TemplateTarget};
use crate::templates::TemplateSource;
use log::debug;
use minijinja::{Environment, UndefinedBehavior};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders `template` with the given context.
    ///
    /// # Arguments
    /// * `name` - Template name, used in error messages
    /// * `template` - Template text to render
    /// * `context` - Parameters for substitution
    ///
    /// # Errors
    /// * `Error::TemplateParameterError` if the template uses a parameter the context lacks
    fn render(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based renderer that rejects undefined parameters.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template_owned(name.to_string(), template.to_string())?;
        let tmpl = env.get_template(name)?;

        let mut undeclared: Vec<String> = tmpl.undeclared_variables(false).into_iter().collect();
        undeclared.sort();
        if let Some(key) = undeclared.into_iter().find(|key| context.get(key).is_none()) {
            return Err(Error::TemplateParameterError { template: name.to_string(), key });
        }

        Ok(tmpl.render(context)?)
    }
}

/// A fully rendered output file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Renders every target of `targets`, loading the templates of `kind` from `source`.
///
/// Output paths are rendered with the same parameters as the file contents and must
/// stay below the output directory.
///
/// # Errors
/// * `Error::TemplateNotFound` if a template is missing
/// * `Error::TemplateParameterError` if a template needs an unresolved parameter
/// * `Error::TemplateError` if an output path is empty, absolute or contains `..`
pub fn render_targets(
    renderer: &dyn TemplateRenderer,
    source: &TemplateSource,
    kind: ArtifactKind,
    targets: &[TemplateTarget],
    params: &ParameterSet,
) -> Result<Vec<RenderedFile>> {
    let context = params.to_context();
    let mut rendered = Vec::with_capacity(targets.len());

    for target in targets {
        debug!("Rendering template {}/{}", kind.section(), target.template);
        let template = source.load(kind, target.template)?;
        let content = renderer.render(target.template, &template, &context)?;
        let path = renderer.render(target.output, target.output, &context)?;
        if !is_relative_below(Path::new(&path)) {
            return Err(Error::TemplateError(format!(
                "invalid output path '{}' for template '{}'",
                path, target.template
            )));
        }

        rendered.push(RenderedFile { path: PathBuf::from(path), content });
    }

    Ok(rendered)
}

fn is_relative_below(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path.components().all(|component| matches!(component, Component::Normal(_)))
}

fn is_populated(dir: &Path) -> Result<bool> {
    if !dir.is_dir() {
        return Ok(dir.exists());
    }
    Ok(fs::read_dir(dir)?.next().is_some())
}

/// Asks before writing into an existing, non-empty output directory.
///
/// # Errors
/// * `Error::OutputExists` if the user declines
pub fn check_overwrite(output_dir: &Path, force: bool, prompter: &dyn Prompter) -> Result<()> {
    if force || !is_populated(output_dir)? {
        return Ok(());
    }

    let question = format!("'{}' already exists, overwrite?", output_dir.display());
    if prompter.confirm(&question, false)? {
        debug!("Overwriting {}", output_dir.display());
        Ok(())
    } else {
        Err(Error::OutputExists { path: output_dir.display().to_string() })
    }
}

/// Checks that every file of `files` can be created below `output_dir`.
///
/// Fails if a target is an existing directory or if one of its parents is an
/// existing non-directory.
fn check_writable(output_dir: &Path, files: &[RenderedFile]) -> Result<()> {
    for file in files {
        let target = output_dir.join(&file.path);
        if target.is_dir() {
            return Err(Error::IoError(io::Error::other(format!(
                "'{}' is a directory",
                target.display()
            ))));
        }
        if let Some(blocker) = target
            .ancestors()
            .skip(1)
            .find(|ancestor| ancestor.exists() && !ancestor.is_dir())
        {
            return Err(Error::IoError(io::Error::other(format!(
                "'{}' is not a directory",
                blocker.display()
            ))));
        }
    }
    Ok(())
}

/// Writes `files` below `output_dir`, creating missing directories.
///
/// Every target path is checked before the first file is written. An I/O failure
/// during the writes themselves (a full disk for instance) can still leave the
/// files written before it in place.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Paths of the written files
pub fn write_files(output_dir: &Path, files: &[RenderedFile]) -> Result<Vec<PathBuf>> {
    check_writable(output_dir, files)?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let target = output_dir.join(&file.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        debug!("Writing file {}", target.display());
        fs::write(&target, &file.content)?;
        written.push(target);
    }
    Ok(written)
}
