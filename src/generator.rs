//! Generator orchestration.
//!
//! A [`Generator`] runs one linear pass for its artifact kind:
//! collecting (config file or prompts) -> enriching -> rendering -> done. Any
//! error aborts the pass; no stage is revisited and nothing is retried.

use crate::config::read_config;
use crate::enricher::{expand_user, CommonEnricher};
use crate::error::Result;
use crate::identity::IdentityProvider;
use crate::params::ParameterSet;
use crate::prompt::{prompt_fields, Prompter};
use crate::renderer::{check_overwrite, render_targets, write_files, TemplateRenderer};
use crate::resolver::resolve;
use crate::schema::ArtifactKind;
use crate::templates::TemplateSource;
use log::debug;
use std::path::{Path, PathBuf};

/// Where the generator takes its parameters from.
#[derive(Debug, Clone)]
pub enum ParamSource {
    /// INI-style config file with `[common]` and a kind section.
    Config(PathBuf),
    /// Ask the user, one field at a time.
    Interactive,
}

/// Settings injected into every generator.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// Embedded templates, or a directory overriding them.
    pub templates: TemplateSource,
    /// Overwrite a populated output directory without asking.
    pub force: bool,
    /// Fixed year instead of the current one.
    pub year: Option<i64>,
}

impl GeneratorOptions {
    /// Options rendering the embedded templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads templates from `dir` instead of the embedded ones.
    pub fn templates_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.templates = TemplateSource::Directory(dir.into());
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn year(mut self, year: i64) -> Self {
        self.year = Some(year);
        self
    }
}

/// Outcome of a successful generation.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub kind: ArtifactKind,
    pub name: String,
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

pub struct Generator<'a> {
    kind: ArtifactKind,
    options: GeneratorOptions,
    renderer: &'a dyn TemplateRenderer,
    prompter: &'a dyn Prompter,
    identity: &'a dyn IdentityProvider,
}

impl<'a> Generator<'a> {
    pub fn new(
        kind: ArtifactKind,
        options: GeneratorOptions,
        renderer: &'a dyn TemplateRenderer,
        prompter: &'a dyn Prompter,
        identity: &'a dyn IdentityProvider,
    ) -> Self {
        Self { kind, options, renderer, prompter, identity }
    }

    /// Resolves the parameters of this kind from `source`, without enriching them.
    pub fn collect(&self, source: &ParamSource) -> Result<ParameterSet> {
        let raw = match source {
            ParamSource::Config(path) => read_config(path, self.kind.section())?,
            ParamSource::Interactive => {
                prompt_fields(self.kind.fields(), self.prompter, self.identity)?
            }
        };
        resolve(self.kind.fields(), &raw)
    }

    /// Adds common metadata and derived fields to `params`.
    pub fn enrich(&self, params: ParameterSet) -> Result<ParameterSet> {
        let enricher = CommonEnricher::new(self.identity);
        let enricher = match self.options.year {
            Some(year) => enricher.with_year(year),
            None => enricher,
        };
        enricher.enrich(self.kind, params)
    }

    /// Output directory for `params`: the explicit one, or the kind's default location.
    pub fn output_dir(&self, params: &ParameterSet, output_dir: Option<&Path>) -> PathBuf {
        match output_dir {
            Some(dir) => expand_user(dir),
            None => self
                .kind
                .default_output_dir(Path::new(params.get_str("riotbase")), params.get_str("name")),
        }
    }

    /// Renders all templates of this kind into the output directory.
    ///
    /// Everything is rendered before the overwrite check, and nothing is written
    /// unless every template rendered and the check passed.
    pub fn render(&self, params: &ParameterSet, output_dir: &Path) -> Result<Vec<PathBuf>> {
        let files = render_targets(
            self.renderer,
            &self.options.templates,
            self.kind,
            self.kind.targets(),
            params,
        )?;
        check_overwrite(output_dir, self.options.force, self.prompter)?;
        write_files(output_dir, &files)
    }

    /// Runs the whole pipeline.
    ///
    /// # Arguments
    /// * `source` - Config file or interactive input
    /// * `output_dir` - Target directory; defaults to the kind's location in the RIOT tree
    ///
    /// # Errors
    /// * `Error::ConfigFormatError` / `Error::ConfigSectionMissing` for bad config files
    /// * `Error::MissingRequiredField` if a required parameter is missing
    /// * `Error::InvalidProjectRoot` if `riotbase` is not a RIOT base directory
    /// * `Error::TemplateParameterError` if a template needs an unknown parameter
    /// * `Error::OutputExists` if overwriting the output directory was declined
    pub fn run(&self, source: ParamSource, output_dir: Option<&Path>) -> Result<GenerationReport> {
        debug!("[{}] collecting parameters from {:?}", self.kind.section(), source);
        let params = self.collect(&source)?;

        debug!("[{}] enriching parameters", self.kind.section());
        let params = self.enrich(params)?;

        let output_dir = self.output_dir(&params, output_dir);
        debug!("[{}] rendering into {}", self.kind.section(), output_dir.display());
        let files = self.render(&params, &output_dir)?;

        debug!("[{}] done, {} files written", self.kind.section(), files.len());
        Ok(GenerationReport {
            kind: self.kind,
            name: params.get_str("name").to_string(),
            output_dir,
            files,
        })
    }
}
