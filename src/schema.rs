//! Parameter schemas and template targets of every artifact kind.

use std::fmt;
use std::path::{Path, PathBuf};

/// Static declaration of one parameter of an artifact kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Text shown when the field is prompted for.
    pub prompt: &'static str,
    pub required: bool,
    pub default: &'static str,
    /// Comma separated list field.
    pub list: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, prompt: &'static str) -> Self {
        Self { name, prompt, required: true, default: "", list: false }
    }

    pub const fn optional(name: &'static str, prompt: &'static str, default: &'static str) -> Self {
        Self { name, prompt, required: false, default, list: false }
    }

    pub const fn list(name: &'static str, prompt: &'static str) -> Self {
        Self { name, prompt, required: false, default: "", list: true }
    }
}

/// A template paired with the path it renders to, relative to the output directory.
///
/// The output path may contain placeholders, e.g. `{{ name }}.mk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateTarget {
    pub template: &'static str,
    pub output: &'static str,
}

impl TemplateTarget {
    pub const fn new(template: &'static str, output: &'static str) -> Self {
        Self { template, output }
    }

    /// Target whose output path equals its template path.
    pub const fn same(path: &'static str) -> Self {
        Self { template: path, output: path }
    }
}

const MODULES: FieldSpec = FieldSpec::list("modules", "Required modules (comma separated)");
const PACKAGES: FieldSpec = FieldSpec::list("packages", "Required packages (comma separated)");
const FEATURES: FieldSpec =
    FieldSpec::list("features", "Required board features (comma separated)");

const APPLICATION_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Application name (no space)"),
    FieldSpec::optional("brief", "Application brief description", ""),
    FieldSpec::optional("board", "Target board", "native"),
    MODULES,
    PACKAGES,
    FEATURES,
];

const PKG_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Package name (no space)"),
    FieldSpec::required(
        "displayed_name",
        "Package displayed name (for doxygen documentation)",
    ),
    FieldSpec::required("url", "Package source url"),
    FieldSpec::required("hash", "Package version hash"),
    FieldSpec::required("license", "Package license"),
    FieldSpec::optional("description", "Package short description", ""),
    MODULES,
    PACKAGES,
    FEATURES,
];

const BOARD_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Board name (no space)"),
    FieldSpec::required("displayed_name", "Board displayed name (for doxygen documentation)"),
    FieldSpec::required("cpu", "CPU name"),
    FieldSpec::required("cpu_model", "CPU model name"),
    FieldSpec::optional("description", "Board short description", ""),
    FieldSpec::list("features", "Provided board features (comma separated)"),
];

const DRIVER_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Driver name (no space)"),
    FieldSpec::required("displayed_name", "Driver displayed name (for doxygen documentation)"),
    FieldSpec::optional("description", "Driver short description", ""),
    FieldSpec::optional("type", "Driver type (sensor, actuator, display, ...)", "sensor"),
    FieldSpec::optional("bus", "Device bus (i2c, spi, uart, ...)", "i2c"),
];

const TEST_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Test name (no space)"),
    FieldSpec::optional("brief", "Test brief description", ""),
    FieldSpec::optional("board", "Target board", "native"),
    MODULES,
    PACKAGES,
    FEATURES,
];

/// Fields shared by every artifact kind, prompted after the kind specific ones.
///
/// Their defaults are computed at runtime by the enricher.
pub const COMMON_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("author_name", "Author name", ""),
    FieldSpec::optional("author_email", "Author email", ""),
    FieldSpec::optional("organization", "Organization", ""),
    FieldSpec::optional("riotbase", "RIOT base directory", ""),
];

const APPLICATION_TARGETS: &[TemplateTarget] = &[
    TemplateTarget::same("main.c"),
    TemplateTarget::same("Makefile"),
    TemplateTarget::same("README.md"),
];

const PKG_TARGETS: &[TemplateTarget] = &[
    TemplateTarget::same("doc.txt"),
    TemplateTarget::same("Makefile"),
    TemplateTarget::same("Makefile.dep"),
    TemplateTarget::same("Makefile.include"),
    TemplateTarget::new("pkg.mk", "{{ name }}.mk"),
];

const BOARD_TARGETS: &[TemplateTarget] = &[
    TemplateTarget::same("Makefile"),
    TemplateTarget::same("Makefile.dep"),
    TemplateTarget::same("Makefile.features"),
    TemplateTarget::same("Makefile.include"),
    TemplateTarget::same("board.c"),
    TemplateTarget::same("doc.txt"),
    TemplateTarget::same("include/board.h"),
    TemplateTarget::same("include/periph_conf.h"),
];

const DRIVER_TARGETS: &[TemplateTarget] = &[
    TemplateTarget::same("Makefile"),
    TemplateTarget::same("Makefile.dep"),
    TemplateTarget::new("driver.c", "{{ name }}.c"),
    TemplateTarget::same("doc.txt"),
    TemplateTarget::new("include/driver.h", "include/{{ name }}.h"),
    TemplateTarget::new("include/driver_params.h", "include/{{ name }}_params.h"),
    TemplateTarget::new("include/driver_constants.h", "include/{{ name }}_constants.h"),
];

const TEST_TARGETS: &[TemplateTarget] = &[
    TemplateTarget::same("main.c"),
    TemplateTarget::same("Makefile"),
    TemplateTarget::same("README.md"),
    TemplateTarget::same("tests/01-run.py"),
];

/// Category of scaffold, each with its own schema and template set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Application,
    Pkg,
    Board,
    Driver,
    Test,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::Application,
        ArtifactKind::Pkg,
        ArtifactKind::Board,
        ArtifactKind::Driver,
        ArtifactKind::Test,
    ];

    /// Config file section and templates subdirectory of this kind.
    pub fn section(self) -> &'static str {
        match self {
            ArtifactKind::Application => "application",
            ArtifactKind::Pkg => "pkg",
            ArtifactKind::Board => "board",
            ArtifactKind::Driver => "driver",
            ArtifactKind::Test => "test",
        }
    }

    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            ArtifactKind::Application => APPLICATION_FIELDS,
            ArtifactKind::Pkg => PKG_FIELDS,
            ArtifactKind::Board => BOARD_FIELDS,
            ArtifactKind::Driver => DRIVER_FIELDS,
            ArtifactKind::Test => TEST_FIELDS,
        }
    }

    pub fn targets(self) -> &'static [TemplateTarget] {
        match self {
            ArtifactKind::Application => APPLICATION_TARGETS,
            ArtifactKind::Pkg => PKG_TARGETS,
            ArtifactKind::Board => BOARD_TARGETS,
            ArtifactKind::Driver => DRIVER_TARGETS,
            ArtifactKind::Test => TEST_TARGETS,
        }
    }

    /// Directory below the RIOT base directory holding artifacts of this kind.
    ///
    /// Applications have none: they are generated wherever the user asks.
    pub fn riotbase_subdir(self) -> Option<&'static str> {
        match self {
            ArtifactKind::Application => None,
            ArtifactKind::Pkg => Some("pkg"),
            ArtifactKind::Board => Some("boards"),
            ArtifactKind::Driver => Some("drivers"),
            ArtifactKind::Test => Some("tests"),
        }
    }

    /// Output directory used when none is given on the command line.
    pub fn default_output_dir(self, riotbase: &Path, name: &str) -> PathBuf {
        match self.riotbase_subdir() {
            Some(subdir) => riotbase.join(subdir).join(name),
            None => PathBuf::from("."),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ArtifactKind::Application => "Application",
            ArtifactKind::Pkg => "Package",
            ArtifactKind::Board => "Board",
            ArtifactKind::Driver => "Driver",
            ArtifactKind::Test => "Test",
        };
        write!(f, "{label}")
    }
}
