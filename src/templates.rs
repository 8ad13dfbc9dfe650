//! Template sources.
//!
//! The templates under `templates/` are compiled into the binary and used unless a
//! templates directory is given on the command line or through
//! `RIOTGEN_TEMPLATES_DIR`.

use crate::error::{Error, Result};
use crate::schema::ArtifactKind;
use log::debug;
use std::fs;
use std::path::PathBuf;

/// Templates shipped with riotgen, keyed by kind section and template path.
static EMBEDDED_TEMPLATES: &[(&str, &str, &str)] = &[
    // Application
    ("application", "main.c", include_str!("../templates/application/main.c")),
    ("application", "Makefile", include_str!("../templates/application/Makefile")),
    ("application", "README.md", include_str!("../templates/application/README.md")),
    // Package
    ("pkg", "doc.txt", include_str!("../templates/pkg/doc.txt")),
    ("pkg", "Makefile", include_str!("../templates/pkg/Makefile")),
    ("pkg", "Makefile.dep", include_str!("../templates/pkg/Makefile.dep")),
    ("pkg", "Makefile.include", include_str!("../templates/pkg/Makefile.include")),
    ("pkg", "pkg.mk", include_str!("../templates/pkg/pkg.mk")),
    // Board
    ("board", "Makefile", include_str!("../templates/board/Makefile")),
    ("board", "Makefile.dep", include_str!("../templates/board/Makefile.dep")),
    ("board", "Makefile.features", include_str!("../templates/board/Makefile.features")),
    ("board", "Makefile.include", include_str!("../templates/board/Makefile.include")),
    ("board", "board.c", include_str!("../templates/board/board.c")),
    ("board", "doc.txt", include_str!("../templates/board/doc.txt")),
    ("board", "include/board.h", include_str!("../templates/board/include/board.h")),
    (
        "board",
        "include/periph_conf.h",
        include_str!("../templates/board/include/periph_conf.h"),
    ),
    // Driver
    ("driver", "Makefile", include_str!("../templates/driver/Makefile")),
    ("driver", "Makefile.dep", include_str!("../templates/driver/Makefile.dep")),
    ("driver", "driver.c", include_str!("../templates/driver/driver.c")),
    ("driver", "doc.txt", include_str!("../templates/driver/doc.txt")),
    ("driver", "include/driver.h", include_str!("../templates/driver/include/driver.h")),
    (
        "driver",
        "include/driver_params.h",
        include_str!("../templates/driver/include/driver_params.h"),
    ),
    (
        "driver",
        "include/driver_constants.h",
        include_str!("../templates/driver/include/driver_constants.h"),
    ),
    // Test
    ("test", "main.c", include_str!("../templates/test/main.c")),
    ("test", "Makefile", include_str!("../templates/test/Makefile")),
    ("test", "README.md", include_str!("../templates/test/README.md")),
    ("test", "tests/01-run.py", include_str!("../templates/test/tests/01-run.py")),
];

/// Where template text is loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// Templates compiled into the binary.
    #[default]
    Embedded,
    /// Directory holding one subdirectory per artifact kind.
    Directory(PathBuf),
}

impl TemplateSource {
    /// Loads the text of `template` for `kind`.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if the template does not exist
    pub fn load(&self, kind: ArtifactKind, template: &str) -> Result<String> {
        match self {
            TemplateSource::Embedded => EMBEDDED_TEMPLATES
                .iter()
                .find(|(section, name, _)| *section == kind.section() && *name == template)
                .map(|(_, _, content)| content.to_string())
                .ok_or_else(|| Error::TemplateNotFound {
                    path: format!("<embedded>/{}/{}", kind.section(), template),
                }),
            TemplateSource::Directory(dir) => {
                let path = dir.join(kind.section()).join(template);
                if !path.is_file() {
                    return Err(Error::TemplateNotFound { path: path.display().to_string() });
                }
                debug!("Loading template {}", path.display());
                Ok(fs::read_to_string(&path)?)
            }
        }
    }
}
