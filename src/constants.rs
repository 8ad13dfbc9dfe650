//! Common constants used throughout riotgen.

/// Config section merged under every artifact-specific section.
pub const COMMON_SECTION: &str = "common";

/// File that marks the root of a RIOT source tree.
pub const RIOTBASE_MARKER_FILE: &str = "CODE_OF_CONDUCT.md";

/// Exact first line expected in [`RIOTBASE_MARKER_FILE`].
pub const RIOTBASE_MARKER_BANNER: &str = "RIOT-OS Code of Conduct";

/// Environment variable overriding the templates directory.
pub const TEMPLATES_DIR_ENV: &str = "RIOTGEN_TEMPLATES_DIR";

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "RIOTGEN_LOG";
