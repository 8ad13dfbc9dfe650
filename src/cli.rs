//! Command-line interface implementation for riotgen.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::TEMPLATES_DIR_ENV;
use crate::generator::ParamSource;
use crate::schema::ArtifactKind;
use clap::{error::ErrorKind, Args as ClapArgs, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for riotgen.
#[derive(Parser, Debug)]
#[command(author, version, about = "riotgen: generator for RIOT source trees", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory overriding the built-in templates, one subdirectory per generator
    #[arg(long, global = true, env = TEMPLATES_DIR_ENV, value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bootstrap a RIOT application
    Application(GenerateArgs),
    /// Bootstrap a RIOT external package
    Pkg(GenerateArgs),
    /// Bootstrap a RIOT board support
    Board(GenerateArgs),
    /// Bootstrap a RIOT driver module
    Driver(GenerateArgs),
    /// Bootstrap a RIOT test application
    Test(GenerateArgs),
}

/// Options shared by every generator subcommand.
#[derive(ClapArgs, Debug)]
pub struct GenerateArgs {
    /// Directory where the files are generated.
    /// Defaults to the current directory for applications and to the matching
    /// directory of the RIOT tree otherwise
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Read parameters from this config file instead of prompting
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Overwrite an existing output directory without asking
    #[arg(short, long)]
    pub force: bool,
}

impl GenerateArgs {
    pub fn source(&self) -> ParamSource {
        match &self.config {
            Some(path) => ParamSource::Config(path.clone()),
            None => ParamSource::Interactive,
        }
    }
}

impl Command {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            Command::Application(_) => ArtifactKind::Application,
            Command::Pkg(_) => ArtifactKind::Pkg,
            Command::Board(_) => ArtifactKind::Board,
            Command::Driver(_) => ArtifactKind::Driver,
            Command::Test(_) => ArtifactKind::Test,
        }
    }

    pub fn args(&self) -> &GenerateArgs {
        match self {
            Command::Application(args)
            | Command::Pkg(args)
            | Command::Board(args)
            | Command::Driver(args)
            | Command::Test(args) => args,
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if no subcommand is given
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::MissingSubcommand
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                let _ = Args::command().print_help();
                std::process::exit(1);
            }
            _ => e.exit(),
        },
    }
}
