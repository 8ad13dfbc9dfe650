//! riotgen's application entry point.
//! Parses the command line, builds the generator for the requested artifact kind
//! and reports the result.

use riotgen::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    generator::{Generator, GeneratorOptions},
    identity::GitIdentity,
    logger::init_logger,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let renderer = MiniJinjaRenderer::new();
    let prompter = DialoguerPrompter::new();
    let identity = GitIdentity::new();

    let kind = args.command.kind();
    let generate = args.command.args();
    let mut options = GeneratorOptions::new().force(generate.force);
    if let Some(dir) = &args.templates_dir {
        options = options.templates_dir(dir.clone());
    }

    let generator = Generator::new(kind, options, &renderer, &prompter, &identity);
    let report = generator.run(generate.source(), generate.output_dir.as_deref())?;

    for file in &report.files {
        log::info!("Generated: '{}'", file.display());
    }
    println!(
        "{} '{}' generated in {} with success!",
        report.kind,
        report.name,
        report.output_dir.display()
    );
    Ok(())
}
