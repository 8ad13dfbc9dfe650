mod common;

use common::{fake_riotbase, write_config, ScriptedPrompter, TEMPLATES_DIR};
use riotgen::error::Error;
use riotgen::generator::{Generator, GeneratorOptions, ParamSource};
use riotgen::identity::StaticIdentity;
use riotgen::renderer::MiniJinjaRenderer;
use riotgen::schema::ArtifactKind;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn identity() -> StaticIdentity {
    StaticIdentity::new("Jane Doe", "jane@example.com")
}

#[test_log::test]
fn test_application_from_config() {
    let riotbase = fake_riotbase();
    let output = TempDir::new().unwrap();
    let config = write_config(
        output.path(),
        &format!(
            "[common]\norganization = ACME\nyear = 2021\nriotbase = {}\n\n\
             [application]\nname = My App\nbrief = Hello app\nmodules = xtimer,shell\npackages = lwip\nfeatures = periph_gpio\n",
            riotbase.path().display()
        ),
    );
    let app_dir = output.path().join("app");

    let renderer = MiniJinjaRenderer::new();
    let prompter = ScriptedPrompter::silent();
    let identity = identity();
    let generator = Generator::new(
        ArtifactKind::Application,
        GeneratorOptions::new(),
        &renderer,
        &prompter,
        &identity,
    );
    let report = generator.run(ParamSource::Config(config), Some(&app_dir)).unwrap();

    assert_eq!(report.name, "My_App");
    assert_eq!(report.files.len(), 3);
    assert!(prompter.asked.borrow().is_empty());

    let makefile = fs::read_to_string(app_dir.join("Makefile")).unwrap();
    assert!(makefile.contains("APPLICATION = My_App\n"));
    assert!(makefile.contains("BOARD ?= native\n"));
    assert!(makefile.contains(
        "USEMODULE += xtimer\nUSEMODULE += shell\nUSEPKG += lwip\nFEATURES_REQUIRED += periph_gpio\n"
    ));

    let readme = fs::read_to_string(app_dir.join("README.md")).unwrap();
    assert!(readme.starts_with("My_App\n======\n"));

    let main = fs::read_to_string(app_dir.join("main.c")).unwrap();
    assert!(main.contains("Copyright (C) 2021 ACME"));
    assert!(main.contains("@author      Jane Doe <jane@example.com>"));
}

#[test_log::test]
fn test_pkg_defaults_to_riotbase() {
    let riotbase = fake_riotbase();
    let config = write_config(
        riotbase.path(),
        &format!(
            "[common]\nriotbase = {}\n\n[pkg]\nname = foo\ndisplayed_name = Foo\nurl = https://example.com/foo.git\nhash = 1234abcd\nlicense = MIT\n",
            riotbase.path().display()
        ),
    );

    let renderer = MiniJinjaRenderer::new();
    let prompter = ScriptedPrompter::silent();
    let identity = identity();
    let generator = Generator::new(
        ArtifactKind::Pkg,
        GeneratorOptions::new(),
        &renderer,
        &prompter,
        &identity,
    );
    let report = generator.run(ParamSource::Config(config), None).unwrap();

    let pkg_dir = riotbase.path().join("pkg").join("foo");
    assert_eq!(report.output_dir, pkg_dir);
    for file in ["doc.txt", "Makefile", "Makefile.dep", "Makefile.include", "foo.mk"] {
        assert!(pkg_dir.join(file).is_file(), "{file} missing");
    }
    let makefile = fs::read_to_string(pkg_dir.join("Makefile")).unwrap();
    assert!(makefile.contains("PKG_URL=https://example.com/foo.git\n"));
    assert!(makefile.contains("PKG_VERSION=1234abcd\n"));
}

#[test]
fn test_driver_output_paths_use_name() {
    let riotbase = fake_riotbase();
    let config = write_config(
        riotbase.path(),
        &format!(
            "[common]\nriotbase = {}\n[driver]\nname = bmx280\ndisplayed_name = BMX280\nbus = spi\n",
            riotbase.path().display()
        ),
    );

    let renderer = MiniJinjaRenderer::new();
    let prompter = ScriptedPrompter::silent();
    let identity = identity();
    let generator = Generator::new(
        ArtifactKind::Driver,
        GeneratorOptions::new(),
        &renderer,
        &prompter,
        &identity,
    );
    generator.run(ParamSource::Config(config), None).unwrap();

    let driver_dir = riotbase.path().join("drivers").join("bmx280");
    assert!(driver_dir.join("bmx280.c").is_file());
    assert!(driver_dir.join("include/bmx280_params.h").is_file());
    let header = fs::read_to_string(driver_dir.join("include/bmx280.h")).unwrap();
    assert!(header.contains("#ifndef BMX280_H"));
    assert!(header.contains("#include \"periph/spi.h\""));
    let dep = fs::read_to_string(driver_dir.join("Makefile.dep")).unwrap();
    assert!(dep.contains("FEATURES_REQUIRED += periph_spi"));
}

fn render_every_kind(riotbase: &Path, options: &GeneratorOptions) -> TempDir {
    let output = TempDir::new().unwrap();
    let config = write_config(
        output.path(),
        &format!(
            "[common]\nriotbase = {}\n\
             [application]\nname = app\n\
             [pkg]\nname = pkg\ndisplayed_name = Pkg\nurl = u\nhash = h\nlicense = l\n\
             [board]\nname = brd\ndisplayed_name = Board\ncpu = stm32\ncpu_model = stm32f401re\nfeatures = periph_uart\n\
             [driver]\nname = drv\ndisplayed_name = Drv\n\
             [test]\nname = tst\n",
            riotbase.display()
        ),
    );

    let renderer = MiniJinjaRenderer::new();
    let prompter = ScriptedPrompter::silent();
    let identity = identity();
    for kind in ArtifactKind::ALL {
        let out = output.path().join("out").join(kind.section());
        let generator = Generator::new(kind, options.clone(), &renderer, &prompter, &identity);
        let report = generator.run(ParamSource::Config(config.clone()), Some(&out)).unwrap();
        assert_eq!(report.files.len(), kind.targets().len(), "{kind}");
    }
    output
}

#[test]
fn test_every_kind_renders_builtin_templates() {
    let riotbase = fake_riotbase();
    let output = render_every_kind(riotbase.path(), &GeneratorOptions::new());
    let out = output.path().join("out");

    let features = fs::read_to_string(out.join("board/Makefile.features")).unwrap();
    assert!(features.contains("CPU_MODEL = stm32f401re\n"));
    assert!(features.contains("FEATURES_PROVIDED += periph_uart\n"));
    assert!(out.join("test/tests/01-run.py").is_file());
    assert!(out.join("pkg/pkg.mk").is_file());
}

#[test]
fn test_templates_dir_matches_builtin_templates() {
    let riotbase = fake_riotbase();
    let options = GeneratorOptions::new().year(2030);
    let builtin = render_every_kind(riotbase.path(), &options);
    let on_disk = render_every_kind(riotbase.path(), &options.clone().templates_dir(TEMPLATES_DIR));

    let (builtin, on_disk) = (builtin.path().join("out"), on_disk.path().join("out"));
    assert!(!dir_diff::is_different(&builtin, &on_disk).unwrap());
}

#[test]
fn test_interactive_application() {
    let riotbase = fake_riotbase();
    let output = TempDir::new().unwrap();
    let riotbase_answer = riotbase.path().display().to_string();
    let prompter = ScriptedPrompter::new(
        &["hello world", "Brief", "", "xtimer", "", "", "", "", "", &riotbase_answer],
        false,
    );

    let renderer = MiniJinjaRenderer::new();
    let identity = identity();
    let generator = Generator::new(
        ArtifactKind::Application,
        GeneratorOptions::new().year(2042),
        &renderer,
        &prompter,
        &identity,
    );
    let report = generator.run(ParamSource::Interactive, Some(output.path())).unwrap();

    assert_eq!(report.name, "hello_world");
    assert_eq!(prompter.asked.borrow().len(), 10);
    let main = fs::read_to_string(output.path().join("main.c")).unwrap();
    assert!(main.contains("Copyright (C) 2042 Jane Doe"));
    let makefile = fs::read_to_string(output.path().join("Makefile")).unwrap();
    assert!(makefile.contains("USEMODULE += xtimer\n"));
    assert!(makefile.contains("BOARD ?= native\n"));
}

#[test]
fn test_missing_required_field_aborts_before_render() {
    let riotbase = fake_riotbase();
    let output = TempDir::new().unwrap();
    let config = write_config(
        output.path(),
        &format!(
            "[common]\nriotbase = {}\n[pkg]\nname = foo\ndisplayed_name = Foo\nurl = u\nlicense = MIT\n",
            riotbase.path().display()
        ),
    );
    let target = output.path().join("out");

    let renderer = MiniJinjaRenderer::new();
    let prompter = ScriptedPrompter::silent();
    let identity = identity();
    let generator = Generator::new(
        ArtifactKind::Pkg,
        GeneratorOptions::new(),
        &renderer,
        &prompter,
        &identity,
    );

    match generator.run(ParamSource::Config(config), Some(&target)) {
        Err(Error::MissingRequiredField { field }) => assert_eq!(field, "hash"),
        other => panic!("Expected MissingRequiredField, got {other:?}"),
    }
    assert!(prompter.asked.borrow().is_empty());
    assert!(!target.exists());
}

#[test]
fn test_invalid_riotbase_aborts() {
    let not_riot = TempDir::new().unwrap();
    fs::write(not_riot.path().join("CODE_OF_CONDUCT.md"), "Contributor Covenant\n").unwrap();
    let config = write_config(
        not_riot.path(),
        &format!("[common]\nriotbase = {}\n[test]\nname = foo\n", not_riot.path().display()),
    );

    let renderer = MiniJinjaRenderer::new();
    let prompter = ScriptedPrompter::silent();
    let identity = identity();
    let generator = Generator::new(
        ArtifactKind::Test,
        GeneratorOptions::new(),
        &renderer,
        &prompter,
        &identity,
    );

    let result = generator.run(ParamSource::Config(config), None);
    assert!(matches!(result, Err(Error::InvalidProjectRoot { .. })));
    assert!(!not_riot.path().join("tests").exists());
}

#[test]
fn test_declined_overwrite_leaves_output_untouched() {
    let riotbase = fake_riotbase();
    let work = TempDir::new().unwrap();
    let config = write_config(
        work.path(),
        &format!("[common]\nriotbase = {}\n[application]\nname = app\n", riotbase.path().display()),
    );

    let existing = work.path().join("existing");
    let pristine = work.path().join("pristine");
    for dir in [&existing, &pristine] {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join("main.c"), "int main(void) { return 1; }\n").unwrap();
        fs::write(dir.join("notes.txt"), "keep me\n").unwrap();
    }

    let renderer = MiniJinjaRenderer::new();
    let prompter = ScriptedPrompter::new(&[], false);
    let identity = identity();
    let generator = Generator::new(
        ArtifactKind::Application,
        GeneratorOptions::new(),
        &renderer,
        &prompter,
        &identity,
    );

    match generator.run(ParamSource::Config(config), Some(&existing)) {
        Err(Error::OutputExists { path }) => assert_eq!(path, existing.display().to_string()),
        other => panic!("Expected OutputExists, got {other:?}"),
    }
    assert_eq!(prompter.asked.borrow().len(), 1);
    assert!(!dir_diff::is_different(&existing, &pristine).unwrap());
}

#[test]
fn test_confirmed_or_forced_overwrite() {
    let riotbase = fake_riotbase();
    let work = TempDir::new().unwrap();
    let config = write_config(
        work.path(),
        &format!("[common]\nriotbase = {}\n[application]\nname = app\n", riotbase.path().display()),
    );
    let existing = work.path().join("existing");
    fs::create_dir_all(&existing).unwrap();
    fs::write(existing.join("main.c"), "old\n").unwrap();

    let renderer = MiniJinjaRenderer::new();
    let identity = identity();

    let prompter = ScriptedPrompter::new(&[], true);
    let generator = Generator::new(
        ArtifactKind::Application,
        GeneratorOptions::new(),
        &renderer,
        &prompter,
        &identity,
    );
    generator.run(ParamSource::Config(config.clone()), Some(&existing)).unwrap();
    assert_ne!(fs::read_to_string(existing.join("main.c")).unwrap(), "old\n");

    let prompter = ScriptedPrompter::silent();
    let generator = Generator::new(
        ArtifactKind::Application,
        GeneratorOptions::new().force(true),
        &renderer,
        &prompter,
        &identity,
    );
    generator.run(ParamSource::Config(config), Some(&existing)).unwrap();
    assert!(prompter.asked.borrow().is_empty());
}

#[test]
fn test_undefined_template_parameter_writes_nothing() {
    let riotbase = fake_riotbase();
    let work = TempDir::new().unwrap();
    let templates = work.path().join("templates");
    fs::create_dir_all(templates.join("application")).unwrap();
    fs::write(templates.join("application/main.c"), "{{ name }}\n").unwrap();
    fs::write(templates.join("application/Makefile"), "BOARD = {{ target_board }}\n").unwrap();
    fs::write(templates.join("application/README.md"), "{{ name }}\n").unwrap();

    let config = write_config(
        work.path(),
        &format!("[common]\nriotbase = {}\n[application]\nname = app\n", riotbase.path().display()),
    );
    let out = work.path().join("out");

    let renderer = MiniJinjaRenderer::new();
    let prompter = ScriptedPrompter::silent();
    let identity = identity();
    let generator = Generator::new(
        ArtifactKind::Application,
        GeneratorOptions::new().templates_dir(&templates),
        &renderer,
        &prompter,
        &identity,
    );

    match generator.run(ParamSource::Config(config), Some(&out)) {
        Err(Error::TemplateParameterError { template, key }) => {
            assert_eq!(template, "Makefile");
            assert_eq!(key, "target_board");
        }
        other => panic!("Expected TemplateParameterError, got {other:?}"),
    }
    assert!(!out.exists());
}
