#![allow(dead_code)]

use riotgen::error::Result;
use riotgen::prompt::Prompter;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

/// Prompter answering from a fixed script.
pub struct ScriptedPrompter {
    inputs: RefCell<VecDeque<String>>,
    confirm: bool,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(inputs: &[&str], confirm: bool) -> Self {
        Self {
            inputs: RefCell::new(inputs.iter().map(|s| s.to_string()).collect()),
            confirm,
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn silent() -> Self {
        Self::new(&[], false)
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        self.asked.borrow_mut().push(prompt.to_string());
        let answer = self.inputs.borrow_mut().pop_front().unwrap_or_default();
        match (answer.is_empty(), default) {
            (true, Some(default)) => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
        self.asked.borrow_mut().push(prompt.to_string());
        Ok(self.confirm)
    }
}

/// Creates a directory that passes the RIOT base directory check.
pub fn fake_riotbase() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("CODE_OF_CONDUCT.md"),
        "RIOT-OS Code of Conduct\n=======================\n",
    )
    .unwrap();
    dir
}

/// Writes `content` as a config file inside `dir`.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("riotgen.ini");
    fs::write(&path, content).unwrap();
    path
}
