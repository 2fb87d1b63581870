//! Template loading.
//! The control template is used whole. The node template's first line is a header
//! (e.g. the `services:` key it shares with the control file) and is dropped.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::config::Settings;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Templates {
    pub control: String,
    pub node: String,
}

/// Reads both templates named by `settings`.
pub fn load(settings: &Settings) -> Result<Templates> {
    let control = read(&settings.control_path)?;
    let node = skip_first_line(&read(&settings.node_path)?).to_string();

    debug!(
        control_bytes = control.len(),
        node_bytes = node.len(),
        "Loaded templates"
    );

    Ok(Templates { control, node })
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read template: {}", path.display()))
}

/// Everything after the first newline; empty if there is none.
pub fn skip_first_line(content: &str) -> &str {
    match content.split_once('\n') {
        Some((_, rest)) => rest,
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_first_line() {
        assert_eq!(skip_first_line("services:\n  a:\n  b:\n"), "  a:\n  b:\n");
        assert_eq!(skip_first_line("only one line"), "");
        assert_eq!(skip_first_line("header\n"), "");
        assert_eq!(skip_first_line(""), "");
    }

    #[test]
    fn test_skip_first_line_keeps_crlf_body() {
        assert_eq!(skip_first_line("services:\r\n  n:\r\n"), "  n:\r\n");
    }

    #[test]
    fn test_load_reads_both_files() -> Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("compose.control.yaml"), "hosts: NODE_LIST\n")?;
        fs::write(dir.path().join("compose.node.yaml"), "services:\n  nNODE_IDX:\n")?;

        let templates = load(&Settings::in_dir(1, dir.path()))?;
        assert_eq!(templates.control, "hosts: NODE_LIST\n");
        assert_eq!(templates.node, "  nNODE_IDX:\n");
        Ok(())
    }

    #[test]
    fn test_load_missing_template_names_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("compose.control.yaml"), "x").unwrap();

        let err = load(&Settings::in_dir(1, dir.path())).unwrap_err();
        assert!(err.to_string().contains("compose.node.yaml"));
    }
}
