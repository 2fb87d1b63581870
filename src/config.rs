//! Config module.
//! Holds the run settings built from CLI arguments: node count and the three file paths.
//! Relative file names resolve against the working directory given with `--dir`.

use std::path::{Path, PathBuf};

pub const CONTROL_TEMPLATE: &str = "compose.control.yaml";
pub const NODE_TEMPLATE: &str = "compose.node.yaml";
pub const OUTPUT_FILE: &str = "compose.yaml";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Number of node blocks to render. Zero or negative renders none.
    pub node_count: i64,
    pub control_path: PathBuf,
    pub node_path: PathBuf,
    pub output_path: PathBuf,
}

impl Settings {
    pub fn new(node_count: i64, dir: impl AsRef<Path>, control: &str, node: &str, output: &str) -> Self {
        let dir = dir.as_ref();
        // Path::join keeps absolute paths as-is
        Self {
            node_count,
            control_path: dir.join(control),
            node_path: dir.join(node),
            output_path: dir.join(output),
        }
    }

    /// Settings for `node_count` nodes using the default file names inside `dir`.
    #[cfg(test)]
    pub fn in_dir(node_count: i64, dir: impl AsRef<Path>) -> Self {
        Self::new(node_count, dir, CONTROL_TEMPLATE, NODE_TEMPLATE, OUTPUT_FILE)
    }
}
