//! Compose rendering.
//! Pure string substitution: no file access, no YAML parsing.
//! The control template gets the comma-separated host list, then one node block
//! per index is appended in ascending order. Node 0 also carries the image build line.

use crate::template::Templates;

pub const NODE_LIST: &str = "NODE_LIST";
pub const NODE_IDX: &str = "NODE_IDX";
pub const NODE_FWD_PORT: &str = "NODE_FWD_PORT";

const BASE_FWD_PORT: i64 = 8090;
const BUILD_LINE: &str = "    build: ./node\n";

pub fn hostname(index: i64) -> String {
    format!("n{}.local", index)
}

pub fn forwarded_port(index: i64) -> i64 {
    BASE_FWD_PORT + index
}

/// `n0.local,n1.local,...`; empty when `node_count <= 0`.
pub fn host_list(node_count: i64) -> String {
    (0..node_count).map(hostname).collect::<Vec<_>>().join(",")
}

/// Renders one node block. Index is substituted before port.
pub fn render_node(template: &str, index: i64) -> String {
    let mut node = template
        .replace(NODE_IDX, &index.to_string())
        .replace(NODE_FWD_PORT, &forwarded_port(index).to_string());
    if index == 0 {
        node.push_str(BUILD_LINE);
    }
    node
}

/// Renders the full output document for `node_count` nodes.
pub fn render(templates: &Templates, node_count: i64) -> String {
    let mut compose = templates.control.replace(NODE_LIST, &host_list(node_count));
    for i in 0..node_count {
        compose.push_str(&render_node(&templates.node, i));
    }
    compose
}
