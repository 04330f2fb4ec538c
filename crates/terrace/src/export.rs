//! Artifact rendering.
//!
//! Every artifact is rendered to memory first; callers write them only once all six rendered
//! successfully. Numbers follow JavaScript formatting (`10`, not `10.0`) so the flat files match
//! what the downstream site generator already consumes.

use crate::Layout;
use crate::error::Result;
use crate::model::ChildCount;
use serde::Serialize;
use serde_json::{Map, Value};
use terrace_graph::{Group, NodeId};

pub const NODES_JSON: &str = "nodes.json";
pub const EDGES_JSON: &str = "edges.json";
pub const POSITIONS_JSON: &str = "positions.json";
pub const NODES_DAT: &str = "nodes.dat";
pub const EDGES_DAT: &str = "edges.dat";
pub const COORDINATES_DAT: &str = "coordinates.dat";

/// Where an artifact belongs: the JSON bundle or the flat data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Json,
    Data,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub name: &'static str,
    pub destination: Destination,
    pub contents: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    pub pretty: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Artifacts {
    items: Vec<Artifact>,
}

impl Artifacts {
    pub fn render(layout: &Layout, opts: &ExportOptions) -> Result<Self> {
        let items = vec![
            Artifact {
                name: NODES_JSON,
                destination: Destination::Json,
                contents: nodes_json(layout, opts)?,
            },
            Artifact {
                name: EDGES_JSON,
                destination: Destination::Json,
                contents: edges_json(layout, opts)?,
            },
            Artifact {
                name: POSITIONS_JSON,
                destination: Destination::Json,
                contents: positions_json(layout, opts)?,
            },
            Artifact {
                name: NODES_DAT,
                destination: Destination::Data,
                contents: nodes_dat(layout),
            },
            Artifact {
                name: EDGES_DAT,
                destination: Destination::Data,
                contents: edges_dat(layout),
            },
            Artifact {
                name: COORDINATES_DAT,
                destination: Destination::Data,
                contents: coordinates_dat(layout),
            },
        ];
        Ok(Self { items })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.contents.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Artifact> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Artifacts {
    type Item = &'a Artifact;
    type IntoIter = std::slice::Iter<'a, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NodeRecord<'a> {
    id: &'a NodeId,
    label: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<u32>,
    group: &'a Group,
    child_count: ChildCount,
    layer: usize,
    order: usize,
}

pub fn nodes_json(layout: &Layout, opts: &ExportOptions) -> Result<String> {
    let records: Vec<NodeRecord<'_>> = layout
        .graph()
        .nodes()
        .iter()
        .map(|n| {
            let attrs = layout.attributes_of(&n.id).copied().unwrap_or_default();
            NodeRecord {
                id: &n.id,
                label: &n.label,
                level: n.level,
                group: &n.group,
                child_count: attrs.child_count,
                layer: attrs.layer,
                order: attrs.order,
            }
        })
        .collect();
    to_json(&records, opts)
}

pub fn edges_json(layout: &Layout, opts: &ExportOptions) -> Result<String> {
    to_json(layout.graph().edges(), opts)
}

/// `{"<id>": {"x": .., "y": ..}, ...}` in node order.
pub fn positions_json(layout: &Layout, opts: &ExportOptions) -> Result<String> {
    let mut map = Map::new();
    for (id, p) in layout.positions() {
        let mut point = Map::new();
        point.insert("x".to_string(), js_number(p.x));
        point.insert("y".to_string(), js_number(p.y));
        map.insert(id.to_string(), Value::Object(point));
    }
    to_json(&Value::Object(map), opts)
}

/// `<id> <label> <level> <groupCode>` per node. A node without a level hint prints its layer.
///
/// Fields are written verbatim and separated by single spaces. A label containing whitespace or
/// a newline therefore produces a line that cannot be split back into four fields; use
/// `nodes.json` when labels are free text.
pub fn nodes_dat(layout: &Layout) -> String {
    let mut out = String::new();
    for n in layout.graph().nodes() {
        let level = match n.level {
            Some(level) => level.to_string(),
            None => layout
                .attributes_of(&n.id)
                .map(|a| a.layer)
                .unwrap_or(0)
                .to_string(),
        };
        out.push_str(&format!(
            "{} {} {} {}\n",
            n.id,
            n.label,
            level,
            n.group.code()
        ));
    }
    out
}

/// `<from> <to>` per edge.
pub fn edges_dat(layout: &Layout) -> String {
    let mut out = String::new();
    for e in layout.graph().edges() {
        out.push_str(&format!("{} {}\n", e.from, e.to));
    }
    out
}

/// `<id> <x> <y>` per node.
pub fn coordinates_dat(layout: &Layout) -> String {
    let mut out = String::new();
    let mut buf = ryu_js::Buffer::new();
    for (id, p) in layout.positions() {
        out.push_str(&id.to_string());
        out.push(' ');
        out.push_str(js_number_to_string(p.x, &mut buf));
        out.push(' ');
        out.push_str(js_number_to_string(p.y, &mut buf));
        out.push('\n');
    }
    out
}

fn to_json<T: Serialize + ?Sized>(value: &T, opts: &ExportOptions) -> Result<String> {
    let s = if opts.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(s)
}

// Largest integer a JS number represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// JSON number the way `JSON.stringify` prints it: integral values carry no fraction.
fn js_number(v: f64) -> Value {
    if !v.is_finite() {
        return Value::from(0);
    }
    if v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER {
        return Value::from(v as i64);
    }
    serde_json::Number::from_f64(v)
        .map(Value::Number)
        .unwrap_or_else(|| Value::from(0))
}

fn js_number_to_string(mut v: f64, buf: &mut ryu_js::Buffer) -> &str {
    if !v.is_finite() {
        return "0";
    }
    if v == -0.0 {
        v = 0.0;
    }
    buf.format_finite(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_number_drops_the_fraction_of_integral_values() {
        assert_eq!(js_number(10.0).to_string(), "10");
        assert_eq!(js_number(-0.0).to_string(), "0");
        assert_eq!(js_number(12.5).to_string(), "12.5");
        assert_eq!(js_number(f64::NAN).to_string(), "0");
    }

    #[test]
    fn js_number_to_string_matches_javascript() {
        let mut buf = ryu_js::Buffer::new();
        assert_eq!(js_number_to_string(140.0, &mut buf), "140");
        assert_eq!(js_number_to_string(-0.0, &mut buf), "0");
        assert_eq!(js_number_to_string(0.5, &mut buf), "0.5");
    }
}
