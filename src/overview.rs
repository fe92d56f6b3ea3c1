//! Grouped plain-text overview of a token tree.
//!
//! Renders a section per top-level category with the fully namespaced
//! declarations underneath, through a minijinja template. This mirrors the
//! design-system "tokens overview" documentation page as a text document
//! that can be dumped to a terminal or a file.

use minijinja::Environment;
use serde::Serialize;

use crate::flatten::{flatten_with_prefix, ROOT_MARKER};
use crate::token::{Group, TokenNode};

const OVERVIEW_TEMPLATE: &str = "\
{%- for section in sections %}
{{ section.title }}
{% for row in section.rows %}  {{ row.name }}: {{ row.value }}
{% endfor %}
{%- endfor %}";

#[derive(Serialize)]
struct Overview {
    sections: Vec<Section>,
}

#[derive(Serialize)]
struct Section {
    title: String,
    rows: Vec<Row>,
}

#[derive(Serialize)]
struct Row {
    name: String,
    value: String,
}

/// Renders a sectioned overview of the token tree.
///
/// Sections follow the tree's top-level declaration order; rows within a
/// section are the flattened entries of that category, in traversal order.
///
/// # Errors
///
/// Tree validation failures surface as template errors, the same way theme
/// validation failures do in a rendering pipeline.
pub fn render(tokens: &Group) -> Result<String, minijinja::Error> {
    let mut sections = Vec::with_capacity(tokens.len());

    for (name, node) in tokens.entries() {
        let prefix = format!("{}{}", ROOT_MARKER, name);
        let rows = match node {
            TokenNode::Group(child) => flatten_with_prefix(child, &prefix)
                .map_err(|e| {
                    minijinja::Error::new(minijinja::ErrorKind::InvalidOperation, e.to_string())
                })?
                .into_iter()
                .map(|entry| Row {
                    name: entry.name,
                    value: entry.value.to_string(),
                })
                .collect(),
            TokenNode::Value(value) => vec![Row {
                name: prefix,
                value: value.to_string(),
            }],
        };
        sections.push(Section {
            title: name.clone(),
            rows,
        });
    }

    let mut env = Environment::new();
    env.add_template("overview", OVERVIEW_TEMPLATE)?;
    env.get_template("overview")?.render(Overview { sections })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_sections_follow_declaration_order() {
        let tokens = Group::new()
            .add("palette", Group::new().add("primary", "#FE5200"))
            .add("size", Group::new().add("gap", "1em"));

        let doc = render(&tokens).unwrap();
        let palette_at = doc.find("palette").unwrap();
        let size_at = doc.find("size").unwrap();
        assert!(palette_at < size_at);
    }

    #[test]
    fn test_overview_rows_carry_full_namespace() {
        let tokens = Group::new().add(
            "palette",
            Group::new().add("functional", Group::new().add("primary", "#FE5200")),
        );

        let doc = render(&tokens).unwrap();
        assert!(doc.contains("$palette-functional-primary: #FE5200"));
    }

    #[test]
    fn test_overview_top_level_value_gets_own_section() {
        let tokens = Group::new().add("brand", "#FE5200");
        let doc = render(&tokens).unwrap();
        assert!(doc.contains("brand"));
        assert!(doc.contains("$brand: #FE5200"));
    }

    #[test]
    fn test_overview_reports_malformed_tree() {
        let tokens = Group::new().add(
            "palette",
            Group::new().add("primary", "#1").add("primary", "#2"),
        );
        assert!(render(&tokens).is_err());
    }
}
