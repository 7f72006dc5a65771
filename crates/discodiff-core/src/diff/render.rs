//! Plain-text renderer for diff trees.

use super::model::{ChangeType, DiffEntry, ElementKind};

/// Render a diff tree as indented text, one line per entry.
///
/// Entries are written depth-first in tree order with two spaces of indent
/// per level:
///
/// ```text
/// M .Revision [ "20161109" ==> "20191101" ]
/// + <Schema> Schemas.Shovel
///   + .ID [ "Shovel" ]
/// - <Resource> Resources.legacy
/// ```
///
/// An empty tree renders as the empty string.
pub fn render_diff(entries: &[DiffEntry]) -> String {
    let mut out = String::new();
    render_level(&mut out, entries, 0);
    out
}

fn render_level(out: &mut String, entries: &[DiffEntry], level: usize) {
    for entry in entries {
        out.push_str(&"  ".repeat(level));
        out.push_str(&format!(
            "{} {}{}",
            change_marker(entry.change_type),
            kind_marker(entry.element_kind),
            entry.element_id
        ));
        if !entry.element_kind.is_composite() {
            match entry.change_type {
                ChangeType::Modify => out.push_str(&format!(
                    " [ \"{}\" ==> \"{}\" ]",
                    entry.old_value, entry.new_value
                )),
                ChangeType::Add if !entry.new_value.is_empty() => {
                    out.push_str(&format!(" [ \"{}\" ]", entry.new_value))
                }
                _ => {}
            }
        }
        out.push('\n');
        render_level(out, &entry.children, level + 1);
    }
}

fn change_marker(change_type: ChangeType) -> &'static str {
    match change_type {
        ChangeType::Add => "+",
        ChangeType::Modify => "M",
        ChangeType::Delete => "-",
    }
}

fn kind_marker(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Schema => "<Schema> ",
        ElementKind::Resource => "<Resource> ",
        ElementKind::Method => "<Method> ",
        ElementKind::StringField | ElementKind::BoolField => ".",
    }
}
