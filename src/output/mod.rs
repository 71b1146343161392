pub mod csv;
pub mod json;
pub mod table;

use crate::templates::naming::find_empty_name;
use crate::templates::types::MenuItem;
use serde::Serialize;

/// One flattened menu entry, with the default name its action would offer.
#[derive(Debug, Clone, Serialize)]
pub struct MenuRow {
    pub depth: usize,
    pub id: String,
    pub label: String,
    pub kind: String,
    pub extension: String,
    pub default_name: String,
    pub folder: String,
}

impl MenuRow {
    pub fn flatten(items: &[MenuItem]) -> Vec<MenuRow> {
        let mut rows = Vec::new();
        collect_rows(items, 0, &mut rows);
        rows
    }
}

fn collect_rows(items: &[MenuItem], depth: usize, rows: &mut Vec<MenuRow>) {
    for item in items {
        let row = match item.action {
            Some(ref action) => MenuRow {
                depth,
                id: item.id.clone(),
                label: item.label.clone(),
                kind: action.kind.to_string(),
                extension: action.kind.extension().to_string(),
                default_name: find_empty_name(
                    &action.folder,
                    action.kind.label(),
                    action.kind.extension(),
                ),
                folder: action.folder.display().to_string(),
            },
            None => MenuRow {
                depth,
                id: item.id.clone(),
                label: item.label.clone(),
                kind: String::new(),
                extension: String::new(),
                default_name: String::new(),
                folder: String::new(),
            },
        };
        rows.push(row);
        collect_rows(&item.submenu, depth + 1, rows);
    }
}
