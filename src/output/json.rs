use crate::templates::types::MenuItem;
use anyhow::Result;
use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::Path;

pub struct JsonOutput;

impl JsonOutput {
    pub fn write_menu<P: AsRef<Path>>(items: &[MenuItem], path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, items)?;
        Ok(())
    }

    pub fn print_menu<O: Write>(items: &[MenuItem], mut out: O) -> Result<()> {
        serde_json::to_writer_pretty(&mut out, items)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::types::{DocumentKind, MenuAction};
    use std::path::PathBuf;

    #[test]
    fn menu_serializes_actions_and_skips_empty_submenus() {
        let items = vec![MenuItem::new("Templates::TXT", "New Textfile").with_action(MenuAction {
            kind: DocumentKind::Textfile,
            folder: PathBuf::from("/srv/share"),
        })];

        let mut buf = Vec::new();
        JsonOutput::print_menu(&items, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value[0]["action"]["kind"], "textfile");
        assert_eq!(value[0]["action"]["folder"], "/srv/share");
        assert!(value[0].get("submenu").is_none());
    }
}
