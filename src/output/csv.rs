use super::MenuRow;
use anyhow::Result;
use csv::Writer;
use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::Path;

pub struct CsvOutput;

impl CsvOutput {
    pub fn write_menu_rows<P: AsRef<Path>>(rows: &[MenuRow], path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Self::print_menu_rows(rows, file)
    }

    pub fn print_menu_rows<O: Write>(rows: &[MenuRow], out: O) -> Result<()> {
        let mut writer = Writer::from_writer(out);

        for row in rows {
            writer.serialize(row)?;
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_comes_from_field_names() {
        let rows = vec![MenuRow {
            depth: 1,
            id: "Templates::ODT".to_string(),
            label: "New Document".to_string(),
            kind: "Document".to_string(),
            extension: "odt".to_string(),
            default_name: "New Document (2)".to_string(),
            folder: "/home/ana".to_string(),
        }];

        let mut buf = Vec::new();
        CsvOutput::print_menu_rows(&rows, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("depth,id,label,kind,extension,default_name,folder")
        );
        assert_eq!(
            lines.next(),
            Some("1,Templates::ODT,New Document,Document,odt,New Document (2),/home/ana")
        );
    }
}
