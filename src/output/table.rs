use super::MenuRow;
use std::path::Path;

pub struct TableOutput;

impl TableOutput {
    pub fn print_menu(rows: &[MenuRow]) {
        println!("{:<24} {:<30} {:<6} {:<30}",
                 "Id", "Label", "Ext", "Default Name");
        println!("{}", "-".repeat(92));

        for row in rows {
            let label = format!("{}{}", "  ".repeat(row.depth), row.label);

            let label = if label.chars().count() > 28 {
                format!("{}...", label.chars().take(25).collect::<String>())
            } else {
                label
            };

            println!("{:<24} {:<30} {:<6} {:<30}",
                     row.id,
                     label,
                     row.extension,
                     row.default_name);
        }
    }

    pub fn print_created(path: &Path, size: u64) {
        println!("\nCreated:");
        println!("{}", "-".repeat(30));
        println!("Path:              {}", path.display());
        println!("Size:              {} bytes", size);
    }
}
