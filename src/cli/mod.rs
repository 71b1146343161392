use clap::{Args, Parser, Subcommand, ValueEnum};
use odf_templates::templates::DocumentKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "odf-templates")]
#[command(about = "Create empty ODF documents and text files from a folder's background menu")]
#[command(version)]
pub struct Cli {
    /// Locale written into new documents, e.g. de_DE.UTF-8. Defaults to LC_ALL, LC_CTYPE or LANG, then en_US
    #[arg(long = "locale", env = "ODF_TEMPLATES_LOCALE", global = true)]
    pub locale: Option<String>,

    /// Show debug information during processing
    #[arg(long = "debug", global = true)]
    pub debug: bool,

    /// Show trace information during processing
    #[arg(long = "trace", global = true)]
    pub trace: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the background menu offered for a folder
    Menu(MenuArgs),
    /// Open the name dialog for a new file and create it
    New(NewArgs),
}

#[derive(Args)]
pub struct MenuArgs {
    /// Folder the menu is requested for
    #[arg(short = 'd', long = "dir", default_value = ".")]
    pub dir: PathBuf,

    /// Output format for console display
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Table)]
    pub output_format: OutputFormat,

    /// File to save the menu tree to as JSON
    #[arg(long = "json")]
    pub json_file: Option<PathBuf>,

    /// File to save the flattened menu to as CSV
    #[arg(long = "csv")]
    pub csv_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct NewArgs {
    /// Kind of file to create
    #[arg(value_enum)]
    pub kind: KindArg,

    /// Folder to create the file in
    #[arg(short = 'd', long = "dir", default_value = ".")]
    pub dir: PathBuf,

    /// Filename without extension. Skips the interactive prompt
    #[arg(short = 'n', long = "name")]
    pub name: Option<String>,

    /// Accept the suggested filename without prompting
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum KindArg {
    /// OpenDocument text (.odt)
    Document,
    /// OpenDocument spreadsheet (.ods)
    Spreadsheet,
    /// OpenDocument presentation (.odp)
    Presentation,
    /// Empty plain-text file (.txt)
    Textfile,
}

impl From<KindArg> for DocumentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Document => DocumentKind::Document,
            KindArg::Spreadsheet => DocumentKind::Spreadsheet,
            KindArg::Presentation => DocumentKind::Presentation,
            KindArg::Textfile => DocumentKind::Textfile,
        }
    }
}

#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormat {
    /// Tabular output
    Table,
    /// JSON output to console
    Json,
    /// CSV output to console
    Csv,
    /// Minimal output
    Minimal,
}

impl Cli {
    pub fn validate(&self) -> Result<(), String> {
        let dir = match self.command {
            Command::Menu(ref args) => &args.dir,
            Command::New(ref args) => {
                if args.name.is_some() && args.yes {
                    return Err("--name and --yes cannot be used together".to_string());
                }
                &args.dir
            }
        };

        if !dir.exists() {
            return Err(format!("Folder does not exist: {}", dir.display()));
        }

        if !dir.is_dir() {
            return Err(format!("Not a folder: {}", dir.display()));
        }

        Ok(())
    }
}
