mod cli;

use cli::{Cli, Command, MenuArgs, NewArgs, OutputFormat};
use odf_templates::output::{csv::CsvOutput, json::JsonOutput, table::TableOutput, MenuRow};
use odf_templates::templates::{
    ConfirmOutcome, DialogPhase, DocumentKind, LocaleTags, MenuProvider, NameDialog,
    TemplateMenuProvider,
};
use odf_templates::terminal::TerminalDialog;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{error, info};
use path_absolutize::Absolutize;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// The terminal session stands in for the file manager's window.
const TERMINAL_WINDOW: &str = "terminal";

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let log_level = if cli.trace {
        "trace"
    } else if cli.debug {
        "debug"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .init();

    // Validate command line arguments
    if let Err(e) = cli.validate() {
        error!("Validation error: {}", e);
        std::process::exit(1);
    }

    let start_time = Instant::now();
    let locale_id = cli
        .locale
        .clone()
        .or_else(|| LocaleTags::env_locale(|var| std::env::var(var).ok()));
    let locale = LocaleTags::parse_or_default(locale_id.as_deref());
    info!("Using locale {}", locale);
    let mut provider = TemplateMenuProvider::new(locale);

    let result = match cli.command {
        Command::Menu(ref args) => process_menu(&mut provider, args),
        Command::New(ref args) => process_new(&mut provider, args),
    };

    match result {
        Ok(()) => {
            info!("Completed in {} ms", start_time.elapsed().as_millis());
        }
        Err(e) => {
            error!("Failed: {:#}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn absolute_dir(dir: &Path) -> Result<PathBuf> {
    let dir = dir
        .absolutize()
        .with_context(|| format!("Failed to resolve folder: {}", dir.display()))?;
    Ok(dir.into_owned())
}

fn process_menu(provider: &mut TemplateMenuProvider<&'static str>, args: &MenuArgs) -> Result<()> {
    let dir = absolute_dir(&args.dir)?;
    let menu = provider.build_background_menu(TERMINAL_WINDOW, &dir);
    let rows = MenuRow::flatten(&menu);

    if let Some(ref json_file) = args.json_file {
        JsonOutput::write_menu(&menu, json_file)
            .with_context(|| format!("Failed to write {}", json_file.display()))?;
        info!("JSON output written to: {}", json_file.display());
    }

    if let Some(ref csv_file) = args.csv_file {
        CsvOutput::write_menu_rows(&rows, csv_file)
            .with_context(|| format!("Failed to write {}", csv_file.display()))?;
        info!("CSV output written to: {}", csv_file.display());
    }

    match args.output_format {
        OutputFormat::Table => TableOutput::print_menu(&rows),
        OutputFormat::Json => JsonOutput::print_menu(&menu, io::stdout().lock())?,
        OutputFormat::Csv => CsvOutput::print_menu_rows(&rows, io::stdout().lock())?,
        OutputFormat::Minimal => {
            let actions = rows.iter().filter(|r| !r.kind.is_empty()).count();
            println!("{} actions for {}", actions, dir.display());
        }
    }

    Ok(())
}

fn process_new(provider: &mut TemplateMenuProvider<&'static str>, args: &NewArgs) -> Result<()> {
    let dir = absolute_dir(&args.dir)?;
    let kind = DocumentKind::from(args.kind);

    // Go through the menu so the dialog is opened exactly as a click would.
    let menu = provider.build_background_menu(TERMINAL_WINDOW, &dir);
    let action = menu
        .iter()
        .flat_map(|item| item.submenu.iter())
        .filter_map(|item| item.action.as_ref())
        .find(|action| action.kind == kind)
        .with_context(|| format!("No menu action for {}", kind))?;

    let mut dialog = provider.activate(action);
    info!("Opened {} in {}", dialog.title(), dir.display());

    let path = match (args.name.as_deref(), args.yes) {
        (Some(name), _) => {
            dialog.on_text_changed(name);
            confirm_once(&mut dialog)?
        }
        (None, true) => confirm_once(&mut dialog)?,
        (None, false) => {
            let stdin = io::stdin();
            let mut term = TerminalDialog::new(stdin.lock(), io::stdout().lock());
            match term.run(&mut dialog)? {
                DialogPhase::Confirmed => dialog.target_path(),
                _ => {
                    info!("Cancelled, nothing created");
                    return Ok(());
                }
            }
        }
    };

    let size = std::fs::metadata(&path)
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .len();
    TableOutput::print_created(&path, size);

    Ok(())
}

fn confirm_once<W>(dialog: &mut NameDialog<W>) -> Result<PathBuf> {
    let name = dialog.state().current_text.clone();
    match dialog.on_confirm().context("Creation failed")? {
        ConfirmOutcome::Created(path) => Ok(path),
        ConfirmOutcome::Rejected(problem) => bail!("{}: {:?}", problem, name),
        ConfirmOutcome::Closed => bail!("Dialog already closed"),
    }
}
