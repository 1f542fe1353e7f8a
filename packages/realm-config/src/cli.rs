//! Command-line interface for realm-config.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser, Subcommand};
use console::style;

use crate::config::{SectionOrder, Settings, DEFAULT_COMBINED_FILE};
use crate::error::{RealmConfigError, Result};
use crate::merge::merge_config;
use crate::split::split_config;

const EXAMPLES: &str = "\
Examples:
  realm-config split              Split the default realm.json
  realm-config merge custom.json  Merge the section files into custom.json";

/// Realm config - split realm.json into editable YAML sections and merge them back.
#[derive(Parser)]
#[command(name = "realm-config")]
#[command(version, about, long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    /// Section directory (default: realm_configs, or $REALM_CONFIG_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Endpoint file ordering used by merge (default: lexicographic, or $REALM_CONFIG_ORDER)
    #[arg(long, global = true, value_enum)]
    pub order: Option<SectionOrder>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a JSON config into YAML section files.
    Split {
        /// Combined JSON document to read
        #[arg(default_value = DEFAULT_COMBINED_FILE)]
        file: PathBuf,

        /// Anything after the file is ignored.
        #[arg(hide = true, num_args = 0..)]
        ignored: Vec<OsString>,
    },

    /// Merge YAML section files into a JSON config.
    Merge {
        /// Combined JSON document to write
        #[arg(default_value = DEFAULT_COMBINED_FILE)]
        file: PathBuf,

        /// Anything after the file is ignored.
        #[arg(hide = true, num_args = 0..)]
        ignored: Vec<OsString>,
    },
}

impl Cli {
    /// Apply command-line overrides on top of `base`.
    #[must_use]
    pub fn settings(&self, base: Settings) -> Settings {
        let mut settings = base;
        if let Some(dir) = &self.config_dir {
            settings = settings.with_config_dir(dir);
        }
        if let Some(order) = self.order {
            settings = settings.with_order(order);
        }
        settings
    }
}

/// Run the CLI with the process arguments.
pub fn run() -> Result<()> {
    run_from(std::env::args_os())
}

/// Run the CLI with explicit arguments (first item is the program name).
///
/// Unknown or missing commands yield `RealmConfigError::Usage`.
pub fn run_from<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let cli = match Cli::try_parse_from(normalize_command(args)) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{e}");
            return Ok(());
        }
        Err(e) => return Err(RealmConfigError::Usage(usage_message(&e))),
    };

    let settings = cli.settings(Settings::from_env());
    match &cli.command {
        Commands::Split { file, .. } => split_command(file, &settings),
        Commands::Merge { file, .. } => merge_command(file, &settings),
    }
}

/// Global options that take a separate value.
const VALUE_OPTIONS: [&str; 2] = ["--config-dir", "--order"];

/// Lowercase the command word so `SPLIT` and `Merge` are accepted.
///
/// The command word is the first argument that is neither an option nor the
/// value of a global option.
fn normalize_command<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let mut skip_value = false;
    for arg in args.iter_mut().skip(1) {
        if skip_value {
            skip_value = false;
            continue;
        }
        let Some(text) = arg.to_str() else {
            break;
        };
        if text.starts_with('-') {
            skip_value = VALUE_OPTIONS.contains(&text);
            continue;
        }
        let lowered = text.to_lowercase();
        if lowered == "split" || lowered == "merge" {
            *arg = OsString::from(lowered);
        }
        break;
    }

    args
}

/// Usage text shown on stdout when the command line is not understood.
pub fn usage_message(err: &clap::Error) -> String {
    let reason = match err.get(ContextKind::InvalidSubcommand) {
        Some(ContextValue::String(command)) => format!("Unknown command: {command}\n\n"),
        _ => String::new(),
    };
    format!("{reason}{}", Cli::command().render_help())
}

fn split_command(file: &Path, settings: &Settings) -> Result<()> {
    let report = split_config(file, settings)?;

    if report.created_dir {
        println!(
            "{} {}",
            style("Created config directory").bold(),
            style(report.config_dir.display()).cyan()
        );
    }
    println!("{} {}", style("Saved log settings to").green(), report.log_file.display());
    for path in &report.endpoint_files {
        println!("{} {}", style("Saved endpoint to").green(), path.display());
    }

    println!();
    println!(
        "{} You can now edit the files in {} and add comments.",
        style("Split complete.").green().bold(),
        style(report.config_dir.display()).cyan()
    );
    println!(
        "When you are done, run 'realm-config merge' to regenerate {}",
        file.display()
    );

    Ok(())
}

fn merge_command(file: &Path, settings: &Settings) -> Result<()> {
    let report = merge_config(file, settings)?;

    if let Some(log_file) = &report.log_file {
        println!("{} {}", style("Loaded log settings from").green(), log_file.display());
    }
    for path in &report.endpoint_files {
        println!("{} {}", style("Loaded endpoint from").green(), path.display());
    }

    println!();
    println!(
        "{} {}",
        style("Merged config into").green().bold(),
        report.output.display()
    );

    Ok(())
}
