use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::data::validate::{validate_catalogs, ValidationSeverity};
use crate::data::{load_catalogs, Catalogs, CatalogEntry, Category, DEFAULT_DATA_DIR};
use crate::resolve::{resolve, DescMode, ResolveOptions};
use crate::server;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Parser)]
#[command(name = "tjwiki", version, about = "Tom and Jerry: Chase wiki goto service")]
pub struct Cli {
    /// Directory holding the category JSON files
    #[arg(long, global = true, env = "TJWIKI_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Serve the goto redirect and JSON API
    Serve {
        #[arg(long, env = "TJWIKI_BIND", default_value = DEFAULT_BIND_ADDR)]
        bind: String,
    },
    /// Resolve a name to its canonical URL
    Resolve {
        name: String,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        desc_mode: Option<DescMode>,
    },
    /// Check catalogs for dangling references and name collisions
    Validate,
    /// Print every name and URL in a category
    List { category: Category },
}

pub fn run_with_args(args: &[String]) -> i32 {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return err.exit_code();
        }
    };
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            1
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let catalogs = load(&cli.data_dir)?;
    let code = match cli.command {
        Command::Serve { bind } => {
            server::run_server(&bind, catalogs.into_shared())
                .with_context(|| format!("server on {bind} failed"))?;
            0
        }
        Command::Resolve {
            name,
            category,
            desc_mode,
        } => handle_resolve(&catalogs, &name, category, desc_mode),
        Command::Validate => handle_validate(&catalogs),
        Command::List { category } => handle_list(&catalogs, category),
    };
    Ok(code)
}

fn load(data_dir: &Path) -> anyhow::Result<Catalogs> {
    load_catalogs(data_dir)
        .with_context(|| format!("loading catalogs from {}", data_dir.display()))
}

fn handle_resolve(
    catalogs: &Catalogs,
    name: &str,
    category: Option<Category>,
    desc_mode: Option<DescMode>,
) -> i32 {
    match resolve(catalogs, name, category, &ResolveOptions { desc_mode }) {
        Some(resolution) => {
            println!("{}", resolution.url);
            0
        }
        None => {
            eprintln!("not found: {name}");
            1
        }
    }
}

fn handle_validate(catalogs: &Catalogs) -> i32 {
    let report = validate_catalogs(catalogs);
    for diagnostic in &report.diagnostics {
        match diagnostic.severity {
            ValidationSeverity::Error | ValidationSeverity::Warning => eprintln!("- {diagnostic}"),
            ValidationSeverity::Info => println!("- {diagnostic}"),
        }
    }
    if report.has_errors() {
        eprintln!(
            "validation failed: {} error(s)",
            report.count(ValidationSeverity::Error)
        );
        1
    } else {
        println!("validation passed: {} record(s)", catalogs.total_records());
        0
    }
}

fn handle_list(catalogs: &Catalogs, category: Category) -> i32 {
    for record in catalogs.catalog(category).records() {
        println!("{}\t{}", record.name(), record.canonical_path());
    }
    0
}
