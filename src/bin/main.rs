use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};

use oopgen::model::Namespace;
use oopgen::registry::{propose_name, rename};
use oopgen::review::review;
use oopgen::{generate, load_program, save_program, snapshot_paths, Config};

#[derive(Parser)]
#[command(name = "oopgen")]
#[command(about = "Object-oriented program assembler")]
#[command(version)]
struct Cli {
    /// Log progress to stderr (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit Java source for a snapshot file or a directory of snapshots
    Emit {
        /// Snapshot file, or directory searched for *.json snapshots
        #[arg(value_name = "PATH")]
        input: PathBuf,

        /// Write the source here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Spaces per nesting level
        #[arg(long, value_name = "N")]
        indent: Option<usize>,

        /// Leave documentation comments out
        #[arg(long)]
        no_docs: bool,
    },

    /// Review snapshots and report conformance errors and naming warnings
    Check {
        /// Snapshot file, or directory searched for *.json snapshots
        #[arg(value_name = "PATH")]
        input: PathBuf,
    },

    /// Rename a class or interface and update every reference to it
    Rename {
        /// Snapshot file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[arg(long, value_enum)]
        namespace: NamespaceArg,

        /// Current name
        #[arg(long)]
        from: String,

        /// Requested name
        #[arg(long)]
        to: String,

        /// Write the renamed snapshot here instead of in place
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the name a new declaration would receive
    Propose {
        /// Snapshot file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[arg(long, value_enum)]
        namespace: NamespaceArg,

        /// Candidate name
        #[arg(value_name = "NAME")]
        name: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum NamespaceArg {
    Class,
    Interface,
}

impl From<NamespaceArg> for Namespace {
    fn from(arg: NamespaceArg) -> Self {
        match arg {
            NamespaceArg::Class => Namespace::Class,
            NamespaceArg::Interface => Namespace::Interface,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Emit { input, output, indent, no_docs } => {
            let mut config = Config::from_env()?;
            if let Some(indent) = indent {
                config = config.with_indent(*indent);
            }
            if *no_docs {
                config = config.without_docs();
            }
            emit_snapshots(input, output.as_deref(), &config)?;
        }
        Commands::Check { input } => {
            check_snapshots(input)?;
        }
        Commands::Rename { input, namespace, from, to, output } => {
            rename_in_snapshot(input, (*namespace).into(), from, to, output.as_deref())?;
        }
        Commands::Propose { input, namespace, name } => {
            let program = load_program(input)?;
            println!("{}", propose_name(&program, name, (*namespace).into(), None));
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env().filter_level(level).init();
}

fn emit_snapshots(input: &Path, output: Option<&Path>, config: &Config) -> Result<()> {
    let paths = snapshot_paths(input)?;
    if paths.is_empty() {
        bail!("no snapshots found under {}", input.display());
    }

    let mut units = Vec::with_capacity(paths.len());
    for path in &paths {
        let program = load_program(path).with_context(|| format!("failed to load {}", path.display()))?;
        let source = generate(&program, config)?;
        log::info!("emitted {} ({} bytes)", path.display(), source.len());
        if !source.is_empty() {
            units.push(source);
        }
    }
    let source = units.join("\n");

    match output {
        Some(path) => {
            fs::write(path, source).with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{}", source),
    }
    Ok(())
}

fn check_snapshots(input: &Path) -> Result<()> {
    let mut errors = 0;
    for path in snapshot_paths(input)? {
        let program = load_program(&path).with_context(|| format!("failed to load {}", path.display()))?;
        let report = review(&program);
        if report.is_clean() {
            println!("{}: ok", path.display());
            continue;
        }
        println!("{}:", path.display());
        print!("{}", report);
        errors += report.conformance.len();
    }
    if errors > 0 {
        bail!("{} conformance error(s)", errors);
    }
    Ok(())
}

fn rename_in_snapshot(input: &Path, namespace: Namespace, from: &str, to: &str, output: Option<&Path>) -> Result<()> {
    let mut program = load_program(input)?;
    let accepted = rename(&mut program, namespace, from, to)?;
    if accepted != to.trim() {
        log::warn!("'{}' is taken, using '{}'", to.trim(), accepted);
    }
    let target = output.unwrap_or(input);
    save_program(&program, target)?;
    println!("{}", accepted);
    Ok(())
}
