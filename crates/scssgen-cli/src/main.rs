use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scssgen_ast::{json, Node};
use scssgen_codegen::{generate_with_options, registry, GenerateOptions};

#[derive(Parser)]
#[command(name = "scssgen")]
#[command(about = "Render JSON-described stylesheet trees to SCSS")]
#[command(version)]
struct Cli {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a JSON tree to an .scss file
    Build {
        /// Input .json tree
        path: PathBuf,

        /// Output file (defaults to the input path with an .scss extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Spaces per indentation level
        #[arg(long, default_value_t = 2)]
        indent: usize,

        /// Write to stdout instead of a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Validate a JSON tree and dry-run generation without writing output
    Check {
        /// Input .json tree
        path: PathBuf,
    },

    /// List the registered node types and their fields
    Types,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Build {
            path,
            output,
            indent,
            stdout,
        } => cmd_build(&path, output, indent, stdout),
        Command::Check { path } => cmd_check(&path),
        Command::Types => {
            cmd_types();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("scssgen=debug")
    } else {
        EnvFilter::try_from_env("SCSSGEN_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("scssgen=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}

fn read_tree(path: &Path) -> Result<Node> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "read tree");
    json::from_str(&source).with_context(|| format!("decoding {}", path.display()))
}

fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("scss")
}

fn cmd_build(path: &Path, output: Option<PathBuf>, indent: usize, stdout: bool) -> Result<()> {
    let tree = read_tree(path)?;
    let options = GenerateOptions::with_indent_width(indent);
    let mut scss = generate_with_options(&tree, None, &options)
        .with_context(|| format!("generating {}", path.display()))?;
    scss.push('\n');

    if stdout {
        print!("{scss}");
        return Ok(());
    }

    let out_path = output.unwrap_or_else(|| default_output_path(path));
    std::fs::write(&out_path, &scss).with_context(|| format!("writing {}", out_path.display()))?;
    tracing::info!(output = %out_path.display(), "built");
    eprintln!("Built: {}", out_path.display());
    Ok(())
}

fn cmd_check(path: &Path) -> Result<()> {
    let tree = read_tree(path)?;
    generate_with_options(&tree, None, &GenerateOptions::default())
        .with_context(|| format!("generating {}", path.display()))?;
    eprintln!("OK: {}", path.display());
    Ok(())
}

fn cmd_types() {
    for def in registry::definitions() {
        println!("{}", type_signature(def));
    }
}

/// `Declaration(property, value, important?)`
fn type_signature(def: &registry::TypeDefinition) -> String {
    let fields: Vec<String> = def
        .fields
        .iter()
        .map(|f| {
            if f.optional {
                format!("{}?", f.name)
            } else {
                f.name.to_string()
            }
        })
        .collect();
    format!("{}({})", def.name, fields.join(", "))
}
