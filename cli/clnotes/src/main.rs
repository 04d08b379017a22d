//! clnotes — generate per-symbol version notes from the OpenCL XML registry.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;

use clnotes_gen::generate;
use clnotes_registry::{RegistrySource, SymbolKind};

#[derive(Parser)]
#[command(name = "clnotes", version, about = "OpenCL API version-note generator")]
struct Cli {
    /// Registry file path or URL (default: cl.xml)
    #[arg(long, default_value = "cl.xml")]
    registry: String,

    /// Directory for the generated .asciidoc files
    #[arg(short = 'o', long = "out-dir", default_value = ".")]
    out_dir: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let source = RegistrySource::parse(&cli.registry);
    println!("Generating version notes from: {source}");

    let registry =
        clnotes_registry::load(&source).with_context(|| format!("loading registry {source}"))?;

    // Commands get the full note form, enums the short one.
    for kind in [SymbolKind::Command, SymbolKind::Enum] {
        let report = generate(&registry, kind, &cli.out_dir)
            .with_context(|| format!("generating {kind} notes"))?;
        for warning in &report.warnings {
            println!("{warning}");
        }
        println!("{}", report.summary_line());
    }

    Ok(())
}
