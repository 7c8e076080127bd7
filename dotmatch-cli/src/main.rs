use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use dotmatch_core::io::read_sequence_file;
use dotmatch_core::{compare, MatchSet, Sequence};

mod render;
use render::PlotConfig;

#[derive(Parser)]
#[command(name = "dotmatch")]
#[command(about = "dotmatch - exact-match dot plots for DNA sequences")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two sequences and render an SVG dot plot
    Plot {
        /// Reference sequence file (plain residues or FASTA, optionally gzipped)
        #[arg(short, long)]
        reference: PathBuf,

        /// Query sequence file (plain residues or FASTA, optionally gzipped)
        #[arg(short, long)]
        query: PathBuf,

        /// Match window length
        #[arg(short)]
        k: usize,

        /// Output SVG file
        #[arg(short, long)]
        output: PathBuf,

        /// Image width in pixels
        #[arg(long, default_value = "900")]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value = "900")]
        height: u32,
    },

    /// Compare two sequences and write the raw hit set
    Hits {
        /// Reference sequence file (plain residues or FASTA, optionally gzipped)
        #[arg(short, long)]
        reference: PathBuf,

        /// Query sequence file (plain residues or FASTA, optionally gzipped)
        #[arg(short, long)]
        query: PathBuf,

        /// Match window length
        #[arg(short)]
        k: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "tsv")]
        format: HitFormat,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Reverse-complement a sequence file and write it as FASTA
    Revcom {
        /// Input sequence file (plain residues or FASTA, optionally gzipped)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HitFormat {
    Tsv,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Plot {
            reference,
            query,
            k,
            output,
            width,
            height,
        } => cmd_plot(reference, query, k, output, width, height),
        Commands::Hits {
            reference,
            query,
            k,
            format,
            output,
        } => cmd_hits(reference, query, k, format, output),
        Commands::Revcom { input, output } => cmd_revcom(input, output),
    }
}

fn cmd_plot(
    reference: PathBuf,
    query: PathBuf,
    k: usize,
    output: PathBuf,
    width: u32,
    height: u32,
) -> Result<()> {
    let (reference, query) = load_pair(&reference, &query)?;
    let matches = run_comparison(&reference, &query, k)?;

    let config = PlotConfig {
        width,
        height,
        ..Default::default()
    };
    let svg = render::render_svg(&config, &reference, &query, &matches);
    fs::write(&output, svg).with_context(|| format!("failed to write {}", output.display()))?;
    log::info!("Wrote {}", output.display());
    Ok(())
}

fn cmd_hits(
    reference: PathBuf,
    query: PathBuf,
    k: usize,
    format: HitFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let (reference, query) = load_pair(&reference, &query)?;
    let matches = run_comparison(&reference, &query, k)?;

    let rendered = match format {
        HitFormat::Tsv => hits_to_tsv(&matches),
        HitFormat::Json => {
            let mut json = serde_json::to_string_pretty(&matches)?;
            json.push('\n');
            json
        }
    };
    write_output(output.as_deref(), &rendered)
}

fn cmd_revcom(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let sequence = read_sequence_file(&input, "sequence")
        .with_context(|| format!("failed to read {}", input.display()))?;
    let revcom = sequence.reverse_complement();
    log::info!("Reverse-complemented '{}' ({} bp)", revcom.id(), revcom.len());
    write_output(output.as_deref(), &to_fasta(&revcom))
}

fn load_pair(reference: &Path, query: &Path) -> Result<(Sequence, Sequence)> {
    let reference = read_sequence_file(reference, "reference")
        .with_context(|| format!("failed to read reference {}", reference.display()))?;
    let query = read_sequence_file(query, "query")
        .with_context(|| format!("failed to read query {}", query.display()))?;
    Ok((reference, query))
}

fn run_comparison(reference: &Sequence, query: &Sequence, k: usize) -> Result<MatchSet> {
    log::info!(
        "Comparing '{}' ({} bp) against '{}' ({} bp) with k = {}",
        reference.id(),
        reference.len(),
        query.id(),
        query.len(),
        k
    );
    let matches = compare(reference, query, k)?;
    log::info!(
        "{} forward and {} reverse hits",
        matches.forward.len(),
        matches.reverse.len()
    );
    Ok(matches)
}

fn hits_to_tsv(matches: &MatchSet) -> String {
    let mut out = String::from("ref_start\tref_end\tquery_start\tquery_end\tstrand\n");
    for hit in matches.iter() {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            hit.ref_start,
            hit.ref_end(),
            hit.query_start,
            hit.query_end(),
            char::from(hit.strand)
        );
    }
    out
}

fn to_fasta(sequence: &Sequence) -> String {
    let mut out = format!(">{}\n", sequence.id());
    let residues = sequence.residues();
    let mut start = 0;
    while start < residues.len() {
        let end = (start + 80).min(residues.len());
        out.push_str(&residues[start..end]);
        out.push('\n');
        start = end;
    }
    out
}

fn write_output(path: Option<&Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, contents)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{}", contents),
    }
    Ok(())
}
