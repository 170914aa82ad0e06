use hampath::{
    fs::{GraphRecord, OutputFormat, RecordError, RecordReader, ResultRow, ResultWriter},
    search::{ExhaustiveSearch, PathSearch},
    statistics::Stats,
};
use clap::Parser;
use std::{path::PathBuf, process::ExitCode};
use tqdm::tqdm;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Hamiltonian path checker for small graphs
#[derive(Parser, Debug)]
#[command(name = "hampath")]
#[command(about = "Decides, by exhaustive search, which graphs in a record file admit a Hamiltonian path", long_about = None)]
struct Args {
    /// Path to the graph records file
    #[arg(short, long, default_value = "graphs.csv")]
    input: PathBuf,

    /// Path of the results file to create
    #[arg(short, long, default_value = "results.csv")]
    output: PathBuf,

    /// Layout of the results file
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Show a progress bar over the records
    #[arg(long)]
    progress: bool,

    /// Do not print the per-graph report to stdout
    #[arg(short, long)]
    quiet: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<Stats, RecordError> {
    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        format = ?args.format,
        "searching graphs"
    );

    let reader = RecordReader::open(&args.input)?;
    let records: Box<dyn Iterator<Item = Result<GraphRecord, RecordError>>> = if args.progress {
        Box::new(tqdm(reader).desc(Some("graphs")))
    } else {
        Box::new(reader)
    };

    let mut writer = ResultWriter::create(&args.output, args.format)?;
    let mut stats = Stats::new();
    let engine = ExhaustiveSearch;

    for record in records {
        let GraphRecord { header, graph, .. } = record?;

        if graph.dangling_arcs() > 0 {
            warn!(
                case = %header.case,
                dangling = graph.dangling_arcs(),
                "arcs reference vertices missing from the vertex list; they are never traversed"
            );
        }
        if graph.has_repeated_vertices() {
            warn!(case = %header.case, "vertex list repeats a name; each occurrence is visited separately");
        }

        let result = engine.search(&graph, &mut stats);
        let row = ResultRow::new(&header, &graph, &result);
        writer.write_row(&row)?;

        if !row.matches_expected() {
            stats.bump_label_mismatches();
            warn!(
                case = %row.case,
                found = row.found,
                expected = row.expected,
                "search result disagrees with the expected label"
            );
        }
        if !args.quiet {
            println!("{row}");
        }
    }

    writer.finish()?;
    Ok(stats)
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(stats) => {
            println!("\n==========");
            stats.dump();
            println!("==========");
            info!(
                graphs = stats.get_searches(),
                mismatches = stats.get_label_mismatches(),
                "all graphs searched"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "run aborted");
            ExitCode::FAILURE
        }
    }
}
