use anyhow::Context;
use clap::{Parser, Subcommand};
use scan_result::tools::{format_table, read_values};
use scan_result::utils::timestamp::{parse_timestamp, render_timestamp};
use scan_result::{classify, display_value, render_display_values, symbology_label};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scantool", version, about = "Scan result inspection tools")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a decoded value and show its display form
    Classify {
        #[arg(long)]
        text: String,
    },
    /// Print the label for a symbology token
    Label {
        #[arg(long)]
        format: String,
    },
    /// Render display values, one escaped value per line
    Render {
        /// Input file (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// List every known symbology token and its label
    Formats,
    /// Format an ISO-8601 history timestamp for display
    Timestamp {
        #[arg(long)]
        value: String,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Classify { text } => classify_cmd(&text),
        Command::Label { format } => label_cmd(&format),
        Command::Render { input } => render_cmd(input)?,
        Command::Formats => formats_cmd(),
        Command::Timestamp { value } => timestamp_cmd(&value)?,
    }
    Ok(())
}

fn classify_cmd(text: &str) {
    let kind = classify(text);
    println!("kind: {}", kind.as_str());
    println!("link: {}", kind.is_link());
    println!("display: {}", display_value(text));
}

fn label_cmd(format: &str) {
    let label = symbology_label(format);
    if label.is_empty() {
        tracing::info!(format, "no label for symbology");
    } else {
        println!("{}", label);
    }
}

fn render_cmd(input: Option<PathBuf>) -> anyhow::Result<()> {
    let values = read_values(input.as_deref()).with_context(|| match &input {
        Some(path) => format!("failed to read values from {}", path.display()),
        None => "failed to read values from stdin".to_string(),
    })?;
    tracing::debug!(count = values.len(), "rendering values");
    for shown in render_display_values(&values) {
        println!("{}", shown);
    }
    Ok(())
}

fn formats_cmd() {
    let table = format_table();
    let width = table.iter().map(|(token, _)| token.len()).max().unwrap_or(0);
    for (token, label) in table {
        println!("{:<width$}  {}", token, label, width = width);
    }
}

fn timestamp_cmd(value: &str) -> anyhow::Result<()> {
    let dt = parse_timestamp(value)?;
    println!("{}", render_timestamp(&dt));
    Ok(())
}
