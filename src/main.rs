use advmd::config::{Config, InputMode, OutputFormat};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "advmd", about = "Parse advisory analysis text into structured blocks")]
struct Cli {
    /// Input file (default: stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: json, html, text (default: from config or json)
    #[arg(short, long)]
    format: Option<String>,

    /// Treat input as a JSON response and read the analysis field from it
    #[arg(long)]
    json: bool,

    /// Field holding the analysis text in JSON input (default: analysis)
    #[arg(long)]
    field: Option<String>,

    /// Single-line JSON output
    #[arg(long)]
    compact: bool,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(cli: &Cli) -> Config {
    if let Some(ref path) = cli.config {
        return Config::load(path).unwrap_or_else(|e| die(&e.to_string()));
    }
    let defaults = ["advmd.config.json", "config/advmd.config.json"];
    for p in &defaults {
        let path = PathBuf::from(p);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            return Config::load(&path).unwrap_or_else(|e| die(&e.to_string()));
        }
    }
    Config::default()
}

fn read_input(input: Option<&PathBuf>) -> String {
    match input {
        Some(path) => fs::read_to_string(path)
            .unwrap_or_else(|e| die(&format!("cannot read {}: {}", path.display(), e))),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .unwrap_or_else(|e| die(&format!("cannot read stdin: {}", e)));
            buf
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = load_config(&cli);

    // CLI overrides
    if let Some(ref format) = cli.format {
        config.format = match format.as_str() {
            "json" => OutputFormat::Json,
            "html" => OutputFormat::Html,
            "text" => OutputFormat::Text,
            _ => die(&format!("invalid format: {}", format)),
        };
    }
    if cli.json {
        config.input = InputMode::Json;
    }
    if let Some(ref field) = cli.field {
        config.field = field.clone();
    }
    if cli.compact {
        config.pretty = false;
    }

    let text = read_input(cli.input.as_ref());
    let result = advmd::convert(&text, &config).unwrap_or_else(|e| die(&e.to_string()));

    if let Some(ref output_path) = cli.output {
        fs::write(output_path, &result)
            .unwrap_or_else(|e| die(&format!("cannot write {}: {}", output_path.display(), e)));
        tracing::info!(output = %output_path.display(), format = ?config.format, "wrote blocks");
    } else {
        print!("{}", result);
    }
}
