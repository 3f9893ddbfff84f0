use clap::Parser;
use csvsel::config::Config;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "csvsel", about = "Select and display fields from pipe-delimited CSV files")]
struct Cli {
    /// Input file (default: from config or data.csv)
    input: Option<PathBuf>,

    /// Field to display, in order (repeatable; default: from config)
    #[arg(short, long = "field")]
    fields: Vec<String>,

    /// Field delimiter (default: '|')
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn load_config(path: &PathBuf) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| die(&format!("cannot read config: {}", e)));
    serde_json::from_str(&text).unwrap_or_else(|e| die(&format!("invalid config JSON: {}", e)))
}

// CLI flags win over loaded config values; absent flags leave them alone.
fn apply_overrides(cli: Cli, config: &mut Config) {
    if let Some(input) = cli.input {
        config.input = input;
    }
    if !cli.fields.is_empty() {
        config.display_headers = cli.fields;
    }
    if let Some(d) = cli.delimiter {
        config.delimiter = d;
    }
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let mut config = if let Some(ref config_path) = cli.config {
        load_config(config_path)
    } else {
        let defaults = ["csvsel.config.json", "config/csvsel.config.json"];
        let mut loaded = None;
        for p in &defaults {
            let path = PathBuf::from(p);
            if path.is_file() {
                loaded = Some(load_config(&path));
                break;
            }
        }
        loaded.unwrap_or_default()
    };

    apply_overrides(cli, &mut config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = csvsel::run(&config, &mut out) {
        die(&e.to_string());
    }
}
