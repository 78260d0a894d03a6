use clap::{Parser, Subcommand};
use length::config::Config;
use length::length::{lookup_unit, DistanceProcessor};
use length::{parse_distance, Distance, DistanceFormatter, UnitSystem};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "length")]
#[command(about = "Parse, format and normalize physical distances", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Display distances in imperial units, overriding the config
    #[arg(long, global = true)]
    imperial: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a distance string (e.g. "5ft11in")
    Parse {
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Format a nanometer count
    Format {
        #[arg(allow_hyphen_values = true)]
        nanometers: f64,
    },

    /// Express a distance in a given unit (e.g. "5ft11in" cm)
    Convert {
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Unit suffix: nm, um, mm, cm, m, km, in, ft, yd, mi, ly
        unit: String,
    },

    /// Replace distance strings in a TOML file with nanometer counts
    Normalize {
        /// TOML file path
        path: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Serialize)]
struct ParseOutput<'a> {
    input: &'a str,
    nanometers: f64,
    display: String,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::empty(),
    };

    let mut formatter = DistanceFormatter::new(config.display.units);
    if cli.imperial {
        formatter.set_imperial();
    }

    match cli.command {
        Commands::Parse { input, json } => parse(&formatter, &input, json),
        Commands::Format { nanometers } => {
            println!("{}", formatter.format(Distance::from_nanometers(nanometers)));
            Ok(())
        }
        Commands::Convert { input, unit } => convert(&input, &unit),
        Commands::Normalize { path, output } => normalize(&config, &path, output.as_deref()),
    }
}

fn parse(
    formatter: &DistanceFormatter,
    input: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let distance = parse_distance(input)?;

    if json {
        let output = ParseOutput {
            input,
            nanometers: distance.as_nanometers(),
            display: formatter.format(distance),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Input: {}", input);
        println!("Nanometers: {}", distance.as_nanometers());
        println!("Display: {}", formatter.format(distance));
        if formatter.system() == UnitSystem::Metric {
            println!("Imperial: {}", length::format_distance(distance, UnitSystem::Imperial));
        } else {
            println!("Metric: {}", length::format_distance(distance, UnitSystem::Metric));
        }
    }

    Ok(())
}

fn convert(input: &str, unit: &str) -> Result<(), Box<dyn std::error::Error>> {
    let distance = parse_distance(input)?;
    let scale = lookup_unit(unit).ok_or_else(|| format!("Unknown unit '{}'", unit))?;

    println!("{}{}", distance.in_unit(scale), unit);
    Ok(())
}

fn normalize(
    config: &Config,
    path: &str,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let document: toml::Table = toml::from_str(&content)?;

    let processor = DistanceProcessor::new(&config.normalize);
    let processed = processor.process_value(&toml::Value::Table(document))?;

    let json = serde_json::to_string_pretty(&processed)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, json)?;
        println!("Normalized distances written to {}", output_path);
    } else {
        println!("{}", json);
    }

    Ok(())
}
