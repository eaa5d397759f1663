use anyhow::anyhow;
use clap::{Args, Parser, Subcommand};
use drive_distance::config::{self, Config};
use drive_distance::location::GeocoderKind;
use drive_distance::{output, BatchRunner};
use std::io;
use std::path::PathBuf;

/// drivedist: driving distance and duration between places
///
/// Geocodes place names (Nominatim or ArcGIS) and routes them with OSRM.
///
/// Examples:
///   drivedist batch --destination "San Jose, CA"
///   drivedist batch --cities data/cities_test.json --no-csv
///   drivedist distance "Fresno, CA" "San Jose, CA"
///   drivedist --provider arcgis geocode "1600 Amphitheatre Parkway, Mountain View, CA"
#[derive(Parser)]
#[command(name = "drivedist", version, about, long_about = None)]
struct Cli {
    /// Config file (TOML). Defaults to ./config.toml, then the user config dir.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Geocoding provider: "nominatim" or "arcgis". Overrides the config.
    #[arg(long, global = true, value_parser = parse_provider)]
    provider: Option<GeocoderKind>,

    /// Debug logging (request URLs, per-pair results).
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Route every place in the list to one destination (default command).
    Batch(BatchArgs),

    /// Driving distance for a single pair.
    Distance {
        origin: String,
        destination: String,

        /// Print the record as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the matched address and coordinate for a place name.
    Geocode { name: String },
}

#[derive(Args, Default)]
struct BatchArgs {
    /// Destination place. Overrides [general] destination.
    #[arg(long)]
    destination: Option<String>,

    /// JSON array of origin names. Overrides [general] cities_file.
    #[arg(long)]
    cities: Option<PathBuf>,

    /// Directory for the CSV file. Overrides [general] output_dir.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Skip writing the CSV file.
    #[arg(long)]
    no_csv: bool,

    /// Print records as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn parse_provider(s: &str) -> Result<GeocoderKind, String> {
    s.parse()
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = format!("warn,drive_distance={level},drivedist={level}");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(provider) = cli.provider {
        config.geocoder.provider = provider;
    }

    match cli.command.unwrap_or_else(|| Command::Batch(BatchArgs::default())) {
        Command::Batch(args) => batch(config, args),
        Command::Distance { origin, destination, json } => distance(&config, &origin, &destination, json),
        Command::Geocode { name } => geocode(&config, &name),
    }
}

fn batch(mut config: Config, args: BatchArgs) -> anyhow::Result<()> {
    if let Some(destination) = args.destination {
        config.general.destination = Some(destination);
    }
    if let Some(cities) = args.cities {
        config.general.cities_file = cities;
    }
    if let Some(dir) = args.output_dir {
        config.general.output_dir = dir;
    }

    let destination = config.destination()?.to_string();
    let origins = config::load_place_list(&config.general.cities_file)?;

    config.log();
    log::info!(
        "Routing {} origins from {} to '{}'",
        origins.len(),
        config.general.cities_file.display(),
        destination
    );

    let resolver = config.build_resolver();
    let report = BatchRunner::new(&resolver).run(&origins, &destination);

    if args.json {
        output::write_json(io::stdout().lock(), &report.records)?;
    } else {
        output::write_console(io::stdout().lock(), &report.records)?;
    }

    if !args.no_csv {
        let path = output::write_csv_file(&config.general.output_dir, &destination, &report.records)?;
        log::info!("Wrote {} rows to {}", report.records.len(), path.display());
    }

    Ok(())
}

fn distance(config: &Config, origin: &str, destination: &str, json: bool) -> anyhow::Result<()> {
    let resolver = config.build_resolver();
    let record = resolver
        .resolve(origin, destination)
        .map_err(|f| anyhow!("[{}] {}", f.stage(), f))?;

    if json {
        output::write_json(io::stdout().lock(), std::slice::from_ref(&record))?;
    } else {
        output::write_console(io::stdout().lock(), std::slice::from_ref(&record))?;
    }
    Ok(())
}

fn geocode(config: &Config, name: &str) -> anyhow::Result<()> {
    let client = config.build_geocoder();
    let found = client.lookup(name)?;

    eprintln!("  {} via {}", name, client.provider_name());
    if let Some(address) = &found.display_name {
        println!("{}", address);
    }
    println!("{}", found.coordinate);
    Ok(())
}
