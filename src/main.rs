use anyhow::Result;
use clap::Parser;
use georoute::client::RoutingClient;
use georoute::config::{self, Settings};
use georoute::domain::Coordinate;

/// georoute - geocoding, driving routes, and IP-based location
///
/// Talks to public OSM services: Nominatim for geocoding and the OSRM demo
/// server for routing. Those services require a User-Agent with contact
/// info; set one via --contact or GEOROUTE_CONTACT before real use.
///
/// Examples:
///   georoute geocode "Berlin Hbf"
///   georoute route --from "52.3759,10.5268" "Berlin"
///   georoute locate
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Contact e-mail embedded in the User-Agent (also via GEOROUTE_CONTACT)
    #[arg(
        long,
        env = "GEOROUTE_CONTACT",
        value_name = "EMAIL",
        global = true
    )]
    contact: Option<String>,

    /// Geocoding service base URL (defaults to the public Nominatim instance)
    #[arg(long = "geocode-url", value_name = "URL", global = true)]
    geocode_url: Option<String>,

    /// Routing service base URL (defaults to the public OSRM demo server)
    #[arg(long = "route-url", value_name = "URL", global = true)]
    route_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Resolve a free-text place name to coordinates
    Geocode(GeocodeArgs),

    /// Compute a driving route from an origin to a destination
    Route(RouteArgs),

    /// Approximate the current location from the public IP address
    Locate,
}

#[derive(clap::Args, Debug)]
struct GeocodeArgs {
    /// Free-text query, e.g. "Berlin Hbf"
    #[arg(value_name = "QUERY")]
    query: String,
}

#[derive(clap::Args, Debug)]
struct RouteArgs {
    /// Origin as "lat,lon"
    #[arg(long, value_name = "LAT,LON")]
    from: String,

    /// Destination place name, geocoded first
    #[arg(value_name = "QUERY")]
    to: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut settings = Settings::default();
    if let Some(contact) = &cli.contact {
        settings.user_agent = config::user_agent(contact);
    }
    if let Some(url) = cli.geocode_url {
        settings.endpoints.geocode_base = url;
    }
    if let Some(url) = cli.route_url {
        settings.endpoints.route_base = url;
    }

    let client = RoutingClient::new(settings)?;

    match cli.command {
        Commands::Geocode(args) => {
            let coord = client.geocode(&args.query).await?;
            println!("{:.6}, {:.6}", coord.lat, coord.lon);
        }
        Commands::Route(args) => {
            let origin = parse_latlon(&args.from)?;
            let destination = client.geocode(&args.to).await?;
            let result = client.route(origin, destination).await?;
            println!("Distance: {:.1} km", result.distance_m / 1000.0);
            println!("Duration: {:.0} min", result.duration_s / 60.0);
            println!("Points:   {}", result.path.len());
        }
        Commands::Locate => {
            let coord = client.ip_lookup().await?;
            println!("{:.6}, {:.6}", coord.lat, coord.lon);
        }
    }
    Ok(())
}

fn parse_latlon(input: &str) -> Result<Coordinate> {
    let (lat, lon) = input
        .split_once(',')
        .ok_or_else(|| anyhow::anyhow!("expected LAT,LON, got '{}'", input))?;
    let lat: f64 = lat.trim().parse()?;
    let lon: f64 = lon.trim().parse()?;
    Coordinate::new(lat, lon).ok_or_else(|| anyhow::anyhow!("coordinate out of range: {}", input))
}
