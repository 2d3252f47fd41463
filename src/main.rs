use clap::{Args, Parser, Subcommand};
use eyre::WrapErr;
use radec_catalog::astro_math::{degrees_to_sexagesimal, hours_to_sexagesimal};
use radec_catalog::catalog::{Fetch, HttpFetcher};
use radec_catalog::dss::DssDownloader;
use radec_catalog::export::export_field;
use radec_catalog::radec::RadecWriter;
use radec_catalog::validation::{parse_object_id, FormFields};
use radec_catalog::{CatalogRegistry, CatalogType, Config, Query, SimbadResult};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(version, about = "Catalog queries for radec aperture files")]
struct Cli {
    /// Configuration file, created with defaults if missing
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up an identifier in SIMBAD
    Resolve { object: String },
    /// Query a catalog around a target and write its radec file
    Radec(RadecArgs),
}

#[derive(Args)]
struct RadecArgs {
    #[arg(long)]
    object: Option<String>,
    /// HH:MM:SS.ss
    #[arg(long, allow_hyphen_values = true)]
    ra: Option<String>,
    /// ±DD:MM:SS.ss
    #[arg(long, allow_hyphen_values = true)]
    dec: Option<String>,
    /// Field of view in arcminutes
    #[arg(long)]
    fov: Option<String>,
    #[arg(long)]
    mag_limit: Option<String>,
    #[arg(long)]
    band: Option<String>,
    /// SIMBAD, VSP, APASS or DSS
    #[arg(long)]
    catalog: Option<CatalogType>,
    /// Take the target position from SIMBAD instead of --ra/--dec
    #[arg(long)]
    resolve: bool,
    /// Also download the DSS image of the field
    #[arg(long)]
    dss: bool,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config: Config = confy::load_path(&cli.config)
        .wrap_err_with(|| format!("Couldn't parse configuration {}", cli.config.display()))?;

    let fetcher: Arc<dyn Fetch> = Arc::new(
        HttpFetcher::builder()
            .with_timeout(config.catalog_settings.timeout())
            .build()?,
    );
    let registry = CatalogRegistry::with_fetcher(&config.catalog_settings, fetcher.clone());

    match cli.command {
        Command::Resolve { object } => {
            let query = Query {
                object_id: parse_object_id(&object)?,
                catalog_type: CatalogType::Simbad,
                ..config.default_query.clone()
            };
            let target = resolve(&registry, &query).await?;
            print_target(&target);
        }
        Command::Radec(args) => radec(&config, &registry, fetcher, args).await?,
    }

    Ok(())
}

async fn resolve(registry: &CatalogRegistry, query: &Query) -> eyre::Result<SimbadResult> {
    let target = registry.run_query(query).await?.into_target()?;
    info!("Resolved {} as {}", target.object_id, target.simbad_id);
    Ok(target)
}

async fn radec(
    config: &Config,
    registry: &CatalogRegistry,
    fetcher: Arc<dyn Fetch>,
    args: RadecArgs,
) -> eyre::Result<()> {
    let defaults = config.default_query.clone().validated()?;
    let fields = FormFields {
        object_id: args.object,
        ra: args.ra,
        dec: args.dec,
        fov: args.fov,
        mag_limit: args.mag_limit,
        mag_band: args.band,
        catalog: args.catalog,
    };
    let mut query = fields.into_query(&defaults)?;

    if args.resolve {
        let target = resolve(registry, &query.with_catalog(CatalogType::Simbad)).await?;
        print_target(&target);
        query = query.with_position(target.ra_hr, target.dec_deg)?;
    }

    let output = &config.output_settings;
    let writer = RadecWriter::new(&output.directory);
    let downloader = (args.dss || output.download_dss || query.catalog_type == CatalogType::Dss)
        .then(|| {
            DssDownloader::new(
                config.catalog_settings.skyview_url.clone(),
                &output.directory,
                fetcher,
            )
        });

    for outcome in export_field(registry, &writer, downloader.as_ref(), &query).await? {
        println!("{}", outcome);
    }

    Ok(())
}

fn print_target(target: &SimbadResult) {
    let mag = |m: Option<f64>| m.map_or_else(|| "--".to_string(), |m| format!("{:.2}", m));
    println!("{} ({})", target.simbad_id, target.object_id);
    println!(
        "  RA {}  Dec {}",
        hours_to_sexagesimal(target.ra_hr),
        degrees_to_sexagesimal(target.dec_deg)
    );
    println!(
        "  B {}  V {}  R {}  I {}",
        mag(target.mag_b),
        mag(target.mag_v),
        mag(target.mag_r),
        mag(target.mag_i)
    );
}
