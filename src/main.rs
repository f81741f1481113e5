use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use mycity::catalog::{CategoryRegistry, StaticCatalog};
use mycity::config::Config;
use mycity::navigation::NavigationTarget;
use mycity::shutdown::ShutdownHandle;
use mycity::ui::app::App;
use mycity::ui::screen::ScreenModel;

/// Browse a city's restaurants, parks, hotels, supermarkets and gas stations.
#[derive(Debug, Parser)]
#[command(name = "mycity", version, about)]
struct Cli {
    /// Config file (default: <config_dir>/mycity/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Catalog file to use instead of the configured or bundled one
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Open at a route, e.g. "item_detail/Parques/0"
    #[arg(long, value_name = "ROUTE")]
    route: Option<String>,

    /// Print the screen for the route and exit
    #[arg(long)]
    print: bool,

    /// With --print, emit the screen as JSON
    #[arg(long, requires = "print")]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Logging is best-effort: a read-only cache dir must not block browsing.
    if let Err(err) = mycity::logging::init_tracing(&config.logging) {
        if !cli.print {
            eprintln!("Warning: logging disabled: {err:#}");
        }
    }

    let catalog_path = cli.catalog.clone().or_else(|| config.catalog.path.clone());
    let catalog = match &catalog_path {
        Some(path) => StaticCatalog::from_path(path)?,
        None => StaticCatalog::bundled()?,
    };
    let registry = Arc::new(CategoryRegistry::load(catalog).context("Failed to load catalog")?);

    let target = match &cli.route {
        Some(route) => route
            .parse::<NavigationTarget>()
            .with_context(|| format!("Invalid route '{route}'"))?,
        None => config.start_target()?,
    };

    if cli.print {
        let screen = ScreenModel::resolve(&registry, &target);
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&screen)?);
        } else {
            print!("{screen}");
        }
        return Ok(());
    }

    let shutdown = ShutdownHandle::new();
    shutdown
        .register_signals()
        .context("Failed to register signal handlers")?;

    let mut app = App::with_start(registry, target);
    app.set_show_icons(config.ui.show_icons);
    mycity::ui::runtime::run(app, config.ui.tick_rate(), shutdown)?;
    Ok(())
}
