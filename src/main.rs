use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use appstore::app::{App, Peripherals};
use appstore::host::{FsStorage, HttpNetwork, SystemClock, TerminalDisplay, TerminalKeypad};
use appstore::logging;
use appstore::model::AppConfig;
use appstore::platform::DeviceProfile;
use appstore::remote::CatalogClient;
use appstore::store::Store;

#[derive(Parser)]
#[command(name = "appstore")]
#[command(about = "Browse and install Bruce scripts from the terminal", long_about = None)]
struct Cli {
    /// Directory standing in for the internal flash filesystem
    #[arg(long, default_value = "appstore-data/flash")]
    data_dir: PathBuf,

    /// Directory standing in for the SD card
    #[arg(long)]
    sd_dir: Option<PathBuf>,

    /// JSON file overriding the built-in configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board name matched against each script's supported devices
    #[arg(long, default_value = "m5stack-cardputer")]
    board: String,

    /// Screen width in pixels
    #[arg(long, default_value_t = 240)]
    width: i32,

    /// Screen height in pixels
    #[arg(long, default_value_t = 135)]
    height: i32,

    /// Behave as if WiFi were not connected
    #[arg(long)]
    offline: bool,

    /// Append logs to this file (filter with APPSTORE_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Delete the cached category listings and exit
    #[arg(long)]
    clear_cache: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    if cli.width <= 0 || cli.height <= 0 {
        bail!("screen size must be positive (got {}x{})", cli.width, cli.height);
    }

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    let storage = FsStorage::new(&cli.data_dir, cli.sd_dir.clone());
    let mut store = Store::detect(Box::new(storage.clone()), config.paths.clone());

    if cli.clear_cache {
        let removed = store.clear_cache();
        println!("Removed {} cached categories", removed);
        return Ok(());
    }

    let network = HttpNetwork::new(storage, !cli.offline)?;
    let client = CatalogClient::new(Box::new(network), &config);
    let device = DeviceProfile {
        board: cli.board,
        width: cli.width,
        height: cli.height,
    };

    let mut display = TerminalDisplay::enter(cli.width, cli.height)?;
    let mut keypad = TerminalKeypad;
    let clock = SystemClock::new();

    let mut app = App::new(config, store, client, device);
    app.run(&mut Peripherals {
        display: &mut display,
        keypad: &mut keypad,
        clock: &clock,
    })
}
