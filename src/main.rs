//! log2life CLI - Play an access log into a Life server.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;

use log2life::{
    ingest::InputSource,
    playback::{HttpTransport, PlaybackError, Player},
    schema::PlaybackConfig,
};

#[derive(Parser, Debug)]
#[command(
    name = "log2life",
    version,
    about = "Replay web-server access logs as Life 1.05 patterns"
)]
struct Cli {
    /// Log file to play, or - to read from stdin without pacing
    #[arg(required_unless_present = "example_config")]
    logfile: Option<String>,

    /// Playback speed. 1.0 is realtime
    #[arg(long)]
    speed: Option<f64>,

    /// Width of Life world in cells
    #[arg(long, visible_alias = "width")]
    columns: Option<u32>,

    /// Height of Life world in cells
    #[arg(long, visible_alias = "height")]
    rows: Option<u32>,

    /// Life server host
    #[arg(long)]
    host: Option<String>,

    /// Life server port
    #[arg(long)]
    port: Option<u16>,

    /// Delivery timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// JSON configuration file; command-line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the default configuration as JSON and exit
    #[arg(long)]
    example_config: bool,
}

impl Cli {
    /// Defaults, then the config file, then flags.
    fn playback_config(&self) -> Result<PlaybackConfig, log2life::schema::ConfigError> {
        let mut config = match &self.config {
            Some(path) => PlaybackConfig::from_file(path)?,
            None => PlaybackConfig::default(),
        };

        if let Some(speed) = self.speed {
            config.speed = speed;
        }
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.example_config {
        print_example_config();
        return;
    }

    let mut config = cli.playback_config().unwrap_or_else(|e| {
        eprintln!("Error loading config: {}", e);
        std::process::exit(1);
    });

    let Some(logfile) = cli.logfile.as_deref() else {
        eprintln!("Usage: log2life [options] <logfile>");
        std::process::exit(1);
    };
    let source = InputSource::from_arg(logfile);

    if source.is_live() {
        // Lines fed through stdin are forwarded as they arrive
        config.speed = 0.0;
        println!(
            "Playback of {} to {}:{} in realtime",
            source, config.host, config.port
        );
    } else {
        println!(
            "Playback of {} to {}:{} at {:.1}x speed",
            source, config.host, config.port, config.speed
        );
    }

    let reader = source.open().unwrap_or_else(|e| {
        let err = PlaybackError::OpenInput {
            path: source.to_string(),
            source: e,
        };
        log::error!("{}", err);
        std::process::exit(1);
    });

    let transport = HttpTransport::new(&config).unwrap_or_else(|e| {
        log::error!("{}", e);
        std::process::exit(1);
    });

    let mut player = Player::new(&config, source.timestamp_mode(), transport, io::stdout());
    let stats = player.run(reader).unwrap_or_else(|e| {
        log::error!("{}", e);
        std::process::exit(1);
    });

    println!();
    println!("Playback complete:");
    println!("  Lines read: {}", stats.lines);
    println!("  Patterns sent: {}", stats.sent);
    println!("  Unparsable lines: {}", stats.parse_failures);
    println!("  Failed deliveries: {}", stats.delivery_failures);
}

fn print_example_config() {
    let config = PlaybackConfig::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing config: {}", e);
            std::process::exit(1);
        }
    }
}
