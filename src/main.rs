mod gui;

use anyhow::{Context, Result};
use rgb_hsi::swatch::{swatch_path, Swatch};
use rgb_hsi::{log_error, log_info, run_round_trips, Config, NamedColor, RoundTrip};
use std::path::PathBuf;

const USAGE: &str = "\
Usage: rgb-hsi [OPTIONS] [COLOR...]

Round-trips each COLOR (#RRGGBB, RRGGBB or r,g,b) through RGB -> HSI -> RGB.
Without colors, the examples from the config file are used.

Options:
  --gui               Open the interactive HSI -> RGB visualizer
  --json              Print reports as JSON
  --swatch-dir <DIR>  Save a PNG swatch of every round-tripped color
  --stream-logs       Echo log lines to stderr and write them immediately
  --init-config       Write the default config file and exit
  -h, --help          Show this message";

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    gui: bool,
    json: bool,
    stream_logs: bool,
    init_config: bool,
    help: bool,
    swatch_dir: Option<PathBuf>,
    colors: Vec<String>,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--gui" => parsed.gui = true,
                "--json" => parsed.json = true,
                "--stream-logs" => parsed.stream_logs = true,
                "--init-config" => parsed.init_config = true,
                "-h" | "--help" => parsed.help = true,
                "--swatch-dir" => {
                    let dir = args.next().context("--swatch-dir requires a directory")?;
                    parsed.swatch_dir = Some(PathBuf::from(dir));
                }
                flag if flag.starts_with("--") => anyhow::bail!("Unknown option: {}", flag),
                _ => parsed.colors.push(arg),
            }
        }

        Ok(parsed)
    }
}

fn main() -> Result<()> {
    let result = run_app();
    if let Err(ref e) = result {
        log_error!("{:#}", e);
    }
    let _ = rgb_hsi::logger::finalize_logs();
    result
}

fn run_app() -> Result<()> {
    let args = CliArgs::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = Config::new()?;

    if args.init_config {
        if config.init_default()? {
            println!("Wrote default config to {}", config.config_path().display());
        } else {
            println!("Config already exists at {}", config.config_path().display());
        }
        return Ok(());
    }

    let app_config = config.load()?;
    let streaming = args.stream_logs || app_config.stream_logs;
    rgb_hsi::logger::init_logger(config.log_dir(), "rgb-hsi", app_config.log_retention_count, streaming)?;

    log_info!("rgb-hsi {} started", env!("CARGO_PKG_VERSION"));
    if let Some(log_path) = rgb_hsi::logger::get_log_path() {
        log_info!("Log file: {}", log_path.display());
    }

    if args.gui {
        return gui::run(&app_config.visualizer);
    }

    let colors: Vec<NamedColor> = if args.colors.is_empty() {
        app_config.examples.clone()
    } else {
        args.colors.iter().map(|c| NamedColor::new(c.as_str(), c.as_str())).collect()
    };

    let reports = run_round_trips(&colors)?;
    log_info!("Converted {} colors", reports.len());

    print_reports(&reports, args.json)?;

    if let Some(dir) = args.swatch_dir {
        for report in &reports {
            let path = swatch_path(&dir, &report.name);
            Swatch::solid(report.restored, app_config.visualizer.swatch_size).save(&path)?;
            log_info!("Saved swatch {}", path.display());
        }
    }

    Ok(())
}

fn print_reports(reports: &[RoundTrip], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports).context("Failed to serialize reports")?);
    } else {
        for report in reports {
            println!("{}", report);
        }
    }
    Ok(())
}
