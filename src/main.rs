use std::env;
use std::error::Error;

use log::LevelFilter;

use fast_apriori::config::Config;
use fast_apriori::{mine, report, CsvRecordSource, RuleThresholds};

fn setup_logger() -> Result<(), fern::InitError> {
    // Configure the logger
    fern::Dispatch::new()
        // Format the logs
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        // Set the default log level
        .level(LevelFilter::Info)
        // Add stderr logging, keeping stdout for the result listing
        .chain(std::io::stderr())
        // Apply the configuration
        .apply()?;
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = Config::new(env::args())?;

    let records = match config.get_input() {
        Some(path) => CsvRecordSource::open(path)?.records()?,
        None => CsvRecordSource::stdin().records()?,
    };

    let thresholds = RuleThresholds::new(config.get_min_confidence())
        .with_min_lift(config.get_min_lift())
        .with_min_conviction(config.get_min_conviction());
    let (items, rules) = mine(records, config.get_min_support(), &thresholds)?;

    print!(
        "{}",
        report::format_results(&items, &rules, config.get_order())
    );
    Ok(())
}

fn main() {
    setup_logger().expect("Failed to initialize logger");
    if let Err(err) = run() {
        eprintln!("fast_apriori: {}", err);
        std::process::exit(1);
    }
}
