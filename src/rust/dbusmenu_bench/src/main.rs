use anyhow::Result;
use clap::Parser;
use dbusmenu_bench::{run, BenchOptions};
use dbusmenu_bus::{MenuAddress, MenuClient, DBUS_PATH, DBUS_SERVICE};
use tracing::level_filters::LevelFilter;

/// Time the calls a client makes to show an exported D-Bus menu.
#[derive(Parser)]
#[command(version, long_about = None)]
struct Args {
    /// Repeat the calls COUNT times and print the average of each
    #[arg(short, long, value_name = "COUNT", default_value_t = 1,
          value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Dump the replies of a single pass to stdout
    #[arg(short, long)]
    dump: bool,

    /// Bus name of the program exporting the menu
    #[arg(short = 'n', long, value_name = "NAME", default_value = DBUS_SERVICE)]
    dbus_name: String,

    /// Object path of the exported menu
    #[arg(short = 'o', long, value_name = "PATH", default_value = DBUS_PATH)]
    dbus_object: String,
}

/// Logs to stderr, at the level named by `RUST_LOG` (WARN by default).
fn set_console_logging() -> Result<()> {
    let level = if let Ok(level) = std::env::var("RUST_LOG") {
        match level.to_lowercase().as_str() {
            "trace" => LevelFilter::TRACE,
            "debug" => LevelFilter::DEBUG,
            "info" => LevelFilter::INFO,
            "warn" => LevelFilter::WARN,
            "error" => LevelFilter::ERROR,
            _ => LevelFilter::WARN,
        }
    } else {
        LevelFilter::WARN
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
pub async fn main() -> Result<()> {
    let args = Args::parse();
    set_console_logging()?;

    let address = MenuAddress {
        service: args.dbus_name,
        path: args.dbus_object,
    };
    let menu = MenuClient::connect(&address).await?;
    let options = BenchOptions {
        count: args.count,
        dump: args.dump,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&menu, &options, &mut out).await?;
    Ok(())
}
