use std::{fs::OpenOptions, path::PathBuf, process::ExitCode, sync::Arc};

use clap::Parser;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use inventory_charts::{
    DashboardOptions, ECHARTS_SRC, Error, load_chart_data, render_dashboard_page, write_dashboard,
};

/// Renders the inventory dashboard page from chart data.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the chart data JSON.
    #[arg(long)]
    input: PathBuf,

    /// File path to write the HTML page to. Prints to stdout if omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// The page title.
    #[arg(long, default_value = "Dashboard")]
    title: String,

    /// The URL to load ECharts from.
    #[arg(long, default_value = ECHARTS_SRC)]
    echarts_src: String,
}

fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Error> {
    tracing::info!("Reading chart data from {}", args.input.display());
    let data = load_chart_data(&args.input)?;

    let options = DashboardOptions {
        title: args.title,
        echarts_src: args.echarts_src,
    };
    let page = render_dashboard_page(&data, &options);

    match args.output {
        Some(path) => {
            write_dashboard(&path, &page)?;
            tracing::info!("Wrote dashboard to {}", path.display());
        }
        None => println!("{}", page.into_string()),
    }

    Ok(())
}

fn setup_logging() {
    // Logs go to stderr so the page can be piped from stdout.
    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    let log_file = OpenOptions::new().create(true).append(true).open("debug.log");

    let debug_log = match log_file {
        Ok(log_file) => Some(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_writer(Arc::new(log_file))
                .with_filter(filter::LevelFilter::DEBUG),
        ),
        Err(error) => {
            eprintln!("Could not create log file, logging to stderr only: {error}");
            None
        }
    };

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(filter::LevelFilter::INFO))
        .with(debug_log)
        .init();
}
