use std::{path::PathBuf, process::ExitCode, time::Duration};

use clap::Parser;
use fetch::{RetryPolicy, Source};
use grader::{logger, report, Checks, Config, Error};
use log::error;
use url::Url;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to checks.json
    #[arg(short, long, value_name = "CHECK_FILE", default_value = grader::DEFAULT_CHECKS_FILE)]
    checks: PathBuf,

    /// Path to index.html
    ///
    /// Takes precedence over --url when both are given.
    #[arg(short, long, value_name = "HTML_FILE")]
    file: Option<PathBuf>,

    /// URL to validate
    #[arg(short, long, value_name = "URL")]
    url: Option<Url>,

    /// milliseconds to wait before retrying a failed fetch
    #[arg(long, value_name = "MS", default_value_t = 5000)]
    retry_delay: u64,

    /// how many times a failed fetch is retried
    #[arg(long, value_name = "N", default_value_t = 1)]
    retries: u32,

    /// log more to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            checks_file: self.checks.clone(),
            retry: RetryPolicy::new(self.retries, Duration::from_millis(self.retry_delay)),
            ..Config::default()
        }
    }
}

async fn try_main(args: Args) -> Result<(), Error> {
    let cfg = args.config();
    let checks = Checks::load(&cfg.checks_file)?;
    let source = Source::from_args(args.file, args.url).ok_or(Error::Usage)?;
    let cx = cfg.fetch_context()?;
    let report = grader::run(&cx, &checks, &source).await?;
    report::write(&report, std::io::stdout().lock()).map_err(Error::Output)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = logger::init(args.verbose) {
        eprintln!("could not set up logging: {e}");
    }
    match try_main(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
