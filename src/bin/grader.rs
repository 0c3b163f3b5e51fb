//! Command-line grader: checks an HTML file or URL for the selectors listed
//! in a checks file and prints the results as JSON.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{ArgAction, ArgGroup, ArgMatches, CommandFactory, FromArgMatches, Parser};
use html_grader::source::assert_file_exists;
use html_grader::{grade, print_report, Error, HtmlSource, Options, CHECKSFILE_DEFAULT};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "grader",
    version,
    about = "Check an HTML document for required elements"
)]
#[command(group(ArgGroup::new("source").required(true).args(["file", "url"])))]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "check_file",
        default_value = CHECKSFILE_DEFAULT,
        help = "Path to checks.json"
    )]
    checks: PathBuf,
    #[arg(short, long, value_name = "html_file", help = "Path to html file")]
    file: Option<PathBuf>,
    #[arg(short, long, value_name = "url", help = "Url for html file")]
    url: Option<String>,
    #[arg(long, value_name = "secs", help = "HTTP timeout in seconds")]
    timeout: Option<u64>,
    #[arg(short, long, action = ArgAction::Count, help = "Log progress to stderr (-vv for per-check detail)")]
    verbose: u8,
}

impl Cli {
    /// Validate the checks path, the HTML file and the URL shape.
    ///
    /// Checks come first only when `--checks` was given on the command line
    /// ahead of `--file`/`--url`; a defaulted checks path is validated last.
    fn resolve(self, checks_first: bool) -> Result<(HtmlSource, Options), Error> {
        let (checks, source) = if checks_first {
            let checks = assert_file_exists(self.checks)?;
            (checks, html_source(self.file, self.url)?)
        } else {
            let source = html_source(self.file, self.url)?;
            (assert_file_exists(self.checks)?, source)
        };

        let options = Options {
            checks,
            timeout: self.timeout.map(Duration::from_secs),
            ..Options::default()
        };
        Ok((source, options))
    }
}

fn html_source(file: Option<PathBuf>, url: Option<String>) -> Result<HtmlSource, Error> {
    match (file, url) {
        (Some(path), None) => HtmlSource::from_file(path),
        (None, Some(url)) => HtmlSource::from_url(url),
        // the `source` group already rejects these during parsing
        _ => Cli::command()
            .error(
                ErrorKind::ArgumentConflict,
                "exactly one of --file or --url is required",
            )
            .exit(),
    }
}

/// True if `--checks` appears on the command line before the HTML source.
fn checks_listed_first(matches: &ArgMatches) -> bool {
    if matches.value_source("checks") != Some(ValueSource::CommandLine) {
        return false;
    }
    let source = matches.index_of("file").or_else(|| matches.index_of("url"));
    match (matches.index_of("checks"), source) {
        (Some(checks), Some(source)) => checks < source,
        _ => true,
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli, checks_first: bool) -> Result<(), Error> {
    let (source, options) = cli.resolve(checks_first)?;
    debug!(%source, checks = %options.checks.display(), "starting");

    let report = grade(&source, &options)?;
    print_report(&report)
}

fn main() -> ExitCode {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    init_tracing(cli.verbose);

    match run(cli, checks_listed_first(&matches)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.prints_to_stdout() {
                println!("{err}");
            } else {
                eprintln!("{err}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}
