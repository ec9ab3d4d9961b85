use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    Clock, InMemoryProvider, ProviderConfig, QuestionProvider, QuizLoopService,
    TriviaApiProvider,
};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    InvalidBaseUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => {
                write!(f, "invalid {flag} value: {raw} (expected a positive integer)")
            }
            ArgsError::InvalidBaseUrl { raw } => write!(f, "invalid --base-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn require_positive(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<usize, ArgsError> {
    let raw = require_value(args, flag)?;
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ArgsError::InvalidNumber { flag, raw }),
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--base-url <url>] [--limit <n>] [--timeout-secs <n>]");
    eprintln!("                      [--attempts <n>] [--offline]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --base-url https://the-trivia-api.com/v2");
    eprintln!("  --limit 10  --timeout-secs 10  --attempts 3");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_API_BASE_URL, QUIZ_BATCH_SIZE, QUIZ_FETCH_TIMEOUT_SECS, QUIZ_FETCH_ATTEMPTS");
    eprintln!("  RUST_LOG (default: info)");
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    provider: ProviderConfig,
    offline: bool,
}

impl Args {
    /// CLI flags layered over the environment-derived config.
    fn parse(
        base: ProviderConfig,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Option<Self>, ArgsError> {
        let mut provider = base;
        let mut offline = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--base-url" => {
                    let value = require_value(args, "--base-url")?;
                    let trimmed = value.trim();
                    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
                        return Err(ArgsError::InvalidBaseUrl { raw: value });
                    }
                    provider.base_url = trimmed.to_string();
                }
                "--limit" => provider.batch_size = require_positive(args, "--limit")?,
                "--timeout-secs" => {
                    let secs = require_positive(args, "--timeout-secs")?;
                    provider.fetch_timeout =
                        Duration::from_secs(u64::try_from(secs).unwrap_or(u64::MAX));
                }
                "--attempts" => provider.fetch_attempts = require_positive(args, "--attempts")?,
                "--offline" => offline = true,
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self { provider, offline }))
    }
}

struct DesktopApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Keep whichever global subscriber was installed first.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn build_quiz_loop(args: &Args) -> QuizLoopService {
    let provider: Arc<dyn QuestionProvider> = if args.offline {
        Arc::new(InMemoryProvider::sample())
    } else {
        Arc::new(TriviaApiProvider::from_config(&args.provider))
    };
    QuizLoopService::from_config(Clock::system(), provider, &args.provider)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let Some(args) = Args::parse(ProviderConfig::from_env(), &mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?
    else {
        print_usage();
        return Ok(());
    };

    init_tracing();
    tracing::info!(
        base_url = %args.provider.base_url,
        batch_size = args.provider.batch_size,
        offline = args.offline,
        "starting trivia quiz"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_loop: Arc::new(build_quiz_loop(&args)),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Trivia Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
