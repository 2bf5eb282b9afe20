use anyhow::Result;
use clap::{ArgAction, ArgGroup, CommandFactory, Parser};
use porcelain::areas::repository::Repository;
use porcelain::artifacts::core::PorcelainError;
use porcelain::config::{Config, DEFAULT_LOG_FILE, LogConfig, LogTarget, OutputMode};
use std::path::PathBuf;
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const COMMIT: Option<&str> = option_env!("PORCELAIN_COMMIT");
const BUILD_DATE: Option<&str> = option_env!("PORCELAIN_BUILD_DATE");

#[derive(Parser)]
#[command(
    name = "porcelain",
    about = "Git status for your shell prompt",
    long_about = "Prints a one-line summary of the git repository in the current directory, \
    meant to be embedded in a shell prompt. Outside of a repository there is no output.",
    disable_version_flag = true,
    help_template = r"
{name} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
    group(ArgGroup::new("mode").args(["bash", "zsh", "tmux", "no_color"]).multiple(false))
)]
struct Cli {
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true",
        help = "Print formatted output (default)"
    )]
    fmt: bool,
    #[arg(long, help = "Escape formatted output for bash")]
    bash: bool,
    #[arg(long, help = "Escape formatted output for zsh")]
    zsh: bool,
    #[arg(long, help = "Escape formatted output for tmux")]
    tmux: bool,
    #[arg(long = "no-color", help = "Print formatted output without color codes")]
    no_color: bool,
    #[arg(long, value_name = "DIR", help = "Show output for path instead of the working directory")]
    path: Option<PathBuf>,
    #[arg(long, help = "Write logs to the log file")]
    debug: bool,
    #[arg(long = "log-to-stderr", help = "Write logs to stderr instead of the log file")]
    log_to_stderr: bool,
    #[arg(long = "log-file", value_name = "FILE", default_value = DEFAULT_LOG_FILE, help = "Log file used with --debug")]
    log_file: PathBuf,
    #[arg(long, help = "Print version and exit")]
    version: bool,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        if self.no_color {
            OutputMode::NoColor
        } else if self.bash {
            OutputMode::Bash
        } else if self.zsh {
            OutputMode::Zsh
        } else if self.tmux {
            OutputMode::Tmux
        } else {
            OutputMode::Plain
        }
    }

    fn into_config(self) -> Result<Config> {
        let work_dir = match self.path {
            Some(ref path) => path.clone(),
            None => std::env::current_dir()?,
        };
        let target = if self.log_to_stderr {
            LogTarget::Stderr
        } else {
            LogTarget::File(self.log_file.clone())
        };

        Ok(Config {
            work_dir,
            mode: self.output_mode(),
            log: LogConfig {
                enabled: self.debug,
                target,
            },
        })
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help is reported through the error path as well
            return match err.print() {
                Ok(()) if !err.use_stderr() => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    if cli.version {
        println!(
            "porcelain version {} ({})\nbuilt {}",
            VERSION,
            COMMIT.unwrap_or("unknown"),
            BUILD_DATE.unwrap_or("unknown")
        );
        return ExitCode::SUCCESS;
    }

    if !cli.fmt {
        // the exit status is a failure whether or not the usage could be written
        Cli::command().print_help().ok();
        println!("\nOutside of a repository there will be no output.");
        return ExitCode::FAILURE;
    }

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = porcelain::logging::init(&config.log) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_not_a_repository(&err) => {
            tracing::info!("{err}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    tracing::debug!(?config, "starting");

    let options = config.render_options();
    if options.color {
        // the prompt is captured by the shell, so stdout is never a terminal
        colored::control::set_override(true);
    }

    let repository = Repository::new(&config.work_dir, Box::new(std::io::stdout()))?;
    repository.prompt(options)
}

fn is_not_a_repository(err: &anyhow::Error) -> bool {
    err.downcast_ref::<PorcelainError>()
        .is_some_and(PorcelainError::is_not_a_repository)
}
