use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use screen::config::{self, ConfigSource, OutputFormat, ScreenConfig, CONFIG_ENV, CONFIG_FILE};
use screen::render;
use screen::ScreenSession;
use screen_form::{assess, FormInput};
use screen_model::ModelSet;
use screen_schema::{Domain, Mode};

#[derive(Debug, Parser)]
#[command(
    name = "screen",
    version,
    about = "Diabetes, heart disease and Parkinson's risk screens backed by pre-trained classifiers",
    long_about = "screen collects a handful of health measurements, assembles them in the order\n\
        each model was trained on and reports the model's finding.\n\n\
        Results are illustrative and are not a medical diagnosis.\n\n\
        EXAMPLES:\n\
        \n  screen check diabetes --set glucose=150 --set bmi=32.5 --set age=45\n\
        \n  screen check heart --mode advanced --set sex=Male --set thallium=\"Fixed defect\"\n\
        \n  screen fields parkinsons --mode advanced\n\
        \n  screen                                     Start the interactive session"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to screen.toml (defaults to $SCREEN_CONFIG, then ./screen.toml)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fill in a screen and run its assessment
    #[command(
        about = "Fill in a screen and run its assessment",
        long_about = "Runs one screen's assessment with the given field values.\n\n\
            Fields not given take their initial value; in normal mode only the\n\
            essential fields may be set. Exit status is 0 when the model produced\n\
            a finding and 1 when no prediction could be made."
    )]
    Check(CheckArgs),

    /// Show a screen's inputs
    Fields(FieldsArgs),

    /// List the available screens
    Domains,

    /// Start an interactive session
    #[command(
        about = "Start an interactive session",
        long_about = "Start an interactive session over the three screens.\n\n\
            Commands:\n\
            \n  :screen <domain>   Switch screen\n\
            \n  :mode <mode>       Switch between normal and advanced\n\
            \n  <key> = <value>    Set a field\n\
            \n  :check             Run the assessment\n\
            \n  :help              Show available commands\n\
            \n  :quit              Exit (also :q, :exit)"
    )]
    Interactive,

    /// Write a starter screen.toml
    Init(InitArgs),
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Screen to run (diabetes, heart, parkinsons)
    domain: Domain,

    /// Form mode (normal, advanced); defaults to the configured mode
    #[arg(short, long)]
    mode: Option<Mode>,

    /// Field value as key=value; repeatable
    #[arg(short, long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    set: Vec<(String, String)>,

    /// Print the full assessment as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct FieldsArgs {
    domain: Domain,

    #[arg(short, long)]
    mode: Option<Mode>,
}

#[derive(Debug, Args)]
struct InitArgs {
    /// Where to write the file
    #[arg(long, value_name = "FILE", default_value = CONFIG_FILE)]
    path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    screen_form::input::split_assignment(s)
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, wins over -v
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

fn load_config(explicit: Option<&Path>) -> Result<ScreenConfig, String> {
    let cwd = std::env::current_dir().map_err(|e| format!("cannot read working directory: {e}"))?;
    let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let (mut config, source) = config::discover(explicit, env_path, &cwd).map_err(|e| e.to_string())?;
    match source {
        ConfigSource::File(path) => log::info!("loaded config {}", path.display()),
        ConfigSource::Defaults => log::info!("using default config"),
    }
    config.apply_overrides(|var| std::env::var(var).ok());
    Ok(config)
}

fn load_models(config: &ScreenConfig) -> Result<ModelSet, String> {
    ModelSet::load(&config.models).map_err(|e| e.to_string())
}

fn run_check(config: &ScreenConfig, models: &ModelSet, args: &CheckArgs) -> i32 {
    let mode = args.mode.unwrap_or(config.default_mode);
    let mut input = FormInput::new();
    for (key, value) in &args.set {
        input.set(key, value.as_str());
    }

    let assessment = assess(models, args.domain, mode, &input);
    if args.json || config.output == OutputFormat::Json {
        match render::assessment_json(&assessment) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                return 2;
            }
        }
    } else {
        println!("{}", render::outcome(&assessment.outcome));
    }

    if assessment.predicted() {
        0
    } else {
        1
    }
}

fn run_interactive(config: &ScreenConfig, models: ModelSet) -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::Editor;
    let mut rl = match Editor::<(), rustyline::history::DefaultHistory>::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize session: {e}");
            return 2;
        }
    };

    let mut session = ScreenSession::new(models, config.default_mode, config.output);
    println!("Risk screens (type :help for commands)");
    for line in render::domains() {
        println!("  {line}");
    }
    loop {
        match rl.readline(&session.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                let (out, exit) = session.handle_line(&line);
                for l in out {
                    println!("{l}");
                }
                if exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("error: session failed: {e}");
                return 2;
            }
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Command::Interactive);
    match &command {
        Command::Domains => {
            for line in render::domains() {
                println!("{line}");
            }
            return 0;
        }
        Command::Init(args) => {
            return match config::write_template(&args.path, args.force) {
                Ok(()) => {
                    println!("wrote {}", args.path.display());
                    0
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    2
                }
            };
        }
        _ => {}
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    if let Command::Fields(args) = &command {
        let mode = args.mode.unwrap_or(config.default_mode);
        for line in render::fields(args.domain, mode, None) {
            println!("{line}");
        }
        return 0;
    }

    let models = match load_models(&config) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    match command {
        Command::Check(args) => run_check(&config, &models, &args),
        _ => run_interactive(&config, models),
    }
}

fn main() {
    std::process::exit(run_cli());
}
