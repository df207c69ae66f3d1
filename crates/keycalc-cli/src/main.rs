//! keycalc: four-function keypad calculator
//!
//! ## Usage
//!
//! ```bash
//! keycalc eval 2+3*4=              # prints 20
//! keycalc eval --trace 5/0=        # per-key display
//! keycalc --state calc.json eval 12+
//! keycalc --state calc.json eval 30=   # prints 42
//! keycalc repl                     # one key sequence per line
//! keycalc keypad                   # show the layout
//! ```

use clap::Parser;
use keycalc::Keypad;
use keycalc_cli::{
    display_line, load_engine_config, logging, render_trace, render_warnings, repl, Cli,
    CliConfig, CliError, CliResult, Commands, EvalArgs, EvalOutput, OutputFormat, Session,
    Verbosity,
};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    logging::init(config.verbosity);

    match cli.command {
        Commands::Eval(args) => run_eval(&config, &args),
        Commands::Repl => run_repl(&config),
        Commands::Keypad => {
            print!("{}", Keypad::new().render());
            Ok(())
        }
    }
}

fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let engine = match &cli.config {
        Some(path) => load_engine_config(path)?,
        None => keycalc::EngineConfig::default(),
    };

    Ok(CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.verbose, cli.quiet))
        .with_engine(engine)
        .with_state_path(cli.state.clone()))
}

fn run_eval(config: &CliConfig, args: &EvalArgs) -> CliResult<()> {
    let keys = args.keys.concat();
    if keys.trim().is_empty() {
        return Err(CliError::invalid_argument("no keys given"));
    }

    let mut session = Session::open(config)?;
    let report = session.run_keys(&keys)?;

    if !config.verbosity.is_quiet() {
        for warning in render_warnings(&report, session.engine()) {
            eprintln!("{warning}");
        }
    }

    match args.format {
        OutputFormat::Text => {
            if args.trace {
                print!("{}", render_trace(&report));
            } else {
                println!("{}", display_line(&report, session.engine()));
            }
        }
        OutputFormat::Json => {
            let json = EvalOutput::new(&report, session.engine()).to_json()?;
            println!("{json}");
        }
    }

    session.save()
}

fn run_repl(config: &CliConfig) -> CliResult<()> {
    let mut session = Session::open(config)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    repl::run(
        &mut session,
        stdin.lock(),
        &mut stdout,
        &mut stderr,
        config.verbosity.is_quiet(),
    )?;
    session.save()
}
