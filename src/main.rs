use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use arbeitszeit::calculation::calculate_report;
use arbeitszeit::config::{ConfigLoader, OutputFormat, Settings};
use arbeitszeit::error::{EngineError, EngineResult};
use arbeitszeit::interpreter::{Interpreter, LineOutcome};
use arbeitszeit::models::Report;

/// Scheduled vs. worked hours from a working-time ledger.
#[derive(Debug, Parser)]
#[command(name = "arbeitszeit", version, about)]
struct Cli {
    /// Ledger files, read in order as one input. Reads stdin when omitted.
    files: Vec<PathBuf>,

    /// YAML settings file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report format; overrides the settings file.
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// More log output on stderr (-v info, -vv debug). RUST_LOG wins.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
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
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> EngineResult<()> {
    let settings = match &cli.config {
        Some(path) => ConfigLoader::load(path)?,
        None => Settings::default(),
    };
    let format = cli.format.unwrap_or(settings.format);

    let mut interpreter = Interpreter::new(settings);
    let mut line_number = 0;
    for (name, reader) in open_sources(&cli.files)? {
        for line in reader.lines() {
            let line = line.map_err(|e| EngineError::InputUnreadable {
                path: name.clone(),
                message: e.to_string(),
            })?;
            line_number += 1;
            match interpreter.process_line(line_number, &line)? {
                LineOutcome::Echo(datetime) => {
                    write_stdout(&format!("{}\n", datetime.format("%Y-%m-%d %H:%M:%S")))?;
                }
                LineOutcome::UnknownCommand(command) => {
                    let warning = EngineError::UnknownCommand {
                        line: line_number,
                        command,
                    };
                    eprintln!("WARNING: {warning}");
                }
                LineOutcome::Blank | LineOutcome::Applied => {}
            }
        }
    }

    let report = calculate_report(interpreter.facts())?;
    write_report(&report, format)
}

/// Opens every input up front, so a missing file fails before any line runs.
fn open_sources(files: &[PathBuf]) -> EngineResult<Vec<(String, Box<dyn BufRead>)>> {
    if files.is_empty() {
        let stdin: Box<dyn BufRead> = Box::new(io::stdin().lock());
        return Ok(vec![("-".to_string(), stdin)]);
    }

    files
        .iter()
        .map(|path| {
            let name = path.display().to_string();
            let file = File::open(path).map_err(|e| EngineError::InputUnreadable {
                path: name.clone(),
                message: e.to_string(),
            })?;
            Ok((name, Box::new(BufReader::new(file)) as Box<dyn BufRead>))
        })
        .collect()
}

fn write_report(report: &Report, format: OutputFormat) -> EngineResult<()> {
    let rendered = match format {
        OutputFormat::Text => report.to_string(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report).map_err(|e| {
                EngineError::OutputFailed {
                    message: e.to_string(),
                }
            })?;
            json.push('\n');
            json
        }
    };

    write_stdout(&rendered)
}

/// Writes to stdout. A closed stdout is not an error; the text is dropped.
fn write_stdout(text: &str) -> EngineResult<()> {
    let mut stdout = io::stdout().lock();
    match stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
        // The reader went away (e.g. `| head`); nothing left to do.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(EngineError::OutputFailed {
            message: e.to_string(),
        }),
        Ok(()) => Ok(()),
    }
}

fn report_error(err: &EngineError) {
    match err {
        EngineError::Line { line, raw, source } => {
            eprintln!("ERROR: On line {line}: {source}");
            eprintln!("Offending line was: \"{raw}\"");
        }
        other => eprintln!("ERROR: {other}"),
    }
}
