//! worktoken CLI entry point.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use worktoken_cli::cli::{Cli, Command};
use worktoken_cli::commands::{self, EncodeRequest};
use worktoken_cli::error::CliResult;
use worktoken_cli::logging::{LoggingConfig, init_logging};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&LoggingConfig::from_verbosity(cli.verbose, cli.log_format)) {
        eprintln!("error: {}", e);
        return ExitCode::from(2);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            e.exit_code()
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Encode {
            content_type,
            language,
            timestamp,
            format_version,
            host,
            file,
        } => {
            let request = EncodeRequest {
                content_type: content_type.into(),
                language,
                timestamp,
                format_version,
                host,
            };
            let content = commands::read_input(file.as_deref())?;
            commands::encode(&request, &content, &mut out)?;
        }
        Command::Decode { json, token } => commands::decode(&token, json, &mut out)?,
        Command::Inspect { token } => commands::inspect(&token, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
