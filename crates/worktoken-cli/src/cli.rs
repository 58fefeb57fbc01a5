//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use worktoken::ContentType;
use worktoken::limits::{DEFAULT_HOST, FORMAT_VERSION};

use crate::logging::LogFormat;

/// worktoken - share text, code, JSON and diagrams as self-contained links
#[derive(Debug, Parser)]
#[command(name = "worktoken")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, env = "WORKTOKEN_LOG_FORMAT", global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode content into a token
    Encode {
        /// Content type
        #[arg(long = "type", short = 't', value_enum, default_value_t = TypeArg::Text)]
        content_type: TypeArg,

        /// Source language (required for, and only allowed with, --type code)
        #[arg(long, short)]
        language: Option<String>,

        /// Timestamp in milliseconds since the epoch (defaults to now)
        #[arg(long)]
        timestamp: Option<u64>,

        /// Envelope format revision
        #[arg(long, default_value_t = FORMAT_VERSION)]
        format_version: u32,

        /// Host segment of the token
        #[arg(long, env = "WORKTOKEN_HOST", default_value = DEFAULT_HOST)]
        host: String,

        /// Input file ("-" or absent for stdin)
        file: Option<PathBuf>,
    },

    /// Decode a token and print its content
    Decode {
        /// Print content and metadata as JSON
        #[arg(long)]
        json: bool,

        /// Token, with or without host and scheme
        token: String,
    },

    /// Show the parts of a token and check its integrity
    Inspect {
        /// Token, with or without host and scheme
        token: String,
    },
}

/// Content type as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeArg {
    Text,
    Code,
    Json,
    Diagram,
}

impl From<TypeArg> for ContentType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Text => ContentType::Text,
            TypeArg::Code => ContentType::Code,
            TypeArg::Json => ContentType::Json,
            TypeArg::Diagram => ContentType::Diagram,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_defaults() {
        let cli = Cli::try_parse_from(["worktoken", "encode"]).unwrap();
        match cli.command {
            Command::Encode {
                content_type,
                language,
                timestamp,
                format_version,
                file,
                ..
            } => {
                assert_eq!(content_type, TypeArg::Text);
                assert!(language.is_none());
                assert!(timestamp.is_none());
                assert_eq!(format_version, FORMAT_VERSION);
                assert!(file.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_encode_code_args() {
        let cli = Cli::try_parse_from([
            "worktoken", "encode", "-t", "code", "-l", "rust", "--host", "x.dev", "main.rs",
        ])
        .unwrap();
        match cli.command {
            Command::Encode {
                content_type,
                language,
                host,
                file,
                ..
            } => {
                assert_eq!(ContentType::from(content_type), ContentType::Code);
                assert_eq!(language.as_deref(), Some("rust"));
                assert_eq!(host, "x.dev");
                assert_eq!(file, Some(PathBuf::from("main.rs")));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_decode_args() {
        let cli = Cli::try_parse_from(["worktoken", "-vv", "decode", "--json", "a/v3/text/1/2"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Decode { json: true, .. }));
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(Cli::try_parse_from(["worktoken", "encode", "--type", "video"]).is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["worktoken"]).is_err());
    }
}
