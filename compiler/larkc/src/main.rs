//! Lark CLI
//!
//! `lark run`, `lark lex`, `lark parse` and `lark explain`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use lark_diagnostic::emitter::ColorMode;
use lark_eval::ScopeMode;
use larkc::commands::{explain_code, lex_file, parse_file, run_file, DiagnosticFormat};
use larkc::{init_tracing, RunConfig};

#[derive(Parser, Debug)]
#[command(name = "lark", version, about = "Run and inspect Lark programs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute a program
    Run(RunArgs),
    /// Print the token stream of a file
    Lex {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
        color: ColorArg,
    },
    /// Print the parsed program as s-expressions
    Parse {
        file: PathBuf,
        /// Keep parsing after a syntax error
        #[arg(long)]
        recover: bool,
        #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
        color: ColorArg,
    },
    /// Describe a diagnostic code such as E1002
    Explain { code: String },
}

#[derive(Args, Debug)]
struct RunArgs {
    file: PathBuf,
    /// Variable scoping for blocks
    #[arg(long, value_enum, default_value_t = ScopingArg::Flat)]
    scoping: ScopingArg,
    /// Report every syntax error instead of only the first
    #[arg(long)]
    recover: bool,
    /// Diagnostic output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,
    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    color: ColorArg,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ScopingArg {
    Flat,
    Lexical,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ScopingArg> for ScopeMode {
    fn from(arg: ScopingArg) -> Self {
        match arg {
            ScopingArg::Flat => ScopeMode::Flat,
            ScopingArg::Lexical => ScopeMode::Lexical,
        }
    }
}

impl From<FormatArg> for DiagnosticFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => DiagnosticFormat::Text,
            FormatArg::Json => DiagnosticFormat::Json,
        }
    }
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Always => ColorMode::Always,
            ColorArg::Never => ColorMode::Never,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let status = match cli.command {
        Command::Run(args) => {
            let config = RunConfig {
                scoping: args.scoping.into(),
                recover: args.recover,
            };
            run_file(&args.file, &config, args.format.into(), args.color.into())
        }
        Command::Lex { file, color } => lex_file(&file, color.into()),
        Command::Parse {
            file,
            recover,
            color,
        } => parse_file(&file, recover, color.into()),
        Command::Explain { code } => explain_code(&code),
    };

    ExitCode::from(status)
}
