//! Bolt CLI - The Bolt language command line interface.
//! Bolt CLI - Bolt 语言的命令行界面。

mod commands;
mod logging;
mod output;

use clap::{Parser, Subcommand};
use commands::DiagnosticFormat;

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "bolt")]
#[command(author, version, about = "Bolt - lexical front end for the Bolt language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output. / 抑制输出。
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Diagnostic style. / 诊断信息样式。
    #[arg(long, global = true, value_enum, default_value_t = DiagnosticFormat::Classic)]
    format: DiagnosticFormat,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Print the token stream of a file. / 打印文件的 token 流。
    Lex {
        /// The file to lex. / 要进行词法分析的文件。
        #[arg(default_value = "main.bl")]
        file: String,

        /// Print tokens as a JSON array. / 以 JSON 数组打印 token。
        #[arg(long)]
        json: bool,
    },

    /// Check that a file lexes cleanly. / 检查文件能否通过词法分析。
    Check {
        /// The file to check. / 要检查的文件。
        #[arg(default_value = "main.bl")]
        file: String,
    },
}

/// Main entry point.
/// 主入口点。
fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Lex { file, json } => commands::lex::run(&file, json, cli.format),
        Commands::Check { file } => commands::check::run(&file, cli.verbose, cli.quiet, cli.format),
    };

    if let Err(e) = result {
        if !cli.quiet {
            output::error(&e.to_string());
        }
        std::process::exit(1);
    }
}
