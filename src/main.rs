use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use sitescout::cli;

#[derive(Parser)]
#[command(
    name = "sitescout",
    about = "Sitescout — extract candidate phone numbers and the site logo from web pages",
    version,
    after_help = "Run 'sitescout <command> --help' for details on each command."
)]
struct Cli {
    /// Output results as JSON (machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan one or more pages for phone numbers and a site logo
    Scan {
        /// URLs to scan
        #[arg(required = true)]
        urls: Vec<String>,
        /// Per-request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,
        /// User-Agent header sent with every request
        #[arg(long, default_value = "Mozilla/5.0")]
        user_agent: String,
        /// Retry attempts on server errors and transport failures
        #[arg(long, default_value = "2")]
        retries: u32,
        /// Also write the JSON report array to this file
        #[arg(long)]
        output: Option<std::path::PathBuf>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global flags via environment variables so all modules can check them
    if cli.json {
        std::env::set_var("SITESCOUT_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("SITESCOUT_QUIET", "1");
    }
    if cli.verbose {
        std::env::set_var("SITESCOUT_VERBOSE", "1");
    }
    if cli.no_color {
        std::env::set_var("SITESCOUT_NO_COLOR", "1");
    }

    let result = match cli.command {
        Commands::Scan {
            urls,
            timeout,
            user_agent,
            retries,
            output,
        } => cli::scan_cmd::run(&urls, timeout, &user_agent, retries, output.as_deref()).await,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "sitescout", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        if !cli::output::is_quiet() && !cli::output::is_json() {
            eprintln!("  Error: {e:#}");
        }
        if cli::output::is_json() {
            cli::output::print_json(&serde_json::json!({
                "error": true,
                "message": format!("{e:#}"),
            }));
        }
        std::process::exit(1);
    }

    result
}
