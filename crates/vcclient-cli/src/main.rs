mod client;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};
use session::Session;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vcclient_core::{ClientConfig, DownloadOutcome, DEFAULT_HOST};

#[derive(Parser)]
#[command(name = "vcclient")]
#[command(about = "VCClient - install sample voice models into server slots", long_about = None)]
struct Cli {
    /// Voice changer server URL
    #[arg(long, env = "VCCLIENT_HOST", default_value = DEFAULT_HOST, global = true)]
    host: String,

    /// Label language (e.g., en, ja)
    #[arg(long, env = "VCCLIENT_LANG", default_value = "en", global = true)]
    locale: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List sample languages
    Langs,

    /// List downloadable samples
    Samples {
        /// Only show samples in this language
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// List model slots
    Slots,

    /// Install a sample into a model slot
    Download {
        /// Sample ID
        sample_id: String,

        /// Target slot index
        #[arg(short, long)]
        slot: u32,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::new(cli.host, cli.locale)?;
    let mut session = Session::connect(config).await?;

    match cli.command {
        Some(Commands::Langs) => {
            session.open_sample_downloader(0);
            session.print_languages();
        }
        Some(Commands::Samples { lang }) => {
            session.open_sample_downloader(0);
            if let Some(lang) = lang {
                session.select_language(&lang);
            }
            session.print_samples();
        }
        Some(Commands::Slots) => session.print_slots(),
        Some(Commands::Download { sample_id, slot }) => {
            session.open_sample_downloader(slot);
            let outcome = session.download(&sample_id).await?;
            return Ok(ExitCode::from(exit_status(&outcome)));
        }
        None => run_interactive(&mut session).await?,
    }

    Ok(ExitCode::SUCCESS)
}

/// The failure was already shown by the notifier; only the status is left to report.
fn exit_status(outcome: &DownloadOutcome) -> u8 {
    match outcome {
        DownloadOutcome::Installed => 0,
        DownloadOutcome::Failed(_) => 1,
    }
}

async fn run_interactive(session: &mut Session) -> Result<()> {
    display_welcome(session);
    session.print_slots();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "help" | "h" | "?" => display_help(),
            "slots" | "s" => session.print_slots(),
            "sample" => match parts.get(1).map(|s| s.parse::<u32>()) {
                Some(Ok(slot)) => {
                    session.open_sample_downloader(slot);
                    session.print_samples();
                }
                _ => println!("Usage: sample <slot>"),
            },
            "lang" | "l" => match parts.get(1) {
                Some(lang) => {
                    session.select_language(lang);
                    session.print_samples();
                }
                None => session.print_languages(),
            },
            "list" | "ls" => session.print_samples(),
            "download" | "d" => match parts.get(1) {
                Some(input) => {
                    if let Err(e) = session.download(input).await {
                        println!("Error: {}", e);
                    }
                }
                None => println!("Usage: download <#|id>"),
            },
            "back" | "b" => {
                session.back_to_slot_manager();
                session.print_slots();
            }
            "refresh" | "r" => match session.refresh().await {
                Ok(()) => println!("  Server info refreshed ({})", session.screen().label()),
                Err(e) => println!("Error: {}", e),
            },
            "exit" | "quit" | "q" => break,
            "clear" | "cls" => {
                print!("\x1B[2J\x1B[1;1H");
                stdout.flush()?;
            }
            _ => {
                println!("Unknown command: {}. Type 'help' for available commands.", cmd);
            }
        }
    }

    Ok(())
}

fn display_welcome(session: &Session) {
    println!();
    println!("  VCClient Sample Downloader");
    println!("  Server: {}", session.host());
    println!(
        "  {} samples available",
        session.setting().sample_models.len()
    );
    println!();
    println!("  Type 'help' for available commands.");
}

fn display_help() {
    println!();
    println!("Available Commands:");
    println!("  slots, s               List model slots");
    println!("  sample <slot>          Browse samples for a slot");
    println!("  lang, l [<lang>|All]   Show or select the sample language");
    println!("  list, ls               Show samples for the selected slot");
    println!("  download, d <#|id>     Install a sample into the selected slot");
    println!("  back, b                Return to the slot list");
    println!("  refresh, r             Re-fetch server info");
    println!("  clear, cls             Clear screen");
    println!("  help, h                Show this help message");
    println!("  exit, quit, q          Exit");
    println!();
}
