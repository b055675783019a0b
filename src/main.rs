use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod apis;
mod commands;
mod errors;
mod history;
mod prompt;
mod session;
mod utils;

#[cfg(test)]
mod pipeline_tests;

use apis::{GeminiClient, DEFAULT_IMAGE_MODEL};
use prompt::StyleTag;
use session::Session;

#[derive(Parser, Debug)]
#[command(
    name = "enjoy-banana",
    version,
    about = "Generate images with Gemini and browse them in a session gallery"
)]
struct Args {
    /// Gemini API key; falls back to the GEMINI_API_KEY environment variable
    #[arg(long)]
    api_key: Option<String>,

    /// Image model to call
    #[arg(long, default_value = DEFAULT_IMAGE_MODEL)]
    model: String,

    /// Style woven into prompts (see the `style` command for the list)
    #[arg(long, default_value = "none")]
    style: StyleTag,

    /// Directory generated images are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Generate one image for this prompt and exit instead of starting the
    /// interactive session
    #[arg(long)]
    prompt: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("enjoy_banana=info")),
        )
        .init();

    let args = Args::parse();

    // The key only ever lives in memory and never reaches the logs.
    let api_key = args
        .api_key
        .or_else(|| env::var("GEMINI_API_KEY").ok())
        .unwrap_or_default();

    let client = match GeminiClient::new(&api_key, &args.model) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Pass --api-key or set GEMINI_API_KEY. Keys are issued at https://aistudio.google.com/app/apikey");
            std::process::exit(2);
        }
    };
    info!("client ready (model {})", client.model());

    let mut session = Session::new(client, args.style, args.out_dir);

    // One-shot mode: single generation, then exit.
    if let Some(prompt) = args.prompt {
        commands::generate(&mut session, &prompt).await?;
        return Ok(());
    }

    println!("🍌 Enjoy Banana Ver 3.0 — type a prompt to generate an image, `help` for commands.");

    let stdin = io::stdin();
    loop {
        print!("banana> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if !dispatch(&mut session, line).await? {
            break;
        }
    }

    info!(
        "session over, dropping {} gallery image(s)",
        session.history.len()
    );
    Ok(())
}

/// Route one input line. Returns false when the session should end. Anything
/// that isn't a known command is treated as a prompt, so generations stay
/// strictly one at a time: the loop doesn't read again until the call
/// resolves.
async fn dispatch(session: &mut Session, line: &str) -> Result<bool> {
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "quit" | "exit" => return Ok(false),
        "help" => commands::help(),
        "examples" => commands::examples(),
        "gallery" => commands::gallery(session),
        "style" => {
            if rest.is_empty() {
                commands::styles(session.style);
            } else {
                match rest.parse::<StyleTag>() {
                    Ok(tag) => {
                        session.style = tag;
                        println!("Style set to {tag}.");
                    }
                    Err(e) => println!("{e}"),
                }
            }
        }
        "save" => match rest.parse::<usize>() {
            Ok(index) => commands::save(session, index)?,
            Err(_) => println!("Usage: save <n> (gallery index, see `gallery`)."),
        },
        _ => commands::generate(session, line).await?,
    }

    Ok(true)
}
