use anyhow::Context;
use clap::Parser;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use workflow_chat::{ChatConfig, ConversationState, WorkflowClient, normalize};

#[derive(Parser, Debug)]
#[command(name = "workflow-chat", about = "Chat with a remote workflow endpoint")]
struct Args {
    /// Workflow endpoint URL
    #[arg(long, env = "WORKFLOW_ENDPOINT")]
    endpoint: Option<String>,

    /// Path to a TOML config file
    #[arg(long, conflicts_with = "endpoint")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match (args.endpoint, args.config) {
        (Some(endpoint), _) => ChatConfig { endpoint },
        (None, Some(path)) => {
            ChatConfig::from_file(&path).with_context(|| format!("loading {}", path))?
        }
        (None, None) => ChatConfig::from_env()
            .context("pass --endpoint, --config, or set WORKFLOW_ENDPOINT")?,
    };
    config.validate()?;

    let client = WorkflowClient::new(config)?;
    let mut state = ConversationState::new();

    println!("{}", state.last_text());
    println!("(/new starts a fresh chat, /quit exits)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();

        match input {
            "/quit" | "/exit" => break,
            "/new" => {
                state.reset();
                println!("{}", state.last_text());
                continue;
            }
            "" => continue,
            _ => {}
        }

        match client.send(&mut state, input).await {
            Ok(()) => println!("{}", state.last_text()),
            Err(e) => eprintln!("{}", normalize::user_message(&e)),
        }
    }

    Ok(())
}
