use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use shoplist_client::api::DEFAULT_BASE_URL;
use shoplist_client::{HttpListApi, ListView};

/// Terminal client for the shopping-list server.
#[derive(Parser)]
#[command(name = "shoplist", version, about)]
struct Cli {
    /// Base URL of the shopping-list server.
    #[arg(long, env = "SHOPLIST_URL", default_value = DEFAULT_BASE_URL)]
    url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every item.
    List,
    /// Add an item.
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Remove an item by id.
    Remove { id: String },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = HttpListApi::new(cli.url);
    let mut view = ListView::new();

    match cli.command {
        Command::List => {
            view.load(&api);
            fail_on_error(&view)?;
            print_items(&view);
        }
        Command::Add { text } => {
            view.input = text.join(" ");
            if !view.can_submit() {
                eyre::bail!("nothing to add");
            }
            view.submit(&api);
            fail_on_error(&view)?;
            if let Some(item) = view.items.last() {
                println!("added {} ({})", item.text, item.id);
            }
        }
        Command::Remove { id } => {
            view.remove(&api, &id);
            fail_on_error(&view)?;
            println!("removed {id}");
        }
    }

    Ok(())
}

fn fail_on_error(view: &ListView) -> Result<()> {
    match &view.error {
        Some(message) => Err(eyre::eyre!("{message}")),
        None => Ok(()),
    }
}

fn print_items(view: &ListView) {
    if view.items.is_empty() {
        println!("No items yet.");
        return;
    }
    for item in &view.items {
        println!("{:>15}  {}  (added {})", item.id, item.text, item.created_at);
    }
}
