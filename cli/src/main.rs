mod render;
mod shell;

use std::io;

use clap::{Parser, Subcommand};
use client::config::{ConfigError, DEFAULT_BASE_URL};
use client::{ApiError, ClientConfig, ClientError, HttpItemsApi, Item, ItemId, ItemListClient};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "items", about = "Item list client")]
struct Cli {
    #[arg(long, env = "ITEMS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "ITEMS_REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: Option<u64>,

    #[arg(long, env = "ITEMS_CONNECT_TIMEOUT_SECS")]
    connect_timeout_secs: Option<u64>,

    #[arg(long, default_value_t = false, help = "Print results as JSON")]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every item.
    List,
    /// Show one item.
    Show { id: ItemId },
    /// Create an item.
    Add {
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Replace fields of an item; omitted fields keep their current value.
    Update {
        id: ItemId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        completed: Option<bool>,
    },
    /// Mark an item completed.
    Complete { id: ItemId },
    /// Mark an item pending again.
    Reopen { id: ItemId },
    /// Delete an item.
    Delete { id: ItemId },
    /// Interactive session on stdin.
    Shell,
}

#[derive(Debug, Default)]
struct EditFields {
    name: Option<String>,
    description: Option<String>,
    completed: Option<bool>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = ClientConfig::new(&cli.base_url)?
        .with_request_timeout(cli.request_timeout_secs)?
        .with_connect_timeout(cli.connect_timeout_secs)?;
    let mut client = ItemListClient::new(HttpItemsApi::new(&config)?);

    match cli.command {
        Command::List => {
            client.mount().await?;
            print_items(client.items(), cli.json)
        }
        Command::Show { id } => {
            let item = client.fetch(id).await?;
            print_item(&item, cli.json)
        }
        Command::Add { name, description } => {
            let item = client.create(&name, &description).await?;
            print_item(&item, cli.json)
        }
        Command::Update { id, name, description, completed } => {
            let fields = EditFields { name, description, completed };
            run_edit(&mut client, id, fields, cli.json).await
        }
        Command::Complete { id } => {
            run_edit(&mut client, id, EditFields { completed: Some(true), ..EditFields::default() }, cli.json).await
        }
        Command::Reopen { id } => {
            run_edit(&mut client, id, EditFields { completed: Some(false), ..EditFields::default() }, cli.json).await
        }
        Command::Delete { id } => {
            client.delete(id).await?;
            if !cli.json {
                println!("deleted {id}");
            }
            Ok(())
        }
        Command::Shell => {
            let stdin = io::stdin();
            shell::run_shell(&mut client, stdin.lock(), io::stdout()).await
        }
    }
}

/// Load the list, open `id` for editing, apply the given fields, and save.
async fn run_edit(
    client: &mut ItemListClient<HttpItemsApi>,
    id: ItemId,
    fields: EditFields,
    json: bool,
) -> Result<(), CliError> {
    client.mount().await?;
    client.begin_edit(id)?;
    if let Some(name) = fields.name {
        client.set_edit_name(&name)?;
    }
    if let Some(description) = fields.description {
        client.set_edit_description(&description)?;
    }
    if let Some(completed) = fields.completed {
        client.set_edit_completed(completed)?;
    }
    let item = client.submit_edit().await?;
    print_item(&item, json)
}

fn print_item(item: &Item, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", render::item_line(item));
    }
    Ok(())
}

fn print_items(items: &[Item], json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        println!("{}", render::render_items(items));
    }
    Ok(())
}
