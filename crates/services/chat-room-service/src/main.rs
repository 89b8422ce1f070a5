//! Chat Room Service - command line access to stored chat rooms.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chat_room_service_lib::config::ChatRoomServiceConfig;
use chat_room_service_lib::repository::ChatRoomRepository;
use chat_room_service_lib::service::ChatRoomService;
use chat_room_service_lib::store::RestStore;
use domain::{ChatPartner, ChatRoomObject};

#[derive(Parser)]
#[command(name = "chat-room-service")]
#[command(about = "Read and write chat rooms in the remote store")]
struct Cli {
    /// Store base URL (overrides CHAT_STORE_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the owner's chat room with a friend
    Get {
        #[arg(long)]
        owner: String,
        #[arg(long)]
        friend: String,
    },
    /// Store a chat room under the owner
    Add {
        #[arg(long)]
        owner: String,
        #[arg(long)]
        chat_room_id: String,
        #[arg(long)]
        friend: String,
        #[arg(long)]
        friend_name: String,
        #[arg(long)]
        last_message: Option<String>,
    },
    /// List the owner's chat rooms
    List {
        #[arg(long)]
        owner: String,
    },
    /// Set the last message on both sides of a conversation
    UpdateLastMessage {
        #[arg(long)]
        chat_room_id: String,
        #[arg(long)]
        owner: String,
        #[arg(long)]
        owner_name: String,
        #[arg(long)]
        friend: String,
        #[arg(long)]
        message: String,
    },
    /// Open (and create if needed) the owner's chat room with a friend
    Open {
        #[arg(long)]
        owner: String,
        #[arg(long)]
        friend: String,
        #[arg(long)]
        friend_name: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = ChatRoomServiceConfig::from_env();
    if let Some(url) = cli.url {
        config = config.with_store_url(url);
    }

    let store = Arc::new(RestStore::new(&config.store)?);
    let (repo, service) = chat_room_service_lib::build(store);

    match cli.command {
        Commands::Get { owner, friend } => {
            print_json(&repo.get_chat_room(&owner, &friend).await?)?;
        }
        Commands::Add {
            owner,
            chat_room_id,
            friend,
            friend_name,
            last_message,
        } => {
            let room = ChatRoomObject {
                chat_room_id,
                friend_user_id: friend,
                friend_user_name: friend_name,
                last_message,
            };
            repo.add_chat_room(&room, &owner).await?;
            print_json(&room)?;
        }
        Commands::List { owner } => {
            print_json(&service.chat_rooms(&owner).await?)?;
        }
        Commands::UpdateLastMessage {
            chat_room_id,
            owner,
            owner_name,
            friend,
            message,
        } => {
            repo.update_chat_room_last_message(&chat_room_id, &owner, &owner_name, &friend, &message)
                .await?;
        }
        Commands::Open {
            owner,
            friend,
            friend_name,
        } => {
            let room = service
                .open_chat_room(&owner, ChatPartner::new(friend, friend_name))
                .await?;
            print_json(&room)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
