use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notes_core::config::StoreConfig;
use notes_core::{NoteDraft, NoteService, NoteStore};

#[derive(Parser)]
#[command(name = "notes")]
#[command(about = "Notes service CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all notes
    List,
    /// Create a note
    Create {
        /// Note title
        title: String,
        /// Note content
        content: String,
    },
    /// Overwrite a note's title and content
    Update {
        /// Note identifier
        id: String,
        /// New title
        title: String,
        /// New content
        content: String,
    },
    /// Delete a note
    Delete {
        /// Note identifier
        id: String,
    },
}

/// Reads the same store settings as the server (`NOTES_STORE`, `MONGO_URI`, `DATABASE_NAME`,
/// `COLLECTION_NAME`, optionally from `.env`) and runs one operation. A failed operation exits
/// with a non-zero status.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("Use 'notes --help' for commands");
        return Ok(());
    };

    let store_cfg = StoreConfig::from_env_values(
        std::env::var("NOTES_STORE").ok(),
        std::env::var("MONGO_URI").ok(),
        std::env::var("DATABASE_NAME").ok(),
        std::env::var("COLLECTION_NAME").ok(),
    )?;
    let service = NoteService::new(NoteStore::from_config(&store_cfg).await?);

    run(command, &service).await
}

/// Runs one command, returning the service error so `main` exits with a non-zero status.
async fn run(command: Commands, service: &NoteService) -> anyhow::Result<()> {
    match command {
        Commands::List => {
            let notes = service.list_notes().await?;
            if notes.is_empty() {
                println!("No notes found.");
            } else {
                for note in notes {
                    println!(
                        "ID: {}, Title: {}, Created: {}, Updated: {}",
                        note.id,
                        note.title,
                        note.created_at.to_rfc3339(),
                        note.updated_at.to_rfc3339()
                    );
                }
            }
        }
        Commands::Create { title, content } => {
            let id = service.create_note(NoteDraft::new(title, content)).await?;
            println!("Created note with ID: {}", id);
        }
        Commands::Update { id, title, content } => {
            service
                .update_note(&id, NoteDraft::new(title, content))
                .await?;
            println!("Updated note: {}", id);
        }
        Commands::Delete { id } => {
            service.delete_note(&id).await?;
            println!("Deleted note: {}", id);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_core::MemoryNoteStore;

    #[tokio::test]
    async fn test_run_reports_failed_operation_as_error() {
        let service = NoteService::new(MemoryNoteStore::new());
        let err = run(
            Commands::Delete {
                id: "507f1f77bcf86cd799439011".into(),
            },
            &service,
        )
        .await
        .expect_err("deleting a missing note should fail");
        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn test_run_create_then_update_succeeds() {
        let service = NoteService::new(MemoryNoteStore::new());
        run(
            Commands::Create {
                title: "a".into(),
                content: "b".into(),
            },
            &service,
        )
        .await
        .unwrap();

        let id = service.list_notes().await.unwrap().remove(0).id;
        run(
            Commands::Update {
                id,
                title: "a2".into(),
                content: "b2".into(),
            },
            &service,
        )
        .await
        .unwrap();
        assert_eq!(service.list_notes().await.unwrap()[0].title, "a2");
    }
}
