//! History command handler

use thiserror::Error;

use crate::application::ports::{HistoryStorage, StorageError};
use crate::application::HistoryStore;

use super::args::HistoryAction;
use super::presenter::Presenter;

/// History command errors
#[derive(Debug, Error)]
pub enum HistoryCommandError {
    #[error("No translation with id \"{0}\"")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Handle history subcommand against a loaded store
pub async fn handle_history_command<S: HistoryStorage>(
    action: HistoryAction,
    store: &mut HistoryStore<S>,
    presenter: &Presenter,
) -> Result<(), HistoryCommandError> {
    match action {
        HistoryAction::List => {
            if store.all().is_empty() {
                presenter.info("No translations yet");
            }
            for translation in store.all() {
                presenter.output(&presenter.format_summary(translation));
            }
            Ok(())
        }
        HistoryAction::Show { id } => {
            let translation = store
                .find(&id)
                .ok_or_else(|| HistoryCommandError::NotFound(id.trim().to_string()))?;
            presenter.translation_detail(translation);
            Ok(())
        }
        HistoryAction::Clear => {
            let count = store.all().len();
            store.clear();
            store.persist().await?;
            presenter.success(&format!("Cleared {} translation(s)", count));
            Ok(())
        }
        HistoryAction::Path => {
            presenter.output(&store.location());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::history::Translation;
    use crate::domain::vibe::{Direction, Era, VibeResult, VibeStats};
    use crate::infrastructure::MemoryHistoryStorage;

    fn entry(text: &str) -> Translation {
        Translation::record(
            text,
            VibeResult {
                translated_text: format!("{} no cap", text),
                stats: VibeStats::new(10, 20, 30, 40).unwrap(),
            },
            Era::Modern,
            Direction::ToSlang,
        )
    }

    #[tokio::test]
    async fn show_unknown_id_is_not_found() {
        let mut store = HistoryStore::new(MemoryHistoryStorage::new());
        store.append(entry("hello"));

        let err = handle_history_command(
            HistoryAction::Show {
                id: " zzzzzz ".to_string(),
            },
            &mut store,
            &Presenter::new(),
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "No translation with id \"zzzzzz\"");
    }

    #[tokio::test]
    async fn show_known_id_succeeds() {
        let mut store = HistoryStore::new(MemoryHistoryStorage::new());
        let translation = entry("hello");
        let id = translation.id().as_str().to_lowercase();
        store.append(translation);

        handle_history_command(HistoryAction::Show { id }, &mut store, &Presenter::new())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn clear_persists_empty_history() {
        let storage = MemoryHistoryStorage::new();
        let mut store = HistoryStore::new(storage.clone());
        store.append(entry("one"));
        store.append(entry("two"));
        store.persist().await.unwrap();

        handle_history_command(HistoryAction::Clear, &mut store, &Presenter::new())
            .await
            .unwrap();

        assert!(store.all().is_empty());
        let reopened = HistoryStore::open(storage).await;
        assert!(reopened.all().is_empty());
    }
}
