use tracing::{error, info, warn};

use crate::action::Action;
use crate::domain::catalog::ModelCatalog;
use crate::domain::store::ConfigStore;
use crate::domain::types::ConfigRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Restore { defaults: ConfigRecord },
    Save { record: ConfigRecord },
    FetchModels { api_key: String },
}

/// External collaborators the commands run against
pub struct Services<S, C> {
    pub store: S,
    pub catalog: C,
}

pub async fn execute_command<S, C>(command: Command, services: &Services<S, C>) -> Action
where
    S: ConfigStore,
    C: ModelCatalog,
{
    match command {
        Command::Restore { defaults } => {
            let result = services.store.get(&defaults).await;
            match &result {
                Ok(record) => info!(prompts = record.prompts.len(), "restored options"),
                Err(e) => error!(error = %e, "failed to restore options"),
            }
            Action::Restored(result.map_err(|e| e.to_string()))
        }
        Command::Save { record } => {
            let result = services.store.set(&record).await;
            match &result {
                Ok(()) => info!(prompts = record.prompts.len(), "saved options"),
                Err(e) => error!(error = %e, "failed to save options"),
            }
            Action::Saved(result.map_err(|e| e.to_string()))
        }
        Command::FetchModels { api_key } => {
            let result = services.catalog.fetch_models(&api_key).await;
            match &result {
                Ok(models) => info!(count = models.len(), "fetched model catalog"),
                Err(e) => warn!(error = %e, "failed to fetch model catalog"),
            }
            Action::ModelsFetched(result.map_err(|e| e.to_string()))
        }
    }
}
