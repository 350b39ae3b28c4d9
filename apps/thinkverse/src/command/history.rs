use super::{Command, open_store};
use crate::cli::HistoryAction;
use crate::config::Config;
use crate::error::{Result, eyre};
use suggest::SuggestionEngine;
use tracing::info;

pub struct HistoryCommand {
    config: Config,
    action: HistoryAction,
}

impl HistoryCommand {
    pub fn new(cfg: Config, action: Option<HistoryAction>) -> Self {
        Self {
            config: cfg,
            action: action.unwrap_or(HistoryAction::List),
        }
    }
}

#[async_trait::async_trait]
impl Command for HistoryCommand {
    async fn execute(&self) -> Result<()> {
        let mut engine = SuggestionEngine::new(open_store(&self.config));

        match self.action {
            HistoryAction::List => {
                if engine.recent().is_empty() {
                    println!("No recent searches.");
                }
                for (index, entry) in engine.recent().entries().iter().enumerate() {
                    println!("{:>2}  {}", index, entry);
                }
            }
            HistoryAction::Remove { index } => {
                let removed = engine
                    .clear_recent_search(index)
                    .ok_or_else(|| eyre!("No recent search at position {}", index))?;
                info!("Removed recent search '{}'", removed);
                println!("Removed \"{}\"", removed);
            }
            HistoryAction::Clear => {
                engine.clear_history();
                println!("Recent searches cleared.");
            }
        }
        Ok(())
    }
}
