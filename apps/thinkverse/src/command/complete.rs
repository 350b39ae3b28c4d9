use super::{Command, open_store};
use crate::config::Config;
use crate::error::Result;
use suggest::{DropdownEntry, Key, SuggestionEngine};

pub struct SuggestCommand {
    config: Config,
    text: String,
    highlight: Option<usize>,
}

impl SuggestCommand {
    pub fn new(cfg: Config, text: String, highlight: Option<usize>) -> Self {
        Self {
            config: cfg,
            text,
            highlight,
        }
    }
}

#[async_trait::async_trait]
impl Command for SuggestCommand {
    async fn execute(&self) -> Result<()> {
        let mut engine = SuggestionEngine::new(open_store(&self.config));
        engine.on_input_change(&self.text);
        engine.on_focus();

        if let Some(target) = self.highlight {
            for _ in 0..=target {
                engine.on_key_down(Key::ArrowDown);
            }
        }

        if !engine.state().open {
            println!("Type at least two characters to see suggestions.");
            return Ok(());
        }
        if let Some(message) = engine.empty_message() {
            println!("{}", message);
            return Ok(());
        }

        let highlighted = engine.state().highlighted;
        let mut section = "";
        for (index, entry) in engine.entries().into_iter().enumerate() {
            let title = match entry {
                DropdownEntry::Suggestion(_) => "Suggestions",
                DropdownEntry::Recent { .. } => "Recent Searches",
            };
            if title != section {
                println!("{}", title);
                section = title;
            }
            let marker = if highlighted == Some(index) { ">" } else { " " };
            println!("{} {}", marker, entry.text());
        }
        Ok(())
    }
}
