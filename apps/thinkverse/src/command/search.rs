use super::{Command, load_catalog, open_store, print_article_rows};
use crate::config::Config;
use crate::error::Result;
use catalog::result_summary;
use suggest::SuggestionEngine;
use tracing::info;

pub struct SearchCommand {
    config: Config,
    query: String,
}

impl SearchCommand {
    pub fn new(cfg: Config, query: String) -> Self {
        Self { config: cfg, query }
    }
}

#[async_trait::async_trait]
impl Command for SearchCommand {
    async fn execute(&self) -> Result<()> {
        let mut engine = SuggestionEngine::new(open_store(&self.config));
        let Some(navigation) = engine.submit(&self.query) else {
            println!("Nothing to search for.");
            return Ok(());
        };
        info!("Navigating to {}", navigation);

        let catalog = load_catalog(&self.config)?;
        let mut page = catalog.search_page(self.config.search_delay());
        page.set_query(&navigation.query);
        page.next_update().await;

        println!("Search Results");
        println!("Showing results for: \"{}\"", page.state().query);
        println!();

        if page.results().is_empty() {
            println!("No results found");
            println!(
                "We couldn't find any articles matching \"{}\". Try using different keywords or check your spelling.",
                page.state().query
            );
        } else {
            print_article_rows(page.results());
            println!();
            println!("{}", result_summary(page.results().len()));
        }
        Ok(())
    }
}
