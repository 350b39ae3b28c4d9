pub mod browse;
pub mod complete;
pub mod history;
pub mod list;
pub mod search;

use crate::config::Config;
use crate::error::{Result, WrapErr};
use catalog::{Catalog, ContentItem};
use suggest::JsonFileStore;

pub use browse::{CategoryCommand, HomeCommand, LatestCommand, ShowCommand, TopicCommand};
pub use complete::SuggestCommand;
pub use history::HistoryCommand;
pub use list::ListCommand;
pub use search::SearchCommand;

#[async_trait::async_trait]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

fn load_catalog(config: &Config) -> Result<Catalog> {
    match &config.catalog_path {
        Some(path) => Catalog::from_json_file(path)
            .wrap_err_with(|| format!("Failed to load catalog from {:?}", path)),
        None => Ok(Catalog::builtin()?),
    }
}

fn open_store(config: &Config) -> JsonFileStore {
    JsonFileStore::new(config.store_path())
}

fn print_article_rows<'a>(items: impl IntoIterator<Item = &'a ContentItem>) {
    for item in items {
        let category = item.category.map(|c| c.name()).unwrap_or("-");
        println!(
            "{:<18} {:>7}  {:<13}  {}",
            item.date.format(catalog::models::DISPLAY_DATE_FORMAT),
            item.views,
            category,
            item.title
        );
        println!("{:<18} {:>7}  {:<13}  /article/{}", "", "", "", item.slug);
    }
}
