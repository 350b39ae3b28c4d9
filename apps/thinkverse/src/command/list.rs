use super::{Command, load_catalog, print_article_rows};
use crate::config::Config;
use crate::error::{Result, WrapErr};
use catalog::{ArticleListView, CategoryFilter, SortConfig, SortDirection, SortKey};
use tracing::debug;

pub struct ListCommand {
    config: Config,
    view: ArticleListView,
}

impl ListCommand {
    /// Filter and sort arguments are validated here; a bad value is a usage
    /// error, never silently ignored.
    pub fn new(
        cfg: Config,
        query: String,
        category: &str,
        sort: &str,
        direction: &str,
    ) -> Result<Self> {
        let category = category.parse::<CategoryFilter>().wrap_err("Invalid --category")?;
        let key = sort.parse::<SortKey>().wrap_err("Invalid --sort")?;
        let direction = direction.parse::<SortDirection>().wrap_err("Invalid --direction")?;

        Ok(Self {
            config: cfg,
            view: ArticleListView::new(query, category, SortConfig::new(key, direction)),
        })
    }
}

#[async_trait::async_trait]
impl Command for ListCommand {
    async fn execute(&self) -> Result<()> {
        let catalog = load_catalog(&self.config)?;
        debug!(view = ?self.view, "Listing articles");
        let visible = catalog.list(&self.view);

        println!(
            "{} of {} articles (category: {}, sort: {} {})",
            visible.len(),
            catalog.len(),
            self.view.category,
            self.view.sort.key,
            self.view.sort.direction
        );
        print_article_rows(visible);
        Ok(())
    }
}
