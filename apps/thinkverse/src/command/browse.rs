use super::{Command, load_catalog, print_article_rows};
use crate::config::Config;
use crate::error::{Result, WrapErr, eyre};
use catalog::models::DISPLAY_DATE_FORMAT;
use catalog::{Category, topic_description, topic_display_name};

pub struct HomeCommand {
    config: Config,
}

impl HomeCommand {
    pub fn new(cfg: Config) -> Self {
        Self { config: cfg }
    }
}

#[async_trait::async_trait]
impl Command for HomeCommand {
    async fn execute(&self) -> Result<()> {
        let catalog = load_catalog(&self.config)?;
        let home = catalog.home();

        if let Some(featured) = home.featured {
            println!("Featured");
            println!("{}", featured.title);
            println!("{}", featured.excerpt);
            println!("/article/{}", featured.slug);
            println!();
        }

        for (category, articles) in home.sections {
            if articles.is_empty() {
                continue;
            }
            println!("{}  (/{})", category.name(), category.slug());
            print_article_rows(articles);
            println!();
        }

        println!("Popular");
        print_article_rows(home.popular);
        Ok(())
    }
}

pub struct LatestCommand {
    config: Config,
}

impl LatestCommand {
    pub fn new(cfg: Config) -> Self {
        Self { config: cfg }
    }
}

#[async_trait::async_trait]
impl Command for LatestCommand {
    async fn execute(&self) -> Result<()> {
        let catalog = load_catalog(&self.config)?;
        println!("Latest Articles");
        print_article_rows(catalog.latest());
        Ok(())
    }
}

pub struct CategoryCommand {
    config: Config,
    category: Category,
}

impl CategoryCommand {
    pub fn new(cfg: Config, slug: &str) -> Result<Self> {
        let category = slug.parse::<Category>().wrap_err("Invalid category")?;
        Ok(Self {
            config: cfg,
            category,
        })
    }
}

#[async_trait::async_trait]
impl Command for CategoryCommand {
    async fn execute(&self) -> Result<()> {
        let catalog = load_catalog(&self.config)?;
        println!("{}", self.category.name());
        print_article_rows(catalog.in_category(self.category));
        Ok(())
    }
}

pub struct ShowCommand {
    config: Config,
    slug: String,
}

impl ShowCommand {
    pub fn new(cfg: Config, slug: String) -> Self {
        Self { config: cfg, slug }
    }
}

#[async_trait::async_trait]
impl Command for ShowCommand {
    async fn execute(&self) -> Result<()> {
        let catalog = load_catalog(&self.config)?;
        let article = catalog
            .find_by_slug(&self.slug)
            .ok_or_else(|| eyre!("Article not found: {}", self.slug))?;

        println!("{}", article.title);
        println!(
            "{} | {} views{}",
            article.date.format(DISPLAY_DATE_FORMAT),
            article.views,
            article
                .category
                .map(|c| format!(" | {}", c.name()))
                .unwrap_or_default()
        );
        println!();
        println!("{}", article.excerpt);
        println!();
        println!("{}", article.full_content);
        Ok(())
    }
}

pub struct TopicCommand {
    config: Config,
    slug: String,
}

impl TopicCommand {
    pub fn new(cfg: Config, slug: String) -> Self {
        Self { config: cfg, slug }
    }
}

#[async_trait::async_trait]
impl Command for TopicCommand {
    async fn execute(&self) -> Result<()> {
        let catalog = load_catalog(&self.config)?;
        let related = catalog.related_to_topic(&self.slug);

        println!("{}", topic_display_name(&self.slug));
        println!("{}", topic_description(&self.slug));
        println!();
        if related.is_empty() {
            println!("No articles found for this topic yet.");
        } else {
            print_article_rows(related);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_command_parses_slug() {
        let cmd = CategoryCommand::new(Config::default(), "interventions").unwrap();
        assert_eq!(cmd.category, Category::Interventions);
        assert!(CategoryCommand::new(Config::default(), "all").is_err());
    }
}
