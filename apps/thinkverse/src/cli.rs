use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this configuration file instead of the platform default
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a search, record it in history and show the results page
    Search {
        query: String,
    },
    /// Show the autocomplete dropdown for partial input
    Suggest {
        text: String,
        /// Highlight the n-th row (0-based, suggestions first, then recents)
        #[arg(long)]
        highlight: Option<usize>,
    },
    /// Admin article table
    List {
        /// Text to match in title, excerpt or body
        #[arg(short, long, default_value = "")]
        query: String,
        /// Category slug, or `all`
        #[arg(long, default_value = "all")]
        category: String,
        /// created_at, title or views
        #[arg(long, default_value = "created_at")]
        sort: String,
        /// asc or desc
        #[arg(long, default_value = "desc")]
        direction: String,
    },
    /// Front page: featured, newest per category, most viewed
    Home,
    /// All articles, newest first
    Latest,
    /// Articles in one category, newest first
    Category {
        /// discoveries, inventions or interventions
        slug: String,
    },
    /// Show one article by slug
    Show {
        slug: String,
    },
    /// Articles related to a topic slug, e.g. `climate-change`
    Topic {
        slug: String,
    },
    /// Inspect or edit recent searches
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum HistoryAction {
    /// Print recent searches, most recent first
    List,
    /// Remove one entry by position
    Remove { index: usize },
    /// Remove all entries
    Clear,
}
