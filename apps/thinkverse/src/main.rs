mod cli;
mod command;
mod config;
mod error;

use error::WrapErr;

use clap::CommandFactory;
use clap::Parser;
use tracing::Level;

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

#[tokio::main]
async fn main() -> error::Result<()> {
    color_eyre::install()?;
    let command_line = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(command_line.verbose))
        .with_writer(std::io::stderr)
        .init();

    let cfg = config::Config::load(command_line.config.as_deref())
        .context("Load configuration error")?;

    if let Some(command) = command_line.command {
        let cmd: Box<dyn command::Command> = match command {
            cli::Commands::Search { query } => Box::new(command::SearchCommand::new(cfg, query)),
            cli::Commands::Suggest { text, highlight } => {
                Box::new(command::SuggestCommand::new(cfg, text, highlight))
            }
            cli::Commands::List {
                query,
                category,
                sort,
                direction,
            } => Box::new(command::ListCommand::new(
                cfg, query, &category, &sort, &direction,
            )?),
            cli::Commands::Home => Box::new(command::HomeCommand::new(cfg)),
            cli::Commands::Latest => Box::new(command::LatestCommand::new(cfg)),
            cli::Commands::Category { slug } => {
                Box::new(command::CategoryCommand::new(cfg, &slug)?)
            }
            cli::Commands::Show { slug } => Box::new(command::ShowCommand::new(cfg, slug)),
            cli::Commands::Topic { slug } => Box::new(command::TopicCommand::new(cfg, slug)),
            cli::Commands::History { action } => {
                Box::new(command::HistoryCommand::new(cfg, action))
            }
        };
        cmd.execute().await?;
    } else {
        cli::Cli::command().print_help()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Level::WARN)]
    #[case(1, Level::INFO)]
    #[case(2, Level::DEBUG)]
    #[case(7, Level::TRACE)]
    fn test_log_level(#[case] verbose: u8, #[case] expected: Level) {
        assert_eq!(log_level(verbose), expected);
    }

    #[test]
    fn test_cli_parses_list_flags() {
        let cli = cli::Cli::parse_from(["thinkverse", "list", "--sort", "views", "-vv"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Some(cli::Commands::List { ref sort, ref category, .. }) if sort == "views" && category == "all"
        ));
    }

    #[test]
    fn test_cli_parses_browse_commands() {
        let cli = cli::Cli::parse_from(["thinkverse", "home"]);
        assert!(matches!(cli.command, Some(cli::Commands::Home)));

        let cli = cli::Cli::parse_from(["thinkverse", "category", "inventions"]);
        assert!(matches!(
            cli.command,
            Some(cli::Commands::Category { ref slug }) if slug == "inventions"
        ));
    }
}
