//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use cbb_stats::{
    cli::{Cbb, Commands},
    commands::{
        build_fetcher,
        metrics::handle_metrics,
        players::{handle_players, PlayersParams},
        ratings::{handle_ratings, RatingsParams},
        resolve_season,
        teams::{handle_teams, TeamsParams},
    },
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "cbb_stats=debug" } else { "cbb_stats=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Cbb::parse();
    init_tracing(app.verbose);

    match app.command {
        Commands::Teams {
            source,
            filters,
            top_conferences,
            top_conferences_by_rank,
            conf_win_quantile,
            interpolation,
            view,
        } => {
            let season = resolve_season(source.season)?;
            let fetcher = build_fetcher(&source)?;
            handle_teams(
                &fetcher,
                TeamsParams {
                    season,
                    filters,
                    top_conferences,
                    top_conferences_by_rank,
                    conf_win_quantile,
                    interpolation,
                    view,
                },
            )
            .await
            .with_context(|| format!("teams for season {}", season))?
        }

        Commands::Players {
            source,
            filters,
            players,
            view,
        } => {
            let season = resolve_season(source.season)?;
            let fetcher = build_fetcher(&source)?;
            handle_players(
                &fetcher,
                PlayersParams {
                    season,
                    filters,
                    players,
                    view,
                },
            )
            .await
            .with_context(|| format!("players for season {}", season))?
        }

        Commands::Ratings {
            source,
            filters,
            ranked_only,
            view,
        } => {
            let season = resolve_season(source.season)?;
            let fetcher = build_fetcher(&source)?;
            handle_ratings(
                &fetcher,
                RatingsParams {
                    season,
                    filters,
                    ranked_only,
                    view,
                },
            )
            .await
            .with_context(|| format!("ratings for season {}", season))?
        }

        Commands::Metrics { dataset, json } => handle_metrics(dataset, json)?,
    }

    Ok(())
}
