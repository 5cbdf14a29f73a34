use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use colored::Colorize;
use tabled::Table;

use crate::{
    Result,
    config::SyncConfig,
    error, info,
    service::PlaylistSink,
    spotify::SpotifyClient,
    success,
    sync::{Disposition, SyncReport, Synchronizer},
    types::{NotFoundTableRow, Provider},
    utils, warning,
    youtube::YouTubeClient,
};

/// Reads the song list, connects `provider` and runs the synchronization.
pub async fn sync(provider: Provider, input: &Path, config: SyncConfig) {
    let titles = match utils::read_song_list(input).await {
        Ok(titles) => titles,
        Err(e) => error!("{}", e),
    };

    if titles.is_empty() {
        warning!("No songs in {}", input.display());
    }

    let result = match provider {
        Provider::Spotify => match SpotifyClient::connect().await {
            Ok(mut client) => run(&mut client, config, &titles).await,
            Err(e) => Err(e),
        },
        Provider::YouTube => match YouTubeClient::connect().await {
            Ok(mut client) => run(&mut client, config, &titles).await,
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(report) => print_report(&report),
        Err(e) => error!("Sync with {} failed. Err: {}", provider, e),
    }
}

/// Runs one synchronization against `service`, asking on stdin before
/// existing entries of the target are deleted.
pub async fn run<P: PlaylistSink>(
    service: &mut P,
    config: SyncConfig,
    titles: &[String],
) -> Result<SyncReport> {
    let mut synchronizer = Synchronizer::new(config).with_confirm(confirm_on_stdin);
    synchronizer.sync(service, titles).await
}

fn confirm_on_stdin(question: &str) -> bool {
    print!("{} {} ", question, "[y/N]".bold());
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

pub fn print_report(report: &SyncReport) {
    let rows: Vec<NotFoundTableRow> = report
        .outcomes
        .iter()
        .enumerate()
        .filter(|(_, o)| o.disposition == Disposition::NotFound)
        .map(|(i, o)| NotFoundTableRow {
            line: i + 1,
            title: o.title.clone(),
        })
        .collect();

    if !rows.is_empty() {
        println!("{}", Table::new(rows));
    }

    info!(
        "{} of {} songs resolved, {} not found",
        report.resolved, report.requested, report.not_found
    );
    if report.removed > 0 {
        info!("{} songs removed before adding", report.removed);
    }
    if report.added > 0 {
        success!("{} songs added to \"{}\"", report.added, report.playlist.name);
    }
}
