use clap::Parser;

use newsmix::cli::{Cli, Commands};
use newsmix::config::Config;
use newsmix::domain::{SelectionCounts, Snapshot, Source};
use newsmix::errors::MixerResult;
use newsmix::services::{DigestService, SaveService, SnapshotService};
use newsmix::sources::{Fetcher, SourceRegistry};
use newsmix::storage::sqlite::{SqliteStorage, SqliteStoryRepository};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> MixerResult<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    // One extraction per run; every command reads the same snapshot.
    let registry = SourceRegistry::new(&config);
    let snapshot = SnapshotService::new(registry, Fetcher::new()).build()?;

    match cli.command {
        Commands::Preview { counts } => cmd_preview(&snapshot, counts.into()),
        Commands::Export { counts, output } => {
            cmd_export(&snapshot, counts.into(), &config, output)
        }
        Commands::Save { counts } => cmd_save(&snapshot, counts.into(), &config),
        Commands::Counts { json } => cmd_counts(&snapshot, json),
    }
}

fn cmd_preview(snapshot: &Snapshot, counts: SelectionCounts) -> MixerResult<()> {
    let selected = snapshot.selected(&counts)?;

    if selected.is_empty() {
        println!("Nothing selected.");
        return Ok(());
    }

    for (source, story) in selected {
        println!("{}", story.preview_line(source));
    }

    Ok(())
}

fn cmd_export(
    snapshot: &Snapshot,
    counts: SelectionCounts,
    config: &Config,
    output: Option<String>,
) -> MixerResult<()> {
    let path = output.map_or_else(|| config.html_path.clone(), Into::into);
    let service = DigestService::new(path.clone());

    service.export(snapshot, &counts)?;
    println!("Exported digest to {}", path.display());

    Ok(())
}

fn cmd_save(snapshot: &Snapshot, counts: SelectionCounts, config: &Config) -> MixerResult<()> {
    let storage = SqliteStorage::new(&config.db_path)?;
    let service = SaveService::new(SqliteStoryRepository::new(storage));

    let written = service.save(snapshot, &counts)?;
    println!("Saved {} stories to {}", written, config.db_path);

    Ok(())
}

fn cmd_counts(snapshot: &Snapshot, json: bool) -> MixerResult<()> {
    if json {
        let counts = snapshot.available_counts();
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    println!("Available headlines:\n");
    for source in Source::ALL {
        println!("  {}: {}", source.display_name(), snapshot.available(source));
    }

    Ok(())
}
