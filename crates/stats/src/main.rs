use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use invtrack_stats::{Snapshot, StatsAggregator, StatsConfig};

/// Prints the dashboard summary of an inventory snapshot as JSON.
#[derive(Parser, Debug)]
#[command(name = "invtrack-stats", version, about)]
struct Cli {
    /// Fail when the snapshot has dangling references or invalid records
    #[arg(long)]
    strict: bool,

    /// Snapshot JSON file; read from stdin when omitted
    snapshot: Option<PathBuf>,
}

fn read_snapshot(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read snapshot from {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read snapshot from stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<()> {
    invtrack_observability::init();

    let cli = Cli::parse();
    let raw = read_snapshot(cli.snapshot.as_ref())?;
    let snapshot = Snapshot::from_json(&raw).context("invalid snapshot")?;

    let issues = snapshot.integrity_report();
    if !issues.is_empty() {
        warn!(count = issues.len(), "snapshot has integrity issues");
        for issue in &issues {
            warn!(%issue, "integrity issue");
        }
        if cli.strict {
            snapshot.ensure_consistent()?;
        }
    }

    let config = StatsConfig::from_env();
    info!(?config, "computing dashboard stats");

    let summary = StatsAggregator::new(config).compute(&snapshot);
    let out = serde_json::to_string_pretty(&summary).context("failed to encode summary")?;
    println!("{out}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn snapshot_path_is_optional() {
        let cli = Cli::try_parse_from(["invtrack-stats"]).unwrap();
        assert!(!cli.strict);
        assert_eq!(cli.snapshot, None);
    }

    #[test]
    fn parses_strict_and_path() {
        let cli = Cli::try_parse_from(["invtrack-stats", "--strict", "snap.json"]).unwrap();
        assert!(cli.strict);
        assert_eq!(cli.snapshot, Some(PathBuf::from("snap.json")));
    }

    #[test]
    fn rejects_unknown_flags_and_extra_paths() {
        assert!(Cli::try_parse_from(["invtrack-stats", "--verbose"]).is_err());
        assert!(Cli::try_parse_from(["invtrack-stats", "a.json", "b.json"]).is_err());
    }
}
