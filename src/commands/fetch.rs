//! Fetch command implementation

use console::{Style, Term};

use replaymod_fetch::config::PackageConfig;
use replaymod_fetch::error::Result;
use replaymod_fetch::reconcile::{Outcome, Reconciler};
use replaymod_fetch::registry::ArtifactRegistry;
use replaymod_fetch::transport::HttpTransport;

use crate::cli::FetchArgs;

/// Run fetch command
pub fn run(args: FetchArgs) -> Result<()> {
    let config = PackageConfig::default();
    let registry = ArtifactRegistry::builtin(&config)?;

    let show_progress = !args.no_progress && Term::stderr().is_term();
    let transport = HttpTransport::new()?.with_progress(show_progress);
    let reconciler = Reconciler::new(&registry, &config, transport);

    let directory = reconciler.managed_dir(&args.mods_dir);
    let (path, outcome) = reconciler.ensure_artifact_with_outcome(&args.game_version, &directory)?;

    let style = match outcome {
        Outcome::Reused => Style::new().green(),
        Outcome::Fetched | Outcome::Replaced | Outcome::Reset => Style::new().cyan(),
    };
    println!(
        "{} ({})",
        Style::new().bold().apply_to(path.display()),
        style.apply_to(outcome)
    );

    Ok(())
}
