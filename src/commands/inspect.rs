//! Inspect command implementation

use console::Style;

use replaymod_fetch::config::PackageConfig;
use replaymod_fetch::error::Result;
use replaymod_fetch::metadata::{self, Mismatch};
use replaymod_fetch::registry::ArtifactRegistry;

use crate::cli::InspectArgs;

/// Run inspect command
pub fn run(args: InspectArgs) -> Result<()> {
    let config = PackageConfig::default();
    let found = metadata::inspect_file(&args.jar, &config)?;

    let label = Style::new().bold();
    println!("{} {}", label.apply_to("Id:     "), found.id);
    println!("{} {}", label.apply_to("Version:"), found.version);

    let Some(game_version) = args.game_version else {
        return Ok(());
    };

    let registry = ArtifactRegistry::builtin(&config)?;
    let descriptor = registry.resolve(&game_version)?;

    let verdict = match metadata::check_metadata(&found, &config, descriptor) {
        Ok(()) => Style::new().green().apply_to("up to date".to_string()),
        Err(Mismatch::Outdated { latest, .. }) => {
            Style::new().yellow().apply_to(format!("outdated (latest: {latest})"))
        }
        Err(Mismatch::WrongPackage { id }) => Style::new()
            .red()
            .apply_to(format!("not {} (id: {id})", config.display_name)),
    };
    println!("{} {}", label.apply_to("Status: "), verdict);

    Ok(())
}
