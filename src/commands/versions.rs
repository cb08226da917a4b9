//! Versions command implementation

use console::Style;

use replaymod_fetch::config::PackageConfig;
use replaymod_fetch::error::Result;
use replaymod_fetch::registry::ArtifactRegistry;

/// Run versions command
pub fn run() -> Result<()> {
    let config = PackageConfig::default();
    let registry = ArtifactRegistry::builtin(&config)?;

    let version_style = Style::new().cyan().bold();
    let dim = Style::new().dim();

    println!("Supported Minecraft versions ({}):", registry.len());
    for descriptor in registry.versions() {
        println!(
            "  {}  {} {}",
            version_style.apply_to(format!("{:<8}", descriptor.platform_version)),
            config.display_name,
            descriptor.package_version
        );
        println!("    {}", dim.apply_to(descriptor.download_url(&config)));
    }

    Ok(())
}
