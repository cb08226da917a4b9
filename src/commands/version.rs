//! Version command implementation

use replaymod_fetch::config::PackageConfig;
use replaymod_fetch::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    let config = PackageConfig::default();

    println!("replaymod-fetch {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!(
        "  Default {} version: {}",
        config.display_name, config.default_package_version
    );

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
