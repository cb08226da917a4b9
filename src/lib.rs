//! replaymod-fetch - keeps ReplayMod installed for a Fabric instance
//!
//! Given a Minecraft version, resolves the pinned ReplayMod release, makes sure
//! the managed directory (`<mods>/replaymod/`) holds exactly one valid copy of
//! it and returns the jar path for the mod loader to discover.
//!
//! ```no_run
//! use std::path::Path;
//! use replaymod_fetch::config::PackageConfig;
//! use replaymod_fetch::reconcile::Reconciler;
//! use replaymod_fetch::registry::ArtifactRegistry;
//! use replaymod_fetch::transport::HttpTransport;
//!
//! # fn main() -> replaymod_fetch::error::Result<()> {
//! let config = PackageConfig::default();
//! let registry = ArtifactRegistry::builtin(&config)?;
//! let reconciler = Reconciler::new(&registry, &config, HttpTransport::new()?);
//! let jar = reconciler.ensure_in_base("1.20.4", Path::new("mods"))?;
//! println!("{}", jar.display());
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod config;
pub mod error;
pub mod host;
pub mod metadata;
pub mod progress;
pub mod reconcile;
pub mod registry;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_fixtures;
