//! Configuration for the managed package
//!
//! This module contains data structures for:
//! - [`PackageConfig`] - identity of the package kept in the managed directory
//!   (name, remote location, file naming and embedded metadata entry)

pub mod package;

// Re-export commonly used types
pub use package::PackageConfig;
