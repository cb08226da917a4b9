//! Command implementations for replaymod-fetch CLI

pub mod completions;
pub mod fetch;
pub mod inspect;
pub mod version;
pub mod versions;
