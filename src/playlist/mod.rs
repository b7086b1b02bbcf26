pub mod curated;
pub mod fallback;
pub mod resolver;
pub mod utils;

#[cfg(test)]
mod resolver_tests;

pub use resolver::*;
pub use utils::PlaylistFormatting;
