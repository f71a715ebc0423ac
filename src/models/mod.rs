//! Typed views over GitHub API payloads.

mod issue;
mod repository;
mod search;
mod stats;
mod user;

pub use issue::*;
pub use repository::*;
pub use search::*;
pub use stats::*;
pub use user::*;
