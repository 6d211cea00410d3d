pub mod animal;
pub mod config;
pub mod events;
pub mod game;
pub mod input;
pub mod menu;
pub mod rng;
pub mod zoo;

pub use animal::{Animal, CustomTraits, Species};
pub use config::GameConfig;
pub use game::{Game, GameSummary};
pub use zoo::{ExitReason, FeedType, Zoo};
