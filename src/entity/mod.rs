pub mod health;
pub mod stats;

pub use health::Health;
pub use stats::PlayerStats;
