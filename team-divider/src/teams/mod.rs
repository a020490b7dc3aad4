pub mod types;
pub mod coin;
pub mod split;

pub use types::{Team, TeamPair};
pub use coin::{CoinFlip, RandomCoin};
pub use split::split_teams;
