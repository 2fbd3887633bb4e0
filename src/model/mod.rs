pub mod leaderboard;
pub mod pick;
pub mod score;
pub mod tournament;
pub mod utils;

pub use leaderboard::*;
pub use pick::*;
pub use score::*;
pub use tournament::*;
pub use utils::*;
