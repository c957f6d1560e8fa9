mod error;
mod game;
mod player;
mod recording;
mod score;
mod tournament;
pub use error::*;
pub use game::*;
pub use player::*;
pub use recording::*;
pub use score::*;
pub use tournament::*;
