pub mod game_over;
pub mod play;

pub use game_over::GameOverPage;
pub use play::PlayPage;
