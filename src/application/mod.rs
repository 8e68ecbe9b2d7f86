mod animation;
mod game_state;
mod scheduler;

pub use animation::{AnimationDriver, Playback, DEFAULT_RATE, MAX_RATE, MIN_RATE};
pub use game_state::GameState;
pub use scheduler::{FrameScheduler, ManualScheduler, TickHandle};
pub(crate) use animation::validate_rate;
