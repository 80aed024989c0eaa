pub mod clock;
mod game_loop;
mod input;
pub mod player;
mod state;

pub use clock::{Clock, FramePacer, MonotonicClock, Timer};
pub use game_loop::{FrameStats, GameLoop, LoopError, LoopState};
pub use input::{Action, InputCmd, InputSnapshot};
pub use player::{Player, Tuning};
pub use state::SimState;
