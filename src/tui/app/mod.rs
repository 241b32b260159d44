mod menu;
mod state;

pub use state::{AppState, Arrangement, InputAction, Scene, ShuffleMode};
