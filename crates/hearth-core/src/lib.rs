pub mod board;
pub mod clock;
pub mod config;
pub mod intent;
pub mod logging;
pub mod pomodoro;
pub mod salat;
pub mod state;
pub mod store;
pub mod theme;
pub mod view;

pub use intent::Intent;
pub use state::AppState;
pub use store::{
  Store,
  Subscription
};
