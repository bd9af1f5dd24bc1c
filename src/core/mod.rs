pub mod config;
pub mod constants;
pub mod fade;
pub mod inactivity;
pub mod motion;
pub mod playback;
pub mod session;
pub mod state;
pub mod timer;
pub mod volume;

pub use config::*;
pub use fade::*;
pub use inactivity::*;
pub use motion::*;
pub use playback::*;
pub use session::*;
pub use state::*;
pub use timer::*;
pub use volume::*;
