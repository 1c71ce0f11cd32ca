mod duration;
mod event;
mod timestamp;

pub use duration::*;
pub use event::*;
pub use timestamp::*;
