mod load_event;
mod pick_event;
mod reject_event;

pub use load_event::*;
pub use pick_event::*;
pub use reject_event::*;
