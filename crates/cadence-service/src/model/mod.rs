pub mod event;
pub mod time_format;

pub use event::{Event, EventDraft, EventUpdate, MarkedEvent};
