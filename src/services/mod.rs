//! Services: turning a chat call's outcome into the text of an assistant turn.

mod reply;

pub use reply::turn_text;
