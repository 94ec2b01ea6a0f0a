mod message_dialog;

pub use message_dialog::{DialogChoice, MessageDialog};
