mod message;

pub use message::StatusMessage;
