pub mod load;

pub use load::{failure_message, LoadState, MessageState};
