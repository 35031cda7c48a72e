mod script;

pub use script::{Operation, Replay, Script};
