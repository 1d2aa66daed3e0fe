pub mod host;
pub mod protocol;

pub use host::{ExecutionHost, PendingSplit};
pub use protocol::{SplitOutcome, SplitRequest, SplitResponse};
