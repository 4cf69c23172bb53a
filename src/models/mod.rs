pub mod log_entry;
pub mod member;
pub mod record;
pub mod session;
pub mod snapshot;
pub mod status;

pub use log_entry::LogEntry;
pub use member::Member;
pub use record::AttendanceRecord;
pub use session::ActiveSession;
pub use snapshot::Snapshot;
pub use status::AttendanceStatus;
