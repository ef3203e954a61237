pub mod entry;
pub mod format;
pub mod request;
pub mod user;

pub use entry::{CreatedEntries, Entry, EntryId, NewEntry};
pub use request::{CreatedRequest, NewRequest, Request, RequestDetail, Submission};
pub use user::{LoginRequest, Role, SessionResponse, SessionUser, User};
