// Profile domain: the mutable record, its persistence gateway, and session
// ownership. Handlers apply edits to the live record, then write through to
// the store.

pub mod handlers;
pub mod record;
pub mod session;
pub mod store;
