//! Session lifecycle: opaque token generation, the session store, and
//! background activity recording.

pub mod activity;
pub mod store;
pub mod token;

pub use activity::ActivityRecorder;
pub use store::SessionStore;
