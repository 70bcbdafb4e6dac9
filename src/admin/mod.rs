//! Administrative collaborator: session-gated product management.
//!
//! Authentication lives here and only here. The store, the gate and the scan
//! path never see a session.

mod console;
mod session;

pub use console::*;
pub use session::*;
