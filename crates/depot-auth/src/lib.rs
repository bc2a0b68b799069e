//! # depot-auth
//!
//! The session gate: resolves an inbound opaque token to a user identity
//! against the session store, or rejects the request.

pub mod session;

pub use session::SessionGate;
