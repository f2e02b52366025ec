//! HTTP exchange for JSON-RPC envelopes.

mod request;

pub use request::send_envelope;
