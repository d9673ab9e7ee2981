//! Webhook verification endpoint for OmniHub
//!
//! A small HTTP server that lets an external push service confirm it is
//! talking to this hub. The handshake follows the common subscribe
//! pattern: the service sends `hub.mode`, `hub.verify_token` and
//! `hub.challenge` as query parameters, and expects the challenge echoed
//! back when the token matches.

pub mod server;

pub use server::{router, serve, HookConfig};
