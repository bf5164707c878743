//! RationBot relay: forwards chat messages from the ration-distribution web client
//! to a hosted chat-completion endpoint and returns the reply.

pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
