#![cfg_attr(feature = "strict", deny(warnings))]

//! Client side of the session relay: fetches a signing session from the
//! backend and renders the embed URL into a sandboxed iframe shell.

pub mod config;
pub mod render;
pub mod requester;
