//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the `auth` transport seam on top of browser `fetch`.

pub mod api;
