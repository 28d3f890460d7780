//! Identity types injected by the authentication gateway.
//!
//! Authentication itself (sign-in, sessions, token verification) is owned by
//! the gateway and its identity provider; hubdesk services only consume the
//! headers the gateway sets on proxied requests.

pub mod identity;
