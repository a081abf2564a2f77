//! Authentication: the local admin credential check and the student portal
//! login, both persisting their session under well-known keys, plus the
//! registration status lookup the wizard verifies identities with. The two
//! sessions are independent; signing out of one leaves the other intact.

pub mod client;
pub mod types;
