//! Outbound dispatch of verification messages across delivery channels
//!
//! The router selects the configured `MessageSender` for a channel,
//! renders the language-appropriate message body, and applies the
//! environment-dependent failure policy.

mod router;
pub mod templates;

pub use router::ChannelRouter;
