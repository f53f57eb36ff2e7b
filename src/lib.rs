//! Bidirectional relay between a WhatsApp Business provider (Gupshup) and an agent
//! inbox (respond.io custom channel).
//!
//! User messages arrive on the provider webhook, are screened, translated into the
//! inbox's envelope and forwarded. Agent replies arrive on the inbox webhook and are
//! translated into the provider's form-encoded send request.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
