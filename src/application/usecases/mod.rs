pub mod relay_inbound;
pub mod relay_outgoing;
