pub mod delivery;
pub mod gupshup;
pub mod respond_io;
