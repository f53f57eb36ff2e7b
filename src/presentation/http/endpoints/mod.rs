pub mod health;
pub mod inbox_platform;
pub mod root;
pub mod wa_provider;
