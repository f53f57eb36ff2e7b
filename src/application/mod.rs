pub mod services;
pub mod translators;
pub mod usecases;
