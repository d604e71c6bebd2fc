pub mod alerts;
pub mod contacts;
pub mod profile;
pub mod readings;
pub mod services;
pub mod sos;
