// Routed pages
// Built by the Pension & ISA Web Team (c)2025

mod home;

pub use home::HomePage;
