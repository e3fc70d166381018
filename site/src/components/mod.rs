// Site components
// Built by the Pension & ISA Web Team (c)2025

//! Presentational components for the Pension & ISA site.
//!
//! Every component here is stateless: it renders the same markup on every
//! call and owns no signals, so the same tree serves the browser build and
//! the static renderer.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument (ssr only)
//! └── Shell
//!     ├── Nav
//!     └── main
//!         └── one of
//!             ├── HomePage
//!             │   ├── Hero
//!             │   └── Features
//!             ├── Features
//!             └── NotFound
//! ```

#[cfg(feature = "ssr")]
mod document;
mod features;
mod hero;
mod nav;
mod not_found;
mod shell;

#[cfg(feature = "ssr")]
pub use document::{SiteDocument, Stylesheet};
pub use features::{FEATURES, Feature, FeatureCard, Features};
pub use hero::Hero;
pub use nav::{NAV_LINKS, Nav, NavLink};
pub use not_found::NotFound;
pub use shell::Shell;
