//! ECS resources made available to systems.
//!
//! Overview
//! - `flipbookconfig` – authored flipbook settings loaded from INI or JSON
//! - `flipbookstore` – shared clips keyed by name
//! - `worldtime` – simulation time and delta
pub mod flipbookconfig;
pub mod flipbookstore;
pub mod worldtime;
