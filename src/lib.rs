//! Read-only gallery over a directory of remeshing results, one subfolder
//! per dataset.

pub mod config;
pub mod dataset;
pub mod export;
pub mod page;
pub mod routes;
pub mod selection;
pub mod state;
