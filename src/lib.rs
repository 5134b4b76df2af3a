//! `HitsServer`
//!
//! Application based on the [Abscissa] framework.
//!
//! Serves a directory of static files and counts every request that goes
//! through the file route. The count can be read from `/api/metrics` and
//! reset with `POST /api/reset`.
//!
//! [Abscissa]: https://github.com/iqlusioninc/abscissa

pub mod application;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod handlers;
pub mod hits;
pub mod log;
pub mod prelude;
pub mod state;
pub mod web;

#[cfg(test)]
pub(crate) mod test_helpers;
