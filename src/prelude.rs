//! Application-local prelude: conveniently import types/functions/macros
//! which are generally useful and should be available in every module with
//! `use crate::prelude::*;`

/// Abscissa core prelude
pub use abscissa_core::prelude::*;

/// Application state
pub use crate::application::HITS_SERVER_APP;
