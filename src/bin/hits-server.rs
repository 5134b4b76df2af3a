//! Main entry point for `HitsServer`

#![deny(warnings, missing_docs, trivial_casts, unused_qualifications)]
#![forbid(unsafe_code)]

use hits_server::application::HITS_SERVER_APP;

/// Boot `HitsServer`
fn main() {
    abscissa_core::boot(&HITS_SERVER_APP);
}
