//! Command-line front end

pub mod simulate;
