//! Tooling for `<station>;<temperature>` measurement files: a
//! uniform-sampling generator for producing large benchmark inputs, and a
//! reference summarizer computing per-station min/mean/max.

pub mod generate;
pub mod names;
pub mod summary;
