//! Configuration loading and resolution.
//!
//! `load` layers default files, `--config` files, `TEXTPIN__*` environment
//! variables and CLI flags, then validates the result into a
//! [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;
