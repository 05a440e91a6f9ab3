// crates/infra/src/output/mod.rs
mod router;

pub use router::{ChannelOpener, FileOpener, OutputRouter};
