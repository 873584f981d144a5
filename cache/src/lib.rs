mod cache;
mod cfg_debug;
mod entry;
mod tagged_cache;

pub use cache::Cache;
pub use cfg_debug::CfgDebug;
pub use entry::{Entry, Tags};
pub use tagged_cache::TaggedCache;
