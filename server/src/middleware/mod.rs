mod latency;
mod leaked_5xx;

pub use latency::latency_ms;
pub use leaked_5xx::handle_leaked_5xx;
