mod counters;
mod loader_counters;

pub use loader_counters::LoaderCounters;
