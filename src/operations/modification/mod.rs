mod trim;

pub use trim::TrimStrategy;
