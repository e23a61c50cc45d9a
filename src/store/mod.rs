pub mod fixtures;

pub use fixtures::FixtureStore;
