pub mod context;
pub mod derived;
pub mod error;
pub mod myapp;
pub mod store;

#[cfg(test)]
pub mod testing;
