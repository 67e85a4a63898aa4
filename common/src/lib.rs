#![forbid(unsafe_code)]

#[cfg(feature = "config")]
pub mod config;
#[cfg(feature = "database")]
pub mod database;
#[cfg(feature = "logging")]
pub mod logging;

#[cfg(test)]
mod tests;
