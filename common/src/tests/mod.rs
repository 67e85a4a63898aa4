#[cfg(feature = "database")]
mod database;
