//! Platform core behind the Readlog web frontend: profiles, follow
//! relationships, book entries and the activity statistics shown on a
//! profile page. HTTP routing, rendering and session handling live in the
//! embedding layer, this crate only returns plain data.

pub mod api;
pub mod config;
pub mod database;
pub mod global;

#[cfg(test)]
mod tests;
