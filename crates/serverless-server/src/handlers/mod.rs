//! HTTP handlers

pub mod echo;
pub mod health;
pub mod messages;

pub use echo::echo;
pub use health::health;
