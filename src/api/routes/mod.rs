//! API Routes
//!
//! Route handlers organized by functionality.

pub mod health;
pub mod page;
pub mod ratings;
pub mod scores;
