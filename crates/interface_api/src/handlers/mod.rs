//! Route handlers

pub mod health;
pub mod rating;
pub mod records;
