//! Request and response bodies

pub mod rating;
pub mod records;
