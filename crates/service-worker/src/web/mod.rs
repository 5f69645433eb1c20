//! `web-sys` implementations of the capability traits

pub mod capabilities;
pub mod clients;
pub mod display;
pub mod error;
pub mod events;
