//! Interactive quiz

pub mod runner;
