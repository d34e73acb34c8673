#![allow(dead_code)]

pub mod test_db;

pub use test_db::*;
