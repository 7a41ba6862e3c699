#![allow(dead_code, unused_imports)]

pub mod fixtures;

pub use libntag::test_support::*;
