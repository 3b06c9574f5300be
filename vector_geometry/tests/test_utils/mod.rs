#![allow(dead_code)]
mod fixtures;
mod geometry_test_properties;

pub use fixtures::*;
pub use geometry_test_properties::*;
