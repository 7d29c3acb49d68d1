//! Sequence modules generated by `build.rs`, compiled as ordinary modules.
//!
//! Each generated file imports its parent module, which is how `Point`
//! resolves inside `fpoint`.
//!
//! `fu32` is private and only partly used; dead code in it is denied so that
//! the generated items have to allow it themselves.
#![deny(dead_code)]

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

pub mod fstring {
    include!(concat!(env!("OUT_DIR"), "/fstring.rs"));
}

pub mod fi64 {
    include!(concat!(env!("OUT_DIR"), "/fi64.rs"));
}

pub mod fpoint {
    include!(concat!(env!("OUT_DIR"), "/fpoint.rs"));
}

mod fu32 {
    include!(concat!(env!("OUT_DIR"), "/fu32.rs"));
}

/// Copy `items` through a sequence of the private `fu32` module.
pub fn copy_u32(items: &[u32]) -> Vec<u32> {
    fu32::Sequence::lift(items).collect()
}
