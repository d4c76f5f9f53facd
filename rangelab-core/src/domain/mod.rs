//! Domain types shared by all analysis passes.

pub mod bar;

pub use bar::Bar;
