//! Data vectors, examples, and datasets.

pub mod dataset;
pub mod example;
pub mod matrix;
pub mod ops;
pub mod parse;
pub mod synthetic;
pub mod vector;

pub use dataset::Dataset;
pub use example::Example;
pub use vector::DataVector;
