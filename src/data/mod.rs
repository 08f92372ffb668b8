//! Label matrix representations

pub mod matrix;

pub use matrix::SparseLabelMatrix;
