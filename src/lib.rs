//! Label space clustering via stochastic block models fitted to label
//! co-occurrence graphs

pub mod config;
pub mod error;
pub mod data;
pub mod graph;
pub mod model;
pub mod cluster;
pub mod storage;

pub use anyhow::{Result, anyhow};
