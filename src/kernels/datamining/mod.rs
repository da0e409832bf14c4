// src/kernels/datamining/mod.rs

pub mod correlation;
