//! Constant values for the dsig library
//!
//! This crate holds the single authoritative table of scheme parameters. Every
//! other crate in the workspace reads N, q and the per-level bounds from here.

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

pub mod pqc;
