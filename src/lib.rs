//! # cellevo
//!
//! Driver and display adapters for the cellevo simulation. The simulation
//! itself lives in `cellevo_core`; this crate runs it either headless or in
//! a terminal.

pub mod app;
