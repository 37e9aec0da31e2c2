// src/core.rs
pub mod calculator;
pub mod chart;
pub mod classifier;
pub mod export;
pub mod timetable;
