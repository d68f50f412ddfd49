//! Macrotrack Engine Library
//!
//! Core aggregation and scaling logic for a personal calorie/macro tracker:
//! food catalog lookups, quantity scaling into meal entries, and nutrition
//! totals folded at meal and day level.

pub mod catalog;
pub mod error;
pub mod models;
pub mod nutrition;
