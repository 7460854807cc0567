//! Registered puzzle solutions, one module per year.

pub mod year_2022;
