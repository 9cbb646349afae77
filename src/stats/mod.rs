//! Stats module - box plot statistics

mod calculator;

pub use calculator::{BoxStats, StatsCalculator, WHISKER_IQR_FACTOR};
