//! Computational core of the Fork and Flex fitness tracker.
//!
//! The presentation layer owns all state (the current profile, the editable
//! nutrition targets, the logged food entries) and calls into this crate for
//! the math:
//!
//! - [`calculator`] — the pure nutrition formulas: Mifflin-St Jeor BMR,
//!   TDEE, goal-adjusted calorie targets, macro splits, and per-entry
//!   nutrient scaling. No validation, no errors, no state.
//! - [`goals`] — the validating boundary around the calculator: rejects
//!   nonsense magnitudes and zero calorie denominators with a typed error
//!   instead of letting non-finite numbers leak to the caller.
//! - [`food_log`] — aggregation of logged food entries into daily totals,
//!   per-meal totals, and progress against the stored targets.
//! - [`models`] — the records shared with the UI and its storage layer.

pub mod calculator;
pub mod food_log;
pub mod goals;
pub mod models;
