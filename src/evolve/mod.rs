//! Generation advance: bounds adjustment, B3/S23 rule evaluation and diff
//! emission.

mod bounds;
mod engine;
mod rules;

pub use bounds::{MARGIN, adjust_bounds, live_extent};
pub use engine::{Change, advance, advance_collect, advance_quiet, alive_neighbor_count};
pub use rules::{CONWAY, RuleTable};
