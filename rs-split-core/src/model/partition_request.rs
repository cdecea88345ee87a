use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::infeasible::Infeasible;

/// Arguments of a single partition: spread `sum` over `count` slots,
/// each slot holding an integer in `[floor, ceiling]`.
///
/// A request is a transient argument set. Constructing one never fails;
/// feasibility is only evaluated by [`PartitionRequest::check`] (and again
/// by the generator at every level of the recursion).
///
/// # Feasibility
/// A solution exists iff
/// - `count >= 1`
/// - `floor <= ceiling`
/// - `count * floor <= sum <= count * ceiling`
///
/// Products are computed in `i128` so every `i64`/`usize` combination is
/// evaluated exactly.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartitionRequest {
	/// Target that the generated values must add up to.
	pub sum: i64,

	/// Number of values to generate.
	pub count: usize,

	/// Inclusive lower bound of every value.
	pub floor: i64,

	/// Inclusive upper bound of every value.
	pub ceiling: i64,
}

impl PartitionRequest {
	/// Creates a request. No validation is performed here.
	pub fn new(sum: i64, count: usize, floor: i64, ceiling: i64) -> Self {
		Self { sum, count, floor, ceiling }
	}

	/// Returns the range of sums that `count` values in `[floor, ceiling]`
	/// can reach, or `None` if the slots or the range are empty.
	pub fn reachable_sums(&self) -> Option<RangeInclusive<i128>> {
		reachable(self.count, self.floor, self.ceiling)
	}

	/// Runs the feasibility checks in order and reports the first failure.
	pub fn check(&self) -> Result<(), Infeasible> {
		check(self.sum as i128, self.count, self.floor, self.ceiling)
	}

	/// Returns `true` if at least one sequence satisfies the request.
	pub fn is_feasible(&self) -> bool {
		self.check().is_ok()
	}
}

/// Reachable sum range for a (sub)problem.
pub(crate) fn reachable(count: usize, floor: i64, ceiling: i64) -> Option<RangeInclusive<i128>> {
	if count < 1 || floor > ceiling {
		return None;
	}
	let count = count as i128;
	Some(count * floor as i128..=count * ceiling as i128)
}

/// Feasibility of a (sub)problem whose sum may already exceed `i64`.
pub(crate) fn check(sum: i128, count: usize, floor: i64, ceiling: i64) -> Result<(), Infeasible> {
	if count < 1 {
		return Err(Infeasible::NoSlots { count });
	}
	if floor > ceiling {
		return Err(Infeasible::EmptyRange { floor, ceiling });
	}

	let count = count as i128;
	let min = count * floor as i128;
	let max = count * ceiling as i128;
	if sum < min || sum > max {
		return Err(Infeasible::SumOutOfReach { sum, min, max });
	}
	Ok(())
}
