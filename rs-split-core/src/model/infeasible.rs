use thiserror::Error;

/// Outcome returned when no integer sequence satisfies a request.
///
/// This is the only failure a partition can produce. Malformed input
/// (`count == 0`, inverted bounds) and unsatisfiable input (a sum out of
/// reach) are the same kind of answer for a caller: "no solution". The
/// variants only exist so the message can say why.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Infeasible {
	/// At least one slot is required; zero slots is not an empty answer.
	#[error("no solution: count must be at least 1, got {count}")]
	NoSlots { count: usize },

	/// The per-slot range `[floor, ceiling]` contains no integer.
	#[error("no solution: floor {floor} is above ceiling {ceiling}")]
	EmptyRange { floor: i64, ceiling: i64 },

	/// `count` values within the bounds cannot add up to `sum`.
	#[error("no solution: sum {sum} is outside the reachable range [{min}, {max}]")]
	SumOutOfReach { sum: i128, min: i128, max: i128 },
}
