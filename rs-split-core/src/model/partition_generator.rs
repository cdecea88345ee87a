use crate::model::infeasible::Infeasible;
use crate::model::partition_request::{self, PartitionRequest};
use crate::model::trace::{LogSink, TraceSink};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::{max, min};

/// Default indentation added to trace lines per recursion depth.
pub const DEFAULT_INDENT: &str = "  ";

/// Builds random integer sequences with a fixed length, bounded values
/// and an exact sum.
///
/// # Algorithm
/// The `count` slots are split into two halves (`first = count - count / 2`,
/// `second = count / 2`). The sub-sum of the first half is drawn uniformly
/// from the interval that both halves can still honour, the second half
/// takes the remainder, and each half is solved recursively. Results are
/// concatenated, first half then second half.
///
/// The final sequence is *not* uniformly distributed over all valid
/// sequences: earlier splits shape later ones.
///
/// # Tracing
/// Tracing is a per-generator setting. When on, every level of the
/// recursion reports its arguments, the split and the drawn sub-sums to a
/// [`TraceSink`]. It never changes the output.
#[derive(Clone, Debug)]
pub struct PartitionGenerator {
	trace: bool,
	indent: String,
}

impl Default for PartitionGenerator {
	fn default() -> Self {
		Self::new()
	}
}

impl PartitionGenerator {
	/// Creates a generator with tracing disabled.
	pub fn new() -> Self {
		Self { trace: false, indent: DEFAULT_INDENT.to_owned() }
	}

	/// Enables trace output.
	pub fn trace_on(&mut self) {
		self.trace = true;
	}

	/// Disables trace output.
	pub fn trace_off(&mut self) {
		self.trace = false;
	}

	/// Returns `true` if trace output is enabled.
	pub fn is_tracing(&self) -> bool {
		self.trace
	}

	/// Sets the string prepended once per recursion depth in trace lines.
	pub fn with_indent(mut self, unit: &str) -> Self {
		self.indent = unit.to_owned();
		self
	}

	/// Generates a sequence using the thread-local RNG.
	///
	/// Trace lines, if enabled, go to the `log` facade.
	pub fn generate(&self, request: &PartitionRequest) -> Result<Vec<i64>, Infeasible> {
		self.generate_with(request, &mut rand::rng(), &mut LogSink)
	}

	/// Generates a sequence from a seeded `StdRng`.
	///
	/// The same seed and request always produce the same sequence.
	pub fn generate_seeded(&self, request: &PartitionRequest, seed: u64) -> Result<Vec<i64>, Infeasible> {
		self.generate_with(request, &mut StdRng::seed_from_u64(seed), &mut LogSink)
	}

	/// Generates a sequence with a caller-provided randomness source and
	/// trace sink.
	///
	/// # Returns
	/// - `Ok(values)`: exactly `count` values in `[floor, ceiling]` adding up to `sum`.
	/// - `Err(Infeasible)`: no such sequence exists.
	pub fn generate_with<R, S>(
		&self,
		request: &PartitionRequest,
		rng: &mut R,
		sink: &mut S,
	) -> Result<Vec<i64>, Infeasible>
	where
		R: Rng,
		S: TraceSink + ?Sized,
	{
		let mut walk = Walk {
			rng,
			sink,
			trace: self.trace,
			unit: &self.indent,
			floor: request.floor,
			ceiling: request.ceiling,
			values: Vec::new(),
		};
		walk.split(request.sum as i128, request.count, "")?;

		let values = walk.values;
		if self.trace {
			walk.sink.record("", &format!("result: {} values", values.len()));
			for (i, value) in values.iter().enumerate() {
				walk.sink.record("", &format!("{i}: {value}"));
			}
			let total: i128 = values.iter().map(|&v| v as i128).sum();
			walk.sink.record("", &format!("result sum = {total}"));
		}
		Ok(values)
	}
}

/// State of one `generate_with` call.
///
/// `floor` and `ceiling` never change across the recursion; only the sum
/// and the slot count shrink.
struct Walk<'a, R: Rng, S: TraceSink + ?Sized> {
	rng: &'a mut R,
	sink: &'a mut S,
	trace: bool,
	unit: &'a str,
	floor: i64,
	ceiling: i64,
	values: Vec<i64>,
}

impl<R: Rng, S: TraceSink + ?Sized> Walk<'_, R, S> {
	fn note(&mut self, indent: &str, line: impl FnOnce() -> String) {
		if self.trace {
			self.sink.record(indent, &line());
		}
	}

	/// Appends `count` values adding up to `sum` to `self.values`.
	fn split(&mut self, sum: i128, count: usize, indent: &str) -> Result<(), Infeasible> {
		let (floor, ceiling) = (self.floor, self.ceiling);
		self.note(indent, || format!("sum={sum} count={count} floor={floor} ceiling={ceiling}"));

		if let Err(e) = partition_request::check(sum, count, floor, ceiling) {
			self.note(indent, || e.to_string());
			return Err(e);
		}

		if count == 1 {
			self.note(indent, || format!("base case: {sum}"));
			let value = i64::try_from(sum).map_err(|_| Infeasible::SumOutOfReach {
				sum,
				min: floor as i128,
				max: ceiling as i128,
			})?;
			self.values.push(value);
			return Ok(());
		}

		// Odd counts give the extra slot to the first half
		let second_count = count / 2;
		let first_count = count - second_count;
		self.note(indent, || format!("first={first_count} second={second_count}"));

		let second_floor = floor as i128 * second_count as i128;
		let second_ceiling = ceiling as i128 * second_count as i128;
		let first_floor = max(floor as i128 * first_count as i128, sum - second_ceiling);
		let first_ceiling = min(ceiling as i128 * first_count as i128, sum - second_floor);
		self.note(indent, || format!("first range [{first_floor}, {first_ceiling}]"));
		self.note(indent, || format!("second range [{second_floor}, {second_ceiling}]"));

		// Non-empty because `sum` passed the check above
		let first_sum = self.rng.random_range(first_floor..=first_ceiling);
		let second_sum = sum - first_sum;
		self.note(indent, || format!("first_sum={first_sum} second_sum={second_sum}"));

		let deeper = format!("{indent}{}", self.unit);
		self.split(first_sum, first_count, &deeper)?;
		self.split(second_sum, second_count, &deeper)
	}
}

/// Generates `count` random integers in `[floor, ceiling]` adding up to `sum`.
///
/// Uses the thread-local RNG, without tracing.
pub fn generate(sum: i64, count: usize, floor: i64, ceiling: i64) -> Result<Vec<i64>, Infeasible> {
	PartitionGenerator::new().generate(&PartitionRequest::new(sum, count, floor, ceiling))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn assert_valid(values: &[i64], request: &PartitionRequest) {
		assert_eq!(values.len(), request.count);
		assert!(values.iter().all(|v| (request.floor..=request.ceiling).contains(v)));
		assert_eq!(values.iter().sum::<i64>(), request.sum);
	}

	#[test]
	fn single_slot_holds_the_sum() {
		assert_eq!(generate(5, 1, 0, 10), Ok(vec![5]));
	}

	#[test]
	fn equal_bounds_force_every_slot() {
		for _ in 0..20 {
			assert_eq!(generate(6, 3, 2, 2), Ok(vec![2, 2, 2]));
		}
	}

	#[test]
	fn unreachable_sum_is_infeasible() {
		assert_eq!(
			generate(100, 3, 0, 10),
			Err(Infeasible::SumOutOfReach { sum: 100, min: 0, max: 30 })
		);
	}

	#[test]
	fn zero_count_is_infeasible() {
		assert_eq!(generate(5, 0, 0, 10), Err(Infeasible::NoSlots { count: 0 }));
		assert_eq!(generate(0, 0, 0, 10), Err(Infeasible::NoSlots { count: 0 }));
	}

	#[test]
	fn inverted_bounds_are_infeasible() {
		assert_eq!(generate(0, 2, 1, -1), Err(Infeasible::EmptyRange { floor: 1, ceiling: -1 }));
	}

	#[test]
	fn negative_range() {
		let request = PartitionRequest::new(1, 20, -3, 3);
		for _ in 0..50 {
			let values = PartitionGenerator::new().generate(&request).unwrap();
			assert_valid(&values, &request);
		}
	}

	#[test]
	fn entirely_negative_bounds() {
		let request = PartitionRequest::new(-37, 9, -8, -2);
		let values = PartitionGenerator::new().generate_seeded(&request, 11).unwrap();
		assert_valid(&values, &request);
	}

	#[test]
	fn extreme_values_stay_in_i64() {
		let request = PartitionRequest::new(i64::MAX, 2, i64::MAX - 1, i64::MAX);
		assert!(!request.is_feasible());

		let request = PartitionRequest::new(-2, 4, i64::MIN, i64::MAX);
		let values = PartitionGenerator::new().generate_seeded(&request, 3).unwrap();
		assert_eq!(values.len(), 4);
		assert_eq!(values.iter().map(|&v| v as i128).sum::<i128>(), -2);
	}

	#[test]
	fn seeded_generation_is_reproducible() {
		let generator = PartitionGenerator::new();
		let request = PartitionRequest::new(17, 11, -5, 9);
		let a = generator.generate_seeded(&request, 42).unwrap();
		let b = generator.generate_seeded(&request, 42).unwrap();
		assert_eq!(a, b);
		assert_valid(&a, &request);
	}

	#[test]
	fn odd_count_gives_the_extra_slot_to_the_first_half() {
		let mut generator = PartitionGenerator::new();
		generator.trace_on();

		let mut lines: Vec<String> = Vec::new();
		let request = PartitionRequest::new(12, 5, 0, 5);
		let values = generator
			.generate_with(&request, &mut StdRng::seed_from_u64(7), &mut lines)
			.unwrap();
		assert_valid(&values, &request);

		assert_eq!(lines[0], "sum=12 count=5 floor=0 ceiling=5");
		assert_eq!(lines[1], "first=3 second=2");
		// 3 slots may hold [max(0, 12 - 10), min(15, 12)]
		assert_eq!(lines[2], "first range [2, 12]");
		assert_eq!(lines[3], "second range [0, 10]");
		// The first half recurses one level deeper and splits 2 + 1
		assert!(lines.contains(&"  first=2 second=1".to_owned()));
		assert!(lines.contains(&"    first=1 second=1".to_owned()));
		assert!(lines.iter().any(|l| l.starts_with("  sum=") && l.ends_with("count=3 floor=0 ceiling=5")));
		assert!(lines.iter().any(|l| l.starts_with("  sum=") && l.ends_with("count=2 floor=0 ceiling=5")));
		assert_eq!(lines.last().map(String::as_str), Some("result sum = 12"));
	}

	#[test]
	fn trace_reports_failures() {
		let mut generator = PartitionGenerator::new().with_indent("..");
		generator.trace_on();

		let mut lines: Vec<String> = Vec::new();
		let result = generator.generate_with(
			&PartitionRequest::new(100, 3, 0, 10),
			&mut StdRng::seed_from_u64(0),
			&mut lines,
		);
		assert!(result.is_err());
		assert_eq!(
			lines,
			vec![
				"sum=100 count=3 floor=0 ceiling=10".to_owned(),
				"no solution: sum 100 is outside the reachable range [0, 30]".to_owned(),
			]
		);
	}

	#[test]
	fn custom_indent_is_used_per_depth() {
		let mut generator = PartitionGenerator::new().with_indent("..");
		generator.trace_on();

		let mut lines: Vec<String> = Vec::new();
		generator
			.generate_with(&PartitionRequest::new(4, 4, 1, 1), &mut StdRng::seed_from_u64(0), &mut lines)
			.unwrap();
		assert!(lines.contains(&"..sum=2 count=2 floor=1 ceiling=1".to_owned()));
		assert!(lines.contains(&"....base case: 1".to_owned()));
	}

	#[test]
	fn tracing_does_not_change_the_output() {
		let request = PartitionRequest::new(3, 13, -4, 4);
		let quiet = PartitionGenerator::new();
		let mut loud = PartitionGenerator::new();
		loud.trace_on();
		assert!(loud.is_tracing());

		let mut lines: Vec<String> = Vec::new();
		let a = quiet
			.generate_with(&request, &mut StdRng::seed_from_u64(9), &mut lines)
			.unwrap();
		assert!(lines.is_empty());
		let b = loud
			.generate_with(&request, &mut StdRng::seed_from_u64(9), &mut lines)
			.unwrap();
		assert_eq!(a, b);
		assert!(!lines.is_empty());

		loud.trace_off();
		assert!(!loud.is_tracing());
	}
}
