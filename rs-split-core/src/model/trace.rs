/// Log target used by [`LogSink`].
pub const TRACE_TARGET: &str = "rs_split::trace";

/// Receiver of the human-readable trace emitted while a partition is built.
///
/// `indent` grows by one unit per recursion depth. Sinks only observe:
/// whatever they do, the generated values are the same.
pub trait TraceSink {
	fn record(&mut self, indent: &str, line: &str);
}

/// Forwards every trace line to the `log` facade at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
	fn record(&mut self, indent: &str, line: &str) {
		log::debug!(target: TRACE_TARGET, "{indent}{line}");
	}
}

/// Collects trace lines in memory, indentation included.
impl TraceSink for Vec<String> {
	fn record(&mut self, indent: &str, line: &str) {
		self.push(format!("{indent}{line}"));
	}
}
