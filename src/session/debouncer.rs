use std::time::{Duration, Instant};

/// Quiet period used when nothing else is configured.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// What a text change did to the pending query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChange {
	/// The text was empty or whitespace; nothing is pending.
	Blank,
	/// The countdown (re)started and fires at `deadline`.
	Scheduled { deadline: Instant },
}

#[derive(Debug, Clone)]
struct Pending {
	text: String,
	deadline: Instant,
}

/// Delays a query until input has been quiet for a fixed interval.
///
/// The clock is passed in by the caller so the debouncer never sleeps and can
/// be driven from the frame loop or from tests.
#[derive(Debug, Clone)]
pub struct Debouncer {
	delay: Duration,
	pending: Option<Pending>,
}

impl Default for Debouncer {
	fn default() -> Self {
		Self::new(DEFAULT_DEBOUNCE)
	}
}

impl Debouncer {
	#[must_use]
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			pending: None,
		}
	}

	#[must_use]
	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Record a text change observed at `now`.
	///
	/// Non-blank text replaces whatever was pending and restarts the countdown.
	/// Blank text drops the pending query without scheduling anything.
	pub fn input(&mut self, text: &str, now: Instant) -> InputChange {
		let trimmed = text.trim();
		if trimmed.is_empty() {
			self.pending = None;
			return InputChange::Blank;
		}

		let deadline = now + self.delay;
		self.pending = Some(Pending {
			text: trimmed.to_string(),
			deadline,
		});
		InputChange::Scheduled { deadline }
	}

	/// Take the settled query if its countdown has elapsed by `now`.
	pub fn poll(&mut self, now: Instant) -> Option<String> {
		let due = self
			.pending
			.as_ref()
			.is_some_and(|pending| now >= pending.deadline);
		if !due {
			return None;
		}
		self.pending.take().map(|pending| pending.text)
	}

	#[must_use]
	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.deadline)
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	pub fn cancel(&mut self) {
		self.pending = None;
	}
}
