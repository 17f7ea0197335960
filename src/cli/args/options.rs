use clap::ValueEnum;

/// What happens when a result row is chosen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum NavigationArg {
	/// Exit and print the selected url.
	Print,
	/// Open the selected url in the system browser and keep running.
	Browser,
}

impl NavigationArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			NavigationArg::Print => "print",
			NavigationArg::Browser => "browser",
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
