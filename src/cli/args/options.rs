use clap::ValueEnum;

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// Log levels accepted on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogLevelArg {
	Off,
	Error,
	Warn,
	Info,
	Debug,
	Trace,
}

impl LogLevelArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			Self::Off => "off",
			Self::Error => "error",
			Self::Warn => "warn",
			Self::Info => "info",
			Self::Debug => "debug",
			Self::Trace => "trace",
		}
	}
}
