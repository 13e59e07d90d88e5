//! Logger setup for the CLI.

use std::io::Write;

use env_logger::{Builder, Env, Target};

/// Initializes the stderr logger.
///
/// The default filter is `warn`, so normal runs emit nothing besides the
/// report lines on stdout; set `RUST_LOG` to raise verbosity. Calling this
/// more than once is harmless.
pub fn init() {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "{} {}", record.level(), record.args()));
    let _ = builder.try_init();
}
