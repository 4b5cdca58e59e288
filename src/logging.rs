use crate::config::Config;

/// Installs the global fmt subscriber.
///
/// Under systemd the journal stamps every line itself, so timestamps and
/// colors are left out.
pub fn init(config: &Config) {
    let builder = tracing_subscriber::fmt().with_max_level(config.log_level());

    if config.systemd {
        builder.without_time().with_ansi(false).init();
    } else {
        builder.init();
    }
}
