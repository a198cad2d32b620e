// SPDX-License-Identifier: MPL-2.0
use dog_gallery::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,dog_gallery=debug";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> iced::Result {
    init_tracing();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: read_option(&mut args, "--lang"),
        config_dir: read_option(&mut args, "--config-dir"),
        api_base: read_option(&mut args, "--api-base"),
    };

    let leftover = args.finish();
    if !leftover.is_empty() {
        tracing::warn!(?leftover, "ignoring unrecognized arguments");
    }

    app::run(flags)
}

fn read_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(%key, error = %err, "invalid command-line value");
        None
    })
}
