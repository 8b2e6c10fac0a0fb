// SPDX-License-Identifier: MPL-2.0
use toasty::app::{self, Flags};

fn main() -> iced::Result {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_local_timestamps()
        .init()
        .expect("failed to build logger instance");

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        channel: args.opt_value_from_str("--channel").unwrap(),
    };

    app::run(flags)
}
