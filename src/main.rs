// SPDX-License-Identifier: MPL-2.0
use iced_catalog::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        source_url: args.opt_value_from_str("--source").unwrap_or(None),
        params: args.opt_value_from_str("--params").unwrap_or(None),
    };

    app::run(flags)
}
