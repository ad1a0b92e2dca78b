// SPDX-License-Identifier: MPL-2.0
use eyeson::app::{self, Flags};
use std::path::PathBuf;

const HELP: &str = "\
Eyes0n: browse short videos with hover previews

USAGE:
  eyeson [OPTIONS]

OPTIONS:
  --catalog <FILE>     JSON catalog to browse instead of the bundled one
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("eyeson=info"))
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let catalog_path: Option<PathBuf> = optional_arg(&mut args, "--catalog");
    let config_dir: Option<String> = optional_arg(&mut args, "--config-dir");

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }

    app::run(Flags {
        catalog_path,
        config_dir,
    })
}

fn optional_arg<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        log::warn!("ignoring {key}: {err}");
        None
    })
}
