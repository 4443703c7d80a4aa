// SPDX-License-Identifier: MPL-2.0
use iced_toaster::app::{self, Flags};
use iced_toaster::config::Edge;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Toaster demo

USAGE:
  iced_toaster [OPTIONS]

OPTIONS:
  --config-dir <DIR>         Directory containing settings.toml
  --position <top|bottom>    Edge the toasts are anchored to
  -h, --help                 Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        position: args.opt_value_from_str::<_, Edge>("--position")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: unused arguments {remaining:?}");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    tracing::info!(?flags, "starting toaster demo");
    app::run(flags)
}
