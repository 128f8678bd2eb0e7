// SPDX-License-Identifier: MPL-2.0
use iced_mosaic::app::{self, Flags};
use std::ffi::OsString;
use std::path::PathBuf;

const HELP: &str = "\
IcedMosaic: a draggable, zoomable masonry wall of images

USAGE:
  iced_mosaic [OPTIONS] [IMAGE|DIRECTORY]...

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --shuffle              Shuffle the wall order
  -h, --help             Print this help

Without paths, the images listed under [gallery] in settings.toml are shown.
";

/// What the command line asked for.
#[derive(Debug)]
enum Command {
    Help,
    Run(Flags),
}

fn parse_args(raw: Vec<OsString>) -> Result<Command, pico_args::Error> {
    let mut args = pico_args::Arguments::from_vec(raw);

    if args.contains(["-h", "--help"]) {
        return Ok(Command::Help);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let shuffle = args.contains("--shuffle");

    let mut paths = Vec::new();
    for arg in args.finish() {
        let text = arg.to_string_lossy();
        // A lone "-" is left to the loader as a path.
        if text.starts_with('-') && text.len() > 1 {
            return Err(pico_args::Error::Utf8ArgumentParsingFailed {
                value: text.into_owned(),
                cause: "unknown option".to_string(),
            });
        }
        paths.push(PathBuf::from(arg));
    }

    Ok(Command::Run(Flags {
        lang,
        paths,
        shuffle,
        config_dir,
    }))
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = match parse_args(std::env::args_os().skip(1).collect()) {
        Ok(Command::Run(flags)) => flags,
        Ok(Command::Help) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    log::info!("Starting IcedMosaic");
    app::run(flags)
}
