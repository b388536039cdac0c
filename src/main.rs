// SPDX-License-Identifier: MPL-2.0
use attachment_approval::app::{self, Flags};
use attachment_approval::config::PresentationMode;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: attachment_approval [--lang LOCALE] [--config-dir DIR] \
[--mode modal|shared-navigation] FILE...";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let parsed = (|| -> Result<Flags, pico_args::Error> {
        Ok(Flags {
            lang: args.opt_value_from_str("--lang")?,
            config_dir: args.opt_value_from_str("--config-dir")?,
            mode: args.opt_value_from_str::<_, PresentationMode>("--mode")?,
            files: Vec::new(),
        })
    })();
    let mut flags = match parsed {
        Ok(flags) => flags,
        Err(err) => {
            tracing::error!(%err, "invalid arguments");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    flags.files = args.finish().into_iter().map(PathBuf::from).collect();
    if flags.files.is_empty() {
        tracing::error!("no attachments given");
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    }

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "approval window failed");
            ExitCode::FAILURE
        }
    }
}
