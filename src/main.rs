// SPDX-License-Identifier: MPL-2.0
use folio::app::{self, config, i18n::fluent::I18n, paths, Flags};
use folio::boot::{headless, RunOutcome};
use std::process::ExitCode;

const HELP: &str = "\
Usage: folio [OPTIONS]

Options:
  --lang <LOCALE>       Interface language (e.g. en-US)
  --config-dir <PATH>   Directory holding settings.toml
  --check               Run the boot sequence without a window and exit
  -h, --help            Print this help
";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("folio=info"))
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let check = args.contains("--check");
    let (lang, config_dir) = match parse_options(&mut args) {
        Ok(values) => values,
        Err(error) => {
            eprintln!("{error}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    paths::init_cli_overrides(config_dir.clone());

    if check {
        return run_check(lang);
    }

    match app::run(Flags { lang, config_dir }) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn parse_options(
    args: &mut pico_args::Arguments,
) -> Result<(Option<String>, Option<String>), pico_args::Error> {
    Ok((
        args.opt_value_from_str("--lang")?,
        args.opt_value_from_str("--config-dir")?,
    ))
}

fn run_check(lang: Option<String>) -> ExitCode {
    let (config, warning) = config::load();
    if let Some(key) = warning {
        log::warn!("{key}");
    }
    let i18n = I18n::new(lang, &config);

    match headless::run(&config, &i18n) {
        Ok(RunOutcome::Completed) => ExitCode::SUCCESS,
        Ok(outcome) => {
            log::warn!("Boot check did not complete: {outcome:?}");
            ExitCode::FAILURE
        }
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
