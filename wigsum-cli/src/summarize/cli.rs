use std::ffi::OsString;

use clap::{ArgAction, Command, arg, value_parser};

pub const SUMMARIZE_CMD: &str = "wigsum";

pub const DATASET_ARG: &str = "dataset";
pub const MODE_ARG: &str = "mode";
pub const WIGGLE_ARG: &str = "wiggle";
pub const BINS_ARG: &str = "bins";
pub const LEGACY_OFFSET_ARG: &str = "legacy-offset";
pub const VERBOSE_ARG: &str = "verbose";

/// Single-dash spellings accepted by the old summary scripts.
pub const LEGACY_FLAGS: [&str; 3] = ["-dataset", "-mode", "-wiggle"];

/// Flags whose next token is their value.
const VALUE_FLAGS: [&str; 4] = ["--dataset", "--mode", "--wiggle", "--bins"];

pub fn create_summarize_cli() -> Command {
    Command::new(SUMMARIZE_CMD)
        .about("Average a hgWiggle conservation dump over its whole region and over equal bins, appending the results to per-dataset reports.")
        .arg_required_else_help(true)
        .arg(arg!(--dataset <dataset> "Prefix of the report files (<dataset>_summary_region.txt, <dataset>_summary_bins.txt)").required(true))
        .arg(
            arg!(--mode <mode> "1: region and bin averages, 2: region average only. Any other number writes nothing")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(arg!(--wiggle <wiggle> "hgWiggle output for a single region, optionally gzipped").required(true))
        .arg(
            arg!(--bins <bins> "Number of bins for mode 1")
                .value_parser(value_parser!(u64).range(1..))
                .default_value("50"),
        )
        .arg(
            arg!(--"legacy-offset" "Store a score one slot past its position, as older reports did. By default position `start` lands in the first slot")
                .action(ArgAction::SetTrue),
        )
        .arg(arg!(-v --verbose "Increase logging, may be repeated").action(ArgAction::Count))
}

///
/// Rewrite the single-dash legacy flags (`-dataset`, `-mode`, `-wiggle`)
/// to their double-dash form so clap can parse them.
///
/// Only tokens in flag position are rewritten, a flag's value is passed
/// through as is.
///
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut is_value = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let arg = match arg.to_str() {
                Some(flag) if !is_value && LEGACY_FLAGS.contains(&flag) => {
                    OsString::from(format!("-{}", flag))
                }
                _ => arg,
            };
            is_value = !is_value && arg.to_str().is_some_and(|flag| VALUE_FLAGS.contains(&flag));
            arg
        })
        .collect()
}
