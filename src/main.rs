use std::env;
use std::ffi::OsStr;

use chrono::NaiveDate;
use log::{error, warn};
use seahorse::{App, Context, Flag, FlagType};

use liturgist::config::{Config, ConfigBuilder};
use liturgist::generate_bulletin;

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    if let Err(e) = run() {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

mod seahorse_exts {
    use std::path::PathBuf;

    use seahorse::Context;

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn optional_string_flag(&self, name: &str) -> Option<String> {
            self.context().string_flag(name).ok()
        }

        fn optional_path_flag(&self, name: &str) -> Option<PathBuf> {
            self.optional_string_flag(name).map(PathBuf::from)
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::ContextExt;

/// Accepts `MM/DD/YYYY`; `MM/DD/YY` is tolerated because schedule files
/// store two-digit years. The two-digit form must be tried first: `%Y`
/// accepts variable-width years and would read "25" as the year 25.
fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%m/%d/%y")
        .or_else(|_| NaiveDate::parse_from_str(value, "%m/%d/%Y"))
        .map_err(|_| anyhow::anyhow!("expected a date in MM/DD/YYYY format, got \"{}\"", value))
}

fn build_config(context: &Context) -> anyhow::Result<Config> {
    let schedule = context
        .args
        .first()
        .ok_or_else(|| anyhow::anyhow!("missing schedule file argument"))?;

    if context.args.len() > 1 {
        warn!("expected one argument but got {}", context.args.len());
    }

    let mut builder = ConfigBuilder::new(schedule);

    if let Some(date) = context.optional_string_flag("date") {
        builder.date(parse_date(&date)?);
    }

    if let Some(template) = context.optional_path_flag("template") {
        builder.template(template);
    }

    if let Some(output) = context.optional_path_flag("output") {
        builder.output(output);
    }

    if let Some(preserve_dir) = context.optional_path_flag("preserve-dir") {
        builder.preserve_dir(preserve_dir);
    }

    if let Some(converter) = context.optional_path_flag("converter") {
        builder.weasyprint_path(converter);
    }

    builder.print(context.bool_flag("print"));

    Ok(builder.build()?)
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!(
            "{} [flags] <schedule> (csv, ods, xlsx, and json are supported)",
            args[0]
        ))
        .flag(Flag::new("date", FlagType::String).description(
            "A date on the schedule to select data for the template, in MM/DD/YYYY. \
             Default: the coming Sunday.",
        ))
        .flag(
            Flag::new("template", FlagType::String)
                .description("Path to a template file using {{FIELD}} placeholders."),
        )
        .flag(Flag::new("print", FlagType::Bool).description("Print the selected data as JSON."))
        .flag(
            Flag::new("output", FlagType::String)
                .alias("o")
                .description("[optional] Path to the output file. Default: `output/out.pdf`"),
        )
        .flag(Flag::new("converter", FlagType::String).description(
            "[optional] Path to the weasyprint executable. Default: `weasyprint`",
        ))
        .flag(Flag::new("preserve-dir", FlagType::String).description(
            "[optional] Keeps the converter working directory here when conversion fails.",
        ))
        .action(|context: &Context| {
            let result = build_config(context).and_then(|config| generate_bulletin(&config));
            if let Err(e) = result {
                error!("{:?}", e);
                ::std::process::exit(1);
            }
        });

    app.run(args);

    Ok(())
}
