use std::path::PathBuf;

use shiftck_semantics::Width;

use crate::{Config, ConfigError};

const SHIFTCK_FLAG_PREFIX: &str = "-S";

/// Overrides `config` with the `-S<key>[=<value>]` flags in `args`.
pub(crate) fn apply<I, S>(config: &mut Config, args: I) -> Result<(), ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for arg in args {
        let arg = arg.as_ref();
        let Some((key, value)) = parse_shiftck_arg(arg) else {
            return Err(ConfigError::UnexpectedArg(arg.to_string()));
        };

        let result = match key {
            "only" => parse_string(&mut config.only, value),
            "width" => parse_width(&mut config.width, value),
            "keep-going" => parse_bool(&mut config.keep_going, value),
            "verbose" => parse_bool(&mut config.verbose, value),
            "dump-trace" => parse_bool(&mut config.dump_trace, value),
            "log-dir" => parse_path_buf(&mut config.log_dir, value),
            _ => return Err(ConfigError::UnknownFlag(key.to_string())),
        };
        if let Err(reason) = result {
            return Err(ConfigError::InvalidFlag { key: key.to_string(), reason });
        }
    }
    Ok(())
}

fn parse_shiftck_arg(arg: &str) -> Option<(&str, Option<&str>)> {
    let arg = arg.strip_prefix(SHIFTCK_FLAG_PREFIX)?;
    if arg.is_empty() {
        return None;
    }
    if let Some((k, v)) = arg.split_once('=') { Some((k, Some(v))) } else { Some((arg, None)) }
}

fn parse_bool(slot: &mut bool, v: Option<&str>) -> Result<(), &'static str> {
    match v {
        Some("y") | Some("yes") | Some("on") | Some("true") | None => {
            *slot = true;
            Ok(())
        }
        Some("n") | Some("no") | Some("off") | Some("false") => {
            *slot = false;
            Ok(())
        }
        _ => {
            Err(
                "expected no value or one of `y`, `yes`, `on`, `true`, `n`, `no`, `off`, or `false`",
            )
        }
    }
}

fn parse_path_buf(slot: &mut PathBuf, v: Option<&str>) -> Result<(), &'static str> {
    match v {
        Some(s) => {
            *slot = PathBuf::from(s);
            Ok(())
        }
        None => Err("a path"),
    }
}

fn parse_width(slot: &mut Option<Width>, v: Option<&str>) -> Result<(), &'static str> {
    match v {
        Some(s) => {
            *slot = Some(s.parse()?);
            Ok(())
        }
        None => Err("width must be 32 or 64"),
    }
}

fn parse_string(slot: &mut String, v: Option<&str>) -> Result<(), &'static str> {
    match v {
        Some(s) => {
            *slot = s.to_string();
            Ok(())
        }
        None => Err("a string"),
    }
}
