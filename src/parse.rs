use crate::help::render_help;
#[cfg(feature = "suggest")]
use crate::suggest::best_suggestions;
use crate::util::is_help_token;
use crate::{Env, Error, FlagSet, Result, SplitError};
use tracing::{debug, trace};

/// Split `--name=value` at the first `=`.
///
/// Everything after that `=` is the value, further `=` included. Without an
/// `=` the whole remainder is the name and the value is empty.
/// # Errors [`SplitError`] if `raw` does not start with `--`.
pub fn split_flag(raw: &str) -> Result<(&str, &str), SplitError> {
    let Some(body) = raw.strip_prefix("--") else {
        return Err(SplitError { token: raw.to_string() });
    };
    Ok(body.split_once('=').unwrap_or((body, "")))
}

/// Parse flag tokens into the storage bound in `flags`.
///
/// `argv` holds the arguments only, without the program name. A `--help`
/// token anywhere wins over every other check. The token count must then
/// fall within [`FlagSet::arity`]. The first split, lookup or decode
/// failure aborts; values stored by earlier tokens are kept.
/// # Errors [`Error`]
pub fn parse<S: AsRef<str>>(env: &Env, flags: &mut FlagSet<'_>, argv: &[S]) -> Result<()> {
    if env.auto_help && argv.iter().any(|t| is_help_token(t.as_ref())) {
        debug!("help requested");
        return Err(Error::Help { message: render_help(env, flags) });
    }

    let (min, max) = flags.arity();
    if !(min..=max).contains(&argv.len()) {
        debug!(given = argv.len(), min, max, "flag count out of range");
        return Err(Error::Arity { given: argv.len(), min, max, help: render_help(env, flags) });
    }

    for tok in argv {
        let raw = tok.as_ref();
        trace!(token = raw, "parse token");
        let (name, value) = split_flag(raw)?;
        let Some(flag) = flags.find_mut(name, env.match_mode) else {
            return Err(unknown_flag_error(env, name, flags));
        };
        flag.parse(value).map_err(|source| Error::Decode {
            token: raw.to_string(),
            flag: flag.get_name().to_string(),
            source,
        })?;
        debug!(flag = flag.get_name(), value, "flag assigned");
    }
    Ok(())
}

/// [`parse`] over the process arguments, skipping the program name.
/// Non-UTF-8 arguments are converted lossily.
/// # Errors [`Error`]
pub fn parse_args(env: &Env, flags: &mut FlagSet<'_>) -> Result<()> {
    let argv: Vec<String> =
        std::env::args_os().skip(1).map(|a| a.to_string_lossy().into_owned()).collect();
    parse(env, flags, &argv)
}

#[cfg(feature = "suggest")]
fn unknown_flag_error(env: &Env, name: &str, flags: &FlagSet<'_>) -> Error {
    let suggestions = if env.suggest {
        best_suggestions(name, flags.iter().map(|f| f.get_name()))
            .into_iter()
            .map(|s| format!("--{s}"))
            .collect()
    } else {
        vec![]
    };
    Error::UnknownFlag { name: name.to_string(), suggestions }
}
#[cfg(not(feature = "suggest"))]
fn unknown_flag_error(_: &Env, name: &str, _: &FlagSet<'_>) -> Error {
    Error::UnknownFlag { name: name.to_string(), suggestions: vec![] }
}
