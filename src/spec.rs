use crate::value::{FlagValue, Slot};
use crate::{DecodeError, Error, Result};
use std::collections::HashSet;
use std::fmt;

/// Color mode for help rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

/// How a token's flag name is matched against registered names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchMode {
    /// Names must be equal.
    Exact,
    /// A registered name matches any token name it is a prefix of
    /// (`a` matches `--abc=1`). Compatibility with older flag tables.
    Prefix,
}

impl MatchMode {
    #[must_use]
    pub fn matches(self, registered: &str, given: &str) -> bool {
        match self {
            Self::Exact => registered == given,
            Self::Prefix => given.starts_with(registered),
        }
    }
}

/// Global environment for a parse/render session.
#[derive(Clone, Copy, Debug)]
pub struct Env {
    /// Whether to colorize help (honors `NO_COLOR` when `color` feature is enabled).
    pub color: ColorMode,
    /// Treat a `--help` token as a help request.
    pub auto_help: bool,
    /// Whether to compute suggestions on unknown flags (if enabled).
    pub suggest: bool,
    pub match_mode: MatchMode,
    /// Columns added after the longest flag name in help output.
    pub pad: usize,
    /// Wrap columns for help. `0` means no wrapping. Line breaks and
    /// leading indentation in help text are kept; each line wraps on its own.
    pub wrap_cols: usize,
}

/// Margin the help formatter leaves after the longest flag name.
pub const DEFAULT_PAD: usize = 5;

impl Default for Env {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            auto_help: true,
            suggest: true,
            match_mode: MatchMode::Exact,
            pad: DEFAULT_PAD,
            wrap_cols: 80,
        }
    }
}

/// One declared flag: a name, its help text and the caller's storage.
///
/// The storage type is fixed when the flag is built and forgotten afterwards;
/// [`Flag::parse`] decodes with the parser chosen at that point.
pub struct Flag<'a> {
    name: &'a str,
    help: &'a str,
    slot: &'a mut dyn Slot,
}

impl<'a> Flag<'a> {
    pub fn new<T: FlagValue + 'a>(name: &'a str, storage: &'a mut T, help: &'a str) -> Self {
        Self { name, help, slot: storage }
    }

    #[must_use]
    pub const fn get_name(&self) -> &str {
        self.name
    }
    #[must_use]
    pub const fn get_help(&self) -> &str {
        self.help
    }

    /// Decode `token` into the bound storage.
    /// # Errors [`DecodeError`]; storage keeps its previous value.
    pub fn parse(&mut self, token: &str) -> Result<(), DecodeError> {
        self.slot.assign(token)
    }
}

impl fmt::Debug for Flag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flag").field("name", &self.name).field("help", &self.help).finish_non_exhaustive()
    }
}

/// Ordered registry of flags, split into required and optional groups.
///
/// Built once before parsing. Both groups keep insertion order; lookups try
/// the optional group first.
#[derive(Debug, Default)]
pub struct FlagSet<'a> {
    message: Option<&'a str>,
    required: Vec<Flag<'a>>,
    optional: Vec<Flag<'a>>,
}

impl<'a> FlagSet<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `flag` to the required or optional group.
    pub fn register(&mut self, flag: Flag<'a>, required: bool) {
        tracing::trace!(name = flag.get_name(), required, "register flag");
        if required {
            self.required.push(flag);
        } else {
            self.optional.push(flag);
        }
    }

    // builders
    /// Description printed at the top of the help text.
    #[must_use]
    pub const fn message(mut self, m: &'a str) -> Self {
        self.message = Some(m);
        self
    }
    #[must_use]
    pub fn optional<T: FlagValue + 'a>(mut self, name: &'a str, storage: &'a mut T, help: &'a str) -> Self {
        self.register(Flag::new(name, storage, help), false);
        self
    }
    #[must_use]
    pub fn required<T: FlagValue + 'a>(mut self, name: &'a str, storage: &'a mut T, help: &'a str) -> Self {
        self.register(Flag::new(name, storage, help), true);
        self
    }

    // getters
    #[must_use]
    pub const fn get_message(&self) -> Option<&str> {
        self.message
    }
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn get_required(&self) -> &[Flag<'a>] {
        &self.required
    }
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn get_optional(&self) -> &[Flag<'a>] {
        &self.optional
    }
    /// Required flags first, then optional, each in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Flag<'a>> {
        self.required.iter().chain(&self.optional)
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.required.len() + self.optional.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inclusive bounds on how many tokens a parse accepts.
    #[must_use]
    pub fn arity(&self) -> (usize, usize) {
        (self.required.len(), self.len())
    }

    /// First flag whose name matches `name`: optional group, then required.
    #[must_use]
    pub fn find(&self, name: &str, mode: MatchMode) -> Option<&Flag<'a>> {
        self.optional.iter().chain(&self.required).find(|f| mode.matches(f.name, name))
    }

    /// Mutable counterpart of [`FlagSet::find`], same order.
    pub fn find_mut(&mut self, name: &str, mode: MatchMode) -> Option<&mut Flag<'a>> {
        self.optional.iter_mut().chain(self.required.iter_mut()).find(|f| mode.matches(f.name, name))
    }

    /// Check names are usable as `--name=value` tokens and unique.
    /// `parse` does not call this.
    /// # Errors [`Error::Spec`] naming the first offending flag.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for f in self.iter() {
            if f.name.is_empty() {
                return Err(Error::Spec("empty flag name".into()));
            }
            if f.name.starts_with('-') || f.name.contains('=') {
                return Err(Error::Spec(format!("flag name '{}' may not start with '-' or contain '='", f.name)));
            }
            if !seen.insert(f.name) {
                return Err(Error::Spec(format!("duplicate flag '{}'", f.name)));
            }
        }
        Ok(())
    }
}
