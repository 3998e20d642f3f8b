#![allow(dead_code)]

use parse_flags as pf;

#[must_use]
pub fn argv(a: &[&str]) -> Vec<String> {
    a.iter().map(|s| (*s).to_string()).collect()
}

/// Plain, unwrapped, uncolored output so help text is predictable.
#[must_use]
pub fn env_plain() -> pf::Env {
    pf::Env { color: pf::ColorMode::Never, wrap_cols: 0, ..pf::Env::default() }
}

#[derive(Debug, PartialEq)]
pub struct Vals {
    pub a: i32,
    pub b: i32,
    pub d: f64,
    pub t: bool,
    pub s: String,
}

impl Default for Vals {
    fn default() -> Self {
        Self { a: 0, b: 7, d: 0.0, t: false, s: "unset".into() }
    }
}

/// `a` required; `b`, `d`, `t`, `s` optional.
pub fn demo_flags(v: &mut Vals) -> pf::FlagSet<'_> {
    pf::FlagSet::new()
        .message("A demo program")
        .required("a", &mut v.a, "int for a")
        .optional("b", &mut v.b, "int for b")
        .optional("d", &mut v.d, "double for d")
        .optional("t", &mut v.t, "bool for t")
        .optional("s", &mut v.s, "string for s")
}
