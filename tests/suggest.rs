#![cfg(feature = "suggest")]
use parse_flags as pf;
mod common;
use common::*;

#[test]
fn unknown_flag_suggests_close_names() {
    let env = env_plain();
    let (mut verbose, mut jobs) = (false, 1u32);
    let mut flags =
        pf::FlagSet::new().optional("verbose", &mut verbose, "").optional("jobs", &mut jobs, "");
    let err = pf::parse(&env, &mut flags, &["--verbos=true"]).unwrap_err();
    match &err {
        pf::Error::UnknownFlag { name, suggestions } => {
            assert_eq!(name, "verbos");
            assert_eq!(suggestions, &["--verbose"]);
        }
        other => panic!("unexpected: {other:?}"),
    }
    assert_eq!(err.to_string(), "flag never set: 'verbos'. Did you mean '--verbose'?");
}

#[test]
fn suggestions_can_be_turned_off() {
    let env = pf::Env { suggest: false, ..env_plain() };
    let mut verbose = false;
    let mut flags = pf::FlagSet::new().optional("verbose", &mut verbose, "");
    let err = pf::parse(&env, &mut flags, &["--verbos"]).unwrap_err();
    assert!(matches!(err, pf::Error::UnknownFlag { ref suggestions, .. } if suggestions.is_empty()));
    assert_eq!(err.to_string(), "flag never set: 'verbos'");
}

#[test]
fn levenshtein_basics() {
    assert_eq!(pf::levenshtein("", "abc"), 3);
    assert_eq!(pf::levenshtein("kitten", "sitting"), 3);
    assert_eq!(pf::levenshtein("jobs", "jobs"), 0);
    assert_eq!(pf::best_suggestions("jbs", ["jobs", "jab", "zzzzzz"]), ["jobs", "jab"]);
}
