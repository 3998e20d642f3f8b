use parse_flags as pf;
mod common;
use common::*;

#[test]
fn help_anywhere_wins() {
    let env = env_plain();
    let mut v = Vals::default();
    let mut flags = demo_flags(&mut v);
    // invalid tokens and a bad count do not matter once --help is present
    let err = pf::parse(&env, &mut flags, &["x=1", "--zzz", "--HELP", "--a=1", "--b", "--c", "--d"])
        .unwrap_err();
    drop(flags);
    match &err {
        pf::Error::Help { message } => {
            assert!(message.starts_with("A demo program\n\n"));
            assert!(message.contains("Required:"));
            assert!(message.contains("Optional:"));
        }
        other => panic!("unexpected: {other:?}"),
    }
    assert_eq!(err.exit_code(), 1);
    assert_eq!(v, Vals::default());
}

#[test]
fn help_is_a_prefix_match() {
    let env = env_plain();
    let mut a = 0i32;
    let mut flags = pf::FlagSet::new().optional("a", &mut a, "");
    let err = pf::parse(&env, &mut flags, &["--helpme"]).unwrap_err();
    assert!(matches!(err, pf::Error::Help { .. }));
}

#[test]
fn auto_help_off_treats_help_as_a_flag() {
    let env = pf::Env { auto_help: false, ..env_plain() };
    let mut help = false;
    let mut flags = pf::FlagSet::new().optional("help", &mut help, "");
    pf::parse(&env, &mut flags, &["--help=true"]).unwrap();
    drop(flags);
    assert!(help);
}

#[test]
fn sections_are_column_aligned() {
    let env = env_plain();
    let (mut a, mut bb) = (0i32, 0i32);
    let flags =
        pf::FlagSet::new().message("Demo").required("a", &mut a, "int for a").optional("bb", &mut bb, "int for bb");
    let expected = "Demo\n\nRequired:\n  --a      int for a\n\nOptional:\n  --bb     int for bb\n";
    assert_eq!(pf::render_help(&env, &flags), expected);
}

#[test]
fn flat_list_without_required_flags() {
    let env = pf::Env { pad: 2, ..env_plain() };
    let (mut x, mut long) = (0i32, String::new());
    let flags = pf::FlagSet::new().optional("x", &mut x, "an x").optional("long", &mut long, "a long one");
    assert_eq!(pf::render_help(&env, &flags), "  --x     an x\n  --long  a long one\n");
}

#[test]
fn long_help_wraps_under_description_column() {
    let env = pf::Env { wrap_cols: 20, pad: 1, ..env_plain() };
    let mut a = 0i32;
    let flags = pf::FlagSet::new().optional("a", &mut a, "one two three four");
    // label column is 4 + 1 + 1 = 6 wide
    assert_eq!(pf::render_help(&env, &flags), "  --a one two three\n      four\n");
}

#[test]
fn empty_registry_renders_message_only() {
    let env = env_plain();
    let flags = pf::FlagSet::new().message("nothing here");
    assert_eq!(pf::render_help(&env, &flags), "nothing here\n\n");
}

#[test]
fn help_text_keeps_its_own_line_breaks() {
    let env = pf::Env { pad: 1, color: pf::ColorMode::Never, ..pf::Env::default() };
    let mut a = 0i32;
    let flags = pf::FlagSet::new().optional("a", &mut a, "line one\n    - indented item\n\nlast");
    assert_eq!(
        pf::render_help(&env, &flags),
        "  --a line one\n          - indented item\n\n      last\n"
    );
}

#[test]
fn non_ascii_names_align_by_chars() {
    let env = pf::Env { pad: 1, ..env_plain() };
    let (mut e, mut ab) = (0i32, 0i32);
    let flags = pf::FlagSet::new().optional("éé", &mut e, "x").optional("ab", &mut ab, "y");
    assert_eq!(pf::render_help(&env, &flags), "  --éé x\n  --ab y\n");
}
