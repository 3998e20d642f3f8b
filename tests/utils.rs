use parse_flags as pf;

#[test]
fn scan_prefixes() {
    use pf::util::{scan_float_prefix as fl, scan_int_prefix as int};
    assert_eq!(int(" 12z"), Some("12"));
    assert_eq!(int("-0"), Some("-0"));
    assert_eq!(int("+"), None);
    assert_eq!(fl("1.5e+2rest"), Some("1.5e+2"));
    assert_eq!(fl("Infinity"), Some("Infinity"));
    assert_eq!(fl("-.e1"), None);
}

#[test]
fn help_token_detection() {
    use pf::util::is_help_token as h;
    assert!(h("--help"));
    assert!(h("--Help=1"));
    assert!(!h("--hel"));
    assert!(!h("-help"));
}

#[test]
fn strip_ansi_len_ignores_codes() {
    use pf::util::strip_ansi_len as sl;
    let s = "\x1b[1mHello\x1b[0m world"; // bold Hello
    assert_eq!(sl(s), "Hello world".len());
}
