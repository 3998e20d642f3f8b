use crate::util::strip_ansi_len;
use crate::{ColorMode, Env, Flag, FlagSet};
use core::fmt::Write;

#[cfg(feature = "color")]
mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const TITLE: &str = "\x1b[4;37m"; // section titles
    pub const FLAG_LABEL: &str = "\x1b[0;94m";
}

#[cfg(feature = "color")]
fn use_color(mode: ColorMode) -> bool {
    use std::io::IsTerminal;
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal(),
    }
}
#[cfg(not(feature = "color"))]
const fn use_color(_: ColorMode) -> bool {
    false
}

#[cfg(feature = "color")]
fn paint_section(s: &str, on: bool) -> String {
    if on {
        format!("{}{}{}{}:", ansi::BOLD, ansi::TITLE, s, ansi::RESET)
    } else {
        format!("{s}:")
    }
}
#[cfg(not(feature = "color"))]
fn paint_section(s: &str, _: bool) -> String {
    format!("{s}:")
}

#[cfg(feature = "color")]
fn paint_flag(s: &str, on: bool) -> String {
    if on {
        format!("{}{}{}", ansi::FLAG_LABEL, s, ansi::RESET)
    } else {
        s.to_string()
    }
}
#[cfg(not(feature = "color"))]
fn paint_flag(s: &str, _: bool) -> String {
    s.to_string()
}

/// Render help for every flag in `flags`.
///
/// Names are left-justified to the longest name plus `env.pad` columns.
/// When any flag is required the output has a `Required:` section followed
/// by an `Optional:` one; otherwise it is a single list.
#[must_use]
pub fn render_help(env: &Env, flags: &FlagSet<'_>) -> String {
    let mut out = String::new();
    if let Some(m) = flags.get_message() {
        let _ = writeln!(out, "{m}\n");
    }
    let color = use_color(env.color);
    let width = flags.iter().map(|f| f.get_name().chars().count()).max().unwrap_or(0) + env.pad;

    if flags.get_required().is_empty() {
        write_rows(&mut out, env, flags.get_optional(), width, color);
        return out;
    }
    let _ = writeln!(out, "{}", paint_section("Required", color));
    write_rows(&mut out, env, flags.get_required(), width, color);
    if !flags.get_optional().is_empty() {
        let _ = writeln!(out, "\n{}", paint_section("Optional", color));
        write_rows(&mut out, env, flags.get_optional(), width, color);
    }
    out
}

fn write_rows(out: &mut String, env: &Env, rows: &[Flag<'_>], width: usize, color: bool) {
    // "  --" + name column
    let desc_col = 4 + width;
    for f in rows {
        let painted = paint_flag(&format!("--{}", f.get_name()), color);
        let pad = width + 2 + (painted.chars().count() - strip_ansi_len(&painted));
        let _ = write!(out, "  {painted:pad$}");
        wrap_after(out, f.get_help(), desc_col, env.wrap_cols);
    }
}

/// Write `text` after the already‑printed label. Each line of `text` is
/// wrapped on its own and keeps its leading indentation; continuation lines
/// start at `start_col`.
fn wrap_after(out: &mut String, text: &str, start_col: usize, wrap: usize) {
    let mut lines = text.lines();
    let Some(first) = lines.next() else {
        let _ = writeln!(out);
        return;
    };
    wrap_line(out, first, start_col, wrap);
    for line in lines {
        let body = line.trim_start();
        if body.is_empty() {
            let _ = writeln!(out);
            continue;
        }
        let col = start_col + (line.len() - body.len());
        out.push_str(&" ".repeat(col));
        wrap_line(out, body, col, wrap);
    }
}

fn wrap_line(out: &mut String, text: &str, start_col: usize, wrap: usize) {
    if wrap == 0 {
        let _ = writeln!(out, "{text}");
        return;
    }
    let mut col = start_col;
    let mut first = true;
    for word in text.split_whitespace() {
        let wlen = word.chars().count();
        let add = usize::from(!first);
        if col + add + wlen > wrap && col > start_col {
            let _ = writeln!(out);
            let _ = write!(out, "{}", " ".repeat(start_col));
            col = start_col;
            first = true;
        }
        if !first {
            out.push(' ');
            col += 1;
        }
        out.push_str(word);
        col += wlen;
        first = false;
    }
    let _ = writeln!(out);
}
