//! Template formatting: ICU-style plural blocks, then `{placeholder}` substitution.
//!
//! Supported syntax:
//! - `{name}` replaced by the argument `name` (stringified); unknown names stay visible.
//! - `{count, plural, =0 {none} one {# item} other {# items}}`: exact `=N`
//!   selectors first, then `one` when the count is exactly 1, else `other`.
//!   `#` inside the chosen branch becomes the count.
//!
//! Anything that does not parse is kept verbatim.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};

use crate::message::ArgValue;

const MAX_EXPANDED_BYTES: usize = 64 * 1024;
const LINEAR_SEARCH_THRESHOLD: usize = 8;

type Args = [(Cow<'static, str>, ArgValue)];

struct Lookup<'a> {
    args: &'a Args,
    map: Option<HashMap<&'a str, &'a ArgValue>>,
}

impl<'a> Lookup<'a> {
    fn new(args: &'a Args) -> Self {
        // `args` is usually tiny; avoid allocating a HashMap for small argument sets.
        let map = if args.len() > LINEAR_SEARCH_THRESHOLD {
            Some(args.iter().map(|(k, v)| (&**k, v)).collect())
        } else {
            None
        };
        Self { args, map }
    }

    fn get(&self, name: &str) -> Option<&'a ArgValue> {
        match &self.map {
            Some(map) => map.get(name).copied(),
            None => self
                .args
                .iter()
                .rev()
                .find(|(k, _)| &**k == name)
                .map(|(_, v)| v),
        }
    }
}

struct PluralBlock<'t> {
    arg: &'t str,
    branches: Vec<(&'t str, &'t str)>,
    /// Byte offset just past the closing brace.
    end: usize,
}

fn skip_ws(s: &str, mut i: usize) -> usize {
    while let Some(c) = s[i..].chars().next() {
        if !c.is_whitespace() {
            break;
        }
        i += c.len_utf8();
    }
    i
}

fn take_while(s: &str, i: usize, pred: impl Fn(char) -> bool) -> usize {
    let mut j = i;
    while let Some(c) = s[j..].chars().next() {
        if !pred(c) {
            break;
        }
        j += c.len_utf8();
    }
    j
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Parse `{arg, plural, sel {body} ...}` starting at the `{` at byte `start`.
fn parse_plural(s: &str, start: usize) -> Option<PluralBlock<'_>> {
    let bytes = s.as_bytes();
    let mut i = skip_ws(s, start + 1);
    let arg_end = take_while(s, i, is_ident_char);
    if arg_end == i {
        return None;
    }
    let arg = &s[i..arg_end];
    i = skip_ws(s, arg_end);
    if bytes.get(i) != Some(&b',') {
        return None;
    }
    i = skip_ws(s, i + 1);
    let kw_end = take_while(s, i, |c| c.is_ascii_alphabetic());
    if &s[i..kw_end] != "plural" {
        return None;
    }
    i = skip_ws(s, kw_end);
    if bytes.get(i) != Some(&b',') {
        return None;
    }
    i += 1;

    let mut branches = Vec::new();
    loop {
        i = skip_ws(s, i);
        match bytes.get(i) {
            None => return None,
            Some(b'}') => {
                i += 1;
                break;
            }
            Some(_) => {}
        }
        let sel_end = if bytes[i] == b'=' {
            take_while(s, i + 1, |c| c.is_ascii_digit() || c == '.' || c == '-')
        } else {
            take_while(s, i, is_ident_char)
        };
        if sel_end == i {
            return None;
        }
        let selector = &s[i..sel_end];
        i = skip_ws(s, sel_end);
        if bytes.get(i) != Some(&b'{') {
            return None;
        }
        let body_start = i + 1;
        let mut depth = 1usize;
        let mut j = body_start;
        while depth > 0 {
            match bytes.get(j)? {
                b'{' => depth += 1,
                b'}' => depth -= 1,
                _ => {}
            }
            j += 1;
        }
        branches.push((selector, &s[body_start..j - 1]));
        i = j;
    }

    if !branches.iter().any(|(sel, _)| *sel == "other") {
        return None;
    }
    Some(PluralBlock {
        arg,
        branches,
        end: i,
    })
}

fn select_branch<'t>(block: &PluralBlock<'t>, count: Option<f64>) -> &'t str {
    let find = |name: &str| {
        block
            .branches
            .iter()
            .find(|(sel, _)| *sel == name)
            .map(|(_, body)| *body)
    };
    if let Some(n) = count {
        let exact = block.branches.iter().find(|(sel, _)| {
            sel.strip_prefix('=')
                .and_then(|v| v.parse::<f64>().ok())
                .is_some_and(|v| v == n)
        });
        if let Some((_, body)) = exact {
            return *body;
        }
        if n == 1.0 {
            if let Some(body) = find("one") {
                return body;
            }
        }
    }
    find("other").unwrap_or_default()
}

fn resolve_plurals<'t>(tmpl: &'t str, args: &Lookup<'_>) -> Cow<'t, str> {
    if !tmpl.contains("plural") {
        return Cow::Borrowed(tmpl);
    }
    let mut out = String::with_capacity(tmpl.len());
    let mut i = 0;
    let mut copied = 0;
    while let Some(off) = tmpl[i..].find('{') {
        let start = i + off;
        match parse_plural(tmpl, start) {
            Some(block) => {
                out.push_str(&tmpl[copied..start]);
                let count = args.get(block.arg);
                let body = select_branch(&block, count.and_then(ArgValue::as_number));
                let body = resolve_plurals(body, args);
                match count {
                    Some(c) if c.as_number().is_some() => {
                        out.push_str(&body.replace('#', &c.to_string()))
                    }
                    _ => out.push_str(&body),
                }
                i = block.end;
                copied = block.end;
            }
            None => i = start + 1,
        }
    }
    out.push_str(&tmpl[copied..]);
    Cow::Owned(out)
}

fn take_prefix_by_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

fn push_str_limited(out: &mut String, s: &str) -> bool {
    if out.len() >= MAX_EXPANDED_BYTES {
        return true;
    }
    let remaining = MAX_EXPANDED_BYTES - out.len();
    out.push_str(take_prefix_by_bytes(s, remaining));
    out.len() >= MAX_EXPANDED_BYTES
}

fn apply_placeholders(tmpl: &str, args: &Lookup<'_>) -> String {
    let mut out = String::with_capacity(std::cmp::min(tmpl.len() + 8, MAX_EXPANDED_BYTES));
    let mut rest = tmpl;

    while let Some(open) = rest.find('{') {
        if push_str_limited(&mut out, &rest[..open]) {
            return out;
        }
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            // No closing brace: the rest is literal text.
            push_str_limited(&mut out, &rest[open..]);
            return out;
        };
        let raw = &after[..close];
        if let Some(inner) = raw.rfind('{') {
            // The placeholder starts at the innermost `{`.
            if push_str_limited(&mut out, &rest[open..open + 1 + inner]) {
                return out;
            }
            rest = &rest[open + 1 + inner..];
            continue;
        }
        let value = match raw.trim() {
            "" => None,
            key => args.get(key),
        };
        let full = match value {
            Some(v) => push_str_limited(&mut out, &v.to_string()),
            // Keep unknown placeholders visible.
            None => push_str_limited(&mut out, &rest[open..open + close + 2]),
        };
        if full {
            return out;
        }
        rest = &after[close + 1..];
    }
    push_str_limited(&mut out, rest);
    out
}

/// Format `tmpl` with `args`. Later arguments with the same name win.
pub fn interpolate(tmpl: &str, args: &[(Cow<'static, str>, ArgValue)]) -> String {
    if !tmpl.contains('{') {
        return take_prefix_by_bytes(tmpl, MAX_EXPANDED_BYTES).to_string();
    }
    let lookup = Lookup::new(args);
    let resolved = resolve_plurals(tmpl, &lookup);
    apply_placeholders(&resolved, &lookup)
}

/// Names of every argument a template refers to, including plural arguments
/// and placeholders inside plural branches.
pub fn placeholders(tmpl: &str) -> BTreeSet<String> {
    fn collect(tmpl: &str, out: &mut BTreeSet<String>) {
        let mut i = 0;
        while let Some(off) = tmpl[i..].find('{') {
            let start = i + off;
            if let Some(block) = parse_plural(tmpl, start) {
                out.insert(block.arg.to_string());
                for (_, body) in &block.branches {
                    collect(body, out);
                }
                i = block.end;
                continue;
            }
            let after = &tmpl[start + 1..];
            match after.find('}') {
                Some(close) => {
                    if let Some(inner) = after[..close].rfind('{') {
                        i = start + 1 + inner;
                        continue;
                    }
                    let name = after[..close].trim();
                    if !name.is_empty() && name.chars().all(is_ident_char) {
                        out.insert(name.to_string());
                    }
                    i = start + 1 + close + 1;
                }
                None => break,
            }
        }
    }
    let mut out = BTreeSet::new();
    collect(tmpl, &mut out);
    out
}
