// src/core/sanitize.rs

/// Upstream "no value" check. One LPDB format writes absent struct fields
/// as the literal string `False`, so that counts as empty too.
pub fn is_blank(s: Option<&str>) -> bool {
    match s {
        None => true,
        Some(v) => v.is_empty() || v == "False",
    }
}

/// `Some` only when the value is present and not blank.
pub fn non_blank(s: Option<&str>) -> Option<&str> {
    if is_blank(s) { None } else { s }
}

/// Replace every whitespace character with `sep`. Runs are not collapsed,
/// so the result matches the upstream link for the same title.
pub fn replace_ws(s: &str, sep: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch.is_whitespace() { out.push_str(sep) } else { out.push(ch) }
    }
    out
}

/// Leaguepedia page title → wiki path (`LCK 2024 Spring` → `LCK_2024_Spring`).
pub fn wiki_path(title: &str) -> String {
    replace_ws(title, "_")
}

/// Aligulac event slug: whitespace becomes `-`, slashes are dropped.
pub fn event_slug(fullname: &str) -> String {
    replace_ws(fullname, "-").replace('/', "")
}

/// Case-insensitive membership in a lower-case token set.
pub fn in_token_set(name: Option<&str>, set: &[&str]) -> bool {
    match name {
        Some(n) => {
            let n = n.trim().to_lowercase();
            set.iter().any(|t| *t == n)
        }
        None => false,
    }
}
