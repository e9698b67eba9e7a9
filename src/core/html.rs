// src/core/html.rs
//
// Tolerant, case-insensitive HTML scanning over plain `&str`.
// Offsets into `to_lower(s)` are valid for `s` too: only ASCII is lowercased.

use super::sanitize::{normalize_entities, normalize_ws};

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Elements that never have a closing tag.
const VOID: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose content is not markup.
const RAW_TEXT: &[&str] = &["script", "style"];

fn is_name_end(b: Option<&u8>) -> bool {
    matches!(b, None | Some(b' ' | b'\t' | b'\r' | b'\n' | b'>' | b'/'))
}

/// Offset of the next `<name` open tag at or after `from`.
/// `lc` must be the lowercased document; `name` lowercase.
/// `<th` does not match `<thead`.
pub fn find_open_tag(lc: &str, name: &str, from: usize) -> Option<usize> {
    let pat = join!("<", name);
    let mut pos = from;
    loop {
        let at = lc.get(pos..)?.find(&pat)? + pos;
        if is_name_end(lc.as_bytes().get(at + pat.len())) {
            return Some(at);
        }
        pos = at + pat.len();
    }
}

/// Offset of the next `</name` close tag at or after `from`.
fn find_close_tag(lc: &str, name: &str, from: usize) -> Option<usize> {
    let pat = join!("</", name);
    let mut pos = from;
    loop {
        let at = lc.get(pos..)?.find(&pat)? + pos;
        if is_name_end(lc.as_bytes().get(at + pat.len())) {
            return Some(at);
        }
        pos = at + pat.len();
    }
}

/// Offset just past the `>` that ends the tag starting at `start`.
/// Quoted attribute values may contain `>`.
pub fn tag_end(s: &str, start: usize) -> Option<usize> {
    let b = s.as_bytes();
    let mut i = start + 1;
    let mut in_s = false; // '
    let mut in_d = false; // "
    while i < b.len() {
        match b[i] {
            b'\'' if !in_d => in_s = !in_s,
            b'"' if !in_s => in_d = !in_d,
            b'>' if !in_s && !in_d => return Some(i + 1),
            _ => {}
        }
        i += 1;
    }
    None
}

/// The complete `<name ...> ... </name>` block starting at `start`,
/// honouring nested elements of the same name.
/// Returns `(start, end)` with `end` just past the closing `>`.
pub fn element_block(s: &str, lc: &str, name: &str, start: usize) -> Option<(usize, usize)> {
    let mut pos = tag_end(s, start)?;
    let mut depth = 1usize;
    loop {
        let close = find_close_tag(lc, name, pos)?;
        match find_open_tag(lc, name, pos) {
            Some(open) if open < close => {
                depth += 1;
                pos = tag_end(s, open)?;
            }
            _ => {
                depth -= 1;
                let end = tag_end(s, close)?;
                if depth == 0 {
                    return Some((start, end));
                }
                pos = end;
            }
        }
    }
}

/// Every outermost `<name>` block in document order.
/// An unclosed block stops the scan.
pub fn blocks<'a>(s: &'a str, name: &str) -> Vec<&'a str> {
    let lc = to_lower(s);
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some(start) = find_open_tag(&lc, name, pos) {
        match element_block(s, &lc, name, start) {
            Some((a, b)) => {
                out.push(&s[a..b]);
                pos = b;
            }
            None => break,
        }
    }
    out
}

/// Byte spans of all `<!-- ... -->` comments (delimiters included), in order.
/// An unterminated comment runs to the end of the document.
pub fn comment_spans(s: &str) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some(rel) = s[pos..].find("<!--") {
        let start = pos + rel;
        let body_start = start + 4;
        match s[body_start..].find("-->") {
            Some(end_rel) => {
                let end = body_start + end_rel + 3;
                out.push((start, end));
                pos = end;
            }
            None => {
                out.push((start, s.len()));
                break;
            }
        }
    }
    out
}

/// Bodies of all comments, in document order.
pub fn comments(s: &str) -> Vec<&str> {
    comment_spans(s)
        .into_iter()
        .map(|(a, b)| {
            let body = &s[a + 4..b];
            body.strip_suffix("-->").unwrap_or(body)
        })
        .collect()
}

/// Copy of `s` with every comment blanked to spaces. Offsets are unchanged.
pub fn mask_comments(s: &str) -> String {
    let mut bytes = s.as_bytes().to_vec();
    for (a, b) in comment_spans(s) {
        bytes[a..b].fill(b' ');
    }
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/// Value of attribute `attr` in the open tag at the start of `block`.
/// Accepts double-quoted, single-quoted and bare values; entity-decoded.
pub fn attr_value(block: &str, attr: &str) -> Option<String> {
    let end = tag_end(block, 0)?;
    let tag = &block[..end];
    let b = tag.as_bytes();

    // skip "<name"
    let mut i = 1;
    while i < b.len() && !is_name_end(b.get(i)) { i += 1; }

    while i < b.len() {
        while i < b.len() && (b[i].is_ascii_whitespace() || b[i] == b'/') { i += 1; }
        if i >= b.len() || b[i] == b'>' { break; }

        let name_start = i;
        while i < b.len() && !b[i].is_ascii_whitespace() && !matches!(b[i], b'=' | b'>' | b'/') { i += 1; }
        let name = &tag[name_start..i];

        while i < b.len() && b[i].is_ascii_whitespace() { i += 1; }
        let mut value = "";
        if i < b.len() && b[i] == b'=' {
            i += 1;
            while i < b.len() && b[i].is_ascii_whitespace() { i += 1; }
            if i < b.len() && (b[i] == b'"' || b[i] == b'\'') {
                let q = b[i];
                let v_start = i + 1;
                i = v_start;
                while i < b.len() && b[i] != q { i += 1; }
                value = &tag[v_start..i.min(tag.len())];
                i += 1;
            } else {
                let v_start = i;
                while i < b.len() && !b[i].is_ascii_whitespace() && b[i] != b'>' { i += 1; }
                value = &tag[v_start..i];
            }
        }
        if name.eq_ignore_ascii_case(attr) {
            return Some(normalize_entities(value));
        }
    }
    None
}

/// Given a complete tag block like `<td ...>INNER</td>`,
/// return the INNER text without the wrapping tags (still may contain nested tags).
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = tag_end(block, 0) {
        if let Some(cs) = block.rfind('<') {
            if cs >= oe {
                return block[oe..cs].to_string();
            }
        }
    }
    s!()
}

/// Remove all tags `<...>` (and comments), then collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// Visible text of an element block: inner markup, tags stripped, entities decoded.
pub fn cell_text(block: &str) -> String {
    normalize_ws(&normalize_entities(&strip_tags(inner_after_open_tag(block))))
}

/* ---------------- Pretty printing ---------------- */

enum Token<'a> {
    Open(&'a str, String),
    Close(&'a str, String),
    SelfContained(&'a str),
    Text(&'a str),
}

fn tag_name(tag: &str) -> String {
    tag.trim_start_matches(['<', '/'])
        .chars()
        .take_while(|c| !c.is_ascii_whitespace() && *c != '>' && *c != '/')
        .collect::<String>()
        .to_ascii_lowercase()
}

fn tokenize(s: &str) -> Vec<Token<'_>> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    let lc = to_lower(s);

    while pos < s.len() {
        let Some(rel) = s[pos..].find('<') else {
            out.push(Token::Text(&s[pos..]));
            break;
        };
        let lt = pos + rel;
        if lt > pos { out.push(Token::Text(&s[pos..lt])); }

        // comments / doctype / processing instructions
        if s[lt..].starts_with("<!--") {
            let end = s[lt + 4..].find("-->").map(|e| lt + 4 + e + 3).unwrap_or(s.len());
            out.push(Token::SelfContained(&s[lt..end]));
            pos = end;
            continue;
        }
        if s[lt..].starts_with("<!") || s[lt..].starts_with("<?") {
            let end = s[lt..].find('>').map(|e| lt + e + 1).unwrap_or(s.len());
            out.push(Token::SelfContained(&s[lt..end]));
            pos = end;
            continue;
        }

        // a bare '<' that does not start a tag is text
        let next = s.as_bytes().get(lt + 1).copied();
        if !matches!(next, Some(c) if c.is_ascii_alphabetic() || c == b'/') {
            out.push(Token::Text(&s[lt..lt + 1]));
            pos = lt + 1;
            continue;
        }

        let end = tag_end(s, lt).unwrap_or(s.len());
        let tag = &s[lt..end];
        let name = tag_name(tag);

        if tag.starts_with("</") {
            out.push(Token::Close(tag, name));
        } else if VOID.contains(&name.as_str()) || tag.ends_with("/>") {
            out.push(Token::SelfContained(tag));
        } else if RAW_TEXT.contains(&name.as_str()) {
            // keep the body verbatim, up to the matching close tag
            let close = find_close_tag(&lc, &name, end).unwrap_or(s.len());
            let close_end = tag_end(s, close).unwrap_or(s.len());
            out.push(Token::SelfContained(&s[lt..close_end]));
            pos = close_end;
            continue;
        } else {
            out.push(Token::Open(tag, name));
        }
        pos = end;
    }
    out
}

fn line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth { out.push(' '); }
    out.push_str(text);
    out.push('\n');
}

/// One tag or text run per line, indented by nesting depth.
/// Script/style bodies and comments are kept verbatim.
pub fn prettify(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 4);
    let mut open: Vec<String> = Vec::new();

    for tok in tokenize(s) {
        match tok {
            Token::Open(tag, name) => {
                line(&mut out, open.len(), tag);
                open.push(name);
            }
            Token::Close(tag, name) => {
                // unwind to the matching open element; stray closers keep depth
                if let Some(ix) = open.iter().rposition(|n| *n == name) {
                    open.truncate(ix);
                }
                line(&mut out, open.len(), tag);
            }
            Token::SelfContained(tag) => line(&mut out, open.len(), tag),
            Token::Text(text) => {
                let t = text.trim();
                if !t.is_empty() { line(&mut out, open.len(), t); }
            }
        }
    }
    out
}
