//! Parsing of file paths that arrive as text.
//!
//! Dropping files onto a terminal makes it paste their paths. Depending on
//! the terminal and file manager that is a newline separated list, a shell
//! quoted list (`'/a b.mp3' /c\ d.mp3`) or `file://` URIs.

use std::env;
use std::path::PathBuf;

/// Split pasted or typed text into paths.
pub fn parse_dropped_paths(text: &str) -> Vec<PathBuf> {
    text.lines()
        .flat_map(split_shell_words)
        .map(|word| to_path(&word))
        .collect()
}

fn split_shell_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut cur = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"'), '\\') => match chars.next() {
                Some(n @ ('"' | '\\')) => cur.push(n),
                Some(n) => {
                    cur.push('\\');
                    cur.push(n);
                }
                None => cur.push('\\'),
            },
            (Some(_), c) => cur.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                in_word = true;
            }
            (None, '\\') => {
                if let Some(n) = chars.next() {
                    cur.push(n);
                }
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut cur));
                    in_word = false;
                }
            }
            (None, c) => {
                cur.push(c);
                in_word = true;
            }
        }
    }
    if in_word {
        words.push(cur);
    }
    words
}

fn to_path(word: &str) -> PathBuf {
    if let Some(rest) = word.strip_prefix("file://") {
        // file://host/path is rare; only the local form is handled.
        let local = rest.strip_prefix("localhost").unwrap_or(rest);
        return PathBuf::from(percent_decode(local));
    }
    if let Some(rest) = word.strip_prefix("~/") {
        if let Some(home) = env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(word)
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(b) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(b);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
