//! `application/x-www-form-urlencoded` query strings
//!
//! Only what share links need: split/join on `&` and `=`, `+` for spaces and
//! `%XX` escapes. Duplicate keys keep their first value.

use std::borrow::Cow;

use super::Params;

/// Split a query string into parameters.
///
/// Accepts a bare query (`a=1&b=2`), one with a leading `?`, or a full URL,
/// in which case only the part after the first `?` is read. A `#fragment`
/// is ignored.
pub fn parse_query(input: &str) -> Params {
    let query = input.split_once('?').map_or(input, |(_, q)| q);
    let query = query.split_once('#').map_or(query, |(q, _)| q);

    let mut params = Params::new();
    for part in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = part.split_once('=').unwrap_or((part, ""));
        params
            .entry(percent_decode(key).into_owned())
            .or_insert_with(|| percent_decode(value).into_owned());
    }
    params
}

/// Join key/value pairs into a query string, escaping as needed
pub fn to_query<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", percent_encode(key), percent_encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode `+` and `%XX` escapes. Malformed escapes are kept literally.
pub fn percent_decode(input: &str) -> Cow<'_, str> {
    if !input.contains(['%', '+']) {
        return Cow::Borrowed(input);
    }

    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4) | lo);
                        i += 2;
                    }
                    _ => out.push(b'%'),
                }
            }
            b => out.push(b),
        }
        i += 1;
    }
    Cow::Owned(String::from_utf8_lossy(&out).into_owned())
}

/// Escape everything outside `A-Z a-z 0-9 * - . _`; spaces become `+`
pub fn percent_encode(input: &str) -> Cow<'_, str> {
    if input.bytes().all(is_unreserved) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 8);
    for b in input.bytes() {
        match b {
            b' ' => out.push('+'),
            b if is_unreserved(b) => out.push(b as char),
            b => out.push_str(&format!("%{b:02X}")),
        }
    }
    Cow::Owned(out)
}

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'*' | b'-' | b'.' | b'_')
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_forms() {
        let bare = parse_query("km=12000&home=50");
        assert_eq!(bare["km"], "12000");
        assert_eq!(bare["home"], "50");

        let leading = parse_query("?km=12000");
        assert_eq!(leading["km"], "12000");

        let url = parse_query("https://example.org/calc/?km=9000&rw=1#charts");
        assert_eq!(url["km"], "9000");
        assert_eq!(url["rw"], "1");
        assert!(parse_query("https://example.org/calc/").is_empty());
    }

    #[test]
    fn test_first_value_wins_and_bare_keys() {
        let params = parse_query("km=1&km=2&rw&&pair=");
        assert_eq!(params["km"], "1");
        assert_eq!(params["rw"], "");
        assert_eq!(params["pair"], "");
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(percent_decode("plain"), "plain");
        assert_eq!(percent_decode("a+b%20c"), "a b c");
        assert_eq!(percent_decode("%41%4a%4A"), "AJJ");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz1"), "%zz1");
        assert_eq!(percent_decode("%4"), "%4");
    }

    #[test]
    fn test_percent_encode() {
        assert_eq!(percent_encode("atto3_vs_corolla"), "atto3_vs_corolla");
        assert_eq!(percent_encode("a b&c=d"), "a+b%26c%3Dd");
        assert_eq!(percent_decode(&percent_encode("ü/é ?")), "ü/é ?");
    }

    #[test]
    fn test_to_query() {
        assert_eq!(to_query([("km", "1"), ("pair", "a b")]), "km=1&pair=a+b");
        assert_eq!(to_query(std::iter::empty()), "");
    }
}
