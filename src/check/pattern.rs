//! Boolean checks for string formats
//!
//! Format checks backed by precompiled, anchored regular expressions held
//! as process-wide constants. Compilation happens once on first use; the
//! compiled patterns are immutable and safe to read from any thread.
//!
//! [`is_json`] is deliberately not a parse: it is a delimiter sniff that
//! accepts text whose outer braces/brackets pair up and whose delimiters
//! balance outside string literals.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern")
});

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://[^\s/?#]+[^\s]*$").expect("url pattern")
});

static HOSTNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("hostname pattern")
});

static IP4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])$")
        .expect("ipv4 pattern")
});

static IP6: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)^(?:
            (?:[0-9A-Fa-f]{1,4}:){7}[0-9A-Fa-f]{1,4}
           |(?:[0-9A-Fa-f]{1,4}:){1,7}:
           |(?:[0-9A-Fa-f]{1,4}:){1,6}:[0-9A-Fa-f]{1,4}
           |(?:[0-9A-Fa-f]{1,4}:){1,5}(?::[0-9A-Fa-f]{1,4}){1,2}
           |(?:[0-9A-Fa-f]{1,4}:){1,4}(?::[0-9A-Fa-f]{1,4}){1,3}
           |(?:[0-9A-Fa-f]{1,4}:){1,3}(?::[0-9A-Fa-f]{1,4}){1,4}
           |(?:[0-9A-Fa-f]{1,4}:){1,2}(?::[0-9A-Fa-f]{1,4}){1,5}
           |[0-9A-Fa-f]{1,4}:(?::[0-9A-Fa-f]{1,4}){1,6}
           |:(?:(?::[0-9A-Fa-f]{1,4}){1,7}|:)
        )$",
    )
    .expect("ipv6 pattern")
});

static UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("uuid pattern")
});

/// True if the string matches the given pattern.
///
/// The caller's pattern is used as-is; anchor it yourself if a full match
/// is intended.
///
/// # Example
///
/// ```rust
/// use regex::Regex;
/// use breakwater::check::pattern;
///
/// let hex = Regex::new(r"^[0-9a-f]+$").unwrap();
/// assert!(pattern::matches("deadbeef", &hex));
/// assert!(!pattern::matches("nope!", &hex));
/// ```
#[inline]
pub fn matches(value: &str, pattern: &Regex) -> bool {
    pattern.is_match(value)
}

/// True if the string is an email address.
///
/// # Example
///
/// ```rust
/// use breakwater::check::pattern;
///
/// assert!(pattern::is_email("a@b.com"));
/// assert!(!pattern::is_email("a@@b.com"));
/// assert!(!pattern::is_email("a@b"));
/// ```
#[inline]
pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// True if the string is a URL with a scheme and authority.
///
/// # Example
///
/// ```rust
/// use breakwater::check::pattern;
///
/// assert!(pattern::is_url("https://example.com/path?q=1"));
/// assert!(!pattern::is_url("example.com"));
/// ```
#[inline]
pub fn is_url(value: &str) -> bool {
    URL.is_match(value)
}

/// True if the string is an RFC 1123 hostname.
///
/// Labels are 1-63 characters, alphanumeric with interior hyphens; the
/// whole name is at most 253 characters.
///
/// # Example
///
/// ```rust
/// use breakwater::check::pattern;
///
/// assert!(pattern::is_hostname("db-1.internal.example.com"));
/// assert!(!pattern::is_hostname("-leading.example.com"));
/// ```
#[inline]
pub fn is_hostname(value: &str) -> bool {
    value.len() <= 253 && HOSTNAME.is_match(value)
}

/// True if the string is a dotted-quad IPv4 address with octets 0-255.
///
/// # Example
///
/// ```rust
/// use breakwater::check::pattern;
///
/// assert!(pattern::is_ip4_address("192.168.0.1"));
/// assert!(!pattern::is_ip4_address("256.1.1.1"));
/// ```
#[inline]
pub fn is_ip4_address(value: &str) -> bool {
    IP4.is_match(value)
}

/// True if the string is an IPv6 address, `::` compression included.
///
/// Zone indices and IPv4-embedded forms are not accepted.
///
/// # Example
///
/// ```rust
/// use breakwater::check::pattern;
///
/// assert!(pattern::is_ip6_address("2001:db8::1"));
/// assert!(pattern::is_ip6_address("::1"));
/// assert!(!pattern::is_ip6_address("2001:db8::1::2"));
/// ```
#[inline]
pub fn is_ip6_address(value: &str) -> bool {
    IP6.is_match(value) && !has_double_compression(value)
}

// The alternation above cannot see that `::` appeared twice; reject that
// separately.
fn has_double_compression(value: &str) -> bool {
    value.matches("::").count() > 1
}

/// True if the string is an IPv4 or IPv6 address.
#[inline]
pub fn is_ip_address(value: &str) -> bool {
    is_ip4_address(value) || is_ip6_address(value)
}

/// True if the string is a canonical 8-4-4-4-12 hex UUID.
///
/// # Example
///
/// ```rust
/// use breakwater::check::pattern;
///
/// assert!(pattern::is_uuid("550e8400-e29b-41d4-a716-446655440000"));
/// assert!(!pattern::is_uuid("550e8400e29b41d4a716446655440000"));
/// ```
#[inline]
pub fn is_uuid(value: &str) -> bool {
    UUID.is_match(value)
}

/// True if the string looks like a JSON document.
///
/// A delimiter sniff, not a parse: the trimmed text must start and end
/// with a matching `{}` or `[]` pair, and every `{}`/`[]` delimiter
/// outside of string literals must balance. `is_json("{}")` and
/// `is_json("[]")` are true; `is_json("{")` is false.
///
/// # Example
///
/// ```rust
/// use breakwater::check::pattern;
///
/// assert!(pattern::is_json(r#"{"a": [1, 2]}"#));
/// assert!(pattern::is_json("[]"));
/// assert!(!pattern::is_json("{"));
/// assert!(!pattern::is_json(r#""just a string""#));
/// ```
pub fn is_json(value: &str) -> bool {
    let text = value.trim();
    let first = text.chars().next();
    let last = text.chars().next_back();
    match (first, last) {
        (Some('{'), Some('}')) | (Some('['), Some(']')) => delimiters_balance(text),
        _ => false,
    }
}

fn delimiters_balance(text: &str) -> bool {
    let mut expected_closers: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;
    for c in text.chars() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => expected_closers.push('}'),
            '[' => expected_closers.push(']'),
            '}' | ']' => {
                if expected_closers.pop() != Some(c) {
                    return false;
                }
            }
            _ => {}
        }
    }
    !in_string && expected_closers.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_email("a@b.com"));
        assert!(is_email("first.last+tag@sub.example.org"));
        assert!(!is_email("a@@b.com"));
        assert!(!is_email("a@b"));
        assert!(!is_email("@b.com"));
        assert!(!is_email("a b@c.com"));
    }

    #[test]
    fn test_email_is_anchored() {
        assert!(!is_email("see a@b.com here"));
        assert!(!is_email("a@b.com\n"));
    }

    #[test]
    fn test_url() {
        assert!(is_url("https://example.com"));
        assert!(is_url("http://example.com/a/b?q=1#frag"));
        assert!(is_url("ftp://files.example.com"));
        assert!(!is_url("example.com"));
        assert!(!is_url("https://"));
        assert!(!is_url("https://exa mple.com"));
    }

    #[test]
    fn test_hostname() {
        assert!(is_hostname("localhost"));
        assert!(is_hostname("db-1.internal.example.com"));
        assert!(!is_hostname("-leading.example.com"));
        assert!(!is_hostname("trailing-.example.com"));
        assert!(!is_hostname("has_underscore.example.com"));
        assert!(!is_hostname(&"a".repeat(254)));
    }

    #[test]
    fn test_ip4() {
        assert!(is_ip4_address("0.0.0.0"));
        assert!(is_ip4_address("255.255.255.255"));
        assert!(is_ip4_address("192.168.0.1"));
        assert!(!is_ip4_address("256.1.1.1"));
        assert!(!is_ip4_address("1.2.3"));
        assert!(!is_ip4_address("1.2.3.4.5"));
        assert!(!is_ip4_address("a.b.c.d"));
    }

    #[test]
    fn test_ip6() {
        assert!(is_ip6_address("2001:0db8:85a3:0000:0000:8a2e:0370:7334"));
        assert!(is_ip6_address("2001:db8::1"));
        assert!(is_ip6_address("::1"));
        assert!(is_ip6_address("::"));
        assert!(is_ip6_address("fe80::"));
        assert!(!is_ip6_address("2001:db8::1::2"));
        assert!(!is_ip6_address("12345::1"));
        assert!(!is_ip6_address("1.2.3.4"));
    }

    #[test]
    fn test_ip_address_accepts_either_family() {
        assert!(is_ip_address("10.0.0.1"));
        assert!(is_ip_address("::1"));
        assert!(!is_ip_address("not-an-ip"));
    }

    #[test]
    fn test_uuid_canonical_form_only() {
        assert!(is_uuid("550e8400-e29b-41d4-a716-446655440000"));
        assert!(is_uuid("550E8400-E29B-41D4-A716-446655440000"));
        assert!(!is_uuid("550e8400e29b41d4a716446655440000"));
        assert!(!is_uuid("550e8400-e29b-41d4-a716-44665544000"));
        assert!(!is_uuid("{550e8400-e29b-41d4-a716-446655440000}"));
        assert!(!is_uuid("550e8400-e29b-41d4-a716-44665544zzzz"));
    }

    #[test]
    fn test_matches_uses_caller_pattern() {
        let even_digits = Regex::new(r"^[02468]+$").unwrap();
        assert!(matches("2480", &even_digits));
        assert!(!matches("123", &even_digits));
    }

    #[test]
    fn test_json_accepts_balanced_documents() {
        assert!(is_json("{}"));
        assert!(is_json("[]"));
        assert!(is_json(r#"{"a": {"b": [1, 2, 3]}}"#));
        assert!(is_json(" [1, 2] "));
    }

    #[test]
    fn test_json_rejects_unbalanced_or_unwrapped() {
        assert!(!is_json("{"));
        assert!(!is_json("}"));
        assert!(!is_json("{]"));
        assert!(!is_json(r#"{"a": [1, 2}"#));
        assert!(!is_json("plain text"));
        assert!(!is_json("42"));
        assert!(!is_json(""));
    }

    #[test]
    fn test_json_ignores_delimiters_inside_strings() {
        assert!(is_json(r#"{"brace": "}"}"#));
        assert!(is_json(r#"["quoted \" bracket ]"]"#));
        assert!(!is_json(r#"{"a": "}"#));
    }
}
