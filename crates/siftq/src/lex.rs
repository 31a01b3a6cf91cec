use crate::condition::Cmp;

///
/// Operator lexing
///
/// Splits a compound field key into a bare field name and a comparison
/// operator. Total over all inputs: a key with no usable marker comes back
/// byte for byte under implicit equals.
///

/// Reserved connective keys. Matched exactly, and never recovered as field
/// names by the lexer.
pub const AND_KEY: &str = "$and";
pub const OR_KEY: &str = "$or";

pub const CONNECTIVES: &[&str] = &[AND_KEY, OR_KEY];

/// Trailing markers, scanned in order. Longest first, so `>=` wins over `>`
/// and `!=` over `!`.
pub const SUFFIX_MARKERS: &[(&str, Cmp)] = &[
    (">=", Cmp::Gte),
    ("<=", Cmp::Lte),
    ("!=", Cmp::Ne),
    (">", Cmp::Gt),
    ("<", Cmp::Lt),
    ("!", Cmp::Not),
];

/// Colon-delimited operator names, matched exactly against the last segment.
pub const NAMED_MARKERS: &[(&str, Cmp)] = &[
    ("gt", Cmp::Gt),
    ("gte", Cmp::Gte),
    ("lt", Cmp::Lt),
    ("lte", Cmp::Lte),
    ("ne", Cmp::Ne),
    ("not", Cmp::Not),
    ("in", Cmp::In),
    ("nin", Cmp::NotIn),
];

/// Characters that can form a suffix marker.
const MARKER_CHARS: &[char] = &['<', '>', '!', '='];

/// Split `key` into `(field, cmp)`.
///
/// Suffix markers are tried before colon names, and optional whitespace
/// before a marker is ignored. A key whose recovered field would lex again
/// is not split at all, so a lexed clause always survives a round trip
/// through filter syntax.
#[must_use]
pub fn lex(key: &str) -> (&str, Cmp) {
    let trimmed = key.trim();

    for (marker, cmp) in SUFFIX_MARKERS {
        if let Some(rest) = trimmed.strip_suffix(marker) {
            let field = rest.trim_end();
            if !residual(field) {
                return (field, *cmp);
            }
        }
    }

    if let Some((rest, name)) = trimmed.rsplit_once(':') {
        let field = rest.trim_end();
        if !residual(field) {
            for (marker, cmp) in NAMED_MARKERS {
                if name == *marker {
                    return (field, *cmp);
                }
            }
        }
    }

    (key, Cmp::Eq)
}

/// True when a stripped field still reads as filter vocabulary: empty, a
/// residual marker character, a named marker in its last colon segment, or a
/// reserved connective.
fn residual(field: &str) -> bool {
    if field.is_empty() || field.ends_with(MARKER_CHARS) || CONNECTIVES.contains(&field) {
        return true;
    }

    field
        .rsplit_once(':')
        .is_some_and(|(_, name)| NAMED_MARKERS.iter().any(|(marker, _)| name == *marker))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_markers_scan_longest_first() {
        for pair in SUFFIX_MARKERS.windows(2) {
            assert!(
                pair[0].0.len() >= pair[1].0.len(),
                "marker '{}' shadowed by '{}'",
                pair[0].0,
                pair[1].0
            );
        }
    }

    #[test]
    fn suffix_forms_lex_with_and_without_space() {
        for (marker, cmp) in SUFFIX_MARKERS {
            assert_eq!(lex(&format!("key{marker}")), ("key", *cmp));
            assert_eq!(lex(&format!("key {marker}")), ("key", *cmp));
        }
    }

    #[test]
    fn two_char_markers_beat_their_prefixes() {
        assert_eq!(lex("key>="), ("key", Cmp::Gte));
        assert_eq!(lex("key<="), ("key", Cmp::Lte));
        assert_eq!(lex("key!="), ("key", Cmp::Ne));
    }

    #[test]
    fn named_forms_lex_exactly() {
        for (name, cmp) in NAMED_MARKERS {
            assert_eq!(lex(&format!("key:{name}")), ("key", *cmp));
        }
    }

    #[test]
    fn unknown_markers_pass_through() {
        assert_eq!(lex("key:foo"), ("key:foo", Cmp::Eq));
        assert_eq!(lex("key="), ("key=", Cmp::Eq));
        assert_eq!(lex("key>>"), ("key>>", Cmp::Eq));
        assert_eq!(lex("key: gt"), ("key: gt", Cmp::Eq));
    }

    #[test]
    fn extra_colon_segments_pass_through() {
        assert_eq!(lex("a:gt:b"), ("a:gt:b", Cmp::Eq));
        assert_eq!(lex("a:b:gt"), ("a:b", Cmp::Gt));
    }

    #[test]
    fn marker_only_keys_pass_through() {
        assert_eq!(lex(">"), (">", Cmp::Eq));
        assert_eq!(lex(">="), (">=", Cmp::Eq));
        assert_eq!(lex(":gt"), (":gt", Cmp::Eq));
    }

    #[test]
    fn lexable_residues_pass_through() {
        // stripping one marker may not leave another behind
        assert_eq!(lex("a:gt>"), ("a:gt>", Cmp::Eq));
        assert_eq!(lex("a:gt:lt"), ("a:gt:lt", Cmp::Eq));
        assert_eq!(lex("a>:gt"), ("a>:gt", Cmp::Eq));
    }

    #[test]
    fn reserved_connectives_are_never_recovered() {
        assert_eq!(lex("$or>"), ("$or>", Cmp::Eq));
        assert_eq!(lex("$or:in"), ("$or:in", Cmp::Eq));
        assert_eq!(lex("$and !="), ("$and !=", Cmp::Eq));
    }

    #[test]
    fn recovered_fields_are_trimmed() {
        assert_eq!(lex("  key1 >  "), ("key1", Cmp::Gt));
        assert_eq!(lex("key1 :gt"), ("key1", Cmp::Gt));
    }

    #[test]
    fn plain_fields_keep_implicit_equals() {
        assert_eq!(lex("key"), ("key", Cmp::Eq));
        assert_eq!(lex(""), ("", Cmp::Eq));
    }

    #[test]
    fn markerless_keys_keep_their_whitespace() {
        assert_eq!(lex(" plain "), (" plain ", Cmp::Eq));
        assert_eq!(lex("$or "), ("$or ", Cmp::Eq));
    }
}
