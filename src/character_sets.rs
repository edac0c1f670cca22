const SCHEME: u8 = 1 << 0;
const QUERY: u8 = 1 << 1;
const FRAGMENT: u8 = 1 << 2;

/// Character classes used by the component grammars.
/// Maps a byte to the bit set of classes it belongs to; non-ASCII bytes
/// belong to no class.
const CHAR_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    // Alphanumerics belong to every class
    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = SCHEME | QUERY | FRAGMENT;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = SCHEME | QUERY | FRAGMENT;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = SCHEME | QUERY | FRAGMENT;
        i += 1;
    }

    // Scheme: + . -
    table[b'+' as usize] |= SCHEME;
    table[b'.' as usize] |= SCHEME;
    table[b'-' as usize] |= SCHEME;

    // Query pair text: _ . - [ ] ~ & % + ?
    let query = b"_.-[]~&%+?";
    let mut i = 0;
    while i < query.len() {
        table[query[i] as usize] |= QUERY;
        i += 1;
    }

    // Fragment: ? % ! $ & ' ( ) * + , ; = - . _ ~ : @ /
    let fragment = b"?%!$&'()*+,;=-._~:@/";
    let mut i = 0;
    while i < fragment.len() {
        table[fragment[i] as usize] |= FRAGMENT;
        i += 1;
    }

    table
};

/// Check if a byte may follow the first letter of a scheme
pub fn is_scheme_byte(b: u8) -> bool {
    CHAR_TABLE[b as usize] & SCHEME != 0
}

/// Check if a byte may appear in a query key or value (`=` excluded)
pub fn is_query_byte(b: u8) -> bool {
    CHAR_TABLE[b as usize] & QUERY != 0
}

/// Check if a byte may appear in a fragment after the leading `#`
pub fn is_fragment_byte(b: u8) -> bool {
    CHAR_TABLE[b as usize] & FRAGMENT != 0
}

/// Check if a byte is a C0 control, space or DEL
pub fn is_c0_control_or_space(b: u8) -> bool {
    b <= 0x20 || b == 0x7F
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_bytes() {
        for b in b"azAZ09+.-" {
            assert!(is_scheme_byte(*b), "{}", *b as char);
        }
        for b in b"_~:/ \xC3" {
            assert!(!is_scheme_byte(*b), "{}", *b as char);
        }
    }

    #[test]
    fn test_query_bytes() {
        for b in b"aZ9_.-[]~&%+?" {
            assert!(is_query_byte(*b), "{}", *b as char);
        }
        for b in b"=#/ !*'" {
            assert!(!is_query_byte(*b), "{}", *b as char);
        }
    }

    #[test]
    fn test_fragment_bytes() {
        for b in b"?%!$&'()*+,;=aZ9-._~:@/" {
            assert!(is_fragment_byte(*b), "{}", *b as char);
        }
        for b in b"#[]<> \"^{}|\\" {
            assert!(!is_fragment_byte(*b), "{}", *b as char);
        }
    }

    #[test]
    fn test_c0_control_or_space() {
        assert!(is_c0_control_or_space(b' '));
        assert!(is_c0_control_or_space(b'\t'));
        assert!(is_c0_control_or_space(0x7F));
        assert!(!is_c0_control_or_space(b'a'));
    }
}
