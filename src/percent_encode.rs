use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode, utf8_percent_encode};

/// Form-urlencoded percent-encode set.
/// Everything but ASCII alphanumerics and `-`, `_`, `.` is encoded; space is
/// handled separately and becomes `+`.
pub const FORM_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Form-urlencode a string directly into buffer
pub fn form_encode_into(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());

    for chunk in utf8_percent_encode(input, FORM_SET) {
        // Encoded bytes arrive as single "%XX" chunks
        if chunk == "%20" {
            buffer.push('+');
        } else {
            buffer.push_str(chunk);
        }
    }
}

/// Decode a form-urlencoded component: `+` becomes space, `%XX` becomes the
/// byte it encodes. Malformed escapes are kept literally and invalid UTF-8 is
/// replaced.
pub fn form_decode(input: &str) -> String {
    let replaced;
    let input = if input.contains('+') {
        replaced = input.replace('+', " ");
        replaced.as_str()
    } else {
        input
    };

    percent_decode(input.as_bytes())
        .decode_utf8_lossy()
        .into_owned()
}
