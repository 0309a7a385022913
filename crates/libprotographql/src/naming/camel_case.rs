/// Converts a protobuf identifier to upper camel case using the same rules as
/// protoc's Go code generator.
///
/// An underscore followed by a lowercase letter is dropped and the letter is
/// uppercased. The first letter is uppercased. A leading underscore becomes
/// `X` so the result still starts with a capital. Digits and every other
/// character are kept as is, so existing capitals (`HTTPServer`) survive.
pub fn camel_case(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(bytes.len() + 1);

    let mut i = 0;
    if bytes.first() == Some(&b'_') {
        out.push('X');
        i += 1;
    }

    while i < bytes.len() {
        let c = bytes[i];
        if c == b'_' && bytes.get(i + 1).is_some_and(u8::is_ascii_lowercase) {
            i += 1;
            continue;
        }
        if c.is_ascii_digit() {
            out.push(c as char);
            i += 1;
            continue;
        }

        if c.is_ascii() {
            out.push(c.to_ascii_uppercase() as char);
            i += 1;
        } else {
            // Copy the whole (non-ascii) character through untouched.
            let ch = s[i..].chars().next().unwrap_or_default();
            out.push(ch);
            i += ch.len_utf8().max(1);
            continue;
        }

        while bytes.get(i).is_some_and(u8::is_ascii_lowercase) {
            out.push(bytes[i] as char);
            i += 1;
        }
    }

    out
}

/// [`camel_case`] with the first character lowercased: `say_hello` and
/// `SayHello` both become `sayHello`.
pub fn lower_camel_case(s: &str) -> String {
    let upper = camel_case(s);
    let mut chars = upper.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => upper,
    }
}
