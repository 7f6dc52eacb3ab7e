//! Naming-convention transforms used for file names and class identifiers.
//!
//! | Function    | Input            | Output               |
//! |-------------|------------------|----------------------|
//! | `dasherize` | `"userProfile"`  | `"user-profile"`     |
//! | `dasherize` | `"Foo.service"`  | `"foo.service"`      |
//! | `classify`  | `"fooService"`   | `"FooService"`       |
//! | `camelize`  | `"user-profile"` | `"userProfile"`      |
//!
//! `dasherize` keeps `.` and `/` delimiters in place and converts each
//! segment on its own, so `"dataStore.service"` becomes
//! `"data-store.service"`.

/// Lowercase, hyphen-separated form of `input`.
pub fn dasherize(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut segment = String::new();

    for c in input.chars() {
        if c == '.' || c == '/' {
            out.push_str(&split_words(&segment).join("-"));
            out.push(c);
            segment.clear();
        } else {
            segment.push(c);
        }
    }
    out.push_str(&split_words(&segment).join("-"));
    out
}

/// PascalCase form of `input`; `.` and `/` are treated as word separators.
pub fn classify(input: &str) -> String {
    words_across_delimiters(input)
        .into_iter()
        .map(|w| capitalize(&w))
        .collect()
}

/// camelCase form of `input`.
pub fn camelize(input: &str) -> String {
    let mut words = words_across_delimiters(input).into_iter();
    match words.next() {
        Some(first) => {
            let mut out = first;
            out.extend(words.map(|w| capitalize(&w)));
            out
        }
        None => String::new(),
    }
}

fn words_across_delimiters(input: &str) -> Vec<String> {
    input
        .split(['.', '/'])
        .flat_map(split_words)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::new();
            // to_uppercase handles Unicode correctly (e.g., "ß" -> "SS")
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Split a string into lowercase words based on casing and separators.
///
/// ## Word Boundary Detection
///
/// 1. **Explicit separators:** `_`, `-`, whitespace → always split
/// 2. **Case transition (camelCase):** `aB` → split between `a` and `B`
/// 3. **Acronym boundary:** `HTTPRequest` → split between `P` and `R`
///    (detected by `Upper Upper Lower` pattern)
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    // Peekable allows looking ahead for boundary detection without consuming
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(&next) = chars.peek() {
            // "myApp" → "my" + "App"
            if (c.is_lowercase() || c.is_ascii_digit()) && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            // "HTTPServer" → "HTTP" + "Server"
            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dasherize_handles_common_casings() {
        assert_eq!(dasherize("foo"), "foo");
        assert_eq!(dasherize("userProfile"), "user-profile");
        assert_eq!(dasherize("UserProfile"), "user-profile");
        assert_eq!(dasherize("user_profile"), "user-profile");
        assert_eq!(dasherize("user profile"), "user-profile");
        assert_eq!(dasherize("HTTPClient"), "http-client");
    }

    #[test]
    fn dasherize_keeps_dot_and_slash_delimiters() {
        assert_eq!(dasherize("foo.service"), "foo.service");
        assert_eq!(dasherize("dataStore.service"), "data-store.service");
        assert_eq!(dasherize("core/authGuard"), "core/auth-guard");
    }

    #[test]
    fn classify_appends_words_in_pascal_case() {
        assert_eq!(classify("fooService"), "FooService");
        assert_eq!(classify("user-profileService"), "UserProfileService");
        assert_eq!(classify("data_store"), "DataStore");
        assert_eq!(classify("foo.bar"), "FooBar");
    }

    #[test]
    fn camelize_lowercases_first_word() {
        assert_eq!(camelize("user-profile"), "userProfile");
        assert_eq!(camelize("UserProfile"), "userProfile");
        assert_eq!(camelize(""), "");
    }

    #[test]
    fn digits_before_capitals_split() {
        assert_eq!(dasherize("oauth2Client"), "oauth2-client");
    }
}
