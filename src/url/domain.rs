/// Strips a leading `http://` or `https://` from user input
pub fn strip_scheme(input: &str) -> &str {
    input
        .strip_prefix("https://")
        .or_else(|| input.strip_prefix("http://"))
        .unwrap_or(input)
}

/// Checks a bare hostname against the DNS hostname grammar
///
/// Labels are 1-63 ASCII alphanumerics or hyphens, never starting or ending
/// with a hyphen. At least two labels are required and the final label must
/// be two or more ASCII letters.
///
/// # Examples
///
/// ```
/// use seo_scan::url::is_valid_hostname;
///
/// assert!(is_valid_hostname("example.com"));
/// assert!(is_valid_hostname("sub-1.example.co.uk"));
/// assert!(!is_valid_hostname("-bad.com"));
/// assert!(!is_valid_hostname("a..b"));
/// ```
pub fn is_valid_hostname(host: &str) -> bool {
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let (tld, rest) = match labels.split_last() {
        Some(parts) => parts,
        None => return false,
    };

    if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    rest.iter().all(|label| is_valid_label(label))
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > 63 {
        return false;
    }

    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }

    label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
