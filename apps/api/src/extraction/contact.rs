use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::models::ContactProfile;

const MAX_PHONES: usize = 3;
const MAX_URLS: usize = 5;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

// At least nine digits/separators between the first and last digit.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+(]?[1-9][0-9 .\-()]{8,}[0-9]").unwrap());

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());

fn collect(re: &Regex, text: &str, cap: usize) -> BTreeSet<String> {
    re.find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .take(cap)
        .collect()
}

pub fn extract_contact(text: &str) -> ContactProfile {
    ContactProfile {
        emails: collect(&EMAIL_RE, text, usize::MAX),
        phones: collect(&PHONE_RE, text, MAX_PHONES),
        urls: collect(&URL_RE, text, MAX_URLS),
    }
}
