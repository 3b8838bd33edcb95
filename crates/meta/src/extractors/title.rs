// ABOUTME: Title cleaning heuristic that strips site-name framing from page titles.
// ABOUTME: Removes the OpenGraph site name and the domain, then a leading/trailing splitter word.

use std::collections::BTreeMap;

use regex::RegexBuilder;

/// Punctuation that separates a site name from an article title.
pub const SPLITTER_CHARS: &[&str] = &["|", "-", "»", ":"];

/// Cleans a raw title candidate.
///
/// Handles "Site Name | Article Title" and "Article Title - Site Name":
/// 1. removes every case-sensitive occurrence of OpenGraph `site_name`,
///    unless it equals the whole raw title;
/// 2. removes every case-insensitive occurrence of `domain`;
/// 3. drops a trailing splitter word, then a leading one;
/// 4. rejoins the words with single spaces.
///
/// The site name match is case-sensitive while the domain match is not.
pub fn clean_title(title: &str, open_graph: &BTreeMap<String, String>, domain: &str) -> String {
    let mut title = title.to_string();

    if let Some(site_name) = open_graph.get("site_name") {
        if !site_name.is_empty() && *site_name != title {
            title = title.replace(site_name.as_str(), "");
        }
    }

    if !domain.is_empty() {
        title = remove_ignore_case(&title, domain);
    }

    let mut words: Vec<&str> = title.split_whitespace().collect();
    if words.is_empty() {
        return String::new();
    }

    if words.last().map_or(false, |w| SPLITTER_CHARS.contains(w)) {
        words.pop();
    }
    if words.first().map_or(false, |w| SPLITTER_CHARS.contains(w)) {
        words.remove(0);
    }

    words.join(" ").trim().to_string()
}

fn remove_ignore_case(haystack: &str, needle: &str) -> String {
    match RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.replace_all(haystack, "").into_owned(),
        Err(_) => haystack.to_string(),
    }
}
