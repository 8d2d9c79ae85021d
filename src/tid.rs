use url::Url;

/// Pulls the thread id out of the link's `tid` query parameter.
/// Returns `None` for unparsable links, a missing `tid` or a non-numeric value.
pub fn extract_tid(link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;
    let (_, tid) = url.query_pairs().find(|(key, _)| key == "tid")?;
    if !tid.is_empty() && tid.bytes().all(|b| b.is_ascii_digit()) {
        Some(tid.into_owned())
    } else {
        None
    }
}
