use super::config::PageRequest;

/// Build the sections URL with `Offset`/`Size` query parameters
pub fn build_sections_url(base_url: &str, member_id: &str, page: PageRequest) -> String {
    format!(
        "{}?Offset={}&Size={}",
        sections_path(base_url, member_id),
        page.offset,
        page.size
    )
}

fn sections_path(base_url: &str, member_id: &str) -> String {
    format!(
        "{}/api/v1/members/{}/sections",
        trim_base(base_url),
        urlencoding::encode(member_id)
    )
}

fn trim_base(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}
