/// Append a percent-encoded exposure name to the base search URL.
///
/// No separator is inserted: `base_url` must already end with the delimiter
/// the query is appended to (e.g. `#query=` or `/`). Every character outside
/// the unreserved set is escaped, including `/`, `&`, `#` and spaces.
pub fn build_url(base_url: &str, exposure_name: &str) -> String {
    let mut url = String::with_capacity(base_url.len() + exposure_name.len() * 3);
    url.push_str(base_url);
    url.push_str(&urlencoding::encode(exposure_name));
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_escapes_spaces() {
        assert_eq!(
            build_url("https://x/q=", "ethyl benzene"),
            "https://x/q=ethyl%20benzene"
        );
    }

    #[test]
    fn test_build_url_escapes_reserved_characters() {
        let url = build_url("https://x/q=", "a/b&c#d");
        assert_eq!(url, "https://x/q=a%2Fb%26c%23d");
        assert!(!url["https://x/q=".len()..].contains(['/', '&', '#']));
    }

    #[test]
    fn test_build_url_keeps_unreserved_characters() {
        assert_eq!(
            build_url("https://pubchem.ncbi.nlm.nih.gov/#query=", "1,2-dichloro-ethane_v2.0~"),
            "https://pubchem.ncbi.nlm.nih.gov/#query=1%2C2-dichloro-ethane_v2.0~"
        );
    }

    #[test]
    fn test_build_url_from_cid() {
        assert_eq!(build_url("https://x/compound/", "702"), "https://x/compound/702");
    }

    #[test]
    fn test_build_url_non_ascii() {
        assert_eq!(build_url("https://x/q=", "β-carotene"), "https://x/q=%CE%B2-carotene");
    }
}
