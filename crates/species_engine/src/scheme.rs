const INSECURE_PREFIX: &str = "http://";
const SECURE_PREFIX: &str = "https://";

/// How follow-up references (next pages, member urls) are addressed.
///
/// When the catalog itself is served over https, plain http references are
/// upgraded so the viewer never mixes secure and insecure requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemePolicy {
    UpgradeInsecure,
    Preserve,
}

impl SchemePolicy {
    pub fn for_origin(origin: &str) -> Self {
        match url::Url::parse(origin) {
            Ok(url) if url.scheme() == "https" => SchemePolicy::UpgradeInsecure,
            _ => SchemePolicy::Preserve,
        }
    }

    pub fn apply(self, reference: &str) -> String {
        match self {
            SchemePolicy::UpgradeInsecure => match reference.strip_prefix(INSECURE_PREFIX) {
                Some(rest) => format!("{SECURE_PREFIX}{rest}"),
                None => reference.to_string(),
            },
            SchemePolicy::Preserve => reference.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secure_origin_upgrades_insecure_reference() {
        let policy = SchemePolicy::for_origin("https://swapi.dev/api/species/");
        assert_eq!(policy, SchemePolicy::UpgradeInsecure);
        assert_eq!(
            policy.apply("http://swapi.dev/api/species/?page=2"),
            "https://swapi.dev/api/species/?page=2"
        );
    }

    #[test]
    fn secure_reference_passes_through() {
        let policy = SchemePolicy::UpgradeInsecure;
        assert_eq!(
            policy.apply("https://swapi.dev/api/people/13/"),
            "https://swapi.dev/api/people/13/"
        );
    }

    #[test]
    fn only_the_leading_scheme_is_rewritten() {
        let policy = SchemePolicy::UpgradeInsecure;
        assert_eq!(
            policy.apply("http://mirror.test/?from=http://swapi.dev"),
            "https://mirror.test/?from=http://swapi.dev"
        );
        assert_eq!(policy.apply("ftp://http://x"), "ftp://http://x");
    }

    #[test]
    fn insecure_origin_preserves_references() {
        let policy = SchemePolicy::for_origin("http://127.0.0.1:8080/api/species/");
        assert_eq!(policy, SchemePolicy::Preserve);
        assert_eq!(
            policy.apply("http://127.0.0.1:8080/api/people/1/"),
            "http://127.0.0.1:8080/api/people/1/"
        );
    }

    #[test]
    fn unparseable_origin_preserves_references() {
        assert_eq!(SchemePolicy::for_origin("not a url"), SchemePolicy::Preserve);
    }
}
