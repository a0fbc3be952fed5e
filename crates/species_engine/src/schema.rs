//! Wire shapes of the remote catalog and member endpoints.
//!
//! Only the fields the viewer needs are declared; everything else the API
//! sends is ignored. A missing or mistyped declared field fails decoding.

use serde::Deserialize;

/// One page of `GET <catalog-root>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogPage {
    pub results: Vec<SpeciesRecord>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpeciesRecord {
    pub name: String,
    #[serde(rename = "people")]
    pub member_refs: Vec<String>,
}

/// Body of `GET <member-url>`. Measurements are kept as sent, e.g. `"unknown"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemberRecord {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub gender: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_page_ignores_extra_fields() {
        let body = r#"{
            "count": 37,
            "next": "https://swapi.dev/api/species/?page=2",
            "previous": null,
            "results": [
                {"name": "Human", "classification": "mammal", "people": ["https://swapi.dev/api/people/1/"]}
            ]
        }"#;

        let page: CatalogPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.next.as_deref(), Some("https://swapi.dev/api/species/?page=2"));
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].member_refs, vec!["https://swapi.dev/api/people/1/"]);
    }

    #[test]
    fn last_page_has_null_next() {
        let page: CatalogPage = serde_json::from_str(r#"{"results": [], "next": null}"#).unwrap();
        assert!(page.next.is_none());
        assert!(page.results.is_empty());
    }

    #[test]
    fn member_without_mass_is_rejected() {
        let body = r#"{"name": "Yoda", "height": "66", "gender": "male"}"#;
        assert!(serde_json::from_str::<MemberRecord>(body).is_err());
    }

    #[test]
    fn numeric_mass_is_rejected() {
        let body = r#"{"name": "Yoda", "height": "66", "mass": 17, "gender": "male"}"#;
        assert!(serde_json::from_str::<MemberRecord>(body).is_err());
    }
}
