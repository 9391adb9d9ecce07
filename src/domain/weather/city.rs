use std::fmt;

use crate::domain::DomainError;

/// Returned when a request names no usable city
pub const MISSING_CITIES_MESSAGE: &str = "Cities parameter is missing";

/// A single trimmed, non-empty location name submitted for lookup
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CityQuery(String);

impl CityQuery {
    /// Create a city query, trimming surrounding whitespace
    pub fn new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = name.as_ref().trim();

        if trimmed.is_empty() {
            return Err(DomainError::validation("City name cannot be empty"));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CityQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CityQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Split a raw comma-separated list into city queries.
///
/// Segments are trimmed and empty segments are dropped, so `"Paris,,London"`
/// yields two queries. Order and duplicates are preserved.
pub fn parse_city_list(raw: &str) -> Vec<CityQuery> {
    raw.split(',')
        .filter_map(|segment| CityQuery::new(segment).ok())
        .collect()
}

/// Parse an optional raw city list, rejecting input that names no city
pub fn require_cities(raw: Option<&str>) -> Result<Vec<CityQuery>, DomainError> {
    let cities = parse_city_list(raw.unwrap_or_default());

    if cities.is_empty() {
        return Err(DomainError::validation(MISSING_CITIES_MESSAGE));
    }

    Ok(cities)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(queries: &[CityQuery]) -> Vec<&str> {
        queries.iter().map(CityQuery::as_str).collect()
    }

    #[test]
    fn test_city_query_trims() {
        let city = CityQuery::new("  Paris \t").unwrap();
        assert_eq!(city.as_str(), "Paris");
        assert_eq!(city.to_string(), "Paris");
    }

    #[test]
    fn test_city_query_rejects_blank() {
        assert!(matches!(
            CityQuery::new("   "),
            Err(DomainError::Validation { .. })
        ));
        assert!(CityQuery::new("").is_err());
    }

    #[test]
    fn test_parse_city_list_preserves_order() {
        let cities = parse_city_list("Paris, London ,Tokyo");
        assert_eq!(names(&cities), vec!["Paris", "London", "Tokyo"]);
    }

    #[test]
    fn test_parse_city_list_keeps_duplicates() {
        let cities = parse_city_list("Paris,Paris");
        assert_eq!(names(&cities), vec!["Paris", "Paris"]);
    }

    #[test]
    fn test_parse_city_list_drops_empty_segments() {
        let cities = parse_city_list("Paris,, ,London,");
        assert_eq!(names(&cities), vec!["Paris", "London"]);
    }

    #[test]
    fn test_parse_city_list_blank_input() {
        assert!(parse_city_list("").is_empty());
        assert!(parse_city_list(" , ,").is_empty());
    }

    #[test]
    fn test_require_cities() {
        let cities = require_cities(Some("Paris, ,Lima")).unwrap();
        assert_eq!(names(&cities), vec!["Paris", "Lima"]);

        for raw in [None, Some(""), Some(" , ")] {
            match require_cities(raw) {
                Err(DomainError::Validation { message }) => {
                    assert_eq!(message, MISSING_CITIES_MESSAGE)
                }
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_parse_city_list_keeps_inner_spaces() {
        let cities = parse_city_list("New York,  Rio de Janeiro");
        assert_eq!(names(&cities), vec!["New York", "Rio de Janeiro"]);
    }
}
