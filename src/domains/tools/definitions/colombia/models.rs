//! Payload shapes returned by the API Colombia endpoints.
//!
//! Only `id` and `name` are required; everything else falls back to a
//! default so that a sparse record still renders. Explicit `null`s are
//! treated like missing fields.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `GET v1/Country/Colombia`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryData {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state_capital: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub surface: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub population: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_zone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency_symbol: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub iso_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub internet_domain: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone_prefix: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub radio_prefix: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub aircraft_prefix: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sub_region: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub borders: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub flags: Vec<String>,
}

/// `GET v1/Region` and `GET v1/Region/{id}`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionData {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// `None` when the upstream sends `null` or omits the field; an empty
    /// list is a different state.
    #[serde(default)]
    pub departments: Option<Vec<String>>,
}

/// Region reference embedded in a department.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRef {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// `GET v1/Department`, `GET v1/Department/{id}` and
/// `GET v1/Region/{id}/departments`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentData {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub city_capital_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub municipalities: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub surface: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub population: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone_prefix: String,
    #[serde(default)]
    pub region_id: Option<i64>,
    #[serde(default)]
    pub region: Option<RegionRef>,
}

impl DepartmentData {
    /// Name of the parent region, if the upstream resolved it.
    pub fn region_name(&self) -> Option<&str> {
        self.region
            .as_ref()
            .and_then(|r| r.name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_null_departments_is_none() {
        let json = r#"{"id": 1, "name": "Caribe", "description": "x", "departments": null}"#;
        let region: RegionData = serde_json::from_str(json).unwrap();
        assert!(region.departments.is_none());
    }

    #[test]
    fn test_region_empty_departments_is_some() {
        let json = r#"{"id": 1, "name": "Caribe", "description": "x", "departments": []}"#;
        let region: RegionData = serde_json::from_str(json).unwrap();
        assert_eq!(region.departments, Some(vec![]));
    }

    #[test]
    fn test_department_without_region() {
        let json = r#"{
            "id": 5, "name": "Antioquia", "description": "d",
            "cityCapitalId": 4, "municipalities": 125,
            "surface": 63612, "population": 6407102,
            "phonePrefix": "604", "regionId": 2, "region": null
        }"#;
        let dept: DepartmentData = serde_json::from_str(json).unwrap();
        assert_eq!(dept.city_capital_id, Some(4));
        assert_eq!(dept.region_id, Some(2));
        assert!(dept.region_name().is_none());
    }

    #[test]
    fn test_null_scalars_fall_back_to_defaults() {
        let json = r#"{
            "id": 7, "name": "Chocó", "description": null,
            "cityCapitalId": null, "municipalities": null,
            "surface": null, "population": null,
            "phonePrefix": null, "regionId": null, "region": null
        }"#;
        let dept: DepartmentData = serde_json::from_str(json).unwrap();
        assert_eq!(dept.description, "");
        assert_eq!(dept.municipalities, 0);
        assert_eq!(dept.population, 0.0);
        assert_eq!(dept.phone_prefix, "");
        assert!(dept.city_capital_id.is_none());
    }

    #[test]
    fn test_country_with_null_fields_decodes() {
        let json = r#"{
            "id": 1, "name": "Colombia", "phonePrefix": null,
            "languages": null, "borders": null, "surface": null
        }"#;
        let country: CountryData = serde_json::from_str(json).unwrap();
        assert_eq!(country.phone_prefix, "");
        assert!(country.languages.is_empty());
        assert!(country.borders.is_empty());
    }

    #[test]
    fn test_null_name_renders_empty() {
        let json = r#"{"id": 3, "name": null, "description": "x", "departments": null}"#;
        let region: RegionData = serde_json::from_str(json).unwrap();
        assert_eq!(region.name, "");
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let json = r#"{"id": 1, "description": "no name"}"#;
        assert!(serde_json::from_str::<RegionData>(json).is_err());
    }

    #[test]
    fn test_country_camel_case_fields() {
        let json = r#"{
            "id": 1, "name": "Colombia", "stateCapital": "Bogotá",
            "currencyCode": "COP", "internetDomain": ".co", "subRegion": "South America"
        }"#;
        let country: CountryData = serde_json::from_str(json).unwrap();
        assert_eq!(country.state_capital, "Bogotá");
        assert_eq!(country.currency_code, "COP");
        assert_eq!(country.internet_domain, ".co");
        assert_eq!(country.sub_region, "South America");
        assert!(country.languages.is_empty());
    }
}
