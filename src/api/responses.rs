// src/api/responses.rs
//! Wire shapes of the Red List v4 API.
//!
//! The schema belongs to a third party. Missing fields decode to their empty
//! defaults; fields of the wrong type are a decode error.

use super::types::CountryAssessments;
use crate::model::{Assessment, CommonName, RedListCategory, TaxonDetail};
use serde::Deserialize;
use std::collections::HashMap;

/// `GET /countries`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CountryListResponse {
    pub countries: Vec<CountryEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CountryEntry {
    pub code: String,
    pub description: LocalizedText,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LocalizedText {
    pub en: String,
}

/// `GET /countries/{code}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CountryResponse {
    pub country: CountryEntry,
    pub assessments: Vec<AssessmentPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssessmentPayload {
    pub taxon_scientific_name: String,
    pub red_list_category_code: String,
    pub url: String,
}

/// `GET /taxa/scientific_name`
#[derive(Debug, Clone, Deserialize)]
pub struct TaxonResponse {
    pub taxon: TaxonPayload,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaxonPayload {
    pub scientific_name: String,
    pub kingdom_name: String,
    pub phylum_name: String,
    pub class_name: String,
    pub order_name: String,
    pub family_name: String,
    pub common_names: Vec<CommonNamePayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CommonNamePayload {
    pub name: String,
    pub language: String,
    pub main: bool,
}

impl CountryListResponse {
    /// Code → English name. Entries without a code are dropped.
    pub fn into_name_map(self) -> HashMap<String, String> {
        self.countries
            .into_iter()
            .filter(|entry| !entry.code.is_empty())
            .map(|entry| (entry.code.to_uppercase(), entry.description.en))
            .collect()
    }
}

impl From<AssessmentPayload> for Assessment {
    fn from(payload: AssessmentPayload) -> Self {
        Assessment::new(
            payload.taxon_scientific_name,
            RedListCategory::from_code(&payload.red_list_category_code),
            payload.url,
        )
    }
}

impl From<CountryResponse> for CountryAssessments {
    fn from(response: CountryResponse) -> Self {
        CountryAssessments {
            country_name: response.country.description.en,
            assessments: response.assessments.into_iter().map(Assessment::from).collect(),
        }
    }
}

impl From<CommonNamePayload> for CommonName {
    fn from(payload: CommonNamePayload) -> Self {
        CommonName::new(payload.name, payload.language, payload.main)
    }
}

impl From<TaxonResponse> for TaxonDetail {
    fn from(response: TaxonResponse) -> Self {
        let taxon = response.taxon;
        TaxonDetail {
            scientific_name: taxon.scientific_name,
            kingdom: taxon.kingdom_name,
            phylum: taxon.phylum_name,
            class: taxon.class_name,
            order: taxon.order_name,
            family: taxon.family_name,
            common_names: taxon.common_names.into_iter().map(CommonName::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn country_response_keeps_assessment_order() {
        let json = r#"{
            "country": {"code": "CA", "description": {"en": "Canada"}},
            "assessments": [
                {"taxon_scientific_name": "Ursus maritimus", "red_list_category_code": "VU", "url": "https://example.org/1"},
                {"taxon_scientific_name": "Grus americana", "red_list_category_code": "EN"},
                {"taxon_scientific_name": "Castor canadensis", "red_list_category_code": "LC", "url": "https://example.org/3"}
            ]
        }"#;

        let response: CountryResponse = serde_json::from_str(json).unwrap();
        let country = CountryAssessments::from(response);

        assert_eq!(country.country_name, "Canada");
        let names: Vec<_> = country
            .assessments
            .iter()
            .map(|a| a.scientific_name.as_str())
            .collect();
        assert_eq!(names, vec!["Ursus maritimus", "Grus americana", "Castor canadensis"]);
        assert_eq!(country.assessments[1].category, RedListCategory::Endangered);
        assert_eq!(country.assessments[1].url, "");
    }

    #[test]
    fn country_response_without_country_block() {
        let response: CountryResponse = serde_json::from_str(r#"{"assessments": []}"#).unwrap();
        let country = CountryAssessments::from(response);
        assert_eq!(country.country_name, "");
        assert!(country.assessments.is_empty());
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let result = serde_json::from_str::<CountryResponse>(r#"{"assessments": "none"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn taxon_response_maps_ranks() {
        let json = r#"{
            "taxon": {
                "scientific_name": "Panthera onca",
                "kingdom_name": "ANIMALIA",
                "phylum_name": "CHORDATA",
                "class_name": "MAMMALIA",
                "order_name": "CARNIVORA",
                "family_name": "FELIDAE",
                "common_names": [
                    {"name": "Jaguar", "language": "eng", "main": true},
                    {"name": "Yaguareté", "language": "spa", "main": false}
                ]
            }
        }"#;

        let detail = TaxonDetail::from(serde_json::from_str::<TaxonResponse>(json).unwrap());
        assert_eq!(detail.class, "MAMMALIA");
        assert_eq!(detail.family, "FELIDAE");
        assert_eq!(detail.common_names.len(), 2);
        assert_eq!(detail.preferred_common_name("eng"), Some("Jaguar"));
    }

    #[test]
    fn taxon_response_requires_taxon() {
        assert!(serde_json::from_str::<TaxonResponse>("{}").is_err());
    }

    #[test]
    fn country_list_uppercases_and_drops_blank_codes() {
        let json = r#"{"countries": [
            {"code": "ke", "description": {"en": "Kenya"}},
            {"code": "", "description": {"en": "Nowhere"}},
            {"code": "MG", "description": {"en": "Madagascar"}}
        ]}"#;
        let names = serde_json::from_str::<CountryListResponse>(json)
            .unwrap()
            .into_name_map();

        assert_eq!(names.len(), 2);
        assert_eq!(names.get("KE").map(String::as_str), Some("Kenya"));
        assert_eq!(names.get("MG").map(String::as_str), Some("Madagascar"));
    }
}
