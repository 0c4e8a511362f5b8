use crate::model::Assessment;

/// What the country endpoint tells us about one country.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountryAssessments {
    /// Empty when upstream did not include a name.
    pub country_name: String,
    /// In the order upstream listed them.
    pub assessments: Vec<Assessment>,
}
