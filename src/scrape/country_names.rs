// src/scrape/country_names.rs
//! Static ISO 3166-1 alpha-2 → English name dictionary.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static COUNTRY_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("US", "United States"),
        ("CA", "Canada"),
        ("MX", "Mexico"),
        ("BR", "Brazil"),
        ("AR", "Argentina"),
        ("GB", "United Kingdom"),
        ("FR", "France"),
        ("DE", "Germany"),
        ("IT", "Italy"),
        ("ES", "Spain"),
        ("PT", "Portugal"),
        ("CN", "China"),
        ("JP", "Japan"),
        ("IN", "India"),
        ("AU", "Australia"),
        ("NZ", "New Zealand"),
        ("ZA", "South Africa"),
        ("KE", "Kenya"),
        ("TZ", "Tanzania"),
        ("EG", "Egypt"),
        ("NG", "Nigeria"),
        ("RU", "Russia"),
        ("ID", "Indonesia"),
        ("MY", "Malaysia"),
        ("TH", "Thailand"),
        ("VN", "Vietnam"),
        ("PH", "Philippines"),
        ("KR", "South Korea"),
        ("PK", "Pakistan"),
        ("BD", "Bangladesh"),
        ("CO", "Colombia"),
        ("PE", "Peru"),
        ("VE", "Venezuela"),
        ("CL", "Chile"),
        ("EC", "Ecuador"),
        ("BO", "Bolivia"),
        ("PY", "Paraguay"),
        ("UY", "Uruguay"),
        ("CR", "Costa Rica"),
        ("PA", "Panama"),
        ("CU", "Cuba"),
        ("GT", "Guatemala"),
        ("HN", "Honduras"),
        ("NI", "Nicaragua"),
        ("SV", "El Salvador"),
        ("BZ", "Belize"),
        ("MG", "Madagascar"),
        ("MW", "Malawi"),
        ("ZM", "Zambia"),
        ("ZW", "Zimbabwe"),
        ("BW", "Botswana"),
        ("NA", "Namibia"),
        ("AO", "Angola"),
        ("MZ", "Mozambique"),
        ("CD", "Democratic Republic of the Congo"),
        ("CG", "Republic of the Congo"),
        ("GA", "Gabon"),
        ("CM", "Cameroon"),
        ("GH", "Ghana"),
        ("CI", "Ivory Coast"),
        ("SN", "Senegal"),
        ("ML", "Mali"),
        ("NE", "Niger"),
        ("TD", "Chad"),
        ("SD", "Sudan"),
        ("ET", "Ethiopia"),
        ("SO", "Somalia"),
        ("UG", "Uganda"),
        ("RW", "Rwanda"),
        ("BI", "Burundi"),
        ("NP", "Nepal"),
        ("BT", "Bhutan"),
        ("LK", "Sri Lanka"),
        ("MM", "Myanmar"),
        ("LA", "Laos"),
        ("KH", "Cambodia"),
        ("SG", "Singapore"),
        ("BN", "Brunei"),
        ("PG", "Papua New Guinea"),
        ("FJ", "Fiji"),
        ("NO", "Norway"),
        ("SE", "Sweden"),
        ("FI", "Finland"),
        ("DK", "Denmark"),
        ("IS", "Iceland"),
        ("IE", "Ireland"),
        ("NL", "Netherlands"),
        ("BE", "Belgium"),
        ("LU", "Luxembourg"),
        ("CH", "Switzerland"),
        ("AT", "Austria"),
        ("PL", "Poland"),
        ("CZ", "Czech Republic"),
        ("SK", "Slovakia"),
        ("HU", "Hungary"),
        ("RO", "Romania"),
        ("BG", "Bulgaria"),
        ("GR", "Greece"),
        ("TR", "Turkey"),
        ("UA", "Ukraine"),
        ("BY", "Belarus"),
        ("RS", "Serbia"),
        ("HR", "Croatia"),
        ("SI", "Slovenia"),
        ("BA", "Bosnia and Herzegovina"),
        ("MK", "North Macedonia"),
        ("AL", "Albania"),
        ("ME", "Montenegro"),
        ("XK", "Kosovo"),
        ("MD", "Moldova"),
        ("EE", "Estonia"),
        ("LV", "Latvia"),
        ("LT", "Lithuania"),
    ])
});

/// English name for `code`, or `code` itself when it is not in the dictionary.
pub fn country_name(code: &str) -> String {
    COUNTRY_NAMES
        .get(code.to_uppercase().as_str())
        .map(|name| name.to_string())
        .unwrap_or_else(|| code.to_string())
}
