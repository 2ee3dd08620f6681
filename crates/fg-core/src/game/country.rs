use serde::{Deserialize, Serialize};

/// Countries whose flags appear in the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Country {
    Estonia,
    France,
    Germany,
    Ireland,
    Italy,
    Nigeria,
    Poland,
    Spain,
    Uk,
    Ukraine,
    Us,
}

impl Country {
    pub const ALL: [Country; 11] = [
        Self::Estonia,
        Self::France,
        Self::Germany,
        Self::Ireland,
        Self::Italy,
        Self::Nigeria,
        Self::Poland,
        Self::Spain,
        Self::Uk,
        Self::Ukraine,
        Self::Us,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Estonia => "Estonia",
            Self::France => "France",
            Self::Germany => "Germany",
            Self::Ireland => "Ireland",
            Self::Italy => "Italy",
            Self::Nigeria => "Nigeria",
            Self::Poland => "Poland",
            Self::Spain => "Spain",
            Self::Uk => "UK",
            Self::Ukraine => "Ukraine",
            Self::Us => "US",
        }
    }

    /// ISO 3166-1 alpha-2 code
    pub fn iso_code(&self) -> &'static str {
        match self {
            Self::Estonia => "EE",
            Self::France => "FR",
            Self::Germany => "DE",
            Self::Ireland => "IE",
            Self::Italy => "IT",
            Self::Nigeria => "NG",
            Self::Poland => "PL",
            Self::Spain => "ES",
            Self::Uk => "GB",
            Self::Ukraine => "UA",
            Self::Us => "US",
        }
    }

    /// Flag emoji built from regional indicator symbols
    pub fn flag(&self) -> String {
        self.iso_code()
            .chars()
            .filter_map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
            .collect()
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
