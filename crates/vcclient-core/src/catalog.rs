//! Language filtering over the sample catalog.

use crate::SampleModel;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ALL_LANGUAGES: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LanguageFilter {
    #[default]
    All,
    Only(String),
}

impl LanguageFilter {
    pub fn parse(value: &str) -> Self {
        if value == ALL_LANGUAGES {
            LanguageFilter::All
        } else {
            LanguageFilter::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LanguageFilter::All => ALL_LANGUAGES,
            LanguageFilter::Only(lang) => lang,
        }
    }

    pub fn matches(&self, sample: &SampleModel) -> bool {
        match self {
            LanguageFilter::All => true,
            LanguageFilter::Only(lang) => sample.lang == *lang,
        }
    }
}

impl fmt::Display for LanguageFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for LanguageFilter {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<LanguageFilter> for String {
    fn from(filter: LanguageFilter) -> Self {
        filter.as_str().to_string()
    }
}

/// `"All"` followed by every distinct language tag in first-seen order.
pub fn language_options(samples: &[SampleModel]) -> Vec<String> {
    samples
        .iter()
        .fold(vec![ALL_LANGUAGES.to_string()], |mut langs, sample| {
            if !langs.contains(&sample.lang) {
                langs.push(sample.lang.clone());
            }
            langs
        })
}

/// Samples matching `filter`, in catalog order.
pub fn filter_samples<'a>(
    samples: &'a [SampleModel],
    filter: &'a LanguageFilter,
) -> impl Iterator<Item = &'a SampleModel> + 'a {
    samples.iter().filter(move |sample| filter.matches(sample))
}
