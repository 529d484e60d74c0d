use serde::{Deserialize, Serialize};

/// Placeholder substituted for absent fields in a report row
pub const PLACEHOLDER: &str = "N/A";

/// A PubMed article as returned by EFetch, reduced to the fields the
/// report needs
///
/// Every field is optional: EFetch records routinely omit titles, dates, or
/// the whole author list, and absence is handled downstream with placeholders
/// rather than errors.
#[derive(Debug, Clone, Default)]
pub struct PubMedArticle {
    /// PubMed ID
    pub pmid: Option<String>,
    /// Article title
    pub title: Option<String>,
    /// Publication year from Journal/JournalIssue/PubDate/Year
    pub pub_year: Option<String>,
    /// Authors in document order
    pub authors: Vec<Author>,
}

/// One author entry from an EFetch record
#[derive(Debug, Clone, Default)]
pub struct Author {
    /// Author last name
    pub last_name: Option<String>,
    /// Affiliation strings in document order; classification uses only the
    /// first entry
    pub affiliations: Vec<String>,
}

impl Author {
    /// The affiliation string used for classification, if any
    pub fn primary_affiliation(&self) -> Option<&str> {
        self.affiliations.first().map(String::as_str)
    }
}

/// One row of the final report
///
/// Field names serialize to the CSV header row. List-valued fields are
/// already joined with `", "`; absent values hold [`PLACEHOLDER`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PaperRow {
    /// PubMed ID
    #[serde(rename = "PubmedID")]
    pub pmid: String,
    /// Article title
    #[serde(rename = "Title")]
    pub title: String,
    /// Publication year
    #[serde(rename = "Publication Date")]
    pub pub_year: String,
    /// Last names of authors with a pharma/biotech affiliation
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,
    /// The matching affiliation strings, parallel to the author list
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,
    /// Best-effort corresponding-author email proxy
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_email: String,
}

impl PaperRow {
    /// The six report column names, in output order
    pub fn headers() -> [&'static str; 6] {
        [
            "PubmedID",
            "Title",
            "Publication Date",
            "Non-academic Author(s)",
            "Company Affiliation(s)",
            "Corresponding Author Email",
        ]
    }
}
