//! The pure extraction stage: affiliation classification and row assembly
//!
//! This is the only place where domain logic lives. An affiliation string is
//! "non-academic" when it contains `pharma` or `biotech`, case-insensitively.
//! An affiliation containing `@` doubles as a best-effort corresponding-email
//! proxy; when several authors qualify, the last one in document order wins.

use tracing::debug;

use crate::models::{PLACEHOLDER, PaperRow, PubMedArticle};

/// Fallback when a matching author has no last name
const UNKNOWN_AUTHOR: &str = "Unknown";

/// Whether an affiliation string marks its author as non-academic
pub fn is_industry_affiliation(affiliation: &str) -> bool {
    let lower = affiliation.to_lowercase();
    lower.contains("pharma") || lower.contains("biotech")
}

/// Map fetched articles to report rows, one row per article
///
/// Articles with no qualifying author still produce a row, with the three
/// authorship columns at the placeholder value.
pub fn rows_from_articles(articles: &[PubMedArticle]) -> Vec<PaperRow> {
    let rows: Vec<PaperRow> = articles.iter().map(row_from_article).collect();
    debug!(rows = rows.len(), "assembled report rows");
    rows
}

fn row_from_article(article: &PubMedArticle) -> PaperRow {
    let mut non_academic_authors: Vec<String> = Vec::new();
    let mut company_affiliations: Vec<String> = Vec::new();
    let mut corresponding_email = String::new();

    for author in &article.authors {
        let Some(affiliation) = author.primary_affiliation() else {
            continue;
        };

        if is_industry_affiliation(affiliation) {
            let last_name = author
                .last_name
                .clone()
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
            non_academic_authors.push(last_name);
            company_affiliations.push(affiliation.to_string());
        }

        // Unconditional overwrite: the last @-bearing affiliation wins
        if affiliation.contains('@') {
            corresponding_email = affiliation.to_string();
        }
    }

    PaperRow {
        pmid: or_placeholder(article.pmid.clone()),
        title: or_placeholder(article.title.clone()),
        pub_year: or_placeholder(article.pub_year.clone()),
        non_academic_authors: join_or_placeholder(&non_academic_authors),
        company_affiliations: join_or_placeholder(&company_affiliations),
        corresponding_email: if corresponding_email.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            corresponding_email
        },
    }
}

fn or_placeholder(value: Option<String>) -> String {
    value.unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn join_or_placeholder(values: &[String]) -> String {
    if values.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        values.join(", ")
    }
}
