//! XML parsing for ESearch and EFetch responses
//!
//! Both E-utilities calls are made with `retmode=xml` and deserialized with
//! quick-xml's serde support into private XML-shaped structs, which are then
//! converted into the public models. Repeated elements (`Id`,
//! `PubmedArticle`, `Author`, `AffiliationInfo`) collect into `Vec`s, so a
//! single-element response parses identically to a list. Missing nested
//! fields become `None` or empty collections, never errors.

use quick_xml::de::from_str;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Author, PubMedArticle};

#[derive(Debug, Deserialize)]
struct ESearchResult {
    #[serde(rename = "IdList")]
    id_list: Option<IdList>,
}

#[derive(Debug, Deserialize)]
struct IdList {
    #[serde(rename = "Id", default)]
    ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PubmedArticleSet {
    #[serde(rename = "PubmedArticle", default)]
    articles: Vec<PubmedArticleXml>,
}

#[derive(Debug, Deserialize)]
struct PubmedArticleXml {
    #[serde(rename = "MedlineCitation")]
    medline_citation: Option<MedlineCitationXml>,
}

#[derive(Debug, Deserialize)]
struct MedlineCitationXml {
    #[serde(rename = "PMID")]
    pmid: Option<TextNode>,
    #[serde(rename = "Article")]
    article: Option<ArticleXml>,
}

#[derive(Debug, Deserialize)]
struct ArticleXml {
    #[serde(rename = "ArticleTitle")]
    article_title: Option<TextNode>,
    #[serde(rename = "Journal")]
    journal: Option<JournalXml>,
    #[serde(rename = "AuthorList")]
    author_list: Option<AuthorListXml>,
}

#[derive(Debug, Deserialize)]
struct JournalXml {
    #[serde(rename = "JournalIssue")]
    journal_issue: Option<JournalIssueXml>,
}

#[derive(Debug, Deserialize)]
struct JournalIssueXml {
    #[serde(rename = "PubDate")]
    pub_date: Option<PubDateXml>,
}

#[derive(Debug, Deserialize)]
struct PubDateXml {
    #[serde(rename = "Year")]
    year: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AuthorListXml {
    #[serde(rename = "Author", default)]
    authors: Vec<AuthorXml>,
}

#[derive(Debug, Deserialize)]
struct AuthorXml {
    #[serde(rename = "LastName")]
    last_name: Option<String>,
    #[serde(rename = "AffiliationInfo")]
    affiliation_info: Option<Vec<AffiliationInfoXml>>,
}

#[derive(Debug, Deserialize)]
struct AffiliationInfoXml {
    #[serde(rename = "Affiliation")]
    affiliation: Option<String>,
}

/// Element that may carry attributes (e.g. `<PMID Version="1">`), in which
/// case the scalar value lives in the `$text` node
#[derive(Debug, Deserialize)]
struct TextNode {
    #[serde(rename = "$text")]
    text: Option<String>,
}

impl TextNode {
    fn into_text(self) -> Option<String> {
        self.text.filter(|t| !t.trim().is_empty())
    }
}

impl PubmedArticleXml {
    fn into_article(self) -> PubMedArticle {
        let Some(medline) = self.medline_citation else {
            return PubMedArticle::default();
        };

        let pmid = medline.pmid.and_then(TextNode::into_text);

        let Some(article) = medline.article else {
            return PubMedArticle {
                pmid,
                ..PubMedArticle::default()
            };
        };

        let title = article.article_title.and_then(TextNode::into_text);

        let pub_year = article
            .journal
            .and_then(|j| j.journal_issue)
            .and_then(|ji| ji.pub_date)
            .and_then(|pd| pd.year);

        let authors = article
            .author_list
            .map_or(Vec::new(), |list| {
                list.authors.into_iter().map(AuthorXml::into_author).collect()
            });

        PubMedArticle {
            pmid,
            title,
            pub_year,
            authors,
        }
    }
}

impl AuthorXml {
    fn into_author(self) -> Author {
        let affiliations = self
            .affiliation_info
            .unwrap_or_default()
            .into_iter()
            .filter_map(|info| info.affiliation)
            .collect();

        Author {
            last_name: self.last_name,
            affiliations,
        }
    }
}

/// Parse the identifier list from an ESearch XML response
///
/// An absent or empty `IdList` yields an empty vector; identifiers pass
/// through in remote order, duplicates included.
pub fn parse_id_list(xml: &str) -> Result<Vec<String>> {
    let result: ESearchResult = from_str(xml).map_err(|e| Error::Xml {
        message: format!("failed to deserialize ESearch response: {e}"),
    })?;

    let ids = result.id_list.map_or(Vec::new(), |list| list.ids);
    debug!(ids_parsed = ids.len(), "parsed ESearch response");
    Ok(ids)
}

/// Parse article records from an EFetch XML response
pub fn parse_articles(xml: &str) -> Result<Vec<PubMedArticle>> {
    let article_set: PubmedArticleSet = from_str(xml).map_err(|e| Error::Xml {
        message: format!("failed to deserialize EFetch response: {e}"),
    })?;

    let articles: Vec<PubMedArticle> = article_set
        .articles
        .into_iter()
        .map(PubmedArticleXml::into_article)
        .collect();

    debug!(articles_parsed = articles.len(), "parsed EFetch response");
    Ok(articles)
}
