use chrono::NaiveDate;
use log::warn;
use serde_json::{json, Value};
use thiserror::Error;
use web_sys::{window, Document};
use yew::prelude::*;

use crate::config::{absolute_url, get_site_url};
use crate::content::{InsightItem, FIRM_GROUP_NAME, FIRM_NAME, JURISDICTIONS, LINKEDIN_URL, SERVICES};

const PAGE_MARKER: &str = "data-head-page";
const SITE_MARKER: &str = "data-head-site";

#[derive(Debug, Error)]
pub enum HeadError {
    #[error("no document available")]
    NoDocument,
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<wasm_bindgen::JsValue> for HeadError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        HeadError::Dom(format!("{:?}", value))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MetaTag {
    Name { name: String, content: String },
    Property { property: String, content: String },
}

/// Everything a page contributes to `<head>`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeadMeta {
    pub title: String,
    pub canonical: Option<String>,
    pub tags: Vec<MetaTag>,
    pub json_ld: Option<String>,
}

impl HeadMeta {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn name(mut self, name: &str, content: impl Into<String>) -> Self {
        self.tags.push(MetaTag::Name {
            name: name.to_string(),
            content: content.into(),
        });
        self
    }

    pub fn property(mut self, property: &str, content: impl Into<String>) -> Self {
        self.tags.push(MetaTag::Property {
            property: property.to_string(),
            content: content.into(),
        });
        self
    }

    pub fn canonical(mut self, url: impl Into<String>) -> Self {
        self.canonical = Some(url.into());
        self
    }

    pub fn json_ld(mut self, value: &Value) -> Self {
        self.json_ld = Some(value.to_string());
        self
    }

    pub fn content_of(&self, key: &str) -> Option<&str> {
        self.tags.iter().find_map(|tag| match tag {
            MetaTag::Name { name, content } if name == key => Some(content.as_str()),
            MetaTag::Property { property, content } if property == key => Some(content.as_str()),
            _ => None,
        })
    }
}

/// "January 15, 2025" -> "2025-01-15T00:00:00.000Z"
pub fn published_iso(date: &str) -> Option<String> {
    NaiveDate::parse_from_str(date.trim(), "%B %d, %Y")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
}

pub fn article_url(article: &InsightItem) -> String {
    absolute_url(&format!("/blog/{}", article.slug))
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShareLink {
    pub network: &'static str,
    pub href: String,
}

pub fn share_links(article: &InsightItem) -> Vec<ShareLink> {
    let url = urlencoding::encode(&article_url(article)).into_owned();
    let title = urlencoding::encode(article.title);
    vec![
        ShareLink {
            network: "LinkedIn",
            href: format!("https://www.linkedin.com/sharing/share-offsite/?url={}", url),
        },
        ShareLink {
            network: "Facebook",
            href: format!("https://www.facebook.com/sharer/sharer.php?u={}", url),
        },
        ShareLink {
            network: "X",
            href: format!("https://twitter.com/intent/tweet?url={}&text={}", url, title),
        },
    ]
}

pub fn home_meta() -> HeadMeta {
    HeadMeta::new("Boru Consulting | Global Entity Management & Private Wealth")
        .name("description", "Cross-border entity structuring, tax advisory, and private wealth services across UK, UAE, and Ireland. 500+ entities structured.")
        .canonical(absolute_url("/"))
}

pub fn about_meta() -> HeadMeta {
    HeadMeta::new("About Us | Boru Consulting Group")
        .name("description", "Learn about Boru Consulting Group - elite strategic advisory for complex cross-border business challenges across UK, UAE, and Ireland.")
        .canonical(absolute_url("/about"))
}

pub fn blog_meta() -> HeadMeta {
    let url = absolute_url("/blog");
    HeadMeta::new("Market Intelligence Hub | Boru Consulting")
        .name("description", "Strategic insights on global tax, corporate structuring, regulatory compliance, and cross-border operations from Boru Consulting Group.")
        .name("keywords", "market intelligence, tax strategy, corporate governance, UAE tax, UK holding company, risk management, compliance")
        .canonical(url.clone())
        .property("og:title", "Market Intelligence Hub | Boru Consulting")
        .property("og:description", "Strategic insights on global tax, corporate structuring, and regulatory compliance.")
        .property("og:url", url)
        .property("og:type", "website")
        .name("twitter:card", "summary_large_image")
        .name("twitter:title", "Market Intelligence Hub | Boru Consulting")
        .name("twitter:description", "Strategic insights on global tax and corporate structuring.")
}

pub fn article_structured_data(article: &InsightItem) -> Value {
    let url = article_url(article);
    let published = published_iso(article.date);
    json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": article.title,
        "description": article.excerpt,
        "author": {
            "@type": "Organization",
            "name": article.author,
            "url": get_site_url(),
        },
        "publisher": {
            "@type": "Organization",
            "name": FIRM_GROUP_NAME,
            "url": get_site_url(),
            "logo": { "@type": "ImageObject", "url": absolute_url("/logo.png") },
        },
        "datePublished": published,
        "dateModified": published,
        "mainEntityOfPage": { "@type": "WebPage", "@id": url },
        "keywords": article.keywords.join(", "),
        "articleSection": article.category,
        "inLanguage": "en-GB",
    })
}

pub fn article_meta(article: &InsightItem) -> HeadMeta {
    let url = article_url(article);
    let mut meta = HeadMeta::new(format!("{} | {}", article.title, FIRM_NAME))
        .name("description", article.excerpt)
        .name("keywords", article.keywords.join(", "))
        .name("author", article.author)
        .canonical(url.clone())
        .property("og:title", article.title)
        .property("og:description", article.excerpt)
        .property("og:url", url)
        .property("og:type", "article");
    if let Some(published) = published_iso(article.date) {
        meta = meta.property("article:published_time", published);
    }
    meta = meta
        .property("article:author", article.author)
        .property("article:section", article.category);
    for keyword in article.keywords {
        meta = meta.property("article:tag", *keyword);
    }
    meta.name("twitter:card", "summary_large_image")
        .name("twitter:title", article.title)
        .name("twitter:description", article.excerpt)
        .json_ld(&article_structured_data(article))
}

/// Site-wide organisation graph, injected once by the app shell.
pub fn corporate_schema() -> Value {
    let site = get_site_url();
    let org_id = format!("{}/#organization", site);
    let offers: Vec<Value> = SERVICES
        .iter()
        .map(|s| {
            json!({
                "@type": "Offer",
                "itemOffered": {
                    "@type": "Service",
                    "name": s.title,
                    "description": s.details.join(", "),
                }
            })
        })
        .collect();
    let identifiers: Vec<Value> = JURISDICTIONS
        .iter()
        .filter_map(|j| {
            j.registration.strip_prefix("Company No. ").map(|number| {
                json!({
                    "@type": "PropertyValue",
                    "propertyID": format!("{} Company Number", j.name),
                    "value": number,
                })
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@graph": [
            {
                "@type": "ProfessionalService",
                "@id": org_id,
                "name": FIRM_NAME,
                "alternateName": FIRM_GROUP_NAME,
                "legalName": "Boru Global (UK) Limited",
                "url": site,
                "logo": { "@type": "ImageObject", "url": format!("{}/logo.png", site), "width": 250, "height": 60 },
                "description": "Global entity management, cross-border tax advisory, and private wealth services across UK, UAE, and Ireland. Specializing in corporate structuring, regulatory compliance, and international business expansion for 500+ entities.",
                "foundingDate": "2022",
                "slogan": "Navigating international markets with clarity",
                "areaServed": [
                    { "@type": "Country", "name": "United Kingdom" },
                    { "@type": "Country", "name": "United Arab Emirates" },
                    { "@type": "Country", "name": "Ireland" }
                ],
                "hasOfferCatalog": {
                    "@type": "OfferCatalog",
                    "name": "Boru Consulting Services",
                    "itemListElement": offers,
                },
                "identifier": identifiers,
                "sameAs": [LINKEDIN_URL],
                "employee": [{ "@id": format!("{}/#person-managing-partner", site) }],
            },
            {
                "@type": "Person",
                "@id": format!("{}/#person-managing-partner", site),
                "name": "Managing Partner",
                "jobTitle": "Managing Partner",
                "worksFor": { "@id": org_id },
                "knowsAbout": [
                    "Cross-Border Tax Strategy",
                    "Corporate Governance Frameworks",
                    "UAE Free Zone Regulations",
                    "UK Holding Company Structures",
                    "Operational Resilience Frameworks"
                ],
            },
            {
                "@type": "WebSite",
                "@id": format!("{}/#website", site),
                "url": site,
                "name": FIRM_NAME,
                "publisher": { "@id": org_id },
                "inLanguage": "en-GB",
            }
        ]
    })
}

fn document() -> Result<Document, HeadError> {
    window().and_then(|w| w.document()).ok_or(HeadError::NoDocument)
}

fn clear_marked(document: &Document, marker: &str) -> Result<(), HeadError> {
    while let Some(el) = document.query_selector(&format!("[{}]", marker))? {
        el.remove();
    }
    Ok(())
}

fn append_json_ld(document: &Document, marker: &str, json: &str) -> Result<(), HeadError> {
    let head = document.head().ok_or(HeadError::NoDocument)?;
    let script = document.create_element("script")?;
    script.set_attribute("type", "application/ld+json")?;
    script.set_attribute(marker, "")?;
    script.set_text_content(Some(json));
    head.append_child(&script)?;
    Ok(())
}

/// Replaces whatever the previous page put in `<head>`.
pub fn apply(meta: &HeadMeta) -> Result<(), HeadError> {
    let document = document()?;
    let head = document.head().ok_or(HeadError::NoDocument)?;

    document.set_title(&meta.title);
    clear_marked(&document, PAGE_MARKER)?;

    for tag in &meta.tags {
        let el = document.create_element("meta")?;
        match tag {
            MetaTag::Name { name, content } => {
                el.set_attribute("name", name)?;
                el.set_attribute("content", content)?;
            }
            MetaTag::Property { property, content } => {
                el.set_attribute("property", property)?;
                el.set_attribute("content", content)?;
            }
        }
        el.set_attribute(PAGE_MARKER, "")?;
        head.append_child(&el)?;
    }

    if let Some(url) = &meta.canonical {
        let link = document.create_element("link")?;
        link.set_attribute("rel", "canonical")?;
        link.set_attribute("href", url)?;
        link.set_attribute(PAGE_MARKER, "")?;
        head.append_child(&link)?;
    }

    if let Some(json) = &meta.json_ld {
        append_json_ld(&document, PAGE_MARKER, json)?;
    }
    Ok(())
}

pub fn inject_site_schema() -> Result<(), HeadError> {
    let document = document()?;
    clear_marked(&document, SITE_MARKER)?;
    append_json_ld(&document, SITE_MARKER, &corporate_schema().to_string())
}

#[hook]
pub fn use_head(meta: HeadMeta) {
    use_effect_with_deps(
        |meta| {
            if let Err(e) = apply(meta) {
                warn!("Failed to update document head: {}", e);
            }
            || ()
        },
        meta,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::INSIGHTS;

    #[test]
    fn published_date_is_iso() {
        assert_eq!(published_iso("January 15, 2025").as_deref(), Some("2025-01-15T00:00:00.000Z"));
        assert_eq!(published_iso("November 2, 2024").as_deref(), Some("2024-11-02T00:00:00.000Z"));
        assert_eq!(published_iso("sometime soon"), None);
    }

    #[test]
    fn every_article_date_parses() {
        for article in INSIGHTS {
            assert!(published_iso(article.date).is_some(), "{}", article.date);
        }
    }

    #[test]
    fn article_meta_covers_social_cards() {
        let article = &INSIGHTS[1];
        let meta = article_meta(article);
        assert_eq!(meta.title, format!("{} | Boru Consulting", article.title));
        assert_eq!(meta.content_of("description"), Some(article.excerpt));
        assert_eq!(meta.content_of("og:type"), Some("article"));
        assert_eq!(meta.content_of("article:published_time"), Some("2024-12-18T00:00:00.000Z"));
        assert!(meta.canonical.as_deref().unwrap().ends_with("/blog/uk-holding-company-post-brexit-analysis"));
        let tags = meta
            .tags
            .iter()
            .filter(|t| matches!(t, MetaTag::Property { property, .. } if property == "article:tag"))
            .count();
        assert_eq!(tags, article.keywords.len());
        assert!(meta.json_ld.is_some());
    }

    #[test]
    fn article_structured_data_shape() {
        let article = &INSIGHTS[0];
        let data = article_structured_data(article);
        assert_eq!(data["@type"], "Article");
        assert_eq!(data["headline"], article.title);
        assert_eq!(data["datePublished"], "2025-01-15T00:00:00.000Z");
        assert_eq!(data["keywords"], article.keywords.join(", "));
    }

    #[test]
    fn share_links_are_encoded() {
        let article = &INSIGHTS[2];
        let links = share_links(article);
        assert_eq!(links.len(), 3);
        for link in &links {
            assert!(!link.href.contains(' '), "{}", link.href);
            assert!(link.href.contains("%2Fblog%2Foperational-resilience-risk-governance"));
        }
        assert!(links[2].href.contains("What%20is%20Operational%20Resilience"));
    }

    #[test]
    fn corporate_schema_lists_every_service() {
        let schema = corporate_schema();
        let org = &schema["@graph"][0];
        assert_eq!(org["@type"], "ProfessionalService");
        assert_eq!(
            org["hasOfferCatalog"]["itemListElement"].as_array().map(Vec::len),
            Some(SERVICES.len())
        );
        // Ireland has no company number and is left out
        assert_eq!(org["identifier"].as_array().map(Vec::len), Some(2));
    }
}
