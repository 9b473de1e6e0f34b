// Static site content. Everything here is compiled in and read-only.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Block {
    Heading(&'static str),
    Paragraph(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reference {
    pub label: &'static str,
    pub url: &'static str,
}

/// A published article. `slug` is the routing identity, `id` is used to
/// exclude the current article from related lookups.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InsightItem {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub slug: &'static str,
    pub author: &'static str,
    pub keywords: &'static [&'static str],
    pub content: &'static [Block],
    pub references: &'static [Reference],
    pub source_note: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServiceItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatItem {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Jurisdiction {
    pub name: &'static str,
    pub entity: &'static str,
    pub registration: &'static str,
}

pub const FIRM_NAME: &str = "Boru Consulting";
pub const FIRM_GROUP_NAME: &str = "Boru Consulting Group";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/company/boru-consulting/";
pub const FACEBOOK_URL: &str = "https://www.facebook.com/share/17gAvVpyPq/?mibextid=wwXIfr";

pub const SERVICES: &[ServiceItem] = &[
    ServiceItem {
        id: "entity",
        title: "Global Entity Setup",
        description: "We handle the logistical, legal, and cultural friction of scaling borders. From incorporation to ongoing management.",
        details: &["Incorporation", "Corporate Secretarial", "Local Directorship"],
    },
    ServiceItem {
        id: "accounting",
        title: "Accounting & Tax",
        description: "Managing statutory and regulatory demands in the background. Keeping operations steady while you scale.",
        details: &["Cross-border Tax", "Financial Reporting", "Payroll & Bookkeeping"],
    },
    ServiceItem {
        id: "governance",
        title: "Risk & Governance",
        description: "Giving your business a strong foundation. We navigate international markets with clarity and confidence.",
        details: &["Regulatory Compliance", "Internal Controls", "Risk Frameworks"],
    },
    ServiceItem {
        id: "compliance",
        title: "Regulatory Compliance",
        description: "Proactive management of statutory obligations across multiple jurisdictions. We ensure you remain good standing.",
        details: &["AML/KYC", "Licensing", "Regulatory Reporting"],
    },
    ServiceItem {
        id: "wealth",
        title: "Private Wealth",
        description: "Protecting and growing wealth for individuals and families. Tailored solutions built around your legacy goals.",
        details: &["Trust Services", "Estate Planning", "Asset Protection"],
    },
    ServiceItem {
        id: "expansion",
        title: "Business Expansion",
        description: "Supporting global growth by managing the complexity of cross-border business operations.",
        details: &["Market Entry", "Operational Scaling", "Strategic Advisory"],
    },
];

pub const STATS: &[StatItem] = &[
    StatItem { value: "500+", label: "Entities Structured" },
    StatItem { value: "UK/UAE/IE", label: "Global Reach" },
    StatItem { value: "ON-DEMAND", label: "Operational Support" },
];

pub const TESTIMONIAL: Testimonial = Testimonial {
    quote: "We manage the statutory and regulatory demands in the background, keeping your operations steady while you focus on building the business you want.",
    author: "Boru Consulting",
    role: "Mission Statement",
};

pub const JURISDICTIONS: &[Jurisdiction] = &[
    Jurisdiction {
        name: "United Kingdom",
        entity: "Boru Global (UK) Limited",
        registration: "Company No. 14435343",
    },
    Jurisdiction {
        name: "U.A.E.",
        entity: "Boru Consulting L.L.C-FZ",
        registration: "Company No. 2415755",
    },
    Jurisdiction {
        name: "Ireland",
        entity: "European Operations",
        registration: "Strategic Hub",
    },
];

// Shown on every article until takeaways are authored per article.
pub const KEY_TAKEAWAYS: &[&str] = &[
    "Strategic implications require careful analysis of regulatory frameworks",
    "Cross-border compliance demands proactive management and documentation",
    "Substance requirements are increasingly critical for tax efficiency",
];

pub const PULL_QUOTE: &str =
    "\"Modern governance requires moving beyond financial auditing to operational resilience.\"";

pub const AUTHOR_BIO: &str = "Oxford Business School alumni supporting clients with UK and EU company structures and practical international business experience.";

pub const INSIGHTS: &[InsightItem] = &[
    InsightItem {
        id: "uae-tax-regime",
        category: "Taxation Strategy",
        date: "January 15, 2025",
        read_time: "4 min read",
        title: "What Are the Strategic Implications of the UAE Corporate Tax Regime?",
        excerpt: "The UAE Federal Decree-Law No. 47 of 2022 introduces a 9% corporate tax rate effective June 1, 2023, fundamentally changing Free Zone entity taxation and requiring rigorous substance demonstration for 0% qualifying income treatment.",
        slug: "uae-corporate-tax-regime-strategic-implications",
        author: "Ruairi Laughlin-Mccann",
        keywords: &["UAE Corporate Tax", "Free Zone Tax", "UAE Business", "Transfer Pricing", "OECD Guidelines"],
        content: &[
            Block::Heading("What is the UAE Corporate Tax Regime?"),
            Block::Paragraph("The United Arab Emirates introduced Federal Decree-Law No. 47 of 2022 on the Taxation of Corporations and Businesses, effective for financial years starting on or after June 1, 2023. This regime introduces a headline 9% corporate tax rate, marking the UAE's transition from a zero-tax jurisdiction to a modern fiscal framework aligned with international standards."),
            Block::Heading("What is the Free Zone Question?"),
            Block::Paragraph("Free Zone Persons face the most significant structural change. While the UAE Corporate Tax Law maintains a 0% rate for \"Qualifying Income,\" the definition requires rigorous compliance. Entities must maintain adequate substance in the UAE and derive income exclusively from qualifying activities. Passive income or transactions with mainland entities trigger the standard 9% rate."),
            Block::Paragraph("The substance requirement is not merely registration-based. Free Zone entities must demonstrate adequate qualified employees in the UAE, adequate operating expenditure incurred in the UAE, core income-generating activities (CIGA) performed in the UAE, adequate physical presence, and strategic decisions made by UAE-resident directors."),
            Block::Heading("What are the Transfer Pricing Compliance Requirements?"),
            Block::Paragraph("The UAE Corporate Tax Law mandates adherence to the Arm's Length Principle (ALP) for related party transactions, aligning UAE standards with OECD Transfer Pricing Guidelines. Multinational groups operating in the UAE must prepare contemporaneous transfer pricing documentation, including master files, local files, and country-by-country reports (CbCR) for groups exceeding €750 million in consolidated revenue."),
            Block::Paragraph("Documentation requirements include functional analysis identifying risks and functions, economic analysis with benchmarking studies using comparable uncontrolled transactions, intercompany agreements reflecting arm's length terms, and advance pricing agreements (APAs) for certainty on complex transactions."),
            Block::Heading("What are the Consequences of Non-Compliance?"),
            Block::Paragraph("Failure to meet substance requirements results in loss of the 0% Free Zone tax rate, application of the standard 9% corporate tax rate, potential penalties ranging from AED 10,000 to AED 1,000,000, interest charges on unpaid tax, and reputational risk with UAE regulatory authorities. The Federal Tax Authority (FTA) conducts substance audits with increasing frequency."),
        ],
        references: &[
            Reference { label: "UAE Ministry of Economy - Federal Decree-Law No. 47 of 2022", url: "https://www.moec.gov.ae/en/business-license-search" },
            Reference { label: "UAE Federal Tax Authority - Corporate Tax Guidelines", url: "https://tax.gov.ae/" },
            Reference { label: "OECD Transfer Pricing Guidelines for Multinational Enterprises", url: "https://www.oecd.org/tax/transfer-pricing/" },
        ],
        source_note: "Last updated: January 15, 2025. Information based on current UAE tax legislation and OECD guidelines.",
    },
    InsightItem {
        id: "uk-holding-co",
        category: "Corporate Structuring",
        date: "December 18, 2024",
        read_time: "5 min read",
        title: "Why Use a UK Holding Company in the Post-Brexit Landscape?",
        excerpt: "The UK Substantial Shareholding Exemption (SSE) allows tax-free disposal of subsidiary shares with 10%+ ownership held for 12 months, while the UK's 130+ Double Taxation Treaties and zero dividend withholding tax create efficient profit repatriation despite Brexit.",
        slug: "uk-holding-company-post-brexit-analysis",
        author: "Ruairi Laughlin-Mccann",
        keywords: &["UK Holding Company", "Brexit", "Corporate Structure", "SSE", "Tax Planning"],
        content: &[
            Block::Heading("Why Use a UK Holding Company Post-Brexit?"),
            Block::Paragraph("Post-Brexit analysis demonstrates that the United Kingdom's legal certainty, mature financial infrastructure, and extensive treaty network outweigh Single Market access friction. The UK maintains over 130 Double Taxation Treaties, robust corporate law frameworks under the Companies Act 2006, and zero withholding tax on outbound dividends regardless of shareholder residence."),
            Block::Heading("What is the Substantial Shareholding Exemption (SSE)?"),
            Block::Paragraph("The Substantial Shareholding Exemption (SSE) under sections 192A-192C of the Taxation of Chargeable Gains Act 1992 allows UK companies to dispose of shares in subsidiary companies free from Corporation Tax on capital gains. The SSE requires shareholding of at least 10% of ordinary share capital, continuous 12-month holding period within 6 years before disposal, both parent and subsidiary qualifying as trading companies or holding companies of trading groups, and disposal of a substantial shareholding in a qualifying company."),
            Block::Paragraph("The SSE eliminates capital gains tax on exit events, enabling tax-efficient restructuring, mergers and acquisitions, and portfolio rationalization. This exemption applies to both UK-resident and non-UK-resident shareholders, provided the UK company meets the trading requirement."),
            Block::Heading("What are the UK Dividend Withholding Tax Rules?"),
            Block::Paragraph("The United Kingdom does not impose withholding tax on dividends paid to shareholders, regardless of their residence or jurisdiction. This zero withholding tax policy creates highly efficient profit repatriation mechanisms, particularly when combined with the UK's Double Taxation Treaty network covering over 130 jurisdictions."),
            Block::Paragraph("Treaty benefits include reduced withholding tax on inbound dividends, interest, and royalties from treaty jurisdictions, elimination of double taxation through foreign tax credit relief, access to mutual agreement procedures (MAP) for dispute resolution, and treaty shopping protection through principal purpose test (PPT) and limitation on benefits (LOB) clauses."),
            Block::Heading("What are the UK Substance Requirements?"),
            Block::Paragraph("The Economic Crime (Transparency and Enforcement) Act 2022 introduced the Register of Overseas Entities (ROE), increasing transparency requirements for foreign owners of UK property. UK holding companies must demonstrate real management and control within the UK to satisfy substance requirements and avoid challenges from foreign tax authorities."),
            Block::Paragraph("Substance requirements include board meetings held in the UK with UK-resident directors making strategic decisions, adequate office space and administrative support in the UK, UK bank accounts and professional advisors (accountants, lawyers), demonstrable economic substance beyond mere registration, and contemporaneous documentation of decision-making processes."),
        ],
        references: &[
            Reference { label: "Companies House UK - Companies Act 2006", url: "https://www.gov.uk/government/organisations/companies-house" },
            Reference { label: "Taxation of Chargeable Gains Act 1992 - Sections 192A-192C (SSE)", url: "https://www.legislation.gov.uk/ukpga/1992/12/part/II/chapter/I" },
            Reference { label: "HMRC International Manual - Double Taxation Treaties", url: "https://www.gov.uk/hmrc-internal-manuals/international-manual" },
            Reference { label: "Economic Crime (Transparency and Enforcement) Act 2022", url: "https://www.legislation.gov.uk/ukpga/2022/10/contents" },
        ],
        source_note: "Last updated: December 18, 2024. Information based on current UK tax legislation and Companies House guidance.",
    },
    InsightItem {
        id: "risk-governance",
        category: "Risk Governance",
        date: "November 22, 2024",
        read_time: "3 min read",
        title: "What is Operational Resilience and Why Does it Matter?",
        excerpt: "UK PRA/FCA Policy Statement PS21/3 and EU DORA require firms to map critical business services, set impact tolerances for maximum tolerable disruption, and conduct annual scenario testing to ensure recovery within tolerance periods during systemic shocks.",
        slug: "operational-resilience-risk-governance",
        author: "Ruairi Laughlin-Mccann",
        keywords: &["Operational Resilience", "Risk Management", "Corporate Governance", "Business Continuity", "Regulatory Compliance"],
        content: &[
            Block::Heading("What is Operational Resilience?"),
            Block::Paragraph("Operational Resilience represents the evolution from traditional business continuity planning to a comprehensive framework ensuring firms can prevent, adapt, respond to, recover from, and learn from operational disruptions. UK regulators (PRA/FCA) and EU regulators (DORA) shifted focus from \"Can you survive a shock?\" to \"How quickly can you recover critical services?\" This distinction fundamentally changes board-level governance requirements."),
            Block::Heading("What is Critical Service Mapping?"),
            Block::Paragraph("Critical service mapping identifies important business services, those that, if disrupted, would cause intolerable harm to consumers, market integrity, or financial stability. The mapping process requires identifying important business services based on regulatory criteria, mapping dependencies including people, processes, technology, third parties, and data, setting impact tolerances defining maximum tolerable disruption before intolerable harm occurs, designing resilience measures including redundancy, substitutability, and recovery procedures, and conducting scenario testing at least annually."),
            Block::Paragraph("Impact tolerance setting answers: What is the maximum time a critical service can be disrupted before causing intolerable harm? For example, if a payroll provider in a secondary jurisdiction goes offline, is the tolerance 24 hours, 48 hours, or 72 hours? The answer determines required resilience investments."),
            Block::Heading("What are the UK Regulatory Requirements?"),
            Block::Paragraph("UK Policy Statement PS21/3 (March 2021) establishes operational resilience requirements for banks, insurers, and designated investment firms. Requirements include identifying important business services, setting impact tolerances for each important business service, mapping dependencies and vulnerabilities, conducting scenario testing at least annually, self-assessment and board attestation of operational resilience framework, and public disclosure of operational resilience approach in annual reports."),
            Block::Paragraph("The PRA and FCA expect firms to be able to remain within impact tolerances for important business services during severe but plausible scenarios, including cyber attacks, third-party failures, natural disasters, and pandemic events."),
            Block::Heading("What is DORA and How Does it Apply?"),
            Block::Paragraph("The Digital Operational Resilience Act (DORA), Regulation (EU) 2022/2554, establishes a comprehensive ICT risk management framework for EU financial entities. DORA requirements include ICT risk management framework with governance, risk assessment, and control measures, incident reporting to regulators within strict timelines (major incidents within 4 hours), digital operational resilience testing including threat-led penetration testing (TLPT), third-party ICT service provider oversight with contractual arrangements and exit strategies, and information sharing arrangements on cyber threats and vulnerabilities."),
        ],
        references: &[
            Reference { label: "Bank of England - Policy Statement PS21/3 on Operational Resilience", url: "https://www.bankofengland.co.uk/prudential-regulation/publication/2021/march/operational-resilience-impact-tolerances-for-important-business-services-ps" },
            Reference { label: "FCA Policy Statement PS21/3 - Operational Resilience", url: "https://www.fca.org.uk/publication/policy/ps21-3.pdf" },
            Reference { label: "EU Regulation 2022/2554 - Digital Operational Resilience Act (DORA)", url: "https://eur-lex.europa.eu/legal-content/EN/TXT/?uri=CELEX:32022R2554" },
        ],
        source_note: "Last updated: November 22, 2024. Information based on UK PRA/FCA regulations and EU DORA requirements.",
    },
];

pub fn find_article(slug: &str) -> Option<&'static InsightItem> {
    INSIGHTS.iter().find(|a| a.slug == slug)
}

/// First thing wrong with an article that would leave its card or page
/// unrenderable, if any.
pub fn article_defect(article: &InsightItem) -> Option<String> {
    let slug_ok = !article.slug.is_empty()
        && article
            .slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !slug_ok {
        return Some(format!("article {:?} has an invalid slug", article.id));
    }
    if article.title.trim().is_empty() {
        return Some(format!("article {} has no title", article.slug));
    }
    if article.content.is_empty() {
        return Some(format!("article {} has no body", article.slug));
    }
    if crate::seo::published_iso(article.date).is_none() {
        return Some(format!("article {} has an unreadable date {:?}", article.slug, article.date));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_and_ids_are_unique() {
        let slugs: HashSet<_> = INSIGHTS.iter().map(|a| a.slug).collect();
        let ids: HashSet<_> = INSIGHTS.iter().map(|a| a.id).collect();
        assert_eq!(slugs.len(), INSIGHTS.len());
        assert_eq!(ids.len(), INSIGHTS.len());
    }

    #[test]
    fn find_article_by_slug() {
        let article = find_article("uk-holding-company-post-brexit-analysis").unwrap();
        assert_eq!(article.id, "uk-holding-co");
        assert!(find_article("does-not-exist").is_none());
    }

    #[test]
    fn bundled_articles_are_well_formed() {
        for article in INSIGHTS {
            assert_eq!(article_defect(article), None);
        }
    }

    #[test]
    fn malformed_articles_are_reported() {
        let base = INSIGHTS[0];
        let bad_slug = InsightItem { slug: "Bad Slug", ..base };
        let no_body = InsightItem { content: &[], ..base };
        let bad_date = InsightItem { date: "sometime in 2025", ..base };

        assert!(article_defect(&bad_slug).unwrap().contains("invalid slug"));
        assert!(article_defect(&no_body).unwrap().contains("no body"));
        assert!(article_defect(&bad_date).unwrap().contains("unreadable date"));
    }

    #[test]
    fn every_article_opens_with_a_heading() {
        for article in INSIGHTS {
            assert!(matches!(article.content.first(), Some(Block::Heading(_))), "{}", article.slug);
        }
    }
}
