use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::content::{FACEBOOK_URL, FIRM_GROUP_NAME, LINKEDIN_URL};

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}.", year, FIRM_GROUP_NAME)
}

#[function_component(TrustAnchor)]
pub fn trust_anchor() -> Html {
    html! {
        <section class="trust-anchor">
            <div class="trust-anchor-inner">
                <h2>{"One final certainty."}</h2>
                <p>{"We do not exit when complexity enters. We stand by our clients through every regulatory shift, audit, and challenge. Unwavering support is the foundation of our firm."}</p>
                <a class="btn-outline" href="/#contact">{"Let's Talk"}</a>
            </div>
            <style>
                {r#"
                .trust-anchor {
                    padding: 5rem 0;
                }
                .trust-anchor-inner {
                    max-width: 42rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    text-align: center;
                }
                .trust-anchor h2 {
                    font-family: var(--serif);
                    font-style: italic;
                    font-size: 3rem;
                    margin-bottom: 2rem;
                }
                .trust-anchor p {
                    font-size: 1.125rem;
                    line-height: 1.6;
                    color: var(--muted);
                    margin-bottom: 2.5rem;
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let expanded = use_state(|| false);
    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-legal">
                    <p class="footer-copyright">{copyright_line(Utc::now().year())}</p>
                    <div class={classes!("footer-legal-text", (!*expanded).then(|| "clamped"))}>
                        <p>
                            {"Boru Consulting L.L.C-FZ is a company registered in U.A.E. under Company No. 2415755, with its registered office at Meydan Grandstand, 6th Floor, Meydan Road, Nad Al Sheba, Dubai, and is licensed to provide Accounting, Bookkeeping, Tax Consulting, Auditing, Management Consultancy and Corporate Services. "}
                            <a href="https://www.moec.gov.ae/en/business-license-search" target="_blank" rel="noopener noreferrer">{"UAE Ministry of Economy Business License Search"}</a>
                        </p>
                        if *expanded {
                            <p>
                                {"Boru Global (UK) Limited, trading as Boru Consulting, is a company registered in England and Wales under Company No. 14435343, with its registered office at 66 Canterbury Avenue, Sidcup, DA15 9AS, and is supervised by HM Revenue & Customs for Anti-Money Laundering purposes as an Accounting & Corporate Service Provider (Reg. No. XCML0000187357) "}
                                <a href="https://www.tax.service.gov.uk/anti-money-laundering/search" target="_blank" rel="noopener noreferrer">{"HMRC AML Supervised Business Register"}</a>
                                {"."}
                            </p>
                            <p>
                                {"Boru Consulting is listed at Companies House in the UK as a Company Formation and Secretarial Agent "}
                                <a href="https://www.gov.uk/government/organisations/companies-house" target="_blank" rel="noopener noreferrer">{"Companies House List"}</a>
                                {" and is registered with Companies House as an Authorised Corporate Service Provider (ACSP) under the Economic Crime and Corporate Transparency Act 2023."}
                            </p>
                        }
                    </div>
                    <button
                        class="footer-expand"
                        onclick={toggle}
                        aria-expanded={expanded.to_string()}
                        aria-label={if *expanded { "Show less information" } else { "Show more information" }}
                    >
                        {if *expanded { "Show Less ▴" } else { "Show More ▾" }}
                    </button>
                </div>
                <div class="footer-social">
                    <a href={LINKEDIN_URL} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">{"in"}</a>
                    <a href={FACEBOOK_URL} target="_blank" rel="noopener noreferrer" aria-label="Facebook">{"f"}</a>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    padding: 2rem 0;
                    border-top: 1px solid var(--border);
                    font-size: 10px;
                    color: var(--muted);
                }
                .footer-inner {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 3rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    gap: 1.5rem;
                }
                .footer-legal {
                    max-width: 56rem;
                }
                .footer-copyright {
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                }
                .footer-legal-text {
                    font-size: 9px;
                    line-height: 1.6;
                }
                .footer-legal-text.clamped {
                    display: -webkit-box;
                    -webkit-line-clamp: 2;
                    -webkit-box-orient: vertical;
                    overflow: hidden;
                }
                .footer-legal-text a { color: var(--gold); }
                .footer-expand {
                    margin-top: 0.5rem;
                    background: none;
                    border: none;
                    padding: 0;
                    color: var(--muted);
                    font-size: 9px;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    cursor: pointer;
                }
                .footer-social {
                    display: flex;
                    gap: 1rem;
                    flex-shrink: 0;
                }
                .footer-social a {
                    color: var(--muted);
                    text-decoration: none;
                    font-size: 0.875rem;
                    font-weight: 600;
                }
                .footer-social a:hover { color: var(--text); }
                @media (max-width: 768px) {
                    .footer-inner {
                        flex-direction: column;
                        align-items: flex-start;
                        padding: 0 1.5rem;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_uses_group_name() {
        assert_eq!(copyright_line(2025), "© 2025 Boru Consulting Group.");
    }
}
