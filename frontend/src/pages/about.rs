use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{JURISDICTIONS, TESTIMONIAL};
use crate::seo::{about_meta, use_head};
use crate::Route;

struct Value {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const VALUES: &[Value] = &[
    Value {
        icon: "◎",
        title: "Precision",
        body: "We operate with surgical accuracy. Every structure, every filing, every advisory opinion is built on rigorous analysis and deep jurisdictional knowledge.",
    },
    Value {
        icon: "⚭",
        title: "Partnership",
        body: "We do not exit when complexity enters. Our clients rely on us through regulatory shifts, audits, and strategic pivots. Unwavering support is foundational to how we work.",
    },
    Value {
        icon: "◍",
        title: "Global Expertise",
        body: "Cross-border operations require more than theoretical knowledge. We maintain active presence in key jurisdictions, ensuring real-time compliance and strategic execution.",
    },
    Value {
        icon: "✦",
        title: "Discretion",
        body: "High-stakes advisory requires absolute confidentiality. We operate with the discretion expected by sophisticated clients managing complex international affairs.",
    },
];

#[function_component(About)]
pub fn about() -> Html {
    use_head(about_meta());

    html! {
        <article class="about-page">
            <div class="about-inner">
                <Link<Route> to={Route::Home} classes="back-link">{"← Back to Home"}</Link<Route>>

                <header class="about-header">
                    <span class="eyebrow">{"About Us"}</span>
                    <h1>{"Strategic clarity in complex markets."}</h1>
                    <p>{"Boru Consulting Group provides elite strategic advisory services for businesses and individuals navigating the complexities of international markets."}</p>
                </header>

                <blockquote class="mission">
                    <p>{TESTIMONIAL.quote}</p>
                    <cite>{format!("{}, {}", TESTIMONIAL.author, TESTIMONIAL.role)}</cite>
                </blockquote>

                <div class="about-body">
                    <h2>{"Our Approach"}</h2>
                    <p>{"We do not generalize. We specialize in the structural mechanics of large-scale business operations. Our team manages the logistical, legal, and cultural friction that comes with scaling across borders, from entity setup and tax compliance to governance frameworks and regulatory reporting."}</p>
                    <p>{"Every engagement is built around precision and discretion. We work with clients who require more than surface-level advice. They need partners who understand the nuances of multi-jurisdictional operations and can execute with surgical accuracy."}</p>

                    <h2>{"Global Presence"}</h2>
                    <p>{"We maintain active operations across three strategic jurisdictions: the United Kingdom, United Arab Emirates, and Ireland. This positioning allows us to serve clients with complex cross-border requirements while maintaining deep local expertise in each market."}</p>
                    <div class="presence-grid">
                        {
                            JURISDICTIONS.iter().map(|j| html! {
                                <div class="presence-card">
                                    <h3>{j.name}</h3>
                                    <p>{j.entity}</p>
                                    <p class="presence-reg">{j.registration}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>

                    <h2>{"Our Values"}</h2>
                    <div class="values-grid">
                        {
                            VALUES.iter().map(|v| html! {
                                <div class="value">
                                    <span class="value-icon" aria-hidden="true">{v.icon}</span>
                                    <div>
                                        <h3>{v.title}</h3>
                                        <p>{v.body}</p>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>

                    <h2>{"Regulatory Standing"}</h2>
                    <p>{"Boru Global (UK) Limited is supervised by HM Revenue & Customs for Anti-Money Laundering purposes (Reg. No. XCML0000187357) and is registered with Companies House as an Authorised Corporate Service Provider (ACSP) under the Economic Crime and Corporate Transparency Act 2023."}</p>
                    <p>{"Boru Consulting L.L.C-FZ operates under UAE Free Zone regulations and is licensed to provide Accounting, Bookkeeping, Tax Consulting, Auditing, Management Consultancy, and Corporate Services."}</p>
                </div>

                <div class="about-cta">
                    <h3>{"Ready to discuss your requirements?"}</h3>
                    <p>{"Our team is available to discuss complex cross-border structures and compliance requirements."}</p>
                    <a class="btn-outline" href="/#contact">{"Get in Touch"}</a>
                </div>
            </div>
            <style>
                {r#"
                .about-page {
                    min-height: 100vh;
                    padding: 8rem 0 6rem;
                }
                .about-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .back-link {
                    display: inline-block;
                    margin-bottom: 3rem;
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: var(--muted);
                    text-decoration: none;
                }
                .back-link:hover { color: var(--gold); }
                .about-header {
                    padding-bottom: 3rem;
                    margin-bottom: 3rem;
                    border-bottom: 1px solid var(--border);
                }
                .about-header h1 {
                    font-family: var(--serif);
                    font-size: 4rem;
                    line-height: 1.05;
                    margin: 0 0 1.5rem;
                }
                .about-header p,
                .about-body p {
                    font-size: 1.125rem;
                    line-height: 1.8;
                    color: var(--muted);
                }
                .mission {
                    margin: 0 0 4rem;
                    padding-left: 2rem;
                    border-left: 2px solid var(--gold);
                }
                .mission p {
                    font-family: var(--serif);
                    font-style: italic;
                    font-size: 1.5rem;
                    line-height: 1.4;
                }
                .mission cite {
                    font-size: 10px;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: var(--muted);
                    font-style: normal;
                }
                .about-body h2 {
                    font-family: var(--serif);
                    font-size: 2.25rem;
                    margin: 4rem 0 1.5rem;
                }
                .presence-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-top: 2rem;
                }
                .presence-card {
                    padding: 1.5rem;
                    border: 1px solid var(--border);
                }
                .presence-card h3 {
                    font-family: var(--serif);
                    font-size: 1.25rem;
                    margin: 0 0 0.5rem;
                }
                .presence-card p { font-size: 0.875rem; margin: 0; }
                .presence-reg {
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 0.7rem !important;
                }
                .values-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2.5rem;
                }
                .value {
                    display: flex;
                    gap: 1rem;
                }
                .value-icon {
                    color: var(--gold);
                    font-size: 1.5rem;
                }
                .value h3 {
                    font-family: var(--serif);
                    font-size: 1.25rem;
                    margin: 0 0 0.5rem;
                }
                .value p { font-size: 0.95rem; }
                .about-cta {
                    margin-top: 5rem;
                    padding: 3rem;
                    border: 1px solid var(--border);
                    text-align: center;
                }
                .about-cta h3 {
                    font-family: var(--serif);
                    font-size: 1.875rem;
                    margin: 0 0 1rem;
                }
                .about-cta p {
                    color: var(--muted);
                    margin-bottom: 2rem;
                }
                @media (max-width: 768px) {
                    .presence-grid,
                    .values-grid { grid-template-columns: 1fr; }
                    .about-header h1 { font-size: 2.75rem; }
                }
                "#}
            </style>
        </article>
    }
}
