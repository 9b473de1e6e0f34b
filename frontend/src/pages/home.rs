use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::contact::Contact;
use crate::components::sections::{LazySection, SectionError, SectionResult};
use crate::content::{article_defect, InsightItem, INSIGHTS, JURISDICTIONS, SERVICES, STATS};
use crate::pages::blog::ArticleCard;
use crate::seo::{home_meta, use_head};
use crate::Route;

pub const HOME_INSIGHTS: usize = 3;

pub fn service_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

pub fn recent_insights(articles: &[InsightItem]) -> &[InsightItem] {
    &articles[..articles.len().min(HOME_INSIGHTS)]
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-grid-lines" aria-hidden="true">
                <span class="v v1"></span>
                <span class="v v2"></span>
                <span class="v v3"></span>
                <span class="h h1"></span>
                <span class="h h2"></span>
            </div>
            <div class="hero-content">
                <div class="hero-eyebrow">
                    <span class="hero-rule"></span>
                    <p>{"Dedicated Partner"}</p>
                </div>
                <h1>
                    {"You build the "}<br />
                    <span class="hero-muted">{"vision."}</span>
                </h1>
                <div class="hero-sub">
                    <h2>{"We handle the noise."}</h2>
                    <p>{"We support global growth by managing the complexity of cross-border business. From accounting and tax to risk governance and compliance."}</p>
                </div>
                <a href="#expertise" class="hero-scroll">
                    <span class="hero-scroll-ring">{"↓"}</span>
                    <span>{"Our Services"}</span>
                </a>
            </div>
            <div class="hero-ticker">
                <span>{"London • Dublin • Dubai"}</span>
                <span class="hero-ticker-right">{"Global Reach • Local Reliability"}</span>
            </div>
        </section>
    }
}

fn expertise_section() -> SectionResult {
    if SERVICES.is_empty() {
        return Err(SectionError::MissingContent("services"));
    }
    Ok(html! {
        <div class="expertise">
            <div class="section-header">
                <div>
                    <h2>{"Competencies"}</h2>
                    <p>{"We do not generalize. We specialize in the structural mechanics of large-scale business operations."}</p>
                </div>
                <span class="section-tag">{"Service Matrix"}</span>
            </div>
            <div class="expertise-grid">
                {
                    SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <div key={service.id} class="expertise-card">
                            <span class="expertise-number">{service_number(i)}</span>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                            <ul>
                                { for service.details.iter().map(|d| html! { <li>{*d}</li> }) }
                            </ul>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </div>
    })
}

fn about_section() -> SectionResult {
    if STATS.is_empty() {
        return Err(SectionError::MissingContent("firm statistics"));
    }
    Ok(html! {
        <div class="firm">
            <div class="firm-narrative">
                <span class="eyebrow">{"The Firm"}</span>
                <h2>{"Navigating international markets with "}<span class="muted">{"clarity"}</span></h2>
                <div class="firm-copy">
                    <p>{"Boru Consulting supports global growth by managing the complexity that comes with cross-border business. We cover every part of business setup and expansion, from accounting and tax to entity management, governance, risk, and compliance."}</p>
                    <p>{"We also work with individuals and families to protect and grow their wealth through private wealth and trust services. Whether you want to preserve your legacy or strengthen your financial strategy, we provide clear, tailored solutions built around your goals."}</p>
                    <Link<Route> to={Route::About} classes="text-link">{"Learn More →"}</Link<Route>>
                </div>
            </div>
            <div class="firm-side">
                {
                    STATS.iter().enumerate().map(|(i, stat)| html! {
                        <div class="stat">
                            <p class={classes!("stat-value", (i == 0).then(|| "strong"))}>{stat.value}</p>
                            <p class="stat-label">{stat.label}</p>
                        </div>
                    }).collect::<Html>()
                }
                <div class="jurisdictions">
                    <h4>{"Active Jurisdictions"}</h4>
                    <ul>
                        {
                            JURISDICTIONS.iter().map(|j| html! {
                                <li>
                                    <span class="jurisdiction-name">{j.name}</span>
                                    <span class="jurisdiction-reg">{j.registration}</span>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
            </div>
        </div>
    })
}

fn insights_section(articles: &[InsightItem]) -> SectionResult {
    let recent = recent_insights(articles);
    if recent.is_empty() {
        return Err(SectionError::MissingContent("articles"));
    }
    if let Some(defect) = recent.iter().find_map(article_defect) {
        return Err(SectionError::Broken(defect));
    }
    Ok(html! {
        <div class="insights">
            <div class="section-header">
                <div>
                    <span class="eyebrow">{"Intelligence Hub"}</span>
                    <h2>{"Market intelligence"}</h2>
                </div>
                <Link<Route> to={Route::Blog} classes="text-link">{"View Intelligence Hub ↗"}</Link<Route>>
            </div>
            <div class="insights-grid">
                { for recent.iter().map(|article| html! { <ArticleCard key={article.id} article={*article} /> }) }
            </div>
        </div>
    })
}

fn contact_section() -> SectionResult {
    Ok(html! { <Contact /> })
}

#[function_component(Home)]
pub fn home() -> Html {
    use_head(home_meta());

    html! {
        <main class="home">
            <Hero />
            <section id="expertise">
                <LazySection name="Expertise" render={Callback::from(|_: ()| expertise_section())} />
            </section>
            <section id="about" class="alt-surface">
                <LazySection name="About" render={Callback::from(|_: ()| about_section())} />
            </section>
            <section id="insights">
                <LazySection name="Insights" render={Callback::from(|_: ()| insights_section(INSIGHTS))} />
            </section>
            <LazySection name="Contact" render={Callback::from(|_: ()| contact_section())} />
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                }
                .hero-grid-lines span {
                    position: absolute;
                    background: var(--grid-line);
                    pointer-events: none;
                }
                .hero-grid-lines .v { top: 0; bottom: 0; width: 1px; }
                .hero-grid-lines .h { left: 0; right: 0; height: 1px; }
                .hero-grid-lines .v1 { left: 25%; }
                .hero-grid-lines .v2 { left: 50%; }
                .hero-grid-lines .v3 { left: 75%; }
                .hero-grid-lines .h1 { top: 33%; }
                .hero-grid-lines .h2 { top: 66%; }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 1280px;
                    width: 100%;
                    margin: 0 auto;
                    padding: 10rem 3rem;
                }
                .hero-eyebrow {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 2.5rem;
                    color: var(--gold);
                    font-size: 10px;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    font-weight: 600;
                }
                .hero-rule {
                    width: 3rem;
                    height: 1px;
                    background: var(--gold);
                    opacity: 0.5;
                }
                .hero h1 {
                    font-family: var(--serif);
                    font-size: clamp(3.75rem, 9vw, 8rem);
                    line-height: 1.05;
                    margin: 0 0 4rem;
                    animation: slide-up 0.8s ease both;
                }
                .hero-muted { color: var(--muted); }
                .hero-sub { max-width: 28rem; }
                .hero-sub h2 {
                    font-family: var(--serif);
                    font-size: 2.25rem;
                    margin-bottom: 1.5rem;
                }
                .hero-sub p {
                    color: var(--muted);
                    font-size: 1.125rem;
                    line-height: 1.7;
                }
                .hero-scroll {
                    position: absolute;
                    bottom: 3.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    color: var(--text);
                    text-decoration: none;
                    font-size: 10px;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }
                .hero-scroll-ring {
                    width: 3rem;
                    height: 3rem;
                    border: 1px solid var(--border-strong);
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .hero-ticker {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    width: 100%;
                    border-top: 1px solid var(--border);
                    padding: 1.5rem 3rem;
                    display: flex;
                    justify-content: space-between;
                    font-size: 10px;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: var(--muted);
                }
                .section-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    gap: 2rem;
                    margin-bottom: 5rem;
                    padding-bottom: 2rem;
                    border-bottom: 1px solid var(--border);
                }
                .section-header h2 {
                    font-family: var(--serif);
                    font-size: 3.5rem;
                    margin: 0 0 1.5rem;
                }
                .section-header p {
                    max-width: 36rem;
                    color: var(--muted);
                    font-size: 1.125rem;
                }
                .section-tag {
                    font-size: 10px;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: var(--muted);
                }
                .expertise,
                .firm,
                .insights {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 8rem 3rem;
                }
                .expertise-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                }
                .expertise-card {
                    padding: 3rem;
                    min-height: 400px;
                    display: flex;
                    flex-direction: column;
                    border-bottom: 1px solid var(--border);
                    border-right: 1px solid var(--border);
                    transition: background 0.5s ease;
                }
                .expertise-card:nth-child(3n) { border-right: none; }
                .expertise-card:hover { background: var(--surface); }
                .expertise-number {
                    font-family: var(--serif);
                    color: var(--gold);
                    margin-bottom: 3rem;
                }
                .expertise-card h3 {
                    font-family: var(--serif);
                    font-size: 1.875rem;
                    margin: 0 0 1.5rem;
                }
                .expertise-card p {
                    color: var(--muted);
                    font-size: 0.875rem;
                    line-height: 1.8;
                    flex-grow: 1;
                }
                .expertise-card ul {
                    list-style: none;
                    padding: 2rem 0 0;
                    margin: 0;
                    border-top: 1px solid var(--border);
                    font-size: 10px;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: var(--muted);
                }
                .expertise-card li { margin-bottom: 1rem; }
                .alt-surface { background: var(--surface); }
                .firm {
                    display: grid;
                    grid-template-columns: 7fr 5fr;
                    gap: 5rem;
                }
                .firm h2 {
                    font-family: var(--serif);
                    font-size: 3.75rem;
                    line-height: 1.1;
                    margin: 0 0 3rem;
                }
                .firm .muted { color: var(--muted); }
                .firm-copy {
                    border-left: 1px solid var(--border);
                    padding-left: 3rem;
                    color: var(--muted);
                    font-size: 1.125rem;
                    line-height: 1.8;
                }
                .stat {
                    padding-bottom: 1.25rem;
                    margin-bottom: 2rem;
                    border-bottom: 1px solid var(--border);
                }
                .stat-value {
                    font-family: var(--serif);
                    font-size: 3.75rem;
                    margin: 0 0 0.5rem;
                }
                .stat-value.strong { font-weight: 600; }
                .stat-label,
                .jurisdictions h4 {
                    font-size: 10px;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: var(--muted);
                }
                .jurisdictions {
                    padding: 1.5rem;
                    border: 1px solid var(--border);
                }
                .jurisdictions h4 { color: var(--gold); }
                .jurisdictions ul { list-style: none; padding: 0; margin: 0; }
                .jurisdictions li {
                    display: flex;
                    flex-direction: column;
                    margin-bottom: 1rem;
                }
                .jurisdiction-name { font-weight: 500; }
                .jurisdiction-reg {
                    font-size: 11px;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: var(--muted);
                }
                .insights-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 4rem 2rem;
                }
                @keyframes slide-up {
                    from { opacity: 0; transform: translateY(2rem); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @media (max-width: 1024px) {
                    .expertise-grid,
                    .insights-grid { grid-template-columns: 1fr 1fr; }
                    .firm { grid-template-columns: 1fr; }
                }
                @media (max-width: 768px) {
                    .hero-content,
                    .expertise,
                    .firm,
                    .insights { padding-left: 1.5rem; padding-right: 1.5rem; }
                    .expertise-grid,
                    .insights-grid { grid-template-columns: 1fr; }
                    .expertise-card { border-right: none; }
                    .section-header { flex-direction: column; align-items: flex-start; }
                    .hero-ticker-right { display: none; }
                }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn services_are_numbered_from_one() {
        let numbers: Vec<_> = (0..SERVICES.len()).map(service_number).collect();
        assert_eq!(numbers, vec!["01", "02", "03", "04", "05", "06"]);
    }

    #[test]
    fn home_shows_at_most_three_insights() {
        assert_eq!(recent_insights(INSIGHTS).len(), INSIGHTS.len().min(HOME_INSIGHTS));
        assert_eq!(recent_insights(&INSIGHTS[..1]).len(), 1);
        assert!(recent_insights(&[]).is_empty());
    }

    #[test]
    fn every_section_renders_with_bundled_content() {
        assert!(expertise_section().is_ok());
        assert!(about_section().is_ok());
        assert!(insights_section(INSIGHTS).is_ok());
    }

    #[test]
    fn insights_without_articles_can_retry() {
        let err = insights_section(&[]).err().expect("empty list fails");
        assert!(err.is_recoverable());
    }

    #[test]
    fn malformed_insight_escalates() {
        let broken = InsightItem { content: &[], ..INSIGHTS[0] };
        let err = insights_section(&[broken, INSIGHTS[1]]).err().expect("malformed article fails");
        assert!(!err.is_recoverable());
        assert_eq!(err, SectionError::Broken(format!("article {} has no body", INSIGHTS[0].slug)));
    }
}
