use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::blog::filter::related_articles;
use crate::components::redirect::ReplaceRoute;
use crate::content::{find_article, Block, InsightItem, AUTHOR_BIO, INSIGHTS, KEY_TAKEAWAYS, LINKEDIN_URL, PULL_QUOTE};
use crate::seo::{article_meta, share_links, use_head};
use crate::typography::format_smart_quotes;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BlogArticleProps {
    pub slug: String,
}

/// The article behind a slug, or where to send the reader instead.
pub fn article_for(slug: &str) -> Result<&'static InsightItem, Route> {
    find_article(slug).ok_or(Route::Blog)
}

/// `/blog/:slug`. Unknown slugs go back to the listing without rendering
/// any article content.
#[function_component(BlogArticle)]
pub fn blog_article(props: &BlogArticleProps) -> Html {
    match article_for(&props.slug) {
        Ok(article) => html! { <ArticleView article={*article} /> },
        Err(to) => {
            info!("Unknown article slug {:?}, redirecting to listing", props.slug);
            html! { <ReplaceRoute {to} /> }
        }
    }
}

fn render_block(block: &Block) -> Html {
    match block {
        Block::Heading(text) => html! { <h2>{format_smart_quotes(text)}</h2> },
        Block::Paragraph(text) => html! { <p>{format_smart_quotes(text)}</p> },
    }
}

fn related_route(article: &InsightItem) -> Route {
    Route::BlogArticle {
        slug: article.slug.to_string(),
    }
}

#[derive(Properties, PartialEq)]
struct ArticleViewProps {
    article: InsightItem,
}

#[function_component(ArticleView)]
fn article_view(props: &ArticleViewProps) -> Html {
    let article = &props.article;
    use_head(article_meta(article));

    let related = related_articles(INSIGHTS, article);

    html! {
        <article class="article-page">
            <div class="breadcrumbs">
                <nav>
                    <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                    <span class="crumb-sep">{"›"}</span>
                    <Link<Route> to={Route::Blog}>{"Market Intelligence"}</Link<Route>>
                    <span class="crumb-sep">{"›"}</span>
                    <span class="crumb-current">{format_smart_quotes(article.category)}</span>
                </nav>
            </div>

            <div class="article-layout">
                <div class="article-main">
                    <header class="article-header">
                        <span class="eyebrow">{format_smart_quotes(article.category)}</span>
                        <h1>{format_smart_quotes(article.title)}</h1>
                        <p class="article-lede">{format_smart_quotes(article.excerpt)}</p>
                        <div class="article-meta">
                            <span>{article.date}</span>
                            <span class="meta-divider"></span>
                            <span>{article.read_time}</span>
                            <span class="meta-divider"></span>
                            <span>{format!("By {}", article.author)}</span>
                        </div>
                    </header>

                    <div class="key-takeaways">
                        <h2>{"Key Takeaways"}</h2>
                        <ul>
                            { for KEY_TAKEAWAYS.iter().map(|t| html! { <li>{format_smart_quotes(t)}</li> }) }
                        </ul>
                    </div>

                    <div class="article-content">
                        { for article.content.iter().map(render_block) }
                    </div>

                    <blockquote class="pull-quote">
                        <p>{format_smart_quotes(PULL_QUOTE)}</p>
                    </blockquote>

                    if !article.references.is_empty() {
                        <div class="article-references">
                            <h3>{"References & Sources"}</h3>
                            <ol>
                                {
                                    article.references.iter().map(|r| html! {
                                        <li><a href={r.url} target="_blank" rel="noopener noreferrer">{r.label}</a></li>
                                    }).collect::<Html>()
                                }
                            </ol>
                            <p class="source-note">{article.source_note}</p>
                        </div>
                    }

                    <div class="article-topics">
                        <h3>{"Related Topics"}</h3>
                        <div class="topic-tags">
                            { for article.keywords.iter().map(|k| html! { <span key={*k} class="topic-tag">{*k}</span> }) }
                        </div>
                    </div>
                </div>

                <aside class="article-sidebar">
                    <div class="author-card">
                        <div class="author-head">
                            <img src="/2.png" alt={article.author} class="author-photo" />
                            <div>
                                <h3>{article.author}</h3>
                                <p>{"Strategic Advisory"}</p>
                            </div>
                        </div>
                        <p class="author-bio">{AUTHOR_BIO}</p>
                        <div class="author-links">
                            <a href={LINKEDIN_URL} target="_blank" rel="noopener noreferrer">{"Connect"}</a>
                            <span class="meta-divider"></span>
                            <a href="/#contact">{"Consult"}</a>
                        </div>
                    </div>
                    <div class="share-box">
                        <h3>{"Share"}</h3>
                        <div class="share-links">
                            {
                                share_links(article).into_iter().map(|link| html! {
                                    <a
                                        href={link.href}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        title={format!("Share on {}", link.network)}
                                    >
                                        {link.network}
                                    </a>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </aside>
            </div>

            if !related.is_empty() {
                <section class="related">
                    <h2>{"Related Intelligence"}</h2>
                    <div class="related-grid">
                        {
                            related.iter().map(|r| html! {
                                <article key={r.id} class="related-card">
                                    <div class="article-card-meta">
                                        <span class="article-card-category">{r.category}</span>
                                        <span class="meta-divider"></span>
                                        <span>{r.date}</span>
                                    </div>
                                    <Link<Route> to={related_route(r)} classes="article-card-title">
                                        <h3>{format_smart_quotes(r.title)}</h3>
                                    </Link<Route>>
                                    <p>{format_smart_quotes(r.excerpt)}</p>
                                    <Link<Route> to={related_route(r)} classes="text-link">{"Read Analysis →"}</Link<Route>>
                                </article>
                            }).collect::<Html>()
                        }
                    </div>
                </section>
            }

            <style>
                {r#"
                .article-page {
                    min-height: 100vh;
                    padding: 6rem 0;
                }
                .article-layout {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 4rem 3rem 0;
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 4rem;
                }
                .article-header {
                    padding-bottom: 3rem;
                    margin-bottom: 3rem;
                    border-bottom: 1px solid var(--border);
                }
                .article-header h1 {
                    font-family: var(--serif);
                    font-size: 3.75rem;
                    line-height: 1.05;
                    margin: 0 0 2rem;
                }
                .article-lede {
                    font-size: 1.25rem;
                    line-height: 1.6;
                    color: var(--muted);
                    margin-bottom: 2rem;
                }
                .article-meta {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 1rem;
                    font-size: 0.875rem;
                    color: var(--muted);
                }
                .key-takeaways {
                    padding: 2rem;
                    margin-bottom: 4rem;
                    border-left: 2px solid var(--gold);
                    background: var(--surface);
                }
                .key-takeaways h2 {
                    font-size: 10px;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: var(--gold);
                    margin: 0 0 1.5rem;
                }
                .key-takeaways li { margin-bottom: 0.75rem; }
                .article-content h2 {
                    font-family: var(--serif);
                    font-size: 1.875rem;
                    margin: 4rem 0 1.5rem;
                }
                .article-content p {
                    font-size: 1.125rem;
                    line-height: 1.8;
                    color: var(--text-soft);
                }
                .pull-quote {
                    margin: 4rem 0;
                    padding: 2rem 0;
                    border-top: 1px solid var(--border);
                    border-bottom: 1px solid var(--border);
                    text-align: center;
                }
                .pull-quote p {
                    font-family: var(--serif);
                    font-style: italic;
                    font-size: 1.875rem;
                    line-height: 1.3;
                }
                .article-references h3,
                .article-topics h3,
                .share-box h3 {
                    font-size: 10px;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: var(--muted);
                    margin-bottom: 1rem;
                }
                .article-references a { color: var(--text); }
                .source-note {
                    font-size: 0.75rem;
                    color: var(--muted);
                    font-style: italic;
                }
                .article-topics { margin-top: 3rem; }
                .topic-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .topic-tag {
                    padding: 0.375rem 0.75rem;
                    border: 1px solid var(--border);
                    font-size: 0.75rem;
                    color: var(--muted);
                }
                .article-sidebar {
                    position: sticky;
                    top: 7rem;
                    align-self: start;
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .author-card,
                .share-box {
                    padding: 1.5rem;
                    border: 1px solid var(--border);
                }
                .author-head {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                    margin-bottom: 1rem;
                }
                .author-photo {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    object-fit: cover;
                }
                .author-head h3 {
                    font-family: var(--serif);
                    margin: 0;
                }
                .author-head p,
                .author-bio {
                    font-size: 0.875rem;
                    color: var(--muted);
                    margin: 0;
                }
                .author-links,
                .share-links {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-top: 1rem;
                }
                .author-links a,
                .share-links a {
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: var(--text);
                    text-decoration: none;
                }
                .author-links a:hover,
                .share-links a:hover { color: var(--gold); }
                .related {
                    max-width: 1280px;
                    margin: 6rem auto 0;
                    padding: 4rem 3rem 0;
                    border-top: 1px solid var(--border);
                }
                .related h2 {
                    font-family: var(--serif);
                    font-size: 2.25rem;
                    margin: 0 0 3rem;
                }
                .related-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .related-card p {
                    color: var(--muted);
                    font-size: 0.875rem;
                    line-height: 1.8;
                }
                @media (max-width: 1024px) {
                    .article-layout { grid-template-columns: 1fr; }
                    .article-sidebar { position: static; }
                }
                @media (max-width: 768px) {
                    .article-layout,
                    .related { padding-left: 1.5rem; padding-right: 1.5rem; }
                    .related-grid { grid-template-columns: 1fr; }
                    .article-header h1 { font-size: 2.5rem; }
                }
                "#}
            </style>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn related_route_points_at_slug() {
        let route = related_route(&INSIGHTS[2]);
        assert_eq!(route, Route::BlogArticle { slug: INSIGHTS[2].slug.to_string() });
    }

    #[test]
    fn unknown_slug_has_no_article() {
        assert_eq!(article_for("does-not-exist"), Err(Route::Blog));
        assert_eq!(article_for(""), Err(Route::Blog));
        assert_eq!(
            Route::recognize("/blog/does-not-exist"),
            Some(Route::BlogArticle { slug: "does-not-exist".to_string() })
        );
    }

    #[test]
    fn known_slug_resolves_to_its_article() {
        let article = article_for(INSIGHTS[1].slug).expect("bundled slug resolves");
        assert_eq!(article.id, INSIGHTS[1].id);
    }

    #[test]
    fn every_article_has_a_route() {
        for article in INSIGHTS {
            let path = related_route(article).to_path();
            assert_eq!(Route::recognize(&path), Some(related_route(article)));
        }
    }
}
