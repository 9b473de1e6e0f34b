use yew::prelude::*;
use yew_router::prelude::*;

use crate::blog::filter::{categories, listing_view, ALL_CATEGORIES};
use crate::content::{InsightItem, INSIGHTS};
use crate::seo::{blog_meta, use_head};
use crate::Route;

/// Placeholder thumbnail letter for an article card.
pub fn category_initial(category: &str) -> String {
    category.chars().next().map(String::from).unwrap_or_default()
}

fn article_route(article: &InsightItem) -> Route {
    Route::BlogArticle {
        slug: article.slug.to_string(),
    }
}

#[derive(Properties, PartialEq)]
pub struct ArticleCardProps {
    pub article: InsightItem,
    #[prop_or_default]
    pub large: bool,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    html! {
        <article class={classes!("article-card", props.large.then(|| "large"))}>
            <Link<Route> to={article_route(article)} classes="article-card-thumb">
                <span>{category_initial(article.category)}</span>
            </Link<Route>>
            <div class="article-card-meta">
                <span class="article-card-category">{article.category}</span>
                <span class="meta-divider"></span>
                <span>{article.date}</span>
                <span class="meta-divider"></span>
                <span>{article.read_time}</span>
            </div>
            <Link<Route> to={article_route(article)} classes="article-card-title">
                <h3>{article.title}</h3>
            </Link<Route>>
            <p class="article-card-excerpt">{article.excerpt}</p>
            <Link<Route> to={article_route(article)} classes="text-link">{"Read Full Analysis →"}</Link<Route>>
        </article>
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
    use_head(blog_meta());
    let selected = use_state(|| ALL_CATEGORIES.to_string());
    let view = listing_view(INSIGHTS, &selected);

    html! {
        <div class="blog-list-page">
            <div class="breadcrumbs">
                <nav>
                    <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                    <span class="crumb-sep">{"›"}</span>
                    <span class="crumb-current">{"Market Intelligence"}</span>
                </nav>
            </div>
            <div class="blog-list-inner">
                <header class="blog-list-hero">
                    <span class="eyebrow">{"Intelligence Hub"}</span>
                    <h1>{"Market Intelligence"}</h1>
                    <p>{"Strategic analysis on global tax architecture, corporate structuring, regulatory frameworks, and cross-border operations."}</p>
                </header>

                <div class="category-pills" role="group" aria-label="Filter by category">
                    {
                        categories(INSIGHTS).into_iter().map(|category| {
                            let active = *selected == category;
                            let onclick = {
                                let selected = selected.clone();
                                Callback::from(move |_: MouseEvent| selected.set(category.to_string()))
                            };
                            html! {
                                <button
                                    key={category}
                                    class={classes!("category-pill", active.then(|| "active"))}
                                    aria-pressed={active.to_string()}
                                    {onclick}
                                >
                                    {category}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>

                if let Some(featured) = view.featured {
                    <Link<Route> to={article_route(featured)} classes="featured-link">
                        <article class="featured-article">
                            <div class="featured-body">
                                <div class="article-card-meta">
                                    <span class="article-card-category">{"Featured Analysis"}</span>
                                    <span class="meta-divider"></span>
                                    <span>{featured.category}</span>
                                </div>
                                <h2>{featured.title}</h2>
                                <p>{featured.excerpt}</p>
                                <div class="featured-meta">
                                    <span>{featured.read_time}</span>
                                    <span class="meta-divider"></span>
                                    <span>{featured.date}</span>
                                </div>
                            </div>
                            <div class="featured-visual">
                                <span>{category_initial(featured.category)}</span>
                            </div>
                        </article>
                    </Link<Route>>
                }

                <div class="article-grid">
                    {
                        view.grid.iter().enumerate().map(|(i, article)| html! {
                            <ArticleCard
                                key={article.id}
                                article={**article}
                                large={i == 0 && view.grid.len() > 1}
                            />
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .blog-list-page {
                    min-height: 100vh;
                    padding: 6rem 0;
                }
                .breadcrumbs {
                    border-bottom: 1px solid var(--border);
                }
                .breadcrumbs nav {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 1rem 3rem;
                    display: flex;
                    gap: 0.5rem;
                    align-items: center;
                    font-size: 0.75rem;
                    color: var(--muted);
                }
                .breadcrumbs a {
                    color: var(--muted);
                    text-decoration: none;
                }
                .breadcrumbs a:hover { color: var(--gold); }
                .crumb-current { color: var(--text); }
                .blog-list-inner {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 3rem;
                }
                .blog-list-hero {
                    padding: 4rem 0;
                    margin-bottom: 3rem;
                    border-bottom: 1px solid var(--border);
                }
                .blog-list-hero h1 {
                    font-family: var(--serif);
                    font-size: 4.5rem;
                    line-height: 1.05;
                    margin: 0 0 1.5rem;
                }
                .blog-list-hero p {
                    max-width: 48rem;
                    font-size: 1.25rem;
                    color: var(--muted);
                }
                .category-pills {
                    display: flex;
                    gap: 0.75rem;
                    overflow-x: auto;
                    padding-bottom: 0.5rem;
                    margin-bottom: 3rem;
                }
                .category-pill {
                    padding: 0.5rem 1.25rem;
                    border: 1px solid var(--border-strong);
                    background: transparent;
                    color: var(--muted);
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    white-space: nowrap;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .category-pill:hover { border-color: var(--text); }
                .category-pill.active {
                    background: var(--text);
                    color: var(--bg);
                    border-color: var(--text);
                }
                .featured-link {
                    display: block;
                    margin-bottom: 5rem;
                    text-decoration: none;
                    color: inherit;
                }
                .featured-article {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 3rem;
                    padding-bottom: 4rem;
                    border-bottom: 2px solid var(--text);
                }
                .featured-body h2 {
                    font-family: var(--serif);
                    font-size: 3.75rem;
                    line-height: 1.05;
                    margin: 0 0 1.5rem;
                    transition: color 0.3s ease;
                }
                .featured-link:hover h2 { color: var(--gold); }
                .featured-body p {
                    font-size: 1.125rem;
                    color: var(--muted);
                    margin-bottom: 2rem;
                }
                .featured-meta {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    font-size: 0.875rem;
                    color: var(--muted);
                }
                .featured-visual,
                .article-card-thumb {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border: 1px solid var(--border);
                    background: linear-gradient(135deg, rgba(197, 160, 89, 0.1), transparent);
                    font-family: var(--serif);
                    font-size: 3.75rem;
                    color: var(--muted);
                    text-decoration: none;
                }
                .featured-visual { aspect-ratio: 1; }
                .article-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 3rem 2rem;
                }
                .article-card {
                    display: flex;
                    flex-direction: column;
                }
                .article-card.large { grid-column: span 2; }
                .article-card-thumb {
                    aspect-ratio: 4 / 3;
                    margin-bottom: 1.5rem;
                }
                .article-card-meta {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    font-size: 9px;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: var(--muted);
                    margin-bottom: 1rem;
                }
                .article-card-category {
                    color: var(--gold);
                    font-weight: 600;
                }
                .meta-divider {
                    width: 1px;
                    height: 0.75rem;
                    background: var(--border-strong);
                }
                .article-card-title {
                    color: var(--text);
                    text-decoration: none;
                }
                .article-card-title h3 {
                    font-family: var(--serif);
                    font-size: 1.5rem;
                    line-height: 1.15;
                    margin: 0 0 1rem;
                }
                .article-card.large .article-card-title h3 { font-size: 2.25rem; }
                .article-card-excerpt {
                    color: var(--muted);
                    font-size: 0.875rem;
                    line-height: 1.8;
                    flex-grow: 1;
                    margin-bottom: 1.5rem;
                }
                @media (max-width: 1024px) {
                    .article-grid { grid-template-columns: 1fr 1fr; }
                    .featured-article { grid-template-columns: 1fr; }
                }
                @media (max-width: 768px) {
                    .breadcrumbs nav,
                    .blog-list-inner { padding-left: 1.5rem; padding-right: 1.5rem; }
                    .article-grid { grid-template-columns: 1fr; }
                    .article-card.large { grid-column: auto; }
                    .blog-list-hero h1 { font-size: 3rem; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_is_first_letter() {
        assert_eq!(category_initial("Taxation Strategy"), "T");
        assert_eq!(category_initial(""), "");
    }

    #[test]
    fn card_links_to_article_slug() {
        let route = article_route(&INSIGHTS[0]);
        assert_eq!(route.to_path(), format!("/blog/{}", INSIGHTS[0].slug));
    }
}
