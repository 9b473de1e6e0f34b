use crate::content::InsightItem;

pub const ALL_CATEGORIES: &str = "All";
pub const RELATED_LIMIT: usize = 2;

/// "All" followed by each distinct category in first-seen order.
pub fn categories(articles: &[InsightItem]) -> Vec<&'static str> {
    let mut out = vec![ALL_CATEGORIES];
    for article in articles {
        if !out[1..].contains(&article.category) {
            out.push(article.category);
        }
    }
    out
}

pub fn filter_by_category<'a>(articles: &'a [InsightItem], selected: &str) -> Vec<&'a InsightItem> {
    if selected == ALL_CATEGORIES {
        return articles.iter().collect();
    }
    articles.iter().filter(|a| a.category == selected).collect()
}

/// Same-category articles in source order, never the current one.
pub fn related_articles<'a>(articles: &'a [InsightItem], current: &InsightItem) -> Vec<&'a InsightItem> {
    articles
        .iter()
        .filter(|a| a.category == current.category && a.id != current.id)
        .take(RELATED_LIMIT)
        .collect()
}

#[derive(Debug, PartialEq)]
pub struct ListingView<'a> {
    pub featured: Option<&'a InsightItem>,
    pub grid: Vec<&'a InsightItem>,
}

/// The featured card is the first source article and only appears under
/// "All"; the grid drops it in that case so it is not shown twice.
pub fn listing_view<'a>(articles: &'a [InsightItem], selected: &str) -> ListingView<'a> {
    let mut grid = filter_by_category(articles, selected);
    let featured = if selected == ALL_CATEGORIES { articles.first() } else { None };
    if featured.is_some() {
        grid.remove(0);
    }
    ListingView { featured, grid }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::INSIGHTS;

    fn article(id: &'static str, category: &'static str) -> InsightItem {
        InsightItem {
            id,
            title: id,
            excerpt: "",
            category,
            date: "January 1, 2025",
            read_time: "1 min read",
            slug: id,
            author: "",
            keywords: &[],
            content: &[],
            references: &[],
            source_note: "",
        }
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let articles = [article("1", "A"), article("2", "B"), article("3", "A")];
        assert_eq!(categories(&articles), vec!["All", "A", "B"]);
    }

    #[test]
    fn categories_are_not_sorted() {
        let articles = [article("1", "Zeta"), article("2", "Alpha")];
        assert_eq!(categories(&articles), vec!["All", "Zeta", "Alpha"]);
    }

    #[test]
    fn categories_of_empty_list_is_just_all() {
        assert_eq!(categories(&[]), vec!["All"]);
    }

    #[test]
    fn filter_all_returns_everything() {
        let articles = [article("1", "A"), article("2", "B")];
        assert_eq!(filter_by_category(&articles, "All").len(), 2);
    }

    #[test]
    fn filter_by_single_category() {
        let articles = [article("1", "A"), article("2", "B"), article("3", "A")];
        let ids: Vec<_> = filter_by_category(&articles, "A").iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert!(filter_by_category(&articles, "C").is_empty());
    }

    #[test]
    fn related_excludes_self_and_keeps_source_order() {
        let articles = [
            article("b1", "B"),
            article("a1", "A"),
            article("current", "A"),
            article("b2", "B"),
            article("a2", "A"),
        ];
        let related = related_articles(&articles, &articles[2]);
        let ids: Vec<_> = related.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["a1", "a2"]);
    }

    #[test]
    fn related_is_capped_at_two() {
        let articles = [
            article("current", "A"),
            article("a1", "A"),
            article("a2", "A"),
            article("a3", "A"),
        ];
        let ids: Vec<_> = related_articles(&articles, &articles[0]).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["a1", "a2"]);
    }

    #[test]
    fn related_is_empty_for_a_unique_category() {
        assert!(related_articles(INSIGHTS, &INSIGHTS[0]).is_empty());
    }

    #[test]
    fn listing_under_all_features_first_article_once() {
        let articles = [article("1", "A"), article("2", "B"), article("3", "A")];
        let view = listing_view(&articles, "All");
        assert_eq!(view.featured.map(|a| a.id), Some("1"));
        let ids: Vec<_> = view.grid.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn listing_under_a_category_has_no_featured_card() {
        let articles = [article("1", "A"), article("2", "B"), article("3", "A")];
        let view = listing_view(&articles, "A");
        assert!(view.featured.is_none());
        let ids: Vec<_> = view.grid.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn listing_of_empty_source() {
        let view = listing_view(&[], "All");
        assert!(view.featured.is_none());
        assert!(view.grid.is_empty());
    }
}
