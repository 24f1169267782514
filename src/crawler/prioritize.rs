use super::scrape::PageLink;

/// Rank a page's links by keyword relevance without reordering them.
///
/// Each link is assigned the index of the first keyword (scanned in list
/// order, case-insensitively) appearing in its visible text or raw href.
/// Links matching no keyword get `keywords.len()`, so they sort after every
/// keyword match once the frontier orders them. An empty keyword list ranks
/// everything 0. Sorting is the frontier's job, not done here.
pub fn prioritize_links(links: &[PageLink], keywords: &[String]) -> Vec<(usize, String)> {
    let lowered: Vec<String> = keywords.iter().map(|kw| kw.to_lowercase()).collect();

    links
        .iter()
        .map(|link| {
            let text = link.text.to_lowercase();
            let href = link.href.to_lowercase();
            let priority = lowered
                .iter()
                .position(|kw| text.contains(kw.as_str()) || href.contains(kw.as_str()))
                .unwrap_or(lowered.len());
            (priority, link.href.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(text: &str, href: &str) -> PageLink {
        PageLink {
            href: href.to_string(),
            text: text.to_string(),
        }
    }

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn first_matching_keyword_index_becomes_priority() {
        let links = vec![
            link("Chemistry", "/wiki/Chem"),
            link("Physics today", "/wiki/Phys"),
            link("Unrelated", "/wiki/X"),
        ];

        let ranked = prioritize_links(&links, &keywords(&["physics", "math"]));

        let priorities: Vec<usize> = ranked.iter().map(|(p, _)| *p).collect();
        assert_eq!(priorities, vec![2, 0, 2]);
    }

    #[test]
    fn input_order_is_preserved() {
        let links = vec![link("B page", "/wiki/B"), link("A page", "/wiki/A")];

        let ranked = prioritize_links(&links, &keywords(&["a", "b"]));

        let hrefs: Vec<&str> = ranked.iter().map(|(_, href)| href.as_str()).collect();
        assert_eq!(hrefs, vec!["/wiki/B", "/wiki/A"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let links = vec![link("GRAND unified THEORY", "/wiki/GUT")];

        let ranked = prioritize_links(&links, &keywords(&["Theory"]));

        assert_eq!(ranked[0].0, 0);
    }

    #[test]
    fn href_matches_when_text_does_not() {
        let links = vec![link("Numbers", "/wiki/Mathematics")];

        let ranked = prioritize_links(&links, &keywords(&["math"]));

        assert_eq!(ranked[0].0, 0);
    }

    #[test]
    fn earlier_keyword_wins_when_both_match() {
        let links = vec![link("physics of mathematics", "/wiki/Both")];

        let ranked = prioritize_links(&links, &keywords(&["math", "physics"]));

        assert_eq!(ranked[0].0, 0);
    }

    #[test]
    fn empty_keyword_list_ranks_everything_zero() {
        let links = vec![link("Anything", "/wiki/Any"), link("Else", "/wiki/Else")];

        let ranked = prioritize_links(&links, &[]);

        assert!(ranked.iter().all(|(p, _)| *p == 0));
    }
}
