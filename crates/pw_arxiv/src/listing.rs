use chrono::Utc;
use scraper::{Html, Selector};

use pw_core::Paper;

/// Parses an arXiv listing page ("/list/<category>/recent") into papers.
///
/// Each `<dt>`/`<dd>` pair is one entry: the abstract link in the `<dt>`
/// gives the url, the `<dd>` meta block gives title, authors and abstract.
/// Entries without an abstract link or a title are skipped.
pub fn parse_listing(html: &str, base_url: &str) -> Vec<Paper> {
    let document = Html::parse_document(html);
    let dt_selector = Selector::parse("dl dt").unwrap();
    let dd_selector = Selector::parse("dl dd").unwrap();
    let abstract_selector = Selector::parse(r#"a[title="Abstract"]"#).unwrap();
    let title_selector = Selector::parse("div.list-title").unwrap();
    let authors_selector = Selector::parse("div.list-authors a").unwrap();
    let summary_selector = Selector::parse("p.mathjax").unwrap();

    let mut papers = Vec::new();

    for (dt, dd) in document
        .select(&dt_selector)
        .zip(document.select(&dd_selector))
    {
        let url = match dt
            .select(&abstract_selector)
            .next()
            .and_then(|a| a.value().attr("href"))
        {
            Some(href) if href.starts_with("http") => href.to_string(),
            Some(href) => format!("{}{}", base_url, href),
            None => continue,
        };

        let title = dd
            .select(&title_selector)
            .next()
            .map(|el| clean_title(&el.text().collect::<String>()))
            .unwrap_or_default();
        if title.is_empty() {
            continue;
        }

        let authors = dd
            .select(&authors_selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        // The abstract paragraph is only present in some listing views.
        let summary = dd
            .select(&summary_selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        papers.push(Paper {
            title,
            url,
            summary,
            authors,
            published_at: Utc::now(),
        });
    }

    papers
}

fn clean_title(raw: &str) -> String {
    raw.trim().trim_start_matches("Title:").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <dl>
          <dt>
            <a name="item1">[1]</a>
            <a href="/abs/2406.01234" title="Abstract">arXiv:2406.01234</a>
          </dt>
          <dd>
            <div class="meta">
              <div class="list-title mathjax"><span class="descriptor">Title:</span> Segment Anything at the Edge</div>
              <div class="list-authors">
                <a href="/a/doe_j_1">Jane Doe</a>,
                <a href="/a/smith_a_1">Alex Smith</a>
              </div>
              <p class="mathjax">We present an efficient segmentation model for edge devices.</p>
            </div>
          </dd>
          <dt>
            <a name="item2">[2]</a>
            <a href="https://arxiv.org/abs/2406.05678" title="Abstract">arXiv:2406.05678</a>
          </dt>
          <dd>
            <div class="meta">
              <div class="list-title mathjax"><span class="descriptor">Title:</span> Diffusion Models Revisited</div>
              <div class="list-authors"><a href="/a/lee_k_1">Kim Lee</a></div>
            </div>
          </dd>
          <dt>
            <a name="item3">[3]</a>
          </dt>
          <dd>
            <div class="meta">
              <div class="list-title mathjax"><span class="descriptor">Title:</span> Entry Without Abstract Link</div>
            </div>
          </dd>
        </dl>
    "#;

    #[test]
    fn test_parse_listing() {
        let papers = parse_listing(LISTING, "https://arxiv.org");
        assert_eq!(papers.len(), 2);

        assert_eq!(papers[0].title, "Segment Anything at the Edge");
        assert_eq!(papers[0].url, "https://arxiv.org/abs/2406.01234");
        assert_eq!(papers[0].authors, vec!["Jane Doe", "Alex Smith"]);
        assert_eq!(
            papers[0].summary,
            "We present an efficient segmentation model for edge devices."
        );

        assert_eq!(papers[1].title, "Diffusion Models Revisited");
        assert_eq!(papers[1].url, "https://arxiv.org/abs/2406.05678");
        assert_eq!(papers[1].summary, "");
    }

    #[test]
    fn test_parse_listing_empty_page() {
        assert!(parse_listing("<html><body></body></html>", "https://arxiv.org").is_empty());
    }

    #[test]
    fn test_clean_title() {
        assert_eq!(clean_title("  Title: Something  "), "Something");
        assert_eq!(clean_title("No Descriptor"), "No Descriptor");
    }
}
