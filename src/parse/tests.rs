// Parse module tests.

use super::*;
use scraper::Html;

#[test]
fn test_extract_title_basic() {
    let document = Html::parse_document("<html><head><title>Test Page</title></head></html>");
    assert_eq!(extract_title(&document), Some("Test Page".to_string()));
}

#[test]
fn test_extract_title_with_whitespace() {
    let html = r#"<html><head><title>
        Test
        Page
    </title></head></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(extract_title(&document), Some("Test Page".to_string()));
}

#[test]
fn test_extract_title_with_html_entities() {
    let document = Html::parse_document("<title>Tom &amp; Jerry</title>");
    assert_eq!(extract_title(&document), Some("Tom & Jerry".to_string()));
}

#[test]
fn test_missing_and_empty_title_are_none() {
    assert_eq!(extract_title(&Html::parse_document("<html></html>")), None);
    assert_eq!(
        extract_title(&Html::parse_document("<title>   </title>")),
        None
    );
}

#[test]
fn test_svg_title_is_not_the_page_title() {
    let html = "<html><head></head><body><svg><title>Close icon</title></svg><p>x</p></body></html>";
    let document = Html::parse_document(html);
    assert_eq!(extract_title(&document), None);
    assert_eq!(parse_document(html, "https://example.com/").metadata.title, None);
}

#[test]
fn test_html_title_found_after_svg_title() {
    let html = "<html><body><svg><title>Icon</title></svg><title>Real page title</title></body></html>";
    let document = Html::parse_document(html);
    assert_eq!(extract_title(&document), Some("Real page title".to_string()));
}

#[test]
fn test_json_ld_type_with_charset_parameter() {
    let html = r#"<script type="application/ld+json; charset=utf-8">{"@type": "Recipe"}</script>"#;
    let data = extract_structured_data(&Html::parse_document(html));
    assert!(data.has_structured_data);
    assert_eq!(data.types, vec!["Recipe"]);
}

#[test]
fn test_extract_metadata_fields() {
    let html = r#"
        <html lang="en-GB">
            <head>
                <meta NAME="Description" content="  A page   about things ">
                <meta name="robots" content="index, follow">
                <meta name="author" content="Jane Doe">
                <meta name="viewport" content="width=device-width, initial-scale=1">
                <link rel="stylesheet" href="/site.css">
                <link rel="Canonical" href="https://example.com/page">
            </head>
            <body></body>
        </html>
    "#;
    let metadata = extract_metadata(&Html::parse_document(html));
    assert_eq!(metadata.description.as_deref(), Some("A page about things"));
    assert_eq!(metadata.robots.as_deref(), Some("index, follow"));
    assert_eq!(metadata.author.as_deref(), Some("Jane Doe"));
    assert_eq!(
        metadata.viewport.as_deref(),
        Some("width=device-width, initial-scale=1")
    );
    assert_eq!(
        metadata.canonical_url.as_deref(),
        Some("https://example.com/page")
    );
    assert_eq!(metadata.language.as_deref(), Some("en-GB"));
}

#[test]
fn test_first_meta_description_wins() {
    let html = r#"<meta name="description" content="first"><meta name="description" content="second">"#;
    let metadata = extract_metadata(&Html::parse_document(html));
    assert_eq!(metadata.description.as_deref(), Some("first"));
}

#[test]
fn test_language_falls_back_to_content_language() {
    let html = r#"<html><head><meta http-equiv="Content-Language" content="de"></head></html>"#;
    let metadata = extract_metadata(&Html::parse_document(html));
    assert_eq!(metadata.language.as_deref(), Some("de"));
}

#[test]
fn test_canonical_in_multi_token_rel() {
    let html = r#"<link rel="alternate canonical" href="/c">"#;
    let metadata = extract_metadata(&Html::parse_document(html));
    assert_eq!(metadata.canonical_url.as_deref(), Some("/c"));
}

#[test]
fn test_extract_headings_document_order_all_levels() {
    let html = r#"<body><h2>Intro</h2><h1 id="main">Main <em>title</em></h1><h6>Fine print</h6><h3></h3></body>"#;
    let headings = extract_headings(&Html::parse_document(html));
    let summary: Vec<(u8, &str)> = headings
        .iter()
        .map(|h| (h.level, h.text.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![(2, "Intro"), (1, "Main title"), (6, "Fine print"), (3, "")]
    );
    assert_eq!(headings[1].id.as_deref(), Some("main"));
    assert_eq!(headings[0].id, None);
}

#[test]
fn test_extract_images() {
    let html = r#"
        <img src="/a.png" alt="A cat" width="640" height="480px">
        <img src="/b.png" alt="">
        <img src=" /c.png " title="Gallery" width="50%">
    "#;
    let images = extract_images(&Html::parse_document(html));
    assert_eq!(images.len(), 3);
    assert_eq!(images[0].alt.as_deref(), Some("A cat"));
    assert_eq!(images[0].width, Some(640));
    assert_eq!(images[0].height, Some(480));
    assert_eq!(images[1].alt.as_deref(), Some(""));
    assert_eq!(images[2].alt, None);
    assert_eq!(images[2].src, "/c.png");
    assert_eq!(images[2].title.as_deref(), Some("Gallery"));
    assert_eq!(images[2].width, None);
}

#[test]
fn test_classify_href() {
    let host = Some("example.com");
    assert_eq!(classify_href("/about", host), (true, false));
    assert_eq!(classify_href("#top", host), (true, false));
    assert_eq!(classify_href("https://example.com/blog", host), (true, false));
    assert_eq!(classify_href("https://WWW.Example.com/x", host), (true, false));
    assert_eq!(classify_href("https://other.org/", host), (false, true));
    assert_eq!(classify_href("HTTP://other.org/", host), (false, true));
    assert_eq!(classify_href("mailto:hi@other.org", host), (false, false));
    assert_eq!(classify_href("page.html", host), (false, false));
    assert_eq!(classify_href("https://other.org/", None), (false, true));
}

#[test]
fn test_extract_links() {
    let html = r#"
        <a href="/docs" rel="nofollow">Read the <b>docs</b></a>
        <a href="https://rust-lang.org" target="_blank">Rust</a>
        <a href="tel:123">Call</a>
        <a>No href</a>
    "#;
    let links = extract_links(&Html::parse_document(html), "https://example.com/");
    assert_eq!(links.len(), 3);
    assert_eq!(links[0].text, "Read the docs");
    assert_eq!(links[0].rel.as_deref(), Some("nofollow"));
    assert!(links[0].is_internal && !links[0].is_external);
    assert_eq!(links[1].target.as_deref(), Some("_blank"));
    assert!(links[1].is_external && !links[1].is_internal);
    assert!(!links[2].is_internal && !links[2].is_external);
}

#[test]
fn test_unparsable_base_url_has_no_host() {
    assert_eq!(base_host("not a url"), None);
    assert_eq!(
        base_host("https://Example.COM/path"),
        Some("example.com".to_string())
    );
}

#[test]
fn test_extract_hreflang_tags() {
    let html = r#"
        <link rel="alternate" hreflang="en" href="https://example.com/en/">
        <link rel="alternate" hreflang="x-default" href="https://example.com/">
        <link rel="alternate" hreflang="fr">
    "#;
    let tags = extract_hreflang_tags(&Html::parse_document(html));
    assert_eq!(tags.len(), 3);
    assert_eq!(tags[0].hreflang, "en");
    assert_eq!(tags[1].hreflang, "x-default");
    assert_eq!(tags[2].href, "");
}

#[test]
fn test_body_text_skips_scripts_styles_and_frames() {
    let html = r#"
        <html><head><title>Not body</title></head>
        <body>
            <p>One two</p>
            <script>var hidden = "nope";</script>
            <style>.x { color: red }</style>
            <noscript>Enable JavaScript</noscript>
            <iframe>fallback text</iframe>
            <div>three <span>four</span></div>
        </body></html>
    "#;
    let document = Html::parse_document(html);
    let text = extract_body_text(&document);
    assert_eq!(text, "One two three four");
    assert_eq!(count_words(&text), 4);
}

#[test]
fn test_structured_data_json_ld_and_microdata() {
    let html = r#"
        <html><head>
            <script type="application/ld+json">{"@type": "Article"}</script>
            <script type="APPLICATION/LD+JSON">[{"@type": "Person"}, {"@type": ["Organization"]}]</script>
            <script type="application/ld+json">{ this is not json </script>
        </head>
        <body><div itemscope itemtype="https://schema.org/Product"></div></body></html>
    "#;
    let data = extract_structured_data(&Html::parse_document(html));
    assert!(data.has_structured_data);
    assert_eq!(data.types, vec!["Article", "Person", "Organization", "Product"]);
}

#[test]
fn test_only_malformed_json_ld_is_not_structured_data() {
    let html = r#"<script type="application/ld+json">{"@type": </script>"#;
    let data = extract_structured_data(&Html::parse_document(html));
    assert!(!data.has_structured_data);
    assert!(data.types.is_empty());
}

#[test]
fn test_duplicate_types_are_kept() {
    let html = r#"
        <div itemtype="https://schema.org/Offer"></div>
        <div itemtype="https://schema.org/Offer"></div>
    "#;
    let data = extract_structured_data(&Html::parse_document(html));
    assert_eq!(data.types, vec!["Offer", "Offer"]);
}

#[test]
fn test_parse_document_full() {
    let html = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <title>Guide to Rust ownership</title>
            <meta name="description" content="Learn ownership.">
        </head>
        <body>
            <h1>Ownership</h1>
            <h2>Borrowing</h2>
            <p>Rust programs manage memory through ownership.</p>
            <img src="/diagram.png" alt="Ownership diagram">
            <a href="/next">Next</a>
            <a href="https://doc.rust-lang.org/">Docs</a>
        </body>
        </html>
    "#;
    let parsed = parse_document(html, "https://example.com/guide");
    assert_eq!(
        parsed.metadata.title.as_deref(),
        Some("Guide to Rust ownership")
    );
    assert_eq!(parsed.metadata.language.as_deref(), Some("en"));
    assert_eq!(parsed.headings.len(), 2);
    assert_eq!(parsed.images.len(), 1);
    assert_eq!(parsed.link_counts().internal, 1);
    assert_eq!(parsed.link_counts().external, 1);
    assert!(!parsed.has_structured_data);
    assert_eq!(parsed.word_count, parsed.body_text.split(' ').count());
    assert!(parsed.body_text.starts_with("Ownership Borrowing Rust programs"));
}

#[test]
fn test_parse_document_never_fails_on_garbage() {
    for html in ["", "<<<>>>", "<html><body><div><p>unclosed", "\u{0}\u{1}binary"] {
        let parsed = parse_document(html, "::::");
        assert_eq!(parsed.metadata.title, None);
        assert!(parsed.headings.is_empty());
        assert!(parsed.links.iter().all(|link| !link.is_internal || link.href.starts_with(['/', '#'])));
    }
}
