//! End-to-end compilation properties through the public API.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use pagebake::links::resolve_link;
use pagebake::types::*;
use pagebake::{CompileError, Diagnostic, FileContent, compile, compile_json};
use std::collections::BTreeMap;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

const DOCUMENT: &str = r##"{
    "theme": { "primaryColor": "emerald", "textColor": "slate", "fontFamily": "Open Sans" },
    "seo": {
        "title": "Acme Studio",
        "description": "Design that ships",
        "keywords": "design, studio",
        "metaTags": [{ "name": "robots", "content": "index,follow" }],
        "structuredData": "{\"@context\":\"https://schema.org\",\"@type\":\"Organization\"}"
    },
    "nav": {
        "logo": { "mode": "text", "content": "Acme" },
        "items": [
            { "label": "Pricing", "link": "#pricing" },
            { "label": "About", "link": "page:p1" },
            { "label": "Careers", "link": "page:gone" }
        ]
    },
    "sectionOrder": ["hero", "features", "pricing", "faq", "embed", "footer"],
    "hero": {
        "headline": "Design that ships",
        "ctaText": "Talk to us",
        "ctaLink": "page:p1",
        "layout": "split"
    },
    "features": {
        "title": "Why us",
        "items": [{ "title": "Fast", "description": "Weeks, not months" }]
    },
    "pricing": {
        "title": "Pricing",
        "plans": [{ "name": "Studio", "price": "$900", "highlighted": true }]
    },
    "faq": {
        "title": "FAQ",
        "items": [{ "question": "Do you do branding?", "answer": "Yes, *always*." }]
    },
    "embed": { "title": "Calendar", "code": "<div>x</div><script>window.__marker=1</script>" },
    "footer": { "text": "© Acme", "links": [{ "label": "Home", "link": "page:home" }] }
}"##;

fn document() -> PageDocument {
    serde_json::from_str(DOCUMENT).unwrap()
}

fn images() -> ImageStore {
    BTreeMap::from([
        ("hero".to_string(), "data:image/png;base64,AAAA".to_string()),
        ("og_image".to_string(), "data:image/jpeg;base64,/9j/".to_string()),
        ("logo".to_string(), "https://cdn.example.com/logo.svg".to_string()),
    ])
}

fn roster() -> PageRoster {
    BTreeMap::from([
        ("p1".to_string(), "about-us".to_string()),
        ("home".to_string(), String::new()),
    ])
}

fn index_html(bundle: &pagebake::CompiledBundle) -> &str {
    bundle.index_html().expect("bundle has index.html")
}

/// Values of `data-section` attributes in document order.
fn section_ids(html: &str) -> Vec<&str> {
    html.split(r#"data-section=""#)
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn compilation_is_deterministic() {
    let doc = document();
    let a = compile(&doc, &images(), &roster(), &ProductCatalog::new()).unwrap();
    let b = compile(&doc, &images(), &roster(), &ProductCatalog::new()).unwrap();
    assert_eq!(a.bundle, b.bundle);
    assert_eq!(a.bundle.fingerprint(), b.bundle.fingerprint());
    assert_eq!(
        serde_json::to_string(&a.bundle).unwrap(),
        serde_json::to_string(&b.bundle).unwrap()
    );
}

#[test]
fn bundle_is_closed() {
    let out = compile(&document(), &images(), &roster(), &ProductCatalog::new()).unwrap();
    assert_eq!(out.bundle.verify_closure("assets/images"), None);
    let html = index_html(&out.bundle);
    assert!(html.contains(r#"content="assets/images/og_image.jpg""#));
    assert!(out.bundle.contains("assets/images/og_image.jpg"));
}

#[test]
fn section_order_is_preserved() {
    let out = compile(&document(), &images(), &roster(), &ProductCatalog::new()).unwrap();
    assert_eq!(
        section_ids(index_html(&out.bundle)),
        vec!["hero", "features", "pricing", "faq", "embed", "footer"]
    );
}

#[test]
fn missing_section_data_degrades_gracefully() {
    let mut doc = document();
    doc.section_order.insert(2, "testimonials".to_string());
    doc.section_order.push("blog".to_string());
    let out = compile(&doc, &images(), &roster(), &ProductCatalog::new()).unwrap();

    assert_eq!(
        section_ids(index_html(&out.bundle)),
        vec!["hero", "features", "pricing", "faq", "embed", "footer"]
    );
    assert!(out.diagnostics.contains(&Diagnostic::MissingSectionData {
        section: SectionKind::Testimonials
    }));
    assert!(out.diagnostics.contains(&Diagnostic::UnknownSection {
        key: "blog".to_string()
    }));
}

#[test]
fn internal_links_resolve_through_roster() {
    let roster = BTreeMap::from([("p1".to_string(), "about-us".to_string())]);
    assert_eq!(resolve_link("page:p1", &roster), "about-us.html");
    assert_eq!(resolve_link("page:unknown", &roster), "#");
    assert_eq!(
        resolve_link("https://example.com", &roster),
        "https://example.com"
    );

    let out = compile(&document(), &images(), &self::roster(), &ProductCatalog::new()).unwrap();
    let html = index_html(&out.bundle);
    assert!(html.contains(r#"href="about-us.html""#));
    assert!(html.contains(r#"href="index.html""#));
    assert!(out.diagnostics.contains(&Diagnostic::DeadLink {
        page_id: "gone".to_string()
    }));
}

#[test]
fn author_text_mentioning_asset_paths_is_not_a_reference() {
    let mut doc = document();
    doc.seo.description = "assets/images/banner-v2 is our new look".to_string();
    doc.seo.meta_tags.push(MetaTag {
        name: "twitter:image".to_string(),
        content: "assets/images/card.png".to_string(),
    });
    let out = compile(&doc, &images(), &roster(), &ProductCatalog::new()).unwrap();
    let html = index_html(&out.bundle);
    assert!(html.contains(r#"content="assets/images/banner-v2 is our new look""#));
    assert_eq!(out.bundle.verify_closure("assets/images"), None);
}

#[test]
fn markdown_links_and_images_are_resolved() {
    let mut doc = document();
    doc.faq = Some(FaqSection {
        title: "FAQ".to_string(),
        items: vec![FaqItem {
            question: "Where do I start?".to_string(),
            answer: "Read [about](page:p1), skip [jobs](page:gone).\n\n![Old](assets/images/missing.png) <b>raw</b>"
                .to_string(),
        }],
    });
    let out = compile(&doc, &images(), &roster(), &ProductCatalog::new()).unwrap();
    let html = index_html(&out.bundle);

    assert!(html.contains(r#"<a href="about-us.html">about</a>"#));
    assert!(!html.contains("page:p1"));
    assert!(!html.contains("missing.png"));
    assert!(html.contains("&lt;b&gt;raw&lt;/b&gt;"));
    assert!(out.diagnostics.contains(&Diagnostic::UnbundledReference {
        value: "assets/images/missing.png".to_string()
    }));
    assert_eq!(out.bundle.verify_closure("assets/images"), None);
}

#[test]
fn malformed_document_values_degrade_instead_of_failing() {
    let json = r##"{
        "theme": { "primaryColor": "emerald", "textColor": "slate", "fontFamily": "Inter" },
        "nav": { "items": [{ "link": "#faq" }], "layout": "sidebar" },
        "sectionOrder": ["hero", "faq"],
        "hero": { "headline": "Hi", "layout": "diagonal" },
        "faq": { "title": 7 }
    }"##;
    let out = compile_json(
        json,
        &ImageStore::new(),
        &PageRoster::new(),
        &ProductCatalog::new(),
        &pagebake::config::CompilerConfig::default(),
    )
    .unwrap();
    assert_eq!(out.sections, vec![SectionKind::Hero]);
    assert!(index_html(&out.bundle).contains("Hi"));
    assert!(out.diagnostics.contains(&Diagnostic::MissingSectionData {
        section: SectionKind::Faq
    }));
}

#[test]
fn inline_image_round_trips_into_bundle() {
    let doc = document();
    let images = BTreeMap::from([(
        "hero".to_string(),
        "data:image/png;base64,AAAA".to_string(),
    )]);
    let out = compile(&doc, &images, &roster(), &ProductCatalog::new()).unwrap();

    assert_eq!(
        out.bundle.get("assets/images/hero.png"),
        Some(&FileContent::Base64("AAAA".to_string()))
    );
    let bytes = out.bundle.get("assets/images/hero.png").unwrap().to_bytes().unwrap();
    assert_eq!(STANDARD.encode(bytes), "AAAA");
    assert!(index_html(&out.bundle).contains(r#"src="assets/images/hero.png""#));
}

#[test]
fn missing_images_render_placeholders() {
    let out = compile(&document(), &ImageStore::new(), &roster(), &ProductCatalog::new()).unwrap();
    let html = index_html(&out.bundle);
    assert!(html.contains("pb-placeholder"));
    assert!(!html.contains("og:image"));
    assert!(out.diagnostics.contains(&Diagnostic::MissingImage {
        key: "hero".to_string()
    }));
    assert_eq!(out.bundle.len(), 1);
}

#[test]
fn head_carries_seo_metadata() {
    let out = compile(&document(), &images(), &roster(), &ProductCatalog::new()).unwrap();
    let html = index_html(&out.bundle);
    assert!(html.contains("<title>Acme Studio</title>"));
    assert!(html.contains(r#"<meta property="og:description" content="Design that ships">"#));
    assert!(html.contains(r#"<meta name="robots" content="index,follow">"#));
    assert!(html.contains(r#"<script type="application/ld+json">{"@context":"https://schema.org","@type":"Organization"}</script>"#));
    assert!(!out.diagnostics.contains(&Diagnostic::StructuredDataNotJson));
}

#[test]
fn embed_snippet_is_not_inlined() {
    let out = compile(&document(), &images(), &roster(), &ProductCatalog::new()).unwrap();
    let html = index_html(&out.bundle);
    assert!(!html.contains("<script>window.__marker=1</script>"));
    assert!(html.contains("data-embed="));
}

#[test]
fn exactly_one_runtime_script() {
    let out = compile(&document(), &images(), &roster(), &ProductCatalog::new()).unwrap();
    let html = index_html(&out.bundle);
    assert_eq!(html.matches("/* pagebake ").count(), 1);
    assert!(html.ends_with("</script></body></html>"));
}

#[test]
fn document_without_theme_is_rejected() {
    let err = compile_json(
        r#"{"sectionOrder": ["hero"], "hero": {"headline": "Hi"}}"#,
        &ImageStore::new(),
        &PageRoster::new(),
        &ProductCatalog::new(),
        &pagebake::config::CompilerConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, CompileError::Document(_)));
}

#[test]
fn written_bundle_matches_entries() {
    let out = compile(&document(), &images(), &roster(), &ProductCatalog::new()).unwrap();
    let tmp = TempDir::new().unwrap();
    out.bundle.write_to(tmp.path()).unwrap();

    let html = std::fs::read_to_string(tmp.path().join("index.html")).unwrap();
    assert_eq!(html, index_html(&out.bundle));
    let png = std::fs::read(tmp.path().join("assets/images/hero.png")).unwrap();
    assert_eq!(png, vec![0, 0, 0]);
}
