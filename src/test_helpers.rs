//! Shared test utilities for the pagebake test suite.
//!
//! Provides a small page document, one that carries every section kind, and
//! a [`Fixture`] holding the resolved inputs renderers read.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let fixture = Fixture::new();
//! let doc = sample_document();
//! let ctx = RenderContext::new(fixture.inputs(&doc));
//! assert_eq!(ctx.href("page:p1"), "about-us.html");
//! ```

use crate::assets::AssetPaths;
use crate::sections::RenderInputs;
use crate::types::*;

// =========================================================================
// Resolved inputs
// =========================================================================

/// Asset mapping, roster and catalog as the compiler would hand them to
/// renderers after extraction.
pub struct Fixture {
    pub assets: AssetPaths,
    pub roster: PageRoster,
    pub catalog: ProductCatalog,
}

impl Fixture {
    /// Images for `hero`, `testimonial_0` and `gallery_0`, roster
    /// `p1 → about-us`, and one catalog product `mug`.
    pub fn new() -> Self {
        let mut assets = AssetPaths::default();
        assets.insert("hero", "assets/images/hero.png");
        assets.insert("testimonial_0", "assets/images/testimonial_0.jpg");
        assets.insert("gallery_0", "assets/images/gallery_0.webp");
        Self {
            assets,
            roster: roster(&[("p1", "about-us")]),
            catalog: ProductCatalog::from([("mug".to_string(), mug())]),
        }
    }

    /// No images, empty roster, empty catalog.
    pub fn empty() -> Self {
        Self {
            assets: AssetPaths::default(),
            roster: PageRoster::new(),
            catalog: ProductCatalog::new(),
        }
    }

    pub fn inputs<'a>(&'a self, doc: &'a PageDocument) -> RenderInputs<'a> {
        RenderInputs {
            theme: &doc.theme,
            assets: &self.assets,
            roster: &self.roster,
            catalog: &self.catalog,
            asset_dir: "assets/images",
        }
    }
}

pub fn roster(entries: &[(&str, &str)]) -> PageRoster {
    entries
        .iter()
        .map(|(id, slug)| (id.to_string(), slug.to_string()))
        .collect()
}

pub fn mug() -> Product {
    Product {
        id: "mug".to_string(),
        name: "Coffee Mug".to_string(),
        description: "Holds coffee.".to_string(),
        price: "$12".to_string(),
        image_url: Some("https://cdn.example.com/mug.jpg".to_string()),
        link: Some("https://shop.example.com/mug".to_string()),
    }
}

// =========================================================================
// Documents
// =========================================================================

pub fn theme() -> Theme {
    Theme {
        primary_color: "indigo".to_string(),
        text_color: "gray".to_string(),
        font_family: "Inter".to_string(),
    }
}

fn link(label: &str, link: &str) -> NavLink {
    NavLink {
        label: label.to_string(),
        link: link.to_string(),
    }
}

/// Hero, FAQ and pricing, in that order.
pub fn sample_document() -> PageDocument {
    let mut doc = PageDocument::new(theme());
    doc.seo.title = "Acme".to_string();
    doc.nav.logo.content = "Acme".to_string();
    doc.nav.items = vec![link("Pricing", "#pricing"), link("About", "page:p1")];
    doc.section_order = vec!["hero".into(), "faq".into(), "pricing".into()];
    doc.hero = Some(HeroSection {
        headline: "Build faster".to_string(),
        subheadline: "Pages in minutes".to_string(),
        cta_text: Some("Learn more".to_string()),
        cta_link: Some("page:p1".to_string()),
        ..HeroSection::default()
    });
    doc.faq = Some(FaqSection {
        title: "Questions".to_string(),
        items: vec![FaqItem {
            question: "Is it fast?".to_string(),
            answer: "Yes.".to_string(),
        }],
    });
    doc.pricing = Some(PricingSection {
        title: "Pricing".to_string(),
        subtitle: String::new(),
        plans: vec![PricingPlan {
            name: "Starter".to_string(),
            price: "$9".to_string(),
            period: "month".to_string(),
            features: vec!["One page".to_string()],
            cta_text: Some("Start".to_string()),
            cta_link: Some("#contact".to_string()),
            highlighted: true,
        }],
    });
    doc
}

/// A document with a data block for every section kind, ordered as
/// [`SectionKind::ALL`].
pub fn full_document() -> PageDocument {
    let mut doc = sample_document();
    doc.section_order = SectionKind::ALL.iter().map(|k| k.key().to_string()).collect();
    doc.features = Some(FeaturesSection {
        title: "Features".to_string(),
        subtitle: String::new(),
        items: vec![FeatureItem {
            title: "Fast".to_string(),
            description: "Really fast".to_string(),
            icon: None,
        }],
    });
    doc.video = Some(VideoSection {
        title: "Demo".to_string(),
        description: String::new(),
        url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
    });
    doc.testimonials = Some(TestimonialsSection {
        title: "Customers".to_string(),
        items: vec![Testimonial {
            quote: "Great".to_string(),
            author: "Ada Lovelace".to_string(),
            role: "Engineer".to_string(),
        }],
    });
    doc.contact = Some(ContactSection {
        title: "Contact".to_string(),
        email: Some("hi@example.com".to_string()),
        ..ContactSection::default()
    });
    doc.booking = Some(BookingSection {
        title: "Book a call".to_string(),
        link: Some("modal:booking".to_string()),
        ..BookingSection::default()
    });
    doc.gallery = Some(GallerySection {
        title: "Gallery".to_string(),
        items: vec![GalleryItem {
            caption: "Studio".to_string(),
            alt: String::new(),
        }],
    });
    doc.products = Some(ProductsSection {
        title: "Shop".to_string(),
        subtitle: String::new(),
        product_ids: vec!["mug".to_string()],
    });
    doc.course = Some(CourseSection {
        title: "Course".to_string(),
        description: "Learn *everything*.".to_string(),
        modules: vec![CourseModule {
            title: "Basics".to_string(),
            lessons: vec!["Intro".to_string()],
        }],
        ..CourseSection::default()
    });
    doc.custom_form = Some(CustomFormSection {
        title: "Apply".to_string(),
        fields: vec![FormField {
            label: "Email".to_string(),
            kind: FieldKind::Email,
            required: true,
            ..FormField::default()
        }],
        ..CustomFormSection::default()
    });
    doc.embed = Some(EmbedSection {
        title: "Widget".to_string(),
        code: "<div>x</div><script>window.__marker=1</script>".to_string(),
    });
    doc.footer = Some(FooterSection {
        text: "© Acme".to_string(),
        links: vec![link("About", "page:p1")],
        socials: Vec::new(),
    });
    doc.cta = Some(CtaSection {
        headline: "Ready?".to_string(),
        text: "Start today.".to_string(),
        button_text: Some("Go".to_string()),
        button_link: Some("#pricing".to_string()),
    });
    doc
}
