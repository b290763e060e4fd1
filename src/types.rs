//! The page document model.
//!
//! These types describe one page exactly as the editing subsystem stores it
//! (camelCase JSON). They carry no logic beyond small accessors; everything
//! downstream reads them by reference and mutates nothing.
//!
//! A document is allowed to be structurally inconsistent: `sectionOrder` may
//! name a section with no data block, nested lists may be empty, and most
//! string fields are optional. Only the theme is mandatory.
//!
//! Beyond the theme, a value of the wrong shape never rejects the document.
//! Closed-set strings such as layouts fall back to their default variant, and
//! a malformed section block reads as absent. See [`lenient`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Symbolic image key → data URI or external URL.
///
/// Keys are conventional: `hero`, `logo`, `og_image`, `gallery_<n>`,
/// `testimonial_<n>`, `feature_<n>`, `product_<id>`.
pub type ImageStore = BTreeMap<String, String>;

/// Page identifier → public slug, supplied by the page directory.
pub type PageRoster = BTreeMap<String, String>;

/// Product identifier → already-resolved product record.
pub type ProductCatalog = BTreeMap<String, Product>;

/// The root value compiled into a bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDocument {
    pub theme: Theme,
    #[serde(default, deserialize_with = "lenient")]
    pub seo: Seo,
    #[serde(default, deserialize_with = "lenient")]
    pub nav: Nav,
    /// Raw section keys; defines both presence and render order.
    #[serde(default, deserialize_with = "lenient")]
    pub section_order: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub scripts: AuthorScripts,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroSection>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub features: Option<FeaturesSection>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoSection>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<TestimonialsSection>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PricingSection>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub faq: Option<FaqSection>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactSection>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub booking: Option<BookingSection>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub gallery: Option<GallerySection>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub products: Option<ProductsSection>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub course: Option<CourseSection>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub custom_form: Option<CustomFormSection>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub embed: Option<EmbedSection>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterSection>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub cta: Option<CtaSection>,
}

impl PageDocument {
    /// A document with the given theme and nothing else.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            seo: Seo::default(),
            nav: Nav::default(),
            section_order: Vec::new(),
            scripts: AuthorScripts::default(),
            hero: None,
            features: None,
            video: None,
            testimonials: None,
            pricing: None,
            faq: None,
            contact: None,
            booking: None,
            gallery: None,
            products: None,
            course: None,
            custom_form: None,
            embed: None,
            footer: None,
            cta: None,
        }
    }
}

/// Deserialize a `T`, or its default when the value has the wrong shape.
///
/// The value is buffered as JSON first so a mismatch is contained to this
/// field instead of failing the enclosing document.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_else(|err| {
        tracing::warn!(
            expected = std::any::type_name::<T>(),
            error = %err,
            "ignoring malformed document value"
        );
        T::default()
    }))
}

// ============================================================================
// Section kinds
// ============================================================================

/// Every section type the compiler knows how to render.
///
/// The serialized name is the key used in `sectionOrder` and the anchor id of
/// the rendered fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Hero,
    Features,
    Video,
    Testimonials,
    Pricing,
    Faq,
    Contact,
    Booking,
    Gallery,
    Products,
    Course,
    CustomForm,
    Embed,
    Footer,
    Cta,
}

impl SectionKind {
    pub const ALL: [SectionKind; 15] = [
        SectionKind::Hero,
        SectionKind::Features,
        SectionKind::Video,
        SectionKind::Testimonials,
        SectionKind::Pricing,
        SectionKind::Faq,
        SectionKind::Contact,
        SectionKind::Booking,
        SectionKind::Gallery,
        SectionKind::Products,
        SectionKind::Course,
        SectionKind::CustomForm,
        SectionKind::Embed,
        SectionKind::Footer,
        SectionKind::Cta,
    ];

    /// Key as it appears in `sectionOrder` and as the fragment anchor id.
    pub fn key(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Features => "features",
            SectionKind::Video => "video",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Pricing => "pricing",
            SectionKind::Faq => "faq",
            SectionKind::Contact => "contact",
            SectionKind::Booking => "booking",
            SectionKind::Gallery => "gallery",
            SectionKind::Products => "products",
            SectionKind::Course => "course",
            SectionKind::CustomForm => "customForm",
            SectionKind::Embed => "embed",
            SectionKind::Footer => "footer",
            SectionKind::Cta => "cta",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a `sectionOrder` entry names no known section type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSectionKey(pub String);

impl FromStr for SectionKind {
    type Err = UnknownSectionKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| UnknownSectionKey(s.to_string()))
    }
}

// ============================================================================
// Page-level blocks
// ============================================================================

/// Palette tokens and font for the whole page.
///
/// Color values are utility-framework palette names (`indigo`, `slate`),
/// not CSS colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary_color: String,
    pub text_color: String,
    pub font_family: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Seo {
    pub title: String,
    pub description: String,
    /// Comma-separated keyword string, emitted verbatim.
    pub keywords: String,
    pub meta_tags: Vec<MetaTag>,
    /// Raw JSON-LD payload or a complete `<script>` tag.
    pub structured_data: Option<String>,
    /// Prompt used by the image service to produce `og_image`; not rendered.
    pub og_image_prompt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

/// Verbatim author markup injected into the head and the end of the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorScripts {
    pub head: Option<String>,
    pub body: Option<String>,
}

// ============================================================================
// Navigation
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Nav {
    pub logo: Logo,
    #[serde(deserialize_with = "lenient")]
    pub layout: NavLayout,
    #[serde(deserialize_with = "lenient")]
    pub mobile_layout: MobileNavLayout,
    pub items: Vec<NavLink>,
    pub sign_in: Option<NavLink>,
    pub cart: Option<CartLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Logo {
    #[serde(deserialize_with = "lenient")]
    pub mode: LogoMode,
    /// Text for [`LogoMode::Text`], image store key for [`LogoMode::Image`].
    pub content: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoMode {
    #[default]
    Text,
    Image,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavLayout {
    /// Logo left, links right.
    #[default]
    Standard,
    /// Logo centered above the links.
    Centered,
    /// Logo left, links centered, actions right.
    Split,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MobileNavLayout {
    /// Off-canvas panel sliding in from the side.
    #[default]
    Drawer,
    /// Panel expanding below the header.
    Dropdown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavLink {
    pub label: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CartLink {
    pub link: String,
    pub count: Option<u32>,
}

// ============================================================================
// Section data blocks
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroSection {
    pub headline: String,
    pub subheadline: String,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub secondary_cta_text: Option<String>,
    pub secondary_cta_link: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub layout: HeroLayout,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroLayout {
    #[default]
    Centered,
    Split,
    Background,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesSection {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<FeatureItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
    /// Short glyph (emoji or text) shown when no `feature_<n>` image exists.
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSection {
    pub title: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsSection {
    pub title: String,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingSection {
    pub title: String,
    pub subtitle: String,
    pub plans: Vec<PricingPlan>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingPlan {
    pub name: String,
    /// Display price, already formatted (`"$29"`).
    pub price: String,
    pub period: String,
    pub features: Vec<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqSection {
    pub title: String,
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    pub question: String,
    /// Markdown.
    pub answer: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactSection {
    pub title: String,
    pub subtitle: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Form submission endpoint; the form is omitted when absent.
    pub form_action: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingSection {
    pub title: String,
    pub description: String,
    pub cta_text: Option<String>,
    /// External scheduler URL or a `modal:` pseudo-link.
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GallerySection {
    pub title: String,
    /// Image `n` is read from the store key `gallery_<n>`.
    pub items: Vec<GalleryItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryItem {
    pub caption: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductsSection {
    pub title: String,
    pub subtitle: String,
    pub product_ids: Vec<String>,
}

/// A product record as resolved by the catalog before compilation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Display price, already formatted.
    pub price: String,
    pub image_url: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CourseSection {
    pub title: String,
    /// Markdown.
    pub description: String,
    pub price: Option<String>,
    pub modules: Vec<CourseModule>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseModule {
    pub title: String,
    pub lessons: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomFormSection {
    pub title: String,
    pub description: String,
    pub fields: Vec<FormField>,
    pub submit_text: Option<String>,
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormField {
    pub label: String,
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<String>,
    /// Choices for [`FieldKind::Select`].
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Tel,
    Number,
    Date,
    Textarea,
    Select,
    Checkbox,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedSection {
    pub title: String,
    /// Third-party HTML/script snippet, pasted verbatim by the author.
    pub code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterSection {
    pub text: String,
    pub links: Vec<NavLink>,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CtaSection {
    pub headline: String,
    pub text: String,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
}
