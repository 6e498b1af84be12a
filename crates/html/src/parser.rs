//! HTML slide deck parser implementation.

use deck_core::{Card, Error, ExtractedSlide, Presentation, Result};
use scraper::{ElementRef, Html, Selector};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

/// Elements marked as slides.
static SLIDE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector(".slide"));

static H1_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("h1"));

static H2_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("h2"));

static PARAGRAPH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("p"));

static LIST_ITEM_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("li"));

/// Card-like components: feature cards, before/after scenarios, tips.
static CARD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| selector(".card, .scenario, .tp"));

/// Title element inside a card. A selector group matches in document order,
/// so the first element carrying any of these classes wins.
static CARD_TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| selector(".card-title, .sc-title, .tp-name"));

/// Description element inside a card.
static CARD_DESC_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| selector(".card-desc, .sc-after, .tp-desc"));

/// Attribute carrying a slide's display title.
const TITLE_ATTRIBUTE: &str = "data-title";

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

/// Parser for HTML slide decks.
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse an HTML file from disk.
    ///
    /// The presentation is named after the file's base name.
    pub fn parse_file(&self, path: &Path) -> Result<Presentation> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let file = File::open(path)?;
        self.parse(file, &filename)
    }

    /// Parse an HTML document from a reader.
    ///
    /// The whole input is read before parsing. Content that is not valid
    /// UTF-8 is rejected; malformed markup is not, the HTML parser recovers
    /// from it the way a browser would.
    pub fn parse<R: Read>(&self, mut reader: R, filename: &str) -> Result<Presentation> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let content = String::from_utf8(bytes)
            .map_err(|e| Error::ParseError(format!("{} is not valid UTF-8: {}", filename, e)))?;

        Ok(self.parse_str(&content, filename))
    }

    /// Parse an HTML document held in memory.
    pub fn parse_str(&self, html: &str, filename: &str) -> Presentation {
        let document = Html::parse_document(html);
        let mut presentation = Presentation::new(filename);

        for (idx, element) in document.select(&SLIDE_SELECTOR).enumerate() {
            let slide = self.parse_slide(element, idx + 1);
            log::debug!(
                "{}: slide {} ({} paragraphs, {} list items, {} cards)",
                filename,
                slide.number,
                slide.paragraphs.len(),
                slide.list_items.len(),
                slide.cards.len()
            );
            presentation.add_slide(slide);
        }

        if presentation.slides.is_empty() {
            log::debug!("{}: no slide elements found", filename);
        }

        presentation
    }

    /// Extract the content of a single slide element.
    fn parse_slide(&self, element: ElementRef<'_>, slide_number: usize) -> ExtractedSlide {
        let mut slide = ExtractedSlide::new(slide_number);

        slide.title = element.value().attr(TITLE_ATTRIBUTE).map(str::to_string);
        slide.heading = first_text(element, &H1_SELECTOR);
        slide.subheading = first_text(element, &H2_SELECTOR);
        slide.paragraphs = element.select(&PARAGRAPH_SELECTOR).map(stripped_text).collect();
        slide.list_items = element.select(&LIST_ITEM_SELECTOR).map(stripped_text).collect();
        slide.cards = element
            .select(&CARD_SELECTOR)
            .map(|card| {
                Card::new(
                    first_text(card, &CARD_TITLE_SELECTOR),
                    first_text(card, &CARD_DESC_SELECTOR),
                )
            })
            .collect();

        slide
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Stripped text of the first descendant matching `selector`.
fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(stripped_text)
}

/// Concatenate the element's text nodes, each trimmed, dropping empty ones.
///
/// `<p>Hello <b>world</b></p>` yields `Helloworld`.
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}
