//! Open Graph card rendering
//!
//! The card is composed as an SVG document and rasterized with `resvg`. Fonts
//! are loaded once at startup into a shared database; rendering itself is
//! synchronous and CPU bound, so callers run it on a blocking thread.

use std::path::Path;
use std::sync::Arc;

use resvg::tiny_skia;
use resvg::usvg::{self, fontdb};
use serde::Deserialize;

use crate::core::seo::{SITE_NAME, SITE_TAGLINE};

pub const OG_WIDTH: u32 = 1200;
pub const OG_HEIGHT: u32 = 630;

const MAX_TITLE_CHARS: usize = 40;
const SUBTITLE_LINE_CHARS: usize = 48;
const SUBTITLE_MAX_LINES: usize = 2;

const FEATURE_PILLS: [&str; 4] = [
    "Offer Catalog",
    "Project Pipeline",
    "Team Management",
    "Brand Kit",
];
const TAGLINE: &str = "Built by creators, for creators";
const DOMAIN_BADGE: &str = "flowshot.app";
const FONT_STACK: &str = "Inter, Helvetica, Arial, sans-serif";

#[derive(Debug, thiserror::Error)]
pub enum OgError {
    #[error("invalid card svg: {0}")]
    Svg(#[from] usvg::Error),
    #[error("could not allocate the card canvas")]
    Canvas,
    #[error("png encoding failed: {0}")]
    Encode(String),
}

/// `?title=&subtitle=` query of the card route
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OgQuery {
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

/// Text shown on a card, after defaults are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OgCard {
    pub title: String,
    pub subtitle: String,
}

impl Default for OgCard {
    fn default() -> Self {
        Self {
            title: SITE_NAME.to_string(),
            subtitle: SITE_TAGLINE.to_string(),
        }
    }
}

impl From<OgQuery> for OgCard {
    fn from(query: OgQuery) -> Self {
        let defaults = OgCard::default();
        let pick = |value: Option<String>, fallback: String| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback)
        };
        Self {
            title: pick(query.title, defaults.title),
            subtitle: pick(query.subtitle, defaults.subtitle),
        }
    }
}

/// Rasterizes cards with a shared font database
#[derive(Clone)]
pub struct OgRenderer {
    fontdb: Arc<fontdb::Database>,
}

impl OgRenderer {
    /// Load system fonts plus an optional extra directory
    pub fn load(font_dir: Option<&Path>) -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        if let Some(dir) = font_dir {
            db.load_fonts_dir(dir);
        }
        if db.len() == 0 {
            tracing::warn!("No fonts found; OG cards will render without text");
        } else {
            tracing::info!("Loaded {} font faces for OG cards", db.len());
        }
        Self::with_fonts(db)
    }

    pub fn with_fonts(db: fontdb::Database) -> Self {
        Self {
            fontdb: Arc::new(db),
        }
    }

    pub fn font_count(&self) -> usize {
        self.fontdb.len()
    }

    /// Render a card to PNG bytes
    pub fn render(&self, card: &OgCard) -> Result<Vec<u8>, OgError> {
        let svg = compose_svg(card);

        let mut options = usvg::Options::default();
        options.fontdb = Arc::clone(&self.fontdb);
        let tree = usvg::Tree::from_str(&svg, &options)?;

        let mut pixmap = tiny_skia::Pixmap::new(OG_WIDTH, OG_HEIGHT).ok_or(OgError::Canvas)?;
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        pixmap
            .encode_png()
            .map_err(|e| OgError::Encode(e.to_string()))
    }
}

/// Build the SVG document for a card
pub fn compose_svg(card: &OgCard) -> String {
    let title = truncate_chars(&card.title, MAX_TITLE_CHARS);
    let title_size = if title.chars().count() > 24 { 56 } else { 76 };
    let subtitle_lines = wrap_words(&card.subtitle, SUBTITLE_LINE_CHARS, SUBTITLE_MAX_LINES);

    let mut svg = String::with_capacity(4096);
    svg.push_str(&format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
  <defs>
    <linearGradient id="bg" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0%" stop-color="#667eea"/>
      <stop offset="50%" stop-color="#764ba2"/>
      <stop offset="100%" stop-color="#f093fb"/>
    </linearGradient>
    <linearGradient id="ink" x1="0" y1="0" x2="1" y2="0">
      <stop offset="0%" stop-color="#667eea"/>
      <stop offset="100%" stop-color="#764ba2"/>
    </linearGradient>
  </defs>
  <rect width="{w}" height="{h}" fill="url(#bg)"/>
  <circle cx="1080" cy="90" r="160" fill="#FFFFFF" fill-opacity="0.08"/>
  <circle cx="110" cy="560" r="120" fill="#FFFFFF" fill-opacity="0.08"/>
  <rect x="84" y="70" width="1040" height="430" rx="32" fill="#1F1147" fill-opacity="0.18"/>
  <rect x="80" y="60" width="1040" height="430" rx="32" fill="#FFFFFF"/>
"##,
        w = OG_WIDTH,
        h = OG_HEIGHT
    ));

    svg.push_str(&format!(
        r##"  <text x="600" y="180" text-anchor="middle" font-family="{font}" font-size="{size}" font-weight="800" fill="url(#ink)">{title}</text>
"##,
        font = FONT_STACK,
        size = title_size,
        title = escape_xml(&title)
    ));

    for (i, line) in subtitle_lines.iter().enumerate() {
        svg.push_str(&format!(
            r##"  <text x="600" y="{y}" text-anchor="middle" font-family="{font}" font-size="30" fill="#4B5563">{line}</text>
"##,
            y = 245 + i * 40,
            font = FONT_STACK,
            line = escape_xml(line)
        ));
    }

    for pill in pill_layout(&FEATURE_PILLS, 600.0, 20.0) {
        svg.push_str(&format!(
            r##"  <rect x="{x:.1}" y="340" width="{w:.1}" height="44" rx="22" fill="#F3F0FF" stroke="#764ba2" stroke-opacity="0.25"/>
  <text x="{cx:.1}" y="369" text-anchor="middle" font-family="{font}" font-size="20" font-weight="600" fill="#5B3E96">{label}</text>
"##,
            x = pill.x,
            w = pill.width,
            cx = pill.x + pill.width / 2.0,
            font = FONT_STACK,
            label = escape_xml(pill.label)
        ));
    }

    let badge_width = estimate_width(DOMAIN_BADGE, 22.0) + 48.0;
    let badge_x = f64::from(OG_WIDTH) - 60.0 - badge_width;
    svg.push_str(&format!(
        r##"  <text x="600" y="450" text-anchor="middle" font-family="{font}" font-size="24" font-style="italic" fill="#6B7280">{tagline}</text>
  <rect x="{bx:.1}" y="528" width="{bw:.1}" height="52" rx="26" fill="#FFFFFF" fill-opacity="0.2"/>
  <text x="{tx:.1}" y="562" text-anchor="middle" font-family="{font}" font-size="22" font-weight="600" fill="#FFFFFF">{badge}</text>
</svg>
"##,
        font = FONT_STACK,
        tagline = TAGLINE,
        bx = badge_x,
        bw = badge_width,
        tx = badge_x + badge_width / 2.0,
        badge = DOMAIN_BADGE
    ));

    svg
}

struct Pill {
    label: &'static str,
    x: f64,
    width: f64,
}

/// Lay pills out on one row centred on `center_x`
fn pill_layout(labels: &[&'static str], center_x: f64, font_size: f64) -> Vec<Pill> {
    const GAP: f64 = 16.0;
    const PADDING: f64 = 22.0;

    let widths: Vec<f64> = labels
        .iter()
        .map(|label| estimate_width(label, font_size) + PADDING * 2.0)
        .collect();
    let total: f64 = widths.iter().sum::<f64>() + GAP * labels.len().saturating_sub(1) as f64;

    let mut x = center_x - total / 2.0;
    labels
        .iter()
        .zip(widths)
        .map(|(label, width)| {
            let pill = Pill {
                label: *label,
                x,
                width,
            };
            x += width + GAP;
            pill
        })
        .collect()
}

/// Rough advance width of proportional text
fn estimate_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * 0.55
}

/// Cut to at most `max` characters, ending in an ellipsis when cut
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.truncate(cut.trim_end().len());
    cut.push('…');
    cut
}

/// Greedy word wrap into at most `max_lines` lines of `width` characters
pub fn wrap_words(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word = truncate_chars(word, width);
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            // Force an ellipsis on the last kept line
            let shortened = truncate_chars(last, width.saturating_sub(1));
            *last = if shortened.ends_with('…') {
                shortened
            } else {
                format!("{shortened}…")
            };
        }
    }
    lines
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if c.is_control() && c != '\n' && c != '\t' => {}
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let card = OgCard::from(OgQuery::default());
        assert_eq!(card.title, "FlowShot");
        assert_eq!(card.subtitle, "Operating System for Photo & Video Studios");

        let card = OgCard::from(OgQuery {
            title: Some("   ".to_string()),
            subtitle: Some(" Pricing ".to_string()),
        });
        assert_eq!(card.title, "FlowShot");
        assert_eq!(card.subtitle, "Pricing");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            escape_xml(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &apos;Jerry&apos;&lt;/b&gt;"
        );
        assert_eq!(escape_xml("a\u{0}b"), "ab");
    }

    #[test]
    fn test_user_text_cannot_break_out_of_svg() {
        let card = OgCard {
            title: "</text><script>alert(1)</script>".to_string(),
            subtitle: "x".to_string(),
        };
        let svg = compose_svg(&card);
        assert!(!svg.contains("<script>"));
        assert!(svg.contains("&lt;/text&gt;"));
    }

    #[test]
    fn test_default_card_layout() {
        let svg = compose_svg(&OgCard::default());
        assert!(svg.contains("width=\"1200\" height=\"630\""));
        assert!(svg.contains(">FlowShot</text>"));
        assert!(svg.contains("Operating System for Photo &amp; Video Studios"));
        for pill in FEATURE_PILLS {
            assert!(svg.contains(pill), "missing pill {pill}");
        }
        assert!(svg.contains(TAGLINE));
        assert!(svg.contains(">flowshot.app</text>"));
        assert!(svg.contains("#f093fb"));
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_chars("ab cdefgh", 4), "ab…");
        assert_eq!(truncate_chars("ééééé", 3).chars().count(), 3);
    }

    #[test]
    fn test_wrap_words() {
        assert_eq!(wrap_words("one two three", 7, 3), vec!["one two", "three"]);
        assert!(wrap_words("", 10, 2).is_empty());

        let wrapped = wrap_words("aa bb cc dd ee ff", 5, 2);
        assert_eq!(wrapped.len(), 2);
        assert!(wrapped[1].ends_with('…'));
        assert!(wrapped.iter().all(|line| line.chars().count() <= 5));
    }

    #[test]
    fn test_pills_are_centred_and_ordered() {
        let pills = pill_layout(&FEATURE_PILLS, 600.0, 20.0);
        assert_eq!(pills.len(), 4);
        let left = pills[0].x;
        let right = pills[3].x + pills[3].width;
        assert!(((left + right) / 2.0 - 600.0).abs() < 1e-6);
        assert!(pills.windows(2).all(|w| w[0].x + w[0].width < w[1].x));
        assert!(left > 80.0 && right < 1120.0);
    }

    #[test]
    fn test_render_produces_png_of_card_size() {
        let renderer = OgRenderer::with_fonts(fontdb::Database::new());
        let png = renderer.render(&OgCard::default()).unwrap();

        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        let width = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
        let height = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
        assert_eq!((width, height), (OG_WIDTH, OG_HEIGHT));
    }
}
