//! Search-engine and social metadata: site constants, sitemap, robots.txt,
//! the favicon and the JSON-LD block.

use chrono::NaiveDate;

pub const DEFAULT_SITE_URL: &str = "https://flowshot.app";
pub const SITE_NAME: &str = "FlowShot";
pub const SITE_TAGLINE: &str = "Operating System for Photo & Video Studios";
pub const SITE_TITLE: &str = "FlowShot - Operating System for Photo & Video Studios";
pub const SITE_DESCRIPTION: &str = "All-in-one project management for video creators. Manage offers, projects, teams, and clients in one visual platform.";
pub const SITE_KEYWORDS: &str = "video production management, photo studio software, project management for creators, wedding videography software, production pipeline, team collaboration, client management, offer catalog, brand kit, creative workflow";

/// How often a sitemap entry is expected to change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SitemapEntry {
    /// Path relative to the site root, `""` for the home page
    pub path: &'static str,
    pub priority: f32,
    pub change_frequency: ChangeFrequency,
}

/// The home page and its in-page anchors
pub static SITEMAP_ENTRIES: [SitemapEntry; 5] = [
    SitemapEntry {
        path: "",
        priority: 1.0,
        change_frequency: ChangeFrequency::Monthly,
    },
    SitemapEntry {
        path: "/#features",
        priority: 0.8,
        change_frequency: ChangeFrequency::Monthly,
    },
    SitemapEntry {
        path: "/#pricing",
        priority: 0.8,
        change_frequency: ChangeFrequency::Monthly,
    },
    SitemapEntry {
        path: "/#security",
        priority: 0.7,
        change_frequency: ChangeFrequency::Monthly,
    },
    SitemapEntry {
        path: "/#faq",
        priority: 0.6,
        change_frequency: ChangeFrequency::Monthly,
    },
];

/// Render `sitemap.xml` for `base_url`, stamping every entry with `last_modified`
pub fn sitemap_xml(base_url: &str, last_modified: NaiveDate) -> String {
    let base = base_url.trim_end_matches('/');
    let lastmod = last_modified.format("%Y-%m-%d");

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in &SITEMAP_ENTRIES {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            base,
            entry.path,
            lastmod,
            entry.change_frequency.as_str(),
            entry.priority
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn robots_txt(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        base_url.trim_end_matches('/')
    )
}

/// URL of the generated social card
pub fn og_image_url(base_url: &str) -> String {
    format!("{}/api/og", base_url.trim_end_matches('/'))
}

/// schema.org description of the product, embedded in the page head
pub fn json_ld(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": SITE_NAME,
        "applicationCategory": "BusinessApplication",
        "operatingSystem": "Web",
        "description": SITE_DESCRIPTION,
        "url": base,
        "image": og_image_url(base),
        "offers": {
            "@type": "Offer",
            "price": "29",
            "priceCurrency": "USD"
        },
        "provider": {
            "@type": "Organization",
            "name": SITE_NAME,
            "url": base
        }
    })
    .to_string()
}

/// 32×32 favicon: a white "F" on the brand gradient
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 32 32">
  <defs>
    <linearGradient id="flowshot-mark" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0%" stop-color="#5865F2"/>
      <stop offset="50%" stop-color="#9333EA"/>
      <stop offset="100%" stop-color="#EC4899"/>
    </linearGradient>
  </defs>
  <rect width="32" height="32" rx="8" fill="url(#flowshot-mark)"/>
  <text x="16" y="23" text-anchor="middle" font-family="Inter, Helvetica, Arial, sans-serif" font-size="20" font-weight="700" fill="#FFFFFF">F</text>
</svg>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_sitemap_lists_every_anchor() {
        let xml = sitemap_xml("https://flowshot.app/", date());

        assert!(xml.starts_with("<?xml"));
        assert_eq!(xml.matches("<url>").count(), 5);
        assert!(xml.contains("<loc>https://flowshot.app</loc>"));
        assert!(xml.contains("<loc>https://flowshot.app/#pricing</loc>"));
        assert!(xml.contains("<loc>https://flowshot.app/#faq</loc>"));
        assert_eq!(xml.matches("<lastmod>2025-03-14</lastmod>").count(), 5);
        assert_eq!(xml.matches("<changefreq>monthly</changefreq>").count(), 5);
    }

    #[test]
    fn test_sitemap_priorities() {
        let xml = sitemap_xml(DEFAULT_SITE_URL, date());
        assert!(xml.contains("<priority>1.0</priority>"));
        assert_eq!(xml.matches("<priority>0.8</priority>").count(), 2);
        assert!(xml.contains("<priority>0.7</priority>"));
        assert!(xml.contains("<priority>0.6</priority>"));
    }

    #[test]
    fn test_robots_points_at_sitemap() {
        let robots = robots_txt("http://localhost:3000/");
        assert!(robots.contains("Allow: /"));
        assert!(robots.ends_with("Sitemap: http://localhost:3000/sitemap.xml\n"));
    }

    #[test]
    fn test_json_ld_is_valid_json() {
        let value: serde_json::Value = serde_json::from_str(&json_ld(DEFAULT_SITE_URL)).unwrap();
        assert_eq!(value["name"], "FlowShot");
        assert_eq!(value["image"], "https://flowshot.app/api/og");
    }

    #[test]
    fn test_icon_is_32px_svg() {
        assert!(ICON_SVG.contains("width=\"32\""));
        assert!(ICON_SVG.contains("#5865F2"));
        assert!(ICON_SVG.contains(">F</text>"));
    }
}
