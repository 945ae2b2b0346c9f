//! Landing page
//!
//! The single page of the site, top to bottom:
//! - SEO head tags (title, description, Open Graph, Twitter, JSON-LD)
//! - Hero with the animated product mockup
//! - Problem statement and the scroll-driven project journey
//! - Use cases, feature pillars, social proof and security
//! - Founder story, pricing, FAQ and the closing call to action

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::app::SiteUrl;
use crate::core::seo::{self, DEFAULT_SITE_URL};
use crate::ui::journey::ProjectJourney;
use crate::ui::sections::{
    Ethos, Faq, Features, FinalCta, Footer, FounderStory, Hero, Navbar, Pricing, ProblemSolution,
    Security, SocialProof, UseCases,
};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta/>

        <Navbar/>
        <main class="landing">
            <Hero/>
            <ProblemSolution/>
            <ProjectJourney/>
            <UseCases/>
            <Features/>
            <SocialProof/>
            <Security/>
            <Ethos/>
            <FounderStory/>
            <Pricing/>
            <Faq/>
            <FinalCta/>
        </main>
        <Footer/>

        <ScrollRevealScript/>
    }
}

/// Head tags; absolute URLs are built from the configured site URL
#[component]
fn SeoMeta() -> impl IntoView {
    let base_url = use_context::<SiteUrl>()
        .map(|url| url.0)
        .unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
    let canonical = format!("{}/", base_url.trim_end_matches('/'));
    let og_image = seo::og_image_url(&base_url);
    let json_ld = seo::json_ld(&base_url);

    view! {
        <Title text=seo::SITE_TITLE/>

        <Meta name="description" content=seo::SITE_DESCRIPTION/>
        <Meta name="keywords" content=seo::SITE_KEYWORDS/>
        <Meta name="author" content=seo::SITE_NAME/>

        // Open Graph
        <Meta property="og:type" content="website"/>
        <Meta property="og:site_name" content=seo::SITE_NAME/>
        <Meta property="og:url" content=canonical.clone()/>
        <Meta property="og:title" content=seo::SITE_TITLE/>
        <Meta property="og:description" content=seo::SITE_DESCRIPTION/>
        <Meta property="og:image" content=og_image.clone()/>
        <Meta property="og:image:width" content="1200"/>
        <Meta property="og:image:height" content="630"/>

        // Twitter
        <Meta name="twitter:card" content="summary_large_image"/>
        <Meta name="twitter:title" content=seo::SITE_TITLE/>
        <Meta name="twitter:description" content=seo::SITE_DESCRIPTION/>
        <Meta name="twitter:image" content=og_image/>

        <Link rel="canonical" href=canonical/>

        <script type="application/ld+json" inner_html=json_ld></script>
    }
}

/// Adds `visible` to `.landing-scroll-animate` elements as they enter the
/// viewport; with reduced motion everything is shown at once
#[component]
fn ScrollRevealScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function reveal() {
                    var targets = document.querySelectorAll('.landing-scroll-animate');
                    var reduced = window.matchMedia('(prefers-reduced-motion: reduce)').matches;
                    if (reduced || !('IntersectionObserver' in window)) {
                        targets.forEach(function(el) { el.classList.add('visible'); });
                        return;
                    }
                    var observer = new IntersectionObserver(function(entries) {
                        entries.forEach(function(entry) {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, { threshold: 0.1, rootMargin: '0px 0px -50px 0px' });
                    targets.forEach(function(el) { observer.observe(el); });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', reveal);
                } else {
                    reveal();
                }
            })();
            "#
        </script>
    }
}
