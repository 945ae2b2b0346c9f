//! Landing page sections
//!
//! Every section renders through [`Section`], so look and arrangement are a
//! [`SectionOptions`] value rather than a copy of the markup.

use crate::ui::icon::{Icon, icons};
use crate::ui::mockup::AnimatedMockup;
use crate::ui::waitlist::use_waitlist;
use leptos::html;
use leptos::prelude::*;

/// Background scheme of a section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SectionTheme {
    #[default]
    Light,
    Dark,
}

/// Arrangement of a section's content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SectionLayout {
    /// Two columns: copy and a visual
    Split,
    #[default]
    Centered,
}

/// Presentation options shared by all sections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionOptions {
    pub theme: SectionTheme,
    pub layout: SectionLayout,
}

impl SectionOptions {
    pub const fn new(theme: SectionTheme, layout: SectionLayout) -> Self {
        Self { theme, layout }
    }

    pub const fn light() -> Self {
        Self::new(SectionTheme::Light, SectionLayout::Centered)
    }

    pub const fn dark() -> Self {
        Self::new(SectionTheme::Dark, SectionLayout::Centered)
    }

    pub const fn split(self) -> Self {
        Self::new(self.theme, SectionLayout::Split)
    }

    /// CSS classes for the section element
    pub fn class(&self) -> &'static str {
        match (self.theme, self.layout) {
            (SectionTheme::Light, SectionLayout::Split) => "section section-light section-split",
            (SectionTheme::Light, SectionLayout::Centered) => {
                "section section-light section-centered"
            }
            (SectionTheme::Dark, SectionLayout::Split) => "section section-dark section-split",
            (SectionTheme::Dark, SectionLayout::Centered) => "section section-dark section-centered",
        }
    }
}

/// Section shell: anchor id, theme and layout classes, content container
#[component]
pub fn Section(
    id: &'static str,
    #[prop(optional)] options: SectionOptions,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class=options.class()>
            <div class="section-inner">{children()}</div>
        </section>
    }
}

/// Centered heading block with an optional eyebrow and lead
#[component]
fn SectionHeader(
    title: &'static str,
    #[prop(optional)] eyebrow: Option<&'static str>,
    #[prop(optional)] lead: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="section-header landing-scroll-animate">
            {eyebrow.map(|text| view! { <p class="section-eyebrow">{text}</p> })}
            <h2 class="section-title">{title}</h2>
            {lead.map(|text| view! { <p class="section-lead">{text}</p> })}
        </div>
    }
}

/// In-page navigation targets
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("#features", "Features"),
    ("#security", "Security"),
    ("#pricing", "Pricing"),
    ("#faq", "FAQ"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let waitlist = use_waitlist();
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <a href="#hero" class="navbar-logo">"FlowShot"</a>

                <div class="navbar-links">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| view! { <a href=*href class="navbar-link">{*label}</a> })
                        .collect_view()}
                </div>

                <button class="btn btn-primary navbar-cta" on:click=move |_| waitlist.open()>
                    "Try for free"
                </button>

                <button
                    class="navbar-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <Show
                        when=move || menu_open.get()
                        fallback=|| view! { <Icon name=icons::MENU/> }
                    >
                        <Icon name=icons::X/>
                    </Show>
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="navbar-mobile">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    href=*href
                                    class="navbar-mobile-link"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        class="btn btn-primary btn-block"
                        on:click=move |_| {
                            set_menu_open.set(false);
                            waitlist.open();
                        }
                    >
                        "Try for free"
                    </button>
                </div>
            </Show>
        </nav>
    }
}

#[component]
pub fn Hero(
    #[prop(default = SectionOptions::light().split())]
    options: SectionOptions,
) -> impl IntoView {
    let waitlist = use_waitlist();

    view! {
        <Section id="hero" options=options>
            <div class="hero-copy">
                <h1 class="hero-title landing-fade-in-up">
                    <span class="hero-title-line">"Workflow platform"</span>
                    <span class="hero-title-line hero-title-accent">"for photo & video projects"</span>
                </h1>
                <p class="hero-lead landing-fade-in-up landing-delay-200">
                    "FlowShot is ready out of the box. Everything's pre-configured for studios and solo creators."
                </p>
                <p class="hero-tagline landing-fade-in-up landing-delay-200">
                    "Skip the setup. Start creating."
                </p>
                <div class="hero-actions landing-fade-in-up landing-delay-400">
                    <button class="btn btn-primary btn-lg" on:click=move |_| waitlist.open()>
                        "Try FlowShot free"
                    </button>
                    <a href="#project-journey" class="btn btn-outline btn-lg">
                        <Icon name=icons::PLAY class="icon-text"/>
                        "See how it works"
                    </a>
                </div>
            </div>

            <div class="hero-visual landing-fade-in-up landing-delay-200">
                <AnimatedMockup/>
            </div>

            <a href="#problem-solution" class="hero-scroll-hint">
                <span>"Scroll to explore"</span>
                <Icon name=icons::ARROW_DOWN class="icon-text hero-scroll-arrow"/>
            </a>
        </Section>
    }
}

const PROBLEMS: [(&str, &str); 4] = [
    ("Lost in chats", "Scattered messages and links."),
    ("Spreadsheets everywhere", "Budgets split across sheets."),
    ("Templates that never fit", "Tried others. They didn't work."),
    ("Endless setup", "Copy. Rename. Repeat again."),
];

#[component]
pub fn ProblemSolution(#[prop(optional)] options: SectionOptions) -> impl IntoView {
    view! {
        <Section id="problem-solution" options=options>
            <div class="section-header landing-scroll-animate">
                <h2 class="section-title">
                    "We know the pain, so we built "
                    <span class="text-gradient">"FlowShot."</span>
                </h2>
            </div>
            <div class="problem-list">
                {PROBLEMS
                    .iter()
                    .enumerate()
                    .map(|(i, (title, description))| {
                        view! {
                            <div class="problem-item landing-scroll-animate" class:problem-item-reverse=i % 2 == 1>
                                <div class="problem-index">{format!("{:02}", i + 1)}</div>
                                <div class="problem-copy">
                                    <h3 class="problem-title">{*title}</h3>
                                    <p class="problem-description">{*description}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

const USE_CASES: [(&str, &str); 3] = [
    (
        "Studios",
        "Multi-brand, multi-member. One place for bookings, pricing, and status tracking.",
    ),
    (
        "Freelancers",
        "Ready-to-sell packages. Faster proposals. Less admin, more shooting.",
    ),
    (
        "Agencies",
        "Collaborate with subcontractors and clients. Share only what they need.",
    ),
];

#[component]
pub fn UseCases(#[prop(optional)] options: SectionOptions) -> impl IntoView {
    view! {
        <Section id="use-cases" options=options>
            <SectionHeader eyebrow="Who it's for" title="Built for studios and solo creators"/>
            <div class="card-grid card-grid-3">
                {USE_CASES
                    .iter()
                    .map(|(title, description)| {
                        view! {
                            <div class="card landing-scroll-animate">
                                <h3 class="card-title">{*title}</h3>
                                <p class="card-text">{*description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

const PILLARS: [(&str, &str); 3] = [
    (
        "Sales-ready Catalog",
        "Prebuilt templates and drag-and-drop packages. Adjust pricing once, reuse everywhere.",
    ),
    (
        "Operational Control",
        "Clear statuses, checklists, and audit logs keep projects moving.",
    ),
    (
        "Insights & Automation",
        "Learn from each job. Auto follow-ups. Fewer misses, more margin.",
    ),
];

#[component]
pub fn Features(#[prop(optional)] options: SectionOptions) -> impl IntoView {
    view! {
        <Section id="features" options=options>
            <SectionHeader eyebrow="Why FlowShot" title="Three pillars that power modern creative teams"/>
            <div class="card-grid card-grid-3">
                {PILLARS
                    .iter()
                    .enumerate()
                    .map(|(i, (title, description))| {
                        view! {
                            <div class="card pillar landing-scroll-animate">
                                <span class="pillar-number">{format!("{:02}", i + 1)}</span>
                                <h3 class="card-title">{*title}</h3>
                                <p class="card-text">{*description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="section-footnote landing-scroll-animate">
                "Built for teams who want to "
                <span class="text-accent">"move fast"</span>
                " and "
                <span class="text-accent">"stay organized"</span>
            </p>
        </Section>
    }
}

/// A headline number on the social proof strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub prefix: &'static str,
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

impl Metric {
    pub fn display(&self) -> String {
        format!("{}{}{}", self.prefix, self.value, self.suffix)
    }
}

pub const METRICS: [Metric; 3] = [
    Metric {
        prefix: "+",
        value: 32,
        suffix: "%",
        label: "Faster booking confirmations",
    },
    Metric {
        prefix: "-",
        value: 45,
        suffix: "%",
        label: "Less onboarding time",
    },
    Metric {
        prefix: "",
        value: 100,
        suffix: "+",
        label: "Studios using FlowShot",
    },
];

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
    location: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Finally ditched Notion and sheets. FlowShot keeps everything in sync.",
        author: "Chloe & Zac",
        role: "Wedding Studio",
        location: "Texas",
    },
    Testimonial {
        quote: "Our crew can see priorities change in real-time. No more \"did you get my text?\" chaos.",
        author: "Marcus Lee",
        role: "Commercial Production",
        location: "Los Angeles",
    },
    Testimonial {
        quote: "Multi-brand support is a game changer. We manage three studios in one FlowShot workspace.",
        author: "Sarah K.",
        role: "Freelancer Collective",
        location: "New York",
    },
];

#[component]
pub fn SocialProof(#[prop(optional)] options: SectionOptions) -> impl IntoView {
    view! {
        <Section id="social-proof" options=options>
            <SectionHeader
                title="Trusted by studios worldwide"
                lead="Real results from real production teams"
            />
            <div class="metrics">
                {METRICS
                    .iter()
                    .map(|metric| {
                        view! {
                            <div class="metric landing-scroll-animate">
                                <span class="metric-value">{metric.display()}</span>
                                <p class="metric-label">{metric.label}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="card-grid card-grid-3">
                {TESTIMONIALS
                    .iter()
                    .map(|t| {
                        view! {
                            <figure class="card testimonial landing-scroll-animate">
                                <Icon name=icons::QUOTE class="icon testimonial-mark"/>
                                <blockquote class="testimonial-quote">{format!("\"{}\"", t.quote)}</blockquote>
                                <figcaption class="testimonial-author">
                                    <span class="avatar">{initials(t.author)}</span>
                                    <span>
                                        <span class="testimonial-name">{t.author}</span>
                                        <span class="testimonial-role">{format!("{}, {}", t.role, t.location)}</span>
                                    </span>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

const SECURITY_FEATURES: [(&str, &str, &str); 4] = [
    (
        icons::SHIELD,
        "Firebase Infrastructure",
        "Built on Google Cloud with 99.9% uptime guarantee and enterprise-grade security.",
    ),
    (
        icons::LOCK,
        "Role-based Access",
        "Granular permissions control who sees what. Every action is logged and auditable.",
    ),
    (
        icons::FILE_CHECK,
        "GDPR & CCPA Compliant",
        "Data protection workflows built in. Your clients' privacy is our priority.",
    ),
    (
        icons::EYE,
        "Activity Tracking",
        "Full audit logs of project changes, file uploads, and team collaborations.",
    ),
];

const COMPLIANCE_BADGES: [&str; 4] = ["256-bit encryption", "SOC 2 Type I", "ISO 27001", "GDPR-ready"];

#[component]
pub fn Security(
    #[prop(default = SectionOptions::dark())]
    options: SectionOptions,
) -> impl IntoView {
    view! {
        <Section id="security" options=options>
            <div class="section-header landing-scroll-animate">
                <Icon name=icons::SHIELD class="icon-lg section-header-icon"/>
                <h2 class="section-title">"Privacy-first, without enterprise complexity"</h2>
            </div>
            <div class="card-grid card-grid-4">
                {SECURITY_FEATURES
                    .iter()
                    .map(|(icon, title, description)| {
                        view! {
                            <div class="card card-dark landing-scroll-animate">
                                <Icon name=*icon class="icon card-icon"/>
                                <h3 class="card-title">{*title}</h3>
                                <p class="card-text">{*description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="section-footnote landing-scroll-animate">
                "We encrypt your work, never sell your data, and you can export anytime."
            </p>
            <div class="badge-row">
                {COMPLIANCE_BADGES
                    .iter()
                    .map(|badge| view! { <span class="badge"><span class="badge-dot"></span>{*badge}</span> })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn Ethos(#[prop(optional)] options: SectionOptions) -> impl IntoView {
    view! {
        <Section id="ethos" options=options>
            <div class="section-header landing-scroll-animate">
                <h2 class="section-title">
                    <span class="text-gradient">"10 years"</span>
                    " in production, and still learning."
                </h2>
                <p class="section-lead">"Every creator's feedback shapes what FlowShot becomes next."</p>
            </div>
        </Section>
    }
}

pub const FOUNDER_NAME: &str = "Alex Ohnevskyi";
pub const FOUNDER_ROLE: &str = "Founder & Creative Director";
pub const FOUNDER_PHOTO: &str = "/images/founder.jpg";

/// Up to two uppercase initials, used where a photo is missing
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn FounderStory(
    #[prop(default = SectionOptions::light().split())]
    options: SectionOptions,
) -> impl IntoView {
    let photo = NodeRef::<html::Img>::new();
    let (photo_failed, set_photo_failed) = signal(false);

    // The load error can fire before hydration attaches the handler
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        if let Some(img) = photo.get() {
            if img.complete() && img.natural_width() == 0 {
                set_photo_failed.set(true);
            }
        }
    });

    view! {
        <Section id="story" options=options>
            <div class="story-copy landing-scroll-animate">
                <p class="section-eyebrow">"Our story"</p>
                <h2 class="section-title">"Built from 10 years of real creative chaos"</h2>
                <p>
                    "For over a decade, I've worked with dozens of regular clients, from large studios to solo videographers, "
                    "filming, editing, and managing projects across weddings, events, and commercials. "
                    "Many teams had no proper workflow. Projects got lost, deadlines slipped, and communication scattered across chats and spreadsheets."
                </p>
                <p>
                    "Over the years, I've collected everything that worked best from my clients, my own experience, and my team's insights, "
                    "and turned it into one streamlined system. FlowShot is built from 10 years of real creative practice: "
                    "simple, visual, and ready out of the box."
                </p>
                <p>
                    "Together with my team, led by me, "
                    <strong>{FOUNDER_NAME}</strong>
                    ", we built the tool we always needed, so you can focus on creating, not managing chaos."
                </p>
                <ul class="story-points">
                    <li><Icon name=icons::CHECK class="icon-text"/>"10+ years experience"</li>
                    <li><Icon name=icons::CHECK class="icon-text"/>"3,000+ weddings edited worldwide"</li>
                    <li><Icon name=icons::CHECK class="icon-text"/>"Built by creators, trusted by pros"</li>
                </ul>
            </div>

            <figure class="story-visual landing-scroll-animate">
                <div class="story-photo">
                    <Show
                        when=move || !photo_failed.get()
                        fallback=|| view! {
                            <div class="story-photo-fallback" aria-hidden="true">{initials(FOUNDER_NAME)}</div>
                        }
                    >
                        <img
                            node_ref=photo
                            src=FOUNDER_PHOTO
                            alt=format!("{} - {}", FOUNDER_NAME, FOUNDER_ROLE)
                            on:error=move |_| set_photo_failed.set(true)
                        />
                    </Show>
                </div>
                <figcaption class="story-caption">
                    <span class="story-name">{FOUNDER_NAME}</span>
                    <span class="story-role">{FOUNDER_ROLE}</span>
                </figcaption>
            </figure>
        </Section>
    }
}

#[component]
pub fn Pricing(#[prop(optional)] options: SectionOptions) -> impl IntoView {
    let waitlist = use_waitlist();

    view! {
        <Section id="pricing" options=options>
            <div class="section-header landing-scroll-animate">
                <h2 class="section-title">
                    "FlowShot is currently "
                    <span class="text-gradient">"free"</span>
                </h2>
            </div>

            <div class="pricing-card landing-scroll-animate">
                <h3 class="pricing-plan">"Beta Access"</h3>
                <p class="pricing-plan-note">"Free for early adopters"</p>
                <div class="pricing-price">
                    <span class="pricing-amount">"$0"</span>
                    <span class="pricing-period">"/forever"</span>
                </div>
                <p class="pricing-plan-note">"During beta phase"</p>
                <div class="pricing-copy">
                    <p>"We're building FlowShot together with creators like you."</p>
                    <p>"All features are unlocked. No limits, no credit card."</p>
                    <p>"If you'd like to support the project, you can donate anytime."</p>
                    <p class="pricing-future">
                        "In the future, we'll announce fair pricing: transparent, affordable, and built for creators."
                    </p>
                </div>
                <button class="btn btn-primary btn-lg btn-block" on:click=move |_| waitlist.open()>
                    "Get Started Free"
                </button>
            </div>

            <p class="section-footnote">"No credit card required • Cancel anytime • Full data export"</p>
        </Section>
    }
}

pub const FAQS: [(&str, &str); 5] = [
    (
        "Can FlowShot support only photo or only video?",
        "Yes! FlowShot is designed to handle both photo and video workflows separately or together. You can customize your catalog, pipeline stages, and team roles to match your specific production type.",
    ),
    (
        "How do I invite freelancers and crew members?",
        "Use invite mode with granular permissions. You can assign roles (Editor, Coordinator, Viewer) and control what each team member can see and edit. Invites are sent via email, and members can join your workspace instantly.",
    ),
    (
        "How does billing work?",
        "FlowShot offers simple per-organization pricing with unlimited users. You pay for each studio or brand workspace you create. Contact our team to discuss custom pricing for larger collectives or enterprise needs.",
    ),
    (
        "Can we track revisions and approval trails?",
        "Yes! FlowShot includes revision tracking and approval history on every project. See who changed what and when, with in-thread approvals that keep your entire team on the same page.",
    ),
    ("What happens if we cancel?", "You can export your data anytime."),
];

/// FAQ accordion; at most one answer is open
#[component]
pub fn Faq(#[prop(optional)] options: SectionOptions) -> impl IntoView {
    let open_item = RwSignal::new(None::<usize>);

    view! {
        <Section id="faq" options=options>
            <SectionHeader
                title="Questions? We have answers."
                lead="Everything you need to know about FlowShot"
            />
            <div class="faq-list">
                {FAQS
                    .iter()
                    .enumerate()
                    .map(|(index, (question, answer))| {
                        view! { <FaqItem index=index question=*question answer=*answer open_item=open_item/> }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn FaqItem(
    index: usize,
    question: &'static str,
    answer: &'static str,
    open_item: RwSignal<Option<usize>>,
) -> impl IntoView {
    let is_open = move || open_item.get() == Some(index);
    let toggle = move |_| {
        open_item.update(|open| *open = if *open == Some(index) { None } else { Some(index) })
    };
    let panel_id = format!("faq-panel-{}", index);

    view! {
        <div class="faq-item landing-scroll-animate" class:faq-item-open=is_open>
            <button
                class="faq-trigger"
                on:click=toggle
                aria-expanded=move || is_open().to_string()
                aria-controls=panel_id.clone()
            >
                <span class="faq-question">{question}</span>
                <Icon name=icons::CHEVRON_DOWN class="icon faq-chevron"/>
            </button>
            <div id=panel_id class="faq-panel" role="region" hidden=move || !is_open()>
                <p class="faq-answer">{answer}</p>
            </div>
        </div>
    }
}

#[component]
pub fn FinalCta(
    #[prop(default = SectionOptions::dark())]
    options: SectionOptions,
) -> impl IntoView {
    let waitlist = use_waitlist();

    view! {
        <Section id="cta" options=options>
            <div class="cta-orbs" aria-hidden="true">
                <span class="cta-orb cta-orb-1"></span>
                <span class="cta-orb cta-orb-2"></span>
                <span class="cta-orb cta-orb-3"></span>
            </div>
            <div class="section-header landing-scroll-animate">
                <h2 class="section-title">"Ready to orchestrate your studio?"</h2>
                <p class="section-lead">"Join 100+ teams already using FlowShot. Free onboarding included."</p>
            </div>
            <div class="cta-actions landing-scroll-animate">
                <button class="btn btn-light btn-lg" on:click=move |_| waitlist.open()>
                    "Try for free"
                </button>
                <a href="#project-journey" class="btn btn-outline-light btn-lg">
                    <Icon name=icons::PLAY class="icon-text"/>
                    "See how it works"
                </a>
            </div>
            <p class="cta-note">
                <Icon name=icons::LOCK class="icon-text"/>
                <span>"Cancel anytime • Export data"</span>
            </p>
        </Section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer class="footer">
            <p>{format!("© {} FlowShot. All rights reserved.", year)}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_classes() {
        assert_eq!(SectionOptions::default().class(), "section section-light section-centered");
        assert_eq!(SectionOptions::dark().class(), "section section-dark section-centered");
        assert_eq!(SectionOptions::light().split().class(), "section section-light section-split");
        assert_eq!(SectionOptions::dark().split().class(), "section section-dark section-split");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Alex Ohnevskyi"), "AO");
        assert_eq!(initials("Chloe & Zac"), "CZ");
        assert_eq!(initials("Sarah K."), "SK");
        assert_eq!(initials("marcus"), "M");
        assert_eq!(initials("   "), "");
    }

    #[test]
    fn test_metric_display() {
        assert_eq!(METRICS[0].display(), "+32%");
        assert_eq!(METRICS[1].display(), "-45%");
        assert_eq!(METRICS[2].display(), "100+");
    }

    #[test]
    fn test_nav_links_target_sitemap_anchors() {
        for (href, _) in NAV_LINKS {
            let listed = crate::core::seo::SITEMAP_ENTRIES
                .iter()
                .any(|entry| entry.path.strip_prefix('/') == Some(href));
            assert!(listed, "{} is not in the sitemap", href);
        }
    }
}
