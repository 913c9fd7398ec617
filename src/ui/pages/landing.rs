//! Landing page component
//!
//! Single-page marketing site for QueryIO featuring:
//! - SEO meta tags
//! - Sticky navbar with scroll-aware styling and section highlighting
//! - Hero with waitlist form and dashboard preview
//! - Features, comparison, how it works, pricing and FAQ sections
//! - Final call-to-action and footer

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::ui::common::{Badge, Button, ButtonVariant, Section};
use crate::ui::icon::{Icon, icons};
use crate::ui::navbar::Navbar;

/// Landing page
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="min-h-screen bg-[#0B0D10] text-white/90 selection:bg-white/20">
            <Navbar />
            <Hero />
            <SocialProof />
            <FeaturesSection />
            <ComparisonSection />
            <HowItWorksSection />
            <PricingSection />
            <FaqSection />
            <FinalCta />
            <Footer />
        </div>
    }
}

/// SEO meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="QueryIO - Ask your database in plain English" />

        <Meta name="description" content="QueryIO converts natural language into safe, readable SQL for Postgres & MySQL, so anyone can get answers without writing queries." />
        <Meta name="keywords" content="natural language to SQL, text to SQL, Postgres, MySQL, SQL generator, read-only analytics" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://queryio.dev/" />
        <Meta property="og:title" content="QueryIO - Ask your database in plain English" />
        <Meta property="og:description" content="Natural language to safe, readable SQL for Postgres & MySQL." />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:title" content="QueryIO - Ask your database in plain English" />
        <Meta property="twitter:description" content="Natural language to safe, readable SQL for Postgres & MySQL." />

        <Link rel="canonical" href="https://queryio.dev/" />
    }
}

/// Hero section with headline, waitlist form and product preview
#[component]
fn Hero() -> impl IntoView {
    view! {
        <div class="relative pt-32 pb-20 md:pt-48 md:pb-32 px-6 max-w-7xl mx-auto grid lg:grid-cols-2 gap-12 items-center">
            // Background gradient
            <div class="absolute top-0 left-1/2 -translate-x-1/2 w-[1000px] h-[500px] bg-blue-500/20 opacity-20 blur-[120px] rounded-full pointer-events-none" aria-hidden="true"></div>

            <div class="relative z-10">
                <Badge>"Coming Soon • Early Access"</Badge>
                <h1 class="text-5xl md:text-7xl font-bold tracking-tight leading-[1.1] mb-6">
                    "Ask your database in "
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-white to-white/50">
                        "plain English."
                    </span>
                </h1>
                <p class="text-lg md:text-xl text-white/60 mb-8 max-w-lg leading-relaxed">
                    "QueryIO converts natural language into safe, readable SQL for Postgres & MySQL, so anyone can get answers without writing queries."
                </p>

                <div class="flex flex-col sm:flex-row gap-4 mb-6">
                    <WaitlistForm inline=true />
                </div>
                <div class="flex items-center gap-4 text-xs text-white/40 uppercase tracking-wide font-medium">
                    <span>"Built for Postgres & MySQL"</span>
                    <span class="w-1 h-1 bg-white/40 rounded-full"></span>
                    <span>"No Spam"</span>
                </div>
            </div>

            <DashboardPreview />
        </div>
    }
}

/// Email capture form; rendered only, nothing is submitted
#[component]
fn WaitlistForm(
    /// Joined input + button (hero) instead of stacked (final CTA)
    inline: bool,
) -> impl IntoView {
    let (form_class, input_class) = if inline {
        (
            "flex w-full max-w-md relative group",
            "w-full bg-[#10141A] border border-white/10 rounded-l-lg px-4 py-3 focus:outline-none \
             focus:border-white/30 text-white placeholder:text-white/40 transition-all",
        )
    } else {
        (
            "flex flex-col sm:flex-row gap-3 max-w-md mx-auto",
            "flex-1 bg-[#10141A] border border-white/20 rounded-lg px-4 py-3 focus:outline-none \
             focus:border-white text-white placeholder:text-white/40",
        )
    };

    view! {
        <form class=form_class on:submit=move |ev| ev.prevent_default()>
            <input type="email" placeholder="Enter your email" aria-label="Email address" class=input_class />
            {if inline {
                view! {
                    <button
                        type="submit"
                        class="bg-white text-black px-6 py-3 rounded-r-lg font-medium hover:bg-gray-200 transition-colors whitespace-nowrap"
                    >
                        "Join Waitlist"
                    </button>
                }.into_any()
            } else {
                view! {
                    <Button variant=ButtonVariant::Primary button_type="submit">
                        "Join Waitlist"
                    </Button>
                }.into_any()
            }}
        </form>
    }
}

/// Mock dashboard window showing a question and its generated SQL
#[component]
fn DashboardPreview() -> impl IntoView {
    view! {
        <div class="relative z-10 bg-[#10141A] border border-white/10 rounded-xl overflow-hidden shadow-2xl shadow-blue-900/10">
            <div class="bg-[#0B0D10] px-4 py-3 border-b border-white/10 flex items-center gap-2">
                <div class="flex gap-1.5" aria-hidden="true">
                    <div class="w-3 h-3 rounded-full bg-red-500/20 border border-red-500/50"></div>
                    <div class="w-3 h-3 rounded-full bg-yellow-500/20 border border-yellow-500/50"></div>
                    <div class="w-3 h-3 rounded-full bg-green-500/20 border border-green-500/50"></div>
                </div>
                <div class="ml-4 text-xs text-white/30 font-mono">"QueryIO Dashboard"</div>
            </div>

            <div class="p-6 space-y-6">
                <div class="flex items-start gap-3">
                    <div class="w-8 h-8 rounded-full bg-blue-500/20 flex items-center justify-center">
                        <Icon name=icons::DATABASE class="w-4 h-4" />
                    </div>
                    <div class="bg-[#1C2029] p-4 rounded-lg rounded-tl-none border border-white/5 text-sm md:text-base">
                        "What were revenue and churn last 30 days?"
                    </div>
                </div>

                <div class="border border-white/10 rounded-lg p-4 bg-black/20">
                    <div class="flex items-center justify-between mb-2">
                        <span class="text-xs text-green-400 font-mono flex items-center gap-1">
                            <Icon name=icons::CHECK class="w-3 h-3" />
                            "Generated SQL"
                        </span>
                        <span class="text-xs text-white/30">"Read-only mode"</span>
                    </div>
                    <pre class="font-mono text-xs md:text-sm text-white/70 overflow-x-auto">
                        <span class="text-purple-400">"SELECT"</span>" SUM(amount) as revenue,"<br />
                        "COUNT(id) as churn"<br />
                        <span class="text-purple-400">"FROM"</span>" subscriptions"<br />
                        <span class="text-purple-400">"WHERE"</span>" status = 'cancelled'"<br />
                        <span class="text-purple-400">"AND"</span>" date > NOW() - INTERVAL '30 days';"
                    </pre>
                </div>

                // Blurred results table
                <div class="space-y-2 opacity-50 blur-[2px]" aria-hidden="true">
                    <div class="h-8 bg-white/5 rounded w-full"></div>
                    <div class="h-8 bg-white/5 rounded w-full"></div>
                    <div class="h-8 bg-white/5 rounded w-3/4"></div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SocialProof() -> impl IntoView {
    view! {
        <div class="border-y border-white/5 bg-white/[0.02]">
            <div class="max-w-7xl mx-auto px-6 py-12 text-center">
                <p class="text-sm text-white/40 mb-8 font-medium">"TRUSTED BY TEAMS FROM"</p>
                // Placeholders until customer logos are available
                <div class="flex flex-wrap justify-center gap-8 md:gap-16 grayscale opacity-40" aria-hidden="true">
                    {(0..5)
                        .map(|_| view! { <div class="h-8 w-24 bg-white/20 rounded animate-pulse"></div> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Feature grid entries: icon, title, description
const FEATURES: [(&str, &str, &str); 6] = [
    (
        icons::CODE,
        "Natural Language → SQL",
        "Type in English, get production-ready SQL you can inspect before running.",
    ),
    (
        icons::SHIELD_CHECK,
        "Safer by Default",
        "Read-only connections, row limits, and guardrails to prevent heavy loads.",
    ),
    (
        icons::LAYOUT,
        "Saved Insights",
        "Save complex queries as dashboard widgets to share with your team.",
    ),
    (
        icons::DATABASE,
        "Postgres & MySQL",
        "Native support for the world's most popular relational databases.",
    ),
    (
        icons::ZAP,
        "Schema Aware",
        "QueryIO reads your schema structure (not your data) to understand relationships.",
    ),
    (
        icons::CHEVRON_RIGHT,
        "Export in One Click",
        "Download results to CSV or JSON instantly for further analysis.",
    ),
];

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <Section id="features">
            <div class="text-center max-w-2xl mx-auto mb-16">
                <h2 class="text-3xl md:text-5xl font-bold tracking-tight mb-4">
                    "Get answers fast."<br />"Keep control."
                </h2>
                <p class="text-white/60 text-lg">
                    "QueryIO helps you explore data safely without becoming a SQL expert."
                </p>
            </div>

            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                {FEATURES
                    .into_iter()
                    .map(|(icon, title, description)| {
                        view! { <FeatureCard icon=icon title=title description=description /> }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-[#10141A] border border-white/10 p-8 rounded-2xl hover:border-white/20 transition-all group">
            <div class="w-10 h-10 rounded-lg bg-white/5 flex items-center justify-center mb-6 group-hover:scale-110 transition-transform">
                <Icon name=icon class="w-5 h-5" />
            </div>
            <h3 class="text-xl font-bold mb-3">{title}</h3>
            <p class="text-white/60 leading-relaxed">{description}</p>
        </div>
    }
}

const TYPICAL_APPROACH: [&str; 4] = [
    "Wait days for an analyst ticket",
    "Copy/paste unverified SQL from ChatGPT",
    "Accidentally run DELETE queries",
    "Hard to trust or verify results",
];

const QUERYIO_WAY: [&str; 4] = [
    "Ask in plain English, get instant answers",
    "Readable SQL + explanations included",
    "Guardrails enforce read-only access",
    "Save & reuse questions safely",
];

/// Side-by-side "typical approach" vs "QueryIO way" panel
#[component]
fn ComparisonSection() -> impl IntoView {
    view! {
        <Section class="bg-gradient-to-b from-[#0B0D10] to-[#10141A] rounded-3xl border border-white/5">
            <div class="grid md:grid-cols-2 gap-12">
                <div class="p-8 rounded-2xl bg-red-500/5 border border-red-500/10">
                    <h3 class="text-xl font-bold mb-6 text-red-400">"Typical Approach"</h3>
                    <ul class="space-y-4">
                        {TYPICAL_APPROACH
                            .into_iter()
                            .map(|item| view! {
                                <li class="flex items-center gap-3 text-white/60">
                                    <Icon name=icons::X class="w-[18px] h-[18px] shrink-0" />
                                    {item}
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="p-8 rounded-2xl bg-blue-500/5 border border-blue-500/20 relative overflow-hidden">
                    <div class="absolute top-0 right-0 px-3 py-1 bg-blue-500 text-xs font-bold uppercase text-white rounded-bl-lg">
                        "With QueryIO"
                    </div>
                    <h3 class="text-xl font-bold mb-6 text-blue-400">"The QueryIO Way"</h3>
                    <ul class="space-y-4">
                        {QUERYIO_WAY
                            .into_iter()
                            .map(|item| view! {
                                <li class="flex items-center gap-3 text-white">
                                    <Icon name=icons::CHECK class="w-[18px] h-[18px] shrink-0" />
                                    {item}
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
            <div class="text-center mt-8 text-white/40 text-sm">
                "Built for teams that want speed without breaking production."
            </div>
        </Section>
    }
}

const STEPS: [(&str, &str, &str); 3] = [
    ("01", "Connect", "Securely connect your database using read-only credentials."),
    ("02", "Ask", "Type your question in plain English. We handle the complex joins."),
    ("03", "Review", "Verify the generated SQL, view results, and save the insight."),
];

#[component]
fn HowItWorksSection() -> impl IntoView {
    view! {
        <Section id="how-it-works">
            <div class="grid md:grid-cols-3 gap-8 text-center">
                {STEPS
                    .into_iter()
                    .map(|(step, title, description)| view! {
                        <div class="relative">
                            <div class="text-6xl font-bold text-white/[0.03] absolute top-0 left-1/2 -translate-x-1/2 -translate-y-4 select-none" aria-hidden="true">
                                {step}
                            </div>
                            <div class="relative z-10 pt-8">
                                <h3 class="text-xl font-bold mb-2">{title}</h3>
                                <p class="text-white/60">{description}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn PricingSection() -> impl IntoView {
    view! {
        <Section id="pricing">
            <div class="text-center mb-16">
                <h2 class="text-3xl md:text-5xl font-bold tracking-tight mb-4">"Simple plans for teams"</h2>
                <p class="text-white/60 text-lg">"Start for free, upgrade as you scale."</p>
            </div>

            <div class="grid md:grid-cols-3 gap-8 max-w-6xl mx-auto">
                <PricingCard
                    name="Basic"
                    price="Free"
                    description="Best for hobbyists."
                    features=vec!["1 Database Connection", "50 Queries / mo"]
                    cta_text="Join Waitlist"
                    highlighted=false
                />
                <PricingCard
                    name="Standard"
                    price="$29"
                    period="/mo"
                    description="For growing startups."
                    features=vec![
                        "5 Database Connections",
                        "Unlimited Queries",
                        "Save & Share Dashboards",
                    ]
                    cta_text="Get Early Access"
                    highlighted=true
                />
                <PricingCard
                    name="Pro"
                    price="Custom"
                    description="For enterprise security."
                    features=vec!["SSO & Audit Logs", "On-premise deployment"]
                    cta_text="Talk to us"
                    highlighted=false
                />
            </div>
        </Section>
    }
}

#[component]
fn PricingCard(
    name: &'static str,
    price: &'static str,
    #[prop(optional)] period: Option<&'static str>,
    description: &'static str,
    features: Vec<&'static str>,
    cta_text: &'static str,
    highlighted: bool,
) -> impl IntoView {
    let card_class = if highlighted {
        "p-8 rounded-2xl bg-[#151921] border border-white/20 relative shadow-2xl flex flex-col transform md:-translate-y-4"
    } else {
        "p-8 rounded-2xl bg-[#0B0D10] border border-white/10 flex flex-col"
    };
    let name_class = if highlighted {
        "text-blue-400 font-medium mb-4 mt-2"
    } else {
        "text-white/60 font-medium mb-4"
    };
    let feature_class = if highlighted {
        "flex gap-2 text-sm text-white"
    } else {
        "flex gap-2 text-sm text-white/70"
    };
    let variant = if highlighted {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    };

    view! {
        <div class=card_class>
            {highlighted.then(|| view! {
                <div class="absolute top-0 left-1/2 -translate-x-1/2 bg-white text-black px-3 py-1 rounded-b-lg text-xs font-bold uppercase tracking-wide">
                    "Most Popular"
                </div>
            })}
            <div class=name_class>{name}</div>
            <div class="text-4xl font-bold mb-2">
                {price}
                {period.map(|period| view! { <span class="text-lg text-white/40 font-normal">{period}</span> })}
            </div>
            <p class="text-sm text-white/40 mb-8">{description}</p>
            <ul class="space-y-3 mb-8 flex-1">
                {features
                    .into_iter()
                    .map(|feature| view! {
                        <li class=feature_class>
                            <Icon name=icons::CHECK class="w-4 h-4" />
                            {feature}
                        </li>
                    })
                    .collect_view()}
            </ul>
            <Button variant=variant class="w-full">{cta_text}</Button>
        </div>
    }
}

const FAQS: [(&str, &str); 4] = [
    (
        "Is it safe to connect my database?",
        "Yes. QueryIO connects using Read-Only credentials that you provide. We cannot modify or delete your data.",
    ),
    (
        "Do you store my data?",
        "No. We only store your schema structure (table names, column types) to generate accurate queries. Your actual row data passes through to your browser and is not persisted.",
    ),
    (
        "Which databases are supported?",
        "We currently support Postgres and MySQL. Support for Snowflake and BigQuery is coming soon.",
    ),
    (
        "How accurate is the SQL generation?",
        "We use advanced LLMs fine-tuned on SQL dialects. However, we always show you the generated SQL for review before execution.",
    ),
];

#[component]
fn FaqSection() -> impl IntoView {
    view! {
        <Section id="faq" class="max-w-3xl">
            <h2 class="text-3xl font-bold text-center mb-12">"Frequently Asked Questions"</h2>
            <div class="space-y-4">
                {FAQS
                    .into_iter()
                    .map(|(question, answer)| view! { <FaqItem question=question answer=answer /> })
                    .collect_view()}
            </div>
        </Section>
    }
}

/// FAQ accordion item
#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    view! {
        <div class="border border-white/10 rounded-lg bg-[#10141A] overflow-hidden">
            <button
                class="w-full flex justify-between items-center p-6 cursor-pointer text-left"
                on:click=move |_| set_is_open.update(|v| *v = !*v)
                aria-expanded=move || is_open.get().to_string()
            >
                <span class="font-medium text-white/90">{question}</span>
                <div
                    class="flex items-center justify-center w-5 h-5 shrink-0 opacity-40 transition-transform duration-300"
                    class=("rotate-180", move || is_open.get())
                >
                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5" />
                </div>
            </button>
            <Show when=move || is_open.get()>
                <div class="px-6 pb-6 text-white/60 leading-relaxed border-t border-white/5 pt-4">
                    {answer}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn FinalCta() -> impl IntoView {
    view! {
        <div class="py-24 px-6 text-center relative overflow-hidden">
            <div class="absolute inset-0 bg-blue-600/5 blur-3xl pointer-events-none" aria-hidden="true"></div>
            <div class="relative z-10 max-w-2xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold mb-6">"Get early access to QueryIO."</h2>
                <p class="text-xl text-white/60 mb-10">
                    "Join the waitlist and be first to try natural language SQL with guardrails."
                </p>
                <WaitlistForm inline=false />
                <p class="mt-4 text-xs text-white/30">"No spam. Unsubscribe anytime."</p>
            </div>
        </div>
    }
}

const FOOTER_COLUMNS: [(&str, [&str; 4]); 2] = [
    ("Product", ["Features", "Pricing", "Changelog", "Docs"]),
    ("Company", ["About", "Blog", "Contact", "Privacy"]),
];

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-white/10 bg-[#050608] pt-16 pb-8 px-6">
            <div class="max-w-7xl mx-auto grid md:grid-cols-4 gap-12 mb-12">
                // Brand
                <div class="col-span-1 md:col-span-2">
                    <div class="flex items-center gap-2 font-bold text-xl mb-4">
                        <div class="w-6 h-6 bg-white rounded-md flex items-center justify-center text-black text-xs">"Q"</div>
                        "QueryIO"
                    </div>
                    <p class="text-white/40 max-w-xs">
                        "Making databases accessible to everyone through natural language. Safe, secure, and fast."
                    </p>
                </div>

                {FOOTER_COLUMNS
                    .into_iter()
                    .map(|(heading, links)| view! {
                        <div>
                            <h4 class="font-bold mb-4">{heading}</h4>
                            <ul class="space-y-2 text-sm text-white/60">
                                {links
                                    .into_iter()
                                    .map(|link| view! {
                                        <li><a href="#" class="hover:text-white">{link}</a></li>
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()}
            </div>

            // Bottom bar
            <div class="max-w-7xl mx-auto border-t border-white/10 pt-8 flex flex-col md:flex-row justify-between items-center text-xs text-white/30">
                <p>"© 2024 QueryIO Inc. All rights reserved."</p>
                <div class="flex gap-4 mt-4 md:mt-0">
                    <a href="#">"Twitter"</a>
                    <a href="#">"GitHub"</a>
                    <a href="#">"LinkedIn"</a>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_SECTIONS;

    #[cfg(feature = "ssr")]
    fn render_landing_page() -> String {
        let owner = Owner::new();
        owner.with(|| {
            leptos_meta::provide_meta_context();
            let (server_meta, _output) = leptos_meta::ServerMetaContext::new();
            provide_context(server_meta);
            view! { <LandingPage /> }.to_html()
        })
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_each_registered_section_is_rendered_exactly_once() {
        let html = render_landing_page();

        for id in DEFAULT_SECTIONS {
            let anchor = format!("id=\"{}\"", id);
            assert_eq!(
                html.matches(anchor.as_str()).count(),
                1,
                "section '{}' should have exactly one anchor target",
                id
            );
        }
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_desktop_links_point_at_registered_sections() {
        let html = render_landing_page();

        for id in DEFAULT_SECTIONS {
            let href = format!("href=\"#{}\"", id);
            assert!(html.contains(href.as_str()), "missing nav link to '{}'", id);
        }
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_mobile_overlay_starts_closed() {
        let html = render_landing_page();

        // Only the desktop links are rendered until the menu is toggled
        assert_eq!(html.matches("href=\"#faq\"").count(), 1);
        assert!(html.contains("aria-expanded=\"false\""));
    }

    #[test]
    fn test_comparison_columns_are_balanced() {
        assert_eq!(TYPICAL_APPROACH.len(), QUERYIO_WAY.len());
    }

    #[test]
    fn test_steps_are_numbered_in_order() {
        let numbers: Vec<&str> = STEPS.iter().map(|(step, _, _)| *step).collect();
        assert_eq!(numbers, vec!["01", "02", "03"]);
    }
}
