// src/page.rs
use std::rc::Rc;

use yew::prelude::*;

use crate::components::{Badge, Section, Stars};
use crate::content::{
    About as AboutContent, Brand, Contact as ContactContent, Faq as FaqContent,
    Footer as FooterContent, Hero as HeroContent, Highlight, Services as ServicesContent,
    SiteContent, Testimonials as TestimonialsContent,
};
use crate::icons::{Icon, IconKind};

pub const DISABLED_FORM_NOTICE: &str =
    "Contact form is disabled — add your Formspree endpoint in the content above to enable it.";

const BLUE_BUTTON: &str = "rounded-xl px-5 py-3 bg-[#0057A7] text-white";
const RED_OUTLINE_BUTTON: &str =
    "rounded-xl px-5 py-3 border inline-flex items-center gap-2 border-[#ED1C24] text-[#ED1C24]";
const CARD: &str = "p-6 rounded-3xl border border-[#0B1F3A]/10";
const SECTION_TITLE: &str = "text-3xl md:text-4xl font-bold";

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let c = &props.content;

    html! {
      <div class="min-h-screen bg-white text-gray-900">
        <Nav brand={c.brand.clone()} />
        <header class="relative">
          <Hero brand={c.brand.clone()} hero={c.hero.clone()} highlights={c.highlights.clone()} />
        </header>
        <About about={c.about.clone()} />
        <Services services={c.services.clone()} />
        <Testimonials testimonials={c.testimonials.clone()} />
        <Faq faq={c.faq.clone()} />
        <Contact contact={c.contact.clone()} brand={c.brand.clone()} />
        <SiteFooter footer={c.footer.clone()} />
      </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: Brand,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let b = &props.brand;

    html! {
      <nav class="sticky top-0 z-20 bg-white/80 backdrop-blur border-b border-[#0057A7]">
        <div class="max-w-6xl mx-auto flex items-center justify-between px-6 md:px-10 h-16">
          <div class="font-bold text-lg text-[#ED1C24]">{ b.logo_text.clone() }</div>
          <div class="hidden md:flex items-center gap-6 text-sm">
            <a href="#about" class="hover:text-[#ED1C24]">{ "About" }</a>
            <a href="#services" class="hover:text-[#ED1C24]">{ "Services" }</a>
            <a href="#contact" class="hover:text-[#ED1C24]">{ "Contact" }</a>
          </div>
          <div class="flex items-center gap-2">
            <a href={b.cta_secondary.href.clone()}
               class="hidden sm:inline-block border rounded-xl px-3 py-2 text-sm border-[#ED1C24] text-[#ED1C24]">
              { b.cta_secondary.label.clone() }
            </a>
            <a href={b.cta_primary.href.clone()}
               class="inline-flex items-center gap-1 rounded-xl px-4 py-2 text-sm bg-[#0057A7] text-white">
              { b.cta_primary.label.clone() }
              <Icon kind={IconKind::ChevronRight} class="w-4 h-4" />
            </a>
          </div>
        </div>
      </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub brand: Brand,
    pub hero: HeroContent,
    pub highlights: Vec<Highlight>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let b = &props.brand;
    let h = &props.hero;

    html! {
      <Section id="home" class="py-16 md:py-24 grid md:grid-cols-2 gap-10 items-center">
        <div>
          <Badge>{ h.badge.clone() }</Badge>
          <h1 class="mt-4 text-4xl md:text-5xl font-bold leading-tight text-[#0057A7]">{ h.headline.clone() }</h1>
          <p class="mt-4 text-gray-600 md:text-lg">{ h.sub.clone() }</p>
          <div class="mt-6 flex gap-3">
            <a href={b.cta_primary.href.clone()} class={BLUE_BUTTON}>{ b.cta_primary.label.clone() }</a>
            <a href={b.cta_secondary.href.clone()} class={RED_OUTLINE_BUTTON}>
              <Icon kind={IconKind::MessageCircle} class="w-4 h-4" />
              { b.cta_secondary.label.clone() }
            </a>
          </div>
          <div class="mt-8 grid grid-cols-3 gap-4">
            { for props.highlights.iter().enumerate().map(|(i, f)| html! {
                <div key={i} class="highlight p-4 rounded-2xl border border-[#0B1F3A]/10">
                  <div class="font-medium text-[#0057A7]">{ f.title.clone() }</div>
                  <div class="text-sm text-gray-600 mt-1">{ f.desc.clone() }</div>
                </div>
            }) }
          </div>
        </div>
        <div>
          <img src={h.image.clone()} alt="Hero"
               class="w-full h-80 md:h-[28rem] object-cover rounded-3xl shadow ring-4 ring-[#ED1C24]/10" />
        </div>
      </Section>
    }
}

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub about: AboutContent,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let a = &props.about;

    html! {
      <Section id="about" class="py-16 md:py-24 grid md:grid-cols-2 gap-10 items-center">
        <div>
          <img src={a.image.clone()} alt="About" class="w-full h-72 md:h-96 object-cover rounded-3xl shadow" />
        </div>
        <div>
          <h2 class={SECTION_TITLE}>{ a.title.clone() }</h2>
          <p class="mt-4 text-gray-700 leading-relaxed">{ a.body.clone() }</p>
          <div class="mt-6">
            <a href="#services" class="inline-block rounded-xl px-5 py-3 border border-[#0057A7] text-[#0057A7]">
              { "Discover services" }
            </a>
          </div>
        </div>
      </Section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub services: ServicesContent,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let s = &props.services;

    html! {
      <Section id="services" class="py-16 md:py-24">
        <h2 class={classes!(SECTION_TITLE, "text-center")}>{ s.title.clone() }</h2>
        <div class="mt-10 grid md:grid-cols-3 gap-6">
          { for s.items.iter().enumerate().map(|(i, item)| html! {
              <div key={i} class={classes!("service", CARD, "h-full", "flex", "flex-col")}>
                <h3 class="text-xl font-semibold">{ item.title.clone() }</h3>
                <p class="mt-2 text-gray-600">{ item.desc.clone() }</p>
                <ul class="mt-4 space-y-2 text-sm text-gray-700 list-disc pl-5">
                  { for item.bullet.iter().enumerate().map(|(j, b)| html! {
                      <li key={j}>{ b.clone() }</li>
                  }) }
                </ul>
                <div class="mt-6">
                  <a href="#contact" class="inline-block rounded-xl px-4 py-2 border border-[#0057A7] text-[#0057A7]">
                    { format!("Ask about {}", item.title) }
                  </a>
                </div>
              </div>
          }) }
        </div>
      </Section>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub testimonials: TestimonialsContent,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let t = &props.testimonials;

    html! {
      <Section id="testimonials" class="py-16 md:py-24 bg-gray-50 rounded-3xl">
        <h2 class={classes!(SECTION_TITLE, "text-center")}>{ t.title.clone() }</h2>
        <div class="mt-10 grid md:grid-cols-2 gap-6">
          { for t.items.iter().enumerate().map(|(i, item)| html! {
              <div key={i} class={classes!("testimonial", CARD, "bg-white")}>
                <Stars n={item.rating} />
                <p class="mt-3 text-gray-800">{ format!("“{}”", item.text) }</p>
                <div class="mt-3 text-sm text-gray-600">{ format!("— {}", item.name) }</div>
              </div>
          }) }
        </div>
      </Section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub faq: FaqContent,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let f = &props.faq;

    html! {
      <Section id="faq" class="py-16 md:py-24">
        <h2 class={classes!(SECTION_TITLE, "text-center")}>{ f.title.clone() }</h2>
        <div class="mt-10 grid md:grid-cols-2 gap-6">
          { for f.items.iter().enumerate().map(|(i, entry)| html! {
              <div key={i} class={classes!("faq-entry", CARD)}>
                <div class="font-semibold">{ entry.q.clone() }</div>
                <div class="mt-2 text-gray-700">{ entry.a.clone() }</div>
              </div>
          }) }
        </div>
      </Section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub contact: ContactContent,
    pub brand: Brand,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let c = &props.contact;
    let b = &props.brand;

    // Submission is a plain browser POST; the endpoint owns the response page.
    let form_or_notice = match c.formspree_endpoint.clone().filter(|_| c.has_form()) {
        Some(endpoint) => html! {
          <form action={endpoint} method="POST" class={classes!(CARD, "bg-white", "shadow-sm")}>
            <div class="grid md:grid-cols-2 gap-4">
              <div>
                <label class="text-sm">{ "Name" }</label>
                <input name="name" required={true} class="mt-1 w-full border rounded-xl px-3 py-2" />
              </div>
              <div>
                <label class="text-sm">{ "Email" }</label>
                <input type="email" name="email" required={true} class="mt-1 w-full border rounded-xl px-3 py-2" />
              </div>
            </div>
            <div class="mt-4">
              <label class="text-sm">{ "Message" }</label>
              <textarea name="message" rows="5" required={true} class="mt-1 w-full border rounded-xl px-3 py-2" />
            </div>
            <button class="mt-4 w-full rounded-xl px-4 py-2 bg-[#0057A7] text-white">{ "Send" }</button>
          </form>
        },
        None => html! {
          <div class={classes!(CARD, "bg-gray-50", "text-gray-700")}>
            <p>{ DISABLED_FORM_NOTICE }</p>
          </div>
        },
    };

    html! {
      <Section id="contact" class="py-16 md:py-24">
        <div class="grid md:grid-cols-2 gap-10">
          <div>
            <h2 class={SECTION_TITLE}>{ c.title.clone() }</h2>
            <div class="mt-6 space-y-3 text-gray-700">
              <div class="flex items-center gap-3">
                <Icon kind={IconKind::Mail} class="w-5 h-5" />{ c.email.clone() }
              </div>
              <div class="flex items-center gap-3">
                <Icon kind={IconKind::Phone} class="w-5 h-5" />{ c.phone.clone() }
              </div>
              <div class="flex items-center gap-3">
                <Icon kind={IconKind::MapPin} class="w-5 h-5" />{ c.address.clone() }
              </div>
              <a href={c.whatsapp.clone()} class="flex items-center gap-3 hover:underline">
                <Icon kind={IconKind::MessageCircle} class="w-5 h-5" />{ "WhatsApp" }
              </a>
              <a href={c.map_link.clone()} class="flex items-center gap-3 hover:underline">
                <Icon kind={IconKind::MapPin} class="w-5 h-5" />{ "Map" }
              </a>
            </div>
            <div class="mt-6 flex gap-3">
              <a href={b.cta_secondary.href.clone()} class={RED_OUTLINE_BUTTON}>
                <Icon kind={IconKind::MessageCircle} class="w-4 h-4" />
                { b.cta_secondary.label.clone() }
              </a>
              <a href={c.mailto()} class={BLUE_BUTTON}>{ "Email us" }</a>
            </div>
          </div>
          <div>
            { form_or_notice }
          </div>
        </div>
      </Section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteFooterProps {
    pub footer: FooterContent,
}

#[function_component(SiteFooter)]
pub fn site_footer(props: &SiteFooterProps) -> Html {
    html! {
      <footer class="mt-10 py-10 border-t">
        <Section id="footer" class="flex items-center justify-between">
          <div class="text-sm text-gray-600">{ props.footer.note.clone() }</div>
          <a href="#home" class="text-sm">{ "Back to top ↑" }</a>
        </Section>
      </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Service, Testimonial};
    use crate::test_util::{count, render_with};

    const STAR: &str = r#"data-icon="star""#;

    async fn render_page(content: SiteContent) -> String {
        render_with::<App, _>(move || AppProps {
            content: Rc::new(content),
        })
        .await
    }

    fn content() -> SiteContent {
        SiteContent::idcprep360(2026)
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("missing {needle}"))
    }

    #[tokio::test]
    async fn sections_render_once_in_fixed_order() {
        let html = render_page(content()).await;

        assert_eq!(count(&html, "<nav"), 1);
        assert_eq!(count(&html, "<header"), 1);
        assert_eq!(count(&html, "<footer"), 1);

        let anchors = ["home", "about", "services", "testimonials", "faq", "contact", "footer"];
        let mut last = position(&html, "<nav");
        for id in anchors {
            let needle = format!(r#"id="{id}""#);
            assert_eq!(count(&html, &needle), 1, "anchor #{id}");
            let at = position(&html, &needle);
            assert!(at > last, "#{id} out of order");
            last = at;
        }
    }

    #[tokio::test]
    async fn nav_and_ctas_point_at_in_page_anchors() {
        let html = render_page(content()).await;
        assert!(html.contains(r##"href="#about""##));
        assert!(html.contains(r##"href="#services""##));
        assert!(html.contains(r##"href="#contact""##));
        assert!(html.contains(r##"href="#home""##));
        assert!(html.contains("https://wa.me/6285190401338"));
        assert!(html.contains("IDCPrep360"));
        assert!(html.contains("Back to top ↑"));
    }

    #[tokio::test]
    async fn configured_endpoint_renders_post_form() {
        let mut c = content();
        c.contact.formspree_endpoint = Some("https://formspree.io/f/abc123".into());
        let html = render_page(c).await;

        assert_eq!(count(&html, "<form"), 1);
        assert!(html.contains(r#"action="https://formspree.io/f/abc123""#));
        assert!(html.contains(r#"method="POST""#));
        assert!(html.contains(r#"name="name""#));
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(r#"name="message""#));
        assert!(!html.contains(DISABLED_FORM_NOTICE));
    }

    #[tokio::test]
    async fn empty_endpoint_renders_notice_without_form() {
        for endpoint in [Some(String::new()), None] {
            let mut c = content();
            c.contact.formspree_endpoint = endpoint;
            let html = render_page(c).await;

            assert!(html.contains(
                "Contact form is disabled — add your Formspree endpoint in the content above to enable it."
            ));
            assert_eq!(count(&html, "<form"), 0);
            assert_eq!(count(&html, "<input"), 0);
            assert_eq!(count(&html, "<textarea"), 0);
        }
    }

    #[tokio::test]
    async fn contact_details_and_mailto_are_shown() {
        let html = render_page(content()).await;
        assert!(html.contains("elise@idcprep360.com"));
        assert!(html.contains(r#"href="mailto:elise@idcprep360.com""#));
        assert!(html.contains("+62 851-9040-1338"));
        assert!(html.contains("Labuan Bajo, Indonesia"));
        assert!(html.contains("https://maps.google.com?q=Labuan+Bajo"));
    }

    #[tokio::test]
    async fn service_bullets_are_list_items_in_order() {
        let mut c = content();
        c.services.items = vec![Service {
            title: "Night dives".into(),
            desc: "After dark.".into(),
            bullet: vec!["Torch".into(), "Buddy".into(), "Log".into()],
        }];
        let html = render_page(c).await;

        assert_eq!(count(&html, "<li>"), 3);
        let torch = position(&html, "<li>Torch</li>");
        let buddy = position(&html, "<li>Buddy</li>");
        let log = position(&html, "<li>Log</li>");
        assert!(torch < buddy && buddy < log);
        assert!(html.contains("Ask about Night dives"));
    }

    #[tokio::test]
    async fn testimonial_shows_stars_quote_and_author() {
        let mut c = content();
        c.testimonials.items = vec![Testimonial {
            name: "Rin".into(),
            text: "Clear and calm.".into(),
            rating: 5,
        }];
        let html = render_page(c).await;

        assert_eq!(count(&html, STAR), 5);
        let quote = position(&html, "“Clear and calm.”");
        let author = position(&html, "— Rin");
        assert!(position(&html, STAR) < quote && quote < author);
    }

    #[tokio::test]
    async fn testimonial_ratings_are_clamped() {
        let mut c = content();
        c.testimonials.items = vec![
            Testimonial { name: "A".into(), text: "a".into(), rating: 3 },
            Testimonial { name: "B".into(), text: "b".into(), rating: 12 },
            Testimonial { name: "C".into(), text: "c".into(), rating: -2 },
        ];
        let html = render_page(c).await;
        assert_eq!(count(&html, STAR), 3 + 5);
    }

    #[tokio::test]
    async fn empty_sequences_render_nothing() {
        let mut c = content();
        c.highlights.clear();
        c.services.items.clear();
        c.testimonials.items.clear();
        c.faq.items.clear();
        let html = render_page(c).await;

        assert_eq!(count(&html, "highlight p-4"), 0);
        assert_eq!(count(&html, "<li>"), 0);
        assert_eq!(count(&html, STAR), 0);
        assert_eq!(count(&html, "faq-entry"), 0);
        assert!(html.contains(r#"id="home""#));
        assert!(html.contains("Ace your PADI IDC"));
    }

    #[tokio::test]
    async fn highlights_and_faq_render_per_entry() {
        let html = render_page(content()).await;
        assert_eq!(count(&html, "highlight p-4"), 3);
        assert_eq!(count(&html, "faq-entry"), 3);
        assert!(html.contains("Is there a pass guarantee?"));
        assert!(html.contains("IDC • Job Board • EN/FR/中文"));
    }

    #[tokio::test]
    async fn footer_note_includes_year() {
        let html = render_page(SiteContent::idcprep360(2029)).await;
        assert!(html.contains("© 2029 IDCPrep360. All rights reserved."));
    }
}
