// src/content.rs
use serde::{Deserialize, Serialize};

pub const DEFAULT_BADGE: &str = "IDC • Job Board • EN/FR/中文";
const YEAR_TOKEN: &str = "{year}";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub brand: Brand,
    pub hero: Hero,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    pub about: About,
    pub services: Services,
    pub testimonials: Testimonials,
    pub faq: Faq,
    pub contact: Contact,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub name: String,
    pub logo_text: String,
    pub tagline: String,
    pub cta_primary: CallToAction,
    pub cta_secondary: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub headline: String,
    pub sub: String,
    pub image: String,
    #[serde(default = "default_badge")]
    pub badge: String,
}

fn default_badge() -> String {
    DEFAULT_BADGE.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub title: String,
    pub body: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Services {
    pub title: String,
    #[serde(default)]
    pub items: Vec<Service>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub desc: String,
    #[serde(default)]
    pub bullet: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonials {
    pub title: String,
    #[serde(default)]
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub text: String,
    /// 1-5 in practice; anything outside is clamped when drawn.
    pub rating: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub title: String,
    #[serde(default)]
    pub items: Vec<FaqEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub q: String,
    pub a: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub title: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub formspree_endpoint: Option<String>,
    pub whatsapp: String,
    pub map_link: String,
}

impl Contact {
    /// The live form is only shown when a submission endpoint is configured.
    pub fn has_form(&self) -> bool {
        self.formspree_endpoint
            .as_deref()
            .is_some_and(|e| !e.is_empty())
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub note: String,
}

fn cta(label: &str, href: &str) -> CallToAction {
    CallToAction {
        label: label.into(),
        href: href.into(),
    }
}

fn highlight(title: &str, desc: &str) -> Highlight {
    Highlight {
        title: title.into(),
        desc: desc.into(),
    }
}

fn service(title: &str, desc: &str, bullet: &[&str]) -> Service {
    Service {
        title: title.into(),
        desc: desc.into(),
        bullet: bullet.iter().map(|b| b.to_string()).collect(),
    }
}

fn testimonial(name: &str, text: &str, rating: i32) -> Testimonial {
    Testimonial {
        name: name.into(),
        text: text.into(),
        rating,
    }
}

fn faq_entry(q: &str, a: &str) -> FaqEntry {
    FaqEntry {
        q: q.into(),
        a: a.into(),
    }
}

impl SiteContent {
    /// Built-in brand content. `year` goes into the footer copyright line.
    pub fn idcprep360(year: i32) -> Self {
        let whatsapp = "https://wa.me/6285190401338";

        Self {
            brand: Brand {
                name: "IDCPrep360".into(),
                logo_text: "IDCPrep360".into(),
                tagline: "Multilingual IDC prep + job board connecting dive pros & dive centers".into(),
                cta_primary: cta("Start IDC Prep", "#contact"),
                cta_secondary: cta("WhatsApp", whatsapp),
            },
            hero: Hero {
                headline: "Ace your PADI IDC with EN / FR / 中文 content".into(),
                sub: "Videos (cours standards, physics/physiology, skills & briefings) and IE‑style practice exams with corrections.".into(),
                image: "https://images.unsplash.com/photo-1483683804023-6ccdb62f86ef?q=80&w=1600&auto=format&fit=crop".into(),
                badge: default_badge(),
            },
            highlights: vec![
                highlight("IDC mastery", "Structured videos + quizzes mapped to the IE."),
                highlight("Job board", "Connections between DCs, managers, OWSI & DMs."),
                highlight("Multilingual", "English, Français, 中文."),
            ],
            about: About {
                title: "Why IDCPrep360".into(),
                body: "Designed by a PADI Course Director, IDCPrep360 gives candidates everything they need to feel ready: step‑by‑step video lessons, downloadable checklists, realistic mock exams, and a curated job board to launch your teaching career.".into(),
                image: "https://images.unsplash.com/photo-1544551763-7ef420be2a87?q=80&w=1200&auto=format&fit=crop".into(),
            },
            services: Services {
                title: "What you get".into(),
                items: vec![
                    service(
                        "Video training (EN/FR/中文)",
                        "Covering standards, physics/physiology, skills & briefings.",
                        &["Indexed playlists", "Downloadable notes", "Updates each IE cycle"],
                    ),
                    service(
                        "Practice exams",
                        "IE‑style question banks with corrections and explanations.",
                        &["Standards & Procedures", "Physics & Physiology", "RDP/ERDP"],
                    ),
                    service(
                        "Pro job board",
                        "Private network connecting dive centers & hiring managers with certified pros.",
                        &["Global listings", "Direct messaging", "Verified employers"],
                    ),
                ],
            },
            testimonials: Testimonials {
                title: "Happy candidates".into(),
                items: vec![
                    testimonial("Alex", "IDCPrep360 made complex theory simple — I passed with confidence!", 5),
                    testimonial("Maya", "The videos in French and English helped me master tricky standards.", 5),
                    testimonial("Jun", "中文 explanations were a game changer for me. I felt fully prepared.", 5),
                ],
            },
            faq: Faq {
                title: "FAQs".into(),
                items: vec![
                    faq_entry(
                        "Is there a pass guarantee?",
                        "We don’t promise results, but the course is built to maximize your IE readiness with targeted training and realistic practice.",
                    ),
                    faq_entry(
                        "Which languages are supported?",
                        "All core videos and key documents are available in English, French and Chinese.",
                    ),
                    faq_entry(
                        "How do I access the job board?",
                        "Enrollment includes a member profile and direct apply links to partner dive centers.",
                    ),
                ],
            },
            contact: Contact {
                title: "Get started".into(),
                email: "elise@idcprep360.com".into(),
                phone: "+62 851-9040-1338".into(),
                address: "Labuan Bajo, Indonesia".into(),
                formspree_endpoint: Some("https://formspree.io/f/your-id".into()),
                whatsapp: whatsapp.into(),
                map_link: "https://maps.google.com?q=Labuan+Bajo".into(),
            },
            footer: Footer {
                note: format!("© {year} IDCPrep360. All rights reserved."),
            },
        }
    }

    /// Parse a complete content document. `{year}` in the footer note is
    /// filled in with `year`.
    pub fn from_json(raw: &str, year: i32) -> Result<Self, String> {
        let mut content: SiteContent =
            serde_json::from_str(raw).map_err(|e| format!("Failed parsing site content: {e}"))?;
        content.footer.note = content
            .footer
            .note
            .replace(YEAR_TOKEN, &year.to_string());
        Ok(content)
    }
}
