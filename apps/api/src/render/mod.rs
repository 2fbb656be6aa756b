// Resume rendering: three HTML templates and headless-Chrome PDF export.

pub mod classic;
pub mod creative;
pub mod export;
pub mod handlers;
pub mod modern;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::models::resume::ResumeDocument;

pub const PLACEHOLDER_NAME: &str = "Your Name";
pub const PLACEHOLDER_JOB_TITLE: &str = "Job Title";
pub const PLACEHOLDER_COMPANY: &str = "Company Name";
pub const PLACEHOLDER_LOCATION: &str = "Location";
pub const PLACEHOLDER_DEGREE: &str = "Degree";
pub const PLACEHOLDER_SCHOOL: &str = "School Name";
pub const PLACEHOLDER_GRADUATION: &str = "Graduation Date";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Template {
    #[default]
    Modern,
    Classic,
    Creative,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown template '{0}'. Expected one of: modern, classic, creative")]
pub struct UnknownTemplate(pub String);

impl Template {
    pub const ALL: [Template; 3] = [Template::Modern, Template::Classic, Template::Creative];

    /// Lower-case name used in URLs and export filenames.
    pub fn key(self) -> &'static str {
        match self {
            Template::Modern => "modern",
            Template::Classic => "classic",
            Template::Creative => "creative",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Template {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Template::ALL
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

/// Renders a complete standalone HTML page for the document.
pub fn render_html(doc: &ResumeDocument, template: Template) -> String {
    let (css, body) = match template {
        Template::Modern => (modern::CSS, modern::render(doc)),
        Template::Classic => (classic::CSS, classic::render(doc)),
        Template::Creative => (creative::CSS, creative::render(doc)),
    };
    page(&display_name(doc), css, &body)
}

fn page(title: &str, css: &str, body: &str) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    html.push_str(&format!("<style>\n{BASE_CSS}{css}</style>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str(body);
    html.push_str("</body>\n</html>\n");
    html
}

const BASE_CSS: &str = "\
* { box-sizing: border-box; margin: 0; padding: 0; }
body { background: #fff; color: #222; }
ul { padding-left: 1.2em; }
a { color: inherit; }
@page { size: A4; margin: 0; }
";

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escaped value, or the placeholder when the value is blank.
pub(crate) fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        escape_html(value)
    }
}

pub(crate) fn display_name(doc: &ResumeDocument) -> String {
    let name = doc.personal_info.full_name.trim();
    if name.is_empty() {
        PLACEHOLDER_NAME.to_string()
    } else {
        name.to_string()
    }
}

pub(crate) fn date_range(start: &str, end: &str) -> String {
    format!("{} - {}", escape_html(start), escape_html(end))
}

/// Schemes a contact link may point at.
const LINK_SCHEMES: [&str; 2] = ["http://", "https://"];

fn is_web_url(href: &str) -> bool {
    LINK_SCHEMES.iter().any(|scheme| {
        href.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Anchor for a web address. Any other value, `javascript:` included, is
/// shown as plain text.
pub(crate) fn link(href: &str, label: &str) -> String {
    let href = href.trim();
    if is_web_url(href) {
        format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{label}</a>",
            escape_html(href)
        )
    } else {
        format!("<span>{}</span>", escape_html(href))
    }
}

/// `<ul>` of the non-empty bullets.
pub(crate) fn responsibilities_list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let mut html = String::from("<ul class=\"responsibilities\">");
    for item in items {
        html.push_str(&format!("<li>{}</li>", escape_html(item)));
    }
    html.push_str("</ul>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_doc() -> ResumeDocument {
        let mut doc = ResumeDocument::seeded();
        doc.personal_info.full_name = "Ada Lovelace".into();
        doc.personal_info.email = "ada@example.com".into();
        doc.summary = "Analyst & <mathematician>".into();
        doc.experience[0].job_title = "Engineer".into();
        doc.experience[0].responsibilities = vec!["Built engines".into(), String::new()];
        doc.skills = vec!["Rust".into(), String::new(), "Math".into()];
        doc
    }

    #[test]
    fn test_template_parsing() {
        assert_eq!("modern".parse::<Template>(), Ok(Template::Modern));
        assert_eq!("Classic".parse::<Template>(), Ok(Template::Classic));
        assert_eq!(" creative ".parse::<Template>(), Ok(Template::Creative));
        assert!("fancy".parse::<Template>().is_err());
        assert_eq!(Template::default(), Template::Modern);
    }

    #[test]
    fn test_user_text_is_escaped() {
        for template in Template::ALL {
            let html = render_html(&filled_doc(), template);
            assert!(html.contains("Analyst &amp; &lt;mathematician&gt;"), "{template}");
            assert!(!html.contains("<mathematician>"), "{template}");
        }
    }

    #[test]
    fn test_empty_bullets_are_not_rendered() {
        for template in Template::ALL {
            let html = render_html(&filled_doc(), template);
            assert!(html.contains("<li>Built engines</li>"), "{template}");
            assert!(!html.contains("<li></li>"), "{template}");
        }
    }

    #[test]
    fn test_blank_document_uses_placeholders() {
        let doc = ResumeDocument::seeded();
        for template in Template::ALL {
            let html = render_html(&doc, template);
            assert!(html.contains(PLACEHOLDER_NAME), "{template}");
            assert!(html.contains(PLACEHOLDER_JOB_TITLE), "{template}");
            assert!(html.contains(PLACEHOLDER_SCHOOL), "{template}");
            assert!(!html.contains("Summary</h2>"), "{template}");
        }
    }

    #[test]
    fn test_sections_without_entries_are_omitted() {
        let mut doc = filled_doc();
        doc.experience.clear();
        doc.education.clear();
        doc.skills = vec![String::new()];
        for template in Template::ALL {
            let html = render_html(&doc, template);
            assert!(!html.contains("Experience</h2>"), "{template}");
            assert!(!html.contains("Education</h2>"), "{template}");
            assert!(!html.contains("Skills</h2>"), "{template}");
        }
    }

    #[test]
    fn test_link_accepts_only_web_schemes() {
        assert!(link("https://a.dev", "Portfolio").starts_with("<a href=\"https://a.dev\""));
        assert!(link(" HTTP://A.DEV ", "Portfolio").starts_with("<a href=\"HTTP://A.DEV\""));
        assert_eq!(
            link("javascript:alert(1)", "LinkedIn"),
            "<span>javascript:alert(1)</span>"
        );
        assert_eq!(link("linkedin.com/in/x", "LinkedIn"), "<span>linkedin.com/in/x</span>");
        assert_eq!(link("\u{1}https://a.dev", "Portfolio"), "<span>\u{1}https://a.dev</span>");
    }

    #[test]
    fn test_script_urls_never_become_links() {
        let mut doc = filled_doc();
        doc.personal_info.linked_in = "JavaScript:alert(document.cookie)".into();
        doc.personal_info.website = "data:text/html,<script>alert(1)</script>".into();
        for template in Template::ALL {
            let html = render_html(&doc, template);
            assert!(!html.to_lowercase().contains("href=\"javascript:"), "{template}");
            assert!(!html.contains("href=\"data:"), "{template}");
            assert!(!html.contains("<script>"), "{template}");
            assert!(html.contains("JavaScript:alert(document.cookie)"), "{template}");
        }
    }
}
