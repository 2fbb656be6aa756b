use crate::models::resume::ResumeDocument;
use crate::render::{
    date_range, display_name, escape_html, link, or_placeholder, responsibilities_list,
    PLACEHOLDER_COMPANY, PLACEHOLDER_DEGREE, PLACEHOLDER_GRADUATION, PLACEHOLDER_JOB_TITLE,
    PLACEHOLDER_LOCATION, PLACEHOLDER_SCHOOL,
};

const SEPARATOR: &str = " | ";

pub const CSS: &str = "\
.resume-classic { font-family: Georgia, 'Times New Roman', serif; padding: 48px; }
.resume-classic .header { text-align: center; border-bottom: 1px solid #000; padding-bottom: 12px; margin-bottom: 18px; }
.resume-classic h1 { font-size: 30px; letter-spacing: 2px; }
.resume-classic .contact-info { font-size: 13px; margin-top: 6px; }
.resume-classic .section { margin-bottom: 18px; }
.resume-classic h2 { font-size: 15px; text-transform: uppercase; border-bottom: 1px solid #999; margin-bottom: 8px; }
.resume-classic h3 { font-size: 14px; }
.resume-classic .item { margin-bottom: 12px; }
.resume-classic .item-title, .resume-classic .item-subtitle { display: flex; justify-content: space-between; }
.resume-classic .item-subtitle { font-style: italic; font-size: 13px; margin-bottom: 4px; }
.resume-classic .responsibilities li { font-size: 13px; }
.resume-classic .skills-list { font-size: 13px; }
";

/// Contact line: present items joined by " | ", links last.
fn contact_line(doc: &ResumeDocument) -> String {
    let info = &doc.personal_info;
    let mut parts: Vec<String> = [&info.address, &info.email, &info.phone_number]
        .into_iter()
        .filter(|v| !v.is_empty())
        .map(|v| format!("<span>{}</span>", escape_html(v)))
        .collect();
    if !info.linked_in.is_empty() {
        parts.push(link(&info.linked_in, "LinkedIn"));
    }
    if !info.website.is_empty() {
        parts.push(link(&info.website, "Portfolio"));
    }
    parts.join(SEPARATOR)
}

pub fn render(doc: &ResumeDocument) -> String {
    let mut html = String::from("<div class=\"resume-classic\">\n");

    html.push_str("<header class=\"header\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(&display_name(doc))));
    html.push_str(&format!("<div class=\"contact-info\">{}</div>\n", contact_line(doc)));
    html.push_str("</header>\n");

    if !doc.summary.is_empty() {
        html.push_str("<section class=\"section summary-section\">\n<h2>Summary</h2>\n");
        html.push_str(&format!("<p>{}</p>\n</section>\n", escape_html(&doc.summary)));
    }

    if !doc.experience.is_empty() {
        html.push_str("<section class=\"section experience-section\">\n<h2>Experience</h2>\n");
        for exp in &doc.experience {
            html.push_str("<div class=\"item\">\n");
            html.push_str(&format!(
                "<div class=\"item-title\"><h3>{}</h3><span>{}</span></div>\n",
                or_placeholder(&exp.job_title, PLACEHOLDER_JOB_TITLE),
                date_range(&exp.start_date, &exp.end_date)
            ));
            html.push_str(&format!(
                "<div class=\"item-subtitle\"><p>{}</p><span>{}</span></div>\n",
                or_placeholder(&exp.company, PLACEHOLDER_COMPANY),
                or_placeholder(&exp.location, PLACEHOLDER_LOCATION)
            ));
            html.push_str(&responsibilities_list(exp.filled_responsibilities()));
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    if !doc.education.is_empty() {
        html.push_str("<section class=\"section education-section\">\n<h2>Education</h2>\n");
        for edu in &doc.education {
            html.push_str("<div class=\"item\">\n");
            html.push_str(&format!(
                "<div class=\"item-title\"><h3>{}</h3><span>{}</span></div>\n",
                or_placeholder(&edu.degree, PLACEHOLDER_DEGREE),
                or_placeholder(&edu.graduation_date, PLACEHOLDER_GRADUATION)
            ));
            html.push_str(&format!(
                "<div class=\"item-subtitle\"><p>{}</p><p>{}</p></div>\n",
                or_placeholder(&edu.school, PLACEHOLDER_SCHOOL),
                or_placeholder(&edu.location, PLACEHOLDER_LOCATION)
            ));
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    let skills: Vec<String> = doc.filled_skills().map(escape_html).collect();
    if !skills.is_empty() {
        html.push_str("<section class=\"section skills-section\">\n<h2>Skills</h2>\n");
        html.push_str(&format!(
            "<p class=\"skills-list\">{}</p>\n</section>\n",
            skills.join(SEPARATOR)
        ));
    }

    html.push_str("</div>\n");
    html
}
