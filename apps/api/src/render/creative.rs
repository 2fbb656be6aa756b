use crate::models::resume::ResumeDocument;
use crate::render::{
    date_range, display_name, escape_html, link, or_placeholder, responsibilities_list,
    PLACEHOLDER_COMPANY, PLACEHOLDER_DEGREE, PLACEHOLDER_GRADUATION, PLACEHOLDER_JOB_TITLE,
    PLACEHOLDER_LOCATION, PLACEHOLDER_SCHOOL,
};

pub const CSS: &str = "\
.resume-creative { display: flex; min-height: 100vh; font-family: 'Segoe UI', Roboto, sans-serif; }
.resume-creative .left-column { width: 34%; background: #1f2937; color: #f9fafb; padding: 32px 24px; }
.resume-creative .right-column { width: 66%; padding: 32px; }
.resume-creative h1 { font-size: 28px; line-height: 1.2; margin-bottom: 24px; }
.resume-creative .left-section { margin-bottom: 24px; }
.resume-creative .left-section h2 { font-size: 14px; text-transform: uppercase; color: #fbbf24; margin-bottom: 8px; }
.resume-creative .contact-info { display: flex; flex-direction: column; gap: 4px; font-size: 12px; word-break: break-all; }
.resume-creative .skills-list { display: flex; flex-wrap: wrap; gap: 6px; }
.resume-creative .skills-list span { border: 1px solid #fbbf24; padding: 2px 8px; border-radius: 4px; font-size: 12px; }
.resume-creative .education-item { margin-bottom: 10px; font-size: 12px; }
.resume-creative .education-item h3 { font-size: 13px; }
.resume-creative .section { margin-bottom: 22px; }
.resume-creative .section h2 { font-size: 17px; color: #1f2937; border-left: 4px solid #fbbf24; padding-left: 8px; margin-bottom: 10px; }
.resume-creative .experience-item { margin-bottom: 14px; }
.resume-creative .item-title { display: flex; justify-content: space-between; }
.resume-creative .item-subtitle { color: #6b7280; font-size: 13px; margin-bottom: 4px; }
.resume-creative .responsibilities li { font-size: 13px; }
";

fn left_column(doc: &ResumeDocument) -> String {
    let info = &doc.personal_info;
    let mut html = String::from("<aside class=\"left-column\">\n");
    html.push_str(&format!(
        "<header class=\"header\"><h1>{}</h1></header>\n",
        escape_html(&display_name(doc))
    ));

    html.push_str("<section class=\"left-section contact-section\">\n<h2>Contact</h2>\n");
    html.push_str("<div class=\"contact-info\">");
    if !info.email.is_empty() {
        let email = escape_html(&info.email);
        html.push_str(&format!("<a href=\"mailto:{email}\">{email}</a>"));
    }
    for value in [&info.phone_number, &info.address] {
        if !value.is_empty() {
            html.push_str(&format!("<span>{}</span>", escape_html(value)));
        }
    }
    if !info.linked_in.is_empty() {
        html.push_str(&link(&info.linked_in, "LinkedIn"));
    }
    if !info.website.is_empty() {
        html.push_str(&link(&info.website, "Portfolio"));
    }
    html.push_str("</div>\n</section>\n");

    let skills: Vec<&str> = doc.filled_skills().collect();
    if !skills.is_empty() {
        html.push_str("<section class=\"left-section skills-section\">\n<h2>Skills</h2>\n");
        html.push_str("<div class=\"skills-list\">");
        for skill in skills {
            html.push_str(&format!("<span>{}</span>", escape_html(skill)));
        }
        html.push_str("</div>\n</section>\n");
    }

    if !doc.education.is_empty() {
        html.push_str("<section class=\"left-section education-section\">\n<h2>Education</h2>\n");
        for edu in &doc.education {
            html.push_str(&format!(
                "<div class=\"education-item\"><h3>{}</h3><p>{}</p><p>{}</p></div>\n",
                or_placeholder(&edu.degree, PLACEHOLDER_DEGREE),
                or_placeholder(&edu.school, PLACEHOLDER_SCHOOL),
                or_placeholder(&edu.graduation_date, PLACEHOLDER_GRADUATION)
            ));
        }
        html.push_str("</section>\n");
    }

    html.push_str("</aside>\n");
    html
}

fn right_column(doc: &ResumeDocument) -> String {
    let mut html = String::from("<main class=\"right-column\">\n");

    if !doc.summary.is_empty() {
        html.push_str("<section class=\"section summary-section\">\n<h2>Summary</h2>\n");
        html.push_str(&format!("<p>{}</p>\n</section>\n", escape_html(&doc.summary)));
    }

    if !doc.experience.is_empty() {
        html.push_str("<section class=\"section experience-section\">\n<h2>Experience</h2>\n");
        for exp in &doc.experience {
            html.push_str("<div class=\"experience-item\">\n");
            html.push_str(&format!(
                "<div class=\"item-title\"><h3>{}</h3><p>{}</p></div>\n",
                or_placeholder(&exp.job_title, PLACEHOLDER_JOB_TITLE),
                date_range(&exp.start_date, &exp.end_date)
            ));
            html.push_str(&format!(
                "<div class=\"item-subtitle\"><p>{} | {}</p></div>\n",
                or_placeholder(&exp.company, PLACEHOLDER_COMPANY),
                or_placeholder(&exp.location, PLACEHOLDER_LOCATION)
            ));
            html.push_str(&responsibilities_list(exp.filled_responsibilities()));
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    html.push_str("</main>\n");
    html
}

pub fn render(doc: &ResumeDocument) -> String {
    format!(
        "<div class=\"resume-creative\">\n{}{}</div>\n",
        left_column(doc),
        right_column(doc)
    )
}
