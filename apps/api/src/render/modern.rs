use crate::models::resume::ResumeDocument;
use crate::render::{
    date_range, display_name, escape_html, link, or_placeholder, responsibilities_list,
    PLACEHOLDER_COMPANY, PLACEHOLDER_DEGREE, PLACEHOLDER_GRADUATION, PLACEHOLDER_JOB_TITLE,
    PLACEHOLDER_LOCATION, PLACEHOLDER_SCHOOL,
};

pub const CSS: &str = "\
.resume-modern { font-family: 'Helvetica Neue', Arial, sans-serif; padding: 40px; }
.resume-modern .header { border-bottom: 3px solid #2563eb; padding-bottom: 16px; margin-bottom: 20px; }
.resume-modern h1 { font-size: 32px; color: #1e3a8a; }
.resume-modern .contact-info { display: flex; flex-wrap: wrap; gap: 16px; margin-top: 8px; font-size: 13px; color: #555; }
.resume-modern .section { margin-bottom: 20px; }
.resume-modern h2 { font-size: 16px; text-transform: uppercase; color: #2563eb; letter-spacing: 1px; margin-bottom: 10px; }
.resume-modern h3 { font-size: 15px; }
.resume-modern .item-title, .resume-modern .item-subtitle { display: flex; justify-content: space-between; }
.resume-modern .item-subtitle { color: #555; font-size: 13px; margin-bottom: 6px; }
.resume-modern .experience-item, .resume-modern .education-item { margin-bottom: 14px; }
.resume-modern .responsibilities li { font-size: 13px; margin-bottom: 3px; }
.resume-modern .skills-list { display: flex; flex-wrap: wrap; gap: 8px; }
.resume-modern .skills-list span { background: #dbeafe; color: #1e3a8a; padding: 3px 10px; border-radius: 12px; font-size: 12px; }
";

pub fn render(doc: &ResumeDocument) -> String {
    let info = &doc.personal_info;
    let mut html = String::from("<div class=\"resume-modern\">\n");

    html.push_str("<header class=\"header\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(&display_name(doc))));
    html.push_str("<div class=\"contact-info\">");
    for value in [&info.email, &info.phone_number, &info.address] {
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
    html.push_str("</div>\n</header>\n");

    if !doc.summary.is_empty() {
        html.push_str("<section class=\"section summary-section\">\n<h2>Summary</h2>\n");
        html.push_str(&format!("<p>{}</p>\n</section>\n", escape_html(&doc.summary)));
    }

    if !doc.experience.is_empty() {
        html.push_str("<section class=\"section experience-section\">\n<h2>Work Experience</h2>\n");
        for exp in &doc.experience {
            html.push_str("<div class=\"experience-item\">\n");
            html.push_str(&format!(
                "<div class=\"item-title\"><h3>{}</h3><p>{}</p></div>\n",
                or_placeholder(&exp.job_title, PLACEHOLDER_JOB_TITLE),
                date_range(&exp.start_date, &exp.end_date)
            ));
            html.push_str(&format!(
                "<div class=\"item-subtitle\"><p>{}</p><p>{}</p></div>\n",
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
            html.push_str("<div class=\"education-item\">\n");
            html.push_str(&format!(
                "<div class=\"item-title\"><h3>{}</h3><p>{}</p></div>\n",
                or_placeholder(&edu.school, PLACEHOLDER_SCHOOL),
                or_placeholder(&edu.graduation_date, PLACEHOLDER_GRADUATION)
            ));
            html.push_str(&format!(
                "<div class=\"item-subtitle\"><p>{}</p><p>{}</p></div>\n",
                or_placeholder(&edu.degree, PLACEHOLDER_DEGREE),
                or_placeholder(&edu.location, PLACEHOLDER_LOCATION)
            ));
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    let skills: Vec<&str> = doc.filled_skills().collect();
    if !skills.is_empty() {
        html.push_str("<section class=\"section skills-section\">\n<h2>Skills</h2>\n");
        html.push_str("<div class=\"skills-list\">");
        for skill in skills {
            html.push_str(&format!("<span>{}</span>", escape_html(skill)));
        }
        html.push_str("</div>\n</section>\n");
    }

    html.push_str("</div>\n");
    html
}
