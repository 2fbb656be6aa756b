// Prompt constants for resume parsing and enhancement.

pub const PARSE_ROLE: &str = "You are an expert resume parser. \
    You turn the plain text of a resume into structured data without inventing anything.";

/// Resume parsing prompt. Replace `{resume_text}` before sending.
pub const PARSE_PROMPT_TEMPLATE: &str = r#"Extract the information from the resume text below and structure it as JSON.

- Extract all personal and contact information.
- Extract the professional summary or objective statement.
- For each work experience, extract the job title, company, location, start and end dates, and the list of responsibilities/achievements.
- For each education entry, extract the degree, school, location, and graduation date.
- Extract the list of skills.
- If a field is not found, return an empty string, or an empty array for lists.

Return a JSON object with this EXACT schema (no extra fields):
{
  "personalInfo": {
    "fullName": "Full name of the person",
    "email": "Email address",
    "phoneNumber": "Phone number",
    "address": "City, state, zip",
    "linkedIn": "URL of the LinkedIn profile",
    "website": "URL of personal website or portfolio"
  },
  "summary": "Professional summary",
  "experience": [
    {
      "jobTitle": "",
      "company": "",
      "location": "",
      "startDate": "",
      "endDate": "",
      "responsibilities": [""]
    }
  ],
  "education": [
    {"degree": "", "school": "", "location": "", "graduationDate": ""}
  ],
  "skills": [""]
}

Resume text:
---
{resume_text}
---"#;

pub const ENHANCE_ROLE: &str = "You are an expert resume writer and career coach. \
    You make resume content more professional, impactful, and ATS-friendly.";

/// Enhancement prompt. Replace `{summary}` and `{experience_json}` before sending.
pub const ENHANCE_PROMPT_TEMPLATE: &str = r#"Enhance the resume content below. Follow these instructions precisely:

1. Rewrite the summary as a compelling, concise professional statement under 150 words that highlights key qualifications and career goals.
2. For each work experience provided, rewrite the list of responsibilities as 3-5 action-oriented bullet points. Start each with a strong action verb (e.g. "Managed", "Developed", "Led", "Accelerated"). Quantify achievements with metrics where possible (e.g. "Increased sales by 15%").
3. Return exactly one experience object per input experience, in the same order.

Return a JSON object with this EXACT schema (no extra fields):
{
  "summary": "Improved professional summary",
  "experience": [
    {
      "jobTitle": "Echo of the input job title",
      "company": "Echo of the input company",
      "responsibilities": ["Improved bullet"]
    }
  ]
}

Summary:
{summary}

Experience:
{experience_json}"#;
