// Shared prompt fragments. Each collaborator that calls the LLM keeps its own
// prompts.rs alongside it and composes these in.

/// Appended to every system prompt that expects a JSON reply.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Builds a system prompt from a role description plus the JSON-only rule.
pub fn json_system(role: &str) -> String {
    format!("{role} {JSON_ONLY_INSTRUCTION}")
}

/// Substitutes `{name}` placeholders in one pass over `template`. Inserted
/// values are never scanned again, so user text that happens to contain a
/// placeholder is sent as written. Braces that do not name a variable (the
/// JSON schemas in the prompts) are left alone.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    'scan: while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        rest = &rest[open..];
        for (name, value) in vars {
            if let Some(after) = rest
                .strip_prefix('{')
                .and_then(|r| r.strip_prefix(*name))
                .and_then(|r| r.strip_prefix('}'))
            {
                out.push_str(value);
                rest = after;
                continue 'scan;
            }
        }
        out.push('{');
        rest = &rest[1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_single_pass() {
        let filled = fill_template(
            "A: {a}\nB: {b}\nschema: {\"k\": 1}",
            &[("a", "says {b}"), ("b", "[1, 2]")],
        );
        assert_eq!(filled, "A: says {b}\nB: [1, 2]\nschema: {\"k\": 1}");
    }

    #[test]
    fn test_fill_template_leaves_unknown_placeholders() {
        assert_eq!(fill_template("{x} {y", &[("y", "1")]), "{x} {y");
    }

    #[test]
    fn test_json_system_appends_rule() {
        let system = json_system("You are a resume parser.");
        assert!(system.starts_with("You are a resume parser. "));
        assert!(system.ends_with("Do NOT include explanations or apologies."));
    }
}
