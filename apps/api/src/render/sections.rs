//! Section renderers — one function per record kind, each producing a LaTeX
//! fragment for the base template's markers.
//!
//! Rules shared by all renderers:
//! - every textual field is escaped exactly once before embedding;
//! - URLs used as hyperlink targets are embedded raw;
//! - missing/optional fields render as empty strings, never as errors;
//! - `included=false` records are skipped entirely, and a collection whose
//!   output is empty omits its list wrapper markup too.

use crate::models::resume::{
    EducationRecord, ExperienceRecord, PersonalInfo, ProjectRecord, SkillRecord,
};
use crate::render::escape::escape_latex;

/// Header block: name, phone, email, then a fixed three-slot link row
/// (Portfolio / LinkedIn / Github). Absent links keep their slot as an empty
/// `\href{}{}` placeholder so the template layout stays stable.
pub fn render_personal_info(info: &PersonalInfo) -> String {
    let name = escape_latex(&info.name);
    let number = escape_latex(&info.number);
    let email_text = escape_latex(&info.email);

    let mut out = format!(
        "\\textbf{{\\Huge \\scshape {name}}} \\\\ \\vspace{{1pt}}\n\
         \\small {number} $|$ \\href{{{}}}{{\\underline{{{email_text}}}}} $|$\n",
        info.email
    );

    match info.portfolio.as_deref().filter(|s| !s.is_empty()) {
        Some(url) => out.push_str(&format!("\\href{{{url}}}{{\\underline{{Portfolio}}}} $|$ ")),
        None => out.push_str("\\href{}{}"),
    }
    match info.linkedin.as_deref().filter(|s| !s.is_empty()) {
        Some(url) => out.push_str(&format!("\\href{{{url}}}{{\\underline{{LinkedIn}}}} $|$ ")),
        None => out.push_str("\\href{}{}"),
    }
    match info.github.as_deref().filter(|s| !s.is_empty()) {
        Some(url) => out.push_str(&format!("\\href{{{url}}}{{\\underline{{Github}}}}")),
        None => out.push_str("\\href{}{}"),
    }

    out
}

/// Experience list. Only `included` records render; an all-excluded (or
/// empty) collection yields an empty fragment with no wrapper.
pub fn render_experiences(experiences: &[ExperienceRecord]) -> String {
    let mut body = String::new();

    for experience in experiences.iter().filter(|e| e.included) {
        let title = escape_latex(&experience.title);
        let organisation = escape_latex(&experience.organisation);
        let location = escape_latex(&experience.location);
        let start_date = escape_latex(&experience.start_date);
        let end_date = escape_latex(&experience.end_date);

        let mut items = String::new();
        for description in &experience.descriptions {
            let text = escape_latex(description.content());
            items.push_str(&format!("    \\resumeItem{{{text}}}\n"));
        }

        body.push_str(&format!(
            "  \\resumeSubheading{{{title}}}{{{start_date}--{end_date}}}{{{organisation}}}{{{location}}}\n\
             \\resumeItemListStart\n\
             {items}\\resumeItemListEnd\n\n"
        ));
    }

    if body.is_empty() {
        return body;
    }
    format!("\\resumeSubHeadingListStart\n{body}\\resumeSubHeadingListEnd\n")
}

/// Education list. No `included` gate and no wrapper markup — the base
/// template carries the list environment for this section itself.
pub fn render_education(education: &[EducationRecord]) -> String {
    let mut out = String::new();

    for record in education {
        let school = escape_latex(&record.school);
        let major = escape_latex(&record.major);
        let location = escape_latex(&record.location);
        let start_date = escape_latex(&record.start_date);
        let end_date = escape_latex(&record.end_date);

        out.push_str(&format!(
            "  \\resumeSubheading{{{school}}}{{{location}}}{{{major}}}{{{start_date}--{end_date}}}\n\n"
        ));
    }

    out
}

/// Project list, `included`-gated like experiences. The source-code URL is a
/// link target and stays unescaped.
pub fn render_projects(projects: &[ProjectRecord]) -> String {
    let mut body = String::new();

    for project in projects.iter().filter(|p| p.included) {
        let name = escape_latex(&project.name);
        let tools = escape_latex(&project.tools);

        let mut items = String::new();
        for description in &project.descriptions {
            let text = escape_latex(description.content());
            items.push_str(&format!("    \\resumeItem{{{text}}}\n"));
        }

        body.push_str(&format!(
            "  \\resumeProjectHeading{{\\textbf{{{name}}} $|$ \\emph{{{tools}}}}}{{\\href{{{}}}{{\\underline{{Source Code}}}}}}\n\
             \\resumeItemListStart\n\
             {items}\\resumeItemListEnd\n\n",
            project.source_code
        ));
    }

    if body.is_empty() {
        return body;
    }
    format!("\\resumeSubHeadingListStart\n{body}\\resumeSubHeadingListEnd\n")
}

/// Skills render as a single comma-joined line inside one `\item`.
/// An empty collection joins to an empty string — not an error.
pub fn render_skills(skills: &[SkillRecord]) -> String {
    let joined = skills
        .iter()
        .map(|skill| escape_latex(&skill.content))
        .collect::<Vec<_>>()
        .join(", ");

    format!("\\item{{{joined}}}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Description;

    fn experience(title: &str, included: bool, descriptions: Vec<Description>) -> ExperienceRecord {
        ExperienceRecord {
            title: title.to_string(),
            organisation: "Acme".to_string(),
            location: "Remote".to_string(),
            start_date: "2022".to_string(),
            end_date: "2024".to_string(),
            descriptions,
            included,
        }
    }

    #[test]
    fn test_mixed_description_forms_render_identically() {
        let bare = experience(
            "Engineer",
            true,
            vec![Description::Text("Built X".to_string())],
        );
        let record = experience(
            "Engineer",
            true,
            vec![Description::Record {
                content: "Built X".to_string(),
            }],
        );
        assert_eq!(render_experiences(&[bare]), render_experiences(&[record]));
    }

    #[test]
    fn test_excluded_records_contribute_nothing() {
        let fragment = render_experiences(&[
            experience("Visible", true, vec![]),
            experience("Hidden", false, vec![]),
        ]);
        assert!(fragment.contains("Visible"));
        assert!(!fragment.contains("Hidden"));
    }

    #[test]
    fn test_all_excluded_omits_wrapper() {
        let fragment = render_experiences(&[experience("Hidden", false, vec![])]);
        assert_eq!(fragment, "");
    }

    #[test]
    fn test_experience_fields_are_escaped() {
        let mut exp = experience("R&D Lead", true, vec![]);
        exp.organisation = "100% Startup".to_string();
        let fragment = render_experiences(&[exp]);
        assert!(fragment.contains(r"R\&D Lead"));
        assert!(fragment.contains(r"100\% Startup"));
    }

    #[test]
    fn test_skills_join_without_trailing_comma() {
        let skills = vec![
            SkillRecord {
                content: "Go".to_string(),
            },
            SkillRecord {
                content: "Rust".to_string(),
            },
        ];
        let fragment = render_skills(&skills);
        assert!(fragment.contains("\\item{Go, Rust}"));
        assert!(!fragment.contains("Rust,"));
    }

    #[test]
    fn test_empty_skills_join_to_empty_string() {
        assert!(render_skills(&[]).contains("\\item{}"));
    }

    #[test]
    fn test_project_url_stays_raw() {
        let project = ProjectRecord {
            name: "CLI".to_string(),
            tools: "Rust".to_string(),
            source_code: "https://example.com/repo_name".to_string(),
            descriptions: vec![],
            included: true,
        };
        let fragment = render_projects(&[project]);
        // Link target keeps its underscore; prose would have escaped it.
        assert!(fragment.contains("\\href{https://example.com/repo_name}"));
    }

    #[test]
    fn test_personal_info_slots_independent() {
        let info = PersonalInfo {
            name: "Ada Lovelace".to_string(),
            number: "555-0100".to_string(),
            email: "ada@example.com".to_string(),
            portfolio: None,
            linkedin: Some("https://linkedin.com/in/ada".to_string()),
            github: None,
        };
        let fragment = render_personal_info(&info);
        assert!(fragment.contains("Ada Lovelace"));
        assert!(fragment.contains("\\underline{LinkedIn}"));
        assert!(!fragment.contains("Portfolio"));
        // Absent slots keep an empty placeholder, preserving the layout.
        assert_eq!(fragment.matches("\\href{}{}").count(), 2);
    }

    #[test]
    fn test_education_renders_without_gate_or_wrapper() {
        let record = EducationRecord {
            school: "MIT".to_string(),
            major: "CS".to_string(),
            location: "Cambridge".to_string(),
            start_date: "2018".to_string(),
            end_date: "2022".to_string(),
            gpa: "4.0".to_string(),
        };
        let fragment = render_education(&[record]);
        assert!(fragment.contains("\\resumeSubheading{MIT}{Cambridge}{CS}{2018--2022}"));
        assert!(!fragment.contains("ListStart"));
    }

    #[test]
    fn test_missing_optional_fields_render_as_empty() {
        let record = EducationRecord {
            school: "MIT".to_string(),
            major: "CS".to_string(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            gpa: String::new(),
        };
        let fragment = render_education(&[record]);
        assert!(fragment.contains("{MIT}{}{CS}{--}"));
    }
}
