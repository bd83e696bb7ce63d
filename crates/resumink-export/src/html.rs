//! HTML templates for each section type.

use resumink_core::section::{
    EducationData, ExperienceData, HeaderData, ResolvedStyle, Section, SectionData, SkillsData,
    SummaryData,
};
use resumink_core::{DocumentSnapshot, LayoutMode};

const ACCENT: &str = "#2563eb";
const FALLBACK_FONT_FAMILY: &str = "Inter, sans-serif";
const HEADING_STYLE: &str = "font-size: 18px; font-weight: 600; color: #2563eb; margin: 0 0 12px 0; border-bottom: 1px solid #e5e7eb; padding-bottom: 5px;";

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a full standalone HTML page for a snapshot.
pub fn render_document(snapshot: &DocumentSnapshot) -> String {
    let page_style = match snapshot.layout_mode {
        LayoutMode::FreeForm => format!(
            "position: relative; width: {}px; min-height: {}px;",
            snapshot.canvas_size.width, snapshot.canvas_size.height
        ),
        LayoutMode::Flow => "width: 7.5in; min-height: 10in; padding: 0.5in; box-sizing: border-box;".to_string(),
    };

    let body: String = snapshot
        .sections
        .iter()
        .map(|section| render_section(section, snapshot.layout_mode))
        .collect();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Resume</title>\n</head>\n\
         <body style=\"margin: 0; background: #ffffff;\">\n\
         <div class=\"resume\" style=\"{page_style} font-family: Inter, sans-serif; font-size: 14px; line-height: 1.5; color: #000;\">\n\
         {body}</div>\n</body>\n</html>\n"
    )
}

/// Render one section wrapper with its style overrides applied.
pub fn render_section(section: &Section, mode: LayoutMode) -> String {
    let style = section.style().resolved();
    let mut css = wrapper_css(&style);
    if mode == LayoutMode::FreeForm {
        let pos = section.position();
        let size = section.size();
        css.push_str(&format!(
            " position: absolute; left: {}px; top: {}px; width: {}px; min-height: {}px; box-sizing: border-box;",
            pos.x, pos.y, size.width, size.height
        ));
    }

    let content = match section.data() {
        SectionData::Header(data) => render_header(data),
        SectionData::Summary(data) => render_summary(data),
        SectionData::Experience(data) => render_experience(data),
        SectionData::Education(data) => render_education(data),
        SectionData::Skills(data) => render_skills(data),
    };

    format!(
        "<section data-section-type=\"{}\" style=\"{}\">{}</section>\n",
        section.section_type(),
        escape_html(&css),
        content
    )
}

fn wrapper_css(style: &ResolvedStyle) -> String {
    format!(
        "font-size: {}px; font-weight: {}; color: {}; background-color: {}; padding: {}px; margin-bottom: {}px; text-align: {}; font-family: {};",
        style.font_size,
        style.font_weight.value(),
        style.color,
        style.background_color,
        style.padding,
        style.margin_bottom,
        style.text_align.as_css(),
        css_font_family(&style.font_family),
    )
}

/// Strip characters that would end the declaration or open a block.
fn css_font_family(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|c| !matches!(c, ';' | '{' | '}') && !c.is_control())
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        FALLBACK_FONT_FAMILY.to_string()
    } else {
        cleaned.to_string()
    }
}

fn render_header(data: &HeaderData) -> String {
    let contact: Vec<String> = [
        Some(data.email.as_str()),
        Some(data.phone.as_str()),
        Some(data.location.as_str()),
        data.website.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|s| !s.is_empty())
    .map(|s| format!("<span>{}</span>", escape_html(s)))
    .collect();

    let image = match data.profile_image.as_deref() {
        Some(src) if !src.is_empty() => format!(
            "<img src=\"{}\" alt=\"\" style=\"width: 96px; height: 96px; border-radius: 50%; object-fit: cover;\">",
            escape_html(src)
        ),
        _ => String::new(),
    };

    format!(
        "<div style=\"text-align: center; border-bottom: 2px solid {ACCENT}; padding-bottom: 20px;\">{image}\
         <h1 style=\"font-size: 28px; font-weight: 700; margin: 0 0 5px 0; color: #1f2937;\">{}</h1>\
         <h2 style=\"font-size: 16px; font-weight: 400; margin: 0 0 15px 0; color: #6b7280;\">{}</h2>\
         <div style=\"font-size: 14px; color: #374151;\">{}</div></div>",
        escape_html(&data.name),
        escape_html(&data.title),
        contact.join(" &bull; ")
    )
}

fn render_summary(data: &SummaryData) -> String {
    format!(
        "<h3 style=\"{HEADING_STYLE}\">Professional Summary</h3><p style=\"margin: 0; line-height: 1.6;\">{}</p>",
        escape_html(&data.content)
    )
}

fn render_experience(data: &ExperienceData) -> String {
    let items: String = data
        .items
        .iter()
        .map(|item| {
            format!(
                "<div style=\"margin-bottom: 20px;\">\
                 <div style=\"display: flex; justify-content: space-between;\"><h4 style=\"font-size: 16px; font-weight: 600; margin: 0;\">{}</h4><span style=\"color: #6b7280;\">{} - {}</span></div>\
                 <div style=\"display: flex; justify-content: space-between;\"><span style=\"font-weight: 500;\">{}</span><span style=\"color: #6b7280;\">{}</span></div>\
                 <p style=\"margin: 0; color: #4b5563;\">{}</p></div>",
                escape_html(&item.position),
                escape_html(&item.start_date),
                escape_html(&item.end_date),
                escape_html(&item.company),
                escape_html(&item.location),
                escape_html(&item.description),
            )
        })
        .collect();
    format!("<h3 style=\"{HEADING_STYLE}\">Work Experience</h3>{items}")
}

fn render_education(data: &EducationData) -> String {
    let items: String = data
        .items
        .iter()
        .map(|item| {
            let gpa = match item.gpa.as_deref() {
                Some(gpa) if !gpa.is_empty() => {
                    format!("<p style=\"margin: 5px 0 0 0; color: #6b7280;\">GPA: {}</p>", escape_html(gpa))
                }
                _ => String::new(),
            };
            format!(
                "<div style=\"margin-bottom: 15px;\">\
                 <div style=\"display: flex; justify-content: space-between;\"><h4 style=\"font-size: 16px; font-weight: 600; margin: 0;\">{} in {}</h4><span style=\"color: #6b7280;\">{} - {}</span></div>\
                 <div style=\"display: flex; justify-content: space-between;\"><span style=\"font-weight: 500;\">{}</span><span style=\"color: #6b7280;\">{}</span></div>{}</div>",
                escape_html(&item.degree),
                escape_html(&item.field),
                escape_html(&item.start_date),
                escape_html(&item.end_date),
                escape_html(&item.institution),
                escape_html(&item.location),
                gpa,
            )
        })
        .collect();
    format!("<h3 style=\"{HEADING_STYLE}\">Education</h3>{items}")
}

fn render_skills(data: &SkillsData) -> String {
    let skills: Vec<String> = data.skills.iter().map(|s| escape_html(s)).collect();
    format!(
        "<h3 style=\"{HEADING_STYLE}\">Skills</h3><p style=\"margin: 0; line-height: 1.6;\">{}</p>",
        skills.join(" \u{2022} ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use resumink_core::section::{DataPatch, EducationItemPatch, HeaderPatch, ItemPatch, ListField};
    use resumink_core::{Editor, EditorConfig, SectionType};

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>\"R&D\"</b>'"), "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt;&#39;");
    }

    #[test]
    fn test_header_is_escaped() {
        let mut editor = Editor::new();
        let id = editor.add_section(SectionType::Header);
        editor.update_data(
            id,
            DataPatch::Header(HeaderPatch {
                name: Some("<script>alert(1)</script>".to_string()),
                ..Default::default()
            }),
        );

        let html = render_document(&editor.snapshot());
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("<span>email@example.com</span>"));
    }

    #[test]
    fn test_skills_joined_with_bullets() {
        let mut editor = Editor::new();
        let id = editor.add_section(SectionType::Skills);
        editor.set_skills_from_text(id, "Rust, Go");

        let html = render_document(&editor.snapshot());
        assert!(html.contains("Rust \u{2022} Go"));
    }

    #[test]
    fn test_gpa_only_when_present() {
        let mut editor = Editor::new();
        let id = editor.add_section(SectionType::Education);
        assert!(render_document(&editor.snapshot()).contains("GPA: 3.8"));

        editor.update_item(
            id,
            ListField::Items,
            0,
            ItemPatch::Education(EducationItemPatch { gpa: Some(None), ..Default::default() }),
        );
        assert!(!render_document(&editor.snapshot()).contains("GPA:"));
    }

    #[test]
    fn test_free_form_sections_are_positioned() {
        let mut editor = Editor::new();
        let id = editor.add_section(SectionType::Summary);
        editor.update_position(id, Point::new(90.0, 120.0));

        let html = render_document(&editor.snapshot());
        assert!(html.contains("position: absolute; left: 90px; top: 120px; width: 400px;"));
    }

    #[test]
    fn test_flow_sections_stack_in_order() {
        let mut editor = Editor::with_config(EditorConfig::with_layout(resumink_core::LayoutMode::Flow)).unwrap();
        editor.add_section(SectionType::Skills);
        editor.add_section(SectionType::Header);

        let html = render_document(&editor.snapshot());
        assert!(!html.contains("position: absolute"));
        let skills = html.find("data-section-type=\"skills\"").unwrap();
        let header = html.find("data-section-type=\"header\"").unwrap();
        assert!(skills < header);
    }

    #[test]
    fn test_style_overrides_are_applied() {
        let mut editor = Editor::new();
        let id = editor.add_section(SectionType::Summary);
        editor.update_style(
            id,
            &resumink_core::section::StylePatch {
                font_size: Some(20.0),
                background_color: Some("#fff".parse().unwrap()),
                ..Default::default()
            },
        );

        let html = render_document(&editor.snapshot());
        assert!(html.contains("font-size: 20px;"));
        assert!(html.contains("background-color: #ffffff;"));
    }

    #[test]
    fn test_font_family_cannot_inject_declarations() {
        let mut editor = Editor::new();
        let id = editor.add_section(SectionType::Summary);
        editor.update_style(
            id,
            &resumink_core::section::StylePatch {
                font_family: Some("Georgia; position: fixed; } body {".to_string()),
                ..Default::default()
            },
        );

        let html = render_document(&editor.snapshot());
        assert!(html.contains("font-family: Georgia position: fixed  body;"));
        assert!(!html.contains("; position: fixed"));

        assert_eq!(css_font_family(";{}"), "Inter, sans-serif");
    }
}
