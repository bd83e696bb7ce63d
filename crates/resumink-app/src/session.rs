//! Scripted editing session.
//!
//! Drives the editor through the same calls an interactive host makes:
//! sidebar drops, inline edits, style changes, resizing and dragging.

use kurbo::{Point, Size};
use resumink_core::section::{
    CssColor, DataPatch, ExperienceItemPatch, FontWeight, HeaderPatch, ItemPatch, ListField,
    StylePatch, SummaryPatch, TextAlign,
};
use resumink_core::{
    DragSource, DropEffect, DropTarget, Editor, EditorResult, LayoutMode, NotificationLevel,
    SectionType,
};

/// Build a complete sample resume in `editor`.
pub fn build_sample_resume(editor: &mut Editor) -> EditorResult<DropEffect> {
    let header = editor.add_section_by_id("header")?;
    editor.update_data(
        header,
        DataPatch::Header(HeaderPatch {
            name: Some("Jordan Lee".to_string()),
            title: Some("Systems Engineer".to_string()),
            email: Some("jordan@example.com".to_string()),
            location: Some("Portland, OR".to_string()),
            website: Some(Some("jordanlee.dev".to_string())),
            ..Default::default()
        }),
    );
    editor.update_style(
        header,
        &StylePatch {
            font_weight: Some(FontWeight::Bold),
            text_align: Some(TextAlign::Center),
            ..Default::default()
        },
    );

    editor.begin_drag(DragSource::SidebarTemplate(SectionType::Summary), Point::new(40.0, 120.0))?;
    editor.drag_to(Point::new(300.0, 200.0))?;
    let summary = match editor.end_drag(Some(DropTarget::Canvas), Point::new(320.0, 210.0))? {
        DropEffect::Inserted { id, .. } => id,
        other => {
            log::warn!("Summary template drop had no effect: {:?}", other);
            return Ok(other);
        }
    };
    editor.update_data(
        summary,
        DataPatch::Summary(SummaryPatch {
            content: Some("Engineer focused on storage engines and network services.".to_string()),
        }),
    );

    let experience = editor.add_section(SectionType::Experience);
    editor.update_item(
        experience,
        ListField::Items,
        0,
        ItemPatch::Experience(ExperienceItemPatch {
            company: Some("Acme Storage".to_string()),
            position: Some("Senior Engineer".to_string()),
            start_date: Some("2021".to_string()),
            ..Default::default()
        }),
    );
    editor.add_item(experience, ListField::Items);
    editor.update_item(
        experience,
        ListField::Items,
        1,
        ItemPatch::Experience(ExperienceItemPatch {
            company: Some("Northwind Networks".to_string()),
            position: Some("Engineer".to_string()),
            start_date: Some("2018".to_string()),
            end_date: Some("2021".to_string()),
            ..Default::default()
        }),
    );
    editor.update_size(experience, Size::new(520.0, 260.0));

    editor.add_section(SectionType::Education);

    let skills = editor.add_section(SectionType::Skills);
    editor.set_skills_from_text(skills, "Rust, Distributed Systems, Linux, ");
    editor.update_style(
        skills,
        &StylePatch {
            color: Some(CssColor::rgb(0x1f, 0x29, 0x37)),
            ..Default::default()
        },
    );

    editor.select(Some(header))?;

    // Free-form: nudge the skills block sideways. Flow: pull it above experience.
    let (target, pointer) = match editor.layout_mode() {
        LayoutMode::FreeForm => (DropTarget::Canvas, Point::new(220.0, 640.0)),
        LayoutMode::Flow => (DropTarget::Section(experience), Point::new(100.0, 300.0)),
    };
    editor.begin_drag(DragSource::ExistingSection(skills), Point::new(100.0, 600.0))?;
    editor.drag_to(Point::new(160.0, 620.0))?;
    let effect = editor.end_drag(Some(target), pointer)?;
    log::debug!("Skills drag: {:?}", effect);

    editor.select(None)?;
    log_notifications(editor);
    Ok(effect)
}

/// Drain pending notifications into the log.
pub fn log_notifications(editor: &mut Editor) {
    for notification in editor.drain_notifications() {
        match notification.level {
            NotificationLevel::Success => log::info!("[toast] {}", notification.message),
            NotificationLevel::Error => log::error!("[toast] {}", notification.message),
        }
    }
}
