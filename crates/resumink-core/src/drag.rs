//! Drag session state machine.
//!
//! A session runs `Idle -> Dragging -> (Committed | Cancelled) -> Idle`.
//! It only records what is being dragged and how far the pointer moved;
//! the editor decides what a commit means for the document.

use crate::section::{SectionId, SectionType};
use kurbo::{Point, Vec2};
use thiserror::Error;

/// What a drag picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragSource {
    /// A section already on the canvas.
    ExistingSection(SectionId),
    /// A built-in section template from the sidebar.
    SidebarTemplate(SectionType),
}

/// Where a drag was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// Over another section.
    Section(SectionId),
    /// Over empty canvas.
    Canvas,
}

/// Drag session inconsistencies. These indicate a broken event stream,
/// never a user error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DragError {
    #[error("A drag session is already active")]
    AlreadyDragging,
    #[error("No drag session is active")]
    NoActiveSession,
}

/// State of an in-progress drag.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDrag {
    pub source: DragSource,
    /// Position of the dragged section at drag start (`None` for templates).
    pub origin: Option<Point>,
    /// Pointer position that started the drag.
    pub start_pointer: Point,
    /// Latest pointer position.
    pub current_pointer: Point,
}

impl ActiveDrag {
    /// Get the drag delta.
    pub fn delta(&self) -> Vec2 {
        self.current_pointer - self.start_pointer
    }
}

/// State of the drag session.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(ActiveDrag),
}

/// A resolved drop, ready to be applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragCommit {
    pub source: DragSource,
    pub origin: Option<Point>,
    pub delta: Vec2,
    pub target: DropTarget,
}

/// How a drag session ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    Committed(DragCommit),
    Cancelled,
}

/// Single-occupancy drag session.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// The active drag, if any.
    pub fn active(&self) -> Option<&ActiveDrag> {
        match &self.state {
            DragState::Dragging(drag) => Some(drag),
            DragState::Idle => None,
        }
    }

    /// Begin a drag. Starting while another drag is active is rejected and
    /// leaves the active session untouched.
    pub fn start(&mut self, source: DragSource, origin: Option<Point>, pointer: Point) -> Result<(), DragError> {
        if let DragState::Dragging(active) = &self.state {
            log::warn!("Drag start for {:?} while {:?} is still dragging", source, active.source);
            return Err(DragError::AlreadyDragging);
        }
        log::debug!("Drag started: {:?}", source);
        self.state = DragState::Dragging(ActiveDrag {
            source,
            origin,
            start_pointer: pointer,
            current_pointer: pointer,
        });
        Ok(())
    }

    /// Track pointer movement.
    pub fn update(&mut self, pointer: Point) -> Result<(), DragError> {
        match &mut self.state {
            DragState::Dragging(drag) => {
                drag.current_pointer = pointer;
                Ok(())
            }
            DragState::Idle => {
                log::warn!("Drag move with no active session");
                Err(DragError::NoActiveSession)
            }
        }
    }

    /// Release the drag. A resolved target commits; no target cancels.
    /// Either way the session returns to idle.
    pub fn end(&mut self, target: Option<DropTarget>, pointer: Point) -> Result<DragOutcome, DragError> {
        let DragState::Dragging(mut drag) = std::mem::take(&mut self.state) else {
            log::warn!("Drag end with no active session");
            return Err(DragError::NoActiveSession);
        };
        drag.current_pointer = pointer;

        Ok(match target {
            Some(target) => {
                log::debug!("Drag committed: {:?} -> {:?}", drag.source, target);
                DragOutcome::Committed(DragCommit {
                    source: drag.source,
                    origin: drag.origin,
                    delta: drag.delta(),
                    target,
                })
            }
            None => {
                log::debug!("Drag cancelled: {:?} dropped outside any target", drag.source);
                DragOutcome::Cancelled
            }
        })
    }

    /// The active pointer went away: discard the session.
    pub fn cancel(&mut self) -> Result<(), DragError> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(drag) => {
                log::debug!("Drag cancelled: pointer lost while dragging {:?}", drag.source);
                Ok(())
            }
            DragState::Idle => {
                log::warn!("Drag cancel with no active session");
                Err(DragError::NoActiveSession)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_commit_carries_delta() {
        let id = Uuid::new_v4();
        let mut session = DragSession::new();
        session
            .start(DragSource::ExistingSection(id), Some(Point::new(60.0, 60.0)), Point::new(100.0, 100.0))
            .unwrap();
        assert!(session.is_dragging());
        session.update(Point::new(120.0, 130.0)).unwrap();

        let outcome = session.end(Some(DropTarget::Canvas), Point::new(144.0, 176.0)).unwrap();
        assert_eq!(
            outcome,
            DragOutcome::Committed(DragCommit {
                source: DragSource::ExistingSection(id),
                origin: Some(Point::new(60.0, 60.0)),
                delta: Vec2::new(44.0, 76.0),
                target: DropTarget::Canvas,
            })
        );
        assert_eq!(session.state(), &DragState::Idle);
    }

    #[test]
    fn test_end_without_target_cancels() {
        let mut session = DragSession::new();
        session.start(DragSource::SidebarTemplate(SectionType::Skills), None, Point::ZERO).unwrap();
        assert_eq!(session.end(None, Point::new(5.0, 5.0)), Ok(DragOutcome::Cancelled));
        assert!(!session.is_dragging());
    }

    #[test]
    fn test_second_start_is_rejected() {
        let first = DragSource::SidebarTemplate(SectionType::Header);
        let mut session = DragSession::new();
        session.start(first, None, Point::new(1.0, 1.0)).unwrap();

        let err = session.start(DragSource::SidebarTemplate(SectionType::Skills), None, Point::new(9.0, 9.0));
        assert_eq!(err, Err(DragError::AlreadyDragging));

        let active = session.active().unwrap();
        assert_eq!(active.source, first);
        assert_eq!(active.start_pointer, Point::new(1.0, 1.0));
    }

    #[test]
    fn test_idle_events_are_rejected() {
        let mut session = DragSession::new();
        assert_eq!(session.update(Point::ZERO), Err(DragError::NoActiveSession));
        assert_eq!(session.end(Some(DropTarget::Canvas), Point::ZERO), Err(DragError::NoActiveSession));
        assert_eq!(session.cancel(), Err(DragError::NoActiveSession));
    }

    #[test]
    fn test_pointer_loss_discards_session() {
        let mut session = DragSession::new();
        session.start(DragSource::SidebarTemplate(SectionType::Summary), None, Point::ZERO).unwrap();
        session.cancel().unwrap();
        assert!(session.active().is_none());
        // A fresh drag can start afterwards.
        assert!(session.start(DragSource::SidebarTemplate(SectionType::Summary), None, Point::ZERO).is_ok());
    }
}
