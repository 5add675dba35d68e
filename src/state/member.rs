// Member modal state management.
// Validated member records, the modal's display fields, and its open/close
// transitions including the page scroll lock.

use ratatui::layout::{Position, Rect};
use serde::Deserialize;
use tracing::debug;

use crate::error::{CollectiveError, Result};

use super::navigation::{Overflow, PageScroll};

/// A team member shown on the portfolio page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: String,
}

/// Member data as read from configuration, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberRecord {
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl Member {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        bio: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            bio: bio.into(),
            image: image.into(),
        }
    }
}

/// Missing and whitespace-only fields are both rejected.
fn required(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CollectiveError::MissingMemberField(field)),
    }
}

impl TryFrom<MemberRecord> for Member {
    type Error = CollectiveError;

    fn try_from(record: MemberRecord) -> Result<Self> {
        Ok(Self {
            name: required(record.name, "name")?,
            role: required(record.role, "role")?,
            bio: required(record.bio, "bio")?,
            image: required(record.image, "image")?,
        })
    }
}

/// The modal's display fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalFields {
    pub image_src: String,
    pub image_alt: String,
    pub name: String,
    pub role: String,
    pub bio: String,
}

impl From<&Member> for ModalFields {
    fn from(member: &Member) -> Self {
        Self {
            image_src: member.image.clone(),
            image_alt: format!("{} avatar", member.name),
            name: member.name.clone(),
            role: member.role.clone(),
            bio: member.bio.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(Member),
}

/// Screen geometry of the modal for hit-testing mouse presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    /// The content panel; everything outside it is overlay.
    pub panel: Rect,
    /// The close button in the panel's top-right corner.
    pub close_button: Rect,
}

impl ModalLayout {
    pub const WIDTH: u16 = 60;
    pub const HEIGHT: u16 = 16;

    /// Center the panel in `area`, shrinking it if the area is too small.
    pub fn centered(area: Rect) -> Self {
        let width = Self::WIDTH.min(area.width);
        let height = Self::HEIGHT.min(area.height);
        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        let panel = Rect::new(x, y, width, height);

        let button_width = 5.min(width);
        let close_button = Rect::new(
            (panel.x + panel.width).saturating_sub(button_width + 1),
            panel.y,
            button_width,
            1.min(height),
        );

        Self { panel, close_button }
    }
}

/// Member detail dialog.
#[derive(Debug, Clone, Default)]
pub struct MemberModal {
    state: ModalState,
    fields: ModalFields,
    /// Page overflow to restore on close.
    restore: Option<Overflow>,
}

impl MemberModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn fields(&self) -> &ModalFields {
        &self.fields
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    /// Populate the modal from `member`, show it, and lock page scrolling.
    pub fn open(&mut self, member: Member, page: &mut PageScroll) {
        self.fields = ModalFields::from(&member);
        debug!(member = %member.name, "opening member modal");
        self.state = ModalState::Open(member);
        // Reopening over an open modal keeps the original overflow to restore.
        if self.restore.is_none() {
            self.restore = Some(page.overflow);
        }
        page.overflow = Overflow::Hidden;
    }

    /// Hide the modal and restore page scrolling. No-op when closed.
    pub fn close(&mut self, page: &mut PageScroll) {
        if !self.is_open() {
            return;
        }
        debug!("closing member modal");
        self.state = ModalState::Closed;
        if let Some(overflow) = self.restore.take() {
            page.overflow = overflow;
        }
    }

    /// Escape closes the modal only while it is open.
    pub fn handle_escape(&mut self, page: &mut PageScroll) -> bool {
        if !self.is_open() {
            return false;
        }
        self.close(page);
        true
    }

    /// A press on the close button or on the overlay closes the modal; a press
    /// inside the content panel does not.
    pub fn handle_press(
        &mut self,
        position: Position,
        layout: &ModalLayout,
        page: &mut PageScroll,
    ) -> bool {
        if !self.is_open() {
            return false;
        }
        let on_close_button = layout.close_button.contains(position);
        let on_overlay = !layout.panel.contains(position);
        if on_close_button || on_overlay {
            self.close(page);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mae() -> Member {
        Member::new("Mae", "Engineer", "...", "mae.png")
    }

    #[test]
    fn test_record_validation() {
        let record = MemberRecord {
            name: Some("Mae".into()),
            role: Some("Engineer".into()),
            bio: Some("...".into()),
            image: Some("mae.png".into()),
        };
        assert_eq!(Member::try_from(record).unwrap(), mae());
    }

    #[test]
    fn test_record_missing_field() {
        let record = MemberRecord {
            name: Some("Mae".into()),
            role: None,
            bio: Some("...".into()),
            image: Some("mae.png".into()),
        };
        let err = Member::try_from(record).unwrap_err();
        assert!(matches!(err, CollectiveError::MissingMemberField("role")));
    }

    #[test]
    fn test_record_blank_field() {
        let record = MemberRecord {
            name: Some("Mae".into()),
            role: Some("Engineer".into()),
            bio: Some("...".into()),
            image: Some("   ".into()),
        };
        let err = Member::try_from(record).unwrap_err();
        assert!(matches!(err, CollectiveError::MissingMemberField("image")));
    }

    #[test]
    fn test_open_populates_fields_and_locks_scroll() {
        let mut modal = MemberModal::new();
        let mut page = PageScroll::default();

        modal.open(mae(), &mut page);

        assert!(modal.is_open());
        assert_eq!(modal.state(), &ModalState::Open(mae()));
        let fields = modal.fields();
        assert_eq!(fields.name, "Mae");
        assert_eq!(fields.role, "Engineer");
        assert_eq!(fields.bio, "...");
        assert_eq!(fields.image_src, "mae.png");
        assert_eq!(fields.image_alt, "Mae avatar");
        assert_eq!(page.overflow, Overflow::Hidden);
    }

    #[test]
    fn test_close_restores_scroll() {
        let mut modal = MemberModal::new();
        let mut page = PageScroll::default();

        modal.open(mae(), &mut page);
        modal.close(&mut page);

        assert!(!modal.is_open());
        assert_eq!(page.overflow, Overflow::Auto);
    }

    #[test]
    fn test_reopen_repopulates_everything() {
        let mut modal = MemberModal::new();
        let mut page = PageScroll::default();

        modal.open(mae(), &mut page);
        modal.close(&mut page);
        let other = Member::new("Icoreykjavik", "Designer", "Draws things.", "ico.png");
        modal.open(other.clone(), &mut page);

        assert_eq!(modal.fields(), &ModalFields::from(&other));
        modal.close(&mut page);
        assert_eq!(page.overflow, Overflow::Auto);
    }

    #[test]
    fn test_escape_when_closed_is_noop() {
        let mut modal = MemberModal::new();
        let mut page = PageScroll::default();

        assert!(!modal.handle_escape(&mut page));
        assert!(!modal.is_open());
        assert_eq!(page.overflow, Overflow::Auto);
        assert_eq!(modal.fields(), &ModalFields::default());
    }

    #[test]
    fn test_escape_when_open_closes() {
        let mut modal = MemberModal::new();
        let mut page = PageScroll::default();

        modal.open(mae(), &mut page);
        assert!(modal.handle_escape(&mut page));
        assert!(!modal.is_open());
        assert_eq!(page.overflow, Overflow::Auto);
    }

    #[test]
    fn test_overlay_press_closes_panel_press_does_not() {
        let mut modal = MemberModal::new();
        let mut page = PageScroll::default();
        let layout = ModalLayout::centered(Rect::new(0, 0, 100, 40));

        modal.open(mae(), &mut page);

        let inside = Position::new(layout.panel.x + 2, layout.panel.y + 3);
        assert!(!modal.handle_press(inside, &layout, &mut page));
        assert!(modal.is_open());

        let outside = Position::new(0, 0);
        assert!(modal.handle_press(outside, &layout, &mut page));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_close_button_press_closes() {
        let mut modal = MemberModal::new();
        let mut page = PageScroll::default();
        let layout = ModalLayout::centered(Rect::new(0, 0, 100, 40));

        modal.open(mae(), &mut page);
        let button = Position::new(layout.close_button.x, layout.close_button.y);
        assert!(layout.panel.contains(button));
        assert!(modal.handle_press(button, &layout, &mut page));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_centered_layout() {
        let layout = ModalLayout::centered(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.panel, Rect::new(20, 12, 60, 16));
        assert_eq!(layout.close_button, Rect::new(74, 12, 5, 1));

        let tiny = ModalLayout::centered(Rect::new(0, 0, 10, 4));
        assert_eq!(tiny.panel, Rect::new(0, 0, 10, 4));
    }
}
