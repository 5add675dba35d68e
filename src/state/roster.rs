// Roster state management.
// The member cards on the portfolio page and the list cursor over them.

use ratatui::widgets::ListState;

use super::member::Member;

/// Built-in roster used when configuration lists no members.
pub fn default_members() -> Vec<Member> {
    vec![
        Member::new(
            "Mae",
            "API Integration",
            "Wires the quote generator to the remote quote service and keeps \
             its error handling honest.",
            "images/mae.png",
        ),
        Member::new(
            "Icoreykjavik",
            "UI & Interaction",
            "Builds the display controls, the page navigation and the member \
             modal you are looking at.",
            "images/icoreykjavik.png",
        ),
    ]
}

/// Member list with keyboard navigation.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    members: Vec<Member>,
    pub list_state: ListState,
}

impl Roster {
    pub fn new(members: Vec<Member>) -> Self {
        let mut roster = Self {
            members,
            list_state: ListState::default(),
        };
        roster.reset_selection();
        roster
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn select_next(&mut self) {
        if self.members.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= self.members.len() - 1 => i,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_prev(&mut self) {
        if self.members.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Select the member at `index`, returning it if it exists.
    pub fn select_at(&mut self, index: usize) -> Option<&Member> {
        if index >= self.members.len() {
            return None;
        }
        self.list_state.select(Some(index));
        self.members.get(index)
    }

    pub fn selected_member(&self) -> Option<&Member> {
        self.members.get(self.list_state.selected()?)
    }

    fn reset_selection(&mut self) {
        if self.members.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }
}
