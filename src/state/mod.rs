// State management module.
// Handles the quote panel, member modal, roster and page navigation.

#![allow(dead_code, unused_imports)]

pub mod member;
pub mod navigation;
pub mod quote;
pub mod roster;

pub use member::{Member, MemberModal, MemberRecord, ModalFields, ModalLayout, ModalState};
pub use navigation::{Overflow, PageNavigator, PageScroll, View};
pub use quote::{
    FETCH_FAILED_MESSAGE, LoadingState, PLACEHOLDER_TEXT, QuoteDisplay, QuotePanel,
    UNAVAILABLE_TEXT,
};
pub use roster::{Roster, default_members};
