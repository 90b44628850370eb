//! Display Regions
//!
//! The two mutually exclusive output areas: the match list and the
//! single-country detail card. Writers go through these methods so that at
//! most one region ever has content.

use crate::logic::display::{CountryCard, ListEntry};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayRegions {
    list: Vec<ListEntry>,
    detail: Option<CountryCard>,
}

impl DisplayRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty both regions
    pub fn clear(&mut self) {
        self.list.clear();
        self.detail = None;
    }

    /// Fill the list region; the detail region is emptied
    pub fn show_list(&mut self, entries: Vec<ListEntry>) {
        self.detail = None;
        self.list = entries;
    }

    /// Fill the detail region; the list region is emptied
    pub fn show_detail(&mut self, card: CountryCard) {
        self.list.clear();
        self.detail = Some(card);
    }

    pub fn list(&self) -> &[ListEntry] {
        &self.list
    }

    pub fn detail(&self) -> Option<&CountryCard> {
        self.detail.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty() && self.detail.is_none()
    }
}
