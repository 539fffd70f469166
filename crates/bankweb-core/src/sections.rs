//! Accordion sections of the product list, one per non-empty account type

use bankweb_loader::AccountType;
use serde::{Deserialize, Serialize};

use crate::accordion::{AccordionGroup, PanelId};
use crate::format::format_account_type;
use crate::grouping::GroupedProducts;

/// Panel backing one account-type bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub panel_id: PanelId,
    pub account_type: AccountType,
    pub count: usize,
}

impl Section {
    /// `Checking (2)`
    pub fn heading(&self) -> String {
        section_heading(&self.account_type, self.count)
    }
}

pub fn section_heading(account_type: &AccountType, count: usize) -> String {
    format!("{} ({})", format_account_type(account_type), count)
}

/// Accordion group plus the mapping from its panels to account types
#[derive(Debug, Default)]
pub struct ProductAccordion {
    group: AccordionGroup,
    sections: Vec<Section>,
}

impl ProductAccordion {
    pub fn new(allow_multiple: bool) -> Self {
        Self {
            group: AccordionGroup::new(allow_multiple),
            sections: Vec::new(),
        }
    }

    /// Replace all panels with one per non-empty bucket
    ///
    /// Old panels are deregistered, so their ids stop resolving. Types in
    /// `initially_open` start open when the group allows multiple panels.
    pub fn rebuild(&mut self, grouped: &GroupedProducts, initially_open: &[String]) {
        self.clear();

        for (account_type, bucket) in grouped.iter() {
            if bucket.is_empty() {
                continue;
            }
            let open = initially_open
                .iter()
                .any(|t| t.trim().eq_ignore_ascii_case(account_type.as_str()));
            let count = bucket.len();
            let panel_id = self
                .group
                .add_panel_with(section_heading(&account_type, count), open);
            self.sections.push(Section { panel_id, account_type, count });
        }

        log::debug!("accordion rebuilt with {} sections", self.sections.len());
    }

    /// Drop every panel, leaving no sections
    pub fn clear(&mut self) {
        self.group.clear();
        self.sections.clear();
    }

    /// Toggle a section; `None` when the id is not a current section
    pub fn toggle(&mut self, id: PanelId) -> Option<bool> {
        self.group.toggle(id)
    }

    pub fn open(&mut self, id: PanelId) -> Option<bool> {
        self.group.open(id)
    }

    pub fn close(&mut self, id: PanelId) -> Option<bool> {
        self.group.close(id)
    }

    pub fn is_open(&self, id: PanelId) -> bool {
        self.group.is_open(id).unwrap_or(false)
    }

    pub fn section(&self, id: PanelId) -> Option<&Section> {
        self.sections.iter().find(|s| s.panel_id == id)
    }

    pub fn section_for(&self, account_type: &AccountType) -> Option<&Section> {
        self.sections.iter().find(|s| &s.account_type == account_type)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn group(&self) -> &AccordionGroup {
        &self.group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::group_by_account_type;
    use bankweb_loader::{AccountState, BankingProduct};

    fn grouped(types: &[&str]) -> GroupedProducts {
        let products: Vec<BankingProduct> = types
            .iter()
            .enumerate()
            .map(|(i, t)| {
                BankingProduct::new(i.to_string(), "DE89370400440532013000", AccountType::from(*t), AccountState::Active)
            })
            .collect();
        group_by_account_type(&products)
    }

    #[test]
    fn test_rebuild_skips_empty_buckets() {
        let mut accordion = ProductAccordion::new(false);
        accordion.rebuild(&grouped(&["savings", "checking", "checking"]), &[]);

        let headings: Vec<String> = accordion.sections().iter().map(|s| s.heading()).collect();
        assert_eq!(headings, vec!["Checking (2)", "Savings (1)"]);
        assert_eq!(accordion.group().len(), 2);
        assert!(accordion.group().open_ids().is_empty());
    }

    #[test]
    fn test_single_open_sections() {
        let mut accordion = ProductAccordion::new(false);
        accordion.rebuild(&grouped(&["checking", "savings", "credit"]), &[]);
        let ids: Vec<PanelId> = accordion.sections().iter().map(|s| s.panel_id).collect();

        assert_eq!(accordion.toggle(ids[0]), Some(true));
        assert_eq!(accordion.toggle(ids[2]), Some(true));
        assert!(!accordion.is_open(ids[0]));
        assert_eq!(accordion.group().open_ids(), vec![ids[2]]);
    }

    #[test]
    fn test_rebuild_invalidates_old_ids() {
        let mut accordion = ProductAccordion::new(false);
        accordion.rebuild(&grouped(&["checking"]), &[]);
        let old = accordion.sections()[0].panel_id;
        accordion.toggle(old);

        accordion.rebuild(&grouped(&["checking"]), &[]);
        assert_eq!(accordion.toggle(old), None);
        assert!(accordion.section(old).is_none());
        assert!(!accordion.is_open(accordion.sections()[0].panel_id));
    }

    #[test]
    fn test_initially_open_in_multi_mode() {
        let mut accordion = ProductAccordion::new(true);
        let open = vec!["Savings".to_string(), "credit".to_string()];
        accordion.rebuild(&grouped(&["checking", "savings", "credit"]), &open);

        let checking = accordion.section_for(&AccountType::Checking).unwrap().panel_id;
        let savings = accordion.section_for(&AccountType::Savings).unwrap().panel_id;
        let credit = accordion.section_for(&AccountType::Credit).unwrap().panel_id;
        assert!(!accordion.is_open(checking));
        assert!(accordion.is_open(savings));
        assert!(accordion.is_open(credit));
    }

    #[test]
    fn test_initially_open_ignored_in_single_mode() {
        let mut accordion = ProductAccordion::new(false);
        accordion.rebuild(&grouped(&["checking", "savings"]), &["savings".to_string()]);
        assert!(accordion.group().open_ids().is_empty());
    }
}
