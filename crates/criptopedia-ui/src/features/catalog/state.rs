//! Catalog snapshot and the view models derived from it.
//!
//! # Design
//! - Duplicate ids in a refresh keep their first occurrence.
//! - A failed refresh keeps the previous snapshot; only the status changes.
//! - Admin affordances are decided here from the session flag, not in markup.

use crate::core::auth::SessionState;
use crate::models::{AlgorithmRecord, Difficulty};
use std::collections::HashSet;

/// Select value that reveals the free-text search field.
pub const CUSTOM_OPTION_VALUE: &str = "custom";

/// Lifecycle of the catalog fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// A fetch is in flight.
    #[default]
    Loading,
    /// The snapshot reflects the last successful fetch.
    Ready,
    /// The last fetch failed with this message.
    Failed(String),
}

/// Cached catalog snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogState {
    snapshot: Vec<AlgorithmRecord>,
    /// Fetch status.
    pub status: LoadStatus,
}

impl CatalogState {
    /// Records in server order.
    #[must_use]
    pub fn records(&self) -> &[AlgorithmRecord] {
        &self.snapshot
    }

    /// Number of cached records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    /// Whether the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Replace the snapshot atomically and mark it ready.
    pub fn replace_snapshot(&mut self, records: Vec<AlgorithmRecord>) {
        let mut seen = HashSet::with_capacity(records.len());
        self.snapshot = records
            .into_iter()
            .filter(|record| seen.insert(record.id.clone()))
            .collect();
        self.status = LoadStatus::Ready;
    }

    /// Mark a fetch as started.
    pub fn mark_loading(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// Record a failed fetch, keeping the previous snapshot.
    pub fn mark_failed(&mut self, message: impl Into<String>) {
        self.status = LoadStatus::Failed(message.into());
    }

    /// Look up a record by id.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&AlgorithmRecord> {
        self.snapshot.iter().find(|record| record.id == id)
    }
}

/// One rendered algorithm card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    /// Record id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category badge text.
    pub category: String,
    /// Difficulty badge text.
    pub difficulty: String,
    /// CSS tone for the difficulty badge.
    pub difficulty_tone: &'static str,
    /// Key-type badge text.
    pub key_type: String,
    /// Description paragraph.
    pub description: String,
    /// Encryption example.
    pub encryption_example: String,
    /// Decryption example.
    pub decryption_example: String,
    /// Edit/delete controls and the id footer are shown.
    pub admin: bool,
}

impl CardView {
    fn from_record(record: &AlgorithmRecord, admin: bool) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            category: record.category.label().to_string(),
            difficulty: record.difficulty.label().to_string(),
            difficulty_tone: difficulty_tone(&record.difficulty),
            key_type: record.key_type.label().to_string(),
            description: record.description.clone(),
            encryption_example: record.encryption_example.clone(),
            decryption_example: record.decryption_example.clone(),
            admin,
        }
    }
}

/// What the grid region shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogView {
    /// First load still in flight.
    Loading,
    /// Fetch failed; the view offers a retry.
    Failed {
        /// Error text shown above the retry button.
        message: String,
    },
    /// Catalog is empty.
    Empty {
        /// Offer the "add first algorithm" action.
        can_add: bool,
    },
    /// One card per record.
    Cards(Vec<CardView>),
}

/// Map catalog and session state to the grid view model.
#[must_use]
pub fn catalog_view(catalog: &CatalogState, session: &SessionState) -> CatalogView {
    match &catalog.status {
        LoadStatus::Failed(message) => CatalogView::Failed {
            message: message.clone(),
        },
        LoadStatus::Loading if catalog.is_empty() => CatalogView::Loading,
        _ if catalog.is_empty() => CatalogView::Empty {
            can_add: session.is_admin(),
        },
        _ => CatalogView::Cards(
            catalog
                .records()
                .iter()
                .map(|record| CardView::from_record(record, session.is_admin()))
                .collect(),
        ),
    }
}

/// One `<option>` of the video search select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    /// Option value.
    pub value: String,
    /// Option text.
    pub label: String,
}

/// Options for the search select: placeholder, one per record, then the custom sentinel.
#[must_use]
pub fn select_options(catalog: &CatalogState) -> Vec<SelectOption> {
    let mut options = Vec::with_capacity(catalog.len() + 2);
    options.push(SelectOption {
        value: String::new(),
        label: "Selecciona un algoritmo...".to_string(),
    });
    options.extend(catalog.records().iter().map(|record| SelectOption {
        value: record.id.clone(),
        label: record.name.clone(),
    }));
    options.push(SelectOption {
        value: CUSTOM_OPTION_VALUE.to_string(),
        label: "⚡ Escribir algoritmo personalizado...".to_string(),
    });
    options
}

const fn difficulty_tone(difficulty: &Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Beginner => "easy",
        Difficulty::Intermediate => "medium",
        Difficulty::Advanced => "hard",
        Difficulty::Other(_) => "neutral",
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{Category, KeyType};

    pub(crate) fn record(id: &str, name: &str) -> AlgorithmRecord {
        AlgorithmRecord {
            id: id.to_string(),
            name: name.to_string(),
            category: Category::ClassicalCrypto,
            description: format!("{name} description"),
            encryption_example: "HOLA → KROD".to_string(),
            decryption_example: "KROD → HOLA".to_string(),
            key_type: KeyType::Integer,
            difficulty: Difficulty::Beginner,
        }
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let mut catalog = CatalogState::default();
        let mut second = record("cesar", "Otro César");
        second.description = "duplicate".to_string();
        catalog.replace_snapshot(vec![record("cesar", "César"), record("rot13", "ROT13"), second]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find_by_id("cesar").map(|r| r.name.as_str()), Some("César"));
        assert_eq!(catalog.status, LoadStatus::Ready);
    }

    #[test]
    fn failure_keeps_previous_snapshot() {
        let mut catalog = CatalogState::default();
        catalog.replace_snapshot(vec![record("rot13", "ROT13")]);
        catalog.mark_loading();
        catalog.mark_failed("Error de conexión con el servidor");
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog_view(&catalog, &SessionState::default()),
            CatalogView::Failed {
                message: "Error de conexión con el servidor".to_string()
            }
        );
    }

    #[test]
    fn view_states_follow_status_and_snapshot() {
        let mut catalog = CatalogState::default();
        assert_eq!(
            catalog_view(&catalog, &SessionState::default()),
            CatalogView::Loading
        );
        catalog.replace_snapshot(Vec::new());
        assert_eq!(
            catalog_view(&catalog, &SessionState::restored()),
            CatalogView::Empty { can_add: true }
        );
        catalog.replace_snapshot(vec![record("rot13", "ROT13")]);
        catalog.mark_loading();
        assert!(matches!(
            catalog_view(&catalog, &SessionState::default()),
            CatalogView::Cards(cards) if cards.len() == 1 && !cards[0].admin
        ));
    }

    #[test]
    fn select_options_wrap_records() {
        let mut catalog = CatalogState::default();
        catalog.replace_snapshot(vec![record("cesar", "César"), record("rot13", "ROT13")]);
        let options = select_options(&catalog);
        assert_eq!(options.len(), 4);
        assert!(options[0].value.is_empty());
        assert_eq!(options[2].label, "ROT13");
        assert_eq!(options[3].value, CUSTOM_OPTION_VALUE);
    }
}
