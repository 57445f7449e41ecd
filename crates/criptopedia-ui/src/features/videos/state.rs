//! Video search selection and result view models.

use crate::core::error::ValidationError;
use crate::features::catalog::state::{CUSTOM_OPTION_VALUE, CatalogState};
use crate::models::{VideoResult, VideoSearchResponse};

/// Delay between opening the modal from a card and starting the search.
pub const QUICK_SEARCH_DELAY_MS: u32 = 500;

/// Value chosen in the search select.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SelectChoice {
    /// Placeholder option.
    #[default]
    None,
    /// A catalog record id.
    Catalog(String),
    /// Free-text entry.
    Custom,
}

impl SelectChoice {
    /// Parse a select value.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "" => Self::None,
            CUSTOM_OPTION_VALUE => Self::Custom,
            id => Self::Catalog(id.to_string()),
        }
    }

    /// Select value for this choice.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::None => "",
            Self::Catalog(id) => id,
            Self::Custom => CUSTOM_OPTION_VALUE,
        }
    }
}

/// Current search inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchSelection {
    /// Select value.
    pub choice: SelectChoice,
    /// Free-text input, shown only for [`SelectChoice::Custom`].
    pub custom_text: String,
}

impl SearchSelection {
    /// Whether the free-text input should render.
    #[must_use]
    pub fn shows_custom_input(&self) -> bool {
        self.choice == SelectChoice::Custom
    }

    /// Resolve the selection into what gets sent.
    ///
    /// # Errors
    ///
    /// Returns a validation error when nothing is selected or the custom text is blank.
    pub fn resolve(&self, catalog: &CatalogState) -> Result<SearchTarget, ValidationError> {
        match &self.choice {
            SelectChoice::None => Err(ValidationError::SelectionMissing),
            SelectChoice::Custom => {
                let text = self.custom_text.trim();
                if text.is_empty() {
                    return Err(ValidationError::CustomTextMissing);
                }
                Ok(SearchTarget {
                    query: text.to_string(),
                    label: text.to_string(),
                })
            }
            SelectChoice::Catalog(id) => Ok(SearchTarget {
                query: id.clone(),
                label: catalog
                    .find_by_id(id)
                    .map_or_else(|| id.clone(), |record| record.name.clone()),
            }),
        }
    }
}

/// Resolved search request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTarget {
    /// Identifier posted to the backend.
    pub query: String,
    /// Name shown while loading and on errors.
    pub label: String,
}

/// Badge shown on a video thumbnail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VideoBadge {
    /// Live lookup.
    Real,
    /// Canned fallback.
    Fallback,
}

impl VideoBadge {
    /// Badge text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Real => "REAL",
            Self::Fallback => "Respaldo",
        }
    }

    fn for_video(video: &VideoResult) -> Option<Self> {
        if video.is_real() {
            Some(Self::Real)
        } else if video.is_fallback() {
            Some(Self::Fallback)
        } else {
            None
        }
    }
}

/// One rendered video card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoCard {
    /// Render key, unique within one result list.
    pub key: String,
    /// Provider id. The backend can return the same video twice.
    pub video_id: String,
    /// Title.
    pub title: String,
    /// Channel.
    pub channel: String,
    /// Thumbnail URL.
    pub thumbnail: String,
    /// Query that produced the result.
    pub search_term: Option<String>,
    /// Thumbnail badge.
    pub badge: Option<VideoBadge>,
    /// Link opened in a new tab.
    pub watch_url: String,
}

/// Results header plus cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoResultsView {
    /// Name resolved by the backend.
    pub algorithm_name: String,
    /// Total reported by the backend.
    pub total_results: usize,
    /// Results from a live lookup.
    pub real_count: usize,
    /// Fallback results.
    pub fallback_count: usize,
    /// Backend state label.
    pub backend_label: String,
    /// At least one result is a confirmed live lookup.
    pub api_active: bool,
    /// Cards in response order.
    pub cards: Vec<VideoCard>,
}

/// What the results region shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum VideoPanel {
    /// No search yet.
    #[default]
    Idle,
    /// Search in flight.
    Loading {
        /// Target name.
        label: String,
    },
    /// Backend returned no videos.
    Empty {
        /// Name resolved by the backend.
        algorithm_name: String,
    },
    /// Results grid.
    Results(VideoResultsView),
    /// Search failed; retry re-sends `target`.
    Failed {
        /// Target to retry.
        target: SearchTarget,
        /// Error text.
        message: String,
    },
}

/// Map a search response to the panel view model.
#[must_use]
pub fn video_panel(response: &VideoSearchResponse) -> VideoPanel {
    if response.videos.is_empty() {
        return VideoPanel::Empty {
            algorithm_name: response.algorithm_name.clone(),
        };
    }
    let cards: Vec<VideoCard> = response
        .videos
        .iter()
        .enumerate()
        .map(|(position, video)| VideoCard {
            key: format!("{position}-{}", video.video_id),
            video_id: video.video_id.clone(),
            title: video.title.clone(),
            channel: video.channel.clone(),
            thumbnail: video.thumbnail.clone(),
            search_term: video
                .search_term
                .clone()
                .filter(|term| !term.trim().is_empty()),
            badge: VideoBadge::for_video(video),
            watch_url: video.watch_url(),
        })
        .collect();
    let count = |badge| cards.iter().filter(|card| card.badge == Some(badge)).count();
    let real_count = count(VideoBadge::Real);
    let fallback_count = count(VideoBadge::Fallback);
    VideoPanel::Results(VideoResultsView {
        algorithm_name: response.algorithm_name.clone(),
        total_results: response.total_results,
        real_count,
        fallback_count,
        backend_label: response.youtube_api.clone(),
        api_active: real_count > 0,
        cards,
    })
}

/// Search modal state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VideoSearchState {
    /// Current inputs.
    pub selection: SearchSelection,
    /// Results region.
    pub panel: VideoPanel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog::state::tests::record;

    fn video(id: &str, api_real: bool, fallback: bool) -> VideoResult {
        VideoResult {
            video_id: id.to_string(),
            title: format!("Video {id}"),
            channel: "Canal".to_string(),
            thumbnail: format!("https://i.ytimg.com/vi/{id}/mqdefault.jpg"),
            search_term: Some(String::new()),
            api_real,
            fallback,
        }
    }

    #[test]
    fn selection_resolution_validates_inputs() {
        let mut catalog = CatalogState::default();
        catalog.replace_snapshot(vec![record("cesar", "Cifrado César")]);
        let mut selection = SearchSelection::default();
        assert_eq!(
            selection.resolve(&catalog),
            Err(ValidationError::SelectionMissing)
        );

        selection.choice = SelectChoice::from_value(CUSTOM_OPTION_VALUE);
        assert!(selection.shows_custom_input());
        assert_eq!(
            selection.resolve(&catalog),
            Err(ValidationError::CustomTextMissing)
        );
        selection.custom_text = "  Blowfish ".to_string();
        assert_eq!(
            selection.resolve(&catalog).map(|t| t.query),
            Ok("Blowfish".to_string())
        );

        selection.choice = SelectChoice::from_value("cesar");
        assert_eq!(
            selection.resolve(&catalog),
            Ok(SearchTarget {
                query: "cesar".to_string(),
                label: "Cifrado César".to_string()
            })
        );
    }

    #[test]
    fn empty_video_list_renders_placeholder() {
        let response = VideoSearchResponse {
            status: Some("success".to_string()),
            algorithm: Some("rot13".to_string()),
            algorithm_name: "ROT13".to_string(),
            videos: Vec::new(),
            total_results: 0,
            youtube_api: "ACTIVA".to_string(),
        };
        assert_eq!(
            video_panel(&response),
            VideoPanel::Empty {
                algorithm_name: "ROT13".to_string()
            }
        );
    }

    #[test]
    fn repeated_videos_get_distinct_keys() {
        let response = VideoSearchResponse {
            status: None,
            algorithm: None,
            algorithm_name: "ROT13".to_string(),
            videos: vec![video("dup", true, false), video("dup", true, false)],
            total_results: 2,
            youtube_api: "ACTIVA".to_string(),
        };
        let VideoPanel::Results(view) = video_panel(&response) else {
            panic!("expected results");
        };
        assert_eq!(view.cards.len(), 2);
        assert_eq!(view.cards[0].video_id, view.cards[1].video_id);
        assert_ne!(view.cards[0].key, view.cards[1].key);
    }

    #[test]
    fn results_count_badges() {
        let response = VideoSearchResponse {
            status: None,
            algorithm: None,
            algorithm_name: "AES".to_string(),
            videos: vec![
                video("a", true, false),
                video("b", false, true),
                video("c", true, true),
                video("d", false, false),
            ],
            total_results: 4,
            youtube_api: "ACTIVA".to_string(),
        };
        let VideoPanel::Results(view) = video_panel(&response) else {
            panic!("expected results");
        };
        assert_eq!(view.real_count, 2);
        assert_eq!(view.fallback_count, 1);
        assert!(view.api_active);
        assert_eq!(view.cards[1].badge.map(VideoBadge::label), Some("Respaldo"));
        assert_eq!(view.cards[3].badge, None);
        assert_eq!(view.cards[0].search_term, None);
        assert_eq!(view.cards[0].watch_url, "https://www.youtube.com/watch?v=a");
    }
}
