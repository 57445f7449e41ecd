//! Handle on the catalog backend shared by the controller.
//!
//! The base URL is resolved once when the app mounts (page hostname, then the
//! stored override) and logged so a misrouted deployment shows up in the
//! console. Handles compare by pointer: cloning the controller never counts
//! as a new backend.

use crate::app::preferences::api_base_url;
use crate::services::api::ApiClient;
use gloo::console;
use std::rc::Rc;

#[derive(Clone)]
pub(crate) struct ApiCtx {
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Client for the backend that serves the current page.
    pub(crate) fn for_page() -> Self {
        let base_url = api_base_url();
        console::log!("catalog api", base_url.clone());
        Self {
            client: Rc::new(ApiClient::new(base_url)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
