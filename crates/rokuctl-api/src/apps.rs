// ECP application endpoints
//
// Installed-app and active-app queries (`query/*`) plus launching
// (`launch/{id}`). Nothing is cached: every lookup fetches the live list.

use tracing::{debug, info};

use crate::client::EcpClient;
use crate::error::Error;
use crate::models::{App, AppList};

impl EcpClient {
    /// List installed applications, in the order the device reports them.
    ///
    /// `GET /query/apps`
    pub async fn query_apps(&self) -> Result<Vec<App>, Error> {
        let url = self.endpoint("query/apps")?;
        let body = self.get_text(url).await?;
        let apps = AppList::from_xml(&body)?.into_vec();
        debug!(count = apps.len(), "queried installed apps");
        Ok(apps)
    }

    /// The app currently in the foreground.
    ///
    /// `GET /query/active-app`. Anything other than exactly one `<app>`
    /// element is reported as [`Error::AmbiguousActiveApp`].
    pub async fn query_active_app(&self) -> Result<App, Error> {
        let url = self.endpoint("query/active-app")?;
        let body = self.get_text(url).await?;
        let mut apps = AppList::from_xml(&body)?.into_vec();
        match apps.len() {
            1 => Ok(apps.remove(0)),
            count => Err(Error::AmbiguousActiveApp { count }),
        }
    }

    /// Launch an app by its device identifier.
    ///
    /// `POST /launch/{id}`
    pub async fn launch_app(&self, id: &str) -> Result<(), Error> {
        let url = self.endpoint_with_segment("launch", id)?;
        debug!(id, "launching app");
        self.post(url).await
    }

    /// Launch the first app whose name equals `name` (case-sensitive).
    pub async fn launch_app_by_exact_name(&self, name: &str) -> Result<App, Error> {
        let apps = self.query_apps().await?;
        let app = find_by_exact_name(&apps, name).ok_or_else(|| Error::AppNotFound {
            query: name.to_owned(),
        })?;
        self.launch_found(app).await
    }

    /// Launch the first app whose name contains `query`, ignoring case.
    ///
    /// "First" follows the device's list order, which is not guaranteed to be
    /// stable between calls.
    pub async fn launch_app_by_name_match(&self, query: &str) -> Result<App, Error> {
        let apps = self.query_apps().await?;
        let app = find_by_name_match(&apps, query).ok_or_else(|| Error::AppNotFound {
            query: query.to_owned(),
        })?;
        self.launch_found(app).await
    }

    async fn launch_found(&self, app: &App) -> Result<App, Error> {
        info!(name = %app.name, id = %app.id, "launching matched app");
        self.launch_app(&app.id).await?;
        Ok(app.clone())
    }
}

/// First app whose name is exactly `name`.
pub fn find_by_exact_name<'a>(apps: &'a [App], name: &str) -> Option<&'a App> {
    apps.iter().find(|app| app.name == name)
}

/// First app whose lowercased name contains lowercased `query`.
///
/// A plain linear scan that stops on the first hit; no ranking.
pub fn find_by_name_match<'a>(apps: &'a [App], query: &str) -> Option<&'a App> {
    let needle = query.to_lowercase();
    apps.iter()
        .find(|app| app.name.to_lowercase().contains(&needle))
}
