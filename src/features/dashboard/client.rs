//! Client helper for the dashboard statistics endpoint.

use super::types::DashboardStats;
use crate::{errors::Error, http::ApiClient};

/// Fetches the aggregate counters for the admin landing page.
pub async fn get_stats(api: &ApiClient) -> Result<DashboardStats, Error> {
    api.get_json("/dashboard/stats").await
}
