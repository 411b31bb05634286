use tracing::error;

use crate::charts::{ChartDataset, ChartPlan};
use crate::error::FetchError;
use crate::format::{StatCard, stat_cards};
use crate::models::DashboardData;

/// What the dashboard page shows.
///
/// The page renders nothing but the loading indicator until a complete
/// dashboard has arrived. A failed fetch is logged and the page stays in
/// `Loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardState {
    #[default]
    Loading,
    Ready(Box<DashboardData>),
}

impl DashboardState {
    pub fn from_fetch(result: Result<DashboardData, FetchError>) -> Self {
        match result {
            Ok(data) => DashboardState::Ready(Box::new(data)),
            Err(e) => {
                error!("Error fetching dashboard data: {}", e);
                DashboardState::Loading
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading)
    }

    pub fn data(&self) -> Option<&DashboardData> {
        match self {
            DashboardState::Ready(data) => Some(&**data),
            DashboardState::Loading => None,
        }
    }

    pub fn stat_cards(&self) -> Vec<StatCard> {
        self.data().map(|d| stat_cards(&d.stats)).unwrap_or_default()
    }

    pub fn chart_plans(&self) -> Vec<ChartPlan> {
        self.data()
            .map(|d| ChartDataset::all(d).iter().map(ChartDataset::plan).collect())
            .unwrap_or_default()
    }
}
