//! Domain core of the university analytics dashboard.
//!
//! Everything here is independent of the rendering target: the browser app
//! and the terminal client plug in their own [`Transport`] and
//! [`KeyValueStore`] and share the session lifecycle, the backend client and
//! the view transforms.

pub mod charts;
pub mod client;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod models;
pub mod prediction;
pub mod session;
pub mod storage;
pub mod transport;

#[cfg(test)]
mod testing;

pub use charts::{ChartDataset, ChartEntry, ChartKind, ChartPlan, PALETTE};
pub use client::{DashboardClient, endpoints, report_file_name};
pub use dashboard::DashboardState;
pub use error::{
    AuthError, DownloadError, FetchError, PredictionError, RequestError, StorageError,
    TransportError, ValidationError,
};
pub use format::{GradeBand, StatCard, grade_color, stat_cards};
pub use models::{
    AttendanceByCourse, DashboardData, DashboardStats, DepartmentCounts, GradeDistribution,
    GradesOverTime, LoginResponse, PaymentStatus, PredictionResult, TopStudents, UserIdentity,
};
pub use prediction::{PredictionPanel, PredictionState};
pub use session::{Session, SessionStore};
pub use storage::{KeyValueStore, MemoryStore};
pub use transport::{ApiRequest, ApiResponse, Method, Transport};
