//! Launch dashboard core: a launch data gateway with client-side paging
//! and the controller that reduces its results into dashboard view state.
pub mod clients;
pub mod config;
pub mod controller;
pub mod domain;
pub mod errors;
pub mod gateway;
pub mod utils;

pub use clients::LaunchApiClient;
pub use config::AppConfig;
pub use controller::{
    DashboardController, DashboardEvent, DashboardViewState, LaunchDetailModal,
};
pub use domain::{LaunchDetail, LaunchStatus, LaunchSummary, Page, StatRow, Statistics};
pub use errors::{GatewayError, GatewayResult};
pub use gateway::{LaunchDataGateway, LaunchGateway, LaunchSource};
