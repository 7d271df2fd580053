//! Raw audit document returned by PageSpeed Insights.

mod decode;
mod models;

pub(crate) use decode::{as_number, is_truthy};
pub use models::{
    Audit, AuditDetails, Category, LighthouseResult, PageSpeedResponse, ProviderErrorBody,
};
