//! API Colombia tools module.
//!
//! This module exposes the API Colombia REST service as MCP tools:
//! - `country`: general profile of Colombia
//! - `regions`: region listing and region detail
//! - `departments`: department listings (all, by region) and detail
//!
//! Supporting pieces:
//! - `client`: the upstream HTTP client
//! - `models`: payload shapes
//! - `format`: text rendering
//! - `lookup`: the shared fetch → classify → format pipeline

pub mod client;
pub mod common;
pub mod country;
pub mod departments;
pub mod format;
pub mod lookup;
pub mod models;
pub mod regions;

pub use client::{ApiColombiaClient, FetchError};
pub use country::GetCountryTool;
pub use departments::{
    DepartmentIdParams, GetAllDepartmentsTool, GetDepartmentByIdTool, GetDepartmentsByRegionTool,
};
pub use lookup::{Lookup, LookupError};
pub use regions::{GetRegionByIdTool, GetRegionsTool, RegionIdParams};
