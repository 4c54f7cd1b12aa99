//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined alongside the ones sharing its upstream resource.

pub mod colombia;

pub use colombia::{
    ApiColombiaClient, DepartmentIdParams, GetAllDepartmentsTool, GetCountryTool,
    GetDepartmentByIdTool, GetDepartmentsByRegionTool, GetRegionByIdTool, GetRegionsTool,
    RegionIdParams,
};
