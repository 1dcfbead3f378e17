//! Fixed-status endpoint table.
//!
//! Each entry maps a route path to the status code it always answers with and
//! the label its hits are counted under. The table is static and lives for the
//! whole process.

/// One fixed-status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDef {
    /// Exact route path, including the leading slash.
    pub path: &'static str,
    /// HTTP status code written on every hit.
    pub status: u16,
    /// Metric label value. Not a route; only used as a counter key.
    pub label: &'static str,
}

pub static ENDPOINTS: [EndpointDef; 4] = [
    EndpointDef { path: "/test200", status: 200, label: "test200" },
    EndpointDef { path: "/test400", status: 400, label: "test400" },
    EndpointDef { path: "/test401", status: 401, label: "test401" },
    EndpointDef { path: "/test404", status: 404, label: "test404" },
];
