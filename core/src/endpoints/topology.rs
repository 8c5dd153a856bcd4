use super::Endpoints;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::params::{expand_path, QueryParams};

impl Endpoints {
    /// `GET /api/v1/topology/l2/{vlanID}`
    pub fn build_get_topology_details(&self, vlan_id: &str) -> Result<HttpRequest, ApiError> {
        let path = expand_path("/api/v1/topology/l2/{vlanID}", &[("vlanID", vlan_id)])?;
        Ok(self.get(&path, QueryParams::new()))
    }

    /// `GET /api/v1/topology/l3/{topologyType}`
    pub fn build_get_l3_topology_details(
        &self,
        topology_type: &str,
    ) -> Result<HttpRequest, ApiError> {
        let path = expand_path(
            "/api/v1/topology/l3/{topologyType}",
            &[("topologyType", topology_type)],
        )?;
        Ok(self.get(&path, QueryParams::new()))
    }

    /// `GET /api/v1/topology/physical-topology`
    pub fn build_get_physical_topology(&self, node_type: Option<&str>) -> HttpRequest {
        let query = QueryParams::new().opt("nodeType", node_type);
        self.get("/api/v1/topology/physical-topology", query)
    }

    /// `GET /api/v1/topology/site-topology`
    pub fn build_get_site_topology(&self) -> HttpRequest {
        self.get("/api/v1/topology/site-topology", QueryParams::new())
    }

    /// `GET /api/v1/topology/vlan/vlan-names`
    pub fn build_get_vlan_details(&self) -> HttpRequest {
        self.get("/api/v1/topology/vlan/vlan-names", QueryParams::new())
    }
}
