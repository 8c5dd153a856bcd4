use crate::client::NetworkClient;
use crate::request::RequestBuilder;
use crate::transport::Transport;
use crate::types::{SiteTopologyResponse, TopologyResponse, VlanNamesResponse};

/// Network topology views.
pub struct TopologyApi<'c, T> {
    client: &'c NetworkClient<T>,
}

impl<'c, T: Transport> TopologyApi<'c, T> {
    pub(crate) fn new(client: &'c NetworkClient<T>) -> Self {
        Self { client }
    }

    /// Layer 2 topology for one VLAN.
    pub fn get_topology_details(&self, vlan_id: &str) -> RequestBuilder<'c, T, TopologyResponse> {
        let request = self.client.endpoints().build_get_topology_details(vlan_id);
        self.client.dispatch(request)
    }

    /// Layer 3 topology for a routing protocol (`OSPF`, `EIGRP`, `ISIS`,
    /// `static`) or `layer3`.
    pub fn get_l3_topology_details(
        &self,
        topology_type: &str,
    ) -> RequestBuilder<'c, T, TopologyResponse> {
        let request = self
            .client
            .endpoints()
            .build_get_l3_topology_details(topology_type);
        self.client.dispatch(request)
    }

    /// Physical topology of the whole network, optionally limited to one
    /// node type such as `device`.
    pub fn get_physical_topology(
        &self,
        node_type: Option<&str>,
    ) -> RequestBuilder<'c, T, TopologyResponse> {
        let request = self.client.endpoints().build_get_physical_topology(node_type);
        self.client.dispatch(Ok(request))
    }

    /// The site hierarchy: areas, buildings and floors.
    pub fn get_site_topology(&self) -> RequestBuilder<'c, T, SiteTopologyResponse> {
        let request = self.client.endpoints().build_get_site_topology();
        self.client.dispatch(Ok(request))
    }

    /// Names of the VLANs the controller knows about.
    pub fn get_vlan_details(&self) -> RequestBuilder<'c, T, VlanNamesResponse> {
        let request = self.client.endpoints().build_get_vlan_details();
        self.client.dispatch(Ok(request))
    }
}
