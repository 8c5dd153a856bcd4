//! Network topology records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A topology graph: devices (and clouds/hosts) as nodes, links between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Topology {
    pub id: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub nodes: Vec<TopologyNode>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub links: Vec<TopologyLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopologyNode {
    pub id: Option<String>,
    pub label: Option<String>,
    pub ip: Option<String>,
    pub device_type: Option<String>,
    pub family: Option<String>,
    pub node_type: Option<String>,
    pub network_type: Option<String>,
    pub os_type: Option<String>,
    pub platform_id: Option<String>,
    pub role: Option<String>,
    pub role_source: Option<String>,
    pub software_version: Option<String>,
    pub data_path_id: Option<String>,
    pub upper_node: Option<String>,
    pub user_id: Option<String>,
    pub vlan_id: Option<String>,
    pub acl_applied: Option<bool>,
    pub fixed: Option<bool>,
    pub grey_out: Option<bool>,
    pub order: Option<i64>,
    pub x: Option<i64>,
    pub y: Option<i64>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub tags: Vec<String>,
    pub custom_param: Option<CustomParam>,
    pub additional_info: Option<Value>,
}

/// Layout hints the controller UI stores per node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomParam {
    pub id: Option<String>,
    pub label: Option<String>,
    pub parent_node_id: Option<String>,
    pub x: Option<i64>,
    pub y: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopologyLink {
    pub id: Option<String>,
    pub source: Option<String>,
    pub target: Option<String>,
    pub link_status: Option<String>,
    pub tag: Option<String>,
    pub grey_out: Option<bool>,
    #[serde(rename = "startPortID")]
    pub start_port_id: Option<String>,
    pub start_port_name: Option<String>,
    pub start_port_ipv4_address: Option<String>,
    pub start_port_ipv4_mask: Option<String>,
    pub start_port_speed: Option<String>,
    #[serde(rename = "endPortID")]
    pub end_port_id: Option<String>,
    pub end_port_name: Option<String>,
    pub end_port_ipv4_address: Option<String>,
    pub end_port_ipv4_mask: Option<String>,
    pub end_port_speed: Option<String>,
    pub additional_info: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopologyResponse {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub response: Topology,
    #[serde(default)]
    pub version: Option<String>,
}

/// A site in the controller's location hierarchy. Coordinates are strings
/// on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Site {
    pub id: Option<String>,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub parent_id: Option<String>,
    pub group_name_hierarchy: Option<String>,
    pub location_type: Option<String>,
    pub location_address: Option<String>,
    pub location_country: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteTopology {
    #[serde(deserialize_with = "super::null_as_default")]
    pub sites: Vec<Site>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteTopologyResponse {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub response: SiteTopology,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VlanNamesResponse {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub response: Vec<String>,
    #[serde(default)]
    pub version: Option<String>,
}
