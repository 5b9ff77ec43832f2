//! Static build and configuration information.

use serde::{Deserialize, Serialize};

/// Build-time and configuration facts about the host, served verbatim by
/// the `host/configuration` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfiguration {
    /// Control-protocol ABI version.
    #[serde(rename = "api-version")]
    pub api_version: u32,
    /// Directory plugins are loaded from.
    #[serde(rename = "plugin-path")]
    pub plugin_path: String,
    /// Directory plugin metadata is loaded from.
    #[serde(rename = "plugin-xml-dir")]
    pub plugin_xml_dir: String,
    /// Whether the host was built with Xwayland support.
    #[serde(rename = "xwayland-support")]
    pub xwayland_support: bool,
    /// Git commit the host was built from.
    #[serde(rename = "build-commit")]
    pub build_commit: String,
    /// Git branch the host was built from.
    #[serde(rename = "build-branch")]
    pub build_branch: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_kebab_case_keys() {
        let config = HostConfiguration {
            api_version: 1,
            plugin_path: "/usr/lib/vantage".into(),
            plugin_xml_dir: "/usr/share/vantage/metadata".into(),
            xwayland_support: true,
            build_commit: "abc1234".into(),
            build_branch: "main".into(),
        };
        let value = serde_json::to_value(config).expect("serialize configuration");
        let object = value.as_object().expect("configuration is an object");
        for key in [
            "api-version",
            "plugin-path",
            "plugin-xml-dir",
            "xwayland-support",
            "build-commit",
            "build-branch",
        ] {
            assert!(object.contains_key(key), "missing wire field {key}");
        }
    }
}
