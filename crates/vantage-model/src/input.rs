//! Input-device descriptions.

use serde::{Deserialize, Serialize};

/// Kind of input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    /// A keyboard.
    Keyboard,
    /// A pointing device.
    Pointer,
    /// A touchscreen.
    Touch,
    /// A drawing-tablet tool.
    TabletTool,
    /// A drawing-tablet pad.
    TabletPad,
    /// A lid or tablet-mode switch.
    Switch,
    /// Device kind could not be determined.
    Unknown,
}

/// Snapshot of a single input device, in the exact shape clients receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDeviceDescription {
    /// Stable device id.
    pub id: u64,
    /// Kernel device name.
    pub name: String,
    /// USB vendor id.
    pub vendor: u32,
    /// USB product id.
    pub product: u32,
    /// Device kind.
    #[serde(rename = "type")]
    pub kind: DeviceType,
    /// Whether the device currently emits events.
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_type_strings_use_snake_case() {
        assert_eq!(
            serde_json::to_value(DeviceType::TabletTool).expect("serialize"),
            serde_json::json!("tablet_tool")
        );
        assert_eq!(
            serde_json::to_value(DeviceType::Keyboard).expect("serialize"),
            serde_json::json!("keyboard")
        );
    }

    #[test]
    fn device_serializes_type_field() {
        let device = InputDeviceDescription {
            id: 3,
            name: "AT Translated Set 2 keyboard".into(),
            vendor: 1,
            product: 1,
            kind: DeviceType::Keyboard,
            enabled: true,
        };
        let value = serde_json::to_value(device).expect("serialize device");
        assert_eq!(value.get("type"), Some(&serde_json::json!("keyboard")));
    }
}
