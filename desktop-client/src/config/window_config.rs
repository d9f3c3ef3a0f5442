use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl WindowConfig {
    const MIN_SIZE: f32 = 240.0;
    const MAX_SIZE: f32 = 4096.0;
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&value) {
                return Err(format!(
                    "window {} must be between {} and {}, got {}",
                    name,
                    Self::MIN_SIZE,
                    Self::MAX_SIZE,
                    value
                ));
            }
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
        }
    }
}
