use crate::config::ConfigError;
use crate::sprite::HWSpriteAllocError;

/// Everything that can go wrong while setting up the scene.
///
/// Once the scene is running, nothing can fail anymore.
#[derive(Debug)]
pub enum WaveError {
    Sprite(HWSpriteAllocError),
    Config(ConfigError),
}

impl core::fmt::Display for WaveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WaveError::Sprite(err) => write!(f, "{}", err),
            WaveError::Config(err) => write!(f, "{}", err),
        }
    }
}

impl From<HWSpriteAllocError> for WaveError {
    fn from(err: HWSpriteAllocError) -> Self {
        return WaveError::Sprite(err);
    }
}

impl From<ConfigError> for WaveError {
    fn from(err: ConfigError) -> Self {
        return WaveError::Config(err);
    }
}
