use crate::error::Error;

/// Window title
pub const WINDOW_TITLE: &str = "Game of Life";

/// Default window dimensions in logical pixels
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 960;

/// Default cell edge length in pixels
pub const CELL_SIZE: u32 = 10;

/// Default target frame rate (one generation per frame)
pub const FRAME_RATE: u32 = 30;

/// Gap between neighbouring cells in pixels
pub const CELL_SPACING: u32 = 1;

// ============================================
// Palette (sRGB)
// ============================================

pub const BACKGROUND_COLOR: [u8; 3] = [100, 100, 100];
pub const DEAD_COLOR: [u8; 3] = [50, 50, 50];
pub const ALIVE_COLOR: [u8; 3] = [245, 120, 66];

/// Construction-time settings. Nothing here changes once the loop is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub window_width: u32,
    pub window_height: u32,
    pub cell_size: u32,
    pub frame_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            cell_size: CELL_SIZE,
            frame_rate: FRAME_RATE,
        }
    }
}

impl Config {
    /// Grid rows (window height / cell size)
    pub fn rows(&self) -> usize {
        (self.window_height / self.cell_size.max(1)) as usize
    }

    /// Grid columns (window width / cell size)
    pub fn columns(&self) -> usize {
        (self.window_width / self.cell_size.max(1)) as usize
    }

    /// Reject settings the simulation cannot start with.
    pub fn validate(&self) -> Result<(), Error> {
        if self.cell_size == 0 {
            return Err(Error::ZeroCellSize);
        }
        if self.frame_rate == 0 {
            return Err(Error::ZeroFrameRate);
        }
        if self.rows() == 0 || self.columns() == 0 {
            return Err(Error::WindowTooSmall {
                width: self.window_width,
                height: self.window_height,
                cell_size: self.cell_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let config = Config::default();
        assert_eq!(config.rows(), 96);
        assert_eq!(config.columns(), 128);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_cell_size_rejected() {
        let config = Config {
            cell_size: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::ZeroCellSize)));
    }

    #[test]
    fn test_zero_frame_rate_rejected() {
        let config = Config {
            frame_rate: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::ZeroFrameRate)));
    }

    #[test]
    fn test_window_smaller_than_cell_rejected() {
        let config = Config {
            window_height: 5,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::WindowTooSmall { height: 5, .. })
        ));
    }
}
