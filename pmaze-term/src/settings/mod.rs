use std::{
    fs,
    path::{Path, PathBuf},
};

use pmaze::{algorithms::LifeLike, Dims, MazeSpec};
use ron::{self, extensions::Extensions, ser::PrettyConfig};
use serde::{Deserialize, Serialize};

use crate::{constants, error::AppError};

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Grey,
    Rgb(u8, u8, u8),
}

impl From<Color> for crossterm::style::Color {
    fn from(color: Color) -> Self {
        use crossterm::style::Color as C;

        match color {
            Color::Black => C::Black,
            Color::Red => C::Red,
            Color::Green => C::Green,
            Color::Yellow => C::Yellow,
            Color::Blue => C::Blue,
            Color::Magenta => C::Magenta,
            Color::Cyan => C::Cyan,
            Color::White => C::White,
            Color::Grey => C::Grey,
            Color::Rgb(r, g, b) => C::Rgb { r, g, b },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    #[serde(default)]
    pub open_ends: Option<bool>,
    #[serde(default)]
    pub markers: Option<bool>,
    #[serde(default)]
    pub color: Option<bool>,
    #[serde(default)]
    pub path_color: Option<Color>,
    #[serde(default)]
    pub start_color: Option<Color>,
    #[serde(default)]
    pub end_color: Option<Color>,
}

impl RenderSettings {
    pub fn get_open_ends(&self) -> bool {
        self.open_ends.unwrap_or(true)
    }

    pub fn get_markers(&self) -> bool {
        self.markers.unwrap_or(true)
    }

    pub fn get_color(&self) -> bool {
        self.color.unwrap_or(true)
    }

    pub fn set_color(mut self, value: bool) -> Self {
        self.color = Some(value);
        self
    }

    pub fn get_path_color(&self) -> Color {
        self.path_color.unwrap_or(Color::Blue)
    }

    pub fn get_start_color(&self) -> Color {
        self.start_color.unwrap_or(Color::Green)
    }

    pub fn get_end_color(&self) -> Color {
        self.end_color.unwrap_or(Color::Red)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifeSettings {
    #[serde(default)]
    pub size: Option<Dims>,
    #[serde(default)]
    pub patch: Option<Dims>,
    #[serde(default)]
    pub iterations: Option<usize>,
    #[serde(default)]
    pub density: Option<f64>,
}

impl LifeSettings {
    pub fn get_size(&self) -> Dims {
        self.size.unwrap_or(LifeLike::DEFAULT_SIZE)
    }

    pub fn get_patch(&self) -> Dims {
        self.patch.unwrap_or(LifeLike::DEFAULT_PATCH)
    }

    pub fn get_iterations(&self) -> usize {
        self.iterations.unwrap_or(LifeLike::DEFAULT_ITERATIONS)
    }

    pub fn get_density(&self) -> f64 {
        self.density.unwrap_or(LifeLike::DEFAULT_DENSITY)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub maze: Option<MazeSpec>,
    #[serde(default)]
    pub render: Option<RenderSettings>,
    #[serde(default)]
    pub life: Option<LifeSettings>,
}

impl Settings {
    pub fn default_path() -> PathBuf {
        constants::settings_path()
    }

    pub fn get_maze(&self) -> MazeSpec {
        self.maze
            .clone()
            .unwrap_or_else(|| MazeSpec::new(Dims(15, 15)))
    }

    pub fn get_render(&self) -> RenderSettings {
        self.render.clone().unwrap_or_default()
    }

    pub fn get_life(&self) -> LifeSettings {
        self.life.clone().unwrap_or_default()
    }

    fn options() -> ron::Options {
        ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
    }

    pub fn parse(text: &str, path: &Path) -> Result<Self, AppError> {
        Self::options()
            .from_str(text)
            .map_err(|source| AppError::Settings {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Reads the settings, writing the defaults there first if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text, path),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("creating default settings at {:?}", path);
                Self::reset_config(path)?;
                Self::parse(DEFAULT_SETTINGS, path)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }

    pub fn to_ron(&self) -> Result<String, AppError> {
        Ok(Self::options().to_string_pretty(self, PrettyConfig::default())?)
    }
}
