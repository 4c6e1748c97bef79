use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct WorldGenConfig {
    #[serde(default)]
    pub height: Height,
    #[serde(default)]
    pub bands: Bands,
    #[serde(default)]
    pub caves: Caves,
    #[serde(default)]
    pub trees: Trees,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Height {
    #[serde(default = "default_base_frequency")]
    pub base_frequency: f32,
    #[serde(default = "default_terrain_frequency")]
    pub terrain_frequency: f32,
    #[serde(default = "default_floor_offset")]
    pub floor_offset: f32,
    #[serde(default)]
    pub island: Island,
}
fn default_base_frequency() -> f32 {
    0.007
}
fn default_terrain_frequency() -> f32 {
    0.002
}
fn default_floor_offset() -> f32 {
    2.0
}
impl Default for Height {
    fn default() -> Self {
        Self {
            base_frequency: default_base_frequency(),
            terrain_frequency: default_terrain_frequency(),
            floor_offset: default_floor_offset(),
            island: Island::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Island {
    #[serde(default = "default_falloff_scale")]
    pub falloff_scale: f32,
    #[serde(default = "default_falloff_exponent")]
    pub falloff_exponent: i32,
    #[serde(default = "default_epsilon")]
    pub epsilon: f32,
}
fn default_falloff_scale() -> f32 {
    0.0025
}
fn default_falloff_exponent() -> i32 {
    20
}
fn default_epsilon() -> f32 {
    0.0001
}
impl Default for Island {
    fn default() -> Self {
        Self {
            falloff_scale: default_falloff_scale(),
            falloff_exponent: default_falloff_exponent(),
            epsilon: default_epsilon(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Bands {
    #[serde(default = "default_snow_lvl")]
    pub snow_lvl: i32,
    #[serde(default = "default_stone_lvl")]
    pub stone_lvl: i32,
    #[serde(default = "default_dirt_lvl")]
    pub dirt_lvl: i32,
    #[serde(default = "default_grass_lvl")]
    pub grass_lvl: i32,
    #[serde(default = "default_jitter_span")]
    pub jitter_span: i32,
}
fn default_snow_lvl() -> i32 {
    54
}
fn default_stone_lvl() -> i32 {
    49
}
fn default_dirt_lvl() -> i32 {
    40
}
fn default_grass_lvl() -> i32 {
    8
}
fn default_jitter_span() -> i32 {
    7
}
impl Default for Bands {
    fn default() -> Self {
        Self {
            snow_lvl: default_snow_lvl(),
            stone_lvl: default_stone_lvl(),
            dirt_lvl: default_dirt_lvl(),
            grass_lvl: default_grass_lvl(),
            jitter_span: default_jitter_span(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Caves {
    #[serde(default = "default_carvers_enable")]
    pub enable: bool,
    #[serde(default = "default_cavity_frequency")]
    pub cavity_frequency: f32,
    #[serde(default = "default_cave_floor_frequency")]
    pub floor_frequency: f32,
    #[serde(default = "default_cave_floor_scale")]
    pub floor_scale: f32,
    #[serde(default = "default_cave_floor_offset")]
    pub floor_offset: f32,
    #[serde(default = "default_surface_margin")]
    pub surface_margin: i32,
}
fn default_carvers_enable() -> bool {
    true
}
fn default_cavity_frequency() -> f32 {
    0.09
}
fn default_cave_floor_frequency() -> f32 {
    0.1
}
fn default_cave_floor_scale() -> f32 {
    3.0
}
fn default_cave_floor_offset() -> f32 {
    3.0
}
fn default_surface_margin() -> i32 {
    10
}
impl Default for Caves {
    fn default() -> Self {
        Self {
            enable: default_carvers_enable(),
            cavity_frequency: default_cavity_frequency(),
            floor_frequency: default_cave_floor_frequency(),
            floor_scale: default_cave_floor_scale(),
            floor_offset: default_cave_floor_offset(),
            surface_margin: default_surface_margin(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Trees {
    #[serde(default = "default_tree_probability")]
    pub probability: f32,
    #[serde(default = "default_tree_height")]
    pub height: i32,
    #[serde(default = "default_tree_half_width")]
    pub half_width: i32,
    #[serde(default = "default_tree_half_height")]
    pub half_height: i32,
}
fn default_tree_probability() -> f32 {
    0.01
}
fn default_tree_height() -> i32 {
    12
}
fn default_tree_half_width() -> i32 {
    6
}
fn default_tree_half_height() -> i32 {
    6
}
impl Default for Trees {
    fn default() -> Self {
        Self {
            probability: default_tree_probability(),
            height: default_tree_height(),
            half_width: default_tree_half_width(),
            half_height: default_tree_half_height(),
        }
    }
}

// Flattened params used in tight loops (snapshot of config)
#[derive(Clone, Debug)]
pub struct WorldGenParams {
    pub base_frequency: f32,
    pub terrain_frequency: f32,
    pub floor_offset: f32,
    pub island_falloff_scale: f32,
    pub island_falloff_exponent: i32,
    pub island_epsilon: f32,
    pub snow_lvl: i32,
    pub stone_lvl: i32,
    pub dirt_lvl: i32,
    pub grass_lvl: i32,
    pub jitter_span: i32,
    pub carvers_enable: bool,
    pub cave_cavity_frequency: f32,
    pub cave_floor_frequency: f32,
    pub cave_floor_scale: f32,
    pub cave_floor_offset: f32,
    pub cave_surface_margin: i32,
    pub tree_probability: f32,
    pub tree_height: i32,
    pub tree_half_width: i32,
    pub tree_half_height: i32,
}

impl WorldGenParams {
    pub fn default() -> Self {
        Self::from_config(&WorldGenConfig::default())
    }

    pub fn from_config(cfg: &WorldGenConfig) -> Self {
        Self {
            base_frequency: cfg.height.base_frequency,
            terrain_frequency: cfg.height.terrain_frequency,
            floor_offset: cfg.height.floor_offset,
            island_falloff_scale: cfg.height.island.falloff_scale,
            island_falloff_exponent: cfg.height.island.falloff_exponent,
            island_epsilon: cfg.height.island.epsilon,
            snow_lvl: cfg.bands.snow_lvl,
            stone_lvl: cfg.bands.stone_lvl,
            dirt_lvl: cfg.bands.dirt_lvl,
            grass_lvl: cfg.bands.grass_lvl,
            jitter_span: cfg.bands.jitter_span,
            carvers_enable: cfg.caves.enable,
            cave_cavity_frequency: cfg.caves.cavity_frequency,
            cave_floor_frequency: cfg.caves.floor_frequency,
            cave_floor_scale: cfg.caves.floor_scale,
            cave_floor_offset: cfg.caves.floor_offset,
            cave_surface_margin: cfg.caves.surface_margin,
            tree_probability: cfg.trees.probability,
            tree_height: cfg.trees.height,
            tree_half_width: cfg.trees.half_width,
            tree_half_height: cfg.trees.half_height,
        }
    }
}

pub fn load_params_from_path(path: &Path) -> Result<WorldGenParams, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg: WorldGenConfig = toml::from_str(&s)?;
    Ok(WorldGenParams::from_config(&cfg))
}
