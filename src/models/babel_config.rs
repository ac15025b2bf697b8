use serde::Serialize;

/// Build preset the generated project compiles with
pub const BUILD_PRESET: &str = "@babel/preset-env";

/// File name of the build configuration, relative to the project root
pub const BABEL_CONFIG_FILE: &str = ".babelrc";

/// Contents of the generated `.babelrc`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BabelConfig {
    pub presets: Vec<String>,
}

impl Default for BabelConfig {
    fn default() -> Self {
        Self {
            presets: vec![BUILD_PRESET.to_string()],
        }
    }
}
