use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Cell, COLS};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub interface: InterfaceConfig,
}

/// How the board and its pieces are drawn.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub normal_piece: char,
    pub sabotage_piece: char,
    pub empty_cell: char,
    /// Show the list of played moves next to the board (TUI only)
    pub show_move_log: bool,
    pub highlight_winning_run: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            normal_piece: '●',
            sabotage_piece: '◎',
            empty_cell: '○',
            show_move_log: true,
            highlight_winning_run: true,
        }
    }
}

impl DisplayConfig {
    /// Character drawn for a cell
    pub fn glyph(&self, cell: Cell) -> char {
        match cell.participant() {
            None => self.empty_cell,
            Some(participant) if participant.is_sabotage() => self.sabotage_piece,
            Some(_) => self.normal_piece,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceMode {
    /// Full-screen terminal UI
    Tui,
    /// Line-based prompt on stdin/stdout
    Plain,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InterfaceConfig {
    pub mode: InterfaceMode,
    /// Clear the screen before each board redraw in plain mode
    pub clear_screen: bool,
    /// Column the TUI selector starts on
    pub start_column: usize,
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        InterfaceConfig {
            mode: InterfaceMode::Tui,
            clear_screen: true,
            start_column: 3,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist. The flag is true when the defaults were used.
    pub fn load_or_default(path: &Path) -> Result<(Self, bool), ConfigError> {
        if path.exists() {
            Ok((Self::load(path)?, false))
        } else {
            Ok((Self::default(), true))
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let glyphs = [
            ("display.normal_piece", self.display.normal_piece),
            ("display.sabotage_piece", self.display.sabotage_piece),
            ("display.empty_cell", self.display.empty_cell),
        ];
        for (name, glyph) in glyphs {
            if glyph.is_whitespace() || glyph.is_control() {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a visible character"
                )));
            }
        }
        if glyphs[0].1 == glyphs[1].1
            || glyphs[0].1 == glyphs[2].1
            || glyphs[1].1 == glyphs[2].1
        {
            return Err(ConfigError::Validation(
                "display piece glyphs must all differ".into(),
            ));
        }

        if self.interface.start_column >= COLS {
            return Err(ConfigError::Validation(format!(
                "interface.start_column must be < {COLS}"
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PARTICIPANTS;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[display]
sabotage_piece = "x"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.sabotage_piece, 'x');
        // Other fields should be defaults
        assert_eq!(config.display.normal_piece, '●');
        assert_eq!(config.interface.mode, InterfaceMode::Tui);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_mode_parses_lowercase() {
        let config: AppConfig = toml::from_str("[interface]\nmode = \"plain\"").unwrap();
        assert_eq!(config.interface.mode, InterfaceMode::Plain);
        assert!(toml::from_str::<AppConfig>("[interface]\nmode = \"gui\"").is_err());
    }

    #[test]
    fn test_validation_rejects_start_column_out_of_range() {
        let mut config = AppConfig::default();
        config.interface.start_column = COLS;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_glyphs() {
        let mut config = AppConfig::default();
        config.display.sabotage_piece = config.display.normal_piece;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_glyph() {
        let mut config = AppConfig::default();
        config.display.empty_cell = ' ';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_glyph_follows_piece_kind() {
        let display = DisplayConfig::default();
        assert_eq!(display.glyph(Cell::Empty), '○');
        assert_eq!(display.glyph(Cell::Occupied(PARTICIPANTS[0])), '●');
        assert_eq!(display.glyph(Cell::Occupied(PARTICIPANTS[3])), '◎');
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let (config, fell_back) =
            AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(fell_back);
    }

    #[test]
    fn test_load_or_default_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("present.toml");
        std::fs::write(&path, "[interface]\nstart_column = 0\n").unwrap();

        let (config, fell_back) = AppConfig::load_or_default(&path).unwrap();
        assert!(!fell_back);
        assert_eq!(config.interface.start_column, 0);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[interface]
mode = "plain"
clear_screen = false
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.interface.mode, InterfaceMode::Plain);
        assert!(!config.interface.clear_screen);
        // Others are defaults
        assert_eq!(config.interface.start_column, 3);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        std::fs::write(&path, "[interface]\nstart_column = 9\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
