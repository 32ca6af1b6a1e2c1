use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};
use strum::IntoEnumIterator;

use crate::{
    classifier::{Category, OffsetUnit, Vocabulary},
    Error, LexicolorResult,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    // 有効なカテゴリ。順序は無視され、常に優先順位順で評価される
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub vocabulary: Vocabulary,

    #[serde(default)]
    pub offset_unit: OffsetUnit,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            vocabulary: Vocabulary::default(),
            offset_unit: OffsetUnit::default(),
        }
    }
}

impl ClassifierConfig {
    // JSONファイルから設定を読み込む
    pub fn from_file<P: AsRef<Path>>(path: P) -> LexicolorResult<Self> {
        from_file(path)
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> LexicolorResult<T> {
    let file = File::open(path)
        .map_err(|e| Error::config(format!("Failed to open config file: {}", e)))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> LexicolorResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

fn default_categories() -> Vec<Category> {
    Category::iter().collect()
}
