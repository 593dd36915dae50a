use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Config {
    /// 站点仓库根路径，默认读取 ABS_PATH 环境变量
    pub base_path: PathBuf,

    /// 链接清单路径，缺省时从 base_path 推导
    pub links_path: Option<PathBuf>,

    /// 生成模块输出路径，缺省时从 base_path 推导
    pub output_path: Option<PathBuf>,

    /// 是否启用详细日志
    pub verbose: bool,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// 链接清单的完整路径
    pub fn links_file(&self) -> PathBuf {
        self.links_path
            .clone()
            .unwrap_or_else(|| self.base_path.join("src/lib/public/links/links.json"))
    }

    /// 输出表模块的完整路径
    pub fn table_file(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| self.base_path.join("src/lib/components/workshop/table.ts"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from(std::env::var("ABS_PATH").unwrap_or_else(|_| ".".to_string())),
            links_path: None,
            output_path: None,
            verbose: false,
        }
    }
}
