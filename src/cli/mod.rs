use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// tablegen-rs - 工作坊链接表生成器
#[derive(Parser, Debug)]
#[command(name = "tablegen-rs")]
#[command(
    about = "Build-time generator that turns the site's links.json into the typed workshop table module, resolving presentation titles from the linked pages."
)]
#[command(version)]
pub struct Args {
    /// 站点仓库根路径，缺省读取 ABS_PATH 环境变量
    #[arg(short, long)]
    pub base_path: Option<PathBuf>,

    /// 链接清单路径
    #[arg(long)]
    pub links_path: Option<PathBuf>,

    /// 输出模块路径
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数转换为配置，CLI参数优先于配置文件
    pub fn into_config(self) -> Config {
        let mut config = if let Some(config_path) = &self.config {
            // 如果显式指定了配置文件路径，从该路径加载
            Config::from_file(config_path)
                .unwrap_or_else(|_| panic!("⚠️ 警告: 无法读取配置文件 {:?}", config_path))
        } else {
            // 如果没有显式指定配置文件，尝试从默认位置加载
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("tablegen.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path).unwrap_or_else(|_| {
                    panic!("⚠️ 警告: 无法读取默认配置文件 {:?}", default_config_path)
                })
            } else {
                // 默认配置文件不存在，使用默认值
                Config::default()
            }
        };

        // 覆盖配置文件中的设置
        if let Some(base_path) = self.base_path {
            config.base_path = base_path;
        }
        if let Some(links_path) = self.links_path {
            config.links_path = Some(links_path);
        }
        if let Some(output_path) = self.output_path {
            config.output_path = Some(output_path);
        }
        if self.verbose {
            config.verbose = true;
        }

        config
    }
}
