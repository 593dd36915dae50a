use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::generator::context::BuildContext;

/// 读取链接清单
///
/// 文件不可读或JSON非法是整个运行中唯一的致命错误，直接中止。
pub fn load_links(path: &Path) -> Result<HashMap<String, String>> {
    let content = std::fs::read_to_string(path)
        .context(format!("Failed to read links file: {:?}", path))?;

    let links: HashMap<String, String> =
        serde_json::from_str(&content).context("Failed to parse links file as JSON")?;

    Ok(links)
}

/// 启动表生成工作流
pub async fn launch(config: &Config) -> Result<()> {
    let start_time = Instant::now();
    let context = BuildContext::new(config.clone())?;

    let links_file = config.links_file();
    println!("🔗 读取链接清单: {}", links_file.display());
    let links = load_links(&links_file)?;
    println!("   发现 {} 条链接", links.len());

    // 执行工作流
    crate::generator::build::execute(&context, &links).await?;
    crate::generator::outlet::save(&context).await?;

    println!(
        "✅ 表生成完成，耗时 {:.2}秒",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
