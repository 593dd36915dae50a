use std::collections::HashMap;

use anyhow::Result;
use futures::future::join_all;

use crate::generator::context::BuildContext;
use crate::generator::parse::{self, KeyParser};
use crate::generator::resolve::TitleResolver;
use crate::types::workshop::Workshop;

/// 并发解析全部链接条目并合并到共享表
///
/// 每条链接一个任务，全部同时在途，不设并发上限；唯一的共享可变状态是
/// 上下文里的总表，追加动作在锁内完成。join 屏障等全部任务结束后才返回。
pub async fn execute(context: &BuildContext, links: &HashMap<String, String>) -> Result<()> {
    let parser = KeyParser::new();
    let resolver = TitleResolver::new();

    println!("🚀 启动并发解析，共 {} 条链接", links.len());

    let tasks: Vec<_> = links
        .iter()
        .map(|(key, link)| {
            let key = key.clone();
            let link = link.clone();
            let context = context.clone();
            let parser = parser.clone();
            let resolver = resolver.clone();

            Box::pin(async move { process_entry(&context, &parser, &resolver, &key, &link).await })
        })
        .collect();

    let results = join_all(tasks).await;

    let inserted = results.iter().filter(|inserted| **inserted).count();
    let dropped = results.len() - inserted;
    println!("✓ 并发解析完成：写入 {} 条，丢弃 {} 条", inserted, dropped);

    Ok(())
}

/// 处理单条链接：解析键 → 校验 → 解析标题 → 入表
///
/// 返回该条目是否最终写入了总表。所有失败都就地吸收，不影响其他条目。
async fn process_entry(
    context: &BuildContext,
    parser: &KeyParser,
    resolver: &TitleResolver,
    key: &str,
    link: &str,
) -> bool {
    let Some(raw) = parser.parse(key) else {
        eprintln!("⚠️ 无法解析键: {}", key);
        return false;
    };

    // 团队或学期不在枚举内的记录静默丢弃
    let Some(parsed) = parse::validate(raw) else {
        return false;
    };

    let name = match resolver.resolve(&context.http, &parsed.name, link).await {
        Ok(name) => name,
        Err(e) => {
            eprintln!("❌ 标题解析失败 [{}]: {}", link, e);
            return false;
        }
    };

    if context.config.verbose {
        println!("   📌 {}/{}: {}", parsed.team, parsed.semester, name);
    }

    context
        .insert_workshop(Workshop {
            name,
            team: parsed.team,
            semester: parsed.semester,
            link: link.to_string(),
        })
        .await;

    true
}

// Include tests
#[cfg(test)]
mod tests;
