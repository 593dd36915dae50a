use std::fs;

use anyhow::{Context, Result};

use crate::generator::context::BuildContext;
use crate::types::workshop::{SEMESTER_SHORTCUTS, Semester, Team, WorkshopTable};

/// 保存生成的表模块
pub async fn save(context: &BuildContext) -> Result<()> {
    let outlet = DiskOutlet;
    outlet.save(context).await
}

pub trait Outlet {
    async fn save(&self, context: &BuildContext) -> Result<()>;
}

/// 写盘输出
pub struct DiskOutlet;

impl Outlet for DiskOutlet {
    async fn save(&self, context: &BuildContext) -> Result<()> {
        println!("\n🖊️ 表模块写出中...");

        let table = context.snapshot().await;
        let module = render_module(&table);

        let output_file = context.config.table_file();

        // 确保父目录存在
        if let Some(parent) = output_file.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&output_file, module)
            .context(format!("Failed to write table module: {:?}", output_file))?;

        println!("💾 已保存表模块: {}", output_file.display());
        Ok(())
    }
}

/// 渲染完整的表模块文本，与前端约定的模块格式保持逐字节一致
pub fn render_module(table: &WorkshopTable) -> String {
    let mut out = String::new();
    render_header(&mut out);
    render_table(&mut out, table);
    render_accessor(&mut out);
    out
}

/// 类型声明与学期简写查找表，枚举是唯一数据源
fn render_header(out: &mut String) {
    let semesters = Semester::ACTIVE
        .iter()
        .map(|semester| format!("'{}'", semester))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(&format!("export type semesters = {};\n", semesters));

    out.push_str("export type teams =\n");
    for (i, team) in Team::ALL.iter().enumerate() {
        let terminator = if i == Team::ALL.len() - 1 { ";" } else { "" };
        out.push_str(&format!("\t| '{}'{}\n", team, terminator));
    }
    out.push('\n');

    out.push_str("// Semester shortcut, in the case of f25 -> fa25\n");
    out.push_str("const sSc = new Map<string, string>();\n");
    for (shortcut, canonical) in SEMESTER_SHORTCUTS {
        out.push_str(&format!("sSc.set('{}', '{}');\n", shortcut, canonical));
    }
    out.push('\n');

    out.push_str("// --------------------- Workshop table ---------------------\n");
    out.push_str("type Tables = {\n\t[team in teams]: {\n\t\tworkshops: Workshops;\n\t};\n};\n");
    out.push('\n');
    out.push_str("type Workshops = {\n\t[sem in semesters]: WorkshopInfo[];\n};\n");
    out.push('\n');
    out.push_str(
        "export interface WorkshopInfo {\n\tname: string;\n\tteam: string;\n\tsemester: string;\n\tlink: string;\n}\n",
    );
}

/// 表字面量：团队与学期都按声明顺序迭代，空桶照常输出
fn render_table(out: &mut String, table: &WorkshopTable) {
    out.push_str("export const currentTable: Tables = {\n");

    for (ti, team) in Team::ALL.iter().enumerate() {
        out.push_str(&format!("\t{}: {{\n\t\tworkshops: {{\n", team));

        for (si, semester) in Semester::ACTIVE.iter().enumerate() {
            out.push_str(&format!("\t\t\t{}: [\n", semester));

            for workshop in table.bucket(*team, *semester) {
                out.push_str(&format!(
                    "\t\t\t\t{{ name: \"{}\", team: \"{}\", semester: \"{}\", link: \"{}\" }},\n",
                    escape(&workshop.name),
                    workshop.team,
                    workshop.semester,
                    workshop.link
                ));
            }

            out.push_str(&format!("\t\t\t]{}\n", comma(si, Semester::ACTIVE.len())));
        }

        out.push_str(&format!("\t\t}}\n\t}}{}\n", comma(ti, Team::ALL.len())));
    }

    out.push_str("}\n");
}

fn render_accessor(out: &mut String) {
    out.push_str("export async function NewWorkshopTable() {\n\treturn currentTable;\n}\n");
}

/// 嵌入字符串转义：双引号加反斜杠，&#39; 实体还原为撇号
fn escape(s: &str) -> String {
    s.replace('"', "\\\"").replace("&#39;", "'")
}

/// 列表最后一个元素不带尾随逗号
fn comma(index: usize, len: usize) -> &'static str {
    if index == len - 1 { "" } else { "," }
}

// Include tests
#[cfg(test)]
mod tests;
