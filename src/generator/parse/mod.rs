use regex::{Captures, Regex};

use crate::types::workshop::{SEMESTER_SHORTCUTS, Semester, Team};

/// 键的五种形状，按匹配优先级排列，先命中者生效
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyShape {
    /// team/workshop-sem
    TeamSlashNameSem,
    /// team/sem-workshop
    TeamSlashSemName,
    /// team-workshop-sem
    TeamNameSem,
    /// team-sem-workshop
    TeamSemName,
    /// sem-team-workshop
    SemTeamName,
}

impl KeyShape {
    /// 匹配优先级顺序，命中第一个后立即停止
    pub const PRIORITY: [KeyShape; 5] = [
        KeyShape::TeamSlashNameSem,
        KeyShape::TeamSlashSemName,
        KeyShape::TeamNameSem,
        KeyShape::TeamSemName,
        KeyShape::SemTeamName,
    ];

    /// 形状对应的锚定正则，学期段为 1-2 个字母加 2 个数字
    fn pattern(&self) -> &'static str {
        match self {
            KeyShape::TeamSlashNameSem => r"^(\w+)/([\w+-]+)-([A-Za-z]{1,2}\d{2})$",
            KeyShape::TeamSlashSemName => r"^(\w+)/([A-Za-z]{1,2}\d{2})-([\w+-]+)$",
            KeyShape::TeamNameSem => r"^(\w+)-([\w+-]+)-([A-Za-z]{1,2}\d{2})$",
            KeyShape::TeamSemName => r"^(\w+)-([A-Za-z]{1,2}\d{2})-([\w+-]+)$",
            KeyShape::SemTeamName => r"^([A-Za-z]{1,2}\d{2})-(\w+)-([\w+-]+)$",
        }
    }

    /// 从捕获组提取 (team, name, semester) 三元组
    fn extract(&self, caps: &Captures) -> RawRecord {
        let (team, name, semester) = match self {
            KeyShape::TeamSlashNameSem => (&caps[1], &caps[2], &caps[3]),
            KeyShape::TeamSlashSemName => (&caps[1], &caps[3], &caps[2]),
            KeyShape::TeamNameSem => (&caps[1], &caps[2], &caps[3]),
            KeyShape::TeamSemName => (&caps[1], &caps[3], &caps[2]),
            KeyShape::SemTeamName => (&caps[2], &caps[3], &caps[1]),
        };

        RawRecord {
            team: team.to_string(),
            name: name.to_string(),
            semester: semester.to_string(),
        }
    }
}

/// 形状匹配出的未校验结果
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub team: String,
    pub name: String,
    pub semester: String,
}

/// 归一化并校验通过的解析结果
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedKey {
    pub team: Team,
    pub name: String,
    pub semester: Semester,
}

/// 键解析器，预编译全部形状
#[derive(Clone)]
pub struct KeyParser {
    patterns: Vec<(KeyShape, Regex)>,
}

impl Default for KeyParser {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyParser {
    pub fn new() -> Self {
        let patterns = KeyShape::PRIORITY
            .iter()
            .map(|shape| {
                let re = Regex::new(shape.pattern()).expect("key shape pattern must compile");
                (*shape, re)
            })
            .collect();

        Self { patterns }
    }

    /// 依优先级尝试每种形状；全部未命中返回 None
    pub fn parse(&self, key: &str) -> Option<RawRecord> {
        for (shape, re) in &self.patterns {
            if let Some(caps) = re.captures(key) {
                return Some(shape.extract(&caps));
            }
        }
        None
    }
}

/// 学期写法归一化：小写后查简写表，查不到的原样放行
///
/// 幂等：规范写法再归一化仍是自身。
pub fn normalize_semester(semester: &str) -> String {
    let semester = semester.to_lowercase();
    for (shortcut, canonical) in SEMESTER_SHORTCUTS {
        if shortcut == semester {
            return canonical.to_string();
        }
    }
    semester
}

/// 校验团队与学期是否在枚举内；不在的记录静默丢弃
pub fn validate(raw: RawRecord) -> Option<ParsedKey> {
    let team = raw.team.parse::<Team>().ok()?;
    let semester = normalize_semester(&raw.semester).parse::<Semester>().ok()?;

    Some(ParsedKey {
        team,
        name: raw.name,
        semester,
    })
}
