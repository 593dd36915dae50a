use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// 工作坊所属团队，与站点前端的 teams 枚举一一对应
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    #[serde(rename = "ai")]
    Ai,
    #[serde(rename = "algo")]
    Algo,
    #[serde(rename = "design")]
    Design,
    #[serde(rename = "dev")]
    Dev,
    #[serde(rename = "gamedev")]
    GameDev,
    #[serde(rename = "general")]
    General,
    #[serde(rename = "icpc")]
    Icpc,
    #[serde(rename = "nodebuds")]
    NodeBuds,
    #[serde(rename = "oss")]
    Oss,
}

impl Team {
    /// 全部团队，顺序即输出模块中的声明顺序
    pub const ALL: [Team; 9] = [
        Team::Ai,
        Team::Algo,
        Team::Design,
        Team::Dev,
        Team::GameDev,
        Team::General,
        Team::Icpc,
        Team::NodeBuds,
        Team::Oss,
    ];
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::Ai => write!(f, "ai"),
            Team::Algo => write!(f, "algo"),
            Team::Design => write!(f, "design"),
            Team::Dev => write!(f, "dev"),
            Team::GameDev => write!(f, "gamedev"),
            Team::General => write!(f, "general"),
            Team::Icpc => write!(f, "icpc"),
            Team::NodeBuds => write!(f, "nodebuds"),
            Team::Oss => write!(f, "oss"),
        }
    }
}

impl std::str::FromStr for Team {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ai" => Ok(Team::Ai),
            "algo" => Ok(Team::Algo),
            "design" => Ok(Team::Design),
            "dev" => Ok(Team::Dev),
            "gamedev" => Ok(Team::GameDev),
            "general" => Ok(Team::General),
            "icpc" => Ok(Team::Icpc),
            "nodebuds" => Ok(Team::NodeBuds),
            "oss" => Ok(Team::Oss),
            _ => Err(format!("Unknown team: {}", s)),
        }
    }
}

/// 当前活跃的学期，与站点前端的 semesters 枚举一一对应
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Semester {
    #[serde(rename = "fa24")]
    Fa24,
    #[serde(rename = "sp25")]
    Sp25,
    #[serde(rename = "fa25")]
    Fa25,
}

impl Semester {
    /// 全部活跃学期，顺序即输出模块中的声明顺序
    pub const ACTIVE: [Semester; 3] = [Semester::Fa24, Semester::Sp25, Semester::Fa25];
}

impl Display for Semester {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Semester::Fa24 => write!(f, "fa24"),
            Semester::Sp25 => write!(f, "sp25"),
            Semester::Fa25 => write!(f, "fa25"),
        }
    }
}

impl std::str::FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fa24" => Ok(Semester::Fa24),
            "sp25" => Ok(Semester::Sp25),
            "fa25" => Ok(Semester::Fa25),
            _ => Err(format!("Unknown semester: {}", s)),
        }
    }
}

/// 历史学期简写到规范写法的映射，f25 -> fa25 这类
///
/// 注意 s26 归一化为 sp26 后并不在活跃学期内，这类记录会在校验时被丢弃，
/// 与站点约定保持一致。
pub const SEMESTER_SHORTCUTS: [(&str, &str); 4] = [
    ("f24", "fa24"),
    ("s25", "sp25"),
    ("f25", "fa25"),
    ("s26", "sp26"),
];

/// 单条工作坊记录，入表后不再修改
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Workshop {
    /// 展示名称
    pub name: String,
    pub team: Team,
    pub semester: Semester,
    /// 原始链接
    pub link: String,
}

/// 工作坊总表：team -> semester -> 记录列表
///
/// 创建时预置所有 (team, semester) 空桶，因此即使某个组合没有任何
/// 工作坊，输出模块中也会出现对应的空列表。
#[derive(Debug, Clone)]
pub struct WorkshopTable {
    buckets: HashMap<Team, HashMap<Semester, Vec<Workshop>>>,
}

impl Default for WorkshopTable {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkshopTable {
    pub fn new() -> Self {
        let mut buckets = HashMap::new();
        for team in Team::ALL {
            let mut semesters = HashMap::new();
            for semester in Semester::ACTIVE {
                semesters.insert(semester, Vec::new());
            }
            buckets.insert(team, semesters);
        }
        Self { buckets }
    }

    /// 追加一条记录到对应桶，桶内顺序即插入顺序
    pub fn insert(&mut self, workshop: Workshop) {
        self.buckets
            .entry(workshop.team)
            .or_default()
            .entry(workshop.semester)
            .or_default()
            .push(workshop);
    }

    /// 取指定 (team, semester) 桶的全部记录
    pub fn bucket(&self, team: Team, semester: Semester) -> &[Workshop] {
        self.buckets
            .get(&team)
            .and_then(|semesters| semesters.get(&semester))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// 表中记录总数
    pub fn len(&self) -> usize {
        self.buckets
            .values()
            .flat_map(|semesters| semesters.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
