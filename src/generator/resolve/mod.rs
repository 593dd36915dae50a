use regex::Regex;
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

/// 需要抓取标题的演示文稿托管路径
const PRESENTATION_HOST: &str = "docs.google.com/presentation";

/// 托管方附加在页面标题上的后缀，按序剥离
const TITLE_SUFFIXES: [&str; 5] = [
    " - Google Slides",
    " - Google Docs",
    " - Google Drive",
    "- Google Slides",
    "- Google Docs",
];

/// 标题解析失败的全部原因，任一失败都会丢弃该记录
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("not a workshop")]
    NotAWorkshop,

    #[error("request failed for {link}: {source}")]
    Fetch {
        link: String,
        source: reqwest::Error,
    },

    #[error("unexpected status {status} from {link}")]
    UnexpectedStatus { status: StatusCode, link: String },

    #[error("unable to read body from {link}: {source}")]
    Body {
        link: String,
        source: reqwest::Error,
    },

    #[error("no title found")]
    NoTitle,

    #[error("link not publicly accessible")]
    NotPublic,

    #[error("workshop unavailable")]
    Unavailable,

    #[error("public access is denied")]
    AccessDenied,
}

/// 标题解析器
///
/// 非演示文稿链接直接由键里的原始名称做排版美化；演示文稿链接抓取页面
/// 并提取 `<title>`。
#[derive(Clone)]
pub struct TitleResolver {
    title_re: Regex,
}

impl Default for TitleResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleResolver {
    pub fn new() -> Self {
        let title_re = Regex::new(r"(?i)<title>(.*?)</title>").expect("title pattern must compile");
        Self { title_re }
    }

    /// 给定原始名称与链接，产出最终展示名称
    pub async fn resolve(
        &self,
        http: &Client,
        raw_name: &str,
        link: &str,
    ) -> Result<String, ResolveError> {
        // 先用 host/path 做快速过滤，整页抓取比子串检查昂贵得多
        let url = Url::parse(link).map_err(|e| ResolveError::InvalidUrl(e.to_string()))?;
        let host = url.host_str().unwrap_or_default();

        if url.path().contains("forms") || host.contains("codepen") || host.contains("colab") {
            return Err(ResolveError::NotAWorkshop);
        }

        if !link.contains(PRESENTATION_HOST) {
            return Ok(prettify_name(raw_name));
        }

        let response = http.get(link).send().await.map_err(|e| ResolveError::Fetch {
            link: link.to_string(),
            source: e,
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ResolveError::UnexpectedStatus {
                status,
                link: link.to_string(),
            });
        }

        let body = response.text().await.map_err(|e| ResolveError::Body {
            link: link.to_string(),
            source: e,
        })?;

        let title = self.extract_title(&body).ok_or(ResolveError::NoTitle)?;
        let title = clean_presentation_title(&title);

        if let Some(denied) = title_access_error(&title) {
            return Err(denied);
        }

        Ok(title)
    }

    /// 提取HTML中第一个 <title> 标签的内容
    fn extract_title(&self, body: &str) -> Option<String> {
        self.title_re
            .captures(body)
            .map(|caps| caps[1].trim().to_string())
    }
}

/// 清理后的标题若仍是托管方的登录/错误页面，按相应原因拒绝
fn title_access_error(title: &str) -> Option<ResolveError> {
    if title.contains("Sign in") {
        return Some(ResolveError::NotPublic);
    }
    if title.contains("Page Not Found") {
        return Some(ResolveError::Unavailable);
    }
    if title.contains("Access Denied") {
        return Some(ResolveError::AccessDenied);
    }
    None
}

/// 剥离托管方标题后缀并还原 &amp; 实体
pub fn clean_presentation_title(title: &str) -> String {
    let mut title = title.trim();
    for suffix in TITLE_SUFFIXES {
        title = title.strip_suffix(suffix).unwrap_or(title);
    }
    title.replace("&amp;", "&").trim().to_string()
}

/// 无需抓取时由原始标识派生名称：连字符转空格，词首字母大写
///
/// 只处理 ASCII 首字母，不做 locale 相关的大小写转换。
pub fn prettify_name(name: &str) -> String {
    name.replace('-', " ")
        .split_whitespace()
        .map(capitalize_ascii)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_ascii(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            first.to_ascii_uppercase().to_string() + chars.as_str()
        }
        Some(first) => first.to_string() + chars.as_str(),
        None => String::new(),
    }
}
