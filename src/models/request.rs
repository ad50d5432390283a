/// 回复语言
///
/// 标签与前端下拉框中的文字一一对应，其中几个拼写（"Chinease"、"Protaguese"、
/// "Indonasion"）是固定的选项值，不要改正。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum Language {
    #[default]
    English,
    Urdu,
    MandarinChinese,
    Hindi,
    Spanish,
    StandardArabic,
    French,
    Bengali,
    Portuguese,
    Russian,
    Indonesian,
}

impl Language {
    /// 下拉框中的全部选项，按显示顺序排列
    pub const ALL: [Language; 11] = [
        Language::English,
        Language::Urdu,
        Language::MandarinChinese,
        Language::Hindi,
        Language::Spanish,
        Language::StandardArabic,
        Language::French,
        Language::Bengali,
        Language::Portuguese,
        Language::Russian,
        Language::Indonesian,
    ];

    /// 获取显示标签
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Urdu => "Urdu",
            Language::MandarinChinese => "Mandarin Chinease",
            Language::Hindi => "Hindi",
            Language::Spanish => "Spanish",
            Language::StandardArabic => "Standard Arabic",
            Language::French => "French",
            Language::Bengali => "Bengali",
            Language::Portuguese => "Protaguese",
            Language::Russian => "Russian",
            Language::Indonesian => "Indonasion",
        }
    }

    /// 从显示标签解析（精确匹配）
    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.label() == s)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 学生水平
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == s)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 生成任务类型，决定使用哪个提示词模板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Explanation,
    Resources,
    Roadmap,
    Quiz,
}

impl TaskKind {
    pub const ALL: [TaskKind; 4] = [
        TaskKind::Explanation,
        TaskKind::Resources,
        TaskKind::Roadmap,
        TaskKind::Quiz,
    ];
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TaskKind::Explanation => "explanation",
            TaskKind::Resources => "resources",
            TaskKind::Roadmap => "roadmap",
            TaskKind::Quiz => "quiz",
        };
        write!(f, "{}", name)
    }
}

/// 单次用户操作的请求上下文
///
/// subject / topic 是自由文本，不做校验，空字符串原样传递。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestContext {
    pub subject: String,
    pub topic: String,
    pub language: Language,
    pub level: Level,
}

impl RequestContext {
    pub fn new(
        subject: impl Into<String>,
        topic: impl Into<String>,
        language: Language,
        level: Level,
    ) -> Self {
        Self {
            subject: subject.into(),
            topic: topic.into(),
            language,
            level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_catalog_keeps_labels_verbatim() {
        let labels: Vec<&str> = Language::ALL.iter().map(|l| l.label()).collect();
        assert_eq!(
            labels,
            vec![
                "English",
                "Urdu",
                "Mandarin Chinease",
                "Hindi",
                "Spanish",
                "Standard Arabic",
                "French",
                "Bengali",
                "Protaguese",
                "Russian",
                "Indonasion",
            ]
        );
    }

    #[test]
    fn test_label_lookup() {
        assert_eq!(Language::from_label("Protaguese"), Some(Language::Portuguese));
        assert_eq!(Language::from_label("Portuguese"), None);
        assert_eq!(Level::from_label("Advanced"), Some(Level::Advanced));
        assert_eq!(Level::from_label("advanced"), None);
    }

    #[test]
    fn test_defaults() {
        let ctx = RequestContext::default();
        assert_eq!(ctx.language, Language::English);
        assert_eq!(ctx.level, Level::Beginner);
        assert!(ctx.subject.is_empty());
    }
}
