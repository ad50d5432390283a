use serde::Serialize;

/// 每道题最少选项数
pub const MIN_OPTIONS: usize = 3;
/// 每道题最多选项数
pub const MAX_OPTIONS: usize = 5;
/// 一套测验最多题目数
pub const MAX_QUESTIONS: usize = 5;

/// 单道选择题
///
/// 只能通过 [`QuizQuestion::new`] 构造，保证：
/// - 题干去除首尾空白后非空
/// - 选项数在 [3, 5] 之间
/// - `answer_index` 是合法的选项下标
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    question: String,
    options: Vec<String>,
    answer_index: usize,
}

impl QuizQuestion {
    /// 创建题目，不满足约束时返回 `None`
    pub fn new(question: impl Into<String>, options: Vec<String>, answer_index: usize) -> Option<Self> {
        let question = question.into();
        if question.trim().is_empty() {
            return None;
        }
        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&options.len()) {
            return None;
        }
        if answer_index >= options.len() {
            return None;
        }

        Some(Self {
            question,
            options,
            answer_index,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn answer_index(&self) -> usize {
        self.answer_index
    }

    /// 正确选项的文字
    pub fn correct_option(&self) -> &str {
        &self.options[self.answer_index]
    }

    /// 按下标取选项，越界返回 `None`
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    /// 选项文字对应的下标（取第一个相同的）
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.options.iter().position(|o| o == label)
    }
}

/// 一套测验，长度在 [0, 5] 之间
///
/// 每次生成时整体替换，不做合并。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Quiz {
    questions: Vec<QuizQuestion>,
}

impl Quiz {
    /// 创建测验，超过上限的题目会被截掉
    pub fn new(mut questions: Vec<QuizQuestion>) -> Self {
        questions.truncate(MAX_QUESTIONS);
        Self { questions }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuizQuestion> {
        self.questions.iter()
    }
}

impl<'a> IntoIterator for &'a Quiz {
    type Item = &'a QuizQuestion;
    type IntoIter = std::slice::Iter<'a, QuizQuestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

/// 某一题的作答，`None` 表示未作答（不是 0）
pub type Selection = Option<usize>;
