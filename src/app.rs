//! 终端交互界面
//!
//! 只负责收集输入、调用流程层并显示结果；当前测验保存在会话里，
//! 每次生成时整体替换，评分时只读。

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use crate::clients::{connect, CompletionClient};
use crate::config::Config;
use crate::models::{Language, Level, Quiz, QuizQuestion, RequestContext};
use crate::utils::logging::log_startup;
use crate::workflow::{selections_from_labels, StudyTutor};

const MENU: &str = "\n[1] Explanation  [2] Resources  [3] Roadmap  [4] Generate quiz  [5] Evaluate answers  [6] Change inputs  [q] Quit\n> ";

/// 应用主结构
pub struct App<C = Box<dyn CompletionClient>> {
    tutor: StudyTutor<C>,
    ctx: RequestContext,
    quiz: Quiz,
}

impl App {
    /// 初始化应用，客户端在这里一次性创建
    pub fn initialize(config: Config) -> Self {
        log_startup(&config);
        Self::with_client(connect(&config))
    }
}

impl<C: CompletionClient> App<C> {
    pub fn with_client(client: C) -> Self {
        Self {
            tutor: StudyTutor::new(client),
            ctx: RequestContext::default(),
            quiz: Quiz::empty(),
        }
    }

    /// 当前会话中的测验
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    /// 使用标准输入输出运行
    pub async fn run(mut self) -> Result<()> {
        let mut input = BufReader::new(tokio::io::stdin());
        let mut output = tokio::io::stdout();
        self.run_with(&mut input, &mut output).await
    }

    /// 运行主循环，直到输入结束或选择退出
    pub async fn run_with<R, W>(&mut self, input: &mut R, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        output.write_all("AI Study Tutor\n".as_bytes()).await?;
        if !self.read_context(input, output).await? {
            return Ok(());
        }

        loop {
            let Some(choice) = prompt_line(input, output, MENU).await? else {
                break;
            };

            let text = match choice.as_str() {
                "1" => self.tutor.generate_explanation(&self.ctx).await,
                "2" => self.tutor.generate_resources(&self.ctx).await,
                "3" => self.tutor.generate_roadmap(&self.ctx).await,
                "4" => self.generate_quiz().await,
                "5" => match self.evaluate(input, output).await? {
                    Some(text) => text,
                    None => break,
                },
                "6" => {
                    if !self.read_context(input, output).await? {
                        break;
                    }
                    continue;
                }
                "q" | "Q" => break,
                other => format!("Unknown choice: {}", other),
            };

            output.write_all(format!("\n{}\n", text).as_bytes()).await?;
        }

        info!("👋 会话结束");
        output.flush().await?;
        Ok(())
    }

    async fn generate_quiz(&mut self) -> String {
        let generation = self.tutor.generate_quiz(&self.ctx).await;

        let mut text = generation.status.clone();
        for slot in &generation.slots {
            text.push_str(&format!("\n\n{}", slot.label));
            for (i, choice) in slot.choices.iter().enumerate() {
                text.push_str(&format!("\n  {}) {}", i + 1, choice));
            }
        }

        self.quiz = generation.quiz;
        text
    }

    /// 逐题读取答案，解析规则见 [`answer_label`]
    async fn evaluate<R, W>(&self, input: &mut R, output: &mut W) -> Result<Option<String>>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut labels = Vec::with_capacity(self.quiz.len());

        for (i, question) in self.quiz.iter().enumerate() {
            let prompt = format!("Q{}. {} > ", i + 1, question.question());
            let Some(answer) = prompt_line(input, output, &prompt).await? else {
                return Ok(None);
            };

            labels.push(answer_label(question, &answer));
        }

        let selections = selections_from_labels(&self.quiz, &labels);
        debug!("作答: {:?}", selections);

        let (summary, feedback) = self.tutor.evaluate_quiz(&self.quiz, &selections);
        Ok(Some(format!("{}\n{}", summary, feedback)))
    }

    /// 读取学科、主题、语言、水平；输入结束时返回 false
    async fn read_context<R, W>(&mut self, input: &mut R, output: &mut W) -> Result<bool>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let Some(subject) = prompt_line(input, output, "Subject (e.g., Mathematics): ").await? else {
            return Ok(false);
        };
        let Some(topic) = prompt_line(input, output, "Topic: ").await? else {
            return Ok(false);
        };

        let languages: Vec<&str> = Language::ALL.iter().map(|l| l.label()).collect();
        let language_prompt = format!("Language [{}] (default English): ", languages.join(", "));
        let Some(language) = prompt_line(input, output, &language_prompt).await? else {
            return Ok(false);
        };

        let Some(level) = prompt_line(input, output, "Level [Beginner, Intermediate, Advanced]: ").await? else {
            return Ok(false);
        };

        self.ctx = RequestContext::new(
            subject,
            topic,
            Language::from_label(&language).unwrap_or_default(),
            Level::from_label(&level).unwrap_or_default(),
        );
        debug!("请求上下文: {:?}", self.ctx);

        Ok(true)
    }
}

/// 把一行输入解析成选项文字
///
/// 先按选项文字精确匹配，再按 1 开始的序号取选项；空行表示不作答，
/// 其他文字原样返回（评分时视为未作答）。
fn answer_label(question: &QuizQuestion, answer: &str) -> Option<String> {
    if answer.is_empty() {
        return None;
    }
    if question.index_of(answer).is_some() {
        return Some(answer.to_string());
    }

    match answer.parse::<usize>() {
        Ok(n) if n >= 1 => question.option(n - 1).map(str::to_string),
        _ => Some(answer.to_string()),
    }
}

/// 输出提示并读取一行，输入结束时返回 `None`
async fn prompt_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(prompt.as_bytes()).await?;
    output.flush().await?;

    let mut line = String::new();
    if input.read_line(&mut line).await? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(options: &[&str], answer_index: usize) -> QuizQuestion {
        let options = options.iter().map(|s| s.to_string()).collect();
        QuizQuestion::new("q", options, answer_index).unwrap()
    }

    #[test]
    fn test_answer_by_position_or_text() {
        let q = question(&["cos(x)", "-cos(x)", "sin(x)"], 0);
        assert_eq!(answer_label(&q, "2").as_deref(), Some("-cos(x)"));
        assert_eq!(answer_label(&q, "sin(x)").as_deref(), Some("sin(x)"));
        assert_eq!(answer_label(&q, ""), None);
        assert_eq!(answer_label(&q, "9"), None);
    }

    #[test]
    fn test_numeric_options_match_by_text_first() {
        let q = question(&["3", "4", "5"], 1);
        assert_eq!(answer_label(&q, "4").as_deref(), Some("4"));
        assert_eq!(answer_label(&q, "1").as_deref(), Some("3"));

        let quiz = Quiz::new(vec![q]);
        let labels = vec![answer_label(&quiz.questions()[0], "4")];
        assert_eq!(selections_from_labels(&quiz, &labels), vec![Some(1)]);
    }
}
