//! Console presenter for wizard events.

use colored::Colorize;
use wizard_application::ports::observer::{WizardEvent, WizardObserver};
use wizard_domain::{AnswerSheet, TransitionDirection};

/// Renders wizard events to the terminal.
///
/// The interactive REPL draws question screens itself, so it constructs the
/// presenter with question rendering turned off; the one-shot mode keeps it
/// on and lets the event stream drive all output.
pub struct ConsolePresenter {
    show_questions: bool,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        Self {
            show_questions: true,
        }
    }

    pub fn with_show_questions(mut self, show: bool) -> Self {
        self.show_questions = show;
        self
    }
}

impl Default for ConsolePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardObserver for ConsolePresenter {
    fn notify(&self, event: WizardEvent) {
        match event {
            WizardEvent::QuestionChanged {
                index,
                total,
                direction,
                prompt,
            } => {
                if self.show_questions {
                    println!("{}", format_question(index, total, direction, &prompt));
                }
            }
            WizardEvent::SubmissionStarted => {}
            WizardEvent::SubmissionDelivered { feedback } => {
                println!("\n{}", feedback.green().bold());
            }
            WizardEvent::FeedbackExpired => {}
            WizardEvent::SubmissionFailed { error, user_visible } => {
                // The silent default mirrors a kiosk survey: the respondent
                // keeps their answers, the operator channel gets the error.
                if user_visible {
                    eprintln!("\n{} {}", "Submission failed:".red().bold(), error);
                }
            }
            WizardEvent::WizardReset => {}
        }
    }
}

/// One question header line, e.g. `-> [2/5] What do you think about the app?`
pub fn format_question(
    index: usize,
    total: usize,
    direction: TransitionDirection,
    prompt: &str,
) -> String {
    let arrow = match direction {
        TransitionDirection::Forward => "->".cyan(),
        TransitionDirection::Backward => "<-".yellow(),
    };
    format!(
        "{} {} {}",
        arrow,
        format!("[{}/{}]", index + 1, total).dimmed(),
        prompt.bold()
    )
}

/// All answers so far, one line per question.
pub fn format_review(answers: &AnswerSheet) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", "Your answers:".cyan().bold()));
    for question in answers.catalog().iter() {
        let value = answers.value(question.id());
        let rendered = if value.is_empty() {
            "(no answer)".dimmed().to_string()
        } else {
            value.to_string()
        };
        output.push_str(&format!("  {}: {}\n", question.id().to_string().bold(), rendered));
    }
    output
}
