//! REPL driving the interactive question wizard.

use crate::output::{format_question, format_review};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::time::Duration;
use wizard_application::{CommitOutcome, SubmitOutcome, WizardSession};

/// Interactive wizard over a [`WizardSession`].
///
/// Each loop iteration shows the active question and reads one line. Typing
/// text confirms the answer and commits; on the last question the commit
/// submits the whole sheet.
pub struct WizardRepl {
    session: WizardSession,
    show_progress: bool,
}

impl WizardRepl {
    pub fn new(session: WizardSession) -> Self {
        Self {
            session,
            show_progress: true,
        }
    }

    /// Set whether to show a spinner while submitting
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the wizard until a submission is delivered or the user quits.
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        self.print_welcome();

        // Buffer for multi-line answers entered via trailing backslash.
        let mut pending = String::new();

        loop {
            if pending.is_empty() {
                self.print_question();
            }
            let prompt = if pending.is_empty() { ">>> " } else { "... " };

            match rl.readline(prompt) {
                Ok(line) => {
                    if pending.is_empty()
                        && let Some(command) = line.trim().strip_prefix('/')
                    {
                        match self.handle_command(command).await {
                            LoopAction::Continue => continue,
                            LoopAction::Exit => break,
                        }
                    }

                    // A trailing backslash continues the answer on the next
                    // line instead of committing.
                    if let Some(fragment) = line.strip_suffix('\\') {
                        pending.push_str(fragment);
                        pending.push('\n');
                        continue;
                    }

                    let full = if pending.is_empty() {
                        line
                    } else {
                        pending.push_str(&line);
                        std::mem::take(&mut pending)
                    };
                    let text = full.trim();

                    if text.is_empty() && self.session.answer().is_empty() {
                        println!(
                            "{}",
                            "(type an answer, or /skip to leave it blank)".dimmed()
                        );
                        continue;
                    }

                    if !text.is_empty()
                        && let Err(e) = self.session.set_answer(text)
                    {
                        eprintln!("Error: {}", e);
                        continue;
                    }

                    if self.commit().await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    pending.clear();
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│           Survey Wizard                     │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{} questions. Type an answer and press Enter.", self.session.total());
        println!();
        println!("Commands:");
        println!("  /back     - Previous question");
        println!("  /skip     - Continue without changing this answer");
        println!("  /review   - Show all answers so far");
        println!("  /help     - Show this help");
        println!("  /quit     - Exit without submitting");
        println!();
    }

    fn print_question(&self) {
        println!();
        println!(
            "{}",
            format_question(
                self.session.index(),
                self.session.total(),
                self.session.direction(),
                self.session.current_question().prompt(),
            )
        );
        let answer = self.session.answer();
        if !answer.is_empty() {
            println!("{}", format!("(current answer: {})", answer).dimmed());
        }
        if self.session.is_last() {
            println!("{}", "(last question; Enter submits)".dimmed());
        }
    }

    /// Handle a slash command.
    async fn handle_command(&mut self, command: &str) -> LoopAction {
        match command {
            "quit" | "exit" | "q" => {
                println!("Bye!");
                LoopAction::Exit
            }
            "help" | "h" | "?" => {
                self.print_welcome();
                LoopAction::Continue
            }
            "back" | "b" => {
                if !self.session.retreat() {
                    println!("{}", "Already at the first question".dimmed());
                }
                LoopAction::Continue
            }
            // A skip commits whatever is already stored, empty included.
            "skip" | "s" => {
                if self.commit().await {
                    LoopAction::Exit
                } else {
                    LoopAction::Continue
                }
            }
            "review" | "r" => {
                println!();
                print!("{}", format_review(self.session.answers()));
                LoopAction::Continue
            }
            _ => {
                println!("Unknown command: /{}", command);
                println!("Type /help for available commands");
                LoopAction::Continue
            }
        }
    }

    /// Commit the active question. Returns true when the wizard is done.
    async fn commit(&mut self) -> bool {
        if !self.session.is_last() {
            self.session.commit().await;
            return false;
        }

        let spinner = if self.show_progress {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}")
            {
                pb.set_style(style);
            }
            pb.set_message("Submitting...");
            pb.enable_steady_tick(Duration::from_millis(80));
            Some(pb)
        } else {
            None
        };

        let outcome = self.session.commit().await;

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        match outcome {
            CommitOutcome::Submitted(SubmitOutcome::Delivered) => true,
            CommitOutcome::Submitted(SubmitOutcome::Failed(_)) => {
                // The presenter already reported it if failures are surfaced.
                // Answers are intact; the respondent may press Enter to retry.
                false
            }
            CommitOutcome::Submitted(SubmitOutcome::Ignored) => false,
            CommitOutcome::Advanced => false,
        }
    }
}

enum LoopAction {
    Continue,
    Exit,
}
