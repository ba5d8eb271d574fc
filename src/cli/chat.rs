//! Interactive terminal chat.
//!
//! A blocking prompt loop over the answer pipeline: each submission runs
//! embed, retrieve, generate to completion before the next prompt is shown.
//! The transcript lives for the duration of the loop and is gone when the
//! process exits.

use crate::cli::output::Output;
use crate::memory::Transcript;
use crate::rag::AnswerPipeline;
use std::io::{BufRead, Write};
use std::sync::Arc;

const INPUT_HINT: &str = "Enter your question here... | અહીં તમારો પ્રશ્ન લખો...";

/// Run the interactive chat loop until EOF or an exit command.
pub async fn run(pipeline: Arc<AnswerPipeline>, output: &Output) -> anyhow::Result<()> {
    output.banner();
    output.instructions();
    output.info(INPUT_HINT);
    output.info("Type 'exit' or press Ctrl-D to quit.");
    println!();

    let stdin = std::io::stdin();
    let mut transcript = Transcript::new();
    let mut line = String::new();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if question.eq_ignore_ascii_case("exit") || question.eq_ignore_ascii_case("quit") {
            break;
        }

        match pipeline.chat_turn(&mut transcript, question).await {
            Ok(answer) => {
                output.answer(&answer.text);
                if !answer.matches.is_empty() {
                    output.info(&format!(
                        "Grounded on {} passage(s) from the tax-law index",
                        answer.matches.len()
                    ));
                }
            }
            Err(e) => output.error(&e.to_string()),
        }
    }

    output.success(&format!(
        "Session ended after {} completed turn(s).",
        transcript.completed_turns()
    ));
    Ok(())
}
