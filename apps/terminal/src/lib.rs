pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod state;

use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{Command, FollowUp};
use crate::config::Config;
use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(
    name = "greek-drill",
    version,
    about = "Drill Classical Greek declensions, verbs and vocabulary"
)]
pub struct Cli {
    /// Directory holding declensions.md, verbs.md and vocabulary.md
    #[arg(long)]
    pub curriculum: Option<PathBuf>,

    /// JSON settings file
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// How long answer feedback is shown, in milliseconds
    #[arg(long)]
    pub feedback_delay_ms: Option<u64>,

    /// How long the "enter an answer" notice is shown, in milliseconds
    #[arg(long)]
    pub notice_delay_ms: Option<u64>,

    /// Questions per declension or verb quiz
    #[arg(long)]
    pub quiz_length: Option<usize>,

    /// Seed for question order
    #[arg(long)]
    pub seed: Option<u64>,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_cli(&cli)?;
    let curriculum = config::load_curriculum(config.curriculum_dir.as_deref())?;
    tracing::info!(
        source = %config
            .curriculum_dir
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "bundled".into()),
        "curriculum loaded"
    );

    let state = AppState::new(curriculum, config.settings, config.seed);
    drive(state, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}

/// Read commands from `input` until it ends or the user quits.
pub async fn drive<R, W>(mut state: AppState, input: R, mut output: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    emit(&mut output, &display::welcome(&state.curriculum)).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let reply = match Command::parse(&line, state.session.mode())
            .and_then(|command| commands::dispatch(&mut state, command))
        {
            Ok(reply) => reply,
            Err(e) if e.is_recoverable() => {
                tracing::warn!(error = %e, "command failed");
                emit(&mut output, &format!("error: {e}")).await?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        emit(&mut output, &reply.output).await?;
        match reply.follow_up {
            Some(FollowUp::Advance(delay)) => {
                tokio::time::sleep(delay).await;
                let next = commands::study::advance(&mut state)?;
                emit(&mut output, &next).await?;
            }
            Some(FollowUp::Redraw(delay)) => {
                tokio::time::sleep(delay).await;
                emit(&mut output, &display::screen(&state.session, &state.curriculum)).await?;
            }
            None => {}
        }
        if reply.quit {
            break;
        }
    }
    Ok(())
}

async fn emit<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> std::io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n\n").await?;
    output.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use greek_drill_core::{Curriculum, QuizSettings};

    fn instant() -> QuizSettings {
        QuizSettings {
            feedback_delay_ms: 0,
            notice_delay_ms: 0,
            ..QuizSettings::default()
        }
    }

    async fn transcript(curriculum: Curriculum, input: &str) -> String {
        let state = AppState::new(curriculum, instant(), Some(5));
        let mut output = Vec::new();
        drive(state, input.as_bytes(), &mut output).await.unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn welcome_and_quit() {
        let out = transcript(Curriculum::bundled().unwrap(), "quit\nlist\n").await;
        assert!(out.starts_with("Χαῖρε! (Welcome!)"));
        assert!(out.contains("Goodbye"));
        assert_eq!(out.matches("Declension Drills").count(), 1);
    }

    #[tokio::test]
    async fn errors_do_not_end_the_loop() {
        let out = transcript(Curriculum::bundled().unwrap(), "dance\nstart verb 99\nhelp\n").await;
        assert!(out.contains("error: Unknown command: dance"));
        assert!(out.contains("error: Session error: no verb lesson with id 99"));
        assert!(out.contains("Commands:"));
    }

    #[tokio::test]
    async fn single_word_lesson_to_results() {
        let curriculum =
            Curriculum::from_sources("", "", "ID: 1\nTitle: One word\n- καί | and\n").unwrap();
        let out = transcript(curriculum, "start vocab 1\n\nand\nmenu\n").await;
        assert!(out.contains("What does \"καί\" mean?"));
        assert!(out.contains("Enter an answer!"));
        assert!(out.contains("✨ Ἄριστα! (Excellent!)"));
        assert!(out.contains("Complete Mastery!"));
        assert!(out.contains("All 1 words mastered!"));
        assert!(out.contains("Completed in 1 round\n"));
    }

    #[tokio::test]
    async fn again_is_graded_as_an_answer() {
        let curriculum =
            Curriculum::from_sources("", "", "ID: 1\nTitle: W\n- αὖθις | again\n").unwrap();
        let out = transcript(curriculum, "start vocab 1\nagain\nagain\n").await;
        assert!(out.contains("What does \"αὖθις\" mean?"));
        assert!(out.contains("✨ Ἄριστα! (Excellent!)"));
        assert!(out.contains("Complete Mastery!"));
        // The second "again" is on the results screen, so it restarts the lesson.
        assert_eq!(out.matches("== W ==").count(), 2);
    }
}
