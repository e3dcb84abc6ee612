//! Command-line definitions for the `refinery` binary.
//!
//! `refinery serve` runs the web server; `refinery prompt` builds the same prompt the form
//! would and prints it, or with `--send` prints what the completion requester returns.

use clap::{Parser, Subcommand, ValueEnum};
use refinery::{build_prompt, CompletionRequester, PromptForm, PromptInputs};

#[derive(Parser, Debug)]
#[command(name = "refinery")]
#[command(about = "Prompt Refinery: refine or generate prompts with a chat-completion model")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP server (default when no subcommand is given)
    Serve(ServeArgs),
    /// Build a prompt from flags and print it (or the completion with --send)
    Prompt(PromptArgs),
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Listen address (default: REFINERY_ADDR or 127.0.0.1:8000)
    #[arg(long, value_name = "ADDR")]
    pub addr: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeArg {
    #[default]
    Refine,
    Generate,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToneArg {
    #[default]
    Neutral,
    Friendly,
    Professional,
    Playful,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct PromptArgs {
    #[arg(long, value_enum, default_value_t = ModeArg::Refine)]
    pub mode: ModeArg,
    /// Base prompt to rewrite (refine mode)
    #[arg(long = "prompt", value_name = "TEXT", default_value = "")]
    pub original_prompt: String,
    /// Outcome the new prompt should achieve (generate mode)
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub goal: String,
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub audience: String,
    #[arg(long, value_enum, default_value_t = ToneArg::Neutral)]
    pub tone: ToneArg,
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub constraints: String,
    /// Send the prompt to the completion API instead of only printing it
    #[arg(long)]
    pub send: bool,
}

impl PromptArgs {
    /// Same normalisation as a form submission.
    pub fn inputs(&self) -> PromptInputs {
        let mode = match self.mode {
            ModeArg::Refine => "refine",
            ModeArg::Generate => "generate",
        };
        let tone = match self.tone {
            ToneArg::Neutral => "neutral",
            ToneArg::Friendly => "friendly",
            ToneArg::Professional => "professional",
            ToneArg::Playful => "playful",
        };
        PromptInputs::from(PromptForm {
            mode: mode.to_string(),
            original_prompt: self.original_prompt.clone(),
            goal: self.goal.clone(),
            audience: self.audience.clone(),
            tone: tone.to_string(),
            constraints: self.constraints.clone(),
        })
    }
}

/// Text printed by `refinery prompt`.
pub async fn run_prompt(args: &PromptArgs, requester: &CompletionRequester) -> String {
    let prompt = build_prompt(&args.inputs());
    if args.send {
        requester.complete(&prompt).await
    } else {
        prompt
    }
}
