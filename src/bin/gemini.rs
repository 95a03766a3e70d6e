//! Gemini submitter binary entry point

use std::path::PathBuf;

use clap::Parser;

use prompt_submitter::services::{
    api_keys, ConsolePicker, GeminiClient, RealPromptStore, RealReportWriter,
    GEMINI_DEFAULT_MODEL,
};
use prompt_submitter::types::ProviderId;
use prompt_submitter::{logging, Submitter, SubmitterResult};

#[derive(Parser)]
#[command(name = "gemini-submitter")]
#[command(about = "Submit a prompt file to the Google Gemini API and save the response as markdown")]
struct Args {
    /// Name of the prompt file to use (without .txt extension)
    #[arg(long)]
    prompt: Option<String>,

    /// Path to the output markdown file (optional)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Gemini model to use
    #[arg(long, default_value = GEMINI_DEFAULT_MODEL)]
    model: String,
}

#[tokio::main]
async fn main() -> SubmitterResult<()> {
    logging::init_tracing();
    let args = Args::parse();

    let api_key = api_keys::load_api_key(ProviderId::Gemini);
    let client = GeminiClient::new(api_key).with_model(args.model);

    let submitter = Submitter::new(
        RealPromptStore::new(),
        ConsolePicker::new(),
        client,
        RealReportWriter::new(),
    );

    let path = submitter.run(args.prompt, args.output).await?;
    println!("Response saved to: {}", path.display());
    Ok(())
}
