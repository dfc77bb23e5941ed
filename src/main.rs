use std::path::PathBuf;

use clap::Parser;
use learnquest_quiz::QuizRunner;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file holding the quiz definition
    #[arg(short, long)]
    quiz: PathBuf,
}

fn main() {
    let args = Args::parse();

    let runner = match QuizRunner::from_json(&args.quiz) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("Failed to load quiz: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runner.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
