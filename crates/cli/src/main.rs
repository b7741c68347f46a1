use clap::{Parser, Subcommand};
use medguide_core::{
    config::{core_config_from_env, ProducerMode},
    constants::{DISCLAIMER, EDUCATIONAL_WARNING, EMERGENCY_KEYWORDS},
    prompt::{user_context, SYSTEM_INSTRUCTION},
    Gender, GuidanceService, Outcome, Submission,
};

#[derive(Parser)]
#[command(name = "medguide")]
#[command(about = "Educational symptom guidance from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess symptoms and print guidance
    Assess {
        /// Patient age (0-120)
        #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
        age: i64,
        /// Patient gender: unspecified, male, female or other
        #[arg(long, default_value = "unspecified")]
        gender: Gender,
        /// Use the remote completion service regardless of MEDGUIDE_MODE
        #[arg(long)]
        live: bool,
        /// Symptom description
        symptoms: Vec<String>,
    },
    /// List the emergency keywords
    Keywords,
    /// Print the prompt the live producer would send
    Prompt {
        /// Patient age (0-120)
        #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
        age: i64,
        /// Patient gender: unspecified, male, female or other
        #[arg(long, default_value = "unspecified")]
        gender: Gender,
        /// Symptom description
        symptoms: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Assess {
            age,
            gender,
            live,
            symptoms,
        }) => {
            let mut cfg = core_config_from_env()?;
            if live {
                cfg = medguide_core::CoreConfig::new(ProducerMode::Live, cfg.completion().clone());
            }
            let service = GuidanceService::from_config(&cfg)?;

            println!("{EDUCATIONAL_WARNING}\n");
            let outcome = service
                .assess(Submission::new(age, gender, symptoms.join(" ")))
                .await;
            print_outcome(&outcome);
            let code = exit_code(&outcome);
            if code != 0 {
                std::process::exit(code);
            }
        }
        Some(Commands::Keywords) => {
            for keyword in EMERGENCY_KEYWORDS {
                println!("{keyword}");
            }
        }
        Some(Commands::Prompt {
            age,
            gender,
            symptoms,
        }) => {
            println!("{}", render_prompt(Submission::new(age, gender, symptoms.join(" ")))?);
        }
        None => {
            println!("Use 'medguide --help' for commands");
        }
    }

    Ok(())
}

/// Process exit status for an assessment: zero only when guidance was produced.
fn exit_code(outcome: &Outcome) -> i32 {
    match outcome {
        Outcome::Guidance(_) => 0,
        Outcome::Invalid(_) | Outcome::Emergency(_) | Outcome::Failed(_) => 1,
    }
}

fn render_prompt(submission: Submission) -> anyhow::Result<String> {
    let input = submission
        .validate()
        .map_err(|e| anyhow::anyhow!("Error building prompt: {e}"))?;
    Ok(format!(
        "--- system ---\n{SYSTEM_INSTRUCTION}\n\n--- user ---\n{}",
        user_context(&input)
    ))
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Invalid(msg) => eprintln!("{msg}"),
        Outcome::Emergency(notice) => {
            println!("!! {}\n", notice.headline);
            println!("{}", notice.call_prompt);
            for condition in notice.conditions {
                println!("  - {condition}");
            }
        }
        Outcome::Guidance(guidance) => {
            println!("Educational Medical Guidance ({} mode):\n", guidance.mode);
            println!("{}\n", guidance.text.trim());
            println!("---\n{DISCLAIMER}");
        }
        Outcome::Failed(msg) => eprintln!("Error: {msg}"),
    }
}
