use std::{env, fs, process::ExitCode};

use job_recommender::{Profile, Recommender, RecommenderConfig};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let (jobs_path, profile_path) = match (args.next(), args.next()) {
        (Some(jobs), Some(profile)) => (jobs, profile),
        _ => {
            eprintln!("usage: job-recommender <jobs.json> <profile.json> [top_k]");
            return ExitCode::FAILURE;
        }
    };
    let top_k = args.next().and_then(|arg| arg.parse::<usize>().ok());

    let jobs_json = match fs::read_to_string(&jobs_path) {
        Ok(json) => json,
        Err(err) => {
            eprintln!("cannot read {jobs_path}: {err}");
            return ExitCode::FAILURE;
        }
    };
    let profile_value: serde_json::Value = match fs::read_to_string(&profile_path)
        .map_err(|err| err.to_string())
        .and_then(|json| serde_json::from_str(&json).map_err(|err| err.to_string()))
    {
        Ok(value) => value,
        Err(err) => {
            eprintln!("cannot read {profile_path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let recommender = Recommender::new(RecommenderConfig::default());
    if let Err(err) = recommender.load_json(&jobs_json) {
        eprintln!("cannot load jobs: {err}");
        return ExitCode::FAILURE;
    }
    if let Err(err) = recommender.fit() {
        eprintln!("cannot fit: {err}");
        return ExitCode::FAILURE;
    }

    let profile = Profile::from_value(&profile_value);
    match recommender.recommend(&profile, top_k, None) {
        Ok(results) => {
            for (rank, result) in results.iter().enumerate() {
                println!(
                    "{:>2}. {:.4}  {}  [{} / {}]",
                    rank + 1,
                    result.score,
                    result.job.title,
                    result.job.industry,
                    result.job.level,
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("recommendation failed: {err}");
            ExitCode::FAILURE
        }
    }
}
